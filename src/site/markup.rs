use super::content::{
    ContactKind, ContactLink, Education, Experience, Profile, Project, SkillCategory,
    ACHIEVEMENTS, CONTACTS, CONTACT_BLURB, COPYRIGHT_YEAR, EDUCATION, EXPERIENCE, NAV_ITEMS,
    PROFILE, PROJECTS, SKILLS,
};
use super::sections::Section;
use crate::constants::{GLOW_ID, MENU_TOGGLE_ID, MOBILE_MENU_ID, NAVBAR_ID, NAV_ATTR};

pub const MENU_ICON_OPEN: &str = "\u{2715}"; // ✕
pub const MENU_ICON_CLOSED: &str = "\u{2630}"; // ☰

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Id of the desktop nav button for a section id.
pub fn nav_link_id(section_id: &str) -> String {
    format!("nav-link-{}", section_id)
}

/// Render the whole page. Dynamic state (active link, menu, glow, navbar
/// background) starts at its initial value and is toggled by the view later.
pub fn render_page(glow_size_px: u32) -> String {
    let mut html = String::new();
    html.push_str(&render_glow(glow_size_px));
    html.push_str(&render_nav(&PROFILE));
    html.push_str(&render_hero(&PROFILE));
    html.push_str(&render_about(EDUCATION, ACHIEVEMENTS));
    html.push_str(&render_projects(PROJECTS));
    html.push_str(&render_experience(EXPERIENCE));
    html.push_str(&render_skills(SKILLS));
    html.push_str(&render_contact(CONTACTS));
    html.push_str(&render_footer(&PROFILE));
    html
}

fn render_glow(size_px: u32) -> String {
    format!(
        "<div id='{GLOW_ID}' class='cursor-glow hidden' aria-hidden='true' \
         style='left:0px;top:0px;width:{size_px}px;height:{size_px}px;transform:translate(-50%,-50%)'></div>"
    )
}

fn nav_button(name: &str, class: &str, id: Option<&str>) -> String {
    let id_attr = id.map(|id| format!(" id='{}'", id)).unwrap_or_default();
    format!(
        "<button type='button'{id_attr} class='{class}' {NAV_ATTR}='{name}'>{name}</button>",
        name = escape_html(name),
    )
}

fn render_nav(profile: &Profile) -> String {
    let desktop: String = NAV_ITEMS
        .iter()
        .map(|item| {
            let id = nav_link_id(&item.name.to_lowercase());
            let class = if item.name.eq_ignore_ascii_case(Section::Home.id()) {
                "nav-link active"
            } else {
                "nav-link"
            };
            nav_button(item.name, class, Some(&id))
        })
        .collect();
    let mobile: String = NAV_ITEMS
        .iter()
        .map(|item| nav_button(item.name, "mobile-nav-link", None))
        .collect();
    format!(
        "<nav id='{NAVBAR_ID}' class='navbar'>\
           <div class='nav-inner'>\
             <div class='brand'>{initials}</div>\
             <div class='nav-links'>{desktop}</div>\
             <button type='button' id='{MENU_TOGGLE_ID}' class='menu-toggle' aria-expanded='false' \
               aria-controls='{MOBILE_MENU_ID}'>{MENU_ICON_CLOSED}</button>\
           </div>\
           <div id='{MOBILE_MENU_ID}' class='mobile-menu hidden'>{mobile}</div>\
         </nav>",
        initials = escape_html(profile.initials),
    )
}

fn external_link(label: &str, href: &str, class: &str) -> String {
    format!(
        "<a href='{href}' class='{class}' target='_blank' rel='noopener noreferrer'>{label}</a>",
        href = escape_html(href),
        label = escape_html(label),
    )
}

fn render_hero(profile: &Profile) -> String {
    let links: String = profile
        .links
        .iter()
        .map(|link| external_link(link.label, link.href, "hero-link"))
        .collect();
    format!(
        "<section id='{id}' class='section hero'>\
           <div class='hero-text'>\
             <h1>{first}<br><span class='accent'>{last}</span></h1>\
             <p class='headline'>{headline}</p>\
             <p class='summary'>{summary}</p>\
             <div class='hero-links'>{links}</div>\
           </div>\
           <div class='hero-badge' aria-hidden='true'>{initials}</div>\
           <button type='button' class='scroll-hint' {NAV_ATTR}='{next}' aria-label='Scroll to {next}'>\u{2304}</button>\
         </section>",
        id = Section::Home.id(),
        first = escape_html(profile.first_name),
        last = escape_html(profile.last_name),
        headline = escape_html(profile.headline),
        summary = escape_html(profile.summary),
        initials = escape_html(profile.initials),
        next = Section::About.label(),
    )
}

fn render_education(entry: &Education) -> String {
    let field = entry
        .field
        .map(|f| format!("<p class='muted'>{}</p>", escape_html(f)))
        .unwrap_or_default();
    format!(
        "<div class='education'>\
           <h4>{degree}</h4>{field}\
           <p class='muted'>{institution} | {period}</p>\
           <p class='score'>{score}</p>\
         </div>",
        degree = escape_html(entry.degree),
        institution = escape_html(entry.institution),
        period = escape_html(entry.period),
        score = escape_html(entry.score),
    )
}

fn render_about(education: &[Education], achievements: &[&str]) -> String {
    let education: String = education.iter().map(render_education).collect();
    let achievements: String = achievements
        .iter()
        .map(|a| format!("<li>{}</li>", escape_html(a)))
        .collect();
    format!(
        "<section id='{id}' class='section'>\
           <h2>About Me</h2>\
           <div class='grid two'>\
             <div class='card'><h3>Education</h3>{education}</div>\
             <div class='card'><h3>Achievements</h3><ul class='achievements'>{achievements}</ul></div>\
           </div>\
         </section>",
        id = Section::About.id(),
    )
}

fn bullet_list(items: &[&str]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!("<ul class='highlights'>{}</ul>", items)
}

fn render_project(project: &Project) -> String {
    let tech: String = project
        .tech
        .iter()
        .map(|t| format!("<span class='tag'>{}</span>", escape_html(t)))
        .collect();
    format!(
        "<article class='card project'>\
           <header><h3>{title}</h3><span class='period'>{period}</span></header>\
           <div class='tags'>{tech}</div>\
           <p>{description}</p>{highlights}\
         </article>",
        title = escape_html(project.title),
        period = escape_html(project.period),
        description = escape_html(project.description),
        highlights = bullet_list(project.highlights),
    )
}

fn render_projects(projects: &[Project]) -> String {
    let cards: String = projects.iter().map(render_project).collect();
    format!(
        "<section id='{id}' class='section'><h2>Featured Projects</h2><div class='stack'>{cards}</div></section>",
        id = Section::Projects.id(),
    )
}

fn render_experience(entries: &[Experience]) -> String {
    let cards: String = entries
        .iter()
        .map(|e| {
            format!(
                "<article class='card'>\
                   <header><div><h3>{role}</h3><p class='company'>{company}</p></div>\
                   <span class='period'>{period}</span></header>{highlights}\
                 </article>",
                role = escape_html(e.role),
                company = escape_html(e.company),
                period = escape_html(e.period),
                highlights = bullet_list(e.highlights),
            )
        })
        .collect();
    format!(
        "<section id='{id}' class='section'><h2>Experience</h2>{cards}</section>",
        id = Section::Experience.id(),
    )
}

fn render_skills(categories: &[SkillCategory]) -> String {
    let cards: String = categories
        .iter()
        .map(|c| {
            let skills: String = c
                .skills
                .iter()
                .map(|s| format!("<span class='skill'>{}</span>", escape_html(s)))
                .collect();
            format!(
                "<div class='card'><h3>{}</h3><div class='tags'>{}</div></div>",
                escape_html(c.name),
                skills
            )
        })
        .collect();
    format!(
        "<section id='{id}' class='section'><h2>Technical Skills</h2><div class='grid three'>{cards}</div></section>",
        id = Section::Skills.id(),
    )
}

fn contact_class(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Email => "card contact email",
        ContactKind::Phone => "card contact phone",
        ContactKind::LinkedIn => "card contact linkedin",
    }
}

fn render_contact_link(link: &ContactLink) -> String {
    let target = if link.is_external() {
        " target='_blank' rel='noopener noreferrer'"
    } else {
        ""
    };
    format!(
        "<a href='{href}' class='{class}'{target}>\
           <p class='contact-label'>{label}</p><p class='contact-detail'>{detail}</p>\
         </a>",
        href = escape_html(link.href),
        class = contact_class(link.kind),
        label = escape_html(link.label),
        detail = escape_html(link.detail),
    )
}

fn render_contact(links: &[ContactLink]) -> String {
    let cards: String = links.iter().map(render_contact_link).collect();
    format!(
        "<section id='{id}' class='section'>\
           <h2>Get In Touch</h2><p class='blurb'>{blurb}</p>\
           <div class='grid three'>{cards}</div>\
         </section>",
        id = Section::Contact.id(),
        blurb = escape_html(CONTACT_BLURB),
    )
}

fn render_footer(profile: &Profile) -> String {
    format!(
        "<footer class='footer'>\
           <p>Designed &amp; Built by {name}</p>\
           <p class='muted'>&copy; {COPYRIGHT_YEAR} All rights reserved</p>\
         </footer>",
        name = escape_html(&profile.full_name()),
    )
}
