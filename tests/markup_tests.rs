// Host-side tests for the static page markup.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod site {
    pub mod content {
        include!("../src/site/content.rs");
    }
    pub mod markup {
        include!("../src/site/markup.rs");
    }
    pub mod sections {
        include!("../src/site/sections.rs");
    }
}

use constants::*;
use site::content::*;
use site::markup::*;
use site::sections::Section;

fn page() -> String {
    render_page(GLOW_SIZE_PX)
}

#[test]
fn every_section_rendered_once_in_order() {
    let html = page();
    let mut last = 0;
    for section in Section::ALL {
        let needle = format!("<section id='{}'", section.id());
        assert_eq!(html.matches(&needle).count(), 1, "{}", section.id());
        let at = html.find(&needle).unwrap();
        assert!(at >= last, "{} out of order", section.id());
        last = at;
    }
}

#[test]
fn nav_items_match_sections() {
    assert_eq!(NAV_ITEMS.len(), Section::ALL.len());
    for (item, section) in NAV_ITEMS.iter().zip(Section::ALL) {
        assert_eq!(item.name, section.label());
    }
}

#[test]
fn one_desktop_and_one_mobile_button_per_nav_item() {
    let html = page();
    for item in NAV_ITEMS {
        let id = nav_link_id(&item.name.to_lowercase());
        assert_eq!(html.matches(&format!("id='{}'", id)).count(), 1);
        let nav = format!("{}='{}'>{}</button>", NAV_ATTR, item.name, item.name);
        assert_eq!(html.matches(&nav).count(), 2, "{}", item.name);
    }
}

#[test]
fn initial_dynamic_state_is_rendered() {
    let html = page();
    assert!(html.contains("id='nav-link-home' class='nav-link active'"));
    assert!(html.contains("id='nav-link-about' class='nav-link'"));
    assert!(html.contains(&format!("id='{}' class='mobile-menu hidden'", MOBILE_MENU_ID)));
    assert!(html.contains(&format!("id='{}' class='cursor-glow hidden'", GLOW_ID)));
    assert!(html.contains("width:100px;height:100px"));
    assert!(html.contains(MENU_ICON_CLOSED));
}

#[test]
fn hero_scroll_hint_targets_about() {
    let html = page();
    assert!(html.contains(&format!("class='scroll-hint' {}='About'", NAV_ATTR)));
}

#[test]
fn all_content_appears() {
    let html = page();
    for project in PROJECTS {
        assert!(html.contains(&escape_html(project.title)));
        for tech in project.tech {
            assert!(html.contains(&format!("<span class='tag'>{}</span>", escape_html(tech))));
        }
        for highlight in project.highlights {
            assert!(html.contains(&escape_html(highlight)));
        }
    }
    for category in SKILLS {
        assert!(html.contains(&escape_html(category.name)));
        for skill in category.skills {
            assert!(html.contains(&format!("<span class='skill'>{}</span>", escape_html(skill))));
        }
    }
    for achievement in ACHIEVEMENTS {
        assert!(html.contains(&escape_html(achievement)));
    }
    assert!(html.contains(&escape_html(EXPERIENCE[0].company)));
    assert!(html.contains(&PROFILE.full_name()));
}

#[test]
fn contact_links_use_expected_schemes() {
    let html = page();
    assert!(html.contains("href='mailto:mhs.sakarwala@gmail.com' class='card contact email'>"));
    assert!(html.contains("href='tel:+918779919850' class='card contact phone'>"));
    assert!(html.contains(
        "class='card contact linkedin' target='_blank' rel='noopener noreferrer'>"
    ));
    assert!(!CONTACTS[0].is_external());
    assert!(!CONTACTS[1].is_external());
    assert!(CONTACTS[2].is_external());
}

#[test]
fn external_profile_links_open_in_new_context() {
    let html = page();
    for link in PROFILE.links {
        let anchor = format!(
            "<a href='{}' class='hero-link' target='_blank' rel='noopener noreferrer'>{}</a>",
            link.href, link.label
        );
        assert!(html.contains(&anchor), "{}", link.label);
    }
}

#[test]
fn escape_html_handles_metacharacters() {
    assert_eq!(
        escape_html("<a href=\"x\">Tom & Jerry's</a>"),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain – text"), "plain – text");
}

#[test]
fn content_is_escaped_in_page() {
    let html = page();
    // Raw '&' and quotes from content never reach the markup
    assert!(html.contains("Computer Engineering Student &amp; Full-Stack Developer"));
    assert!(html.contains("Jupyter Notebook"));
    assert!(!html.contains("Student & Full"));
    assert!(html.contains("DJ Sanghvi&#39;s magazine"));
}
