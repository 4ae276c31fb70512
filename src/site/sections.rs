use std::fmt;
use std::str::FromStr;

/// Vertically stacked content blocks, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Experience,
    Skills,
    Contact,
}

impl Section {
    /// Declared order; also the order sections are scanned in.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Skills,
        Section::Contact,
    ];

    /// Element id of the section in the rendered page.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: {0:?}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    // Case-insensitive so nav labels ("About") and ids ("about") both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.id() == lowered)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Section currently considered "in view".
///
/// Navigation updates this optimistically from whatever name was clicked, so
/// besides the declared sections it can hold a name with no matching section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Section(Section),
    Unlisted(String),
}

impl ActiveSection {
    /// Lowercases `name` and maps it onto a declared section when possible.
    pub fn from_name(name: &str) -> Self {
        match name.parse::<Section>() {
            Ok(section) => ActiveSection::Section(section),
            Err(UnknownSection(_)) => ActiveSection::Unlisted(name.to_lowercase()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ActiveSection::Section(section) => section.id(),
            ActiveSection::Unlisted(name) => name,
        }
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            ActiveSection::Section(section) => Some(*section),
            ActiveSection::Unlisted(_) => None,
        }
    }
}

impl Default for ActiveSection {
    fn default() -> Self {
        ActiveSection::Section(Section::Home)
    }
}

/// Pick the active section for a scroll offset.
///
/// Scans every section after the first from the bottom up and returns the
/// first whose top, less `lookahead`, has been scrolled past. `top_of` returns
/// `None` for sections not present in the document; those are skipped.
pub fn active_section_for(
    scroll_y: f64,
    lookahead: f64,
    mut top_of: impl FnMut(Section) -> Option<f64>,
) -> Section {
    for section in Section::ALL[1..].iter().rev().copied() {
        if let Some(top) = top_of(section) {
            if scroll_y >= top - lookahead {
                return section;
            }
        }
    }
    Section::ALL[0]
}
