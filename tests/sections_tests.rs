// Host-side tests for scroll-driven section detection.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod site {
    pub mod config {
        include!("../src/site/config.rs");
    }
    pub mod glow {
        include!("../src/site/glow.rs");
    }
    pub mod sections {
        include!("../src/site/sections.rs");
    }
    pub mod state {
        include!("../src/site/state.rs");
    }
}

use site::sections::*;
use site::state::PageState;

const LOOKAHEAD: f64 = 200.0;

// home(0) about(800) projects(1600); the remaining sections are not mounted
fn three_sections(section: Section) -> Option<f64> {
    match section {
        Section::Home => Some(0.0),
        Section::About => Some(800.0),
        Section::Projects => Some(1600.0),
        _ => None,
    }
}

// Every section mounted, 1000px apart
fn evenly_spaced(section: Section) -> Option<f64> {
    let index = Section::ALL.iter().position(|s| *s == section)?;
    Some(index as f64 * 1000.0)
}

#[test]
fn example_offsets_pick_expected_section() {
    assert_eq!(
        active_section_for(1450.0, LOOKAHEAD, three_sections),
        Section::Projects
    );
    assert_eq!(
        active_section_for(750.0, LOOKAHEAD, three_sections),
        Section::About
    );
    assert_eq!(
        active_section_for(50.0, LOOKAHEAD, three_sections),
        Section::Home
    );
}

#[test]
fn boundary_is_inclusive() {
    // about.top - 200 == 600
    assert_eq!(
        active_section_for(600.0, LOOKAHEAD, three_sections),
        Section::About
    );
    assert_eq!(
        active_section_for(599.9, LOOKAHEAD, three_sections),
        Section::Home
    );
}

#[test]
fn last_qualifying_section_wins() {
    // Far past the bottom: every section qualifies, contact is declared last
    assert_eq!(
        active_section_for(100_000.0, LOOKAHEAD, evenly_spaced),
        Section::Contact
    );
    // skills.top - 200 = 3800 <= 3900 < contact.top - 200 = 4800
    assert_eq!(
        active_section_for(3900.0, LOOKAHEAD, evenly_spaced),
        Section::Skills
    );
}

#[test]
fn matches_brute_force_scan_for_many_offsets() {
    for step in 0..=120 {
        let s = step as f64 * 50.0;
        let expected = Section::ALL[1..]
            .iter()
            .copied()
            .filter(|sec| evenly_spaced(*sec).is_some_and(|top| top - LOOKAHEAD <= s))
            .last()
            .unwrap_or(Section::Home);
        assert_eq!(
            active_section_for(s, LOOKAHEAD, evenly_spaced),
            expected,
            "offset {}",
            s
        );
    }
}

#[test]
fn unmounted_sections_are_skipped() {
    assert_eq!(
        active_section_for(10_000.0, LOOKAHEAD, |_| None),
        Section::Home
    );
    // experience/skills/contact missing: the scan falls through to projects
    assert_eq!(
        active_section_for(10_000.0, LOOKAHEAD, three_sections),
        Section::Projects
    );
}

#[test]
fn first_section_offset_is_never_queried() {
    let mut queried = Vec::new();
    let active = active_section_for(0.0, LOOKAHEAD, |section| {
        queried.push(section);
        evenly_spaced(section)
    });
    assert_eq!(active, Section::Home);
    assert!(!queried.contains(&Section::Home));
    // Scanned bottom-up
    assert_eq!(queried.first(), Some(&Section::Contact));
    assert_eq!(queried.last(), Some(&Section::About));
}

#[test]
fn scroll_handler_is_idempotent() {
    let mut state = PageState::default();
    let first = state.on_scroll(1450.0, three_sections).clone();
    let first_y = state.scroll_y;
    let second = state.on_scroll(1450.0, three_sections).clone();
    assert_eq!(first, second);
    assert_eq!(first_y, state.scroll_y);
    assert_eq!(state.active.id(), "projects");
}

#[test]
fn scroll_recomputes_from_scratch_in_any_order() {
    let mut state = PageState::default();
    for y in [4000.0, 20.0, 1450.0, 750.0, 1450.0] {
        state.on_scroll(y, three_sections);
    }
    assert_eq!(state.active, ActiveSection::Section(Section::Projects));
    assert_eq!(state.scroll_y, 1450.0);
}

#[test]
fn section_names_parse_case_insensitively() {
    assert_eq!("About".parse::<Section>(), Ok(Section::About));
    assert_eq!("contact".parse::<Section>(), Ok(Section::Contact));
    assert_eq!("SKILLS".parse::<Section>(), Ok(Section::Skills));
    let err = "Blog".parse::<Section>().unwrap_err();
    assert_eq!(err, UnknownSection("Blog".to_string()));
    assert_eq!(err.to_string(), "unknown section: \"Blog\"");
}

#[test]
fn ids_and_labels_agree() {
    for section in Section::ALL {
        assert_eq!(section.label().to_lowercase(), section.id());
        assert_eq!(section.to_string(), section.id());
    }
}

#[test]
fn active_section_from_unlisted_name_is_lowercased() {
    let active = ActiveSection::from_name("Blog");
    assert_eq!(active, ActiveSection::Unlisted("blog".to_string()));
    assert_eq!(active.id(), "blog");
    assert_eq!(active.section(), None);

    let known = ActiveSection::from_name("Experience");
    assert_eq!(known.section(), Some(Section::Experience));
    assert_eq!(ActiveSection::default().id(), "home");
}
