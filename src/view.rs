use crate::constants::{
    CLASS_ACTIVE, CLASS_HIDDEN, CLASS_SOLID, GLOW_ID, MENU_TOGGLE_ID, MOBILE_MENU_ID, NAVBAR_ID,
};
use crate::dom;
use crate::site::markup::{nav_link_id, MENU_ICON_CLOSED, MENU_ICON_OPEN};
use crate::site::sections::Section;
use crate::site::PageState;
use web_sys as web;

/// Highlight the desktop nav button of the active section.
pub fn sync_nav(document: &web::Document, state: &PageState) {
    let active = state.active.section();
    for section in Section::ALL {
        let on = active == Some(section);
        dom::set_class_by_id(document, &nav_link_id(section.id()), CLASS_ACTIVE, on);
    }
}

#[inline]
pub fn sync_navbar(document: &web::Document, state: &PageState) {
    dom::set_class_by_id(document, NAVBAR_ID, CLASS_SOLID, state.navbar_solid());
}

pub fn sync_menu(document: &web::Document, state: &PageState) {
    dom::set_class_by_id(document, MOBILE_MENU_ID, CLASS_HIDDEN, !state.menu_open);
    if let Some(toggle) = document.get_element_by_id(MENU_TOGGLE_ID) {
        let icon = if state.menu_open {
            MENU_ICON_OPEN
        } else {
            MENU_ICON_CLOSED
        };
        toggle.set_text_content(Some(icon));
        _ = toggle.set_attribute("aria-expanded", if state.menu_open { "true" } else { "false" });
    }
}

pub fn sync_glow(document: &web::Document, state: &PageState) {
    let Some(el) = dom::html_element_by_id(document, GLOW_ID) else {
        return;
    };
    let glow = state.glow.state();
    if glow.visible {
        let style = el.style();
        _ = style.set_property("left", &format!("{}px", glow.x));
        _ = style.set_property("top", &format!("{}px", glow.y));
    }
    dom::set_class(&el, CLASS_HIDDEN, !glow.visible);
}

/// Bring every dynamic element in line with `state`.
pub fn sync_all(document: &web::Document, state: &PageState) {
    sync_nav(document, state);
    sync_navbar(document, state);
    sync_menu(document, state);
    sync_glow(document, state);
}
