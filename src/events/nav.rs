use super::PageWiring;
use crate::constants::{MENU_TOGGLE_ID, NAV_ATTR};
use crate::dom;
use crate::view;
use gloo::events::EventListener;

/// One delegated click listener for nav buttons, the hero scroll hint and
/// the mobile menu toggle.
pub fn wire_clicks(w: &PageWiring) -> EventListener {
    let document = w.document.clone();
    let w = w.clone();
    let nav_selector = format!("[{NAV_ATTR}]");
    let toggle_selector = format!("#{MENU_TOGGLE_ID}");
    EventListener::new(&document, "click", move |ev| {
        if let Some(target) = dom::closest_from_event(ev, &nav_selector) {
            if let Some(name) = target.get_attribute(NAV_ATTR) {
                scroll_to_section(&w, &name);
            }
        } else if dom::closest_from_event(ev, &toggle_selector).is_some() {
            let open = w.state.borrow_mut().toggle_menu();
            log::debug!("[menu] open={open}");
            view::sync_menu(&w.document, &w.state.borrow());
        }
    })
}

/// Mark `name` active right away, close the menu, then smooth-scroll to the
/// matching section if it exists.
pub fn scroll_to_section(w: &PageWiring, name: &str) {
    let target_id = {
        let mut state = w.state.borrow_mut();
        let id = state.navigate(name);
        view::sync_nav(&w.document, &state);
        view::sync_menu(&w.document, &state);
        id
    };
    if dom::smooth_scroll_to(&w.document, &target_id) {
        log::info!("[nav] scrolling to #{target_id}");
    } else {
        log::warn!("[nav] no element #{target_id}; scroll skipped");
    }
}
