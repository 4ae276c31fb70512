use super::PageWiring;
use crate::dom;
use crate::view;
use gloo::events::EventListener;

pub fn wire_scroll(w: &PageWiring) -> EventListener {
    let window = w.window.clone();
    let w = w.clone();
    EventListener::new(&window, "scroll", move |_ev| {
        let scroll_y = w.window.scroll_y().unwrap_or_default();
        let mut state = w.state.borrow_mut();
        let previous = state.active.clone();
        let active = state.on_scroll(scroll_y, |section| {
            dom::section_top(&w.document, section.id())
        });
        if *active != previous {
            log::debug!("[scroll] active={} y={:.0}", active.id(), scroll_y);
        }
        view::sync_nav(&w.document, &state);
        view::sync_navbar(&w.document, &state);
    })
}
