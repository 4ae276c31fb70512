use super::PageWiring;
use crate::site::glow::drives_glow;
use crate::site::TimerTicket;
use crate::view;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer(w: &PageWiring) -> Vec<EventListener> {
    let mut listeners = vec![wire_pointermove(w)];
    listeners.extend(wire_pointerleave(w));
    listeners
}

fn wire_pointermove(w: &PageWiring) -> EventListener {
    let window = w.window.clone();
    let w = w.clone();
    EventListener::new(&window, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if !drives_glow(&ev.pointer_type()) {
            return;
        }
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        let ticket = {
            let mut state = w.state.borrow_mut();
            let was_visible = state.glow.is_visible();
            let ticket = state.glow.on_move(x, y);
            if !was_visible {
                log::debug!("[glow] shown at ({x:.0},{y:.0})");
            }
            view::sync_glow(&w.document, &state);
            ticket
        };
        schedule_glow_hide(&w, ticket);
    })
}

// `pointerleave` does not fire on `window`; the root element receives it when
// the pointer exits the viewport.
fn wire_pointerleave(w: &PageWiring) -> Option<EventListener> {
    let root = w.document.document_element()?;
    let w = w.clone();
    Some(EventListener::new(&root, "pointerleave", move |_ev| {
        let mut state = w.state.borrow_mut();
        if state.glow.on_leave() {
            log::debug!("[glow] hidden (pointer left)");
            view::sync_glow(&w.document, &state);
        }
    }))
}

/// Replace the pending hide timer with one for `ticket`.
pub fn schedule_glow_hide(w: &PageWiring, ticket: TimerTicket) {
    let delay_ms = w.state.borrow().config.glow_hide_delay_ms;
    // The callback must not capture `glow_timer`, or the slot would keep
    // itself alive.
    let state = w.state.clone();
    let document = w.document.clone();
    let timeout = Timeout::new(delay_ms, move || {
        let mut state = state.borrow_mut();
        if state.glow.on_timeout(ticket) {
            log::debug!("[glow] hidden after {delay_ms}ms idle");
            view::sync_glow(&document, &state);
        }
    });
    // Dropping the previous `Timeout` clears it.
    *w.glow_timer.borrow_mut() = Some(timeout);
}
