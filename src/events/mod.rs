mod nav;
mod pointer;
mod scroll;

use crate::site::PageState;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub use pointer::schedule_glow_hide;

/// Handles shared by every page listener.
#[derive(Clone)]
pub struct PageWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub state: Rc<RefCell<PageState>>,
    // Holds the single pending glow-hide timer; replacing or clearing the slot
    // cancels the previous one.
    pub glow_timer: Rc<RefCell<Option<Timeout>>>,
}

/// Register every page listener. Dropping the returned handles removes them.
pub fn wire_page_handlers(w: &PageWiring) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(5);
    listeners.push(scroll::wire_scroll(w));
    listeners.extend(pointer::wire_pointer(w));
    listeners.push(nav::wire_clicks(w));
    listeners
}
