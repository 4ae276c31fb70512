#![cfg(target_arch = "wasm32")]
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod site;
mod view;

use site::{PageState, TrackerConfig};

/// A page rendered into its root element with all listeners attached.
///
/// Dropping it removes every listener and cancels the pending glow timer.
struct MountedPage {
    wiring: events::PageWiring,
    _listeners: Vec<EventListener>,
}

impl Drop for MountedPage {
    fn drop(&mut self) {
        self.wiring.glow_timer.borrow_mut().take();
        log::info!("[mount] page unmounted");
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<MountedPage>> = const { RefCell::new(None) };
}

fn mount_page(root_id: &str, config: TrackerConfig) -> anyhow::Result<MountedPage> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .get_element_by_id(root_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", root_id))?;

    root.set_inner_html(&site::markup::render_page(config.glow_size_px));

    let wiring = events::PageWiring {
        window,
        document,
        state: Rc::new(RefCell::new(PageState::new(config))),
        glow_timer: Rc::new(RefCell::new(None)),
    };
    view::sync_all(&wiring.document, &wiring.state.borrow());

    let listeners = events::wire_page_handlers(&wiring);

    // Armed once up front so the glow starts hidden even without movement.
    let ticket = wiring.state.borrow_mut().glow.arm();
    events::schedule_glow_hide(&wiring, ticket);

    log::info!(
        "[mount] rendered into #{} with {} listeners",
        root_id,
        listeners.len()
    );
    Ok(MountedPage {
        wiring,
        _listeners: listeners,
    })
}

/// Render the portfolio into the element with `root_id`, replacing any page
/// mounted earlier.
#[wasm_bindgen]
pub fn mount(root_id: &str) -> Result<(), JsValue> {
    // Tear the previous page down before its root gets overwritten.
    unmount();
    let page = mount_page(root_id, TrackerConfig::default())
        .map_err(|e| JsValue::from_str(&format!("{:?}", e)))?;
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

/// Remove all listeners and cancel the glow timer. No-op when nothing is
/// mounted.
#[wasm_bindgen]
pub fn unmount() {
    let page = MOUNTED.with(|slot| slot.borrow_mut().take());
    drop(page);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = mount(constants::ROOT_ID) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}
