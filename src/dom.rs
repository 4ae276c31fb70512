use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Document-relative top of the element with `id`, or `None` if it is not
/// mounted.
#[inline]
pub fn section_top(document: &web::Document, id: &str) -> Option<f64> {
    html_element_by_id(document, id).map(|el| el.offset_top() as f64)
}

/// Smoothly scroll the element with `id` to the top of the viewport.
/// Returns `false` (and does nothing) if the element does not exist.
pub fn smooth_scroll_to(document: &web::Document, id: &str) -> bool {
    let Some(el) = document.get_element_by_id(id) else {
        return false;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}

#[inline]
pub fn set_class_by_id(document: &web::Document, id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        set_class(&el, class, on);
    }
}

/// Nearest ancestor-or-self of the event target matching `selector`.
pub fn closest_from_event(ev: &web::Event, selector: &str) -> Option<web::Element> {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
}
