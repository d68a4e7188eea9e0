use log::debug;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Absolute scroll position that puts an element's top edge just below the
/// fixed navigation.
pub fn scroll_target(element_top: f64, page_y_offset: f64, nav_offset: f64) -> f64 {
    element_top + page_y_offset - nav_offset
}

/// `None` (no scroll) when the target did not resolve to an element.
pub fn plan_scroll(element_top: Option<f64>, page_y_offset: f64, nav_offset: f64) -> Option<f64> {
    element_top.map(|top| scroll_target(top, page_y_offset, nav_offset))
}

/// Smooth-scrolls to the element with `id`. Returns false, without
/// scrolling, when there is no such element.
pub fn scroll_to_section(id: &str, nav_offset: f64) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let element_top = window
        .document()
        .and_then(|document| document.get_element_by_id(id))
        .map(|element| element.get_bounding_client_rect().top());
    let page_y_offset = window.page_y_offset().unwrap_or(0.0);

    let Some(top) = plan_scroll(element_top, page_y_offset, nav_offset) else {
        debug!("no section with id {} on this page", id);
        return false;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Scrolls to the section named by the URL hash, if it exists. Used when a
/// page is entered through a `/#section` link.
pub fn scroll_to_location_hash(nav_offset: f64) -> bool {
    let hash = web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default();
    match hash.strip_prefix('#').filter(|id| !id.is_empty()) {
        Some(id) => scroll_to_section(id, nav_offset),
        None => false,
    }
}
