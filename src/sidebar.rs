//! Outside-click guard for the mobile sidebar.
//!
//! The sidebar is opened by its own toggle control (wired in the page
//! markup); this module only closes it again when a click lands outside
//! both the panel and the toggle.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, Node};

/// Id of the sidebar panel element.
pub const SIDEBAR_ID: &str = "sidebar";
/// Selector for the toggle ("hamburger") control.
pub const TOGGLE_SELECTOR: &str = ".hamburger";
/// Presence of this class means the sidebar is open.
pub const OPEN_CLASS: &str = "open";

/// Registers the document-level click guard.
pub fn init(document: &Document) -> Result<(), JsValue> {
    let doc = document.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        // The sidebar only exists on narrow viewports; without it (or
        // without its toggle) the guard simply does not apply.
        let Some(sidebar) = doc.get_element_by_id(SIDEBAR_ID) else {
            return;
        };
        let Some(toggle) = doc.query_selector(TOGGLE_SELECTOR).ok().flatten() else {
            return;
        };

        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let open = sidebar.class_list().contains(OPEN_CLASS);
        let inside_sidebar = sidebar.contains(target.as_ref());
        let inside_toggle = toggle.contains(target.as_ref());

        if should_close(open, inside_sidebar, inside_toggle) {
            let _ = sidebar.class_list().remove_1(OPEN_CLASS);
        }
    });
    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// An open sidebar closes only on clicks outside both subtrees.
pub(crate) fn should_close(open: bool, inside_sidebar: bool, inside_toggle: bool) -> bool {
    open && !inside_sidebar && !inside_toggle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closes_on_outside_click_when_open() {
        assert!(should_close(true, false, false));
    }

    #[test]
    fn test_stays_open_on_inside_clicks() {
        assert!(!should_close(true, true, false));
        assert!(!should_close(true, false, true));
        assert!(!should_close(true, true, true));
    }

    #[test]
    fn test_ignores_clicks_while_closed() {
        assert!(!should_close(false, false, false));
        assert!(!should_close(false, true, false));
    }
}
