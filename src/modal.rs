//! Modal overlay controller.
//!
//! Overlays are marked with the `modal-overlay` class; the visible state is
//! the presence of the `active` class. While any overlay is active the page
//! behind it must not scroll, so the body overflow is overridden on open and
//! cleared again on every close path.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, KeyboardEvent};

/// Marker class shared by all overlay elements.
pub const OVERLAY_SELECTOR: &str = ".modal-overlay";
/// Overlays currently shown.
pub const ACTIVE_OVERLAY_SELECTOR: &str = ".modal-overlay.active";
/// Presence of this class makes an overlay visible.
pub const ACTIVE_CLASS: &str = "active";

/// Shows the overlay with the given id and locks page scrolling.
///
/// Unknown ids are ignored apart from a log line; the page templates decide
/// which overlays exist.
#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(id: &str) {
    let Ok(document) = crate::dom::document() else {
        return;
    };
    match document.get_element_by_id(id) {
        Some(overlay) => {
            let _ = overlay.class_list().add_1(ACTIVE_CLASS);
            lock_scroll(&document);
        }
        None => log::warn!("openModal: no element with id {id:?}"),
    }
}

/// Hides the overlay with the given id and restores page scrolling.
///
/// Scroll restore does not check for other active overlays; only one is
/// expected active at a time and clearing the override is always safe.
#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(id: &str) {
    let Ok(document) = crate::dom::document() else {
        return;
    };
    match document.get_element_by_id(id) {
        Some(overlay) => {
            let _ = overlay.class_list().remove_1(ACTIVE_CLASS);
            unlock_scroll(&document);
        }
        None => log::warn!("closeModal: no element with id {id:?}"),
    }
}

/// Registers backdrop-click dismissal on every overlay present right now,
/// plus one document-level Escape handler covering all of them.
pub fn init(document: &Document) -> Result<(), JsValue> {
    for overlay in crate::dom::query_all(document, OVERLAY_SELECTOR) {
        let doc = document.clone();
        let this_overlay = overlay.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            // Only a click landing on the overlay element itself is a
            // backdrop hit; clicks on nested dialog content bubble up here
            // with a different target and must not dismiss.
            let hit_backdrop = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .is_some_and(|target| target == this_overlay);
            if hit_backdrop {
                let _ = this_overlay.class_list().remove_1(ACTIVE_CLASS);
                unlock_scroll(&doc);
            }
        });
        overlay.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    let doc = document.clone();
    let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if !is_escape(&event.key()) {
            return;
        }
        for overlay in crate::dom::query_all(&doc, ACTIVE_OVERLAY_SELECTOR) {
            let _ = overlay.class_list().remove_1(ACTIVE_CLASS);
        }
        // Restored once, however many overlays were open.
        unlock_scroll(&doc);
    });
    document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_keydown.forget();

    Ok(())
}

fn lock_scroll(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.style().set_property("overflow", "hidden");
    }
}

fn unlock_scroll(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.style().remove_property("overflow");
    }
}

/// `true` for the key value carried by an Escape press.
pub(crate) fn is_escape(key: &str) -> bool {
    key == "Escape"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_escape_matches_key_value() {
        assert!(is_escape("Escape"));
    }

    #[test]
    fn test_is_escape_rejects_other_keys() {
        assert!(!is_escape("Enter"));
        assert!(!is_escape("Esc"));
        assert!(!is_escape(""));
    }
}
