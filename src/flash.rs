//! Auto-dismissal of flash notifications.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::Document;

/// Marker class on transient notification elements.
pub const FLASH_SELECTOR: &str = ".flash-message";
/// How long a flash message stays on screen.
pub const DISMISS_AFTER_MS: u32 = 4_000;

/// Schedules a one-shot hide for every flash message present right now.
///
/// The timer cannot be cancelled; it always fires unless the page is torn
/// down first. Messages rendered after this call are not covered until it
/// is invoked again.
pub fn init(document: &Document) {
    for element in crate::dom::query_all(document, FLASH_SELECTOR) {
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        Timeout::new(DISMISS_AFTER_MS, move || {
            // Removes the message from layout, not from the document.
            // Harmless if the element was already detached.
            let _ = element.style().set_property("display", "none");
        })
        .forget();
    }
}
