//! Page behavior wiring for server-rendered pages.
//!
//! Three independent behaviors are attached to the loaded document:
//! modal overlay open/close (with backdrop-click and Escape dismissal),
//! auto-dismissal of flash notifications, and an outside-click guard for
//! the mobile sidebar. The markup itself is owned by the page templates;
//! this crate only wires listeners over it and toggles state classes.

pub mod dom;
pub mod flash;
pub mod modal;
pub mod sidebar;

use wasm_bindgen::prelude::*;

/// WASM entry point, runs once when the module is loaded by the page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    // Ignore error if already initialized
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("pagewire: wiring page behaviors");

    if let Err(err) = init() {
        log::error!("pagewire: initialization failed: {err:?}");
    }
}

/// Wires all three behaviors against the elements present right now.
///
/// Selection is a static snapshot: overlays and flash messages rendered
/// after this call are not covered until it is invoked again.
pub fn init() -> Result<(), JsValue> {
    let document = dom::document()?;
    modal::init(&document)?;
    flash::init(&document);
    sidebar::init(&document)?;
    Ok(())
}
