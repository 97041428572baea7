//! Thin lookup helpers over the live document.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

/// Global document handle. Fails only outside a browser context.
pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document in this context"))
}

/// Snapshot of every element matching `selector` at call time.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut found = Vec::new();
    if let Ok(nodes) = document.query_selector_all(selector) {
        for index in 0..nodes.length() {
            if let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
                found.push(element);
            }
        }
    }
    found
}
