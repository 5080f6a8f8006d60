//! Shrinks the page's `<header>` on scroll. Load the generated module from any
//! page that styles `header.shrunken`.

use std::cell::RefCell;
use std::rc::Rc;

use shrink_header::web::{WebDocument, WebScrollHost};
use shrink_header::{ShrinkConfig, attach};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let mut host = WebScrollHost::from_window().map_err(|err| JsValue::from_str(&err.to_string()))?;
    let document = WebDocument::from_window().map_err(|err| JsValue::from_str(&err.to_string()))?;

    let subscription = attach(
        &mut host,
        Rc::new(RefCell::new(document)),
        ShrinkConfig::default(),
    )
    .map_err(|err| JsValue::from_str(&err.to_string()))?;

    // The listener lives as long as the page does
    subscription.leak();

    tracing::info!("Header shrink listener attached");
    Ok(())
}
