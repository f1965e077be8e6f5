//! WASM bindings for in-browser hyphenation.
//!
//! This module exposes the hyphenator to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::{Hyphenator, HyphenatorOptions, SoftHyphen};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Hyphenate plain text or an HTML fragment.
///
/// With `entity` set, breaks are written as `&shy;` instead of U+00AD.
#[wasm_bindgen]
pub fn hyphenate(text: &str, entity: bool) -> String {
    let soft_hyphen = if entity {
        SoftHyphen::Entity
    } else {
        SoftHyphen::Char
    };
    Hyphenator::new(HyphenatorOptions { soft_hyphen }).hyphenate(text)
}

/// Hyphenate UTF-8 bytes, rejecting anything that is not valid UTF-8.
#[wasm_bindgen]
pub fn hyphenate_bytes(data: &[u8]) -> Result<String, JsValue> {
    crate::hyphenate_bytes(data).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Break positions (char offsets) of a single word.
#[wasm_bindgen]
pub fn break_positions(word: &str) -> Vec<u32> {
    crate::break_positions(word)
        .into_iter()
        .map(|p| p as u32)
        .collect()
}
