//! WASM bindings for Japanese numeral extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.

use wasm_bindgen::prelude::*;

use kazu_core::{Extractor, LanguageBundle, Mode};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn parse_mode(mode: Option<String>) -> Result<Mode, JsValue> {
    match mode {
        Some(mode) => mode
            .parse()
            .map_err(|e: kazu_core::ConfigError| JsValue::from_str(&e.to_string())),
        None => Ok(Mode::Default),
    }
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Extract numerals from text.
///
/// `mode` is `"default"` or `"extract-all"`; omitted means `"default"`.
/// Returns an array of `{start, length, text, tag, domain}` objects with
/// UTF-8 byte offsets.
#[wasm_bindgen(js_name = extractNumbers)]
pub fn extract_numbers(text: &str, mode: Option<String>) -> Result<JsValue, JsValue> {
    let extractor = kazu_core::NumberExtractor::new(parse_mode(mode)?).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&extractor.extract(text)).map_err(to_js_error)
}

/// Names of the rules active in `mode`, in priority order.
#[wasm_bindgen(js_name = ruleNames)]
pub fn rule_names(mode: Option<String>) -> Result<js_sys::Array, JsValue> {
    let extractor = kazu_core::NumberExtractor::new(parse_mode(mode)?).map_err(to_js_error)?;
    Ok(extractor
        .table()
        .entries()
        .iter()
        .map(|entry| JsValue::from_str(entry.name()))
        .collect())
}

/// Numeral extractor class for browser use.
#[wasm_bindgen]
pub struct NumberExtractor {
    inner: kazu_core::NumberExtractor,
}

#[wasm_bindgen]
impl NumberExtractor {
    /// Create an extractor for the built-in Japanese definitions.
    #[wasm_bindgen(constructor)]
    pub fn new(mode: Option<String>) -> Result<NumberExtractor, JsValue> {
        let inner = kazu_core::NumberExtractor::new(parse_mode(mode)?).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    /// Create an extractor from a JSON definition bundle.
    #[wasm_bindgen(js_name = fromBundle)]
    pub fn from_bundle(bundle_json: &str, mode: Option<String>) -> Result<NumberExtractor, JsValue> {
        let bundle: LanguageBundle = serde_json::from_str(bundle_json).map_err(to_js_error)?;
        let inner = kazu_core::NumberExtractor::from_bundle(parse_mode(mode)?, &bundle)
            .map_err(to_js_error)?;
        Ok(Self { inner })
    }

    /// Extract numerals from text.
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.extract(text)).map_err(to_js_error)
    }

    /// Extract numerals and return them as a JSON string.
    #[wasm_bindgen(js_name = extractJson)]
    pub fn extract_json(&self, text: &str) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.extract(text)).map_err(to_js_error)
    }

    /// Extraction-domain label of the underlying rule table.
    #[wasm_bindgen(getter)]
    pub fn domain(&self) -> String {
        self.inner.table().domain().to_string()
    }
}
