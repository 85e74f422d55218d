//! JavaScript bindings for WASM environments.
//!
//! This module provides [`WasmConverter`], a wrapper around [`Converter`]
//! that a web frontend can use for live previews of every style.
//!
//! # Feature Flag
//!
//! This module is only available with the `wasm` feature enabled:
//!
//! ```toml
//! [dependencies]
//! unistyle = { version = "0.1", features = ["wasm"] }
//! ```
//!
//! # Example (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { WasmConverter } from 'unistyle';
//!
//! await init();
//!
//! const converter = new WasmConverter();
//! converter.setOption('zalgo', 'intensity', 6);
//!
//! for (const { name, output } of converter.convertAll(input.value)) {
//!   render(name, output);
//! }
//!
//! // Persist option state between sessions
//! localStorage.setItem('options', converter.exportProfileJson());
//! ```
//!
//! Every returned value is JSON-compatible: maps such as the result of
//! `getOptions` arrive as plain objects, never as a JS `Map`.
//!
//! # Building for `wasm32-unknown-unknown`
//!
//! The zalgo style draws from `rand`, which reaches the browser's crypto API
//! through `getrandom`. The `wasm` feature enables its `wasm_js` backend, and
//! `.cargo/config.toml` selects it for this target:
//!
//! ```toml
//! [target.wasm32-unknown-unknown]
//! rustflags = ['--cfg', 'getrandom_backend="wasm_js"']
//! ```
//!
//! Downstream crates building their own wasm artifact need the same flag.

use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use crate::converter::{Configurable, Converter};
use crate::profile::OptionProfile;

fn to_js(value: &impl Serialize) -> Result<JsValue, JsError> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Failed to serialize result: {}", e)))
}

// ============================================================================
// WasmConverter
// ============================================================================

/// A wrapper around [`Converter`] exposed to JavaScript via wasm-bindgen.
#[wasm_bindgen]
pub struct WasmConverter {
    converter: Converter,
}

impl Default for WasmConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmConverter {
    /// Creates a converter over the built-in catalog.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmConverter {
        Self {
            converter: Converter::new(),
        }
    }

    // ---- Catalog ----

    /// Returns `{ id, displayName, declaredOptions }` for every style, in
    /// catalog order.
    #[wasm_bindgen(js_name = "listStyles")]
    pub fn list_styles(&self) -> Result<JsValue, JsError> {
        to_js(&self.converter.list_styles())
    }

    // ---- Conversion ----

    /// Converts `text` with one style and its current options.
    pub fn convert(&self, text: &str, style_id: &str) -> Result<String, JsError> {
        self.converter
            .convert(text, style_id)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Converts `text` with every style. Returns an array of
    /// `{ id, name, output }`.
    #[wasm_bindgen(js_name = "convertAll")]
    pub fn convert_all(&self, text: &str) -> Result<JsValue, JsError> {
        to_js(&self.converter.convert_all(text))
    }

    // ---- Options ----

    /// Returns the current options of a style as a plain object, e.g.
    /// `{ intensity: 3 }`.
    #[wasm_bindgen(js_name = "getOptions")]
    pub fn get_options(&self, style_id: &str) -> Result<JsValue, JsError> {
        let options = self
            .converter
            .get_options(style_id)
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&options)
    }

    /// Sets one option. Returns `true` if the stored value changed.
    #[wasm_bindgen(js_name = "setOption")]
    pub fn set_option(&self, style_id: &str, key: &str, value: i32) -> Result<bool, JsError> {
        self.converter
            .set_option(style_id, key, value)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    // ---- Profile ----

    /// Exports the current option state as a JSON string.
    #[wasm_bindgen(js_name = "exportProfileJson")]
    pub fn export_profile_json(&self) -> Result<String, JsError> {
        self.converter
            .export_profile()
            .to_json()
            .map_err(|e| JsError::new(&format!("Failed to serialize profile: {}", e)))
    }

    /// Applies option state from a JSON string.
    ///
    /// Nothing is applied if any entry is invalid.
    #[wasm_bindgen(js_name = "applyProfileJson")]
    pub fn apply_profile_json(&self, json: &str) -> Result<(), JsError> {
        let profile = OptionProfile::from_json(json)
            .map_err(|e| JsError::new(&format!("Invalid profile JSON: {}", e)))?;
        self.converter
            .apply_profile(&profile)
            .map_err(|e| JsError::new(&e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use js_sys::{Array, Map, Reflect};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn field(value: &JsValue, key: &str) -> JsValue {
        Reflect::get(value, &JsValue::from_str(key)).unwrap()
    }

    #[wasm_bindgen_test]
    fn options_are_plain_objects() {
        let converter = WasmConverter::new();
        let options = converter.get_options("zalgo").unwrap();

        assert!(!options.is_instance_of::<Map>());
        assert_eq!(field(&options, "intensity").as_f64(), Some(3.0));

        converter.set_option("zalgo", "intensity", 8).unwrap();
        let options = converter.get_options("zalgo").unwrap();
        assert_eq!(field(&options, "intensity").as_f64(), Some(8.0));
    }

    #[wasm_bindgen_test]
    fn convert_all_yields_objects() {
        let converter = WasmConverter::new();
        let results = Array::from(&converter.convert_all("Hi").unwrap());

        let first = results.get(0);
        assert_eq!(field(&first, "id").as_string().as_deref(), Some("circled"));
        assert_eq!(field(&first, "output").as_string().as_deref(), Some("Ⓗⓘ"));
    }

    #[wasm_bindgen_test]
    fn declared_options_listed_as_objects() {
        let converter = WasmConverter::new();
        let styles = Array::from(&converter.list_styles().unwrap());

        let zalgo = styles.get(styles.length() - 1);
        let declared = Array::from(&field(&zalgo, "declaredOptions"));
        assert_eq!(field(&declared.get(0), "max").as_f64(), Some(10.0));
    }
}
