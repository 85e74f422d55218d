//! Serializable option profile for cross-process communication.
//!
//! An [`OptionProfile`] captures option values for any number of styles in
//! a format that can be serialized to JSON and sent between a frontend and
//! the conversion engine, or saved by the caller between sessions.
//!
//! # Example
//!
//! ```
//! use unistyle::OptionProfile;
//!
//! let profile = OptionProfile::new().with_option("zalgo", "intensity", 5);
//!
//! let json = profile.to_json().unwrap();
//! assert_eq!(json, r#"{"styles":{"zalgo":{"intensity":5}}}"#);
//!
//! let restored = OptionProfile::from_json(&json).unwrap();
//! assert_eq!(restored.get("zalgo", "intensity"), Some(5));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::style::OptionValues;

// ============================================================================
// OptionProfile
// ============================================================================

/// A serializable set of option values, keyed by style id then option key.
///
/// # JSON Format
///
/// ```json
/// {
///   "styles": {
///     "zalgo": { "intensity": 5 }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "tsify",
    derive(tsify_next::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub struct OptionProfile {
    /// Option values per style. Styles absent here keep their current state.
    #[serde(default)]
    pub styles: BTreeMap<String, OptionValues>,
}

impl OptionProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one option value.
    pub fn with_option(
        mut self,
        style: impl Into<String>,
        key: impl Into<String>,
        value: i32,
    ) -> Self {
        self.styles
            .entry(style.into())
            .or_default()
            .insert(key.into(), value);
        self
    }

    /// Sets every option of one style.
    pub fn with_style(mut self, style: impl Into<String>, values: OptionValues) -> Self {
        self.styles.insert(style.into(), values);
        self
    }

    /// Returns one option value, if present.
    pub fn get(&self, style: &str, key: &str) -> Option<i32> {
        self.styles.get(style)?.get(key).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serialization_roundtrip() {
        let profile = OptionProfile::new()
            .with_option("zalgo", "intensity", 8)
            .with_option("other", "level", 2);

        let json = profile.to_json().unwrap();
        let restored = OptionProfile::from_json(&json).unwrap();

        assert_eq!(restored, profile);
        assert_eq!(restored.get("zalgo", "intensity"), Some(8));
        assert_eq!(restored.get("zalgo", "missing"), None);
        assert_eq!(restored.get("missing", "intensity"), None);
    }

    #[test]
    fn profile_json_format() {
        let profile = OptionProfile::new().with_option("zalgo", "intensity", 4);
        let json = profile.to_json_pretty().unwrap();

        assert!(json.contains("\"styles\""));
        assert!(json.contains("\"zalgo\""));
        assert!(json.contains("\"intensity\": 4"));
    }

    #[test]
    fn empty_profile_deserializes() {
        let profile = OptionProfile::from_json("{}").unwrap();
        assert!(profile.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(OptionProfile::from_json(r#"{"styles":{"zalgo":{"intensity":"high"}}}"#).is_err());
    }

    #[test]
    fn with_style_replaces_values() {
        let values = OptionValues::from([("intensity".to_string(), 9)]);
        let profile = OptionProfile::new()
            .with_option("zalgo", "intensity", 2)
            .with_style("zalgo", values);
        assert_eq!(profile.get("zalgo", "intensity"), Some(9));
    }
}
