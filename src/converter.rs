//! Conversion facade tying the catalog, option state and engine together.

use std::sync::Arc;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::StyleCatalog;
use crate::engine;
use crate::error::Result;
use crate::options::OptionStore;
use crate::profile::OptionProfile;
use crate::style::{OptionValues, StyleSummary};

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be configured from an [`OptionProfile`].
pub trait Configurable {
    /// Applies a profile's option values.
    ///
    /// Every entry is validated before any is stored, so a failing profile
    /// leaves the current state untouched.
    fn apply_profile(&self, profile: &OptionProfile) -> Result<()>;

    /// Exports the current option values as a profile.
    fn export_profile(&self) -> OptionProfile;
}

// ============================================================================
// StyleOutput
// ============================================================================

/// One style's rendering of an input, as handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify), tsify(into_wasm_abi))]
pub struct StyleOutput {
    pub id: String,
    pub name: String,
    pub output: String,
}

// ============================================================================
// Converter
// ============================================================================

/// Main entry point for converting text.
///
/// `Converter` owns a shared [`StyleCatalog`] and an [`OptionStore`]. It
/// resolves style ids, reads current option values and delegates to the
/// stateless [`engine`]. All methods take `&self`; option writes are
/// serialized inside the store.
///
/// # Example
///
/// ```
/// use unistyle::Converter;
///
/// let converter = Converter::new();
/// assert_eq!(converter.convert("Hi", "circled").unwrap(), "Ⓗⓘ");
///
/// converter.set_option("zalgo", "intensity", 2).unwrap();
/// assert!(converter.set_option("zalgo", "intensity", 11).is_err());
///
/// for result in converter.convert_all("abc") {
///     println!("{}: {}", result.name, result.output);
/// }
/// ```
#[derive(Debug)]
pub struct Converter {
    catalog: Arc<StyleCatalog>,
    options: OptionStore,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Creates a converter over the built-in catalog.
    pub fn new() -> Self {
        Self::with_catalog(StyleCatalog::builtin())
    }

    /// Creates a converter over a custom catalog.
    pub fn with_catalog(catalog: impl Into<Arc<StyleCatalog>>) -> Self {
        Self {
            catalog: catalog.into(),
            options: OptionStore::new(),
        }
    }

    /// Returns the catalog.
    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    /// Returns the option store.
    pub fn option_store(&self) -> &OptionStore {
        &self.options
    }

    /// Summaries of every style, in catalog order.
    pub fn list_styles(&self) -> Vec<StyleSummary> {
        self.catalog.summaries()
    }

    /// Converts `text` with the style's current stored options.
    pub fn convert(&self, text: &str, style_id: &str) -> Result<String> {
        let style = self.catalog.get_style(style_id)?;
        let options = self.options.get(style);
        Ok(engine::apply(text, style, &options, &mut rand::rng()))
    }

    /// Converts `text` with explicit option values.
    ///
    /// Declared options missing from `options` take their defaults, not the
    /// stored values.
    pub fn convert_with(
        &self,
        text: &str,
        style_id: &str,
        options: &OptionValues,
    ) -> Result<String> {
        let style = self.catalog.get_style(style_id)?;
        engine::convert(text, style, options)
    }

    /// Converts `text` with explicit option values and random source.
    pub fn convert_with_rng(
        &self,
        text: &str,
        style_id: &str,
        options: &OptionValues,
        rng: &mut dyn RngCore,
    ) -> Result<String> {
        let style = self.catalog.get_style(style_id)?;
        engine::convert_with_rng(text, style, options, rng)
    }

    /// Converts `text` with every style, in catalog order, using stored
    /// options.
    pub fn convert_all(&self, text: &str) -> Vec<StyleOutput> {
        let mut rng = rand::rng();
        self.catalog
            .iter()
            .map(|style| {
                let options = self.options.get(style);
                StyleOutput {
                    id: style.id().to_string(),
                    name: style.display_name().to_string(),
                    output: engine::apply(text, style, &options, &mut rng),
                }
            })
            .collect()
    }

    /// Current option values for a style, defaults if never set.
    pub fn get_options(&self, style_id: &str) -> Result<OptionValues> {
        let style = self.catalog.get_style(style_id)?;
        Ok(self.options.get(style))
    }

    /// Sets one option. Returns `true` if the stored value changed.
    pub fn set_option(&self, style_id: &str, key: &str, value: i32) -> Result<bool> {
        let style = self.catalog.get_style(style_id)?;
        self.options.set(style, key, value)
    }
}

impl Configurable for Converter {
    /// Applies a profile's option values.
    ///
    /// # Example
    ///
    /// ```
    /// use unistyle::{Configurable, Converter, OptionProfile};
    ///
    /// let converter = Converter::new();
    /// let profile = OptionProfile::new().with_option("zalgo", "intensity", 7);
    ///
    /// converter.apply_profile(&profile).unwrap();
    /// assert_eq!(converter.get_options("zalgo").unwrap()["intensity"], 7);
    /// ```
    fn apply_profile(&self, profile: &OptionProfile) -> Result<()> {
        let mut pending = Vec::new();
        for (style_id, values) in &profile.styles {
            let style = self.catalog.get_style(style_id)?;
            for (key, &value) in values {
                self.options.validate(style, key, value)?;
                pending.push((style, key.as_str(), value));
            }
        }

        debug!(entries = pending.len(), "applying option profile");
        for (style, key, value) in pending {
            self.options.set(style, key, value)?;
        }
        Ok(())
    }

    /// Exports option values for every style whose state has been touched.
    ///
    /// # Example
    ///
    /// ```
    /// use unistyle::{Configurable, Converter};
    ///
    /// let converter = Converter::new();
    /// converter.set_option("zalgo", "intensity", 4).unwrap();
    ///
    /// let json = converter.export_profile().to_json().unwrap();
    /// assert!(json.contains("\"intensity\":4"));
    /// ```
    fn export_profile(&self) -> OptionProfile {
        OptionProfile {
            styles: self.options.snapshot(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
