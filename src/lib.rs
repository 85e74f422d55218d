//! unistyle: Unicode text style conversion library
//!
//! This crate converts plain text into decorative Unicode renderings such as
//! circled letters, mathematical alphabets, fullwidth forms, combining
//! overlays and zalgo text. Characters a style does not cover pass through
//! unchanged.
//!
//! # Example
//!
//! ```
//! use unistyle::Converter;
//!
//! let converter = Converter::new();
//!
//! assert_eq!(converter.convert("Hi", "circled").unwrap(), "Ⓗⓘ");
//! assert_eq!(converter.convert("AB", "superscript").unwrap(), "ᴬᴮ");
//!
//! // Stochastic styles read their options from the converter's store
//! converter.set_option("zalgo", "intensity", 5).unwrap();
//! let glitched = converter.convert("hello", "zalgo").unwrap();
//! assert!(glitched.starts_with('h'));
//! ```
//!
//! # Stateless Conversion
//!
//! The engine can also be driven directly with explicit options and an
//! injected random source:
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use unistyle::{OptionValues, StyleCatalog, convert_with_rng};
//!
//! let catalog = StyleCatalog::builtin();
//! let style = catalog.get_style("mathDoubleStruck").unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let out = convert_with_rng("CR7", style, &OptionValues::new(), &mut rng).unwrap();
//! assert_eq!(out, "ℂℝ7");
//! ```
//!
//! # Serializable Profiles
//!
//! Option state can be exported and restored with [`OptionProfile`] through
//! the [`Configurable`] trait:
//!
//! ```
//! use unistyle::{Configurable, Converter, OptionProfile};
//!
//! let converter = Converter::new();
//! let profile = OptionProfile::from_json(r#"{"styles":{"zalgo":{"intensity":8}}}"#).unwrap();
//! converter.apply_profile(&profile).unwrap();
//!
//! assert_eq!(converter.export_profile(), profile);
//! ```

mod catalog;
mod converter;
mod engine;
mod error;
mod options;
mod profile;
pub mod style;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::{StyleCatalog, builtin_styles};
pub use converter::{Configurable, Converter, StyleOutput};
pub use engine::{convert, convert_with_rng, resolve_options};
pub use error::{Error, Result};
pub use options::OptionStore;
pub use profile::OptionProfile;
pub use style::{
    CharTransform, CodepointRule, CombiningOverlay, ConvertContext, Fullwidth, LookupTable,
    MathAlphabet, OptionSpec, OptionValues, PostProcess, RegionalIndicator, Rule, StyleDefinition,
    StyleSummary, Zalgo,
};

#[cfg(feature = "wasm")]
pub use wasm::WasmConverter;
