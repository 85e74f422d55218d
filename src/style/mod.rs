//! Style definitions and the character rules behind them.
//!
//! A [`StyleDefinition`] pairs an identifier and display name with exactly
//! one [`Rule`], an optional [`PostProcess`] step and the options the style
//! declares. Rules come in two shapes:
//!
//! - [`Rule::Lookup`]: a fixed [`LookupTable`] from source character to
//!   replacement string.
//! - [`Rule::Codepoint`]: a [`CodepointRule`] computed from the character's
//!   scalar value, with per-style exception tables.
//!
//! # Architecture
//!
//! Every codepoint rule implements [`CharTransform`], which appends the
//! rendering of one character to the output buffer. Resolved option values
//! and the random source flow through [`ConvertContext`], so rules stay pure
//! functions of their inputs.

pub mod math;
pub mod overlay;
pub mod shift;
pub mod table;
pub mod zalgo;

pub use math::MathAlphabet;
pub use overlay::CombiningOverlay;
pub use shift::{Fullwidth, RegionalIndicator};
pub use table::LookupTable;
pub use zalgo::Zalgo;

use std::collections::BTreeMap;

use rand::RngCore;
use serde::Serialize;

/// Resolved option values for one style, keyed by option name.
pub type OptionValues = BTreeMap<String, i32>;

// ============================================================================
// Convert Context
// ============================================================================

/// Context that flows through a single conversion.
///
/// Holds the option values resolved for the style being applied and the
/// random source used by stochastic rules. Deterministic rules ignore both.
pub struct ConvertContext<'a> {
    options: &'a OptionValues,

    /// Random source for stochastic rules.
    pub rng: &'a mut dyn RngCore,
}

impl<'a> ConvertContext<'a> {
    /// Creates a context over resolved options and a random source.
    pub fn new(options: &'a OptionValues, rng: &'a mut dyn RngCore) -> Self {
        Self { options, rng }
    }

    /// Returns the resolved value of an option, if the style declares it.
    pub fn option(&self, key: &str) -> Option<i32> {
        self.options.get(key).copied()
    }
}

// ============================================================================
// Rule Traits
// ============================================================================

/// Trait for per-character rules that know how to apply themselves.
///
/// Implementations must be total: any scalar they do not recognise is
/// appended unchanged. They never fail.
pub trait CharTransform {
    /// Appends the rendering of `c` to `out`.
    fn transform(&self, c: char, ctx: &mut ConvertContext<'_>, out: &mut String);
}

/// A character rule computed from scalar values rather than a table.
#[derive(Debug, Clone)]
pub enum CodepointRule {
    /// Mathematical alphanumeric block with letter exceptions.
    Math(MathAlphabet),
    /// ASCII shifted into the fullwidth forms block.
    Fullwidth(Fullwidth),
    /// Letters shifted onto regional indicator symbols.
    RegionalIndicator(RegionalIndicator),
    /// One fixed combining mark after each visible character.
    Overlay(CombiningOverlay),
    /// Random stacks of combining marks.
    Zalgo(Zalgo),
}

impl CharTransform for CodepointRule {
    fn transform(&self, c: char, ctx: &mut ConvertContext<'_>, out: &mut String) {
        match self {
            Self::Math(rule) => rule.transform(c, ctx, out),
            Self::Fullwidth(rule) => rule.transform(c, ctx, out),
            Self::RegionalIndicator(rule) => rule.transform(c, ctx, out),
            Self::Overlay(rule) => rule.transform(c, ctx, out),
            Self::Zalgo(rule) => rule.transform(c, ctx, out),
        }
    }
}

/// The per-character rule of a style. Exactly one variant per definition.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Fixed table lookup with identity fallback.
    Lookup(LookupTable),
    /// Scalar arithmetic with exceptions.
    Codepoint(CodepointRule),
}

/// Sequence-level step applied after every character has been mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// Reverse the order of the assembled output characters.
    ReverseSequence,
}

// ============================================================================
// Option Specs
// ============================================================================

/// A bounded integer option declared by a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSpec {
    /// Option key, e.g. `"intensity"`.
    pub key: &'static str,
    /// Human-readable label for option controls.
    pub label: &'static str,
    /// Inclusive lower bound.
    pub min: i32,
    /// Inclusive upper bound.
    pub max: i32,
    /// Value used until the option is set.
    pub default: i32,
}

impl OptionSpec {
    /// Returns true if `value` lies within `[min, max]`.
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

// ============================================================================
// StyleDefinition
// ============================================================================

/// One named Unicode transformation.
///
/// Definitions are immutable once built; the catalog hands out shared
/// references only.
#[derive(Debug, Clone)]
pub struct StyleDefinition {
    id: &'static str,
    display_name: &'static str,
    rule: Rule,
    post_process: Option<PostProcess>,
    options: Vec<OptionSpec>,
}

impl StyleDefinition {
    /// Creates a style driven by a lookup table.
    pub fn lookup(id: &'static str, display_name: &'static str, pairs: &[(char, &str)]) -> Self {
        Self::new(id, display_name, Rule::Lookup(LookupTable::from_pairs(pairs)))
    }

    /// Creates a style driven by a codepoint rule.
    pub fn codepoint(
        id: &'static str,
        display_name: &'static str,
        rule: impl Into<CodepointRule>,
    ) -> Self {
        Self::new(id, display_name, Rule::Codepoint(rule.into()))
    }

    fn new(id: &'static str, display_name: &'static str, rule: Rule) -> Self {
        Self {
            id,
            display_name,
            rule,
            post_process: None,
            options: Vec::new(),
        }
    }

    /// Marks the style as emitting its output in reverse order.
    pub fn reversed(mut self) -> Self {
        self.post_process = Some(PostProcess::ReverseSequence);
        self
    }

    /// Declares a tunable option.
    pub fn with_option(mut self, spec: OptionSpec) -> Self {
        self.options.push(spec);
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn post_process(&self) -> Option<PostProcess> {
        self.post_process
    }

    /// Declared options in declaration order.
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    /// Looks up a declared option by key.
    pub fn option(&self, key: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|spec| spec.key == key)
    }

    /// Returns true if the style declares any options.
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// Default values for every declared option.
    pub fn default_options(&self) -> OptionValues {
        self.options
            .iter()
            .map(|spec| (spec.key.to_string(), spec.default))
            .collect()
    }

    /// Summary used to populate style pickers and option controls.
    pub fn summary(&self) -> StyleSummary {
        StyleSummary {
            id: self.id,
            display_name: self.display_name,
            declared_options: self.options.clone(),
        }
    }
}

/// Serializable view of a style for presentation layers.
///
/// ```json
/// { "id": "zalgo", "displayName": "Zalgo (Creepy)",
///   "declaredOptions": [{ "key": "intensity", "label": "Intensity",
///                         "min": 1, "max": 10, "default": 3 }] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSummary {
    pub id: &'static str,
    pub display_name: &'static str,
    pub declared_options: Vec<OptionSpec>,
}

// ============================================================================
// Tests
// ============================================================================
