//! The style catalog: every built-in style in a fixed, stable order.
//!
//! The catalog is built once and is read-only afterwards. Adding a style is
//! a data change to [`builtin_styles`]; the engine dispatches on the rule
//! variant and never needs to know about individual styles.

mod tables;

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::warn;

use crate::error::{Error, Result};
use crate::style::zalgo::INTENSITY_OPTION;
use crate::style::{
    CombiningOverlay, Fullwidth, MathAlphabet, RegionalIndicator, StyleDefinition, StyleSummary,
    Zalgo,
};

// ============================================================================
// Math Alphabets
// ============================================================================

const MATH_BOLD: MathAlphabet = MathAlphabet::new(0x1D400, 0x1D41A);
const MATH_BOLD_FRAKTUR: MathAlphabet = MathAlphabet::new(0x1D56C, 0x1D586);
const MATH_BOLD_ITALIC: MathAlphabet = MathAlphabet::new(0x1D468, 0x1D482);
const MATH_BOLD_SCRIPT: MathAlphabet = MathAlphabet::new(0x1D4D0, 0x1D4EA);
const MATH_DOUBLE_STRUCK: MathAlphabet = MathAlphabet::new(0x1D538, 0x1D552).with_exceptions(&[
    ('C', 'ℂ'),
    ('H', 'ℍ'),
    ('N', 'ℕ'),
    ('P', 'ℙ'),
    ('Q', 'ℚ'),
    ('R', 'ℝ'),
    ('Z', 'ℤ'),
]);
const MATH_MONOSPACE: MathAlphabet = MathAlphabet::new(0x1D670, 0x1D68A).with_digits(0x1D7F6);
const MATH_SANS: MathAlphabet = MathAlphabet::new(0x1D5A0, 0x1D5BA);
const MATH_SANS_BOLD: MathAlphabet = MathAlphabet::new(0x1D5D4, 0x1D5EE);
const MATH_SANS_BOLD_ITALIC: MathAlphabet = MathAlphabet::new(0x1D63C, 0x1D656);
const MATH_SANS_ITALIC: MathAlphabet = MathAlphabet::new(0x1D608, 0x1D622);
const MATH_ITALIC: MathAlphabet =
    MathAlphabet::new(0x1D434, 0x1D44E).with_exceptions(&[('h', 'ℎ')]);
const MATH_FRAKTUR: MathAlphabet = MathAlphabet::new(0x1D504, 0x1D51E).with_exceptions(&[
    ('C', 'ℭ'),
    ('H', 'ℌ'),
    ('I', 'ℑ'),
    ('R', 'ℜ'),
    ('Z', 'ℨ'),
]);
const MATH_SCRIPT: MathAlphabet = MathAlphabet::new(0x1D49C, 0x1D4B6).with_exceptions(&[
    ('B', 'ℬ'),
    ('E', 'ℰ'),
    ('F', 'ℱ'),
    ('H', 'ℋ'),
    ('I', 'ℐ'),
    ('L', 'ℒ'),
    ('M', 'ℳ'),
    ('R', 'ℛ'),
    ('e', 'ℯ'),
    ('g', 'ℊ'),
    ('o', 'ℴ'),
]);

// ============================================================================
// Canonical Definitions
// ============================================================================

/// Builds the built-in style definitions in display order.
pub fn builtin_styles() -> Vec<StyleDefinition> {
    use StyleDefinition as S;

    vec![
        S::lookup("circled", "Circled", tables::CIRCLED),
        S::lookup("circledNegative", "Circled (Negative)", tables::CIRCLED_NEGATIVE),
        S::codepoint("fullwidth", "Fullwidth", Fullwidth),
        S::codepoint("mathBold", "Math Bold", MATH_BOLD),
        S::codepoint("mathBoldFraktur", "Math Bold Fraktur", MATH_BOLD_FRAKTUR),
        S::codepoint("mathBoldItalic", "Math Bold Italic", MATH_BOLD_ITALIC),
        S::codepoint("mathBoldScript", "Math Bold Script", MATH_BOLD_SCRIPT),
        S::codepoint("mathDoubleStruck", "Math Double-Struck", MATH_DOUBLE_STRUCK),
        S::codepoint("mathMonospace", "Math Monospace", MATH_MONOSPACE),
        S::codepoint("mathSans", "Math Sans", MATH_SANS),
        S::codepoint("mathSansBold", "Math Sans Bold", MATH_SANS_BOLD),
        S::codepoint("mathSansBoldItalic", "Math Sans Bold Italic", MATH_SANS_BOLD_ITALIC),
        S::codepoint("mathSansItalic", "Math Sans Italic", MATH_SANS_ITALIC),
        S::lookup("parenthesized", "Parenthesized", tables::PARENTHESIZED),
        S::codepoint("regionalIndicator", "Regional Indicator", RegionalIndicator),
        S::lookup("squared", "Squared", tables::SQUARED),
        S::lookup("squaredNegative", "Squared (Negative)", tables::SQUARED_NEGATIVE),
        S::lookup("smallCaps", "Small Caps", tables::SMALL_CAPS),
        S::lookup("subscript", "Subscript", tables::SUBSCRIPT),
        S::lookup("superscript", "Superscript", tables::SUPERSCRIPT),
        S::lookup("inverted", "Inverted", tables::INVERTED),
        S::lookup("invertedBackwards", "Inverted (Backwards)", tables::INVERTED).reversed(),
        S::lookup("reversed", "Reversed", tables::REVERSED),
        S::lookup("reversedBackwards", "Reversed (Backwards)", tables::REVERSED).reversed(),
        S::codepoint("strikethrough", "Strikethrough", CombiningOverlay::LONG_STROKE),
        S::codepoint("underlined", "Underlined", CombiningOverlay::LOW_LINE),
        S::codepoint("doubleUnderlined", "Double Underlined", CombiningOverlay::DOUBLE_LOW_LINE),
        S::codepoint("overlined", "Overlined", CombiningOverlay::OVERLINE),
        S::codepoint("slashed", "Slashed", CombiningOverlay::SHORT_SOLIDUS),
        S::codepoint("mathItalic", "Math Italic", MATH_ITALIC),
        S::codepoint("mathFraktur", "Math Fraktur", MATH_FRAKTUR),
        S::codepoint("mathScript", "Math Script", MATH_SCRIPT),
        S::lookup("currency", "Currency", tables::CURRENCY),
        S::codepoint("asianFullwidth", "Asian Fullwidth", Fullwidth),
        S::lookup("bubbleText", "Bubble Text", tables::CIRCLED),
        S::codepoint("dotted", "Dotted", CombiningOverlay::DOT_ABOVE),
        S::codepoint("crossedOut", "Crossed Out", CombiningOverlay::LONG_STROKE),
        S::codepoint("tilded", "Tilded", CombiningOverlay::TILDE),
        S::codepoint("zalgo", "Zalgo (Creepy)", Zalgo).with_option(INTENSITY_OPTION),
    ]
}

static BUILTIN: Lazy<Arc<StyleCatalog>> =
    Lazy::new(|| Arc::new(StyleCatalog::new(builtin_styles())));

// ============================================================================
// StyleCatalog
// ============================================================================

/// An ordered, immutable registry of style definitions.
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    styles: Vec<StyleDefinition>,
    index: HashMap<&'static str, usize>,
}

impl StyleCatalog {
    /// Builds a catalog, keeping definitions in the given order.
    ///
    /// Identifiers must be unique; a repeated id is logged and the later
    /// definition dropped.
    pub fn new(definitions: impl IntoIterator<Item = StyleDefinition>) -> Self {
        let mut styles = Vec::new();
        let mut index = HashMap::new();

        for style in definitions {
            if index.contains_key(style.id()) {
                warn!(style = style.id(), "duplicate style id, keeping first definition");
                continue;
            }
            index.insert(style.id(), styles.len());
            styles.push(style);
        }

        Self { styles, index }
    }

    /// Returns the shared built-in catalog.
    pub fn builtin() -> Arc<StyleCatalog> {
        Arc::clone(&BUILTIN)
    }

    /// All styles in catalog order.
    pub fn list_styles(&self) -> &[StyleDefinition] {
        &self.styles
    }

    /// Looks up a style by id.
    pub fn get_style(&self, id: &str) -> Result<&StyleDefinition> {
        self.index
            .get(id)
            .map(|&i| &self.styles[i])
            .ok_or_else(|| Error::StyleNotFound(id.to_string()))
    }

    /// Summaries of all styles in catalog order.
    pub fn summaries(&self) -> Vec<StyleSummary> {
        self.styles.iter().map(StyleDefinition::summary).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleDefinition> {
        self.styles.iter()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::new(builtin_styles())
    }
}

// ============================================================================
// Tests
// ============================================================================
