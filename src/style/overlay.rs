//! Combining-mark overlay rule.

use super::{CharTransform, CodepointRule, ConvertContext};

/// Returns true for characters that never receive combining marks.
///
/// A mark attached to a space or line break renders as a stray glyph, so
/// overlay and corruption rules leave these characters bare.
pub fn is_layout_char(c: char) -> bool {
    c == ' ' || c == '\n'
}

// ============================================================================
// CombiningOverlay
// ============================================================================

/// Appends one fixed combining mark after every visible character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombiningOverlay {
    /// The combining mark to attach.
    pub mark: char,
}

impl CombiningOverlay {
    /// U+0336 COMBINING LONG STROKE OVERLAY.
    pub const LONG_STROKE: Self = Self::new('\u{0336}');
    /// U+0332 COMBINING LOW LINE.
    pub const LOW_LINE: Self = Self::new('\u{0332}');
    /// U+0333 COMBINING DOUBLE LOW LINE.
    pub const DOUBLE_LOW_LINE: Self = Self::new('\u{0333}');
    /// U+0305 COMBINING OVERLINE.
    pub const OVERLINE: Self = Self::new('\u{0305}');
    /// U+0337 COMBINING SHORT SOLIDUS OVERLAY.
    pub const SHORT_SOLIDUS: Self = Self::new('\u{0337}');
    /// U+0307 COMBINING DOT ABOVE.
    pub const DOT_ABOVE: Self = Self::new('\u{0307}');
    /// U+0303 COMBINING TILDE.
    pub const TILDE: Self = Self::new('\u{0303}');

    pub const fn new(mark: char) -> Self {
        Self { mark }
    }
}

impl CharTransform for CombiningOverlay {
    fn transform(&self, c: char, _ctx: &mut ConvertContext<'_>, out: &mut String) {
        out.push(c);
        if !is_layout_char(c) {
            out.push(self.mark);
        }
    }
}

impl From<CombiningOverlay> for CodepointRule {
    fn from(rule: CombiningOverlay) -> Self {
        Self::Overlay(rule)
    }
}
