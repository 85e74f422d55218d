//! Rules that shift a contiguous ASCII range into another block.

use super::{CharTransform, CodepointRule, ConvertContext};

/// Offset from printable ASCII to the Halfwidth and Fullwidth Forms block.
const FULLWIDTH_OFFSET: u32 = 0xFF00 - 0x20;

/// Ideographic space, the fullwidth counterpart of U+0020.
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// First regional indicator symbol, for `A`.
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

// ============================================================================
// Fullwidth
// ============================================================================

/// Maps printable ASCII (`!` through `~`) to fullwidth forms and the space
/// to an ideographic space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fullwidth;

impl Fullwidth {
    pub fn map_char(c: char) -> char {
        match c {
            ' ' => IDEOGRAPHIC_SPACE,
            '!'..='~' => char::from_u32(c as u32 + FULLWIDTH_OFFSET).unwrap_or(c),
            _ => c,
        }
    }
}

impl CharTransform for Fullwidth {
    fn transform(&self, c: char, _ctx: &mut ConvertContext<'_>, out: &mut String) {
        out.push(Self::map_char(c));
    }
}

impl From<Fullwidth> for CodepointRule {
    fn from(rule: Fullwidth) -> Self {
        Self::Fullwidth(rule)
    }
}

// ============================================================================
// RegionalIndicator
// ============================================================================

/// Maps ASCII letters of either case to regional indicator symbols.
///
/// Adjacent pairs that form an ISO country code render as a flag on most
/// platforms; this is inherent to the block and not suppressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionalIndicator;

impl RegionalIndicator {
    pub fn map_char(c: char) -> char {
        if c.is_ascii_alphabetic() {
            let index = c.to_ascii_uppercase() as u32 - 'A' as u32;
            char::from_u32(REGIONAL_INDICATOR_A + index).unwrap_or(c)
        } else {
            c
        }
    }
}

impl CharTransform for RegionalIndicator {
    fn transform(&self, c: char, _ctx: &mut ConvertContext<'_>, out: &mut String) {
        out.push(Self::map_char(c));
    }
}

impl From<RegionalIndicator> for CodepointRule {
    fn from(rule: RegionalIndicator) -> Self {
        Self::RegionalIndicator(rule)
    }
}
