//! Stochastic combining-mark corruption ("zalgo" text).

use rand::Rng;

use super::overlay::is_layout_char;
use super::{CharTransform, CodepointRule, ConvertContext, OptionSpec};

/// Key of the intensity option.
pub const INTENSITY: &str = "intensity";

/// Intensity option: the maximum number of marks stacked on one character.
pub const INTENSITY_OPTION: OptionSpec = OptionSpec {
    key: INTENSITY,
    label: "Intensity",
    min: 1,
    max: 10,
    default: 3,
};

/// Pool of combining marks drawn from, spanning above, below and
/// through-glyph placements.
pub const MARKS: [char; 52] = [
    '\u{0300}', '\u{0301}', '\u{0302}', '\u{0303}', '\u{0304}', '\u{0305}', '\u{0306}', '\u{0307}',
    '\u{0308}', '\u{0309}', '\u{030A}', '\u{030B}', '\u{030C}', '\u{030D}', '\u{030E}', '\u{030F}',
    '\u{0310}', '\u{0311}', '\u{0312}', '\u{0313}', '\u{0314}', '\u{031B}', '\u{033D}', '\u{033E}',
    '\u{033F}', '\u{0340}', '\u{0341}', '\u{0342}', '\u{0343}', '\u{0344}', '\u{0346}', '\u{034A}',
    '\u{034B}', '\u{034C}', '\u{0350}', '\u{0351}', '\u{0352}', '\u{0357}', '\u{035B}', '\u{0363}',
    '\u{0364}', '\u{0365}', '\u{0366}', '\u{0367}', '\u{0368}', '\u{0369}', '\u{036A}', '\u{036B}',
    '\u{036C}', '\u{036D}', '\u{036E}', '\u{036F}',
];

/// Returns true if `c` belongs to the mark pool.
pub fn is_mark(c: char) -> bool {
    MARKS.contains(&c)
}

// ============================================================================
// Zalgo
// ============================================================================

/// Appends between 1 and `intensity` random marks after each visible
/// character.
///
/// # Consumed Options
///
/// - [`INTENSITY`]: upper bound on marks per character. Falls back to the
///   declared default when absent and is never treated as less than 1.
///
/// Output is intentionally non-deterministic; only the per-character mark
/// count is constrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zalgo;

impl CharTransform for Zalgo {
    fn transform(&self, c: char, ctx: &mut ConvertContext<'_>, out: &mut String) {
        out.push(c);
        if is_layout_char(c) {
            return;
        }

        let intensity = ctx
            .option(INTENSITY)
            .unwrap_or(INTENSITY_OPTION.default)
            .max(1);
        let count = ctx.rng.random_range(1..=intensity);
        for _ in 0..count {
            out.push(MARKS[ctx.rng.random_range(0..MARKS.len())]);
        }
    }
}

impl From<Zalgo> for CodepointRule {
    fn from(rule: Zalgo) -> Self {
        Self::Zalgo(rule)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::OptionValues;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn corrupt(c: char, intensity: Option<i32>, seed: u64) -> String {
        let mut options = OptionValues::new();
        if let Some(value) = intensity {
            options.insert(INTENSITY.to_string(), value);
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ctx = ConvertContext::new(&options, &mut rng);
        let mut out = String::new();
        Zalgo.transform(c, &mut ctx, &mut out);
        out
    }

    #[test]
    fn pool_has_no_duplicates() {
        let mut sorted = MARKS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), MARKS.len());
    }

    #[test]
    fn mark_count_within_intensity() {
        for seed in 0..200 {
            let out = corrupt('x', Some(4), seed);
            let mut chars = out.chars();
            assert_eq!(chars.next(), Some('x'));
            let marks: Vec<char> = chars.collect();
            assert!((1..=4).contains(&marks.len()), "got {} marks", marks.len());
            assert!(marks.iter().all(|&m| is_mark(m)));
        }
    }

    #[test]
    fn intensity_one_adds_exactly_one_mark() {
        for seed in 0..50 {
            assert_eq!(corrupt('q', Some(1), seed).chars().count(), 2);
        }
    }

    #[test]
    fn missing_option_uses_default() {
        for seed in 0..100 {
            let marks = corrupt('m', None, seed).chars().count() - 1;
            assert!((1..=INTENSITY_OPTION.default as usize).contains(&marks));
        }
    }

    #[test]
    fn layout_chars_untouched() {
        assert_eq!(corrupt(' ', Some(10), 1), " ");
        assert_eq!(corrupt('\n', Some(10), 1), "\n");
    }
}
