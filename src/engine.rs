//! The conversion engine.
//!
//! [`convert`] applies one [`StyleDefinition`] to a string:
//!
//! 1. Options are resolved against the style's declarations
//!    ([`resolve_options`]).
//! 2. Each Unicode scalar value is mapped by the style's [`Rule`].
//! 3. If the style carries [`PostProcess::ReverseSequence`], the assembled
//!    output is reversed.
//!
//! The engine holds no state. Stochastic styles draw from the supplied random
//! source; use [`convert_with_rng`] to pin it.

use rand::RngCore;
use tracing::trace;

use crate::error::{Error, Result};
use crate::style::{
    CharTransform, ConvertContext, OptionValues, PostProcess, Rule, StyleDefinition,
};

/// Resolves caller-supplied options against a style's declarations.
///
/// Every declared option starts at its default; supplied values for declared
/// keys replace it. Keys the style does not declare are ignored.
///
/// # Errors
///
/// [`Error::OutOfRange`] if a supplied value lies outside the declared bounds.
pub fn resolve_options(style: &StyleDefinition, supplied: &OptionValues) -> Result<OptionValues> {
    let mut resolved = style.default_options();

    for spec in style.options() {
        let Some(&value) = supplied.get(spec.key) else {
            continue;
        };
        if !spec.contains(value) {
            return Err(Error::out_of_range(style, spec, value));
        }
        resolved.insert(spec.key.to_string(), value);
    }

    Ok(resolved)
}

/// Converts `text` with `style`, using the thread-local random source.
///
/// # Errors
///
/// [`Error::OutOfRange`] if an option value is outside its declared bounds.
pub fn convert(text: &str, style: &StyleDefinition, options: &OptionValues) -> Result<String> {
    convert_with_rng(text, style, options, &mut rand::rng())
}

/// Converts `text` with `style`, drawing randomness from `rng`.
///
/// # Errors
///
/// [`Error::OutOfRange`] if an option value is outside its declared bounds.
pub fn convert_with_rng(
    text: &str,
    style: &StyleDefinition,
    options: &OptionValues,
    rng: &mut dyn RngCore,
) -> Result<String> {
    let resolved = resolve_options(style, options)?;
    Ok(apply(text, style, &resolved, rng))
}

/// Applies a style with options that are already resolved.
pub(crate) fn apply(
    text: &str,
    style: &StyleDefinition,
    resolved: &OptionValues,
    rng: &mut dyn RngCore,
) -> String {
    trace!(style = style.id(), len = text.len(), "converting");

    if text.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len() * 4);
    match style.rule() {
        Rule::Lookup(table) => {
            for c in text.chars() {
                table.push_mapped(c, &mut out);
            }
        }
        Rule::Codepoint(rule) => {
            let mut ctx = ConvertContext::new(resolved, rng);
            for c in text.chars() {
                rule.transform(c, &mut ctx, &mut out);
            }
        }
    }

    match style.post_process() {
        Some(PostProcess::ReverseSequence) => out.chars().rev().collect(),
        None => out,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StyleCatalog;
    use crate::style::zalgo::{self, INTENSITY};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run(style_id: &str, text: &str) -> String {
        let catalog = StyleCatalog::builtin();
        let style = catalog.get_style(style_id).unwrap();
        convert(text, style, &OptionValues::new()).unwrap()
    }

    fn intensity(value: i32) -> OptionValues {
        OptionValues::from([(INTENSITY.to_string(), value)])
    }

    /// Splits text into (base, trailing pool marks) runs.
    fn mark_runs(text: &str) -> Vec<(char, usize)> {
        let mut runs: Vec<(char, usize)> = Vec::new();
        for c in text.chars() {
            match runs.last_mut() {
                Some((_, count)) if zalgo::is_mark(c) => *count += 1,
                _ => runs.push((c, 0)),
            }
        }
        runs
    }

    const ASCII_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

    // ------------------------------------------------------------------------
    // Scenarios
    // ------------------------------------------------------------------------

    #[test]
    fn circled_scenario() {
        assert_eq!(run("circled", "Hi"), "Ⓗⓘ");
    }

    #[test]
    fn superscript_scenario() {
        assert_eq!(run("superscript", "AB"), "ᴬᴮ");
    }

    #[test]
    fn reversed_scenario() {
        assert_eq!(run("reversed", "cat"), "ɔɒt");
        assert_eq!(run("reversedBackwards", "cat"), "tɒɔ");
    }

    #[test]
    fn bubble_text_matches_circled() {
        let text = "Bubble 0123456789 text!";
        assert_eq!(run("bubbleText", text), run("circled", text));
    }

    #[test]
    fn currency_scenario() {
        assert_eq!(run("currency", "Bitcoin"), "฿i₮₵oi₦");
    }

    #[test]
    fn small_caps_folds_case() {
        assert_eq!(run("smallCaps", "Hello"), "ʜᴇʟʟᴏ");
    }

    #[test]
    fn subscript_formula() {
        assert_eq!(run("subscript", "x2+(1)"), "ₓ₂₊₍₁₎");
    }

    #[test]
    fn fullwidth_scenario() {
        assert_eq!(run("fullwidth", "Hi there!"), "Ｈｉ\u{3000}ｔｈｅｒｅ！");
        assert_eq!(run("asianFullwidth", "Hi there!"), run("fullwidth", "Hi there!"));
    }

    #[test]
    fn regional_indicator_scenario() {
        assert_eq!(run("regionalIndicator", "Us"), "🇺🇸");
    }

    #[test]
    fn inverted_backwards_reads_upside_down() {
        assert_eq!(run("inverted", "hello!"), "ɥǝllo¡");
        assert_eq!(run("invertedBackwards", "hello!"), "¡ollǝɥ");
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    #[test]
    fn empty_input_is_empty_for_every_style() {
        let catalog = StyleCatalog::builtin();
        for style in catalog.iter() {
            assert_eq!(
                convert("", style, &OptionValues::new()).unwrap(),
                "",
                "style {}",
                style.id()
            );
        }
    }

    #[test]
    fn lookup_styles_pass_unmapped_chars_through() {
        let catalog = StyleCatalog::builtin();
        let probe = "¶§漢字😀\t~";
        for style in catalog.iter() {
            let Rule::Lookup(table) = style.rule() else {
                continue;
            };
            let unmapped: String = probe.chars().filter(|&c| !table.contains(c)).collect();
            assert_eq!(
                convert(&unmapped, style, &OptionValues::new()).unwrap(),
                if style.post_process().is_some() {
                    unmapped.chars().rev().collect()
                } else {
                    unmapped.clone()
                },
                "style {}",
                style.id()
            );
        }
    }

    #[test]
    fn reversed_partial_table_falls_back_to_identity() {
        // Known incompleteness: h, i, l, m, o, r, t, u, v, w, x have no
        // mirrored glyph and pass through.
        assert_eq!(run("reversed", "hilmortuvwx"), "hilmortuvwx");
    }

    #[test]
    fn backwards_variants_reverse_base_variant() {
        let inputs = ["cat", "Hello, World", "abc def\nxyz", "Zq 09!?"];
        let pairs = [
            ("reversed", "reversedBackwards"),
            ("inverted", "invertedBackwards"),
        ];
        for (base, backwards) in pairs {
            for input in inputs {
                let forward: String = run(base, input).chars().rev().collect();
                assert_eq!(run(backwards, input), forward, "{backwards} on {input:?}");
            }
        }
    }

    #[test]
    fn non_bmp_input_is_one_unit() {
        // An astral character must not be split into surrogate halves.
        assert_eq!(run("reversedBackwards", "a😀b"), "d😀ɒ");
        assert_eq!(run("underlined", "😀"), "😀\u{0332}");
    }

    #[test]
    fn math_letters_follow_offsets_except_exceptions() {
        let catalog = StyleCatalog::builtin();
        let cases: [(&str, u32, u32, &str); 13] = [
            ("mathBold", 0x1D400, 0x1D41A, ""),
            ("mathBoldFraktur", 0x1D56C, 0x1D586, ""),
            ("mathBoldItalic", 0x1D468, 0x1D482, ""),
            ("mathBoldScript", 0x1D4D0, 0x1D4EA, ""),
            ("mathDoubleStruck", 0x1D538, 0x1D552, "CHNPQRZ"),
            ("mathMonospace", 0x1D670, 0x1D68A, ""),
            ("mathSans", 0x1D5A0, 0x1D5BA, ""),
            ("mathSansBold", 0x1D5D4, 0x1D5EE, ""),
            ("mathSansBoldItalic", 0x1D63C, 0x1D656, ""),
            ("mathSansItalic", 0x1D608, 0x1D622, ""),
            ("mathItalic", 0x1D434, 0x1D44E, "h"),
            ("mathFraktur", 0x1D504, 0x1D51E, "CHIRZ"),
            ("mathScript", 0x1D49C, 0x1D4B6, "BEFHILMRego"),
        ];

        for (id, upper, lower, exceptions) in cases {
            let style = catalog.get_style(id).unwrap();
            for c in ASCII_LETTERS.chars() {
                let out = convert(&c.to_string(), style, &OptionValues::new()).unwrap();
                let base = if c.is_ascii_uppercase() { upper } else { lower };
                let first = if c.is_ascii_uppercase() { 'A' } else { 'a' };
                let arithmetic = char::from_u32(base + (c as u32 - first as u32)).unwrap();

                if exceptions.contains(c) {
                    assert_ne!(out, arithmetic.to_string(), "{id} exception {c}");
                    assert_eq!(out.chars().count(), 1, "{id} exception {c}");
                } else {
                    assert_eq!(out, arithmetic.to_string(), "{id} letter {c}");
                }
            }
        }
    }

    #[test]
    fn math_exception_symbols() {
        assert_eq!(run("mathDoubleStruck", "CHNPQRZ"), "ℂℍℕℙℚℝℤ");
        assert_eq!(run("mathFraktur", "CHIRZ"), "ℭℌℑℜℨ");
        assert_eq!(run("mathScript", "BEFHILMR"), "ℬℰℱℋℐℒℳℛ");
        assert_eq!(run("mathScript", "ego"), "ℯℊℴ");
        assert_eq!(run("mathItalic", "h"), "ℎ");
    }

    #[test]
    fn digits_only_mapped_by_monospace() {
        assert_eq!(run("mathMonospace", "0123456789"), "𝟶𝟷𝟸𝟹𝟺𝟻𝟼𝟽𝟾𝟿");

        let catalog = StyleCatalog::builtin();
        let others = catalog
            .iter()
            .filter(|s| s.id().starts_with("math") && s.id() != "mathMonospace");
        for style in others {
            assert_eq!(
                convert("0123456789", style, &OptionValues::new()).unwrap(),
                "0123456789",
                "style {}",
                style.id()
            );
        }
    }

    #[test]
    fn overlay_styles_skip_spaces() {
        let marks = [
            ("strikethrough", '\u{0336}'),
            ("underlined", '\u{0332}'),
            ("doubleUnderlined", '\u{0333}'),
            ("overlined", '\u{0305}'),
            ("slashed", '\u{0337}'),
            ("dotted", '\u{0307}'),
            ("crossedOut", '\u{0336}'),
            ("tilded", '\u{0303}'),
        ];
        for (id, mark) in marks {
            assert_eq!(run(id, " a b"), format!(" a{mark} b{mark}"), "style {id}");
        }
        assert_eq!(run("strikethrough", "ab\ncd"), run("crossedOut", "ab\ncd"));
    }

    #[test]
    fn zalgo_mark_counts_within_bounds() {
        let catalog = StyleCatalog::builtin();
        let style = catalog.get_style("zalgo").unwrap();
        let text = "Hello world\nagain";

        for k in [1, 3, 10] {
            for seed in 0..25 {
                let mut rng = StdRng::seed_from_u64(seed);
                let out = convert_with_rng(text, style, &intensity(k), &mut rng).unwrap();
                let runs = mark_runs(&out);

                let bases: String = runs.iter().map(|&(c, _)| c).collect();
                assert_eq!(bases, text);

                for (c, count) in runs {
                    if c == ' ' || c == '\n' {
                        assert_eq!(count, 0);
                    } else {
                        assert!((1..=k as usize).contains(&count), "{c}: {count} marks at k={k}");
                    }
                }
            }
        }
    }

    #[test]
    fn zalgo_differs_between_runs() {
        let catalog = StyleCatalog::builtin();
        let style = catalog.get_style("zalgo").unwrap();
        let text = "the quick brown fox jumps over the lazy dog";

        let mut rng = StdRng::seed_from_u64(1);
        let first = convert_with_rng(text, style, &intensity(10), &mut rng).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let second = convert_with_rng(text, style, &intensity(10), &mut rng).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let catalog = StyleCatalog::builtin();
        let style = catalog.get_style("zalgo").unwrap();

        let mut rng = StdRng::seed_from_u64(9);
        let a = convert_with_rng("abc", style, &intensity(5), &mut rng).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let b = convert_with_rng("abc", style, &intensity(5), &mut rng).unwrap();
        assert_eq!(a, b);
    }

    // ------------------------------------------------------------------------
    // Option resolution
    // ------------------------------------------------------------------------

    #[test]
    fn resolve_fills_defaults_and_ignores_unknown_keys() {
        let catalog = StyleCatalog::builtin();
        let style = catalog.get_style("zalgo").unwrap();

        let mut supplied = OptionValues::new();
        supplied.insert("speed".into(), 99);
        let resolved = resolve_options(style, &supplied).unwrap();

        assert_eq!(resolved, intensity(3));
    }

    #[test]
    fn resolve_rejects_out_of_range() {
        let catalog = StyleCatalog::builtin();
        let style = catalog.get_style("zalgo").unwrap();

        for value in [0, 11, -3] {
            let err = convert("x", style, &intensity(value)).unwrap_err();
            assert!(matches!(
                err,
                Error::OutOfRange { value: v, min: 1, max: 10, .. } if v == value
            ));
        }
    }

    #[test]
    fn options_ignored_by_deterministic_styles() {
        assert_eq!(
            convert(
                "Hi",
                StyleCatalog::builtin().get_style("circled").unwrap(),
                &intensity(50)
            )
            .unwrap(),
            "Ⓗⓘ"
        );
    }
}
