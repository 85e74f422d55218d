//! Character tables for the lookup-driven styles.
//!
//! Each table is a flat list of `(source, replacement)` pairs; the catalog
//! turns them into [`LookupTable`](crate::style::LookupTable)s once at
//! construction.

/// Enclosed alphanumerics, both cases plus digits.
pub(crate) const CIRCLED: &[(char, &str)] = &[
    ('a', "ⓐ"), ('b', "ⓑ"), ('c', "ⓒ"), ('d', "ⓓ"), ('e', "ⓔ"), ('f', "ⓕ"),
    ('g', "ⓖ"), ('h', "ⓗ"), ('i', "ⓘ"), ('j', "ⓙ"), ('k', "ⓚ"), ('l', "ⓛ"),
    ('m', "ⓜ"), ('n', "ⓝ"), ('o', "ⓞ"), ('p', "ⓟ"), ('q', "ⓠ"), ('r', "ⓡ"),
    ('s', "ⓢ"), ('t', "ⓣ"), ('u', "ⓤ"), ('v', "ⓥ"), ('w', "ⓦ"), ('x', "ⓧ"),
    ('y', "ⓨ"), ('z', "ⓩ"),
    ('A', "Ⓐ"), ('B', "Ⓑ"), ('C', "Ⓒ"), ('D', "Ⓓ"), ('E', "Ⓔ"), ('F', "Ⓕ"),
    ('G', "Ⓖ"), ('H', "Ⓗ"), ('I', "Ⓘ"), ('J', "Ⓙ"), ('K', "Ⓚ"), ('L', "Ⓛ"),
    ('M', "Ⓜ"), ('N', "Ⓝ"), ('O', "Ⓞ"), ('P', "Ⓟ"), ('Q', "Ⓠ"), ('R', "Ⓡ"),
    ('S', "Ⓢ"), ('T', "Ⓣ"), ('U', "Ⓤ"), ('V', "Ⓥ"), ('W', "Ⓦ"), ('X', "Ⓧ"),
    ('Y', "Ⓨ"), ('Z', "Ⓩ"),
    ('0', "⓪"), ('1', "①"), ('2', "②"), ('3', "③"), ('4', "④"), ('5', "⑤"),
    ('6', "⑥"), ('7', "⑦"), ('8', "⑧"), ('9', "⑨"),
];

/// Negative circled capitals; lowercase shares the same glyphs.
pub(crate) const CIRCLED_NEGATIVE: &[(char, &str)] = &[
    ('a', "🅐"), ('b', "🅑"), ('c', "🅒"), ('d', "🅓"), ('e', "🅔"), ('f', "🅕"),
    ('g', "🅖"), ('h', "🅗"), ('i', "🅘"), ('j', "🅙"), ('k', "🅚"), ('l', "🅛"),
    ('m', "🅜"), ('n', "🅝"), ('o', "🅞"), ('p', "🅟"), ('q', "🅠"), ('r', "🅡"),
    ('s', "🅢"), ('t', "🅣"), ('u', "🅤"), ('v', "🅥"), ('w', "🅦"), ('x', "🅧"),
    ('y', "🅨"), ('z', "🅩"),
    ('A', "🅐"), ('B', "🅑"), ('C', "🅒"), ('D', "🅓"), ('E', "🅔"), ('F', "🅕"),
    ('G', "🅖"), ('H', "🅗"), ('I', "🅘"), ('J', "🅙"), ('K', "🅚"), ('L', "🅛"),
    ('M', "🅜"), ('N', "🅝"), ('O', "🅞"), ('P', "🅟"), ('Q', "🅠"), ('R', "🅡"),
    ('S', "🅢"), ('T', "🅣"), ('U', "🅤"), ('V', "🅥"), ('W', "🅦"), ('X', "🅧"),
    ('Y', "🅨"), ('Z', "🅩"),
];

/// Parenthesized small letters for both cases. There is no parenthesized zero.
pub(crate) const PARENTHESIZED: &[(char, &str)] = &[
    ('a', "⒜"), ('b', "⒝"), ('c', "⒞"), ('d', "⒟"), ('e', "⒠"), ('f', "⒡"),
    ('g', "⒢"), ('h', "⒣"), ('i', "⒤"), ('j', "⒥"), ('k', "⒦"), ('l', "⒧"),
    ('m', "⒨"), ('n', "⒩"), ('o', "⒪"), ('p', "⒫"), ('q', "⒬"), ('r', "⒭"),
    ('s', "⒮"), ('t', "⒯"), ('u', "⒰"), ('v', "⒱"), ('w', "⒲"), ('x', "⒳"),
    ('y', "⒴"), ('z', "⒵"),
    ('A', "⒜"), ('B', "⒝"), ('C', "⒞"), ('D', "⒟"), ('E', "⒠"), ('F', "⒡"),
    ('G', "⒢"), ('H', "⒣"), ('I', "⒤"), ('J', "⒥"), ('K', "⒦"), ('L', "⒧"),
    ('M', "⒨"), ('N', "⒩"), ('O', "⒪"), ('P', "⒫"), ('Q', "⒬"), ('R', "⒭"),
    ('S', "⒮"), ('T', "⒯"), ('U', "⒰"), ('V', "⒱"), ('W', "⒲"), ('X', "⒳"),
    ('Y', "⒴"), ('Z', "⒵"),
    ('1', "⑴"), ('2', "⑵"), ('3', "⑶"), ('4', "⑷"), ('5', "⑸"), ('6', "⑹"),
    ('7', "⑺"), ('8', "⑻"), ('9', "⑼"),
];

/// Squared capitals; lowercase shares the same glyphs.
pub(crate) const SQUARED: &[(char, &str)] = &[
    ('a', "🄰"), ('b', "🄱"), ('c', "🄲"), ('d', "🄳"), ('e', "🄴"), ('f', "🄵"),
    ('g', "🄶"), ('h', "🄷"), ('i', "🄸"), ('j', "🄹"), ('k', "🄺"), ('l', "🄻"),
    ('m', "🄼"), ('n', "🄽"), ('o', "🄾"), ('p', "🄿"), ('q', "🅀"), ('r', "🅁"),
    ('s', "🅂"), ('t', "🅃"), ('u', "🅄"), ('v', "🅅"), ('w', "🅆"), ('x', "🅇"),
    ('y', "🅈"), ('z', "🅉"),
    ('A', "🄰"), ('B', "🄱"), ('C', "🄲"), ('D', "🄳"), ('E', "🄴"), ('F', "🄵"),
    ('G', "🄶"), ('H', "🄷"), ('I', "🄸"), ('J', "🄹"), ('K', "🄺"), ('L', "🄻"),
    ('M', "🄼"), ('N', "🄽"), ('O', "🄾"), ('P', "🄿"), ('Q', "🅀"), ('R', "🅁"),
    ('S', "🅂"), ('T', "🅃"), ('U', "🅄"), ('V', "🅅"), ('W', "🅆"), ('X', "🅇"),
    ('Y', "🅈"), ('Z', "🅉"),
];

/// Negative squared capitals; lowercase shares the same glyphs.
pub(crate) const SQUARED_NEGATIVE: &[(char, &str)] = &[
    ('a', "🅰"), ('b', "🅱"), ('c', "🅲"), ('d', "🅳"), ('e', "🅴"), ('f', "🅵"),
    ('g', "🅶"), ('h', "🅷"), ('i', "🅸"), ('j', "🅹"), ('k', "🅺"), ('l', "🅻"),
    ('m', "🅼"), ('n', "🅽"), ('o', "🅾"), ('p', "🅿"), ('q', "🆀"), ('r', "🆁"),
    ('s', "🆂"), ('t', "🆃"), ('u', "🆄"), ('v', "🆅"), ('w', "🆆"), ('x', "🆇"),
    ('y', "🆈"), ('z', "🆉"),
    ('A', "🅰"), ('B', "🅱"), ('C', "🅲"), ('D', "🅳"), ('E', "🅴"), ('F', "🅵"),
    ('G', "🅶"), ('H', "🅷"), ('I', "🅸"), ('J', "🅹"), ('K', "🅺"), ('L', "🅻"),
    ('M', "🅼"), ('N', "🅽"), ('O', "🅾"), ('P', "🅿"), ('Q', "🆀"), ('R', "🆁"),
    ('S', "🆂"), ('T', "🆃"), ('U', "🆄"), ('V', "🆅"), ('W', "🆆"), ('X', "🆇"),
    ('Y', "🆈"), ('Z', "🆉"),
];

/// Small capitals. `x` has no small-capital form and maps to itself.
pub(crate) const SMALL_CAPS: &[(char, &str)] = &[
    ('a', "ᴀ"), ('b', "ʙ"), ('c', "ᴄ"), ('d', "ᴅ"), ('e', "ᴇ"), ('f', "ꜰ"),
    ('g', "ɢ"), ('h', "ʜ"), ('i', "ɪ"), ('j', "ᴊ"), ('k', "ᴋ"), ('l', "ʟ"),
    ('m', "ᴍ"), ('n', "ɴ"), ('o', "ᴏ"), ('p', "ᴘ"), ('q', "ǫ"), ('r', "ʀ"),
    ('s', "ꜱ"), ('t', "ᴛ"), ('u', "ᴜ"), ('v', "ᴠ"), ('w', "ᴡ"), ('x', "x"),
    ('y', "ʏ"), ('z', "ᴢ"),
    ('A', "ᴀ"), ('B', "ʙ"), ('C', "ᴄ"), ('D', "ᴅ"), ('E', "ᴇ"), ('F', "ꜰ"),
    ('G', "ɢ"), ('H', "ʜ"), ('I', "ɪ"), ('J', "ᴊ"), ('K', "ᴋ"), ('L', "ʟ"),
    ('M', "ᴍ"), ('N', "ɴ"), ('O', "ᴏ"), ('P', "ᴘ"), ('Q', "ǫ"), ('R', "ʀ"),
    ('S', "ꜱ"), ('T', "ᴛ"), ('U', "ᴜ"), ('V', "ᴠ"), ('W', "ᴡ"), ('X', "x"),
    ('Y', "ʏ"), ('Z', "ᴢ"),
];

/// Subscript forms. Only the letters Unicode encodes are present.
pub(crate) const SUBSCRIPT: &[(char, &str)] = &[
    ('a', "ₐ"), ('e', "ₑ"), ('h', "ₕ"), ('i', "ᵢ"), ('j', "ⱼ"), ('k', "ₖ"),
    ('l', "ₗ"), ('m', "ₘ"), ('n', "ₙ"), ('o', "ₒ"), ('p', "ₚ"), ('r', "ᵣ"),
    ('s', "ₛ"), ('t', "ₜ"), ('u', "ᵤ"), ('v', "ᵥ"), ('x', "ₓ"),
    ('0', "₀"), ('1', "₁"), ('2', "₂"), ('3', "₃"), ('4', "₄"), ('5', "₅"),
    ('6', "₆"), ('7', "₇"), ('8', "₈"), ('9', "₉"),
    ('+', "₊"), ('-', "₋"), ('=', "₌"), ('(', "₍"), (')', "₎"),
];

/// Superscript (modifier letter) forms. `q` and several capitals have none.
pub(crate) const SUPERSCRIPT: &[(char, &str)] = &[
    ('a', "ᵃ"), ('b', "ᵇ"), ('c', "ᶜ"), ('d', "ᵈ"), ('e', "ᵉ"), ('f', "ᶠ"),
    ('g', "ᵍ"), ('h', "ʰ"), ('i', "ⁱ"), ('j', "ʲ"), ('k', "ᵏ"), ('l', "ˡ"),
    ('m', "ᵐ"), ('n', "ⁿ"), ('o', "ᵒ"), ('p', "ᵖ"), ('r', "ʳ"), ('s', "ˢ"),
    ('t', "ᵗ"), ('u', "ᵘ"), ('v', "ᵛ"), ('w', "ʷ"), ('x', "ˣ"), ('y', "ʸ"),
    ('z', "ᶻ"),
    ('A', "ᴬ"), ('B', "ᴮ"), ('D', "ᴰ"), ('E', "ᴱ"), ('G', "ᴳ"), ('H', "ᴴ"),
    ('I', "ᴵ"), ('J', "ᴶ"), ('K', "ᴷ"), ('L', "ᴸ"), ('M', "ᴹ"), ('N', "ᴺ"),
    ('O', "ᴼ"), ('P', "ᴾ"), ('R', "ᴿ"), ('T', "ᵀ"), ('U', "ᵁ"), ('V', "ⱽ"),
    ('W', "ᵂ"),
    ('0', "⁰"), ('1', "¹"), ('2', "²"), ('3', "³"), ('4', "⁴"), ('5', "⁵"),
    ('6', "⁶"), ('7', "⁷"), ('8', "⁸"), ('9', "⁹"),
    ('+', "⁺"), ('-', "⁻"), ('=', "⁼"), ('(', "⁽"), (')', "⁾"),
];

/// Upside-down glyphs. Read in original order these only look rotated
/// per letter; the backwards variant also reverses the sequence.
pub(crate) const INVERTED: &[(char, &str)] = &[
    ('a', "ɐ"), ('b', "q"), ('c', "ɔ"), ('d', "p"), ('e', "ǝ"), ('f', "ɟ"),
    ('g', "ƃ"), ('h', "ɥ"), ('i', "ᴉ"), ('j', "ɾ"), ('k', "ʞ"), ('l', "l"),
    ('m', "ɯ"), ('n', "u"), ('o', "o"), ('p', "d"), ('q', "b"), ('r', "ɹ"),
    ('s', "s"), ('t', "ʇ"), ('u', "n"), ('v', "ʌ"), ('w', "ʍ"), ('x', "x"),
    ('y', "ʎ"), ('z', "z"),
    ('A', "∀"), ('B', "q"), ('C', "Ɔ"), ('D', "p"), ('E', "Ǝ"), ('F', "Ⅎ"),
    ('G', "פ"), ('H', "H"), ('I', "I"), ('J', "ſ"), ('K', "ʞ"), ('L', "˥"),
    ('M', "W"), ('N', "N"), ('O', "O"), ('P', "Ԁ"), ('Q', "b"), ('R', "ɹ"),
    ('S', "S"), ('T', "┴"), ('U', "∩"), ('V', "Λ"), ('W', "M"), ('X', "X"),
    ('Y', "⅄"), ('Z', "Z"),
    ('0', "0"), ('1', "Ɩ"), ('2', "ᄅ"), ('3', "Ɛ"), ('4', "ㄣ"), ('5', "ϛ"),
    ('6', "9"), ('7', "ㄥ"), ('8', "8"), ('9', "6"),
    ('.', "˙"), (',', "'"), ('!', "¡"), ('?', "¿"), ('\'', ","), ('"', "„"),
    ('(', ")"), (')', "("),
];

/// Mirrored glyphs. Deliberately partial: letters with no convincing
/// mirror image (h, i, l, m, o, r, t, u, v, w, x and several capitals)
/// are absent and pass through unchanged.
pub(crate) const REVERSED: &[(char, &str)] = &[
    ('a', "ɒ"), ('b', "d"), ('c', "ɔ"), ('d', "b"), ('e', "ɘ"), ('f', "ʇ"),
    ('g', "ǫ"), ('j', "į"), ('k', "ʞ"), ('n', "n"), ('p', "q"), ('q', "p"),
    ('s', "ꙅ"), ('y', "ʏ"), ('z', "ƹ"),
    ('A', "A"), ('B', "d"), ('C', "Ɔ"), ('D', "ᗡ"), ('E', "Ǝ"), ('F', "ꟻ"),
    ('G', "Ә"), ('J', "Ⴑ"), ('K', "ﻼ"), ('L', "⅃"), ('N', "И"), ('P', "ꟼ"),
    ('Q', "Ọ"), ('R', "Я"), ('S', "Ꙅ"), ('T', "T"), ('Y', "Y"), ('Z', "Ƹ"),
];

/// Currency signs that resemble letters, both cases.
pub(crate) const CURRENCY: &[(char, &str)] = &[
    ('a', "₳"), ('b', "฿"), ('c', "₵"), ('d', "₫"), ('e', "€"), ('f', "ƒ"),
    ('l', "£"), ('n', "₦"), ('p', "₱"), ('r', "₹"), ('s', "$"), ('t', "₮"),
    ('w', "₩"), ('y', "¥"),
    ('A', "₳"), ('B', "฿"), ('C', "₵"), ('D', "₫"), ('E', "€"), ('F', "ƒ"),
    ('L', "£"), ('N', "₦"), ('P', "₱"), ('R', "₹"), ('S', "$"), ('T', "₮"),
    ('W', "₩"), ('Y', "¥"),
];
