//! ASCII shorthand → IPA symbols for live typing in IPA answer fields.
//!
//! The conversion is a fixed pipeline of four rewrite stages. Each stage reads
//! the previous stage's output, so the order is part of the contract:
//!
//! 1. aspiration digraphs: `ph` → `pʰ`, `Th` → `Tʰ`, …
//! 2. Mandarin tone contours, only with [`IpaOptions::mandarin`]: `.3` → `˨˩˦`, `.5` → nothing
//! 3. Chao tone letters: `!1` → `˩` … `!5` → `˥`
//! 4. letter+digit codes, case-insensitive: `t1` → `θ`, `S2` → `ʂ`, …
//!
//! Text that matches no stage is left alone, so already-converted IPA is a
//! fixed point.

use std::cmp::Reverse;

use once_cell::sync::Lazy;
use regex::{Captures, NoExpand, Regex};

use crate::tone_marks::ToneMark;

/// Options for [`convert_ipa_shorthand`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IpaOptions {
    /// Enables the `.1`–`.5` Mandarin tone-contour codes.
    pub mandarin: bool,
}

impl IpaOptions {
    pub fn mandarin() -> Self {
        IpaOptions { mandarin: true }
    }
}

#[rustfmt::skip]
const ASPIRATION: [(&str, &str); 21] = [
    ("ph", "pʰ"), ("Ph", "Pʰ"), ("PH", "Pʰ"),
    ("th", "tʰ"), ("Th", "Tʰ"), ("TH", "Tʰ"),
    ("kh", "kʰ"), ("Kh", "Kʰ"), ("KH", "Kʰ"),
    ("ch", "cʰ"), ("Ch", "Cʰ"), ("CH", "Cʰ"),
    ("bh", "bʰ"), ("Bh", "Bʰ"), ("BH", "Bʰ"),
    ("dh", "dʰ"), ("Dh", "Dʰ"), ("DH", "Dʰ"),
    ("gh", "gʰ"), ("Gh", "Gʰ"), ("GH", "Gʰ"),
];

/// `!n` → Chao letter. Level 1 is the lowest pitch, level 5 the highest.
const CHAO_LETTERS: [(&str, &str); 5] = [
    ("!5", "˥"),
    ("!4", "˦"),
    ("!3", "˧"),
    ("!2", "˨"),
    ("!1", "˩"),
];

#[rustfmt::skip]
const IPA_CHAR_MAP: &[(&str, &str)] = &[
    // a
    ("a1", "ɑ"), ("a2", "æ"), ("a3", "ɐ"), ("a4", "ɑ̃"),
    // e
    ("e1", "ə"), ("e2", "ɛ"), ("e3", "ɜ"), ("e4", "ɝ"), ("e5", "ɘ"), ("e6", "ɞ"), ("e7", "ɛ̃"), ("e8", "ɚ"),
    // i
    ("i1", "ɪ"), ("i2", "ɨ"), ("i3", "ɪ̈"),
    // o
    ("o1", "ɔ"), ("o2", "ɔ̃"), ("o3", "ø"), ("o4", "œ"), ("o5", "ɶ"),
    // u
    ("u1", "ʊ"), ("u2", "ʉ"), ("u3", "ɥ"),
    // y
    ("y1", "ʏ"), ("y2", "ʎ"), ("y3", "ɣ"), ("y4", "ɤ"), ("y5", "y"),
    // b
    ("b1", "β"), ("b2", "ɓ"), ("b3", "ʙ"),
    // c
    ("c1", "ç"), ("c2", "ɕ"),
    // d
    ("d1", "ð"), ("d2", "ɗ"), ("d3", "ɖ"),
    // f
    ("f1", "ɸ"),
    // g
    ("g1", "ɡ"), ("g2", "ɠ"), ("g3", "ɢ"), ("g4", "ʛ"),
    // h
    ("h1", "ħ"), ("h2", "ɦ"), ("h3", "ɥ"), ("h4", "ɧ"), ("h5", "ʜ"),
    // j
    ("j1", "ɟ"), ("j2", "ʄ"),
    // l
    ("l1", "ɫ"), ("l2", "ɭ"), ("l3", "ɬ"), ("l4", "ʟ"), ("l5", "ɮ"),
    // m
    ("m1", "ɱ"),
    // n
    ("n1", "ŋ"), ("n2", "ɲ"), ("n3", "ɳ"), ("n4", "ɴ"),
    // p
    ("p1", "ɸ"),
    // r
    ("r1", "ɾ"), ("r2", "ɹ"), ("r3", "ʀ"), ("r4", "ʁ"), ("r5", "ɼ"), ("r6", "ɽ"), ("r7", "ɺ"), ("r8", "ɻ"),
    // s
    ("s1", "ʃ"), ("s2", "ʂ"),
    // t
    ("t1", "θ"), ("t2", "ʈ"),
    // v
    ("v1", "ʌ"), ("v2", "ʋ"), ("v3", "ⱱ"),
    // w
    ("w1", "ʍ"),
    // x
    ("x1", "χ"), ("x2", "x"),
    // z
    ("z1", "ʒ"), ("z2", "ʐ"), ("z3", "ʑ"),
    // stress
    ("q1", "ˈ"), ("q2", "ˌ"),
    // length
    ("k1", "ː"), ("k2", "ˑ"),
];

static MANDARIN_TONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.([1-4])").unwrap());

static MANDARIN_NEUTRAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.5").unwrap());

/// One ASCII case-insensitive pattern per code, longest codes first.
static IPA_CHAR_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    let mut entries: Vec<(&str, &str)> = IPA_CHAR_MAP.to_vec();
    // Stable, so codes of equal length keep table order.
    entries.sort_by_key(|(code, _)| Reverse(code.len()));
    entries
        .into_iter()
        .map(|(code, symbol)| {
            let re = Regex::new(&format!("(?i-u){}", regex::escape(code))).unwrap();
            (re, symbol)
        })
        .collect()
});

/// The letter+digit code table, in table order.
pub fn ipa_char_map() -> &'static [(&'static str, &'static str)] {
    IPA_CHAR_MAP
}

/// Chao tone letter for pitch level 1 (lowest) to 5 (highest).
pub fn chao_letter(level: u8) -> Option<&'static str> {
    match level {
        1..=5 => Some(CHAO_LETTERS[usize::from(5 - level)].1),
        _ => None,
    }
}

/// Converts ASCII IPA shorthand to IPA symbols.
///
/// ```
/// use pinyin_notation::{convert_ipa_shorthand, IpaOptions};
///
/// assert_eq!(convert_ipa_shorthand("t1", &IpaOptions::default()), "θ");
/// assert_eq!(convert_ipa_shorthand("ph", &IpaOptions::default()), "pʰ");
/// assert_eq!(convert_ipa_shorthand("ni.3", &IpaOptions::mandarin()), "ni˨˩˦");
/// ```
pub fn convert_ipa_shorthand(text: &str, options: &IpaOptions) -> String {
    let mut result = text.to_string();

    for (digraph, aspirated) in ASPIRATION {
        if result.contains(digraph) {
            result = result.replace(digraph, aspirated);
        }
    }

    if options.mandarin {
        result = MANDARIN_TONE_RE
            .replace_all(&result, |caps: &Captures| {
                caps[1]
                    .chars()
                    .next()
                    .and_then(ToneMark::from_digit)
                    .map_or("", ToneMark::chao_contour)
            })
            .into_owned();
        result = MANDARIN_NEUTRAL_RE.replace_all(&result, "").into_owned();
    }

    for (code, letter) in CHAO_LETTERS {
        if result.contains(code) {
            result = result.replace(code, letter);
        }
    }

    for (pattern, symbol) in IPA_CHAR_PATTERNS.iter() {
        if let std::borrow::Cow::Owned(replaced) = pattern.replace_all(&result, NoExpand(symbol)) {
            result = replaced;
        }
    }

    result
}

/// Compares a typed IPA answer with the expected one.
///
/// Surrounding whitespace and one leading and one trailing `/` are ignored on
/// both sides, and the comparison is case-insensitive, so `/ni3/` matches `ni3`.
pub fn ipa_answer_matches(actual: &str, expected: &str) -> bool {
    strip_slashes(actual).to_lowercase() == strip_slashes(expected).to_lowercase()
}

fn strip_slashes(s: &str) -> &str {
    let s = s.trim();
    let s = s.strip_prefix('/').unwrap_or(s);
    s.strip_suffix('/').unwrap_or(s)
}
