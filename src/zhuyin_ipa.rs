//! Zhuyin → IPA with tone numbers (`ㄋㄧˇ ㄏㄠˇ` → `/ni3 xɑu3/`).
//!
//! Unlike [`crate::pinyin_ipa`], this transcriber works from the Bopomofo
//! initial/final inventory, so its segments follow the standard phonological
//! tables rather than letter rewriting. Tones are kept as digits.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Zhuyin tone glyph → tone digit. An unmarked syllable is first tone.
const TONE_GLYPHS: [(char, char); 5] = [('ˉ', '1'), ('ˊ', '2'), ('ˇ', '3'), ('ˋ', '4'), ('˙', '5')];

const INITIALS: &[(&str, &str)] = &[
    ("ㄅ", "p"),
    ("ㄆ", "pʰ"),
    ("ㄇ", "m"),
    ("ㄈ", "f"),
    ("ㄉ", "t"),
    ("ㄊ", "tʰ"),
    ("ㄋ", "n"),
    ("ㄌ", "l"),
    ("ㄍ", "k"),
    ("ㄎ", "kʰ"),
    // velar rather than glottal
    ("ㄏ", "x"),
    ("ㄐ", "tɕ"),
    ("ㄑ", "tɕʰ"),
    ("ㄒ", "ɕ"),
    ("ㄓ", "ʈʂ"),
    ("ㄔ", "ʈʂʰ"),
    ("ㄕ", "ʂ"),
    ("ㄖ", "ɻ"),
    ("ㄗ", "ts"),
    ("ㄘ", "tsʰ"),
    ("ㄙ", "s"),
];

/// Initials that stand alone as a syllable, voiced through the apical vowel.
const SIBILANTS: [&str; 7] = ["ㄓ", "ㄔ", "ㄕ", "ㄖ", "ㄗ", "ㄘ", "ㄙ"];

const APICAL_VOWEL: &str = "ɨ";

#[rustfmt::skip]
const FINALS: &[(&str, &str)] = &[
    // no medial
    ("ㄚ", "a"), ("ㄛ", "o"), ("ㄜ", "ɤ"), ("ㄝ", "ɛ"),
    ("ㄞ", "ai"), ("ㄟ", "ei"), ("ㄠ", "ɑu"), ("ㄡ", "ou"),
    ("ㄢ", "an"), ("ㄣ", "ən"), ("ㄤ", "ɑŋ"), ("ㄥ", "ɤŋ"),
    ("ㄦ", "aɚ"), ("ㄭ", "ɨ"),
    // ㄧ
    ("ㄧ", "i"), ("ㄧㄚ", "ia"), ("ㄧㄛ", "io"), ("ㄧㄝ", "iɛ"),
    ("ㄧㄞ", "iai"), ("ㄧㄠ", "iɑu"), ("ㄧㄡ", "iou"), ("ㄧㄢ", "iɛn"),
    ("ㄧㄣ", "in"), ("ㄧㄤ", "iɑŋ"), ("ㄧㄥ", "iŋ"),
    // ㄨ
    ("ㄨ", "u"), ("ㄨㄚ", "ua"), ("ㄨㄛ", "uo"), ("ㄨㄞ", "uai"),
    ("ㄨㄟ", "uei"), ("ㄨㄢ", "uan"), ("ㄨㄣ", "uən"), ("ㄨㄤ", "uɑŋ"),
    ("ㄨㄥ", "uɤŋ"),
    // ㄩ
    ("ㄩ", "y"), ("ㄩㄝ", "yɛ"), ("ㄩㄢ", "yɛn"), ("ㄩㄣ", "yn"),
    ("ㄩㄥ", "iʊŋ"),
];

static INITIAL_MAP: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| INITIALS.iter().copied().collect());

static FINAL_MAP: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| FINALS.iter().copied().collect());

/// Transcribes Zhuyin text to a `/…/`-bracketed IPA string.
///
/// Syllables are separated by whitespace. A syllable that cannot be split into
/// a known initial and final is rendered as `[ERROR: <syllable>]` and logged.
///
/// ```
/// use pinyin_notation::zhuyin_to_ipa;
///
/// assert_eq!(zhuyin_to_ipa("ㄋㄧˇ ㄏㄠˇ"), "/ni3 xɑu3/");
/// assert_eq!(zhuyin_to_ipa("ㄓ"), "/ʈʂɨ1/");
/// ```
pub fn zhuyin_to_ipa(text: &str) -> String {
    let syllables: Vec<String> = text.split_whitespace().map(convert_syllable).collect();
    format!("/{}/", syllables.join(" "))
}

/// Strips a trailing tone glyph and returns the remainder with its tone digit.
fn split_tone_glyph(syllable: &str) -> (&str, char) {
    for (glyph, digit) in TONE_GLYPHS {
        if let Some(rest) = syllable.strip_suffix(glyph) {
            return (rest, digit);
        }
    }
    (syllable, '1')
}

fn convert_syllable(syllable: &str) -> String {
    let (body, tone) = split_tone_glyph(syllable);

    if let Some(ipa) = FINAL_MAP.get(body) {
        return format!("{ipa}{tone}");
    }

    // Longest initial first; every Zhuyin initial is a single glyph today.
    let boundaries: Vec<usize> = body
        .char_indices()
        .map(|(i, _)| i)
        .skip(1)
        .chain(std::iter::once(body.len()))
        .collect();

    for &split in boundaries.iter().rev() {
        let (initial, rest) = body.split_at(split);
        let Some(initial_ipa) = INITIAL_MAP.get(initial) else {
            continue;
        };

        if rest.is_empty() {
            if SIBILANTS.contains(&initial) {
                return format!("{initial_ipa}{APICAL_VOWEL}{tone}");
            }
            return unparsable(syllable);
        }

        if let Some(final_ipa) = FINAL_MAP.get(rest) {
            return format!("{initial_ipa}{final_ipa}{tone}");
        }
    }

    unparsable(syllable)
}

fn unparsable(syllable: &str) -> String {
    log::warn!("cannot parse zhuyin syllable: {}", syllable);
    format!("[ERROR: {syllable}]")
}
