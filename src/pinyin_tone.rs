//! Numeric-tone pinyin (`ni3 hao3`) ⇄ diacritic pinyin (`nǐ hǎo`).
//!
//! The forward direction also handles compound words typed without spaces
//! (`zhong1guo2` → `zhōngguó`) by segmenting each token left to right on its
//! embedded tone digits.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tone_marks::{is_toned_vowel, split_diacritic, ToneMark};

/// Upper bound on tone-marked segments converted inside one token.
const MAX_SEGMENTS_PER_TOKEN: usize = 10;

/// `consonants* vowels+ (ng|n)? tone-digit`, anchored at the start of the remainder.
///
/// Trying `ng` before `n` gives the same result as `n(?!g)|ng`: the two only
/// disagree when the `g` is followed by a tone digit, where both pick `ng`.
static SEGMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([^aeiouüv]*)([aeiouüv]+)(ng|n)?([1-5])").unwrap());

/// Whole-syllable split into base and optional trailing tone digit.
static SYLLABLE_TONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([a-zü:]+)([1-5])?$").unwrap());

/// Converts numeric-tone pinyin to diacritic pinyin.
///
/// Tokens are separated by single spaces and re-joined the same way, so the
/// spacing of live-typed text is kept. `u:` is accepted for `ü`, and `v` is
/// accepted as an ASCII stand-in. Anything that does not end in a tone digit
/// passes through untouched.
///
/// ```
/// use pinyin_notation::pinyin_tone_to_diacritic;
///
/// assert_eq!(pinyin_tone_to_diacritic("ni3 hao3"), "nǐ hǎo");
/// assert_eq!(pinyin_tone_to_diacritic("zhong1guo2"), "zhōngguó");
/// assert_eq!(pinyin_tone_to_diacritic("lu:4"), "lǜ");
/// ```
pub fn pinyin_tone_to_diacritic(phrase: &str) -> String {
    let text = phrase.replace("u:", "ü");
    text.split(' ')
        .map(convert_token)
        .collect::<Vec<_>>()
        .join(" ")
}

fn convert_token(token: &str) -> String {
    let mut result = String::with_capacity(token.len() + 4);
    let mut remaining = token;
    let mut segments = 0;

    while !remaining.is_empty() && segments < MAX_SEGMENTS_PER_TOKEN {
        let Some(caps) = SEGMENT_RE.captures(remaining) else {
            break;
        };
        segments += 1;

        let whole = caps.get(0).map_or(0, |m| m.end());
        let consonants = caps.get(1).map_or("", |m| m.as_str());
        let vowels = caps.get(2).map_or("", |m| m.as_str()).to_lowercase();
        let nasal = caps.get(3).map_or("", |m| m.as_str());
        let tone = caps
            .get(4)
            .and_then(|m| m.as_str().chars().next())
            .and_then(ToneMark::from_digit)
            .unwrap_or(ToneMark::Neutral);

        result.push_str(consonants);
        result.push_str(&mark_vowel_cluster(&vowels, tone));
        result.push_str(nasal);
        remaining = &remaining[whole..];
    }

    if !remaining.is_empty() && segments == MAX_SEGMENTS_PER_TOKEN {
        log::debug!(
            "segment cap reached, keeping remainder verbatim: {:?}",
            remaining
        );
    }
    result.push_str(remaining);
    result
}

/// Places the tone on one vowel of a lowercase vowel cluster.
///
/// Precedence: `a`, then `e`, then the `o` of an exact `ou`, otherwise the
/// last vowel.
fn mark_vowel_cluster(vowels: &str, tone: ToneMark) -> String {
    let chars: Vec<char> = vowels.chars().collect();
    let Some(last) = chars.len().checked_sub(1) else {
        return String::new();
    };

    let target = if let Some(i) = chars.iter().position(|&c| c == 'a') {
        i
    } else if let Some(i) = chars.iter().position(|&c| c == 'e') {
        i
    } else if vowels == "ou" {
        0
    } else {
        last
    };

    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if i == target {
                tone.mark_vowel(c).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Converts diacritic pinyin back to numeric-tone pinyin.
///
/// Each whitespace-separated syllable loses its first toned vowel's diacritic
/// and gains the tone digit at its end. Syllables without a tone mark are
/// read as the neutral tone and get `5`. Syllables are re-joined with single
/// spaces.
///
/// ```
/// use pinyin_notation::pinyin_diacritic_to_tone_number;
///
/// assert_eq!(pinyin_diacritic_to_tone_number("bào zhǐ"), "bao4 zhi3");
/// assert_eq!(pinyin_diacritic_to_tone_number("lǘ"), "lü2");
/// assert_eq!(pinyin_diacritic_to_tone_number("ma"), "ma5");
/// ```
pub fn pinyin_diacritic_to_tone_number(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(syllable_to_tone_number)
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn syllable_to_tone_number(syllable: &str) -> String {
    let mut out = String::with_capacity(syllable.len() + 1);

    let toned = syllable.char_indices().find_map(|(i, c)| match split_diacritic(c) {
        Some((base, tone)) if tone != ToneMark::Neutral => Some((i, c, base, tone)),
        _ => None,
    });

    match toned {
        Some((i, c, base, tone)) => {
            out.push_str(&syllable[..i]);
            out.push(base);
            out.push_str(&syllable[i + c.len_utf8()..]);
            out.push(tone.digit());
        }
        None => {
            out.push_str(syllable);
            out.push(ToneMark::Neutral.digit());
        }
    }
    out
}

/// True when `text` contains any vowel carrying a tone diacritic.
pub fn has_tone_diacritic(text: &str) -> bool {
    text.chars().any(is_toned_vowel)
}

/// Splits a numeric-pinyin syllable into its base and trailing tone.
///
/// Syllables that are not plain letters (plus `ü` and `:`) followed by an
/// optional digit come back whole, with no tone.
pub fn split_pinyin_tone(syllable: &str) -> (&str, Option<ToneMark>) {
    match SYLLABLE_TONE_RE.captures(syllable) {
        Some(caps) => {
            let base = caps.get(1).map_or(syllable, |m| m.as_str());
            let tone = caps
                .get(2)
                .and_then(|m| m.as_str().chars().next())
                .and_then(ToneMark::from_digit);
            (base, tone)
        }
        None => (syllable, None),
    }
}
