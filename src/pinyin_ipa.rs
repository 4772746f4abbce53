//! Rough pinyin → IPA rendering, used to prefill the IPA column of new entries.
//!
//! This is letter rewriting, not phonology: each rule fires at most once per
//! syllable, in list order, on whatever the earlier rules left behind. For a
//! table-driven transcription see [`crate::zhuyin_ipa`].

use crate::pinyin_tone::split_pinyin_tone;

/// Ordered rewrite rules. Initials come before the vowels, and the
/// two-letter initials come before their one-letter prefixes.
#[rustfmt::skip]
const APPROX_RULES: [(&str, &str); 21] = [
    // initials
    ("zh", "ʈ͡ʂ"), ("ch", "ʈ͡ʂʰ"), ("sh", "ʂ"), ("r", "ʐ"),
    ("x", "ɕ"), ("j", "tɕ"), ("q", "tɕʰ"),
    ("z", "ts"), ("c", "tsʰ"), ("s", "s"),
    // vowels
    ("i", "i"), ("u", "u"), ("ü", "y"), ("v", "y"),
    ("ao", "ɑʊ̯"), ("ai", "aɪ̯"), ("ei", "eɪ̯"), ("ou", "oʊ̯"),
    ("a", "a"), ("e", "ə"), ("o", "o"),
];

/// Renders numeric-tone pinyin as approximate IPA wrapped in slashes.
///
/// The tone digit becomes a Chao contour; neutral-tone and toneless syllables
/// get none.
///
/// ```
/// use pinyin_notation::pinyin_to_approx_ipa;
///
/// assert_eq!(pinyin_to_approx_ipa("guo3"), "/guo˨˩˦/");
/// assert_eq!(pinyin_to_approx_ipa("zhi1"), "/ʈ͡ʂi˥˥/");
/// ```
pub fn pinyin_to_approx_ipa(phrase: &str) -> String {
    let syllables: Vec<String> = phrase.split_whitespace().map(approx_syllable).collect();
    format!("/{}/", syllables.join(" "))
}

fn approx_syllable(syllable: &str) -> String {
    let lower = syllable.to_lowercase();
    let (base, tone) = split_pinyin_tone(&lower);

    let mut ipa = base.to_string();
    for (from, to) in APPROX_RULES {
        ipa = ipa.replacen(from, to, 1);
    }

    if let Some(tone) = tone {
        ipa.push_str(tone.chao_contour());
    }
    ipa
}
