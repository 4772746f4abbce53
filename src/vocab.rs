//! Shape of a vocabulary entry as created from a dictionary lookup.

use serde::{Deserialize, Serialize};

use crate::pinyin_ipa::pinyin_to_approx_ipa;
use crate::pinyin_tone::syllable_to_tone_number;
use crate::zhuyin::pinyin_to_zhuyin;

/// How far along the learner is with an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningState {
    #[default]
    NotStarted,
    Learning,
    Learned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabEntry {
    pub hanzi: String,
    /// Numeric-tone pinyin, e.g. `bao4 zhi3`.
    pub pinyin: String,
    pub zhuyin: String,
    pub ipa: String,
    pub english: String,
    #[serde(default)]
    pub state: LearningState,
    #[serde(default)]
    pub correct_count: u32,
}

impl VocabEntry {
    /// Builds a fresh entry from a lookup result.
    ///
    /// Lookup sources usually give diacritic pinyin; it is stored with tone
    /// numbers and the Zhuyin and IPA columns are derived from it.
    ///
    /// ```
    /// use pinyin_notation::vocab::VocabEntry;
    ///
    /// let entry = VocabEntry::from_lookup("报纸", "bào zhǐ", "newspaper");
    /// assert_eq!(entry.pinyin, "bao4 zhi3");
    /// assert_eq!(entry.zhuyin, "ㄅㄠˋ ㄓˇ");
    /// ```
    pub fn from_lookup(hanzi: &str, pinyin: &str, english: &str) -> Self {
        // Every syllable ends in a tone digit, untoned ones read as neutral
        let numeric = pinyin
            .split_whitespace()
            .map(|syllable| match syllable.chars().last() {
                Some('1'..='5') => syllable.to_string(),
                _ => syllable_to_tone_number(syllable),
            })
            .collect::<Vec<_>>()
            .join(" ");

        VocabEntry {
            hanzi: hanzi.to_string(),
            zhuyin: pinyin_to_zhuyin(&numeric),
            ipa: pinyin_to_approx_ipa(&numeric),
            pinyin: numeric,
            english: english.to_string(),
            state: LearningState::NotStarted,
            correct_count: 0,
        }
    }
}
