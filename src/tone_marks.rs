//! Tone marks and the per-vowel diacritic tables shared by every renderer.
//!
//! A Mandarin tone can be written four ways in this crate:
//!
//! - as a trailing digit in numeric pinyin (`ni3`),
//! - as a diacritic on exactly one vowel (`nǐ`),
//! - as a Zhuyin suffix glyph (`ㄋㄧˇ`),
//! - as a sequence of Chao tone letters in IPA (`ni˨˩˦`).
//!
//! [`ToneMark`] is the pivot between those notations.

/// One of the five Mandarin tones.
///
/// The discriminant is the tone digit used in numeric pinyin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToneMark {
    /// Tone 1, high level (55).
    High = 1,
    /// Tone 2, rising (35).
    Rising = 2,
    /// Tone 3, dipping (214).
    Dipping = 3,
    /// Tone 4, falling (51).
    Falling = 4,
    /// Tone 5, neutral / light.
    Neutral = 5,
}

impl ToneMark {
    pub const ALL: [ToneMark; 5] = [
        ToneMark::High,
        ToneMark::Rising,
        ToneMark::Dipping,
        ToneMark::Falling,
        ToneMark::Neutral,
    ];

    /// Parses a tone digit `'1'..='5'`.
    ///
    /// ```
    /// use pinyin_notation::tone_marks::ToneMark;
    ///
    /// assert_eq!(ToneMark::from_digit('3'), Some(ToneMark::Dipping));
    /// assert_eq!(ToneMark::from_digit('0'), None);
    /// ```
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(ToneMark::High),
            '2' => Some(ToneMark::Rising),
            '3' => Some(ToneMark::Dipping),
            '4' => Some(ToneMark::Falling),
            '5' => Some(ToneMark::Neutral),
            _ => None,
        }
    }

    pub fn digit(self) -> char {
        match self {
            ToneMark::High => '1',
            ToneMark::Rising => '2',
            ToneMark::Dipping => '3',
            ToneMark::Falling => '4',
            ToneMark::Neutral => '5',
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize - 1
    }

    /// Zhuyin tone glyph appended after the syllable.
    ///
    /// Tone 1 is written explicitly (`ˉ`), so an explicit first tone can be told
    /// apart from a syllable whose tone was never given.
    pub fn zhuyin_mark(self) -> &'static str {
        ["ˉ", "ˊ", "ˇ", "ˋ", "˙"][self.index()]
    }

    /// Chao tone-letter contour for the tone. The neutral tone has no contour.
    pub fn chao_contour(self) -> &'static str {
        ["˥˥", "˧˥", "˨˩˦", "˥˩", ""][self.index()]
    }

    /// Returns `vowel` carrying this tone's diacritic.
    ///
    /// `v` is accepted as the keyboard stand-in for `ü`. The neutral tone returns
    /// the bare vowel (`v` becomes `ü`). Non-vowels yield `None`.
    pub fn mark_vowel(self, vowel: char) -> Option<char> {
        let row = match vowel {
            'a' => ['ā', 'á', 'ǎ', 'à', 'a'],
            'e' => ['ē', 'é', 'ě', 'è', 'e'],
            'i' => ['ī', 'í', 'ǐ', 'ì', 'i'],
            'o' => ['ō', 'ó', 'ǒ', 'ò', 'o'],
            'u' => ['ū', 'ú', 'ǔ', 'ù', 'u'],
            'ü' | 'v' => ['ǖ', 'ǘ', 'ǚ', 'ǜ', 'ü'],
            _ => return None,
        };
        Some(row[self.index()])
    }
}

/// Splits a diacritic vowel into its plain vowel and tone.
///
/// A bare `ü` is reported as the neutral tone; every other plain letter is `None`.
pub fn split_diacritic(c: char) -> Option<(char, ToneMark)> {
    use ToneMark::*;
    let split = match c {
        'ā' => ('a', High),
        'á' => ('a', Rising),
        'ǎ' => ('a', Dipping),
        'à' => ('a', Falling),
        'ē' => ('e', High),
        'é' => ('e', Rising),
        'ě' => ('e', Dipping),
        'è' => ('e', Falling),
        'ī' => ('i', High),
        'í' => ('i', Rising),
        'ǐ' => ('i', Dipping),
        'ì' => ('i', Falling),
        'ō' => ('o', High),
        'ó' => ('o', Rising),
        'ǒ' => ('o', Dipping),
        'ò' => ('o', Falling),
        'ū' => ('u', High),
        'ú' => ('u', Rising),
        'ǔ' => ('u', Dipping),
        'ù' => ('u', Falling),
        'ǖ' => ('ü', High),
        'ǘ' => ('ü', Rising),
        'ǚ' => ('ü', Dipping),
        'ǜ' => ('ü', Falling),
        'ü' => ('ü', Neutral),
        _ => return None,
    };
    Some(split)
}

/// True for a vowel carrying one of the four tone diacritics.
#[inline]
pub fn is_toned_vowel(c: char) -> bool {
    matches!(split_diacritic(c), Some((_, tone)) if tone != ToneMark::Neutral)
}

/// One backspace step on a pinyin vowel.
///
/// A toned `ü` drops its tone first (`ǚ` → `ü`), a bare `ü` then loses the
/// umlaut (`ü` → `u`), and every other toned vowel goes straight to its plain
/// form. Characters outside the table return `None` and are deleted normally.
pub fn reduce_diacritic(c: char) -> Option<char> {
    match split_diacritic(c)? {
        ('ü', ToneMark::Neutral) => Some('u'),
        (base, _) => Some(base),
    }
}
