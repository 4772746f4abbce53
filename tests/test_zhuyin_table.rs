use pinyin_notation::zhuyin::{lookup_zhuyin, syllable_count, syllables};
use pinyin_notation::{pinyin_to_zhuyin, zhuyin_to_ipa, ToneMark};

#[cfg(test)]
mod tests {
    use super::*;

    fn is_bopomofo(c: char) -> bool {
        ('\u{3105}'..='\u{312F}').contains(&c)
    }

    #[test]
    fn every_value_is_bopomofo() {
        for (base, zhuyin) in syllables() {
            assert!(!zhuyin.is_empty(), "empty zhuyin for {}", base);
            assert!(
                zhuyin.chars().all(is_bopomofo),
                "non-bopomofo char in {} -> {}",
                base,
                zhuyin
            );
        }
    }

    #[test]
    fn every_syllable_takes_every_tone() {
        for (base, zhuyin) in syllables() {
            for tone in ToneMark::ALL {
                let numeric = format!("{}{}", base, tone.digit());
                let expected = format!("{}{}", zhuyin, tone.zhuyin_mark());
                assert_eq!(pinyin_to_zhuyin(&numeric), expected);
            }
        }
    }

    #[test]
    fn umlaut_spellings_share_a_reading() {
        assert_eq!(lookup_zhuyin("lü"), lookup_zhuyin("lv"));
        assert_eq!(lookup_zhuyin("nü"), lookup_zhuyin("nv"));
        assert_eq!(lookup_zhuyin("lv"), Some("ㄌㄩ"));
    }

    #[test]
    fn table_covers_standard_inventory() {
        assert!(syllable_count() > 400);
        for base in ["a", "zhi", "chi", "shi", "ri", "zi", "ci", "si", "er", "zhuang", "xiong"] {
            assert!(lookup_zhuyin(base).is_some(), "missing {}", base);
        }
        assert_eq!(lookup_zhuyin("zh"), None);
    }

    #[test]
    fn zhuyin_output_parses_as_ipa() {
        // Everything the table produces should be readable by the Zhuyin transcriber
        for (base, _) in syllables() {
            let ipa = zhuyin_to_ipa(&pinyin_to_zhuyin(&format!("{}4", base)));
            assert!(!ipa.contains("[ERROR"), "{} -> {}", base, ipa);
        }
    }
}
