use pinyin_notation::input_field::{EditableField, FieldKind};
use pinyin_notation::vocab::{LearningState, VocabEntry};
use pinyin_notation::zhuyin::syllables;
use pinyin_notation::{
    convert_ipa_shorthand, pinyin_diacritic_to_tone_number, pinyin_to_approx_ipa,
    pinyin_to_zhuyin, pinyin_tone_to_diacritic, zhuyin_to_ipa, IpaOptions, NotationConfig,
    PinyinNotation, ToneMark,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn tone_to_diacritic_test() {
        assert_eq!(pinyin_tone_to_diacritic("ni3"), "nǐ");
        assert_eq!(pinyin_tone_to_diacritic("ni3 hao3"), "nǐ hǎo");
        assert_eq!(pinyin_tone_to_diacritic("ma5"), "ma");
    }

    #[test]
    fn compound_word_segmentation_test() {
        assert_eq!(pinyin_tone_to_diacritic("nan2ren2"), "nánrén");
        assert_eq!(pinyin_tone_to_diacritic("zhong1guo2"), "zhōngguó");
    }

    #[test]
    fn tone_placement_precedence_test() {
        assert_eq!(pinyin_tone_to_diacritic("bai3"), "bǎi");
        assert_eq!(pinyin_tone_to_diacritic("hou3"), "hǒu");
    }

    #[test]
    fn diacritic_to_tone_number_test() {
        assert_eq!(pinyin_diacritic_to_tone_number("bào zhǐ"), "bao4 zhi3");
        assert_eq!(pinyin_diacritic_to_tone_number("lǘ"), "lü2");
        assert_eq!(pinyin_diacritic_to_tone_number("ma"), "ma5");
        assert_eq!(pinyin_diacritic_to_tone_number("wǒ ài nǐ"), "wo3 ai4 ni3");
        assert_eq!(
            pinyin_diacritic_to_tone_number("nán rén nǚ rén"),
            "nan2 ren2 nü3 ren2"
        );
        assert_eq!(pinyin_diacritic_to_tone_number("nǐ  hǎo"), "ni3 hao3");
        assert_eq!(pinyin_diacritic_to_tone_number(""), "");
    }

    #[test]
    fn diacritic_round_trip_over_syllable_table() {
        // `er` carries no vowel+nasal final the segmenter recognises
        for (base, _) in syllables().filter(|(base, _)| *base != "er") {
            for tone in ToneMark::ALL {
                let numeric = format!("{}{}", base, tone.digit());
                let once = pinyin_tone_to_diacritic(&numeric);
                let again = pinyin_tone_to_diacritic(&pinyin_diacritic_to_tone_number(&once));
                assert_eq!(again, once, "round trip failed for {}", numeric);
            }
        }
    }

    #[test]
    fn zhuyin_test() {
        assert_eq!(pinyin_to_zhuyin("guo3"), "ㄍㄨㄛˇ");
        assert_eq!(pinyin_to_zhuyin("zhong1 guo2"), "ㄓㄨㄥˉ ㄍㄨㄛˊ");
        assert_eq!(pinyin_to_zhuyin("xyz3"), "xyz3");
    }

    #[test]
    fn ipa_shorthand_test() {
        let plain = IpaOptions::default();
        let mandarin = IpaOptions { mandarin: true };
        assert_eq!(convert_ipa_shorthand("t1", &plain), "θ");
        assert_eq!(convert_ipa_shorthand("!3", &plain), "˧");
        assert_eq!(convert_ipa_shorthand(".3", &mandarin), "˨˩˦");
        assert_eq!(convert_ipa_shorthand(".5", &mandarin), "");
        assert_eq!(convert_ipa_shorthand("ph", &plain), "pʰ");
        assert_eq!(convert_ipa_shorthand("ni.3", &mandarin), "ni˨˩˦");
        assert_eq!(convert_ipa_shorthand("t2s2ha.2", &mandarin), "ʈʂha˧˥");
    }

    #[test]
    fn ipa_shorthand_is_idempotent_on_ipa() {
        let options = IpaOptions { mandarin: true };
        for ipa in ["θ", "ʈʂʰ", "ˈbɔː", "ni˨˩˦ xɑu˨˩˦", "pʰ˥˩"] {
            assert_eq!(convert_ipa_shorthand(ipa, &options), ipa);
        }
        let once = convert_ipa_shorthand("q1t1e1s1", &options);
        assert_eq!(once, "ˈθəʃ");
        assert_eq!(convert_ipa_shorthand(&once, &options), once);
    }

    #[test]
    fn approx_ipa_is_bracketed() {
        let ipa = pinyin_to_approx_ipa("guo3");
        assert!(ipa.starts_with('/'));
        assert!(ipa.ends_with('/'));
        assert_eq!(pinyin_to_approx_ipa("zhong1 guo2"), "/ʈ͡ʂong˥˥ guo˧˥/");
    }

    #[test]
    fn zhuyin_ipa_test() {
        assert_eq!(zhuyin_to_ipa("ㄋㄧˇ ㄏㄠˇ"), "/ni3 xɑu3/");
        assert_eq!(
            zhuyin_to_ipa(&pinyin_to_zhuyin("zhong1 guo2")),
            "/ʈʂuɤŋ1 kuo2/"
        );
    }

    #[test]
    fn converters_are_total() {
        let odd = ["", " ", "123", "!!!", "ㄅㄅㄅ", "u:u:u:", "\t\n", "5555", "..."];
        for text in odd {
            let _ = pinyin_tone_to_diacritic(text);
            let _ = pinyin_diacritic_to_tone_number(text);
            let _ = pinyin_to_zhuyin(text);
            let _ = convert_ipa_shorthand(text, &IpaOptions { mandarin: true });
            let _ = pinyin_to_approx_ipa(text);
            let _ = zhuyin_to_ipa(text);
        }
    }

    #[test]
    fn notation_convert_by_name_test() {
        let notation = PinyinNotation::new();
        assert_eq!(notation.convert("ni3 hao3", "p2d"), "nǐ hǎo");
        assert_eq!(notation.convert("nǐ hǎo", "d2p"), "ni3 hao3");
        assert_eq!(notation.convert("ni3 hao3", "p2z"), "ㄋㄧˇ ㄏㄠˇ");
        assert_eq!(notation.convert("ni3 hao3", "p2i"), "/ni˨˩˦ hɑʊ̯˨˩˦/");
        assert_eq!(notation.convert("ㄋㄧˇ ㄏㄠˇ", "z2i"), "/ni3 xɑu3/");
        assert_eq!(notation.convert("s1", "ipa"), "ʃ");
    }

    #[test]
    fn notation_invalid_config_returns_input() {
        let notation = PinyinNotation::new();
        assert_eq!(notation.convert("ni3", "s2t"), "ni3");
        assert!(NotationConfig::try_from("s2t").is_err());
    }

    #[test]
    fn notation_multi_line_parallel_test() {
        let input = "ni3 hao3\nzai4 jian4\n\nxie4xie5\n";
        let expected = "nǐ hǎo\nzài jiàn\n\nxièxie\n";
        let mut notation = PinyinNotation::new();
        assert_eq!(
            notation.convert_with_config(input, NotationConfig::ToneToDiacritic),
            expected
        );
        notation.set_parallel(false);
        assert_eq!(
            notation.convert_with_config(input, NotationConfig::ToneToDiacritic),
            expected
        );
    }

    #[test]
    fn field_typing_session_test() {
        let mut field = EditableField::new(FieldKind::Pinyin);
        for c in "zhong1guo2".chars() {
            field.insert(&c.to_string());
        }
        assert_eq!(field.value(), "zhōngguó");
        assert!(field.validate("Zhōngguó"));
        field.backspace();
        assert_eq!(field.value(), "zhōngguo");
    }

    #[test]
    fn vocab_entry_wire_shape_test() {
        let entry = VocabEntry::from_lookup("报纸", "bào zhǐ", "newspaper");
        let value: Value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({
                "hanzi": "报纸",
                "pinyin": "bao4 zhi3",
                "zhuyin": "ㄅㄠˋ ㄓˇ",
                "ipa": "/bɑʊ̯˥˩ ʈ͡ʂi˨˩˦/",
                "english": "newspaper",
                "state": "not_started",
                "correctCount": 0
            })
        );
    }

    #[test]
    fn vocab_entry_reads_stored_progress() {
        let stored = r#"{
            "hanzi": "你好", "pinyin": "ni3 hao3", "zhuyin": "ㄋㄧˇ ㄏㄠˇ",
            "ipa": "/ni˨˩˦ hɑʊ̯˨˩˦/", "english": "hello",
            "state": "learning", "correctCount": 3
        }"#;
        let entry: VocabEntry = serde_json::from_str(stored).unwrap();
        assert_eq!(entry.state, LearningState::Learning);
        assert_eq!(entry.correct_count, 3);

        let fresh = r#"{"hanzi": "好", "pinyin": "hao3", "zhuyin": "ㄏㄠˇ", "ipa": "/hɑʊ̯˨˩˦/", "english": "good"}"#;
        let entry: VocabEntry = serde_json::from_str(fresh).unwrap();
        assert_eq!(entry.state, LearningState::NotStarted);
        assert_eq!(entry.correct_count, 0);
    }
}
