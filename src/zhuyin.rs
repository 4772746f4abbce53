//! Pinyin → Zhuyin (Bopomofo) by whole-syllable table lookup.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::pinyin_tone::{has_tone_diacritic, pinyin_diacritic_to_tone_number, split_pinyin_tone};

/// Pinyin syllable (tone stripped, `ü` written `v`) → Zhuyin.
///
/// The `nü`/`lü` keys are kept alongside their `v` spellings; lookups always
/// normalise to `v` first.
#[rustfmt::skip]
const PINYIN_TO_ZHUYIN: &[(&str, &str)] = &[
    // zero initial
    ("a", "ㄚ"), ("o", "ㄛ"), ("e", "ㄜ"), ("er", "ㄦ"),
    ("ai", "ㄞ"), ("ei", "ㄟ"), ("ao", "ㄠ"), ("ou", "ㄡ"),
    ("an", "ㄢ"), ("en", "ㄣ"), ("ang", "ㄤ"), ("eng", "ㄥ"),

    // b
    ("ba", "ㄅㄚ"), ("bo", "ㄅㄛ"), ("bai", "ㄅㄞ"), ("bei", "ㄅㄟ"),
    ("bao", "ㄅㄠ"), ("ban", "ㄅㄢ"), ("ben", "ㄅㄣ"), ("bang", "ㄅㄤ"),
    ("beng", "ㄅㄥ"), ("bi", "ㄅㄧ"), ("bie", "ㄅㄧㄝ"), ("biao", "ㄅㄧㄠ"),
    ("bian", "ㄅㄧㄢ"), ("bin", "ㄅㄧㄣ"), ("bing", "ㄅㄧㄥ"), ("bu", "ㄅㄨ"),

    // p
    ("pa", "ㄆㄚ"), ("po", "ㄆㄛ"), ("pai", "ㄆㄞ"), ("pei", "ㄆㄟ"),
    ("pao", "ㄆㄠ"), ("pou", "ㄆㄡ"), ("pan", "ㄆㄢ"), ("pen", "ㄆㄣ"),
    ("pang", "ㄆㄤ"), ("peng", "ㄆㄥ"), ("pi", "ㄆㄧ"), ("pie", "ㄆㄧㄝ"),
    ("piao", "ㄆㄧㄠ"), ("pian", "ㄆㄧㄢ"), ("pin", "ㄆㄧㄣ"), ("ping", "ㄆㄧㄥ"),
    ("pu", "ㄆㄨ"),

    // m
    ("ma", "ㄇㄚ"), ("mo", "ㄇㄛ"), ("me", "ㄇㄜ"), ("mai", "ㄇㄞ"),
    ("mei", "ㄇㄟ"), ("mao", "ㄇㄠ"), ("mou", "ㄇㄡ"), ("man", "ㄇㄢ"),
    ("men", "ㄇㄣ"), ("mang", "ㄇㄤ"), ("meng", "ㄇㄥ"), ("mi", "ㄇㄧ"),
    ("mie", "ㄇㄧㄝ"), ("miao", "ㄇㄧㄠ"), ("miu", "ㄇㄧㄡ"), ("mian", "ㄇㄧㄢ"),
    ("min", "ㄇㄧㄣ"), ("ming", "ㄇㄧㄥ"), ("mu", "ㄇㄨ"),

    // f
    ("fa", "ㄈㄚ"), ("fo", "ㄈㄛ"), ("fei", "ㄈㄟ"), ("fou", "ㄈㄡ"),
    ("fan", "ㄈㄢ"), ("fen", "ㄈㄣ"), ("fang", "ㄈㄤ"), ("feng", "ㄈㄥ"),
    ("fu", "ㄈㄨ"),

    // d
    ("da", "ㄉㄚ"), ("de", "ㄉㄜ"), ("dai", "ㄉㄞ"), ("dei", "ㄉㄟ"),
    ("dao", "ㄉㄠ"), ("dou", "ㄉㄡ"), ("dan", "ㄉㄢ"), ("den", "ㄉㄣ"),
    ("dang", "ㄉㄤ"), ("deng", "ㄉㄥ"), ("di", "ㄉㄧ"), ("die", "ㄉㄧㄝ"),
    ("diao", "ㄉㄧㄠ"), ("diu", "ㄉㄧㄡ"), ("dian", "ㄉㄧㄢ"), ("ding", "ㄉㄧㄥ"),
    ("du", "ㄉㄨ"), ("duo", "ㄉㄨㄛ"), ("dui", "ㄉㄨㄟ"), ("duan", "ㄉㄨㄢ"),
    ("dun", "ㄉㄨㄣ"), ("dong", "ㄉㄨㄥ"),

    // t
    ("ta", "ㄊㄚ"), ("te", "ㄊㄜ"), ("tai", "ㄊㄞ"), ("tao", "ㄊㄠ"),
    ("tou", "ㄊㄡ"), ("tan", "ㄊㄢ"), ("tang", "ㄊㄤ"), ("teng", "ㄊㄥ"),
    ("ti", "ㄊㄧ"), ("tie", "ㄊㄧㄝ"), ("tiao", "ㄊㄧㄠ"), ("tian", "ㄊㄧㄢ"),
    ("ting", "ㄊㄧㄥ"), ("tu", "ㄊㄨ"), ("tuo", "ㄊㄨㄛ"), ("tui", "ㄊㄨㄟ"),
    ("tuan", "ㄊㄨㄢ"), ("tun", "ㄊㄨㄣ"), ("tong", "ㄊㄨㄥ"),

    // n
    ("na", "ㄋㄚ"), ("ne", "ㄋㄜ"), ("nai", "ㄋㄞ"), ("nei", "ㄋㄟ"),
    ("nao", "ㄋㄠ"), ("nou", "ㄋㄡ"), ("nan", "ㄋㄢ"), ("nen", "ㄋㄣ"),
    ("nang", "ㄋㄤ"), ("neng", "ㄋㄥ"), ("ni", "ㄋㄧ"), ("nie", "ㄋㄧㄝ"),
    ("niao", "ㄋㄧㄠ"), ("niu", "ㄋㄧㄡ"), ("nian", "ㄋㄧㄢ"), ("nin", "ㄋㄧㄣ"),
    ("niang", "ㄋㄧㄤ"), ("ning", "ㄋㄧㄥ"), ("nu", "ㄋㄨ"), ("nuo", "ㄋㄨㄛ"),
    ("nuan", "ㄋㄨㄢ"), ("nong", "ㄋㄨㄥ"), ("nü", "ㄋㄩ"), ("nue", "ㄋㄩㄝ"),
    ("nv", "ㄋㄩ"),

    // l
    ("la", "ㄌㄚ"), ("le", "ㄌㄜ"), ("lai", "ㄌㄞ"), ("lei", "ㄌㄟ"),
    ("lao", "ㄌㄠ"), ("lou", "ㄌㄡ"), ("lan", "ㄌㄢ"), ("lang", "ㄌㄤ"),
    ("leng", "ㄌㄥ"), ("li", "ㄌㄧ"), ("lia", "ㄌㄧㄚ"), ("lie", "ㄌㄧㄝ"),
    ("liao", "ㄌㄧㄠ"), ("liu", "ㄌㄧㄡ"), ("lian", "ㄌㄧㄢ"), ("lin", "ㄌㄧㄣ"),
    ("liang", "ㄌㄧㄤ"), ("ling", "ㄌㄧㄥ"), ("lu", "ㄌㄨ"), ("luo", "ㄌㄨㄛ"),
    ("luan", "ㄌㄨㄢ"), ("lun", "ㄌㄨㄣ"), ("long", "ㄌㄨㄥ"), ("lü", "ㄌㄩ"),
    ("lue", "ㄌㄩㄝ"), ("lv", "ㄌㄩ"),

    // g
    ("ga", "ㄍㄚ"), ("ge", "ㄍㄜ"), ("gai", "ㄍㄞ"), ("gei", "ㄍㄟ"),
    ("gao", "ㄍㄠ"), ("gou", "ㄍㄡ"), ("gan", "ㄍㄢ"), ("gen", "ㄍㄣ"),
    ("gang", "ㄍㄤ"), ("geng", "ㄍㄥ"), ("gu", "ㄍㄨ"), ("gua", "ㄍㄨㄚ"),
    ("guo", "ㄍㄨㄛ"), ("guai", "ㄍㄨㄞ"), ("gui", "ㄍㄨㄟ"), ("guan", "ㄍㄨㄢ"),
    ("gun", "ㄍㄨㄣ"), ("guang", "ㄍㄨㄤ"), ("gong", "ㄍㄨㄥ"),

    // k
    ("ka", "ㄎㄚ"), ("ke", "ㄎㄜ"), ("kai", "ㄎㄞ"), ("kei", "ㄎㄟ"),
    ("kao", "ㄎㄠ"), ("kou", "ㄎㄡ"), ("kan", "ㄎㄢ"), ("ken", "ㄎㄣ"),
    ("kang", "ㄎㄤ"), ("keng", "ㄎㄥ"), ("ku", "ㄎㄨ"), ("kua", "ㄎㄨㄚ"),
    ("kuo", "ㄎㄨㄛ"), ("kuai", "ㄎㄨㄞ"), ("kui", "ㄎㄨㄟ"), ("kuan", "ㄎㄨㄢ"),
    ("kun", "ㄎㄨㄣ"), ("kuang", "ㄎㄨㄤ"), ("kong", "ㄎㄨㄥ"),

    // h
    ("ha", "ㄏㄚ"), ("he", "ㄏㄜ"), ("hai", "ㄏㄞ"), ("hei", "ㄏㄟ"),
    ("hao", "ㄏㄠ"), ("hou", "ㄏㄡ"), ("han", "ㄏㄢ"), ("hen", "ㄏㄣ"),
    ("hang", "ㄏㄤ"), ("heng", "ㄏㄥ"), ("hu", "ㄏㄨ"), ("hua", "ㄏㄨㄚ"),
    ("huo", "ㄏㄨㄛ"), ("huai", "ㄏㄨㄞ"), ("hui", "ㄏㄨㄟ"), ("huan", "ㄏㄨㄢ"),
    ("hun", "ㄏㄨㄣ"), ("huang", "ㄏㄨㄤ"), ("hong", "ㄏㄨㄥ"),

    // j
    ("ji", "ㄐㄧ"), ("jia", "ㄐㄧㄚ"), ("jie", "ㄐㄧㄝ"), ("jiao", "ㄐㄧㄠ"),
    ("jiu", "ㄐㄧㄡ"), ("jian", "ㄐㄧㄢ"), ("jin", "ㄐㄧㄣ"), ("jiang", "ㄐㄧㄤ"),
    ("jing", "ㄐㄧㄥ"), ("ju", "ㄐㄩ"), ("jue", "ㄐㄩㄝ"), ("juan", "ㄐㄩㄢ"),
    ("jun", "ㄐㄩㄣ"), ("jiong", "ㄐㄩㄥ"),

    // q
    ("qi", "ㄑㄧ"), ("qia", "ㄑㄧㄚ"), ("qie", "ㄑㄧㄝ"), ("qiao", "ㄑㄧㄠ"),
    ("qiu", "ㄑㄧㄡ"), ("qian", "ㄑㄧㄢ"), ("qin", "ㄑㄧㄣ"), ("qiang", "ㄑㄧㄤ"),
    ("qing", "ㄑㄧㄥ"), ("qu", "ㄑㄩ"), ("que", "ㄑㄩㄝ"), ("quan", "ㄑㄩㄢ"),
    ("qun", "ㄑㄩㄣ"), ("qiong", "ㄑㄩㄥ"),

    // x
    ("xi", "ㄒㄧ"), ("xia", "ㄒㄧㄚ"), ("xie", "ㄒㄧㄝ"), ("xiao", "ㄒㄧㄠ"),
    ("xiu", "ㄒㄧㄡ"), ("xian", "ㄒㄧㄢ"), ("xin", "ㄒㄧㄣ"), ("xiang", "ㄒㄧㄤ"),
    ("xing", "ㄒㄧㄥ"), ("xu", "ㄒㄩ"), ("xue", "ㄒㄩㄝ"), ("xuan", "ㄒㄩㄢ"),
    ("xun", "ㄒㄩㄣ"), ("xiong", "ㄒㄩㄥ"),

    // zh
    ("zha", "ㄓㄚ"), ("zhe", "ㄓㄜ"), ("zhi", "ㄓ"), ("zhai", "ㄓㄞ"),
    ("zhei", "ㄓㄟ"), ("zhao", "ㄓㄠ"), ("zhou", "ㄓㄡ"), ("zhan", "ㄓㄢ"),
    ("zhen", "ㄓㄣ"), ("zhang", "ㄓㄤ"), ("zheng", "ㄓㄥ"), ("zhu", "ㄓㄨ"),
    ("zhua", "ㄓㄨㄚ"), ("zhuo", "ㄓㄨㄛ"), ("zhuai", "ㄓㄨㄞ"), ("zhui", "ㄓㄨㄟ"),
    ("zhuan", "ㄓㄨㄢ"), ("zhun", "ㄓㄨㄣ"), ("zhuang", "ㄓㄨㄤ"), ("zhong", "ㄓㄨㄥ"),

    // ch
    ("cha", "ㄔㄚ"), ("che", "ㄔㄜ"), ("chi", "ㄔ"), ("chai", "ㄔㄞ"),
    ("chao", "ㄔㄠ"), ("chou", "ㄔㄡ"), ("chan", "ㄔㄢ"), ("chen", "ㄔㄣ"),
    ("chang", "ㄔㄤ"), ("cheng", "ㄔㄥ"), ("chu", "ㄔㄨ"), ("chua", "ㄔㄨㄚ"),
    ("chuo", "ㄔㄨㄛ"), ("chuai", "ㄔㄨㄞ"), ("chui", "ㄔㄨㄟ"), ("chuan", "ㄔㄨㄢ"),
    ("chun", "ㄔㄨㄣ"), ("chuang", "ㄔㄨㄤ"), ("chong", "ㄔㄨㄥ"),

    // sh
    ("sha", "ㄕㄚ"), ("she", "ㄕㄜ"), ("shi", "ㄕ"), ("shai", "ㄕㄞ"),
    ("shei", "ㄕㄟ"), ("shao", "ㄕㄠ"), ("shou", "ㄕㄡ"), ("shan", "ㄕㄢ"),
    ("shen", "ㄕㄣ"), ("shang", "ㄕㄤ"), ("sheng", "ㄕㄥ"), ("shu", "ㄕㄨ"),
    ("shua", "ㄕㄨㄚ"), ("shuo", "ㄕㄨㄛ"), ("shuai", "ㄕㄨㄞ"), ("shui", "ㄕㄨㄟ"),
    ("shuan", "ㄕㄨㄢ"), ("shun", "ㄕㄨㄣ"), ("shuang", "ㄕㄨㄤ"),

    // r
    ("ra", "ㄖㄚ"), ("re", "ㄖㄜ"), ("ri", "ㄖ"), ("rao", "ㄖㄠ"),
    ("rou", "ㄖㄡ"), ("ran", "ㄖㄢ"), ("ren", "ㄖㄣ"), ("rang", "ㄖㄤ"),
    ("reng", "ㄖㄥ"), ("ru", "ㄖㄨ"), ("ruo", "ㄖㄨㄛ"), ("rui", "ㄖㄨㄟ"),
    ("ruan", "ㄖㄨㄢ"), ("run", "ㄖㄨㄣ"), ("rong", "ㄖㄨㄥ"),

    // z
    ("za", "ㄗㄚ"), ("ze", "ㄗㄜ"), ("zi", "ㄗ"), ("zai", "ㄗㄞ"),
    ("zei", "ㄗㄟ"), ("zao", "ㄗㄠ"), ("zou", "ㄗㄡ"), ("zan", "ㄗㄢ"),
    ("zen", "ㄗㄣ"), ("zang", "ㄗㄤ"), ("zeng", "ㄗㄥ"), ("zu", "ㄗㄨ"),
    ("zuo", "ㄗㄨㄛ"), ("zui", "ㄗㄨㄟ"), ("zuan", "ㄗㄨㄢ"), ("zun", "ㄗㄨㄣ"),
    ("zong", "ㄗㄨㄥ"),

    // c
    ("ca", "ㄘㄚ"), ("ce", "ㄘㄜ"), ("ci", "ㄘ"), ("cai", "ㄘㄞ"),
    ("cao", "ㄘㄠ"), ("cou", "ㄘㄡ"), ("can", "ㄘㄢ"), ("cen", "ㄘㄣ"),
    ("cang", "ㄘㄤ"), ("ceng", "ㄘㄥ"), ("cu", "ㄘㄨ"), ("cuo", "ㄘㄨㄛ"),
    ("cui", "ㄘㄨㄟ"), ("cuan", "ㄘㄨㄢ"), ("cun", "ㄘㄨㄣ"), ("cong", "ㄘㄨㄥ"),

    // s
    ("sa", "ㄙㄚ"), ("se", "ㄙㄜ"), ("si", "ㄙ"), ("sai", "ㄙㄞ"),
    ("sao", "ㄙㄠ"), ("sou", "ㄙㄡ"), ("san", "ㄙㄢ"), ("sen", "ㄙㄣ"),
    ("sang", "ㄙㄤ"), ("seng", "ㄙㄥ"), ("su", "ㄙㄨ"), ("suo", "ㄙㄨㄛ"),
    ("sui", "ㄙㄨㄟ"), ("suan", "ㄙㄨㄢ"), ("sun", "ㄙㄨㄣ"), ("song", "ㄙㄨㄥ"),

    // y
    ("ya", "ㄧㄚ"), ("yo", "ㄧㄛ"), ("ye", "ㄧㄝ"), ("yai", "ㄧㄞ"),
    ("yao", "ㄧㄠ"), ("you", "ㄧㄡ"), ("yan", "ㄧㄢ"), ("yin", "ㄧㄣ"),
    ("yang", "ㄧㄤ"), ("ying", "ㄧㄥ"), ("yi", "ㄧ"), ("yong", "ㄩㄥ"),
    ("yu", "ㄩ"), ("yue", "ㄩㄝ"), ("yuan", "ㄩㄢ"), ("yun", "ㄩㄣ"),

    // w
    ("wa", "ㄨㄚ"), ("wo", "ㄨㄛ"), ("wai", "ㄨㄞ"), ("wei", "ㄨㄟ"),
    ("wan", "ㄨㄢ"), ("wen", "ㄨㄣ"), ("wang", "ㄨㄤ"), ("weng", "ㄨㄥ"),
    ("wu", "ㄨ"),
];

static ZHUYIN_TABLE: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| PINYIN_TO_ZHUYIN.iter().copied().collect());

/// Looks up the Zhuyin spelling of a toneless syllable such as `guo` or `lv`.
pub fn lookup_zhuyin(base: &str) -> Option<&'static str> {
    ZHUYIN_TABLE.get(base).copied()
}

/// Number of syllables the table knows.
pub fn syllable_count() -> usize {
    ZHUYIN_TABLE.len()
}

/// Iterates the table in its source order.
pub fn syllables() -> impl Iterator<Item = (&'static str, &'static str)> {
    PINYIN_TO_ZHUYIN.iter().copied()
}

/// Converts a pinyin syllable or a whitespace-separated phrase to Zhuyin.
///
/// Numeric tones become suffix glyphs (`ˉ ˊ ˇ ˋ ˙`); a syllable without a tone
/// digit gets no glyph at all. Diacritic input is read through
/// [`pinyin_diacritic_to_tone_number`] first. A syllable the table does not
/// know is returned as typed, and a warning is logged.
///
/// ```
/// use pinyin_notation::pinyin_to_zhuyin;
///
/// assert_eq!(pinyin_to_zhuyin("guo3"), "ㄍㄨㄛˇ");
/// assert_eq!(pinyin_to_zhuyin("ni3 hao3"), "ㄋㄧˇ ㄏㄠˇ");
/// assert_eq!(pinyin_to_zhuyin("xyz1"), "xyz1");
/// ```
pub fn pinyin_to_zhuyin(syllable_or_phrase: &str) -> String {
    syllable_or_phrase
        .split_whitespace()
        .map(syllable_to_zhuyin)
        .collect::<Vec<_>>()
        .join(" ")
}

fn syllable_to_zhuyin(syllable: &str) -> String {
    let numeric;
    let source = if has_tone_diacritic(syllable) {
        numeric = pinyin_diacritic_to_tone_number(syllable);
        numeric.as_str()
    } else {
        syllable
    };

    let normalized = source.to_lowercase().replace('ü', "v").replace("u:", "v");
    let (base, tone) = split_pinyin_tone(&normalized);

    match lookup_zhuyin(base) {
        Some(zhuyin) => {
            let mut out = String::with_capacity(zhuyin.len() + 2);
            out.push_str(zhuyin);
            if let Some(tone) = tone {
                out.push_str(tone.zhuyin_mark());
            }
            out
        }
        None => {
            log::warn!("unknown pinyin syllable: {}", base);
            syllable.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_duplicate_keys() {
        assert_eq!(syllable_count(), PINYIN_TO_ZHUYIN.len());
        assert!(syllable_count() > 400);
    }

    #[test]
    fn tone_one_is_explicit_and_missing_tone_is_blank() {
        assert_eq!(pinyin_to_zhuyin("ma1"), "ㄇㄚˉ");
        assert_eq!(pinyin_to_zhuyin("ma"), "ㄇㄚ");
        assert_eq!(pinyin_to_zhuyin("ma5"), "ㄇㄚ˙");
    }

    #[test]
    fn umlaut_spellings_normalise_to_v() {
        assert_eq!(pinyin_to_zhuyin("lü3"), "ㄌㄩˇ");
        assert_eq!(pinyin_to_zhuyin("lu:3"), "ㄌㄩˇ");
        assert_eq!(pinyin_to_zhuyin("nv3"), "ㄋㄩˇ");
        assert_eq!(pinyin_to_zhuyin("LV4"), "ㄌㄩˋ");
    }

    #[test]
    fn diacritic_input_is_accepted() {
        assert_eq!(pinyin_to_zhuyin("guǒ zhī"), "ㄍㄨㄛˇ ㄓˉ");
        assert_eq!(pinyin_to_zhuyin("nǚ"), "ㄋㄩˇ");
    }

    #[test]
    fn unknown_syllable_is_returned_as_typed() {
        assert_eq!(pinyin_to_zhuyin("Blah2"), "Blah2");
        assert_eq!(pinyin_to_zhuyin("ni3 qqq hao3"), "ㄋㄧˇ qqq ㄏㄠˇ");
    }
}
