//! Notation converters for Mandarin learners.
//!
//! The free functions re-exported here are the individual converters:
//! numeric ⇄ diacritic pinyin, pinyin → Zhuyin, pinyin → approximate IPA,
//! Zhuyin → IPA, and the ASCII IPA shorthand used while typing. Every
//! converter is total: odd input is passed through rather than rejected.
//!
//! [`PinyinNotation`] bundles them behind named configs (`p2d`, `p2z`, …) for
//! the CLI and the C API, and converts multi-line text in parallel.

use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use rayon::prelude::*;

pub mod input_field;
pub mod ipa_shorthand;
pub mod pinyin_ipa;
pub mod pinyin_tone;
pub mod tone_marks;
pub mod utils;
pub mod vocab;
pub mod zhuyin;
pub mod zhuyin_ipa;

pub use crate::ipa_shorthand::{convert_ipa_shorthand, ipa_answer_matches, IpaOptions};
pub use crate::pinyin_ipa::pinyin_to_approx_ipa;
pub use crate::pinyin_tone::{pinyin_diacritic_to_tone_number, pinyin_tone_to_diacritic};
pub use crate::tone_marks::ToneMark;
pub use crate::zhuyin::pinyin_to_zhuyin;
pub use crate::zhuyin_ipa::zhuyin_to_ipa;

// Process-wide, for callers that only see a C string.
static LAST_ERROR: Mutex<Option<String>> = Mutex::new(None);

/// A named conversion.
///
/// The discriminants are the stable ids used across the C API.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotationConfig {
    /// `p2d`: `ni3 hao3` → `nǐ hǎo`
    ToneToDiacritic = 1,
    /// `d2p`: `nǐ hǎo` → `ni3 hao3`
    DiacriticToTone = 2,
    /// `p2z`: `ni3 hao3` → `ㄋㄧˇ ㄏㄠˇ`
    PinyinToZhuyin = 3,
    /// `p2i`: `ni3 hao3` → `/ni˨˩˦ hɑʊ̯˨˩˦/`
    PinyinToIpa = 4,
    /// `z2i`: `ㄋㄧˇ ㄏㄠˇ` → `/ni3 xɑu3/`
    ZhuyinToIpa = 5,
    /// `ipa`: `t1` → `θ`
    IpaShorthand = 6,
}

impl NotationConfig {
    pub const ALL: [NotationConfig; 6] = [
        NotationConfig::ToneToDiacritic,
        NotationConfig::DiacriticToTone,
        NotationConfig::PinyinToZhuyin,
        NotationConfig::PinyinToIpa,
        NotationConfig::ZhuyinToIpa,
        NotationConfig::IpaShorthand,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            NotationConfig::ToneToDiacritic => "p2d",
            NotationConfig::DiacriticToTone => "d2p",
            NotationConfig::PinyinToZhuyin => "p2z",
            NotationConfig::PinyinToIpa => "p2i",
            NotationConfig::ZhuyinToIpa => "z2i",
            NotationConfig::IpaShorthand => "ipa",
        }
    }

    #[inline]
    pub fn to_ffi(self) -> u32 {
        self as u32
    }

    pub fn from_ffi(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|cfg| cfg.to_ffi() == id)
    }
}

impl TryFrom<&str> for NotationConfig {
    type Error = NotationError;

    /// Parses a config name, ignoring ASCII case.
    fn try_from(name: &str) -> Result<Self, Self::Error> {
        NotationConfig::ALL
            .into_iter()
            .find(|cfg| cfg.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| NotationError::InvalidConfig(name.to_string()))
    }
}

impl FromStr for NotationConfig {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NotationConfig::try_from(s)
    }
}

impl fmt::Display for NotationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    InvalidConfig(String),
    IoError(String),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::InvalidConfig(name) => write!(f, "Invalid config: {}", name),
            NotationError::IoError(msg) => write!(f, "I/O Error: {}", msg),
        }
    }
}

impl std::error::Error for NotationError {}

impl From<std::io::Error> for NotationError {
    fn from(err: std::io::Error) -> Self {
        NotationError::IoError(err.to_string())
    }
}

/// Runs the converters over whole documents.
#[derive(Debug, Clone)]
pub struct PinyinNotation {
    mandarin: bool,
    is_parallel: bool,
}

impl Default for PinyinNotation {
    fn default() -> Self {
        Self::new()
    }
}

impl PinyinNotation {
    /// Parallel on, Mandarin IPA codes off.
    pub fn new() -> Self {
        PinyinNotation {
            mandarin: false,
            is_parallel: true,
        }
    }

    pub fn get_parallel(&self) -> bool {
        self.is_parallel
    }

    pub fn set_parallel(&mut self, is_parallel: bool) {
        self.is_parallel = is_parallel;
    }

    pub fn get_mandarin(&self) -> bool {
        self.mandarin
    }

    /// Enables the `.1`–`.5` tone-contour codes for the `ipa` config.
    pub fn set_mandarin(&mut self, mandarin: bool) {
        self.mandarin = mandarin;
    }

    /// Converts `input` with the config named `config`.
    ///
    /// An unknown name records the error in the last-error slot and returns
    /// the input unchanged.
    ///
    /// ```
    /// use pinyin_notation::PinyinNotation;
    ///
    /// let notation = PinyinNotation::new();
    /// assert_eq!(notation.convert("ni3 hao3", "p2d"), "nǐ hǎo");
    /// assert_eq!(notation.convert("ni3 hao3", "xyz"), "ni3 hao3");
    /// ```
    pub fn convert(&self, input: &str, config: &str) -> String {
        match NotationConfig::try_from(config) {
            Ok(cfg) => self.convert_with_config(input, cfg),
            Err(err) => {
                Self::set_last_error(&err.to_string());
                input.to_string()
            }
        }
    }

    /// Converts `input` line by line.
    ///
    /// Line endings are kept, and blank lines are copied as-is. With
    /// parallelism on, lines are converted on the rayon pool and reassembled
    /// in their original order.
    pub fn convert_with_config(&self, input: &str, config: NotationConfig) -> String {
        if !input.contains('\n') {
            return self.convert_line(input, config);
        }

        let lines: Vec<&str> = input.split_inclusive('\n').collect();
        let converted: Vec<String> = if self.is_parallel {
            lines
                .par_iter()
                .map(|line| self.convert_terminated_line(line, config))
                .collect()
        } else {
            lines
                .iter()
                .map(|line| self.convert_terminated_line(line, config))
                .collect()
        };
        converted.concat()
    }

    fn convert_terminated_line(&self, line: &str, config: NotationConfig) -> String {
        let body = line.trim_end_matches(&['\n', '\r'][..]);
        let ending = &line[body.len()..];
        let mut out = self.convert_line(body, config);
        out.push_str(ending);
        out
    }

    fn convert_line(&self, line: &str, config: NotationConfig) -> String {
        if line.trim().is_empty() {
            return line.to_string();
        }
        match config {
            NotationConfig::ToneToDiacritic => pinyin_tone_to_diacritic(line),
            NotationConfig::DiacriticToTone => pinyin_diacritic_to_tone_number(line),
            NotationConfig::PinyinToZhuyin => pinyin_to_zhuyin(line),
            NotationConfig::PinyinToIpa => pinyin_to_approx_ipa(line),
            NotationConfig::ZhuyinToIpa => zhuyin_to_ipa(line),
            NotationConfig::IpaShorthand => convert_ipa_shorthand(
                line,
                &IpaOptions {
                    mandarin: self.mandarin,
                },
            ),
        }
    }

    pub fn set_last_error(err_msg: &str) {
        if let Ok(mut last_error) = LAST_ERROR.lock() {
            *last_error = Some(err_msg.to_string());
        }
    }

    pub fn get_last_error() -> Option<String> {
        LAST_ERROR.lock().ok().and_then(|guard| guard.clone())
    }

    pub fn clear_last_error() {
        if let Ok(mut last_error) = LAST_ERROR.lock() {
            *last_error = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_names_round_trip() {
        for cfg in NotationConfig::ALL {
            assert_eq!(NotationConfig::try_from(cfg.as_str()), Ok(cfg));
            assert_eq!(NotationConfig::from_ffi(cfg.to_ffi()), Some(cfg));
        }
        assert_eq!("P2Z".parse::<NotationConfig>(), Ok(NotationConfig::PinyinToZhuyin));
        assert_eq!(NotationConfig::from_ffi(0), None);
        assert_eq!(NotationConfig::from_ffi(7), None);
    }

    #[test]
    fn invalid_config_name_is_reported() {
        let err = NotationConfig::try_from("s2t").unwrap_err();
        assert_eq!(err.to_string(), "Invalid config: s2t");
    }

    #[test]
    fn io_failure_becomes_notation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: NotationError = io_err.into();
        assert_eq!(err, NotationError::IoError("missing.txt".to_string()));
        assert_eq!(err.to_string(), "I/O Error: missing.txt");
    }

    #[test]
    fn multi_line_keeps_endings_and_blank_lines() {
        let notation = PinyinNotation::new();
        let input = "ni3 hao3\r\n\nzai4 jian4\n";
        let expected = "nǐ hǎo\r\n\nzài jiàn\n";
        assert_eq!(
            notation.convert_with_config(input, NotationConfig::ToneToDiacritic),
            expected
        );
    }

    #[test]
    fn serial_and_parallel_agree() {
        let input = "ni3\nhao3\nma5\n".repeat(50);
        let mut notation = PinyinNotation::new();
        let parallel = notation.convert_with_config(&input, NotationConfig::PinyinToZhuyin);
        notation.set_parallel(false);
        let serial = notation.convert_with_config(&input, NotationConfig::PinyinToZhuyin);
        assert_eq!(parallel, serial);
        assert!(serial.starts_with("ㄋㄧˇ\nㄏㄠˇ\nㄇㄚ˙\n"));
    }

    #[test]
    fn mandarin_flag_reaches_ipa_shorthand() {
        let mut notation = PinyinNotation::new();
        assert_eq!(notation.convert("ni.3", "ipa"), "ni.3");
        notation.set_mandarin(true);
        assert_eq!(notation.convert("ni.3", "ipa"), "ni˨˩˦");
    }
}
