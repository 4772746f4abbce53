//! Editing model for the answer boxes a learner types into.
//!
//! An [`EditableField`] owns a value and a caret. Typing into it runs the live
//! conversion that belongs to its [`FieldKind`] over the whole value, then moves
//! the caret by however much the text grew or shrank. Pinyin fields also
//! undo tone marks one step at a time on backspace.

use crate::ipa_shorthand::{convert_ipa_shorthand, ipa_answer_matches, IpaOptions};
use crate::pinyin_tone::pinyin_tone_to_diacritic;
use crate::tone_marks::reduce_diacritic;
use crate::utils::{char_len, char_to_byte_offset, shift_cursor};

/// What a field converts while the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    /// No conversion.
    #[default]
    Plain,
    /// `ni3` → `nǐ`, `u:` → `ü`.
    Pinyin,
    /// ASCII shorthand → IPA symbols.
    Ipa(IpaOptions),
}

impl FieldKind {
    /// Runs this kind's live conversion over a whole value.
    pub fn convert(&self, value: &str) -> String {
        match self {
            FieldKind::Plain => value.to_string(),
            FieldKind::Pinyin => pinyin_tone_to_diacritic(value),
            FieldKind::Ipa(options) => convert_ipa_shorthand(value, options),
        }
    }
}

/// A text value with a caret, measured in characters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditableField {
    kind: FieldKind,
    value: String,
    cursor: usize,
}

impl EditableField {
    pub fn new(kind: FieldKind) -> Self {
        EditableField {
            kind,
            value: String::new(),
            cursor: 0,
        }
    }

    /// Creates a field holding `value` as-is, with the caret at the end.
    pub fn with_value(kind: FieldKind, value: &str) -> Self {
        EditableField {
            kind,
            value: value.to_string(),
            cursor: char_len(value),
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Places the caret, clamped to the end of the value.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(char_len(&self.value));
    }

    /// Types `text` at the caret and applies the live conversion.
    pub fn insert(&mut self, text: &str) {
        let at = char_to_byte_offset(&self.value, self.cursor);
        self.value.insert_str(at, text);
        self.cursor += char_len(text);
        self.reconvert();
    }

    /// Replaces the whole value, as a paste-over or autofill would.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = char_len(value);
        self.reconvert();
    }

    fn reconvert(&mut self) {
        let converted = self.kind.convert(&self.value);
        if converted != self.value {
            let old_len = char_len(&self.value);
            let new_len = char_len(&converted);
            self.cursor = shift_cursor(self.cursor, old_len, new_len);
            self.value = converted;
        }
    }

    /// Deletes backwards from the caret.
    ///
    /// In a pinyin field a toned vowel before the caret loses its tone instead
    /// of being deleted (`ǐ` → `i`, `ǚ` → `ü` → `u`), and the caret stays put.
    /// Does nothing at the start of the value.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = char_to_byte_offset(&self.value, self.cursor - 1);
        let end = char_to_byte_offset(&self.value, self.cursor);
        let Some(before) = self.value[start..end].chars().next() else {
            return;
        };

        if self.kind == FieldKind::Pinyin {
            if let Some(reduced) = reduce_diacritic(before) {
                self.value.replace_range(start..end, reduced.encode_utf8(&mut [0; 4]));
                return;
            }
        }

        self.value.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Checks the typed value against the expected answer.
    ///
    /// Case is ignored and the typed value is trimmed. IPA fields also ignore
    /// the enclosing slashes on either side.
    pub fn validate(&self, expected: &str) -> bool {
        match self.kind {
            FieldKind::Ipa(_) => ipa_answer_matches(&self.value, expected),
            FieldKind::Plain | FieldKind::Pinyin => {
                self.value.trim().to_lowercase() == expected.to_lowercase()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_chars(field: &mut EditableField, text: &str) {
        for c in text.chars() {
            field.insert(c.encode_utf8(&mut [0; 4]));
        }
    }

    #[test]
    fn pinyin_converts_as_you_type() {
        let mut field = EditableField::new(FieldKind::Pinyin);
        type_chars(&mut field, "ni3");
        assert_eq!(field.value(), "nǐ");
        assert_eq!(field.cursor(), 2);

        type_chars(&mut field, " hao3");
        assert_eq!(field.value(), "nǐ hǎo");
        assert_eq!(field.cursor(), 6);
    }

    #[test]
    fn typing_in_the_middle_keeps_the_caret_in_place() {
        let mut field = EditableField::with_value(FieldKind::Pinyin, "ma hao");
        field.set_cursor(2);
        field.insert("3");
        assert_eq!(field.value(), "mǎ hao");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn pinyin_backspace_strips_tone_first() {
        let mut field = EditableField::new(FieldKind::Pinyin);
        type_chars(&mut field, "ni3");
        field.backspace();
        assert_eq!(field.value(), "ni");
        assert_eq!(field.cursor(), 2);
        field.backspace();
        assert_eq!(field.value(), "n");
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn umlaut_unwinds_in_two_steps() {
        let mut field = EditableField::new(FieldKind::Pinyin);
        type_chars(&mut field, "lu:3");
        assert_eq!(field.value(), "lǚ");
        field.backspace();
        assert_eq!(field.value(), "lü");
        field.backspace();
        assert_eq!(field.value(), "lu");
        field.backspace();
        assert_eq!(field.value(), "l");
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut field = EditableField::with_value(FieldKind::Plain, "abc");
        field.set_cursor(0);
        field.backspace();
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn plain_backspace_deletes_accented_chars() {
        let mut field = EditableField::with_value(FieldKind::Plain, "café");
        field.backspace();
        assert_eq!(field.value(), "caf");
    }

    #[test]
    fn ipa_field_converts_codes() {
        let mut field = EditableField::new(FieldKind::Ipa(IpaOptions::default()));
        type_chars(&mut field, "t1");
        assert_eq!(field.value(), "θ");
        assert_eq!(field.cursor(), 1);

        let mut mandarin = EditableField::new(FieldKind::Ipa(IpaOptions::mandarin()));
        type_chars(&mut mandarin, "ni.3");
        assert_eq!(mandarin.value(), "ni˨˩˦");
        assert_eq!(mandarin.cursor(), 5);
    }

    #[test]
    fn validation_rules_per_kind() {
        let pinyin = EditableField::with_value(FieldKind::Pinyin, "  Nǐ hǎo ");
        assert!(pinyin.validate("nǐ hǎo"));

        let ipa = EditableField::with_value(FieldKind::Ipa(IpaOptions::default()), "/ni3/");
        assert!(ipa.validate("ni3"));
        assert!(ipa.validate("/NI3/"));

        let plain = EditableField::with_value(FieldKind::Plain, "/ni3/");
        assert!(!plain.validate("ni3"));
    }
}
