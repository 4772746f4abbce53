/// Converts a character position into a byte offset within `s`.
///
/// Editable fields track the cursor in characters, the way a text widget
/// reports it, while `String` editing needs byte offsets. Positions past the
/// end of the string clamp to `s.len()`, so the result is always a valid
/// slicing boundary.
///
/// # Example
/// ```rust
/// use pinyin_notation::utils::char_to_byte_offset;
///
/// let s = "nǐhǎo"; // `ǐ` and `ǎ` take 2 bytes each
/// assert_eq!(char_to_byte_offset(s, 2), 3);
/// assert_eq!(&s[char_to_byte_offset(s, 2)..], "hǎo");
/// assert_eq!(char_to_byte_offset(s, 99), s.len());
/// ```
pub fn char_to_byte_offset(s: &str, char_pos: usize) -> usize {
    s.char_indices()
        .nth(char_pos)
        .map_or(s.len(), |(offset, _)| offset)
}

/// Number of characters in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Moves a character cursor by the change in text length, clamped to `[0, len]`.
///
/// A live conversion can shrink the text (`ni3` → `nǐ`), so the caret moves
/// back by the number of characters consumed.
pub fn shift_cursor(cursor: usize, old_len: usize, new_len: usize) -> usize {
    let moved = if new_len >= old_len {
        cursor.saturating_add(new_len - old_len)
    } else {
        cursor.saturating_sub(old_len - new_len)
    };
    moved.min(new_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_offsets_follow_multibyte_chars() {
        assert_eq!(char_to_byte_offset("", 0), 0);
        assert_eq!(char_to_byte_offset("ㄋㄧˇ", 1), 3);
        assert_eq!(char_to_byte_offset("ㄋㄧˇ", 3), "ㄋㄧˇ".len());
    }

    #[test]
    fn cursor_shift_clamps() {
        assert_eq!(shift_cursor(3, 3, 2), 2);
        assert_eq!(shift_cursor(1, 5, 1), 0);
        assert_eq!(shift_cursor(2, 2, 4), 4);
        assert_eq!(shift_cursor(9, 3, 3), 3);
    }
}
