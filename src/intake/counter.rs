//! Computes character, word, and line counts for decoded content.

/// Character, word, and line counts for a file's textual content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextCounts {
    /// Number of characters (Unicode scalar values) in the content.
    pub characters: usize,
    /// Number of whitespace-separated words.
    pub words: usize,
    /// Number of newline-delimited segments. A trailing empty segment is
    /// counted, so `"a\nb\nc\n"` has 4 lines and the empty string has 1.
    pub lines: usize,
}

/// Calculates counts for a string slice.
///
/// - **Characters**: `chars().count()` of the content.
/// - **Words**: tokens after splitting on runs of whitespace; empty tokens
///   are discarded.
/// - **Lines**: segments produced by splitting on `\n`. Downstream
///   consumers depend on the trailing empty segment being counted, so this
///   deliberately differs from `str::lines()`.
///
/// # Examples
///
/// ```
/// use filedrop::intake::count_text;
///
/// let counts = count_text("Hello, world!\nThis is a test.");
/// assert_eq!(counts.lines, 2);
/// assert_eq!(counts.words, 6);
/// assert_eq!(counts.characters, 29);
/// ```
#[inline]
pub fn count_text(content: &str) -> TextCounts {
    TextCounts {
        characters: content.chars().count(),
        words: content.split_whitespace().count(),
        lines: content.split('\n').count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_basic() {
        let counts = count_text("One two three.\nFour five.");
        assert_eq!(counts.lines, 2);
        assert_eq!(counts.words, 5);
        assert_eq!(counts.characters, 25);
    }

    #[test]
    fn test_words_ignore_whitespace_runs() {
        let counts = count_text("  a  b\tc\n");
        assert_eq!(counts.words, 3);
    }

    #[test]
    fn test_trailing_segment_counted() {
        assert_eq!(count_text("a\nb\nc").lines, 3);
        assert_eq!(count_text("a\nb\nc\n").lines, 4);
    }

    #[test]
    fn test_empty_string_is_one_segment() {
        let counts = count_text("");
        assert_eq!(counts.lines, 1);
        assert_eq!(counts.words, 0);
        assert_eq!(counts.characters, 0);
    }

    #[test]
    fn test_characters_are_scalar_values_not_bytes() {
        let counts = count_text("café");
        assert_eq!(counts.characters, 4);
    }

    #[test]
    fn test_whitespace_only() {
        let counts = count_text("  \n\t \n ");
        assert_eq!(counts.lines, 3);
        assert_eq!(counts.words, 0);
        assert_eq!(counts.characters, 7);
    }
}
