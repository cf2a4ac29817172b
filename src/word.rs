//! Word-boundary lookup.
//!
//! Locates the word touching a character position on a single line. A word
//! is a run of word characters or hyphens, with the literal sequences `(@)`
//! and `(#)` also treated as word content so placeholder tokens survive
//! selection as one unit.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern describing what counts as one word.
pub static DEFAULT_WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\w\-]|\(@\)|\(#\))+").expect("default word pattern is valid"));

/// Find the word span touching `character` on `line`.
///
/// Returns the char-offset span `(start, end)` of the first pattern match
/// whose inclusive `[start, end]` interval contains `character`, so a cursor
/// sitting immediately after a word still finds it. Returns `None` when the
/// position touches no match.
pub fn word_span(line: &str, character: usize, pattern: &Regex) -> Option<(usize, usize)> {
    for found in pattern.find_iter(line) {
        let start = line[..found.start()].chars().count();
        let end = start + found.as_str().chars().count();
        if start > character {
            // Matches come in order; everything further is past the cursor.
            return None;
        }
        if character <= end {
            return Some((start, end));
        }
    }
    None
}

/// Slice `line` by char offsets.
pub fn slice_chars(line: &str, start: usize, end: usize) -> String {
    line.chars().skip(start).take(end.saturating_sub(start)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(line: &str, character: usize) -> Option<(usize, usize)> {
        word_span(line, character, &DEFAULT_WORD_PATTERN)
    }

    #[test]
    fn test_cursor_inside_hyphenated_word() {
        assert_eq!(span("foo-bar baz", 2), Some((0, 7)));
        assert_eq!(
            slice_chars("foo-bar baz", 0, 7),
            "foo-bar".to_string()
        );
    }

    #[test]
    fn test_cursor_at_word_edges() {
        // Both edges of "baz" count as touching it.
        assert_eq!(span("foo-bar baz", 8), Some((8, 11)));
        assert_eq!(span("foo-bar baz", 11), Some((8, 11)));
    }

    #[test]
    fn test_cursor_right_after_word_prefers_left_word() {
        // Position 7 is the space, but it touches the end of "foo-bar".
        assert_eq!(span("foo-bar baz", 7), Some((0, 7)));
    }

    #[test]
    fn test_whitespace_with_no_adjacent_word_has_no_span() {
        assert_eq!(span("foo   bar", 4), None);
        assert_eq!(span("    ", 2), None);
        assert_eq!(span("", 0), None);
    }

    #[test]
    fn test_placeholder_tokens_join_words() {
        assert_eq!(span("copy(@)suffix x", 3), Some((0, 13)));
        assert_eq!(span("a (#)01 b", 4), Some((2, 7)));
    }

    #[test]
    fn test_punctuation_breaks_words() {
        assert_eq!(span("foo.bar", 5), Some((4, 7)));
        assert_eq!(span("(x)", 1), Some((1, 2)));
    }

    #[test]
    fn test_cursor_past_end_of_line() {
        assert_eq!(span("foo", 10), None);
    }

    #[test]
    fn test_multibyte_line_uses_char_offsets() {
        // "é" is one char but two bytes; spans stay in chars.
        assert_eq!(span("café bar", 2), Some((0, 4)));
        assert_eq!(span("café bar", 6), Some((5, 8)));
    }

    #[test]
    fn test_slice_chars_clamps() {
        assert_eq!(slice_chars("abc", 1, 10), "bc".to_string());
        assert_eq!(slice_chars("abc", 2, 1), String::new());
    }
}
