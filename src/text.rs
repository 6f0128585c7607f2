//! String utilities
//!
//! Reversal works on `char`s, so multi-byte characters survive intact.

use crate::error::{FixtureError, Result};

/// Returns the input with its characters in reverse order
///
/// # Examples
/// ```
/// use toolcheck_fixture::text::reverse_string;
///
/// assert_eq!(reverse_string("hello"), "olleh");
/// assert_eq!(reverse_string("Hello, 世界"), "界世 ,olleH");
/// ```
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Word separators: space, tab and newline only.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Counts maximal runs of non-separator characters
///
/// Only space, tab and newline separate words; runs of separators collapse.
pub fn count_words(s: &str) -> usize {
    s.split(is_separator).filter(|word| !word.is_empty()).count()
}

/// Trims each entry, drops the blank ones, optionally upper-cases the rest
pub fn process_strings<S: AsRef<str>>(input: &[S], to_upper: bool) -> Vec<String> {
    input
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(|s| if to_upper { s.to_uppercase() } else { s.to_string() })
        .collect()
}

/// Finds the index of the first entry equal to `needle`
///
/// # Errors
/// Returns [`FixtureError::NotFound`] when no entry matches.
pub fn find_string<S: AsRef<str>>(haystack: &[S], needle: &str) -> Result<usize> {
    haystack
        .iter()
        .position(|s| s.as_ref() == needle)
        .ok_or_else(|| FixtureError::NotFound(needle.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_string() {
        let cases = [
            ("empty string", "", ""),
            ("single char", "a", "a"),
            ("simple word", "hello", "olleh"),
            ("with spaces", "hello world", "dlrow olleh"),
            ("unicode", "Hello, 世界", "界世 ,olleH"),
        ];
        for (name, input, want) in cases {
            assert_eq!(reverse_string(input), want, "{}", name);
        }
    }

    #[test]
    fn test_count_words() {
        let cases = [
            ("empty string", "", 0),
            ("single word", "hello", 1),
            ("multiple words", "hello world", 2),
            ("extra spaces", "hello  world  test", 3),
            ("with tabs", "hello\tworld", 2),
            ("with newlines", "hello\nworld\ntest", 3),
            ("only separators", " \t\n ", 0),
            ("leading and trailing", "  padded  ", 1),
            ("complex", "The quick brown fox jumps over the lazy dog", 9),
        ];
        for (name, input, want) in cases {
            assert_eq!(count_words(input), want, "{}", name);
        }
    }

    #[test]
    fn carriage_return_is_word_content() {
        assert_eq!(count_words("a\r\nb"), 2);
        assert_eq!(count_words("\r"), 1);
    }

    #[test]
    fn process_strings_trims_and_drops_blanks() {
        let input = ["  hello  ", "", "  world  ", "   "];
        assert_eq!(process_strings(&input, true), vec!["HELLO", "WORLD"]);
        assert_eq!(process_strings(&input, false), vec!["hello", "world"]);
        assert!(process_strings::<&str>(&[], true).is_empty());
    }

    #[test]
    fn find_string_returns_first_match() {
        let haystack = ["a", "b", "a"];
        assert_eq!(find_string(&haystack, "a"), Ok(0));
        assert_eq!(find_string(&haystack, "b"), Ok(1));
    }

    #[test]
    fn find_string_reports_missing_needle() {
        let err = find_string(&["a"], "z").unwrap_err();
        assert_eq!(err, FixtureError::NotFound("z".to_string()));
        assert_eq!(err.to_string(), "string \"z\" not found");
    }
}
