//! Substitution engine: global regex search with literal replacement text.

use regex::{NoExpand, Regex};

use crate::error::ReplaceError;

/// A compiled search pattern paired with its literal replacement.
///
/// Compiling once up front lets a bad pattern fail before any file is read,
/// and reuses the compiled regex across every file in a bulk run.
#[derive(Debug)]
pub struct Substitution {
    regex: Regex,
    replacement: String,
}

impl Substitution {
    /// Compile `pattern` as a global regular expression.
    ///
    /// # Errors
    /// [`ReplaceError::Pattern`] when `pattern` does not compile. Nothing
    /// has been read or written at that point.
    pub fn compile(pattern: &str, replacement: &str) -> Result<Self, ReplaceError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }

    /// Apply the substitution to one file's content.
    ///
    /// Every non-overlapping match is replaced left to right; the regex
    /// engine advances past zero-length matches, so they count once and
    /// cannot loop. The replacement text is inserted literally and is never
    /// expanded as a template: `$1` stays `$1`.
    ///
    /// Returns the new content and the number of matches replaced.
    #[must_use]
    pub fn apply(&self, content: &str) -> (String, usize) {
        let count = self.regex.find_iter(content).count();
        if count == 0 {
            return (content.to_string(), 0);
        }
        let replaced = self
            .regex
            .replace_all(content, NoExpand(&self.replacement))
            .into_owned();
        (replaced, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(pattern: &str, replacement: &str, content: &str) -> (String, usize) {
        Substitution::compile(pattern, replacement)
            .expect("Compile pattern")
            .apply(content)
    }

    #[test]
    fn replaces_every_nonoverlapping_match() {
        // Scenario: single-char pattern over "foo boo".
        let (replaced, count) = apply("o", "_", "foo boo");
        assert_eq!(count, 4);
        assert_eq!(replaced, "f__ b__");
    }

    #[test]
    fn replacement_is_literal_not_a_template() {
        let (replaced, count) = apply("(wor)ld", "$1-done", "hello world");
        assert_eq!(count, 1);
        assert_eq!(replaced, "hello $1-done");
    }

    #[test]
    fn zero_matches_returns_content_unchanged() {
        let (replaced, count) = apply("xyz", "_", "hello");
        assert_eq!(count, 0);
        assert_eq!(replaced, "hello");
    }

    #[test]
    fn empty_matches_count_and_terminate() {
        // An empty pattern matches at every position, including the end.
        let (replaced, count) = apply("", "_", "abc");
        assert_eq!(count, 4);
        assert_eq!(replaced, "_a_b_c_");
    }

    #[test]
    fn invalid_pattern_is_rejected_at_compile_time() {
        let result = Substitution::compile("(unbalanced", "x");
        assert!(matches!(result, Err(ReplaceError::Pattern(_))));
    }

    #[test]
    fn count_is_per_match_not_per_byte() {
        let (replaced, count) = apply("aa+", "-", "aaaa b aa");
        assert_eq!(count, 2);
        assert_eq!(replaced, "- b -");
    }
}
