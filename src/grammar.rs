//! The TextForms wire grammar, precompiled.
//!
//! A [`Grammar`] holds the compiled patterns every decoding step runs
//! against: the boundary that separates fields, the shape of a single field,
//! and the numeric-literal test that drives type classification. It is built
//! once, is immutable afterwards, and clones cheaply (compiled patterns are
//! reference-counted), so one grammar can back any number of decode calls.
//!
//! ## Examples
//!
//! ```rust
//! use textforms::Grammar;
//!
//! let grammar = Grammar::new();
//!
//! // Tokenize a message into raw fields
//! let raw: Vec<&str> = grammar.fields("A 1# B 2").collect();
//! assert_eq!(raw, vec!["A 1", "B 2"]);
//!
//! // Parse one raw field into its captures
//! let field = grammar.parse_field("NAME2 2.15abc").unwrap();
//! assert_eq!(field.key, "NAME");
//! assert_eq!(field.numeric, Some("2"));
//! assert_eq!(field.text, Some("2.15abc"));
//! ```

use crate::{FormOptions, ValueKind};
use regex::Regex;

/// Key charset: ASCII letters plus `_`, `.`, `*`, and `-`. Digits are
/// deliberately excluded so a trailing digit run reads as a numeric suffix.
const KEY: &str = "[A-Za-z_.*-]+";

/// Numeric literal: one or more digits, optionally `.` and more digits.
/// `"3."` is a valid literal with an empty fractional part.
const NUMERIC: &str = r"[0-9]+(?:\.[0-9]*)?";

/// The raw captures of one field, borrowed from the input message.
///
/// `key` is always present and non-empty. `numeric` is a literal glued
/// directly to the key with no whitespace between them. `text` is everything
/// after at least one whitespace character; a capture that trims to the empty
/// string is reported as `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field<'a> {
    pub key: &'a str,
    pub numeric: Option<&'a str>,
    pub text: Option<&'a str>,
}

/// Compiled patterns for the TextForms wire format.
///
/// See the [`format`](crate::format) module for the grammar this compiles.
#[derive(Clone, Debug)]
pub struct Grammar {
    boundary: Regex,
    field: Regex,
    numeric: Regex,
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

impl Grammar {
    /// Builds the grammar for the default format (fields separated by `#`).
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&FormOptions::default())
    }

    /// Builds the grammar for a customized format.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textforms::{FormOptions, Grammar};
    ///
    /// let grammar = Grammar::with_options(&FormOptions::new().with_boundary(';'));
    /// let raw: Vec<&str> = grammar.fields("a 1; b 2").collect();
    /// assert_eq!(raw, vec!["a 1", "b 2"]);
    /// ```
    #[must_use]
    pub fn with_options(options: &FormOptions) -> Self {
        let boundary = regex::escape(&options.boundary.to_string());
        Grammar {
            boundary: pattern(&format!(r"\s*{}\s*", boundary)),
            // anchored at the start only; the free-text capture requires at
            // least one whitespace character after the key or numeric suffix
            field: pattern(&format!(r"^\s*({})({})?(?:\s+((?s:.*)))?", KEY, NUMERIC)),
            // anchored to the whole (trimmed) string for classification
            numeric: pattern(&format!("^{}$", NUMERIC)),
        }
    }

    /// Splits a message into raw field substrings on the boundary pattern.
    ///
    /// Every substring is preserved, including empty ones produced by
    /// consecutive, leading, or trailing boundaries; filtering them out is
    /// [`parse_field`](Grammar::parse_field)'s job.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textforms::Grammar;
    ///
    /// let grammar = Grammar::new();
    /// let raw: Vec<&str> = grammar.fields("A 1## B 2").collect();
    /// assert_eq!(raw, vec!["A 1", "", "B 2"]);
    /// ```
    pub fn fields<'a>(&'a self, message: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.boundary.split(message)
    }

    /// Matches one raw substring against the field pattern.
    ///
    /// Returns `None` when the substring does not start with a valid key
    /// (empty substrings from stray or doubled boundaries end up here); the
    /// caller skips such substrings without side effects. The match is
    /// anchored at the start only, after optional leading whitespace.
    ///
    /// A free-text capture that is entirely whitespace is normalized to
    /// absent before returning.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textforms::Grammar;
    ///
    /// let grammar = Grammar::new();
    ///
    /// let field = grammar.parse_field("  PI3.14").unwrap();
    /// assert_eq!(field.key, "PI");
    /// assert_eq!(field.numeric, Some("3.14"));
    /// assert_eq!(field.text, None);
    ///
    /// // trailing spaces stay inside the capture; a tail that is *only*
    /// // whitespace is reported as absent
    /// let field = grammar.parse_field("KEY 5   ").unwrap();
    /// assert_eq!(field.text, Some("5   "));
    /// let field = grammar.parse_field("KEY    ").unwrap();
    /// assert_eq!(field.text, None);
    ///
    /// assert!(grammar.parse_field("").is_none());
    /// assert!(grammar.parse_field("123").is_none());
    /// ```
    #[must_use]
    pub fn parse_field<'a>(&self, raw: &'a str) -> Option<Field<'a>> {
        let captures = self.field.captures(raw)?;
        let key = captures.get(1)?.as_str();
        let numeric = captures.get(2).map(|m| m.as_str());
        let text = captures
            .get(3)
            .map(|m| m.as_str())
            .filter(|t| !t.trim().is_empty());
        Some(Field { key, numeric, text })
    }

    /// Classifies a raw substring as integer, numeric, or string.
    ///
    /// The whole trimmed substring must match the numeric-literal pattern to
    /// classify as a number; partial matches are strings. A literal without a
    /// `.` is an integer, one with a `.` (even `"3."`) is a numeric.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textforms::{Grammar, ValueKind};
    ///
    /// let grammar = Grammar::new();
    /// assert_eq!(grammar.classify("3"), ValueKind::Integer);
    /// assert_eq!(grammar.classify("3.0"), ValueKind::Numeric);
    /// assert_eq!(grammar.classify("3."), ValueKind::Numeric);
    /// assert_eq!(grammar.classify("2.15abc"), ValueKind::String);
    /// ```
    #[must_use]
    pub fn classify(&self, text: &str) -> ValueKind {
        let trimmed = text.trim();
        if !self.numeric.is_match(trimmed) {
            ValueKind::String
        } else if trimmed.contains('.') {
            ValueKind::Numeric
        } else {
            ValueKind::Integer
        }
    }
}

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("grammar patterns are statically known and compile")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_preserves_empty_substrings() {
        let grammar = Grammar::new();
        let raw: Vec<&str> = grammar.fields("#A 1## B 2#").collect();
        assert_eq!(raw, vec!["", "A 1", "", "B 2", ""]);
    }

    #[test]
    fn test_boundary_absorbs_surrounding_whitespace() {
        let grammar = Grammar::new();
        let raw: Vec<&str> = grammar.fields("A 1  #  B 2").collect();
        assert_eq!(raw, vec!["A 1", "B 2"]);
    }

    #[test]
    fn test_message_without_boundary_is_one_field() {
        let grammar = Grammar::new();
        let raw: Vec<&str> = grammar.fields("KEY 5").collect();
        assert_eq!(raw, vec!["KEY 5"]);
    }

    #[test]
    fn test_parse_field_key_only() {
        let grammar = Grammar::new();
        let field = grammar.parse_field("BARE").unwrap();
        assert_eq!(field.key, "BARE");
        assert_eq!(field.numeric, None);
        assert_eq!(field.text, None);
    }

    #[test]
    fn test_parse_field_numeric_suffix() {
        let grammar = Grammar::new();
        let field = grammar.parse_field("SEQ.0 3.1").unwrap();
        assert_eq!(field.key, "SEQ.");
        assert_eq!(field.numeric, Some("0"));
        assert_eq!(field.text, Some("3.1"));
    }

    #[test]
    fn test_parse_field_leading_whitespace_skipped() {
        let grammar = Grammar::new();
        let field = grammar.parse_field("   NUM1.0").unwrap();
        assert_eq!(field.key, "NUM");
        assert_eq!(field.numeric, Some("1.0"));
    }

    #[test]
    fn test_parse_field_text_keeps_internal_whitespace() {
        let grammar = Grammar::new();
        let field = grammar.parse_field("STR A String Value").unwrap();
        assert_eq!(field.key, "STR");
        assert_eq!(field.numeric, None);
        assert_eq!(field.text, Some("A String Value"));
    }

    #[test]
    fn test_parse_field_whitespace_only_text_is_absent() {
        let grammar = Grammar::new();
        let field = grammar.parse_field("KEY    ").unwrap();
        assert_eq!(field.key, "KEY");
        assert_eq!(field.text, None);
    }

    #[test]
    fn test_parse_field_rejects_invalid_starts() {
        let grammar = Grammar::new();
        assert!(grammar.parse_field("").is_none());
        assert!(grammar.parse_field("   ").is_none());
        assert!(grammar.parse_field("42 value").is_none());
        assert!(grammar.parse_field("%!?").is_none());
    }

    #[test]
    fn test_parse_field_full_key_charset() {
        let grammar = Grammar::new();
        let field = grammar.parse_field("a_b.C*-d 1").unwrap();
        assert_eq!(field.key, "a_b.C*-d");
        assert_eq!(field.text, Some("1"));
    }

    #[test]
    fn test_classify_trims_before_matching() {
        let grammar = Grammar::new();
        assert_eq!(grammar.classify("  7  "), ValueKind::Integer);
        assert_eq!(grammar.classify(" 7.5 "), ValueKind::Numeric);
        assert_eq!(grammar.classify(" 7 5 "), ValueKind::String);
    }

    #[test]
    fn test_classify_rejects_signs_and_exponents() {
        // the literal grammar has no sign or exponent forms
        let grammar = Grammar::new();
        assert_eq!(grammar.classify("-5"), ValueKind::String);
        assert_eq!(grammar.classify("+5"), ValueKind::String);
        assert_eq!(grammar.classify("1e3"), ValueKind::String);
        assert_eq!(grammar.classify(".5"), ValueKind::String);
    }

    #[test]
    fn test_custom_boundary_is_escaped() {
        let grammar = Grammar::with_options(&FormOptions::new().with_boundary('.'));
        let raw: Vec<&str> = grammar.fields("a 1 . b 2").collect();
        assert_eq!(raw, vec!["a 1", "b 2"]);
    }
}
