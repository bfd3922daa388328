//! TextForms decoding.
//!
//! This module provides the [`Decoder`], which turns boundary-separated
//! key/value messages into a [`FormMap`].
//!
//! ## Overview
//!
//! Decoding one message is a single pass over its fields:
//!
//! 1. the message is split on the boundary pattern,
//! 2. each raw substring is matched against the field pattern (substrings
//!    that do not match are skipped without any effect),
//! 3. the field's captures are resolved into one typed value or a two-part
//!    pair,
//! 4. the value is accumulated into the buffer under the upper-cased key,
//!    promoting to an ordered list when a key repeats.
//!
//! The buffer is cumulative: further `decode` calls add to it, and one
//! logical message corresponds to one [`reset`](Decoder::reset) followed by
//! one or more [`decode`](Decoder::decode) calls.
//!
//! ## Usage
//!
//! One-shot callers should use [`decode`](crate::decode) from the crate
//! root:
//!
//! ```rust
//! use textforms::decode;
//!
//! let form = decode("INT 1# NUM1.0#STR A String Value # PI3.14");
//! assert_eq!(form.len(), 4);
//! assert_eq!(form.get("PI").unwrap().first().unwrap().as_f64(), Some(3.14));
//! ```
//!
//! Streamed callers hold a `Decoder` and feed it message chunks:
//!
//! ```rust
//! use textforms::Decoder;
//!
//! let mut decoder = Decoder::new();
//! decoder.decode("A 1").decode("A 2");
//! assert_eq!(decoder.view().get("A").unwrap().len(), 2);
//!
//! decoder.reset();
//! assert!(decoder.view().is_empty());
//! ```
//!
//! ## Pair values
//!
//! A key with a digit run glued to it, followed by separately-spaced text,
//! is structurally identical to an indexed-sequence notation. Without a
//! schema the decoder cannot tell the two readings apart, so it always
//! emits the two-part pair and leaves the semantic choice to the caller:
//!
//! ```rust
//! use textforms::decode;
//!
//! let form = decode("SEQ0 3.1");
//! let (index, reading) = form.get("SEQ").unwrap().first().unwrap().as_pair().unwrap();
//! assert_eq!(index.as_i64(), Some(0));
//! assert_eq!(reading.as_f64(), Some(3.1));
//! ```

use crate::grammar::Field;
use crate::{FormMap, FormOptions, FormValue, Grammar, ValueKind};

/// The TextForms decoder.
///
/// Owns the compiled [`Grammar`] and the result buffer it accumulates into.
/// Created via [`Decoder::new`] or [`Decoder::with_options`].
///
/// A decoder's buffer is private mutable state; concurrent callers each need
/// their own decoder instance (the grammar itself is immutable and may be
/// cloned freely between them).
#[derive(Debug, Clone)]
pub struct Decoder {
    grammar: Grammar,
    buffer: FormMap,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Creates a decoder for the default format (fields separated by `#`).
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(FormOptions::default())
    }

    /// Creates a decoder with a customized format.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textforms::{Decoder, FormOptions};
    ///
    /// let mut decoder = Decoder::with_options(FormOptions::new().with_boundary(';'));
    /// decoder.decode("a 1; b 2");
    /// assert_eq!(decoder.view().len(), 2);
    /// ```
    #[must_use]
    pub fn with_options(options: FormOptions) -> Self {
        Decoder {
            grammar: Grammar::with_options(&options),
            buffer: FormMap::new(),
        }
    }

    /// The decoder's compiled grammar.
    #[must_use]
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Decodes a message into the buffer and returns `self` for chaining.
    ///
    /// Fields that fail the grammar are skipped and decoding continues with
    /// the next field; a malformed field never aborts the whole decode.
    /// Prior buffer state is kept; call [`reset`](Decoder::reset) first to
    /// start a fresh message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textforms::Decoder;
    ///
    /// let mut decoder = Decoder::new();
    /// decoder.decode("A 1## B 2");
    ///
    /// // the empty field between the doubled boundaries contributed nothing
    /// assert_eq!(decoder.view().len(), 2);
    /// ```
    pub fn decode(&mut self, message: &str) -> &mut Self {
        let grammar = &self.grammar;
        for raw in grammar.fields(message) {
            if let Some(field) = grammar.parse_field(raw) {
                if let Some(value) = resolve(grammar, &field) {
                    self.buffer.accumulate(field.key, value);
                }
            }
        }
        self
    }

    /// Empties the buffer and returns `self` for chaining.
    pub fn reset(&mut self) -> &mut Self {
        self.buffer.clear();
        self
    }

    /// Borrows the buffer, reflecting all decode calls since the last reset.
    #[must_use]
    pub fn view(&self) -> &FormMap {
        &self.buffer
    }

    /// Returns an owned copy of the buffer at this point in time.
    #[must_use]
    pub fn snapshot(&self) -> FormMap {
        self.buffer.clone()
    }

    /// Consumes the decoder, returning its buffer.
    #[must_use]
    pub fn into_map(self) -> FormMap {
        self.buffer
    }
}

/// Resolves a field's raw captures into one value, or nothing.
///
/// The decision procedure, in order:
///
/// 1. numeric suffix and free text both present: emit the two-part pair in
///    capture order;
/// 2. only free text present, and it classifies as a number: the text takes
///    the numeric role and is emitted as a single coerced number;
/// 3. only the numeric suffix present: emit it as a single coerced number;
/// 4. only free text present, classified as a string: emit it with the raw
///    captured spelling;
/// 5. neither present: a bare key carries no value and is dropped.
fn resolve(grammar: &Grammar, field: &Field<'_>) -> Option<FormValue> {
    match (field.numeric, field.text) {
        (Some(numeric), Some(text)) => Some(FormValue::pair(
            grammar.classify(numeric).coerce(numeric),
            grammar.classify(text).coerce(text),
        )),
        (Some(numeric), None) => Some(grammar.classify(numeric).coerce(numeric)),
        (None, Some(text)) => match grammar.classify(text) {
            ValueKind::String => Some(FormValue::String(text.to_string())),
            numeric_kind => Some(numeric_kind.coerce(text)),
        },
        (None, None) => None,
    }
}
