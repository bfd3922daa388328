//! Configuration options for TextForms decoding.
//!
//! The wire format is deliberately small, so there is little to configure:
//! the one knob is the boundary character that separates fields. Some
//! deployments reserve `#` for comments in their transport framing and
//! separate fields with e.g. `;` instead.
//!
//! ## Examples
//!
//! ```rust
//! use textforms::{Decoder, FormOptions};
//!
//! let options = FormOptions::new().with_boundary(';');
//! let mut decoder = Decoder::with_options(options);
//! decoder.decode("a 1; b 2");
//! assert_eq!(decoder.view().len(), 2);
//! ```

/// Configuration options for building a decoder [`Grammar`](crate::Grammar).
///
/// # Examples
///
/// ```rust
/// use textforms::FormOptions;
///
/// // Default options: '#' boundary
/// let options = FormOptions::new();
/// assert_eq!(options.boundary, '#');
///
/// // Custom boundary
/// let options = FormOptions::new().with_boundary('|');
/// assert_eq!(options.boundary, '|');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormOptions {
    /// The character separating fields; optional whitespace on either side of
    /// it belongs to the boundary, not to the fields.
    pub boundary: char,
}

impl Default for FormOptions {
    fn default() -> Self {
        FormOptions { boundary: '#' }
    }
}

impl FormOptions {
    /// Creates default options (fields separated by `#`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the boundary character.
    ///
    /// The character is escaped when the grammar is compiled, so regex
    /// metacharacters such as `|` or `.` are safe choices.
    #[must_use]
    pub fn with_boundary(mut self, boundary: char) -> Self {
        self.boundary = boundary;
        self
    }
}
