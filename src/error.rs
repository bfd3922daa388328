//! Error types for the TextForms decoder.
//!
//! Decoding itself never fails: a field that does not match the grammar is
//! skipped and the rest of the message is still decoded. The [`Error`] type
//! covers the fallible edges around that core:
//!
//! - **I/O errors** when decoding from a reader
//! - **Encoding errors** when byte input is not valid UTF-8
//! - **Type mismatches** when extracting a typed value from a decoded result
//!
//! ## Examples
//!
//! ```rust
//! use textforms::{decode, Error};
//!
//! let form = decode("COUNT 3");
//! let value = form.get("COUNT").unwrap().first().unwrap().clone();
//!
//! // Extracting the wrong type reports a mismatch.
//! let text: Result<String, Error> = String::try_from(value);
//! assert!(text.is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors surfaced by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while reading message input
    #[error("IO error: {0}")]
    Io(String),

    /// Byte input was not valid UTF-8
    #[error("encoding error: {0}")]
    Encoding(String),

    /// A decoded value was not of the requested type
    #[error("type mismatch: expected {expected}, found {found}")]
    InvalidType { expected: String, found: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for reader failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an encoding error for non-UTF-8 byte input.
    pub fn encoding(msg: &str) -> Self {
        Error::Encoding(msg.to_string())
    }

    /// Creates a type mismatch error for failed value extraction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textforms::Error;
    ///
    /// let err = Error::invalid_type("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn invalid_type(expected: &str, found: &str) -> Self {
        Error::InvalidType {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textforms::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
