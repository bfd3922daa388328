//! # textforms
//!
//! A schema-less decoder for TextForms, a compact line-oriented key/value
//! message format.
//!
//! ## What is TextForms?
//!
//! TextForms is a lightweight encoding for key/value messages (telemetry
//! readings, form submissions) sent over constrained channels. Fields are
//! separated by a `#` boundary, and each field is a key followed by an
//! optional value:
//!
//! ```text
//! INT 1# NUM1.0#STR A String Value # PI3.14
//! ```
//!
//! No schema travels with a message, so value types (integer, numeric,
//! string) are inferred from the text itself.
//!
//! ## Key Features
//!
//! - **Schema-less typing**: `3` decodes as an integer, `3.0` as a numeric,
//!   anything else as a string; inferred per field, no configuration
//! - **Pair preservation**: a key with a glued numeric suffix *and* trailing
//!   text (e.g. `SEQ0 3.1`) decodes as an ordered two-part pair, keeping the
//!   indexed-sequence reading available to the caller
//! - **Permissive**: malformed fields are skipped, never fatal; stray and
//!   doubled boundaries are tolerated
//! - **Ordered results**: repeated keys promote to lists in arrival order,
//!   and result iteration follows first appearance
//! - **Serde Compatible**: decoded results serialize through any serde
//!   backend (e.g. to JSON for downstream consumers)
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! textforms = "0.1"
//! ```
//!
//! ### Decoding a message
//!
//! ```rust
//! use textforms::decode;
//!
//! let form = decode("INT 1# NUM1.0#STR A String Value # PI3.14");
//!
//! assert_eq!(form.get("INT").unwrap().first().unwrap().as_i64(), Some(1));
//! assert_eq!(form.get("NUM").unwrap().first().unwrap().as_f64(), Some(1.0));
//! assert_eq!(
//!     form.get("STR").unwrap().first().unwrap().as_str(),
//!     Some("A String Value")
//! );
//! assert_eq!(form.get("PI").unwrap().first().unwrap().as_f64(), Some(3.14));
//! ```
//!
//! ### Repeated keys and accumulation
//!
//! ```rust
//! use textforms::Decoder;
//!
//! let mut decoder = Decoder::new();
//!
//! // the buffer accumulates across calls until reset
//! decoder.decode("SAMPLE 1#SAMPLE 2").decode("SAMPLE 3");
//! assert_eq!(decoder.view().get("SAMPLE").unwrap().len(), 3);
//!
//! decoder.reset();
//! assert!(decoder.view().is_empty());
//! ```
//!
//! ### Re-serializing decoded results
//!
//! ```rust
//! use textforms::decode;
//!
//! let form = decode("SEQ.0 3.1 # SEQ.1 3.14");
//! let json = serde_json::to_string(&form).unwrap();
//! assert_eq!(json, r#"{"SEQ.":[[0,3.1],[1,3.14]]}"#);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Decoding**: O(n) in total input length plus number of fields
//! - **Grammar**: compiled once per decoder, shared across decode calls
//! - **Memory**: one buffer entry per distinct key; values own their text
//!
//! ## Concurrency
//!
//! Decoding is fully synchronous with no I/O or blocking. A [`Grammar`] is
//! immutable and safe to share; a [`Decoder`]'s buffer is private mutable
//! state, so concurrent callers each need their own decoder instance.
//!
//! ## Format Specification
//!
//! For the complete wire grammar and decoding rules, see the [`format`]
//! module.

pub mod de;
pub mod error;
pub mod format;
pub mod grammar;
pub mod map;
pub mod options;
pub mod value;

pub use de::Decoder;
pub use error::{Error, Result};
pub use grammar::{Field, Grammar};
pub use map::FormMap;
pub use options::FormOptions;
pub use value::{FormEntry, FormValue, ValueKind};

use std::io;

/// Decode a TextForms message into a fresh result map.
///
/// Convenience wrapper for the common one-shot case; use a [`Decoder`] to
/// accumulate several messages into one buffer or to customize the grammar.
///
/// # Examples
///
/// ```rust
/// use textforms::decode;
///
/// let form = decode("TEMP 21.5#UNIT celsius");
/// assert_eq!(form.get("TEMP").unwrap().first().unwrap().as_f64(), Some(21.5));
/// assert_eq!(form.get("UNIT").unwrap().first().unwrap().as_str(), Some("celsius"));
/// ```
#[must_use]
pub fn decode(message: &str) -> FormMap {
    let mut decoder = Decoder::new();
    decoder.decode(message);
    decoder.into_map()
}

/// Decode a TextForms message from bytes.
///
/// # Examples
///
/// ```rust
/// use textforms::decode_slice;
///
/// let form = decode_slice(b"A 1#B 2").unwrap();
/// assert_eq!(form.len(), 2);
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_slice(bytes: &[u8]) -> Result<FormMap> {
    let message = std::str::from_utf8(bytes).map_err(|e| Error::encoding(&e.to_string()))?;
    Ok(decode(message))
}

/// Decode a TextForms message from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use textforms::decode_reader;
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"A 1#B 2");
/// let form = decode_reader(cursor).unwrap();
/// assert_eq!(form.len(), 2);
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails or the input is not
/// valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_reader<R: io::Read>(mut reader: R) -> Result<FormMap> {
    let mut message = String::new();
    reader
        .read_to_string(&mut message)
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(decode(&message))
}
