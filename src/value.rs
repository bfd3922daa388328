//! Dynamic value representation for decoded TextForms data.
//!
//! This module provides the [`FormValue`] enum which represents any value a
//! decoded field can carry, and the [`FormEntry`] enum which tracks whether a
//! key was seen once or several times in a message.
//!
//! ## Core Types
//!
//! - [`FormValue`]: a single typed value (integer, numeric, string, or pair)
//! - [`FormEntry`]: one key's slot in a decoded result (single value or
//!   ordered list)
//! - [`ValueKind`]: the classification a raw capture coerces through
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use textforms::FormValue;
//!
//! let count = FormValue::from(42);
//! let ratio = FormValue::from(0.5);
//! let label = FormValue::from("sensor-a");
//! let indexed = FormValue::pair(FormValue::from(3), FormValue::from(1.5));
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use textforms::FormValue;
//!
//! let value = FormValue::from(42);
//! assert!(value.is_integer());
//! assert!(!value.is_string());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use textforms::FormValue;
//!
//! let value = FormValue::from(42);
//!
//! // Safe extraction with TryFrom
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// A single typed value decoded from one field of a message.
///
/// Values are produced by classification of the raw field text; the decoder
/// never guesses beyond what the text itself supports. The `Pair` variant is
/// emitted when a field carries both a numeric suffix glued to its key and
/// separately-spaced trailing text (for example an index and a reading); its
/// two elements are always scalars, never nested pairs, and their left-to-right
/// order is meaningful and preserved.
///
/// # Examples
///
/// ```rust
/// use textforms::FormValue;
///
/// let num = FormValue::Integer(42);
/// let text = FormValue::String("hello".to_string());
///
/// assert!(num.is_integer());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum FormValue {
    Integer(i64),
    Numeric(f64),
    String(String),
    Pair(Box<FormValue>, Box<FormValue>),
}

/// The classification of a raw substring, used to gate coercion.
///
/// [`Grammar::classify`](crate::Grammar::classify) produces a `ValueKind`;
/// [`ValueKind::coerce`] turns the classified text into a [`FormValue`].
/// Classification must always run first; coercion trusts it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Numeric,
    String,
}

impl ValueKind {
    /// Coerces classified text into a [`FormValue`] of this kind.
    ///
    /// Numeric kinds parse the trimmed text; `String` keeps the text as
    /// captured. An integer digit run too large for `i64` degrades to its
    /// `f64` representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textforms::{FormValue, ValueKind};
    ///
    /// assert_eq!(ValueKind::Integer.coerce("42"), FormValue::Integer(42));
    /// assert_eq!(ValueKind::Numeric.coerce("3."), FormValue::Numeric(3.0));
    /// assert_eq!(
    ///     ValueKind::String.coerce("2.15abc"),
    ///     FormValue::String("2.15abc".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn coerce(self, text: &str) -> FormValue {
        match self {
            ValueKind::Integer => {
                let digits = text.trim();
                match digits.parse::<i64>() {
                    Ok(value) => FormValue::Integer(value),
                    // digit runs past i64 range keep the f64 representation
                    Err(_) => ValueKind::Numeric.coerce(digits),
                }
            }
            ValueKind::Numeric => match text.trim().parse::<f64>() {
                Ok(value) => FormValue::Numeric(value),
                Err(_) => FormValue::String(text.to_string()),
            },
            ValueKind::String => FormValue::String(text.to_string()),
        }
    }
}

impl FormValue {
    /// Builds a pair value from two scalars, preserving left-to-right order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textforms::FormValue;
    ///
    /// let pair = FormValue::pair(FormValue::Integer(0), FormValue::Numeric(3.1));
    /// assert!(pair.is_pair());
    /// ```
    #[must_use]
    pub fn pair(left: FormValue, right: FormValue) -> Self {
        FormValue::Pair(Box::new(left), Box::new(right))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, FormValue::Integer(_))
    }

    /// Returns `true` if the value is a (non-integer) numeric.
    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, FormValue::Numeric(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, FormValue::String(_))
    }

    /// Returns `true` if the value is a pair.
    #[inline]
    #[must_use]
    pub const fn is_pair(&self) -> bool {
        matches!(self, FormValue::Pair(_, _))
    }

    /// A short name for the value's variant, used in error messages.
    #[inline]
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            FormValue::Integer(_) => "integer",
            FormValue::Numeric(_) => "numeric",
            FormValue::String(_) => "string",
            FormValue::Pair(_, _) => "pair",
        }
    }

    /// If the value is an integer or a whole-number numeric, returns it.
    /// Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textforms::FormValue;
    ///
    /// assert_eq!(FormValue::Integer(42).as_i64(), Some(42));
    /// assert_eq!(FormValue::Numeric(42.0).as_i64(), Some(42));
    /// assert_eq!(FormValue::Numeric(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FormValue::Integer(i) => Some(*i),
            FormValue::Numeric(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// If the value is any number, returns it as `f64`. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textforms::FormValue;
    ///
    /// assert_eq!(FormValue::Integer(42).as_f64(), Some(42.0));
    /// assert_eq!(FormValue::Numeric(3.5).as_f64(), Some(3.5));
    /// assert_eq!(FormValue::from("3.5").as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FormValue::Integer(i) => Some(*i as f64),
            FormValue::Numeric(f) => Some(*f),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FormValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a pair, returns references to both elements in order.
    /// Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textforms::FormValue;
    ///
    /// let pair = FormValue::pair(FormValue::Integer(2), FormValue::Numeric(3.141));
    /// let (left, right) = pair.as_pair().unwrap();
    /// assert_eq!(left.as_i64(), Some(2));
    /// assert_eq!(right.as_f64(), Some(3.141));
    /// ```
    #[inline]
    #[must_use]
    pub fn as_pair(&self) -> Option<(&FormValue, &FormValue)> {
        match self {
            FormValue::Pair(left, right) => Some((left.as_ref(), right.as_ref())),
            _ => None,
        }
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValue::Integer(i) => write!(f, "{}", i),
            FormValue::Numeric(n) => write!(f, "{}", n),
            FormValue::String(s) => write!(f, "{}", s),
            FormValue::Pair(left, right) => write!(f, "({}, {})", left, right),
        }
    }
}

impl Serialize for FormValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FormValue::Integer(i) => serializer.serialize_i64(*i),
            FormValue::Numeric(n) => serializer.serialize_f64(*n),
            FormValue::String(s) => serializer.serialize_str(s),
            FormValue::Pair(left, right) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(&**left)?;
                seq.serialize_element(&**right)?;
                seq.end()
            }
        }
    }
}

// TryFrom implementations for extracting values from FormValue
impl TryFrom<FormValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: FormValue) -> crate::Result<Self> {
        match value.as_i64() {
            Some(i) => Ok(i),
            None => Err(crate::Error::invalid_type("integer", value.type_name())),
        }
    }
}

impl TryFrom<FormValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: FormValue) -> crate::Result<Self> {
        match value.as_f64() {
            Some(f) => Ok(f),
            None => Err(crate::Error::invalid_type("number", value.type_name())),
        }
    }
}

impl TryFrom<FormValue> for String {
    type Error = crate::Error;

    fn try_from(value: FormValue) -> crate::Result<Self> {
        match value {
            FormValue::String(s) => Ok(s),
            other => Err(crate::Error::invalid_type("string", other.type_name())),
        }
    }
}

// From implementations for creating FormValue from primitives
impl From<i8> for FormValue {
    fn from(value: i8) -> Self {
        FormValue::Integer(value as i64)
    }
}

impl From<i16> for FormValue {
    fn from(value: i16) -> Self {
        FormValue::Integer(value as i64)
    }
}

impl From<i32> for FormValue {
    fn from(value: i32) -> Self {
        FormValue::Integer(value as i64)
    }
}

impl From<i64> for FormValue {
    fn from(value: i64) -> Self {
        FormValue::Integer(value)
    }
}

impl From<u8> for FormValue {
    fn from(value: u8) -> Self {
        FormValue::Integer(value as i64)
    }
}

impl From<u16> for FormValue {
    fn from(value: u16) -> Self {
        FormValue::Integer(value as i64)
    }
}

impl From<u32> for FormValue {
    fn from(value: u32) -> Self {
        FormValue::Integer(value as i64)
    }
}

impl From<f32> for FormValue {
    fn from(value: f32) -> Self {
        FormValue::Numeric(value as f64)
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        FormValue::Numeric(value)
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::String(value)
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::String(value.to_string())
    }
}

/// One key's slot in a decoded result.
///
/// A key's entry starts as `Single`. The second occurrence of the same key in
/// the accumulated input promotes the slot to `Multiple`, holding both values
/// in arrival order; later occurrences append. Promotion is performed by
/// [`FormMap::accumulate`](crate::FormMap::accumulate) as a wholesale
/// replacement of the slot, never by mutating a value in place.
///
/// # Examples
///
/// ```rust
/// use textforms::decode;
///
/// let form = decode("A 1#A 2#A 3");
/// let entry = form.get("A").unwrap();
/// assert!(entry.is_multiple());
/// assert_eq!(entry.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum FormEntry {
    Single(FormValue),
    Multiple(Vec<FormValue>),
}

impl FormEntry {
    /// Returns `true` if this entry holds exactly one value.
    #[inline]
    #[must_use]
    pub const fn is_single(&self) -> bool {
        matches!(self, FormEntry::Single(_))
    }

    /// Returns `true` if this entry was promoted to an ordered list.
    #[inline]
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, FormEntry::Multiple(_))
    }

    /// A uniform slice view over the entry's values, in arrival order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textforms::{FormEntry, FormValue};
    ///
    /// let single = FormEntry::Single(FormValue::Integer(1));
    /// assert_eq!(single.values().len(), 1);
    /// ```
    #[must_use]
    pub fn values(&self) -> &[FormValue] {
        match self {
            FormEntry::Single(value) => std::slice::from_ref(value),
            FormEntry::Multiple(values) => values,
        }
    }

    /// The first value in arrival order, if any.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&FormValue> {
        self.values().first()
    }

    /// The number of values held by this entry.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Returns `true` if the entry holds no values.
    ///
    /// Entries produced by decoding always hold at least one value; this
    /// exists for hand-built `Multiple` entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
}

impl From<FormValue> for FormEntry {
    fn from(value: FormValue) -> Self {
        FormEntry::Single(value)
    }
}

impl fmt::Display for FormEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormEntry::Single(value) => write!(f, "{}", value),
            FormEntry::Multiple(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl Serialize for FormEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FormEntry::Single(value) => value.serialize(serializer),
            FormEntry::Multiple(values) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
        }
    }
}
