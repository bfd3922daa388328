//! Ordered result mapping for decoded messages.
//!
//! This module provides [`FormMap`], a wrapper around [`IndexMap`] that holds
//! one [`FormEntry`](crate::FormEntry) per canonical key. Iteration follows
//! the order in which keys first appeared in the input, which keeps decoded
//! output deterministic and easy to test.
//!
//! ## Canonical keys
//!
//! A field's key identifies its entry case-insensitively: every keyed
//! operation on the map upper-cases its argument before touching the
//! underlying storage, so `"seq"`, `"Seq"`, and `"SEQ"` all address the same
//! slot and the stored key is always the upper-cased form.
//!
//! ## Examples
//!
//! ```rust
//! use textforms::{FormMap, FormValue};
//!
//! let mut map = FormMap::new();
//! map.accumulate("temp", FormValue::Numeric(21.5));
//! map.accumulate("TEMP", FormValue::Numeric(21.7));
//!
//! let entry = map.get("Temp").unwrap();
//! assert!(entry.is_multiple());
//! assert_eq!(entry.len(), 2);
//! ```

use crate::{FormEntry, FormValue};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// An ordered map from canonical (upper-cased) keys to decoded entries.
///
/// This is the buffer a [`Decoder`](crate::Decoder) accumulates into. It can
/// also be built by hand, e.g. to construct expected results in tests.
///
/// # Examples
///
/// ```rust
/// use textforms::{FormMap, FormValue};
///
/// let mut map = FormMap::new();
/// map.accumulate("first", FormValue::Integer(1));
/// map.accumulate("second", FormValue::Integer(2));
///
/// // Iteration maintains first-appearance order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["FIRST", "SECOND"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormMap(IndexMap<String, FormEntry>);

impl FormMap {
    /// Creates an empty `FormMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textforms::FormMap;
    ///
    /// let map = FormMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        FormMap(IndexMap::new())
    }

    /// Creates an empty `FormMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FormMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a decoded value under its canonical key, promoting on repeats.
    ///
    /// The first value for a key is stored as
    /// [`FormEntry::Single`](crate::FormEntry::Single); a second occurrence
    /// replaces the slot with a [`FormEntry::Multiple`](crate::FormEntry::Multiple)
    /// holding both values in arrival order, and later occurrences append.
    /// No reordering or deduplication ever happens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textforms::{FormMap, FormValue};
    ///
    /// let mut map = FormMap::new();
    /// map.accumulate("a", FormValue::Integer(1));
    /// assert!(map.get("A").unwrap().is_single());
    ///
    /// map.accumulate("a", FormValue::Integer(2));
    /// assert_eq!(map.get("A").unwrap().len(), 2);
    /// ```
    pub fn accumulate(&mut self, key: &str, value: FormValue) {
        use indexmap::map::Entry as Slot;

        match self.0.entry(key.to_ascii_uppercase()) {
            Slot::Vacant(slot) => {
                slot.insert(FormEntry::Single(value));
            }
            Slot::Occupied(mut slot) => {
                // promotion replaces the slot wholesale instead of mutating
                // the existing value in place
                let promoted = match slot.insert(FormEntry::Multiple(Vec::new())) {
                    FormEntry::Single(first) => FormEntry::Multiple(vec![first, value]),
                    FormEntry::Multiple(mut values) => {
                        values.push(value);
                        FormEntry::Multiple(values)
                    }
                };
                slot.insert(promoted);
            }
        }
    }

    /// Inserts an entry under its canonical key, replacing any previous entry.
    ///
    /// Unlike [`accumulate`](FormMap::accumulate) this never promotes; it is
    /// a plain map insert. Returns the replaced entry, if any.
    pub fn insert(&mut self, key: &str, entry: FormEntry) -> Option<FormEntry> {
        self.0.insert(key.to_ascii_uppercase(), entry)
    }

    /// Returns a reference to the entry for a key, matched case-insensitively.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textforms::{FormMap, FormValue};
    ///
    /// let mut map = FormMap::new();
    /// map.accumulate("key", FormValue::Integer(42));
    /// assert!(map.get("key").is_some());
    /// assert!(map.get("KEY").is_some());
    /// assert!(map.get("other").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FormEntry> {
        self.0.get(&key.to_ascii_uppercase())
    }

    /// Returns `true` if the map contains an entry for the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(&key.to_ascii_uppercase())
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Removes every entry from the map.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns an iterator over the canonical keys, in first-appearance order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, FormEntry> {
        self.0.keys()
    }

    /// Returns an iterator over the entries, in first-appearance order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, FormEntry> {
        self.0.values()
    }

    /// Returns an iterator over the key/entry pairs, in first-appearance order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, FormEntry> {
        self.0.iter()
    }
}

impl Serialize for FormMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, entry) in self.iter() {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

impl IntoIterator for FormMap {
    type Item = (String, FormEntry);
    type IntoIter = indexmap::map::IntoIter<String, FormEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FormMap {
    type Item = (&'a String, &'a FormEntry);
    type IntoIter = indexmap::map::Iter<'a, String, FormEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, FormEntry)> for FormMap {
    fn from_iter<T: IntoIterator<Item = (String, FormEntry)>>(iter: T) -> Self {
        FormMap(
            iter.into_iter()
                .map(|(key, entry)| (key.to_ascii_uppercase(), entry))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_stays_single() {
        let mut map = FormMap::new();
        map.accumulate("a", FormValue::Integer(1));
        assert_eq!(
            map.get("a"),
            Some(&FormEntry::Single(FormValue::Integer(1)))
        );
    }

    #[test]
    fn test_second_value_promotes() {
        let mut map = FormMap::new();
        map.accumulate("a", FormValue::Integer(1));
        map.accumulate("a", FormValue::Integer(2));
        assert_eq!(
            map.get("a"),
            Some(&FormEntry::Multiple(vec![
                FormValue::Integer(1),
                FormValue::Integer(2),
            ]))
        );
    }

    #[test]
    fn test_third_value_appends() {
        let mut map = FormMap::new();
        for n in 1..=4 {
            map.accumulate("a", FormValue::Integer(n));
        }
        let entry = map.get("a").unwrap();
        assert_eq!(entry.len(), 4);
        assert_eq!(
            entry.values(),
            &[
                FormValue::Integer(1),
                FormValue::Integer(2),
                FormValue::Integer(3),
                FormValue::Integer(4),
            ]
        );
    }

    #[test]
    fn test_keys_are_canonicalized() {
        let mut map = FormMap::new();
        map.accumulate("mixed.Case-Key", FormValue::Integer(1));
        assert!(map.contains_key("MIXED.CASE-KEY"));
        assert!(map.contains_key("mixed.case-key"));
        assert_eq!(map.keys().next().map(String::as_str), Some("MIXED.CASE-KEY"));
    }

    #[test]
    fn test_distinct_keys_keep_appearance_order() {
        let mut map = FormMap::new();
        map.accumulate("z", FormValue::Integer(1));
        map.accumulate("a", FormValue::Integer(2));
        map.accumulate("m", FormValue::Integer(3));
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_clear() {
        let mut map = FormMap::new();
        map.accumulate("a", FormValue::Integer(1));
        map.clear();
        assert!(map.is_empty());
    }

    #[test]
    fn test_insert_replaces() {
        let mut map = FormMap::new();
        map.accumulate("a", FormValue::Integer(1));
        let old = map.insert("A", FormEntry::Single(FormValue::Integer(9)));
        assert_eq!(old, Some(FormEntry::Single(FormValue::Integer(1))));
        assert_eq!(map.get("a").unwrap().first(), Some(&FormValue::Integer(9)));
    }
}
