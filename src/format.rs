//! TextForms Format Reference
//!
//! This module documents the TextForms wire format as implemented by this
//! library. The format itself is the external interface: there is no framing,
//! file format, or persisted state beyond the in-memory result mapping.
//!
//! # Overview
//!
//! TextForms is a compact line-oriented encoding for key/value messages, such
//! as telemetry readings or form submissions sent over constrained channels.
//! Fields are separated by a lightweight boundary token, and value types are
//! inferred from the text itself, as no schema accompanies a message.
//!
//! # Wire Grammar
//!
//! ```text
//! message   := field (BOUNDARY field)*
//! BOUNDARY  := WS* '#' WS*
//! field     := WS* KEY NUMERIC? (WS+ FREE_TEXT)?
//! KEY       := [A-Za-z_.*-]+
//! NUMERIC   := DIGIT+ ('.' DIGIT*)?
//! FREE_TEXT := remainder of the field (may contain internal whitespace)
//! ```
//!
//! **Rules**:
//!
//! - Keys use ASCII letters plus `_`, `.`, `*`, and `-`, never digits, so a
//!   digit run directly after the key always reads as a numeric suffix.
//! - Keys are case-insensitive; results are stored under the upper-cased form.
//! - `NUMERIC` permits an empty fractional part: `3.` is a valid literal,
//!   decoding as the number `3.0` (not an integer).
//! - Whitespace around the boundary `#` belongs to the boundary.
//!
//! # Value Typing
//!
//! A raw substring classifies by whole-string match against the numeric
//! literal grammar (after trimming):
//!
//! | Raw text | Decoded as |
//! |----------|------------|
//! | `3`      | integer `3` |
//! | `3.0`    | numeric `3.0` |
//! | `3.`     | numeric `3.0` |
//! | `2.15abc`| string `"2.15abc"` |
//! | `-5`     | string `"-5"` (the grammar has no sign form) |
//!
//! # Field Decoding
//!
//! For each field the decoder captures the key, an optional numeric suffix
//! glued to the key, and optional free text after at least one space:
//!
//! | Field            | Result |
//! |------------------|--------|
//! | `INT 1`          | `INT` → integer `1` |
//! | `PI3.14`         | `PI` → numeric `3.14` |
//! | `STR hello there`| `STR` → string `"hello there"` |
//! | `SEQ0 3.1`       | `SEQ` → pair `(0, 3.1)` |
//! | `KEY`            | nothing (a bare key carries no value) |
//!
//! A field with **both** a numeric suffix and free text always decodes as a
//! two-part pair, in that left-to-right order. The notation is ambiguous:
//! `SEQ0 3.1` may mean "element 0 of sequence SEQ is 3.1" or "key SEQ0 has
//! value 3.1". Resolving that requires schema knowledge the format does not
//! carry, so the decoder preserves both parts and defers the choice to the
//! caller.
//!
//! # Repeated Keys
//!
//! The first occurrence of a key stores a single value. The second promotes
//! the entry to an ordered list of both values; later occurrences append.
//! Arrival order is always preserved:
//!
//! ```text
//! A 1#A 2#A 3   →   A: [1, 2, 3]
//! A 1           →   A: 1        (a single value, not a one-element list)
//! ```
//!
//! # Malformed Input
//!
//! There is no error channel for malformed fields. A substring that fails
//! the field grammar (an empty field from a doubled boundary, a field
//! starting with a digit, plain noise) is skipped and decoding continues.
//! This permissive stance tolerates stray separators on lossy channels:
//!
//! ```text
//! A 1## B 2     →   A: 1, B: 2   (the empty middle field contributes nothing)
//! ```
//!
//! # Limitations
//!
//! - **Decoder only**: this library does not produce TextForms output.
//! - **No schema layer**: pair-versus-suffixed-key ambiguity is preserved,
//!   never resolved.
//! - **ASCII keys**: non-ASCII key handling is out of scope.
//! - **Whole messages**: input is decoded per call; there is no streaming or
//!   partial-field state.

// This module contains only documentation; no implementation code
