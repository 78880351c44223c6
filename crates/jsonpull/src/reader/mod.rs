//! The pull reader surface and its three backends.
//!
//! A [`JsonReader`] is a cursor over JSON input that advances only when the
//! caller asks for the next token. For every value kind there is an
//! `expect_*` (consume, failing on a kind mismatch), a `try_*` (consume only
//! if the kind matches, otherwise leave the cursor untouched), and a
//! `check_*` (classify without consuming). Composite values are walked with
//! `has_next` / `next_key`, skipped wholesale with `skip_value`, or captured
//! as raw source with `expect_value_source`.
//!
//! Three backends share the contract: [`StrReader`] over `&str`,
//! [`BytesReader`] over `&[u8]`, and [`ValueReader`] over an already-parsed
//! [`Value`](crate::Value) tree. They differ only in the
//! [`Slice`](JsonReader::Slice) type their source operations return.

pub(crate) mod lex;
mod bytes;
mod text;
mod tree;

use alloc::borrow::Cow;

pub use bytes::BytesReader;
pub use text::StrReader;
pub use tree::ValueReader;

use crate::{
    error::{ErrorKind, FormatError},
    process::transfer,
    sink::{JsonSink, ValueBuilder},
    value::Value,
};

/// The kind of the next JSON value, as classified by a reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Num,
    Str,
    Array,
    Object,
}

/// A pull cursor over JSON input.
///
/// The text and byte backends are non-validating on hot paths: they assume
/// well-formed input and guarantee errors only for the conditions documented
/// on each method. Misuse of the call protocol (consuming a value where none
/// is expected, iterating an array the reader is not inside) produces
/// undefined results; wrap the reader in
/// [`ValidatingReader`](crate::ValidatingReader) to catch such mistakes
/// while testing.
///
/// Cloning a reader snapshots the cursor only; the clone and the original
/// then advance independently over the shared source.
pub trait JsonReader<'de>: Clone {
    /// Borrowed source region type: `&'de str` for the text backend,
    /// `&'de [u8]` for the byte backend, `&'de Value` for the tree backend.
    type Slice;

    /// Classifies the next value without consuming anything.
    ///
    /// Returns `None` at end of input or when the next byte starts no JSON
    /// value.
    fn peek_kind(&self) -> Option<ValueKind>;

    /// True if the next value is a number whose lexeme has neither a
    /// fraction nor an exponent.
    fn check_int(&self) -> bool;

    /// Consumes a `null`.
    fn expect_null(&mut self) -> Result<(), FormatError>;

    /// Consumes `true` or `false`.
    fn expect_bool(&mut self) -> Result<bool, FormatError>;

    /// Consumes an integer number, reading digits into an `i64`.
    ///
    /// Fails if the lexeme contains `.` or an exponent. Accumulation wraps
    /// silently on overflow; use [`expect_value_source`] and parse the
    /// lexeme to keep arbitrary precision.
    ///
    /// [`expect_value_source`]: JsonReader::expect_value_source
    fn expect_int(&mut self) -> Result<i64, FormatError>;

    /// Consumes any number as an `f64`.
    fn expect_double(&mut self) -> Result<f64, FormatError>;

    /// Consumes a string, borrowing from the source when it contains no
    /// escapes.
    fn expect_str(&mut self) -> Result<Cow<'de, str>, FormatError>;

    /// Consumes the opening bracket of an array.
    fn expect_array(&mut self) -> Result<(), FormatError>;

    /// Consumes the opening brace of an object.
    fn expect_object(&mut self) -> Result<(), FormatError>;

    /// Inside an array: true if another element follows (consuming the
    /// separator), false when the array ends (consuming the bracket).
    fn has_next(&mut self) -> Result<bool, FormatError>;

    /// Inside an object: the next key, leaving the cursor at its value;
    /// `None` when the object ends (consuming the brace).
    fn next_key(&mut self) -> Result<Option<Cow<'de, str>>, FormatError>;

    /// Peek variant of [`next_key`](JsonReader::next_key): reports whether a
    /// key follows without consuming it, but still exits the object on its
    /// end.
    fn has_next_key(&mut self) -> Result<bool, FormatError>;

    /// If the next key byte-matches a candidate, consumes key and colon and
    /// returns the candidate index; otherwise leaves the cursor untouched.
    ///
    /// `candidates` must be sorted ascending. Keys containing escapes never
    /// match.
    fn try_key_index(&mut self, candidates: &[&str]) -> Option<usize>;

    /// If the next string value byte-matches a candidate, consumes it and
    /// returns the candidate index; otherwise leaves the cursor untouched.
    ///
    /// `candidates` must be sorted ascending and non-empty.
    fn try_str_index(&mut self, candidates: &[&str]) -> Option<usize>;

    /// Discards the next value, recursing through composites.
    fn skip_value(&mut self) -> Result<(), FormatError>;

    /// Skips the next value and returns the source region covering exactly
    /// it (quotes and brackets included).
    fn expect_value_source(&mut self) -> Result<Self::Slice, FormatError>;

    /// Builds a [`FormatError`] at the current position.
    fn fail(&self, message: &str) -> FormatError;

    // ----- provided classification helpers -------------------------------

    fn check_null(&self) -> bool {
        self.peek_kind() == Some(ValueKind::Null)
    }

    fn check_bool(&self) -> bool {
        self.peek_kind() == Some(ValueKind::Bool)
    }

    fn check_num(&self) -> bool {
        self.peek_kind() == Some(ValueKind::Num)
    }

    /// True if the next value is a number. Every JSON number can be read as
    /// a double, so this coincides with [`check_num`](JsonReader::check_num).
    fn check_double(&self) -> bool {
        self.check_num()
    }

    fn check_str(&self) -> bool {
        self.peek_kind() == Some(ValueKind::Str)
    }

    fn check_array(&self) -> bool {
        self.peek_kind() == Some(ValueKind::Array)
    }

    fn check_object(&self) -> bool {
        self.peek_kind() == Some(ValueKind::Object)
    }

    // ----- provided consumption helpers ----------------------------------

    /// Consumes a `null` if one is next.
    fn try_null(&mut self) -> bool {
        self.check_null() && self.expect_null().is_ok()
    }

    /// Consumes a boolean if one is next.
    fn try_bool(&mut self) -> Option<bool> {
        if self.check_bool() {
            self.expect_bool().ok()
        } else {
            None
        }
    }

    /// Consumes an integer if the next value is an integral number.
    fn try_int(&mut self) -> Option<i64> {
        if self.check_int() {
            self.expect_int().ok()
        } else {
            None
        }
    }

    /// Consumes a number as `f64` if one is next.
    fn try_double(&mut self) -> Option<f64> {
        if self.check_num() {
            self.expect_double().ok()
        } else {
            None
        }
    }

    /// Consumes any number. The value model is `f64`, so this is
    /// [`expect_double`](JsonReader::expect_double) under another name.
    fn expect_num(&mut self) -> Result<f64, FormatError> {
        self.expect_double()
    }

    fn try_num(&mut self) -> Option<f64> {
        self.try_double()
    }

    /// Consumes a string if one is next.
    fn try_str(&mut self) -> Option<Cow<'de, str>> {
        if self.check_str() {
            self.expect_str().ok()
        } else {
            None
        }
    }

    /// Enters an array if one is next.
    fn try_array(&mut self) -> bool {
        self.check_array() && self.expect_array().is_ok()
    }

    /// Enters an object if one is next.
    fn try_object(&mut self) -> bool {
        self.check_object() && self.expect_object().is_ok()
    }

    // ----- provided candidate helpers ------------------------------------

    /// [`try_key_index`](JsonReader::try_key_index), returning the matched
    /// candidate itself. The returned reference is the list element, not a
    /// copy.
    fn try_key<'c>(&mut self, candidates: &'c [&'c str]) -> Option<&'c str>
    where
        Self: Sized,
    {
        self.try_key_index(candidates).map(|i| candidates[i])
    }

    /// [`try_str_index`](JsonReader::try_str_index), returning the matched
    /// candidate itself.
    fn try_str_match<'c>(&mut self, candidates: &'c [&'c str]) -> Option<&'c str>
    where
        Self: Sized,
    {
        self.try_str_index(candidates).map(|i| candidates[i])
    }

    /// Like [`try_str_index`](JsonReader::try_str_index), but a failure to
    /// match is a [`FormatError`].
    fn expect_str_index(&mut self, candidates: &[&str]) -> Result<usize, FormatError> {
        self.try_str_index(candidates)
            .ok_or_else(|| self.fail("expected one of the candidate strings"))
    }

    /// Like [`try_str_match`](JsonReader::try_str_match), but a failure to
    /// match is a [`FormatError`].
    fn expect_str_match<'c>(
        &mut self,
        candidates: &'c [&'c str],
    ) -> Result<&'c str, FormatError>
    where
        Self: Sized,
    {
        self.expect_str_index(candidates).map(|i| candidates[i])
    }

    // ----- provided composite helpers ------------------------------------

    /// Skips one key-value pair; false (exiting the object) if none remains.
    fn skip_entry(&mut self) -> Result<bool, FormatError> {
        match self.next_key()? {
            Some(_) => {
                self.skip_value()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Fast-forwards over the remaining elements of the current array.
    fn end_array(&mut self) -> Result<(), FormatError> {
        while self.has_next()? {
            self.skip_value()?;
        }
        Ok(())
    }

    /// Fast-forwards over the remaining entries of the current object.
    fn end_object(&mut self) -> Result<(), FormatError> {
        while self.skip_entry()? {}
        Ok(())
    }

    /// Walks the next value, emitting the equivalent event sequence into
    /// `sink`.
    fn emit_value<S: JsonSink>(&mut self, sink: &mut S) -> Result<(), FormatError>
    where
        Self: Sized,
    {
        transfer(self, sink)
    }
}

pub(crate) fn expected(what: &'static str, offset: usize) -> FormatError {
    FormatError::new(ErrorKind::Expected(what), offset)
}

/// Parses a complete JSON text into a [`Value`] tree.
///
/// ```
/// use jsonpull::{parse_value, Value};
///
/// let v = parse_value(r#"[1,null]"#).unwrap();
/// assert_eq!(v, Value::Array(vec![Value::Number(1.0), Value::Null]));
/// ```
pub fn parse_value(source: &str) -> Result<Value, FormatError> {
    let mut reader = StrReader::new(source);
    let mut builder = ValueBuilder::new();
    transfer(&mut reader, &mut builder)?;
    Ok(builder.into_root().expect("transfer completed a root value"))
}

/// Parses a complete JSON byte source into a [`Value`] tree.
pub fn parse_value_bytes(source: &[u8]) -> Result<Value, FormatError> {
    let mut reader = BytesReader::new(source);
    let mut builder = ValueBuilder::new();
    transfer(&mut reader, &mut builder)?;
    Ok(builder.into_root().expect("transfer completed a root value"))
}
