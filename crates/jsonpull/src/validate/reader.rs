//! Query-order validation for readers.

use alloc::borrow::Cow;

use crate::{
    error::FormatError,
    reader::{JsonReader, ValueKind},
    validate::{StateError, StructureValidator},
};

fn guard(result: Result<(), StateError>) {
    if let Err(e) = result {
        panic!("invalid reader protocol: {e}");
    }
}

/// A reader decorator that panics at the first out-of-order query.
///
/// The wrapped reader's answers are forwarded unchanged (including
/// [`FormatError`]s); what this decorator adds is protocol enforcement:
///
/// - a value may be consumed only where the structure allows one, and
///   inside a composite only after `has_next` / `next_key` has produced it;
/// - `has_next` is valid only inside an array, `next_key` and friends only
///   inside an object, and neither while a produced value is still pending;
/// - `end_object` is valid only at an entry boundary.
///
/// Classification queries (`peek_kind`, `check_*`) are unrestricted.
#[derive(Debug, Clone)]
pub struct ValidatingReader<R> {
    inner: R,
    validator: StructureValidator,
    /// An element or entry value has been produced and awaits consumption.
    primed: bool,
}

impl<R> ValidatingReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: reader,
            validator: StructureValidator::new(),
            primed: false,
        }
    }

    /// Accepts a sequence of top-level values instead of exactly one.
    pub fn reusable(reader: R) -> Self {
        Self {
            inner: reader,
            validator: StructureValidator::reusable(),
            primed: false,
        }
    }

    /// The wrapped reader.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Unwraps the decorator.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn before_value(&self) {
        if !self.validator.allows_value() {
            panic!("invalid reader protocol: {}", StateError::ValueNotAllowed);
        }
        if self.validator.is_inside() && !self.primed {
            panic!("invalid reader protocol: consume follows has_next or next_key");
        }
    }

    fn note_value(&mut self) {
        guard(self.validator.value());
        self.primed = false;
    }

    fn require_array(&self) {
        if !self.validator.is_array() {
            panic!("invalid reader protocol: {}", StateError::NotInArray);
        }
    }

    fn require_object_boundary(&self) {
        if !self.validator.is_object() {
            panic!("invalid reader protocol: {}", StateError::NotInObject);
        }
        if self.primed {
            panic!("invalid reader protocol: entry value still pending");
        }
    }
}

impl<'de, R: JsonReader<'de>> JsonReader<'de> for ValidatingReader<R> {
    type Slice = R::Slice;

    fn peek_kind(&self) -> Option<ValueKind> {
        self.inner.peek_kind()
    }

    fn check_int(&self) -> bool {
        self.inner.check_int()
    }

    fn expect_null(&mut self) -> Result<(), FormatError> {
        self.before_value();
        self.inner.expect_null()?;
        self.note_value();
        Ok(())
    }

    fn expect_bool(&mut self) -> Result<bool, FormatError> {
        self.before_value();
        let value = self.inner.expect_bool()?;
        self.note_value();
        Ok(value)
    }

    fn expect_int(&mut self) -> Result<i64, FormatError> {
        self.before_value();
        let value = self.inner.expect_int()?;
        self.note_value();
        Ok(value)
    }

    fn expect_double(&mut self) -> Result<f64, FormatError> {
        self.before_value();
        let value = self.inner.expect_double()?;
        self.note_value();
        Ok(value)
    }

    fn expect_str(&mut self) -> Result<Cow<'de, str>, FormatError> {
        self.before_value();
        let value = self.inner.expect_str()?;
        self.note_value();
        Ok(value)
    }

    fn expect_array(&mut self) -> Result<(), FormatError> {
        self.before_value();
        self.inner.expect_array()?;
        guard(self.validator.start_array());
        self.primed = false;
        Ok(())
    }

    fn expect_object(&mut self) -> Result<(), FormatError> {
        self.before_value();
        self.inner.expect_object()?;
        guard(self.validator.start_object());
        self.primed = false;
        Ok(())
    }

    fn has_next(&mut self) -> Result<bool, FormatError> {
        self.require_array();
        if self.primed {
            panic!("invalid reader protocol: element still pending");
        }
        let more = self.inner.has_next()?;
        if more {
            self.primed = true;
        } else {
            guard(self.validator.end_array());
        }
        Ok(more)
    }

    fn next_key(&mut self) -> Result<Option<Cow<'de, str>>, FormatError> {
        self.require_object_boundary();
        match self.inner.next_key()? {
            Some(key) => {
                guard(self.validator.key());
                self.primed = true;
                Ok(Some(key))
            }
            None => {
                guard(self.validator.end_object());
                Ok(None)
            }
        }
    }

    fn has_next_key(&mut self) -> Result<bool, FormatError> {
        self.require_object_boundary();
        let more = self.inner.has_next_key()?;
        if !more {
            guard(self.validator.end_object());
        }
        Ok(more)
    }

    fn try_key_index(&mut self, candidates: &[&str]) -> Option<usize> {
        self.require_object_boundary();
        let index = self.inner.try_key_index(candidates)?;
        guard(self.validator.key());
        self.primed = true;
        Some(index)
    }

    fn try_str_index(&mut self, candidates: &[&str]) -> Option<usize> {
        self.before_value();
        let index = self.inner.try_str_index(candidates)?;
        self.note_value();
        Some(index)
    }

    fn skip_value(&mut self) -> Result<(), FormatError> {
        self.before_value();
        self.inner.skip_value()?;
        self.note_value();
        Ok(())
    }

    fn expect_value_source(&mut self) -> Result<R::Slice, FormatError> {
        self.before_value();
        let slice = self.inner.expect_value_source()?;
        self.note_value();
        Ok(slice)
    }

    fn skip_entry(&mut self) -> Result<bool, FormatError> {
        self.require_object_boundary();
        let skipped = self.inner.skip_entry()?;
        if skipped {
            guard(self.validator.key());
            guard(self.validator.value());
        } else {
            guard(self.validator.end_object());
        }
        Ok(skipped)
    }

    fn end_array(&mut self) -> Result<(), FormatError> {
        self.require_array();
        self.inner.end_array()?;
        guard(self.validator.end_array());
        self.primed = false;
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), FormatError> {
        self.require_object_boundary();
        self.inner.end_object()?;
        guard(self.validator.end_object());
        Ok(())
    }

    fn fail(&self, message: &str) -> FormatError {
        self.inner.fail(message)
    }
}
