//! Event-order validation for sinks.

use crate::{
    sink::JsonSink,
    validate::{StateError, StructureValidator},
};

fn guard(result: Result<(), StateError>) {
    if let Err(e) = result {
        panic!("invalid sink protocol: {e}");
    }
}

/// A sink decorator that panics at the first out-of-order event.
///
/// Every event is checked against a [`StructureValidator`] before being
/// forwarded, so a misbehaving producer fails at the offending call instead
/// of producing silently malformed output. Intended for tests and debugging;
/// the plain sinks trust their caller.
///
/// A decorator built with [`reusable`](ValidatingSink::reusable) accepts a
/// sequence of top-level values; one built with
/// [`new`](ValidatingSink::new) accepts exactly one.
#[derive(Debug)]
pub struct ValidatingSink<S> {
    inner: S,
    validator: StructureValidator,
}

impl<S: JsonSink> ValidatingSink<S> {
    pub fn new(sink: S) -> Self {
        Self {
            inner: sink,
            validator: StructureValidator::new(),
        }
    }

    pub fn reusable(sink: S) -> Self {
        Self {
            inner: sink,
            validator: StructureValidator::reusable(),
        }
    }

    /// The wrapped sink.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwraps the decorator.
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// True once a single-use decorator has accepted one complete value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.validator.is_complete()
    }
}

impl<S: JsonSink> JsonSink for ValidatingSink<S> {
    type Raw = S::Raw;

    fn add_null(&mut self) {
        guard(self.validator.value());
        self.inner.add_null();
    }

    fn add_bool(&mut self, value: bool) {
        guard(self.validator.value());
        self.inner.add_bool(value);
    }

    fn add_number(&mut self, value: f64) {
        guard(self.validator.value());
        self.inner.add_number(value);
    }

    fn add_string(&mut self, value: &str) {
        guard(self.validator.value());
        self.inner.add_string(value);
    }

    fn add_key(&mut self, key: &str) {
        guard(self.validator.key());
        self.inner.add_key(key);
    }

    fn start_array(&mut self) {
        guard(self.validator.start_array());
        self.inner.start_array();
    }

    fn end_array(&mut self) {
        guard(self.validator.end_array());
        self.inner.end_array();
    }

    fn start_object(&mut self) {
        guard(self.validator.start_object());
        self.inner.start_object();
    }

    fn end_object(&mut self) {
        guard(self.validator.end_object());
        self.inner.end_object();
    }

    /// A raw splice counts as one value; its content is not inspected.
    fn add_raw(&mut self, raw: &S::Raw) {
        guard(self.validator.value());
        self.inner.add_raw(raw);
    }
}
