//! The discarding sink.

use core::marker::PhantomData;

use crate::sink::JsonSink;

/// A sink that ignores every event.
///
/// Useful as a measuring target when only the reader's work matters, and as
/// a writable stand-in where a sink is required. The `Raw` parameter exists
/// only to satisfy pairings with any reader's slice type; it defaults to
/// `str`.
pub struct NullSink<Raw: ?Sized = str> {
    _raw: PhantomData<fn(&Raw)>,
}

impl<Raw: ?Sized> NullSink<Raw> {
    #[must_use]
    pub fn new() -> Self {
        Self { _raw: PhantomData }
    }
}

impl<Raw: ?Sized> Default for NullSink<Raw> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Raw: ?Sized> core::fmt::Debug for NullSink<Raw> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("NullSink")
    }
}

impl<Raw: ?Sized> JsonSink for NullSink<Raw> {
    type Raw = Raw;

    fn add_null(&mut self) {}
    fn add_bool(&mut self, _value: bool) {}
    fn add_number(&mut self, _value: f64) {}
    fn add_string(&mut self, _value: &str) {}
    fn add_key(&mut self, _key: &str) {}
    fn start_array(&mut self) {}
    fn end_array(&mut self) {}
    fn start_object(&mut self) {}
    fn end_object(&mut self) {}
    fn add_raw(&mut self, _raw: &Raw) {}
}
