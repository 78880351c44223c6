//! The push sink surface and its four backends.
//!
//! A [`JsonSink`] accepts a sequence of structural events describing a JSON
//! value and materializes it somewhere: a compact or pretty string
//! ([`CompactWriter`], [`PrettyWriter`]), an encoded byte buffer
//! ([`ByteWriter`]), an in-memory [`Value`](crate::Value) tree
//! ([`ValueBuilder`]), or nowhere at all ([`NullSink`]).
//!
//! Sinks trust the caller to send a well-ordered event sequence; wrap one in
//! [`ValidatingSink`](crate::ValidatingSink) to catch protocol mistakes
//! while testing.

mod build;
mod bytes;
mod null;
mod text;

pub use build::ValueBuilder;
pub use bytes::{ByteWriter, Encoding};
pub use null::NullSink;
pub use text::{CompactWriter, PrettyWriter};

/// A consumer of JSON structure events.
///
/// The event vocabulary mirrors the value grammar: primitives arrive as one
/// call each, composites as a `start_*`, their children, then the matching
/// `end_*`, and every child of an object is preceded by [`add_key`].
///
/// [`add_raw`] splices an already-serialized value of the sink's
/// [`Raw`](JsonSink::Raw) type into the output wherever a value is
/// expected, bypassing re-encoding. It pairs with
/// [`expect_value_source`](crate::JsonReader::expect_value_source) on the
/// reader whose slice type matches.
///
/// [`add_key`]: JsonSink::add_key
/// [`add_raw`]: JsonSink::add_raw
pub trait JsonSink {
    /// Payload type of [`add_raw`](JsonSink::add_raw): `str` for the text
    /// writers, `[u8]` for the byte writer, [`Value`](crate::Value) for the
    /// tree builder.
    type Raw: ?Sized;

    fn add_null(&mut self);
    fn add_bool(&mut self, value: bool);
    fn add_number(&mut self, value: f64);
    fn add_string(&mut self, value: &str);
    fn add_key(&mut self, key: &str);
    fn start_array(&mut self);
    fn end_array(&mut self);
    fn start_object(&mut self);
    fn end_object(&mut self);
    fn add_raw(&mut self, raw: &Self::Raw);
}
