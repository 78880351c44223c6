//! Pull-based JSON scanning and event-driven JSON emission.
//!
//! The crate centers on two small traits: [`JsonReader`], a cursor that
//! advances through JSON only when asked and hands back typed values or
//! borrowed source slices, and [`JsonSink`], which accepts a stream of
//! structural events and materializes text, bytes, or a [`Value`] tree.
//! Applications that know the shape of their input can extract exactly the
//! fields they care about and skip the rest without ever building an
//! intermediate tree.
//!
//! ```
//! use jsonpull::{JsonReader, StrReader};
//!
//! let mut reader = StrReader::new(r#"{"name":"apollo","crew":3}"#);
//! reader.expect_object().unwrap();
//! let mut crew = 0;
//! while let Some(key) = reader.next_key().unwrap() {
//!     match &*key {
//!         "crew" => crew = reader.expect_int().unwrap(),
//!         _ => reader.skip_value().unwrap(),
//!     }
//! }
//! assert_eq!(crew, 3);
//! ```
//!
//! The readers over text and bytes are non-validating on hot paths: they
//! assume well-formed input and only guarantee errors for the misuses listed
//! on each method. Wrap a reader or sink in [`ValidatingReader`] /
//! [`ValidatingSink`] to enforce correct call ordering while testing.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod chars;
mod error;
mod process;
mod reader;
mod sink;
mod validate;
mod value;

pub use error::{ErrorKind, FormatError};
pub use process::{transfer, Processor, SinkProcessor};
pub use reader::{
    parse_value, parse_value_bytes, BytesReader, JsonReader, StrReader, ValueKind, ValueReader,
};
pub use sink::{
    ByteWriter, CompactWriter, Encoding, JsonSink, NullSink, PrettyWriter, ValueBuilder,
};
pub use validate::{StateError, StructureValidator, ValidatingReader, ValidatingSink};
pub use value::{Array, Map, MapIter, Value};

#[cfg(test)]
mod tests;
