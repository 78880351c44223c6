//! Dispatching values from a reader to per-kind handlers.
//!
//! [`Processor`] classifies the next value and hands it to a hook; the
//! default hooks walk composites and skip primitives, so an implementation
//! overrides only what it cares about. [`SinkProcessor`] overrides every
//! hook to forward the whole value into a [`JsonSink`], and [`transfer`]
//! wires a reader to a sink in one call.

use crate::{
    error::FormatError,
    reader::{JsonReader, ValueKind},
    sink::JsonSink,
};

/// Walks JSON values pulled from a reader, dispatching each to a per-kind
/// hook.
///
/// `key` is the object key the value sits under, or `None` for array
/// elements and the root. Every hook must fully consume (or skip) its
/// value. The composite hooks consume only the opening bracket and return
/// `true` to let [`process_value`](Processor::process_value) loop over the
/// children, calling the matching `end_*` hook afterwards; returning
/// `false` means the hook handled the whole composite itself.
pub trait Processor<'de, R: JsonReader<'de>> {
    /// Classifies the next value and dispatches it.
    fn process_value(&mut self, reader: &mut R, key: Option<&str>) -> Result<(), FormatError> {
        match reader.peek_kind() {
            Some(ValueKind::Array) => {
                if self.process_array(reader, key)? {
                    while reader.has_next()? {
                        self.process_value(reader, None)?;
                    }
                    self.end_array(reader, key)?;
                }
                Ok(())
            }
            Some(ValueKind::Object) => {
                if self.process_object(reader, key)? {
                    while let Some(entry_key) = reader.next_key()? {
                        self.process_value(reader, Some(&entry_key))?;
                    }
                    self.end_object(reader, key)?;
                }
                Ok(())
            }
            Some(ValueKind::Str) => self.process_string(reader, key),
            Some(ValueKind::Num) => self.process_num(reader, key),
            Some(ValueKind::Bool) => self.process_bool(reader, key),
            Some(ValueKind::Null) => self.process_null(reader, key),
            None => self.process_unknown(reader, key),
        }
    }

    /// Consumes the opening bracket; `true` lets the dispatcher loop the
    /// elements.
    fn process_array(&mut self, reader: &mut R, key: Option<&str>) -> Result<bool, FormatError> {
        let _ = key;
        reader.expect_array()?;
        Ok(true)
    }

    /// Called after the dispatcher has looped a `process_array` composite.
    fn end_array(&mut self, reader: &mut R, key: Option<&str>) -> Result<(), FormatError> {
        let _ = (reader, key);
        Ok(())
    }

    /// Consumes the opening brace; `true` lets the dispatcher loop the
    /// entries.
    fn process_object(&mut self, reader: &mut R, key: Option<&str>) -> Result<bool, FormatError> {
        let _ = key;
        reader.expect_object()?;
        Ok(true)
    }

    /// Called after the dispatcher has looped a `process_object` composite.
    fn end_object(&mut self, reader: &mut R, key: Option<&str>) -> Result<(), FormatError> {
        let _ = (reader, key);
        Ok(())
    }

    fn process_string(&mut self, reader: &mut R, key: Option<&str>) -> Result<(), FormatError> {
        let _ = key;
        reader.skip_value()
    }

    fn process_num(&mut self, reader: &mut R, key: Option<&str>) -> Result<(), FormatError> {
        let _ = key;
        reader.skip_value()
    }

    fn process_bool(&mut self, reader: &mut R, key: Option<&str>) -> Result<(), FormatError> {
        let _ = key;
        reader.skip_value()
    }

    fn process_null(&mut self, reader: &mut R, key: Option<&str>) -> Result<(), FormatError> {
        let _ = key;
        reader.skip_value()
    }

    /// Called when the next input is not a JSON value (including end of
    /// input).
    fn process_unknown(&mut self, reader: &mut R, key: Option<&str>) -> Result<(), FormatError> {
        let _ = key;
        Err(reader.fail("expected a JSON value"))
    }
}

/// A [`Processor`] that forwards every value into a sink, emitting
/// `add_key` before each keyed child.
#[derive(Debug)]
pub struct SinkProcessor<'s, S: JsonSink> {
    pub sink: &'s mut S,
}

impl<'s, S: JsonSink> SinkProcessor<'s, S> {
    pub fn new(sink: &'s mut S) -> Self {
        Self { sink }
    }

    fn emit_key(&mut self, key: Option<&str>) {
        if let Some(key) = key {
            self.sink.add_key(key);
        }
    }
}

impl<'de, R: JsonReader<'de>, S: JsonSink> Processor<'de, R> for SinkProcessor<'_, S> {
    fn process_array(&mut self, reader: &mut R, key: Option<&str>) -> Result<bool, FormatError> {
        self.emit_key(key);
        reader.expect_array()?;
        self.sink.start_array();
        Ok(true)
    }

    fn end_array(&mut self, _reader: &mut R, _key: Option<&str>) -> Result<(), FormatError> {
        self.sink.end_array();
        Ok(())
    }

    fn process_object(&mut self, reader: &mut R, key: Option<&str>) -> Result<bool, FormatError> {
        self.emit_key(key);
        reader.expect_object()?;
        self.sink.start_object();
        Ok(true)
    }

    fn end_object(&mut self, _reader: &mut R, _key: Option<&str>) -> Result<(), FormatError> {
        self.sink.end_object();
        Ok(())
    }

    fn process_string(&mut self, reader: &mut R, key: Option<&str>) -> Result<(), FormatError> {
        self.emit_key(key);
        let value = reader.expect_str()?;
        self.sink.add_string(&value);
        Ok(())
    }

    fn process_num(&mut self, reader: &mut R, key: Option<&str>) -> Result<(), FormatError> {
        self.emit_key(key);
        let value = reader.expect_double()?;
        self.sink.add_number(value);
        Ok(())
    }

    fn process_bool(&mut self, reader: &mut R, key: Option<&str>) -> Result<(), FormatError> {
        self.emit_key(key);
        let value = reader.expect_bool()?;
        self.sink.add_bool(value);
        Ok(())
    }

    fn process_null(&mut self, reader: &mut R, key: Option<&str>) -> Result<(), FormatError> {
        self.emit_key(key);
        reader.expect_null()?;
        self.sink.add_null();
        Ok(())
    }
}

/// Walks the next value of `reader`, emitting the equivalent event sequence
/// into `sink`.
///
/// ```
/// use jsonpull::{transfer, CompactWriter, StrReader};
///
/// let mut reader = StrReader::new(" { \"a\" : [ 1 , true ] } ");
/// let mut writer = CompactWriter::new();
/// transfer(&mut reader, &mut writer).unwrap();
/// assert_eq!(writer.into_inner(), r#"{"a":[1,true]}"#);
/// ```
pub fn transfer<'de, R, S>(reader: &mut R, sink: &mut S) -> Result<(), FormatError>
where
    R: JsonReader<'de>,
    S: JsonSink,
{
    SinkProcessor::new(sink).process_value(reader, None)
}
