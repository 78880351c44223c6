//! Reader backend over an already-parsed [`Value`] tree.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::{
    error::{ErrorKind, FormatError},
    reader::{JsonReader, ValueKind},
    value::{MapIter, Value},
};

/// One entered composite: the iterator over its remaining children.
#[derive(Debug, Clone)]
enum Frame<'de> {
    Array(core::slice::Iter<'de, Value>),
    Object(MapIter<'de>),
}

/// A pull reader over a [`Value`] tree.
///
/// The cursor is a *next value* cell plus a stack of iteration frames, one
/// per entered composite. Frames borrow the underlying collections, so
/// cloning the reader duplicates only the iteration state and both cursors
/// traverse the same tree independently. Object keys come back in the
/// map's insertion order, the same order the other backends see in source
/// text.
///
/// There is no backing text: source operations return `&Value`, numbers
/// are integral when they have no fractional part, error positions are
/// reported as offset zero, and an integer read of an out-of-range number
/// clamps to the `i64` limits (the digit string the lexing backends wrap
/// over no longer exists here).
#[derive(Debug, Clone)]
pub struct ValueReader<'de> {
    next: Option<&'de Value>,
    stack: Vec<Frame<'de>>,
}

impl<'de> ValueReader<'de> {
    #[must_use]
    pub fn new(value: &'de Value) -> Self {
        Self {
            next: Some(value),
            stack: Vec::new(),
        }
    }

    fn mismatch(what: &'static str) -> FormatError {
        FormatError::new(ErrorKind::Expected(what), 0)
    }

    fn integral(n: f64) -> bool {
        n.is_finite() && n % 1.0 == 0.0
    }
}

impl<'de> JsonReader<'de> for ValueReader<'de> {
    type Slice = &'de Value;

    fn peek_kind(&self) -> Option<ValueKind> {
        self.next.map(|v| match v {
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Num,
            Value::String(_) => ValueKind::Str,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        })
    }

    fn check_int(&self) -> bool {
        matches!(self.next, Some(Value::Number(n)) if Self::integral(*n))
    }

    fn expect_null(&mut self) -> Result<(), FormatError> {
        match self.next {
            Some(Value::Null) => {
                self.next = None;
                Ok(())
            }
            _ => Err(Self::mismatch("null")),
        }
    }

    fn expect_bool(&mut self) -> Result<bool, FormatError> {
        match self.next {
            Some(Value::Boolean(b)) => {
                self.next = None;
                Ok(*b)
            }
            _ => Err(Self::mismatch("boolean")),
        }
    }

    fn expect_int(&mut self) -> Result<i64, FormatError> {
        match self.next {
            Some(Value::Number(n)) if Self::integral(*n) => {
                self.next = None;
                // Out-of-range magnitudes clamp to the i64 limits. This is
                // not the lexing backends' digit wrap; see the type docs.
                Ok(*n as i64)
            }
            _ => Err(Self::mismatch("integer")),
        }
    }

    fn expect_double(&mut self) -> Result<f64, FormatError> {
        match self.next {
            Some(Value::Number(n)) => {
                self.next = None;
                Ok(*n)
            }
            _ => Err(Self::mismatch("number")),
        }
    }

    fn expect_str(&mut self) -> Result<Cow<'de, str>, FormatError> {
        match self.next {
            Some(Value::String(s)) => {
                self.next = None;
                Ok(Cow::Borrowed(s.as_str()))
            }
            _ => Err(Self::mismatch("string")),
        }
    }

    fn expect_array(&mut self) -> Result<(), FormatError> {
        match self.next {
            Some(Value::Array(items)) => {
                self.next = None;
                self.stack.push(Frame::Array(items.iter()));
                Ok(())
            }
            _ => Err(Self::mismatch("array")),
        }
    }

    fn expect_object(&mut self) -> Result<(), FormatError> {
        match self.next {
            Some(Value::Object(map)) => {
                self.next = None;
                self.stack.push(Frame::Object(map.iter()));
                Ok(())
            }
            _ => Err(Self::mismatch("object")),
        }
    }

    fn has_next(&mut self) -> Result<bool, FormatError> {
        match self.stack.last_mut() {
            Some(Frame::Array(iter)) => match iter.next() {
                Some(v) => {
                    self.next = Some(v);
                    Ok(true)
                }
                None => {
                    self.stack.pop();
                    self.next = None;
                    Ok(false)
                }
            },
            _ => Err(self.fail("not iterating an array")),
        }
    }

    fn next_key(&mut self) -> Result<Option<Cow<'de, str>>, FormatError> {
        match self.stack.last_mut() {
            Some(Frame::Object(iter)) => match iter.next() {
                Some((k, v)) => {
                    self.next = Some(v);
                    Ok(Some(Cow::Borrowed(k.as_str())))
                }
                None => {
                    self.stack.pop();
                    self.next = None;
                    Ok(None)
                }
            },
            _ => Err(self.fail("not iterating an object")),
        }
    }

    fn has_next_key(&mut self) -> Result<bool, FormatError> {
        match self.stack.last_mut() {
            Some(Frame::Object(iter)) => {
                if iter.clone().next().is_some() {
                    Ok(true)
                } else {
                    self.stack.pop();
                    self.next = None;
                    Ok(false)
                }
            }
            _ => Err(self.fail("not iterating an object")),
        }
    }

    fn try_key_index(&mut self, candidates: &[&str]) -> Option<usize> {
        let Some(Frame::Object(iter)) = self.stack.last_mut() else {
            return None;
        };
        let (key, _) = iter.clone().next()?;
        let index = candidates.binary_search(&key.as_str()).ok()?;
        let (_, value) = iter.next().expect("peeked entry is present");
        self.next = Some(value);
        Some(index)
    }

    fn try_str_index(&mut self, candidates: &[&str]) -> Option<usize> {
        assert!(
            !candidates.is_empty(),
            "string candidate lists must be non-empty"
        );
        match self.next {
            Some(Value::String(s)) => {
                let index = candidates.binary_search(&s.as_str()).ok()?;
                self.next = None;
                Some(index)
            }
            _ => None,
        }
    }

    fn skip_value(&mut self) -> Result<(), FormatError> {
        match self.next.take() {
            Some(_) => Ok(()),
            None => Err(self.fail("no value to skip")),
        }
    }

    fn expect_value_source(&mut self) -> Result<&'de Value, FormatError> {
        self.next
            .take()
            .ok_or_else(|| self.fail("no value available"))
    }

    fn fail(&self, message: &str) -> FormatError {
        FormatError::new(ErrorKind::Message(message.into()), 0)
    }
}
