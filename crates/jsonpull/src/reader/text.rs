//! Reader backend over `&str` sources.

use alloc::borrow::Cow;
use alloc::string::String;

use crate::{
    error::{ErrorKind, FormatError},
    reader::{expected, lex, JsonReader, ValueKind},
};

/// A pull reader over a JSON string slice.
///
/// Source slices returned by [`expect_value_source`] and
/// [`next_key_source`] borrow from the input for the reader's full
/// lifetime; strings without escapes are returned zero-copy.
///
/// [`expect_value_source`]: JsonReader::expect_value_source
/// [`next_key_source`]: StrReader::next_key_source
#[derive(Debug, Clone)]
pub struct StrReader<'de> {
    src: &'de str,
    pos: usize,
}

impl<'de> StrReader<'de> {
    #[must_use]
    pub fn new(source: &'de str) -> Self {
        Self {
            src: source,
            pos: 0,
        }
    }

    /// The full source this reader was created over.
    #[must_use]
    pub fn source(&self) -> &'de str {
        self.src
    }

    /// Current byte offset into the source.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// True once only whitespace remains. The reader never checks this
    /// itself; callers that require an exhausted source do.
    #[must_use]
    pub fn at_end(&self) -> bool {
        lex::skip_whitespace(self.bytes(), self.pos) == self.src.len()
    }

    /// Like [`next_key`](JsonReader::next_key), but returns the raw source
    /// of the key including its quotes.
    pub fn next_key_source(&mut self) -> Result<Option<&'de str>, FormatError> {
        match self.key_span()? {
            Some(span) => Ok(Some(&self.src[span.start..span.end])),
            None => Ok(None),
        }
    }

    #[inline]
    fn bytes(&self) -> &'de [u8] {
        self.src.as_bytes()
    }

    fn peek_or_eof(&self) -> Result<(u8, usize), FormatError> {
        lex::peek(self.bytes(), self.pos)
            .ok_or_else(|| FormatError::new(ErrorKind::UnexpectedEndOfInput, self.src.len()))
    }

    /// Consumes the key at the cursor (comma-separated or fresh) together
    /// with its colon; `None` consumes the closing brace.
    fn key_span(&mut self) -> Result<Option<lex::StringSpan>, FormatError> {
        let src = self.bytes();
        let (b, p) = self.peek_or_eof()?;
        let at_quote = match b {
            b'}' => {
                self.pos = p + 1;
                return Ok(None);
            }
            b',' => lex::skip_whitespace(src, p + 1),
            b'"' => p,
            _ => return Err(expected("object key", p)),
        };
        if src.get(at_quote) != Some(&b'"') {
            return Err(expected("object key", at_quote));
        }
        let span = lex::scan_string(src, at_quote)?;
        let colon = lex::skip_whitespace(src, span.end);
        if src.get(colon) != Some(&b':') {
            return Err(expected("':'", colon));
        }
        self.pos = colon + 1;
        Ok(Some(span))
    }

    fn string_value(&self, span: lex::StringSpan) -> Result<Cow<'de, str>, FormatError> {
        if span.has_escape {
            let mut out = String::new();
            lex::unescape_into(self.bytes(), span, &mut out)?;
            Ok(Cow::Owned(out))
        } else {
            Ok(Cow::Borrowed(&self.src[span.content()]))
        }
    }
}

impl<'de> JsonReader<'de> for StrReader<'de> {
    type Slice = &'de str;

    fn peek_kind(&self) -> Option<ValueKind> {
        lex::peek(self.bytes(), self.pos).and_then(|(b, _)| lex::classify(b))
    }

    fn check_int(&self) -> bool {
        lex::peek(self.bytes(), self.pos).is_some_and(|(b, p)| {
            lex::classify(b) == Some(ValueKind::Num)
                && lex::scan_number(self.bytes(), p).is_ok_and(|n| n.is_int)
        })
    }

    fn expect_null(&mut self) -> Result<(), FormatError> {
        let (b, p) = self.peek_or_eof()?;
        if b != b'n' {
            return Err(expected("null", p));
        }
        self.pos = lex::expect_literal(self.bytes(), p, "null")?;
        Ok(())
    }

    fn expect_bool(&mut self) -> Result<bool, FormatError> {
        let (b, p) = self.peek_or_eof()?;
        let value = match b {
            b't' => true,
            b'f' => false,
            _ => return Err(expected("boolean", p)),
        };
        self.pos = lex::expect_literal(self.bytes(), p, if value { "true" } else { "false" })?;
        Ok(value)
    }

    fn expect_int(&mut self) -> Result<i64, FormatError> {
        let (b, p) = self.peek_or_eof()?;
        if lex::classify(b) != Some(ValueKind::Num) {
            return Err(expected("number", p));
        }
        let span = lex::scan_number(self.bytes(), p)?;
        if !span.is_int {
            return Err(expected("integer", span.start));
        }
        self.pos = span.end;
        Ok(lex::parse_int(self.bytes(), span))
    }

    fn expect_double(&mut self) -> Result<f64, FormatError> {
        let (b, p) = self.peek_or_eof()?;
        if lex::classify(b) != Some(ValueKind::Num) {
            return Err(expected("number", p));
        }
        let span = lex::scan_number(self.bytes(), p)?;
        self.pos = span.end;
        lex::parse_double(self.bytes(), span)
    }

    fn expect_str(&mut self) -> Result<Cow<'de, str>, FormatError> {
        let (b, p) = self.peek_or_eof()?;
        if b != b'"' {
            return Err(expected("string", p));
        }
        let span = lex::scan_string(self.bytes(), p)?;
        self.pos = span.end;
        self.string_value(span)
    }

    fn expect_array(&mut self) -> Result<(), FormatError> {
        let (b, p) = self.peek_or_eof()?;
        if b != b'[' {
            return Err(expected("array", p));
        }
        self.pos = p + 1;
        Ok(())
    }

    fn expect_object(&mut self) -> Result<(), FormatError> {
        let (b, p) = self.peek_or_eof()?;
        if b != b'{' {
            return Err(expected("object", p));
        }
        self.pos = p + 1;
        Ok(())
    }

    fn has_next(&mut self) -> Result<bool, FormatError> {
        let (b, p) = self.peek_or_eof()?;
        match b {
            b']' => {
                self.pos = p + 1;
                Ok(false)
            }
            b',' => {
                self.pos = p + 1;
                Ok(true)
            }
            _ => {
                self.pos = p;
                Ok(true)
            }
        }
    }

    fn next_key(&mut self) -> Result<Option<Cow<'de, str>>, FormatError> {
        match self.key_span()? {
            Some(span) => Ok(Some(self.string_value(span)?)),
            None => Ok(None),
        }
    }

    fn has_next_key(&mut self) -> Result<bool, FormatError> {
        let (b, p) = self.peek_or_eof()?;
        if b == b'}' {
            self.pos = p + 1;
            Ok(false)
        } else {
            Ok(true)
        }
    }

    fn try_key_index(&mut self, candidates: &[&str]) -> Option<usize> {
        let src = self.bytes();
        let mut p = lex::skip_whitespace(src, self.pos);
        if src.get(p) == Some(&b',') {
            p = lex::skip_whitespace(src, p + 1);
        }
        let (index, after) = lex::match_candidates(src, p, candidates)?;
        let colon = lex::skip_whitespace(src, after);
        if src.get(colon) != Some(&b':') {
            return None;
        }
        self.pos = colon + 1;
        Some(index)
    }

    fn try_str_index(&mut self, candidates: &[&str]) -> Option<usize> {
        assert!(
            !candidates.is_empty(),
            "string candidate lists must be non-empty"
        );
        let src = self.bytes();
        let p = lex::skip_whitespace(src, self.pos);
        let (index, after) = lex::match_candidates(src, p, candidates)?;
        self.pos = after;
        Some(index)
    }

    fn skip_value(&mut self) -> Result<(), FormatError> {
        let p = lex::skip_whitespace(self.bytes(), self.pos);
        self.pos = lex::skip_value(self.bytes(), p)?;
        Ok(())
    }

    fn expect_value_source(&mut self) -> Result<&'de str, FormatError> {
        let p = lex::skip_whitespace(self.bytes(), self.pos);
        let end = lex::skip_value(self.bytes(), p)?;
        self.pos = end;
        Ok(&self.src[p..end])
    }

    fn fail(&self, message: &str) -> FormatError {
        FormatError::new(ErrorKind::Message(message.into()), self.pos)
    }
}
