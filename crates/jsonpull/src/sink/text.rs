//! Text-writing sink backends.

use alloc::string::String;
use core::fmt::Write;

use crate::{
    sink::JsonSink,
    value::{push_escaped, ASCII_LIMIT, NO_LIMIT},
};

fn push_number(out: &mut String, value: f64) {
    write!(out, "{value}").expect("writing to a String cannot fail");
}

/// Writes minimal JSON: no whitespace between tokens.
///
/// The writer keeps a one-character separator state: nothing right after an
/// opening bracket, `,` after a value, `:` after a key. Each event writes
/// the pending separator first.
///
/// ```
/// use jsonpull::{CompactWriter, JsonSink};
///
/// let mut w = CompactWriter::new();
/// w.start_object();
/// w.add_key("on");
/// w.add_bool(true);
/// w.end_object();
/// assert_eq!(w.into_inner(), r#"{"on":true}"#);
/// ```
#[derive(Debug)]
pub struct CompactWriter {
    out: String,
    sep: Option<char>,
    limit: u32,
}

impl Default for CompactWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CompactWriter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            out: String::new(),
            sep: None,
            limit: NO_LIMIT,
        }
    }

    /// A writer whose output stays 7-bit clean: every code point above
    /// U+007F is written as a `\uXXXX` escape.
    #[must_use]
    pub fn ascii() -> Self {
        Self {
            limit: ASCII_LIMIT,
            ..Self::new()
        }
    }

    /// The text produced so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consumes the writer and returns the produced text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.out
    }

    fn separate(&mut self) {
        if let Some(sep) = self.sep.take() {
            self.out.push(sep);
        }
    }

    fn push_string(&mut self, s: &str) {
        self.out.push('"');
        push_escaped(&mut self.out, s, self.limit);
        self.out.push('"');
    }
}

impl JsonSink for CompactWriter {
    type Raw = str;

    fn add_null(&mut self) {
        self.separate();
        self.out.push_str("null");
        self.sep = Some(',');
    }

    fn add_bool(&mut self, value: bool) {
        self.separate();
        self.out.push_str(if value { "true" } else { "false" });
        self.sep = Some(',');
    }

    fn add_number(&mut self, value: f64) {
        self.separate();
        push_number(&mut self.out, value);
        self.sep = Some(',');
    }

    fn add_string(&mut self, value: &str) {
        self.separate();
        self.push_string(value);
        self.sep = Some(',');
    }

    fn add_key(&mut self, key: &str) {
        self.separate();
        self.push_string(key);
        self.sep = Some(':');
    }

    fn start_array(&mut self) {
        self.separate();
        self.out.push('[');
        self.sep = None;
    }

    fn end_array(&mut self) {
        self.out.push(']');
        self.sep = Some(',');
    }

    fn start_object(&mut self) {
        self.separate();
        self.out.push('{');
        self.sep = None;
    }

    fn end_object(&mut self) {
        self.out.push('}');
        self.sep = Some(',');
    }

    fn add_raw(&mut self, raw: &str) {
        self.separate();
        self.out.push_str(raw);
        self.sep = Some(',');
    }
}

/// What to emit before the next token of a pretty-printed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gap {
    /// Nothing: start of the document, or right after a key's `": "`.
    Inline,
    /// Newline and indent: first child of a freshly opened composite.
    Fresh,
    /// Comma, newline, and indent: between siblings.
    Comma,
}

/// Writes indented JSON.
///
/// Each composite child starts on its own line indented one level deeper
/// than its parent; `": "` follows keys so values share the key's line.
/// Empty composites print as `[]` and `{}`.
///
/// ```
/// use jsonpull::{JsonSink, PrettyWriter};
///
/// let mut w = PrettyWriter::new("  ");
/// w.start_array();
/// w.add_number(1.0);
/// w.add_number(2.0);
/// w.end_array();
/// assert_eq!(w.into_inner(), "[\n  1,\n  2\n]");
/// ```
#[derive(Debug)]
pub struct PrettyWriter {
    out: String,
    indent: String,
    depth: usize,
    gap: Gap,
    limit: u32,
}

impl PrettyWriter {
    #[must_use]
    pub fn new(indent: &str) -> Self {
        Self {
            out: String::new(),
            indent: indent.into(),
            depth: 0,
            gap: Gap::Inline,
            limit: NO_LIMIT,
        }
    }

    /// An indenting writer whose output stays 7-bit clean.
    #[must_use]
    pub fn ascii(indent: &str) -> Self {
        Self {
            limit: ASCII_LIMIT,
            ..Self::new(indent)
        }
    }

    /// The text produced so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consumes the writer and returns the produced text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.out
    }

    fn newline_indent(&mut self) {
        self.out.push('\n');
        for _ in 0..self.depth {
            self.out.push_str(&self.indent);
        }
    }

    fn separate(&mut self) {
        match self.gap {
            Gap::Inline => {}
            Gap::Fresh => self.newline_indent(),
            Gap::Comma => {
                self.out.push(',');
                self.newline_indent();
            }
        }
    }

    fn push_string(&mut self, s: &str) {
        self.out.push('"');
        push_escaped(&mut self.out, s, self.limit);
        self.out.push('"');
    }

    fn close(&mut self, bracket: char) {
        self.depth -= 1;
        if self.gap != Gap::Fresh {
            self.newline_indent();
        }
        self.out.push(bracket);
        self.gap = Gap::Comma;
    }
}

impl JsonSink for PrettyWriter {
    type Raw = str;

    fn add_null(&mut self) {
        self.separate();
        self.out.push_str("null");
        self.gap = Gap::Comma;
    }

    fn add_bool(&mut self, value: bool) {
        self.separate();
        self.out.push_str(if value { "true" } else { "false" });
        self.gap = Gap::Comma;
    }

    fn add_number(&mut self, value: f64) {
        self.separate();
        push_number(&mut self.out, value);
        self.gap = Gap::Comma;
    }

    fn add_string(&mut self, value: &str) {
        self.separate();
        self.push_string(value);
        self.gap = Gap::Comma;
    }

    fn add_key(&mut self, key: &str) {
        self.separate();
        self.push_string(key);
        self.out.push_str(": ");
        self.gap = Gap::Inline;
    }

    fn start_array(&mut self) {
        self.separate();
        self.out.push('[');
        self.depth += 1;
        self.gap = Gap::Fresh;
    }

    fn end_array(&mut self) {
        self.close(']');
    }

    fn start_object(&mut self) {
        self.separate();
        self.out.push('{');
        self.depth += 1;
        self.gap = Gap::Fresh;
    }

    fn end_object(&mut self) {
        self.close('}');
    }

    fn add_raw(&mut self, raw: &str) {
        self.separate();
        self.out.push_str(raw);
        self.gap = Gap::Comma;
    }
}
