//! Error types for malformed or wrong-typed input.

use alloc::string::String;

use thiserror::Error;

/// Failure while reading JSON: malformed input, or a typed consume applied to
/// a value of a different kind.
///
/// `offset` is a byte offset into the source the reader was created over.
/// A reader that produced a `FormatError` may have stopped mid-token and
/// must not be reused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct FormatError {
    pub kind: ErrorKind,
    pub offset: usize,
}

impl FormatError {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// The cause of a [`FormatError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("expected {0}")]
    Expected(&'static str),
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("invalid unicode escape sequence")]
    InvalidUnicodeEscape,
    #[error("unpaired surrogate escape")]
    UnpairedSurrogate,
    #[error("invalid utf-8 in string")]
    InvalidUtf8,
    #[error("unterminated string")]
    UnterminatedString,
    #[error("invalid number")]
    InvalidNumber,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("{0}")]
    Message(String),
}
