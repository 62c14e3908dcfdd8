//! Error types for LUON reading and writing.
//!
//! This module provides error reporting with positional information to help
//! diagnose malformed LUON text.
//!
//! ## Error Categories
//!
//! - **Parse errors**: invalid LUON syntax, reported with 1-based line and
//!   column numbers and an [`ErrorKind`] naming the failure
//! - **Unsupported objects**: values the writer cannot encode (currently
//!   non-finite numbers used as table keys)
//! - **I/O errors**: failures of the underlying reader/writer streams
//!
//! ## Encoding errors
//!
//! [`ErrorKind::EncodingError`] is special: by default the reader substitutes
//! U+FFFD for the offending unit and keeps going, reporting the error only
//! through the handler installed in
//! [`ReadOptions`](crate::ReadOptions::with_encoding_handler).
//! [`ErrorKind::SevereEncodingError`] (broken byte sequences, colliding
//! surrogate halves) always aborts the parse.
//!
//! ## Examples
//!
//! ```rust
//! use luon::{Error, ErrorKind};
//!
//! let err = luon::from_str("{a=").unwrap_err();
//! assert_eq!(err.kind(), Some(ErrorKind::NoObject));
//! assert_eq!(err.to_string(), "not an object at 1:4");
//! ```

use thiserror::Error;

/// Names every way a LUON parse can fail.
///
/// The `Display` form is the human message used in error output, e.g.
/// `ErrorKind::UnfinishedString` renders as `unfinished string`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// A bareword was read where only `true`, `false` or `nil` are valid.
    #[error("atom expected")]
    AtomExpected,

    /// Input ended inside a `--[[ ... ]]` comment during comment removal.
    #[error("unclosed long comment")]
    UnclosedLongComment,

    /// A bracketed table key was not closed with `]`.
    #[error("unclosed table key")]
    UnclosedKey,

    /// The same key appeared twice in one table.
    #[error("key duplicate")]
    DuplicatedKey,

    /// Input ended inside a quoted string.
    #[error("unfinished string")]
    UnfinishedString,

    /// A string escape decoded to an isolated surrogate or an out-of-range
    /// code point. Recoverable; see the module docs.
    #[error("encoding error")]
    EncodingError,

    /// A byte escape sequence broke off mid-character, or surrogate halves
    /// collided. Always fatal.
    #[error("severe encoding error")]
    SevereEncodingError,

    /// Input ended inside a `[[ ... ]]` long-bracket string.
    #[error("unclosed long notation")]
    UnclosedLongNotation,

    /// A table entry was not followed by `,` or `}`.
    #[error("unfinished table")]
    UnfinishedTable,

    /// A `\` escape was malformed.
    #[error("invalid escape sequence")]
    InvalidEscapeSequence,

    /// A `[` was not followed by a valid long-bracket opener.
    #[error("long notation expected")]
    LongNotationExpected,

    /// A number token was malformed or overflowed to a non-finite value.
    #[error("number expected")]
    NumberExpected,

    /// An exponent marker was not followed by any digits.
    #[error("exponent expected")]
    ExponentExpected,

    /// No value starts at the current position.
    #[error("not an object")]
    NoObject,

    /// A table key was not followed by `=` and a value.
    #[error("missing value")]
    NoValue,

    /// A top-level value was followed by more than trailing whitespace.
    #[error("end of input expected")]
    EndOfInputExpected,
}

/// Represents all possible errors that can occur while reading or writing
/// LUON text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error with a 1-based position
    #[error("{kind} at {line}:{col}")]
    Parse {
        kind: ErrorKind,
        line: usize,
        col: usize,
    },

    /// The writer met a value it cannot encode
    #[error("unsupported object")]
    UnsupportedObject,
}

impl Error {
    /// Creates a parse error at a 1-based line and column.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luon::{Error, ErrorKind};
    ///
    /// let err = Error::parse(ErrorKind::UnfinishedString, 3, 7);
    /// assert_eq!(err.to_string(), "unfinished string at 3:7");
    /// ```
    pub fn parse(kind: ErrorKind, line: usize, col: usize) -> Self {
        Error::Parse { kind, line, col }
    }

    /// Creates an I/O error for stream reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the parse error kind, or `None` for non-parse errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Parse { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns the `(line, col)` position of a parse error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let err = luon::from_str("{a=1,,}").unwrap_err();
    /// assert_eq!(err.position(), Some((1, 6)));
    /// ```
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Parse { line, col, .. } => Some((*line, *col)),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
