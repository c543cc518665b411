//! Error types for INI decoding, encoding and value conversion.
//!
//! Three layers of failure are kept apart:
//!
//! - [`SyntaxError`]: malformed input found while decoding a document. It
//!   carries the 1-based line number and the reason. Decoding stops at the
//!   first one and no partial document is returned.
//! - [`DecodeError`]: a typed view of a [`Value`](crate::Value) could not be
//!   produced (bad number, out of range, not a boolean). Raised lazily by
//!   [`Value::to`](crate::Value::to), never by decode or encode.
//! - [`Error`]: the crate-level error returned by the reader, writer and file
//!   helpers. It wraps the two above plus I/O and UTF-8 failures.
//!
//! ## Examples
//!
//! ```rust
//! use inifile::{decode, SyntaxErrorKind};
//!
//! let err = decode("key = value\n").unwrap_err();
//! assert_eq!(err.line, 1);
//! assert_eq!(err.kind, SyntaxErrorKind::MissingSection);
//! assert_eq!(err.to_string(), "syntax error at line 1: expected a section header");
//! ```

use std::path::PathBuf;
use std::{fmt, io};
use thiserror::Error;

/// Why a line was rejected by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A `key = value` line appeared before any `[section]` header.
    MissingSection,
    /// The line is neither blank, a section header nor a key-value pair.
    UnrecognizedSyntax,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::MissingSection => f.write_str("expected a section header"),
            SyntaxErrorKind::UnrecognizedSyntax => f.write_str("unrecognized syntax"),
        }
    }
}

/// A malformed line found while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at line {line}: {kind}")]
pub struct SyntaxError {
    /// 1-based physical line number.
    pub line: usize,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    /// Creates a syntax error for the given line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inifile::{SyntaxError, SyntaxErrorKind};
    ///
    /// let err = SyntaxError::new(7, SyntaxErrorKind::UnrecognizedSyntax);
    /// assert!(err.to_string().contains("line 7"));
    /// ```
    #[must_use]
    pub const fn new(line: usize, kind: SyntaxErrorKind) -> Self {
        SyntaxError { line, kind }
    }

    pub(crate) const fn missing_section(line: usize) -> Self {
        Self::new(line, SyntaxErrorKind::MissingSection)
    }

    pub(crate) const fn unrecognized(line: usize) -> Self {
        Self::new(line, SyntaxErrorKind::UnrecognizedSyntax)
    }
}

/// A typed conversion of a raw value failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The value does not start with anything that reads as the target type.
    #[error("failed to decode {target} from {input:?}: invalid argument")]
    InvalidArgument { input: String, target: &'static str },

    /// The value reads as a number but does not fit the target type.
    #[error("failed to decode {target} from {input:?}: result out of range")]
    OutOfRange { input: String, target: &'static str },

    /// The value is not one of `true`, `True`, `false`, `False`.
    #[error("failed to decode bool from {input:?}")]
    InvalidBool { input: String },
}

impl DecodeError {
    pub(crate) fn invalid_argument(input: &str, target: &'static str) -> Self {
        DecodeError::InvalidArgument {
            input: input.to_string(),
            target,
        }
    }

    pub(crate) fn out_of_range(input: &str, target: &'static str) -> Self {
        DecodeError::OutOfRange {
            input: input.to_string(),
            target,
        }
    }

    pub(crate) fn invalid_bool(input: &str) -> Self {
        DecodeError::InvalidBool {
            input: input.to_string(),
        }
    }

    /// Returns `true` for [`DecodeError::OutOfRange`].
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, DecodeError::OutOfRange { .. })
    }
}

/// Represents all errors surfaced by the crate-level helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// Decoding rejected a line.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A typed value conversion failed.
    ///
    /// The crate's own functions never return this variant. It lets callers
    /// combine [`Value::to`](crate::Value::to) with the I/O helpers under one
    /// error type using `?`.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Reading from or writing to a stream failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A file could not be opened, read or written.
    #[error("failed to access file at {}: {source}", .path.display())]
    File { path: PathBuf, source: io::Error },

    /// The input bytes are not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl Error {
    pub(crate) fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::File {
            path: path.into(),
            source,
        }
    }

    /// Returns the line number when this is a syntax error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let err = inifile::from_str("[a]\n!!\n").unwrap_err();
    /// assert_eq!(err.line(), Some(2));
    /// ```
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Syntax(err) => Some(err.line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
