//! Error types for cell conversion.
//!
//! This module contains the [`Error`] type which represents all possible errors
//! that can occur when parsing cell text or reading binary values.
//!
//! # Example
//!
//! ```
//! use cellconv::{Error, Result, ValueConverter, Vector3Converter};
//!
//! fn try_parse(text: &str) -> Result<()> {
//!     match Vector3Converter::default().parse(text) {
//!         Ok(v) => {
//!             println!("Parsed {v}");
//!             Ok(())
//!         }
//!         Err(e @ Error::SegmentCount { .. }) => {
//!             println!("Wrong segment count: {e}");
//!             Err(e)
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//! # assert!(try_parse("1,2,3").is_ok());
//! ```

use std::fmt::{self, Display};

use crate::ValueKind;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when converting
/// a value.
///
/// Variants fall into two groups: format errors, raised when text (or a
/// binary payload) does not match the grammar of the target type, and
/// truncation errors, raised when a binary source runs out of bytes. Use
/// [`Error::is_format`] and [`Error::is_truncated`] to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The text is empty or malformed for the target type.
    InvalidLiteral {
        type_name: &'static str,
        input: String,
    },

    /// A multi-segment value was split into the wrong number of segments.
    SegmentCount {
        type_name: &'static str,
        input: String,
        expected: usize,
        actual: usize,
    },

    /// A string payload is not valid UTF-8.
    InvalidUtf8,

    /// A string length prefix is overlong or does not fit in `usize`.
    InvalidLength,

    /// The input ended unexpectedly.
    ///
    /// This error occurs when the binary source holds fewer bytes than the
    /// encoding of the requested value needs.
    EndOfFile,

    /// Extra bytes remain after reading a single value with
    /// [`from_slice`](crate::from_slice).
    TrailingData(usize),

    /// A dynamic [`Value`](crate::Value) was handed to a converter of
    /// another kind.
    KindMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },
}

impl Error {
    pub(crate) fn invalid_literal(type_name: &'static str, input: &str) -> Self {
        Error::InvalidLiteral {
            type_name,
            input: input.to_owned(),
        }
    }

    /// Returns `true` if the text or payload did not match the grammar of the
    /// target type.
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            Error::InvalidLiteral { .. }
                | Error::SegmentCount { .. }
                | Error::InvalidUtf8
                | Error::InvalidLength
        )
    }

    /// Returns `true` if the binary source was exhausted.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Error::EndOfFile)
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidLiteral { type_name, input } => {
                write!(formatter, "cannot convert \"{input}\" to {type_name}")
            }
            Error::SegmentCount {
                type_name,
                input,
                expected,
                ..
            } => {
                write!(
                    formatter,
                    "cannot convert \"{input}\" to {type_name}, segments count must be {expected}"
                )?;
                if type_name.starts_with("Color") {
                    formatter.write_str(" (r, g, b, a)")?;
                }
                Ok(())
            }
            Error::InvalidUtf8 => formatter.write_str("string payload is not valid UTF-8"),
            Error::InvalidLength => formatter.write_str("invalid string length prefix"),
            Error::EndOfFile => formatter.write_str("unexpected end of input"),
            Error::TrailingData(remaining_bytes) => write!(
                formatter,
                "trailing data after end of input: {remaining_bytes} bytes remaining"
            ),
            Error::KindMismatch { expected, actual } => write!(
                formatter,
                "value kind mismatch: expected {}, got {}",
                expected.type_name(),
                actual.type_name()
            ),
        }
    }
}

impl std::error::Error for Error {}
