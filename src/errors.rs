// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `errors` module defines the common error type.

use std::error::Error as StdError;
use std::fmt;
use std::result;

/// `StreamError` enumerates every way a read or a byte-array transform can fail.
#[derive(Debug)]
pub enum StreamError {
    /// A read would consume more bytes than remain. Carries the number of bytes requested and
    /// the number of bytes actually available.
    EndOfStream { requested: u64, available: u64 },
    /// `ensure_fixed_contents` observed bytes that did not match what was expected.
    UnexpectedContent { expected: Vec<u8>, actual: Vec<u8> },
    /// The byte order required to decode a value could not be determined by the caller.
    EndiannessUndecided,
    /// A validator required an exact value and the value read did not match it.
    ValidationNotEqual { expected: i64, actual: i64 },
    /// A validator required a minimum value and the value read was below it.
    ValidationLessThan { min: i64, actual: i64 },
    /// A validator required a maximum value and the value read was above it.
    ValidationGreaterThan { max: i64, actual: i64 },
    /// A validator required membership in a set and the value read was not a member.
    ValidationNotAnyOf { actual: i64 },
    /// A validator's general predicate rejected the value read.
    ValidationExpression { actual: i64 },
    /// An operation is not supported, e.g. `process_rotate_left` with `group_size != 1`.
    Unsupported(&'static str),
    /// Wraps a lower-level failure, e.g. zlib inflation.
    Other(Box<dyn StdError + Send + Sync>),
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StreamError::EndOfStream { requested, available } => {
                write!(f, "end of stream: requested {} byte(s), {} available", requested, available)
            }
            StreamError::UnexpectedContent { expected, actual } => {
                write!(f, "unexpected content: expected {:?}, found {:?}", expected, actual)
            }
            StreamError::EndiannessUndecided => write!(f, "endianness could not be determined"),
            StreamError::ValidationNotEqual { expected, actual } => {
                write!(f, "validation failed: expected {}, found {}", expected, actual)
            }
            StreamError::ValidationLessThan { min, actual } => {
                write!(f, "validation failed: {} is less than minimum {}", actual, min)
            }
            StreamError::ValidationGreaterThan { max, actual } => {
                write!(f, "validation failed: {} is greater than maximum {}", actual, max)
            }
            StreamError::ValidationNotAnyOf { actual } => {
                write!(f, "validation failed: {} is not any of the allowed values", actual)
            }
            StreamError::ValidationExpression { actual } => {
                write!(f, "validation failed: {} does not satisfy the expression", actual)
            }
            StreamError::Unsupported(msg) => write!(f, "unsupported: {}", msg),
            StreamError::Other(err) => write!(f, "{}", err),
        }
    }
}

impl StdError for StreamError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            StreamError::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

/// A specialized `Result` type for stream operations.
pub type Result<T> = result::Result<T, StreamError>;

/// Convenience function to create an end-of-stream error.
pub fn end_of_stream_error<T>(requested: u64, available: u64) -> Result<T> {
    Err(StreamError::EndOfStream { requested, available })
}

/// Convenience function to create an unexpected-content error.
pub fn unexpected_content_error<T>(expected: Vec<u8>, actual: Vec<u8>) -> Result<T> {
    Err(StreamError::UnexpectedContent { expected, actual })
}

/// Convenience function to create an endianness-undecided error.
pub fn endianness_undecided_error<T>() -> Result<T> {
    Err(StreamError::EndiannessUndecided)
}

/// Convenience function to create a not-equal validation error.
pub fn validation_not_equal_error<T>(expected: i64, actual: i64) -> Result<T> {
    Err(StreamError::ValidationNotEqual { expected, actual })
}

/// Convenience function to create a less-than validation error.
pub fn validation_less_than_error<T>(min: i64, actual: i64) -> Result<T> {
    Err(StreamError::ValidationLessThan { min, actual })
}

/// Convenience function to create a greater-than validation error.
pub fn validation_greater_than_error<T>(max: i64, actual: i64) -> Result<T> {
    Err(StreamError::ValidationGreaterThan { max, actual })
}

/// Convenience function to create a not-any-of validation error.
pub fn validation_not_any_of_error<T>(actual: i64) -> Result<T> {
    Err(StreamError::ValidationNotAnyOf { actual })
}

/// Convenience function to create an expression validation error.
pub fn validation_expression_error<T>(actual: i64) -> Result<T> {
    Err(StreamError::ValidationExpression { actual })
}

/// Convenience function to create an unsupported-operation error.
pub fn unsupported_error<T>(msg: &'static str) -> Result<T> {
    Err(StreamError::Unsupported(msg))
}
