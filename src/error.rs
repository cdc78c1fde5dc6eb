// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `rscp_tree` library.
//!
//! Decoding failures are reported as [`DecodeError`], structural problems
//! found in an already built tree as [`ValidationError`]. Both carry the
//! position and tag needed to locate the problem. Callers that only care
//! about what went wrong match on [`ErrorKind`] via `kind()`.

use thiserror::Error;

use crate::types::{DataType, ElementKind, Tag};

/// The main error type for this library.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A flat sequence could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A message tree failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No sequences were given to build responses from.
    #[error("no arguments given")]
    NoArguments,
}

impl Error {
    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Decode(e) => e.kind(),
            Self::Validation(e) => e.kind(),
            Self::NoArguments => ErrorKind::NoArguments,
        }
    }
}

/// Errors raised while decoding a flat element sequence into a message.
///
/// `index` is always the zero-based position of the last element read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The sequence ended where an element was required.
    #[error("unexpected end of input after {consumed} elements")]
    EndOfInput {
        /// Number of elements read before the end was hit.
        consumed: usize,
    },

    /// The element at a tag position is not a tag.
    #[error("element at index {index}: expected a tag, got {found}")]
    InvalidTag {
        /// Position of the offending element.
        index: usize,
        /// What was found instead.
        found: ElementKind,
    },

    /// The tag is not known to the registry.
    #[error("element at index {index}: unknown tag {tag}")]
    UnknownTag {
        /// The unknown tag.
        tag: Tag,
        /// Position of the tag.
        index: usize,
    },

    /// A scalar tag is the last element of the sequence.
    #[error("element at index {index}: expected value after tag {tag} with data type {data_type}")]
    MissingValue {
        /// The tag lacking a value.
        tag: Tag,
        /// The data type the value should have had.
        data_type: DataType,
        /// Position of the tag.
        index: usize,
    },

    /// The value position holds a tag or data type marker.
    #[error(
        "element at index {index}: expected a value for tag {tag} with data type {data_type}, got {found}"
    )]
    DataTypeValueMismatch {
        /// The tag whose value is wrong.
        tag: Tag,
        /// The data type the value should have had.
        data_type: DataType,
        /// Position of the offending element.
        index: usize,
        /// What was found instead.
        found: ElementKind,
    },

    /// Containers are nested deeper than the decoder allows.
    #[error("element at index {index}: container {tag} exceeds maximum nesting depth {max_depth}")]
    NestingTooDeep {
        /// The container tag that would exceed the limit.
        tag: Tag,
        /// Position of the tag.
        index: usize,
        /// The configured limit.
        max_depth: usize,
    },
}

impl DecodeError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EndOfInput { .. } => ErrorKind::EndOfInput,
            Self::InvalidTag { .. } => ErrorKind::InvalidTag,
            Self::UnknownTag { .. } => ErrorKind::UnknownTag,
            Self::MissingValue { .. } => ErrorKind::MissingValue,
            Self::DataTypeValueMismatch { .. } => ErrorKind::DataTypeValueMismatch,
            Self::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
        }
    }

    /// Returns the position of the element that caused the error.
    ///
    /// For [`DecodeError::EndOfInput`] this is the number of elements read.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::EndOfInput { consumed: index }
            | Self::InvalidTag { index, .. }
            | Self::UnknownTag { index, .. }
            | Self::MissingValue { index, .. }
            | Self::DataTypeValueMismatch { index, .. }
            | Self::NestingTooDeep { index, .. } => *index,
        }
    }
}

/// Errors raised while validating a message tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A tag that may not appear in a response.
    #[error("{tag}: not a response tag")]
    NotAResponseTag {
        /// The offending tag.
        tag: Tag,
    },

    /// A tag that is not known to the registry.
    #[error("{tag}: unknown tag")]
    UnknownTag {
        /// The unknown tag.
        tag: Tag,
    },

    /// The message's data type differs from the tag's.
    #[error("{tag}: data type {actual} does not match tag data type {expected}")]
    TagDataTypeMismatch {
        /// The offending tag.
        tag: Tag,
        /// The data type from the registry.
        expected: DataType,
        /// The data type stored in the message.
        actual: DataType,
    },

    /// A tag of data type `None` carries a value.
    #[error("{tag}: data type None must not carry a value")]
    UnexpectedValue {
        /// The offending tag.
        tag: Tag,
    },

    /// A container tag does not carry a list of messages.
    #[error("{tag}: data type Container requires a list of messages")]
    ExpectedContainer {
        /// The offending tag.
        tag: Tag,
    },

    /// A scalar tag carries no value or one of the wrong kind.
    #[error("{tag}: expected a {expected} value, got {}", .found.map_or("no value", |dt| dt.as_str()))]
    ValueMismatch {
        /// The offending tag.
        tag: Tag,
        /// The data type of the tag.
        expected: DataType,
        /// The data type of the value found, if it was a scalar.
        found: Option<DataType>,
    },

    /// A validation error in one entry of a list of messages.
    #[error("message at index {index}: {source}")]
    Entry {
        /// Position of the failing message in the list.
        index: usize,
        /// The underlying error.
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Returns the kind of this error, looking through [`ValidationError::Entry`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotAResponseTag { .. } => ErrorKind::NotAResponseTag,
            Self::UnknownTag { .. } => ErrorKind::UnknownTag,
            Self::TagDataTypeMismatch { .. } => ErrorKind::TagDataTypeMismatch,
            Self::UnexpectedValue { .. }
            | Self::ExpectedContainer { .. }
            | Self::ValueMismatch { .. } => ErrorKind::DataTypeValueMismatch,
            Self::Entry { source, .. } => source.kind(),
        }
    }

    /// Returns the list index for errors reported by list validation.
    #[must_use]
    pub const fn entry_index(&self) -> Option<usize> {
        match self {
            Self::Entry { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Flat classification of every error this library reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input sequence ended unexpectedly.
    EndOfInput,
    /// A tag was expected but something else was found.
    InvalidTag,
    /// A tag is unknown to the registry.
    UnknownTag,
    /// A scalar tag has no following value.
    MissingValue,
    /// A value does not fit the tag's data type.
    DataTypeValueMismatch,
    /// A message's data type differs from its tag's.
    TagDataTypeMismatch,
    /// Containers are nested too deeply.
    NestingTooDeep,
    /// A non-response tag was found where a response was required.
    NotAResponseTag,
    /// No sequences were given.
    NoArguments,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags;

    #[test]
    fn invalid_tag_display() {
        let err = DecodeError::InvalidTag {
            index: 0,
            found: ElementKind::Scalar(DataType::Bool),
        };
        assert_eq!(
            err.to_string(),
            "element at index 0: expected a tag, got Bool value"
        );
    }

    #[test]
    fn missing_value_display() {
        let err = DecodeError::MissingValue {
            tag: tags::EMS_POWER_PV,
            data_type: DataType::Int32,
            index: 3,
        };
        assert_eq!(
            err.to_string(),
            "element at index 3: expected value after tag EMS_POWER_PV with data type Int32"
        );
    }

    #[test]
    fn decode_error_index() {
        let err = DecodeError::DataTypeValueMismatch {
            tag: tags::BAT_INDEX,
            data_type: DataType::Uint16,
            index: 2,
            found: ElementKind::Tag,
        };
        assert_eq!(err.index(), 2);
        assert_eq!(DecodeError::EndOfInput { consumed: 0 }.index(), 0);
    }

    #[test]
    fn error_from_decode_error() {
        let err: Error = DecodeError::EndOfInput { consumed: 0 }.into();
        assert!(matches!(err, Error::Decode(DecodeError::EndOfInput { .. })));
        assert_eq!(err.kind(), ErrorKind::EndOfInput);
    }

    #[test]
    fn entry_kind_looks_through_wrapper() {
        let err = ValidationError::Entry {
            index: 2,
            source: Box::new(ValidationError::NotAResponseTag {
                tag: tags::EMS_REQ_POWER_PV,
            }),
        };
        assert_eq!(err.kind(), ErrorKind::NotAResponseTag);
        assert_eq!(err.entry_index(), Some(2));
        assert_eq!(
            err.to_string(),
            "message at index 2: EMS_REQ_POWER_PV: not a response tag"
        );
    }

    #[test]
    fn value_mismatch_display() {
        let err = ValidationError::ValueMismatch {
            tag: tags::BAT_RSOC,
            expected: DataType::Float32,
            found: None,
        };
        assert_eq!(err.to_string(), "BAT_RSOC: expected a Float32 value, got no value");
    }

    #[test]
    fn no_arguments_kind() {
        assert_eq!(Error::NoArguments.kind(), ErrorKind::NoArguments);
    }
}
