// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scalar values and the heterogeneous elements of a flat message sequence.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::{DataType, Tag};

/// Error code carried by tags of data type [`DataType::Error`].
///
/// # Examples
///
/// ```
/// use rscp_tree::types::ErrorCode;
///
/// assert_eq!(ErrorCode::from(0x02), ErrorCode::AccessDenied);
/// assert_eq!(ErrorCode::AccessDenied.code(), 0x02);
/// assert_eq!(ErrorCode::from(0x99), ErrorCode::Other(0x99));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The request was not handled.
    NotHandled,
    /// The user lacks the rights for this request.
    AccessDenied,
    /// The request was malformed.
    Format,
    /// The device is busy, try again later.
    Again,
    /// A value was out of bounds.
    OutOfBounds,
    /// The requested data is not available.
    NotAvailable,
    /// The tag is unknown to the device.
    UnknownTag,
    /// The resource is already in use.
    AlreadyInUse,
    /// Any code not listed above.
    Other(u32),
}

impl ErrorCode {
    /// Returns the numeric code.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::NotHandled => 0x01,
            Self::AccessDenied => 0x02,
            Self::Format => 0x03,
            Self::Again => 0x04,
            Self::OutOfBounds => 0x05,
            Self::NotAvailable => 0x06,
            Self::UnknownTag => 0x07,
            Self::AlreadyInUse => 0x08,
            Self::Other(code) => *code,
        }
    }

    /// Returns the protocol name of a known code.
    #[must_use]
    pub const fn name(&self) -> Option<&'static str> {
        match self {
            Self::NotHandled => Some("ERR_NOT_HANDLED"),
            Self::AccessDenied => Some("ERR_ACCESS_DENIED"),
            Self::Format => Some("ERR_FORMAT"),
            Self::Again => Some("ERR_AGAIN"),
            Self::OutOfBounds => Some("ERR_OUT_OF_BOUNDS"),
            Self::NotAvailable => Some("ERR_NOT_AVAILABLE"),
            Self::UnknownTag => Some("ERR_UNKNOWN_TAG"),
            Self::AlreadyInUse => Some("ERR_ALREADY_IN_USE"),
            Self::Other(_) => None,
        }
    }
}

impl From<u32> for ErrorCode {
    fn from(code: u32) -> Self {
        match code {
            0x01 => Self::NotHandled,
            0x02 => Self::AccessDenied,
            0x03 => Self::Format,
            0x04 => Self::Again,
            0x05 => Self::OutOfBounds,
            0x06 => Self::NotAvailable,
            0x07 => Self::UnknownTag,
            0x08 => Self::AlreadyInUse,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:02X}", self.code()),
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_u32(self.code()),
        }
    }
}

/// A single scalar value.
///
/// There is one variant per scalar [`DataType`]; [`Scalar::data_type`]
/// reports which.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// [`DataType::Bool`]
    Bool(bool),
    /// [`DataType::Char8`]
    Char8(i8),
    /// [`DataType::UChar8`]
    UChar8(u8),
    /// [`DataType::Int16`]
    Int16(i16),
    /// [`DataType::Uint16`]
    Uint16(u16),
    /// [`DataType::Int32`]
    Int32(i32),
    /// [`DataType::Uint32`]
    Uint32(u32),
    /// [`DataType::Int64`]
    Int64(i64),
    /// [`DataType::Uint64`]
    Uint64(u64),
    /// [`DataType::Float32`]
    Float32(f32),
    /// [`DataType::Double64`]
    Double64(f64),
    /// [`DataType::Bitfield`]
    Bitfield(u8),
    /// [`DataType::CString`]
    CString(String),
    /// [`DataType::Timestamp`]
    Timestamp(DateTime<Utc>),
    /// [`DataType::ByteArray`]
    ByteArray(Vec<u8>),
    /// [`DataType::Error`]
    Error(ErrorCode),
}

impl Scalar {
    /// Returns the data type this value belongs to.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Bool(_) => DataType::Bool,
            Self::Char8(_) => DataType::Char8,
            Self::UChar8(_) => DataType::UChar8,
            Self::Int16(_) => DataType::Int16,
            Self::Uint16(_) => DataType::Uint16,
            Self::Int32(_) => DataType::Int32,
            Self::Uint32(_) => DataType::Uint32,
            Self::Int64(_) => DataType::Int64,
            Self::Uint64(_) => DataType::Uint64,
            Self::Float32(_) => DataType::Float32,
            Self::Double64(_) => DataType::Double64,
            Self::Bitfield(_) => DataType::Bitfield,
            Self::CString(_) => DataType::CString,
            Self::Timestamp(_) => DataType::Timestamp,
            Self::ByteArray(_) => DataType::ByteArray,
            Self::Error(_) => DataType::Error,
        }
    }

    /// Returns the value if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as `i64` if this is any integer type that fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Char8(v) => Some(i64::from(*v)),
            Self::UChar8(v) | Self::Bitfield(v) => Some(i64::from(*v)),
            Self::Int16(v) => Some(i64::from(*v)),
            Self::Uint16(v) => Some(i64::from(*v)),
            Self::Int32(v) => Some(i64::from(*v)),
            Self::Uint32(v) => Some(i64::from(*v)),
            Self::Int64(v) => Some(*v),
            Self::Uint64(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Returns the value as `f64` if this is a floating point type.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float32(v) => Some(f64::from(*v)),
            Self::Double64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string if this is a [`DataType::CString`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::CString(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Char8(v) => write!(f, "{v}"),
            Self::UChar8(v) => write!(f, "{v}"),
            Self::Int16(v) => write!(f, "{v}"),
            Self::Uint16(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Uint32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Uint64(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Double64(v) => write!(f, "{v}"),
            Self::Bitfield(v) => write!(f, "{v:#010b}"),
            Self::CString(v) => write!(f, "{v:?}"),
            Self::Timestamp(v) => write!(f, "{}", v.to_rfc3339()),
            Self::ByteArray(v) => write!(f, "{v:02X?}"),
            Self::Error(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<$ty> for Element {
                fn from(value: $ty) -> Self {
                    Self::Scalar(Scalar::$variant(value))
                }
            }
        )*
    };
}

scalar_from! {
    bool => Bool,
    i8 => Char8,
    u8 => UChar8,
    i16 => Int16,
    u16 => Uint16,
    i32 => Int32,
    u32 => Uint32,
    i64 => Int64,
    u64 => Uint64,
    f32 => Float32,
    f64 => Double64,
    String => CString,
    DateTime<Utc> => Timestamp,
    Vec<u8> => ByteArray,
    ErrorCode => Error,
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::CString(value.to_string())
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::from(value))
    }
}

impl From<&[u8]> for Element {
    fn from(value: &[u8]) -> Self {
        Self::Scalar(Scalar::ByteArray(value.to_vec()))
    }
}

/// One item of a flat message sequence.
///
/// A decoded wire payload (or a test fixture) is a sequence of tags
/// interleaved with their values. Data type markers may also appear in
/// such sequences; they are never a valid value.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A tag starting a new message.
    Tag(Tag),
    /// A data type marker.
    DataType(DataType),
    /// A scalar value.
    Scalar(Scalar),
}

impl Element {
    /// Returns the kind of this element, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Tag(_) => ElementKind::Tag,
            Self::DataType(_) => ElementKind::DataType,
            Self::Scalar(s) => ElementKind::Scalar(s.data_type()),
        }
    }
}

impl From<Tag> for Element {
    fn from(tag: Tag) -> Self {
        Self::Tag(tag)
    }
}

impl From<DataType> for Element {
    fn from(data_type: DataType) -> Self {
        Self::DataType(data_type)
    }
}

impl From<Scalar> for Element {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

/// The kind of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A tag.
    Tag,
    /// A data type marker.
    DataType,
    /// A scalar of the given data type.
    Scalar(DataType),
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag => f.write_str("tag"),
            Self::DataType => f.write_str("data type"),
            Self::Scalar(dt) => write!(f, "{dt} value"),
        }
    }
}

/// Builds a `Vec<Element>` from tags, data types and plain Rust values.
///
/// # Examples
///
/// ```
/// use rscp_tree::elements;
/// use rscp_tree::tags::{BAT_DATA, BAT_INDEX, BAT_RSOC};
///
/// let seq = elements![BAT_DATA, BAT_INDEX, 0u16, BAT_RSOC, 87.5f32];
/// assert_eq!(seq.len(), 5);
/// ```
#[macro_export]
macro_rules! elements {
    () => {
        ::std::vec::Vec::<$crate::types::Element>::new()
    };
    ($($element:expr),+ $(,)?) => {
        ::std::vec![$($crate::types::Element::from($element)),+]
    };
}
