// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RSCP data types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of value a tag carries.
///
/// Every tag has exactly one data type. `None` tags carry no value,
/// `Container` tags carry an ordered list of child messages, and all other
/// data types carry exactly one scalar.
///
/// # Examples
///
/// ```
/// use rscp_tree::types::DataType;
///
/// assert!(DataType::Int32.is_scalar());
/// assert!(!DataType::Container.is_scalar());
/// assert_eq!(DataType::from_code(0x0E), Some(DataType::Container));
/// assert_eq!(DataType::Timestamp.to_string(), "Timestamp");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// No value.
    None,
    /// Boolean.
    Bool,
    /// Signed 8-bit integer.
    Char8,
    /// Unsigned 8-bit integer.
    UChar8,
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    Uint64,
    /// 32-bit float.
    Float32,
    /// 64-bit float.
    Double64,
    /// 8-bit field of flags.
    Bitfield,
    /// UTF-8 string.
    CString,
    /// Ordered list of child messages.
    Container,
    /// Point in time (UTC).
    Timestamp,
    /// Raw bytes.
    ByteArray,
    /// RSCP error code.
    Error,
}

impl DataType {
    /// All data types, in wire-code order.
    pub const ALL: [Self; 18] = [
        Self::None,
        Self::Bool,
        Self::Char8,
        Self::UChar8,
        Self::Int16,
        Self::Uint16,
        Self::Int32,
        Self::Uint32,
        Self::Int64,
        Self::Uint64,
        Self::Float32,
        Self::Double64,
        Self::Bitfield,
        Self::CString,
        Self::Container,
        Self::Timestamp,
        Self::ByteArray,
        Self::Error,
    ];

    /// Returns the wire code of this data type.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::None => 0x00,
            Self::Bool => 0x01,
            Self::Char8 => 0x02,
            Self::UChar8 => 0x03,
            Self::Int16 => 0x04,
            Self::Uint16 => 0x05,
            Self::Int32 => 0x06,
            Self::Uint32 => 0x07,
            Self::Int64 => 0x08,
            Self::Uint64 => 0x09,
            Self::Float32 => 0x0A,
            Self::Double64 => 0x0B,
            Self::Bitfield => 0x0C,
            Self::CString => 0x0D,
            Self::Container => 0x0E,
            Self::Timestamp => 0x0F,
            Self::ByteArray => 0x10,
            Self::Error => 0xFF,
        }
    }

    /// Looks up a data type by its wire code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|dt| dt.code() == code)
    }

    /// Returns the name used in JSON requests and responses.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Bool => "Bool",
            Self::Char8 => "Char8",
            Self::UChar8 => "UChar8",
            Self::Int16 => "Int16",
            Self::Uint16 => "Uint16",
            Self::Int32 => "Int32",
            Self::Uint32 => "Uint32",
            Self::Int64 => "Int64",
            Self::Uint64 => "Uint64",
            Self::Float32 => "Float32",
            Self::Double64 => "Double64",
            Self::Bitfield => "Bitfield",
            Self::CString => "CString",
            Self::Container => "Container",
            Self::Timestamp => "Timestamp",
            Self::ByteArray => "ByteArray",
            Self::Error => "Error",
        }
    }

    /// Returns `true` if a tag of this type carries exactly one scalar value.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::None | Self::Container)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
