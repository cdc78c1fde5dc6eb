// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RSCP tag identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::tags;

/// Identifier of a protocol field.
///
/// A tag is a 32-bit code. The high byte names the namespace (EMS, BAT,
/// INFO, ...) and bit 23 marks tags sent by the device in a response.
/// The data type a tag carries is resolved through a
/// [`TagRegistry`](crate::registry::TagRegistry).
///
/// # Examples
///
/// ```
/// use rscp_tree::tags;
/// use rscp_tree::types::Tag;
///
/// assert_eq!(tags::EMS_POWER_PV.to_string(), "EMS_POWER_PV");
/// assert!(tags::EMS_POWER_PV.has_response_flag());
/// assert!(!tags::EMS_REQ_POWER_PV.has_response_flag());
///
/// // Codes outside the standard table render as hex
/// assert_eq!(Tag::new(0x7F00_0001).to_string(), "0x7F000001");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(u32);

impl Tag {
    /// Bit set on every tag the device sends back in a response.
    pub const RESPONSE_FLAG: u32 = 0x0080_0000;

    /// Creates a tag from its wire code.
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Returns the wire code.
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.0
    }

    /// Returns the namespace byte (e.g. `0x01` for EMS, `0x03` for BAT).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn namespace(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Returns `true` if the response bit is set in the wire code.
    #[must_use]
    pub const fn has_response_flag(&self) -> bool {
        self.0 & Self::RESPONSE_FLAG != 0
    }

    /// Returns the name of this tag in the standard tag table.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        tags::lookup(*self).map(|entry| entry.name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:08X}", self.0),
        }
    }
}

impl From<u32> for Tag {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

/// Error returned when parsing a tag name fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagParseError {
    input: String,
}

impl TagParseError {
    /// Returns the input string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for TagParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown tag: '{}' (expected a standard tag name or a 0x-prefixed code)",
            self.input
        )
    }
}

impl std::error::Error for TagParseError {}

impl FromStr for Tag {
    type Err = TagParseError;

    /// Parses a standard tag name (`"EMS_POWER_PV"`) or a hex code (`"0x01800001"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(entry) = tags::lookup_name(trimmed) {
            return Ok(entry.tag);
        }
        trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
            .map(Self)
            .ok_or_else(|| TagParseError {
                input: s.to_string(),
            })
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
