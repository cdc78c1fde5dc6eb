// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shape checks on raw JSON request bytes.
//!
//! These look only at the first byte after leading whitespace, so a request
//! reader can decide how to parse a fragment before committing to a type.

use crate::types::DataType;

fn trim_start(data: &[u8]) -> &[u8] {
    let start = data
        .iter()
        .position(|b| !matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
        .unwrap_or(data.len());
    &data[start..]
}

/// Returns `true` if `data` holds nothing but whitespace.
#[must_use]
pub fn is_json_empty(data: &[u8]) -> bool {
    trim_start(data).is_empty()
}

/// Returns `true` if `data` starts with a JSON array.
#[must_use]
pub fn is_json_array(data: &[u8]) -> bool {
    trim_start(data).first() == Some(&b'[')
}

/// Returns `true` if `data` starts with a JSON string.
#[must_use]
pub fn is_json_string(data: &[u8]) -> bool {
    trim_start(data).first() == Some(&b'"')
}

/// Returns `true` if `data` starts with a digit.
///
/// Negative numbers are not recognized.
#[must_use]
pub fn is_json_number(data: &[u8]) -> bool {
    trim_start(data).first().is_some_and(u8::is_ascii_digit)
}

/// Parses `data` as a JSON string naming a [`DataType`].
///
/// # Examples
///
/// ```
/// use rscp_tree::sniff::json_data_type;
/// use rscp_tree::types::DataType;
///
/// assert_eq!(json_data_type(br#" "Uint32""#), Some(DataType::Uint32));
/// assert_eq!(json_data_type(br#""EMS_POWER_PV""#), None);
/// assert_eq!(json_data_type(b"7"), None);
/// ```
#[must_use]
pub fn json_data_type(data: &[u8]) -> Option<DataType> {
    if !is_json_string(data) {
        return None;
    }
    serde_json::from_slice(data).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert!(is_json_empty(b""));
        assert!(is_json_empty(b" \t\r\n"));
        assert!(!is_json_empty(b" []"));
    }

    #[test]
    fn array() {
        assert!(is_json_array(b"\n  [1, 2]"));
        assert!(!is_json_array(b"{}"));
        assert!(!is_json_array(b"   "));
    }

    #[test]
    fn string() {
        assert!(is_json_string(br#"  "EMS_REQ_POWER_PV""#));
        assert!(!is_json_string(b"EMS_REQ_POWER_PV"));
    }

    #[test]
    fn number() {
        assert!(is_json_number(b" 42"));
        assert!(is_json_number(b"0.5"));
        assert!(!is_json_number(b"-1"));
        assert!(!is_json_number(b"true"));
    }

    #[test]
    fn data_type() {
        assert_eq!(json_data_type(br#""Container""#), Some(DataType::Container));
        assert_eq!(json_data_type(br#""container""#), None);
        assert_eq!(json_data_type(br#"["Bool"]"#), None);
    }
}
