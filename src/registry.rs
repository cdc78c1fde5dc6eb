// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tag metadata lookup.
//!
//! The decoder and validator never consult global state: they are given a
//! [`TagRegistry`] by reference. [`StandardTags`] serves the built-in RSCP
//! table, [`TagTable`] holds an arbitrary set of tags and is what tests use
//! to pin down a fixed vocabulary.

use std::collections::HashMap;

use crate::tags;
use crate::types::{DataType, Tag};

/// Metadata of a single tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    /// The data type the tag carries.
    pub data_type: DataType,
    /// Whether the tag may appear in a device response.
    pub is_response: bool,
}

/// Read-only mapping from tags to their metadata.
pub trait TagRegistry {
    /// Returns the metadata for `tag`, or `None` if the tag is unknown.
    fn lookup(&self, tag: Tag) -> Option<TagInfo>;

    /// Returns the data type of `tag`.
    fn data_type(&self, tag: Tag) -> Option<DataType> {
        self.lookup(tag).map(|info| info.data_type)
    }

    /// Returns `true` if `tag` is known and response-class.
    fn is_response(&self, tag: Tag) -> bool {
        self.lookup(tag).is_some_and(|info| info.is_response)
    }
}

impl<R: TagRegistry + ?Sized> TagRegistry for &R {
    fn lookup(&self, tag: Tag) -> Option<TagInfo> {
        (**self).lookup(tag)
    }
}

/// The built-in RSCP tag table.
///
/// Response classification follows the wire code's response bit
/// ([`Tag::RESPONSE_FLAG`]).
///
/// # Examples
///
/// ```
/// use rscp_tree::registry::{StandardTags, TagRegistry};
/// use rscp_tree::tags;
/// use rscp_tree::types::DataType;
///
/// let info = StandardTags.lookup(tags::EMS_POWER_PV).unwrap();
/// assert_eq!(info.data_type, DataType::Int32);
/// assert!(info.is_response);
///
/// assert!(!StandardTags.is_response(tags::EMS_REQ_POWER_PV));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardTags;

impl TagRegistry for StandardTags {
    fn lookup(&self, tag: Tag) -> Option<TagInfo> {
        tags::lookup(tag).map(|entry| TagInfo {
            data_type: entry.data_type,
            is_response: entry.tag.has_response_flag(),
        })
    }
}

/// A registry built from an explicit list of tags.
///
/// A table carries classification only. Tags print by their standard name
/// when they have one and as a hex code otherwise, whichever table decoded
/// them.
///
/// # Examples
///
/// ```
/// use rscp_tree::registry::{TagRegistry, TagTable};
/// use rscp_tree::types::{DataType, Tag};
///
/// let flag = Tag::new(0x10_80_00_01);
/// let table = TagTable::new().with_response(flag, DataType::Bool);
///
/// assert_eq!(table.data_type(flag), Some(DataType::Bool));
/// assert!(table.is_response(flag));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TagTable {
    entries: HashMap<Tag, TagInfo>,
}

impl TagTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding a copy of the standard RSCP tags.
    #[must_use]
    pub fn standard() -> Self {
        tags::TABLE.iter().fold(Self::new(), |table, entry| {
            table.with(entry.tag, entry.data_type, entry.tag.has_response_flag())
        })
    }

    /// Adds a tag with explicit classification.
    #[must_use]
    pub fn with(mut self, tag: Tag, data_type: DataType, is_response: bool) -> Self {
        self.insert(tag, TagInfo {
            data_type,
            is_response,
        });
        self
    }

    /// Adds a response-class tag.
    #[must_use]
    pub fn with_response(self, tag: Tag, data_type: DataType) -> Self {
        self.with(tag, data_type, true)
    }

    /// Adds a request-class tag.
    #[must_use]
    pub fn with_request(self, tag: Tag, data_type: DataType) -> Self {
        self.with(tag, data_type, false)
    }

    /// Adds or replaces a tag.
    pub fn insert(&mut self, tag: Tag, info: TagInfo) {
        self.entries.insert(tag, info);
    }

    /// Returns the number of tags in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TagRegistry for TagTable {
    fn lookup(&self, tag: Tag) -> Option<TagInfo> {
        self.entries.get(&tag).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_classifies_by_response_bit() {
        assert!(StandardTags.is_response(tags::BAT_DATA));
        assert!(!StandardTags.is_response(tags::BAT_REQ_DATA));
        assert!(!StandardTags.is_response(tags::BAT_INDEX));
    }

    #[test]
    fn standard_unknown_tag() {
        let unknown = Tag::new(0x7F80_0001);
        assert!(StandardTags.lookup(unknown).is_none());
        assert!(!StandardTags.is_response(unknown));
    }

    #[test]
    fn table_overrides_classification() {
        let table = TagTable::new().with_response(tags::BAT_INDEX, DataType::Uint16);
        assert!(table.is_response(tags::BAT_INDEX));
        assert_eq!(table.len(), 1);
        assert!(table.lookup(tags::BAT_DATA).is_none());
    }

    #[test]
    fn table_tags_print_by_standard_name_or_hex() {
        let custom = Tag::new(0x1080_0001);
        let table = TagTable::new()
            .with_response(custom, DataType::Bool)
            .with_request(tags::BAT_INDEX, DataType::Uint16);
        assert!(table.lookup(custom).is_some());
        assert_eq!(custom.to_string(), "0x10800001");
        assert_eq!(tags::BAT_INDEX.to_string(), "BAT_INDEX");
    }

    #[test]
    fn insert_replaces_classification() {
        let mut table = TagTable::new().with_request(tags::BAT_INDEX, DataType::Uint16);
        table.insert(tags::BAT_INDEX, TagInfo {
            data_type: DataType::Uint16,
            is_response: true,
        });
        assert_eq!(table.len(), 1);
        assert!(table.is_response(tags::BAT_INDEX));
    }

    #[test]
    fn standard_table_copy_matches_static_lookup() {
        let table = TagTable::standard();
        assert_eq!(table.len(), tags::TABLE.len());
        for entry in tags::TABLE {
            assert_eq!(table.lookup(entry.tag), StandardTags.lookup(entry.tag));
        }
    }

    #[test]
    fn registry_by_reference() {
        fn data_type_of(registry: impl TagRegistry, tag: Tag) -> Option<DataType> {
            registry.data_type(tag)
        }
        let table = TagTable::standard();
        assert_eq!(data_type_of(&table, tags::EMS_BAT_SOC), Some(DataType::UChar8));
    }
}
