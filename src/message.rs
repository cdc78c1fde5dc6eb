// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoded message trees.

use serde::Serialize;

use crate::types::{DataType, Scalar, Tag};

/// The payload of a [`Message`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// No value, for tags of data type [`DataType::None`].
    Absent,
    /// A single scalar value.
    Scalar(Scalar),
    /// Ordered child messages, for tags of data type [`DataType::Container`].
    Container(Vec<Message>),
}

/// One node of a decoded response tree.
///
/// Messages produced by the [`Decoder`](crate::decode::Decoder) always hold
/// the data type the registry assigns to their tag, and a value of the
/// matching shape: absent for `None`, children for `Container`, a scalar
/// otherwise. The decoder keeps whatever scalar kind follows a tag, so an
/// `Int32` may sit under a `Uint16` tag. Checking the scalar kind, and
/// anything about trees assembled by hand with [`Message::from_parts`], is
/// the job of the [`Validator`](crate::response::Validator).
///
/// Serializes as `{"Tag": ..., "DataType": ..., "Value": ...}`.
///
/// # Examples
///
/// ```
/// use rscp_tree::{create_response, elements, tags};
///
/// let msg = create_response(&elements![
///     tags::BAT_DATA,
///     tags::BAT_INDEX, 0u16,
///     tags::BAT_RSOC, 87.5f32,
/// ]).unwrap();
///
/// assert_eq!(msg.children().len(), 2);
/// let rsoc = msg.find(tags::BAT_RSOC).unwrap();
/// assert_eq!(rsoc.scalar().and_then(|s| s.as_f64()), Some(87.5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message {
    tag: Tag,
    data_type: DataType,
    value: Value,
}

impl Message {
    /// Assembles a message from its parts without any consistency check.
    #[must_use]
    pub fn from_parts(tag: Tag, data_type: DataType, value: Value) -> Self {
        Self {
            tag,
            data_type,
            value,
        }
    }

    /// Returns the tag.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    /// Returns the data type.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Returns the value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the message, returning its value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Returns the scalar value, if the message carries one.
    #[must_use]
    pub const fn scalar(&self) -> Option<&Scalar> {
        match &self.value {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the child messages; empty unless the message is a container.
    #[must_use]
    pub fn children(&self) -> &[Message] {
        match &self.value {
            Value::Container(children) => children,
            _ => &[],
        }
    }

    /// Returns the first direct child with the given tag.
    #[must_use]
    pub fn find(&self, tag: Tag) -> Option<&Message> {
        self.children().iter().find(|child| child.tag == tag)
    }

    /// Returns `true` if the value is absent.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self.value, Value::Absent)
    }
}
