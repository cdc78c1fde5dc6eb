// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Flat-sequence to message-tree decoding.

use crate::decode::Cursor;
use crate::error::DecodeError;
use crate::message::{Message, Value};
use crate::registry::TagRegistry;
use crate::types::{DataType, Element, Scalar, Tag};

/// Configuration for a [`Decoder`].
///
/// Nesting is unlimited by default. Containers are decoded with an explicit
/// stack, so deep trees cost heap memory rather than call stack.
///
/// # Examples
///
/// ```
/// use rscp_tree::decode::DecoderConfig;
///
/// let config = DecoderConfig::new().with_max_depth(4);
/// assert_eq!(config.max_depth(), Some(4));
/// assert_eq!(DecoderConfig::default().max_depth(), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    max_depth: Option<usize>,
}

impl DecoderConfig {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_depth: None }
    }

    /// Limits how many containers may be nested inside each other.
    ///
    /// `1` allows a container only at the outermost level, `0` rejects
    /// container tags altogether.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Returns the nesting limit, or `None` if nesting is unlimited.
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

/// A container whose children are still being decoded.
struct OpenContainer {
    tag: Tag,
    index: usize,
    children: Vec<Message>,
}

impl OpenContainer {
    fn close(self) -> Message {
        Message::from_parts(self.tag, DataType::Container, Value::Container(self.children))
    }
}

/// What reading one tag produced.
enum Step {
    /// A complete message without children.
    Leaf(Message),
    /// A container that takes the following elements.
    Open(OpenContainer),
}

/// Decodes one [`Message`] per call from a [`Cursor`].
///
/// The data type of every tag is resolved through the registry:
///
/// - `None` tags produce a message without value.
/// - Scalar tags take the next element as their value.
/// - Container tags decode children until the cursor is exhausted.
///
/// A container therefore swallows every element that follows it in the
/// current sequence, including what the caller may have meant as siblings.
/// Decode separate top-level messages from separate sequences.
///
/// The value is not checked against the tag's data type beyond rejecting
/// tags and data type markers; the [`Validator`](crate::response::Validator)
/// does that.
///
/// # Examples
///
/// ```
/// use rscp_tree::decode::{Cursor, Decoder};
/// use rscp_tree::registry::StandardTags;
/// use rscp_tree::{elements, tags};
///
/// let seq = elements![
///     tags::BAT_DATA,
///     tags::BAT_INDEX, 0u16,
///     tags::BAT_DEVICE_STATE,
///     tags::BAT_DEVICE_CONNECTED, true,
///     tags::BAT_DEVICE_WORKING, true,
/// ];
///
/// let decoder = Decoder::new(StandardTags);
/// let msg = decoder.decode(&mut Cursor::new(&seq)).unwrap();
///
/// // BAT_DEVICE_STATE is a container too, so it takes both flags
/// assert_eq!(msg.children().len(), 2);
/// assert_eq!(msg.children()[1].children().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Decoder<R> {
    registry: R,
    config: DecoderConfig,
}

impl<R: TagRegistry> Decoder<R> {
    /// Creates a decoder with the default configuration.
    #[must_use]
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            config: DecoderConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: DecoderConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Returns the registry.
    #[must_use]
    pub const fn registry(&self) -> &R {
        &self.registry
    }

    /// Decodes one message, including every container nested in it.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::EndOfInput`] if the cursor is already exhausted
    /// - [`DecodeError::InvalidTag`] if the next element is not a tag
    /// - [`DecodeError::UnknownTag`] if the registry does not know the tag
    /// - [`DecodeError::MissingValue`] if a scalar tag is the last element
    /// - [`DecodeError::DataTypeValueMismatch`] if a scalar tag is followed
    ///   by a tag or data type marker
    /// - [`DecodeError::NestingTooDeep`] if a nesting limit is configured
    ///   and containers nest beyond it
    ///
    /// Errors from nested messages are returned as is; no partial tree is
    /// produced.
    pub fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Message, DecodeError> {
        let mut open: Vec<OpenContainer> = Vec::new();
        loop {
            let mut done = match self.step(cursor, open.len())? {
                Step::Leaf(message) => Some(message),
                Step::Open(container) => {
                    open.push(container);
                    None
                }
            };

            // An exhausted cursor closes every open container, innermost first.
            while done.is_some() || cursor.is_exhausted() {
                let message = match done.take() {
                    Some(message) => message,
                    None => {
                        let Some(container) = open.pop() else { break };
                        tracing::trace!(
                            index = container.index,
                            tag = %container.tag,
                            children = container.children.len(),
                            depth = open.len(),
                            "Closed container"
                        );
                        container.close()
                    }
                };
                match open.last_mut() {
                    Some(parent) => parent.children.push(message),
                    None => return Ok(message),
                }
            }
        }
    }

    fn step(&self, cursor: &mut Cursor<'_>, depth: usize) -> Result<Step, DecodeError> {
        let index = cursor.position();
        let tag = match cursor.read()? {
            Element::Tag(tag) => *tag,
            other => {
                tracing::debug!(index, found = %other.kind(), "Expected a tag");
                return Err(DecodeError::InvalidTag {
                    index,
                    found: other.kind(),
                });
            }
        };

        let data_type = self.registry.data_type(tag).ok_or_else(|| {
            tracing::debug!(index, tag = %tag, "Tag missing from registry");
            DecodeError::UnknownTag { tag, index }
        })?;

        let value = match data_type {
            DataType::None => Value::Absent,
            DataType::Container => {
                if let Some(max_depth) = self.config.max_depth
                    && depth >= max_depth
                {
                    tracing::debug!(index, tag = %tag, max_depth, "Nesting limit reached");
                    return Err(DecodeError::NestingTooDeep {
                        tag,
                        index,
                        max_depth,
                    });
                }
                return Ok(Step::Open(OpenContainer {
                    tag,
                    index,
                    children: Vec::new(),
                }));
            }
            _ => Value::Scalar(read_value(cursor, tag, data_type, index)?),
        };

        tracing::trace!(index, tag = %tag, data_type = %data_type, depth, "Decoded message");
        Ok(Step::Leaf(Message::from_parts(tag, data_type, value)))
    }
}

/// Reads the scalar following the tag at `tag_index`.
fn read_value(
    cursor: &mut Cursor<'_>,
    tag: Tag,
    data_type: DataType,
    tag_index: usize,
) -> Result<Scalar, DecodeError> {
    let index = cursor.position();
    match cursor.read() {
        Ok(Element::Scalar(scalar)) => Ok(scalar.clone()),
        Ok(other) => {
            tracing::debug!(index, tag = %tag, found = %other.kind(), "Metadata in value position");
            Err(DecodeError::DataTypeValueMismatch {
                tag,
                data_type,
                index,
                found: other.kind(),
            })
        }
        Err(_) => Err(DecodeError::MissingValue {
            tag,
            data_type,
            index: tag_index,
        }),
    }
}
