// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building response trees from flat sequences.

use crate::decode::{Cursor, Decoder, DecoderConfig};
use crate::error::{Error, Result};
use crate::message::Message;
use crate::registry::{StandardTags, TagRegistry};
use crate::types::Element;

/// Builds response messages from flat element sequences.
///
/// Each sequence is decoded on its own cursor, so a container only ever
/// absorbs the elements of its own sequence.
///
/// # Examples
///
/// ```
/// use rscp_tree::response::ResponseBuilder;
/// use rscp_tree::registry::StandardTags;
/// use rscp_tree::{elements, tags};
///
/// let builder = ResponseBuilder::new(StandardTags);
/// let responses = builder.create_many(&[
///     elements![tags::EMS_POWER_PV, 4200i32],
///     elements![tags::BAT_DATA, tags::BAT_INDEX, 0u16, tags::BAT_RSOC, 61.0f32],
/// ]).unwrap();
///
/// assert_eq!(responses.len(), 2);
/// assert_eq!(responses[1].children().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ResponseBuilder<R> {
    decoder: Decoder<R>,
}

impl<R: TagRegistry> ResponseBuilder<R> {
    /// Creates a builder resolving tags through `registry`.
    #[must_use]
    pub fn new(registry: R) -> Self {
        Self {
            decoder: Decoder::new(registry),
        }
    }

    /// Replaces the decoder configuration.
    #[must_use]
    pub fn with_config(mut self, config: DecoderConfig) -> Self {
        self.decoder = self.decoder.with_config(config);
        self
    }

    /// Decodes a single message from `elements`.
    ///
    /// Elements left over after the first complete message are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the sequence is malformed.
    pub fn create_one(&self, elements: &[Element]) -> Result<Message> {
        let mut cursor = Cursor::new(elements);
        let msg = self.decoder.decode(&mut cursor)?;
        if !cursor.is_exhausted() {
            tracing::debug!(
                tag = %msg.tag(),
                remaining = cursor.remaining(),
                "Ignoring elements after first message"
            );
        }
        Ok(msg)
    }

    /// Decodes one message from each sequence, in order.
    ///
    /// # Errors
    ///
    /// - [`Error::NoArguments`] if `sequences` is empty
    /// - [`Error::Decode`] for the first sequence that fails; nothing is
    ///   returned for the sequences that succeeded
    pub fn create_many<S: AsRef<[Element]>>(&self, sequences: &[S]) -> Result<Vec<Message>> {
        if sequences.is_empty() {
            return Err(Error::NoArguments);
        }
        sequences
            .iter()
            .enumerate()
            .map(|(index, seq)| {
                self.create_one(seq.as_ref()).inspect_err(|e| {
                    tracing::debug!(index, error = %e, "Failed to build response");
                })
            })
            .collect()
    }
}

impl Default for ResponseBuilder<StandardTags> {
    fn default() -> Self {
        Self::new(StandardTags)
    }
}

/// Decodes a single response message using the standard tag table.
///
/// Container tags nest every following element of the sequence. Tags
/// other than `None` tags need a following value.
///
/// # Examples
///
/// ```
/// use rscp_tree::{create_response, elements, tags};
///
/// let utc = create_response(&elements![tags::INFO_REQ_UTC_TIME]).unwrap();
/// assert!(utc.is_absent());
///
/// let online = create_response(&elements![tags::SRV_IS_ONLINE, true]).unwrap();
/// assert_eq!(online.scalar().and_then(|s| s.as_bool()), Some(true));
/// ```
///
/// # Errors
///
/// Returns [`Error::Decode`] if the sequence is malformed.
pub fn create_response(elements: &[Element]) -> Result<Message> {
    ResponseBuilder::default().create_one(elements)
}

/// Decodes one response message per sequence using the standard tag table.
///
/// # Errors
///
/// - [`Error::NoArguments`] if `sequences` is empty
/// - [`Error::Decode`] for the first sequence that fails
pub fn create_responses<S: AsRef<[Element]>>(sequences: &[S]) -> Result<Vec<Message>> {
    ResponseBuilder::default().create_many(sequences)
}
