// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Forward-only reader over a flat element sequence.

use crate::error::DecodeError;
use crate::types::Element;

/// Position-tracked reader over a slice of [`Element`]s.
///
/// The read offset only moves forward. A cursor belongs to exactly one
/// decode call; the decoder takes it by `&mut`.
///
/// # Examples
///
/// ```
/// use rscp_tree::decode::Cursor;
/// use rscp_tree::{elements, tags};
///
/// let seq = elements![tags::EMS_POWER_PV, 1500i32];
/// let mut cursor = Cursor::new(&seq);
///
/// assert_eq!(cursor.remaining(), 2);
/// assert_eq!(cursor.consumed_index(), None);
///
/// cursor.read().unwrap();
/// assert_eq!(cursor.consumed_index(), Some(0));
/// assert_eq!(cursor.remaining(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    elements: &'a [Element],
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned before the first element.
    #[must_use]
    pub const fn new(elements: &'a [Element]) -> Self {
        Self {
            elements,
            offset: 0,
        }
    }

    /// Reads the next element and advances.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::EndOfInput`] if every element has been read.
    pub fn read(&mut self) -> Result<&'a Element, DecodeError> {
        let element = self
            .elements
            .get(self.offset)
            .ok_or(DecodeError::EndOfInput {
                consumed: self.offset,
            })?;
        self.offset += 1;
        Ok(element)
    }

    /// Returns the number of unread elements.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.elements.len() - self.offset
    }

    /// Returns `true` once every element has been read.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the zero-based index of the last element read.
    #[must_use]
    pub const fn consumed_index(&self) -> Option<usize> {
        self.offset.checked_sub(1)
    }

    /// Returns the number of elements read so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.offset
    }
}
