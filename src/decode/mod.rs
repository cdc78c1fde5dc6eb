// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding flat element sequences into message trees.
//!
//! A response payload arrives as a flat sequence of [`Element`]s: tags
//! interleaved with their values. The [`Decoder`] reads it through a
//! [`Cursor`] and rebuilds the tree, resolving each tag's data type through
//! a [`TagRegistry`](crate::registry::TagRegistry).
//!
//! # Container Layout
//!
//! Sequences carry no child counts. A container tag takes every element
//! left in the cursor as its children, so a container can only be the
//! outermost element of a sequence or the last message of its level:
//!
//! ```text
//! BAT_DATA, BAT_INDEX, 0, BAT_RSOC, 87.5
//! └─ BAT_DATA { BAT_INDEX: 0, BAT_RSOC: 87.5 }
//!
//! BAT_DATA, BAT_INDEX, 0, EMS_POWER_PV, 1500
//! └─ BAT_DATA { BAT_INDEX: 0, EMS_POWER_PV: 1500 }   (not two messages)
//! ```
//!
//! Several independent top-level messages are decoded from one sequence
//! each; see [`create_responses`](crate::response::create_responses).
//!
//! [`Element`]: crate::types::Element

mod cursor;
mod decoder;

pub use cursor::Cursor;
pub use decoder::{Decoder, DecoderConfig};
