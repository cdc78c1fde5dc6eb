// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `rscp_tree` - decoding and validation of E3/DC RSCP response trees.
//!
//! An RSCP response is a tree of messages. Each message has a tag, and the
//! tag alone decides what the message carries: nothing, one scalar, or a
//! list of child messages. On the way in, such a tree is a flat sequence
//! of tags interleaved with their values. This library turns those flat
//! sequences back into trees and checks that the trees are well-formed
//! responses.
//!
//! # Supported Features
//!
//! - **Decoding**: [`Decoder`] rebuilds one message per call from a [`Cursor`]
//! - **Building**: [`create_response`] / [`create_responses`] for fixtures and tooling
//! - **Validation**: [`Validator`] checks tag classification and value kinds
//! - **Tag metadata**: [`StandardTags`] ships a standard tag table; any
//!   [`TagRegistry`] can be injected instead
//! - **Serialization**: [`Message`] serializes with serde for JSON output
//!
//! # Quick Start
//!
//! ```
//! use rscp_tree::{create_response, elements, tags, validate_response};
//!
//! fn main() -> rscp_tree::Result<()> {
//!     let msg = create_response(&elements![
//!         tags::BAT_DATA,
//!         tags::BAT_INDEX, 0u16,
//!         tags::BAT_RSOC, 72.5f32,
//!         tags::BAT_CHARGE_CYCLES, 412u32,
//!     ])?;
//!
//!     validate_response(&msg)?;
//!     assert_eq!(msg.children().len(), 3);
//!
//!     let json = serde_json::to_string(&msg).unwrap();
//!     assert!(json.starts_with(r#"{"Tag":"BAT_DATA","DataType":"Container""#));
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Tag Tables
//!
//! ```
//! use rscp_tree::registry::TagTable;
//! use rscp_tree::response::{ResponseBuilder, Validator};
//! use rscp_tree::types::{DataType, Tag};
//! use rscp_tree::elements;
//!
//! let state = Tag::new(0x2080_0001);
//! let flag = Tag::new(0x2080_0002);
//! let table = TagTable::new()
//!     .with_response(state, DataType::Container)
//!     .with_response(flag, DataType::Bool);
//!
//! let msg = ResponseBuilder::new(&table)
//!     .create_one(&elements![state, flag, true])
//!     .unwrap();
//! assert!(Validator::strict(&table).validate_one(&msg).is_ok());
//! ```

pub mod decode;
pub mod error;
mod message;
pub mod registry;
pub mod response;
pub mod sniff;
pub mod tags;
pub mod types;

pub use decode::{Cursor, Decoder, DecoderConfig};
pub use error::{DecodeError, Error, ErrorKind, Result, ValidationError};
pub use message::{Message, Value};
pub use registry::{StandardTags, TagInfo, TagRegistry, TagTable};
pub use response::{
    ResponseBuilder, Validator, create_response, create_responses, validate_response,
    validate_responses,
};
pub use types::{DataType, Element, ElementKind, ErrorCode, Scalar, Tag};
