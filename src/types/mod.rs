// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types of the RSCP message model.
//!
//! # Types
//!
//! - [`Tag`] - 32-bit field identifier with a response flag
//! - [`DataType`] - Kind of value a tag carries (absent, container or scalar)
//! - [`Scalar`] - One value of a scalar data type
//! - [`ErrorCode`] - Payload of [`DataType::Error`] tags
//! - [`Element`] - One item of a flat tag/value sequence

mod data_type;
mod tag;
mod value;

pub use data_type::DataType;
pub use tag::{Tag, TagParseError};
pub use value::{Element, ElementKind, ErrorCode, Scalar};
