// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response construction and validation.
//!
//! [`ResponseBuilder`] turns flat element sequences into message trees, one
//! decode per sequence. [`Validator`] checks that trees are well-formed
//! responses before they are handed on for serialization.
//!
//! The free functions use the standard RSCP tag table:
//!
//! ```
//! use rscp_tree::response::{create_responses, validate_responses};
//! use rscp_tree::{elements, tags};
//!
//! let responses = create_responses(&[
//!     elements![tags::INFO_UTC_TIME, chrono::DateTime::<chrono::Utc>::UNIX_EPOCH],
//!     elements![tags::EMS_BAT_SOC, 93u8],
//! ]).unwrap();
//!
//! assert!(validate_responses(&responses).is_ok());
//! ```

mod builder;
mod validate;

pub use builder::{ResponseBuilder, create_response, create_responses};
pub use validate::{Validator, validate_response, validate_responses};
