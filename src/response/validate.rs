// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structural validation of response trees.

use crate::error::ValidationError;
use crate::message::{Message, Value};
use crate::registry::{StandardTags, TagRegistry};
use crate::types::DataType;

/// Checks that message trees are well-formed responses.
///
/// The outermost tag of every response must be response-class. Every node
/// of the tree must then satisfy:
///
/// - its tag is known and its data type is the tag's data type
/// - `None` tags carry no value
/// - `Container` tags carry a list of messages
/// - scalar tags carry a scalar of exactly their data type
///
/// Devices nest request-class tags such as `BAT_INDEX` inside response
/// containers, so by default only the outermost tag is classified. A
/// [`strict`](Validator::strict) validator classifies every node.
///
/// # Examples
///
/// ```
/// use rscp_tree::response::Validator;
/// use rscp_tree::registry::StandardTags;
/// use rscp_tree::{create_response, elements, tags, ErrorKind};
///
/// let validator = Validator::new(StandardTags);
///
/// let ok = create_response(&elements![tags::EMS_POWER_PV, 2100i32]).unwrap();
/// assert!(validator.validate_one(&ok).is_ok());
///
/// let request = create_response(&elements![tags::EMS_REQ_POWER_PV]).unwrap();
/// let err = validator.validate_one(&request).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NotAResponseTag);
/// ```
#[derive(Debug, Clone)]
pub struct Validator<R> {
    registry: R,
    strict: bool,
}

impl<R: TagRegistry> Validator<R> {
    /// Creates a validator that classifies only the outermost tag.
    #[must_use]
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            strict: false,
        }
    }

    /// Creates a validator that requires every tag in the tree to be
    /// response-class.
    #[must_use]
    pub fn strict(registry: R) -> Self {
        Self {
            registry,
            strict: true,
        }
    }

    /// Returns `true` if nested tags are classified too.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Validates a single response tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, depth first.
    pub fn validate_one(&self, message: &Message) -> Result<(), ValidationError> {
        self.check_response_class(message)?;
        self.check_node(message)
    }

    /// Validates a list of response trees in order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Entry`] wrapping the first failure, with
    /// the index of the failing message.
    pub fn validate_all(&self, messages: &[Message]) -> Result<(), ValidationError> {
        for (index, message) in messages.iter().enumerate() {
            self.validate_one(message).map_err(|e| {
                tracing::debug!(index, tag = %message.tag(), error = %e, "Response failed validation");
                ValidationError::Entry {
                    index,
                    source: Box::new(e),
                }
            })?;
        }
        Ok(())
    }

    fn check_response_class(&self, message: &Message) -> Result<(), ValidationError> {
        let tag = message.tag();
        match self.registry.lookup(tag) {
            None => Err(ValidationError::UnknownTag { tag }),
            Some(info) if !info.is_response => Err(ValidationError::NotAResponseTag { tag }),
            Some(_) => Ok(()),
        }
    }

    fn check_node(&self, message: &Message) -> Result<(), ValidationError> {
        let tag = message.tag();
        let info = self
            .registry
            .lookup(tag)
            .ok_or(ValidationError::UnknownTag { tag })?;
        if self.strict && !info.is_response {
            return Err(ValidationError::NotAResponseTag { tag });
        }
        if message.data_type() != info.data_type {
            return Err(ValidationError::TagDataTypeMismatch {
                tag,
                expected: info.data_type,
                actual: message.data_type(),
            });
        }

        match (message.data_type(), message.value()) {
            (DataType::None, Value::Absent) => Ok(()),
            (DataType::None, _) => Err(ValidationError::UnexpectedValue { tag }),
            (DataType::Container, Value::Container(children)) => {
                children.iter().try_for_each(|child| self.check_node(child))
            }
            (DataType::Container, _) => Err(ValidationError::ExpectedContainer { tag }),
            (expected, Value::Scalar(scalar)) if scalar.data_type() == expected => Ok(()),
            (expected, Value::Scalar(scalar)) => Err(ValidationError::ValueMismatch {
                tag,
                expected,
                found: Some(scalar.data_type()),
            }),
            (expected, _) => Err(ValidationError::ValueMismatch {
                tag,
                expected,
                found: None,
            }),
        }
    }
}

impl Default for Validator<StandardTags> {
    fn default() -> Self {
        Self::new(StandardTags)
    }
}

/// Validates a single response tree against the standard tag table.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn validate_response(message: &Message) -> Result<(), ValidationError> {
    Validator::default().validate_one(message)
}

/// Validates a list of response trees against the standard tag table.
///
/// # Errors
///
/// Returns [`ValidationError::Entry`] for the first failing message.
pub fn validate_responses(messages: &[Message]) -> Result<(), ValidationError> {
    Validator::default().validate_all(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements;
    use crate::registry::TagTable;
    use crate::response::create_response;
    use crate::tags;
    use crate::types::{Scalar, Tag};

    fn decoded(seq: &[crate::types::Element]) -> Message {
        create_response(seq).unwrap()
    }

    #[test]
    fn accepts_decoded_response_with_request_children() {
        let msg = decoded(&elements![
            tags::BAT_DATA,
            tags::BAT_INDEX,
            0u16,
            tags::BAT_RSOC,
            55.5f32,
        ]);
        assert!(validate_response(&msg).is_ok());
    }

    #[test]
    fn strict_rejects_request_children() {
        let msg = decoded(&elements![tags::BAT_DATA, tags::BAT_INDEX, 0u16]);
        let err = Validator::strict(StandardTags).validate_one(&msg).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotAResponseTag {
                tag: tags::BAT_INDEX
            }
        );
    }

    #[test]
    fn rejects_request_root() {
        let msg = decoded(&elements![tags::INFO_REQ_SERIAL_NUMBER]);
        assert_eq!(
            validate_response(&msg).unwrap_err(),
            ValidationError::NotAResponseTag {
                tag: tags::INFO_REQ_SERIAL_NUMBER
            }
        );
    }

    #[test]
    fn rejects_wrong_scalar_kind() {
        let msg = decoded(&elements![tags::BAT_DATA, tags::BAT_INDEX, 0i32]);
        assert_eq!(
            validate_response(&msg).unwrap_err(),
            ValidationError::ValueMismatch {
                tag: tags::BAT_INDEX,
                expected: DataType::Uint16,
                found: Some(DataType::Int32),
            }
        );
    }

    #[test]
    fn rejects_data_type_not_derived_from_tag() {
        let msg = Message::from_parts(
            tags::EMS_POWER_PV,
            DataType::Uint32,
            Value::Scalar(Scalar::Uint32(5)),
        );
        assert_eq!(
            validate_response(&msg).unwrap_err(),
            ValidationError::TagDataTypeMismatch {
                tag: tags::EMS_POWER_PV,
                expected: DataType::Int32,
                actual: DataType::Uint32,
            }
        );
    }

    #[test]
    fn rejects_value_on_none_tag() {
        let msg = Message::from_parts(
            tags::BAT_DATA,
            DataType::Container,
            Value::Container(vec![Message::from_parts(
                tags::BAT_REQ_RSOC,
                DataType::None,
                Value::Scalar(Scalar::Bool(true)),
            )]),
        );
        assert_eq!(
            validate_response(&msg).unwrap_err(),
            ValidationError::UnexpectedValue {
                tag: tags::BAT_REQ_RSOC
            }
        );
    }

    #[test]
    fn rejects_container_without_children_list() {
        let msg = Message::from_parts(tags::BAT_DATA, DataType::Container, Value::Absent);
        assert_eq!(
            validate_response(&msg).unwrap_err(),
            ValidationError::ExpectedContainer {
                tag: tags::BAT_DATA
            }
        );
    }

    #[test]
    fn rejects_scalar_tag_without_value() {
        let msg = Message::from_parts(tags::BAT_RSOC, DataType::Float32, Value::Absent);
        assert_eq!(
            validate_response(&msg).unwrap_err(),
            ValidationError::ValueMismatch {
                tag: tags::BAT_RSOC,
                expected: DataType::Float32,
                found: None,
            }
        );
    }

    #[test]
    fn rejects_unknown_tags() {
        let unknown = Tag::new(0x7F80_0001);
        let root = Message::from_parts(unknown, DataType::None, Value::Absent);
        assert_eq!(
            validate_response(&root).unwrap_err(),
            ValidationError::UnknownTag { tag: unknown }
        );
    }

    #[test]
    fn custom_registry() {
        let tag = Tag::new(0x2000_0001);
        let table = TagTable::new().with_response(tag, DataType::Bool);
        let msg = Message::from_parts(tag, DataType::Bool, Value::Scalar(Scalar::Bool(false)));
        assert!(Validator::new(&table).validate_one(&msg).is_ok());
        assert!(validate_response(&msg).is_err());
    }

    #[test]
    fn validate_all_reports_first_failing_index() {
        let msgs = vec![
            decoded(&elements![tags::EMS_POWER_PV, 1i32]),
            decoded(&elements![tags::EMS_POWER_BAT, 2i32]),
            decoded(&elements![tags::EMS_REQ_POWER_HOME]),
            decoded(&elements![tags::EMS_REQ_POWER_GRID]),
        ];
        let err = validate_responses(&msgs).unwrap_err();
        assert_eq!(err.entry_index(), Some(2));
        assert_eq!(
            err,
            ValidationError::Entry {
                index: 2,
                source: Box::new(ValidationError::NotAResponseTag {
                    tag: tags::EMS_REQ_POWER_HOME
                }),
            }
        );
    }

    #[test]
    fn validate_all_empty_list() {
        assert!(validate_responses(&[]).is_ok());
    }
}
