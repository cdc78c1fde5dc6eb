// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for decoding, building and validating response trees.

use rscp_tree::registry::TagTable;
use rscp_tree::response::{ResponseBuilder, Validator};
use rscp_tree::types::{DataType, Element, ElementKind, Scalar, Tag};
use rscp_tree::{
    Cursor, DecodeError, Decoder, Error, ErrorKind, Message, ValidationError, Value, elements,
    tags,
};

const TAG_A: Tag = Tag::new(0x1080_0001);
const TAG_BOOL: Tag = Tag::new(0x1080_0002);
const TAG_CONTAINER: Tag = Tag::new(0x1080_0003);
const TAG_X: Tag = Tag::new(0x1080_0004);
const TAG_REQ: Tag = Tag::new(0x1000_0005);
const TAG_INNER: Tag = Tag::new(0x1080_0006);

fn fixture_tags() -> TagTable {
    TagTable::new()
        .with_response(TAG_A, DataType::None)
        .with_response(TAG_BOOL, DataType::Bool)
        .with_response(TAG_CONTAINER, DataType::Container)
        .with_response(TAG_X, DataType::None)
        .with_request(TAG_REQ, DataType::Uint32)
        .with_response(TAG_INNER, DataType::Container)
}

fn bool_msg(value: bool) -> Message {
    Message::from_parts(TAG_BOOL, DataType::Bool, Value::Scalar(Scalar::Bool(value)))
}

// ============================================================================
// Decoding
// ============================================================================

mod decoding {
    use super::*;

    #[test]
    fn none_tag_has_absent_value() {
        let table = fixture_tags();
        let msg = ResponseBuilder::new(&table)
            .create_one(&elements![TAG_A])
            .unwrap();
        assert_eq!(msg, Message::from_parts(TAG_A, DataType::None, Value::Absent));
    }

    #[test]
    fn scalar_tag_takes_next_value() {
        let table = fixture_tags();
        let msg = ResponseBuilder::new(&table)
            .create_one(&elements![TAG_BOOL, true])
            .unwrap();
        assert_eq!(msg, bool_msg(true));
    }

    #[test]
    fn container_nests_following_tags() {
        let table = fixture_tags();
        let msg = ResponseBuilder::new(&table)
            .create_one(&elements![TAG_CONTAINER, TAG_X, TAG_BOOL, false])
            .unwrap();
        assert_eq!(
            msg,
            Message::from_parts(
                TAG_CONTAINER,
                DataType::Container,
                Value::Container(vec![
                    Message::from_parts(TAG_X, DataType::None, Value::Absent),
                    bool_msg(false),
                ]),
            )
        );
    }

    #[test]
    fn container_consumes_every_remaining_element() {
        let table = fixture_tags();
        let mut seq = elements![TAG_CONTAINER];
        for i in 0..50 {
            seq.push(Element::Tag(TAG_BOOL));
            seq.push(Element::from(i % 2 == 0));
        }
        let mut cursor = Cursor::new(&seq);
        let msg = Decoder::new(&table).decode(&mut cursor).unwrap();
        assert_eq!(msg.children().len(), 50);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn sibling_after_inner_container_becomes_its_child() {
        let table = fixture_tags();
        let msg = ResponseBuilder::new(&table)
            .create_one(&elements![TAG_CONTAINER, TAG_INNER, TAG_X, TAG_A])
            .unwrap();
        assert_eq!(msg.children().len(), 1);
        let inner = &msg.children()[0];
        assert_eq!(inner.tag(), TAG_INNER);
        let nested: Vec<Tag> = inner.children().iter().map(Message::tag).collect();
        assert_eq!(nested, vec![TAG_X, TAG_A]);
    }

    #[test]
    fn non_tag_first_element() {
        let table = fixture_tags();
        let err = ResponseBuilder::new(&table)
            .create_one(&elements![true])
            .unwrap_err();
        assert_eq!(
            err,
            Error::Decode(DecodeError::InvalidTag {
                index: 0,
                found: ElementKind::Scalar(DataType::Bool),
            })
        );
    }

    #[test]
    fn data_type_as_first_element() {
        let table = fixture_tags();
        let err = ResponseBuilder::new(&table)
            .create_one(&elements![DataType::Container, TAG_A])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTag);
    }

    #[test]
    fn trailing_scalar_tag_misses_value() {
        let table = fixture_tags();
        let err = ResponseBuilder::new(&table)
            .create_one(&elements![TAG_CONTAINER, TAG_A, TAG_BOOL])
            .unwrap_err();
        assert_eq!(
            err,
            Error::Decode(DecodeError::MissingValue {
                tag: TAG_BOOL,
                data_type: DataType::Bool,
                index: 2,
            })
        );
    }

    #[test]
    fn scalar_tag_followed_by_tag() {
        let table = fixture_tags();
        let err = ResponseBuilder::new(&table)
            .create_one(&elements![TAG_CONTAINER, TAG_BOOL, TAG_A])
            .unwrap_err();
        assert_eq!(
            err,
            Error::Decode(DecodeError::DataTypeValueMismatch {
                tag: TAG_BOOL,
                data_type: DataType::Bool,
                index: 2,
                found: ElementKind::Tag,
            })
        );
    }

    #[test]
    fn scalar_tag_followed_by_data_type() {
        let table = fixture_tags();
        let err = ResponseBuilder::new(&table)
            .create_one(&elements![TAG_BOOL, DataType::Bool, true])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataTypeValueMismatch);
    }

    #[test]
    fn empty_sequence() {
        let table = fixture_tags();
        let err = ResponseBuilder::new(&table)
            .create_one(&elements![])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EndOfInput);
    }

    #[test]
    fn deep_container_chain_with_default_config() {
        let table = fixture_tags();
        let seq: Vec<Element> = std::iter::repeat_n(Element::Tag(TAG_INNER), 64).collect();
        let mut cursor = Cursor::new(&seq);
        let msg = Decoder::new(&table).decode(&mut cursor).unwrap();

        let mut depth = 1;
        let mut node = &msg;
        while let [child] = node.children() {
            depth += 1;
            node = child;
        }
        assert_eq!(depth, 64);
        assert!(node.children().is_empty());
        assert!(Validator::strict(&table).validate_one(&msg).is_ok());
    }

    #[test]
    fn independent_decodes_on_threads() {
        let table = fixture_tags();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|n| {
                    let table = &table;
                    s.spawn(move || {
                        let mut seq = elements![TAG_CONTAINER];
                        for _ in 0..n {
                            seq.push(Element::Tag(TAG_X));
                        }
                        Decoder::new(table)
                            .decode(&mut Cursor::new(&seq))
                            .map(|msg| msg.children().len())
                    })
                })
                .collect();
            for (n, handle) in handles.into_iter().enumerate() {
                assert_eq!(handle.join().unwrap().unwrap(), n);
            }
        });
    }
}

// ============================================================================
// Building many responses
// ============================================================================

mod building {
    use super::*;

    #[test]
    fn zero_sequences() {
        let table = fixture_tags();
        let none: &[Vec<Element>] = &[];
        let err = ResponseBuilder::new(&table).create_many(none).unwrap_err();
        assert_eq!(err, Error::NoArguments);
    }

    #[test]
    fn one_message_per_sequence() {
        let table = fixture_tags();
        let msgs = ResponseBuilder::new(&table)
            .create_many(&[
                elements![TAG_CONTAINER, TAG_X],
                elements![TAG_BOOL, true],
                elements![TAG_A],
            ])
            .unwrap();
        let order: Vec<Tag> = msgs.iter().map(Message::tag).collect();
        assert_eq!(order, vec![TAG_CONTAINER, TAG_BOOL, TAG_A]);
        assert_eq!(msgs[0].children().len(), 1);
    }

    #[test]
    fn first_error_wins() {
        let table = fixture_tags();
        let err = ResponseBuilder::new(&table)
            .create_many(&[
                elements![TAG_A],
                elements![TAG_BOOL],
                elements![false],
            ])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingValue);
    }

    #[test]
    fn standard_table_battery_response() {
        let msgs = rscp_tree::create_responses(&[
            elements![
                tags::BAT_DATA,
                tags::BAT_INDEX,
                0u16,
                tags::BAT_RSOC,
                64.0f32,
                tags::BAT_STATUS_CODE,
                0u32,
                tags::BAT_DEVICE_STATE,
                tags::BAT_DEVICE_CONNECTED,
                true,
                tags::BAT_DEVICE_WORKING,
                true,
                tags::BAT_DEVICE_IN_SERVICE,
                false,
            ],
            elements![tags::EMS_GENERAL_ERROR, rscp_tree::ErrorCode::AccessDenied],
        ])
        .unwrap();

        assert!(rscp_tree::validate_responses(&msgs).is_ok());
        let state = msgs[0].find(tags::BAT_DEVICE_STATE).unwrap();
        assert_eq!(state.children().len(), 3);
        assert_eq!(
            msgs[1].scalar(),
            Some(&Scalar::Error(rscp_tree::ErrorCode::AccessDenied))
        );
    }
}

// ============================================================================
// Validation
// ============================================================================

mod validation {
    use super::*;

    #[test]
    fn decoded_response_tags_are_valid() {
        let table = fixture_tags();
        let builder = ResponseBuilder::new(&table);
        let validator = Validator::new(&table);
        for seq in [
            elements![TAG_A],
            elements![TAG_BOOL, true],
            elements![TAG_CONTAINER, TAG_X, TAG_BOOL, false],
            elements![TAG_CONTAINER],
        ] {
            let msg = builder.create_one(&seq).unwrap();
            assert!(validator.validate_one(&msg).is_ok(), "{seq:?}");
        }
    }

    #[test]
    fn request_root_is_rejected() {
        let table = fixture_tags();
        let msg = ResponseBuilder::new(&table)
            .create_one(&elements![TAG_REQ, 7u32])
            .unwrap();
        let err = Validator::new(&table).validate_one(&msg).unwrap_err();
        assert_eq!(err, ValidationError::NotAResponseTag { tag: TAG_REQ });
    }

    #[test]
    fn request_child_depends_on_mode() {
        let table = fixture_tags();
        let msg = ResponseBuilder::new(&table)
            .create_one(&elements![TAG_CONTAINER, TAG_REQ, 7u32])
            .unwrap();
        assert!(Validator::new(&table).validate_one(&msg).is_ok());
        assert_eq!(
            Validator::strict(&table).validate_one(&msg).unwrap_err().kind(),
            ErrorKind::NotAResponseTag
        );
    }

    #[test]
    fn wrong_scalar_kind_is_rejected() {
        let table = fixture_tags();
        let msg = ResponseBuilder::new(&table)
            .create_one(&elements![TAG_CONTAINER, TAG_BOOL, 1u8])
            .unwrap();
        let err = Validator::new(&table).validate_one(&msg).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ValueMismatch {
                tag: TAG_BOOL,
                expected: DataType::Bool,
                found: Some(DataType::UChar8),
            }
        );
    }

    #[test]
    fn list_failure_reports_index_only_of_failing_entry() {
        let table = fixture_tags();
        let msgs = vec![
            bool_msg(true),
            Message::from_parts(TAG_A, DataType::None, Value::Absent),
            Message::from_parts(TAG_A, DataType::None, Value::Scalar(Scalar::Bool(true))),
            Message::from_parts(TAG_REQ, DataType::Uint32, Value::Scalar(Scalar::Uint32(1))),
        ];
        let err = Validator::new(&table).validate_all(&msgs).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Entry {
                index: 2,
                source: Box::new(ValidationError::UnexpectedValue { tag: TAG_A }),
            }
        );
        assert_eq!(err.kind(), ErrorKind::DataTypeValueMismatch);
        assert_eq!(
            err.to_string(),
            "message at index 2: 0x10800001: data type None must not carry a value"
        );
    }

    #[test]
    fn validation_error_converts_into_error() {
        let err: Error = ValidationError::NotAResponseTag { tag: TAG_REQ }.into();
        assert_eq!(err.kind(), ErrorKind::NotAResponseTag);
    }
}

// ============================================================================
// Serialization
// ============================================================================

mod serialization {
    use super::*;

    #[test]
    fn tree_to_json() {
        let msg = rscp_tree::create_response(&elements![
            tags::EMS_GET_POWER_SETTINGS,
            tags::EMS_POWER_LIMITS_USED,
            true,
            tags::EMS_MAX_CHARGE_POWER,
            3000u32,
        ])
        .unwrap();

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Tag": "EMS_GET_POWER_SETTINGS",
                "DataType": "Container",
                "Value": [
                    {"Tag": "EMS_POWER_LIMITS_USED", "DataType": "Bool", "Value": true},
                    {"Tag": "EMS_MAX_CHARGE_POWER", "DataType": "Uint32", "Value": 3000}
                ]
            })
        );
    }

    #[test]
    fn custom_tags_print_as_hex_next_to_standard_names() {
        let table = fixture_tags().with_response(tags::SRV_IS_ONLINE, DataType::Bool);
        let msg = ResponseBuilder::new(&table)
            .create_one(&elements![TAG_CONTAINER, TAG_A, tags::SRV_IS_ONLINE, false])
            .unwrap();

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["Tag"], serde_json::json!("0x10800003"));
        assert_eq!(json["Value"][0]["Tag"], serde_json::json!("0x10800001"));
        assert_eq!(json["Value"][1]["Tag"], serde_json::json!("SRV_IS_ONLINE"));

        let request = ResponseBuilder::new(&table)
            .create_one(&elements![TAG_REQ, 9u32])
            .unwrap();
        let err = Validator::new(&table).validate_one(&request).unwrap_err();
        assert_eq!(err.to_string(), "0x10000005: not a response tag");
    }

    #[test]
    fn timestamp_and_bytes() {
        let at = chrono::DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let msgs = rscp_tree::create_responses(&[
            elements![tags::INFO_UTC_TIME, at],
            elements![
                tags::SRV_REQ_SET_LOCAL_USER,
                tags::SRV_USER_PASSWORD_HASH,
                vec![0xABu8, 0x01],
            ],
        ])
        .unwrap();

        assert_eq!(
            serde_json::to_value(&msgs[0]).unwrap()["Value"],
            serde_json::json!("2024-05-01T12:00:00Z")
        );
        assert_eq!(
            serde_json::to_value(&msgs[1]).unwrap()["Value"][0]["Value"],
            serde_json::json!([171, 1])
        );
    }
}
