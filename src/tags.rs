// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Standard RSCP tags.
//!
//! A fixed subset of the E3/DC tag list covering authentication, the energy
//! management system (EMS), batteries (BAT), device information (INFO) and
//! history database (DB) namespaces. Requests have bit 23 clear, the
//! matching response has it set. Tags used inside containers on both sides
//! (e.g. [`BAT_INDEX`]) keep the request form.
//!
//! Lookups go through [`StandardTags`](crate::registry::StandardTags).

use crate::types::{DataType, Tag};

/// One row of the standard tag table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TagEntry {
    pub(crate) tag: Tag,
    pub(crate) name: &'static str,
    pub(crate) data_type: DataType,
}

macro_rules! standard_tags {
    ($($name:ident = $code:literal : $data_type:ident;)*) => {
        $(
            #[doc = concat!("`", stringify!($code), "` carrying [`DataType::", stringify!($data_type), "`].")]
            pub const $name: Tag = Tag::new($code);
        )*

        pub(crate) static TABLE: &[TagEntry] = &[
            $(
                TagEntry {
                    tag: $name,
                    name: stringify!($name),
                    data_type: DataType::$data_type,
                },
            )*
        ];
    };
}

standard_tags! {
    // RSCP
    RSCP_REQ_AUTHENTICATION = 0x0000_0001: Container;
    RSCP_AUTHENTICATION_USER = 0x0000_0002: CString;
    RSCP_AUTHENTICATION_PASSWORD = 0x0000_0003: CString;
    RSCP_AUTHENTICATION = 0x0080_0001: UChar8;
    RSCP_GENERAL_ERROR = 0x00FF_FFFF: Error;

    // EMS
    EMS_REQ_POWER_PV = 0x0100_0001: None;
    EMS_REQ_POWER_BAT = 0x0100_0002: None;
    EMS_REQ_POWER_HOME = 0x0100_0003: None;
    EMS_REQ_POWER_GRID = 0x0100_0004: None;
    EMS_REQ_POWER_ADD = 0x0100_0005: None;
    EMS_REQ_AUTARKY = 0x0100_0006: None;
    EMS_REQ_SELF_CONSUMPTION = 0x0100_0007: None;
    EMS_REQ_BAT_SOC = 0x0100_0008: None;
    EMS_REQ_COUPLING_MODE = 0x0100_0009: None;
    EMS_REQ_MODE = 0x0100_0011: None;
    EMS_REQ_SET_ERROR_BUZZER_ENABLED = 0x0100_005C: Bool;
    EMS_REQ_GET_POWER_SETTINGS = 0x0100_008B: None;
    EMS_POWER_LIMITS_USED = 0x0100_0100: Bool;
    EMS_MAX_CHARGE_POWER = 0x0100_0101: Uint32;
    EMS_MAX_DISCHARGE_POWER = 0x0100_0102: Uint32;
    EMS_DISCHARGE_START_POWER = 0x0100_0103: Uint32;
    EMS_POWERSAVE_ENABLED = 0x0100_0104: UChar8;
    EMS_WEATHER_REGULATED_CHARGE_ENABLED = 0x0100_0105: UChar8;
    EMS_POWER_PV = 0x0180_0001: Int32;
    EMS_POWER_BAT = 0x0180_0002: Int32;
    EMS_POWER_HOME = 0x0180_0003: Int32;
    EMS_POWER_GRID = 0x0180_0004: Int32;
    EMS_POWER_ADD = 0x0180_0005: Int32;
    EMS_AUTARKY = 0x0180_0006: Float32;
    EMS_SELF_CONSUMPTION = 0x0180_0007: Float32;
    EMS_BAT_SOC = 0x0180_0008: UChar8;
    EMS_COUPLING_MODE = 0x0180_0009: UChar8;
    EMS_MODE = 0x0180_0011: UChar8;
    EMS_SET_ERROR_BUZZER_ENABLED = 0x0180_005C: Char8;
    EMS_GET_POWER_SETTINGS = 0x0180_008B: Container;
    EMS_GENERAL_ERROR = 0x01FF_FFFF: Error;

    // BAT
    BAT_REQ_RSOC = 0x0300_0001: None;
    BAT_REQ_MODULE_VOLTAGE = 0x0300_0002: None;
    BAT_REQ_CURRENT = 0x0300_0003: None;
    BAT_REQ_CHARGE_CYCLES = 0x0300_0008: None;
    BAT_REQ_DEVICE_STATE = 0x0300_0060: None;
    BAT_REQ_STATUS_CODE = 0x0300_0103: None;
    BAT_REQ_DATA = 0x0304_0000: Container;
    BAT_INDEX = 0x0304_0001: Uint16;
    BAT_RSOC = 0x0380_0001: Float32;
    BAT_MODULE_VOLTAGE = 0x0380_0002: Float32;
    BAT_CURRENT = 0x0380_0003: Float32;
    BAT_CHARGE_CYCLES = 0x0380_0008: Uint32;
    BAT_DEVICE_STATE = 0x0380_0060: Container;
    BAT_DEVICE_CONNECTED = 0x0380_0061: Bool;
    BAT_DEVICE_WORKING = 0x0380_0062: Bool;
    BAT_DEVICE_IN_SERVICE = 0x0380_0063: Bool;
    BAT_STATUS_CODE = 0x0380_0103: Uint32;
    BAT_DATA = 0x0384_0000: Container;
    BAT_GENERAL_ERROR = 0x03FF_FFFF: Error;

    // DB
    DB_REQ_HISTORY_DATA_DAY = 0x0600_0100: Container;
    DB_REQ_HISTORY_TIME_START = 0x0600_0101: Timestamp;
    DB_REQ_HISTORY_TIME_INTERVAL = 0x0600_0102: Timestamp;
    DB_REQ_HISTORY_TIME_SPAN = 0x0600_0103: Timestamp;
    DB_SUM_CONTAINER = 0x0680_0010: Container;
    DB_VALUE_CONTAINER = 0x0680_0020: Container;
    DB_GRAPH_INDEX = 0x0680_0001: Float32;
    DB_BAT_POWER_IN = 0x0680_0002: Float32;
    DB_BAT_POWER_OUT = 0x0680_0003: Float32;
    DB_DC_POWER = 0x0680_0004: Float32;
    DB_GRID_POWER_IN = 0x0680_0005: Float32;
    DB_GRID_POWER_OUT = 0x0680_0006: Float32;
    DB_CONSUMPTION = 0x0680_0007: Float32;
    DB_HISTORY_DATA_DAY = 0x0680_0100: Container;
    DB_GENERAL_ERROR = 0x06FF_FFFF: Error;

    // INFO
    INFO_REQ_SERIAL_NUMBER = 0x0A00_0001: None;
    INFO_REQ_PRODUCTION_DATE = 0x0A00_0002: None;
    INFO_REQ_MAC_ADDRESS = 0x0A00_0003: None;
    INFO_REQ_IP_ADDRESS = 0x0A00_0004: None;
    INFO_REQ_UTC_TIME = 0x0A00_000C: None;
    INFO_REQ_SW_RELEASE = 0x0A00_000D: None;
    INFO_REQ_TIME_ZONE = 0x0A00_0015: None;
    INFO_SERIAL_NUMBER = 0x0A80_0001: CString;
    INFO_PRODUCTION_DATE = 0x0A80_0002: CString;
    INFO_MAC_ADDRESS = 0x0A80_0003: CString;
    INFO_IP_ADDRESS = 0x0A80_0004: CString;
    INFO_UTC_TIME = 0x0A80_000C: Timestamp;
    INFO_SW_RELEASE = 0x0A80_000D: CString;
    INFO_TIME_ZONE = 0x0A80_0015: CString;
    INFO_GENERAL_ERROR = 0x0AFF_FFFF: Error;

    // SRV
    SRV_REQ_IS_ONLINE = 0x0800_0001: None;
    SRV_IS_ONLINE = 0x0880_0001: Bool;
    SRV_REQ_ADD_USER = 0x0800_0002: None;
    SRV_ADD_USER = 0x0880_0002: Bool;
    SRV_REQ_SET_LOCAL_USER = 0x0804_0003: Container;
    SRV_USER_NAME = 0x0800_0010: CString;
    SRV_USER_PASSWORD_HASH = 0x0800_0011: ByteArray;
    SRV_SET_LOCAL_USER = 0x0880_0003: Bool;
    SRV_GENERAL_ERROR = 0x08FF_FFFF: Error;
}

/// Finds the table entry for a tag.
pub(crate) fn lookup(tag: Tag) -> Option<&'static TagEntry> {
    TABLE.iter().find(|entry| entry.tag == tag)
}

/// Finds the table entry for a tag name.
pub(crate) fn lookup_name(name: &str) -> Option<&'static TagEntry> {
    TABLE.iter().find(|entry| entry.name == name)
}
