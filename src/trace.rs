// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

//! This module renders attribute records as log lines. Values are
//! withheld unless sensitive tracing was explicitly enabled, and the
//! values whose meaning is known (booleans, object classes, trust
//! ratings) are printed symbolically instead of as raw bytes.

use crate::attribute::{AttrType, Attribute};
use crate::misc::{bytes_to_bool, bytes_to_ulong};

use pkcs11::vendor::*;
use pkcs11::*;

/// Struct to map a wire value to a printable name
#[derive(Debug)]
struct Valmap<'a> {
    id: CK_ULONG,
    name: &'a str,
}

/// Helper macro to populate the static value maps
macro_rules! valmap_element {
    ($id:expr) => {
        Valmap {
            id: $id,
            name: stringify!($id),
        }
    };
}

/// Object class values with a printable name
static CLASSMAP: [Valmap<'_>; 16] = [
    valmap_element!(CKO_DATA),
    valmap_element!(CKO_CERTIFICATE),
    valmap_element!(CKO_PUBLIC_KEY),
    valmap_element!(CKO_PRIVATE_KEY),
    valmap_element!(CKO_SECRET_KEY),
    valmap_element!(CKO_HW_FEATURE),
    valmap_element!(CKO_DOMAIN_PARAMETERS),
    valmap_element!(CKO_MECHANISM),
    valmap_element!(CKO_OTP_KEY),
    valmap_element!(CKO_PROFILE),
    valmap_element!(CKO_NSS_CRL),
    valmap_element!(CKO_NSS_SMIME),
    valmap_element!(CKO_NSS_TRUST),
    valmap_element!(CKO_NSS_BUILTIN_ROOT_LIST),
    valmap_element!(CKO_NSS_NEWSLOT),
    valmap_element!(CKO_NSS_DELSLOT),
];

/// Trust rating values with a printable name
static TRUSTMAP: [Valmap<'_>; 6] = [
    valmap_element!(CKT_NSS_TRUSTED),
    valmap_element!(CKT_NSS_TRUSTED_DELEGATOR),
    valmap_element!(CKT_NSS_MUST_VERIFY_TRUST),
    valmap_element!(CKT_NSS_TRUST_UNKNOWN),
    valmap_element!(CKT_NSS_NOT_TRUSTED),
    valmap_element!(CKT_NSS_VALID_DELEGATOR),
];

fn valmap_name(map: &[Valmap<'_>], id: CK_ULONG) -> String {
    match map.iter().find(|m| m.id == id) {
        Some(m) => m.name.to_string(),
        None => format!("{:#010x}", id),
    }
}

fn value_trace(id: CK_ULONG, value: &[u8]) -> String {
    match id {
        CKA_CLASS => {
            if let Ok(class) = bytes_to_ulong(value) {
                return valmap_name(&CLASSMAP, class);
            }
        }
        CKA_TRUST_SERVER_AUTH..=CKA_TRUST_EMAIL_PROTECTION => {
            if let Ok(trust) = bytes_to_ulong(value) {
                return valmap_name(&TRUSTMAP, trust);
            }
        }
        _ => {
            if let Ok(AttrType::BoolType) = AttrType::attr_id_to_attrtype(id)
            {
                if let Ok(val) = bytes_to_bool(value) {
                    return match val {
                        true => "CK_TRUE".to_string(),
                        false => "CK_FALSE".to_string(),
                    };
                }
            }
        }
    }
    hex::encode(value)
}

/// Renders one attribute record as a single log line
///
/// Unless `sensitive` is set only the attribute name is returned, so
/// the default trace never leaks key material or object contents.
/// With `sensitive` set the value is rendered too: symbolically where
/// the attribute's meaning is known, as lowercase hex otherwise, and
/// as the word "unavailable" for records without a value.
pub fn attr_trace(attr: &Attribute, sensitive: bool) -> String {
    let name = attr.name();
    if !sensitive {
        return name;
    }
    match attr.get_value() {
        Some(v) => format!("{}: {}", name, value_trace(attr.get_type(), v)),
        None => format!("{}: unavailable", name),
    }
}
