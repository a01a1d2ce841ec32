// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::tests;
use tests::*;

use crate::trace::attr_trace;

#[test]
fn test_redaction() {
    let attr = Attribute::from_string(CKA_LABEL, String::from("my cert"));
    /* without sensitive tracing only the name is rendered */
    assert_eq!(attr_trace(&attr, false), "CKA_LABEL");
    assert_eq!(
        attr_trace(&attr, true),
        format!("CKA_LABEL: {}", hex::encode("my cert"))
    );
}

#[test]
fn test_symbolic_values() {
    let attr = Attribute::from_bool(CKA_TOKEN, true);
    assert_eq!(attr_trace(&attr, true), "CKA_TOKEN: CK_TRUE");

    let attr = Attribute::from_bool(CKA_TRUST_STEP_UP_APPROVED, false);
    assert_eq!(
        attr_trace(&attr, true),
        "CKA_TRUST_STEP_UP_APPROVED: CK_FALSE"
    );

    let attr = Attribute::from_ulong(CKA_CLASS, CKO_NSS_TRUST);
    assert_eq!(attr_trace(&attr, true), "CKA_CLASS: CKO_NSS_TRUST");

    let attr = Attribute::from_ulong(CKA_CLASS, CKO_PRIVATE_KEY);
    assert_eq!(attr_trace(&attr, true), "CKA_CLASS: CKO_PRIVATE_KEY");

    let attr = Attribute::from_ulong(
        CKA_TRUST_SERVER_AUTH,
        CKT_NSS_TRUSTED_DELEGATOR,
    );
    assert_eq!(
        attr_trace(&attr, true),
        "CKA_TRUST_SERVER_AUTH: CKT_NSS_TRUSTED_DELEGATOR"
    );
}

#[test]
fn test_fallbacks() {
    let attr = Attribute::unavailable(CKA_PRIVATE_EXPONENT);
    assert_eq!(attr_trace(&attr, true), "CKA_PRIVATE_EXPONENT: unavailable");

    /* unknown attribute ids render with the numeric name and hex */
    let id: CK_ULONG = 0x80001234;
    let attr = Attribute::from_bytes(id, vec![0xaa, 0xbb]);
    assert_eq!(attr_trace(&attr, true), format!("{}: aabb", id));

    /* unrecognized class and trust values render as hex numbers */
    let attr = Attribute::from_ulong(CKA_CLASS, 0x1234);
    assert_eq!(attr_trace(&attr, true), "CKA_CLASS: 0x00001234");

    let attr = Attribute::from_ulong(CKA_TRUST_CLIENT_AUTH, 0x999);
    assert_eq!(attr_trace(&attr, true), "CKA_TRUST_CLIENT_AUTH: 0x00000999");

    /* a malformed boolean cell falls back to plain hex */
    let attr = Attribute::from_bytes(CKA_TOKEN, vec![1, 1]);
    assert_eq!(attr_trace(&attr, true), "CKA_TOKEN: 0101");
}
