// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::tests;
use tests::*;

/* the write half of a get-attributes call, as a dispatcher runs it */
fn fill_template(attrs: &[Attribute], template: &mut [CK_ATTRIBUTE]) -> CK_RV {
    ret_to_rv!(from_attributes(attrs, template))
}

#[test]
fn test_template_read() {
    let class: CK_ULONG = CKO_CERTIFICATE;
    let label = "test cert";
    let tval: CK_BBOOL = CK_TRUE;
    let template = make_ptrs_template(&[
        (CKA_CLASS, void_ptr!(&class), CK_ULONG_SIZE),
        (CKA_LABEL, void_ptr!(label.as_ptr()), label.len()),
        (CKA_TOKEN, void_ptr!(&tval), CK_BBOOL_SIZE),
    ]);

    let attrs = to_attributes(&template);
    assert_eq!(attrs.len(), 3);
    assert_eq!(attrs[0].get_type(), CKA_CLASS);
    assert_eq!(ret_or_panic!(attrs[0].to_ulong()), CKO_CERTIFICATE);
    assert_eq!(attrs[1].get_value(), Some(label.as_bytes()));
    assert_eq!(ret_or_panic!(attrs[2].to_bool()), true);

    /* the unavailable length sentinel reads back as a record without
     * a value, distinct from a present empty one */
    let template = make_ptrs_template(&[(
        CKA_VALUE,
        std::ptr::null_mut(),
        CK_UNAVAILABLE_INFORMATION as usize,
    )]);
    let attrs = to_attributes(&template);
    assert_eq!(attrs[0].get_value(), None);

    let template = make_ptrs_template(&[(CKA_VALUE, std::ptr::null_mut(), 0)]);
    let attrs = to_attributes(&template);
    assert_eq!(attrs[0].get_value(), Some(&[] as &[u8]));
}

#[test]
fn test_template_write() {
    let attrs = [
        Attribute::from_ulong(CKA_CLASS, CKO_DATA),
        Attribute::from_string(CKA_LABEL, String::from("test data")),
        Attribute::from_bool(CKA_TOKEN, true),
        Attribute::from_bytes(CKA_ID, Vec::new()),
    ];

    /* size query pass: null value pointers, lengths come back */
    let mut template = make_ptrs_template(&[
        (CKA_CLASS, std::ptr::null_mut(), 0),
        (CKA_LABEL, std::ptr::null_mut(), 0),
        (CKA_TOKEN, std::ptr::null_mut(), 0),
        (CKA_ID, std::ptr::null_mut(), 5), /* stale, must come back 0 */
    ]);
    let ret = fill_template(&attrs, &mut template);
    assert_eq!(ret, CKR_OK);
    assert_eq!(template[0].ulValueLen as usize, CK_ULONG_SIZE);
    assert_eq!(template[1].ulValueLen, 9);
    assert_eq!(template[2].ulValueLen as usize, CK_BBOOL_SIZE);
    assert_eq!(template[3].ulValueLen, 0);

    /* fill pass with buffers of the reported sizes */
    let mut class = [0u8; CK_ULONG_SIZE];
    let mut label = [0u8; 16];
    let mut tval = [0u8; 1];
    let mut id = [0u8; 0];
    let mut template = make_ptrs_template(&[
        (CKA_CLASS, void_ptr!(class.as_mut_ptr()), class.len()),
        (CKA_LABEL, void_ptr!(label.as_mut_ptr()), label.len()),
        (CKA_TOKEN, void_ptr!(tval.as_mut_ptr()), tval.len()),
        (CKA_ID, void_ptr!(id.as_mut_ptr()), id.len()),
    ]);
    let ret = fill_template(&attrs, &mut template);
    assert_eq!(ret, CKR_OK);
    assert_eq!(ret_or_panic!(bytes_to_ulong(&class)), CKO_DATA);
    assert_eq!(template[1].ulValueLen, 9);
    assert_eq!(&label[..9], "test data".as_bytes());
    assert_eq!(tval[0], CK_TRUE);
    assert_eq!(template[3].ulValueLen, 0);
}

#[test]
fn test_template_write_too_small() {
    let attrs = [
        Attribute::from_string(CKA_LABEL, String::from("test data")),
        Attribute::unavailable(CKA_VALUE),
        Attribute::from_bool(CKA_TOKEN, false),
    ];

    let mut small = [0u8; 2];
    let mut tval = [0xffu8; 1];
    let mut template = make_ptrs_template(&[
        (CKA_LABEL, void_ptr!(small.as_mut_ptr()), small.len()),
        (CKA_VALUE, std::ptr::null_mut(), 0),
        (CKA_TOKEN, void_ptr!(tval.as_mut_ptr()), tval.len()),
    ]);

    /* the undersized cell and the absent one are marked unavailable,
     * the sized cell is still filled, and the whole call reports
     * CKR_BUFFER_TOO_SMALL only once every cell was processed */
    let ret = fill_template(&attrs, &mut template);
    assert_eq!(ret, CKR_BUFFER_TOO_SMALL);
    assert_eq!(template[0].ulValueLen, CK_UNAVAILABLE_INFORMATION);
    assert_eq!(template[1].ulValueLen, CK_UNAVAILABLE_INFORMATION);
    assert_eq!(template[2].ulValueLen as usize, CK_BBOOL_SIZE);
    assert_eq!(tval[0], CK_FALSE);
}

#[test]
fn test_template_round_trip() {
    let mut ck_attrs = CkAttrs::with_capacity(3);
    ret_or_panic!(ck_attrs.add_owned_ulong(CKA_CLASS, CKO_SECRET_KEY));
    ret_or_panic!(ck_attrs.add_owned_bool(CKA_SENSITIVE, CK_TRUE));
    ret_or_panic!(ck_attrs.add_owned_slice(CKA_ID, &[0xde, 0xad]));

    let attrs = to_attributes(ck_attrs.as_slice());
    assert_eq!(attrs[0], Attribute::from_ulong(CKA_CLASS, CKO_SECRET_KEY));
    assert_eq!(attrs[1], Attribute::from_bool(CKA_SENSITIVE, true));
    assert_eq!(attrs[2], Attribute::from_bytes(CKA_ID, vec![0xde, 0xad]));
}

#[test]
fn test_attr_accessors() {
    let attr = Attribute::from_bool(CKA_TOKEN, true);
    assert_eq!(attr.name(), "CKA_TOKEN");
    assert_eq!(ret_or_panic!(attr.to_bool()), true);
    /* a boolean is not a number */
    assert_eq!(attr.to_ulong().unwrap_err().rv(), CKR_ATTRIBUTE_TYPE_INVALID);

    let attr = Attribute::from_ulong(CKA_TRUST_SERVER_AUTH, CKT_NSS_TRUSTED);
    assert_eq!(attr.name(), "CKA_TRUST_SERVER_AUTH");
    assert_eq!(ret_or_panic!(attr.to_ulong()), CKT_NSS_TRUSTED);

    let attr = Attribute::unavailable(CKA_MODULUS_BITS);
    assert_eq!(attr.to_ulong().unwrap_err().rv(), CKR_ATTRIBUTE_SENSITIVE);

    /* unknown attribute ids fall back to the numeric name */
    let id: CK_ULONG = 0x80001111;
    let attr = Attribute::from_bytes(id, vec![1]);
    assert_eq!(attr.name(), id.to_string());
    assert_eq!(
        attr.to_bool().unwrap_err().rv(),
        CKR_ATTRIBUTE_TYPE_INVALID
    );

    let mut attr = Attribute::from_bytes(CKA_VALUE, vec![0xff; 8]);
    attr.zeroize();
    assert_eq!(attr.get_value(), Some(&[0u8; 8][..]));
}

#[test]
fn test_ckattrs() {
    let mut ck_attrs = CkAttrs::new();
    assert!(ck_attrs.is_empty());
    ret_or_panic!(ck_attrs.add_vec(CKA_VALUE, vec![1, 2, 3]));
    assert_eq!(ck_attrs.len(), 1);
    let found = ck_attrs.find_attr(CKA_VALUE);
    assert!(found.is_some());
    assert_eq!(found.unwrap().ulValueLen, 3);
    assert!(ck_attrs.find_attr(CKA_LABEL).is_none());

    let e = CkAttrs::from_ptr(std::ptr::null_mut(), 3).unwrap_err();
    assert_eq!(e.rv(), CKR_ARGUMENTS_BAD);

    /* borrowed templates are copied only on modification */
    let tval: CK_BBOOL = CK_TRUE;
    let slice = [make_attribute!(CKA_TOKEN, void_ptr!(&tval), CK_BBOOL_SIZE)];
    let mut borrowed = CkAttrs::from(&slice);
    assert_eq!(borrowed.as_ptr(), slice.as_ptr());
    ret_or_panic!(borrowed.add_owned_bool(CKA_PRIVATE, CK_FALSE));
    assert_ne!(borrowed.as_ptr(), slice.as_ptr());
    assert_eq!(borrowed.len(), 2);
    /* run the wiping drop over the owned buffer */
    borrowed.zeroize = true;
}
