// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::tests;
use tests::*;

#[test]
fn test_bool_cells() {
    assert_eq!(ret_or_panic!(bytes_to_bool(&[0])), false);
    assert_eq!(ret_or_panic!(bytes_to_bool(&[1])), true);
    /* any nonzero content counts as true */
    assert_eq!(ret_or_panic!(bytes_to_bool(&[0x5a])), true);

    /* only cells exactly one CK_BBOOL wide are valid */
    assert!(bytes_to_bool(&[]).is_err());
    assert!(bytes_to_bool(&[1, 0]).is_err());
    assert_eq!(bytes_to_bool(&[1, 0]).unwrap_err().rv(), CKR_FUNCTION_FAILED);
}

#[test]
fn test_ulong_cells() {
    let val: CK_ULONG = 0x11223344;
    assert_eq!(ret_or_panic!(bytes_to_ulong(&val.to_ne_bytes())), val);

    /* 32-bit callers emit four byte cells, these widen losslessly */
    let cell = 0x11223344u32.to_ne_bytes();
    assert_eq!(ret_or_panic!(bytes_to_ulong(&cell)), val);

    /* oversized cells read at native width, the tail is ignored */
    let mut long = val.to_ne_bytes().to_vec();
    long.push(0xff);
    assert_eq!(ret_or_panic!(bytes_to_ulong(&long)), val);

    /* anything narrower than four bytes is invalid */
    assert!(bytes_to_ulong(&[1, 2, 3]).is_err());
    assert!(bytes_to_ulong(&[]).is_err());
    assert_eq!(
        bytes_to_ulong(&[1, 2, 3]).unwrap_err().rv(),
        CKR_FUNCTION_FAILED
    );
}

#[test]
/* passing a null pointer with zero length is the guarded path the
 * macros define; the lint cannot see the runtime null check */
#[allow(invalid_null_arguments)]
fn test_byte_buffers() {
    let data = [1u8, 2, 3, 4];
    let v = bytes_to_vec!(data.as_ptr(), data.len());
    assert_eq!(v, vec![1, 2, 3, 4]);

    /* null or empty input yields an owned empty vector */
    let v = bytes_to_vec!(std::ptr::null::<u8>(), 0);
    assert_eq!(v.len(), 0);

    let s = bytes_to_slice!(data.as_ptr(), data.len(), u8);
    assert_eq!(s, &data[..]);
    let s = bytes_to_slice!(std::ptr::null::<u8>(), 0, u8);
    assert_eq!(s.len(), 0);

    assert_eq!(sizeof!(CK_ULONG) as usize, CK_ULONG_SIZE);
    assert_eq!(sizeof!(CK_BBOOL) as usize, CK_BBOOL_SIZE);
}

#[test]
fn test_zeromem() {
    let mut buf = vec![0xaau8; 32];
    zeromem(buf.as_mut_slice());
    assert_eq!(buf, vec![0u8; 32]);
}

#[test]
fn test_ulong_list_write() {
    let list = [3 as CK_ULONG, 7, 42];
    let mut out = vec![0 as CK_ULONG; list.len()];
    write_ulong_list(&list, out.as_mut_ptr());
    assert_eq!(out, vec![3, 7, 42]);
}
