// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

//! Raw-memory helpers shared by the codecs: pointer and length
//! conversions, mechanism parameter casts, narrow scalar cell decoding
//! and list writes into caller-provided arrays.

use crate::error::{Error, Result};

use pkcs11::*;

/// Byte width of a native CK_ULONG cell.
pub const CK_ULONG_SIZE: usize = std::mem::size_of::<CK_ULONG>();

/// Byte width of a CK_ULONG cell as emitted by 32-bit callers; no
/// conforming encoding is ever narrower.
pub const CK_ULONG_SIZE_MIN: usize = 4;

/// Copies a (pointer, length) wire buffer into an owned Vec. A null
/// pointer or zero length yields an empty Vec.
#[macro_export]
macro_rules! bytes_to_vec {
    ($ptr:expr, $len:expr) => {{
        let ptr = $ptr as *const u8;
        let size = usize::try_from($len).unwrap();
        if ptr.is_null() || size == 0 {
            Vec::new()
        } else {
            let mut v = Vec::<u8>::with_capacity(size);
            unsafe {
                std::ptr::copy_nonoverlapping(ptr, v.as_mut_ptr(), size);
                v.set_len(size);
            }
            v
        }
    }};
}
pub use bytes_to_vec;

/// Views a (pointer, length) wire buffer as a borrowed slice of $typ.
/// The caller guarantees the pointer is valid for $len elements.
#[macro_export]
macro_rules! bytes_to_slice {
    ($ptr:expr, $len:expr, $typ:ty) => {
        if $len > 0 {
            unsafe {
                std::slice::from_raw_parts(
                    $ptr as *const $typ,
                    usize::try_from($len).unwrap(),
                )
            }
        } else {
            &[]
        }
    };

    (mut $ptr:expr, $len:expr, $typ:ty) => {
        if $len > 0 {
            unsafe {
                std::slice::from_raw_parts_mut(
                    $ptr as *mut $typ,
                    usize::try_from($len).unwrap(),
                )
            }
        } else {
            &mut []
        }
    };
}
pub use bytes_to_slice;

/// Casts any reference to a CK_VOID_PTR.
#[macro_export]
macro_rules! void_ptr {
    ($ptr:expr) => {
        $ptr as *const _ as pkcs11::CK_VOID_PTR
    };
}
pub use void_ptr;

/// Casts any reference to a CK_BYTE_PTR.
#[macro_export]
macro_rules! byte_ptr {
    ($ptr:expr) => {
        $ptr as *const _ as pkcs11::CK_BYTE_PTR
    };
}
pub use byte_ptr;

/// size_of, as the CK_ULONG the wire structures carry lengths in.
#[macro_export]
macro_rules! sizeof {
    ($type:ty) => {
        pkcs11::CK_ULONG::try_from(std::mem::size_of::<$type>()).unwrap()
    };
}
pub use sizeof;

/// Copies a mechanism's parameter blob out as the given C struct.
/// Fails when the pointer is null or the declared length is not the
/// struct's exact size, so a stray length can never cause an
/// out-of-bounds read.
#[macro_export]
macro_rules! cast_params {
    ($mech:expr, $params:ty) => {{
        let Ok(len) = usize::try_from($mech.ulParameterLen) else {
            return Err($crate::error::Error::invalid_length(
                $mech.ulParameterLen,
            ));
        };
        if len != std::mem::size_of::<$params>() || $mech.pParameter.is_null()
        {
            return Err($crate::error::Error::invalid_length(len));
        }
        unsafe { *($mech.pParameter as *const $params) }
    }};
}
pub use cast_params;

/// Wipes a buffer. Volatile stores so the writes are not elided on
/// buffers about to be freed.
pub fn zeromem(mem: &mut [u8]) {
    for b in mem.iter_mut() {
        unsafe { std::ptr::write_volatile(b, 0) };
    }
}

/// Decodes a boolean cell.
///
/// The cell must be exactly one CK_BBOOL wide; any nonzero content is
/// true, as the interface defines. Wrong widths are an error, they mean
/// the caller serialized the wrong type.
pub fn bytes_to_bool(val: &[u8]) -> Result<bool> {
    if val.len() != std::mem::size_of::<CK_BBOOL>() {
        return Err(Error::invalid_length(val.len()));
    }
    Ok(val[0] != 0)
}

/// Decodes an unsigned integer cell.
///
/// Cells at least as wide as a native CK_ULONG are read at native
/// width; cells of at least [CK_ULONG_SIZE_MIN] bytes are read with the
/// 32-bit convention and widened. Anything shorter is an error.
pub fn bytes_to_ulong(val: &[u8]) -> Result<CK_ULONG> {
    if val.len() >= CK_ULONG_SIZE {
        let cell: [u8; CK_ULONG_SIZE] = val[..CK_ULONG_SIZE].try_into()?;
        return Ok(CK_ULONG::from_ne_bytes(cell));
    }
    if val.len() >= CK_ULONG_SIZE_MIN {
        let cell: [u8; CK_ULONG_SIZE_MIN] =
            val[..CK_ULONG_SIZE_MIN].try_into()?;
        return Ok(CK_ULONG::from(u32::from_ne_bytes(cell)));
    }
    Err(Error::invalid_length(val.len()))
}

/// Writes a list of CK_ULONG cells into a caller-provided array.
///
/// Handle and slot id lists share this shape, they are all CK_ULONG
/// aliases on the wire. The destination must have room for
/// `list.len()` cells; callers learn the required count through the
/// usual size query and are trusted here.
pub fn write_ulong_list(list: &[CK_ULONG], dst: CK_ULONG_PTR) {
    for (idx, val) in list.iter().enumerate() {
        unsafe { std::ptr::write(dst.add(idx), *val) };
    }
}
