// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

#![warn(missing_docs)]

//! This is Ckbridge
//!
//! A marshaling layer between the PKCS#11 standard C API and Rust
//! token implementations: templates, mechanisms and scalar cells cross
//! the boundary through here, in both directions

pub use pkcs11;

pub mod attribute;
pub mod error;
#[cfg(feature = "log")]
pub mod log;
pub mod mechanism;
pub mod misc;
pub mod trace;

/// Collapses an `error::Result<()>` into the CK_RV a C entry point
/// must return
#[macro_export]
macro_rules! ret_to_rv {
    ($ret:expr) => {
        match $ret {
            Ok(()) => $crate::pkcs11::CKR_OK,
            Err(e) => e.rv(),
        }
    };
}

/// Unwraps an `error::Result<T>` or makes the calling C entry point
/// return the error's CK_RV
#[macro_export]
macro_rules! res_or_ret {
    ($ret:expr) => {
        match $ret {
            Ok(x) => x,
            Err(e) => return e.rv(),
        }
    };
}

#[cfg(test)]
mod tests;
