// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

//! Error type shared by all marshaling operations, and the mapping of
//! Rust results onto CK_RV result codes at the C boundary.

use std::error;
use std::fmt;

use pkcs11::*;

/// Result type used by all fallible bridge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can always be collapsed to a CK_RV.
///
/// Errors carrying a Cryptoki code surface that code unchanged; every
/// other failure surfaces as CKR_FUNCTION_FAILED so callers never see a
/// value outside the interface's result-code space.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    origin: Option<Box<dyn error::Error>>,
    errmsg: Option<String>,
    ckrv: CK_RV,
}

/// Classification of [Error]s.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /* A Cryptoki-style error, see the ckrv Error field */
    CkError,
    /* A wire cell or buffer declared an impossible length, see errmsg */
    InvalidLength,
    /* Other error, see origin */
    Nested,
}

impl Error {
    /// Creates an error from a Cryptoki result code.
    pub fn ck_rv(ckrv: CK_RV) -> Error {
        Error {
            kind: ErrorKind::CkError,
            origin: None,
            errmsg: None,
            ckrv: ckrv,
        }
    }

    /// Creates an error from a Cryptoki result code, preserving the
    /// underlying error that caused it.
    pub fn ck_rv_from_error<E>(ckrv: CK_RV, error: E) -> Error
    where
        E: Into<Box<dyn error::Error>>,
    {
        Error {
            kind: ErrorKind::CkError,
            origin: Some(error.into()),
            errmsg: None,
            ckrv: ckrv,
        }
    }

    /// Creates an error from a Cryptoki result code with a message.
    pub fn ck_rv_with_errmsg(ckrv: CK_RV, errmsg: String) -> Error {
        Error {
            kind: ErrorKind::CkError,
            origin: None,
            errmsg: Some(errmsg),
            ckrv: ckrv,
        }
    }

    /// Creates an error for a wire length no valid encoding can have.
    pub fn invalid_length<L: fmt::Display>(len: L) -> Error {
        Error {
            kind: ErrorKind::InvalidLength,
            origin: None,
            errmsg: Some(format!("invalid length: {}", len)),
            ckrv: CKR_FUNCTION_FAILED,
        }
    }

    /// Wraps an error that has no Cryptoki equivalent.
    pub fn other_error<E>(error: E) -> Error
    where
        E: Into<Box<dyn error::Error>>,
    {
        Error {
            kind: ErrorKind::Nested,
            origin: Some(error.into()),
            errmsg: None,
            ckrv: CKR_FUNCTION_FAILED,
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the CK_RV this error maps to on the wire.
    pub fn rv(&self) -> CK_RV {
        self.ckrv
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::CkError => {
                if let Some(ref e) = self.errmsg {
                    write!(f, "{}", e)
                } else {
                    match self.ckrv {
                        CKR_FUNCTION_FAILED => {
                            write!(f, "CKR_FUNCTION_FAILED")
                        }
                        CKR_BUFFER_TOO_SMALL => {
                            write!(f, "CKR_BUFFER_TOO_SMALL")
                        }
                        CKR_ARGUMENTS_BAD => {
                            write!(f, "CKR_ARGUMENTS_BAD")
                        }
                        _ => write!(f, "CKR {:#010x}", self.ckrv),
                    }
                }
            }
            ErrorKind::InvalidLength => {
                write!(f, "{}", self.errmsg.as_ref().unwrap())
            }
            ErrorKind::Nested => self.origin.as_ref().unwrap().fmt(f),
        }
    }
}

impl From<CK_RV> for Error {
    fn from(ckrv: CK_RV) -> Error {
        Error::ck_rv(ckrv)
    }
}

impl From<std::num::TryFromIntError> for Error {
    fn from(error: std::num::TryFromIntError) -> Error {
        Error::other_error(error)
    }
}

impl From<std::array::TryFromSliceError> for Error {
    fn from(error: std::array::TryFromSliceError) -> Error {
        Error::other_error(error)
    }
}
