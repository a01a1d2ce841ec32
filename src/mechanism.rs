// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

//! This module converts wire mechanism descriptors ([CK_MECHANISM])
//! into safe Rust values ([Mechanism]), decoding the parameter blob of
//! the mechanisms whose parameter structure is understood and carrying
//! the rest through untouched.

use crate::error::Result;
use crate::misc::{bytes_to_slice, bytes_to_vec, cast_params};

use pkcs11::*;

/// Decoded CK_RSA_PKCS_PSS_PARAMS
///
/// Fields are carried exactly as the caller declared them, no
/// digest or salt length policy is applied here
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RsaPssParams {
    /// The hash algorithm the caller selected
    pub hash: CK_MECHANISM_TYPE,
    /// The mask generation function
    pub mgf: CK_RSA_PKCS_MGF_TYPE,
    /// The salt length, in bytes
    pub saltlen: CK_ULONG,
}

/// Decoded CK_RSA_PKCS_OAEP_PARAMS
///
/// The encoding parameter source and its data are carried exactly as
/// declared, including combinations the standard leaves undefined
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RsaOaepParams {
    /// The hash algorithm the caller selected
    pub hash: CK_MECHANISM_TYPE,
    /// The mask generation function
    pub mgf: CK_RSA_PKCS_MGF_TYPE,
    /// The source of the encoding parameter
    pub source: CK_RSA_PKCS_OAEP_SOURCE_TYPE,
    /// An owned copy of the source data, empty when none was given
    pub source_data: Vec<u8>,
}

/// Decoded CK_GCM_PARAMS
///
/// The ulIvBits field of the wire structure duplicates the IV length
/// and is not carried
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AesGcmParams {
    /// An owned copy of the IV
    pub iv: Vec<u8>,
    /// An owned copy of the additional authenticated data
    pub aad: Vec<u8>,
    /// The requested tag length, in bits
    pub tagbits: CK_ULONG,
}

/// The decoded parameter payload of a mechanism
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum MechParams {
    /// No parameter was given, or none is defined for the mechanism
    None,
    /// An uninterpreted copy of the parameter bytes
    Opaque(Vec<u8>),
    /// RSA-PSS signature parameters
    RsaPss(RsaPssParams),
    /// RSA-OAEP encryption parameters
    RsaOaep(RsaOaepParams),
    /// AES-GCM parameters
    AesGcm(AesGcmParams),
}

/// A Rust native mechanism descriptor with an owned parameter payload
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Mechanism {
    mech_type: CK_MECHANISM_TYPE,
    params: MechParams,
}

impl Mechanism {
    /// Creates a descriptor directly from its parts
    pub fn new(mech_type: CK_MECHANISM_TYPE, params: MechParams) -> Mechanism {
        Mechanism {
            mech_type: mech_type,
            params: params,
        }
    }

    /// Returns the mechanism type
    pub fn get_type(&self) -> CK_MECHANISM_TYPE {
        self.mech_type
    }

    /// Returns a reference to the decoded parameters
    pub fn get_params(&self) -> &MechParams {
        &self.params
    }
}

/// Decodes a wire mechanism descriptor into an owned [Mechanism]
///
/// The parameter blob is interpreted for the RSA-PSS family, RSA-OAEP
/// and AES-GCM, where the caller's declared length must match the
/// expected parameter structure exactly. Mechanisms up to and including
/// CKM_RSA_PKCS_OAEP_TPM_1_1 that carry a parameter we do not interpret
/// get an opaque byte copy. Everything else, vendor mechanisms
/// included, decodes to a descriptor without parameters: an unknown
/// mechanism is never a conversion failure, rejecting it is the
/// receiving token's call.
pub fn to_mechanism(mech: &CK_MECHANISM) -> Result<Mechanism> {
    match mech.mechanism {
        CKM_RSA_PKCS_PSS
        | CKM_SHA1_RSA_PKCS_PSS
        | CKM_SHA224_RSA_PKCS_PSS
        | CKM_SHA256_RSA_PKCS_PSS
        | CKM_SHA384_RSA_PKCS_PSS
        | CKM_SHA512_RSA_PKCS_PSS
        | CKM_SHA3_224_RSA_PKCS_PSS
        | CKM_SHA3_256_RSA_PKCS_PSS
        | CKM_SHA3_384_RSA_PKCS_PSS
        | CKM_SHA3_512_RSA_PKCS_PSS => {
            let params = cast_params!(mech, CK_RSA_PKCS_PSS_PARAMS);
            Ok(Mechanism::new(
                mech.mechanism,
                MechParams::RsaPss(RsaPssParams {
                    hash: params.hashAlg,
                    mgf: params.mgf,
                    saltlen: params.sLen,
                }),
            ))
        }
        CKM_RSA_PKCS_OAEP => {
            let params = cast_params!(mech, CK_RSA_PKCS_OAEP_PARAMS);
            Ok(Mechanism::new(
                mech.mechanism,
                MechParams::RsaOaep(RsaOaepParams {
                    hash: params.hashAlg,
                    mgf: params.mgf,
                    source: params.source,
                    source_data: bytes_to_vec!(
                        params.pSourceData,
                        params.ulSourceDataLen
                    ),
                }),
            ))
        }
        CKM_AES_GCM => {
            let params = cast_params!(mech, CK_GCM_PARAMS);
            Ok(Mechanism::new(
                mech.mechanism,
                MechParams::AesGcm(AesGcmParams {
                    iv: bytes_to_vec!(params.pIv, params.ulIvLen),
                    aad: bytes_to_vec!(params.pAAD, params.ulAADLen),
                    tagbits: params.ulTagBits,
                }),
            ))
        }
        m if m <= CKM_RSA_PKCS_OAEP_TPM_1_1 && mech.ulParameterLen > 0 => {
            Ok(Mechanism::new(
                mech.mechanism,
                MechParams::Opaque(bytes_to_vec!(
                    mech.pParameter,
                    mech.ulParameterLen
                )),
            ))
        }
        _ => Ok(Mechanism::new(mech.mechanism, MechParams::None)),
    }
}

/// Writes the mechanism types of a list into a caller-provided array
///
/// This serves the mechanism enumeration call, which returns types
/// only. The destination must have room for `list.len()` cells; callers
/// learn the required count through the usual size query and are
/// trusted here.
pub fn write_mechanism_list(list: &[Mechanism], dst: CK_MECHANISM_TYPE_PTR) {
    let out = bytes_to_slice!(mut dst, list.len(), CK_MECHANISM_TYPE);
    for (cell, mech) in out.iter_mut().zip(list.iter()) {
        *cell = mech.get_type();
    }
}
