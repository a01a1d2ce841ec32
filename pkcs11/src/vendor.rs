// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

//! NSS vendor extensions. Browsers and NSS-derived middleware send these
//! through the standard vendor window; the bridge understands enough of
//! them to marshal and trace trust objects.

use crate::*;

pub const NSSCK_VENDOR_NSS: CK_ULONG = 0x4E534350;

/* Object types */
pub const CKO_NSS: CK_OBJECT_CLASS = CKO_VENDOR_DEFINED | NSSCK_VENDOR_NSS;
pub const CKO_NSS_CRL: CK_OBJECT_CLASS = CKO_NSS + 1;
pub const CKO_NSS_SMIME: CK_OBJECT_CLASS = CKO_NSS + 2;
pub const CKO_NSS_TRUST: CK_OBJECT_CLASS = CKO_NSS + 3;
pub const CKO_NSS_BUILTIN_ROOT_LIST: CK_OBJECT_CLASS = CKO_NSS + 4;
pub const CKO_NSS_NEWSLOT: CK_OBJECT_CLASS = CKO_NSS + 5;
pub const CKO_NSS_DELSLOT: CK_OBJECT_CLASS = CKO_NSS + 6;

/* Attributes */
pub const CKA_NSS: CK_ATTRIBUTE_TYPE = CKA_VENDOR_DEFINED | NSSCK_VENDOR_NSS;
pub const CKA_TRUST: CK_ATTRIBUTE_TYPE = CKA_NSS + 0x2000;
pub const CKA_TRUST_SERVER_AUTH: CK_ATTRIBUTE_TYPE = CKA_TRUST + 8;
pub const CKA_TRUST_CLIENT_AUTH: CK_ATTRIBUTE_TYPE = CKA_TRUST + 9;
pub const CKA_TRUST_CODE_SIGNING: CK_ATTRIBUTE_TYPE = CKA_TRUST + 10;
pub const CKA_TRUST_EMAIL_PROTECTION: CK_ATTRIBUTE_TYPE = CKA_TRUST + 11;
pub const CKA_TRUST_STEP_UP_APPROVED: CK_ATTRIBUTE_TYPE = CKA_TRUST + 16;
pub const CKA_CERT_SHA1_HASH: CK_ATTRIBUTE_TYPE = CKA_TRUST + 100;
pub const CKA_CERT_MD5_HASH: CK_ATTRIBUTE_TYPE = CKA_TRUST + 101;

/* Trust ratings */
pub type CK_TRUST = CK_ULONG;

pub const CKT_VENDOR_DEFINED: CK_TRUST = 0x80000000;
pub const CKT_NSS: CK_TRUST = CKT_VENDOR_DEFINED | NSSCK_VENDOR_NSS;
pub const CKT_NSS_TRUSTED: CK_TRUST = CKT_NSS + 1;
pub const CKT_NSS_TRUSTED_DELEGATOR: CK_TRUST = CKT_NSS + 2;
pub const CKT_NSS_MUST_VERIFY_TRUST: CK_TRUST = CKT_NSS + 3;
pub const CKT_NSS_TRUST_UNKNOWN: CK_TRUST = CKT_NSS + 5;
pub const CKT_NSS_NOT_TRUSTED: CK_TRUST = CKT_NSS + 10;
pub const CKT_NSS_VALID_DELEGATOR: CK_TRUST = CKT_NSS + 11;
