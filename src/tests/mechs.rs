// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::tests;
use tests::*;

use serial_test::parallel;

/* the front of a mechanism-using call, as a dispatcher runs it */
fn decode_rv(mech: &CK_MECHANISM) -> CK_RV {
    let _ = res_or_ret!(to_mechanism(mech));
    CKR_OK
}

/* the tail of a mechanism-list call, as a dispatcher runs it */
fn return_mech_list(
    list: &[Mechanism],
    dst: CK_MECHANISM_TYPE_PTR,
    count: &mut CK_ULONG,
) -> CK_RV {
    if !dst.is_null() {
        if (*count as usize) < list.len() {
            return CKR_BUFFER_TOO_SMALL;
        }
        write_mechanism_list(list, dst);
    }
    *count = list.len() as CK_ULONG;
    CKR_OK
}

#[test]
#[parallel]
fn test_pss_params() {
    let mut params = CK_RSA_PKCS_PSS_PARAMS {
        hashAlg: CKM_SHA256,
        mgf: CKG_MGF1_SHA256,
        sLen: 32,
    };
    let mech = CK_MECHANISM {
        mechanism: CKM_SHA256_RSA_PKCS_PSS,
        pParameter: void_ptr!(&mut params),
        ulParameterLen: sizeof!(CK_RSA_PKCS_PSS_PARAMS),
    };
    let m = ret_or_panic!(to_mechanism(&mech));
    assert_eq!(m.get_type(), CKM_SHA256_RSA_PKCS_PSS);
    match m.get_params() {
        MechParams::RsaPss(pss) => {
            assert_eq!(pss.hash, CKM_SHA256);
            assert_eq!(pss.mgf, CKG_MGF1_SHA256);
            assert_eq!(pss.saltlen, 32);
        }
        p => panic!("wrong params decoded: {:?}", p),
    }

    /* a stray parameter length must never be dereferenced */
    let mech = CK_MECHANISM {
        mechanism: CKM_RSA_PKCS_PSS,
        pParameter: void_ptr!(&mut params),
        ulParameterLen: 3,
    };
    assert_eq!(decode_rv(&mech), CKR_FUNCTION_FAILED);

    /* as must a null parameter pointer */
    let mech = CK_MECHANISM {
        mechanism: CKM_RSA_PKCS_PSS,
        pParameter: std::ptr::null_mut(),
        ulParameterLen: sizeof!(CK_RSA_PKCS_PSS_PARAMS),
    };
    assert_eq!(decode_rv(&mech), CKR_FUNCTION_FAILED);
}

#[test]
#[parallel]
fn test_oaep_params() {
    let mut source_data = [1u8, 2, 3];
    let mut params = CK_RSA_PKCS_OAEP_PARAMS {
        hashAlg: CKM_SHA_1,
        mgf: CKG_MGF1_SHA1,
        source: CKZ_DATA_SPECIFIED,
        pSourceData: void_ptr!(source_data.as_mut_ptr()),
        ulSourceDataLen: source_data.len() as CK_ULONG,
    };
    let mech = CK_MECHANISM {
        mechanism: CKM_RSA_PKCS_OAEP,
        pParameter: void_ptr!(&mut params),
        ulParameterLen: sizeof!(CK_RSA_PKCS_OAEP_PARAMS),
    };
    let m = ret_or_panic!(to_mechanism(&mech));
    match m.get_params() {
        MechParams::RsaOaep(oaep) => {
            assert_eq!(oaep.hash, CKM_SHA_1);
            assert_eq!(oaep.mgf, CKG_MGF1_SHA1);
            assert_eq!(oaep.source, CKZ_DATA_SPECIFIED);
            assert_eq!(oaep.source_data, vec![1, 2, 3]);
        }
        p => panic!("wrong params decoded: {:?}", p),
    }

    /* source values the standard leaves undefined are carried */
    params.source = 0;
    params.pSourceData = std::ptr::null_mut();
    params.ulSourceDataLen = 0;
    let mech = CK_MECHANISM {
        mechanism: CKM_RSA_PKCS_OAEP,
        pParameter: void_ptr!(&mut params),
        ulParameterLen: sizeof!(CK_RSA_PKCS_OAEP_PARAMS),
    };
    let m = ret_or_panic!(to_mechanism(&mech));
    match m.get_params() {
        MechParams::RsaOaep(oaep) => {
            assert_eq!(oaep.source, 0);
            assert_eq!(oaep.source_data.len(), 0);
        }
        p => panic!("wrong params decoded: {:?}", p),
    }
}

#[test]
#[parallel]
fn test_gcm_params() {
    let mut iv = [1u8, 2];
    let mut params = CK_GCM_PARAMS {
        pIv: iv.as_mut_ptr(),
        ulIvLen: iv.len() as CK_ULONG,
        ulIvBits: 0,
        pAAD: std::ptr::null_mut(),
        ulAADLen: 0,
        ulTagBits: 128,
    };
    let mech = CK_MECHANISM {
        mechanism: CKM_AES_GCM,
        pParameter: void_ptr!(&mut params),
        ulParameterLen: sizeof!(CK_GCM_PARAMS),
    };
    let m = ret_or_panic!(to_mechanism(&mech));
    match m.get_params() {
        MechParams::AesGcm(gcm) => {
            /* a short IV and an empty AAD are carried, not judged */
            assert_eq!(gcm.iv, vec![1, 2]);
            assert_eq!(gcm.aad.len(), 0);
            assert_eq!(gcm.tagbits, 128);
        }
        p => panic!("wrong params decoded: {:?}", p),
    }
}

#[test]
#[parallel]
fn test_legacy_and_unknown_mechs() {
    /* legacy mechanisms carry their parameter as uninterpreted bytes,
     * up to and including CKM_RSA_PKCS_OAEP_TPM_1_1 */
    let param = [0xabu8; 5];
    let mech = CK_MECHANISM {
        mechanism: CKM_RSA_PKCS_OAEP_TPM_1_1,
        pParameter: void_ptr!(param.as_ptr()),
        ulParameterLen: param.len() as CK_ULONG,
    };
    let m = ret_or_panic!(to_mechanism(&mech));
    match m.get_params() {
        MechParams::Opaque(v) => assert_eq!(v, &vec![0xab; 5]),
        p => panic!("wrong params decoded: {:?}", p),
    }

    /* no parameter, no payload */
    let mech = CK_MECHANISM {
        mechanism: CKM_SHA256,
        pParameter: std::ptr::null_mut(),
        ulParameterLen: 0,
    };
    let m = ret_or_panic!(to_mechanism(&mech));
    assert_eq!(m.get_params(), &MechParams::None);

    /* unknown and vendor mechanisms convert, never fail; rejecting
     * them is the receiving token's call */
    let mech = CK_MECHANISM {
        mechanism: CKM_VENDOR_DEFINED + 0x77,
        pParameter: void_ptr!(param.as_ptr()),
        ulParameterLen: param.len() as CK_ULONG,
    };
    let m = ret_or_panic!(to_mechanism(&mech));
    assert_eq!(m.get_type(), CKM_VENDOR_DEFINED + 0x77);
    assert_eq!(m.get_params(), &MechParams::None);
}

#[test]
#[parallel]
fn test_mech_list_write() {
    let list = [
        Mechanism::new(CKM_AES_GCM, MechParams::None),
        Mechanism::new(CKM_RSA_PKCS, MechParams::None),
    ];

    /* size query pass, then fill pass, as the enumeration call runs */
    let mut count: CK_ULONG = 0;
    let ret = return_mech_list(&list, std::ptr::null_mut(), &mut count);
    assert_eq!(ret, CKR_OK);
    assert_eq!(count, 2);

    let mut out = vec![0 as CK_MECHANISM_TYPE; count as usize];
    let ret = return_mech_list(&list, out.as_mut_ptr(), &mut count);
    assert_eq!(ret, CKR_OK);
    assert_eq!(out, vec![CKM_AES_GCM, CKM_RSA_PKCS]);

    let mut short: CK_ULONG = 1;
    let ret = return_mech_list(&list, out.as_mut_ptr(), &mut short);
    assert_eq!(ret, CKR_BUFFER_TOO_SMALL);
}
