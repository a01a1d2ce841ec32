// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

//! This module converts between wire attribute templates (arrays of
//! [CK_ATTRIBUTE] cells owned by the caller) and safe Rust
//! representations ([Attribute], [CkAttrs]), and defines the mapping
//! between attribute type values and the data type they carry as
//! described by the [AttrType] enumeration.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::misc::{
    byte_ptr, bytes_to_bool, bytes_to_ulong, bytes_to_vec, void_ptr, zeromem,
};

use pkcs11::vendor::{
    CKA_CERT_MD5_HASH, CKA_CERT_SHA1_HASH, CKA_TRUST_CLIENT_AUTH,
    CKA_TRUST_CODE_SIGNING, CKA_TRUST_EMAIL_PROTECTION,
    CKA_TRUST_SERVER_AUTH, CKA_TRUST_STEP_UP_APPROVED,
};
use pkcs11::*;

/// List of attribute value types we understand
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AttrType {
    /// A single CK_BBOOL cell
    BoolType,
    /// A CK_ULONG cell
    NumType,
    /// UTF-8 text, not NUL terminated
    StringType,
    /// An opaque byte buffer
    BytesType,
    /// An array of CK_ULONG cells
    UlongArrayType,
    /// A CK_DATE block
    DateType,
}

impl AttrType {
    /// Finds the value type of an attribute from the attribute id
    pub fn attr_id_to_attrtype(id: CK_ULONG) -> Result<AttrType> {
        match Attrmap::search_by_id(id) {
            Some(a) => Ok(a.atype),
            None => Err(CKR_ATTRIBUTE_TYPE_INVALID)?,
        }
    }
}

/// Struct to map an attribute id to a value type and a printable name
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Attrmap<'a> {
    id: CK_ULONG,
    name: &'a str,
    atype: AttrType,
}

impl PartialOrd for Attrmap<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Attrmap<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.id < other.id {
            return Ordering::Less;
        }
        if self.id > other.id {
            return Ordering::Greater;
        }
        Ordering::Equal
    }
}

impl Attrmap<'_> {
    /// Convenience function to efficiently search for a mapping by id
    pub fn search_by_id(id: CK_ULONG) -> Option<&'static Attrmap<'static>> {
        match &ATTRMAP.binary_search(&Attrmap {
            id: id,
            name: "",
            atype: AttrType::BytesType,
        }) {
            Ok(i) => Some(&ATTRMAP[*i]),
            Err(_) => None,
        }
    }
}

/// Helper macro to populate the static attributes map
macro_rules! attrmap_element {
    ($id:expr; as $attrtype:ident) => {
        Attrmap {
            id: $id,
            name: stringify!($id),
            atype: AttrType::$attrtype,
        }
    };
}

/// The main attributes map, lists all known attributes in id order
static ATTRMAP: [Attrmap<'_>; 82] = [
    attrmap_element!(CKA_CLASS; as NumType),
    attrmap_element!(CKA_TOKEN; as BoolType),
    attrmap_element!(CKA_PRIVATE; as BoolType),
    attrmap_element!(CKA_LABEL; as StringType),
    attrmap_element!(CKA_UNIQUE_ID; as StringType),
    attrmap_element!(CKA_APPLICATION; as StringType),
    attrmap_element!(CKA_VALUE; as BytesType),
    attrmap_element!(CKA_OBJECT_ID; as BytesType),
    attrmap_element!(CKA_CERTIFICATE_TYPE; as NumType),
    attrmap_element!(CKA_ISSUER; as BytesType),
    attrmap_element!(CKA_SERIAL_NUMBER; as BytesType),
    attrmap_element!(CKA_AC_ISSUER; as BytesType),
    attrmap_element!(CKA_OWNER; as BytesType),
    attrmap_element!(CKA_ATTR_TYPES; as BytesType),
    attrmap_element!(CKA_TRUSTED; as BoolType),
    attrmap_element!(CKA_CERTIFICATE_CATEGORY; as NumType),
    attrmap_element!(CKA_JAVA_MIDP_SECURITY_DOMAIN; as NumType),
    attrmap_element!(CKA_URL; as StringType),
    attrmap_element!(CKA_HASH_OF_SUBJECT_PUBLIC_KEY; as BytesType),
    attrmap_element!(CKA_HASH_OF_ISSUER_PUBLIC_KEY; as BytesType),
    attrmap_element!(CKA_NAME_HASH_ALGORITHM; as NumType),
    attrmap_element!(CKA_CHECK_VALUE; as BytesType),
    attrmap_element!(CKA_KEY_TYPE; as NumType),
    attrmap_element!(CKA_SUBJECT; as BytesType),
    attrmap_element!(CKA_ID; as BytesType),
    attrmap_element!(CKA_SENSITIVE; as BoolType),
    attrmap_element!(CKA_ENCRYPT; as BoolType),
    attrmap_element!(CKA_DECRYPT; as BoolType),
    attrmap_element!(CKA_WRAP; as BoolType),
    attrmap_element!(CKA_UNWRAP; as BoolType),
    attrmap_element!(CKA_SIGN; as BoolType),
    attrmap_element!(CKA_SIGN_RECOVER; as BoolType),
    attrmap_element!(CKA_VERIFY; as BoolType),
    attrmap_element!(CKA_VERIFY_RECOVER; as BoolType),
    attrmap_element!(CKA_DERIVE; as BoolType),
    attrmap_element!(CKA_START_DATE; as DateType),
    attrmap_element!(CKA_END_DATE; as DateType),
    attrmap_element!(CKA_MODULUS; as BytesType),
    attrmap_element!(CKA_MODULUS_BITS; as NumType),
    attrmap_element!(CKA_PUBLIC_EXPONENT; as BytesType),
    attrmap_element!(CKA_PRIVATE_EXPONENT; as BytesType),
    attrmap_element!(CKA_PRIME_1; as BytesType),
    attrmap_element!(CKA_PRIME_2; as BytesType),
    attrmap_element!(CKA_EXPONENT_1; as BytesType),
    attrmap_element!(CKA_EXPONENT_2; as BytesType),
    attrmap_element!(CKA_COEFFICIENT; as BytesType),
    attrmap_element!(CKA_PUBLIC_KEY_INFO; as BytesType),
    attrmap_element!(CKA_PRIME; as BytesType),
    attrmap_element!(CKA_SUBPRIME; as BytesType),
    attrmap_element!(CKA_BASE; as BytesType),
    attrmap_element!(CKA_PRIME_BITS; as NumType),
    attrmap_element!(CKA_SUBPRIME_BITS; as NumType),
    attrmap_element!(CKA_VALUE_BITS; as NumType),
    attrmap_element!(CKA_VALUE_LEN; as NumType),
    attrmap_element!(CKA_EXTRACTABLE; as BoolType),
    attrmap_element!(CKA_LOCAL; as BoolType),
    attrmap_element!(CKA_NEVER_EXTRACTABLE; as BoolType),
    attrmap_element!(CKA_ALWAYS_SENSITIVE; as BoolType),
    attrmap_element!(CKA_KEY_GEN_MECHANISM; as NumType),
    attrmap_element!(CKA_MODIFIABLE; as BoolType),
    attrmap_element!(CKA_COPYABLE; as BoolType),
    attrmap_element!(CKA_DESTROYABLE; as BoolType),
    attrmap_element!(CKA_EC_PARAMS; as BytesType),
    attrmap_element!(CKA_EC_POINT; as BytesType),
    attrmap_element!(CKA_ALWAYS_AUTHENTICATE; as BoolType),
    attrmap_element!(CKA_WRAP_WITH_TRUSTED; as BoolType),
    attrmap_element!(CKA_HW_FEATURE_TYPE; as NumType),
    attrmap_element!(CKA_RESET_ON_INIT; as BoolType),
    attrmap_element!(CKA_HAS_RESET; as BoolType),
    attrmap_element!(CKA_MECHANISM_TYPE; as NumType),
    attrmap_element!(CKA_PROFILE_ID; as NumType),
    attrmap_element!(CKA_WRAP_TEMPLATE; as BytesType),
    attrmap_element!(CKA_UNWRAP_TEMPLATE; as BytesType),
    attrmap_element!(CKA_DERIVE_TEMPLATE; as BytesType),
    attrmap_element!(CKA_ALLOWED_MECHANISMS; as UlongArrayType),
    attrmap_element!(CKA_TRUST_SERVER_AUTH; as NumType),
    attrmap_element!(CKA_TRUST_CLIENT_AUTH; as NumType),
    attrmap_element!(CKA_TRUST_CODE_SIGNING; as NumType),
    attrmap_element!(CKA_TRUST_EMAIL_PROTECTION; as NumType),
    attrmap_element!(CKA_TRUST_STEP_UP_APPROVED; as BoolType),
    attrmap_element!(CKA_CERT_SHA1_HASH; as BytesType),
    attrmap_element!(CKA_CERT_MD5_HASH; as BytesType),
];


/// A Rust native attribute record holding an owned copy of the value
///
/// The value is optional: a record without a value is the semantic form
/// of the wire's "unavailable information" length sentinel, which marks
/// attributes that are invalid for an object or whose value may not be
/// revealed. It is distinct from a present, empty value.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Attribute {
    ck_type: CK_ULONG,
    value: Option<Vec<u8>>,
}

impl Attribute {
    /// Returns the attribute 'type', which is the attribute ID
    pub fn get_type(&self) -> CK_ULONG {
        self.ck_type
    }

    /// Returns a reference to the value, None when unavailable
    pub fn get_value(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }

    /// Returns the name of the attribute as an allocated String,
    /// falling back to the numeric id for unknown attributes
    pub fn name(&self) -> String {
        match Attrmap::search_by_id(self.ck_type) {
            Some(a) => return a.name.to_string(),
            None => return self.ck_type.to_string(),
        }
    }

    /// Returns the value as a boolean
    ///
    /// Fails with CKR_ATTRIBUTE_TYPE_INVALID if this is not a boolean
    /// attribute, and with CKR_ATTRIBUTE_SENSITIVE if the value is
    /// unavailable
    pub fn to_bool(&self) -> Result<bool> {
        if AttrType::attr_id_to_attrtype(self.ck_type)? != AttrType::BoolType
        {
            return Err(CKR_ATTRIBUTE_TYPE_INVALID)?;
        }
        match self.value {
            Some(ref v) => bytes_to_bool(v),
            None => Err(Error::ck_rv_with_errmsg(
                CKR_ATTRIBUTE_SENSITIVE,
                format!("{} has no value", self.name()),
            )),
        }
    }

    /// Returns the value as a CK_ULONG
    ///
    /// Fails with CKR_ATTRIBUTE_TYPE_INVALID if this is not a numeric
    /// attribute, and with CKR_ATTRIBUTE_SENSITIVE if the value is
    /// unavailable
    pub fn to_ulong(&self) -> Result<CK_ULONG> {
        if AttrType::attr_id_to_attrtype(self.ck_type)? != AttrType::NumType {
            return Err(CKR_ATTRIBUTE_TYPE_INVALID)?;
        }
        match self.value {
            Some(ref v) => bytes_to_ulong(v),
            None => Err(Error::ck_rv_with_errmsg(
                CKR_ATTRIBUTE_SENSITIVE,
                format!("{} has no value", self.name()),
            )),
        }
    }

    /// Zeroizes the value
    pub fn zeroize(&mut self) {
        if let Some(ref mut v) = self.value {
            zeromem(v.as_mut_slice());
        }
    }

    /// Creates an attribute from a bool, stored as a canonical CK_BBOOL
    pub fn from_bool(t: CK_ULONG, val: bool) -> Attribute {
        Attribute {
            ck_type: t,
            value: Some(vec![if val { CK_TRUE } else { CK_FALSE }]),
        }
    }

    /// Creates an attribute from a CK_ULONG, stored at native width
    pub fn from_ulong(t: CK_ULONG, val: CK_ULONG) -> Attribute {
        Attribute {
            ck_type: t,
            value: Some(Vec::from(val.to_ne_bytes())),
        }
    }

    /// Creates an attribute from a String
    pub fn from_string(t: CK_ULONG, val: String) -> Attribute {
        Attribute {
            ck_type: t,
            value: Some(Vec::from(val.as_bytes())),
        }
    }

    /// Creates an attribute from a `Vec<u8>`, taking ownership
    pub fn from_bytes(t: CK_ULONG, val: Vec<u8>) -> Attribute {
        Attribute {
            ck_type: t,
            value: Some(val),
        }
    }

    /// Creates an attribute with no available value
    pub fn unavailable(t: CK_ULONG) -> Attribute {
        Attribute {
            ck_type: t,
            value: None,
        }
    }

    /// Copies one wire cell into a record
    ///
    /// The declared length is trusted; a cell declaring the
    /// "unavailable information" sentinel yields a record without a
    /// value, a null pointer or zero length yields an empty one
    pub fn from_ck_attr(attr: &CK_ATTRIBUTE) -> Attribute {
        Attribute {
            ck_type: attr.type_,
            value: if attr.ulValueLen == CK_UNAVAILABLE_INFORMATION {
                None
            } else {
                Some(bytes_to_vec!(attr.pValue, attr.ulValueLen))
            },
        }
    }
}

/// Copies a wire template into owned attribute records
///
/// Caller memory is only read, never freed or modified, and the
/// declared lengths are trusted as the interface requires. This
/// direction cannot fail: unavailable cells simply become records
/// without a value.
pub fn to_attributes(template: &[CK_ATTRIBUTE]) -> Vec<Attribute> {
    let mut attrs = Vec::<Attribute>::with_capacity(template.len());
    for ck_attr in template {
        attrs.push(Attribute::from_ck_attr(ck_attr));
    }
    attrs
}

/// Writes attribute records back into a caller template, cell by cell
///
/// Records pair with cells positionally. For each pair, one of the
/// standard's response protocols applies:
/// - a record without a value marks the cell unavailable;
/// - a cell with a null value pointer receives only the required
///   length (the caller is sizing its buffers);
/// - a cell declaring enough capacity receives the bytes and the
///   effective length;
/// - an undersized cell marks unavailable and the whole call reports
///   CKR_BUFFER_TOO_SMALL, but only after every remaining cell has
///   been processed, so callers get complete length information from
///   a single failed call.
pub fn from_attributes(
    attrs: &[Attribute],
    template: &mut [CK_ATTRIBUTE],
) -> Result<()> {
    let mut too_small = false;
    for (attr, ck_attr) in attrs.iter().zip(template.iter_mut()) {
        #[cfg(feature = "log")]
        {
            use log::trace;
            trace!(
                "{}",
                crate::trace::attr_trace(attr, crate::log::trace_sensitive())
            );
        }
        let value = match attr.get_value() {
            Some(v) => v,
            None => {
                ck_attr.ulValueLen = CK_UNAVAILABLE_INFORMATION;
                continue;
            }
        };
        let needed = CK_ULONG::try_from(value.len())?;
        if ck_attr.pValue.is_null() {
            ck_attr.ulValueLen = needed;
        } else if ck_attr.ulValueLen >= needed {
            unsafe {
                std::ptr::copy_nonoverlapping(
                    value.as_ptr(),
                    byte_ptr!(ck_attr.pValue),
                    value.len(),
                );
            }
            ck_attr.ulValueLen = needed;
        } else {
            ck_attr.ulValueLen = CK_UNAVAILABLE_INFORMATION;
            too_small = true;
        }
    }
    if too_small {
        return Err(CKR_BUFFER_TOO_SMALL)?;
    }
    Ok(())
}

/// Helper object to represent managed arrays of CK_ATTRIBUTEs
///
/// This object uses Cow memory to optimize keeping around arrays passed
/// from a FFI caller without the need to copy the memory content.
/// However if something attempts to modify the array, a copy is
/// created on the fly, and the copy is then modified.
#[derive(Debug)]
pub struct CkAttrs<'a> {
    /// Storage for owned byte buffers backing some of the cells.
    v: Vec<Vec<u8>>,
    /// The actual `CK_ATTRIBUTE` array, potentially borrowed or owned.
    p: Cow<'a, [CK_ATTRIBUTE]>,
    /// When set, owned buffers are wiped on drop.
    pub zeroize: bool,
}

impl Drop for CkAttrs<'_> {
    fn drop(&mut self) {
        if self.zeroize {
            while let Some(mut elem) = self.v.pop() {
                zeromem(elem.as_mut_slice());
            }
        }
    }
}

impl<'a> CkAttrs<'a> {
    /// Creates a new empty managed array of CK_ATTRIBUTEs
    pub fn new() -> CkAttrs<'static> {
        Self::with_capacity(0)
    }

    /// Creates a new empty managed array of CK_ATTRIBUTEs
    /// with the specified capacity
    pub fn with_capacity(capacity: usize) -> CkAttrs<'static> {
        CkAttrs {
            v: Vec::new(),
            p: Cow::Owned(Vec::with_capacity(capacity)),
            zeroize: false,
        }
    }

    /// Creates an array from a raw pointer pointing to a list of
    /// CK_ATTRIBUTE elements in memory and a size "l"
    ///
    /// A null pointer is an argument error on the part of the caller,
    /// not a marshaling failure
    pub fn from_ptr(
        a: *mut CK_ATTRIBUTE,
        l: CK_ULONG,
    ) -> Result<CkAttrs<'static>> {
        if a.is_null() {
            return Err(CKR_ARGUMENTS_BAD)?;
        }
        Ok(CkAttrs {
            v: Vec::new(),
            p: Cow::Borrowed(unsafe {
                std::slice::from_raw_parts(a, usize::try_from(l)?)
            }),
            zeroize: false,
        })
    }

    /// Creates an array from a slice of CK_ATTRIBUTEs
    pub fn from(a: &'a [CK_ATTRIBUTE]) -> CkAttrs<'a> {
        CkAttrs {
            v: Vec::new(),
            p: Cow::Borrowed(a),
            zeroize: false,
        }
    }

    fn attr_from_last(&self, typ: CK_ATTRIBUTE_TYPE) -> Result<CK_ATTRIBUTE> {
        if let Some(r) = self.v.last() {
            Ok(CK_ATTRIBUTE {
                type_: typ,
                pValue: void_ptr!(r.as_ptr()),
                ulValueLen: CK_ULONG::try_from(r.len())?,
            })
        } else {
            Err(CKR_FUNCTION_FAILED)?
        }
    }

    /// Add a new attribute to the array, the value is defined as a slice
    ///
    /// This internally copies the slice to an allocated vector
    pub fn add_owned_slice(
        &mut self,
        typ: CK_ATTRIBUTE_TYPE,
        val: &[u8],
    ) -> Result<()> {
        self.v.push(val.to_vec());
        let a = self.attr_from_last(typ)?;
        self.p.to_mut().push(a);
        Ok(())
    }

    /// Add a new attribute to the array, the value is a CK_ULONG
    ///
    /// This internally copies the ulong to an allocated vector of bytes
    pub fn add_owned_ulong(
        &mut self,
        typ: CK_ATTRIBUTE_TYPE,
        val: CK_ULONG,
    ) -> Result<()> {
        self.v.push(val.to_ne_bytes().to_vec());
        let a = self.attr_from_last(typ)?;
        self.p.to_mut().push(a);
        Ok(())
    }

    /// Add a new attribute to the array, the value is a CK_BBOOL
    ///
    /// This internally copies the bool to an allocated vector of bytes
    pub fn add_owned_bool(
        &mut self,
        typ: CK_ATTRIBUTE_TYPE,
        val: CK_BBOOL,
    ) -> Result<()> {
        self.v.push(val.to_ne_bytes().to_vec());
        let a = self.attr_from_last(typ)?;
        self.p.to_mut().push(a);
        Ok(())
    }

    /// Add a new attribute to the array, the value is a vector of bytes
    ///
    /// The vector ownership is transferred to the array
    pub fn add_vec(
        &mut self,
        typ: CK_ATTRIBUTE_TYPE,
        val: Vec<u8>,
    ) -> Result<()> {
        self.v.push(val);
        let a = self.attr_from_last(typ)?;
        self.p.to_mut().push(a);
        Ok(())
    }

    /// Returns the number of elements in the array
    pub fn len(&self) -> usize {
        self.p.as_ref().len()
    }

    /// Returns true when the array holds no attributes
    pub fn is_empty(&self) -> bool {
        self.p.as_ref().is_empty()
    }

    /// Returns a pointer to the array of CK_ATTRIBUTEs
    pub fn as_ptr(&self) -> *const CK_ATTRIBUTE {
        self.p.as_ref().as_ptr()
    }

    /// Returns a mutable pointer to the array of CK_ATTRIBUTEs
    pub fn as_mut_ptr(&mut self) -> *mut CK_ATTRIBUTE {
        self.p.to_mut().as_mut_ptr()
    }

    /// Returns a reference to the internal CK_ATTRIBUTEs array
    pub fn as_slice(&'a self) -> &'a [CK_ATTRIBUTE] {
        self.p.as_ref()
    }

    /// Finds an attribute by attribute id and return a reference to it
    /// if present, None if not found
    pub fn find_attr(
        &'a self,
        typ: CK_ATTRIBUTE_TYPE,
    ) -> Option<&'a CK_ATTRIBUTE> {
        match self.p.as_ref().iter().find(|a| a.type_ == typ) {
            Some(ref a) => Some(a),
            None => None,
        }
    }
}
