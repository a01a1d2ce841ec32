// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::*;
use hex;

use attribute::*;
use error::{Error, ErrorKind, Result};
use mechanism::*;
use misc::*;
use pkcs11::vendor::*;
use pkcs11::*;

#[macro_use]
mod util;
use util::*;

mod attrs;


mod mechs;

mod scalars;

mod trace;
