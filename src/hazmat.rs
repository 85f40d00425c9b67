//! ⚠️ Low-level "hazmat" RSA functions.
//!
//! # ☢️️ WARNING: HAZARDOUS API ☢️
//!
//! This module holds functions that apply RSA's core exponentiation
//! primitives to raw integers without adding or removing padding. Padding
//! is what makes the construction in [`crate::pkcs1v15`] reversible and
//! well-formed, so there are very few valid uses cases for this API.
//!
//! We do NOT recommend using it to implement any algorithm which has not
//! received extensive peer review by cryptographers.

pub use crate::algorithms::rsa::{rsa_decrypt, rsa_decrypt_and_check, rsa_encrypt};
