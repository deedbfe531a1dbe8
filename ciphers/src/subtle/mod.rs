//! The individual pseudo random function implementations.
//!
//! Most callers want [crate::PrfRegistry] or [crate::AnyPrf] instead of naming these types
//! directly.

pub mod fips_prf;
pub mod hmac;
pub mod keyed_sha1;
pub mod xcbc;
