//! Traits and identifiers for the pseudo random functions used in ikeprf.
//!
//! The concrete constructions (HMAC, AES-XCBC, the FIPS 186-2 generator and keyed SHA-1) live
//! in `ikeprf-ciphers`; this crate only contains the contract they share and the identifier
//! space used to pick one of them.

pub mod algorithms;
pub mod primitives;

pub use algorithms::PrfAlgorithm;
pub use primitives::*;
