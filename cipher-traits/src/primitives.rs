//! Traits for cryptographic primitives used in ikeprf, specifically pseudo random functions.

pub(crate) mod prf;

pub use prf::{check_output_len, Error as PrfError, Prf, SharedPrf};
