//! Pseudo random functions for IKEv2 style key derivation.
//!
//! The crate implements HMAC over MD5, SHA-1 and SHA-2, AES-XCBC-PRF-128, the FIPS 186-2
//! generator and keyed SHA-1 behind the [Prf] trait from `ikeprf-cipher-traits`. Callers usually
//! obtain an instance from a [PrfRegistry] by identifier:
//!
//! ```
//! use hex_literal::hex;
//! use ikeprf_ciphers::PrfRegistry;
//! use ikeprf_cipher_traits::{Prf, PrfAlgorithm};
//!
//! let registry = PrfRegistry::default();
//! let mut prf = registry.create(PrfAlgorithm::HmacSha1)?;
//! prf.set_key(&[0x0b; 20])?;
//!
//! // RFC 2202, test case 1
//! let mut out = [0u8; 20];
//! prf.get_bytes(b"Hi There", &mut out)?;
//! assert_eq!(out, hex!("b617318655057264e28bc0b6fb378c8ef146be00"));
//! # Ok::<(), ikeprf_cipher_traits::PrfError>(())
//! ```

use static_assertions::const_assert_eq;

pub mod any_prf;
pub mod config;
pub mod registry;
pub mod subtle;

pub use any_prf::AnyPrf;
pub use config::PrfConfig;
pub use ikeprf_cipher_traits::primitives::{Prf, PrfError, SharedPrf};
pub use ikeprf_cipher_traits::PrfAlgorithm;
pub use registry::{PrfConstructor, PrfRegistry};

use ikeprf_cipher_traits::algorithms::{prf_aes128_xcbc, prf_fips_sha1_160, prf_keyed_sha1};

// the generator emits exactly one output of its G function per call
const_assert_eq!(prf_fips_sha1_160::BLOCK_LEN, prf_keyed_sha1::BLOCK_LEN);
const_assert_eq!(prf_fips_sha1_160::KEY_LEN, prf_keyed_sha1::BLOCK_LEN);
// AES has 128 bit blocks
const_assert_eq!(prf_aes128_xcbc::BLOCK_LEN, 16);
