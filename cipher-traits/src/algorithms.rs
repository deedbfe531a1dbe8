//! Identifiers and fixed parameters of the supported pseudo random functions.
//!
//! The numeric identifiers are the values of IKEv2 transform type 2 (RFC 7296 section 3.3.2).
//! Algorithms that are not defined by IKEv2 live in the private use range, starting at
//! [PrfAlgorithm::PRIVATE_USE_START]. The numbers are exchanged during negotiation, so they must
//! never change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::primitives::PrfError;

/// Identifies a pseudo random function.
///
/// ```
/// use ikeprf_cipher_traits::PrfAlgorithm;
///
/// assert_eq!(PrfAlgorithm::HmacSha1.code(), 2);
/// assert_eq!(PrfAlgorithm::try_from(1027)?, PrfAlgorithm::KeyedSha1);
/// assert!(PrfAlgorithm::KeyedSha1.is_private_use());
/// assert!(PrfAlgorithm::try_from(1024).is_err());
/// # Ok::<(), ikeprf_cipher_traits::PrfError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u16)]
pub enum PrfAlgorithm {
    /// HMAC over MD5 (RFC 2104)
    HmacMd5 = 1,
    /// HMAC over SHA-1 (RFC 2104)
    HmacSha1 = 2,
    /// HMAC over Tiger; part of the identifier space but not implemented
    HmacTiger = 3,
    /// AES-XCBC-PRF-128 (RFC 4434)
    Aes128Xcbc = 4,
    /// HMAC over SHA2-256 (RFC 4868)
    HmacSha2_256 = 5,
    /// HMAC over SHA2-384 (RFC 4868)
    HmacSha2_384 = 6,
    /// HMAC over SHA2-512 (RFC 4868)
    HmacSha2_512 = 7,
    /// FIPS 186-2 (change notice 1) random number generator with the SHA-1 based G function
    FipsSha1_160 = 1025,
    /// FIPS 186-2 generator with a DES based G function; not implemented
    FipsDes = 1026,
    /// SHA-1 with the key XORed into the IV and no finalization, as used by EAP-AKA
    KeyedSha1 = 1027,
}

impl PrfAlgorithm {
    /// First identifier of the private use range. The value itself marks an undefined PRF.
    pub const PRIVATE_USE_START: u16 = 1024;

    /// Every identifier known to this crate, in numeric order.
    pub const ALL: [PrfAlgorithm; 10] = [
        Self::HmacMd5,
        Self::HmacSha1,
        Self::HmacTiger,
        Self::Aes128Xcbc,
        Self::HmacSha2_256,
        Self::HmacSha2_384,
        Self::HmacSha2_512,
        Self::FipsSha1_160,
        Self::FipsDes,
        Self::KeyedSha1,
    ];

    /// The numeric identifier as exchanged on the wire
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Whether this algorithm lives in the implementation specific identifier range
    pub const fn is_private_use(self) -> bool {
        self.code() >= Self::PRIVATE_USE_START
    }

    /// Short lower case name, used in logs and configuration files
    pub const fn name(self) -> &'static str {
        match self {
            Self::HmacMd5 => "hmac-md5",
            Self::HmacSha1 => "hmac-sha1",
            Self::HmacTiger => "hmac-tiger",
            Self::Aes128Xcbc => "aes128-xcbc",
            Self::HmacSha2_256 => "hmac-sha2-256",
            Self::HmacSha2_384 => "hmac-sha2-384",
            Self::HmacSha2_512 => "hmac-sha2-512",
            Self::FipsSha1_160 => "fips-sha1-160",
            Self::FipsDes => "fips-des",
            Self::KeyedSha1 => "keyed-sha1",
        }
    }
}

impl TryFrom<u16> for PrfAlgorithm {
    type Error = PrfError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.code() == code)
            .ok_or(PrfError::UnsupportedAlgorithm(code))
    }
}

impl From<PrfAlgorithm> for u16 {
    fn from(alg: PrfAlgorithm) -> Self {
        alg.code()
    }
}

impl fmt::Display for PrfAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub mod prf_hmac_md5 {
    pub const KEY_LEN: usize = 16;
    pub const BLOCK_LEN: usize = 16;
}

pub mod prf_hmac_sha1 {
    pub const KEY_LEN: usize = 20;
    pub const BLOCK_LEN: usize = 20;
}

pub mod prf_hmac_sha2_256 {
    pub const KEY_LEN: usize = 32;
    pub const BLOCK_LEN: usize = 32;
}

pub mod prf_hmac_sha2_384 {
    pub const KEY_LEN: usize = 48;
    pub const BLOCK_LEN: usize = 48;
}

pub mod prf_hmac_sha2_512 {
    pub const KEY_LEN: usize = 64;
    pub const BLOCK_LEN: usize = 64;
}

pub mod prf_aes128_xcbc {
    // RFC 3566 only defines 128 bit keys
    pub const KEY_LEN: usize = 16;
    pub const BLOCK_LEN: usize = 16;
}

pub mod prf_fips_sha1_160 {
    /// Size of the generator state XKEY, b = 160 bits
    pub const KEY_LEN: usize = 20;
    pub const BLOCK_LEN: usize = 20;
}

pub mod prf_keyed_sha1 {
    pub const KEY_LEN: usize = 20;
    /// Size of the SHA-1 chaining value
    pub const BLOCK_LEN: usize = 20;
}
