//! HMAC (RFC 2104) as a pseudo random function, generic over the digest.
//!
//! IKEv2 uses HMAC with MD5, SHA-1 and the SHA-2 family directly as its PRF; the output is the
//! untruncated MAC.

use std::fmt;
use std::marker::PhantomData;

use hmac::digest::core_api::BlockSizeUser;
use hmac::digest::generic_array::GenericArray;
use hmac::digest::{Digest, FixedOutputReset};
use hmac::{Mac, SimpleHmac};
use log::trace;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};

use ikeprf_cipher_traits::algorithms::{
    prf_hmac_md5, prf_hmac_sha1, prf_hmac_sha2_256, prf_hmac_sha2_384, prf_hmac_sha2_512,
};
use ikeprf_cipher_traits::primitives::{check_output_len, Prf, PrfError, SharedPrf};
use ikeprf_cipher_traits::PrfAlgorithm;
use ikeprf_secret_memory::{Scrubbed, SecretBytes};

/// A digest that can back an [HmacPrf]
pub trait HmacDigest: Digest + BlockSizeUser + FixedOutputReset + Clone {
    /// Identifier of HMAC over this digest
    const ALGORITHM: PrfAlgorithm;
    /// Nominal key length, equal to the digest output length
    const KEY_LEN: usize;
    /// Output length of the digest
    const BLOCK_LEN: usize;
}

impl HmacDigest for Md5 {
    const ALGORITHM: PrfAlgorithm = PrfAlgorithm::HmacMd5;
    const KEY_LEN: usize = prf_hmac_md5::KEY_LEN;
    const BLOCK_LEN: usize = prf_hmac_md5::BLOCK_LEN;
}

impl HmacDigest for Sha1 {
    const ALGORITHM: PrfAlgorithm = PrfAlgorithm::HmacSha1;
    const KEY_LEN: usize = prf_hmac_sha1::KEY_LEN;
    const BLOCK_LEN: usize = prf_hmac_sha1::BLOCK_LEN;
}

impl HmacDigest for Sha256 {
    const ALGORITHM: PrfAlgorithm = PrfAlgorithm::HmacSha2_256;
    const KEY_LEN: usize = prf_hmac_sha2_256::KEY_LEN;
    const BLOCK_LEN: usize = prf_hmac_sha2_256::BLOCK_LEN;
}

impl HmacDigest for Sha384 {
    const ALGORITHM: PrfAlgorithm = PrfAlgorithm::HmacSha2_384;
    const KEY_LEN: usize = prf_hmac_sha2_384::KEY_LEN;
    const BLOCK_LEN: usize = prf_hmac_sha2_384::BLOCK_LEN;
}

impl HmacDigest for Sha512 {
    const ALGORITHM: PrfAlgorithm = PrfAlgorithm::HmacSha2_512;
    const KEY_LEN: usize = prf_hmac_sha2_512::KEY_LEN;
    const BLOCK_LEN: usize = prf_hmac_sha2_512::BLOCK_LEN;
}

/// HMAC over the digest `D`.
///
/// The raw key is stored; HMAC's own key conditioning (hashing keys longer than the digest's
/// block, zero padding shorter ones) happens on every call, so keys of any length are accepted.
///
/// # Examples
///```rust
/// use hex_literal::hex;
/// use ikeprf_ciphers::subtle::hmac::HmacSha1Prf;
/// use ikeprf_cipher_traits::primitives::Prf;
///
/// let mut prf = HmacSha1Prf::new();
/// prf.set_key(&[0x0b; 20])?;
///
/// let mut out = [0u8; 20];
/// prf.get_bytes(b"Hi There", &mut out)?;
/// assert_eq!(out, hex!("b617318655057264e28bc0b6fb378c8ef146be00"));
/// # Ok::<(), ikeprf_cipher_traits::primitives::PrfError>(())
///```
pub struct HmacPrf<D: HmacDigest> {
    key: Option<SecretBytes>,
    _digest: PhantomData<fn() -> D>,
}

pub type HmacMd5Prf = HmacPrf<Md5>;
pub type HmacSha1Prf = HmacPrf<Sha1>;
pub type HmacSha2_256Prf = HmacPrf<Sha256>;
pub type HmacSha2_384Prf = HmacPrf<Sha384>;
pub type HmacSha2_512Prf = HmacPrf<Sha512>;

impl<D: HmacDigest> HmacPrf<D> {
    /// Creates an unkeyed instance
    pub fn new() -> Self {
        Self {
            key: None,
            _digest: PhantomData,
        }
    }
}

impl<D: HmacDigest> Default for HmacPrf<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: HmacDigest> Clone for HmacPrf<D> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _digest: PhantomData,
        }
    }
}

impl<D: HmacDigest> fmt::Debug for HmacPrf<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacPrf")
            .field("algorithm", &D::ALGORITHM)
            .field("key", &self.key)
            .finish()
    }
}

impl<D: HmacDigest> Prf for HmacPrf<D> {
    fn algorithm(&self) -> PrfAlgorithm {
        D::ALGORITHM
    }

    fn block_size(&self) -> usize {
        D::BLOCK_LEN
    }

    fn key_size(&self) -> usize {
        D::KEY_LEN
    }

    fn set_key(&mut self, key: &[u8]) -> Result<(), PrfError> {
        trace!("{}: setting {} byte key", D::ALGORITHM, key.len());
        match &mut self.key {
            Some(stored) => stored.replace(key),
            None => self.key = Some(SecretBytes::from_slice(key)),
        }
        Ok(())
    }

    fn get_bytes(&mut self, seed: &[u8], out: &mut [u8]) -> Result<(), PrfError> {
        self.compute(seed, out)
    }
}

impl<D: HmacDigest> SharedPrf for HmacPrf<D> {
    fn compute(&self, seed: &[u8], out: &mut [u8]) -> Result<(), PrfError> {
        let key = self.key.as_ref().ok_or(PrfError::Unkeyed)?;
        check_output_len(out, D::BLOCK_LEN)?;

        // The MAC state holds the key XORed with ipad and opad, so it is wiped after use.
        // Temporaries inside the hmac crate itself are out of reach.
        // Only fails for fixed size keys, which HMAC does not have
        let mut mac = Scrubbed::new(
            SimpleHmac::<D>::new_from_slice(key.secret()).map_err(|_| PrfError::InternalError)?,
        );
        mac.update(seed);
        // Writes the tag straight into the caller's buffer; no copy of it stays behind
        FixedOutputReset::finalize_into_reset(&mut *mac, GenericArray::from_mut_slice(out));
        Ok(())
    }
}
