//! The random number generator of FIPS 186-2 change notice 1 (appendix 3.1) with the SHA-1 based
//! G function of appendix 3.3, used as the PRF of EAP-SIM and EAP-AKA.
//!
//! Unlike every other PRF in this crate the generator is stateful: the secret XKEY advances
//! after each block, so the same seed produces a different block on every call. One call runs
//! one iteration of the generator and yields b = 160 bits. Two calls with the same seed give
//! the 40 byte output of a full generator round (m = 2).

use log::trace;
use zeroize::Zeroizing;

use ikeprf_cipher_traits::algorithms::prf_fips_sha1_160::{BLOCK_LEN, KEY_LEN};
use ikeprf_cipher_traits::primitives::{check_output_len, Prf, PrfError, SharedPrf};
use ikeprf_cipher_traits::PrfAlgorithm;
use ikeprf_constant_time::{add, increment};
use ikeprf_secret_memory::Secret;

use super::keyed_sha1::KeyedSha1Prf;

/// Fits `input` into exactly b bytes.
///
/// Shorter inputs are right aligned behind leading zeros, i.e. read as a big-endian number.
/// Longer inputs are reduced modulo 2^b, which keeps their trailing b bytes.
fn chunk_mod(input: &[u8], dst: &mut [u8; KEY_LEN]) {
    let keep = input.len().min(KEY_LEN);
    let (pad, tail) = dst.split_at_mut(KEY_LEN - keep);
    pad.fill(0);
    tail.copy_from_slice(&input[input.len() - keep..]);
}

/// FIPS 186-2 generator over SHA-1
///
/// # Examples
///
///```rust
/// use hex_literal::hex;
/// use ikeprf_ciphers::subtle::fips_prf::FipsPrf;
/// use ikeprf_cipher_traits::primitives::Prf;
///
/// let mut prf = FipsPrf::new();
/// prf.set_key(&hex!("bd029bbe7f51960bcf9edb2b61f06f0feb5a38b6"))?;
/// assert!(prf.is_stateful());
///
/// let first = prf.allocate_bytes(&[0x00])?;
/// let second = prf.allocate_bytes(&[0x00])?;
/// assert_eq!(&first[..], hex!("2070b3223dba372fde1c0ffc7b2e3b498b260614"));
/// assert_eq!(&second[..], hex!("3c6c18bacb0f6c55babb13788e20d737a3275116"));
/// # Ok::<(), ikeprf_cipher_traits::primitives::PrfError>(())
///```
///
/// Cloning snapshots the generator; the clone and the original continue independently from the
/// same XKEY.
#[derive(Clone)]
pub struct FipsPrf {
    xkey: Option<Secret<KEY_LEN>>,
    g: KeyedSha1Prf,
}

impl FipsPrf {
    /// Creates an unkeyed instance
    pub fn new() -> Self {
        Self {
            xkey: None,
            g: KeyedSha1Prf::with_standard_iv(),
        }
    }
}

impl Default for FipsPrf {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FipsPrf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FipsPrf")
            .field("keyed", &self.xkey.is_some())
            .finish()
    }
}

impl Prf for FipsPrf {
    fn algorithm(&self) -> PrfAlgorithm {
        PrfAlgorithm::FipsSha1_160
    }

    fn block_size(&self) -> usize {
        BLOCK_LEN
    }

    fn key_size(&self) -> usize {
        KEY_LEN
    }

    fn is_stateful(&self) -> bool {
        true
    }

    /// Sets XKEY, resetting the generator.
    ///
    /// The key is brought to 20 bytes the same way seeds are: shorter keys are zero extended
    /// in front, longer keys are truncated to their last 20 bytes.
    fn set_key(&mut self, key: &[u8]) -> Result<(), PrfError> {
        trace!("{}: setting {} byte XKEY", self.algorithm(), key.len());
        let mut xkey = Secret::<KEY_LEN>::zero();
        chunk_mod(key, xkey.secret_mut());
        self.xkey = Some(xkey);
        Ok(())
    }

    fn get_bytes(&mut self, seed: &[u8], out: &mut [u8]) -> Result<(), PrfError> {
        let xkey = self.xkey.as_mut().ok_or(PrfError::Unkeyed)?;
        check_output_len(out, BLOCK_LEN)?;

        // XVAL = (XKEY + XSEED) mod 2^b
        let mut xval = Zeroizing::new([0u8; KEY_LEN]);
        chunk_mod(seed, &mut xval);
        add(&mut xval[..], xkey.secret());

        // w = G(t, XVAL)
        let mut w = Zeroizing::new([0u8; BLOCK_LEN]);
        self.g.compute(&xval[..], &mut w[..])?;

        // XKEY = (1 + XKEY + w) mod 2^b
        let xkey = xkey.secret_mut();
        add(xkey, &w[..]);
        increment(xkey);

        out.copy_from_slice(&w[..]);
        Ok(())
    }
}
