//! AES-XCBC-MAC (RFC 3566) used as AES-XCBC-PRF-128.
//!
//! Only 128 bit keys are accepted; any other length is reported as [PrfError::MalformedKey]
//! instead of being conditioned.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::Aes128;
use log::trace;
use zeroize::Zeroizing;

use ikeprf_cipher_traits::algorithms::prf_aes128_xcbc::{BLOCK_LEN, KEY_LEN};
use ikeprf_cipher_traits::primitives::{check_output_len, Prf, PrfError, SharedPrf};
use ikeprf_cipher_traits::PrfAlgorithm;
use ikeprf_constant_time::xor;
use ikeprf_secret_memory::Secret;

/// Constant blocks encrypted under the user key to derive K1, K2 and K3
const K1_SEED: [u8; BLOCK_LEN] = [0x01; BLOCK_LEN];
const K2_SEED: [u8; BLOCK_LEN] = [0x02; BLOCK_LEN];
const K3_SEED: [u8; BLOCK_LEN] = [0x03; BLOCK_LEN];

/// The derived key schedule. `k1` keys the CBC-MAC, `k2` and `k3` whiten the last block.
#[derive(Clone)]
struct Subkeys {
    k1: Aes128,
    k2: Secret<BLOCK_LEN>,
    k3: Secret<BLOCK_LEN>,
}

impl Subkeys {
    fn derive(key: &[u8; KEY_LEN]) -> Self {
        let base = Aes128::new(GenericArray::from_slice(key));
        let derive_one = |seed: &[u8; BLOCK_LEN]| {
            let mut k = Secret::<BLOCK_LEN>::from_slice(seed);
            base.encrypt_block(GenericArray::from_mut_slice(k.secret_mut()));
            k
        };

        let k1 = derive_one(&K1_SEED);
        Self {
            k1: Aes128::new(GenericArray::from_slice(k1.secret())),
            k2: derive_one(&K2_SEED),
            k3: derive_one(&K3_SEED),
        }
    }
}

/// AES-XCBC-PRF-128
///
/// # Examples
///```rust
/// use hex_literal::hex;
/// use ikeprf_ciphers::subtle::xcbc::XcbcPrf;
/// use ikeprf_cipher_traits::primitives::{Prf, PrfError};
///
/// let mut prf = XcbcPrf::new();
/// assert_eq!(
///     prf.set_key(&[0u8; 20]),
///     Err(PrfError::MalformedKey { expected: 16, actual: 20 })
/// );
///
/// prf.set_key(&hex!("000102030405060708090a0b0c0d0e0f"))?;
/// let out = prf.allocate_bytes(&hex!("000102030405060708090a0b0c0d0e0f10111213"))?;
/// assert_eq!(&out[..], hex!("47f51b4564966215b8985c63055ed308"));
/// # Ok::<(), PrfError>(())
///```
#[derive(Clone, Default)]
pub struct XcbcPrf {
    subkeys: Option<Subkeys>,
}

impl XcbcPrf {
    /// Creates an unkeyed instance
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for XcbcPrf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XcbcPrf")
            .field("keyed", &self.subkeys.is_some())
            .finish()
    }
}

impl Prf for XcbcPrf {
    fn algorithm(&self) -> PrfAlgorithm {
        PrfAlgorithm::Aes128Xcbc
    }

    fn block_size(&self) -> usize {
        BLOCK_LEN
    }

    fn key_size(&self) -> usize {
        KEY_LEN
    }

    fn set_key(&mut self, key: &[u8]) -> Result<(), PrfError> {
        let key: &[u8; KEY_LEN] = key.try_into().map_err(|_| PrfError::MalformedKey {
            expected: KEY_LEN,
            actual: key.len(),
        })?;
        trace!("{}: deriving subkeys", self.algorithm());
        // The old schedule zeroizes itself when it is dropped here
        self.subkeys = Some(Subkeys::derive(key));
        Ok(())
    }

    fn get_bytes(&mut self, seed: &[u8], out: &mut [u8]) -> Result<(), PrfError> {
        self.compute(seed, out)
    }
}

impl SharedPrf for XcbcPrf {
    fn compute(&self, seed: &[u8], out: &mut [u8]) -> Result<(), PrfError> {
        let keys = self.subkeys.as_ref().ok_or(PrfError::Unkeyed)?;
        check_output_len(out, BLOCK_LEN)?;

        // The last block is processed separately, even if it is complete. An empty seed
        // consists of a single, incomplete last block.
        let complete_last = !seed.is_empty() && seed.len() % BLOCK_LEN == 0;
        let split = if complete_last {
            seed.len() - BLOCK_LEN
        } else {
            seed.len() - seed.len() % BLOCK_LEN
        };
        let (body, tail) = seed.split_at(split);

        let mut e = Zeroizing::new([0u8; BLOCK_LEN]);
        for block in body.chunks_exact(BLOCK_LEN) {
            xor(e.as_mut(), block);
            keys.k1.encrypt_block(GenericArray::from_mut_slice(e.as_mut()));
        }

        let mut last = Zeroizing::new([0u8; BLOCK_LEN]);
        last[..tail.len()].copy_from_slice(tail);
        if complete_last {
            xor(last.as_mut(), keys.k2.secret());
        } else {
            last[tail.len()] = 0x80;
            xor(last.as_mut(), keys.k3.secret());
        }
        xor(e.as_mut(), &last[..]);
        keys.k1.encrypt_block(GenericArray::from_mut_slice(e.as_mut()));

        out.copy_from_slice(&e[..]);
        Ok(())
    }
}
