//! Keyed SHA-1, the PRF of EAP-AKA (RFC 4187) and the G function of the FIPS 186-2 generator.
//!
//! This is deliberately *not* SHA-1. The key is XORed into the initial chaining value instead
//! of the standard constants, the seed is run through the compression function without
//! Merkle-Damgård length padding, and the raw chaining value is the output. Protocols that use
//! this construction define it this way; do not "fix" it.
//!
//! The compression function runs exactly once per call. The seed is zero filled to one 64 byte
//! block; only the first 64 bytes of a longer seed are used.

use log::trace;
use sha1::digest::generic_array::GenericArray;
use sha1::digest::typenum::U64;
use zeroize::{Zeroize, Zeroizing};

use ikeprf_cipher_traits::algorithms::prf_keyed_sha1::{BLOCK_LEN, KEY_LEN};
use ikeprf_cipher_traits::primitives::{check_output_len, Prf, PrfError, SharedPrf};
use ikeprf_cipher_traits::PrfAlgorithm;

/// Number of 32 bit words in the SHA-1 chaining value
const STATE_WORDS: usize = 5;

/// Bytes consumed by one invocation of the compression function
pub const COMPRESSION_BLOCK_LEN: usize = 64;

/// The standard SHA-1 initial chaining value (FIPS 180-4, section 5.3.1)
const SHA1_IV: [u32; STATE_WORDS] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

type Block = GenericArray<u8, U64>;
type State = Zeroizing<[u32; STATE_WORDS]>;

/// Keyed SHA-1
///
/// # Examples
///
/// With an empty key the construction is the bare SHA-1 compression function, so feeding a block
/// that already carries SHA-1 padding yields the regular digest:
///```rust
/// use hex_literal::hex;
/// use ikeprf_ciphers::subtle::keyed_sha1::KeyedSha1Prf;
/// use ikeprf_cipher_traits::primitives::Prf;
///
/// let mut block = [0u8; 64];
/// block[..3].copy_from_slice(b"abc");
/// block[3] = 0x80;
/// block[63] = 24; // message length in bits
///
/// let mut prf = KeyedSha1Prf::new();
/// prf.set_key(&[])?;
/// let out = prf.allocate_bytes(&block)?;
/// assert_eq!(&out[..], hex!("a9993e364706816aba3e25717850c26c9cd0d89d")); // SHA-1("abc")
/// # Ok::<(), ikeprf_cipher_traits::primitives::PrfError>(())
///```
#[derive(Clone, Default)]
pub struct KeyedSha1Prf {
    /// The initial chaining value with the key mixed in; the key itself is not kept
    iv: Option<State>,
}

impl KeyedSha1Prf {
    /// Creates an unkeyed instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an instance using the standard SHA-1 IV, equivalent to setting an empty key
    pub fn with_standard_iv() -> Self {
        Self {
            iv: Some(Zeroizing::new(SHA1_IV)),
        }
    }

    /// Runs the compression function once over the first block of `seed`, starting from `iv`,
    /// and writes the resulting chaining value to `out` in big-endian byte order
    fn compress_seed(iv: &State, seed: &[u8], out: &mut [u8]) {
        let mut state: State = iv.clone();
        let mut block = [Block::default()];

        let len = seed.len().min(COMPRESSION_BLOCK_LEN);
        block[0][..len].copy_from_slice(&seed[..len]);
        sha1::compress(&mut state, &block);
        block[0].as_mut_slice().zeroize();

        for (word, dst) in state.iter().zip(out.chunks_exact_mut(4)) {
            dst.copy_from_slice(&word.to_be_bytes());
        }
    }
}

impl std::fmt::Debug for KeyedSha1Prf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyedSha1Prf")
            .field("keyed", &self.iv.is_some())
            .finish()
    }
}

impl Prf for KeyedSha1Prf {
    fn algorithm(&self) -> PrfAlgorithm {
        PrfAlgorithm::KeyedSha1
    }

    fn block_size(&self) -> usize {
        BLOCK_LEN
    }

    fn key_size(&self) -> usize {
        KEY_LEN
    }

    /// XORs the key, read as big-endian 32 bit words, into the SHA-1 IV.
    ///
    /// Only complete words are used and at most five of them; shorter keys leave the remaining
    /// IV words untouched, bytes beyond the fifth word are ignored.
    fn set_key(&mut self, key: &[u8]) -> Result<(), PrfError> {
        trace!("{}: setting {} byte key", self.algorithm(), key.len());
        let mut iv: State = Zeroizing::new(SHA1_IV);
        for (word, chunk) in iv.iter_mut().zip(key.chunks_exact(4)) {
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(chunk);
            *word ^= u32::from_be_bytes(bytes);
            bytes.zeroize();
        }
        self.iv = Some(iv);
        Ok(())
    }

    fn get_bytes(&mut self, seed: &[u8], out: &mut [u8]) -> Result<(), PrfError> {
        self.compute(seed, out)
    }
}

impl SharedPrf for KeyedSha1Prf {
    fn compute(&self, seed: &[u8], out: &mut [u8]) -> Result<(), PrfError> {
        let iv = self.iv.as_ref().ok_or(PrfError::Unkeyed)?;
        check_output_len(out, BLOCK_LEN)?;
        Self::compress_seed(iv, seed, out);
        Ok(())
    }
}
