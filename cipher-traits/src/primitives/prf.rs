use thiserror::Error;
use zeroize::Zeroizing;

use crate::algorithms::PrfAlgorithm;

/// Models a pseudo random function as used during IKEv2 key derivation.
///
/// A PRF is created unkeyed, receives its key through [Prf::set_key] and then produces blocks
/// of exactly [Prf::block_size] bytes for caller supplied seeds. Keys can be replaced at any
/// time; the old key material is erased. Dropping an instance erases all retained secrets.
///
/// Most implementations are pure functions of key and seed. Some (see [Prf::is_stateful])
/// evolve an internal state with every call, which is why generating output takes `&mut self`.
/// Stateless implementations additionally implement [SharedPrf].
///
/// Example of a caller chaining PRF outputs, generic over the implementation:
/// ```
/// use ikeprf_cipher_traits::primitives::{Prf, PrfError};
///
/// fn first_two_blocks<P: Prf>(prf: &mut P, key: &[u8], seed: &[u8]) -> Result<Vec<u8>, PrfError> {
///     prf.set_key(key)?;
///     let mut stream = prf.allocate_bytes(seed)?.to_vec();
///     let mut next = stream.clone();
///     next.extend_from_slice(seed);
///     stream.extend_from_slice(&prf.allocate_bytes(&next)?);
///     Ok(stream)
/// }
/// ```
pub trait Prf {
    /// The identifier of this PRF
    fn algorithm(&self) -> PrfAlgorithm;

    /// Number of bytes produced by one call to [Prf::get_bytes]
    fn block_size(&self) -> usize;

    /// The nominal key length.
    ///
    /// This is a suggestion only; apart from AES-XCBC every implementation accepts keys of any
    /// length and conditions them as its algorithm prescribes.
    fn key_size(&self) -> usize;

    /// Whether the output depends on previous calls since the last [Prf::set_key]
    fn is_stateful(&self) -> bool {
        false
    }

    /// Installs a new key, erasing the previous one.
    ///
    /// On error the instance keeps its previous key (or stays unkeyed).
    fn set_key(&mut self, key: &[u8]) -> Result<(), Error>;

    /// Writes one block of pseudo random output for `seed` into `out`.
    ///
    /// `out` must be exactly [Prf::block_size] bytes long.
    fn get_bytes(&mut self, seed: &[u8], out: &mut [u8]) -> Result<(), Error>;

    /// Like [Prf::get_bytes] but allocates the output. The buffer is erased when dropped.
    fn allocate_bytes(&mut self, seed: &[u8]) -> Result<Zeroizing<Vec<u8>>, Error> {
        let mut out = Zeroizing::new(vec![0u8; self.block_size()]);
        self.get_bytes(seed, &mut out)?;
        Ok(out)
    }
}

/// A [Prf] whose output is a pure function of key and seed.
///
/// Generating output only needs a shared reference, so one keyed instance can serve several
/// threads as long as nobody rekeys it at the same time (which the borrow checker enforces).
pub trait SharedPrf: Prf {
    /// Writes one block of output for `seed` into `out`, like [Prf::get_bytes].
    fn compute(&self, seed: &[u8], out: &mut [u8]) -> Result<(), Error>;
}

/// Checks that an output buffer has room for exactly one block
///
/// ```
/// use ikeprf_cipher_traits::primitives::{check_output_len, PrfError};
///
/// assert!(check_output_len(&[0u8; 20], 20).is_ok());
/// assert_eq!(
///     check_output_len(&[0u8; 16], 20),
///     Err(PrfError::InvalidOutputLength { expected: 20, actual: 16 })
/// );
/// ```
pub fn check_output_len(out: &[u8], block_size: usize) -> Result<(), Error> {
    match out.len() {
        len if len == block_size => Ok(()),
        actual => Err(Error::InvalidOutputLength {
            expected: block_size,
            actual,
        }),
    }
}

/// The error returned by PRF operations and PRF lookup
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No implementation is available for the given identifier.
    #[error("unsupported pseudo random function {0}")]
    UnsupportedAlgorithm(u16),

    /// The key does not have the length an algorithm with fixed key size requires.
    #[error("malformed key: expected {expected} bytes, got {actual}")]
    MalformedKey { expected: usize, actual: usize },

    /// Output was requested before a key was set.
    #[error("pseudo random function used before a key was set")]
    Unkeyed,

    /// The output buffer is not exactly one block long.
    #[error("output buffer must be {expected} bytes, got {actual}")]
    InvalidOutputLength { expected: usize, actual: usize },

    /// An internal error occurred. This should never happen and indicates an error in the
    /// PRF implementation or the primitive backing it.
    #[error("internal error")]
    InternalError,
}
