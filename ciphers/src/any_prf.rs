use ikeprf_cipher_traits::primitives::{Prf, PrfError, SharedPrf};
use ikeprf_cipher_traits::PrfAlgorithm;

use crate::subtle::fips_prf::FipsPrf;
use crate::subtle::hmac::{
    HmacMd5Prf, HmacSha1Prf, HmacSha2_256Prf, HmacSha2_384Prf, HmacSha2_512Prf,
};
use crate::subtle::keyed_sha1::KeyedSha1Prf;
use crate::subtle::xcbc::XcbcPrf;
use crate::PrfConstructor;

/// Any of the pseudo random functions implemented by this crate.
///
/// This is what [crate::PrfRegistry] hands out. It implements [Prf] by forwarding to the
/// variant; [AnyPrf::as_shared] gives access to [SharedPrf] for the stateless ones.
///
/// ```
/// use ikeprf_ciphers::AnyPrf;
/// use ikeprf_cipher_traits::{Prf, PrfAlgorithm};
///
/// let hmac = AnyPrf::new(PrfAlgorithm::HmacSha2_256)?;
/// assert_eq!(hmac.block_size(), 32);
/// assert!(hmac.as_shared().is_some());
///
/// let fips = AnyPrf::new(PrfAlgorithm::FipsSha1_160)?;
/// assert!(fips.is_stateful());
/// assert!(fips.as_shared().is_none());
///
/// assert!(AnyPrf::new(PrfAlgorithm::HmacTiger).is_err());
/// # Ok::<(), ikeprf_cipher_traits::PrfError>(())
/// ```
#[derive(Debug, Clone)]
pub enum AnyPrf {
    HmacMd5(HmacMd5Prf),
    HmacSha1(HmacSha1Prf),
    HmacSha2_256(HmacSha2_256Prf),
    HmacSha2_384(HmacSha2_384Prf),
    HmacSha2_512(HmacSha2_512Prf),
    Aes128Xcbc(XcbcPrf),
    FipsSha1_160(FipsPrf),
    KeyedSha1(KeyedSha1Prf),
}

/// Forwards a method call to whichever variant is active
macro_rules! dispatch {
    ($self:expr, $prf:ident => $call:expr) => {
        match $self {
            AnyPrf::HmacMd5($prf) => $call,
            AnyPrf::HmacSha1($prf) => $call,
            AnyPrf::HmacSha2_256($prf) => $call,
            AnyPrf::HmacSha2_384($prf) => $call,
            AnyPrf::HmacSha2_512($prf) => $call,
            AnyPrf::Aes128Xcbc($prf) => $call,
            AnyPrf::FipsSha1_160($prf) => $call,
            AnyPrf::KeyedSha1($prf) => $call,
        }
    };
}

impl AnyPrf {
    /// The constructor of an unkeyed `alg` instance, `None` for identifiers without an
    /// implementation. This is the table [crate::PrfRegistry::with_builtin] is filled from.
    pub fn constructor(alg: PrfAlgorithm) -> Option<PrfConstructor> {
        use PrfAlgorithm as A;
        let constructor: PrfConstructor = match alg {
            A::HmacMd5 => || Self::HmacMd5(HmacMd5Prf::new()),
            A::HmacSha1 => || Self::HmacSha1(HmacSha1Prf::new()),
            A::HmacSha2_256 => || Self::HmacSha2_256(HmacSha2_256Prf::new()),
            A::HmacSha2_384 => || Self::HmacSha2_384(HmacSha2_384Prf::new()),
            A::HmacSha2_512 => || Self::HmacSha2_512(HmacSha2_512Prf::new()),
            A::Aes128Xcbc => || Self::Aes128Xcbc(XcbcPrf::new()),
            A::FipsSha1_160 => || Self::FipsSha1_160(FipsPrf::new()),
            A::KeyedSha1 => || Self::KeyedSha1(KeyedSha1Prf::new()),
            A::HmacTiger | A::FipsDes => return None,
        };
        Some(constructor)
    }

    /// Creates an unkeyed instance of `alg`, bypassing any registry.
    ///
    /// Fails with [PrfError::UnsupportedAlgorithm] for identifiers without an implementation.
    pub fn new(alg: PrfAlgorithm) -> Result<Self, PrfError> {
        let constructor =
            Self::constructor(alg).ok_or(PrfError::UnsupportedAlgorithm(alg.code()))?;
        Ok(constructor())
    }

    /// A shared view for variants whose output only depends on key and seed; `None` for the
    /// FIPS 186-2 generator.
    pub fn as_shared(&self) -> Option<&dyn SharedPrf> {
        match self {
            Self::HmacMd5(prf) => Some(prf),
            Self::HmacSha1(prf) => Some(prf),
            Self::HmacSha2_256(prf) => Some(prf),
            Self::HmacSha2_384(prf) => Some(prf),
            Self::HmacSha2_512(prf) => Some(prf),
            Self::Aes128Xcbc(prf) => Some(prf),
            Self::KeyedSha1(prf) => Some(prf),
            Self::FipsSha1_160(_) => None,
        }
    }
}

impl Prf for AnyPrf {
    fn algorithm(&self) -> PrfAlgorithm {
        dispatch!(self, prf => prf.algorithm())
    }

    fn block_size(&self) -> usize {
        dispatch!(self, prf => prf.block_size())
    }

    fn key_size(&self) -> usize {
        dispatch!(self, prf => prf.key_size())
    }

    fn is_stateful(&self) -> bool {
        dispatch!(self, prf => prf.is_stateful())
    }

    fn set_key(&mut self, key: &[u8]) -> Result<(), PrfError> {
        dispatch!(self, prf => prf.set_key(key))
    }

    fn get_bytes(&mut self, seed: &[u8], out: &mut [u8]) -> Result<(), PrfError> {
        dispatch!(self, prf => prf.get_bytes(seed, out))
    }
}
