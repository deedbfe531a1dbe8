//! Lookup of pseudo random functions by algorithm identifier.

use std::collections::BTreeMap;

use log::{debug, warn};

use ikeprf_cipher_traits::primitives::PrfError;
use ikeprf_cipher_traits::PrfAlgorithm;

use crate::{AnyPrf, PrfConfig};

/// Creates an unkeyed instance
pub type PrfConstructor = fn() -> AnyPrf;

/// Maps algorithm identifiers to constructors.
///
/// ```
/// use ikeprf_ciphers::PrfRegistry;
/// use ikeprf_cipher_traits::{Prf, PrfAlgorithm, PrfError};
///
/// let registry = PrfRegistry::with_builtin();
/// let mut prf = registry.create_by_id(2)?; // HMAC-SHA1
/// prf.set_key(&[0x0b; 20])?;
/// assert_eq!(prf.allocate_bytes(b"Hi There")?.len(), 20);
///
/// assert_eq!(
///     registry.create_by_id(3).err(),
///     Some(PrfError::UnsupportedAlgorithm(3)) // HMAC-TIGER is not implemented
/// );
/// # Ok::<(), PrfError>(())
/// ```
#[derive(Clone)]
pub struct PrfRegistry {
    constructors: BTreeMap<PrfAlgorithm, PrfConstructor>,
}

impl PrfRegistry {
    /// A registry without any algorithm
    pub fn empty() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// A registry containing every algorithm implemented by this crate
    pub fn with_builtin() -> Self {
        let mut registry = Self::empty();
        for alg in PrfAlgorithm::ALL {
            if let Some(constructor) = AnyPrf::constructor(alg) {
                registry.register(alg, constructor);
            }
        }
        registry
    }

    /// The builtin algorithms minus those `config` refuses
    pub fn from_config(config: &PrfConfig) -> Self {
        let mut registry = Self::with_builtin();
        for alg in registry.algorithms().collect::<Vec<_>>() {
            if !config.permits(alg) {
                debug!("{alg} disabled by configuration");
                registry.unregister(alg);
            }
        }
        registry
    }

    /// Registers `constructor` for `alg`, returning the constructor it replaces
    pub fn register(
        &mut self,
        alg: PrfAlgorithm,
        constructor: PrfConstructor,
    ) -> Option<PrfConstructor> {
        self.constructors.insert(alg, constructor)
    }

    /// Removes `alg`, returning its constructor if it was registered
    pub fn unregister(&mut self, alg: PrfAlgorithm) -> Option<PrfConstructor> {
        self.constructors.remove(&alg)
    }

    pub fn supports(&self, alg: PrfAlgorithm) -> bool {
        self.constructors.contains_key(&alg)
    }

    /// The registered algorithms in numeric order
    pub fn algorithms(&self) -> impl Iterator<Item = PrfAlgorithm> + '_ {
        self.constructors.keys().copied()
    }

    /// Creates an unkeyed instance of `alg`
    pub fn create(&self, alg: PrfAlgorithm) -> Result<AnyPrf, PrfError> {
        match self.constructors.get(&alg) {
            Some(constructor) => {
                debug!("creating {alg} instance");
                Ok(constructor())
            }
            None => {
                warn!("no implementation registered for {alg} ({})", alg.code());
                Err(PrfError::UnsupportedAlgorithm(alg.code()))
            }
        }
    }

    /// Creates an unkeyed instance of the algorithm with the numeric identifier `code`
    pub fn create_by_id(&self, code: u16) -> Result<AnyPrf, PrfError> {
        let alg = PrfAlgorithm::try_from(code).map_err(|e| {
            warn!("unknown pseudo random function identifier {code}");
            e
        })?;
        self.create(alg)
    }
}

impl Default for PrfRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl std::fmt::Debug for PrfRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.algorithms()).finish()
    }
}
