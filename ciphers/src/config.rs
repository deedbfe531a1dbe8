//! Selection of the pseudo random functions a registry may hand out, readable from a TOML file.
//!
//! ```toml
//! # refuse the legacy algorithms
//! disabled = ["hmac-md5", "fips-sha1-160"]
//! # allow identifiers >= 1024
//! private_use = true
//! ```
//!
//! Every field is optional; an empty file permits everything this crate implements.

use std::{fs, path::Path};

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

use ikeprf_cipher_traits::PrfAlgorithm;

use crate::AnyPrf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrfConfig {
    /// algorithms that must not be created, by their kebab-case name
    ///
    /// Examples:
    /// - `["hmac-md5"]`
    #[serde(default)]
    pub disabled: Vec<PrfAlgorithm>,

    /// whether identifiers from the private use range (1024 and above) are permitted
    #[serde(default = "default_private_use")]
    pub private_use: bool,
}

fn default_private_use() -> bool {
    true
}

impl Default for PrfConfig {
    fn default() -> Self {
        Self {
            disabled: Vec::new(),
            private_use: default_private_use(),
        }
    }
}

impl PrfConfig {
    /// parse a configuration from TOML source
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("invalid PRF configuration")
    }

    /// load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(p: P) -> anyhow::Result<Self> {
        let p = p.as_ref();
        let src = fs::read_to_string(p)
            .with_context(|| format!("could not read PRF configuration {p:?}"))?;
        Self::from_toml_str(&src).with_context(|| format!("while loading {p:?}"))
    }

    /// Write a config to a file
    pub fn store<P: AsRef<Path>>(&self, p: P) -> anyhow::Result<()> {
        fs::write(&p, toml::to_string_pretty(self)?)
            .with_context(|| format!("could not write PRF configuration {:?}", p.as_ref()))?;
        Ok(())
    }

    /// Whether `alg` may be created under this configuration
    ///
    /// ```
    /// use ikeprf_ciphers::PrfConfig;
    /// use ikeprf_cipher_traits::PrfAlgorithm;
    ///
    /// let config = PrfConfig::from_toml_str("private_use = false")?;
    /// assert!(config.permits(PrfAlgorithm::HmacSha1));
    /// assert!(!config.permits(PrfAlgorithm::KeyedSha1));
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn permits(&self, alg: PrfAlgorithm) -> bool {
        (self.private_use || !alg.is_private_use()) && !self.disabled.contains(&alg)
    }

    /// Validate a configuration
    ///
    /// Rejects configurations under which no implemented algorithm could be created.
    pub fn validate(&self) -> anyhow::Result<()> {
        let usable = PrfAlgorithm::ALL
            .into_iter()
            .filter(|alg| AnyPrf::new(*alg).is_ok())
            .any(|alg| self.permits(alg));
        ensure!(
            usable,
            "the PRF configuration disables every implemented algorithm"
        );
        Ok(())
    }
}
