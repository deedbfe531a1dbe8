#![no_main]

use libfuzzer_sys::fuzz_target;

use ikeprf_ciphers::{PrfConfig, PrfRegistry};

fuzz_target!(|input: &str| {
    if let Ok(config) = PrfConfig::from_toml_str(input) {
        let registry = PrfRegistry::from_config(&config);
        assert!(registry.algorithms().all(|alg| config.permits(alg)));
    }
});
