#![no_main]
extern crate arbitrary;

use libfuzzer_sys::fuzz_target;

use ikeprf_cipher_traits::{Prf, PrfAlgorithm};
use ikeprf_ciphers::AnyPrf;

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Input {
    pub keys: Vec<Box<[u8]>>,
    pub seed: Box<[u8]>,
}

// The output after any sequence of rekeys must only depend on the last accepted key
fuzz_target!(|input: Input| {
    for alg in PrfAlgorithm::ALL {
        let Ok(mut prf) = AnyPrf::new(alg) else {
            continue;
        };
        let mut last = None;
        for key in input.keys.iter() {
            if prf.set_key(key).is_ok() {
                last = Some(key);
            }
        }
        let Some(key) = last else {
            assert!(prf.allocate_bytes(&input.seed).is_err());
            continue;
        };

        let mut fresh = AnyPrf::new(alg).unwrap();
        fresh.set_key(key).unwrap();
        assert_eq!(
            prf.allocate_bytes(&input.seed).unwrap(),
            fresh.allocate_bytes(&input.seed).unwrap()
        );
    }
});
