#![no_main]
extern crate arbitrary;

use libfuzzer_sys::fuzz_target;

use ikeprf_cipher_traits::{Prf, PrfError};
use ikeprf_ciphers::PrfRegistry;

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Input {
    pub algorithm: u16,
    pub key: Box<[u8]>,
    pub seed: Box<[u8]>,
}

fuzz_target!(|input: Input| {
    let registry = PrfRegistry::with_builtin();
    let Ok(mut prf) = registry.create_by_id(input.algorithm) else {
        return;
    };

    match prf.set_key(&input.key) {
        Ok(()) => {}
        Err(PrfError::MalformedKey { .. }) => {
            assert_eq!(prf.allocate_bytes(&input.seed), Err(PrfError::Unkeyed));
            return;
        }
        Err(e) => panic!("unexpected error {e}"),
    }

    let mut out = vec![0u8; prf.block_size()];
    if let Some(shared) = prf.as_shared() {
        shared.compute(&input.seed, &mut out).unwrap();
    } else {
        prf.clone().get_bytes(&input.seed, &mut out).unwrap();
    }
    assert_eq!(&out[..], &prf.allocate_bytes(&input.seed).unwrap()[..]);
});
