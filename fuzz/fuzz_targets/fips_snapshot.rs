#![no_main]
extern crate arbitrary;

use libfuzzer_sys::fuzz_target;

use ikeprf_cipher_traits::Prf;
use ikeprf_ciphers::subtle::fips_prf::FipsPrf;

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Input {
    pub key: Box<[u8]>,
    pub seeds: Vec<Box<[u8]>>,
}

fuzz_target!(|input: Input| {
    let mut prf = FipsPrf::new();
    prf.set_key(&input.key).unwrap();

    let mut snapshot = prf.clone();
    for seed in input.seeds.iter() {
        assert_eq!(
            prf.allocate_bytes(seed).unwrap(),
            snapshot.allocate_bytes(seed).unwrap()
        );
    }
});
