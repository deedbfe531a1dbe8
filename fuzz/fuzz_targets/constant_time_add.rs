#![no_main]

use libfuzzer_sys::fuzz_target;

use ikeprf_constant_time::add;

fuzz_target!(|input: ([u8; 16], [u8; 16])| {
    let (a, b) = input;
    let mut sum = a;
    add(&mut sum, &b);
    assert_eq!(
        u128::from_be_bytes(sum),
        u128::from_be_bytes(a).wrapping_add(u128::from_be_bytes(b))
    );
});
