//! Checks that no heap block is released while it still holds key material.
//!
//! The test binary installs an allocator that inspects every block before it is freed and counts
//! the blocks containing one of the currently watched patterns. Keys are built from a canary on
//! the stack. For every PRF the watched patterns are the forms in which it retains that key: the
//! raw key, the HMAC pad blocks, the XCBC subkeys, the generator state or the keyed SHA-1 IV.
//! Any hit means one of them reached the allocator unerased.
//!
//! Everything runs in a single test so no concurrently running test can disturb the counter.

use std::alloc::{GlobalAlloc, Layout, System};
use std::hint::black_box;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::Aes128;

use ikeprf_cipher_traits::{Prf, PrfAlgorithm};
use ikeprf_ciphers::PrfRegistry;

const PATTERN_LEN: usize = 16;
const MAX_PATTERNS: usize = 4;

type Pattern = [u8; PATTERN_LEN];

const CANARY: Pattern = *b"\xde\xad\xbe\xefsecret-key\x99\x77";

/// Key length used for every variant but XCBC
const LONG_KEY_LEN: usize = 40;

static HITS: AtomicUsize = AtomicUsize::new(0);
static WATCHED: Mutex<[Option<Pattern>; MAX_PATTERNS]> = Mutex::new([None; MAX_PATTERNS]);

struct CanaryScanner;

unsafe impl GlobalAlloc for CanaryScanner {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let watched = *WATCHED.lock().unwrap_or_else(|e| e.into_inner());
        let block = std::slice::from_raw_parts(ptr, layout.size());
        let found = watched
            .iter()
            .flatten()
            .any(|pattern| block.windows(PATTERN_LEN).any(|w| w == pattern));
        if found {
            HITS.fetch_add(1, Ordering::SeqCst);
        }
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static ALLOCATOR: CanaryScanner = CanaryScanner;

fn hits() -> usize {
    HITS.swap(0, Ordering::SeqCst)
}

fn watch(patterns: &[Pattern]) {
    let mut watched = WATCHED.lock().unwrap_or_else(|e| e.into_inner());
    *watched = [None; MAX_PATTERNS];
    for (slot, pattern) in watched.iter_mut().zip(patterns) {
        *slot = Some(*pattern);
    }
}

fn xor_with(pattern: &Pattern, byte: u8) -> Pattern {
    pattern.map(|b| b ^ byte)
}

/// The canary at both ends, so it survives conditioning that keeps either the first or the
/// last bytes of a key
fn long_key() -> [u8; LONG_KEY_LEN] {
    let mut key = [0x33u8; LONG_KEY_LEN];
    key[..PATTERN_LEN].copy_from_slice(&CANARY);
    key[LONG_KEY_LEN - PATTERN_LEN..].copy_from_slice(&CANARY);
    key
}

/// K1, K2 and K3 as derived from the canary key
fn xcbc_subkeys() -> [Pattern; 3] {
    let aes = Aes128::new(GenericArray::from_slice(&CANARY));
    [0x01u8, 0x02, 0x03].map(|c| {
        let mut k = [c; PATTERN_LEN];
        aes.encrypt_block(GenericArray::from_mut_slice(&mut k));
        k
    })
}

/// The first four words of the SHA-1 IV with the key mixed in, laid out as they sit in memory
fn keyed_sha1_iv(key: &[u8]) -> Pattern {
    const SHA1_IV: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];
    let mut pattern = [0u8; PATTERN_LEN];
    for ((word, chunk), dst) in SHA1_IV
        .iter()
        .zip(key.chunks_exact(4))
        .zip(pattern.chunks_exact_mut(4))
    {
        let k = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        dst.copy_from_slice(&(word ^ k).to_ne_bytes());
    }
    pattern
}

/// The key to use for `alg` and the patterns in which the PRF retains it
fn key_and_patterns(alg: PrfAlgorithm) -> (Vec<u8>, Vec<Pattern>) {
    match alg {
        PrfAlgorithm::Aes128Xcbc => {
            let [k1, k2, k3] = xcbc_subkeys();
            (CANARY.to_vec(), vec![CANARY, k1, k2, k3])
        }
        PrfAlgorithm::KeyedSha1 => {
            let key = long_key();
            (key.to_vec(), vec![CANARY, keyed_sha1_iv(&key)])
        }
        // the generator keeps the trailing 20 bytes as XKEY
        PrfAlgorithm::FipsSha1_160 => (long_key().to_vec(), vec![CANARY]),
        // HMAC keeps the raw key; the MAC state holds it XORed with ipad and opad
        _ => (
            long_key().to_vec(),
            vec![CANARY, xor_with(&CANARY, 0x36), xor_with(&CANARY, 0x5c)],
        ),
    }
}

#[test]
fn freed_memory_never_contains_keys() {
    let registry = PrfRegistry::with_builtin();
    let algorithms: Vec<_> = registry.algorithms().collect();
    for alg in algorithms {
        let (key, patterns) = key_and_patterns(alg);
        let other = [0x11u8; 16];
        watch(&patterns);

        // a plain heap copy of each pattern must be detected
        for pattern in patterns.iter() {
            hits();
            drop(black_box(pattern.to_vec()));
            assert!(hits() > 0, "{alg}: the allocator does not see freed blocks");
        }

        hits();
        let mut prf = Box::new(registry.create(alg).unwrap());
        prf.set_key(&key).unwrap();
        let out = prf.allocate_bytes(b"some seed").unwrap();
        drop(out);
        assert_eq!(hits(), 0, "{alg}: key leaked while in use");

        prf.set_key(&key).unwrap();
        prf.set_key(&other).unwrap();
        assert_eq!(hits(), 0, "{alg}: old key leaked by rekeying");

        prf.set_key(&key).unwrap();
        drop(black_box(prf));
        assert_eq!(hits(), 0, "{alg}: key leaked on drop");
    }
    watch(&[]);
}
