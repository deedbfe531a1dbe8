use std::io::Write;
use std::thread;

use hex_literal::hex;
use rand::Rng;

use ikeprf_cipher_traits::{Prf, PrfAlgorithm, PrfError};
use ikeprf_ciphers::{AnyPrf, PrfConfig, PrfRegistry};

fn setup_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A key every variant accepts
fn key_for(alg: PrfAlgorithm) -> Vec<u8> {
    match alg {
        PrfAlgorithm::Aes128Xcbc => vec![0x42; 16],
        _ => b"a key of some arbitrary length".to_vec(),
    }
}

#[test]
fn hmac_sha1_end_to_end() {
    setup_logging();
    let registry = PrfRegistry::with_builtin();
    let mut prf = registry
        .create_by_id(PrfAlgorithm::HmacSha1.code())
        .unwrap();
    prf.set_key(&[0x0b; 20]).unwrap();

    let mut out = [0u8; 20];
    prf.get_bytes(b"Hi There", &mut out).unwrap();
    assert_eq!(out, hex!("b617318655057264e28bc0b6fb378c8ef146be00"));
}

#[test]
fn lookup_failures() {
    setup_logging();
    let registry = PrfRegistry::default();
    // HMAC-TIGER, FIPS-DES, the private range marker, never assigned
    for code in [3u16, 1026, 1024, 9] {
        assert_eq!(
            registry.create_by_id(code).err(),
            Some(PrfError::UnsupportedAlgorithm(code))
        );
    }
}

#[test]
fn block_sizes() {
    let registry = PrfRegistry::default();
    let expected = [
        (PrfAlgorithm::HmacMd5, 16),
        (PrfAlgorithm::HmacSha1, 20),
        (PrfAlgorithm::Aes128Xcbc, 16),
        (PrfAlgorithm::HmacSha2_256, 32),
        (PrfAlgorithm::HmacSha2_384, 48),
        (PrfAlgorithm::HmacSha2_512, 64),
        (PrfAlgorithm::FipsSha1_160, 20),
        (PrfAlgorithm::KeyedSha1, 20),
    ];
    for (alg, size) in expected {
        let mut prf = registry.create(alg).unwrap();
        assert_eq!(prf.block_size(), size, "{alg}");
        prf.set_key(&key_for(alg)).unwrap();
        assert_eq!(prf.allocate_bytes(b"seed").unwrap().len(), size, "{alg}");
    }
}

#[test]
fn stateless_variants_agree_with_themselves() {
    setup_logging();
    let registry = PrfRegistry::default();
    let mut rng = rand::thread_rng();

    for alg in registry.algorithms() {
        let mut prf = registry.create(alg).unwrap();
        if prf.is_stateful() {
            continue;
        }
        prf.set_key(&key_for(alg)).unwrap();

        for len in [0, 1, 16, 20, 64, 65, 200] {
            let mut seed = vec![0u8; len];
            rng.fill(&mut seed[..]);

            let mut out = vec![0u8; prf.block_size()];
            prf.get_bytes(&seed, &mut out).unwrap();
            let allocated = prf.allocate_bytes(&seed).unwrap();
            let again = prf.allocate_bytes(&seed).unwrap();
            assert_eq!(&out[..], &allocated[..], "{alg}, {len} byte seed");
            assert_eq!(allocated, again, "{alg}, {len} byte seed");
        }
    }
}

#[test]
fn generator_differs_between_calls_and_restarts_on_rekey() {
    let mut prf = PrfRegistry::default()
        .create(PrfAlgorithm::FipsSha1_160)
        .unwrap();
    let key = [0x17; 20];
    prf.set_key(&key).unwrap();
    let first = prf.allocate_bytes(b"seed").unwrap();
    let second = prf.allocate_bytes(b"seed").unwrap();
    assert_ne!(first, second);

    prf.set_key(&key).unwrap();
    assert_eq!(prf.allocate_bytes(b"seed").unwrap(), first);
}

#[test]
fn any_key_length_except_for_xcbc() {
    let registry = PrfRegistry::default();
    for alg in registry.algorithms() {
        let mut prf = registry.create(alg).unwrap();
        for len in [0, 1, 63, 64, 129, 1000] {
            let result = prf.set_key(&vec![0xa5; len]);
            if alg == PrfAlgorithm::Aes128Xcbc {
                assert_eq!(
                    result,
                    Err(PrfError::MalformedKey {
                        expected: 16,
                        actual: len
                    })
                );
            } else {
                assert!(result.is_ok(), "{alg} rejected a {len} byte key");
                assert!(prf.allocate_bytes(b"seed").is_ok());
            }
        }
    }
}

#[test]
fn wrong_output_buffer() {
    let registry = PrfRegistry::default();
    for alg in registry.algorithms() {
        let mut prf = registry.create(alg).unwrap();
        prf.set_key(&key_for(alg)).unwrap();
        let size = prf.block_size();
        for len in [0, size - 1, size + 1] {
            let mut out = vec![0u8; len];
            assert_eq!(
                prf.get_bytes(b"seed", &mut out),
                Err(PrfError::InvalidOutputLength {
                    expected: size,
                    actual: len
                }),
                "{alg}"
            );
        }
    }
}

#[test]
fn concurrent_readers() {
    let registry = PrfRegistry::default();
    for alg in [
        PrfAlgorithm::HmacSha2_256,
        PrfAlgorithm::Aes128Xcbc,
        PrfAlgorithm::KeyedSha1,
    ] {
        let mut prf = registry.create(alg).unwrap();
        prf.set_key(&key_for(alg)).unwrap();
        let expected = prf.allocate_bytes(b"shared seed").unwrap();

        let prf: &AnyPrf = &prf;
        thread::scope(|s| {
            let workers: Vec<_> = (0..4)
                .map(|_| {
                    s.spawn(move || {
                        let shared = prf.as_shared().unwrap();
                        let mut out = vec![0u8; prf.block_size()];
                        for _ in 0..100 {
                            shared.compute(b"shared seed", &mut out).unwrap();
                        }
                        out
                    })
                })
                .collect();
            for worker in workers {
                assert_eq!(&worker.join().unwrap()[..], &expected[..]);
            }
        });
    }
}

#[test]
fn registry_from_config_file() {
    setup_logging();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"disabled = ["hmac-md5"]"#).unwrap();
    writeln!(file, "private_use = false").unwrap();

    let config = PrfConfig::load(file.path()).unwrap();
    config.validate().unwrap();
    let registry = PrfRegistry::from_config(&config);

    assert_eq!(
        registry.algorithms().collect::<Vec<_>>(),
        vec![
            PrfAlgorithm::HmacSha1,
            PrfAlgorithm::Aes128Xcbc,
            PrfAlgorithm::HmacSha2_256,
            PrfAlgorithm::HmacSha2_384,
            PrfAlgorithm::HmacSha2_512,
        ]
    );
    assert_eq!(
        registry.create(PrfAlgorithm::KeyedSha1).err(),
        Some(PrfError::UnsupportedAlgorithm(1027))
    );
}

#[test]
fn config_store_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prf.toml");
    let config = PrfConfig {
        disabled: vec![PrfAlgorithm::FipsSha1_160],
        private_use: true,
    };
    config.store(&path).unwrap();
    assert_eq!(PrfConfig::load(&path).unwrap(), config);
}

#[test]
fn config_errors_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let err = PrfConfig::load(&missing).unwrap_err();
    assert!(format!("{err:#}").contains("missing.toml"));

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, r#"disabled = ["hmac-whirlpool"]"#).unwrap();
    let err = PrfConfig::load(&bad).unwrap_err();
    assert!(format!("{err:#}").contains("bad.toml"));
}
