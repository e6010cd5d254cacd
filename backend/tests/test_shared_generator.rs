//! Shared Generator Tests
//!
//! The process-wide generators are global, so every check runs inside a
//! single test to keep the test harness from interleaving them.

use correlated_noise_core_rs::rng::{shared, Mt19937_64, RngManager, WordWidth};

#[test]
fn test_shared_generator_lifecycle() {
    shared::reset(WordWidth::W32);
    shared::reset(WordWidth::W64);
    assert!(!shared::is_seeded(WordWidth::W64));

    // First call seeds from the handle and writes the word back
    let mut handle = 2u64;
    let first = shared::generate(WordWidth::W64, &mut handle);
    assert!(shared::is_seeded(WordWidth::W64));
    assert_eq!(handle, 0xffcc_c933_6237_d0fb);
    assert!((first - 0.99921853546604145).abs() < 1e-15);

    // Later calls ignore the handle's value
    let mut other = 123_456u64;
    let second = shared::generate(WordWidth::W64, &mut other);
    assert_eq!(other, 0x5ecc_da01_9dac_9285);
    assert!((second - 0.37031328715754547).abs() < 1e-15);

    // Widths have independent state
    assert!(!shared::is_seeded(WordWidth::W32));
    let mut handle32 = 5489u64;
    shared::generate(WordWidth::W32, &mut handle32);
    assert_eq!(handle32, 0x343c_3100);
    shared::generate(WordWidth::W32, &mut handle32);
    assert_eq!(handle32, 0x751f_9847);

    let mut third_handle = 0u64;
    shared::generate(WordWidth::W64, &mut third_handle);
    assert_eq!(third_handle, 0xf4b0_e2b4_3fb0_32fa);

    // Reset re-seeds on the next call; zero becomes the default seed
    shared::reset(WordWidth::W64);
    let mut zero = 0u64;
    shared::generate(WordWidth::W64, &mut zero);
    assert_eq!(zero, Mt19937_64::new(1999).next_u64());

    // Bit-count entry point
    let mut handle_bits = 0u64;
    assert!(shared::generate_bits(64, &mut handle_bits).is_ok());
    assert!(shared::generate_bits(48, &mut handle_bits).is_err());

    // The shared stream matches an owned generator with the same seed
    shared::reset(WordWidth::W64);
    let mut seed = 31u64;
    let mut owned = RngManager::new(WordWidth::W64, 31);
    for _ in 0..400 {
        assert_eq!(shared::generate(WordWidth::W64, &mut seed), owned.next_f64());
        assert_eq!(seed, owned.last_word());
    }

    shared::reset(WordWidth::W32);
    shared::reset(WordWidth::W64);
}
