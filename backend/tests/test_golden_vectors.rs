//! Golden Vector Tests
//!
//! Frozen outputs of the reference generators and synthesizers. Any change
//! to seeding, tempering, the regeneration loop or the normalization
//! transform shows up here first.
//!
//! Generator words must match bit for bit; synthesized values are compared
//! with a 1e-12 tolerance.

use correlated_noise_core_rs::correlated::{synthesize, CorrelationMethod};
use correlated_noise_core_rs::rng::{Mt19937_32, Mt19937_64, RngManager, TwistedEngine, WordWidth};

const TOLERANCE: f64 = 1e-12;

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() < TOLERANCE,
            "index {}: got {}, expected {}",
            i,
            a,
            e
        );
    }
}

// ============================================================================
// 64-bit engine
// ============================================================================

#[test]
fn test_mt64_seed_2_first_words() {
    let mut engine = Mt19937_64::new(2);
    let expected: [u64; 8] = [
        0xffcc_c933_6237_d0fb,
        0x5ecc_da01_9dac_9285,
        0xf4b0_e2b4_3fb0_32fa,
        0x35b5_0e61_dae9_985e,
        0x90ef_cf41_ced3_12fe,
        0x40ce_d9d4_566c_dd9f,
        0x2461_9a5e_c794_a612,
        0xad80_adb7_8469_9e8a,
    ];
    for word in expected {
        assert_eq!(engine.next_u64(), word);
    }
}

#[test]
fn test_mt64_seed_2_first_doubles() {
    let mut rng = RngManager::new(WordWidth::W64, 2);
    let draws: Vec<f64> = (0..8).map(|_| rng.next_f64()).collect();
    assert_close(
        &draws,
        &[
            0.99921853546604145,
            0.37031328715754547,
            0.95582405949215921,
            0.20979394806901153,
            0.5661592040695036,
            0.253156294193491,
            0.14211430372195596,
            0.67774472933198249,
        ],
    );
}

#[test]
fn test_mt64_zero_seed_matches_default_seed() {
    let mut zero = Mt19937_64::new(0);
    let mut default = Mt19937_64::new(1999);

    assert_eq!(zero.next_u64(), 0x8537_4837_fa61_dc63);
    assert_eq!(zero.next_u64(), 0x9a57_f8bd_708a_7bf0);
    assert_eq!(default.next_u64(), 0x8537_4837_fa61_dc63);
    assert_eq!(default.next_u64(), 0x9a57_f8bd_708a_7bf0);
}

// ============================================================================
// 32-bit engine
// ============================================================================

#[test]
fn test_mt32_seed_5489_across_regeneration() {
    let mut engine = Mt19937_32::new(5489);
    let words: Vec<u32> = (0..627).map(|_| engine.next_u32()).collect();

    assert_eq!(&words[..5], &[0x343c_3100, 0x751f_9847, 0x5314_e82d, 0x26f9_9ab3, 0xaa7b_49f3]);
    assert_eq!(words[622], 0xbb4e_a193);
    assert_eq!(words[623], 0x3b8b_4830);
    // Second regeneration
    assert_eq!(words[624], 0xa1d2_fa0d);
    assert_eq!(words[625], 0x8a7e_eaba);
    assert_eq!(words[626], 0x95f0_1a66);
    assert_eq!(engine.regenerations(), 2);
}

#[test]
fn test_mt32_seed_5489_doubles() {
    let mut rng = RngManager::new(WordWidth::W32, 5489);
    let draws: Vec<f64> = (0..5).map(|_| rng.next_f64()).collect();
    assert_close(
        &draws,
        &[
            0.20404344801885158,
            0.45751334900444218,
            0.32453776461177919,
            0.15224615930399069,
            0.66594373892665459,
        ],
    );
}

#[test]
fn test_mt32_zero_seed_matches_default_seed() {
    let mut zero = Mt19937_32::new(0);
    let mut default = Mt19937_32::new(1999);
    for expected in [0x26da_1446u32, 0x074e_7614, 0x91a9_0c16] {
        assert_eq!(zero.next_u32(), expected);
        assert_eq!(default.next_u32(), expected);
    }
}

#[test]
fn test_mt32_zero_seed_doubles() {
    let mut rng = RngManager::new(WordWidth::W32, 0);
    let draws: Vec<f64> = (0..3).map(|_| rng.next_f64()).collect();
    assert_close(
        &draws,
        &[0.15176512444200113, 0.028540973558216581, 0.56898570586205133],
    );
}

// ============================================================================
// Synthesizers
// ============================================================================

#[test]
fn test_distance_alpha_1_n_8_seed_2() {
    let values = synthesize(CorrelationMethod::Distance, 1.0, 8, 2).unwrap();
    assert_close(
        &values,
        &[
            0.48150903620129903,
            1.0,
            0.23403505494936325,
            0.43584353216137767,
            0.088035831384379593,
            5.5511151231257827e-17,
            0.57642765087238379,
            0.4778661122847479,
        ],
    );
}

#[test]
fn test_distance_index_zero_may_leave_unit_interval() {
    let values = synthesize(CorrelationMethod::Distance, 2.5, 6, 7).unwrap();
    assert_close(
        &values,
        &[
            -0.055947075413177338,
            1.0,
            0.25770209631511126,
            0.0,
            0.2962436693143024,
            0.16689000418716782,
        ],
    );
    assert!(values[0] < 0.0);
}

#[test]
fn test_fourier_alpha_1_n_8_seed_2() {
    let values = synthesize(CorrelationMethod::Fourier, 1.0, 8, 2).unwrap();
    assert_close(
        &values,
        &[
            0.54836128298655173,
            0.76260587878897446,
            0.67697761841687365,
            0.0,
            0.27199645180996612,
            0.86117117005826072,
            0.80502041880680253,
            1.0,
        ],
    );
}

#[test]
fn test_fourier_alpha_2_n_5_seed_11() {
    let values = synthesize(CorrelationMethod::Fourier, 2.0, 5, 11).unwrap();
    assert_close(
        &values,
        &[
            0.99999999999999989,
            0.74795112634687022,
            0.52828782310066569,
            0.11431866898394605,
            5.5511151231257827e-17,
        ],
    );
}
