//! Property Tests
//!
//! Randomized checks of the invariants that hold for every seed and size.

use proptest::prelude::*;

use correlated_noise_core_rs::correlated::{synthesize, CorrelationMethod};
use correlated_noise_core_rs::density::estimate;
use correlated_noise_core_rs::rng::{RngManager, WordWidth};

fn width_strategy() -> impl Strategy<Value = WordWidth> {
    prop_oneof![Just(WordWidth::W32), Just(WordWidth::W64)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn draws_stay_in_unit_interval(width in width_strategy(), seed in any::<u64>()) {
        let mut rng = RngManager::new(width, seed);
        for _ in 0..700 {
            let u = rng.next_f64();
            prop_assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn snapshot_resume_is_exact(width in width_strategy(), seed in any::<u64>(), skip in 0usize..1300) {
        let mut original = RngManager::new(width, seed);
        for _ in 0..skip {
            original.next_word();
        }
        let mut resumed = RngManager::restore(&original.snapshot()).unwrap();
        for _ in 0..50 {
            prop_assert_eq!(original.next_word(), resumed.next_word());
        }
    }

    #[test]
    fn fourier_output_spans_unit_interval(
        alpha in prop_oneof![-3.0f64..-0.1, 0.1f64..3.0],
        count in 2usize..200,
        seed in any::<u64>(),
    ) {
        let values = synthesize(CorrelationMethod::Fourier, alpha, count, seed).unwrap();
        prop_assert_eq!(values.len(), count);
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(lo.abs() < 1e-9);
        prop_assert!((hi - 1.0).abs() < 1e-9);
    }

    #[test]
    fn distance_tail_spans_unit_interval(
        alpha in 0.1f64..4.0,
        count in 3usize..120,
        seed in any::<u64>(),
    ) {
        let values = synthesize(CorrelationMethod::Distance, alpha, count, seed).unwrap();
        prop_assert_eq!(values.len(), count);
        let tail = &values[1..];
        let lo = tail.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = tail.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(lo.abs() < 1e-9);
        prop_assert!((hi - 1.0).abs() < 1e-9);
    }

    #[test]
    fn density_integrates_to_one(
        samples in prop::collection::vec(-1e6f64..1e6, 2..300),
        partitions in 1usize..64,
    ) {
        prop_assume!(samples.iter().any(|&v| v != samples[0]));
        let table = estimate(&samples, partitions).unwrap();
        prop_assert_eq!(table.partitions(), partitions);
        prop_assert!((table.integral() - 1.0).abs() < 1e-9);

        let mut counts = vec![0usize; partitions];
        for &v in &samples {
            counts[table.bin_of(v)] += 1;
        }
        prop_assert_eq!(counts.iter().sum::<usize>(), samples.len());
    }
}
