//! Correlated sequence synthesis.
//!
//! Both algorithms turn a stream of uniform draws into `N` values whose
//! neighbours are statistically related, then pass the raw sequence through
//! the shared bounding transform in [`normalize`].
//!
//! # Example
//!
//! ```
//! use correlated_noise_core_rs::correlated::{synthesize, CorrelationMethod};
//!
//! let values = synthesize(CorrelationMethod::Fourier, 1.0, 128, 2).unwrap();
//! assert_eq!(values.len(), 128);
//! ```

pub mod distance;
pub mod fourier;
pub mod normalize;

use serde::{Deserialize, Serialize};

use crate::core::{InvalidArgument, NumericError};
use crate::rng::{RngManager, WordWidth};

pub use normalize::Normalization;

/// Correlation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationMethod {
    /// Squared-distance kernel, O(N²).
    Distance,
    /// Power-law Fourier series, O(N²/2).
    Fourier,
}

impl CorrelationMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            CorrelationMethod::Distance => "distance",
            CorrelationMethod::Fourier => "fourier",
        }
    }

    /// Check `alpha` and `count` against the preconditions of this method.
    pub fn validate(self, alpha: f64, count: usize) -> Result<(), NumericError> {
        validate_parameters(alpha, count)?;
        match self {
            CorrelationMethod::Distance => distance::validate_kernel(alpha, count),
            CorrelationMethod::Fourier => Ok(()),
        }
    }

    /// Run this method with uniforms from `rng`.
    pub fn synthesize_with(
        self,
        rng: &mut RngManager,
        alpha: f64,
        count: usize,
    ) -> Result<CorrelatedSample, NumericError> {
        match self {
            CorrelationMethod::Distance => distance::synthesize_with(rng, alpha, count),
            CorrelationMethod::Fourier => fourier::synthesize_with(rng, alpha, count),
        }
    }
}

impl std::fmt::Display for CorrelationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CorrelationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "distance" => Ok(CorrelationMethod::Distance),
            "fourier" => Ok(CorrelationMethod::Fourier),
            other => Err(format!(
                "unknown correlation method '{}' (expected 'distance' or 'fourier')",
                other
            )),
        }
    }
}

/// A normalized correlated sequence and the transform that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelatedSample {
    pub values: Vec<f64>,
    pub normalization: Normalization,
}

impl CorrelatedSample {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Synthesize `count` correlated values with the 64-bit generator.
///
/// # Errors
///
/// - `ZeroAlpha` / `NonFiniteAlpha` if `alpha` is zero or not finite
/// - `CountTooSmall` if `count < 2`
/// - `DegenerateSample` if the raw sequence has no spread
/// - `OutOfMemory` if an output buffer cannot be allocated
pub fn synthesize(
    method: CorrelationMethod,
    alpha: f64,
    count: usize,
    seed: u64,
) -> Result<Vec<f64>, NumericError> {
    let mut rng = RngManager::new(WordWidth::W64, seed);
    method
        .synthesize_with(&mut rng, alpha, count)
        .map(CorrelatedSample::into_values)
}

/// Full description of one synthesis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    pub method: CorrelationMethod,
    pub alpha: f64,
    pub count: usize,
    pub seed: u64,

    /// Engine supplying the uniform draws (64-bit unless stated)
    #[serde(default)]
    pub width: WordWidth,
}

impl SynthesisConfig {
    pub fn validate(&self) -> Result<(), NumericError> {
        self.method.validate(self.alpha, self.count)
    }

    /// Seed the configured engine and synthesize.
    pub fn run(&self) -> Result<CorrelatedSample, NumericError> {
        let mut rng = RngManager::new(self.width, self.seed);
        self.method.synthesize_with(&mut rng, self.alpha, self.count)
    }
}

/// Preconditions shared by every synthesizer.
pub(crate) fn validate_parameters(alpha: f64, count: usize) -> Result<(), NumericError> {
    if alpha == 0.0 {
        return Err(InvalidArgument::ZeroAlpha.into());
    }
    if !alpha.is_finite() {
        return Err(InvalidArgument::NonFiniteAlpha.into());
    }
    if count < 2 {
        return Err(InvalidArgument::CountTooSmall { count }.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_parameters() {
        assert_eq!(
            validate_parameters(0.0, 10),
            Err(NumericError::InvalidArgument(InvalidArgument::ZeroAlpha))
        );
        assert_eq!(
            validate_parameters(f64::NAN, 10),
            Err(NumericError::InvalidArgument(InvalidArgument::NonFiniteAlpha))
        );
        assert_eq!(
            validate_parameters(1.0, 1),
            Err(NumericError::InvalidArgument(InvalidArgument::CountTooSmall {
                count: 1
            }))
        );
        assert!(validate_parameters(-0.5, 2).is_ok());
    }

    #[test]
    fn test_kernel_pole_only_applies_to_distance() {
        assert_eq!(
            CorrelationMethod::Distance.validate(-2.0, 16),
            Err(NumericError::InvalidArgument(InvalidArgument::KernelPole {
                alpha: -2.0
            }))
        );
        assert!(CorrelationMethod::Fourier.validate(-2.0, 16).is_ok());
        // General preconditions are checked first.
        assert_eq!(
            CorrelationMethod::Distance.validate(-1.0, 1),
            Err(NumericError::InvalidArgument(InvalidArgument::CountTooSmall {
                count: 1
            }))
        );
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!(
            "Fourier".parse::<CorrelationMethod>().unwrap(),
            CorrelationMethod::Fourier
        );
        assert!("bernoulli".parse::<CorrelationMethod>().is_err());
    }

    #[test]
    fn test_config_defaults_to_64_bit_engine() {
        let config: SynthesisConfig = serde_json::from_str(
            r#"{"method": "distance", "alpha": 1.0, "count": 32, "seed": 2}"#,
        )
        .unwrap();
        assert_eq!(config.width, WordWidth::W64);
        assert_eq!(
            config.run().unwrap().values,
            synthesize(CorrelationMethod::Distance, 1.0, 32, 2).unwrap()
        );
    }

    #[test]
    fn test_config_with_32_bit_engine_differs() {
        let mut config = SynthesisConfig {
            method: CorrelationMethod::Fourier,
            alpha: 1.5,
            count: 32,
            seed: 9,
            width: WordWidth::W64,
        };
        let wide = config.run().unwrap();
        config.width = WordWidth::W32;
        let narrow = config.run().unwrap();
        assert_ne!(wide.values, narrow.values);
    }
}
