//! Run configuration.
//!
//! Loaded from JSON. Run-level `seed`, `width` and `partitions` apply to
//! every job unless the job overrides them.
//!
//! ```json
//! {
//!   "seed": 2,
//!   "width": "w64",
//!   "partitions": 400,
//!   "jobs": [
//!     { "count": 1000000, "source": { "kind": "uniform" } },
//!     { "count": 4096, "source": { "kind": "correlated", "method": "distance", "alpha": 1.0 } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::engine::RunError;
use crate::correlated::CorrelationMethod;
use crate::rng::WordWidth;

fn default_seed() -> u64 {
    2
}

fn default_partitions() -> usize {
    400
}

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Seed for every job without its own
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Engine width for every job without its own
    #[serde(default)]
    pub width: WordWidth,

    /// Histogram bins for every job without its own
    #[serde(default = "default_partitions")]
    pub partitions: usize,

    pub jobs: Vec<JobConfig>,
}

/// One job of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobConfig {
    /// Name used for output files; derived from the source if absent
    #[serde(default)]
    pub label: Option<String>,

    /// Number of values to produce
    pub count: usize,

    pub source: SampleSource,

    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub width: Option<WordWidth>,

    #[serde(default)]
    pub partitions: Option<usize>,
}

/// Where a job's values come from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SampleSource {
    /// Raw uniform draws in [0, 1)
    Uniform,

    /// Normalized correlated sequence
    Correlated {
        method: CorrelationMethod,
        alpha: f64,
    },
}

impl SampleSource {
    pub fn name(&self) -> &'static str {
        match self {
            SampleSource::Uniform => "uniform",
            SampleSource::Correlated { method, .. } => method.as_str(),
        }
    }
}

impl JobConfig {
    pub fn uniform(count: usize) -> Self {
        Self {
            label: None,
            count,
            source: SampleSource::Uniform,
            seed: None,
            width: None,
            partitions: None,
        }
    }

    pub fn correlated(method: CorrelationMethod, alpha: f64, count: usize) -> Self {
        Self {
            source: SampleSource::Correlated { method, alpha },
            ..Self::uniform(count)
        }
    }

    /// The configured label, or `job<NN>-<source>`
    pub fn label_or_default(&self, index: usize) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("job{:02}-{}", index, self.source.name()),
        }
    }
}

impl RunConfig {
    /// The reference validation pipeline: uniforms from the 64-bit engine
    /// with seed 2, then the distance-kernel and Fourier methods with
    /// `alpha = 1`, each estimated over 400 bins.
    pub fn reference(count: usize) -> Self {
        Self {
            seed: default_seed(),
            width: WordWidth::W64,
            partitions: default_partitions(),
            jobs: vec![
                JobConfig::uniform(count),
                JobConfig::correlated(CorrelationMethod::Distance, 1.0, count),
                JobConfig::correlated(CorrelationMethod::Fourier, 1.0, count),
            ],
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, RunError> {
        let config: RunConfig = serde_json::from_str(json)
            .map_err(|e| RunError::InvalidConfig(format!("JSON parsing failed: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every job before anything is generated.
    pub fn validate(&self) -> Result<(), RunError> {
        if self.jobs.is_empty() {
            return Err(RunError::InvalidConfig(
                "run must contain at least one job".to_string(),
            ));
        }

        for (index, job) in self.jobs.iter().enumerate() {
            if self.partitions_for(job) == 0 {
                return Err(RunError::InvalidConfig(format!(
                    "job {} has zero partitions",
                    index
                )));
            }
            match job.source {
                SampleSource::Uniform => {
                    if job.count < 2 {
                        return Err(RunError::InvalidConfig(format!(
                            "job {} needs at least 2 uniform draws (got {})",
                            index, job.count
                        )));
                    }
                }
                SampleSource::Correlated { method, alpha } => {
                    method
                        .validate(alpha, job.count)
                        .map_err(|source| RunError::Job { job: index, source })?;
                }
            }
        }
        Ok(())
    }

    pub fn seed_for(&self, job: &JobConfig) -> u64 {
        job.seed.unwrap_or(self.seed)
    }

    pub fn width_for(&self, job: &JobConfig) -> WordWidth {
        job.width.unwrap_or(self.width)
    }

    pub fn partitions_for(&self, job: &JobConfig) -> usize {
        job.partitions.unwrap_or(self.partitions)
    }

    /// SHA-256 of the canonical JSON form of this configuration.
    ///
    /// Struct fields serialize in declaration order, so the JSON text is
    /// already canonical.
    pub fn fingerprint(&self) -> Result<String, RunError> {
        let json = serde_json::to_string(self)
            .map_err(|e| RunError::Serialization(format!("Config serialization failed: {}", e)))?;

        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        Ok(format!("{:x}", hasher.finalize()))
    }
}
