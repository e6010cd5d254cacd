//! Runner Engine
//!
//! Executes the jobs of a [`RunConfig`] in order:
//!
//! ```text
//! For each job j:
//! 1. Seed a generator (job seed/width or run defaults)
//! 2. Produce values (uniform draws or correlated synthesis)
//! 3. Summarize moments
//! 4. Estimate the density table
//! 5. Log events
//! ```
//!
//! # Example
//!
//! ```rust
//! use correlated_noise_core_rs::runner::{RunConfig, Runner};
//!
//! let mut runner = Runner::new(RunConfig::reference(256)).unwrap();
//! let results = runner.run_all().unwrap();
//!
//! assert_eq!(results.len(), 3);
//! for result in &results {
//!     assert!((result.table.integral() - 1.0).abs() < 1e-9);
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

use super::config::{JobConfig, RunConfig, SampleSource};
use crate::core::{try_zeroed, InvalidArgument, Moments, NumericError};
use crate::correlated::Normalization;
use crate::density::{estimate, DensityTable};
use crate::events::{debug_enabled, Event, EventLog};
use crate::rng::{RngManager, WordWidth};

/// Errors raised while configuring or executing a run
#[derive(Debug, Error, PartialEq)]
pub enum RunError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Job {job} failed: {source}")]
    Job {
        job: usize,
        #[source]
        source: NumericError,
    },

    #[error("Job index {job} out of range (run has {jobs} jobs)")]
    JobIndexOutOfRange { job: usize, jobs: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Output of one job
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobResult {
    pub job: usize,
    pub label: String,
    pub seed: u64,
    pub width: WordWidth,

    /// Generated values, in generation order
    pub samples: Vec<f64>,

    /// Moments of `samples`
    pub summary: Moments,

    /// Present for correlated jobs
    pub normalization: Option<Normalization>,

    pub table: DensityTable,
}

/// Batch driver owning the configuration and the event log
///
/// # Determinism
///
/// Every job seeds its own generator, so a job's output depends only on
/// its own configuration and not on which jobs ran before it.
#[derive(Debug)]
pub struct Runner {
    config: RunConfig,
    config_hash: String,
    event_log: EventLog,
}

impl Runner {
    /// Validate and fingerprint `config`.
    pub fn new(config: RunConfig) -> Result<Self, RunError> {
        config.validate()?;
        let config_hash = config.fingerprint()?;

        if debug_enabled() {
            eprintln!(
                "[CORRNOISE DEBUG] run: {} jobs, config {}",
                config.jobs.len(),
                config_hash
            );
        }

        Ok(Self {
            config,
            config_hash,
            event_log: EventLog::new(),
        })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// SHA-256 fingerprint of the configuration
    pub fn config_hash(&self) -> &str {
        &self.config_hash
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    pub fn job_count(&self) -> usize {
        self.config.jobs.len()
    }

    /// Execute every job in order, stopping at the first failure.
    pub fn run_all(&mut self) -> Result<Vec<JobResult>, RunError> {
        (0..self.job_count()).map(|job| self.run_job(job)).collect()
    }

    /// Execute a single job.
    pub fn run_job(&mut self, job: usize) -> Result<JobResult, RunError> {
        let job_config = self
            .config
            .jobs
            .get(job)
            .cloned()
            .ok_or(RunError::JobIndexOutOfRange {
                job,
                jobs: self.job_count(),
            })?;

        match self.execute(job, &job_config) {
            Ok(result) => Ok(result),
            Err(source) => {
                self.event_log.log(Event::JobFailed {
                    job,
                    reason: source.to_string(),
                });
                Err(RunError::Job { job, source })
            }
        }
    }

    fn execute(&mut self, job: usize, job_config: &JobConfig) -> Result<JobResult, NumericError> {
        let seed = self.config.seed_for(job_config);
        let width = self.config.width_for(job_config);
        let partitions = self.config.partitions_for(job_config);

        let mut rng = RngManager::new(width, seed);
        self.event_log.log(Event::GeneratorSeeded { job, width, seed });

        let (samples, normalization) = match job_config.source {
            SampleSource::Uniform => {
                let mut samples = try_zeroed(job_config.count)?;
                rng.fill_f64(&mut samples);
                self.event_log.log(Event::UniformsDrawn {
                    job,
                    width,
                    count: job_config.count,
                    regenerations: rng.regenerations(),
                });
                (samples, None)
            }
            SampleSource::Correlated { method, alpha } => {
                let sample = method.synthesize_with(&mut rng, alpha, job_config.count)?;
                let norm = sample.normalization;
                self.event_log.log(Event::SequenceSynthesized {
                    job,
                    method,
                    alpha,
                    count: job_config.count,
                    raw_mean: norm.raw.mean,
                    raw_deviation: norm.deviation,
                    offset: norm.offset,
                    scale: norm.scale,
                });
                (sample.values, Some(norm))
            }
        };

        let summary = Moments::of(&samples).ok_or(InvalidArgument::EmptySample)?;
        let table = estimate(&samples, partitions)?;
        self.event_log.log(Event::DensityEstimated {
            job,
            partitions,
            bin_width: table.bin_width,
            integral: table.integral(),
        });

        Ok(JobResult {
            job,
            label: job_config.label_or_default(job),
            seed,
            width,
            samples,
            summary,
            normalization,
            table,
        })
    }
}
