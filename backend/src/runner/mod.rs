//! Runner - batch driver for generation and density estimation
//!
//! A run is a list of jobs; each job draws uniforms or synthesizes a
//! correlated sequence, then estimates its density. See `engine.rs` for the
//! job loop and `config.rs` for the JSON configuration.

pub mod config;
pub mod engine;

pub use config::{JobConfig, RunConfig, SampleSource};
pub use engine::{JobResult, RunError, Runner};
