//! Event logging for run replay and auditing.
//!
//! Every significant step of a run is recorded as an [`Event`]. Events
//! enable:
//! - Auditing (which seed and engine produced which table)
//! - Debugging (normalization parameters of each synthesized sequence)
//! - Analysis (density integrals across jobs)
//!
//! Setting the `CORRNOISE_DEBUG` environment variable additionally echoes
//! events to stderr as they are logged.
//!
//! # Example
//!
//! ```rust
//! use correlated_noise_core_rs::events::{Event, EventLog};
//! use correlated_noise_core_rs::rng::WordWidth;
//!
//! let mut log = EventLog::new();
//! log.log(Event::GeneratorSeeded {
//!     job: 0,
//!     width: WordWidth::W64,
//!     seed: 2,
//! });
//! assert_eq!(log.events_for_job(0).len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::correlated::CorrelationMethod;
use crate::rng::WordWidth;

/// Environment variable enabling stderr diagnostics.
pub const DEBUG_ENV: &str = "CORRNOISE_DEBUG";

/// Whether stderr diagnostics are enabled.
pub fn debug_enabled() -> bool {
    std::env::var_os(DEBUG_ENV).is_some()
}

/// Run event capturing one completed step.
///
/// All events carry the index of the job that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A generator was created for a job
    GeneratorSeeded {
        job: usize,
        width: WordWidth,
        seed: u64,
    },

    /// Plain uniform draws were materialized
    UniformsDrawn {
        job: usize,
        width: WordWidth,
        count: usize,
        regenerations: u64,
    },

    /// A correlated sequence was synthesized and normalized
    SequenceSynthesized {
        job: usize,
        method: CorrelationMethod,
        alpha: f64,
        count: usize,
        raw_mean: f64,
        raw_deviation: f64,
        offset: f64,
        scale: f64,
    },

    /// A density table was estimated
    DensityEstimated {
        job: usize,
        partitions: usize,
        bin_width: f64,
        integral: f64,
    },

    /// A job stopped with an error
    JobFailed { job: usize, reason: String },
}

impl Event {
    /// Index of the job this event belongs to
    pub fn job(&self) -> usize {
        match self {
            Event::GeneratorSeeded { job, .. } => *job,
            Event::UniformsDrawn { job, .. } => *job,
            Event::SequenceSynthesized { job, .. } => *job,
            Event::DensityEstimated { job, .. } => *job,
            Event::JobFailed { job, .. } => *job,
        }
    }

    /// Get a short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::GeneratorSeeded { .. } => "GeneratorSeeded",
            Event::UniformsDrawn { .. } => "UniformsDrawn",
            Event::SequenceSynthesized { .. } => "SequenceSynthesized",
            Event::DensityEstimated { .. } => "DensityEstimated",
            Event::JobFailed { .. } => "JobFailed",
        }
    }
}

/// Event log for storing and querying run events.
///
/// This is a simple wrapper around Vec<Event> with convenience methods.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        if debug_enabled() {
            eprintln!("[CORRNOISE DEBUG] job {}: {:?}", event.job(), event);
        }
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events for a specific job
    pub fn events_for_job(&self, job: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.job() == job).collect()
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Serialize the whole log as a JSON array
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.events)
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
