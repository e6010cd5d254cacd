//! Command-line driver for the correlated noise toolkit.
//!
//! Generates uniform or correlated sequences, estimates their density and
//! writes `edge density` rows (or JSON) to a file or stdout.

mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use correlated_noise_core_rs::{CorrelationMethod, JobConfig, RunConfig, Runner, WordWidth};

use output::{write_events, write_table, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "corrnoise")]
#[command(about = "Deterministic uniform and correlated noise with empirical PDFs", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Emit JSON instead of two-column text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw uniform values and estimate their density
    Uniform {
        #[arg(long, value_enum, default_value_t = Width::W64)]
        width: Width,

        #[arg(long, default_value_t = 2)]
        seed: u64,

        #[arg(long, default_value_t = 1_000_000)]
        count: usize,

        #[arg(long, default_value_t = 400)]
        partitions: usize,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Synthesize a correlated sequence and estimate its density
    Correlated {
        #[arg(long, value_enum)]
        method: Method,

        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        alpha: f64,

        #[arg(long, default_value_t = 10_000)]
        count: usize,

        #[arg(long, default_value_t = 2)]
        seed: u64,

        #[arg(long, value_enum, default_value_t = Width::W64)]
        width: Width,

        #[arg(long, default_value_t = 400)]
        partitions: usize,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Execute every job of a JSON run configuration
    Run {
        /// Run configuration (JSON)
        #[arg(short = 'c', long = "config")]
        config: PathBuf,

        /// Directory receiving one table per job
        #[arg(short = 'o', long = "out-dir", default_value = ".")]
        out_dir: PathBuf,

        /// Also write the event log (JSON)
        #[arg(long)]
        events: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Width {
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
}

impl From<Width> for WordWidth {
    fn from(width: Width) -> Self {
        match width {
            Width::W32 => WordWidth::W32,
            Width::W64 => WordWidth::W64,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Method {
    Distance,
    Fourier,
}

impl From<Method> for CorrelationMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Distance => CorrelationMethod::Distance,
            Method::Fourier => CorrelationMethod::Fourier,
        }
    }
}

/// Run a single-job configuration and write its table.
fn run_single(
    job: JobConfig,
    seed: u64,
    width: Width,
    partitions: usize,
    out: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let config = RunConfig {
        seed,
        width: width.into(),
        partitions,
        jobs: vec![job],
    };
    let mut runner = Runner::new(config).context("Invalid arguments")?;
    let result = runner.run_job(0).context("Generation failed")?;
    write_table(&result, out.as_deref(), format)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Columns
    };

    match args.command {
        Command::Uniform {
            width,
            seed,
            count,
            partitions,
            out,
        } => run_single(JobConfig::uniform(count), seed, width, partitions, out, format),

        Command::Correlated {
            method,
            alpha,
            count,
            seed,
            width,
            partitions,
            out,
        } => run_single(
            JobConfig::correlated(method.into(), alpha, count),
            seed,
            width,
            partitions,
            out,
            format,
        ),

        Command::Run {
            config,
            out_dir,
            events,
        } => {
            let content = std::fs::read_to_string(&config)
                .with_context(|| format!("Failed to read config file: {}", config.display()))?;
            let run_config = RunConfig::from_json_str(&content)
                .with_context(|| format!("Invalid run config: {}", config.display()))?;

            std::fs::create_dir_all(&out_dir)
                .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

            let mut runner = Runner::new(run_config)?;
            eprintln!("config {}", runner.config_hash());

            let mut outcome = Ok(());
            for job in 0..runner.job_count() {
                match runner.run_job(job) {
                    Ok(result) => {
                        let path = out_dir.join(format!("{}.{}", result.label, format.extension()));
                        write_table(&result, Some(&path), format)?;
                        eprintln!(
                            "{}: {} values, mean {:.6}, integral {:.6} -> {}",
                            result.label,
                            result.samples.len(),
                            result.summary.mean,
                            result.table.integral(),
                            path.display()
                        );
                    }
                    Err(e) => {
                        eprintln!("{}", e);
                        outcome = Err(anyhow::Error::new(e));
                        break;
                    }
                }
            }

            if let Some(path) = events {
                write_events(runner.event_log(), &path)?;
            }
            outcome
        }
    }
}
