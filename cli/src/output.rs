//! Table and event-log writers.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use correlated_noise_core_rs::{EventLog, JobResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// `edge density` per line
    Columns,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Columns => "dat",
            OutputFormat::Json => "json",
        }
    }
}

fn write_rows<W: Write>(result: &JobResult, format: OutputFormat, mut writer: W) -> Result<()> {
    match format {
        OutputFormat::Columns => {
            for (edge, density) in result.table.rows() {
                writeln!(writer, "{} {}", edge, density)?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "label": result.label,
                "seed": result.seed,
                "width": result.width,
                "summary": result.summary,
                "normalization": result.normalization,
                "table": result.table,
            });
            serde_json::to_writer_pretty(&mut writer, &json)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write one job's density table to `path`, or stdout if `None`.
pub fn write_table(result: &JobResult, path: Option<&Path>, format: OutputFormat) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_rows(result, format, BufWriter::new(file))
        }
        None => write_rows(result, format, io::stdout().lock()),
    }
}

pub fn write_events(log: &EventLog, path: &Path) -> Result<()> {
    let json = log.to_json().context("Failed to serialize event log")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write event log: {}", path.display()))
}
