//! CSV loading of benchmark results.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// One benchmark measurement: insertion threshold vs elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BenchmarkPoint {
    /// Insertion-sort threshold the run was measured at
    pub s: f64,
    /// Elapsed sort time in milliseconds
    pub time_ms: f64,
}

/// Failure classes for loading a results file
#[derive(Debug, Error)]
pub enum DataError {
    #[error("missing '{0}' column in CSV header")]
    MissingColumn(&'static str),
    #[error("line {line}: {source}")]
    BadRecord {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Load benchmark points from a CSV file with `s` and `time_ms` columns.
///
/// Rows come back in file order, untransformed. Extra columns are ignored;
/// column order is unconstrained. A header-only file yields an empty vec.
/// Any missing column or non-numeric cell is a hard error.
pub fn load_results<P: AsRef<Path>>(path: P) -> Result<Vec<BenchmarkPoint>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open results file: {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read CSV header from {}", path.display()))?
        .clone();

    for required in ["s", "time_ms"] {
        if !headers.iter().any(|h| h == required) {
            return Err(DataError::MissingColumn(required))
                .with_context(|| format!("Invalid results file: {}", path.display()));
        }
    }

    let mut points = Vec::new();
    for result in reader.deserialize::<BenchmarkPoint>() {
        // The csv error carries the record's physical line (blank lines
        // count, so this stays accurate on files containing them)
        let point = result
            .map_err(|e| {
                let line = e.position().map_or(0, csv::Position::line);
                DataError::BadRecord { line, source: e }
            })
            .with_context(|| format!("Invalid results file: {}", path.display()))?;
        points.push(point);
    }

    Ok(points)
}
