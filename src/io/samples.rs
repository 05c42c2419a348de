//! Sample file parsing.
//!
//! Sample files are hand- or instrument-authored, so parsing is permissive:
//! a line contributes a point iff it splits into exactly two float tokens,
//! and anything else (comments, headers, stray columns) is skipped without
//! comment. Contrast with `coefficients`, which is strict on purpose.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::domain::{SamplePoint, SampleSet};
use crate::error::PipelineError;

/// Load a whitespace-delimited `(x, y)` sample file.
///
/// Fails with `NotFound` before opening if the path does not exist, and with
/// `Read` on any I/O fault mid-read (no partial set is returned). An empty
/// or all-malformed file yields an empty set, which is valid.
pub fn load_samples(path: &Path) -> Result<SampleSet, PipelineError> {
    if !path.exists() {
        return Err(PipelineError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut points = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| PipelineError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut tokens = line.split_whitespace();
        let (Some(xs), Some(ys), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            continue;
        };
        let (Ok(x), Ok(y)) = (xs.parse::<f64>(), ys.parse::<f64>()) else {
            continue;
        };
        points.push(SamplePoint { x, y });
    }

    Ok(SampleSet { points })
}
