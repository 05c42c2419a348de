//! Coefficient artifact parsing.
//!
//! Coefficient files are machine-generated by the fitting engine, so parsing
//! is strict: any malformed non-blank line indicates upstream corruption and
//! fails the whole load. This deliberately differs from the permissive
//! sample loader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::domain::CoefficientVector;
use crate::error::PipelineError;

/// Load a newline-delimited coefficient artifact.
///
/// Line k (counting non-blank lines only) becomes the coefficient of xᵏ.
/// Fails with `NotFound` if the path does not exist, `Read` on I/O faults,
/// and `Parse` on the first malformed line.
pub fn load_coefficients(path: &Path) -> Result<CoefficientVector, PipelineError> {
    if !path.exists() {
        return Err(PipelineError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut coeffs = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| PipelineError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let token = line.trim();
        if token.is_empty() {
            continue;
        }

        let value = token.parse::<f64>().map_err(|_| PipelineError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            token: token.to_string(),
        })?;
        coeffs.push(value);
    }

    Ok(CoefficientVector::new(coeffs))
}
