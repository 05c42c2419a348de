//! Report rendering.
//!
//! Three chart variants share the helpers in this module:
//!
//! - single-fit overlay (`single`)
//! - residual scatter (`residual`)
//! - multi-degree comparative overlay (`comparative`)
//!
//! Each renderer is a pure function of the sample set, a model, and the run
//! configuration; the only side effect is the PNG artifact it writes.

use std::fs;
use std::ops::Range;
use std::path::Path;

use crate::domain::SampleSet;
use crate::error::PipelineError;

pub mod comparative;
pub mod residual;
pub mod single;
pub mod style;

pub use comparative::*;
pub use residual::*;
pub use single::*;

/// `{base}_deg{N}.png`
pub fn single_fit_artifact(base_name: &str, degree: u32) -> String {
    format!("{base_name}_deg{degree}.png")
}

/// `{base}_residuals_deg{N}.png`
pub fn residual_artifact(base_name: &str, degree: u32) -> String {
    format!("{base_name}_residuals_deg{degree}.png")
}

/// `{base}_comparative_deg{D1}_{D2}_...png`
///
/// The name is built from the *requested* degrees, underscore-joined in
/// request order, so it stays stable even when some degrees are later
/// skipped for missing artifacts.
pub fn comparative_artifact(base_name: &str, degrees: &[u32]) -> String {
    let joined = degrees
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("_");
    format!("{base_name}_comparative_deg{joined}.png")
}

/// Dense x-domain a fitted curve is sampled over.
///
/// Spans `[min(x), max(x)]` of the sample set with `dense` points, or the
/// unit interval with `fallback` points when the set is empty.
pub fn plotting_domain(samples: &SampleSet, dense: usize, fallback: usize) -> Vec<f64> {
    match samples.x_range() {
        Some((lo, hi)) => linspace(lo, hi, dense),
        None => linspace(0.0, 1.0, fallback),
    }
}

/// `n` evenly spaced points over `[a, b]`, endpoints included.
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    let n = n.max(2);
    (0..n)
        .map(|i| a + (b - a) * i as f64 / (n - 1) as f64)
        .collect()
}

/// Padded axis range over a stream of values.
///
/// Non-finite values are ignored. An empty or fully non-finite stream maps
/// to the unit range, and a degenerate (single-value) one is widened so the
/// chart still has area to draw in.
pub(crate) fn padded_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        if v.is_finite() {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }

    if lo > hi {
        return 0.0..1.0;
    }
    if lo == hi {
        return (lo - 0.5)..(hi + 0.5);
    }
    let pad = 0.05 * (hi - lo);
    (lo - pad)..(hi + pad)
}

/// Create the report output directory if it is not already there.
pub(crate) fn ensure_out_dir(dir: &Path) -> Result<(), PipelineError> {
    fs::create_dir_all(dir).map_err(|e| PipelineError::render(dir, e))
}
