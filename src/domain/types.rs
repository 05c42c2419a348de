//! Shared domain types.
//!
//! These types are intentionally kept lightweight:
//!
//! - loaded once per run, then shared read-only by all renderers
//! - no hidden global state; path policy lives in `ReportConfig`

use std::path::PathBuf;

/// One observed `(x, y)` data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

/// The observed data set, in file order. Immutable after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    pub points: Vec<SamplePoint>,
}

impl SampleSet {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// `[min(x), max(x)]` of the set, or `None` when empty.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.points.iter();
        let first = iter.next()?;
        let mut lo = first.x;
        let mut hi = first.x;
        for p in iter {
            lo = lo.min(p.x);
            hi = hi.max(p.x);
        }
        Some((lo, hi))
    }
}

/// Fitted polynomial coefficients, ascending power order (`coeffs[i]` · xⁱ).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoefficientVector {
    pub coeffs: Vec<f64>,
}

impl CoefficientVector {
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self { coeffs }
    }
}

/// A fitted model, or the explicit absence of one.
///
/// `Absent` is a distinct state (the fitting engine never produced an
/// artifact), not an empty-but-present vector; evaluation treats it as the
/// zero function. Renderers branch on this explicitly rather than probing
/// for emptiness.
#[derive(Debug, Clone, PartialEq)]
pub enum FittedModel {
    Present(CoefficientVector),
    Absent,
}

/// Resolved per-run configuration, constructed once from the CLI and passed
/// by reference into every component that touches the filesystem.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Pipeline-local directory: holds the sample file and is the second
    /// candidate for coefficient artifacts (the first is its parent).
    pub data_dir: PathBuf,
    /// Directory report images are written to. Created if absent.
    pub out_dir: PathBuf,
    /// Sample file name inside `data_dir`.
    pub sample_file: String,
    /// Base name every report artifact starts with.
    pub base_name: String,
    /// Degree for the single-fit and residual reports.
    pub target_degree: u32,
    /// Degrees overlaid in the comparative report, in request order.
    pub compare_degrees: Vec<u32>,
}

/// What a completed run produced.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of samples loaded from the data file.
    pub samples_loaded: usize,
    /// Report images written, in render order.
    pub artifacts: Vec<PathBuf>,
    /// Degrees whose coefficient artifacts could not be loaded.
    pub skipped_degrees: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_range_scans_out_of_order_points() {
        let set = SampleSet {
            points: vec![
                SamplePoint { x: 3.0, y: 1.0 },
                SamplePoint { x: -1.0, y: 2.0 },
                SamplePoint { x: 2.0, y: 0.0 },
            ],
        };
        assert_eq!(set.x_range(), Some((-1.0, 3.0)));
    }

    #[test]
    fn x_range_empty_is_none() {
        assert_eq!(SampleSet::default().x_range(), None);
    }
}
