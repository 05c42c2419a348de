//! Command-line parsing for the polynomial-fit report generator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! evaluation/rendering code. All path policy resolved here flows into
//! `domain::ReportConfig`; no component reads global state.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "polyreport",
    version,
    about = "Render polynomial regression fit reports from coefficient artifacts"
)]
pub struct Cli {
    /// Degree of the polynomial to plot in the single-fit and residual reports.
    #[arg(default_value_t = 2)]
    pub degree: u32,

    /// Degrees to overlay in the comparative report, in order.
    #[arg(long, num_args = 1.., default_values_t = [1u32, 2, 3, 4])]
    pub compare: Vec<u32>,

    /// Pipeline directory holding the sample file; its parent is probed first
    /// for coefficient artifacts.
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Sample file name inside the pipeline directory.
    #[arg(long, default_value = "data.txt")]
    pub data_file: String,

    /// Output directory for report images. Defaults to a `reports` directory
    /// next to the pipeline directory.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Base name every report artifact starts with.
    #[arg(long, default_value = "polynomial_regression")]
    pub base_name: String,
}
