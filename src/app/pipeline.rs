//! The report pipeline driven by one CLI invocation.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! sample load -> target-degree renders -> comparative render
//!
//! Failure scoping follows the file's role. The sample file is the run's
//! foundation: if it cannot be loaded, nothing is rendered and the run
//! fails. Coefficient artifacts are per-degree: a missing or corrupt one is
//! logged and that degree's output is skipped, and the run carries on.

use crate::domain::{FittedModel, ReportConfig, RunSummary};
use crate::error::PipelineError;
use crate::io::{coefficient_artifact_name, load_coefficients, load_samples, resolve_artifact};
use crate::plot::style::{ComparativeStyle, ResidualStyle, SingleFitStyle};
use crate::plot::{render_comparative, render_residuals, render_single_fit};

/// Execute one full reporting run.
pub fn run_report(config: &ReportConfig) -> Result<RunSummary, PipelineError> {
    let sample_path = config.data_dir.join(&config.sample_file);
    let samples = load_samples(&sample_path)?;
    log::info!(
        "Loaded {} sample(s) from {}",
        samples.len(),
        sample_path.display()
    );

    let mut summary = RunSummary {
        samples_loaded: samples.len(),
        ..RunSummary::default()
    };

    // Target-degree reports: both depend on the same coefficient artifact,
    // so one failed load skips the pair.
    let degree = config.target_degree;
    let name = coefficient_artifact_name(degree);
    let coeff_path = resolve_artifact(&config.data_dir, &name);
    match load_coefficients(&coeff_path) {
        Ok(coeffs) => {
            log::info!(
                "Coefficients for degree {degree} read from {}",
                coeff_path.display()
            );
            let model = FittedModel::Present(coeffs);

            match render_single_fit(config, &samples, &model, degree, &SingleFitStyle::default())
            {
                Ok(path) => summary.artifacts.push(path),
                Err(e) => log::error!("{e}"),
            }
            match render_residuals(config, &samples, &model, degree, &ResidualStyle::default()) {
                Ok(Some(path)) => summary.artifacts.push(path),
                Ok(None) => log::info!("No samples loaded; skipping the residual report."),
                Err(e) => log::error!("{e}"),
            }
        }
        Err(e) => {
            log::warn!("{e}");
            log::warn!("Skipping single-fit and residual reports for degree {degree}.");
            summary.skipped_degrees.push(degree);
        }
    }

    // The comparative report runs regardless of the target degree's fate.
    match render_comparative(
        config,
        &samples,
        &config.compare_degrees,
        &ComparativeStyle::default(),
    ) {
        Ok((path, skipped)) => {
            summary.artifacts.push(path);
            summary.skipped_degrees.extend(skipped);
        }
        Err(e) => log::error!("{e}"),
    }

    Ok(summary)
}
