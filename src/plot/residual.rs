//! Residual scatter: observed minus fitted, with a zero reference line.

use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::domain::{FittedModel, ReportConfig, SampleSet};
use crate::error::PipelineError;
use crate::math::poly::eval_many;
use crate::math::stats::residuals;
use crate::plot::style::ResidualStyle;
use crate::plot::{ensure_out_dir, padded_range, residual_artifact};

/// Render the residual report for one degree.
///
/// Returns `Ok(None)` for an empty sample set: there is nothing to scatter,
/// so no artifact is produced. That short-circuit is intentional, not an
/// error.
pub fn render_residuals(
    config: &ReportConfig,
    samples: &SampleSet,
    model: &FittedModel,
    degree: u32,
    style: &ResidualStyle,
) -> Result<Option<PathBuf>, PipelineError> {
    if samples.is_empty() {
        return Ok(None);
    }

    ensure_out_dir(&config.out_dir)?;
    let path = config
        .out_dir
        .join(residual_artifact(&config.base_name, degree));

    let fit_at_samples = eval_many(model, &samples.xs());
    let res = residuals(&samples.ys(), &fit_at_samples)?;
    let points: Vec<(f64, f64)> = samples.xs().into_iter().zip(res).collect();

    draw(&path, &points, degree, style).map_err(|e| PipelineError::render(&path, e))?;

    log::info!("Plot saved to {}", path.display());
    Ok(Some(path))
}

fn draw(
    path: &Path,
    points: &[(f64, f64)],
    degree: u32,
    style: &ResidualStyle,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, style.size).into_drawing_area();
    root.fill(&WHITE)?;

    let x_range = padded_range(points.iter().map(|&(x, _)| x));
    // The zero reference must always be visible, so pin it into the range.
    let y_range = padded_range(points.iter().map(|&(_, y)| y).chain([0.0]));

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Residual Plot for Polynomial Regression (Degree {degree})"),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), y_range)?;

    chart
        .configure_mesh()
        .x_desc("X values")
        .y_desc("Residuals (y_data - y_fit)")
        .draw()?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(x_range.start, 0.0), (x_range.end, 0.0)],
        style.zero_line_color.stroke_width(1),
    )))?;

    let data_color = style.data_color;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, r)| Circle::new((x, r), style.point_size, data_color.filled())),
    )?;

    root.present()?;
    Ok(())
}
