//! Single-fit overlay: observed points plus one fitted curve.

use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::domain::{FittedModel, ReportConfig, SampleSet};
use crate::error::PipelineError;
use crate::math::poly::eval_many;
use crate::math::stats::r_squared;
use crate::plot::style::SingleFitStyle;
use crate::plot::{ensure_out_dir, padded_range, plotting_domain, single_fit_artifact};

/// Render the single-fit report for one degree and return the artifact path.
///
/// R² is computed at the sample's own x values, not the dense plotting
/// domain, so the label reflects the fit against the data actually shown.
pub fn render_single_fit(
    config: &ReportConfig,
    samples: &SampleSet,
    model: &FittedModel,
    degree: u32,
    style: &SingleFitStyle,
) -> Result<PathBuf, PipelineError> {
    ensure_out_dir(&config.out_dir)?;
    let path = config
        .out_dir
        .join(single_fit_artifact(&config.base_name, degree));

    let xs = plotting_domain(samples, style.curve_samples, style.fallback_samples);
    let curve: Vec<(f64, f64)> = xs.iter().copied().zip(eval_many(model, &xs)).collect();

    let fit_at_samples = eval_many(model, &samples.xs());
    let r2 = r_squared(&samples.ys(), &fit_at_samples);

    draw(&path, samples, &curve, degree, r2, style)
        .map_err(|e| PipelineError::render(&path, e))?;

    log::info!("Plot saved to {}", path.display());
    Ok(path)
}

fn draw(
    path: &Path,
    samples: &SampleSet,
    curve: &[(f64, f64)],
    degree: u32,
    r2: f64,
    style: &SingleFitStyle,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, style.size).into_drawing_area();
    root.fill(&WHITE)?;

    let x_range = padded_range(
        curve
            .iter()
            .map(|&(x, _)| x)
            .chain(samples.points.iter().map(|p| p.x)),
    );
    let y_range = padded_range(
        curve
            .iter()
            .map(|&(_, y)| y)
            .chain(samples.points.iter().map(|p| p.y)),
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Polynomial Regression Fit (Degree {degree})"),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc("X values")
        .y_desc("Y values")
        .draw()?;

    // Zero axis guides, clipped to the visible window.
    if y_range.contains(&0.0) {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x_range.start, 0.0), (x_range.end, 0.0)],
            BLACK.mix(0.5),
        )))?;
    }
    if x_range.contains(&0.0) {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(0.0, y_range.start), (0.0, y_range.end)],
            BLACK.mix(0.5),
        )))?;
    }

    let data_color = style.data_color;
    chart
        .draw_series(
            samples
                .points
                .iter()
                .map(|p| Circle::new((p.x, p.y), style.point_size, data_color.filled())),
        )?
        .label("Data Points")
        .legend(move |(x, y)| Circle::new((x + 10, y), 3, data_color.filled()));

    let curve_color = style.curve_color;
    chart
        .draw_series(LineSeries::new(curve.iter().copied(), &curve_color))?
        .label(format!("Fitted Polynomial (Degree {degree}), R² = {r2:.4}"))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], curve_color));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
