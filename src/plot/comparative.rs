//! Comparative overlay: fitted curves for several degrees on one chart.
//!
//! Each degree is resolved and loaded independently; a degree whose artifact
//! cannot be loaded is logged and left out, and the chart is drawn with
//! whatever subset succeeded (possibly none). The artifact name always
//! encodes the full request so repeated runs land on the same file.

use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::domain::{FittedModel, ReportConfig, SampleSet};
use crate::error::PipelineError;
use crate::io::{coefficient_artifact_name, load_coefficients, resolve_artifact};
use crate::math::poly::eval_many;
use crate::math::stats::r_squared;
use crate::plot::style::ComparativeStyle;
use crate::plot::{comparative_artifact, ensure_out_dir, padded_range, plotting_domain};

/// One successfully loaded degree, ready to draw.
#[derive(Debug, Clone)]
pub struct Overlay {
    pub degree: u32,
    /// Index of this degree in the comparison request; picks the palette slot.
    pub position: usize,
    pub r_squared: f64,
    pub curve: Vec<(f64, f64)>,
}

/// Resolve, load, and evaluate every requested degree.
///
/// Returns the overlays that loaded plus the degrees that were skipped.
pub fn assemble_overlays(
    config: &ReportConfig,
    samples: &SampleSet,
    degrees: &[u32],
    style: &ComparativeStyle,
) -> (Vec<Overlay>, Vec<u32>) {
    let xs = plotting_domain(samples, style.curve_samples, style.fallback_samples);
    let sample_xs = samples.xs();
    let sample_ys = samples.ys();

    let mut overlays = Vec::with_capacity(degrees.len());
    let mut skipped = Vec::new();

    for (position, &degree) in degrees.iter().enumerate() {
        let name = coefficient_artifact_name(degree);
        let path = resolve_artifact(&config.data_dir, &name);
        let coeffs = match load_coefficients(&path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Skipping degree {degree} in comparative report: {e}");
                skipped.push(degree);
                continue;
            }
        };
        log::info!(
            "Comparative report: coefficients for degree {degree} read from {}",
            path.display()
        );

        let model = FittedModel::Present(coeffs);
        let curve = xs.iter().copied().zip(eval_many(&model, &xs)).collect();
        let r2 = r_squared(&sample_ys, &eval_many(&model, &sample_xs));

        overlays.push(Overlay {
            degree,
            position,
            r_squared: r2,
            curve,
        });
    }

    (overlays, skipped)
}

/// Render the comparative report and return its path plus skipped degrees.
pub fn render_comparative(
    config: &ReportConfig,
    samples: &SampleSet,
    degrees: &[u32],
    style: &ComparativeStyle,
) -> Result<(PathBuf, Vec<u32>), PipelineError> {
    ensure_out_dir(&config.out_dir)?;
    let path = config
        .out_dir
        .join(comparative_artifact(&config.base_name, degrees));

    let (overlays, skipped) = assemble_overlays(config, samples, degrees, style);

    draw(&path, samples, &overlays, style).map_err(|e| PipelineError::render(&path, e))?;

    log::info!("Plot saved to {}", path.display());
    Ok((path, skipped))
}

fn draw(
    path: &Path,
    samples: &SampleSet,
    overlays: &[Overlay],
    style: &ComparativeStyle,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, style.size).into_drawing_area();
    root.fill(&WHITE)?;

    let x_range = padded_range(
        samples
            .points
            .iter()
            .map(|p| p.x)
            .chain(overlays.iter().flat_map(|o| o.curve.iter().map(|&(x, _)| x))),
    );
    let y_range = padded_range(
        samples
            .points
            .iter()
            .map(|p| p.y)
            .chain(overlays.iter().flat_map(|o| o.curve.iter().map(|&(_, y)| y))),
    );

    let mut chart = ChartBuilder::on(&root)
        .caption("Comparative Polynomial Regression Fits", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc("X values")
        .y_desc("Y values")
        .draw()?;

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

    for overlay in overlays {
        let color = style.curve_color(overlay.position);
        chart
            .draw_series(LineSeries::new(overlay.curve.iter().copied(), &color))?
            .label(format!(
                "Degree {} (R²={:.3})",
                overlay.degree, overlay.r_squared
            ))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SamplePoint;
    use std::fs;
    use std::path::Path;

    fn fixture_config(root: &Path) -> ReportConfig {
        let data_dir = root.join("pipeline");
        fs::create_dir(&data_dir).unwrap();
        ReportConfig {
            data_dir,
            out_dir: root.join("reports"),
            sample_file: "data.txt".to_string(),
            base_name: "polynomial_regression".to_string(),
            target_degree: 2,
            compare_degrees: vec![1, 2, 3],
        }
    }

    fn line_samples() -> SampleSet {
        SampleSet {
            points: (0..5)
                .map(|i| SamplePoint {
                    x: i as f64,
                    y: 2.0 * i as f64 + 1.0,
                })
                .collect(),
        }
    }

    #[test]
    fn missing_degrees_are_skipped_not_fatal() {
        let root = tempfile::tempdir().unwrap();
        let config = fixture_config(root.path());
        // Artifacts for degrees 1 and 3 only; degree 2 is missing.
        fs::write(root.path().join("coefficients_deg1.txt"), "1.0\n2.0\n").unwrap();
        fs::write(config.data_dir.join("coefficients_deg3.txt"), "0.0\n0.0\n0.0\n1.0\n").unwrap();

        let style = ComparativeStyle::default();
        let (overlays, skipped) =
            assemble_overlays(&config, &line_samples(), &[1, 2, 3], &style);

        let degrees: Vec<u32> = overlays.iter().map(|o| o.degree).collect();
        assert_eq!(degrees, vec![1, 3]);
        assert_eq!(skipped, vec![2]);
        // Palette slots follow the request position, so degree 3 keeps slot 2.
        assert_eq!(overlays[1].position, 2);
    }

    #[test]
    fn overlay_for_exact_fit_reports_unit_r_squared() {
        let root = tempfile::tempdir().unwrap();
        let config = fixture_config(root.path());
        // y = 1 + 2x matches the sample set exactly.
        fs::write(root.path().join("coefficients_deg1.txt"), "1.0\n2.0\n").unwrap();

        let style = ComparativeStyle::default();
        let (overlays, skipped) = assemble_overlays(&config, &line_samples(), &[1], &style);

        assert!(skipped.is_empty());
        assert_eq!(overlays.len(), 1);
        assert_eq!(overlays[0].r_squared, 1.0);
        assert_eq!(overlays[0].curve.len(), style.curve_samples);
    }

    #[test]
    fn empty_request_yields_no_overlays() {
        let root = tempfile::tempdir().unwrap();
        let config = fixture_config(root.path());
        let (overlays, skipped) =
            assemble_overlays(&config, &line_samples(), &[], &ComparativeStyle::default());
        assert!(overlays.is_empty());
        assert!(skipped.is_empty());
    }
}
