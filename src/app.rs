//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the run configuration (paths, naming)
//! - drives the report pipeline
//! - prints the end-of-run summary

use clap::Parser;

use crate::cli::Cli;
use crate::domain::ReportConfig;
use crate::error::PipelineError;

pub mod pipeline;

/// Entry point for the `polyreport` binary.
pub fn run() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = report_config_from_args(&cli);
    let summary = pipeline::run_report(&config)?;

    println!(
        "Wrote {} report(s) to {} ({} sample(s), {} degree(s) skipped).",
        summary.artifacts.len(),
        config.out_dir.display(),
        summary.samples_loaded,
        summary.skipped_degrees.len(),
    );
    Ok(())
}

/// Build the run configuration from parsed arguments.
///
/// The pipeline directory is absolutized first: a relative `--data-dir`
/// (notably the default `.`) has a degenerate `parent()`, which would
/// collapse the two-tier artifact search into probing the same directory
/// twice. The output directory defaults to a `reports` directory that is a
/// sibling of the pipeline directory, mirroring where the fitting engine
/// drops its root-level artifacts.
pub fn report_config_from_args(cli: &Cli) -> ReportConfig {
    let data_dir = if cli.data_dir.is_relative() {
        std::env::current_dir()
            .map(|cwd| cwd.join(&cli.data_dir))
            .unwrap_or_else(|_| cli.data_dir.clone())
    } else {
        cli.data_dir.clone()
    };

    let out_dir = cli
        .out_dir
        .clone()
        .unwrap_or_else(|| data_dir.parent().unwrap_or(data_dir.as_path()).join("reports"));

    ReportConfig {
        data_dir,
        out_dir,
        sample_file: cli.data_file.clone(),
        base_name: cli.base_name.clone(),
        target_degree: cli.degree,
        compare_degrees: cli.compare.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn relative_data_dir_is_absolutized() {
        let cli = Cli::parse_from(["polyreport", "--data-dir", "."]);
        let config = report_config_from_args(&cli);

        assert!(config.data_dir.is_absolute());
        // The parent-level candidate must differ from the pipeline directory
        // so the two-tier search actually probes two locations.
        let parent = config.data_dir.parent().unwrap();
        assert_ne!(parent.join("x"), config.data_dir.join("x"));
        assert_eq!(config.out_dir, parent.join("reports"));
    }

    #[test]
    fn absolute_data_dir_and_explicit_out_dir_pass_through() {
        let cli = Cli::parse_from([
            "polyreport",
            "--data-dir",
            "/tmp/project/pipeline",
            "--out-dir",
            "/tmp/elsewhere",
        ]);
        let config = report_config_from_args(&cli);

        assert_eq!(config.data_dir, std::path::Path::new("/tmp/project/pipeline"));
        assert_eq!(config.out_dir, std::path::Path::new("/tmp/elsewhere"));
    }
}
