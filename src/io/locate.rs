//! Two-tier artifact path resolution.
//!
//! The fitting engine drops coefficient artifacts either at the project root
//! (one level above the pipeline directory) or next to the pipeline itself.
//! Resolution probes the parent-level candidate first, then the local one.

use std::path::{Path, PathBuf};

/// File name of the coefficient artifact for a given degree.
pub fn coefficient_artifact_name(degree: u32) -> String {
    format!("coefficients_deg{degree}.txt")
}

/// Resolve the path of a named artifact relative to `base_dir`.
///
/// Candidates, in order: `parent(base_dir)/name`, then `base_dir/name`. The
/// first existing path wins. When neither exists the parent candidate is
/// returned anyway, so the loader reports one consistent, reproducible
/// missing path. Pure filesystem probe, no side effects.
pub fn resolve_artifact(base_dir: &Path, name: &str) -> PathBuf {
    let parent = base_dir.parent().unwrap_or(base_dir).join(name);
    if parent.exists() {
        return parent;
    }

    let local = base_dir.join(name);
    log::info!(
        "Artifact '{}' not found, trying '{}'",
        parent.display(),
        local.display()
    );
    if local.exists() {
        return local;
    }

    parent
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn artifact_name_embeds_degree() {
        assert_eq!(coefficient_artifact_name(3), "coefficients_deg3.txt");
    }

    #[test]
    fn parent_candidate_wins_when_present() {
        let root = tempfile::tempdir().unwrap();
        let base = root.path().join("pipeline");
        fs::create_dir(&base).unwrap();
        fs::write(root.path().join("c.txt"), "1.0\n").unwrap();
        fs::write(base.join("c.txt"), "2.0\n").unwrap();

        assert_eq!(resolve_artifact(&base, "c.txt"), root.path().join("c.txt"));
    }

    #[test]
    fn falls_back_to_local_candidate() {
        let root = tempfile::tempdir().unwrap();
        let base = root.path().join("pipeline");
        fs::create_dir(&base).unwrap();
        fs::write(base.join("c.txt"), "2.0\n").unwrap();

        assert_eq!(resolve_artifact(&base, "c.txt"), base.join("c.txt"));
    }

    #[test]
    fn missing_everywhere_reports_parent_path() {
        let root = tempfile::tempdir().unwrap();
        let base = root.path().join("pipeline");
        fs::create_dir(&base).unwrap();

        assert_eq!(resolve_artifact(&base, "c.txt"), root.path().join("c.txt"));
    }
}
