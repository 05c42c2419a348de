use std::io;
use std::path::{Path, PathBuf};

/// Crate-wide error type.
///
/// Each variant maps to a stable process exit code so scripted callers can
/// distinguish input problems from internal ones without parsing messages.
#[derive(Debug)]
pub enum PipelineError {
    /// An input artifact (sample file or coefficient file) does not exist.
    NotFound { path: PathBuf },
    /// An I/O fault occurred mid-read; no partial data is returned.
    Read { path: PathBuf, source: io::Error },
    /// A coefficient line failed to parse as a float. Fatal to that load only.
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },
    /// Observed and fitted series have different lengths.
    Shape { expected: usize, actual: usize },
    /// A chart could not be drawn or written.
    Render { path: PathBuf, message: String },
}

impl PipelineError {
    pub fn render(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Render {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound { .. } | Self::Read { .. } | Self::Parse { .. } => 2,
            Self::Render { .. } => 3,
            Self::Shape { .. } => 4,
        }
    }
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "File '{}' not found.", path.display()),
            Self::Read { path, source } => {
                write!(f, "Error reading '{}': {source}", path.display())
            }
            Self::Parse { path, line, token } => write!(
                f,
                "Invalid coefficient '{token}' at line {line} of '{}'.",
                path.display()
            ),
            Self::Shape { expected, actual } => write!(
                f,
                "Series length mismatch: expected {expected} values, got {actual}."
            ),
            Self::Render { path, message } => {
                write!(f, "Error saving plot '{}': {message}", path.display())
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}
