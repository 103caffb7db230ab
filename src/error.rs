use std::path::PathBuf;
use thiserror::Error;

/// Main error type for navpatch
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO error on {}: {}", .path.display(), .source)]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid pattern for pass '{name}': {source}")]
    Pattern {
        name: String,
        source: regex::Error,
    },

    #[error("No replacements performed by: {}", .passes.join(", "))]
    Unmatched { passes: Vec<String> },
}

impl PatchError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source: err,
            path: path.into(),
        }
    }

    /// Create a new pattern compilation error
    pub fn pattern_error(name: impl Into<String>, err: regex::Error) -> Self {
        Self::Pattern {
            name: name.into(),
            source: err,
        }
    }

    pub fn unmatched(passes: Vec<String>) -> Self {
        Self::Unmatched { passes }
    }
}

/// Result type alias using PatchError
pub type PatchResult<T> = Result<T, PatchError>;

/// Contextual error mapping function
pub fn map_io_err<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> PatchError {
    let path = path.into();
    move |err| PatchError::io_error(err, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_keeps_path() {
        let err = PatchError::io_error(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            "/tmp/MainWindowView.swift",
        );
        match &err {
            PatchError::Io { path, .. } => {
                assert_eq!(path, &PathBuf::from("/tmp/MainWindowView.swift"))
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("/tmp/MainWindowView.swift"));
    }

    #[test]
    fn test_unmatched_lists_passes() {
        let err = PatchError::unmatched(vec!["view-property".into(), "call-site".into()]);
        assert_eq!(
            err.to_string(),
            "No replacements performed by: view-property, call-site"
        );
    }
}
