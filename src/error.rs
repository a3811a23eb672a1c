//! Error types for mining and its collaborators.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `AprioriError`.
pub type Result<T> = std::result::Result<T, AprioriError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AprioriError {
    /// A threshold or option outside its domain. Raised before any
    /// transaction is scanned.
    #[error("InvalidParameter: {0}")]
    InvalidParameter(String),

    /// A transaction source that cannot be parsed into item sets.
    #[error("MalformedInput: line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    /// The transaction source (or a config file) is missing or unreadable.
    #[error("ResourceUnavailable: {}: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Mining was stopped at a level boundary. `level` is the last level
    /// that completed.
    #[error("Cancelled after level {level}")]
    Cancelled { level: usize },

    #[error("ThreadPool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Config file or report (de)serialization failure.
    #[error("SerdeJsonError: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl AprioriError {
    /// Create a new `InvalidParameter` error.
    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Create a new `MalformedInput` error for a 1-based line number.
    pub fn malformed<S: Into<String>>(line: usize, msg: S) -> Self {
        Self::MalformedInput {
            line,
            message: msg.into(),
        }
    }

    pub fn unavailable<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::ResourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// True for the conditions a front end reports as a plain user-facing
    /// message rather than an internal failure.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter(_) | Self::MalformedInput { .. } | Self::ResourceUnavailable { .. }
        )
    }
}

#[cfg(feature = "python")]
impl From<AprioriError> for pyo3::PyErr {
    fn from(err: AprioriError) -> Self {
        use pyo3::exceptions::{PyOSError, PyRuntimeError, PyValueError};

        match err {
            AprioriError::InvalidParameter(msg) => PyValueError::new_err(msg),
            AprioriError::MalformedInput { .. } => PyValueError::new_err(err.to_string()),
            AprioriError::ResourceUnavailable { .. } => PyOSError::new_err(err.to_string()),
            _ => PyRuntimeError::new_err(err.to_string()),
        }
    }
}
