//! Error type for the pool loader.
//!
//! None of these errors ever reach the caller as a failed exit status.
//! The binary records them in the loader error log and exits cleanly.
//! Malformed pool lines are not errors at all; the reader skips them.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pool loader operations.
pub type Result<T> = std::result::Result<T, PoolError>;

/// Failures that abort a loader run.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to resolve home directory (set HOME or pass --pool)")]
    HomeUnavailable,

    #[error("failed to serialize pool output: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("clock reading {secs} is not a representable time")]
    InvalidTime { secs: f64 },

    #[error("invalid arguments: {message}")]
    Args { message: String },

    #[error("loader panicked: {message}")]
    Panic { message: String },
}

impl PoolError {
    /// Wrap an I/O error with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PoolError::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable short name, used as a structured log field.
    pub fn code_name(&self) -> &'static str {
        match self {
            PoolError::Io { .. } => "ERR_IO",
            PoolError::HomeUnavailable => "ERR_HOME",
            PoolError::Serialize { .. } => "ERR_SERIALIZE",
            PoolError::InvalidTime { .. } => "ERR_TIME",
            PoolError::Args { .. } => "ERR_ARGS",
            PoolError::Panic { .. } => "ERR_PANIC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_keeps_source() {
        let err = PoolError::io(
            "/tmp/pool.jsonl",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/tmp/pool.jsonl"));
        assert!(err.source().is_some());
        assert_eq!(err.code_name(), "ERR_IO");
    }

    #[test]
    fn test_panic_message() {
        let err = PoolError::Panic {
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "loader panicked: boom");
    }
}
