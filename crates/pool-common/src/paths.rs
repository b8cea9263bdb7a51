//! Well-known locations of the pool file and the loader error log.
//!
//! Both live under a `.claude/pool/` directory, either in the current
//! project or in the user's home directory.

use std::path::{Path, PathBuf};

/// Directory whose presence marks a project root that may carry its own pool.
pub const PROJECT_MARKER_DIR: &str = ".claude";

/// Pool directory, relative to a project root or the home directory.
pub const POOL_DIR: &str = ".claude/pool";

/// Pool file name inside [`POOL_DIR`].
pub const POOL_FILENAME: &str = "instance_state.jsonl";

/// Error log file name inside [`POOL_DIR`].
pub const ERROR_LOG_FILENAME: &str = "loader_errors.log";

/// Instance identifier used when none is configured.
pub const UNKNOWN_INSTANCE: &str = "?";

/// Pool path for a project rooted at `root`.
pub fn project_pool_path(root: &Path) -> PathBuf {
    root.join(POOL_DIR).join(POOL_FILENAME)
}

/// Pool path under the user's home directory.
pub fn global_pool_path(home: &Path) -> PathBuf {
    home.join(POOL_DIR).join(POOL_FILENAME)
}

/// Default error log path under the user's home directory.
pub fn default_error_log_path(home: &Path) -> PathBuf {
    home.join(POOL_DIR).join(ERROR_LOG_FILENAME)
}
