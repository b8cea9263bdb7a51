//! Loader configuration.
//!
//! Values resolve in order CLI > environment > defaults. Environment access
//! goes through a lookup closure so resolution can be exercised without
//! touching the process environment.

use pool_common::UNKNOWN_INSTANCE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::select::{MAX_AGE_SECONDS, MAX_ENTRIES, RELEVANCE_THRESHOLD};

/// Current instance identifier.
pub const ENV_INSTANCE: &str = "CLAUDE_INSTANCE";
/// Compact toggle: compact only when exactly `"1"`.
pub const ENV_COMPACT: &str = "POOL_COMPACT";
/// Explicit pool file, bypassing project/home resolution.
pub const ENV_POOL_FILE: &str = "POOL_FILE";
/// Codebase label shown in the compact summary.
pub const ENV_CODEBASE: &str = "POOL_CODEBASE";
/// Explicit error log path.
pub const ENV_ERROR_LOG: &str = "POOL_ERROR_LOG";

/// Codebase label used when none is configured.
pub const DEFAULT_CODEBASE: &str = "MirrorBot/CVMP";

/// How selected entries are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Short session summary (default).
    #[default]
    Compact,
    /// Annotated listing of every selected entry.
    Verbose,
    /// Selected entries as a JSON document.
    Json,
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMode::Compact => write!(f, "compact"),
            OutputMode::Verbose => write!(f, "verbose"),
            OutputMode::Json => write!(f, "json"),
        }
    }
}

/// Explicit overrides, normally taken from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub instance: Option<String>,
    pub mode: Option<OutputMode>,
    pub pool_path: Option<PathBuf>,
    pub codebase: Option<String>,
    pub error_log: Option<PathBuf>,
    pub max_age_secs: Option<u64>,
    pub limit: Option<usize>,
    pub threshold: Option<f64>,
}

/// Fully resolved loader configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderConfig {
    /// Identifier of the instance the summary is rendered for.
    pub instance: String,
    pub mode: OutputMode,
    /// Pool file override; `None` means project/home resolution.
    pub pool_path: Option<PathBuf>,
    pub codebase: String,
    /// Error log override; `None` means the home-directory default.
    pub error_log: Option<PathBuf>,
    /// Maximum entry age in seconds (inclusive).
    pub max_age_secs: f64,
    /// Maximum number of entries kept after sorting.
    pub limit: usize,
    /// Minimum relevance score for entries from other instances (inclusive).
    pub threshold: f64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            instance: UNKNOWN_INSTANCE.to_string(),
            mode: OutputMode::Compact,
            pool_path: None,
            codebase: DEFAULT_CODEBASE.to_string(),
            error_log: None,
            max_age_secs: MAX_AGE_SECONDS,
            limit: MAX_ENTRIES,
            threshold: RELEVANCE_THRESHOLD,
        }
    }
}

impl LoaderConfig {
    /// Resolve from the process environment with no CLI overrides.
    pub fn from_env() -> Self {
        Self::resolve(&ConfigOverrides::default(), |key| std::env::var(key).ok())
    }

    /// Resolve from overrides, then `lookup`, then defaults.
    pub fn resolve<F>(overrides: &ConfigOverrides, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = LoaderConfig::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let instance = overrides
            .instance
            .clone()
            .or_else(|| lookup(ENV_INSTANCE))
            .unwrap_or(defaults.instance);

        let mode = overrides.mode.unwrap_or_else(|| {
            match lookup(ENV_COMPACT).as_deref().unwrap_or("1") {
                "1" => OutputMode::Compact,
                _ => OutputMode::Verbose,
            }
        });

        LoaderConfig {
            instance,
            mode,
            pool_path: overrides
                .pool_path
                .clone()
                .or_else(|| non_empty(ENV_POOL_FILE).map(PathBuf::from)),
            codebase: overrides
                .codebase
                .clone()
                .or_else(|| non_empty(ENV_CODEBASE))
                .unwrap_or(defaults.codebase),
            error_log: overrides
                .error_log
                .clone()
                .or_else(|| non_empty(ENV_ERROR_LOG).map(PathBuf::from)),
            max_age_secs: overrides
                .max_age_secs
                .map(|s| s as f64)
                .unwrap_or(defaults.max_age_secs),
            limit: overrides.limit.unwrap_or(defaults.limit),
            threshold: overrides.threshold.unwrap_or(defaults.threshold),
        }
    }

    /// Error log location, if one can be determined.
    pub fn error_log_path(&self) -> Option<PathBuf> {
        self.error_log
            .clone()
            .or_else(|| dirs::home_dir().map(|home| pool_common::paths::default_error_log_path(&home)))
    }
}
