//! Structured event vocabulary for diagnostic logs.
//!
//! Every event carries the run id and the instance it ran for, so lines
//! from concurrent session starts can be told apart.

use serde::{Deserialize, Serialize};

/// Phases of a loader run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Init,
    Resolve,
    Read,
    Select,
    Render,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Init => "init",
            Stage::Resolve => "resolve",
            Stage::Read => "read",
            Stage::Select => "select",
            Stage::Render => "render",
        };
        write!(f, "{}", s)
    }
}

/// Standard event names used in logging.
pub mod event_names {
    pub const RUN_STARTED: &str = "run.started";
    pub const RUN_FAILED: &str = "run.failed";
    pub const POOL_RESOLVED: &str = "pool.resolved";
    pub const POOL_READ: &str = "pool.read";
    pub const POOL_SELECTED: &str = "pool.selected";
    pub const RENDER_DONE: &str = "render.done";
}

/// Correlation fields attached to every event of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContext {
    pub run_id: String,
    pub instance: String,
}

impl LogContext {
    pub fn new(run_id: impl Into<String>, instance: impl Into<String>) -> Self {
        LogContext {
            run_id: run_id.into(),
            instance: instance.into(),
        }
    }
}
