//! Output renderers.
//!
//! All renderers are pure: the same entries, instance and clock give the
//! same text. Nothing here touches stdout.

pub mod compact;
pub mod json;
pub mod verbose;

pub use compact::render_compact;
pub use json::render_json;
pub use verbose::{format_time_ago, render_verbose};

use pool_common::{PoolEntry, Result};

use crate::config::OutputMode;

/// Inputs shared by every renderer besides the entries themselves.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Instance the output is addressed to.
    pub instance: &'a str,
    /// Current time in epoch seconds.
    pub now: f64,
    /// Codebase label for the compact summary.
    pub codebase: &'a str,
}

/// Render `entries` in the requested mode.
///
/// An empty string means there is nothing to print.
pub fn render(mode: OutputMode, entries: &[PoolEntry], ctx: &RenderContext<'_>) -> Result<String> {
    match mode {
        OutputMode::Compact => Ok(render_compact(entries, ctx)),
        OutputMode::Verbose => Ok(render_verbose(entries, ctx)),
        OutputMode::Json => render_json(entries, ctx),
    }
}
