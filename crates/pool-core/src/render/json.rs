//! Machine-readable output of the selected entries.

use chrono::{DateTime, SecondsFormat, Utc};
use pool_common::{PoolEntry, PoolError, Result};
use serde::Serialize;

use super::RenderContext;

/// JSON document emitted by `--mode json`.
#[derive(Debug, Serialize)]
pub struct PoolReport<'a> {
    pub instance: &'a str,
    /// RFC 3339 time the selection was made.
    pub generated_at: String,
    pub count: usize,
    pub entries: &'a [PoolEntry],
}

pub fn render_json(entries: &[PoolEntry], ctx: &RenderContext<'_>) -> Result<String> {
    let report = PoolReport {
        instance: ctx.instance,
        generated_at: epoch_to_rfc3339(ctx.now)?,
        count: entries.len(),
        entries,
    };
    serde_json::to_string_pretty(&report).map_err(|source| PoolError::Serialize { source })
}

fn epoch_to_rfc3339(secs: f64) -> Result<String> {
    if !secs.is_finite() || secs.abs() > i64::MAX as f64 {
        return Err(PoolError::InvalidTime { secs });
    }
    let whole = secs.floor();
    let nanos = (((secs - whole) * 1e9) as u32).min(999_999_999);
    DateTime::<Utc>::from_timestamp(whole as i64, nanos)
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .ok_or(PoolError::InvalidTime { secs })
}
