//! One loader run: resolve, read, select, render.

use pool_common::{PoolError, Result};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::{debug, info};

use crate::config::LoaderConfig;
use crate::logging::{event_names, LogContext, Stage};
use crate::pool::{read_entries, resolve_pool_path};
use crate::render::{render, RenderContext};
use crate::select::{select, SelectOptions};

/// Current time as fractional epoch seconds.
pub fn now_epoch_secs() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

/// Produce the text to print for `config` at time `now`.
///
/// `project_root` is where the project-local pool is looked for; `home` is
/// the fallback location. An empty result means nothing should be printed.
pub fn run(
    config: &LoaderConfig,
    ctx: &LogContext,
    project_root: &Path,
    home: Option<&Path>,
    now: f64,
) -> Result<String> {
    let path = resolve_pool_path(config.pool_path.as_deref(), project_root, home)?;
    debug!(
        event = event_names::POOL_RESOLVED,
        run_id = %ctx.run_id,
        stage = %Stage::Resolve,
        path = %path.display(),
        "pool file resolved"
    );

    let entries = read_entries(&path)?;
    debug!(
        event = event_names::POOL_READ,
        run_id = %ctx.run_id,
        stage = %Stage::Read,
        entries = entries.len(),
        "pool entries read"
    );

    let opts = SelectOptions {
        instance: &config.instance,
        now,
        max_age: config.max_age_secs,
        threshold: config.threshold,
        limit: config.limit,
    };
    let selected = select(entries, &opts);
    info!(
        event = event_names::POOL_SELECTED,
        run_id = %ctx.run_id,
        instance = %ctx.instance,
        stage = %Stage::Select,
        selected = selected.len(),
        "pool entries selected"
    );

    let render_ctx = RenderContext {
        instance: &config.instance,
        now,
        codebase: &config.codebase,
    };
    let output = render(config.mode, &selected, &render_ctx)?;
    debug!(
        event = event_names::RENDER_DONE,
        run_id = %ctx.run_id,
        stage = %Stage::Render,
        mode = %config.mode,
        bytes = output.len(),
        "output rendered"
    );

    Ok(output)
}

/// Run `f`, turning a panic into [`PoolError::Panic`].
pub fn catch_panic<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        Err(PoolError::Panic {
            message: panic_message(payload.as_ref()),
        })
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
