//! Best-effort error log for failed runs.
//!
//! The loader must never block session start, so failures are appended to
//! a file for later diagnosis instead of surfacing as an exit status. Writing
//! the log is itself allowed to fail; that only produces a warning.

use chrono::{DateTime, Local, TimeZone, Timelike};
use std::backtrace::Backtrace;
use std::error::Error;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Format one error-log record.
///
/// The first line is `<local time>: <error>`, followed by one `caused by:`
/// line per source and then the captured backtrace.
pub fn format_record(err: &dyn Error, backtrace: &Backtrace) -> String {
    let mut record = format!("{}: {}\n", record_time(&Local::now()), err);

    let mut source = err.source();
    while let Some(cause) = source {
        record.push_str(&format!("  caused by: {}\n", cause));
        source = cause.source();
    }

    record.push_str("stack backtrace:\n");
    record.push_str(&backtrace.to_string());
    if !record.ends_with('\n') {
        record.push('\n');
    }
    record
}

/// `YYYY-MM-DD HH:MM:SS[.ffffff]`, with the fraction left out on a whole second.
fn record_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if at.nanosecond() / 1_000 == 0 {
        at.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        at.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}

/// Append `err` to the log at `path`, creating parent directories.
pub fn append_error(path: &Path, err: &dyn Error) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let record = format_record(err, &Backtrace::force_capture());
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(record.as_bytes())
}

/// Record `err` at `path` if a path is known, swallowing write failures.
pub fn record(path: Option<&Path>, err: &dyn Error) {
    let Some(path) = path else {
        warn!(error = %err, "no error log location; dropping failure record");
        return;
    };

    if let Err(write_err) = append_error(path, err) {
        warn!(
            path = %path.display(),
            error = %write_err,
            "failed to write loader error log"
        );
    }
}
