//! JSONL pool reader.
//!
//! Other instances append to the pool while we read it, so the last line
//! may be half written. Every line decodes on its own and failures skip
//! just that line.

use pool_common::{PoolEntry, PoolError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::debug;

/// Line counts from one pass over the pool file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Non-blank lines seen.
    pub lines: usize,
    /// Lines that decoded into entries.
    pub parsed: usize,
    /// Lines dropped as malformed.
    pub skipped: usize,
}

/// Read every well-formed entry from `path`.
///
/// A missing file yields no entries.
pub fn read_entries(path: &Path) -> Result<Vec<PoolEntry>> {
    read_entries_with_stats(path).map(|(entries, _)| entries)
}

/// Like [`read_entries`], also returning line counts.
pub fn read_entries_with_stats(path: &Path) -> Result<(Vec<PoolEntry>, ReadStats)> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "pool file not found");
            return Ok((Vec::new(), ReadStats::default()));
        }
        Err(e) => return Err(PoolError::io(path, e)),
    };

    let mut reader = BufReader::new(file);
    let mut entries = Vec::new();
    let mut stats = ReadStats::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| PoolError::io(path, e))?;
        if read == 0 {
            break;
        }

        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        stats.lines += 1;

        match PoolEntry::from_json_line(&line) {
            Ok(entry) => {
                stats.parsed += 1;
                entries.push(entry);
            }
            Err(e) => {
                stats.skipped += 1;
                debug!(line = stats.lines, error = %e, "skipping malformed pool line");
            }
        }
    }

    debug!(
        path = %path.display(),
        parsed = stats.parsed,
        skipped = stats.skipped,
        "pool file read"
    );

    Ok((entries, stats))
}
