//! Recency and relevance selection over pool entries.

use pool_common::PoolEntry;

/// Maximum entries kept after sorting.
pub const MAX_ENTRIES: usize = 20;

/// Entries older than this many seconds are dropped.
pub const MAX_AGE_SECONDS: f64 = 3600.0;

/// Minimum relevance score for entries from other instances.
pub const RELEVANCE_THRESHOLD: f64 = 0.3;

/// Parameters for [`select`].
#[derive(Debug, Clone)]
pub struct SelectOptions<'a> {
    /// Instance the selection is made for.
    pub instance: &'a str,
    /// Current time in epoch seconds.
    pub now: f64,
    pub max_age: f64,
    pub threshold: f64,
    pub limit: usize,
}

impl<'a> SelectOptions<'a> {
    /// Default bounds for `instance` at `now`.
    pub fn new(instance: &'a str, now: f64) -> Self {
        SelectOptions {
            instance,
            now,
            max_age: MAX_AGE_SECONDS,
            threshold: RELEVANCE_THRESHOLD,
            limit: MAX_ENTRIES,
        }
    }
}

/// Whether `entry` is at most `max_age` seconds old at `now`.
///
/// Entries stamped in the future count as recent.
pub fn is_recent(entry: &PoolEntry, now: f64, max_age: f64) -> bool {
    now - entry.timestamp_secs() <= max_age
}

/// Whether `entry` matters to `instance`.
///
/// Own entries always qualify, as do entries that block something.
/// Everything else must reach `threshold`.
pub fn is_relevant(entry: &PoolEntry, instance: &str, threshold: f64) -> bool {
    entry.is_from(instance)
        || entry.relevance_for(instance) >= threshold
        || entry.blocks_something()
}

/// Filter, sort newest first, and truncate.
///
/// The sort is stable, so entries with equal timestamps keep file order.
pub fn select(entries: Vec<PoolEntry>, opts: &SelectOptions<'_>) -> Vec<PoolEntry> {
    let mut kept: Vec<PoolEntry> = entries
        .into_iter()
        .filter(|e| is_recent(e, opts.now, opts.max_age))
        .filter(|e| is_relevant(e, opts.instance, opts.threshold))
        .collect();

    kept.sort_by(|a, b| b.timestamp_secs().total_cmp(&a.timestamp_secs()));
    kept.truncate(opts.limit);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const NOW: f64 = 1_700_000_000.0;

    fn entry(source: &str, age: f64) -> PoolEntry {
        PoolEntry {
            timestamp: Some(NOW - age),
            source_instance: Some(source.into()),
            ..Default::default()
        }
    }

    fn scored(source: &str, age: f64, instance: &str, score: f64) -> PoolEntry {
        PoolEntry {
            relevance: HashMap::from([(instance.to_string(), score.into())]),
            ..entry(source, age)
        }
    }

    #[test]
    fn test_own_entry_kept_at_zero_relevance() {
        let selected = select(vec![scored("A", 10.0, "A", 0.0)], &SelectOptions::new("A", NOW));
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_other_entry_needs_threshold() {
        let entries = vec![
            scored("B", 10.0, "A", 0.29),
            scored("B", 20.0, "A", 0.3),
            scored("B", 30.0, "A", 0.9),
        ];
        let selected = select(entries, &SelectOptions::new("A", NOW));
        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|e| e.relevance_for("A") >= 0.3));
    }

    #[test]
    fn test_relevance_for_other_instance_ignored() {
        let selected = select(vec![scored("B", 10.0, "C", 1.0)], &SelectOptions::new("A", NOW));
        assert!(selected.is_empty());
    }

    #[test]
    fn test_blocking_entry_kept() {
        let blocking = PoolEntry {
            blocks: Some("A".to_string()),
            ..entry("B", 10.0)
        };
        let selected = select(vec![blocking], &SelectOptions::new("A", NOW));
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_age_bound_is_inclusive() {
        let entries = vec![entry("A", 3600.0), entry("A", 3600.5)];
        let selected = select(entries, &SelectOptions::new("A", NOW));
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].timestamp, Some(NOW - 3600.0));
    }

    #[test]
    fn test_old_entries_dropped_regardless_of_relevance() {
        let old_blocking = PoolEntry {
            blocks: Some("A".to_string()),
            ..scored("A", 7200.0, "A", 1.0)
        };
        let selected = select(vec![old_blocking], &SelectOptions::new("A", NOW));
        assert!(selected.is_empty());
    }

    #[test]
    fn test_missing_timestamp_is_ancient() {
        let undated = PoolEntry {
            source_instance: Some("A".into()),
            ..Default::default()
        };
        assert!(select(vec![undated], &SelectOptions::new("A", NOW)).is_empty());
    }

    #[test]
    fn test_future_entry_is_recent() {
        assert!(is_recent(&entry("A", -120.0), NOW, MAX_AGE_SECONDS));
    }

    #[test]
    fn test_sorted_newest_first() {
        let entries = vec![entry("A", 300.0), entry("A", 5.0), entry("A", 60.0)];
        let selected = select(entries, &SelectOptions::new("A", NOW));
        let ages: Vec<f64> = selected.iter().map(|e| NOW - e.timestamp_secs()).collect();
        assert_eq!(ages, vec![5.0, 60.0, 300.0]);
    }

    #[test]
    fn test_ties_keep_file_order() {
        let mut first = entry("A", 10.0);
        first.topic = Some("first".to_string());
        let mut second = entry("A", 10.0);
        second.topic = Some("second".to_string());

        let selected = select(vec![first, second], &SelectOptions::new("A", NOW));
        assert_eq!(selected[0].topic.as_deref(), Some("first"));
        assert_eq!(selected[1].topic.as_deref(), Some("second"));
    }

    #[test]
    fn test_capped_at_limit_keeping_newest() {
        let entries: Vec<PoolEntry> = (0..30).map(|i| entry("A", i as f64)).collect();
        let selected = select(entries, &SelectOptions::new("A", NOW));
        assert_eq!(selected.len(), MAX_ENTRIES);
        assert_eq!(selected[0].timestamp, Some(NOW));
        assert_eq!(selected[19].timestamp, Some(NOW - 19.0));
    }

    #[test]
    fn test_null_source_is_not_own() {
        let null_source = PoolEntry {
            timestamp: Some(NOW),
            source_instance: Some(serde_json::Value::Null),
            ..Default::default()
        };
        assert!(select(vec![null_source], &SelectOptions::new("?", NOW)).is_empty());
    }

    #[test]
    fn test_unknown_instance_matches_unsourced_entries() {
        let unsourced = PoolEntry {
            timestamp: Some(NOW),
            ..Default::default()
        };
        let selected = select(vec![unsourced], &SelectOptions::new("?", NOW));
        assert_eq!(selected.len(), 1);
    }
}
