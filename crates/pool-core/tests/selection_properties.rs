//! Property tests for pool selection.

use pool_common::PoolEntry;
use pool_core::select::{is_recent, is_relevant, select, SelectOptions, MAX_ENTRIES};
use proptest::prelude::*;
use std::collections::HashMap;

const NOW: f64 = 1_700_000_000.0;
const INSTANCES: [&str; 3] = ["A", "B", "C"];

fn arb_entry() -> impl Strategy<Value = PoolEntry> {
    (
        -600.0f64..10_000.0,
        0usize..3,
        proptest::option::of(0.0f64..=1.0),
        any::<bool>(),
    )
        .prop_map(|(age, src, score, blocks)| PoolEntry {
            timestamp: Some(NOW - age),
            source_instance: Some(INSTANCES[src].into()),
            blocks: blocks.then(|| "X".to_string()),
            relevance: score
                .map(|s| HashMap::from([("A".to_string(), serde_json::Value::from(s))]))
                .unwrap_or_default(),
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn selection_is_bounded_sorted_and_qualified(entries in proptest::collection::vec(arb_entry(), 0..60)) {
        let opts = SelectOptions::new("A", NOW);
        let qualifying = entries
            .iter()
            .filter(|e| is_recent(e, NOW, opts.max_age) && is_relevant(e, "A", opts.threshold))
            .count();

        let selected = select(entries, &opts);

        prop_assert_eq!(selected.len(), qualifying.min(MAX_ENTRIES));
        for pair in selected.windows(2) {
            prop_assert!(pair[0].timestamp_secs() >= pair[1].timestamp_secs());
        }
        for entry in &selected {
            prop_assert!(NOW - entry.timestamp_secs() <= opts.max_age);
            prop_assert!(
                entry.is_from("A") || entry.relevance_for("A") >= 0.3 || entry.blocks_something()
            );
        }
    }

    #[test]
    fn own_recent_entries_survive_when_under_limit(ages in proptest::collection::vec(0.0f64..3600.0, 0..MAX_ENTRIES)) {
        let entries: Vec<PoolEntry> = ages
            .iter()
            .map(|age| PoolEntry {
                timestamp: Some(NOW - age),
                source_instance: Some("A".into()),
                ..Default::default()
            })
            .collect();

        let selected = select(entries, &SelectOptions::new("A", NOW));
        prop_assert_eq!(selected.len(), ages.len());
    }
}
