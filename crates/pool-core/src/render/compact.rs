//! Compact session summary.

use pool_common::{Action, PoolEntry};

use super::RenderContext;

/// Entries listed under "Recent Activity".
pub const COMPACT_TOP_ENTRIES: usize = 5;

/// Render the short summary injected at session start.
///
/// Always produces output: with no entries it reports that the pool is
/// quiet.
pub fn render_compact(entries: &[PoolEntry], ctx: &RenderContext<'_>) -> String {
    if entries.is_empty() {
        return format!(
            "## Session Context\n- **Codebase**: {}\n- **Instance Pool**: No recent activity\n",
            ctx.codebase
        );
    }

    // Only an explicitly recorded source counts as own here.
    let own = entries
        .iter()
        .filter(|e| e.is_written_by(ctx.instance))
        .count();
    let others = entries.len() - own;
    let blocked = entries.iter().filter(|e| e.has_action(&Action::Blocked)).count();
    let completed = entries
        .iter()
        .filter(|e| e.has_action(&Action::Completed))
        .count();

    let mut lines = vec![
        "## Session Context".to_string(),
        format!("- **Instance**: {}", ctx.instance),
        format!(
            "- **Pool**: {} recent ({} own, {} others)",
            entries.len(),
            own,
            others
        ),
        format!("- **Status**: {} completed, {} blocked", completed, blocked),
        "\n### Recent Activity".to_string(),
    ];

    for entry in entries.iter().take(COMPACT_TOP_ENTRIES) {
        lines.push(format!(
            "- [{}] {}: {}",
            entry.source(),
            entry.action.as_ref().map(Action::as_str).unwrap_or(""),
            entry.topic.as_deref().unwrap_or("")
        ));
    }

    lines.join("\n") + "\n"
}
