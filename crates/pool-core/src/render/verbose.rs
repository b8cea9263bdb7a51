//! Annotated listing of every selected entry.

use pool_common::{Action, PoolEntry};

use super::RenderContext;

/// Format an age in seconds as `Ns ago`, `Nm ago` or `Nh ago`.
///
/// Values truncate toward zero.
pub fn format_time_ago(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{}s ago", seconds as i64)
    } else if seconds < 3600.0 {
        format!("{}m ago", (seconds / 60.0) as i64)
    } else {
        format!("{}h ago", (seconds / 3600.0) as i64)
    }
}

fn action_emoji(action: &Action) -> &'static str {
    match action {
        Action::Completed => "✅",
        Action::Blocked => "🚫",
        Action::Signaling => "📡",
        Action::Claimed => "🔒",
        Action::Health => "💚",
        Action::Other(_) => "📌",
    }
}

/// Render the verbose listing, or an empty string when there is nothing
/// to show.
pub fn render_verbose(entries: &[PoolEntry], ctx: &RenderContext<'_>) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut lines = vec![
        "## 🔄 Recent Instance Activity".to_string(),
        format!(
            "> You are Instance **{}** in a distributed development system.",
            ctx.instance
        ),
        "> Recent work by you and other instances:\n".to_string(),
    ];

    for entry in entries {
        let prefix = if entry.is_from(ctx.instance) {
            "🔵 **[YOU]**".to_string()
        } else {
            format!("🟢 **[{}]**", entry.source())
        };
        let action = entry.action.clone().unwrap_or(Action::Signaling);

        lines.push(format!(
            "{} {} **{}** — {}",
            prefix,
            action_emoji(&action),
            action,
            entry.topic.as_deref().unwrap_or("unknown")
        ));
        lines.push(format!("  _{}_", entry.summary.as_deref().unwrap_or("")));

        if let Some(affects) = entry.affects.as_deref().filter(|a| !a.is_empty()) {
            lines.push(format!("  📂 Affects: `{}`", affects));
        }
        if let Some(blocks) = entry.blocks.as_deref().filter(|b| !b.is_empty()) {
            lines.push(format!("  🔓 Unblocks: {}", blocks));
        }

        lines.push(format!(
            "  🕐 {} | Relevance: {:.0}%\n",
            format_time_ago(ctx.now - entry.timestamp_secs()),
            entry.relevance_for(ctx.instance) * 100.0
        ));
    }

    lines.push("---\n".to_string());
    lines.join("\n")
}
