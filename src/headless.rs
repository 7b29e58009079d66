//! Plain-text output for the `search` and `timeline` subcommands.

use cynosure_core::{
    present::{self, day_label, timeline_line},
    search, timeline, Catalog, Filters,
};

/// Count line followed by one text card per result, blank-line separated.
pub fn render_search(catalog: &Catalog, query: &str, filters: &Filters, show_brochure: bool) -> String {
    let rows = search(catalog.events(), query, filters);
    tracing::debug!(query, results = rows.len(), "headless search");

    let mut out = present::result_count_line(rows.len());
    for event in rows {
        out.push_str("\n\n");
        out.push_str(&present::text_card(event, show_brochure));
    }
    out.push('\n');
    out
}

/// The days to print, each with its 1-based position in `configured`.
///
/// `pick` may be a day token or a day number. A token the configuration
/// does not list is still printed, numbered after the configured days.
pub fn resolve_days(configured: &[String], pick: Option<&str>) -> Vec<(usize, String)> {
    let Some(pick) = pick else {
        return configured.iter().cloned().enumerate().map(|(i, d)| (i + 1, d)).collect();
    };
    if let Some(i) = configured.iter().position(|d| d == pick) {
        return vec![(i + 1, pick.to_string())];
    }
    match pick.parse::<usize>() {
        Ok(n) if (1..=configured.len()).contains(&n) => vec![(n, configured[n - 1].clone())],
        _ => vec![(configured.len() + 1, pick.to_string())],
    }
}

/// Day heading then one indented running-order line per event.
pub fn render_timeline(catalog: &Catalog, days: &[(usize, String)]) -> String {
    let mut out = String::new();
    for (n, day) in days {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&day_label(*n, day));
        out.push('\n');
        let events = timeline(catalog.events(), day);
        if events.is_empty() {
            out.push_str("  (nothing scheduled)\n");
        }
        for event in events {
            out.push_str("  ");
            out.push_str(&timeline_line(event));
            out.push('\n');
        }
    }
    out
}
