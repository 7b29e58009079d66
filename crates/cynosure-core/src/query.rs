//! Query pipeline — free-text match, then categorical filter.
//!
//! Survivors keep their document order; nothing is re-sorted or de-duplicated.

use crate::{filter::Filters, matcher::Query, types::Event};

pub fn search<'a>(events: &'a [Event], query: &str, filters: &Filters) -> Vec<&'a Event> {
    let query = Query::parse(query);
    let rows: Vec<&Event> = events
        .iter()
        .filter(|e| query.matches(e))
        .filter(|e| filters.passes(e))
        .collect();
    tracing::debug!(
        terms = query.terms().len(),
        filtered = !filters.is_empty(),
        total = events.len(),
        hits = rows.len(),
        "search pass"
    );
    rows
}
