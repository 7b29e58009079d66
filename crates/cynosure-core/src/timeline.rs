//! Timeline builder — one day's events in running order.
//!
//! Timelines ignore the search state entirely. Ordering is a plain lexical
//! sort on the raw `time` string, so chronological order only emerges when
//! the document uses one sortable time format throughout.

use crate::types::Event;
use std::cmp::Ordering;

/// Events on `day` (including `Both` events), scheduled ones first by time,
/// then unscheduled ones; ties broken by event name.
pub fn timeline<'a>(events: &'a [Event], day: &str) -> Vec<&'a Event> {
    let mut rows: Vec<&Event> = events.iter().filter(|e| e.occurs_on(day)).collect();
    rows.sort_by(|a, b| running_order(a, b));
    rows
}

/// Present times before absent ones, then lexical time, then name.
pub fn running_order(a: &Event, b: &Event) -> Ordering {
    slot(a)
        .cmp(&slot(b))
        .then_with(|| a.event_name.cmp(&b.event_name))
}

/// `(unscheduled, time)`; `false` sorts first.
fn slot(e: &Event) -> (bool, &str) {
    match e.time.as_deref() {
        Some(t) if !t.is_empty() => (false, t),
        _ => (true, ""),
    }
}
