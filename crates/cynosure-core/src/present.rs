//! Presentation helpers shared by the TUI and the headless printer.
//!
//! Everything here is pure string formatting over an [`Event`]; no styling.

use crate::{
    filter::Restricted,
    types::{Event, Quantity},
};
use chrono::NaiveDate;
use serde_json::Value;

/// Shown in a timeline when an event has no time.
pub const FULL_DAY: &str = "Full-day";
/// Shown in a timeline when an event has no venue.
pub const VENUE_TBA: &str = "TBA";

/// A `label: value` pill on a result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub value: String,
}

impl Badge {
    fn new(label: &'static str, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        (!value.is_empty()).then_some(Self { label, value })
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

pub fn result_count_line(n: usize) -> String {
    format!("{n} result(s).")
}

/// Domain, date, time and venue. Empty values are omitted.
pub fn header_badges(event: &Event) -> Vec<Badge> {
    [
        Badge::new("Domain", event.domain.as_str()),
        Badge::new("Date", event.date.as_str()),
        Badge::new("Time", event.time.as_deref().unwrap_or_default()),
        Badge::new("Venue", event.venue.as_deref().unwrap_or_default()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Age, teacher, restricted, capacity and per-school participants.
/// `Restricted` is always present.
pub fn detail_badges(event: &Event) -> Vec<Badge> {
    [
        Badge::new("Age", event.age_category.as_deref().unwrap_or_default()),
        Badge::new(
            "Teacher-in-charge",
            event.teacher_in_charge.as_deref().unwrap_or_default(),
        ),
        Badge::new("Restricted", Restricted::of(event).as_str()),
        Badge::new("Capacity (schools)", quantity_text(event.capacity_schools.as_ref())),
        Badge::new("Participants/school", quantity_text(event.participants_per_school.as_ref())),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn quantity_text(q: Option<&Quantity>) -> String {
    q.map(ToString::to_string).unwrap_or_default()
}

/// `Categories: a, b, c`, or `None` when the event has no categories.
pub fn categories_line(event: &Event) -> Option<String> {
    (!event.categories.is_empty()).then(|| format!("Categories: {}", event.categories.join(", ")))
}

/// One `name: participants` line per category, in document order.
pub fn participant_lines(event: &Event) -> Vec<String> {
    event
        .category_participants
        .iter()
        .flatten()
        .map(|(name, value)| match value {
            Value::String(s) => format!("{name}: {s}"),
            other => format!("{name}: {other}"),
        })
        .collect()
}

/// `10:00 AM — Quiz  (Venue: Hall A)`
pub fn timeline_line(event: &Event) -> String {
    format!(
        "{} — {}  (Venue: {})",
        event.time.as_deref().unwrap_or(FULL_DAY),
        event.event_name,
        event.venue.as_deref().unwrap_or(VENUE_TBA),
    )
}

/// `Day 1 – Friday, 26 Sep 2025` for ISO dates; the raw token otherwise.
pub fn day_label(index: usize, date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!("Day {index} – {}", d.format("%A, %d %b %Y")),
        Err(_) => format!("Day {index} – {date}"),
    }
}

/// Plain-text card used by the headless printer.
pub fn text_card(event: &Event, show_brochure: bool) -> String {
    let join = |badges: Vec<Badge>| {
        badges
            .iter()
            .map(|b| format!("[{b}]"))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut lines = vec![
        format!("## {}", event.event_name),
        join(header_badges(event)),
        join(detail_badges(event)),
    ];
    lines.extend(categories_line(event));
    let participants = participant_lines(event);
    if !participants.is_empty() {
        lines.push("Participants per category:".to_string());
        lines.extend(participants.into_iter().map(|l| format!("  {l}")));
    }
    if let Some(extract) = event.brochure_extract.as_deref() {
        if show_brochure {
            lines.push("Brochure extract / details:".to_string());
            lines.extend(extract.lines().map(|l| format!("  {l}")));
        } else {
            lines.push("(brochure extract available)".to_string());
        }
    }
    lines.retain(|l| !l.is_empty());
    lines.join("\n")
}
