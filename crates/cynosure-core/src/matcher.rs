//! Matcher — free-text inclusion test for a single [`Event`].
//!
//! Every searchable field is joined into one lower-cased haystack and every
//! whitespace-separated query term must appear in it as a plain substring.
//! There is no tokenisation, stemming or ranking.

use crate::types::Event;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io;

/// A pre-lowered free-text query. Build once per search pass and reuse it
/// across every event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    terms: Vec<String>,
}

impl Query {
    pub fn parse(input: &str) -> Self {
        Self {
            terms: input
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// A query with no terms matches everything.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn matches(&self, event: &Event) -> bool {
        if self.is_empty() {
            return true;
        }
        let hay = haystack(event);
        self.terms.iter().all(|term| hay.contains(term.as_str()))
    }
}

/// `true` iff every term of `query` occurs in the event's haystack.
pub fn matches(event: &Event, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    Query::parse(query).matches(event)
}

/// Lower-cased concatenation of the searchable fields, space separated.
///
/// Field order: name, domain, date, time, venue, age category, teacher,
/// school capacity, categories, category participants, brochure extract.
pub fn haystack(event: &Event) -> String {
    let capacity = event
        .capacity_schools
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    let categories = event.categories.join(" ");
    let participants = participants_dump(event.category_participants.as_ref());
    let fields = [
        event.event_name.as_str(),
        event.domain.as_str(),
        event.date.as_str(),
        event.time.as_deref().unwrap_or_default(),
        event.venue.as_deref().unwrap_or_default(),
        event.age_category.as_deref().unwrap_or_default(),
        event.teacher_in_charge.as_deref().unwrap_or_default(),
        capacity.as_str(),
        categories.as_str(),
        participants.as_str(),
        event.brochure_extract.as_deref().unwrap_or_default(),
    ];
    fields.join(" ").to_lowercase()
}

/// Serialise the category → participants mapping as a one-line JSON object
/// with `", "` between entries and `": "` after keys, e.g.
/// `{"Solo": 1, "Group": "4-6"}`. An absent mapping dumps as `{}`.
pub fn participants_dump(map: Option<&Map<String, Value>>) -> String {
    let empty = Map::new();
    let map = map.unwrap_or(&empty);
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, SpacedFormatter);
    match map.serialize(&mut ser) {
        Ok(()) => String::from_utf8(out).unwrap_or_default(),
        Err(_) => String::new(),
    }
}

/// Single-line JSON with a space after every separator.
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
