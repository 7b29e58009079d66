//! Core types for cynosure-core.
//!
//! This module defines the schedule row, [`Event`], and the [`Quantity`]
//! value used for the capacity columns. Every field is deserialised
//! leniently: a value of the wrong JSON type is treated as absent rather
//! than failing the whole document.

use serde::Deserialize;
use serde_json::{Map, Number, Value};

/// Date token meaning "runs on every day of the festival".
pub const BOTH_DAYS: &str = "Both";

/// One row of the festival schedule.
///
/// Loaded once by [`Catalog`](crate::Catalog) and never mutated afterwards.
/// Optional text fields are `None` when absent, `null`, empty, or not a string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "lenient::text")]
    pub event_name: String,
    /// Literary, Fine Arts, Sports, … (not validated).
    #[serde(default, deserialize_with = "lenient::text")]
    pub domain: String,
    /// A calendar date token such as `2025-09-26`, or [`BOTH_DAYS`].
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: String,
    /// Free-form start time. `None` means full-day / unscheduled.
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub age_category: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub teacher_in_charge: Option<String>,
    /// Truthiness of whatever the document holds; absent is `false`.
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub restricted: bool,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub capacity_schools: Option<Quantity>,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub participants_per_school: Option<Quantity>,
    /// Sub-event names, in document order.
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub categories: Vec<String>,
    /// Category name → participant count or spec, in document order.
    #[serde(default, deserialize_with = "lenient::object")]
    pub category_participants: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub brochure_extract: Option<String>,
}

impl Event {
    /// `true` when the event runs on `day`, either directly or via [`BOTH_DAYS`].
    pub fn occurs_on(&self, day: &str) -> bool {
        self.date == day || self.date == BOTH_DAYS
    }
}

/// A count-or-description column (`capacity_schools`, `participants_per_school`).
#[derive(Debug, Clone, PartialEq)]
pub enum Quantity {
    Count(Number),
    Text(String),
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Count(n) => write!(f, "{n}"),
            Quantity::Text(s) => write!(f, "{s}"),
        }
    }
}

/// JSON truthiness: `false`, `null`, zero, and empty strings/arrays/objects
/// are false; everything else is true.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

// ---------------------------------------------------------------------------
// Lenient field deserialisers
// ---------------------------------------------------------------------------

mod lenient {
    use super::{truthy as is_truthy, Quantity};
    use serde::{Deserialize, Deserializer};
    use serde_json::{Map, Value};

    fn raw<'de, D: Deserializer<'de>>(d: D) -> Result<Value, D::Error> {
        Ok(Option::<Value>::deserialize(d)?.unwrap_or(Value::Null))
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(opt_text(d)?.unwrap_or_default())
    }

    pub fn opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match raw(d)? {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
    }

    pub fn truthy<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Ok(is_truthy(&raw(d)?))
    }

    /// Zero and the empty string count as absent, like any other falsy value.
    pub fn quantity<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Quantity>, D::Error> {
        let value = raw(d)?;
        if !is_truthy(&value) {
            return Ok(None);
        }
        Ok(match value {
            Value::Number(n) => Some(Quantity::Count(n)),
            Value::String(s) => Some(Quantity::Text(s)),
            _ => None,
        })
    }

    /// Strings are kept, numbers are stringified, anything else is dropped.
    pub fn text_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match raw(d)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    pub fn object<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Map<String, Value>>, D::Error> {
        Ok(match raw(d)? {
            Value::Object(map) if !map.is_empty() => Some(map),
            _ => None,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(value: Value) -> Event {
        serde_json::from_value(value).expect("event should deserialize")
    }

    #[test]
    fn full_record_deserializes() {
        let e = parse(json!({
            "event_name": "Inter-House Basketball",
            "domain": "Sports",
            "date": "2025-09-26",
            "time": "10:00 AM",
            "venue": "Main Court",
            "age_category": "9th to 12th",
            "teacher_in_charge": "Mr. Arun Das",
            "restricted": true,
            "capacity_schools": 8,
            "participants_per_school": "5 + 2 subs",
            "categories": ["Boys", "Girls"],
            "category_participants": {"Boys": 7, "Girls": 7},
            "brochure_extract": "Knockout format."
        }));
        assert_eq!(e.event_name, "Inter-House Basketball");
        assert_eq!(e.time.as_deref(), Some("10:00 AM"));
        assert!(e.restricted);
        assert_eq!(e.capacity_schools.map(|q| q.to_string()), Some("8".to_string()));
        assert_eq!(
            e.participants_per_school,
            Some(Quantity::Text("5 + 2 subs".to_string()))
        );
        assert_eq!(e.categories, vec!["Boys", "Girls"]);
        let keys: Vec<_> = e.category_participants.unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["Boys", "Girls"]);
    }

    #[test]
    fn missing_fields_default_to_absent() {
        let e = parse(json!({ "event_name": "Quiz" }));
        assert_eq!(e.domain, "");
        assert_eq!(e.time, None);
        assert!(!e.restricted);
        assert!(e.categories.is_empty());
        assert_eq!(e.category_participants, None);
    }

    #[test]
    fn wrong_types_degrade_to_absent() {
        let e = parse(json!({
            "event_name": 42,
            "time": null,
            "venue": ["not", "a", "string"],
            "restricted": "yes",
            "capacity_schools": 0,
            "categories": "Solo",
            "category_participants": [1, 2]
        }));
        assert_eq!(e.event_name, "");
        assert_eq!(e.time, None);
        assert_eq!(e.venue, None);
        assert!(e.restricted, "non-empty string is truthy");
        assert_eq!(e.capacity_schools, None);
        assert!(e.categories.is_empty());
        assert_eq!(e.category_participants, None);
    }

    #[test]
    fn empty_time_is_unscheduled() {
        let e = parse(json!({ "event_name": "Expo", "time": "" }));
        assert_eq!(e.time, None);
    }

    #[test]
    fn occurs_on_includes_both() {
        let both = parse(json!({ "event_name": "Expo", "date": "Both" }));
        let day1 = parse(json!({ "event_name": "Quiz", "date": "2025-09-26" }));
        assert!(both.occurs_on("2025-09-26"));
        assert!(both.occurs_on("2025-09-27"));
        assert!(day1.occurs_on("2025-09-26"));
        assert!(!day1.occurs_on("2025-09-27"));
    }

    #[test]
    fn truthiness_table() {
        assert!(!truthy(&json!(null)));
        assert!(!truthy(&json!(false)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!(0.0)));
        assert!(!truthy(&json!("")));
        assert!(!truthy(&json!([])));
        assert!(truthy(&json!(1)));
        assert!(truthy(&json!("No")));
        assert!(truthy(&json!({"a": 1})));
    }
}
