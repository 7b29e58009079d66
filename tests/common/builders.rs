//! Test builders — ergonomic constructors for [`Event`] values.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use cynosure_core::{Event, Quantity};
use serde_json::{Map, Value};

/// Fluent builder for [`Event`] test fixtures.
///
/// # Example
///
/// ```rust
/// let quiz = EventBuilder::new("Quiz")
///     .domain("Literary")
///     .date("2025-09-26")
///     .time("10:00 AM")
///     .category("Seniors")
///     .build();
/// ```
pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            event: Event {
                event_name: name.into(),
                ..Event::default()
            },
        }
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.event.domain = domain.into();
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.event.date = date.into();
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.event.time = Some(time.into());
        self
    }

    pub fn venue(mut self, venue: impl Into<String>) -> Self {
        self.event.venue = Some(venue.into());
        self
    }

    pub fn age(mut self, age: impl Into<String>) -> Self {
        self.event.age_category = Some(age.into());
        self
    }

    pub fn teacher(mut self, teacher: impl Into<String>) -> Self {
        self.event.teacher_in_charge = Some(teacher.into());
        self
    }

    pub fn restricted(mut self) -> Self {
        self.event.restricted = true;
        self
    }

    pub fn capacity(mut self, schools: u64) -> Self {
        self.event.capacity_schools = Some(Quantity::Count(schools.into()));
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.event.categories.push(category.into());
        self
    }

    pub fn participants(mut self, category: &str, value: impl Into<Value>) -> Self {
        self.event
            .category_participants
            .get_or_insert_with(Map::new)
            .insert(category.to_string(), value.into());
        self
    }

    pub fn brochure(mut self, text: impl Into<String>) -> Self {
        self.event.brochure_extract = Some(text.into());
        self
    }

    pub fn build(self) -> Event {
        self.event
    }
}
