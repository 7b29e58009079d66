//! Filter engine — categorical narrowing of the search results.
//!
//! [`Filters`] is an AND of ORs: every non-empty dimension must be satisfied,
//! and within a dimension any one selected value is enough. An empty
//! dimension imposes no constraint.

use crate::types::Event;
use std::collections::BTreeSet;

/// The restricted flag as shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Restricted {
    Yes,
    No,
}

impl Restricted {
    pub const ALL: [Restricted; 2] = [Restricted::Yes, Restricted::No];

    pub fn of(event: &Event) -> Self {
        if event.restricted {
            Restricted::Yes
        } else {
            Restricted::No
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Restricted::Yes => "Yes",
            Restricted::No => "No",
        }
    }
}

impl std::fmt::Display for Restricted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected Yes or No, got {0:?}")]
pub struct ParseRestrictedError(String);

impl std::str::FromStr for Restricted {
    type Err = ParseRestrictedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" => Ok(Restricted::Yes),
            "no" | "n" | "false" => Ok(Restricted::No),
            _ => Err(ParseRestrictedError(s.to_string())),
        }
    }
}

/// Current filter selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Exact `date` tokens; `Both` is matched literally, not expanded.
    pub dates: BTreeSet<String>,
    /// Exact `domain` values.
    pub domains: BTreeSet<String>,
    pub restricted: BTreeSet<Restricted>,
    /// Case-insensitive substring of `age_category`. Not trimmed.
    pub age_substring: String,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.dates.insert(date.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domains.insert(domain.into());
        self
    }

    pub fn with_restricted(mut self, label: Restricted) -> Self {
        self.restricted.insert(label);
        self
    }

    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age_substring = age.into();
        self
    }

    /// `true` when no dimension constrains anything.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
            && self.domains.is_empty()
            && self.restricted.is_empty()
            && self.age_substring.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn passes(&self, event: &Event) -> bool {
        if !self.dates.is_empty() && !self.dates.contains(&event.date) {
            return false;
        }
        if !self.domains.is_empty() && !self.domains.contains(&event.domain) {
            return false;
        }
        if !self.restricted.is_empty() && !self.restricted.contains(&Restricted::of(event)) {
            return false;
        }
        if !self.age_substring.is_empty() {
            let age = event.age_category.as_deref().unwrap_or_default().to_lowercase();
            if !age.contains(&self.age_substring.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// Free-function form of [`Filters::passes`].
pub fn passes(event: &Event, filters: &Filters) -> bool {
    filters.passes(event)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn event(date: &str, domain: &str, restricted: bool, age: Option<&str>) -> Event {
        Event {
            event_name: "e".into(),
            date: date.into(),
            domain: domain.into(),
            restricted,
            age_category: age.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn empty_filters_pass_everything() {
        let f = Filters::new();
        assert!(f.is_empty());
        assert!(f.passes(&event("2025-09-26", "Sports", true, None)));
        assert!(f.passes(&Event::default()));
    }

    #[test]
    fn date_is_exact_match_without_both_expansion() {
        let f = Filters::new().with_date("2025-09-26");
        assert!(f.passes(&event("2025-09-26", "Sports", false, None)));
        assert!(!f.passes(&event("Both", "Sports", false, None)));
        assert!(!f.passes(&event("2025-09-27", "Sports", false, None)));

        let f = f.with_date("Both");
        assert!(f.passes(&event("Both", "Sports", false, None)));
    }

    #[test]
    fn domain_any_of_selected() {
        let f = Filters::new().with_domain("Literary").with_domain("Sports");
        assert!(f.passes(&event("Both", "Sports", false, None)));
        assert!(f.passes(&event("Both", "Literary", false, None)));
        assert!(!f.passes(&event("Both", "Fine Arts", false, None)));
    }

    #[rstest]
    #[case(&[], true, true)]
    #[case(&[Restricted::No], true, false)]
    #[case(&[Restricted::Yes], true, true)]
    #[case(&[Restricted::Yes, Restricted::No], true, true)]
    #[case(&[Restricted::No], false, true)]
    #[case(&[Restricted::Yes], false, false)]
    fn restricted_cases(
        #[case] selected: &[Restricted],
        #[case] restricted: bool,
        #[case] expected: bool,
    ) {
        let mut f = Filters::new();
        f.restricted.extend(selected.iter().copied());
        assert_eq!(f.passes(&event("Both", "Sports", restricted, None)), expected);
    }

    #[rstest]
    #[case("9th", Some("9th to 12th"), true)]
    #[case("9th", Some("6th-8th"), false)]
    #[case("9TH TO", Some("9th to 12th"), true)]
    #[case("6th", None, false)]
    #[case("", None, true)]
    fn age_substring_cases(#[case] pin: &str, #[case] age: Option<&str>, #[case] expected: bool) {
        let f = Filters::new().with_age(pin);
        assert_eq!(f.passes(&event("Both", "Sports", false, age)), expected);
    }

    #[test]
    fn dimensions_are_anded() {
        let f = Filters::new()
            .with_date("2025-09-27")
            .with_domain("Sports")
            .with_restricted(Restricted::No);
        assert!(f.passes(&event("2025-09-27", "Sports", false, None)));
        assert!(!f.passes(&event("2025-09-27", "Sports", true, None)));
        assert!(!f.passes(&event("2025-09-27", "Literary", false, None)));
        assert!(!f.passes(&event("2025-09-26", "Sports", false, None)));
    }

    #[test]
    fn clear_resets_all_dimensions() {
        let mut f = Filters::new().with_date("Both").with_age("9th");
        assert!(!f.is_empty());
        f.clear();
        assert!(f.is_empty());
    }

    #[test]
    fn restricted_label_parses() {
        assert_eq!("Yes".parse::<Restricted>(), Ok(Restricted::Yes));
        assert_eq!(" no ".parse::<Restricted>(), Ok(Restricted::No));
        assert!("maybe".parse::<Restricted>().is_err());
        assert_eq!(Restricted::Yes.to_string(), "Yes");
    }
}
