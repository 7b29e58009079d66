//! Domain-specific assertion macros for cynosure harnesses.
//!
//! These wrap `pretty_assertions` and name the events involved so a failure
//! says which events were expected rather than dumping whole records.

/// Assert the exact, ordered list of event names in a result set.
///
/// ```rust
/// assert_names!(search(events, "quiz", &filters), ["Quiz"]);
/// ```
#[macro_export]
macro_rules! assert_names {
    ($rows:expr, [$($name:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $rows.iter().map(|e| e.event_name.as_str()).collect();
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(actual, expected);
    }};
}

/// Assert that every event in `$sub` also appears in `$sup`, in the same
/// relative order.
#[macro_export]
macro_rules! assert_ordered_subset {
    ($sub:expr, $sup:expr) => {{
        let mut rest = $sup.iter();
        for event in $sub.iter() {
            if !rest.any(|candidate| std::ptr::eq(*candidate, *event)) {
                panic!(
                    "assert_ordered_subset! failed: {:?} missing or out of order",
                    event.event_name
                );
            }
        }
    }};
}
