//! Query pipeline and timeline benchmarks.
//!
//! Every keystroke in the TUI re-runs the whole pipeline, so the number that
//! matters is one full pass over a realistic catalog.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `search` | Full pipeline (haystack + terms + filters) per query shape |
//! | `haystack` | Cost of building one event's searchable text |
//! | `timeline` | Day selection and running-order sort |
//! | `scaling` | Full-pipeline throughput as the catalog grows |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench search_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cynosure_core::{matcher::haystack, search, timeline, Event, Filters, Quantity, Restricted};
use serde_json::{json, Map};
use std::hint::black_box;

const DOMAINS: [&str; 6] = ["Literary", "Fine Arts", "Commerce", "Performing Arts", "Cynoshow", "Sports"];
const DATES: [&str; 3] = ["2025-09-26", "2025-09-27", "Both"];

/// Deterministic synthetic catalog with every searchable field populated.
fn catalog(n: usize) -> Vec<Event> {
    (0..n)
        .map(|i| {
            let mut participants = Map::new();
            participants.insert("Juniors".into(), json!(i % 4 + 1));
            participants.insert("Seniors".into(), json!(format!("{}-{}", i % 3 + 2, i % 3 + 4)));
            Event {
                event_name: format!("Event {i} {}", if i % 10 == 0 { "Basketball" } else { "Quiz" }),
                domain: DOMAINS[i % DOMAINS.len()].into(),
                date: DATES[i % DATES.len()].into(),
                time: (i % 5 != 0).then(|| format!("{:02}:{:02} AM", 8 + i % 4, (i * 7) % 60)),
                venue: Some(format!("Hall {}", (b'A' + (i % 8) as u8) as char)),
                age_category: Some(if i % 2 == 0 { "9th to 12th" } else { "6th-8th" }.into()),
                teacher_in_charge: Some(format!("Teacher {}", i % 17)),
                restricted: i % 7 == 0,
                capacity_schools: Some(Quantity::Count((i as u64 % 20 + 1).into())),
                participants_per_school: None,
                categories: vec!["Juniors".into(), "Seniors".into()],
                category_participants: Some(participants),
                brochure_extract: (i % 3 == 0)
                    .then(|| "Teams report thirty minutes early. Bring school ID cards.".into()),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

fn search_bench(c: &mut Criterion) {
    let events = catalog(500);
    let mut group = c.benchmark_group("search");
    group.throughput(Throughput::Elements(events.len() as u64));

    group.bench_function("empty_query_no_filters", |b| {
        b.iter(|| search(black_box(&events), "", &Filters::new()))
    });

    group.bench_function("single_term", |b| {
        b.iter(|| search(black_box(&events), black_box("basketball"), &Filters::new()))
    });

    group.bench_function("three_terms_miss", |b| {
        b.iter(|| search(black_box(&events), black_box("hall seniors robotics"), &Filters::new()))
    });

    let filters = Filters::new()
        .with_date("2025-09-26")
        .with_domain("Sports")
        .with_restricted(Restricted::No)
        .with_age("9th");
    group.bench_function("term_plus_every_filter", |b| {
        b.iter(|| search(black_box(&events), black_box("quiz"), black_box(&filters)))
    });

    group.finish();
}

fn haystack_bench(c: &mut Criterion) {
    let events = catalog(1);
    c.bench_function("haystack/one_event", |b| b.iter(|| haystack(black_box(&events[0]))));
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

fn timeline_bench(c: &mut Criterion) {
    let events = catalog(500);
    c.bench_function("timeline/day_1_of_500", |b| {
        b.iter(|| timeline(black_box(&events), black_box("2025-09-26")))
    });
}

// ---------------------------------------------------------------------------
// Scaling
// ---------------------------------------------------------------------------

fn scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");
    for size in [100usize, 1_000, 10_000] {
        let events = catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &events, |b, events| {
            b.iter(|| search(black_box(events), black_box("hall quiz"), &Filters::new()))
        });
    }
    group.finish();
}

criterion_group!(benches, search_bench, haystack_bench, timeline_bench, scaling_bench);
criterion_main!(benches);
