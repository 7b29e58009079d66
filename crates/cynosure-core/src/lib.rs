//! cynosure-core — Cynosure festival schedule search.
//!
//! This crate holds everything that is not presentation: the schedule model,
//! the one-shot loader, and the pure search and timeline functions.
//!
//! # Architecture
//!
//! ```text
//! Loader ──► Catalog ──► Matcher ──► Filters ──► results
//!               │
//!               └──► Timeline (per day, independent of search)
//! ```
//!
//! The [`Catalog`] is loaded once at startup and borrowed by everything
//! downstream; nothing mutates it afterwards.

pub mod config;
pub mod filter;
pub mod loader;
pub mod matcher;
pub mod present;
pub mod query;
pub mod timeline;
pub mod types;

pub use filter::{passes, Filters, Restricted};
pub use loader::{Catalog, LoadError};
pub use matcher::{matches, Query};
pub use query::search;
pub use timeline::timeline;
pub use types::{Event, Quantity, BOTH_DAYS};
