//! cynosure — Cynosure 2025 festival schedule search.
//!
//! The binary is a thin shell: [`cli`] parses arguments, then either the
//! interactive browser in `cynosure-tui` starts or [`headless`] prints
//! plain text. All search semantics live in `cynosure-core`.
//!
//! # Architecture
//!
//! ```text
//! data.json ──► Catalog ──► search / timeline ──► TUI
//!                                     │
//!                                     └──► headless text
//! ```

pub mod cli;
pub mod headless;
