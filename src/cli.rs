//! Command-line surface.
//!
//! With no subcommand the interactive browser starts. `search` and
//! `timeline` print plain text and exit, for scripts and quick lookups.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cynosure_core::{Filters, Restricted};

#[derive(Debug, Parser)]
#[command(name = "cynosure", version, about = "Cynosure 2025 — search the festival schedule")]
pub struct Cli {
    /// Schedule document to load (overrides `[data] path` in config.toml).
    #[arg(long, value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    /// Write debug logs to /tmp/cynosure-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every event matching the query and filters.
    Search(SearchArgs),
    /// Print the running order for one festival day, or for all of them.
    Timeline {
        /// Day token (e.g. 2025-09-26) or 1-based day number.
        day: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Words that must all appear somewhere in the event.
    pub terms: Vec<String>,

    /// Keep events on this date token. Repeatable.
    #[arg(long = "date", value_name = "DATE")]
    pub dates: Vec<String>,

    /// Keep events in this domain. Repeatable.
    #[arg(long = "domain", value_name = "DOMAIN")]
    pub domains: Vec<String>,

    /// Keep events whose restricted flag is Yes or No. Repeatable.
    #[arg(long = "restricted", value_name = "YES|NO")]
    pub restricted: Vec<Restricted>,

    /// Keep events whose age category contains this text.
    #[arg(long, value_name = "TEXT")]
    pub age: Option<String>,

    /// Print brochure extracts in full.
    #[arg(long)]
    pub brochure: bool,
}

impl SearchArgs {
    pub fn query(&self) -> String {
        self.terms.join(" ")
    }

    pub fn filters(&self) -> Filters {
        Filters {
            dates: self.dates.iter().cloned().collect(),
            domains: self.domains.iter().cloned().collect(),
            restricted: self.restricted.iter().copied().collect(),
            age_substring: self.age.clone().unwrap_or_default(),
        }
    }
}
