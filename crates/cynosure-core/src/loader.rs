//! Data loader — reads the schedule document into an immutable [`Catalog`].
//!
//! The catalog is built once at startup and handed to every consumer by
//! reference. There is no hidden cache: loading twice reads the file twice,
//! so callers load once and share the result.

use crate::types::Event;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Failure to produce a [`Catalog`] from disk. Always fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read schedule document {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("schedule document {} is not a valid event list", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk layout: a top-level object whose `events` key holds the rows.
/// Other top-level keys are ignored.
#[derive(Debug, Deserialize)]
struct Document {
    events: Vec<Event>,
}

/// The loaded, read-only event list in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    /// Read and parse the document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&src).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), events = catalog.len(), "schedule loaded");
        Ok(catalog)
    }

    /// Parse a document already held in memory.
    pub fn from_json_str(src: &str) -> Result<Self, serde_json::Error> {
        let doc: Document = serde_json::from_str(src)?;
        Ok(Self::from_events(doc.events))
    }

    pub fn from_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Distinct values of `field` across all events, in first-seen order.
    pub fn distinct<'a>(&'a self, field: impl Fn(&'a Event) -> &'a str) -> Vec<&'a str> {
        let mut seen = std::collections::HashSet::new();
        self.events
            .iter()
            .map(field)
            .filter(|v| !v.is_empty() && seen.insert(*v))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
