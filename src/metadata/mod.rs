//! Per-item bibliographic metadata
//!
//! The row assembler only sees the [`MetadataLookup`] trait; [`MetadataStore`] is
//! the in-memory implementation built from one or more metadata files.

use crate::error::{AgendaError, ErrorCode, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Metadata for one presentation item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemMetadata {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
}

impl ItemMetadata {
    pub fn new(title: impl Into<String>, authors: &[&str]) -> Self {
        Self {
            title: title.into(),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn with_abstract(mut self, text: impl Into<String>) -> Self {
        self.abstract_text = text.into();
        self
    }

    pub fn with_pdf_url(mut self, url: impl Into<String>) -> Self {
        self.pdf_url = Some(url.into());
        self
    }
}

/// Lookup of item metadata by item identifier and event
pub trait MetadataLookup {
    fn lookup(&self, id: &str, event: &str) -> Option<&ItemMetadata>;
}

/// One record in a metadata file
#[derive(Debug, Clone, Deserialize)]
struct MetadataEntry {
    id: String,
    event: String,
    #[serde(flatten)]
    metadata: ItemMetadata,
}

/// In-memory metadata keyed by (item id, event)
#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
    records: HashMap<(String, String), ItemMetadata>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record for an item
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        event: impl Into<String>,
        metadata: ItemMetadata,
    ) -> Option<ItemMetadata> {
        self.records.insert((id.into(), event.into()), metadata)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Merge records from a YAML/JSON list of `{id, event, title, authors, ...}` entries.
    /// Later records replace earlier ones with the same key.
    pub fn extend_from_str(&mut self, content: &str) -> Result<usize> {
        let entries: Vec<MetadataEntry> = serde_yaml::from_str(content).map_err(|e| {
            AgendaError::input_with_code(
                ErrorCode::INPUT_METADATA_MALFORMED,
                "Metadata could not be parsed",
            )
            .with_source(e)
        })?;

        let count = entries.len();
        for entry in entries {
            if let Some(previous) = self.insert(&entry.id, &entry.event, entry.metadata) {
                warn!(
                    "Metadata for item '{}' in event '{}' overrides earlier record '{}'",
                    entry.id, entry.event, previous.title
                );
            }
        }
        Ok(count)
    }

    /// Build a store from the given metadata files, in order
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut store = Self::new();
        for path in paths {
            let path = path.as_ref();
            let content =
                std::fs::read_to_string(path).map_err(|e| AgendaError::from(e).with_path(path))?;
            let count = store
                .extend_from_str(&content)
                .map_err(|e| e.with_path(path))?;
            debug!("Loaded {} metadata record(s) from {}", count, path.display());
        }
        Ok(store)
    }
}

impl MetadataLookup for MetadataStore {
    fn lookup(&self, id: &str, event: &str) -> Option<&ItemMetadata> {
        self.records.get(&(id.to_string(), event.to_string()))
    }
}
