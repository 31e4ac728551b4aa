//! Extra information for plenary sessions (keynotes, award ceremonies)
//!
//! Plenary sessions are not covered by the paper metadata, so their abstract and
//! speaker come from a separate table keyed by session-title prefix. Entries are
//! kept in file order and the first prefix that matches a title wins.

use crate::error::{AgendaError, ErrorCode, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Speaker and media details for a plenary session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlenaryRecord {
    pub abstract_text: String,
    pub person: String,
    pub person_affiliation: String,
    pub person_url: String,
    pub pdf_url: String,
    pub video_url: String,
}

/// Ordered (title prefix, record) table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlenaryInfo {
    entries: Vec<(String, PlenaryRecord)>,
}

impl PlenaryInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in match order: a prefix only matches titles no earlier prefix matched
    pub fn from_entries(entries: Vec<(String, PlenaryRecord)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First record whose prefix starts the given title
    pub fn find(&self, title: &str) -> Option<&PlenaryRecord> {
        self.entries
            .iter()
            .find(|(prefix, _)| title.starts_with(prefix.as_str()))
            .map(|(_, record)| record)
    }

    /// Parse a tab-separated table with a header row naming the columns
    /// `session`, `abstract`, `person`, `person_affiliation`, `person_url`,
    /// `pdf_url` and `video_url`.
    pub fn from_tsv<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .trim(csv::Trim::All)
            .from_reader(reader);

        let entries = reader
            .deserialize::<PlenaryRow>()
            .map(|row| {
                let row = row.map_err(|e| {
                    AgendaError::input_with_code(
                        ErrorCode::INPUT_PLENARY_MALFORMED,
                        "Plenary info could not be parsed",
                    )
                    .with_source(e)
                })?;
                Ok(row.into_entry())
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_entries(entries))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| AgendaError::from(e).with_path(path))?;
        let info = Self::from_tsv(file).map_err(|e| e.with_path(path))?;
        debug!(
            "Loaded {} plenary entr(ies) from {}",
            info.len(),
            path.display()
        );
        Ok(info)
    }
}

#[derive(Debug, Deserialize)]
struct PlenaryRow {
    session: String,
    #[serde(rename = "abstract", default)]
    abstract_text: String,
    #[serde(default)]
    person: String,
    #[serde(default)]
    person_affiliation: String,
    #[serde(default)]
    person_url: String,
    #[serde(default)]
    pdf_url: String,
    #[serde(default)]
    video_url: String,
}

impl PlenaryRow {
    fn into_entry(self) -> (String, PlenaryRecord) {
        (
            self.session,
            PlenaryRecord {
                abstract_text: self.abstract_text,
                person: self.person,
                person_affiliation: self.person_affiliation,
                person_url: self.person_url,
                pdf_url: self.pdf_url,
                video_url: self.video_url,
            },
        )
    }
}
