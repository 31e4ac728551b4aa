//! Flat agenda rows in the import template's fixed column layout

use serde::{Deserialize, Serialize};

/// Whether a row is a top-level agenda entry or a presentation nested under one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowKind {
    Session,
    Sub,
}

impl RowKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Session => "Session",
            Self::Sub => "Sub",
        }
    }
}

impl std::fmt::Display for RowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One agenda row: date, start, end, tracks, title, location, description,
/// authors, a reserved blank column, and the session/sub tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub tracks: String,
    pub title: String,
    pub location: String,
    pub description: String,
    pub authors: String,
    pub reserved: String,
    pub kind: RowKind,
}

impl Row {
    /// Number of columns a row occupies in the sink
    pub const WIDTH: usize = 10;

    /// Column headers, in column order
    pub const HEADERS: [&'static str; Row::WIDTH] = [
        "Date",
        "Time Start",
        "Time End",
        "Tracks",
        "Session Title",
        "Room/Location",
        "Description",
        "Speakers",
        "Reserved",
        "Session or Sub",
    ];

    /// A row with the given date and title and every other column blank
    pub fn new(date: impl Into<String>, title: impl Into<String>, kind: RowKind) -> Self {
        Self {
            date: date.into(),
            start_time: String::new(),
            end_time: String::new(),
            tracks: String::new(),
            title: title.into(),
            location: String::new(),
            description: String::new(),
            authors: String::new(),
            reserved: String::new(),
            kind,
        }
    }

    /// Field values in column order
    pub fn to_record(&self) -> [&str; Row::WIDTH] {
        [
            self.date.as_str(),
            self.start_time.as_str(),
            self.end_time.as_str(),
            self.tracks.as_str(),
            self.title.as_str(),
            self.location.as_str(),
            self.description.as_str(),
            self.authors.as_str(),
            self.reserved.as_str(),
            self.kind.as_str(),
        ]
    }

    /// Names of the required columns that are empty
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("date", &self.date),
            ("start_time", &self.start_time),
            ("end_time", &self.end_time),
            ("title", &self.title),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}
