//! Speaker / non-speaker attendee classification
//!
//! Speakers are every distinct name in the agenda's authors column. Each one is
//! matched exactly against the registration roster; unregistered speakers still
//! get a name-only record so the app can show them. Roster entries that never
//! appear in the agenda are the non-speakers.

use super::agenda::{Row, LIST_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// A person as the attendee import template lists them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeRecord {
    #[serde(rename = "Professional Name")]
    pub name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Affiliation", default)]
    pub affiliation: String,
}

impl AttendeeRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        affiliation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            affiliation: affiliation.into(),
        }
    }

    /// Record for a speaker who is not on the roster
    pub fn name_only(name: impl Into<String>) -> Self {
        Self::new(name, "", "")
    }
}

/// Rewrites an author name on one specific agenda entry, used to tell apart two
/// different people who share a name (e.g. `"Bing Liu"` -> `"Bing Liu*"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamePatch {
    /// Exact row title the patch applies to
    pub title: String,
    pub find: String,
    pub replace: String,
}

impl NamePatch {
    pub fn new(
        title: impl Into<String>,
        find: impl Into<String>,
        replace: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            find: find.into(),
            replace: replace.into(),
        }
    }
}

/// Apply every patch whose title matches a row to that row's authors field
pub fn apply_name_patches(rows: Vec<Row>, patches: &[NamePatch]) -> Vec<Row> {
    if patches.is_empty() {
        return rows;
    }

    rows.into_iter()
        .map(|mut row| {
            for patch in patches.iter().filter(|p| p.title == row.title) {
                row.authors = row.authors.replace(&patch.find, &patch.replace);
            }
            row
        })
        .collect()
}

/// Distinct, sorted speaker names referenced by the rows
pub fn speaker_names(rows: &[Row]) -> BTreeSet<String> {
    rows.iter()
        .filter(|row| !row.authors.is_empty())
        .flat_map(|row| row.authors.split(LIST_SEPARATOR))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Result of splitting attendees by speaking role
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendeePartition {
    /// Sorted by name, then email; the first roster row per (name, email) is kept
    pub speakers: Vec<AttendeeRecord>,
    /// Roster order; unique per (name, email)
    pub non_speakers: Vec<AttendeeRecord>,
}

/// Partition the roster (if any) into speakers and non-speakers
pub fn classify_attendees(rows: &[Row], roster: Option<&[AttendeeRecord]>) -> AttendeePartition {
    let names = speaker_names(rows);
    let roster = roster.unwrap_or_default();

    let matched = roster.iter().filter(|a| names.contains(&a.name));
    let registered: HashSet<&str> = roster.iter().map(|a| a.name.as_str()).collect();
    let unmatched = names
        .iter()
        .filter(|name| !registered.contains(name.as_str()))
        .map(AttendeeRecord::name_only);

    let mut seen = HashSet::new();
    let mut speakers: Vec<AttendeeRecord> = matched
        .cloned()
        .chain(unmatched)
        .filter(|a| seen.insert((a.name.clone(), a.email.clone())))
        .collect();
    speakers.sort_by(|a, b| (&a.name, &a.email).cmp(&(&b.name, &b.email)));

    let mut seen = HashSet::new();
    let non_speakers = roster
        .iter()
        .filter(|a| !names.contains(&a.name))
        .filter(|a| seen.insert((a.name.as_str(), a.email.as_str())))
        .cloned()
        .collect();

    AttendeePartition {
        speakers,
        non_speakers,
    }
}
