//! Run configuration for agenda generation
//!
//! A single YAML (or JSON) file names the schedule of every event to include and
//! all auxiliary inputs. Relative paths are resolved against the file's directory.

use crate::core::agenda::{Row, RowKind, TrackConfig, DEFAULT_FIRST_DATA_ROW};
use crate::core::attendees::NamePatch;
use crate::schedule::AGENDA_DATE_FORMAT;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;
pub mod validator;


pub use loader::ConfigLoader;
pub use validator::ConfigValidator;

/// One event and the schedule file describing it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSource {
    pub name: String,
    pub schedule: PathBuf,
}

/// A fixed agenda entry that is not part of any schedule (breaks, meals)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedRow {
    pub date: NaiveDate,
    pub start: String,
    pub end: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tracks: String,
    #[serde(default)]
    pub description: String,
}

impl FixedRow {
    pub fn to_row(&self) -> Row {
        let mut row = Row::new(
            self.date.format(AGENDA_DATE_FORMAT).to_string(),
            self.title.clone(),
            RowKind::Session,
        );
        row.start_time = self.start.clone();
        row.end_time = self.end.clone();
        row.location = self.location.clone();
        row.tracks = self.tracks.clone();
        row.description = self.description.clone();
        row
    }
}

fn default_first_data_row() -> usize {
    DEFAULT_FIRST_DATA_ROW
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Events in output order
    pub events: Vec<EventSource>,
    /// Overrides `tracks.main_event` when set
    #[serde(default)]
    pub main_event: Option<String>,
    #[serde(default)]
    pub metadata_files: Vec<PathBuf>,
    #[serde(default)]
    pub plenary_info_file: Option<PathBuf>,
    #[serde(default)]
    pub attendees_file: Option<PathBuf>,
    #[serde(default)]
    pub pdf_links: bool,
    #[serde(default)]
    pub video_links: bool,
    #[serde(default)]
    pub name_patches: Vec<NamePatch>,
    #[serde(default)]
    pub extra_rows: Vec<FixedRow>,
    #[serde(default = "default_first_data_row")]
    pub first_data_row: usize,
    #[serde(default)]
    pub tracks: TrackConfig,
}

impl GenerateConfig {
    /// Track rules with the top-level main event applied
    pub fn track_config(&self) -> TrackConfig {
        match &self.main_event {
            Some(event) => self.tracks.clone().with_main_event(event.clone()),
            None => self.tracks.clone(),
        }
    }

    /// Make every relative input path relative to `base` instead
    pub fn resolve_paths(mut self, base: &std::path::Path) -> Self {
        let resolve = |path: PathBuf| {
            if path.is_relative() {
                base.join(path)
            } else {
                path
            }
        };

        for event in &mut self.events {
            event.schedule = resolve(std::mem::take(&mut event.schedule));
        }
        self.metadata_files = self.metadata_files.into_iter().map(resolve).collect();
        self.plenary_info_file = self.plenary_info_file.map(resolve);
        self.attendees_file = self.attendees_file.map(resolve);
        self
    }
}
