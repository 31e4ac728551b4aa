//! Whole-schedule flattening

use super::assemble::{Render, RenderContext, RenderOptions};
use super::row::Row;
use super::tracks::TrackConfig;
use crate::metadata::MetadataLookup;
use crate::plenary::PlenaryInfo;
use crate::schedule::{ScheduleTree, TimeSlot};
use tracing::debug;

/// Walks schedule trees in order and concatenates the rows of every node.
///
/// The flattener only borrows its lookups, so one instance can flatten the
/// schedules of several events in turn.
pub struct AgendaFlattener<'a> {
    metadata: &'a dyn MetadataLookup,
    plenary: &'a PlenaryInfo,
    tracks: &'a TrackConfig,
    options: RenderOptions,
}

impl<'a> AgendaFlattener<'a> {
    pub fn new(
        metadata: &'a dyn MetadataLookup,
        plenary: &'a PlenaryInfo,
        tracks: &'a TrackConfig,
    ) -> Self {
        Self {
            metadata,
            plenary,
            tracks,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Rows for every day of `tree`, in traversal order
    pub fn flatten(&self, tree: &ScheduleTree, event: &str) -> Vec<Row> {
        let top_level = TimeSlot::default();
        let mut rows = Vec::new();

        for day in &tree.days {
            let date = day.display_date();
            let ctx = RenderContext {
                date: &date,
                event,
                metadata: self.metadata,
                plenary: self.plenary,
                tracks: self.tracks,
                options: self.options,
            };

            let before = rows.len();
            for content in &day.contents {
                rows.extend(content.render(&ctx, &top_level));
            }
            debug!(
                "Event '{}' day {}: {} row(s)",
                event,
                date,
                rows.len() - before
            );
        }

        rows
    }
}
