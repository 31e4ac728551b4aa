//! File-backed schedule tree provider
//!
//! Schedules are YAML (or JSON) documents of the form:
//!
//! ```yaml
//! days:
//!   - date: 2019-06-03
//!     contents:
//!       - session:
//!           type: plenary
//!           title: "Keynote 1: ..."
//!           start: "9:00"
//!           end: "10:00"
//!       - session_group:
//!           start: "10:30"
//!           end: "12:00"
//!           sessions: [...]
//! ```

use super::ScheduleTree;
use crate::error::{AgendaError, ErrorCode, Result};
use std::path::Path;
use tracing::debug;

/// Parse a schedule document
pub fn parse_schedule(content: &str) -> Result<ScheduleTree> {
    serde_yaml::from_str(content).map_err(|e| {
        AgendaError::input_with_code(
            ErrorCode::INPUT_SCHEDULE_MALFORMED,
            "Schedule could not be parsed",
        )
        .with_source(e)
    })
}

/// Load a schedule tree from disk
pub fn load_schedule(path: &Path) -> Result<ScheduleTree> {
    let content = std::fs::read_to_string(path).map_err(|e| AgendaError::from(e).with_path(path))?;
    let tree = parse_schedule(&content).map_err(|e| e.with_path(path))?;

    debug!(
        "Loaded schedule {} with {} day(s)",
        path.display(),
        tree.days.len()
    );
    Ok(tree)
}
