//! Attendee registration roster
//!
//! The roster is a CSV export of the registration system. Only the
//! `Professional Name`, `Email` and `Affiliation` columns are read; any others
//! are ignored.

use crate::core::attendees::AttendeeRecord;
use crate::error::{AgendaError, ErrorCode, Result};
use std::path::Path;
use tracing::debug;

/// Parse roster CSV, skipping rows without a name
pub fn parse_roster<R: std::io::Read>(reader: R) -> Result<Vec<AttendeeRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut roster = Vec::new();
    for (index, record) in reader.deserialize::<AttendeeRecord>().enumerate() {
        let record = record.map_err(|e| {
            AgendaError::input_with_code(
                ErrorCode::INPUT_ROSTER_MALFORMED,
                format!("Attendee roster row {} could not be parsed", index + 1),
            )
            .with_source(e)
        })?;
        if record.name.is_empty() {
            debug!("Skipping roster row {} without a name", index + 1);
            continue;
        }
        roster.push(record);
    }
    Ok(roster)
}

/// Load the roster from a CSV file
pub fn load_roster(path: &Path) -> Result<Vec<AttendeeRecord>> {
    let file = std::fs::File::open(path).map_err(|e| AgendaError::from(e).with_path(path))?;
    let roster = parse_roster(file).map_err(|e| e.with_path(path))?;
    debug!("Loaded {} attendee(s) from {}", roster.len(), path.display());
    Ok(roster)
}
