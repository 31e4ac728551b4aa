//! CSV tabular sinks for agenda rows and attendee lists

use crate::core::agenda::Row;
use crate::core::attendees::AttendeeRecord;
use crate::error::{AgendaError, ErrorCode, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write agenda rows, preceded by a header row
pub fn write_agenda<W: Write>(writer: W, rows: &[Row]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(Row::HEADERS)?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }
    writer.flush().map_err(|e| output_io(e, "Failed to flush agenda rows"))?;
    Ok(())
}

/// Write attendee records with `Professional Name, Email, Affiliation` headers
pub fn write_attendees<W: Write>(writer: W, attendees: &[AttendeeRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    if attendees.is_empty() {
        writer.write_record(["Professional Name", "Email", "Affiliation"])?;
    }
    for attendee in attendees {
        writer.serialize(attendee)?;
    }
    writer
        .flush()
        .map_err(|e| output_io(e, "Failed to flush attendee rows"))?;
    Ok(())
}

pub fn write_agenda_file(path: &Path, rows: &[Row]) -> Result<()> {
    let file = create(path)?;
    write_agenda(file, rows).map_err(|e| e.with_path(path))?;
    info!("Wrote {} agenda row(s) to {}", rows.len(), path.display());
    Ok(())
}

pub fn write_attendees_file(path: &Path, attendees: &[AttendeeRecord]) -> Result<()> {
    let file = create(path)?;
    write_attendees(file, attendees).map_err(|e| e.with_path(path))?;
    info!("Wrote {} attendee(s) to {}", attendees.len(), path.display());
    Ok(())
}

fn create(path: &Path) -> Result<std::fs::File> {
    std::fs::File::create(path).map_err(|e| {
        output_io(e, "Cannot create output file").with_path(path)
    })
}

fn output_io(err: std::io::Error, message: &str) -> AgendaError {
    let code = match err.kind() {
        std::io::ErrorKind::PermissionDenied => ErrorCode::OUTPUT_PERMISSION_DENIED,
        _ => ErrorCode::OUTPUT_IO_ERROR,
    };
    AgendaError::output_with_code(code, message).with_source(err)
}
