//! Advisory validation of flattened rows
//!
//! The import template rejects rows without a date, start time, end time or
//! title. Validation never drops rows; it reports where the bad ones will land in
//! the sink so they can be fixed by hand after the write.

use super::row::Row;
use tracing::warn;

/// Sheet row at which the agenda template's first data row sits
pub const DEFAULT_FIRST_DATA_ROW: usize = 26;

/// Sink positions (`first_data_row + index`) of rows missing required fields
pub fn invalid_rows(rows: &[Row], first_data_row: usize) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let missing = row.missing_required();
            if missing.is_empty() {
                return None;
            }
            let position = first_data_row + index;
            warn!(
                "Row {} ('{}') is missing {}",
                position,
                row.title,
                missing.join(", ")
            );
            Some(position)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::agenda::RowKind;

    fn complete(title: &str) -> Row {
        let mut row = Row::new("06/04/2019", title, RowKind::Session);
        row.start_time = "9:00".to_string();
        row.end_time = "10:00".to_string();
        row
    }

    #[test]
    fn test_complete_rows_are_valid() {
        let rows = vec![complete("A"), complete("B")];
        assert!(invalid_rows(&rows, DEFAULT_FIRST_DATA_ROW).is_empty());
    }

    #[test]
    fn test_missing_start_reported_at_position() {
        let mut broken = complete("B");
        broken.start_time.clear();
        let rows = vec![complete("A"), broken, complete("C")];

        assert_eq!(invalid_rows(&rows, DEFAULT_FIRST_DATA_ROW), vec![27]);
        assert_eq!(invalid_rows(&rows, 0), vec![1]);
    }

    #[test]
    fn test_optional_fields_do_not_matter() {
        let mut row = complete("A");
        row.tracks.clear();
        row.location.clear();
        row.description.clear();
        assert!(invalid_rows(&[row], 1).is_empty());
    }

    #[test]
    fn test_empty_title_and_date() {
        let mut no_title = complete("");
        no_title.kind = RowKind::Sub;
        let mut no_date = complete("X");
        no_date.date.clear();
        assert_eq!(invalid_rows(&[no_title, no_date], 10), vec![10, 11]);
    }
}
