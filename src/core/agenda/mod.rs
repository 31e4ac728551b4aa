//! Agenda flattening: schedule tree in, fixed-width agenda rows out
//!
//! - `tracks` - track labels from identifiers and event
//! - `assemble` - rows for a single session group, session or item
//! - `flatten` - ordered walk over a whole schedule tree
//! - `validate` - advisory check for rows missing required fields

pub mod assemble;
pub mod flatten;
pub mod row;
pub mod tracks;
pub mod validate;

pub use assemble::{render_item, Render, RenderContext, RenderOptions};
pub use flatten::AgendaFlattener;
pub use row::{Row, RowKind};
pub use tracks::{SuffixLabel, TrackConfig, TrackSubject, LIST_SEPARATOR};
pub use validate::{invalid_rows, DEFAULT_FIRST_DATA_ROW};
