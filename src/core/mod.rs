//! Core business logic module with pure functions
//!
//! Following the "functional core, imperative shell" pattern, everything here:
//! - Takes inputs and returns outputs
//! - Never mutates the schedule tree it is given
//! - Doesn't perform file system or network operations
//! - Never fails: missing data falls back to empty values and is logged

pub mod agenda;
pub mod attendees;
