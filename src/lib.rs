//! # appagenda
//!
//! Turns a conference schedule (days, session groups, sessions, presentation
//! items) plus paper metadata, plenary details and the attendee roster into the
//! flat tables an event app imports: one agenda row per session or presentation,
//! and the registered attendees split into speakers and non-speakers.
//!
//! ## Usage
//!
//! ```bash
//! appagenda generate appagenda.yaml [--agenda-out agenda.csv] [--pdf-links]
//! ```
//!
//! ## Modules
//!
//! - `app` - Logging setup and fatal error handling
//! - `cli` - Command-line interface
//! - `config` - Run configuration file
//! - `core` - Pure agenda flattening and attendee classification
//! - `error` - Unified error type with error codes
//! - `generate` - Pipeline tying inputs, core and outputs together
//! - `metadata` - Per-item paper metadata
//! - `plenary` - Keynote and other plenary session details
//! - `roster` - Attendee registration roster
//! - `schedule` - Schedule tree model and loader
//! - `sink` - CSV output tables
pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod generate;
pub mod metadata;
pub mod plenary;
pub mod roster;
pub mod schedule;
pub mod sink;

pub use error::{AgendaError, Result};
