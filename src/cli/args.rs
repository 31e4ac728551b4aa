//! CLI argument structures
//!
//! This module defines the command-line interface of appagenda: the main CLI
//! structure and all subcommand definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build event-app agenda tables from conference schedules
#[derive(Parser)]
#[command(name = "appagenda")]
#[command(about = "appagenda - Flatten conference schedules into event-app agenda rows", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the agenda, speaker and non-speaker tables
    #[command(name = "generate")]
    Generate {
        /// Run configuration file (YAML or JSON)
        config: PathBuf,

        /// Output file for agenda rows
        #[arg(long, default_value = "agenda.csv")]
        agenda_out: PathBuf,

        /// Output file for speakers
        #[arg(long, default_value = "speakers.csv")]
        speakers_out: PathBuf,

        /// Output file for registered attendees who are not speakers
        #[arg(long, default_value = "non_speakers.csv")]
        attendees_out: PathBuf,

        /// Add PDF links to descriptions where available
        #[arg(long)]
        pdf_links: bool,

        /// Add video links to descriptions where available
        #[arg(long)]
        video_links: bool,
    },

    /// Flatten and validate the schedules without writing anything
    #[command(name = "validate")]
    Validate {
        /// Run configuration file (YAML or JSON)
        config: PathBuf,
    },

    /// Show the track assigned to item identifiers
    #[command(name = "tracks")]
    Tracks {
        /// Event the items belong to
        event: String,

        /// Item identifiers, e.g. 123-demos
        #[arg(required = true)]
        ids: Vec<String>,

        /// Name of the main-conference event
        #[arg(long, default_value = "main")]
        main_event: String,
    },
}
