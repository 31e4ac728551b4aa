//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::cli::args::{Cli, Commands};
use crate::cli::commands::*;
use crate::generate::GenerateOptions;
use anyhow::Result;
use clap::CommandFactory;

/// Execute a CLI command based on the parsed arguments
pub fn execute_command(command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Generate {
            config,
            agenda_out,
            speakers_out,
            attendees_out,
            pdf_links,
            video_links,
        }) => {
            let options = GenerateOptions {
                agenda_out,
                speakers_out,
                non_speakers_out: attendees_out,
                pdf_links,
                video_links,
            };
            run_generate_command(&config, &options)
        }
        Some(Commands::Validate { config }) => run_validate_command(&config),
        Some(Commands::Tracks {
            event,
            ids,
            main_event,
        }) => run_tracks_command(&event, &ids, &main_event),
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
