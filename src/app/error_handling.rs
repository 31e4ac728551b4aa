//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// - For `AgendaError`: shows the user message always, the developer message in verbose mode
/// - For other errors: shows the error message and exits with 1
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    use crate::error::{describe_error_code, AgendaError};

    error!("Fatal error: {}", error);

    let exit_code = if let Some(agenda_err) = error.downcast_ref::<AgendaError>() {
        eprintln!("{}", agenda_err.user_message());

        if verbose >= 1 {
            let code = agenda_err.code();
            eprintln!("Error code: E{:04} ({})", code, describe_error_code(code));
            eprintln!("\nContext Chain:\n{}", agenda_err.developer_message());
        }

        agenda_err.exit_code()
    } else {
        eprintln!("Error: {error}");

        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }

        1
    };

    std::process::exit(exit_code)
}
