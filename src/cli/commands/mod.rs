//! Command implementation modules
//!
//! Each command is implemented as a separate module.

pub mod generate;
pub mod tracks;
pub mod validate;

// Re-export command execution functions
pub use generate::run_generate_command;
pub use tracks::run_tracks_command;
pub use validate::run_validate_command;
