use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// The unified error type for appagenda
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Input error: {message}")]
    Input {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Output error: {message}")]
    Output {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AgendaError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::config_with_code(ErrorCode::CONFIG_GENERIC, message)
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create an input error with specific code
    pub fn input_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Input {
            code,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create an output error with specific code
    pub fn output_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Output {
            code,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Input { source: src, .. }
            | Self::Output { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Attach the file the error relates to
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        match &mut self {
            Self::Config { path: p, .. }
            | Self::Input { path: p, .. }
            | Self::Output { path: p, .. } => {
                *p = Some(path.into());
            }
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::Input { message, .. }
            | Self::Output { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Input { .. } => 3,
            Self::Output { .. } => 4,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Input { code, .. }
            | Self::Output { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, path, .. } => match path {
                Some(p) => format!("Configuration problem in {}: {}", p.display(), message),
                None => format!("Configuration problem: {}", message),
            },
            Self::Input { message, path, .. } => match path {
                Some(p) => format!("Could not read {}: {}", p.display(), message),
                None => format!("Input error: {}", message),
            },
            Self::Output { message, path, .. } => match path {
                Some(p) => format!("Could not write {}: {}", p.display(), message),
                None => format!("Output error: {}", message),
            },
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        let mut msg = format!("{:#}", self);
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            msg.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        msg
    }
}

/// Type alias for Results using AgendaError
pub type Result<T> = std::result::Result<T, AgendaError>;

// Conversion from common error types

impl From<std::io::Error> for AgendaError {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;

        let (code, message) = match err.kind() {
            ErrorKind::NotFound => (ErrorCode::INPUT_NOT_FOUND, "File or directory not found"),
            ErrorKind::PermissionDenied => {
                (ErrorCode::OUTPUT_PERMISSION_DENIED, "Permission denied")
            }
            ErrorKind::InvalidData => (ErrorCode::INPUT_GENERIC, "Invalid data"),
            _ => (ErrorCode::INPUT_IO_ERROR, "IO operation failed"),
        };

        AgendaError::input_with_code(code, message).with_source(err)
    }
}

impl From<serde_yaml::Error> for AgendaError {
    fn from(err: serde_yaml::Error) -> Self {
        AgendaError::config_with_code(ErrorCode::CONFIG_INVALID_YAML, "Invalid YAML syntax")
            .with_source(err)
    }
}

impl From<csv::Error> for AgendaError {
    fn from(err: csv::Error) -> Self {
        AgendaError::output_with_code(ErrorCode::OUTPUT_CSV_ERROR, "CSV processing failed")
            .with_source(err)
    }
}
