use super::{ConfigValidator, GenerateConfig};
use crate::error::{AgendaError, ErrorCode, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Directory that relative paths in the file are resolved against
    pub fn base_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// Read, parse, resolve and validate the configuration file
    pub fn load(&self) -> Result<GenerateConfig> {
        if !self.path.exists() {
            return Err(AgendaError::config_with_code(
                ErrorCode::CONFIG_NOT_FOUND,
                "Configuration file not found",
            )
            .with_path(&self.path));
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            AgendaError::config("Cannot read configuration")
                .with_source(e)
                .with_path(&self.path)
        })?;

        let config = Self::parse(&content, self.base_dir()).map_err(|e| e.with_path(&self.path))?;
        info!(
            "Loaded configuration {} ({} event(s))",
            self.path.display(),
            config.events.len()
        );
        Ok(config)
    }

    /// Parse configuration text, resolving relative paths against `base_dir`
    pub fn parse(content: &str, base_dir: &Path) -> Result<GenerateConfig> {
        let config: GenerateConfig = serde_yaml::from_str(content)?;
        ConfigValidator::validate(&config)?;

        debug!("Resolving configuration paths against {}", base_dir.display());
        Ok(config.resolve_paths(base_dir))
    }
}
