use super::GenerateConfig;
use crate::error::{AgendaError, ErrorCode, Result};
use std::collections::HashSet;

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &GenerateConfig) -> Result<()> {
        if config.events.is_empty() {
            return Err(AgendaError::config_with_code(
                ErrorCode::CONFIG_MISSING_REQUIRED,
                "At least one event must be configured",
            ));
        }

        let mut names = HashSet::new();
        for event in &config.events {
            if event.name.trim().is_empty() {
                return Err(AgendaError::config_with_code(
                    ErrorCode::CONFIG_INVALID_VALUE,
                    "Event name cannot be empty",
                ));
            }
            if !names.insert(event.name.as_str()) {
                return Err(AgendaError::config_with_code(
                    ErrorCode::CONFIG_INVALID_VALUE,
                    format!("Event '{}' is configured more than once", event.name),
                ));
            }
        }

        for patch in &config.name_patches {
            if patch.find.is_empty() {
                return Err(AgendaError::config_with_code(
                    ErrorCode::CONFIG_INVALID_VALUE,
                    format!("Name patch for '{}' has an empty search text", patch.title),
                ));
            }
        }

        let tracks = config.track_config();
        if tracks.main_event.is_empty() {
            return Err(AgendaError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                "Main event name cannot be empty",
            ));
        }

        Ok(())
    }
}
