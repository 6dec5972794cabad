//! Config management use case

use crate::domain::Placement;
use crate::error::{Result, TaglineError};
use crate::infrastructure::config::validate_marker;
use crate::infrastructure::{Config, FileSystemRepository, NoteRepository};
use std::str::FromStr;

/// Service for managing tagline configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "placement" => Ok(config.placement.as_str().to_string()),
            "marker" => Ok(config.marker.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(TaglineError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: placement, marker, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "placement" => {
                let placement = Placement::from_str(value).map_err(TaglineError::Config)?;
                config.placement = placement;
            }
            "marker" => {
                let mut chars = value.chars();
                let marker = match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => {
                        return Err(TaglineError::Config(format!(
                            "Invalid marker: '{}'",
                            value
                        )));
                    }
                };
                validate_marker(marker)?;
                config.marker = marker;
            }
            "created" => {
                return Err(TaglineError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(TaglineError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: placement, marker",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
