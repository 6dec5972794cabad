//! Configuration management

use crate::domain::Placement;
use crate::error::{Result, TaglineError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub placement: Placement,
    pub marker: char,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with the given placement and marker
    pub fn new(placement: Placement, marker: char) -> Self {
        Config {
            placement,
            marker,
            created: Utc::now(),
        }
    }

    /// Load config from .tagline/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".tagline").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TaglineError::NotTaglineDirectory(path.to_path_buf())
            } else {
                TaglineError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| TaglineError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .tagline/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let tagline_dir = path.join(".tagline");
        let config_path = tagline_dir.join("config.toml");

        if !tagline_dir.exists() {
            fs::create_dir(&tagline_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TaglineError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Reject markers the locator would panic on
    pub fn validate(&self) -> Result<()> {
        validate_marker(self.marker)
    }
}

/// Check that a marker is usable: a single non-whitespace ASCII character
pub fn validate_marker(marker: char) -> Result<()> {
    if marker.is_ascii() && !marker.is_ascii_whitespace() {
        Ok(())
    } else {
        Err(TaglineError::Config(format!(
            "Invalid marker: {:?}",
            marker
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new(Placement::AfterTitle, '#');
        assert_eq!(config.placement, Placement::AfterTitle);
        assert_eq!(config.marker, '#');
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new(Placement::Trailing, '@');

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".tagline").exists());
        assert!(temp.path().join(".tagline/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();

        assert_eq!(loaded.placement, config.placement);
        assert_eq!(loaded.marker, config.marker);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            TaglineError::NotTaglineDirectory(_) => {}
            _ => panic!("Expected NotTaglineDirectory error"),
        }
    }

    #[test]
    fn test_load_rejects_whitespace_marker() {
        let temp = TempDir::new().unwrap();
        let tagline_dir = temp.path().join(".tagline");
        std::fs::create_dir(&tagline_dir).unwrap();
        std::fs::write(
            tagline_dir.join("config.toml"),
            "placement = \"trailing\"\nmarker = \" \"\ncreated = \"2025-01-01T00:00:00Z\"\n",
        )
        .unwrap();

        let result = Config::load_from_dir(temp.path());
        assert!(matches!(result, Err(TaglineError::Config(_))));
    }

    #[test]
    fn test_validate_marker() {
        assert!(validate_marker('#').is_ok());
        assert!(validate_marker('@').is_ok());
        assert!(validate_marker(' ').is_err());
        assert!(validate_marker('\t').is_err());
        assert!(validate_marker('é').is_err());
    }
}
