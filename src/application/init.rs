//! Initialize notes directory use case

use crate::domain::Placement;
use crate::error::Result;
use crate::infrastructure::config::validate_marker;
use crate::infrastructure::{Config, FileSystemRepository, NoteRepository};
use std::fs;
use std::path::Path;

/// Initialize a new tagline notes directory at the specified path.
pub fn init(path: &Path, placement: Placement, marker: char) -> Result<()> {
    validate_marker(marker)?;

    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .tagline directory
    repo.initialize()?;

    let config = Config::new(placement, marker);
    repo.save_config(&config)?;

    println!("Initialized tagline directory at {}", path.display());
    println!("Placement: {}", placement.as_str());
    println!("Marker: {}", marker);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_creates_config() {
        let temp = TempDir::new().unwrap();

        init(temp.path(), Placement::Trailing, '@').unwrap();

        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.placement, Placement::Trailing);
        assert_eq!(config.marker, '@');
    }

    #[test]
    fn init_rejects_whitespace_marker() {
        let temp = TempDir::new().unwrap();
        assert!(init(temp.path(), Placement::AfterTitle, '\t').is_err());
    }

    #[test]
    fn init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), Placement::AfterTitle, '#').unwrap();
        assert!(init(temp.path(), Placement::AfterTitle, '#').is_err());
    }
}
