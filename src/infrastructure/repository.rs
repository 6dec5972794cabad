//! File system repository

use crate::error::{Result, TaglineError};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract repository for note storage operations
pub trait NoteRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .tagline/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .tagline/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .tagline directory exists
    fn is_initialized(&self) -> bool;

    /// Create .tagline directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of NoteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the notes root by walking up from the current directory.
    /// The TAGLINE_ROOT environment variable takes precedence.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TAGLINE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_tagline_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TaglineError::Config(format!(
                    "TAGLINE_ROOT is set to '{}' but no .tagline directory found. \
                    Run 'tagline init' in that directory or unset TAGLINE_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the notes root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_tagline_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(TaglineError::NotTaglineDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .tagline directory
    fn has_tagline_dir(path: &Path) -> bool {
        path.join(".tagline").is_dir()
    }
}

impl NoteRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_tagline_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let tagline_dir = self.root.join(".tagline");

        if tagline_dir.exists() {
            return Err(TaglineError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&tagline_dir)?;
        Ok(())
    }
}

// Note operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Check if a note file exists
    pub fn note_exists(&self, filename: &str) -> bool {
        self.root.join(filename).is_file()
    }

    /// Read note content
    pub fn read_note(&self, filename: &str) -> Result<String> {
        let path = self.root.join(filename);

        if !path.is_file() {
            return Err(TaglineError::NoteNotFound(filename.to_string()));
        }

        fs::read_to_string(&path).map_err(TaglineError::Io)
    }

    /// Write note content using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove
    /// the destination first.
    pub fn write_note_atomic(&self, filename: &str, content: &str) -> Result<()> {
        let path = self.root.join(filename);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.tagline-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("note.md"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    fn is_note_file(rel: &Path) -> bool {
        rel.extension().and_then(|ext| ext.to_str()) == Some("md")
    }

    fn collect_root_notes(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.root)?;
        let mut notes = Vec::new();

        for entry in entries {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Ok(rel) = path.strip_prefix(&self.root) else {
                continue;
            };
            if !Self::is_note_file(rel) {
                continue;
            }
            if let Some(filename) = Self::normalize_relative_path(rel) {
                notes.push(filename);
            }
        }

        Ok(notes)
    }

    fn collect_recursive_notes(&self) -> Vec<String> {
        let mut notes = Vec::new();

        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            if !Self::is_note_file(rel) {
                continue;
            }
            if let Some(filename) = Self::normalize_relative_path(rel) {
                notes.push(filename);
            }
        }

        notes
    }

    /// List all markdown note files relative to the root, sorted by name.
    /// `recursive` descends into subdirectories, skipping dot-directories.
    pub fn list_notes(&self, recursive: bool) -> Result<Vec<String>> {
        let mut notes = if recursive {
            self.collect_recursive_notes()
        } else {
            self.collect_root_notes()?
        };

        notes.sort();
        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Placement;
    use tempfile::TempDir;

    #[test]
    fn test_new_repository() {
        let path = PathBuf::from("/tmp/test");
        let repo = FileSystemRepository::new(path.clone());
        assert_eq!(repo.root, path);
    }

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());

        repo.initialize().unwrap();

        assert!(repo.is_initialized());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        let result = repo.initialize();
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();

        fs::create_dir(temp.path().join(".tagline")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_without_tagline_dir() {
        let temp = TempDir::new().unwrap();

        let result = FileSystemRepository::discover_from(temp.path());

        match result.unwrap_err() {
            TaglineError::NotTaglineDirectory(_) => {}
            other => panic!("Expected NotTaglineDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        let config = Config::new(Placement::Trailing, '#');
        repo.save_config(&config).unwrap();

        let loaded = repo.load_config().unwrap();
        assert_eq!(loaded.placement, Placement::Trailing);
        assert_eq!(loaded.marker, '#');
    }

    #[test]
    fn test_read_missing_note_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        let result = repo.read_note("absent.md");
        assert!(matches!(result, Err(TaglineError::NoteNotFound(_))));
    }

    #[test]
    fn test_write_note_atomic_overwrites() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.write_note_atomic("note.md", "first").unwrap();
        repo.write_note_atomic("note.md", "second").unwrap();

        assert_eq!(repo.read_note("note.md").unwrap(), "second");
        // No temp files left behind
        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .is_some_and(|n| n.contains("tagline-tmp"))
            })
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_list_notes_flat_ignores_subdirs_and_non_markdown() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        fs::write(temp.path().join("b.md"), "").unwrap();
        fs::write(temp.path().join("a.md"), "").unwrap();
        fs::write(temp.path().join("notes.txt"), "").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested/c.md"), "").unwrap();

        let notes = repo.list_notes(false).unwrap();
        assert_eq!(notes, vec!["a.md".to_string(), "b.md".to_string()]);
    }

    #[test]
    fn test_list_notes_recursive_skips_dot_dirs() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        fs::write(temp.path().join("a.md"), "").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested/c.md"), "").unwrap();
        fs::create_dir(temp.path().join(".hidden")).unwrap();
        fs::write(temp.path().join(".hidden/d.md"), "").unwrap();

        let notes = repo.list_notes(true).unwrap();
        assert_eq!(notes, vec!["a.md".to_string(), "nested/c.md".to_string()]);
    }
}
