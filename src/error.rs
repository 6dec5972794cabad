//! Error types for tagline

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tagline application
#[derive(Debug, Error)]
pub enum TaglineError {
    #[error("Not a tagline directory: {0}")]
    NotTaglineDirectory(PathBuf),

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TaglineError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TaglineError::NotTaglineDirectory(_) => 2,
            TaglineError::NoteNotFound(_) => 3,
            TaglineError::TagNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TaglineError::NotTaglineDirectory(path) => {
                format!(
                    "Not a tagline directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'tagline init' in this directory to start tracking notes\n\
                    • Navigate to an existing tagline directory\n\
                    • Set TAGLINE_ROOT environment variable to your notes path",
                    path.display()
                )
            }
            TaglineError::TagNotFound(tag) => {
                format!(
                    "Tag not found: '{}'\n\n\
                    Suggestions:\n\
                    • Check the tag spelling (tags are case-sensitive)\n\
                    • Run 'tagline tags <file>' to see the note's tag line\n\
                    • The tag line must sit after the title or on the last line,\n\
                      depending on the configured placement",
                    tag
                )
            }
            TaglineError::NoteNotFound(filename) => {
                format!(
                    "Note not found: '{}'\n\n\
                    Suggestions:\n\
                    • Paths are relative to the tagline root directory\n\
                    • Run 'tagline tags' to see which notes are tracked",
                    filename
                )
            }
            TaglineError::Config(msg) => {
                if msg.contains("Invalid placement") {
                    format!(
                        "{}\n\n\
                        Valid placements: after-title, trailing\n\
                        Example: tagline config placement trailing",
                        msg
                    )
                } else if msg.contains("Invalid marker") {
                    format!(
                        "{}\n\n\
                        The marker must be a single non-whitespace ASCII character\n\
                        Example: tagline config marker '#'",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TaglineError
pub type Result<T> = std::result::Result<T, TaglineError>;
