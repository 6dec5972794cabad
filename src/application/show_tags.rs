//! Show tags use case

use crate::domain::TagMutator;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, NoteRepository};
use std::collections::BTreeSet;

/// Service for reading tag lines out of notes.
pub struct TagsService {
    repository: FileSystemRepository,
}

impl TagsService {
    /// Create a new tags service.
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// The tags of a single note, in tag-line order. `None` when the note
    /// has no tag line under the configured placement.
    pub fn note_tags(&self, filename: &str) -> Result<Option<Vec<String>>> {
        let config = self.repository.load_config()?;
        let mutator = TagMutator::new(config.placement, config.marker);
        let content = self.repository.read_note(filename)?;
        Ok(mutator.tags(&content))
    }

    /// The sorted union of tags across every listed note. Notes without a
    /// tag line contribute nothing.
    pub fn all_tags(&self, recursive: bool) -> Result<Vec<String>> {
        let config = self.repository.load_config()?;
        let mutator = TagMutator::new(config.placement, config.marker);

        let mut tags = BTreeSet::new();
        for filename in self.repository.list_notes(recursive)? {
            let content = self.repository.read_note(&filename)?;
            if let Some(note_tags) = mutator.tags(&content) {
                tags.extend(note_tags);
            }
        }

        Ok(tags.into_iter().collect())
    }
}
