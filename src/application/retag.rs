//! Rename/remove tag use case

use crate::domain::TagMutator;
use crate::error::{Result, TaglineError};
use crate::infrastructure::{FileSystemRepository, NoteRepository};

/// The edit to apply to a note's tag line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEdit {
    Rename { old_tag: String, new_tag: String },
    Remove { tag: String },
}

impl TagEdit {
    /// The tag this edit targets on the tag line.
    fn target(&self) -> &str {
        match self {
            TagEdit::Rename { old_tag, .. } => old_tag,
            TagEdit::Remove { tag } => tag,
        }
    }

    fn apply(&self, mutator: &TagMutator, content: &str) -> Option<String> {
        match self {
            TagEdit::Rename { old_tag, new_tag } => mutator.rename_tag(content, old_tag, new_tag),
            TagEdit::Remove { tag } => mutator.remove_tag(content, tag),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RetagOptions {
    pub edit: TagEdit,
    /// Target a single note instead of every listed note.
    pub file: Option<String>,
    pub recursive: bool,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetagReport {
    pub scanned_files: usize,
    pub changed_files: usize,
    pub dry_run: bool,
    pub changes: Vec<String>,
}

/// Apply a tag edit across the repository's notes, or to one note.
///
/// For a single targeted note a missing tag is an error; for a bulk run
/// notes without the tag (or without a tag line at all) are just skipped.
pub fn retag_notes(repository: &FileSystemRepository, options: RetagOptions) -> Result<RetagReport> {
    let config = repository.load_config()?;
    let edit = normalize_edit(options.edit, config.marker)?;
    let mutator = TagMutator::new(config.placement, config.marker);

    let filenames = match &options.file {
        Some(filename) => vec![filename.clone()],
        None => repository.list_notes(options.recursive)?,
    };

    let mut changes = Vec::new();

    for filename in &filenames {
        let content = repository.read_note(filename)?;
        let Some(mutated) = edit.apply(&mutator, &content) else {
            if options.file.is_some() {
                return Err(TaglineError::TagNotFound(edit.target().to_string()));
            }
            continue;
        };

        if !options.dry_run {
            repository.write_note_atomic(filename, &mutated)?;
        }
        changes.push(filename.clone());
    }

    Ok(RetagReport {
        scanned_files: filenames.len(),
        changed_files: changes.len(),
        dry_run: options.dry_run,
        changes,
    })
}

fn normalize_edit(edit: TagEdit, marker: char) -> Result<TagEdit> {
    Ok(match edit {
        TagEdit::Rename { old_tag, new_tag } => TagEdit::Rename {
            old_tag: normalize_tag_argument(&old_tag, marker)?,
            new_tag: normalize_tag_argument(&new_tag, marker)?,
        },
        TagEdit::Remove { tag } => TagEdit::Remove {
            tag: normalize_tag_argument(&tag, marker)?,
        },
    })
}

/// Accept a tag with or without its leading marker. The name must be
/// non-empty and whitespace-free; anything beyond that is the caller's
/// business.
fn normalize_tag_argument(input: &str, marker: char) -> Result<String> {
    let tag = input.strip_prefix(marker).unwrap_or(input);
    if tag.is_empty() || tag.chars().any(|ch| ch.is_ascii_whitespace()) {
        return Err(TaglineError::Config(format!("Invalid tag: '{}'", input)));
    }

    Ok(tag.to_string())
}
