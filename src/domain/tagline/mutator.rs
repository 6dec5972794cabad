//! Tag rename and removal within a note
//!
//! Composes the locator and codec: locate the tag line, edit the decoded
//! tag list, encode it back and splice it over the original bounds. Every
//! byte outside the bounds is left untouched, including the tag line's own
//! trailing newline.

use crate::domain::tagline::codec::{decode_tag_line, encode_tag_line};
use crate::domain::tagline::locator::{LineBounds, TagLineLocator};
use crate::domain::Placement;

/// Rewrites the tag line of a note. `None` results mean "nothing to do":
/// no tag line, or the targeted tag is not on it.
#[derive(Debug, Clone, Copy)]
pub struct TagMutator {
    locator: TagLineLocator,
}

impl TagMutator {
    pub fn new(placement: Placement, marker: char) -> Self {
        TagMutator {
            locator: TagLineLocator::new(placement, marker),
        }
    }

    pub fn locator(&self) -> &TagLineLocator {
        &self.locator
    }

    /// The raw text of the note's tag line, if one is located.
    pub fn tag_line<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.locator
            .locate(text)
            .map(|bounds| &text[bounds.start..bounds.end])
    }

    /// The note's decoded tag names, in line order, if a tag line is located.
    pub fn tags(&self, text: &str) -> Option<Vec<String>> {
        self.tag_line(text)
            .map(|line| decode_tag_line(line, self.locator.marker()))
    }

    /// Rename `old_tag` to `new_tag` on the note's tag line.
    ///
    /// The renamed entry keeps its position. Decoding already de-duplicated
    /// the line, so the substitution is not re-deduplicated; renaming onto an
    /// existing name intentionally leaves that name listed twice.
    pub fn rename_tag(&self, text: &str, old_tag: &str, new_tag: &str) -> Option<String> {
        self.edit_tags(text, |tags| {
            let index = tags.iter().position(|tag| tag == old_tag)?;
            tags[index] = new_tag.to_string();
            Some(())
        })
    }

    /// Remove `tag_name` from the note's tag line.
    pub fn remove_tag(&self, text: &str, tag_name: &str) -> Option<String> {
        self.edit_tags(text, |tags| {
            let index = tags.iter().position(|tag| tag == tag_name)?;
            tags.remove(index);
            Some(())
        })
    }

    fn edit_tags(
        &self,
        text: &str,
        edit: impl FnOnce(&mut Vec<String>) -> Option<()>,
    ) -> Option<String> {
        let marker = self.locator.marker();
        let bounds = self.locator.locate(text)?;
        let mut tags = decode_tag_line(&text[bounds.start..bounds.end], marker);
        edit(&mut tags)?;
        Some(splice(text, bounds, &encode_tag_line(&tags, marker)))
    }
}

/// Replace exactly `text[start..end]` with `replacement`.
fn splice(text: &str, bounds: LineBounds, replacement: &str) -> String {
    let mut result = String::with_capacity(bounds.start + replacement.len() + text.len() - bounds.end);
    result.push_str(&text[..bounds.start]);
    result.push_str(replacement);
    result.push_str(&text[bounds.end..]);
    result
}
