//! Tag line boundary detection
//!
//! Pure byte-level scanning; no markdown parsing. All offsets are byte
//! offsets into the note text. The marker, newline and separator set are
//! ASCII, so every computed bound lands on a UTF-8 character boundary.

use crate::domain::Placement;

/// Bytes that mark a trailing candidate line as markup rather than tags.
const INVALID_LINE_BYTES: [u8; 5] = [b'`', b'[', b']', b'(', b')'];

/// ASCII separators recognized between tag tokens and around lines.
pub(crate) fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\n' | b'\r' | b'\t')
}

/// Half-open byte interval covering a tag line, excluding its newline.
///
/// `end` equals the document length when the tag line is the last line and
/// the document has no trailing newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBounds {
    pub start: usize,
    pub end: usize,
}

/// Locates the tag line of a note for a fixed placement and marker.
#[derive(Debug, Clone, Copy)]
pub struct TagLineLocator {
    placement: Placement,
    marker: char,
}

impl TagLineLocator {
    /// Create a locator.
    ///
    /// # Panics
    ///
    /// Panics when the marker is not a non-whitespace ASCII character. That
    /// is malformed configuration, a programmer error, not a runtime
    /// condition.
    pub fn new(placement: Placement, marker: char) -> Self {
        assert!(
            marker.is_ascii() && !marker.is_ascii_whitespace(),
            "tag marker must be a non-whitespace ASCII character, got {:?}",
            marker
        );
        TagLineLocator { placement, marker }
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    /// Find the bounds of the tag line in `text`, or `None` when no line
    /// qualifies under this locator's placement convention.
    pub fn locate(&self, text: &str) -> Option<LineBounds> {
        let bytes = text.as_bytes();
        let marker = self.marker as u8;

        let bounds = match self.placement {
            Placement::AfterTitle => locate_after_title(bytes, marker)?,
            Placement::Trailing => locate_trailing(bytes, marker)?,
        };

        if line_is_only_tags(bytes, bounds, marker) {
            Some(bounds)
        } else {
            None
        }
    }
}

fn locate_after_title(bytes: &[u8], marker: u8) -> Option<LineBounds> {
    let scan_from = content_start_after_title(bytes)?;
    let start = first_marker_line_start(bytes, scan_from, marker)?;
    let end = line_end(bytes, start);
    Some(LineBounds { start, end })
}

/// Offset of the first byte after the title, or `None` when the document has
/// no recognizable title. Recognized titles: an ATX `# ` first line, or a
/// setext underline (second line starting with `=`).
fn content_start_after_title(bytes: &[u8]) -> Option<usize> {
    if bytes.starts_with(b"# ") {
        return newline_after(bytes, 0).map(|nl| nl + 1);
    }

    let second_line = newline_after(bytes, 0)? + 1;
    if bytes.get(second_line) != Some(&b'=') {
        return None;
    }

    newline_after(bytes, second_line).map(|nl| nl + 1)
}

/// Walk forward from `from`, skipping blank lines, until a line begins with
/// the marker. Reaching any other content ends the search.
fn first_marker_line_start(bytes: &[u8], from: usize, marker: u8) -> Option<usize> {
    for i in from..bytes.len() {
        if i > 0 && bytes[i - 1] == b'\n' && bytes[i] == marker {
            return Some(i);
        }
        if !is_separator(bytes[i]) {
            return None;
        }
    }
    None
}

fn locate_trailing(bytes: &[u8], marker: u8) -> Option<LineBounds> {
    let last = bytes.iter().rposition(|&b| b == marker)?;
    let end = line_end(bytes, last);

    // The marker must sit on the last non-blank line of the document.
    if bytes[end..].iter().any(|&b| !is_separator(b)) {
        return None;
    }

    let start = trailing_line_start(bytes, last)?;
    Some(LineBounds { start, end })
}

/// Walk backward from the byte before `marker_at` to the enclosing line's
/// start. Markup bytes seen on the way disqualify the line. Reaching offset
/// 0 without a newline means the line is the document's first line, whose
/// start is offset 0.
fn trailing_line_start(bytes: &[u8], marker_at: usize) -> Option<usize> {
    let mut i = marker_at;
    while i > 0 {
        i -= 1;
        if INVALID_LINE_BYTES.contains(&bytes[i]) {
            return None;
        }
        if bytes[i] == b'\n' {
            return Some(i + 1);
        }
    }
    Some(0)
}

/// Offset of the next newline at or after `from`, or the document length.
fn line_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| b == b'\n')
        .map(|offset| from + offset)
        .unwrap_or(bytes.len())
}

fn newline_after(bytes: &[u8], from: usize) -> Option<usize> {
    bytes[from..]
        .iter()
        .position(|&b| b == b'\n')
        .map(|offset| from + offset)
}

/// A candidate line qualifies only when every token on it begins with the
/// marker: a non-separator byte other than the marker must never follow a
/// separator inside the bounds.
fn line_is_only_tags(bytes: &[u8], bounds: LineBounds, marker: u8) -> bool {
    for k in bounds.start + 1..bounds.end {
        if is_separator(bytes[k - 1]) && !is_separator(bytes[k]) && bytes[k] != marker {
            return false;
        }
    }
    true
}
