//! Tag line encoding and decoding
//!
//! Converts between the raw text of a tag line and an ordered,
//! de-duplicated list of tag names with the marker stripped.

const SEPARATORS: [char; 4] = [' ', '\n', '\r', '\t'];

/// Decode a tag line into tag names.
///
/// Tokens are split on runs of ASCII separators; only tokens beginning with
/// the marker count. Duplicates keep their first occurrence, and the marker
/// prefix is stripped.
pub fn decode_tag_line(line: &str, marker: char) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    for token in line
        .trim_matches(SEPARATORS.as_slice())
        .split(SEPARATORS.as_slice())
        .filter(|token| !token.is_empty())
    {
        let Some(name) = token.strip_prefix(marker) else {
            continue;
        };
        if !tags.iter().any(|existing| existing == name) {
            tags.push(name.to_string());
        }
    }

    tags
}

/// Encode tag names back into canonical tag line text: marker-prefixed
/// tokens joined by single spaces. An empty list encodes to an empty string.
pub fn encode_tag_line(tags: &[String], marker: char) -> String {
    let mut line = String::new();
    for tag in tags {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push(marker);
        line.push_str(tag);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_splits_and_strips_marker() {
        assert_eq!(decode_tag_line("#work #urgent", '#'), vec!["work", "urgent"]);
    }

    #[test]
    fn decode_handles_irregular_whitespace() {
        assert_eq!(
            decode_tag_line("  #a\t#b \r\n #c ", '#'),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn decode_drops_duplicates_keeping_first() {
        assert_eq!(
            decode_tag_line("#a #b #a #c #b", '#'),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn decode_ignores_tokens_without_marker() {
        assert_eq!(decode_tag_line("#a stray #b", '#'), vec!["a", "b"]);
    }

    #[test]
    fn decode_empty_line() {
        assert_eq!(decode_tag_line("", '#'), Vec::<String>::new());
        assert_eq!(decode_tag_line("   ", '#'), Vec::<String>::new());
    }

    #[test]
    fn encode_joins_with_single_spaces() {
        let tags = vec!["work".to_string(), "urgent".to_string()];
        assert_eq!(encode_tag_line(&tags, '#'), "#work #urgent");
    }

    #[test]
    fn encode_empty_list() {
        assert_eq!(encode_tag_line(&[], '#'), "");
    }

    #[test]
    fn decode_of_encode_is_identity_on_deduped_names() {
        let tags = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        assert_eq!(decode_tag_line(&encode_tag_line(&tags, '@'), '@'), tags);
    }

    #[test]
    fn encode_canonicalizes_irregular_spacing() {
        let decoded = decode_tag_line("#a   #b\t\t#c", '#');
        assert_eq!(encode_tag_line(&decoded, '#'), "#a #b #c");
    }
}
