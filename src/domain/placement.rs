//! Tag line placement conventions

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Where the tag line is expected to sit inside a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Tag line right after the note title, blank lines in between allowed
    #[default]
    AfterTitle,
    /// Tag line on the last non-blank line of the note
    Trailing,
}

impl Placement {
    /// Canonical config/CLI spelling of this placement
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::AfterTitle => "after-title",
            Placement::Trailing => "trailing",
        }
    }
}

impl FromStr for Placement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "after-title" => Ok(Placement::AfterTitle),
            "trailing" => Ok(Placement::Trailing),
            _ => Err(format!(
                "Invalid placement: {}. Valid placements: after-title, trailing",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_valid() {
        assert_eq!(Placement::from_str("after-title"), Ok(Placement::AfterTitle));
        assert_eq!(Placement::from_str("trailing"), Ok(Placement::Trailing));
    }

    #[test]
    fn test_from_str_invalid() {
        let err = Placement::from_str("sideways").unwrap_err();
        assert!(err.contains("Invalid placement"));
        assert!(err.contains("after-title"));
    }

    #[test]
    fn test_round_trip_through_as_str() {
        for placement in [Placement::AfterTitle, Placement::Trailing] {
            assert_eq!(Placement::from_str(placement.as_str()), Ok(placement));
        }
    }

    #[test]
    fn test_default_is_after_title() {
        assert_eq!(Placement::default(), Placement::AfterTitle);
    }
}
