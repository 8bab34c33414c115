use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// How the day went, as picked by the user when writing a recap.
///
/// The string form (`great`, `good`, ...) is the one stored in the entry cache
/// and the one accepted in `mood=` URL parameters. Parsing is exact: `Great` is
/// not a mood.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    AsRefStr,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Neutral,
    Bad,
    Terrible,
}

impl Mood {
    /// Score from 5 (great) down to 1 (terrible).
    pub fn score(self) -> u8 {
        match self {
            Mood::Great => 5,
            Mood::Good => 4,
            Mood::Neutral => 3,
            Mood::Bad => 2,
            Mood::Terrible => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_lowercase_names() {
        assert_eq!(Mood::from_str("great").unwrap(), Mood::Great);
        assert_eq!(Mood::from_str("terrible").unwrap(), Mood::Terrible);
        assert_eq!(Mood::Neutral.as_ref(), "neutral");
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!(Mood::from_str("Great").is_err());
        assert!(Mood::from_str("xyz").is_err());
    }

    #[test]
    fn iterates_from_best_to_worst() {
        let scores: Vec<u8> = Mood::iter().map(Mood::score).collect();
        assert_eq!(scores, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&Mood::Bad).unwrap();
        assert_eq!(json, "\"bad\"");
        let mood: Mood = serde_json::from_str("\"good\"").unwrap();
        assert_eq!(mood, Mood::Good);
    }
}
