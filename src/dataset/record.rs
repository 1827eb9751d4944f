// src/dataset/record.rs
use serde::Deserialize;

/// One row of `wynne_finalists.csv`, fields kept exactly as read.
///
/// Columns other than these (the crawler also writes `description` and
/// `image_path`) are ignored. Any missing column reads as an empty string;
/// the loader rejects rows whose `year` ends up empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FinalistRecord {
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub image_stem: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub winner: String,
    #[serde(default)]
    pub url: String,
}

impl FinalistRecord {
    /// Only the literal `True` written by the crawler counts.
    pub fn is_winner(&self) -> bool {
        self.winner == "True"
    }

    /// Competition year as a number, `None` if empty or not an integer.
    pub fn year_number(&self) -> Option<u32> {
        self.year.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(year: &str, winner: &str) -> FinalistRecord {
        FinalistRecord {
            year: year.to_string(),
            winner: winner.to_string(),
            ..FinalistRecord::default()
        }
    }

    #[test]
    fn test_winner_literal() {
        assert!(with("2020", "True").is_winner());
        for other in ["true", "TRUE", "False", "", "1", " True"] {
            assert!(!with("2020", other).is_winner(), "{other:?}");
        }
    }

    #[test]
    fn test_year_number() {
        assert_eq!(with("2021", "").year_number(), Some(2021));
        assert_eq!(with(" 2011 ", "").year_number(), Some(2011));
        assert_eq!(with("", "").year_number(), None);
        assert_eq!(with("2020.5", "").year_number(), None);
        assert_eq!(with("-2020", "").year_number(), None);
    }
}
