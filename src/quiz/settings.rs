//! Quiz settings chosen on the start screen

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::QuizError;
use crate::models::guitar::{GuitarString, MAX_FRET};

/// Which strings questions are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringRange {
    #[default]
    All,
    /// Strings 1-3
    #[serde(alias = "treble-3")]
    Treble,
    /// Strings 4-6
    #[serde(alias = "bass-3")]
    Bass,
}

impl StringRange {
    pub fn strings(self) -> Vec<GuitarString> {
        GuitarString::high_to_low()
            .filter(|string| match self {
                StringRange::All => true,
                StringRange::Treble => string.number() <= 3,
                StringRange::Bass => string.number() >= 4,
            })
            .collect()
    }
}

impl FromStr for StringRange {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StringRange::All),
            "treble" | "treble-3" => Ok(StringRange::Treble),
            "bass" | "bass-3" => Ok(StringRange::Bass),
            _ => Err(QuizError::InvalidStringRange(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizSettings {
    pub string_range: StringRange,
    pub min_fret: u8,
    pub max_fret: u8,
    pub use_flats: bool,
    pub use_sharps: bool,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            string_range: StringRange::All,
            min_fret: 0,
            max_fret: 12,
            use_flats: false,
            use_sharps: true,
        }
    }
}

impl QuizSettings {
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.min_fret > self.max_fret {
            return Err(QuizError::InvalidFretRange(format!(
                "{} is above {}",
                self.min_fret, self.max_fret
            )));
        }
        if self.max_fret > MAX_FRET {
            return Err(QuizError::InvalidFretRange(format!(
                "fret {} is past the last fret ({})",
                self.max_fret, MAX_FRET
            )));
        }
        Ok(())
    }

    /// Naturals-only mode: no accidental spelling was enabled
    pub fn naturals_only(&self) -> bool {
        !self.use_flats && !self.use_sharps
    }

    pub fn with_fret_range(mut self, range: &str) -> Result<Self, QuizError> {
        let (min, max) = parse_fret_range(range)?;
        self.min_fret = min;
        self.max_fret = max;
        Ok(self)
    }
}

/// Parse a fret range like "0-5" or "12" (a single fret)
pub fn parse_fret_range(range: &str) -> Result<(u8, u8), QuizError> {
    let invalid = || QuizError::InvalidFretRange(range.to_string());
    let parse = |s: &str| s.trim().parse::<u8>().map_err(|_| invalid());

    let (min, max) = match range.split_once('-') {
        Some((lo, hi)) => (parse(lo)?, parse(hi)?),
        None => {
            let fret = parse(range)?;
            (fret, fret)
        }
    };

    if min > max || max > MAX_FRET {
        return Err(invalid());
    }
    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_ranges() {
        let numbers = |range: StringRange| -> Vec<u8> {
            range.strings().iter().map(|s| s.number()).collect()
        };
        assert_eq!(numbers(StringRange::All), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(numbers(StringRange::Treble), vec![1, 2, 3]);
        assert_eq!(numbers(StringRange::Bass), vec![4, 5, 6]);
        assert_eq!("treble-3".parse::<StringRange>().unwrap(), StringRange::Treble);
        assert!("middle".parse::<StringRange>().is_err());
    }

    #[test]
    fn test_parse_fret_range() {
        assert_eq!(parse_fret_range("0-5").unwrap(), (0, 5));
        assert_eq!(parse_fret_range(" 5 - 12 ").unwrap(), (5, 12));
        assert_eq!(parse_fret_range("7").unwrap(), (7, 7));
        assert!(parse_fret_range("5-0").is_err());
        assert!(parse_fret_range("0-30").is_err());
        assert!(parse_fret_range("a-b").is_err());
    }

    #[test]
    fn test_validate() {
        let settings = QuizSettings::default().with_fret_range("3-9").unwrap();
        assert!(settings.validate().is_ok());

        let bad = QuizSettings {
            min_fret: 9,
            max_fret: 3,
            ..QuizSettings::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let settings: QuizSettings =
            serde_json::from_str(r#"{"stringRange":"bass","useFlats":true}"#).unwrap();
        assert_eq!(settings.string_range, StringRange::Bass);
        assert!(settings.use_flats);
        assert!(settings.use_sharps);
        assert_eq!(settings.max_fret, 12);
    }

    #[test]
    fn test_deserialize_page_range_spellings() {
        let settings: QuizSettings = serde_json::from_str(r#"{"stringRange":"treble-3"}"#).unwrap();
        assert_eq!(settings.string_range, StringRange::Treble);

        let settings: QuizSettings = serde_json::from_str(r#"{"stringRange":"bass-3"}"#).unwrap();
        assert_eq!(settings.string_range, StringRange::Bass);
        assert_eq!("bass-3".parse::<StringRange>().unwrap(), StringRange::Bass);
    }
}
