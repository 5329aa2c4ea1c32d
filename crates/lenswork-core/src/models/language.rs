use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Interface language. Arabic is the out-of-the-box default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Language {
    En,
    #[default]
    Ar,
    Fr,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
            Language::Fr => "fr",
        }
    }

    /// Parse a language code; anything unknown is rejected.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for code in ["en", "ar", "fr"] {
            assert_eq!(Language::parse(code).unwrap().as_str(), code);
        }
        assert!(Language::parse("de").is_none());
        assert!(Language::parse("EN").is_none());
    }

    #[test]
    fn test_default_is_arabic() {
        assert_eq!(Language::default(), Language::Ar);
    }
}
