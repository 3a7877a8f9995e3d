//! Color theme preference

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::THEMES;
use crate::domain::result::Error;

/// A theme identifier as stored under the theme storage key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => THEMES.light,
            Theme::Dark => THEMES.dark,
            Theme::System => THEMES.system,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| Error::validation(format!("unknown theme: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trips_identifiers() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), theme);
        }
    }

    #[test]
    fn test_theme_rejects_unknown() {
        let err = "sepia".parse::<Theme>().unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_theme_parse_is_case_sensitive() {
        assert!("Dark".parse::<Theme>().is_err());
    }

    #[test]
    fn test_default_is_system() {
        assert_eq!(Theme::default(), Theme::System);
    }

    #[test]
    fn test_serde_matches_identifiers() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
