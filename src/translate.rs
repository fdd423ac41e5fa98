use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::sport::Sport;

/// Raw team label → canonical identifier, keyed by sport. Loaded once at
/// startup from a JSON document shaped `{"nfl": {"NewEngland": "NE"}, ...}`
/// and immutable for the lifetime of a run. Labels missing from the table
/// pass through unchanged, never a failure.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    by_sport: HashMap<String, HashMap<String, String>>,
}

impl Translator {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let by_sport = serde_json::from_str::<HashMap<String, HashMap<String, String>>>(raw)
            .context("invalid team translation json")?;
        Ok(Self { by_sport })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read team translation file {}", path.display()))?;
        Self::from_json_str(&raw)
    }

    pub fn canonical(&self, sport: Sport, raw: &str) -> String {
        self.by_sport
            .get(sport.key())
            .and_then(|teams| teams.get(raw))
            .cloned()
            .unwrap_or_else(|| raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_translate() {
        let tr = Translator::from_json_str(
            r#"{"nfl": {"NewEngland": "NE"}, "nhl": {"NewEngland": "XX"}}"#,
        )
        .unwrap();
        assert_eq!(tr.canonical(Sport::Nfl, "NewEngland"), "NE");
        assert_eq!(tr.canonical(Sport::Nhl, "NewEngland"), "XX");
    }

    #[test]
    fn unknown_labels_pass_through() {
        let tr = Translator::from_json_str(r#"{"nfl": {}}"#).unwrap();
        assert_eq!(tr.canonical(Sport::Nfl, "Dallas"), "Dallas");
        assert_eq!(tr.canonical(Sport::Mlb, "Dallas"), "Dallas");
    }

    #[test]
    fn empty_translator_is_identity() {
        let tr = Translator::empty();
        assert_eq!(tr.canonical(Sport::Nba, "GoldenState"), "GoldenState");
    }
}
