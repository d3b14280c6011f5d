use crate::error::EcoError;
use crate::types::input::{Guess, MAX_GUESS};
use crate::types::keywords::{Keyword, KeywordTables, Weight};
use serde::Deserialize;

pub const MAX_KEYWORD_WEIGHT: Weight = 100;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EcoConfig {
    pub session: Option<SessionConfig>,
    pub output: Option<OutputConfig>,
    pub keywords: Option<KeywordsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub default_guess: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormatSetting {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormatSetting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeywordEntry {
    pub phrase: String,
    pub weight: Weight,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeywordsConfig {
    #[serde(default)]
    pub positive: Vec<KeywordEntry>,
    #[serde(default)]
    pub negative: Vec<KeywordEntry>,
}

impl EcoConfig {
    pub fn default_guess(&self) -> Guess {
        self.session
            .as_ref()
            .and_then(|session| session.default_guess)
            .and_then(|value| Guess::new(value).ok())
            .unwrap_or_default()
    }

    pub fn output_format(&self) -> Option<OutputFormatSetting> {
        self.output.as_ref().and_then(|output| output.format)
    }

    pub fn keyword_tables(&self) -> KeywordTables {
        match &self.keywords {
            Some(keywords) => KeywordTables::with_extra(
                to_keywords(&keywords.positive),
                to_keywords(&keywords.negative),
            ),
            None => KeywordTables::builtin(),
        }
    }

    pub fn validate(&self) -> Result<(), EcoError> {
        if let Some(default_guess) = self
            .session
            .as_ref()
            .and_then(|session| session.default_guess)
        {
            if default_guess > MAX_GUESS {
                return Err(EcoError::ConfigParse(format!(
                    "session.default_guess must be between 0 and {MAX_GUESS} (found {default_guess})"
                )));
            }
        }

        if let Some(keywords) = &self.keywords {
            for (table, entries) in [
                ("positive", &keywords.positive),
                ("negative", &keywords.negative),
            ] {
                for entry in entries {
                    if entry.phrase.trim().is_empty() {
                        return Err(EcoError::ConfigParse(format!(
                            "keywords.{table} contains an empty phrase"
                        )));
                    }
                    if !(1..=MAX_KEYWORD_WEIGHT).contains(&entry.weight) {
                        return Err(EcoError::ConfigParse(format!(
                            "keywords.{table} weight for '{}' must be between 1 and {MAX_KEYWORD_WEIGHT}",
                            entry.phrase
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

fn to_keywords(entries: &[KeywordEntry]) -> Vec<Keyword> {
    entries
        .iter()
        .map(|entry| Keyword {
            phrase: entry.phrase.trim().to_lowercase(),
            weight: entry.weight,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_builtin_defaults() {
        let cfg: EcoConfig = toml::from_str("").expect("empty config should parse");
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.default_guess().value(), 50);
        assert_eq!(cfg.output_format(), None);
        assert_eq!(cfg.keyword_tables().positive.len(), 14);
    }

    #[test]
    fn extra_keywords_are_lowercased_and_appended() {
        let cfg: EcoConfig = toml::from_str(
            r#"
[[keywords.positive]]
phrase = "  Hemp "
weight = 9

[[keywords.negative]]
phrase = "PVC"
weight = 12
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_ok());

        let tables = cfg.keyword_tables();
        assert_eq!(tables.positive.entries().last().map(|k| k.phrase.as_str()), Some("hemp"));
        assert_eq!(tables.negative.entries().last().map(|k| k.phrase.as_str()), Some("pvc"));
    }

    #[test]
    fn validate_rejects_out_of_range_default_guess() {
        let cfg: EcoConfig = toml::from_str(
            r#"
[session]
default_guess = 140
"#,
        )
        .expect("config should parse");
        assert!(matches!(cfg.validate(), Err(EcoError::ConfigParse(_))));
    }

    #[test]
    fn validate_rejects_zero_weight_and_blank_phrase() {
        let zero: EcoConfig = toml::from_str(
            r#"
[[keywords.negative]]
phrase = "vinyl"
weight = 0
"#,
        )
        .expect("config should parse");
        assert!(matches!(zero.validate(), Err(EcoError::ConfigParse(_))));

        let blank: EcoConfig = toml::from_str(
            r#"
[[keywords.positive]]
phrase = "   "
weight = 4
"#,
        )
        .expect("config should parse");
        assert!(matches!(blank.validate(), Err(EcoError::ConfigParse(_))));
    }

    #[test]
    fn output_format_parses_lowercase_names() {
        let cfg: EcoConfig = toml::from_str(
            r#"
[output]
format = "json"

[session]
default_guess = 80
"#,
        )
        .expect("config should parse");
        assert_eq!(cfg.output_format(), Some(OutputFormatSetting::Json));
        assert_eq!(cfg.default_guess().value(), 80);
    }
}
