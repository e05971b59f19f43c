//! Threshold table driving the metric evaluators
//!
//! [`RuleTable::default`] carries the stock thresholds. A table can also be
//! loaded from a `.toml`, `.json` or `.yaml` file; any section left out keeps
//! its default.
//!
//! ```toml
//! [title]
//! min = 10
//! max = 70
//! warning_credit = 0.5
//!
//! [keyword]
//! keyword = "seo"
//! max_density = 2.5
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or validating a rule table
#[derive(Error, Debug)]
pub enum RulesError {
    #[error("failed to read rules file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML rules: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON rules: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML rules: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported rules format '{0}' (expected toml, json, yaml or yml)")]
    UnsupportedFormat(String),

    #[error("invalid rule '{rule}': {reason}")]
    Invalid { rule: &'static str, reason: String },
}

/// Inclusive length window measured in characters.
///
/// Its defaults differ per metric, so a section that sets it must set every
/// field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthRule {
    pub min: usize,
    pub max: usize,
    pub warning_credit: f64,
}

impl LengthRule {
    pub fn contains(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }
}

impl Default for LengthRule {
    fn default() -> Self {
        Self {
            min: 10,
            max: 70,
            warning_credit: 0.5,
        }
    }
}

/// Two-tier count rule: `ok_min` or more is Ok, `warn_min` or more is
/// Warning, below that is Fail. Like [`LengthRule`], sections are all or
/// nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierRule {
    pub ok_min: usize,
    pub warn_min: usize,
    pub warning_credit: f64,
}

impl Default for TierRule {
    fn default() -> Self {
        Self {
            ok_min: 5,
            warn_min: 1,
            warning_credit: 0.5,
        }
    }
}

/// Rule for metrics that degrade to Warning but never Fail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceRule {
    pub min: usize,
    pub warning_credit: f64,
}

impl Default for PresenceRule {
    fn default() -> Self {
        Self {
            min: 1,
            warning_credit: 0.75,
        }
    }
}

/// Image alt text coverage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AltRule {
    pub warning_credit: f64,
}

impl Default for AltRule {
    fn default() -> Self {
        Self {
            warning_credit: 0.5,
        }
    }
}

/// Target keyword and its accepted density window, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordRule {
    pub keyword: String,
    pub min_density: f64,
    pub max_density: f64,
    pub warning_credit: f64,
}

impl Default for KeywordRule {
    fn default() -> Self {
        Self {
            keyword: "seo".to_string(),
            min_density: 0.5,
            max_density: 3.0,
            warning_credit: 0.5,
        }
    }
}

/// All thresholds, credits and the target keyword used by one audit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTable {
    pub title: LengthRule,
    pub meta_description: LengthRule,
    pub subheadings: PresenceRule,
    pub image_alt: AltRule,
    pub keyword: KeywordRule,
    pub content_length: TierRule,
    pub internal_links: TierRule,
    pub external_links: PresenceRule,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            title: LengthRule::default(),
            meta_description: LengthRule {
                min: 50,
                max: 160,
                warning_credit: 0.5,
            },
            subheadings: PresenceRule::default(),
            image_alt: AltRule::default(),
            keyword: KeywordRule::default(),
            content_length: TierRule {
                ok_min: 1500,
                warn_min: 500,
                warning_credit: 0.5,
            },
            internal_links: TierRule::default(),
            external_links: PresenceRule::default(),
        }
    }
}

impl RuleTable {
    /// Load and validate a rule table, picking the format from the extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let table: RuleTable = match extension.as_str() {
            "toml" => toml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            other => return Err(RulesError::UnsupportedFormat(other.to_string())),
        };

        table.validate()?;
        debug!("Loaded rule table from {}", path.display());
        Ok(table)
    }

    /// Replace the target keyword
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword.keyword = keyword.into();
        self
    }

    /// Reject tables the evaluators cannot make sense of
    pub fn validate(&self) -> Result<(), RulesError> {
        check_range("title", self.title.min, self.title.max)?;
        check_range(
            "meta_description",
            self.meta_description.min,
            self.meta_description.max,
        )?;
        check_range(
            "content_length",
            self.content_length.warn_min,
            self.content_length.ok_min,
        )?;
        check_range(
            "internal_links",
            self.internal_links.warn_min,
            self.internal_links.ok_min,
        )?;

        if self.keyword.keyword.trim().is_empty() {
            return Err(RulesError::Invalid {
                rule: "keyword",
                reason: "keyword must not be empty".to_string(),
            });
        }
        if !(self.keyword.min_density <= self.keyword.max_density) {
            return Err(RulesError::Invalid {
                rule: "keyword",
                reason: format!(
                    "min_density {} is above max_density {}",
                    self.keyword.min_density, self.keyword.max_density
                ),
            });
        }

        let credits = [
            ("title", self.title.warning_credit),
            ("meta_description", self.meta_description.warning_credit),
            ("subheadings", self.subheadings.warning_credit),
            ("image_alt", self.image_alt.warning_credit),
            ("keyword", self.keyword.warning_credit),
            ("content_length", self.content_length.warning_credit),
            ("internal_links", self.internal_links.warning_credit),
            ("external_links", self.external_links.warning_credit),
        ];
        for (rule, credit) in credits {
            if !(0.0..=1.0).contains(&credit) {
                return Err(RulesError::Invalid {
                    rule,
                    reason: format!("warning_credit {credit} is outside [0, 1]"),
                });
            }
        }

        Ok(())
    }
}

fn check_range(rule: &'static str, low: usize, high: usize) -> Result<(), RulesError> {
    if low > high {
        return Err(RulesError::Invalid {
            rule,
            reason: format!("lower bound {low} is above upper bound {high}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_rules(extension: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(&format!(".{extension}"))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_table_is_valid() {
        let table = RuleTable::default();
        assert!(table.validate().is_ok());
        assert_eq!(table.keyword.keyword, "seo");
        assert_eq!(table.meta_description.min, 50);
        assert_eq!(table.content_length.ok_min, 1500);
        assert_eq!(table.external_links.warning_credit, 0.75);
    }

    #[test]
    fn loads_partial_toml() {
        let file = write_rules(
            "toml",
            r#"
            [keyword]
            keyword = "rust"

            [internal_links]
            ok_min = 10
            warn_min = 2
            warning_credit = 0.25
            "#,
        );

        let table = RuleTable::from_path(file.path()).unwrap();
        assert_eq!(table.keyword.keyword, "rust");
        assert_eq!(table.keyword.max_density, 3.0);
        assert_eq!(table.internal_links.ok_min, 10);
        assert_eq!(table.internal_links.warn_min, 2);
        assert_eq!(table.content_length, RuleTable::default().content_length);
        assert_eq!(table.title, LengthRule::default());
    }

    #[test]
    fn loads_json_and_yaml() {
        let json = write_rules(
            "json",
            r#"{"title": {"min": 20, "max": 60, "warning_credit": 0.5}}"#,
        );
        assert_eq!(RuleTable::from_path(json.path()).unwrap().title.min, 20);

        let yaml = write_rules("yml", "keyword:\n  keyword: blog\n");
        assert_eq!(
            RuleTable::from_path(yaml.path()).unwrap().keyword.keyword,
            "blog"
        );
    }

    #[test]
    fn rejects_incomplete_length_section() {
        let file = write_rules("toml", "[meta_description]\nmax = 200\n");
        let err = RuleTable::from_path(file.path()).unwrap_err();
        assert!(matches!(err, RulesError::Toml(_)));
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = write_rules("ini", "title=1");
        let err = RuleTable::from_path(file.path()).unwrap_err();
        assert!(matches!(err, RulesError::UnsupportedFormat(ext) if ext == "ini"));
    }

    #[test]
    fn rejects_missing_file() {
        let err = RuleTable::from_path("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, RulesError::Io { .. }));
    }

    #[test]
    fn rejects_inverted_range() {
        let mut table = RuleTable::default();
        table.title.min = 80;
        let err = table.validate().unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn rejects_credit_out_of_range() {
        let mut table = RuleTable::default();
        table.external_links.warning_credit = 1.5;
        assert!(matches!(
            table.validate(),
            Err(RulesError::Invalid {
                rule: "external_links",
                ..
            })
        ));
    }

    #[test]
    fn rejects_blank_keyword() {
        let table = RuleTable::default().with_keyword("   ");
        assert!(table.validate().is_err());
    }
}
