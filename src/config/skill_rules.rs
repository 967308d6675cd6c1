//! Parsing for skill-rules.json (and skill-rules.toml) rule files
//!
//! The file has a top-level `skills` table. Each entry carries a
//! `promptTriggers` object and a `priority`:
//!
//! ```json
//! {
//!   "skills": {
//!     "debug-helper": {
//!       "priority": "high",
//!       "promptTriggers": {
//!         "keywords": ["traceback", "stack trace"],
//!         "intentPatterns": ["why (is|does) .* (fail|crash)"]
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Fields the matcher does not use (`type`, `enforcement`, ...) are ignored.

use crate::error::ConfigError;
use crate::rules::{InvalidPriority, RuleSet, SkillRule};
use crate::types::Priority;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Top-level rule file document
#[derive(Debug, Default, Deserialize)]
pub struct SkillRulesFile {
    /// Skill entries in document order
    #[serde(default)]
    pub skills: Map<String, Value>,
}

/// One entry of the `skills` table
///
/// Null trigger lists count as empty. Fields the matcher does not need are
/// read leniently so a stray value never fails the whole file.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    #[serde(default)]
    pub prompt_triggers: Option<PromptTriggers>,

    /// Kept as a raw value so that a wrong type is a warning, not a parse error
    #[serde(default)]
    pub priority: Option<Value>,

    /// Used only when it is a string
    #[serde(default)]
    pub description: Option<Value>,
}

/// Trigger criteria of a skill entry
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptTriggers {
    #[serde(default)]
    pub keywords: Option<Vec<String>>,

    #[serde(default)]
    pub intent_patterns: Option<Vec<String>>,
}

impl SkillRulesFile {
    /// Load and parse a rule file
    ///
    /// Files ending in `.toml` are parsed as TOML, everything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist,
    /// `ConfigError::Io` if it cannot be read and `ConfigError::Parse` if
    /// its content is malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let is_toml = path.extension().and_then(|e| e.to_str()) == Some("toml");
        let parsed = if is_toml {
            Self::parse_toml(&content)
        } else {
            Self::parse_json(&content)
        };

        parsed.map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse a JSON rule document
    pub fn parse_json(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    /// Parse a TOML rule document
    pub fn parse_toml(content: &str) -> Result<Self, String> {
        // Go through a JSON value so both formats share one schema and the
        // table order survives.
        let value: Value = toml::from_str(content).map_err(|e| e.to_string())?;
        serde_json::from_value(value).map_err(|e| e.to_string())
    }

    /// Convert the document into a RuleSet
    ///
    /// Intent patterns are compiled here. A pattern that does not compile is
    /// kept on its rule and reported later, never rejected.
    ///
    /// # Errors
    ///
    /// Returns a message naming the skill whose entry has the wrong shape.
    pub fn into_rule_set(self) -> Result<RuleSet, String> {
        let mut rules = RuleSet::new();

        for (name, value) in self.skills {
            let entry: SkillEntry = serde_json::from_value(value)
                .map_err(|e| format!("invalid entry for skill '{}': {}", name, e))?;

            let triggers = entry.prompt_triggers.unwrap_or_default();
            let mut rule = SkillRule::new(name.as_str())
                .with_keywords(triggers.keywords.unwrap_or_default())
                .with_intent_patterns(triggers.intent_patterns.unwrap_or_default())
                .with_priority_result(resolve_priority(entry.priority.as_ref()));

            match entry.description {
                Some(Value::String(description)) => {
                    rule = rule.with_description(description);
                }
                None | Some(Value::Null) => {}
                Some(other) => {
                    debug!("Ignoring non-string description of skill '{}': {}", name, other);
                }
            }

            rules.insert(rule);
        }

        Ok(rules)
    }
}

/// Validate a raw priority value against the closed set of priorities
fn resolve_priority(value: Option<&Value>) -> Result<Priority, InvalidPriority> {
    match value {
        None | Some(Value::Null) => Err(InvalidPriority::Missing),
        Some(Value::String(s)) => {
            Priority::parse(s).ok_or_else(|| InvalidPriority::Unrecognized(s.clone()))
        }
        Some(other) => Err(InvalidPriority::Unrecognized(other.to_string())),
    }
}

/// Load a rule file straight into a RuleSet
///
/// # Errors
///
/// See [`SkillRulesFile::load`]. A structurally invalid entry is reported as
/// `ConfigError::Parse`.
pub fn load_rule_set(path: &Path) -> Result<RuleSet, ConfigError> {
    let file = SkillRulesFile::load(path)?;
    let rules = file
        .into_rule_set()
        .map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

    debug!("Loaded {} skill rules from {}", rules.len(), path.display());
    Ok(rules)
}
