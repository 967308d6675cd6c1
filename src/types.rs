#![forbid(unsafe_code)]

//! Core domain types for skill-triggers
//!
//! This module defines the fundamental types shared by the loader, the
//! matcher and the output formatters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority bucket of a skill rule
///
/// Used only to group matches for display. Variants are declared in display
/// order, so the derived `Ord` sorts critical first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities in display order
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// Parses a priority value from a rule file
    ///
    /// Matching is exact: `"High"` or `" high"` are not valid priorities.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "critical" => Some(Priority::Critical),
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Section heading used in the activation report
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "⚠️  CRITICAL SKILLS (REQUIRED):",
            Priority::High => "📚 RECOMMENDED SKILLS:",
            Priority::Medium => "💡 SUGGESTED SKILLS:",
            Priority::Low => "📌 OPTIONAL SKILLS:",
        }
    }

    /// Comma-separated list of the valid priority names, sorted alphabetically
    pub fn valid_names() -> String {
        let mut names: Vec<&str> = Self::ALL.iter().map(Priority::as_str).collect();
        names.sort_unstable();
        names.join(", ")
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a rule matched a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// A keyword was found as a substring of the lowercased prompt
    Keyword,
    /// An intent pattern matched the original prompt
    Intent,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Keyword => "keyword",
            MatchType::Intent => "intent",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of a skill rule, the key of the `skills` mapping
///
/// Names are taken verbatim from the rule file. The mapping guarantees
/// uniqueness, so no further validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleName(String);

impl RuleName {
    pub fn new(name: impl Into<String>) -> Self {
        RuleName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RuleName {
    fn from(name: &str) -> Self {
        RuleName(name.to_string())
    }
}

impl From<String> for RuleName {
    fn from(name: String) -> Self {
        RuleName(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse("critical"), Some(Priority::Critical));
        assert_eq!(Priority::parse("high"), Some(Priority::High));
        assert_eq!(Priority::parse("medium"), Some(Priority::Medium));
        assert_eq!(Priority::parse("low"), Some(Priority::Low));
        assert_eq!(Priority::parse("urgent"), None);
        assert_eq!(Priority::parse("High"), None);
        assert_eq!(Priority::parse(""), None);
    }

    #[test]
    fn test_priority_display_order() {
        let mut shuffled = vec![
            Priority::Low,
            Priority::Critical,
            Priority::Medium,
            Priority::High,
        ];
        shuffled.sort();
        assert_eq!(shuffled, Priority::ALL.to_vec());
    }

    #[test]
    fn test_valid_names_sorted() {
        assert_eq!(Priority::valid_names(), "critical, high, low, medium");
    }

    #[test]
    fn test_match_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MatchType::Keyword).unwrap(),
            "\"keyword\""
        );
        assert_eq!(
            serde_json::to_string(&MatchType::Intent).unwrap(),
            "\"intent\""
        );
    }

    #[test]
    fn test_rule_name_transparent() {
        let name = RuleName::new("debug-helper");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"debug-helper\"");
        assert_eq!(name.to_string(), "debug-helper");
    }
}
