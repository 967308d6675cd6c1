#![forbid(unsafe_code)]

//! Skill rule definition and per-rule trigger checks

use crate::types::{MatchType, Priority, RuleName};
use regex::{Regex, RegexBuilder};
use std::fmt;
use tracing::warn;

/// Prompt text handed to rules when they are checked
///
/// The lowercased copy is computed once per evaluation and shared by every
/// rule's keyword check. Intent patterns always see the original text.
#[derive(Debug)]
pub struct Prompt<'a> {
    /// Prompt exactly as the user typed it
    pub original: &'a str,

    /// Lowercased prompt for keyword containment
    pub normalized: String,
}

impl<'a> Prompt<'a> {
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            normalized: original.to_lowercase(),
        }
    }
}

/// A regex intent pattern, compiled case-insensitively at load time
///
/// A pattern that fails to compile keeps its error so the matcher can skip
/// it with a warning instead of failing the whole rule set.
pub struct IntentPattern {
    source: String,
    compiled: Result<Regex, String>,
}

impl fmt::Debug for IntentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntentPattern")
            .field("source", &self.source)
            .field("valid", &self.compiled.is_ok())
            .finish()
    }
}

impl IntentPattern {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let compiled = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|e| e.to_string());
        Self { source, compiled }
    }

    /// The pattern text as written in the rule file
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Compile error, if the pattern is not a valid regular expression
    pub fn error(&self) -> Option<&str> {
        self.compiled.as_ref().err().map(String::as_str)
    }

    pub fn is_valid(&self) -> bool {
        self.compiled.is_ok()
    }

    /// Searches the text; invalid patterns never match
    pub fn is_match(&self, text: &str) -> bool {
        match &self.compiled {
            Ok(regex) => regex.is_match(text),
            Err(_) => false,
        }
    }
}

/// Why a rule's priority cannot be used for grouping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidPriority {
    /// No `priority` field at all
    Missing,
    /// A value outside critical/high/medium/low, rendered as found
    Unrecognized(String),
}

impl fmt::Display for InvalidPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPriority::Missing => f.write_str("<missing>"),
            InvalidPriority::Unrecognized(value) => f.write_str(value),
        }
    }
}

/// A named trigger definition: keywords, intent patterns and a priority
#[derive(Debug)]
pub struct SkillRule {
    name: RuleName,
    keywords: Vec<String>,
    lowered_keywords: Vec<String>,
    intent_patterns: Vec<IntentPattern>,
    priority: Result<Priority, InvalidPriority>,
    description: Option<String>,
}

impl SkillRule {
    /// Creates a rule with no triggers and a missing priority
    pub fn new(name: impl Into<RuleName>) -> Self {
        Self {
            name: name.into(),
            keywords: Vec::new(),
            lowered_keywords: Vec::new(),
            intent_patterns: Vec::new(),
            priority: Err(InvalidPriority::Missing),
            description: None,
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self.lowered_keywords = self.keywords.iter().map(|k| k.to_lowercase()).collect();
        self
    }

    pub fn with_intent_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.intent_patterns = patterns.into_iter().map(IntentPattern::new).collect();
        self
    }

    /// Sets the priority from its raw rule-file value
    pub fn with_priority(mut self, value: &str) -> Self {
        self.priority = Priority::parse(value)
            .ok_or_else(|| InvalidPriority::Unrecognized(value.to_string()));
        self
    }

    pub(crate) fn with_priority_result(mut self, priority: Result<Priority, InvalidPriority>) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &RuleName {
        &self.name
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn intent_patterns(&self) -> &[IntentPattern] {
        &self.intent_patterns
    }

    pub fn priority(&self) -> Result<Priority, &InvalidPriority> {
        self.priority.as_ref().copied()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// True when the rule has neither keywords nor intent patterns
    pub fn has_no_triggers(&self) -> bool {
        self.keywords.is_empty() && self.intent_patterns.is_empty()
    }

    /// Checks this rule against a prompt
    ///
    /// Keywords are tried first and win over intent patterns. Intent
    /// patterns are tried in order and the first hit stops the search.
    /// Patterns that failed to compile are skipped with a warning.
    pub fn check(&self, prompt: &Prompt<'_>) -> Option<MatchType> {
        if self
            .lowered_keywords
            .iter()
            .any(|keyword| prompt.normalized.contains(keyword.as_str()))
        {
            return Some(MatchType::Keyword);
        }

        for pattern in &self.intent_patterns {
            if let Some(error) = pattern.error() {
                warn!(
                    skill = %self.name,
                    "Invalid regex pattern '{}': {}",
                    pattern.as_str(),
                    error
                );
                continue;
            }
            if pattern.is_match(prompt.original) {
                return Some(MatchType::Intent);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_normalizes_once() {
        let prompt = Prompt::new("I'm seeing a Traceback");
        assert_eq!(prompt.original, "I'm seeing a Traceback");
        assert_eq!(prompt.normalized, "i'm seeing a traceback");
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let rule = SkillRule::new("debug-helper").with_keywords(["Stack Trace"]);
        assert_eq!(
            rule.check(&Prompt::new("here is the STACK TRACE")),
            Some(MatchType::Keyword)
        );
    }

    #[test]
    fn test_keyword_wins_over_intent() {
        let rule = SkillRule::new("both")
            .with_keywords(["revert"])
            .with_intent_patterns(["how do I revert"]);
        assert_eq!(
            rule.check(&Prompt::new("How do I revert this?")),
            Some(MatchType::Keyword)
        );
    }

    #[test]
    fn test_intent_uses_original_text() {
        // An explicit uppercase class still matches lowercase text because the
        // regex carries the case-insensitive flag.
        let rule = SkillRule::new("ticket").with_intent_patterns([r"[A-Z]+-\d+"]);
        assert_eq!(
            rule.check(&Prompt::new("look at proj-123 please")),
            Some(MatchType::Intent)
        );
    }

    #[test]
    fn test_intent_is_search_not_full_match() {
        let rule = SkillRule::new("git-helper").with_intent_patterns(["undo a commit"]);
        assert_eq!(
            rule.check(&Prompt::new("Quick one: how to undo a commit, thanks")),
            Some(MatchType::Intent)
        );
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let rule = SkillRule::new("mixed").with_intent_patterns(["(unclosed", "deploy"]);
        assert!(!rule.intent_patterns()[0].is_valid());
        assert!(rule.intent_patterns()[1].is_valid());
        assert_eq!(
            rule.check(&Prompt::new("deploy the service")),
            Some(MatchType::Intent)
        );
    }

    #[test]
    fn test_invalid_pattern_never_matches() {
        let pattern = IntentPattern::new("[unclosed");
        assert!(pattern.error().is_some());
        assert!(!pattern.is_match("[unclosed"));
    }

    #[test]
    fn test_rule_without_triggers_never_matches() {
        let rule = SkillRule::new("empty").with_priority("high");
        assert!(rule.has_no_triggers());
        assert_eq!(rule.check(&Prompt::new("anything at all")), None);
    }

    #[test]
    fn test_empty_keyword_matches_everything() {
        let rule = SkillRule::new("catch-all").with_keywords([""]);
        assert_eq!(rule.check(&Prompt::new("")), Some(MatchType::Keyword));
    }

    #[test]
    fn test_priority_parsing() {
        let rule = SkillRule::new("r").with_priority("medium");
        assert_eq!(rule.priority(), Ok(Priority::Medium));

        let rule = SkillRule::new("r").with_priority("urgent");
        assert_eq!(
            rule.priority(),
            Err(&InvalidPriority::Unrecognized("urgent".to_string()))
        );

        let rule = SkillRule::new("r");
        assert_eq!(rule.priority(), Err(&InvalidPriority::Missing));
    }
}
