#![forbid(unsafe_code)]

//! Trigger matcher: evaluates a prompt against every rule of a RuleSet
//!
//! Matching is written once here and shared by every output mode. The
//! result keeps rule-visit order; grouping by priority is left to the
//! output formatters.

use crate::rules::{Prompt, RuleSet, SkillRule};
use crate::types::{MatchType, RuleName};
use tracing::debug;

/// A rule that matched the prompt, and how
#[derive(Debug, Clone, Copy)]
pub struct MatchResult<'a> {
    /// How the rule matched
    pub match_type: MatchType,

    /// The matched rule
    pub rule: &'a SkillRule,
}

impl<'a> MatchResult<'a> {
    pub fn rule_name(&self) -> &'a RuleName {
        self.rule.name()
    }
}

/// Matcher over a loaded rule set
///
/// The rule set is borrowed for the lifetime of the matcher and never
/// mutated.
pub struct TriggerMatcher<'r> {
    rules: &'r RuleSet,
}

impl<'r> TriggerMatcher<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self { rules }
    }

    /// Evaluate a prompt against all rules
    ///
    /// Every rule is visited in insertion order and contributes at most one
    /// MatchResult. Invalid intent patterns are skipped with a warning and
    /// never stop evaluation of other patterns or rules.
    pub fn evaluate(&self, text: &str) -> Vec<MatchResult<'r>> {
        let prompt = Prompt::new(text);

        let matches: Vec<MatchResult<'r>> = self
            .rules
            .iter()
            .filter_map(|rule| {
                rule.check(&prompt).map(|match_type| {
                    debug!(skill = %rule.name(), %match_type, "skill matched");
                    MatchResult { match_type, rule }
                })
            })
            .collect();

        debug!(
            "{} of {} skills matched the prompt",
            matches.len(),
            self.rules.len()
        );
        matches
    }
}

/// Evaluate a prompt against a rule set
///
/// Shorthand for `TriggerMatcher::new(rules).evaluate(text)`.
pub fn evaluate<'r>(rules: &'r RuleSet, text: &str) -> Vec<MatchResult<'r>> {
    TriggerMatcher::new(rules).evaluate(text)
}
