#![forbid(unsafe_code)]

//! Skill rule definitions and the rule set

mod rule;
mod rule_set;

// Re-export core types
pub use rule::{IntentPattern, InvalidPriority, Prompt, SkillRule};
pub use rule_set::RuleSet;
