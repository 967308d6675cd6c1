#![forbid(unsafe_code)]

//! skill-triggers: suggest skills for a prompt from trigger rules
//!
//! A rule file maps skill names to keywords, regex intent patterns and a
//! priority. Each submitted prompt is checked against every rule, and the
//! matching skills are reported grouped by priority, either as a
//! prompt-submit hook envelope or as plain text.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod matcher;
pub mod output;
pub mod question;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, HistoryError, InputError, TriggerError};

// Re-export core domain types for convenient access
pub use matcher::{MatchResult, TriggerMatcher, evaluate};
pub use rules::{RuleSet, SkillRule};
pub use types::{MatchType, Priority, RuleName};
