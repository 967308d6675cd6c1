//! Rule file parsing and location

pub mod locator;
pub mod skill_rules;

pub use locator::{RulesLocator, RulesSource};
pub use skill_rules::{SkillRulesFile, load_rule_set};
