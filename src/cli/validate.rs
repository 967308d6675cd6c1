//! Validate command implementation
//!
//! This module implements `skill-triggers validate`, which loads a rule
//! file and lists every per-rule problem that the activate hook would only
//! warn about at match time:
//! - priorities that are missing or outside critical/high/medium/low
//! - intent patterns that are not valid regular expressions
//! - skills with neither keywords nor intent patterns

use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, load_rules};
use crate::rules::RuleSet;
use crate::types::Priority;
use std::fmt;
use std::path::Path;

/// A problem found in one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleProblem {
    InvalidPriority {
        skill: String,
        value: String,
    },
    InvalidPattern {
        skill: String,
        pattern: String,
        error: String,
    },
    NoTriggers {
        skill: String,
    },
}

impl fmt::Display for RuleProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleProblem::InvalidPriority { skill, value } => write!(
                f,
                "{}: invalid priority '{}' (valid: {})",
                skill,
                value,
                Priority::valid_names()
            ),
            RuleProblem::InvalidPattern {
                skill,
                pattern,
                error,
            } => {
                // Regex errors span several lines; the last one names the cause.
                let cause = error.lines().last().unwrap_or_default().trim();
                write!(f, "{}: invalid intent pattern '{}': {}", skill, pattern, cause)
            }
            RuleProblem::NoTriggers { skill } => {
                write!(f, "{}: no keywords or intent patterns, never matches", skill)
            }
        }
    }
}

/// Collect problems for every rule, in rule-set order
pub fn find_problems(rules: &RuleSet) -> Vec<RuleProblem> {
    let mut problems = Vec::new();

    for rule in rules.iter() {
        let skill = rule.name().to_string();

        if let Err(invalid) = rule.priority() {
            problems.push(RuleProblem::InvalidPriority {
                skill: skill.clone(),
                value: invalid.to_string(),
            });
        }

        for pattern in rule.intent_patterns() {
            if let Some(error) = pattern.error() {
                problems.push(RuleProblem::InvalidPattern {
                    skill: skill.clone(),
                    pattern: pattern.as_str().to_string(),
                    error: error.to_string(),
                });
            }
        }

        if rule.has_no_triggers() {
            problems.push(RuleProblem::NoTriggers { skill });
        }
    }

    problems
}

/// Run the validate command
///
/// # Returns
///
/// Exit code:
/// - 0: The rule file loaded and has no problems
/// - 1: Problems were found, or the file could not be loaded
pub fn run_validate(rules: Option<&Path>) -> i32 {
    let rules = match load_rules(rules) {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_ERROR;
        }
    };

    let problems = find_problems(&rules);
    if problems.is_empty() {
        println!("OK: {} skills, no problems found", rules.len());
        return EXIT_SUCCESS;
    }

    for problem in &problems {
        println!("{}", problem);
    }
    println!(
        "{} problem(s) in {} skills",
        problems.len(),
        rules.len()
    );
    EXIT_ERROR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::SkillRule;

    #[test]
    fn test_clean_rules_have_no_problems() {
        let rules: RuleSet = [SkillRule::new("ok")
            .with_keywords(["fine"])
            .with_intent_patterns(["all (good|fine)"])
            .with_priority("low")]
        .into_iter()
        .collect();
        assert!(find_problems(&rules).is_empty());
    }

    #[test]
    fn test_all_problem_kinds() {
        let rules: RuleSet = [
            SkillRule::new("bad-priority")
                .with_keywords(["x"])
                .with_priority("urgent"),
            SkillRule::new("bad-pattern")
                .with_intent_patterns(["(open", "fine"])
                .with_priority("high"),
            SkillRule::new("empty"),
        ]
        .into_iter()
        .collect();

        let problems = find_problems(&rules);
        assert_eq!(problems.len(), 4);
        assert_eq!(
            problems[0],
            RuleProblem::InvalidPriority {
                skill: "bad-priority".to_string(),
                value: "urgent".to_string()
            }
        );
        assert!(matches!(
            &problems[1],
            RuleProblem::InvalidPattern { skill, pattern, .. }
                if skill == "bad-pattern" && pattern == "(open"
        ));
        assert_eq!(
            problems[2],
            RuleProblem::InvalidPriority {
                skill: "empty".to_string(),
                value: "<missing>".to_string()
            }
        );
        assert_eq!(
            problems[3],
            RuleProblem::NoTriggers {
                skill: "empty".to_string()
            }
        );
    }

    #[test]
    fn test_problem_display_is_single_line() {
        let rules: RuleSet = [SkillRule::new("bad-pattern")
            .with_intent_patterns(["(open"])
            .with_priority("high")]
        .into_iter()
        .collect();

        let line = find_problems(&rules)[0].to_string();
        assert!(line.starts_with("bad-pattern: invalid intent pattern '(open': "));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_priority_display() {
        let problem = RuleProblem::InvalidPriority {
            skill: "s".to_string(),
            value: "urgent".to_string(),
        };
        assert_eq!(
            problem.to_string(),
            "s: invalid priority 'urgent' (valid: critical, high, low, medium)"
        );
    }
}
