#![forbid(unsafe_code)]

//! Rule listing formatters
//!
//! This module provides formatters for displaying the loaded rule set from
//! the `skill-triggers list` command. It supports both human-readable
//! (optionally colored) and JSONL output formats.

use crate::rules::{RuleSet, SkillRule};
use crate::types::Priority;
use serde::Serialize;
use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

/// Heading used for rules whose priority cannot be grouped
const INVALID_HEADING: &str = "INVALID PRIORITY";

/// Summary of a single rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSummary {
    pub name: String,
    pub priority: Option<Priority>,
    /// Priority as written in the file, for rules that failed validation
    pub raw_priority: Option<String>,
    pub keywords: usize,
    pub intent_patterns: usize,
    pub invalid_patterns: usize,
    pub description: Option<String>,
}

impl RuleSummary {
    pub fn from_rule(rule: &SkillRule) -> Self {
        let (priority, raw_priority) = match rule.priority() {
            Ok(p) => (Some(p), None),
            Err(invalid) => (None, Some(invalid.to_string())),
        };

        Self {
            name: rule.name().to_string(),
            priority,
            raw_priority,
            keywords: rule.keywords().len(),
            intent_patterns: rule.intent_patterns().len(),
            invalid_patterns: rule
                .intent_patterns()
                .iter()
                .filter(|p| !p.is_valid())
                .count(),
            description: rule.description().map(str::to_string),
        }
    }
}

/// Summaries for every rule, in rule-set order
pub fn summarize(rules: &RuleSet) -> Vec<RuleSummary> {
    rules.iter().map(RuleSummary::from_rule).collect()
}

fn priority_color(priority: Option<Priority>) -> Color {
    match priority {
        Some(Priority::Critical) => Color::Red,
        Some(Priority::High) => Color::Yellow,
        Some(Priority::Medium) => Color::Cyan,
        Some(Priority::Low) => Color::Green,
        None => Color::Magenta,
    }
}

/// Human-readable formatter for the rule listing
pub struct RuleListHumanFormatter;

impl RuleListHumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        RuleListHumanFormatter
    }

    /// Write the listing, grouped by priority, to a color-capable writer
    ///
    /// Buckets follow the report order (critical to low). Rules with an
    /// invalid priority come last under their own heading.
    pub fn write<W: WriteColor>(&self, out: &mut W, summaries: &[RuleSummary]) -> io::Result<()> {
        writeln!(out, "Skills ({} loaded):", summaries.len())?;

        let groups = Priority::ALL
            .into_iter()
            .map(Some)
            .chain(std::iter::once(None));

        for group in groups {
            let members: Vec<&RuleSummary> =
                summaries.iter().filter(|s| s.priority == group).collect();
            if members.is_empty() {
                continue;
            }

            writeln!(out)?;
            out.set_color(ColorSpec::new().set_fg(Some(priority_color(group))).set_bold(true))?;
            match group {
                Some(priority) => write!(out, "{}", priority.as_str().to_uppercase())?,
                None => write!(out, "{}", INVALID_HEADING)?,
            }
            out.reset()?;
            writeln!(out)?;

            for summary in members {
                write!(
                    out,
                    "  {} ({} keywords, {} intent patterns",
                    summary.name, summary.keywords, summary.intent_patterns
                )?;
                if summary.invalid_patterns > 0 {
                    write!(out, ", {} invalid", summary.invalid_patterns)?;
                }
                write!(out, ")")?;
                if let Some(raw) = &summary.raw_priority {
                    write!(out, " priority: {}", raw)?;
                }
                writeln!(out)?;

                if let Some(description) = &summary.description {
                    writeln!(out, "    {}", description)?;
                }
            }
        }

        Ok(())
    }
}

impl Default for RuleListHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL output structure for a rule
#[derive(Debug, Serialize)]
struct JsonlRule<'a> {
    name: &'a str,
    priority: Option<&'static str>,
    valid_priority: bool,
    keywords: usize,
    intent_patterns: usize,
    invalid_patterns: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

/// JSONL formatter for the rule listing
pub struct RuleListJsonlFormatter;

impl RuleListJsonlFormatter {
    /// Create a new JSONL formatter
    pub fn new() -> Self {
        RuleListJsonlFormatter
    }

    /// Format summaries as JSONL, one object per rule
    pub fn format(&self, summaries: &[RuleSummary]) -> String {
        let mut output = String::new();

        for summary in summaries {
            let record = JsonlRule {
                name: &summary.name,
                priority: summary.priority.map(|p| p.as_str()),
                valid_priority: summary.priority.is_some(),
                keywords: summary.keywords,
                intent_patterns: summary.intent_patterns,
                invalid_patterns: summary.invalid_patterns,
                description: summary.description.as_deref(),
            };

            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }
}

impl Default for RuleListJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
