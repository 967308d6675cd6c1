#![forbid(unsafe_code)]

//! Skill activation report
//!
//! Groups matches into priority buckets and renders the plain-text block
//! that hosts show to the assistant. Section order and the "skip empty
//! buckets" behavior are stable; consumers may grep for the labels.

use crate::matcher::MatchResult;
use crate::rules::InvalidPriority;
use crate::types::{Priority, RuleName};
use tracing::warn;

/// Banner line width, in characters
const BANNER_WIDTH: usize = 42;

const HEADER: &str = "🎯 SKILL ACTIVATION CHECK";
const ACTION: &str = "ACTION: Use Skill tool BEFORE responding";

/// A matched rule left out of the report because of its priority
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedMatch<'a> {
    pub name: &'a RuleName,
    pub priority: &'a InvalidPriority,
}

/// Matches split into the four priority buckets
#[derive(Debug, Default)]
pub struct GroupedMatches<'a> {
    buckets: [Vec<MatchResult<'a>>; 4],

    /// Matches whose priority is missing or unrecognized
    pub excluded: Vec<ExcludedMatch<'a>>,
}

impl<'a> GroupedMatches<'a> {
    /// Matches in one bucket, in evaluation order
    pub fn bucket(&self, priority: Priority) -> &[MatchResult<'a>] {
        &self.buckets[bucket_index(priority)]
    }

    /// Non-empty buckets from critical to low
    pub fn sections(&self) -> impl Iterator<Item = (Priority, &[MatchResult<'a>])> {
        Priority::ALL
            .into_iter()
            .map(move |p| (p, self.bucket(p)))
            .filter(|(_, matches)| !matches.is_empty())
    }
}

fn bucket_index(priority: Priority) -> usize {
    match priority {
        Priority::Critical => 0,
        Priority::High => 1,
        Priority::Medium => 2,
        Priority::Low => 3,
    }
}

/// Group matches by priority
///
/// Each match with an invalid priority is excluded from every bucket and
/// logged once as a warning naming the rule and the offending value.
pub fn group_by_priority<'a>(matches: &[MatchResult<'a>]) -> GroupedMatches<'a> {
    let mut grouped = GroupedMatches::default();

    for m in matches {
        match m.rule.priority() {
            Ok(priority) => grouped.buckets[bucket_index(priority)].push(*m),
            Err(invalid) => {
                warn!(
                    "Skill '{}' has invalid priority '{}'. Valid priorities are: {}. Skipping this skill.",
                    m.rule_name(),
                    invalid,
                    Priority::valid_names()
                );
                grouped.excluded.push(ExcludedMatch {
                    name: m.rule_name(),
                    priority: invalid,
                });
            }
        }
    }

    grouped
}

/// Plain-text formatter for the skill activation report
pub struct ReportFormatter;

impl ReportFormatter {
    /// Creates a new ReportFormatter
    pub fn new() -> Self {
        ReportFormatter
    }

    /// Render the report
    ///
    /// Returns the empty string when there are no matches at all, meaning
    /// "no action" for the host. Lines are joined with `\n` and the text has
    /// no trailing newline.
    pub fn format(&self, matches: &[MatchResult<'_>]) -> String {
        if matches.is_empty() {
            return String::new();
        }

        let banner = "━".repeat(BANNER_WIDTH);
        let grouped = group_by_priority(matches);

        let mut lines: Vec<String> = vec![
            banner.clone(),
            HEADER.to_string(),
            banner.clone(),
            String::new(),
        ];

        for (priority, bucket) in grouped.sections() {
            lines.push(priority.label().to_string());
            for m in bucket {
                lines.push(format!("  → {}", m.rule_name()));
            }
            lines.push(String::new());
        }

        lines.push(ACTION.to_string());
        lines.push(banner);

        lines.join("\n")
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
