//! Output formatters: activation report, hook envelope and rule listing

pub mod hook;
pub mod report;
pub mod rule_list;

pub use hook::{HookOutput, HookSpecificOutput, OutputMode};
pub use report::{ExcludedMatch, GroupedMatches, ReportFormatter, group_by_priority};
pub use rule_list::{RuleListHumanFormatter, RuleListJsonlFormatter, RuleSummary, summarize};
