#![forbid(unsafe_code)]

//! Structured hand-off for the host runtime
//!
//! Wraps the activation report in the `UserPromptSubmit` envelope and
//! selects between the envelope and the plain-text report.

use crate::matcher::MatchResult;
use crate::output::ReportFormatter;
use serde::{Deserialize, Serialize};

/// Event name the host uses for prompt submission hooks
pub const PROMPT_SUBMIT_EVENT: &str = "UserPromptSubmit";

/// Envelope written to stdout, one JSON object on one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

/// Extra context attached to the prompt-submit event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: String,
    pub additional_context: String,
}

impl HookOutput {
    /// Build the envelope for a set of matches
    ///
    /// Returns `None` when nothing matched: the hook then writes nothing.
    pub fn from_matches(matches: &[MatchResult<'_>]) -> Option<Self> {
        if matches.is_empty() {
            return None;
        }

        Some(HookOutput {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: PROMPT_SUBMIT_EVENT.to_string(),
                additional_context: ReportFormatter::new().format(matches),
            },
        })
    }
}

/// How matches are handed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// JSON envelope on a single line
    #[default]
    Hook,
    /// Plain-text report
    Text,
}

impl OutputMode {
    /// Render matches for this mode
    ///
    /// Returns `Ok(None)` when there is nothing to print.
    ///
    /// # Errors
    ///
    /// Returns an error if the envelope cannot be serialized.
    pub fn render(&self, matches: &[MatchResult<'_>]) -> Result<Option<String>, serde_json::Error> {
        match self {
            OutputMode::Hook => HookOutput::from_matches(matches)
                .map(|output| serde_json::to_string(&output))
                .transpose(),
            OutputMode::Text => {
                let report = ReportFormatter::new().format(matches);
                Ok((!report.is_empty()).then_some(report))
            }
        }
    }
}
