//! Activate command implementation
//!
//! This module implements `skill-triggers activate`, the prompt-submit hook:
//! - Reads the prompt from stdin (JSON record or raw text)
//! - Loads the skill rules from the plugin or project layout
//! - Evaluates the prompt against every rule
//! - Prints the hook envelope or the plain-text report, or nothing at all
//!   when no skill matched

use crate::cli::args::HookFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, load_rules};
use crate::error::TriggerError;
use crate::input::{decode_prompt, read_input};
use crate::matcher::TriggerMatcher;
use crate::output::OutputMode;
use crate::rules::RuleSet;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;

/// Run the activate command
///
/// # Returns
///
/// Exit code:
/// - 0: Success, whether or not any skill matched
/// - 1: Error (missing or malformed rule file, unreadable input)
pub fn run_activate(rules: Option<&Path>, format: HookFormat) -> i32 {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match run_activate_inner(rules, format.into(), stdin.lock(), &mut stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error in skill activation hook: {}", e);
            EXIT_ERROR
        }
    }
}

/// Internal implementation of the activate command
fn run_activate_inner<R: Read, W: Write>(
    rules_path: Option<&Path>,
    mode: OutputMode,
    input: R,
    out: &mut W,
) -> Result<(), TriggerError> {
    let raw = read_input(input)?;
    let rules = load_rules(rules_path)?;

    if let Some(rendered) = activate(&rules, &raw, mode)? {
        writeln!(out, "{}", rendered)?;
        out.flush()?;
    }

    Ok(())
}

/// Evaluate raw hook input against a rule set and render it for the host
///
/// Returns `Ok(None)` when no skill matched, so nothing should be printed.
///
/// # Errors
///
/// Returns an error if the hook envelope cannot be serialized.
pub fn activate(
    rules: &RuleSet,
    raw_input: &str,
    mode: OutputMode,
) -> Result<Option<String>, serde_json::Error> {
    let prompt = decode_prompt(raw_input);
    let matches = TriggerMatcher::new(rules).evaluate(&prompt);

    if matches.is_empty() {
        debug!("No skills matched, nothing to report");
    }

    mode.render(&matches)
}
