//! List command implementation
//!
//! This module implements `skill-triggers list`, which loads the rule file
//! and shows every skill grouped by priority with its trigger counts, in
//! human-readable or JSONL form.

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, load_rules};
use crate::error::TriggerError;
use crate::output::{RuleListHumanFormatter, RuleListJsonlFormatter, summarize};
use std::io::{IsTerminal, Write};
use std::path::Path;
use termcolor::StandardStream;

impl ColorChoice {
    /// Resolve against the terminal state of stdout
    fn to_termcolor(self) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
            ColorChoice::Auto if std::io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
            ColorChoice::Auto => termcolor::ColorChoice::Never,
        }
    }
}

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 1: The rule file could not be loaded
pub fn run_list(rules: Option<&Path>, format: OutputFormat, color: ColorChoice) -> i32 {
    match run_list_inner(rules, format, color) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_list_inner(
    rules: Option<&Path>,
    format: OutputFormat,
    color: ColorChoice,
) -> Result<(), TriggerError> {
    let rules = load_rules(rules)?;
    let summaries = summarize(&rules);

    match format {
        OutputFormat::Human => {
            let mut stdout = StandardStream::stdout(color.to_termcolor());
            RuleListHumanFormatter::new().write(&mut stdout, &summaries)?;
            stdout.flush()?;
        }
        OutputFormat::Jsonl => {
            let mut stdout = std::io::stdout().lock();
            write!(stdout, "{}", RuleListJsonlFormatter::new().format(&summaries))?;
            stdout.flush()?;
        }
    }

    Ok(())
}
