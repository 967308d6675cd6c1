//! Question command implementation
//!
//! This module implements `skill-triggers question`, the question optimizer
//! hook. It never fails the prompt: bad input, history problems and
//! statements all end with exit code 0.

use crate::cli::common::EXIT_SUCCESS;
use crate::input::read_input;
use crate::question::{HistoryStore, PromptHistory, QuestionInput, analyze, render_notice};
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Run the question command
///
/// # Returns
///
/// Always 0. The notice, if any, goes to stderr.
pub fn run_question(history_dir: Option<&Path>) -> i32 {
    let raw = match read_input(io::stdin().lock()) {
        Ok(raw) => raw,
        Err(e) => {
            debug!("Could not read question input: {}", e);
            return EXIT_SUCCESS;
        }
    };

    let store = history_dir
        .map(HistoryStore::new)
        .or_else(|| HistoryStore::default_dir().map(HistoryStore::new));
    if store.is_none() {
        debug!("No home directory, prompt history disabled");
    }

    if let Some(notice) = question_notice(&raw, store.as_ref()) {
        eprintln!("{}", notice);
    }

    EXIT_SUCCESS
}

/// Analyze raw hook input and update the session history
///
/// The prompt is analyzed against the history recorded before it, then
/// appended. Returns the notice to show, or `None` for statements and for
/// input that has no prompt.
pub fn question_notice(raw: &str, store: Option<&HistoryStore>) -> Option<String> {
    let input: QuestionInput = match serde_json::from_str(raw) {
        Ok(input) => input,
        Err(e) => {
            debug!("Question input is not a JSON record: {}", e);
            return None;
        }
    };

    if input.user_prompt.is_empty() {
        debug!("No user prompt found");
        return None;
    }

    let mut history = match store {
        Some(store) => store.load(&input.session_id),
        None => PromptHistory::new(),
    };

    let analysis = analyze(&input.user_prompt, &history);
    debug!(
        session = %input.session_id,
        conditions = analysis.conditions.met(),
        "Analyzed prompt: {:?}",
        analysis.kind
    );

    history.push(input.user_prompt.as_str());
    if let Some(store) = store {
        if let Err(e) = store.save(&input.session_id, &history) {
            warn!("Could not save prompt history: {}", e);
        }
    }

    render_notice(&input.user_prompt, &analysis)
}
