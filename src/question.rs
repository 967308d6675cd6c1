#![forbid(unsafe_code)]

//! Question optimizer
//!
//! Classifies a prompt as a statement, a new question, or a follow-up to
//! the recent prompts of the same session, and renders a short notice for
//! the user. The verdict never blocks the prompt.

pub mod detect;
pub mod history;

pub use detect::{QuestionConditions, check_question, content_words, shared_word_count};
pub use history::{HISTORY_LIMIT, HistoryStore, PromptHistory};

use serde::Deserialize;

/// Input record of the question hook
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionInput {
    #[serde(default = "default_session")]
    pub session_id: String,

    #[serde(default)]
    pub user_prompt: String,
}

fn default_session() -> String {
    "default".to_string()
}

/// Outcome of analyzing one prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Fewer than three question conditions met
    NotAQuestion,
    /// A question sharing enough words with recent prompts
    FollowUp { shared_words: usize },
    /// A question on a new topic
    New { shared_words: usize },
}

/// Conditions and verdict for a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionAnalysis {
    pub conditions: QuestionConditions,
    pub kind: QuestionKind,
}

/// Analyze a prompt against the session history that preceded it
pub fn analyze(prompt: &str, history: &PromptHistory) -> QuestionAnalysis {
    let conditions = check_question(prompt);

    let kind = if !conditions.is_question() {
        QuestionKind::NotAQuestion
    } else {
        let shared_words = shared_word_count(prompt, &history.prompts());
        if shared_words >= detect::FOLLOW_UP_THRESHOLD {
            QuestionKind::FollowUp { shared_words }
        } else {
            QuestionKind::New { shared_words }
        }
    };

    QuestionAnalysis { conditions, kind }
}

fn mark(condition: bool) -> &'static str {
    if condition { "✓" } else { "✗" }
}

fn conditions_block(conditions: &QuestionConditions) -> String {
    format!(
        "**Conditions met:** {}/4\n\
         - Starts with question word: {}\n\
         - Has subject: {}\n\
         - Has verb: {}\n\
         - Ends with '?': {}",
        conditions.met(),
        mark(conditions.starts_with_question_word),
        mark(conditions.has_subject),
        mark(conditions.has_verb),
        mark(conditions.ends_with_question_mark),
    )
}

/// Render the notice shown for a question; statements get none
pub fn render_notice(prompt: &str, analysis: &QuestionAnalysis) -> Option<String> {
    let conditions = conditions_block(&analysis.conditions);

    match analysis.kind {
        QuestionKind::NotAQuestion => None,
        QuestionKind::FollowUp { shared_words } => Some(format!(
            "🚀 **Performance Optimization Suggestion**\n\n\
             This appears to be a **follow-up question** related to the recent conversation \
             ({} matching contextual words found).\n\n\
             **Recommendation:** Use a faster model for a quick response.\n\n\
             **Question detected:** {}\n\n\
             {}\n\n\
             💡 **To use faster model:** The system could automatically switch to a faster model for this query.",
            shared_words, prompt, conditions
        )),
        QuestionKind::New { shared_words } => Some(format!(
            "📊 **Question Detected**\n\n\
             This is a **new question** (only {} contextual word matches found).\n\n\
             **Question:** {}\n\n\
             {}\n\n\
             ℹ️  Processing with normal model.",
            shared_words, prompt, conditions
        )),
    }
}
