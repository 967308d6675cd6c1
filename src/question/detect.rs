#![forbid(unsafe_code)]

//! Heuristic question and follow-up detection
//!
//! A prompt counts as a question when at least three of four surface
//! conditions hold. A question is a follow-up when it shares at least
//! three content words with the recent prompts of the session.

use std::collections::BTreeSet;

/// Conditions needed out of four for a prompt to be a question
pub const QUESTION_THRESHOLD: usize = 3;

/// Shared content words needed for a follow-up
pub const FOLLOW_UP_THRESHOLD: usize = 3;

/// Punctuation stripped from words before lookups
const WORD_PUNCTUATION: &[char] = &['?', ',', '.', ':', ';', '!'];

const QUESTION_STARTERS: &[&str] = &[
    "who", "whom", "what", "which", "when", "where", "why", "whose", "how", "are", "is", "do",
    "did", "was", "were", "have", "has", "had", "can", "could", "will", "would", "shall",
    "should", "may", "might",
];

const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "can", "of", "to",
    "in", "on", "at", "for", "with", "from", "by", "about", "as", "into", "through", "during",
    "before", "after", "above", "below", "between", "under", "i", "you", "we", "they", "he",
    "she", "it", "this", "that", "these", "those",
];

const SUBJECT_WORDS: &[&str] = &[
    "i", "you", "we", "they", "he", "she", "it", "this", "that", "file", "code", "project",
    "application", "system", "plugin", "function", "method", "class", "variable", "data",
    "user", "server", "database", "api", "interface", "component",
];

const COMMON_VERBS: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
    "can", "could", "will", "would", "shall", "should", "may", "might", "go", "get", "make",
    "take", "see", "know", "think", "come", "want", "use", "find", "give", "tell", "work",
    "call", "try", "ask", "need", "feel", "become", "leave", "put", "mean", "keep", "let",
    "begin", "seem", "help", "talk", "turn", "start", "show", "hear", "play", "run", "move",
    "like", "live", "believe", "hold", "bring", "happen", "write", "provide", "sit", "stand",
    "lose", "pay", "meet", "include", "create", "build", "edit", "change", "update", "delete",
    "add", "remove",
];

/// Which of the four question conditions a prompt meets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuestionConditions {
    pub starts_with_question_word: bool,
    pub has_subject: bool,
    pub has_verb: bool,
    pub ends_with_question_mark: bool,
}

impl QuestionConditions {
    /// Number of conditions met, 0 to 4
    pub fn met(&self) -> usize {
        [
            self.starts_with_question_word,
            self.has_subject,
            self.has_verb,
            self.ends_with_question_mark,
        ]
        .into_iter()
        .filter(|&c| c)
        .count()
    }

    pub fn is_question(&self) -> bool {
        self.met() >= QUESTION_THRESHOLD
    }
}

/// Evaluate the four question conditions
///
/// Words are lowercased before every lookup, so the subject check relies
/// on the indicator list alone.
pub fn check_question(text: &str) -> QuestionConditions {
    let lowered = text.trim().to_lowercase();
    let words: Vec<&str> = lowered
        .split_whitespace()
        .map(|w| w.trim_matches(WORD_PUNCTUATION))
        .collect();

    let Some(first) = words.first() else {
        return QuestionConditions::default();
    };

    QuestionConditions {
        starts_with_question_word: QUESTION_STARTERS.contains(first),
        has_subject: words.iter().any(|w| SUBJECT_WORDS.contains(w)),
        has_verb: words.iter().any(|w| COMMON_VERBS.contains(w)),
        ends_with_question_mark: text.trim().ends_with('?'),
    }
}

/// Content words of a text: lowercase ASCII words, stop words removed
///
/// A word is a maximal run of word characters made only of `a-z`, so
/// `don't` yields `don` and `t`, while `abc123` yields nothing.
pub fn content_words(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase()))
        .filter(|w| w.len() > 2 && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Count content words the prompt shares with earlier prompts
pub fn shared_word_count<S: AsRef<str>>(prompt: &str, history: &[S]) -> usize {
    let current = content_words(prompt);
    if current.is_empty() {
        return 0;
    }

    let joined = history
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    let previous = content_words(&joined);

    current.intersection(&previous).count()
}
