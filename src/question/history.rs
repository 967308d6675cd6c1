#![forbid(unsafe_code)]

//! Per-session prompt history
//!
//! Each session keeps its most recent prompts in a small JSON file. The
//! store is passed explicitly to callers; nothing here is process-global.

use crate::error::HistoryError;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prompts kept per session
pub const HISTORY_LIMIT: usize = 5;

/// Bounded, oldest-first sequence of recent prompts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptHistory {
    prompts: VecDeque<String>,
}

impl PromptHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a prompt, evicting the oldest ones beyond the limit
    pub fn push(&mut self, prompt: impl Into<String>) {
        self.prompts.push_back(prompt.into());
        while self.prompts.len() > HISTORY_LIMIT {
            self.prompts.pop_front();
        }
    }

    pub fn prompts(&self) -> Vec<&str> {
        self.prompts.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

impl FromIterator<String> for PromptHistory {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut history = PromptHistory::new();
        for prompt in iter {
            history.push(prompt);
        }
        history
    }
}

/// File-backed history store, one file per session under a directory
#[derive(Debug, Clone)]
pub struct HistoryStore {
    dir: PathBuf,
}

impl HistoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `~/.claude`, if a home directory is known
    pub fn default_dir() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .filter(|home| !home.is_empty())
            .map(|home| PathBuf::from(home).join(".claude"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// History file for a session
    ///
    /// Characters outside `[A-Za-z0-9_-]` are replaced so a session id can
    /// never escape the store directory.
    pub fn path_for(&self, session_id: &str) -> PathBuf {
        let safe: String = session_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir
            .join(format!("question_optimizer_history_{}.json", safe))
    }

    /// Load a session's history
    ///
    /// A missing or unreadable file yields an empty history.
    pub fn load(&self, session_id: &str) -> PromptHistory {
        let path = self.path_for(session_id);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No history at {}: {}", path.display(), e);
                return PromptHistory::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&content) {
            Ok(prompts) => prompts.into_iter().collect(),
            Err(e) => {
                debug!("Ignoring unreadable history {}: {}", path.display(), e);
                PromptHistory::new()
            }
        }
    }

    /// Persist a session's history
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Io` if the directory or file cannot be written.
    pub fn save(&self, session_id: &str, history: &PromptHistory) -> Result<(), HistoryError> {
        fs::create_dir_all(&self.dir).map_err(|source| HistoryError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path_for(session_id);
        let json = serde_json::to_string(&history.prompts)?;
        fs::write(&path, json).map_err(|source| HistoryError::Io { path, source })
    }
}
