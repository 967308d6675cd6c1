//! Resolution of the rule file location
//!
//! Hooks run either from an installed plugin or from a project checkout:
//! - plugin: `$CLAUDE_PLUGIN_ROOT/hooks/skill-rules.json`
//! - project: `$CLAUDE_PROJECT_DIR/.claude/skills/skill-rules.json`
//!
//! The plugin root wins when both are set. Without either, the current
//! directory is treated as the project directory.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the installed plugin directory
pub const PLUGIN_ROOT_VAR: &str = "CLAUDE_PLUGIN_ROOT";

/// Environment variable naming the project directory
pub const PROJECT_DIR_VAR: &str = "CLAUDE_PROJECT_DIR";

/// Rule file name shared by both layouts
pub const RULES_FILE_NAME: &str = "skill-rules.json";

/// Where the rule file was found, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesSource {
    /// Given explicitly on the command line
    Explicit(PathBuf),
    /// Under the plugin root
    Plugin(PathBuf),
    /// Under the project directory
    Project(PathBuf),
}

impl RulesSource {
    pub fn path(&self) -> &Path {
        match self {
            RulesSource::Explicit(p) | RulesSource::Plugin(p) | RulesSource::Project(p) => p,
        }
    }

    pub fn into_path(self) -> PathBuf {
        match self {
            RulesSource::Explicit(p) | RulesSource::Plugin(p) | RulesSource::Project(p) => p,
        }
    }
}

/// Inputs for resolving the rule file
///
/// Built from the process environment with [`RulesLocator::from_env`], or
/// directly in tests.
#[derive(Debug, Clone, Default)]
pub struct RulesLocator {
    pub explicit: Option<PathBuf>,
    pub plugin_root: Option<PathBuf>,
    pub project_dir: Option<PathBuf>,
    pub current_dir: PathBuf,
}

impl RulesLocator {
    /// Capture the relevant environment variables and the current directory
    ///
    /// Empty variables count as unset.
    pub fn from_env(explicit: Option<PathBuf>) -> Self {
        Self {
            explicit,
            plugin_root: non_empty_var(PLUGIN_ROOT_VAR),
            project_dir: non_empty_var(PROJECT_DIR_VAR),
            current_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Decide which rule file to load
    pub fn resolve(&self) -> RulesSource {
        if let Some(path) = &self.explicit {
            return RulesSource::Explicit(path.clone());
        }

        if let Some(root) = &self.plugin_root {
            return RulesSource::Plugin(root.join("hooks").join(RULES_FILE_NAME));
        }

        let project = self.project_dir.as_ref().unwrap_or(&self.current_dir);
        RulesSource::Project(project.join(".claude").join("skills").join(RULES_FILE_NAME))
    }
}

fn non_empty_var(name: &str) -> Option<PathBuf> {
    env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
