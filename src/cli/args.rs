//! CLI argument parsing using clap

use crate::output::OutputMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// How the activate command hands matches to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HookFormat {
    /// Single-line JSON envelope for the UserPromptSubmit hook
    Hook,
    /// Plain-text report
    Text,
}

impl From<HookFormat> for OutputMode {
    fn from(format: HookFormat) -> Self {
        match format {
            HookFormat::Hook => OutputMode::Hook,
            HookFormat::Text => OutputMode::Text,
        }
    }
}

/// Output format for the list command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Use color when stdout is a terminal
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// skill-triggers CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "skill-triggers")]
#[command(about = "Suggest skills for a prompt from keyword and intent-pattern trigger rules")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Match a prompt read from stdin against the skill rules
    Activate {
        /// Rule file (defaults to the plugin or project skill-rules.json)
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "hook")]
        format: HookFormat,
    },

    /// Check a rule file for invalid priorities, patterns and empty triggers
    Validate {
        /// Rule file (defaults to the plugin or project skill-rules.json)
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// List the loaded skills grouped by priority
    List {
        /// Rule file (defaults to the plugin or project skill-rules.json)
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// Detect questions and follow-ups for a prompt read from stdin
    Question {
        /// Directory for per-session history files (defaults to ~/.claude)
        #[arg(long)]
        history_dir: Option<PathBuf>,
    },
}
