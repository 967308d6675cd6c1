//! Common helper functions shared across CLI commands
//!
//! This module provides shared functionality for exit codes, logging setup
//! and loading the rule set.

use crate::config::{RulesLocator, load_rule_set};
use crate::error::ConfigError;
use crate::rules::RuleSet;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

/// Install the stderr log subscriber
///
/// Warnings are always shown. `RUST_LOG` refines the filter, and
/// `--verbose` forces debug output. Stdout is never written to, so hook
/// consumers parsing it are not affected.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second initialization (tests calling run functions) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();
}

/// Load the rule set from an explicit path or from the environment layout
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the resolved file does not exist and
/// `ConfigError::Parse` if it is malformed.
pub(crate) fn load_rules(explicit: Option<&Path>) -> Result<RuleSet, ConfigError> {
    let source = RulesLocator::from_env(explicit.map(Path::to_path_buf)).resolve();
    debug!("Using skill rules from {:?}", source);
    load_rule_set(source.path())
}
