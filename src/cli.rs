//! CLI argument parsing and command dispatch

pub mod activate;
pub mod args;
pub mod common;
pub mod list;
pub mod question;
pub mod validate;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command, HookFormat, OutputFormat};
pub use common::{EXIT_ERROR, EXIT_SUCCESS, init_logging};
