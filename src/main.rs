//! skill-triggers CLI entry point

use clap::Parser;
use skill_triggers::cli::{Command, args::Cli, init_logging};
use std::process;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Command::Activate { rules, format } => {
            skill_triggers::cli::activate::run_activate(rules.as_deref(), format)
        }
        Command::Validate { rules } => skill_triggers::cli::validate::run_validate(rules.as_deref()),
        Command::List { rules, format } => {
            skill_triggers::cli::list::run_list(rules.as_deref(), format, cli.color)
        }
        Command::Question { history_dir } => {
            skill_triggers::cli::question::run_question(history_dir.as_deref())
        }
    };

    process::exit(exit_code);
}
