// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::SourceArgs;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "epicsheet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Assess epic readiness and delivery risk from a tracker snapshot")]
#[command(
    long_about = "Assess epic readiness and delivery risk from a tracker snapshot.\n\n\
    Every selected epic is checked against a fixed battery of rules and reported \
    as a spreadsheet row or as a per-epic verdict."
)]
#[command(styles = help::styles())]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the epic report as tab-separated spreadsheet rows
    #[command(after_help = colors::examples("\
Examples:
  epicsheet report issues.json --url <url>             Report every epic
  epicsheet report issues.json -c cfg.toml -p storage  Report one profile"))]
    Report {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the readiness verdict of each epic
    #[command(after_help = colors::examples("\
Examples:
  epicsheet check issues.json --url <url>                   Check every epic
  epicsheet check issues.json --url <url> -o json           Verdicts as JSON
  epicsheet check issues.json --url <url> --component Core  Scope checks to Core"))]
    Check {
        #[command(flatten)]
        source: SourceArgs,

        /// Only check epics of this component, scoped to it
        #[arg(long, value_name = "name")]
        component: Option<String>,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests.rs"]
mod tests;
