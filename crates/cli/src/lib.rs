// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! epicsheet - epic readiness reports from tracker snapshots.
//!
//! This crate provides the `epicsheet` CLI on top of `es-core`: it loads a
//! tracker search export, selects epics through a configured profile, runs
//! the readiness checks and prints either a spreadsheet report or a verdict
//! per epic.
//!
//! # Main Components
//!
//! - [`Config`] - Instance URL, search profiles and custom field names
//! - [`components`] - Grouping of epics by component
//! - [`sheet`] and [`tsv`] - Spreadsheet cells and tab-separated output
//! - [`Error`] - Error types for all operations

mod cli;
pub mod colors;
mod commands;
pub mod components;
mod help;
pub mod sheet;
pub mod tsv;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat, SourceArgs};
pub use config::{ComponentRules, Config, Profile};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Report { source } => commands::report::run(&source),
        Command::Check {
            source,
            component,
            output,
        } => commands::check::run(&source, component.as_deref(), output),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "epicsheet", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
