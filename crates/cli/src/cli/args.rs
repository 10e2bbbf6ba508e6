// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use std::path::PathBuf;

use clap::Args;

/// Where the epics come from: a snapshot file plus optional configuration.
#[derive(Args, Clone, Debug, Default)]
pub struct SourceArgs {
    /// Tracker search export (JSON)
    #[arg(value_name = "snapshot")]
    pub snapshot: PathBuf,

    /// Configuration file (TOML)
    #[arg(long, short = 'c', value_name = "path")]
    pub config: Option<PathBuf>,

    /// Search profile id from the configuration
    #[arg(long, short = 'p', value_name = "id", requires = "config")]
    pub profile: Option<String>,

    /// Tracker base URL, overriding [instance] url
    #[arg(long, value_name = "url")]
    pub url: Option<String>,
}
