// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use clap::CommandFactory;
use std::path::Path;

// Helper to parse CLI args
fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn report_with_url() {
    let cli = parse(&["epicsheet", "report", "issues.json", "--url", "https://t"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Report { ref source }
            if source.snapshot == Path::new("issues.json")
                && source.url.as_deref() == Some("https://t")
                && source.config.is_none()
    ));
}

#[test]
fn report_with_profile() {
    let cli = parse(&[
        "epicsheet",
        "report",
        "issues.json",
        "-c",
        "cfg.toml",
        "-p",
        "storage",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Command::Report { ref source }
            if source.config.as_deref() == Some(Path::new("cfg.toml"))
                && source.profile.as_deref() == Some("storage")
    ));
}

#[test]
fn profile_requires_config() {
    assert!(parse(&["epicsheet", "report", "issues.json", "-p", "storage"]).is_err());
}

#[test]
fn snapshot_is_required() {
    assert!(parse(&["epicsheet", "check"]).is_err());
}

#[test]
fn check_defaults_to_text() {
    let cli = parse(&["epicsheet", "check", "issues.json"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Check { output: OutputFormat::Text, component: None, .. }
    ));
}

#[test]
fn check_json_with_component() {
    let cli = parse(&[
        "epicsheet",
        "check",
        "issues.json",
        "-o",
        "json",
        "--component",
        "Core",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Command::Check { output: OutputFormat::Json, ref component, .. }
            if component.as_deref() == Some("Core")
    ));
}

#[test]
fn check_rejects_unknown_format() {
    assert!(parse(&["epicsheet", "check", "issues.json", "-o", "csv"]).is_err());
}

#[test]
fn verbose_is_global_and_counted() {
    let cli = parse(&["epicsheet", "check", "issues.json", "-vv"]).unwrap();
    assert_eq!(cli.verbose, 2);
    let cli = parse(&["epicsheet", "-v", "report", "issues.json"]).unwrap();
    assert_eq!(cli.verbose, 1);
}

#[test]
fn completion_shell() {
    let cli = parse(&["epicsheet", "completion", "bash"]).unwrap();
    assert!(matches!(cli.command, Command::Completion { shell: Shell::Bash }));
    assert!(parse(&["epicsheet", "completion", "tcsh"]).is_err());
}
