// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and check output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use es_core::CheckStatus;

/// ANSI 256-color codes
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders/context: medium grey
    pub const CONTEXT: u8 = 245;

    pub const GREEN: u8 = 114;
    pub const YELLOW: u8 = 221;
    pub const RED: u8 = 203;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Wraps text in a 256-color foreground escape sequence.
pub fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}\x1b[0m")
}

/// Colors a check status by severity. `NONE` stays plain.
pub fn status(status: CheckStatus) -> String {
    let code = match status {
        CheckStatus::None => return status.to_string(),
        CheckStatus::Green => codes::GREEN,
        CheckStatus::Yellow => codes::YELLOW,
        CheckStatus::Red => codes::RED,
    };
    paint(code, status.as_str())
}

/// Colorize an examples help block.
///
/// Lines ending with `:` are headers; in the other lines the command, up to
/// the first run of two spaces, is highlighted and `<placeholders>` dimmed.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut lines = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            lines.push(format!("{}{}", indent, paint(codes::HEADER, trimmed)));
            continue;
        }

        match trimmed.find("  ") {
            Some(end) => {
                let (cmd, desc) = trimmed.split_at(end);
                lines.push(format!("{}{}{}", indent, command(cmd), desc));
            }
            None => lines.push(line.to_string()),
        }
    }
    lines.join("\n")
}

fn command(cmd: &str) -> String {
    cmd.split(' ')
        .map(|word| {
            if word.starts_with('<') {
                paint(codes::CONTEXT, word)
            } else {
                paint(codes::LITERAL, word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
