// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tab-separated record writer.
//!
//! Fields are quoted the way spreadsheet importers expect from CSV: only
//! when they contain the delimiter, a quote or a line break, or start with
//! whitespace. Quotes inside a quoted field are doubled.

use std::io::{self, Write};

const DELIMITER: char = '\t';

/// Writes records as tab-separated lines.
pub struct TsvWriter<W: Write> {
    inner: W,
}

impl<W: Write> TsvWriter<W> {
    pub fn new(inner: W) -> Self {
        TsvWriter { inner }
    }

    /// Writes one record followed by a newline.
    pub fn write_record<S: AsRef<str>>(&mut self, fields: &[S]) -> io::Result<()> {
        let mut line = String::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                line.push(DELIMITER);
            }
            push_field(&mut line, field.as_ref());
        }
        line.push('\n');
        self.inner.write_all(line.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

fn needs_quotes(field: &str) -> bool {
    if field.is_empty() {
        return false;
    }
    field == r"\."
        || field.contains([DELIMITER, '"', '\r', '\n'])
        || field.starts_with(char::is_whitespace)
}

fn push_field(line: &mut String, field: &str) {
    if !needs_quotes(field) {
        line.push_str(field);
        return;
    }
    line.push('"');
    line.push_str(&field.replace('"', "\"\""));
    line.push('"');
}

#[cfg(test)]
#[path = "tsv_tests.rs"]
mod tests;
