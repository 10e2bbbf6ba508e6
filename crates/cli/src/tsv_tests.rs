// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn render(fields: &[&str]) -> String {
    let mut writer = TsvWriter::new(Vec::new());
    writer.write_record(fields).unwrap();
    String::from_utf8(writer.into_inner()).unwrap()
}

#[parameterized(
    plain = { "Core", "Core" },
    empty = { "", "" },
    inner_space = { "Ship it", "Ship it" },
    comma = { "NOACKS,NODESIGN", "NOACKS,NODESIGN" },
    unicode = { "\u{2713}", "\u{2713}" },
    tab = { "a\tb", "\"a\tb\"" },
    newline = { "line\nbreak", "\"line\nbreak\"" },
    carriage_return = { "a\rb", "\"a\rb\"" },
    quote = { "say \"hi\"", "\"say \"\"hi\"\"\"" },
    leading_space = { " padded", "\" padded\"" },
    end_of_data = { "\\.", "\"\\.\"" },
)]
fn quotes_fields(field: &str, expected: &str) {
    assert_eq!(render(&[field]), format!("{}\n", expected));
}

#[test]
fn joins_fields_with_tabs() {
    assert_eq!(render(&["a", "", "c"]), "a\t\tc\n");
}

#[test]
fn hyperlink_formula_is_quoted() {
    let formula = r#"=HYPERLINK("https://t.example.com/browse/P-1","P-1")"#;
    assert_eq!(
        render(&[formula]),
        "\"=HYPERLINK(\"\"https://t.example.com/browse/P-1\"\",\"\"P-1\"\")\"\n"
    );
}

#[test]
fn writes_successive_records() {
    let mut writer = TsvWriter::new(Vec::new());
    writer.write_record(&["Core", ""]).unwrap();
    writer.write_record(&["[UNASSIGNED]"]).unwrap();
    writer.flush().unwrap();
    let out = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(out, "Core\t\n[UNASSIGNED]\n");
}

#[test]
fn accepts_owned_strings() {
    let fields = vec!["x".to_string(), "y".to_string()];
    let mut writer = TsvWriter::new(Vec::new());
    writer.write_record(&fields).unwrap();
    assert_eq!(writer.into_inner(), b"x\ty\n");
}
