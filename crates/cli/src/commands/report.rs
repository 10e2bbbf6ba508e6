// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use es_core::Issue;

use crate::cli::SourceArgs;
use crate::components::ComponentGroups;
use crate::config::Profile;
use crate::error::Result;
use crate::sheet;
use crate::tsv::TsvWriter;

use super::{evaluate, load};

pub fn run(source: &SourceArgs) -> Result<()> {
    let source = load(source)?;
    let stdout = io::stdout();
    run_impl(&source.profile, &source.epics, stdout.lock())
}

/// Writes the report for `epics` to `out`.
///
/// Each component gets a header row followed by its epics, checked with the
/// component as scope. Epics without any component follow an `[UNASSIGNED]`
/// row and are checked unscoped.
pub(crate) fn run_impl<W: Write>(profile: &Profile, epics: &[Issue], out: W) -> Result<()> {
    let mut groups = ComponentGroups::new();
    for name in &profile.components.include {
        groups.add(name);
    }
    for epic in epics {
        groups.add_epic(epic);
    }

    let mut writer = TsvWriter::new(out);

    for group in groups.groups() {
        if profile.is_excluded(&group.name) {
            tracing::debug!("skipping excluded component {}", group.name);
            continue;
        }

        writer.write_record(&sheet::component_row(&group.name))?;
        for row in evaluate(&group.epics, Some(group.name.as_str()), sheet::epic_row) {
            writer.write_record(&row)?;
        }
        writer.flush()?;
    }

    writer.write_record(&[sheet::UNASSIGNED])?;
    for row in evaluate(groups.orphans(), None, sheet::epic_row) {
        writer.write_record(&row)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
