// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod check;
pub mod report;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use rayon::prelude::*;

use es_core::{CheckResult, FieldMap, Issue, IssueAnalysis, Provider, Snapshot};

use crate::cli::SourceArgs;
use crate::config::{Config, Profile};
use crate::error::{Error, Result};

/// Epics selected by a profile, resolved from a snapshot.
#[derive(Debug, Clone)]
pub struct Source {
    pub profile: Profile,
    pub epics: Vec<Issue>,
}

/// Helper to load the selected epics from the command line arguments.
pub fn load(args: &SourceArgs) -> Result<Source> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let profile = match &args.profile {
        Some(id) => config.find_profile(id)?.clone(),
        None => Profile::default(),
    };

    let url = args.url.as_deref().unwrap_or(&config.instance.url);
    if url.is_empty() {
        return Err(Error::FieldRequired {
            field: "instance url",
            hint: "set [instance] url in the config file or pass --url",
        });
    }

    let snapshot = Snapshot::load(&args.snapshot)?;
    let fields = FieldMap::resolve(&config.fields, &snapshot.fields);
    tracing::debug!("resolved {} custom fields", fields.len());

    let filter = profile.filter()?;
    tracing::debug!("profile '{}' selects {:?}", profile.id, filter);
    let epics = Provider::new(url, fields).epics(&snapshot, &filter)?;

    Ok(Source { profile, epics })
}

/// Checks each epic, optionally scoped to a component, and maps every
/// verdict through `f`. Epics are evaluated in parallel; the output keeps
/// the input order.
pub fn evaluate<T, F>(epics: &[&Issue], component: Option<&str>, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&IssueAnalysis<'_>, &CheckResult) -> T + Sync,
{
    epics
        .par_iter()
        .map(|epic| {
            let analysis = IssueAnalysis::new(epic, component);
            let result = analysis.check();
            tracing::debug!(
                "{} [{}]: ready={} status={} messages={}",
                epic.key,
                component.unwrap_or("-"),
                result.ready,
                result.status,
                result.messages_string()
            );
            f(&analysis, &result)
        })
        .collect()
}
