// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report configuration.
//!
//! Configuration is a TOML file describing the tracker instance and the
//! search profiles reports are built from:
//!
//! ```toml
//! [instance]
//! url = "https://tracker.example.com"
//!
//! [[profiles]]
//! id = "storage"
//! types = ["Epic"]
//! projects = ["STOR"]
//! components = { include = ["Core"], exclude = ["Docs"] }
//!
//! [fields]
//! qe_assignee = "QA Contact"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use es_core::{FieldNames, IssueFilter, IssueType, Status};

use crate::error::{Error, Result};

/// Report configuration loaded from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub instance: Instance,
    #[serde(default)]
    pub profiles: Vec<Profile>,
    /// Overrides for the custom field names of the instance.
    #[serde(default)]
    pub fields: FieldNames,
}

/// The tracker instance the snapshots come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Instance {
    /// Base URL used to build browse links.
    #[serde(default)]
    pub url: String,
}

/// Which issues a report covers and how they are grouped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    /// Issue types to assess; epics when empty.
    #[serde(default)]
    pub types: Vec<String>,
    /// Projects to assess; every project when empty.
    #[serde(default)]
    pub projects: Vec<String>,
    /// Workflow statuses to assess, matched by exact name; any when empty.
    #[serde(default)]
    pub statuses: Vec<String>,
    #[serde(default)]
    pub components: ComponentRules,
}

/// Component grouping adjustments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRules {
    /// Components always listed, first and in this order, even when empty.
    #[serde(default)]
    pub include: Vec<String>,
    /// Components never listed.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Finds the profile with the given id.
    pub fn find_profile(&self, id: &str) -> Result<&Profile> {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::ProfileNotFound {
                id: id.to_string(),
                available: if self.profiles.is_empty() {
                    "(none)".to_string()
                } else {
                    self.profiles
                        .iter()
                        .map(|p| p.id.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                },
            })
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            id: "default".to_string(),
            types: Vec::new(),
            projects: Vec::new(),
            statuses: Vec::new(),
            components: ComponentRules::default(),
        }
    }
}

impl Profile {
    /// Builds the filter selecting the issues this profile assesses.
    pub fn filter(&self) -> Result<IssueFilter> {
        let types = if self.types.is_empty() {
            vec![IssueType::Epic]
        } else {
            self.types
                .iter()
                .map(|t| t.parse::<IssueType>())
                .collect::<es_core::Result<Vec<_>>>()?
        };

        let mut filter = IssueFilter::All(vec![IssueFilter::types(&types)]);
        if !self.projects.is_empty() {
            filter = filter.and(IssueFilter::Any(
                self.projects
                    .iter()
                    .map(|p| IssueFilter::Project(p.clone()))
                    .collect(),
            ));
        }
        if !self.statuses.is_empty() {
            filter = filter.and(IssueFilter::Any(
                self.statuses
                    .iter()
                    .map(|s| IssueFilter::Status(Status::from(s.as_str())))
                    .collect(),
            ));
        }
        Ok(filter)
    }

    pub fn is_excluded(&self, component: &str) -> bool {
        self.components.exclude.iter().any(|c| c == component)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
