// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Custom field resolution.
//!
//! Trackers store most epic metadata in custom fields whose internal
//! identifiers differ between instances. A [`FieldMap`] resolves them once,
//! by their human-readable names, and is then handed to the provider.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Human-readable names of the custom fields the provider decodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNames {
    pub parent_link: String,
    pub epic_link: String,
    pub story_points: String,
    pub approvals: String,
    pub qe_assignee: String,
    pub acceptance: String,
    pub flagged: String,
    pub design_doc: String,
    pub readiness: String,
    pub planning: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        FieldNames {
            parent_link: "Parent Link".to_string(),
            epic_link: "Epic Link".to_string(),
            story_points: "Story Points".to_string(),
            approvals: "5-Acks Check".to_string(),
            qe_assignee: "QE Assignee".to_string(),
            acceptance: "Acceptance Criteria".to_string(),
            flagged: "Flagged".to_string(),
            design_doc: "Design Doc".to_string(),
            readiness: "Ready Check".to_string(),
            planning: "Planning".to_string(),
        }
    }
}

/// The custom fields the provider knows how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomField {
    ParentLink,
    EpicLink,
    StoryPoints,
    Approvals,
    QeAssignee,
    Acceptance,
    Flagged,
    DesignDoc,
    Readiness,
    Planning,
}

impl CustomField {
    pub const ALL: [CustomField; 10] = [
        CustomField::ParentLink,
        CustomField::EpicLink,
        CustomField::StoryPoints,
        CustomField::Approvals,
        CustomField::QeAssignee,
        CustomField::Acceptance,
        CustomField::Flagged,
        CustomField::DesignDoc,
        CustomField::Readiness,
        CustomField::Planning,
    ];

    /// Returns the configured name of this field.
    pub fn name<'a>(&self, names: &'a FieldNames) -> &'a str {
        match self {
            CustomField::ParentLink => &names.parent_link,
            CustomField::EpicLink => &names.epic_link,
            CustomField::StoryPoints => &names.story_points,
            CustomField::Approvals => &names.approvals,
            CustomField::QeAssignee => &names.qe_assignee,
            CustomField::Acceptance => &names.acceptance,
            CustomField::Flagged => &names.flagged,
            CustomField::DesignDoc => &names.design_doc,
            CustomField::Readiness => &names.readiness,
            CustomField::Planning => &names.planning,
        }
    }
}

/// A field declared by the tracker instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub id: String,
    pub name: String,
}

/// Immutable lookup from custom fields to provider identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    decls: HashMap<CustomField, FieldDecl>,
}

impl FieldMap {
    /// Resolves every custom field against the instance declarations.
    ///
    /// When a name is declared more than once the last declaration wins.
    /// Unresolved fields are logged and decode as absent.
    pub fn resolve(names: &FieldNames, decls: &[FieldDecl]) -> Self {
        let mut resolved = HashMap::new();

        for field in CustomField::ALL {
            let name = field.name(names);
            match decls.iter().rev().find(|d| d.name == name) {
                Some(decl) => {
                    resolved.insert(field, decl.clone());
                }
                None => tracing::warn!("custom field '{}' is not declared", name),
            }
        }

        FieldMap { decls: resolved }
    }

    /// Returns the identifier of `field`, if it was resolved.
    pub fn id(&self, field: CustomField) -> Option<&str> {
        self.decls.get(&field).map(|d| d.id.as_str())
    }

    /// Returns the declaration `field` was resolved to.
    pub fn decl(&self, field: CustomField) -> Option<&FieldDecl> {
        self.decls.get(&field)
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
