// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Grouping of epics by component.

use std::collections::HashMap;

use es_core::Issue;

/// Epics of one component, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentGroup<'a> {
    pub name: String,
    pub epics: Vec<&'a Issue>,
}

/// Components in first-seen order, plus the epics that have none.
///
/// An epic belongs to every component declared by itself or by any of its
/// non-obsolete linked issues, so it can appear in several groups.
#[derive(Debug, Clone, Default)]
pub struct ComponentGroups<'a> {
    groups: Vec<ComponentGroup<'a>>,
    index: HashMap<String, usize>,
    orphans: Vec<&'a Issue>,
}

impl<'a> ComponentGroups<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `component` if needed and returns its group.
    pub fn add(&mut self, component: &str) -> &mut ComponentGroup<'a> {
        let position = match self.index.get(component) {
            Some(&position) => position,
            None => {
                self.groups.push(ComponentGroup {
                    name: component.to_string(),
                    epics: Vec::new(),
                });
                self.index.insert(component.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        &mut self.groups[position]
    }

    /// Files `epic` under each of its components, or as an orphan.
    pub fn add_epic(&mut self, epic: &'a Issue) {
        let mut components: Vec<&str> = Vec::new();

        let linked = epic.linked_issues.iter().filter(|i| !i.is_obsolete());
        for name in epic
            .components
            .iter()
            .chain(linked.flat_map(|i| i.components.iter()))
        {
            if !components.contains(&name.as_str()) {
                components.push(name);
            }
        }

        if components.is_empty() {
            self.orphans.push(epic);
            return;
        }

        for name in components {
            self.add(name).epics.push(epic);
        }
    }

    pub fn groups(&self) -> &[ComponentGroup<'a>] {
        &self.groups
    }

    pub fn orphans(&self) -> &[&'a Issue] {
        &self.orphans
    }
}

impl<'a> FromIterator<&'a Issue> for ComponentGroups<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Issue>>(iter: I) -> Self {
        let mut groups = ComponentGroups::new();
        for epic in iter {
            groups.add_epic(epic);
        }
        groups
    }
}

#[cfg(test)]
#[path = "components_tests.rs"]
mod tests;
