//! Filter selection state.
//!
//! Tracks which option labels the user has toggled on, per category.
//! This replaces the app-wide singleton the search screen used to share:
//! the host constructs one `SelectionState` per screen and owns it
//! explicitly, so screens cannot leak selections into each other and
//! tests can run independent instances in parallel.

use crate::vocabulary;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors that can occur when manipulating the selection state.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown filter category: {0}")]
    UnknownCategory(String),
}

/// Per-category sets of currently selected labels.
///
/// Category keys are fixed at construction; labels are not validated
/// against the vocabulary because hosts also show chips for dynamic tags
/// (the recipe screen reuses chip styling for diet tags returned by the
/// recipe API).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionState {
    /// Category order, used when collecting active filters
    categories: Vec<String>,
    selected: HashMap<String, HashSet<String>>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    /// Creates a selection over the standard search categories, all empty.
    pub fn new() -> Self {
        Self::with_categories(vocabulary::search_headers())
    }

    /// Creates a selection over a custom category list, all empty.
    pub fn with_categories(categories: impl IntoIterator<Item = String>) -> Self {
        let categories: Vec<String> = categories.into_iter().collect();
        let selected = categories
            .iter()
            .map(|name| (name.clone(), HashSet::new()))
            .collect();
        SelectionState {
            categories,
            selected,
        }
    }

    fn entry_mut(&mut self, category: &str) -> Result<&mut HashSet<String>, SelectionError> {
        self.selected
            .get_mut(category)
            .ok_or_else(|| SelectionError::UnknownCategory(category.to_string()))
    }

    fn entry(&self, category: &str) -> Result<&HashSet<String>, SelectionError> {
        self.selected
            .get(category)
            .ok_or_else(|| SelectionError::UnknownCategory(category.to_string()))
    }

    /// Flips a label's selected state and returns the new state
    /// (true = now selected).
    pub fn toggle(&mut self, category: &str, label: &str) -> Result<bool, SelectionError> {
        let labels = self.entry_mut(category)?;
        if labels.remove(label) {
            Ok(false)
        } else {
            labels.insert(label.to_string());
            Ok(true)
        }
    }

    /// Marks a label selected. Returns true if it was not selected before.
    pub fn select(&mut self, category: &str, label: &str) -> Result<bool, SelectionError> {
        Ok(self.entry_mut(category)?.insert(label.to_string()))
    }

    /// Unmarks a label. Returns true if it was selected before.
    pub fn deselect(&mut self, category: &str, label: &str) -> Result<bool, SelectionError> {
        Ok(self.entry_mut(category)?.remove(label))
    }

    /// True if the label is currently selected in the category.
    /// Unknown categories read as unselected.
    pub fn is_selected(&self, category: &str, label: &str) -> bool {
        self.selected
            .get(category)
            .map(|labels| labels.contains(label))
            .unwrap_or(false)
    }

    /// Returns the selected labels in a category, sorted for
    /// deterministic output.
    pub fn selected_in(&self, category: &str) -> Result<Vec<String>, SelectionError> {
        let mut labels: Vec<String> = self.entry(category)?.iter().cloned().collect();
        labels.sort();
        Ok(labels)
    }

    /// Total number of selected labels across all categories.
    pub fn len(&self) -> usize {
        self.selected.values().map(|labels| labels.len()).sum()
    }

    /// True if nothing is selected anywhere.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deselects everything, keeping the category keys.
    pub fn clear(&mut self) {
        for labels in self.selected.values_mut() {
            labels.clear();
        }
    }

    /// Collects the active filter set for a search request.
    ///
    /// Returns one `(category, labels)` pair per category with at least
    /// one selection, in category order, labels sorted.
    pub fn active_filters(&self) -> Vec<(String, Vec<String>)> {
        self.categories
            .iter()
            .filter_map(|name| {
                let labels = self.selected.get(name)?;
                if labels.is_empty() {
                    return None;
                }
                let mut labels: Vec<String> = labels.iter().cloned().collect();
                labels.sort();
                Some((name.clone(), labels))
            })
            .collect()
    }
}
