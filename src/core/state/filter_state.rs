//! Which filter option each palette row is showing
//!
//! The engine never stores this. The caller owns a [`FilterState`],
//! cycles it when the user clicks a row's filter, persists it in the
//! settings file, and hands it over on every invocation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::errors::{SelectionError, SelectionResult};
use crate::editing::selection::matchers::{Category, Selector};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
    /// Filter key per category; missing rows are on their first option
    selected: BTreeMap<Category, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the option `category` is currently on
    pub fn current_key(&self, category: Category) -> &str {
        self.selected
            .get(&category)
            .map(String::as_str)
            .unwrap_or(category.filter_keys()[0])
    }

    /// Position of the current option in [`Category::filter_keys`]
    pub fn current_index(&self, category: Category) -> SelectionResult<usize> {
        let key = self.current_key(category);
        category
            .filter_keys()
            .iter()
            .position(|candidate| *candidate == key)
            .ok_or_else(|| {
                SelectionError::missing(format!(
                    "filter '{key}' for category '{}'",
                    category.as_str()
                ))
            })
    }

    /// The selector for `category` with its current filter
    pub fn selector(&self, category: Category) -> SelectionResult<Selector> {
        Selector::from_index(category, self.current_index(category)?)
    }

    /// Put `category` on the option named `key`
    pub fn set(&mut self, category: Category, key: &str) -> SelectionResult<()> {
        Selector::new(category, key)?;
        self.selected.insert(category, key.to_string());
        Ok(())
    }

    /// Move `category` to its next option, wrapping back to the first
    ///
    /// A stored key that no longer exists starts over at the first option.
    pub fn cycle(&mut self, category: Category) -> &'static str {
        let keys = category.filter_keys();
        let next = match self.current_index(category) {
            Ok(index) => (index + 1) % keys.len(),
            Err(_) => 0,
        };
        self.selected.insert(category, keys[next].to_string());
        keys[next]
    }

    pub fn reset(&mut self) {
        self.selected.clear();
    }
}
