use std::path::Path;

use crate::error::{Result, SelectError};

/// Ordered, non-empty list of selectable strings extracted from one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    items: Vec<String>,
}

impl CandidateSet {
    /// Collect candidates, dropping blank ones. An empty result is reported
    /// as an empty file for `path`.
    pub fn collect<I>(path: &Path, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let items: Vec<String> = items
            .into_iter()
            .filter(|item| !item.trim().is_empty())
            .collect();

        if items.is_empty() {
            return Err(SelectError::empty(path));
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.iter().any(|candidate| candidate == item)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}
