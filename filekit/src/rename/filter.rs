//! Source extension filtering and extension normalization.

use std::collections::BTreeSet;

use super::walker::FileEntry;

/// Normalize an extension to lowercase with a leading dot (`TXT` -> `.txt`).
pub fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim().trim_start_matches('.');
    format!(".{}", trimmed.to_lowercase())
}

/// Normalize a target extension to dot-prefixed form, keeping its case.
///
/// Returns `None` for an empty or dot-only value.
pub fn normalize_target_extension(ext: &str) -> Option<String> {
    let trimmed = ext.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!(".{trimmed}"))
    }
}

/// Set of accepted source extensions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
}

impl ExtensionFilter {
    /// Parse a comma-separated list such as `"txt, .MD"`.
    ///
    /// Blank items are ignored.
    pub fn parse(list: &str) -> Self {
        let extensions = list
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty() && *item != ".")
            .map(normalize_extension)
            .collect();

        Self { extensions }
    }

    /// Whether the filter names any extension at all.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Accepted extensions in normalized form.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    /// Whether the entry's extension is accepted, ignoring case.
    pub fn matches(&self, entry: &FileEntry) -> bool {
        entry
            .extension
            .to_str()
            .is_some_and(|ext| !ext.is_empty() && self.extensions.contains(&ext.to_lowercase()))
    }

    /// Keep only accepted entries, preserving order.
    pub fn apply(&self, entries: Vec<FileEntry>) -> Vec<FileEntry> {
        entries.into_iter().filter(|e| self.matches(e)).collect()
    }
}
