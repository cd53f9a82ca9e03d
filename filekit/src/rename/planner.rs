//! Building the in-memory rename mapping.

use serde::Serialize;
use std::path::PathBuf;

use super::policy::NamingPolicy;
use super::walker::FileEntry;

/// One proposed rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameMapping {
    /// Existing file.
    pub source: PathBuf,

    /// Proposed destination before collision resolution, or `None` when
    /// the policy cannot name this file.
    pub proposed: Option<PathBuf>,
}

/// Ordered source to destination mapping, computed before any file moves.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenamePlan {
    /// Mappings in scan order.
    pub mappings: Vec<RenameMapping>,
}

impl RenamePlan {
    /// Apply `policy` to every entry. Destinations stay in the source's directory.
    pub fn build(entries: &[FileEntry], policy: &NamingPolicy, change_ext: Option<&str>) -> Self {
        let mappings = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| RenameMapping {
                source: entry.path.clone(),
                proposed: policy
                    .new_file_name(position, entry, change_ext)
                    .map(|name| entry.parent().join(name)),
            })
            .collect();

        Self { mappings }
    }

    /// Number of mappings.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Whether the plan is empty.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
