//! Directory scanning for the batch renamer.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::Result;
use crate::validation::InputValidator;

/// A file found during the scan, with its name split into stem and extension.
///
/// Both parts are kept as raw OS strings so names that are not valid UTF-8
/// survive a rename byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path as produced by the walk.
    pub path: PathBuf,

    /// File name without the extension.
    pub stem: OsString,

    /// Extension including its leading dot, or empty.
    pub extension: OsString,
}

impl FileEntry {
    /// Split a path's file name into stem and extension.
    ///
    /// `archive.tar.gz` splits into `archive.tar` and `.gz`. Dotfiles and
    /// names ending in a bare dot keep their whole name as stem.
    pub fn from_path(path: PathBuf) -> Self {
        let (stem, extension) = split_file_name(&path);
        Self {
            path,
            stem,
            extension,
        }
    }

    /// Directory containing the file.
    pub fn parent(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// The stem as text, if it is valid UTF-8.
    pub fn stem_str(&self) -> Option<&str> {
        self.stem.to_str()
    }
}

/// Split the file name of `path` into stem and dotted extension.
pub(crate) fn split_file_name(path: &Path) -> (OsString, OsString) {
    let name = path.file_name().unwrap_or_default();

    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) if !ext.is_empty() => {
            let mut extension = OsString::from(".");
            extension.push(ext);
            (stem.to_os_string(), extension)
        }
        _ => (name.to_os_string(), OsString::new()),
    }
}

/// Join a stem and an extension back into a file name.
pub(crate) fn join_file_name(stem: &OsStr, extension: &OsStr) -> OsString {
    let mut name = stem.to_os_string();
    name.push(extension);
    name
}

/// Collect the regular files under `root`, sorted by path.
///
/// Without `recursive` only the direct children of `root` are listed.
/// Symlinks are followed when deciding whether an entry is a file, so a
/// link to a file is listed and a link to a directory is not.
///
/// # Errors
///
/// Fails if `root` does not exist or is not a directory. Entries that cannot
/// be read during the walk are logged and skipped.
pub fn walk_files(root: &Path, recursive: bool) -> Result<Vec<FileEntry>> {
    InputValidator::directory(root)?;

    let mut walker = WalkDir::new(root).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut paths: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.into_path())
        .collect();

    paths.sort();
    tracing::debug!(root = %root.display(), count = paths.len(), "scanned files");

    Ok(paths.into_iter().map(FileEntry::from_path).collect())
}
