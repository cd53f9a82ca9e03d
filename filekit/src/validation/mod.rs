//! Input validation for filekit.
//!
//! Checks run before any document is opened so that a wrong path or a wrong
//! kind of file is reported with its dedicated exit code:
//! - Existence of the input
//! - File versus directory
//! - Expected extension
//!
//! # Examples
//!
//! ```no_run
//! use filekit::validation::InputValidator;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! InputValidator::pdf_file(Path::new("report.pdf"))?;
//! # Ok(())
//! # }
//! ```

use lopdf::{Document, Object};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::has_extension;
use crate::error::{FileKitError, Result};
use crate::io::LoadedPdf;

/// Stateless checks on input and output paths.
pub struct InputValidator;

impl InputValidator {
    /// Validate that `path` is an existing file named `*.pdf`.
    ///
    /// # Errors
    ///
    /// - [`FileKitError::FileNotFound`] if nothing exists at `path`
    /// - [`FileKitError::NotAFile`] if `path` is a directory
    /// - [`FileKitError::NotAPdf`] if the extension is not `.pdf`
    pub fn pdf_file(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(FileKitError::file_not_found(path));
        }

        if !path.is_file() {
            return Err(FileKitError::not_a_file(path));
        }

        if !has_extension(path, "pdf") {
            return Err(FileKitError::not_a_pdf(path));
        }

        Ok(())
    }

    /// Validate that `path` is an existing directory.
    ///
    /// # Errors
    ///
    /// Returns [`FileKitError::FileNotFound`] or [`FileKitError::NotADirectory`].
    pub fn directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(FileKitError::file_not_found(path));
        }

        if !path.is_dir() {
            return Err(FileKitError::not_a_directory(path));
        }

        Ok(())
    }
}

/// Facts about a loaded document, shown in verbose mode.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    /// Path to the document.
    pub path: PathBuf,

    /// Number of pages.
    pub page_count: usize,

    /// PDF version (major, minor).
    pub version: Option<(u8, u8)>,

    /// Size of the file in bytes.
    pub file_size: u64,

    /// First page dimensions (width, height) in points, if available.
    pub page_dimensions: Option<(f32, f32)>,
}

impl DocumentInfo {
    /// Collect facts from a loaded PDF.
    pub fn from_loaded(loaded: &LoadedPdf) -> Self {
        let doc = &loaded.document;

        let version = doc.version.split_once('.').map(|(major, minor)| {
            (
                major.parse::<u8>().unwrap_or_default(),
                minor.parse::<u8>().unwrap_or_default(),
            )
        });

        Self {
            path: loaded.path.clone(),
            page_count: loaded.page_count,
            version,
            file_size: loaded.file_size,
            page_dimensions: first_page_dimensions(doc),
        }
    }

    /// Version formatted as `major.minor`.
    pub fn version_string(&self) -> String {
        self.version
            .map(|(major, minor)| format!("{major}.{minor}"))
            .unwrap_or_else(|| "unknown".to_string())
    }
}

fn first_page_dimensions(doc: &Document) -> Option<(f32, f32)> {
    let page_id = *doc.get_pages().values().next()?;
    let page = doc.get_dictionary(page_id).ok()?;

    match page.get(b"MediaBox").ok()? {
        Object::Array(arr) if arr.len() >= 4 => {
            let width = arr[2].as_float().ok()?;
            let height = arr[3].as_float().ok()?;
            Some((width, height))
        }
        _ => None,
    }
}
