//! PDF loading.
//!
//! `lopdf` parses synchronously, so documents are loaded on the blocking
//! thread pool and handed back to the async caller together with a few
//! statistics that the tools report in verbose mode.
//!
//! # Examples
//!
//! ```no_run
//! use filekit::io::reader::PdfReader;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("report.pdf")).await?;
//! println!("{} pages", loaded.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::error::{FileKitError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to load the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

impl LoadedPdf {
    fn new(document: Document, path: PathBuf, load_time: Duration) -> Self {
        let page_count = document.get_pages().len();
        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Self {
            document,
            path,
            page_count,
            load_time,
            file_size,
        }
    }
}

/// PDF reader that loads documents off the async runtime.
///
/// Documents without pages are rejected.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File cannot be read
    /// - File is not a valid PDF
    /// - The PDF has no pages
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();

        task::spawn_blocking(move || {
            let start = Instant::now();

            let doc = Document::load(&path_buf)
                .map_err(|e| FileKitError::failed_to_load_pdf(path_buf.clone(), e.to_string()))?;

            if doc.get_pages().is_empty() {
                return Err(FileKitError::corrupted_pdf(path_buf, "PDF has no pages"));
            }

            let load_time = start.elapsed();
            tracing::debug!(path = %path_buf.display(), ?load_time, "loaded pdf");

            Ok(LoadedPdf::new(doc, path_buf, load_time))
        })
        .await
        .map_err(|e| FileKitError::other(format!("Load task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::sample_document;
    use tempfile::TempDir;

    fn write_sample(dir: &TempDir, name: &str, pages: usize) -> PathBuf {
        let path = dir.path().join(name);
        let mut doc = sample_document(pages);
        doc.save(&path).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_single_pdf() {
        let temp_dir = TempDir::new().unwrap();
        let pdf_path = write_sample(&temp_dir, "test.pdf", 3);

        let loaded = PdfReader::new().load(&pdf_path).await.unwrap();

        assert_eq!(loaded.page_count, 3);
        assert_eq!(loaded.path, pdf_path);
        assert!(loaded.file_size > 0);
    }

    #[tokio::test]
    async fn test_load_nonexistent_pdf() {
        let result = PdfReader::new().load(Path::new("/nonexistent.pdf")).await;

        assert!(matches!(result, Err(FileKitError::FailedToLoadPdf { .. })));
    }

    #[tokio::test]
    async fn test_load_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("garbage.pdf");
        std::fs::write(&path, b"definitely not a pdf").unwrap();

        let result = PdfReader::new().load(&path).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_reader_rejects_empty_document() {
        let temp_dir = TempDir::new().unwrap();
        let pdf_path = write_sample(&temp_dir, "empty.pdf", 0);

        let err = PdfReader::new().load(&pdf_path).await.unwrap_err();
        assert!(matches!(err, FileKitError::CorruptedPdf { .. }));
    }
}
