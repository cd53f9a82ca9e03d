//! PDF writing and saving operations.
//!
//! This module provides safe PDF writing with:
//! - Atomic writes (write to temp file, then rename)
//! - Compression support
//! - Overwrite protection
//! - Write statistics
//!
//! # Examples
//!
//! ```no_run
//! use filekit::io::writer::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # async fn example(doc: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = PdfWriter::new();
//! let stats = writer.save(doc, Path::new("output.pdf")).await?;
//! println!("wrote {}", stats.format_file_size());
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::config::OverwriteMode;
use crate::error::{FileKitError, Result};
use crate::utils::format_file_size;

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Compress streams before writing.
    pub compress: bool,

    /// Renumber objects before writing.
    pub optimize: bool,

    /// Behavior when the target already exists.
    pub overwrite_mode: OverwriteMode,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compress: true,
            optimize: true,
            overwrite_mode: OverwriteMode::Overwrite,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,

    /// Whether compression was applied.
    pub compressed: bool,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Create a writer that follows the given overwrite mode.
    pub fn with_overwrite_mode(overwrite_mode: OverwriteMode) -> Self {
        Self {
            options: WriteOptions {
                overwrite_mode,
                ..Default::default()
            },
        }
    }

    /// Save a PDF document to a file.
    ///
    /// Missing parent directories are created. The document is consumed
    /// because compression and renumbering rewrite it in place.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists and the overwrite mode forbids replacing it
    /// - The output directory cannot be created
    /// - Serialization or the final rename fails
    pub async fn save(&self, doc: Document, path: &Path) -> Result<WriteStatistics> {
        let path_buf = path.to_path_buf();
        let options = self.options.clone();

        task::spawn_blocking(move || write_document(doc, path_buf, &options))
            .await
            .map_err(|e| FileKitError::other(format!("Write task failed: {e}")))?
    }
}

fn write_document(
    mut doc: Document,
    path: PathBuf,
    options: &WriteOptions,
) -> Result<WriteStatistics> {
    let start = Instant::now();

    if options.overwrite_mode == OverwriteMode::NoClobber && path.exists() {
        return Err(FileKitError::output_exists(path));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| FileKitError::FailedToCreateOutput {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    if options.compress {
        doc.compress();
    }

    if options.optimize {
        doc.renumber_objects();
    }

    let write_path = if options.atomic {
        path.with_extension("tmp")
    } else {
        path.clone()
    };

    let written = save_into(&mut doc, &write_path, options.buffer_size).and_then(|()| {
        if options.atomic {
            std::fs::rename(&write_path, &path).map_err(|e| FileKitError::FailedToWrite {
                path: path.clone(),
                source: e,
            })?;
        }
        Ok(())
    });

    if let Err(err) = written {
        if options.atomic {
            let _ = std::fs::remove_file(&write_path);
        }
        return Err(err);
    }

    let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

    Ok(WriteStatistics {
        write_time: start.elapsed(),
        file_size,
        output_path: path,
        compressed: options.compress,
    })
}

fn save_into(doc: &mut Document, write_path: &Path, buffer_size: usize) -> Result<()> {
    let file =
        std::fs::File::create(write_path).map_err(|e| FileKitError::FailedToCreateOutput {
            path: write_path.to_path_buf(),
            source: e,
        })?;

    let mut writer = std::io::BufWriter::with_capacity(buffer_size, file);

    doc.save_to(&mut writer)
        .map_err(|e| FileKitError::FailedToWrite {
            path: write_path.to_path_buf(),
            source: std::io::Error::other(e),
        })?;

    writer.flush().map_err(|e| FileKitError::FailedToWrite {
        path: write_path.to_path_buf(),
        source: e,
    })
}
