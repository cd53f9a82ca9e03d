//! filekit - everyday file utilities.
//!
//! This library backs four small command-line tools:
//!
//! - Assembling images into a multi-page PDF ([`images`])
//! - Rasterizing PDF pages to PNG or JPEG ([`render`])
//! - Splitting a PDF into parts or extracting a page range ([`split`])
//! - Batch renaming files under a naming policy ([`rename`])
//!
//! Each tool validates a config record from [`config`], processes its items
//! one after another and reports failures through [`FileKitError`].
//!
//! # Examples
//!
//! ## Split a PDF
//!
//! ```no_run
//! use filekit::config::SplitConfig;
//! use filekit::split::PdfSplitter;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SplitConfig {
//!     input: PathBuf::from("book.pdf"),
//!     output_dir: PathBuf::from("parts"),
//!     pages_per_file: 2,
//!     dry_run: false,
//!     verbose: false,
//!     quiet: false,
//! };
//!
//! let report = PdfSplitter::new().split(&config).await?;
//! println!("Wrote {} part(s)", report.parts.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Using Individual Components
//!
//! ```no_run
//! use filekit::io::{PdfReader, PdfWriter};
//! use filekit::split::PageExtractor;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = PdfReader::new().load(Path::new("input.pdf")).await?;
//! let first_page = PageExtractor::new().extract_pages(&loaded.document, &[1])?;
//! PdfWriter::new().save(first_page, Path::new("cover.pdf")).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod images;
pub mod io;
pub mod output;
pub mod rename;
pub mod render;
pub mod split;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use error::{FileKitError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
