//! PDF splitting and page-range extraction.
//!
//! # Examples
//!
//! ```no_run
//! use filekit::config::SplitConfig;
//! use filekit::split::PdfSplitter;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SplitConfig {
//!     input: "book.pdf".into(),
//!     output_dir: "chapters".into(),
//!     pages_per_file: 10,
//!     dry_run: false,
//!     verbose: false,
//!     quiet: false,
//! };
//!
//! let report = PdfSplitter::new().split(&config).await?;
//! println!("{} parts", report.parts.len());
//! # Ok(())
//! # }
//! ```

pub mod pages;
pub mod splitter;

pub use pages::PageExtractor;
pub use splitter::{
    ExtractReport, PartOutcome, PartPlan, PartStatus, PdfSplitter, SplitReport, part_file_name,
    plan_parts,
};
