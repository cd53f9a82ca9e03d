//! Output formatting and display for filekit.
//!
//! This module handles all user-facing output including:
//! - Formatted status messages
//! - Error and warning display
//! - Summary reports for each tool
//! - Quiet and verbose modes
//!
//! # Examples
//!
//! ```no_run
//! use filekit::output::OutputFormatter;
//!
//! let formatter = OutputFormatter::new(false, true);
//! formatter.info("Splitting book.pdf");
//! formatter.success("Created 3 part(s)");
//! ```

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use crate::io::WriteStatistics;
use crate::rename::{RenameReport, RenameStatus};
use crate::split::{PartStatus, SplitReport};
use crate::validation::DocumentInfo;

/// Display facts about an input document (verbose only).
pub fn display_document_info(formatter: &OutputFormatter, info: &DocumentInfo) {
    formatter.detail("Input", &info.path.display().to_string());
    formatter.detail("Pages", &info.page_count.to_string());
    formatter.detail("PDF version", &info.version_string());
    formatter.detail("Size", &crate::utils::format_file_size(info.file_size));
    if let Some((width, height)) = info.page_dimensions {
        formatter.detail("First page", &format!("{width:.0} x {height:.0} pt"));
    }
}

/// Display write statistics (verbose only).
pub fn display_write_statistics(formatter: &OutputFormatter, stats: &WriteStatistics) {
    formatter.detail("Output", &stats.output_path.display().to_string());
    formatter.detail("Output size", &stats.format_file_size());
    formatter.detail(
        "Write time",
        &format!("{:.2}s", stats.write_time.as_secs_f64()),
    );
}

/// Display the outcome of every part of a split.
pub fn display_split_report(formatter: &OutputFormatter, report: &SplitReport) {
    for part in &report.parts {
        let name = part
            .plan
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let pages = format!("pages {}-{}", part.plan.first_page, part.plan.last_page);

        match &part.status {
            PartStatus::Written { .. } => {
                formatter.debug(&format!("Created '{name}' with {pages}"));
            }
            PartStatus::Planned => {
                formatter.list_item(part.plan.index, &format!("{name} ({pages})"));
            }
            PartStatus::Failed { reason } => {
                formatter.warning(&format!("Could not save part '{name}': {reason}"));
            }
        }
    }
}

/// Display one line per rename and a warning per failure.
///
/// Unchanged entries are only mentioned in verbose mode. Entries skipped
/// because they could not be named get a warning.
pub fn display_rename_report(formatter: &OutputFormatter, report: &RenameReport) {
    for record in &report.records {
        let line = format!(
            "{} -> {}",
            record.source.display(),
            record.destination.display()
        );

        match record.status {
            RenameStatus::Renamed | RenameStatus::Planned => formatter.info(&line),
            RenameStatus::Skipped => match &record.error {
                Some(reason) => formatter.warning(&format!(
                    "Skipped '{}': {reason}",
                    record.source.display()
                )),
                None => formatter.debug(&format!("Unchanged: {}", record.source.display())),
            },
            RenameStatus::Failed => {
                formatter.info(&line);
                formatter.warning(&format!(
                    "Could not rename '{}': {}",
                    record.source.display(),
                    record.error.as_deref().unwrap_or("unknown error")
                ));
            }
        }
    }
}
