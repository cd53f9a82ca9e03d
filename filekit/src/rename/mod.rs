//! Batch renaming of files under a naming policy.
//!
//! A run has two phases. The directory is scanned and a complete
//! [`RenamePlan`] is computed in memory; the plan is then applied in one
//! pass, resolving collisions against the filesystem as it changes and
//! against destinations handed out earlier in the run.
//!
//! # Examples
//!
//! ```no_run
//! use filekit::config::{NamingMode, RenameConfig};
//! use filekit::rename::{rename_files, RenameOutcome};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RenameConfig {
//!     root: "photos".into(),
//!     mode: NamingMode::Lowercase,
//!     dry_run: true,
//!     ..Default::default()
//! };
//!
//! if let RenameOutcome::Completed(report) = rename_files(&config)? {
//!     for record in report.changes() {
//!         println!("{} -> {}", record.source.display(), record.destination.display());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod applier;
pub mod collision;
pub mod filter;
pub mod planner;
pub mod policy;
pub mod walker;

pub use applier::{RenameApplier, RenameRecord, RenameReport, RenameStatus};
pub use collision::{unique_path, unique_path_with};
pub use filter::{ExtensionFilter, normalize_extension, normalize_target_extension};
pub use planner::{RenameMapping, RenamePlan};
pub use policy::{NamingPolicy, slugify};
pub use walker::{FileEntry, walk_files};

use crate::config::RenameConfig;
use crate::error::Result;

/// How a rename run ended.
#[derive(Debug, Clone)]
pub enum RenameOutcome {
    /// The directory holds no files.
    NoFiles,
    /// Files exist but none matched the source extension filter.
    NoMatches,
    /// The plan was applied (or printed, in dry-run mode).
    Completed(RenameReport),
}

/// Scan, plan and apply a rename run.
///
/// Per-entry failures are recorded in the report; call
/// [`RenameReport::check`] to turn them into an error.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the root directory
/// is missing or not a directory. Nothing is renamed in that case.
pub fn rename_files(config: &RenameConfig) -> Result<RenameOutcome> {
    config.validate()?;

    let mut entries = walk_files(&config.root, config.recursive)?;
    if entries.is_empty() {
        return Ok(RenameOutcome::NoFiles);
    }

    let filter = config.src_ext.as_deref().map(ExtensionFilter::parse);
    if let Some(filter) = filter.filter(|f| !f.is_empty()) {
        entries = filter.apply(entries);
        if entries.is_empty() {
            return Ok(RenameOutcome::NoMatches);
        }
    }

    let policy = NamingPolicy::from_config(config, entries.len())?;
    let change_ext = config
        .change_ext
        .as_deref()
        .and_then(normalize_target_extension);

    let plan = RenamePlan::build(&entries, &policy, change_ext.as_deref());
    tracing::info!(files = plan.len(), ?policy, "applying rename plan");

    Ok(RenameOutcome::Completed(
        RenameApplier::new(config.dry_run).apply(&plan),
    ))
}
