//! Applying a rename plan to the filesystem.

use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::collision::unique_path_with;
use super::planner::RenamePlan;
use crate::error::{FileKitError, Result};

/// Outcome of one mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenameStatus {
    /// The file was moved.
    Renamed,
    /// Dry run: the file would have been moved.
    Planned,
    /// Source and destination are the same file, or the file could not
    /// be named.
    Skipped,
    /// The move failed.
    Failed,
}

/// Report line for one mapping.
#[derive(Debug, Clone, Serialize)]
pub struct RenameRecord {
    /// Original path.
    #[serde(serialize_with = "serialize_lossy")]
    pub source: PathBuf,

    /// Destination after collision resolution.
    #[serde(serialize_with = "serialize_lossy")]
    pub destination: PathBuf,

    /// What happened.
    pub status: RenameStatus,

    /// Reason for failed entries and for files that could not be named.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of a rename run, one record per mapping in plan order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameReport {
    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Per-entry records.
    pub records: Vec<RenameRecord>,
}

impl RenameReport {
    /// Number of records with the given status.
    pub fn count(&self, status: RenameStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }

    /// Records that were renamed or would be renamed.
    pub fn changes(&self) -> impl Iterator<Item = &RenameRecord> {
        self.records
            .iter()
            .filter(|r| matches!(r.status, RenameStatus::Renamed | RenameStatus::Planned))
    }

    /// Turn failed entries into an error for the exit code.
    ///
    /// # Errors
    ///
    /// Returns [`FileKitError::PartialFailure`] if any entry failed.
    pub fn check(&self) -> Result<()> {
        let failed = self.count(RenameStatus::Failed);
        if failed > 0 {
            return Err(FileKitError::PartialFailure {
                failed,
                total: self.records.len(),
            });
        }
        Ok(())
    }
}

/// Moves files according to a [`RenamePlan`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RenameApplier {
    dry_run: bool,
}

impl RenameApplier {
    /// Create an applier; in dry-run mode nothing is moved.
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Apply every mapping in order.
    ///
    /// A failed move is recorded and logged; later mappings still run and
    /// earlier moves are not rolled back. A dry run keeps track of the
    /// destinations it has handed out and the sources it has moved away,
    /// so its report matches what a real run would do.
    pub fn apply(&self, plan: &RenamePlan) -> RenameReport {
        let mut claims = Claims::default();
        let records = plan
            .mappings
            .iter()
            .map(|mapping| match &mapping.proposed {
                Some(proposed) => self.apply_one(&mapping.source, proposed, &mut claims),
                None => unnameable(&mapping.source),
            })
            .collect();

        RenameReport {
            dry_run: self.dry_run,
            records,
        }
    }

    fn apply_one(&self, source: &Path, proposed: &Path, claims: &mut Claims) -> RenameRecord {
        let skipped = |destination: &Path| RenameRecord {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            status: RenameStatus::Skipped,
            error: None,
        };

        if is_same_file(source, proposed) {
            return skipped(proposed);
        }

        let destination = unique_path_with(proposed, |candidate| claims.is_taken(candidate));
        if is_same_file(source, &destination) {
            return skipped(&destination);
        }

        if self.dry_run {
            claims.record(source, &destination);
            return RenameRecord {
                source: source.to_path_buf(),
                destination,
                status: RenameStatus::Planned,
                error: None,
            };
        }

        match move_file(source, &destination) {
            Ok(()) => {
                tracing::debug!(from = %source.display(), to = %destination.display(), "renamed");
                claims.record(source, &destination);
                RenameRecord {
                    source: source.to_path_buf(),
                    destination,
                    status: RenameStatus::Renamed,
                    error: None,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "rename failed");
                RenameRecord {
                    source: source.to_path_buf(),
                    destination,
                    status: RenameStatus::Failed,
                    error: Some(err.to_string()),
                }
            }
        }
    }
}

/// Paths handed out or given up earlier in the run.
#[derive(Debug, Default)]
struct Claims {
    claimed: HashSet<PathBuf>,
    vacated: HashSet<PathBuf>,
}

impl Claims {
    fn is_taken(&self, candidate: &Path) -> bool {
        if self.claimed.contains(candidate) {
            return true;
        }
        candidate.exists() && !self.vacated.contains(candidate)
    }

    fn record(&mut self, source: &Path, destination: &Path) {
        self.claimed.remove(source);
        self.vacated.insert(source.to_path_buf());
        self.vacated.remove(destination);
        self.claimed.insert(destination.to_path_buf());
    }
}

fn unnameable(source: &Path) -> RenameRecord {
    tracing::warn!(path = %source.display(), "file name is not valid UTF-8, skipping");
    RenameRecord {
        source: source.to_path_buf(),
        destination: source.to_path_buf(),
        status: RenameStatus::Skipped,
        error: Some("file name is not valid UTF-8".to_string()),
    }
}

fn serialize_lossy<S: Serializer>(
    path: &Path,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

fn move_file(source: &Path, destination: &Path) -> Result<()> {
    let to_error = |e| FileKitError::FailedToRename {
        from: source.to_path_buf(),
        to: destination.to_path_buf(),
        source: e,
    };

    if let Some(parent) = destination.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }

    std::fs::rename(source, destination).map_err(to_error)
}

/// Whether two paths name the same file, resolving links and `..`.
fn is_same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }

    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
