//! Naming policies: how a new file name is computed from an old one.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ffi::{OsStr, OsString};

use super::filter::normalize_target_extension;
use super::walker::{FileEntry, join_file_name};
use crate::config::{NamingMode, RenameConfig};
use crate::error::{FileKitError, Result};

static RE_UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w.-]").unwrap());
static RE_UNDERSCORE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"_{2,}").unwrap());

/// Minimum width of sequential indices.
const MIN_SEQUENCE_WIDTH: usize = 3;

/// Restrict a stem to word characters, hyphens and dots.
///
/// Every other character becomes `_`, runs of `_` collapse to one and
/// leading or trailing `_` are trimmed. Applying it twice changes nothing.
///
/// ```
/// use filekit::rename::policy::slugify;
///
/// assert_eq!(slugify("My  Holiday (1)"), "My_Holiday_1");
/// ```
pub fn slugify(stem: &str) -> String {
    let replaced = RE_UNSAFE_CHARS.replace_all(stem, "_");
    let collapsed = RE_UNDERSCORE_RUNS.replace_all(&replaced, "_");
    collapsed.trim_matches('_').to_string()
}

/// Width needed to zero-pad every index in `start..start + total`.
pub fn sequence_width(start: u64, total: usize) -> usize {
    let highest = start.saturating_add((total as u64).saturating_sub(1));
    highest.to_string().len().max(MIN_SEQUENCE_WIDTH)
}

/// The naming policy applied uniformly to every file of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingPolicy {
    /// `{prefix}{index:0width$}` with the original extension.
    Sequential {
        /// Fixed prefix.
        prefix: String,
        /// Index of the first file.
        start: u64,
        /// Zero-padding width.
        width: usize,
    },
    /// See [`slugify`].
    Slugify,
    /// Case-fold the stem.
    Lowercase,
    /// Replace every occurrence of `from` with `to` in the stem.
    Replace {
        /// Literal search string.
        from: String,
        /// Replacement.
        to: String,
    },
    /// Keep the stem, swap the extension.
    ExtensionOnly {
        /// Dot-prefixed target extension.
        extension: String,
    },
}

impl NamingPolicy {
    /// Select the policy for a run over `total` files.
    ///
    /// `only_ext` takes precedence over the naming mode.
    ///
    /// # Errors
    ///
    /// Returns an error if extension-only mode has no target extension,
    /// replace mode has no search string, or sequential indices starting at
    /// `start` would not fit in a `u64` for `total` files.
    pub fn from_config(config: &RenameConfig, total: usize) -> Result<Self> {
        if config.only_ext {
            let extension = config
                .change_ext
                .as_deref()
                .and_then(normalize_target_extension)
                .ok_or_else(|| {
                    FileKitError::invalid_config("--only-ext requires --change-ext to be provided")
                })?;
            return Ok(Self::ExtensionOnly { extension });
        }

        let policy = match config.mode {
            NamingMode::Sequential => {
                let last = (total as u64).saturating_sub(1);
                if config.start.checked_add(last).is_none() {
                    return Err(FileKitError::invalid_config(format!(
                        "--start {} is too large for {total} files",
                        config.start
                    )));
                }
                Self::Sequential {
                    prefix: config.prefix.clone(),
                    start: config.start,
                    width: sequence_width(config.start, total),
                }
            }
            NamingMode::Slugify => Self::Slugify,
            NamingMode::Lowercase => Self::Lowercase,
            NamingMode::Replace => {
                let from = config.replace_from.clone().ok_or_else(|| {
                    FileKitError::invalid_config("replace mode requires --replace-from")
                })?;
                Self::Replace {
                    from,
                    to: config.replace_to.clone().unwrap_or_default(),
                }
            }
        };

        Ok(policy)
    }

    /// Compute the new stem for the entry at `position` (0-based) in the run.
    ///
    /// Returns `None` when the policy edits the stem and the stem is not
    /// valid UTF-8.
    pub fn new_stem(&self, position: usize, entry: &FileEntry) -> Option<OsString> {
        let stem = match self {
            Self::Sequential {
                prefix,
                start,
                width,
            } => {
                let index = start.saturating_add(position as u64);
                format!("{prefix}{index:0width$}")
            }
            Self::Slugify => slugify(entry.stem_str()?),
            Self::Lowercase => entry.stem_str()?.to_lowercase(),
            Self::Replace { from, to } => entry.stem_str()?.replace(from.as_str(), to),
            Self::ExtensionOnly { .. } => return Some(entry.stem.clone()),
        };
        Some(stem.into())
    }

    /// Compute the full new file name.
    ///
    /// `change_ext` (dot-prefixed) overrides the original extension in every
    /// mode except extension-only, which carries its own. Returns `None`
    /// under the same condition as [`NamingPolicy::new_stem`].
    pub fn new_file_name(
        &self,
        position: usize,
        entry: &FileEntry,
        change_ext: Option<&str>,
    ) -> Option<OsString> {
        let stem = self.new_stem(position, entry)?;
        let extension = match self {
            Self::ExtensionOnly { extension } => OsStr::new(extension),
            _ => change_ext.map_or(entry.extension.as_os_str(), OsStr::new),
        };
        Some(join_file_name(&stem, extension))
    }
}
