//! Arguments for `rename-files`.

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use filekit::config::{NamingMode, RenameConfig};
use filekit::error::{FileKitError, Result};

/// Batch-rename the files of a directory.
///
/// Names are computed by one policy (sequential, slugify, lowercase or
/// replace). A destination that already exists gets a `_1`, `_2`, ...
/// suffix instead of being overwritten.
#[derive(Parser, Debug)]
#[command(name = "rename-files")]
#[command(version)]
#[command(about = "Batch-rename the files of a directory", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct RenameCli {
    /// Directory whose files are renamed
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Naming policy
    ///
    /// - sequential: <prefix><index> zero-padded to at least 3 digits
    /// - slugify: spaces to underscores, other symbols removed (default)
    /// - lowercase: lowercase the file name
    /// - replace: replace --replace-from with --replace-to
    #[arg(long, value_name = "MODE", default_value = "slugify")]
    #[arg(value_parser = ["sequential", "slugify", "lowercase", "replace"])]
    pub mode: String,

    /// Prefix for sequential names
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub prefix: String,

    /// Substring to replace (replace mode)
    #[arg(long, value_name = "TEXT")]
    pub replace_from: Option<String>,

    /// Replacement string (replace mode, empty when omitted)
    #[arg(long, value_name = "TEXT")]
    pub replace_to: Option<String>,

    /// First index for sequential names
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub start: u64,

    /// Descend into sub-directories
    #[arg(short, long)]
    pub recursive: bool,

    /// Print the renames without performing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Give every renamed file this extension
    #[arg(short = 'e', long, value_name = "EXT")]
    pub change_ext: Option<String>,

    /// Keep file names and only change the extension (needs --change-ext)
    #[arg(long, requires = "change_ext")]
    pub only_ext: bool,

    /// Only touch files with these extensions (comma-separated)
    ///
    /// Example:
    ///   rename-files docs --src-ext "txt, md" --mode lowercase
    #[arg(short = 's', long, value_name = "EXTS")]
    pub src_ext: Option<String>,

    /// Print the rename report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Verbose output - also list unchanged files
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl RenameCli {
    /// Validate arguments that need no file I/O.
    ///
    /// # Errors
    ///
    /// Returns an error if the mode is unknown, `--only-ext` lacks an
    /// extension, or replace mode lacks `--replace-from`.
    pub fn validate(&self) -> Result<()> {
        let mode = NamingMode::from_str(&self.mode)?;

        if self.only_ext && self.change_ext.as_deref().is_none_or(|e| e.trim().is_empty()) {
            return Err(FileKitError::invalid_config(
                "--only-ext requires --change-ext to be provided",
            ));
        }

        if mode == NamingMode::Replace && !self.only_ext && self.replace_from.is_none() {
            return Err(FileKitError::invalid_config(
                "replace mode requires --replace-from",
            ));
        }

        Ok(())
    }

    /// Convert the arguments into a validated [`RenameConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn to_config(&self) -> Result<RenameConfig> {
        let config = RenameConfig {
            root: self.folder.clone(),
            recursive: self.recursive,
            mode: NamingMode::from_str(&self.mode)?,
            prefix: self.prefix.clone(),
            replace_from: self.replace_from.clone(),
            replace_to: self.replace_to.clone(),
            start: self.start,
            change_ext: self.change_ext.clone(),
            only_ext: self.only_ext,
            src_ext: self.src_ext.clone(),
            dry_run: self.dry_run,
            verbose: self.verbose,
            quiet: self.quiet,
        };

        config.validate()?;
        Ok(config)
    }
}
