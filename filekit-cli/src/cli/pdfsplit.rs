//! Arguments for `pdfsplit`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use filekit::config::{ExtractConfig, ExtractRange, SplitConfig};
use filekit::error::Result;

/// Split a PDF into parts or extract a page range.
#[derive(Parser, Debug)]
#[command(name = "pdfsplit")]
#[command(version)]
#[command(about = "Split a PDF into parts or extract a page range", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct PdfSplitCli {
    /// Operation to run
    #[command(subcommand)]
    pub command: PdfSplitCommand,

    /// Verbose output - show document details and every written part
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// `pdfsplit` operations.
#[derive(Subcommand, Debug)]
pub enum PdfSplitCommand {
    /// Split a PDF into parts of N pages each
    Split(SplitArgs),
    /// Extract an inclusive page range into a new PDF
    Extract(ExtractArgs),
}

/// Arguments of `pdfsplit split`.
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// PDF file to split
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory receiving `<name>_partNNN.pdf` files
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Number of pages in each part
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub pages_per_file: usize,

    /// Print the parts that would be written without writing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Arguments of `pdfsplit extract`.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// PDF file to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output PDF file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// First page to keep (1-based)
    #[arg(value_name = "START")]
    pub start: u32,

    /// Last page to keep (clamped to the page count)
    #[arg(value_name = "END")]
    pub end: u32,

    /// Print the resolved range without writing
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

impl SplitArgs {
    /// Convert into a validated [`SplitConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn to_config(&self, verbose: bool, quiet: bool) -> Result<SplitConfig> {
        let config = SplitConfig {
            input: self.input.clone(),
            output_dir: self.output_dir.clone(),
            pages_per_file: self.pages_per_file,
            dry_run: self.dry_run,
            verbose,
            quiet,
        };

        config.validate()?;
        Ok(config)
    }
}

impl ExtractArgs {
    /// Convert into a validated [`ExtractConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the output is not a PDF or the range is invalid.
    pub fn to_config(&self, verbose: bool, quiet: bool) -> Result<ExtractConfig> {
        let config = ExtractConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            range: ExtractRange::new(self.start, self.end),
            dry_run: self.dry_run,
            verbose,
            quiet,
        };

        config.validate()?;
        Ok(config)
    }
}
