//! Arguments for `img2pdf`.

use clap::Parser;
use std::path::PathBuf;

use filekit::config::{DEFAULT_ASSEMBLY_DPI, ImagesToPdfConfig, OverwriteMode};
use filekit::error::{FileKitError, Result};

/// Combine images into a single PDF, one image per page.
///
/// Inputs may be image files, directories (their images are taken in name
/// order) or glob patterns. Images that cannot be decoded are skipped with
/// a warning.
#[derive(Parser, Debug)]
#[command(name = "img2pdf")]
#[command(version)]
#[command(about = "Combine images into a single PDF", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Img2PdfCli {
    /// Image files, directories or glob patterns (in page order)
    ///
    /// Examples:
    ///   img2pdf scans/ -o scans.pdf
    ///   img2pdf 'photos/*.jpg' cover.png -o album.pdf
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Output PDF file path
    ///
    /// Parent directories are created when missing.
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Resolution used to convert pixels into page size
    #[arg(long, value_name = "N", default_value_t = DEFAULT_ASSEMBLY_DPI)]
    pub dpi: u32,

    /// Fail instead of replacing an existing output file
    #[arg(long)]
    pub no_clobber: bool,

    /// Verbose output - show every processed image
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Img2PdfCli {
    /// Validate arguments that need no file I/O.
    ///
    /// # Errors
    ///
    /// Returns an error if the DPI is zero.
    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(FileKitError::invalid_config("DPI must be at least 1"));
        }
        Ok(())
    }

    /// Convert the arguments into a validated [`ImagesToPdfConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid.
    pub fn to_config(&self) -> Result<ImagesToPdfConfig> {
        let overwrite_mode = if self.no_clobber {
            OverwriteMode::NoClobber
        } else {
            OverwriteMode::Overwrite
        };

        let config = ImagesToPdfConfig {
            inputs: self.inputs.clone(),
            output: self.output.clone(),
            dpi: self.dpi,
            overwrite_mode,
            verbose: self.verbose,
            quiet: self.quiet,
        };

        config.validate()?;
        Ok(config)
    }
}
