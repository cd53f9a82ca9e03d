//! Arguments for `pdf2img`.

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use filekit::config::{DEFAULT_RENDER_DPI, ImageFormat, PageSpan, PdfToImagesConfig};
use filekit::error::{FileKitError, Result};

/// Render PDF pages to image files.
///
/// Pages are written to `OUTPUT_DIR/<pdf name>/page_<n>.<format>`.
#[derive(Parser, Debug)]
#[command(name = "pdf2img")]
#[command(version)]
#[command(about = "Render PDF pages to image files", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Pdf2ImgCli {
    /// PDF file to render
    #[arg(value_name = "PDF")]
    pub input: PathBuf,

    /// Directory receiving a sub-directory of page images
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Render resolution
    #[arg(long, value_name = "N", default_value_t = DEFAULT_RENDER_DPI)]
    pub dpi: u32,

    /// First page to render (1-based)
    #[arg(long, value_name = "N")]
    pub first: Option<u32>,

    /// Last page to render (1-based, clamped to the page count)
    #[arg(long, value_name = "N")]
    pub last: Option<u32>,

    /// Image format of the written pages
    #[arg(long, value_name = "FORMAT", default_value = "png")]
    #[arg(value_parser = ["png", "jpg", "jpeg"])]
    pub format: String,

    /// Directory holding the pdfium shared library
    ///
    /// Without it the current directory and then the system library are
    /// tried.
    #[arg(long, value_name = "DIR", env = "PDFIUM_DYNAMIC_LIB_PATH")]
    pub pdfium_lib: Option<PathBuf>,

    /// Verbose output - show every written page
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Pdf2ImgCli {
    /// Validate arguments that need no file I/O.
    ///
    /// # Errors
    ///
    /// Returns an error if the DPI is zero or the format is unknown.
    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(FileKitError::invalid_config("DPI must be at least 1"));
        }
        ImageFormat::from_str(&self.format)?;
        Ok(())
    }

    /// Convert the arguments into a validated [`PdfToImagesConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the format is unknown or the configuration is
    /// invalid.
    pub fn to_config(&self) -> Result<PdfToImagesConfig> {
        let config = PdfToImagesConfig {
            input: self.input.clone(),
            output_dir: self.output_dir.clone(),
            dpi: self.dpi,
            pages: PageSpan::new(self.first, self.last),
            format: ImageFormat::from_str(&self.format)?,
            pdfium_lib: self.pdfium_lib.clone(),
            verbose: self.verbose,
            quiet: self.quiet,
        };

        config.validate()?;
        Ok(config)
    }
}
