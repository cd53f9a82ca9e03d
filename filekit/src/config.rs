//! Configuration module for filekit.
//!
//! Each tool turns its CLI arguments into one of the validated records in
//! this module before touching the filesystem. This module handles:
//! - Validation of argument combinations
//! - Parsing of enumerated options
//! - Application of defaults
//! - Page range arithmetic shared by the PDF tools

use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{FileKitError, Result};

/// Default resolution used when assembling images into a PDF.
pub const DEFAULT_ASSEMBLY_DPI: u32 = 300;

/// Default resolution used when rasterizing PDF pages.
pub const DEFAULT_RENDER_DPI: u32 = 200;

/// Output file overwrite behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Replace an existing output file (default).
    #[default]
    Overwrite,
    /// Never overwrite, error if the file exists.
    NoClobber,
}

/// Raster output format for rendered pages.
///
/// `jpg` and `jpeg` encode identically but keep their spelling in the
/// generated file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// Portable Network Graphics.
    #[default]
    Png,
    /// JPEG with a `.jpg` extension.
    Jpg,
    /// JPEG with a `.jpeg` extension.
    Jpeg,
}

impl ImageFormat {
    /// File extension (without dot) for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
        }
    }

    /// Encoder used by the `image` crate.
    pub fn encoder(&self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpg | Self::Jpeg => image::ImageFormat::Jpeg,
        }
    }

    /// Whether the encoder requires RGB input without alpha.
    pub fn requires_rgb(&self) -> bool {
        matches!(self, Self::Jpg | Self::Jpeg)
    }
}

impl FromStr for ImageFormat {
    type Err = FileKitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" => Ok(Self::Jpg),
            "jpeg" => Ok(Self::Jpeg),
            _ => Err(FileKitError::invalid_config(format!(
                "Invalid image format: {s}. Must be one of: png, jpg, jpeg"
            ))),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Optional 1-based page bounds for rasterization.
///
/// Missing bounds default to the first and last page of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageSpan {
    /// First page to include (1-based).
    pub first: Option<u32>,
    /// Last page to include (1-based).
    pub last: Option<u32>,
}

impl PageSpan {
    /// Create a span from optional bounds.
    pub fn new(first: Option<u32>, last: Option<u32>) -> Self {
        Self { first, last }
    }

    /// Resolve the span against a document into 0-based page indices.
    ///
    /// The start is clamped at the first page and the end at the last page.
    ///
    /// # Errors
    ///
    /// Returns [`FileKitError::InvalidPageRange`] when the clamped start lies
    /// after the clamped end (this includes empty documents).
    ///
    /// # Examples
    ///
    /// ```
    /// use filekit::config::PageSpan;
    ///
    /// let span = PageSpan::new(Some(2), Some(50));
    /// assert_eq!(span.resolve(10).unwrap(), 1..=9);
    /// ```
    pub fn resolve(&self, page_count: usize) -> Result<RangeInclusive<usize>> {
        let start = self.first.map_or(0, |first| i64::from(first) - 1).max(0);
        let last_index = page_count as i64 - 1;
        let end = self
            .last
            .map_or(last_index, |last| last_index.min(i64::from(last) - 1));

        if start > end {
            return Err(FileKitError::invalid_page_range(
                "start page is after end page",
            ));
        }

        Ok(start as usize..=end as usize)
    }
}

/// Contiguous 1-based page range requested for extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractRange {
    /// First page (1-based, inclusive).
    pub start: u32,
    /// Last page (1-based, inclusive).
    pub end: u32,
}

/// An [`ExtractRange`] fitted to a concrete document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRange {
    /// First page (1-based, inclusive).
    pub start: u32,
    /// Last page (1-based, inclusive), never past the document's end.
    pub end: u32,
    /// Whether `end` was lowered to fit the document.
    pub clamped: bool,
}

impl ResolvedRange {
    /// Number of pages covered.
    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// Pages covered, 1-based.
    pub fn pages(&self) -> Vec<u32> {
        (self.start..=self.end).collect()
    }
}

impl ExtractRange {
    /// Create a range from 1-based bounds.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Check the bounds without looking at any document.
    ///
    /// # Errors
    ///
    /// Returns an error when a bound is zero or the start lies after the end.
    pub fn validate(&self) -> Result<()> {
        if self.start == 0 || self.end == 0 {
            return Err(FileKitError::invalid_page_range(
                "Page numbers must be positive integers",
            ));
        }

        if self.start > self.end {
            return Err(FileKitError::invalid_page_range(
                "Start page cannot be greater than end page",
            ));
        }

        Ok(())
    }

    /// Fit the range to a document with `total_pages` pages.
    ///
    /// An end beyond the document is clamped to the last page; the caller
    /// decides whether to warn about it via [`ResolvedRange::clamped`].
    ///
    /// # Errors
    ///
    /// Returns an error when the bounds are invalid or the start page lies
    /// beyond the document.
    pub fn resolve(&self, total_pages: usize) -> Result<ResolvedRange> {
        self.validate()?;

        if self.start as usize > total_pages {
            return Err(FileKitError::invalid_page_range(format!(
                "Start page ({}) exceeds total pages ({total_pages})",
                self.start
            )));
        }

        let clamped = self.end as usize > total_pages;
        let end = if clamped { total_pages as u32 } else { self.end };

        Ok(ResolvedRange {
            start: self.start,
            end,
            clamped,
        })
    }
}

/// Naming policy selected by `--mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingMode {
    /// Zero-padded running index.
    Sequential,
    /// Restrict names to word characters, hyphens and dots.
    #[default]
    Slugify,
    /// Case-fold the stem.
    Lowercase,
    /// Literal substring replacement.
    Replace,
}

impl FromStr for NamingMode {
    type Err = FileKitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "slugify" => Ok(Self::Slugify),
            "lowercase" => Ok(Self::Lowercase),
            "replace" => Ok(Self::Replace),
            _ => Err(FileKitError::invalid_config(format!(
                "Invalid naming mode: {s}. Must be one of: sequential, slugify, lowercase, replace"
            ))),
        }
    }
}

/// Configuration for assembling images into one PDF.
#[derive(Debug, Clone)]
pub struct ImagesToPdfConfig {
    /// Image files, directories or glob patterns, in page order.
    pub inputs: Vec<PathBuf>,

    /// Output PDF file path.
    pub output: PathBuf,

    /// Resolution used to size pages.
    pub dpi: u32,

    /// File overwrite behavior.
    pub overwrite_mode: OverwriteMode,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,
}

impl ImagesToPdfConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no input is given, the DPI is zero, or verbose and
    /// quiet are both enabled.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(FileKitError::invalid_config("No image paths provided"));
        }

        validate_dpi(self.dpi)?;
        validate_verbosity(self.verbose, self.quiet)?;

        for input in &self.inputs {
            if input == &self.output {
                return Err(FileKitError::invalid_config(format!(
                    "Output file cannot be the same as an input file: {}",
                    self.output.display()
                )));
            }
        }

        Ok(())
    }
}

/// Configuration for rasterizing PDF pages.
#[derive(Debug, Clone)]
pub struct PdfToImagesConfig {
    /// Input PDF.
    pub input: PathBuf,

    /// Directory that receives a sub-directory named after the PDF.
    pub output_dir: PathBuf,

    /// Render resolution.
    pub dpi: u32,

    /// Pages to render.
    pub pages: PageSpan,

    /// Raster format of the written files.
    pub format: ImageFormat,

    /// Directory holding the pdfium shared library, if not the default.
    pub pdfium_lib: Option<PathBuf>,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,
}

impl PdfToImagesConfig {
    /// Directory the page images are written to: `output_dir/<pdf stem>`.
    pub fn target_dir(&self) -> PathBuf {
        let stem = self
            .input
            .file_stem()
            .map(|s| s.to_os_string())
            .unwrap_or_else(|| "document".into());
        self.output_dir.join(stem)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the DPI is zero or verbose and quiet are both set.
    pub fn validate(&self) -> Result<()> {
        validate_dpi(self.dpi)?;
        validate_verbosity(self.verbose, self.quiet)
    }
}

/// Configuration for splitting a PDF into fixed-size parts.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Input PDF.
    pub input: PathBuf,

    /// Directory receiving the parts.
    pub output_dir: PathBuf,

    /// Pages per part.
    pub pages_per_file: usize,

    /// Dry run mode - plan without writing.
    pub dry_run: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,
}

impl SplitConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `pages_per_file` is zero or verbose and quiet are
    /// both enabled.
    pub fn validate(&self) -> Result<()> {
        if self.pages_per_file == 0 {
            return Err(FileKitError::invalid_config(
                "pages_per_file must be a positive integer",
            ));
        }

        validate_verbosity(self.verbose, self.quiet)
    }
}

/// Configuration for extracting a page range into a new PDF.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Input PDF.
    pub input: PathBuf,

    /// Output PDF.
    pub output: PathBuf,

    /// Requested pages.
    pub range: ExtractRange,

    /// Dry run mode - resolve the range without writing.
    pub dry_run: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,
}

impl ExtractConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the output is not a `.pdf` file, the range is
    /// invalid, or verbose and quiet are both enabled.
    pub fn validate(&self) -> Result<()> {
        if !has_extension(&self.output, "pdf") {
            return Err(FileKitError::invalid_config(format!(
                "Output file must be a PDF: {}",
                self.output.display()
            )));
        }

        if self.input == self.output {
            return Err(FileKitError::invalid_config(
                "Output file cannot be the same as the input file",
            ));
        }

        self.range.validate()?;
        validate_verbosity(self.verbose, self.quiet)
    }
}

/// Configuration for a batch rename run.
#[derive(Debug, Clone)]
pub struct RenameConfig {
    /// Directory to scan.
    pub root: PathBuf,

    /// Descend into sub-directories.
    pub recursive: bool,

    /// Naming policy.
    pub mode: NamingMode,

    /// Prefix for sequential names.
    pub prefix: String,

    /// Substring to replace (replace mode).
    pub replace_from: Option<String>,

    /// Replacement string (replace mode).
    pub replace_to: Option<String>,

    /// First index for sequential names.
    pub start: u64,

    /// Target extension overriding the computed one.
    pub change_ext: Option<String>,

    /// Keep stems and only change the extension.
    pub only_ext: bool,

    /// Comma-separated source extensions to operate on.
    pub src_ext: Option<String>,

    /// Print changes without renaming.
    pub dry_run: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            recursive: false,
            mode: NamingMode::default(),
            prefix: String::new(),
            replace_from: None,
            replace_to: None,
            start: 1,
            change_ext: None,
            only_ext: false,
            src_ext: None,
            dry_run: false,
            verbose: false,
            quiet: false,
        }
    }
}

impl RenameConfig {
    /// Validate flag combinations that do not need the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `only_ext` is set without `change_ext`
    /// - replace mode has no search string
    /// - verbose and quiet are both enabled
    pub fn validate(&self) -> Result<()> {
        if self.only_ext && self.change_ext.as_deref().is_none_or(str::is_empty) {
            return Err(FileKitError::invalid_config(
                "--only-ext requires --change-ext to be provided",
            ));
        }

        if !self.only_ext && self.mode == NamingMode::Replace && self.replace_from.is_none() {
            return Err(FileKitError::invalid_config(
                "replace mode requires --replace-from",
            ));
        }

        validate_verbosity(self.verbose, self.quiet)
    }
}

fn validate_dpi(dpi: u32) -> Result<()> {
    if dpi == 0 {
        return Err(FileKitError::invalid_config("DPI must be at least 1"));
    }
    Ok(())
}

fn validate_verbosity(verbose: bool, quiet: bool) -> Result<()> {
    if verbose && quiet {
        return Err(FileKitError::invalid_config(
            "Cannot use both --verbose and --quiet",
        ));
    }
    Ok(())
}

/// Case-insensitive check of a path's extension.
pub fn has_extension(path: &std::path::Path, expected: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(expected))
}
