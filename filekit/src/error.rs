//! Error types for filekit.
//!
//! Every tool in the workspace reports failures through [`FileKitError`].
//! Errors carry the offending path and a reason so the one-line message
//! printed by the binaries is actionable on its own.
//!
//! # Error Categories
//!
//! - **Input errors**: file not found, wrong kind of file, wrong extension
//! - **Document errors**: PDF or image that cannot be decoded
//! - **Configuration errors**: invalid arguments or flag combinations
//! - **Output errors**: files that cannot be created, written or moved

use std::io;
use std::path::PathBuf;

/// Result type alias for filekit operations.
pub type Result<T> = std::result::Result<T, FileKitError>;

/// Main error type for filekit operations.
#[derive(Debug, thiserror::Error)]
pub enum FileKitError {
    /// Input file or directory was not found.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path that does not exist.
        path: PathBuf,
    },

    /// Input path exists but is not a regular file.
    #[error("Not a file: {}", path.display())]
    NotAFile {
        /// Offending path.
        path: PathBuf,
    },

    /// Input path exists but is not a directory.
    #[error("Not a directory: {}", path.display())]
    NotADirectory {
        /// Offending path.
        path: PathBuf,
    },

    /// Input path does not carry a `.pdf` extension.
    #[error("The specified file '{}' is not a PDF", path.display())]
    NotAPdf {
        /// Offending path.
        path: PathBuf,
    },

    /// Input file is not a recognized image format.
    #[error("Input file '{}' is not a recognized image format", path.display())]
    UnsupportedImage {
        /// Offending path.
        path: PathBuf,
    },

    /// Input path is neither a file, a directory nor a matching pattern.
    #[error("Input path '{}' is neither a file nor a directory", path.display())]
    InputNotFound {
        /// Offending path or pattern.
        path: PathBuf,
    },

    /// A directory given as input contains no image files.
    #[error("No image files found in directory '{}'", path.display())]
    NoImagesInDirectory {
        /// Directory that was searched.
        path: PathBuf,
    },

    /// No image could be decoded, so there is nothing to assemble.
    #[error("No valid images were processed to create the PDF")]
    NoImagesProcessed,

    /// Failed to load a PDF document.
    #[error("Unable to open PDF '{}': {reason}", path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// PDF parsed but its structure cannot be used.
    #[error("Corrupted or invalid PDF '{}': {details}", path.display())]
    CorruptedPdf {
        /// Path to the PDF.
        path: PathBuf,
        /// Details about the corruption.
        details: String,
    },

    /// Failed to open or decode an image.
    #[error("Could not open or convert image '{}': {reason}", path.display())]
    FailedToLoadImage {
        /// Path to the image.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// The requested page range does not fit the document.
    #[error("Invalid page range: {reason}")]
    InvalidPageRange {
        /// Why the range was rejected.
        reason: String,
    },

    /// The pdfium shared library could not be bound.
    #[error("pdfium library is not available: {reason}")]
    RendererUnavailable {
        /// Binding failure details.
        reason: String,
    },

    /// Rendering a page failed.
    #[error("Rasterisation failed for page {page}: {reason}")]
    RenderFailed {
        /// 1-based page number.
        page: usize,
        /// Failure details.
        reason: String,
    },

    /// Output file already exists and overwriting is not allowed.
    #[error("Output file already exists: {}. Remove --no-clobber to overwrite", path.display())]
    OutputExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// Failed to create an output file.
    #[error("Failed to create output file '{}': {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write an output file.
    #[error("Failed to write '{}': {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to move a file to its new name.
    #[error("Failed to rename '{}' -> '{}': {source}", from.display(), to.display())]
    FailedToRename {
        /// Source path.
        from: PathBuf,
        /// Destination path.
        to: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Some entries of a batch failed; the rest were processed.
    #[error("{failed} of {total} item(s) failed")]
    PartialFailure {
        /// Number of failed items.
        failed: usize,
        /// Number of items attempted.
        total: usize,
    },

    /// Invalid configuration or flag combination.
    #[error("{message}")]
    InvalidConfig {
        /// Description of what is wrong.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<lopdf::Error> for FileKitError {
    fn from(err: lopdf::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl From<image::ImageError> for FileKitError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io_err) => Self::Io(io_err),
            other => Self::other(format!("Image error: {other}")),
        }
    }
}

impl From<glob::PatternError> for FileKitError {
    fn from(err: glob::PatternError) -> Self {
        Self::invalid_config(format!("Invalid glob pattern: {err}"))
    }
}

impl From<walkdir::Error> for FileKitError {
    fn from(err: walkdir::Error) -> Self {
        match err.into_io_error() {
            Some(io_err) => Self::Io(io_err),
            None => Self::other("Filesystem loop detected while walking directory"),
        }
    }
}

impl From<serde_json::Error> for FileKitError {
    fn from(err: serde_json::Error) -> Self {
        Self::other(format!("Failed to serialize report: {err}"))
    }
}

impl FileKitError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::NotAFile { path: path.into() }
    }

    /// Create a NotADirectory error.
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Create a NotAPdf error.
    pub fn not_a_pdf(path: impl Into<PathBuf>) -> Self {
        Self::NotAPdf { path: path.into() }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a CorruptedPdf error.
    pub fn corrupted_pdf(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::CorruptedPdf {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create a FailedToLoadImage error.
    pub fn failed_to_load_image(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FailedToLoadImage {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidPageRange error.
    pub fn invalid_page_range(reason: impl Into<String>) -> Self {
        Self::InvalidPageRange {
            reason: reason.into(),
        }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: impl Into<PathBuf>) -> Self {
        Self::OutputExists { path: path.into() }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Check if this error only concerns one item of a batch.
    ///
    /// Recoverable errors are reported as warnings and the batch continues.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FailedToLoadImage { .. }
                | Self::FailedToWrite { .. }
                | Self::FailedToCreateOutput { .. }
                | Self::FailedToRename { .. }
        )
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } => 2,
            Self::NotAFile { .. } => 2,
            Self::NotADirectory { .. } => 2,
            Self::InputNotFound { .. } => 2,
            Self::NotAPdf { .. } => 3,
            Self::UnsupportedImage { .. } => 3,
            Self::NoImagesInDirectory { .. } => 1,
            Self::NoImagesProcessed => 1,
            Self::FailedToLoadPdf { .. } => 1,
            Self::CorruptedPdf { .. } => 1,
            Self::FailedToLoadImage { .. } => 1,
            Self::InvalidPageRange { .. } => 1,
            Self::RendererUnavailable { .. } => 1,
            Self::RenderFailed { .. } => 1,
            Self::OutputExists { .. } => 1,
            Self::FailedToCreateOutput { .. } => 1,
            Self::FailedToWrite { .. } => 1,
            Self::FailedToRename { .. } => 1,
            Self::PartialFailure { .. } => 1,
            Self::InvalidConfig { .. } => 1,
            Self::Io(_) => 1,
            Self::Other { .. } => 1,
        }
    }
}
