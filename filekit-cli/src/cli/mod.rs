//! CLI argument parsing for the filekit binaries.
//!
//! Every tool has its own `clap` derive struct with a `validate()` for
//! checks that need no file I/O and a `to_config()` that produces the
//! library's configuration record.
//!
//! # Examples
//!
//! ```no_run
//! use clap::Parser;
//! use filekit_cli::cli::Img2PdfCli;
//!
//! let cli = Img2PdfCli::parse();
//! let config = cli.to_config().expect("invalid arguments");
//! println!("Assembling {} input(s)", config.inputs.len());
//! ```

pub mod img2pdf;
pub mod pdf2img;
pub mod pdfsplit;
pub mod rename;

pub use img2pdf::Img2PdfCli;
pub use pdf2img::Pdf2ImgCli;
pub use pdfsplit::{ExtractArgs, PdfSplitCli, PdfSplitCommand, SplitArgs};
pub use rename::RenameCli;
