//! Rasterizing PDF pages to image files with pdfium.
//!
//! The pdfium shared library is bound at run time. Rendering runs on the
//! blocking thread pool: pdfium is CPU-bound and keeps per-thread state.
//!
//! # Examples
//!
//! ```no_run
//! use filekit::config::{ImageFormat, PageSpan, PdfToImagesConfig};
//! use filekit::render::PageRasterizer;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PdfToImagesConfig {
//!     input: "slides.pdf".into(),
//!     output_dir: "out".into(),
//!     dpi: 150,
//!     pages: PageSpan::new(Some(2), Some(4)),
//!     format: ImageFormat::Png,
//!     pdfium_lib: None,
//!     verbose: false,
//!     quiet: false,
//! };
//!
//! let report = PageRasterizer::new().rasterize(&config).await?;
//! println!("{} images in {}", report.written.len(), report.output_dir.display());
//! # Ok(())
//! # }
//! ```

use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::config::{ImageFormat, PdfToImagesConfig};
use crate::error::{FileKitError, Result};
use crate::validation::InputValidator;

/// Points per inch in PDF user space.
const POINTS_PER_INCH: f32 = 72.0;

/// File name of a rendered page: `page_<n>.<ext>` with `n` 1-based.
///
/// ```
/// use filekit::config::ImageFormat;
/// use filekit::render::page_file_name;
///
/// assert_eq!(page_file_name(3, ImageFormat::Jpeg), "page_3.jpeg");
/// ```
pub fn page_file_name(page_number: usize, format: ImageFormat) -> String {
    format!("page_{page_number}.{}", format.extension())
}

/// Bind pdfium.
///
/// With `lib_dir` only that directory is tried. Without it the current
/// directory is tried first, then the system library.
///
/// # Errors
///
/// Returns [`FileKitError::RendererUnavailable`] if no library could be bound.
pub fn bind_pdfium(lib_dir: Option<&Path>) -> Result<Pdfium> {
    let bindings = match lib_dir {
        Some(dir) => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir)),
        None => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library()),
    }
    .map_err(|e| FileKitError::RendererUnavailable {
        reason: format!("{e:?}"),
    })?;

    Ok(Pdfium::new(bindings))
}

/// Result of a rasterization run.
#[derive(Debug, Clone)]
pub struct RenderReport {
    /// Pages in the document.
    pub total_pages: usize,
    /// Directory the images were written to.
    pub output_dir: PathBuf,
    /// Written files as `(1-based page number, path)`, in page order.
    pub written: Vec<(usize, PathBuf)>,
}

/// Renders a page range of a PDF to image files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageRasterizer;

impl PageRasterizer {
    /// Create a rasterizer.
    pub fn new() -> Self {
        Self
    }

    /// Render the configured page span into `output_dir/<pdf stem>/`.
    ///
    /// Input checks run before pdfium is bound, so a missing or mistyped
    /// input is reported even where the library is unavailable.
    ///
    /// # Errors
    ///
    /// Fails on invalid configuration or input, when pdfium cannot be bound,
    /// when the page span is empty, and on the first page that cannot be
    /// rendered or saved.
    pub async fn rasterize(&self, config: &PdfToImagesConfig) -> Result<RenderReport> {
        config.validate()?;
        InputValidator::pdf_file(&config.input)?;

        let config = config.clone();
        task::spawn_blocking(move || rasterize_blocking(&config))
            .await
            .map_err(|e| FileKitError::other(format!("Render task failed: {e}")))?
    }
}

fn rasterize_blocking(config: &PdfToImagesConfig) -> Result<RenderReport> {
    let pdfium = bind_pdfium(config.pdfium_lib.as_deref())?;

    let document = pdfium
        .load_pdf_from_file(&config.input, None)
        .map_err(|e| FileKitError::failed_to_load_pdf(&config.input, format!("{e:?}")))?;

    let pages = document.pages();
    let total_pages = pages.len() as usize;
    let range = config.pages.resolve(total_pages)?;

    let output_dir = config.target_dir();
    std::fs::create_dir_all(&output_dir).map_err(|e| FileKitError::FailedToCreateOutput {
        path: output_dir.clone(),
        source: e,
    })?;

    tracing::info!(
        input = %config.input.display(),
        total_pages,
        first = range.start() + 1,
        last = range.end() + 1,
        dpi = config.dpi,
        "rendering pages"
    );

    let render_config =
        PdfRenderConfig::new().scale_page_by_factor(config.dpi as f32 / POINTS_PER_INCH);
    let mut written = Vec::with_capacity(range.clone().count());

    for idx in range {
        let page_number = idx + 1;
        let render_failed = |reason: String| FileKitError::RenderFailed {
            page: page_number,
            reason,
        };

        let page = pages
            .get(idx as u16)
            .map_err(|e| render_failed(format!("{e:?}")))?;
        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|e| render_failed(format!("{e:?}")))?;

        let path = output_dir.join(page_file_name(page_number, config.format));
        save_image(bitmap.as_image(), &path, config.format)
            .map_err(|e| render_failed(e.to_string()))?;

        tracing::debug!(page = page_number, path = %path.display(), "rendered page");
        written.push((page_number, path));
    }

    Ok(RenderReport {
        total_pages,
        output_dir,
        written,
    })
}

fn save_image(image: DynamicImage, path: &Path, format: ImageFormat) -> image::ImageResult<()> {
    let image = if format.requires_rgb() {
        DynamicImage::ImageRgb8(image.to_rgb8())
    } else {
        image
    };
    image.save_with_format(path, format.encoder())
}
