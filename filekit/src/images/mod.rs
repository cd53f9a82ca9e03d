//! Assembling images into a multi-page PDF.
//!
//! Every image becomes one page whose size in points is its pixel size
//! scaled by `72 / dpi`, so the image fills the page exactly. Images are
//! decoded one at a time and embedded as 8-bit RGB image XObjects.
//!
//! # Examples
//!
//! ```no_run
//! use filekit::config::{ImagesToPdfConfig, OverwriteMode};
//! use filekit::images::ImageAssembler;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ImagesToPdfConfig {
//!     inputs: vec!["scans".into()],
//!     output: "scans.pdf".into(),
//!     dpi: 300,
//!     overwrite_mode: OverwriteMode::Overwrite,
//!     verbose: false,
//!     quiet: false,
//! };
//!
//! let report = ImageAssembler::new().assemble(&config, |_| {}).await?;
//! println!("{} pages", report.pages);
//! # Ok(())
//! # }
//! ```

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::path::{Path, PathBuf};
use tokio::task;

use crate::config::{ImagesToPdfConfig, OverwriteMode, has_extension};
use crate::error::{FileKitError, Result};
use crate::io::{PdfWriter, WriteStatistics};
use crate::utils::{collect_paths_for_patterns, is_glob_pattern};

/// Extensions accepted as image input, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "bmp", "tiff", "tif"];

/// Whether the path carries one of [`IMAGE_EXTENSIONS`].
pub fn is_image_path(path: &Path) -> bool {
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| has_extension(path, ext))
}

/// Expand inputs into an ordered list of image files.
///
/// - A directory contributes its direct children with an image extension,
///   sorted by name.
/// - A file must carry an image extension.
/// - A glob pattern contributes the regular files it matches, in the order
///   the glob library yields them.
///
/// # Errors
///
/// - [`FileKitError::UnsupportedImage`] for a file without an image extension
/// - [`FileKitError::NoImagesInDirectory`] for a directory without images
/// - [`FileKitError::InputNotFound`] for anything else that matches nothing
pub fn collect_image_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let found = images_in_directory(input)?;
            if found.is_empty() {
                return Err(FileKitError::NoImagesInDirectory {
                    path: input.clone(),
                });
            }
            images.extend(found);
        } else if input.is_file() {
            if !is_image_path(input) {
                return Err(FileKitError::UnsupportedImage {
                    path: input.clone(),
                });
            }
            images.push(input.clone());
        } else if is_glob_pattern(input) {
            let matches: Vec<PathBuf> = collect_paths_for_patterns([input.to_string_lossy()])?
                .into_iter()
                .filter(|p| p.is_file())
                .collect();
            if matches.is_empty() {
                return Err(FileKitError::InputNotFound {
                    path: input.clone(),
                });
            }
            images.extend(matches);
        } else {
            return Err(FileKitError::InputNotFound {
                path: input.clone(),
            });
        }
    }

    Ok(images)
}

fn images_in_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_image_path(&path) {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

/// A decoded image as 8-bit RGB samples.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGB samples, three bytes per pixel.
    pub samples: Vec<u8>,
}

impl DecodedImage {
    /// Decode an image file and convert it to RGB.
    ///
    /// # Errors
    ///
    /// Returns [`FileKitError::FailedToLoadImage`] if the file cannot be read
    /// or decoded.
    pub fn open(path: &Path) -> Result<Self> {
        let decoded = image::open(path)
            .map_err(|e| FileKitError::failed_to_load_image(path, e.to_string()))?;
        let rgb = decoded.to_rgb8();

        Ok(Self {
            width: rgb.width(),
            height: rgb.height(),
            samples: rgb.into_raw(),
        })
    }

    /// Page size in points at the given resolution.
    pub fn page_size(&self, dpi: u32) -> (f32, f32) {
        let scale = 72.0 / dpi as f32;
        (self.width as f32 * scale, self.height as f32 * scale)
    }
}

/// Incrementally builds a document with one full-page image per page.
pub struct ImagePdfBuilder {
    doc: Document,
    pages_id: ObjectId,
    kids: Vec<Object>,
    dpi: u32,
}

impl ImagePdfBuilder {
    /// Start an empty document.
    pub fn new(dpi: u32) -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        Self {
            doc,
            pages_id,
            kids: Vec::new(),
            dpi,
        }
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Append a page showing `image`.
    ///
    /// # Errors
    ///
    /// Returns an error if the page content cannot be encoded.
    pub fn add_page(&mut self, image: DecodedImage) -> Result<()> {
        let (width, height) = image.page_size(self.dpi);

        let image_stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => image.width as i64,
                "Height" => image.height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            image.samples,
        );
        let image_id = self.doc.add_object(image_stream);
        let image_name = format!("Im{}", self.kids.len() + 1);

        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        width.into(),
                        0.into(),
                        0.into(),
                        height.into(),
                        0.into(),
                        0.into(),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(image_name.clone().into_bytes())]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = self
            .doc
            .add_object(Stream::new(Dictionary::new(), content.encode()?));

        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! {
                    image_name => image_id,
                },
            },
        });
        self.kids.push(page_id.into());

        Ok(())
    }

    /// Close the page tree and return the document.
    pub fn finish(mut self) -> Document {
        let count = self.kids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            dictionary! {
                "Type" => "Pages",
                "Kids" => self.kids,
                "Count" => count,
            }
            .into(),
        );

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        self.doc
    }
}

/// Progress notifications emitted while assembling.
#[derive(Debug)]
pub enum AssemblyEvent<'a> {
    /// About to decode image `index` (1-based) of `total`.
    Processing {
        /// 1-based position.
        index: usize,
        /// Number of images.
        total: usize,
        /// Image path.
        path: &'a Path,
    },
    /// The image could not be used and was left out.
    Skipped {
        /// Image path.
        path: &'a Path,
        /// Why it was left out.
        error: &'a FileKitError,
    },
}

/// Result of an assembly run.
#[derive(Debug, Clone)]
pub struct AssemblyReport {
    /// Pages written.
    pub pages: usize,
    /// Images left out, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
    /// Output write statistics.
    pub write: WriteStatistics,
}

/// Turns an ordered list of images into one PDF.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageAssembler;

impl ImageAssembler {
    /// Create an assembler.
    pub fn new() -> Self {
        Self
    }

    /// Assemble the configured inputs into the configured output.
    ///
    /// `on_progress` is called before each image is decoded and for each
    /// image that is skipped.
    ///
    /// # Errors
    ///
    /// Fails on invalid configuration or inputs, when no image could be
    /// decoded, or when the output cannot be written.
    pub async fn assemble<F>(
        &self,
        config: &ImagesToPdfConfig,
        mut on_progress: F,
    ) -> Result<AssemblyReport>
    where
        F: FnMut(AssemblyEvent<'_>),
    {
        config.validate()?;

        if config.overwrite_mode == OverwriteMode::NoClobber && config.output.exists() {
            return Err(FileKitError::output_exists(&config.output));
        }

        let paths = collect_image_inputs(&config.inputs)?;
        let total = paths.len();
        let mut builder = ImagePdfBuilder::new(config.dpi);
        let mut skipped = Vec::new();

        for (i, path) in paths.iter().enumerate() {
            on_progress(AssemblyEvent::Processing {
                index: i + 1,
                total,
                path,
            });

            let owned = path.clone();
            let decoded = task::spawn_blocking(move || DecodedImage::open(&owned))
                .await
                .map_err(|e| FileKitError::other(format!("Decode task failed: {e}")))?;

            match decoded.and_then(|image| builder.add_page(image)) {
                Ok(()) => {}
                Err(err) if err.is_recoverable() => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping image");
                    on_progress(AssemblyEvent::Skipped { path, error: &err });
                    skipped.push((path.clone(), err.to_string()));
                }
                Err(err) => return Err(err),
            }
        }

        if builder.page_count() == 0 {
            return Err(FileKitError::NoImagesProcessed);
        }

        let pages = builder.page_count();
        let doc = builder.finish();
        let write = PdfWriter::with_overwrite_mode(config.overwrite_mode)
            .save(doc, &config.output)
            .await?;

        tracing::info!(output = %config.output.display(), pages, "assembled pdf");

        Ok(AssemblyReport {
            pages,
            skipped,
            write,
        })
    }
}
