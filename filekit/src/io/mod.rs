//! I/O operations for filekit.
//!
//! This module handles PDF file I/O:
//! - Loading PDF documents from disk
//! - Writing new PDFs to disk atomically
//!
//! # Examples
//!
//! ```no_run
//! use filekit::io::{PdfReader, PdfWriter};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = PdfReader::new().load(Path::new("input.pdf")).await?;
//! PdfWriter::new().save(loaded.document, Path::new("copy.pdf")).await?;
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions, WriteStatistics};

/// Build an in-memory document with `pages` blank pages.
///
/// Page `n` (1-based) gets a MediaBox `n * 100` points wide so tests can
/// tell pages apart after they have been moved between documents.
#[cfg(test)]
pub(crate) fn sample_document(pages: usize) -> lopdf::Document {
    use lopdf::{Document, Object, dictionary};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = (1..=pages)
        .map(|n| {
            let page = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), ((n * 100) as i64).into(), 792.into()],
            };
            doc.add_object(page).into()
        })
        .collect();

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => pages as i64,
    };
    doc.objects.insert(pages_id, pages_dict.into());

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}
