//! Shared helpers for the integration tests.
//!
//! Inputs are generated at test time: PDFs with lopdf, images with the
//! `image` crate.

use lopdf::{Document, Object, dictionary};
use std::path::{Path, PathBuf};

/// Write a PDF with `pages` blank pages to `path`.
///
/// Page `n` is `n * 100` points wide so pages can be told apart after
/// splitting.
pub fn write_pdf(path: &Path, pages: usize) {
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

    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }
        .into(),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).expect("Failed to write test PDF");
}

/// Write a solid-colour PNG of the given size.
pub fn write_png(path: &Path, width: u32, height: u32) {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 40, 40]));
    img.save(path).expect("Failed to write test PNG");
}

/// Write bytes that carry an image extension but do not decode.
pub fn write_corrupt_image(path: &Path) {
    std::fs::write(path, b"definitely not a png").expect("Failed to write corrupt image");
}

/// Number of pages in the PDF at `path`.
pub fn page_count(path: &Path) -> usize {
    Document::load(path)
        .expect("Failed to load PDF")
        .get_pages()
        .len()
}

/// MediaBox widths of every page, in page order.
pub fn page_widths(path: &Path) -> Vec<i64> {
    let doc = Document::load(path).expect("Failed to load PDF");
    doc.get_pages()
        .values()
        .map(|id| {
            let page = doc.get_dictionary(*id).expect("page dictionary");
            let media_box = page
                .get(b"MediaBox")
                .and_then(Object::as_array)
                .expect("MediaBox");
            media_box[2].as_float().expect("width").round() as i64
        })
        .collect()
}

/// Sorted file names directly inside `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Create empty files with the given names under `dir`.
pub fn touch_all(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create parent");
            }
            std::fs::write(&path, name.as_bytes()).expect("Failed to write file");
            path
        })
        .collect()
}
