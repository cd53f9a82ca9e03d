//! Input errors and the exit codes they map to.

use filekit::config::{
    ExtractConfig, ExtractRange, ImageFormat, ImagesToPdfConfig, OverwriteMode, PageSpan,
    PdfToImagesConfig, SplitConfig,
};
use filekit::error::FileKitError;
use filekit::images::ImageAssembler;
use filekit::render::PageRasterizer;
use filekit::split::PdfSplitter;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::common::write_pdf;

fn split_config(input: &Path, out: &Path) -> SplitConfig {
    SplitConfig {
        input: input.to_path_buf(),
        output_dir: out.to_path_buf(),
        pages_per_file: 1,
        dry_run: false,
        verbose: false,
        quiet: true,
    }
}

fn images_config(inputs: Vec<PathBuf>, output: PathBuf) -> ImagesToPdfConfig {
    ImagesToPdfConfig {
        inputs,
        output,
        dpi: 300,
        overwrite_mode: OverwriteMode::Overwrite,
        verbose: false,
        quiet: true,
    }
}

#[tokio::test]
async fn test_split_missing_input() {
    let dir = TempDir::new().unwrap();
    let result = PdfSplitter::new()
        .split(&split_config(&dir.path().join("missing.pdf"), dir.path()))
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, FileKitError::FileNotFound { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_split_wrong_extension() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, b"plain text").unwrap();

    let err = PdfSplitter::new()
        .split(&split_config(&input, dir.path()))
        .await
        .unwrap_err();

    assert!(matches!(err, FileKitError::NotAPdf { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[tokio::test]
async fn test_split_garbage_pdf() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.pdf");
    std::fs::write(&input, b"%PDF-1.5 but nothing else").unwrap();

    let err = PdfSplitter::new()
        .split(&split_config(&input, &dir.path().join("parts")))
        .await
        .unwrap_err();

    assert_eq!(err.exit_code(), 1);
    assert!(!dir.path().join("parts").exists());
}

#[tokio::test]
async fn test_extract_start_beyond_document() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("doc.pdf");
    write_pdf(&input, 2);
    let output = dir.path().join("out.pdf");

    let config = ExtractConfig {
        input,
        output: output.clone(),
        range: ExtractRange::new(3, 4),
        dry_run: false,
        verbose: false,
        quiet: true,
    };

    let err = PdfSplitter::new().extract(&config).await.unwrap_err();

    assert!(matches!(err, FileKitError::InvalidPageRange { .. }));
    assert!(err.to_string().contains("exceeds total pages"));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_images_unsupported_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, b"text").unwrap();

    let err = ImageAssembler::new()
        .assemble(&images_config(vec![input], dir.path().join("o.pdf")), |_| {})
        .await
        .unwrap_err();

    assert!(matches!(err, FileKitError::UnsupportedImage { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[tokio::test]
async fn test_images_missing_input() {
    let dir = TempDir::new().unwrap();

    let err = ImageAssembler::new()
        .assemble(
            &images_config(vec![dir.path().join("nope.png")], dir.path().join("o.pdf")),
            |_| {},
        )
        .await
        .unwrap_err();

    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_images_empty_directory() {
    let dir = TempDir::new().unwrap();
    let empty = dir.path().join("empty");
    std::fs::create_dir(&empty).unwrap();

    let err = ImageAssembler::new()
        .assemble(&images_config(vec![empty], dir.path().join("o.pdf")), |_| {})
        .await
        .unwrap_err();

    assert!(matches!(err, FileKitError::NoImagesInDirectory { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_render_checks_input_before_binding() {
    let dir = TempDir::new().unwrap();
    let rasterizer = PageRasterizer::new();

    let mut config = PdfToImagesConfig {
        input: dir.path().join("missing.pdf"),
        output_dir: dir.path().to_path_buf(),
        dpi: 200,
        pages: PageSpan::default(),
        format: ImageFormat::Png,
        pdfium_lib: Some(dir.path().to_path_buf()),
        verbose: false,
        quiet: true,
    };

    let err = rasterizer.rasterize(&config).await.unwrap_err();
    assert_eq!(err.exit_code(), 2);

    let text = dir.path().join("doc.txt");
    std::fs::write(&text, b"text").unwrap();
    config.input = text;

    let err = rasterizer.rasterize(&config).await.unwrap_err();
    assert_eq!(err.exit_code(), 3);
    assert!(!dir.path().join("doc").exists());
}
