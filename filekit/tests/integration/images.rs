//! Assembling generated images into a PDF.

use filekit::config::{ImagesToPdfConfig, OverwriteMode};
use filekit::error::FileKitError;
use filekit::images::{AssemblyEvent, ImageAssembler};
use tempfile::TempDir;

use crate::common::{page_count, page_widths, write_corrupt_image, write_png};

fn config(inputs: Vec<std::path::PathBuf>, output: std::path::PathBuf) -> ImagesToPdfConfig {
    ImagesToPdfConfig {
        inputs,
        output,
        dpi: 72,
        overwrite_mode: OverwriteMode::Overwrite,
        verbose: false,
        quiet: true,
    }
}

#[tokio::test]
async fn test_directory_with_corrupt_image() {
    let dir = TempDir::new().unwrap();
    let images = dir.path().join("scans");
    std::fs::create_dir(&images).unwrap();
    write_png(&images.join("01.png"), 10, 20);
    write_png(&images.join("02.png"), 30, 20);
    write_png(&images.join("03.png"), 50, 20);
    write_corrupt_image(&images.join("04.png"));
    std::fs::write(images.join("readme.txt"), b"ignored").unwrap();

    let output = dir.path().join("out/scans.pdf");
    let mut skipped = Vec::new();

    let report = ImageAssembler::new()
        .assemble(&config(vec![images], output.clone()), |event| {
            if let AssemblyEvent::Skipped { path, .. } = event {
                skipped.push(path.to_path_buf());
            }
        })
        .await
        .unwrap();

    assert_eq!(report.pages, 3);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(skipped.len(), 1);
    assert!(skipped[0].ends_with("04.png"));
    assert_eq!(page_count(&output), 3);
    // At 72 DPI one pixel is one point.
    assert_eq!(page_widths(&output), vec![10, 30, 50]);
}

#[tokio::test]
async fn test_glob_pattern_and_explicit_file() {
    let dir = TempDir::new().unwrap();
    write_png(&dir.path().join("a.png"), 4, 4);
    write_png(&dir.path().join("b.png"), 4, 4);
    write_png(&dir.path().join("cover.png"), 4, 4);

    let pattern = dir.path().join("[ab].png");
    let output = dir.path().join("out.pdf");

    let report = ImageAssembler::new()
        .assemble(
            &config(vec![dir.path().join("cover.png"), pattern], output.clone()),
            |_| {},
        )
        .await
        .unwrap();

    assert_eq!(report.pages, 3);
    assert_eq!(page_count(&output), 3);
}

#[tokio::test]
async fn test_all_images_corrupt() {
    let dir = TempDir::new().unwrap();
    write_corrupt_image(&dir.path().join("bad.png"));

    let result = ImageAssembler::new()
        .assemble(
            &config(vec![dir.path().join("bad.png")], dir.path().join("out.pdf")),
            |_| {},
        )
        .await;

    assert!(matches!(result, Err(FileKitError::NoImagesProcessed)));
    assert!(!dir.path().join("out.pdf").exists());
}

#[tokio::test]
async fn test_no_clobber_keeps_existing_output() {
    let dir = TempDir::new().unwrap();
    write_png(&dir.path().join("a.png"), 4, 4);
    let output = dir.path().join("out.pdf");
    std::fs::write(&output, b"existing").unwrap();

    let mut cfg = config(vec![dir.path().join("a.png")], output.clone());
    cfg.overwrite_mode = OverwriteMode::NoClobber;

    let result = ImageAssembler::new().assemble(&cfg, |_| {}).await;

    assert!(matches!(result, Err(FileKitError::OutputExists { .. })));
    assert_eq!(std::fs::read(&output).unwrap(), b"existing");
}
