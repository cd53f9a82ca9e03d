//! Splitting and page-range extraction on generated PDFs.

use filekit::config::{ExtractConfig, ExtractRange, SplitConfig};
use filekit::split::{PartStatus, PdfSplitter};
use tempfile::TempDir;

use crate::common::{file_names, page_count, page_widths, write_pdf};

fn split_config(input: &std::path::Path, out: &std::path::Path, per_file: usize) -> SplitConfig {
    SplitConfig {
        input: input.to_path_buf(),
        output_dir: out.to_path_buf(),
        pages_per_file: per_file,
        dry_run: false,
        verbose: false,
        quiet: true,
    }
}

fn extract_config(
    input: &std::path::Path,
    output: &std::path::Path,
    start: u32,
    end: u32,
) -> ExtractConfig {
    ExtractConfig {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        range: ExtractRange::new(start, end),
        dry_run: false,
        verbose: false,
        quiet: true,
    }
}

#[tokio::test]
async fn test_split_five_pages_by_two() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("book.pdf");
    write_pdf(&input, 5);
    let out = dir.path().join("parts");

    let report = PdfSplitter::new()
        .split(&split_config(&input, &out, 2))
        .await
        .unwrap();

    assert_eq!(report.document.page_count, 5);
    assert_eq!(report.failures().count(), 0);
    assert_eq!(
        file_names(&out),
        vec!["book_part001.pdf", "book_part002.pdf", "book_part003.pdf"]
    );

    assert_eq!(page_count(&out.join("book_part001.pdf")), 2);
    assert_eq!(page_count(&out.join("book_part002.pdf")), 2);
    assert_eq!(page_count(&out.join("book_part003.pdf")), 1);

    assert_eq!(page_widths(&out.join("book_part002.pdf")), vec![300, 400]);
    assert_eq!(page_widths(&out.join("book_part003.pdf")), vec![500]);
}

#[tokio::test]
async fn test_split_one_page_per_file_by_default() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("doc.pdf");
    write_pdf(&input, 3);

    let report = PdfSplitter::new()
        .split(&split_config(&input, dir.path(), 1))
        .await
        .unwrap();

    assert_eq!(report.parts.len(), 3);
    assert!(
        report
            .parts
            .iter()
            .all(|p| matches!(p.status, PartStatus::Written { file_size } if file_size > 0))
    );
}

#[tokio::test]
async fn test_split_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("doc.pdf");
    write_pdf(&input, 4);
    let out = dir.path().join("parts");

    let mut config = split_config(&input, &out, 3);
    config.dry_run = true;

    let report = PdfSplitter::new().split(&config).await.unwrap();

    assert_eq!(report.parts.len(), 2);
    assert!(
        report
            .parts
            .iter()
            .all(|p| matches!(p.status, PartStatus::Planned))
    );
    assert_eq!(report.parts[1].plan.first_page, 4);
    assert_eq!(report.parts[1].plan.last_page, 4);
    assert!(!out.exists());
}

#[tokio::test]
async fn test_extract_middle_range() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("doc.pdf");
    write_pdf(&input, 6);
    let output = dir.path().join("nested/out.pdf");

    let report = PdfSplitter::new()
        .extract(&extract_config(&input, &output, 2, 4))
        .await
        .unwrap();

    assert!(!report.range.clamped);
    assert!(report.write.is_some());
    assert_eq!(page_widths(&output), vec![200, 300, 400]);
}

#[tokio::test]
async fn test_extract_end_beyond_document_clamps() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("doc.pdf");
    write_pdf(&input, 3);
    let output = dir.path().join("tail.pdf");

    let report = PdfSplitter::new()
        .extract(&extract_config(&input, &output, 2, 10))
        .await
        .unwrap();

    assert!(report.range.clamped);
    assert_eq!(report.range.end, 3);
    assert_eq!(report.requested_end, 10);
    assert_eq!(page_count(&output), 2);
}

#[tokio::test]
async fn test_extract_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("doc.pdf");
    write_pdf(&input, 3);
    let output = dir.path().join("out.pdf");

    let mut config = extract_config(&input, &output, 1, 2);
    config.dry_run = true;

    let report = PdfSplitter::new().extract(&config).await.unwrap();

    assert!(report.write.is_none());
    assert_eq!(report.range.len(), 2);
    assert!(!output.exists());
}
