//! End-to-end rename runs against a scratch directory.

use filekit::config::{NamingMode, RenameConfig};
use filekit::error::FileKitError;
use filekit::rename::{RenameOutcome, RenameStatus, rename_files};
use rstest::rstest;
use std::collections::HashSet;
use tempfile::TempDir;

use crate::common::{file_names, touch_all};

fn config(root: &std::path::Path, mode: NamingMode) -> RenameConfig {
    RenameConfig {
        root: root.to_path_buf(),
        mode,
        start: 1,
        quiet: true,
        ..Default::default()
    }
}

fn completed(outcome: RenameOutcome) -> filekit::rename::RenameReport {
    match outcome {
        RenameOutcome::Completed(report) => report,
        other => panic!("expected a completed run, got {other:?}"),
    }
}

#[test]
fn test_lowercase_with_source_filter_only_touches_matches() {
    let dir = TempDir::new().unwrap();
    touch_all(dir.path(), &["a.TXT", "b.txt", "c.md"]);

    let mut cfg = config(dir.path(), NamingMode::Lowercase);
    cfg.src_ext = Some("txt".to_string());

    let report = completed(rename_files(&cfg).unwrap());

    assert_eq!(report.records.len(), 2);
    assert!(
        report
            .records
            .iter()
            .all(|r| r.status == RenameStatus::Skipped)
    );
    assert!(
        report
            .records
            .iter()
            .all(|r| r.source.extension().unwrap().eq_ignore_ascii_case("txt"))
    );
    assert_eq!(file_names(dir.path()), vec!["a.TXT", "b.txt", "c.md"]);
    report.check().unwrap();
}

#[test]
fn test_sequential_names_are_padded_and_ordered() {
    let dir = TempDir::new().unwrap();
    touch_all(dir.path(), &["zeta.jpg", "alpha.jpg", "mid.png"]);

    let mut cfg = config(dir.path(), NamingMode::Sequential);
    cfg.prefix = "img_".to_string();

    let report = completed(rename_files(&cfg).unwrap());

    assert_eq!(report.count(RenameStatus::Renamed), 3);
    assert_eq!(
        file_names(dir.path()),
        vec!["img_001.jpg", "img_002.png", "img_003.jpg"]
    );
    assert!(dir.path().join("img_001.jpg").exists());
    assert_eq!(
        std::fs::read(dir.path().join("img_001.jpg")).unwrap(),
        b"alpha.jpg"
    );
}

#[test]
fn test_slugify_resolves_collisions_with_suffix() {
    let dir = TempDir::new().unwrap();
    touch_all(dir.path(), &["my file.txt", "my_file.txt"]);

    let report = completed(rename_files(&config(dir.path(), NamingMode::Slugify)).unwrap());

    assert_eq!(report.count(RenameStatus::Renamed), 1);
    assert_eq!(report.count(RenameStatus::Skipped), 1);
    assert_eq!(file_names(dir.path()), vec!["my_file.txt", "my_file_1.txt"]);
    assert_eq!(
        std::fs::read(dir.path().join("my_file_1.txt")).unwrap(),
        b"my file.txt"
    );
}

#[test]
fn test_dry_run_leaves_files_alone() {
    let dir = TempDir::new().unwrap();
    touch_all(dir.path(), &["Hello World.TXT"]);

    let mut cfg = config(dir.path(), NamingMode::Slugify);
    cfg.dry_run = true;
    cfg.change_ext = Some("md".to_string());

    let report = completed(rename_files(&cfg).unwrap());

    assert!(report.dry_run);
    assert_eq!(report.count(RenameStatus::Planned), 1);
    assert_eq!(
        report.records[0].destination,
        dir.path().join("Hello_World.md")
    );
    assert_eq!(file_names(dir.path()), vec!["Hello World.TXT"]);
}

#[test]
fn test_only_extension_change() {
    let dir = TempDir::new().unwrap();
    touch_all(dir.path(), &["Report Final.jpeg", "notes.txt"]);

    let mut cfg = config(dir.path(), NamingMode::Slugify);
    cfg.only_ext = true;
    cfg.change_ext = Some(".jpg".to_string());
    cfg.src_ext = Some("jpeg".to_string());

    completed(rename_files(&cfg).unwrap());

    assert_eq!(
        file_names(dir.path()),
        vec!["Report Final.jpg", "notes.txt"]
    );
}

#[test]
fn test_recursive_walk_renames_in_place() {
    let dir = TempDir::new().unwrap();
    touch_all(dir.path(), &["Top.TXT", "sub/Inner.TXT"]);

    let mut cfg = config(dir.path(), NamingMode::Lowercase);
    cfg.recursive = true;

    let report = completed(rename_files(&cfg).unwrap());

    assert_eq!(report.count(RenameStatus::Renamed), 2);
    assert!(dir.path().join("top.TXT").exists());
    assert!(dir.path().join("sub/inner.TXT").exists());
}

#[test]
fn test_non_recursive_ignores_subdirectories() {
    let dir = TempDir::new().unwrap();
    touch_all(dir.path(), &["sub/Inner.TXT"]);

    let outcome = rename_files(&config(dir.path(), NamingMode::Lowercase)).unwrap();
    assert!(matches!(outcome, RenameOutcome::NoFiles));
}

#[test]
fn test_no_matching_extension() {
    let dir = TempDir::new().unwrap();
    touch_all(dir.path(), &["a.md"]);

    let mut cfg = config(dir.path(), NamingMode::Lowercase);
    cfg.src_ext = Some("txt, pdf".to_string());

    let outcome = rename_files(&cfg).unwrap();
    assert!(matches!(outcome, RenameOutcome::NoMatches));
}

#[test]
fn test_missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = rename_files(&config(&dir.path().join("nope"), NamingMode::Slugify));

    let err = result.unwrap_err();
    assert!(matches!(err, FileKitError::FileNotFound { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[rstest(
    files, mode, configure,
    case(
        vec!["a.txt", "b.txt", "001.md"],
        NamingMode::Sequential,
        |c: &mut RenameConfig| {
            c.src_ext = Some("txt".to_string());
            c.change_ext = Some("md".to_string());
        }
    ),
    case(vec!["A.txt", "B.TXT", "a.txt"], NamingMode::Lowercase, |_: &mut RenameConfig| {}),
    case(
        vec!["x-1.txt", "x_1.txt"],
        NamingMode::Replace,
        |c: &mut RenameConfig| {
            c.replace_from = Some("-".to_string());
            c.replace_to = Some("_".to_string());
        }
    ),
    case(
        vec!["b.jpeg", "b.jpg", "c.JPEG"],
        NamingMode::Slugify,
        |c: &mut RenameConfig| {
            c.only_ext = true;
            c.change_ext = Some("jpg".to_string());
        }
    ),
    case(vec!["a  b.txt", "a b.txt", "a_b.txt"], NamingMode::Slugify, |_: &mut RenameConfig| {})
)]
fn test_colliding_names_stay_distinct(
    files: Vec<&str>,
    mode: NamingMode,
    configure: fn(&mut RenameConfig),
) {
    let dir = TempDir::new().unwrap();
    touch_all(dir.path(), &files);

    let mut cfg = config(dir.path(), mode);
    configure(&mut cfg);

    cfg.dry_run = true;
    let preview = completed(rename_files(&cfg).unwrap());
    assert_eq!(file_names(dir.path()).len(), files.len());

    cfg.dry_run = false;
    let report = completed(rename_files(&cfg).unwrap());
    report.check().unwrap();
    assert!(report.count(RenameStatus::Renamed) >= 1);

    let destinations: Vec<_> = report.records.iter().map(|r| &r.destination).collect();
    let distinct: HashSet<_> = destinations.iter().collect();
    assert_eq!(distinct.len(), destinations.len());

    let planned: Vec<_> = preview.records.iter().map(|r| &r.destination).collect();
    assert_eq!(planned, destinations);

    let names = file_names(dir.path());
    assert_eq!(names.len(), files.len());

    let mut contents: Vec<Vec<u8>> = names
        .iter()
        .map(|n| std::fs::read(dir.path().join(n)).unwrap())
        .collect();
    let mut originals: Vec<Vec<u8>> = files.iter().map(|f| f.as_bytes().to_vec()).collect();
    contents.sort();
    originals.sort();
    assert_eq!(contents, originals);
}

#[test]
fn test_sequential_start_too_large_is_rejected() {
    let dir = TempDir::new().unwrap();
    touch_all(dir.path(), &["a.txt", "b.txt"]);

    let mut cfg = config(dir.path(), NamingMode::Sequential);
    cfg.start = u64::MAX;

    let err = rename_files(&cfg).unwrap_err();
    assert!(matches!(err, FileKitError::InvalidConfig { .. }));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(file_names(dir.path()), vec!["a.txt", "b.txt"]);
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_names_keep_their_bytes() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    let source = dir.path().join(OsStr::from_bytes(b"caf\xE9.jpeg"));
    std::fs::write(&source, b"photo").unwrap();

    let mut cfg = config(dir.path(), NamingMode::Slugify);
    cfg.only_ext = true;
    cfg.change_ext = Some("jpg".to_string());

    let report = completed(rename_files(&cfg).unwrap());

    let renamed = dir.path().join(OsStr::from_bytes(b"caf\xE9.jpg"));
    assert_eq!(report.count(RenameStatus::Renamed), 1);
    assert_eq!(report.records[0].destination, renamed);
    assert_eq!(std::fs::read(&renamed).unwrap(), b"photo");
    assert!(!source.exists());
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_names_are_skipped_by_text_policies() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    let source = dir.path().join(OsStr::from_bytes(b"Caf\xE9 Menu.txt"));
    std::fs::write(&source, b"menu").unwrap();
    touch_all(dir.path(), &["Plain Name.txt"]);

    let report = completed(rename_files(&config(dir.path(), NamingMode::Slugify)).unwrap());
    report.check().unwrap();

    let skipped: Vec<_> = report
        .records
        .iter()
        .filter(|r| r.status == RenameStatus::Skipped)
        .collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].source, source);
    assert!(skipped[0].error.is_some());
    assert!(source.exists());
    assert!(dir.path().join("Plain_Name.txt").exists());

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["records"].as_array().is_some());
}
