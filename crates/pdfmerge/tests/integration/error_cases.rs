//! Integration tests for error handling and edge cases.

use pdfmerge::{FileOutcome, MergeOptions, PdfMergeError, merge_by_folder, merge_files};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::common::{dir_listing, page_widths, write_garbage, write_pdf};

#[test]
fn test_error_empty_input_list() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.pdf");

    let err = merge_files(&[], &output, &MergeOptions::default()).unwrap_err();

    assert!(matches!(err, PdfMergeError::NoInputs { .. }));
    assert_eq!(err.exit_code(), 3);
    assert!(!output.exists());
}

#[test]
fn test_error_missing_folder() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    let err = merge_by_folder(&missing, Path::new("out.pdf"), &MergeOptions::default())
        .unwrap_err();

    assert!(matches!(err, PdfMergeError::DirectoryNotFound { .. }));
    assert_eq!(err.exit_code(), 2);
    assert!(!missing.exists());
}

#[test]
fn test_error_folder_is_a_file() {
    let dir = TempDir::new().unwrap();
    let file = write_pdf(dir.path(), "a.pdf", &[1]);

    let err =
        merge_by_folder(&file, Path::new("out.pdf"), &MergeOptions::default()).unwrap_err();

    assert!(matches!(err, PdfMergeError::NotADirectory { .. }));
}

#[test]
fn test_error_folder_without_pdfs() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.txt"), b"text").unwrap();

    let err = merge_by_folder(dir.path(), Path::new("out.pdf"), &MergeOptions::default())
        .unwrap_err();

    assert!(matches!(err, PdfMergeError::NoInputs { .. }));
    assert_eq!(dir_listing(dir.path()), ["a.txt"]);
}

#[test]
fn test_folder_holding_only_previous_output() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "merged_output.pdf", &[1]);

    let err = merge_by_folder(
        dir.path(),
        Path::new("merged_output.pdf"),
        &MergeOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(err, PdfMergeError::NoInputs { .. }));
}

#[test]
fn test_unreadable_input_skipped() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", &[100]);
    let bad = write_garbage(dir.path(), "b.pdf");
    let c = write_pdf(dir.path(), "c.pdf", &[300, 301]);
    let output = dir.path().join("out.pdf");

    let report = merge_files(&[a, bad.clone(), c], &output, &MergeOptions::default()).unwrap();

    assert!(report.success());
    assert_eq!(report.merged_count(), 2);
    assert_eq!(report.total_pages, 3);
    assert_eq!(page_widths(&output), vec![100, 300, 301]);

    let skipped: Vec<_> = report.skipped().map(|(path, _)| path.to_path_buf()).collect();
    assert_eq!(skipped, vec![bad]);
}

#[test]
fn test_missing_input_skipped() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", &[100]);
    let output = dir.path().join("out.pdf");

    let report = merge_files(
        &[PathBuf::from("/nonexistent/file.pdf"), a],
        &output,
        &MergeOptions::default(),
    )
    .unwrap();

    assert!(report.success());
    assert!(matches!(report.files[0].outcome, FileOutcome::Skipped { .. }));
    assert_eq!(page_widths(&output), vec![100]);
}

#[test]
fn test_all_inputs_unreadable() {
    let dir = TempDir::new().unwrap();
    let bad1 = write_garbage(dir.path(), "bad1.pdf");
    let bad2 = write_garbage(dir.path(), "bad2.pdf");
    let output = dir.path().join("out.pdf");

    let report = merge_files(&[bad1, bad2], &output, &MergeOptions::default()).unwrap();

    assert!(!report.success());
    assert_eq!(report.skipped_count(), 2);
    assert_eq!(report.bytes_written, 0);
    assert!(!output.exists());
}

#[test]
fn test_folder_of_unreadable_files_writes_nothing() {
    let dir = TempDir::new().unwrap();
    write_garbage(dir.path(), "a.pdf");
    write_garbage(dir.path(), "b.pdf");

    let report = merge_by_folder(
        dir.path(),
        Path::new("merged_output.pdf"),
        &MergeOptions::default(),
    )
    .unwrap();

    assert!(!report.success());
    assert!(!dir.path().join("merged_output.pdf").exists());
}

#[test]
fn test_failed_write_is_fatal() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", &[100]);
    let output = dir.path().join("missing").join("out.pdf");

    let err = merge_files(&[a], &output, &MergeOptions::default()).unwrap_err();

    assert!(matches!(err, PdfMergeError::FailedToCreateOutput { .. }));
    assert!(err.is_fatal());
    assert_eq!(err.exit_code(), 5);
}
