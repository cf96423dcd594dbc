//! Integration tests for folder-mode merging.

use pdfmerge::{InputResolver, MergeOptions, SortOrder, merge_by_folder};
use std::path::Path;
use tempfile::TempDir;

use crate::common::{page_widths, write_pdf};

#[test]
fn test_folder_sorted_case_insensitively() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "B.pdf", &[2]);
    write_pdf(dir.path(), "a.PDF", &[1]);
    write_pdf(dir.path(), "C.pdf", &[3]);

    let report = merge_by_folder(
        dir.path(),
        Path::new("merged_output.pdf"),
        &MergeOptions::default(),
    )
    .unwrap();

    let names: Vec<_> = report
        .files
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.PDF", "B.pdf", "C.pdf"]);
    assert_eq!(page_widths(&dir.path().join("merged_output.pdf")), vec![1, 2, 3]);
}

#[test]
fn test_repeated_runs_do_not_ingest_output() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "one.pdf", &[100, 101]);
    write_pdf(dir.path(), "two.pdf", &[200]);
    let output = dir.path().join("merged_output.pdf");

    for _ in 0..3 {
        let report = merge_by_folder(
            dir.path(),
            Path::new("merged_output.pdf"),
            &MergeOptions::default(),
        )
        .unwrap();
        assert_eq!(report.total_pages, 3);
        assert_eq!(report.files.len(), 2);
    }

    assert_eq!(page_widths(&output), vec![100, 101, 200]);
}

#[test]
fn test_absolute_output_outside_folder() {
    let inputs = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    write_pdf(inputs.path(), "a.pdf", &[1]);
    write_pdf(inputs.path(), "b.pdf", &[2]);
    let output = elsewhere.path().join("combined.pdf");

    let report = merge_by_folder(inputs.path(), &output, &MergeOptions::default()).unwrap();

    assert_eq!(report.output.as_deref(), Some(output.as_path()));
    assert_eq!(page_widths(&output), vec![1, 2]);
    assert!(!inputs.path().join("combined.pdf").exists());
}

#[test]
fn test_absolute_output_inside_folder_is_excluded() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "a.pdf", &[1]);
    let output = write_pdf(dir.path(), "z_merged.pdf", &[999]);

    let report = merge_by_folder(dir.path(), &output, &MergeOptions::default()).unwrap();

    assert_eq!(report.files.len(), 1);
    assert_eq!(page_widths(&output), vec![1]);
}

#[test]
fn test_include_output_when_exclusion_disabled() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "a.pdf", &[1]);
    write_pdf(dir.path(), "merged_output.pdf", &[50]);

    let options = MergeOptions {
        exclude_output: false,
        ..Default::default()
    };
    let report = merge_by_folder(dir.path(), Path::new("merged_output.pdf"), &options).unwrap();

    assert_eq!(report.files.len(), 2);
    assert_eq!(
        page_widths(&dir.path().join("merged_output.pdf")),
        vec![1, 50]
    );
}

#[test]
fn test_subdirectories_are_ignored() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "top.pdf", &[1]);
    let nested = dir.path().join("nested");
    std::fs::create_dir(&nested).unwrap();
    write_pdf(&nested, "deep.pdf", &[2]);
    std::fs::create_dir(dir.path().join("folder.pdf")).unwrap();

    let report = merge_by_folder(
        dir.path(),
        Path::new("merged_output.pdf"),
        &MergeOptions::default(),
    )
    .unwrap();

    assert_eq!(report.files.len(), 1);
    assert_eq!(page_widths(&dir.path().join("merged_output.pdf")), vec![1]);
}

#[test]
fn test_natural_order() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "page10.pdf", &[10]);
    write_pdf(dir.path(), "page9.pdf", &[9]);
    write_pdf(dir.path(), "page1.pdf", &[1]);

    let alpha = merge_by_folder(dir.path(), Path::new("alpha.pdf"), &MergeOptions::default())
        .unwrap();
    assert!(alpha.success());
    assert_eq!(page_widths(&dir.path().join("alpha.pdf")), vec![1, 10, 9]);

    // Otherwise alpha.pdf would be picked up as an input.
    std::fs::remove_file(dir.path().join("alpha.pdf")).unwrap();

    let options = MergeOptions {
        order: SortOrder::Natural,
        ..Default::default()
    };
    merge_by_folder(dir.path(), Path::new("natural.pdf"), &options).unwrap();
    assert_eq!(page_widths(&dir.path().join("natural.pdf")), vec![1, 9, 10]);
}

#[test]
fn test_resolver_lists_without_merging() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "b.pdf", &[2]);
    write_pdf(dir.path(), "a.pdf", &[1]);
    std::fs::write(dir.path().join("notes.txt"), b"skip me").unwrap();

    let found = InputResolver::new().resolve(dir.path(), None).unwrap();

    assert_eq!(found, vec![dir.path().join("a.pdf"), dir.path().join("b.pdf")]);
    assert!(!dir.path().join("merged_output.pdf").exists());
}
