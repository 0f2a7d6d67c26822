//! Integration tests for duplicati-diff-sizes
//!
//! These tests feed realistic compare-report text through the full
//! parse/classify/resolve/render pipeline against temporary file structures,
//! and exercise the external-command wrapper with stub executables.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use duplicati_diff_sizes::classify::{leaf_dirs, split_files_dirs};
use duplicati_diff_sizes::parser::ReportSections;
use duplicati_diff_sizes::report::render_section;
use duplicati_diff_sizes::resolver::{resolve_dirs, resolve_files};

/// Helper function to create a temporary directory structure for testing
fn create_test_directory() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a file of the given size in bytes
fn create_file(path: &Path, len: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(path, vec![b'x'; len]).expect("Failed to write file");
}

/// Build a compare report with the given entry lines per section.
fn build_report(added: &[String], modified: &[String], deleted: &[String]) -> String {
    let mut report = String::new();
    report.push_str("  Listing changes\n");
    report.push_str("  0: 2024-02-01 10:00:00 +00:00\n");
    report.push_str("  1: 2024-01-01 10:00:00 +00:00\n\n");

    report.push_str(&format!("{} added entries:\n", added.len()));
    for entry in added {
        report.push_str(&format!("+ {entry}\n"));
    }

    report.push_str(&format!("{} modified entries:\n", modified.len()));
    for entry in modified {
        report.push_str(&format!("~ {entry}\n"));
    }

    report.push_str(&format!("{} deleted entries:\n", deleted.len()));
    for entry in deleted {
        report.push_str(&format!("- {entry}\n"));
    }

    report.push_str("Added folders: 0\n");
    report
}

/// Run the full pipeline for the modified-files block and return its text.
fn render_modified_files(report: &str) -> String {
    let sections = ReportSections::parse(report);
    let modified = split_files_dirs(&sections.modified);
    let files = resolve_files(&modified.files);
    render_section("files", &files)
}

#[test]
fn test_end_to_end_existing_modified_file() {
    let tmp = create_test_directory();
    let file_path = tmp.path().join("notes.txt");
    create_file(&file_path, 2048);
    let file_str = file_path.display().to_string();

    let report = build_report(
        &["/somewhere/new-a".to_string(), "/somewhere/new-b".to_string()],
        &[file_str.clone()],
        &[],
    );

    let rendered = render_modified_files(&report);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "modified files: 1, existing: 1");
    assert_eq!(lines[1], format!("   2.0 KiB {file_str}"));
    assert_eq!(lines[2], "total size of modified files: 2.0 KiB");
}

#[test]
fn test_end_to_end_missing_file_placeholder() {
    let tmp = create_test_directory();
    let missing = tmp.path().join("vanished.bin").display().to_string();
    let present_path = tmp.path().join("kept.bin");
    create_file(&present_path, 1024);
    let present = present_path.display().to_string();

    let report = build_report(&[], &[missing.clone(), present.clone()], &[]);
    let rendered = render_modified_files(&report);

    assert!(rendered.contains("modified files: 2, existing: 1\n"));
    assert!(rendered.contains(&format!("   ?.? B   {missing}\n")));
    // The missing file must not count towards the total.
    assert!(rendered.contains("total size of modified files: 1.0 KiB\n"));
}

#[test]
fn test_end_to_end_files_sorted_ascending() {
    let tmp = create_test_directory();
    let large = tmp.path().join("large.bin");
    let small = tmp.path().join("small.bin");
    create_file(&large, 4096);
    create_file(&small, 512);

    let report = build_report(
        &[],
        &[large.display().to_string(), small.display().to_string()],
        &[],
    );
    let rendered = render_modified_files(&report);

    let small_at = rendered.find("small.bin").expect("small.bin not reported");
    let large_at = rendered.find("large.bin").expect("large.bin not reported");
    assert!(small_at < large_at);
}

#[test]
fn test_end_to_end_directory_report() {
    let tmp = create_test_directory();
    let parent = tmp.path().join("photos");
    let leaf = parent.join("2024");
    create_file(&leaf.join("a.jpg"), 300);
    create_file(&leaf.join("b.jpg"), 700);

    // Both the parent and its leaf are reported as modified; only the leaf
    // may be sized, otherwise the subtree would be counted twice.
    let parent_entry = format!("{}/", parent.display());
    let leaf_entry = format!("{}/", leaf.display());
    let report = build_report(&[], &[parent_entry.clone(), leaf_entry.clone()], &[]);

    let sections = ReportSections::parse(&report);
    let modified = split_files_dirs(&sections.modified);
    assert_eq!(modified.dirs, vec![parent_entry, leaf_entry.clone()]);

    let leaves = leaf_dirs(&modified.dirs);
    assert_eq!(leaves, vec![leaf_entry]);

    let dirs = resolve_dirs(&leaves);
    let rendered = render_section("dirs", &dirs);

    assert!(rendered.contains("modified dirs: 1, existing: 1\n"));
    assert!(rendered.contains("total size of modified dirs: 1000.0 B  \n"));
}

#[test]
fn test_end_to_end_empty_modified_section() {
    let report = build_report(&["/new".to_string()], &[], &["/old".to_string()]);
    let rendered = render_modified_files(&report);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "modified files: 0, existing: 0");
    assert_eq!(lines[1], "total size of modified files: 0.0 B  ");
}

#[test]
fn test_parser_handles_report_saved_from_disk() {
    let tmp = create_test_directory();
    let report_path = tmp.path().join("compare-output.txt");
    let report = build_report(&[], &["/etc/hosts".to_string()], &[]);
    fs::write(&report_path, &report).expect("Failed to write report file");

    let loaded = fs::read_to_string(&report_path).expect("Failed to read report file");
    assert_eq!(ReportSections::parse(&loaded), ReportSections::parse(&report));
}

#[cfg(unix)]
mod external_command {
    use super::*;
    use duplicati_diff_sizes::compare::{CompareCommand, CompareError};
    use duplicati_diff_sizes::config::CompareOptions;

    /// Write an executable shell script to the given path.
    fn write_script(path: &Path, content: &str) {
        use std::os::unix::fs::PermissionsExt;

        fs::write(path, content).expect("Failed to write script");
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))
            .expect("Failed to set script permissions");
    }

    fn stub_options(binary: &Path) -> CompareOptions {
        CompareOptions {
            newer_version: 0,
            older_version: 1,
            repository_url: "file:///mnt/backups".to_string(),
            database_path: None,
            locale: "en".to_string(),
            binary: binary.to_path_buf(),
        }
    }

    #[test]
    fn test_run_captures_stdout_of_successful_command() {
        let tmp = create_test_directory();
        let script = tmp.path().join("fake-duplicati");
        write_script(
            &script,
            "#!/bin/sh\n\
             printf '1 added entries:\\n+ /a\\n0 modified entries:\\n0 deleted entries:\\nAdded folders:\\n'\n",
        );

        let output = CompareCommand::new(stub_options(&script))
            .run()
            .expect("stub command should succeed");

        let sections = ReportSections::parse(&output);
        assert_eq!(sections.added, vec!["/a"]);
    }

    #[test]
    fn test_run_surfaces_stderr_on_failure() {
        let tmp = create_test_directory();
        let script = tmp.path().join("failing-duplicati");
        write_script(
            &script,
            "#!/bin/sh\necho 'no such backup version' >&2\nexit 2\n",
        );

        let err = CompareCommand::new(stub_options(&script))
            .run()
            .expect_err("stub command should fail");

        match err {
            CompareError::Failed { status, stderr, .. } => {
                assert_eq!(status.code(), Some(2));
                assert!(stderr.contains("no such backup version"));
            }
            other => panic!("expected failure error, got {other:?}"),
        }
    }
}
