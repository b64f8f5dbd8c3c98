// Copyright (C) Brian G. Milnes 2025

//! Tests for the tree pass

use alphafix::{process_tree, CodemodConfig, ToolLogger};
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
mod common;
use common::{project_with, read_file, write_file};

const OLD: &str = "final c = Colors.red.withOpacity(0.5);\n";
const NEW: &str = "final c = Colors.red.withAlpha((0.5 * 255).round());\n";

#[test]
fn test_rewrites_matching_files_and_reports_relative_paths() -> Result<()> {
    let project = project_with(&[
        ("lib/main.dart", OLD),
        ("lib/widgets/button.dart", "x.withOpacity(a + (b))\n"),
        ("lib/clean.dart", "final c = Colors.red;\n"),
    ])?;
    let config = CodemodConfig::new(project.path());
    let mut logger = ToolLogger::new_disabled();

    let report = process_tree(&config, &mut logger)?;

    assert_eq!(report.files_scanned, 3);
    assert_eq!(report.changed_paths(), vec!["lib/main.dart", "lib/widgets/button.dart"]);
    assert_eq!(report.total_replacements(), 2);
    assert!(report.errors.is_empty());
    assert_eq!(read_file(project.path(), "lib/main.dart")?, NEW);
    assert_eq!(
        read_file(project.path(), "lib/widgets/button.dart")?,
        "x.withAlpha((a + (b) * 255).round())\n"
    );
    Ok(())
}

#[test]
fn test_unchanged_file_is_not_written() -> Result<()> {
    let project = project_with(&[("lib/clean.dart", "final c = Colors.red;\n")])?;
    let path = project.path().join("lib/clean.dart");
    let old_time = std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_000_000);
    fs::File::options().write(true).open(&path)?.set_modified(old_time)?;
    let before = fs::metadata(&path)?.modified()?;

    let report = process_tree(&CodemodConfig::new(project.path()), &mut ToolLogger::new_disabled())?;

    assert!(report.errors.is_empty());
    assert!(report.records.is_empty());
    assert_eq!(fs::metadata(&path)?.modified()?, before);
    Ok(())
}

#[test]
fn test_other_extensions_are_ignored() -> Result<()> {
    let project = project_with(&[
        ("lib/notes.txt", OLD),
        ("lib/main.dart.bak", OLD),
        ("test/widget_test.dart", OLD),
    ])?;
    fs::create_dir_all(project.path().join("lib/empty"))?;

    let report = process_tree(&CodemodConfig::new(project.path()), &mut ToolLogger::new_disabled())?;

    assert_eq!(report.files_scanned, 0);
    assert!(report.changed_paths().is_empty());
    assert_eq!(read_file(project.path(), "lib/notes.txt")?, OLD);
    assert_eq!(read_file(project.path(), "test/widget_test.dart")?, OLD);
    Ok(())
}

#[test]
fn test_custom_source_dir_and_extension() -> Result<()> {
    let project = project_with(&[("ui/theme.kt", OLD), ("lib/main.dart", OLD)])?;
    let config = CodemodConfig {
        source_dir: PathBuf::from("ui"),
        extension: "kt".to_string(),
        ..CodemodConfig::new(project.path())
    };

    let report = process_tree(&config, &mut ToolLogger::new_disabled())?;

    assert_eq!(report.changed_paths(), vec!["ui/theme.kt"]);
    assert_eq!(read_file(project.path(), "lib/main.dart")?, OLD);
    Ok(())
}

#[test]
fn test_invalid_utf8_file_is_reported_and_walk_continues() -> Result<()> {
    let project = project_with(&[("lib/b_good.dart", OLD)])?;
    write_file(project.path(), "lib/a_bad.dart", &[0xff, 0xfe, b'(', 0x80])?;

    let report = process_tree(&CodemodConfig::new(project.path()), &mut ToolLogger::new_disabled())?;

    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].path, "lib/a_bad.dart");
    assert_eq!(report.changed_paths(), vec!["lib/b_good.dart"]);
    assert_eq!(fs::read(project.path().join("lib/a_bad.dart"))?, vec![0xff, 0xfe, b'(', 0x80]);
    Ok(())
}

#[test]
fn test_unbalanced_file_still_written_when_earlier_call_rewritten() -> Result<()> {
    let source = "a.withOpacity(0.5);\n\nb.withOpacity(0.3;\n";
    let project = project_with(&[("lib/broken.dart", source)])?;

    let report = process_tree(&CodemodConfig::new(project.path()), &mut ToolLogger::new_disabled())?;

    assert_eq!(report.changed_paths(), vec!["lib/broken.dart"]);
    assert_eq!(report.records[0].unbalanced_line, Some(3));
    assert_eq!(
        read_file(project.path(), "lib/broken.dart")?,
        "a.withAlpha((0.5 * 255).round());\n\nb.withOpacity(0.3;\n"
    );
    Ok(())
}

#[test]
fn test_unbalanced_only_file_recorded_but_not_changed() -> Result<()> {
    let source = "b.withOpacity(0.3;\n";
    let project = project_with(&[("lib/broken.dart", source)])?;

    let report = process_tree(&CodemodConfig::new(project.path()), &mut ToolLogger::new_disabled())?;

    assert!(report.changed_paths().is_empty());
    assert_eq!(report.records.len(), 1);
    assert!(!report.records[0].changed);
    assert_eq!(read_file(project.path(), "lib/broken.dart")?, source);
    Ok(())
}

#[test]
fn test_dry_run_writes_nothing() -> Result<()> {
    let project = project_with(&[("lib/main.dart", OLD)])?;
    let config = CodemodConfig { dry_run: true, ..CodemodConfig::new(project.path()) };

    let report = process_tree(&config, &mut ToolLogger::new_disabled())?;

    assert!(report.dry_run);
    assert_eq!(report.changed_paths(), vec!["lib/main.dart"]);
    assert_eq!(read_file(project.path(), "lib/main.dart")?, OLD);
    Ok(())
}

#[test]
fn test_second_run_changes_nothing() -> Result<()> {
    let project = project_with(&[("lib/main.dart", OLD)])?;
    let config = CodemodConfig::new(project.path());

    let first = process_tree(&config, &mut ToolLogger::new_disabled())?;
    let second = process_tree(&config, &mut ToolLogger::new_disabled())?;

    assert_eq!(first.changed_paths().len(), 1);
    assert!(second.changed_paths().is_empty());
    assert_eq!(read_file(project.path(), "lib/main.dart")?, NEW);
    Ok(())
}

#[test]
fn test_missing_source_dir_yields_empty_report() -> Result<()> {
    let project = project_with(&[("README.md", "# app\n")])?;

    let report = process_tree(&CodemodConfig::new(project.path()), &mut ToolLogger::new_disabled())?;

    assert_eq!(report.files_scanned, 0);
    assert!(report.records.is_empty());
    assert!(report.errors.is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_is_rewritten_through_link() -> Result<()> {
    let project = project_with(&[("real/a.dart", "x.withOpacity(0.5)\n")])?;
    fs::create_dir_all(project.path().join("lib"))?;
    std::os::unix::fs::symlink(
        project.path().join("real/a.dart"),
        project.path().join("lib/a.dart"),
    )?;

    let report = process_tree(&CodemodConfig::new(project.path()), &mut ToolLogger::new_disabled())?;

    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.changed_paths(), vec!["lib/a.dart"]);
    assert_eq!(
        read_file(project.path(), "real/a.dart")?,
        "x.withAlpha((0.5 * 255).round())\n"
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_is_not_descended() -> Result<()> {
    let project = project_with(&[("shared/b.dart", OLD), ("lib/main.dart", "")])?;
    std::os::unix::fs::symlink(project.path().join("shared"), project.path().join("lib/shared"))?;

    let report = process_tree(&CodemodConfig::new(project.path()), &mut ToolLogger::new_disabled())?;

    assert_eq!(report.files_scanned, 1);
    assert!(report.changed_paths().is_empty());
    assert_eq!(read_file(project.path(), "shared/b.dart")?, OLD);
    Ok(())
}

#[test]
fn test_summary_line() -> Result<()> {
    let project = project_with(&[("lib/main.dart", OLD), ("lib/other.dart", "")])?;

    let report = process_tree(&CodemodConfig::new(project.path()), &mut ToolLogger::new_disabled())?;

    assert_eq!(
        report.summary(),
        "Summary: 2 files scanned, 1 file modified, 1 replacements, 0 errors"
    );
    Ok(())
}
