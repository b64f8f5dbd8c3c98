// Copyright (C) Brian G. Milnes 2025

//! Apply the rewrite pass to every matching file under a source tree
//!
//! Files are visited in sorted order, one at a time. A file that can't be
//! read, decoded or written is recorded and skipped; the walk goes on.

pub mod tree_processor {
    use std::fs;
    use std::path::{Path, PathBuf};
    use anyhow::{Context, Result};
    use serde::{Deserialize, Serialize};
    use walkdir::WalkDir;
    use crate::args::args::CodemodConfig;
    use crate::file_rewriter::file_rewriter::{FileRewriter, RewriteOutcome};
    use crate::logging::logging::ToolLogger;

    /// One file the pass rewrote, or tried to
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ChangeRecord {
        /// Path relative to the project root
        pub path: String,
        pub changed: bool,
        pub replacements: usize,
        /// 1-based line of a call head left unrewritten for lack of a closer
        pub unbalanced_line: Option<usize>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct FileError {
        pub path: String,
        pub message: String,
    }

    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TreeReport {
        pub files_scanned: usize,
        pub records: Vec<ChangeRecord>,
        pub errors: Vec<FileError>,
        pub dry_run: bool,
    }

    impl TreeReport {
        /// Root-relative paths of changed files, in visit order
        pub fn changed_paths(&self) -> Vec<&str> {
            self.records.iter()
                .filter(|r| r.changed)
                .map(|r| r.path.as_str())
                .collect()
        }

        pub fn total_replacements(&self) -> usize {
            self.records.iter().map(|r| r.replacements).sum()
        }

        pub fn summary(&self) -> String {
            let changed = self.changed_paths().len();
            let file_word = if changed == 1 { "file" } else { "files" };
            format!(
                "Summary: {} files scanned, {} {} modified, {} replacements, {} errors",
                self.files_scanned,
                changed,
                file_word,
                self.total_replacements(),
                self.errors.len()
            )
        }
    }

    /// Every file under the search dir with the configured extension, sorted
    pub fn find_source_files(config: &CodemodConfig) -> (Vec<PathBuf>, Vec<FileError>) {
        let mut files = Vec::new();
        let mut errors = Vec::new();

        for entry in WalkDir::new(config.search_dir()).sort_by_file_name() {
            match entry {
                Ok(entry) => {
                    // Symlinked files count; symlinked directories are not descended
                    let is_file = entry.file_type().is_file()
                        || (entry.path_is_symlink() && entry.path().is_file());
                    if is_file && config.matches_extension(entry.path()) {
                        files.push(entry.into_path());
                    }
                }
                Err(e) => {
                    let path = e.path()
                        .map(|p| relative_display(p, &config.root))
                        .unwrap_or_default();
                    errors.push(FileError { path, message: e.to_string() });
                }
            }
        }

        (files, errors)
    }

    /// Rewrite one file in storage. Nothing is written unless the pass changed it
    /// and `dry_run` is off.
    pub fn rewrite_file(rewriter: &FileRewriter, path: &Path, dry_run: bool) -> Result<RewriteOutcome> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let outcome = rewriter.rewrite(&source);

        if outcome.changed() && !dry_run {
            fs::write(path, &outcome.text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }

        Ok(outcome)
    }

    /// Run the codemod over `config.search_dir()`.
    ///
    /// Per-file problems land in the report. A missing search directory is
    /// warned about and yields an empty report.
    pub fn process_tree(config: &CodemodConfig, logger: &mut ToolLogger) -> Result<TreeReport> {
        let rewriter = FileRewriter::new()?;

        let mut report = TreeReport {
            dry_run: config.dry_run,
            ..TreeReport::default()
        };

        let search_dir = config.search_dir();
        if !search_dir.is_dir() {
            logger.log_error(&format!(
                "Warning: Source directory not found: {}",
                search_dir.display()
            ));
            return Ok(report);
        }

        let (files, walk_errors) = find_source_files(config);

        for error in walk_errors {
            logger.log_error(&format!("ERROR processing {}: {}", error.path, error.message));
            report.errors.push(error);
        }

        for file in &files {
            report.files_scanned += 1;
            let rel = relative_display(file, &config.root);

            match rewrite_file(&rewriter, file, config.dry_run) {
                Ok(outcome) => {
                    let unbalanced_line = outcome.unbalanced_line();
                    if let (Some(line), Some(reason)) = (unbalanced_line, outcome.unbalanced()) {
                        logger.log_error(&format!(
                            "{rel}:{line}: {reason}; .withOpacity( call and rest of file left unchanged"
                        ));
                    }
                    if outcome.changed() || unbalanced_line.is_some() {
                        report.records.push(ChangeRecord {
                            path: rel,
                            changed: outcome.changed(),
                            replacements: outcome.replacements,
                            unbalanced_line,
                        });
                    }
                }
                Err(e) => {
                    logger.log_error(&format!("ERROR processing {rel}: {e:#}"));
                    report.errors.push(FileError { path: rel, message: format!("{e:#}") });
                }
            }
        }

        Ok(report)
    }

    fn relative_display(path: &Path, root: &Path) -> String {
        path.strip_prefix(root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
