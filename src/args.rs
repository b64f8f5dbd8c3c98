// Copyright (C) Brian G. Milnes 2025

//! Command-line arguments and the resolved codemod configuration

pub mod args {
    use std::path::{Path, PathBuf};
    use anyhow::{Context, Result};
    use clap::{Parser, ValueEnum};

    pub const DEFAULT_SOURCE_DIR: &str = "lib";
    pub const DEFAULT_EXTENSION: &str = "dart";

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    pub enum ReportFormat {
        Text,
        Json,
    }

    #[derive(Parser, Debug)]
    #[command(name = "alphafix")]
    #[command(about = "Rewrite .withOpacity(x) calls to .withAlpha((x * 255).round())", long_about = None)]
    pub struct Args {
        /// Project root; reported paths are relative to it (default: current directory)
        #[arg(short = 'C', long)]
        pub root: Option<PathBuf>,

        /// Source directory under the root to traverse
        #[arg(short, long, default_value = DEFAULT_SOURCE_DIR)]
        pub source_dir: PathBuf,

        /// Extension of files to rewrite, without the dot
        #[arg(short, long, default_value = DEFAULT_EXTENSION)]
        pub extension: String,

        /// Report what would change without writing any file
        #[arg(short = 'n', long)]
        pub dry_run: bool,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        pub format: ReportFormat,

        /// Also write the report to logs/alphafix/<date>/run-<time>.log under the root
        #[arg(short, long)]
        pub log: bool,
    }

    impl Args {
        pub fn base_dir(&self) -> Result<PathBuf> {
            match &self.root {
                Some(root) => Ok(root.clone()),
                None => std::env::current_dir().context("Failed to get current directory"),
            }
        }

        pub fn config(&self) -> Result<CodemodConfig> {
            Ok(CodemodConfig {
                root: self.base_dir()?,
                source_dir: self.source_dir.clone(),
                extension: self.extension.trim_start_matches('.').to_string(),
                dry_run: self.dry_run,
            })
        }
    }

    /// Everything a tree pass needs, passed in explicitly
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CodemodConfig {
        pub root: PathBuf,
        pub source_dir: PathBuf,
        pub extension: String,
        pub dry_run: bool,
    }

    impl CodemodConfig {
        /// Defaults (`lib`, `dart`, writes enabled) under `root`
        pub fn new(root: &Path) -> Self {
            CodemodConfig {
                root: root.to_path_buf(),
                source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
                extension: DEFAULT_EXTENSION.to_string(),
                dry_run: false,
            }
        }

        pub fn search_dir(&self) -> PathBuf {
            self.root.join(&self.source_dir)
        }

        pub fn matches_extension(&self, path: &Path) -> bool {
            path.extension()
                .and_then(|e| e.to_str())
                .map(|e| e == self.extension)
                .unwrap_or(false)
        }
    }
}
