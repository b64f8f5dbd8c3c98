// Copyright (C) Brian G. Milnes 2025

//! Common test utilities for integration tests

#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Temporary project root with the given files, paths relative to the root
pub fn project_with(files: &[(&str, &str)]) -> Result<TempDir> {
    let dir = TempDir::new().context("Failed to create temp dir")?;
    for (rel, content) in files {
        write_file(dir.path(), rel, content.as_bytes())?;
    }
    Ok(dir)
}

pub fn write_file(root: &Path, rel: &str, content: &[u8]) -> Result<()> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .context(format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, content).context(format!("Failed to write {}", path.display()))
}

pub fn read_file(root: &Path, rel: &str) -> Result<String> {
    let path = root.join(rel);
    fs::read_to_string(&path).context(format!("Failed to read {}", path.display()))
}
