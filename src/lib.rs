// Copyright (C) Brian G. Milnes 2025

//! Alphafix - rewrite deprecated `withOpacity` calls to `withAlpha`
//!
//! A text-level codemod: call heads are found by pattern, arguments are
//! recovered by balanced-parenthesis scanning, and each call is replaced with
//! `.withAlpha((<arg> * 255).round())`. The host language is never parsed.

pub mod locator;
pub mod extractor;
pub mod rewriter;
pub mod file_rewriter;
pub mod tree_processor;
pub mod args;
pub mod logging;
pub mod tool_runner;

// Re-export commonly used items
pub use locator::locator::{CallSiteLocator, MatchSpan, CALL_HEAD};
pub use extractor::extractor::{extract, Extracted, Unbalanced};
pub use rewriter::rewriter::rewrite;
pub use file_rewriter::file_rewriter::{rewrite_source, FileRewriter, PassEnd, RewriteOutcome};
pub use tree_processor::tree_processor::{process_tree, rewrite_file, find_source_files, ChangeRecord, FileError, TreeReport};
pub use args::args::{Args, CodemodConfig, ReportFormat};
pub use logging::logging::ToolLogger;
pub use tool_runner::tool_runner::{run_tool, report_lines, ToolConfig};
