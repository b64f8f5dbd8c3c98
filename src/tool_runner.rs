// Copyright (C) Brian G. Milnes 2025

//! Tool runner for alphafix
//!
//! Sets up the logger, runs the tree pass, prints the report and finalizes
//! the log file.

pub mod tool_runner {
    use std::path::PathBuf;
    use anyhow::Result;
    use crate::args::args::{Args, CodemodConfig, ReportFormat};
    use crate::logging::logging::ToolLogger;
    use crate::tree_processor::tree_processor::{process_tree, TreeReport};

    pub const TOOL_NAME: &str = "alphafix";

    /// Configuration for one run of the tool
    pub struct ToolConfig {
        /// Name of the tool (for the logging directory)
        pub tool_name: String,
        /// Directory that receives `logs/`
        pub log_root: PathBuf,
        /// Whether to mirror output into a log file
        pub enable_logging: bool,
        pub format: ReportFormat,
        pub codemod: CodemodConfig,
    }

    impl ToolConfig {
        pub fn from_args(args: &Args) -> Result<Self> {
            let codemod = args.config()?;
            Ok(ToolConfig {
                tool_name: TOOL_NAME.to_string(),
                log_root: codemod.root.clone(),
                enable_logging: args.log,
                format: args.format,
                codemod,
            })
        }
    }

    /// Text report: header, one root-relative path per changed file, marker
    pub fn report_lines(report: &TreeReport) -> Vec<String> {
        let header = if report.dry_run { "Would modify files:" } else { "Modified files:" };
        let mut lines = vec![header.to_string()];
        lines.extend(report.changed_paths().into_iter().map(str::to_string));
        lines.push("Done.".to_string());
        lines
    }

    pub fn print_report(report: &TreeReport, format: ReportFormat, logger: &mut ToolLogger) -> Result<()> {
        match format {
            ReportFormat::Text => {
                for line in report_lines(report) {
                    logger.log(&line);
                }
            }
            ReportFormat::Json => {
                let json = serde_json::to_string_pretty(report)?;
                logger.log(&json);
            }
        }
        Ok(())
    }

    /// Run the codemod with logging and reporting
    pub fn run_tool(config: ToolConfig) -> Result<TreeReport> {
        let mut logger = if config.enable_logging {
            ToolLogger::new(&config.tool_name, &config.log_root)
        } else {
            ToolLogger::new_disabled()
        };

        logger.log_silent(&format!("Entering directory '{}'", config.codemod.root.display()));
        if config.codemod.dry_run {
            logger.log_silent("DRY RUN MODE: Will not modify files");
        }

        let report = process_tree(&config.codemod, &mut logger)?;
        print_report(&report, config.format, &mut logger)?;

        if logger.is_file_logging() {
            logger.finalize(&report.summary());
        }

        Ok(report)
    }
}
