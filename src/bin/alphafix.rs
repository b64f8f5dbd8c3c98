// Copyright (C) Brian G. Milnes 2025

//! Fix: Replace deprecated `.withOpacity(x)` calls with `.withAlpha((x * 255).round())`
//!
//! Walks <root>/lib for .dart files and rewrites every call site in place.
//! Files with no call sites are never written.
//!
//! Binary: alphafix

use anyhow::Result;
use clap::Parser;
use alphafix::{run_tool, Args, ToolConfig};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = ToolConfig::from_args(&args)?;
    run_tool(config)?;
    Ok(())
}
