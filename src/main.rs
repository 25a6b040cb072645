//! incflat - A recursive #include flattener
//!
//! incflat provides:
//! - Quoted and angle-bracket #include directive expansion
//! - Ordered include-directory search (-I, repeatable)
//! - Line-numbered diagnostics for unresolved and circular includes

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
