//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::core::expand::expand;
use crate::core::resolve::SearchContext;

/// incflat - recursively flatten #include directives into one text stream.
#[derive(Parser, Debug)]
#[command(name = "incflat")]
#[command(
    author,
    version,
    about,
    long_about = r#"incflat reads a source file, replaces every #include directive with the
fully expanded contents of its target, and writes the flattened result to the
output file.

Two directive forms are recognized, one per line:
- #include "X"  resolved relative to the including file first, then via -I
- #include <X>  resolved only via the -I search directories

Lines that are not directives are copied through verbatim. An include target
that cannot be resolved aborts the whole run with a diagnostic naming the
target, the file containing the directive, and its line number.

Examples:
    incflat main.cpp main.flat.cpp
    incflat src/a.cpp build/a.in -I include1 -I include2
"#
)]
pub struct Cli {
    /// Source file to expand.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination file for the flattened output.
    #[arg(
        value_name = "OUTPUT",
        long_help = "Destination file for the flattened output.\n\n\
The file is created (or truncated) before expansion starts. If expansion\n\
fails partway, the file holds the partial prefix written before the failing\n\
directive; treat it as discardable on a nonzero exit."
    )]
    pub output: PathBuf,

    /// Include search directory (repeatable, probed in order).
    #[arg(
        short = 'I',
        long = "include-dir",
        value_name = "DIR",
        long_help = "Add a directory to the include search list.\n\n\
Repeat the flag to add more directories. Directories are probed in the order\n\
given and the first one containing the target wins. Angle-bracket includes\n\
use only this list; quoted includes fall back to it when the target is not\n\
found next to the including file."
    )]
    pub include_dirs: Vec<PathBuf>,

    /// Quiet mode (minimal output).
    #[arg(
        short,
        long,
        long_help = "Reduce non-essential output. Diagnostics for failed expansions are\n\
still printed to stderr."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Enable more detailed diagnostics on stderr, such as a completion note\n\
with the input and output paths."
    )]
    pub verbose: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let input = File::open(&cli.input)
        .with_context(|| format!("Failed to open input file: {:?}", cli.input))?;
    let reader = BufReader::new(input);

    let output = File::create(&cli.output)
        .with_context(|| format!("Failed to create output file: {:?}", cli.output))?;
    let mut writer = BufWriter::new(output);

    let ctx = SearchContext::new(cli.include_dirs);

    expand(reader, &mut writer, &cli.input, &ctx)?;
    writer.flush().context("Failed to flush output file")?;

    if cli.verbose && !cli.quiet {
        eprintln!(
            "expanded {} into {}",
            cli.input.display(),
            cli.output.display()
        );
    }

    Ok(())
}
