//! Command-line interface wiring for the `glyphscan` binary.
//!
//! This module owns the clap definitions and delegates execution to the
//! submodule that implements each command family.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod catalog;
pub mod common;
pub mod scan;
pub mod utils;

use common::LogLevelArg;

/// Parsed CLI entrypoint for the `glyphscan` binary.
#[derive(Parser, Debug)]
#[command(
    name = "glyphscan",
    version,
    about = "Decode digits drawn as ASCII-art glyphs"
)]
pub struct Cli {
    /// Diagnostic verbosity written to stderr.
    #[arg(long, global = true, default_value_t = LogLevelArg::Warn, value_enum)]
    pub log_level: LogLevelArg,

    /// Top-level command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// High-level commands made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a glyph file into text, one line per block.
    Scan(scan::ScanArgs),
    #[command(subcommand)]
    Catalog(catalog::CatalogCommand),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Scan(args) => scan::handle(args),
        Command::Catalog(cmd) => catalog::handle(cmd),
    }
}
