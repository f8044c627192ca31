//! Glyph decoding (`glyphscan scan ...`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use glyphscan::{CatalogRegistry, Recognizer, RecognizerConfig};

use crate::cli::utils::{read_input, resolve_catalog, write_lines};

/// Arguments for `glyphscan scan`.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Glyph file to decode (`-` for stdin).
    #[arg(default_value = "./numbers.txt")]
    pub file: PathBuf,
    /// Rows per glyph line [default: the catalog's glyph height, else 4].
    #[arg(long)]
    pub height: Option<usize>,
    /// Character emitted for glyphs missing from the catalog.
    #[arg(long, default_value_t = 'X')]
    pub fallback: char,
    /// Drop unrecognised glyphs instead of emitting the fallback.
    #[arg(long, conflicts_with = "fallback")]
    pub no_fallback: bool,
    /// Built-in catalog name.
    #[arg(long, default_value = CatalogRegistry::DEFAULT)]
    pub catalog: String,
    /// JSON catalog file used instead of a built-in catalog.
    #[arg(long = "catalog-file", conflicts_with = "catalog")]
    pub catalog_file: Option<PathBuf>,
    /// Output file (`-` for stdout).
    #[arg(short = 'o', long = "output", default_value = "-")]
    pub output: PathBuf,
}

/// Execute a scan command.
pub fn handle(args: ScanArgs) -> Result<()> {
    let catalog = resolve_catalog(&args.catalog, args.catalog_file.as_deref())?;
    let height = args
        .height
        .or_else(|| catalog.uniform_height())
        .unwrap_or(RecognizerConfig::default().height);
    let config = RecognizerConfig {
        height,
        fallback: (!args.no_fallback).then_some(args.fallback),
    };
    let recognizer = Recognizer::with_catalog(config, &catalog)?;

    let text = read_input(&args.file)?;
    let lines = recognizer
        .recognize_text(&text)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;
    write_lines(&args.output, &lines)
}
