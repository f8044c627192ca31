//! Convenience helpers shared across command handlers.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use glyphscan::{CatalogRegistry, GlyphCatalog};
use log::info;

/// Read a whole glyph file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() != "-" {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut text = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut text)
        .context("failed to read glyphs from stdin")?;
    Ok(text)
}

/// Write decoded lines, each newline-terminated, to a file or to stdout for `-`.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    if path.as_os_str() != "-" {
        return fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()));
    }
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write decoded lines to stdout")
}

/// Load the catalog selected on the command line: a JSON file wins over a
/// built-in name.
pub fn resolve_catalog(name: &str, file: Option<&Path>) -> Result<GlyphCatalog> {
    if let Some(path) = file {
        info!("loading glyph catalog from {}", path.display());
        return GlyphCatalog::load(path)
            .with_context(|| format!("invalid glyph catalog {}", path.display()));
    }
    info!("using built-in glyph catalog '{}'", name);
    let builtin = CatalogRegistry::get(name)?;
    builtin
        .build()
        .with_context(|| format!("built-in catalog '{}' is malformed", builtin.name))
}
