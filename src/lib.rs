//! Recognition of digits drawn as fixed-height ASCII-art glyphs.

mod catalog;
mod document;
mod grid;
mod matcher;
mod recognizer;
mod segment;

pub use catalog::{
    BuiltinCatalog, CatalogError, CatalogFile, CatalogRegistry, GlyphCatalog, GlyphEntry,
};
pub use document::{
    RecognizeError, Recognizer, TAB_WIDTH, expand_tabs, group_blocks, normalize_lines,
};
pub use grid::GlyphImage;
pub use matcher::{ExactMatcher, GlyphClassifier};
pub use recognizer::{BlockRecognizer, ConfigError, RecognizerConfig, TextBlock};
pub use segment::{BLANK, GlyphRange, column_signal, extract, find_ranges};

/// Decodes `text` with exact matching against `catalog`.
pub fn recognize_text(
    config: RecognizerConfig,
    catalog: &GlyphCatalog,
    text: &str,
) -> anyhow::Result<Vec<String>> {
    let recognizer = Recognizer::with_catalog(config, catalog)?;
    Ok(recognizer.recognize_text(text)?)
}
