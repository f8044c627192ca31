//! Whole-document recognition: normalize lines, group them into blocks, and
//! decode each block in input order.

use crate::catalog::GlyphCatalog;
use crate::matcher::{ExactMatcher, GlyphClassifier};
use crate::recognizer::{BlockRecognizer, ConfigError, RecognizerConfig, TextBlock};
use log::info;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Tab stops sit on every fourth column.
pub const TAB_WIDTH: usize = 4;

#[derive(Debug, Error)]
pub enum RecognizeError {
    #[error("the number of lines with content must be a multiple of {height} (found {lines})")]
    LineCount { lines: usize, height: usize },
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Replace each tab with spaces up to the next tab stop.
pub fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut col = 0usize;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - col % TAB_WIDTH;
            out.extend(std::iter::repeat_n(' ', pad));
            col += pad;
        } else {
            out.push(ch);
            col += 1;
        }
    }
    out
}

/// Split on `\n`, `\r\n` and lone `\r` line breaks.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// Expand tabs and drop empty lines. Whitespace-only lines are kept.
pub fn normalize_lines(text: &str) -> Vec<String> {
    split_lines(text)
        .map(expand_tabs)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Split lines into consecutive blocks of `height` rows, each padded to its
/// own longest line.
pub fn group_blocks<S: AsRef<str>>(
    lines: &[S],
    height: usize,
) -> Result<Vec<TextBlock>, RecognizeError> {
    if height == 0 || lines.len() % height != 0 {
        return Err(RecognizeError::LineCount {
            lines: lines.len(),
            height,
        });
    }
    Ok(lines.chunks(height).map(TextBlock::from_lines).collect())
}

/// Full pipeline bound to one configuration and classifier.
#[derive(Debug, Clone)]
pub struct Recognizer<C> {
    height: usize,
    blocks: BlockRecognizer<C>,
}

impl<'a> Recognizer<ExactMatcher<'a>> {
    /// Exact matching against `catalog`; every glyph must be `config.height` rows.
    pub fn with_catalog(
        config: RecognizerConfig,
        catalog: &'a GlyphCatalog,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if let Some((glyph, image)) = catalog
            .entries()
            .iter()
            .find(|(_, image)| image.height() != config.height)
        {
            return Err(ConfigError::HeightMismatch {
                glyph: *glyph,
                rows: image.height(),
                height: config.height,
            });
        }
        Self::with_classifier(config, ExactMatcher::new(catalog))
    }
}

impl<C: GlyphClassifier> Recognizer<C> {
    pub fn with_classifier(config: RecognizerConfig, classifier: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            height: config.height,
            blocks: BlockRecognizer::new(classifier, config.fallback),
        })
    }

    /// Decode every block of `text`, one output line per block.
    ///
    /// The line count is checked before any block is decoded.
    pub fn recognize_text(&self, text: &str) -> Result<Vec<String>, RecognizeError> {
        let lines = normalize_lines(text);
        let blocks = group_blocks(&lines, self.height)?;
        info!(
            "recognizing {} block(s) of {} rows with {} matcher",
            blocks.len(),
            self.height,
            self.blocks.classifier().name()
        );
        Ok(blocks
            .iter()
            .map(|block| self.blocks.recognize(block))
            .collect())
    }

    pub fn recognize_file(&self, path: &Path) -> Result<Vec<String>, RecognizeError> {
        let text = fs::read_to_string(path).map_err(|source| RecognizeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.recognize_text(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuiltinCatalog, CatalogRegistry};
    use crate::grid::GlyphImage;
    use pretty_assertions::assert_eq;

    const FORTY_FIVE_X: &str = "\
|   |  -----  \\ /
|___|  |___    X
    |      |  / \\
    |  ____|
";

    fn digits() -> GlyphCatalog {
        CatalogRegistry::get(CatalogRegistry::DEFAULT)
            .and_then(BuiltinCatalog::build)
            .unwrap()
    }

    #[test]
    fn tabs_expand_to_next_stop() {
        assert_eq!(expand_tabs("\t|"), "    |");
        assert_eq!(expand_tabs("ab\tc"), "ab  c");
        assert_eq!(expand_tabs("abcd\t|"), "abcd    |");
        assert_eq!(expand_tabs("|\t\t|"), "|       |");
    }

    #[test]
    fn normalize_drops_only_empty_lines() {
        let lines = normalize_lines("|\n\n  \r\n\t|\n");
        assert_eq!(lines, vec!["|", "  ", "    |"]);
    }

    #[test]
    fn normalize_splits_on_lone_carriage_returns() {
        assert_eq!(normalize_lines("|\r|\r|\r|\r"), vec!["|"; 4]);
        assert_eq!(normalize_lines("a\r\nb\rc\n\r\nd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn carriage_return_only_file_decodes() {
        let catalog = digits();
        let recognizer =
            Recognizer::with_catalog(RecognizerConfig::default(), &catalog).unwrap();
        assert_eq!(recognizer.recognize_text("|\r|\r|\r|\r").unwrap(), vec!["1"]);
    }

    #[test]
    fn grouping_requires_exact_multiple() {
        let lines = vec!["|"; 5];
        let err = group_blocks(&lines, 4).unwrap_err();
        assert!(matches!(err, RecognizeError::LineCount { lines: 5, height: 4 }));
        assert!(err.to_string().contains("multiple of 4"));

        for height in 1..=6 {
            let result = group_blocks(&lines, height);
            assert_eq!(result.is_ok(), 5 % height == 0, "height {height}");
        }
    }

    #[test]
    fn grouping_pads_each_block_independently() {
        let lines = ["|", "|", "---", "-", "|", "|", "|", "|"];
        let blocks = group_blocks(&lines, 4).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].width(), 3);
        assert_eq!(blocks[1].width(), 1);
    }

    #[test]
    fn recognizes_multiple_blocks_in_order() {
        let catalog = digits();
        let recognizer =
            Recognizer::with_catalog(RecognizerConfig::default(), &catalog).unwrap();
        let text = format!("{FORTY_FIVE_X}\n{FORTY_FIVE_X}");
        assert_eq!(recognizer.recognize_text(&text).unwrap(), vec!["45X", "45X"]);
    }

    #[test]
    fn bad_line_count_fails_before_recognition() {
        let catalog = digits();
        let recognizer =
            Recognizer::with_catalog(RecognizerConfig::default(), &catalog).unwrap();
        let err = recognizer.recognize_text("|\n|\n|\n|\n|\n").unwrap_err();
        assert!(matches!(err, RecognizeError::LineCount { lines: 5, height: 4 }));
    }

    #[test]
    fn catalog_height_must_match_blocks() {
        let catalog = digits();
        let config = RecognizerConfig {
            height: 3,
            fallback: None,
        };
        let err = Recognizer::with_catalog(config, &catalog).unwrap_err();
        assert_eq!(
            err,
            ConfigError::HeightMismatch {
                glyph: '1',
                rows: 4,
                height: 3
            }
        );
    }

    struct Widths;

    impl GlyphClassifier for Widths {
        fn name(&self) -> &'static str {
            "widths"
        }

        fn classify(&self, image: &GlyphImage) -> Option<char> {
            char::from_digit(image.width() as u32, 10)
        }
    }

    #[test]
    fn custom_classifier_plugs_into_pipeline() {
        let config = RecognizerConfig {
            height: 2,
            fallback: None,
        };
        let recognizer = Recognizer::with_classifier(config, Widths).unwrap();
        let lines = recognizer.recognize_text("ab  c\nab  c\n").unwrap();
        assert_eq!(lines, vec!["21"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let catalog = digits();
        let recognizer =
            Recognizer::with_catalog(RecognizerConfig::default(), &catalog).unwrap();
        let err = recognizer
            .recognize_file(Path::new("/definitely/not/here.txt"))
            .unwrap_err();
        assert!(matches!(err, RecognizeError::Io { .. }));
    }
}
