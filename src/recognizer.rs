use crate::grid::GlyphImage;
use crate::matcher::GlyphClassifier;
use crate::segment::{self, BLANK, GlyphRange};
use log::{debug, trace};
use thiserror::Error;

/// One image line: a fixed number of rows padded to a common width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    rows: Vec<Vec<char>>,
}

impl TextBlock {
    /// Right-pad every line with blanks to the longest line of the group.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut rows: Vec<Vec<char>> = lines
            .iter()
            .map(|line| line.as_ref().chars().collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, BLANK);
        }
        Self { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn column_signal(&self) -> Vec<bool> {
        segment::column_signal(&self.rows)
    }

    /// Glyph spans in ascending column order.
    pub fn ranges(&self) -> Vec<GlyphRange> {
        segment::find_ranges(&self.column_signal())
    }

    pub fn extract(&self, range: GlyphRange) -> GlyphImage {
        segment::extract(&self.rows, range)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("block height must be at least 1")]
    ZeroHeight,
    #[error("glyph '{glyph}' is {rows} rows tall but blocks are {height} rows")]
    HeightMismatch {
        glyph: char,
        rows: usize,
        height: usize,
    },
}

/// Settings fixed for a whole recognition run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognizerConfig {
    /// Rows per block.
    pub height: usize,
    /// Emitted when no glyph matches; `None` drops the glyph.
    pub fallback: Option<char>,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            height: 4,
            fallback: Some('X'),
        }
    }
}

impl RecognizerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        Ok(())
    }
}

/// Decodes a single block into one line of text.
#[derive(Debug, Clone)]
pub struct BlockRecognizer<C> {
    classifier: C,
    fallback: Option<char>,
}

impl<C: GlyphClassifier> BlockRecognizer<C> {
    pub fn new(classifier: C, fallback: Option<char>) -> Self {
        Self {
            classifier,
            fallback,
        }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn recognize(&self, block: &TextBlock) -> String {
        let ranges = block.ranges();
        debug!(
            "block {}x{}: {} glyph range(s) {:?}",
            block.height(),
            block.width(),
            ranges.len(),
            ranges
                .iter()
                .map(|r| (r.start, r.width))
                .collect::<Vec<_>>()
        );

        let mut line = String::with_capacity(ranges.len());
        for range in ranges {
            let image = block.extract(range);
            match self.classifier.classify(&image) {
                Some(ch) => line.push(ch),
                None => {
                    trace!(
                        "{}: no glyph for columns {}..{}\n{}",
                        self.classifier.name(),
                        range.start,
                        range.end(),
                        image
                    );
                    if let Some(marker) = self.fallback {
                        line.push(marker);
                    }
                }
            }
        }
        line
    }
}
