//! Column segmentation: find which column spans of a block hold a glyph.

use crate::grid::GlyphImage;

/// Character treated as empty paper.
pub const BLANK: char = ' ';

/// Half-open column span `[start, start + width)` holding one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRange {
    pub start: usize,
    pub width: usize,
}

impl GlyphRange {
    pub fn end(&self) -> usize {
        self.start + self.width
    }

    pub fn contains(&self, col: usize) -> bool {
        col >= self.start && col < self.end()
    }
}

/// Per-column ink signal: `true` where any row has a non-blank char.
///
/// Rows shorter than the widest row are blank past their end.
pub fn column_signal<R: AsRef<[char]>>(rows: &[R]) -> Vec<bool> {
    let width = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
    (0..width)
        .map(|col| {
            rows.iter()
                .any(|row| row.as_ref().get(col).is_some_and(|&ch| ch != BLANK))
        })
        .collect()
}

/// Collapse a boolean signal into the maximal runs of `true`, left to right.
pub fn find_ranges(signal: &[bool]) -> Vec<GlyphRange> {
    let mut ranges = Vec::new();
    let Some(&first) = signal.first() else {
        return ranges;
    };
    let mut current = first;
    let mut start = 0usize;

    for (i, &value) in signal.iter().enumerate().skip(1) {
        if value != current {
            if current {
                ranges.push(GlyphRange {
                    start,
                    width: i - start,
                });
            }
            current = value;
            start = i;
        }
    }
    if current {
        ranges.push(GlyphRange {
            start,
            width: signal.len() - start,
        });
    }
    ranges
}

/// Slice the sub-grid covered by `range` out of every row.
///
/// # Panics
/// When the range reaches past any row. Ranges come from the signal of the
/// same padded rows, so this only fires on a broken caller.
pub fn extract<R: AsRef<[char]>>(rows: &[R], range: GlyphRange) -> GlyphImage {
    let sliced = rows
        .iter()
        .map(|row| {
            let row = row.as_ref();
            assert!(
                range.end() <= row.len(),
                "glyph range {}..{} exceeds row width {}",
                range.start,
                range.end(),
                row.len()
            );
            row[range.start..range.end()].to_vec()
        })
        .collect();
    GlyphImage::new(sliced)
}
