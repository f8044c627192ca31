use std::fmt;

/// Two-dimensional character grid holding one glyph.
///
/// Rows are stored as `char` vectors so columns can be addressed directly.
/// Two images are equal only when every row matches char-for-char, which
/// makes comparison whitespace- and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphImage {
    rows: Vec<Vec<char>>,
}

impl GlyphImage {
    pub fn new(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }

    /// Build an image from its canonical text form (rows separated by `\n`).
    pub fn parse(shape: &str) -> Self {
        Self {
            rows: shape.split('\n').map(|row| row.chars().collect()).collect(),
        }
    }

    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        Self {
            rows: rows.iter().map(|row| row.as_ref().chars().collect()).collect(),
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Widest row of the image; extracted glyphs have uniform width.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// True when the image holds no ink at all.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().flatten().all(|ch| ch.is_whitespace())
    }
}

impl fmt::Display for GlyphImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
