use crate::grid::GlyphImage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("glyph catalog is empty")]
    Empty,
    #[error("glyph '{0}' has a blank shape")]
    BlankShape(char),
    #[error("glyph '{0}' is registered more than once")]
    Duplicate(char),
    #[error("glyph '{glyph}' is {rows} rows tall, expected {expected}")]
    RaggedHeight {
        glyph: char,
        rows: usize,
        expected: usize,
    },
    #[error("unknown catalog '{0}'")]
    Unknown(String),
    #[error("failed to read catalog {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Known glyph shapes, scanned in registration order.
#[derive(Debug, Clone)]
pub struct GlyphCatalog {
    entries: Vec<(char, GlyphImage)>,
}

impl GlyphCatalog {
    /// Build a catalog from `(char, shape)` pairs, rows of each shape joined by `\n`.
    pub fn from_shapes<S: AsRef<str>>(shapes: &[(char, S)]) -> Result<Self, CatalogError> {
        Self::from_images(
            shapes
                .iter()
                .map(|(ch, shape)| (*ch, GlyphImage::parse(shape.as_ref())))
                .collect(),
        )
    }

    pub fn from_images(entries: Vec<(char, GlyphImage)>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, (ch, image)) in entries.iter().enumerate() {
            if image.is_blank() {
                return Err(CatalogError::BlankShape(*ch));
            }
            if entries[..i].iter().any(|(other, _)| other == ch) {
                return Err(CatalogError::Duplicate(*ch));
            }
        }
        Ok(Self { entries })
    }

    /// Load a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let file: CatalogFile = serde_json::from_str(&raw).map_err(|source| CatalogError::Json {
            path: path.display().to_string(),
            source,
        })?;
        file.into_catalog()
    }

    pub fn entries(&self) -> &[(char, GlyphImage)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Heights of all glyphs when they agree, `None` for a mixed catalog.
    pub fn uniform_height(&self) -> Option<usize> {
        let first = self.entries.first()?.1.height();
        self.entries
            .iter()
            .all(|(_, image)| image.height() == first)
            .then_some(first)
    }

    pub fn get(&self, ch: char) -> Option<&GlyphImage> {
        self.entries
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|(_, image)| image)
    }
}

/// On-disk JSON layout of a custom catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
    pub glyphs: Vec<GlyphEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlyphEntry {
    #[serde(rename = "char")]
    pub ch: char,
    pub rows: Vec<String>,
}

impl CatalogFile {
    /// File layout of an existing catalog, glyphs in match order.
    pub fn from_catalog(catalog: &GlyphCatalog) -> Self {
        Self {
            height: catalog.uniform_height(),
            glyphs: catalog
                .entries()
                .iter()
                .map(|(ch, image)| GlyphEntry {
                    ch: *ch,
                    rows: image.rows().iter().map(|row| row.iter().collect()).collect(),
                })
                .collect(),
        }
    }

    pub fn into_catalog(self) -> Result<GlyphCatalog, CatalogError> {
        if let Some(expected) = self.height {
            if let Some(bad) = self.glyphs.iter().find(|g| g.rows.len() != expected) {
                return Err(CatalogError::RaggedHeight {
                    glyph: bad.ch,
                    rows: bad.rows.len(),
                    expected,
                });
            }
        }
        GlyphCatalog::from_images(
            self.glyphs
                .into_iter()
                .map(|g| (g.ch, GlyphImage::from_rows(&g.rows)))
                .collect(),
        )
    }
}

/// Catalog compiled into the binary.
#[derive(Debug, Clone)]
pub struct BuiltinCatalog {
    pub name: &'static str,
    pub description: &'static str,
    pub height: usize,
    pub glyphs: &'static [(char, &'static str)],
}

impl BuiltinCatalog {
    pub fn build(&self) -> Result<GlyphCatalog, CatalogError> {
        GlyphCatalog::from_shapes(self.glyphs)
    }
}

/// Registry of built-in catalogs recognised by the CLI.
pub struct CatalogRegistry;

impl CatalogRegistry {
    pub const DEFAULT: &'static str = "four-line-digits";

    pub fn list() -> Vec<&'static BuiltinCatalog> {
        vec![&FOUR_LINE_DIGITS]
    }

    /// Resolve a built-in catalog by name (case-insensitive).
    pub fn get(name: &str) -> Result<&'static BuiltinCatalog, CatalogError> {
        Self::list()
            .into_iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CatalogError::Unknown(name.to_string()))
    }
}

static FOUR_LINE_DIGITS_GLYPHS: &[(char, &str)] = &[
    ('1', "|\n|\n|\n|"),
    ('2', "---\n _|\n|  \n---"),
    ('3', "---\n / \n \\ \n-- "),
    ('4', "|   |\n|___|\n    |\n    |"),
    ('5', "-----\n|___ \n    |\n____|"),
];

static FOUR_LINE_DIGITS: BuiltinCatalog = BuiltinCatalog {
    name: "four-line-digits",
    description: "Digits 1-5 drawn with | - _ / \\ over four rows",
    height: 4,
    glyphs: FOUR_LINE_DIGITS_GLYPHS,
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn builtin_digits_are_well_formed() {
        let catalog = CatalogRegistry::get(CatalogRegistry::DEFAULT)
            .and_then(BuiltinCatalog::build)
            .unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.uniform_height(), Some(4));
        assert_eq!(catalog.get('4').map(GlyphImage::width), Some(5));
        let order: Vec<char> = catalog.entries().iter().map(|(c, _)| *c).collect();
        assert_eq!(order, vec!['1', '2', '3', '4', '5']);
    }

    #[test]
    fn registry_lookup_ignores_case() {
        assert!(CatalogRegistry::get("FOUR-LINE-DIGITS").is_ok());
        assert!(matches!(
            CatalogRegistry::get("roman"),
            Err(CatalogError::Unknown(name)) if name == "roman"
        ));
    }

    #[test]
    fn rejects_empty_blank_and_duplicate() {
        let none: [(char, &str); 0] = [];
        assert!(matches!(
            GlyphCatalog::from_shapes(&none),
            Err(CatalogError::Empty)
        ));
        assert!(matches!(
            GlyphCatalog::from_shapes(&[('1', "|"), ('7', "")]),
            Err(CatalogError::BlankShape('7'))
        ));
        assert!(matches!(
            GlyphCatalog::from_shapes(&[('1', "  \n  ")]),
            Err(CatalogError::BlankShape('1'))
        ));
        assert!(matches!(
            GlyphCatalog::from_shapes(&[('1', "|"), ('1', "||")]),
            Err(CatalogError::Duplicate('1'))
        ));
    }

    #[test]
    fn uniform_height_detects_mixed_catalogs() {
        let catalog = GlyphCatalog::from_shapes(&[('1', "|\n|"), ('-', "-")]).unwrap();
        assert_eq!(catalog.uniform_height(), None);
    }

    #[test]
    fn json_catalog_keeps_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"height": 2, "glyphs": [
                {{"char": "7", "rows": ["--", " /"]}},
                {{"char": "1", "rows": ["|", "|"]}}
            ]}}"#
        )
        .unwrap();
        let catalog = GlyphCatalog::load(file.path()).unwrap();
        let order: Vec<char> = catalog.entries().iter().map(|(c, _)| *c).collect();
        assert_eq!(order, vec!['7', '1']);
        assert_eq!(catalog.get('7'), Some(&GlyphImage::parse("--\n /")));
    }

    #[test]
    fn json_catalog_checks_declared_height() {
        let file = CatalogFile {
            height: Some(3),
            glyphs: vec![GlyphEntry {
                ch: '1',
                rows: vec!["|".into(), "|".into()],
            }],
        };
        assert!(matches!(
            file.into_catalog(),
            Err(CatalogError::RaggedHeight {
                glyph: '1',
                rows: 2,
                expected: 3
            })
        ));
    }

    #[test]
    fn written_catalog_reads_back_identically() {
        let catalog = CatalogRegistry::get(CatalogRegistry::DEFAULT)
            .and_then(BuiltinCatalog::build)
            .unwrap();
        let json = serde_json::to_string_pretty(&CatalogFile::from_catalog(&catalog)).unwrap();
        assert!(json.contains("\"height\": 4"));
        assert!(json.contains(r#""-- ""#), "trailing blanks must survive: {json}");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        let reloaded = GlyphCatalog::load(file.path()).unwrap();
        assert_eq!(reloaded.entries(), catalog.entries());
    }

    #[test]
    fn mixed_height_catalog_omits_height() {
        let catalog = GlyphCatalog::from_shapes(&[('1', "|\n|"), ('-', "-")]).unwrap();
        let json = serde_json::to_string(&CatalogFile::from_catalog(&catalog)).unwrap();
        assert!(!json.contains("height"), "{json}");
    }

    #[test]
    fn missing_catalog_file_is_io_error() {
        let err = GlyphCatalog::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { ref path, .. } if path.ends_with("here.json")));
        assert!(err.to_string().contains("failed to read catalog"));
    }

    #[test]
    fn json_catalog_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"glyphs\": 3}}").unwrap();
        assert!(matches!(
            GlyphCatalog::load(file.path()),
            Err(CatalogError::Json { .. })
        ));
    }
}
