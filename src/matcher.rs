use crate::catalog::GlyphCatalog;
use crate::grid::GlyphImage;

/// Turns one extracted glyph image into a character.
pub trait GlyphClassifier {
    fn name(&self) -> &'static str;
    /// `None` when the image is not recognised.
    fn classify(&self, image: &GlyphImage) -> Option<char>;
}

/// Exact grid comparison against a catalog; the first equal entry wins.
#[derive(Debug, Clone, Copy)]
pub struct ExactMatcher<'a> {
    catalog: &'a GlyphCatalog,
}

impl<'a> ExactMatcher<'a> {
    pub fn new(catalog: &'a GlyphCatalog) -> Self {
        Self { catalog }
    }
}

impl GlyphClassifier for ExactMatcher<'_> {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn classify(&self, image: &GlyphImage) -> Option<char> {
        self.catalog
            .entries()
            .iter()
            .find(|(_, shape)| shape == image)
            .map(|(ch, _)| *ch)
    }
}
