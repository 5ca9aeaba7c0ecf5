//! Page surface, document model and the assembler
//!
//! A [`Page`] is a display list: renderers append draw operations to it in
//! page millimetres, and the PDF backend replays them. Keeping the list around
//! (instead of writing PDF operators directly) is what lets tests ask "what
//! was drawn where" without parsing PDF.

use tracing::{debug, warn};

use crate::image::Image;
use crate::layout::{BoundingBox, Color, PageConfig, TextAlign, TextStyle};
use crate::sanitize::sanitize;
use crate::section::{Section, SectionKind};
use crate::sections::{render_section, RenderContext};
use crate::{ExportConfig, ExportError};

/// Outline of a stroked shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    /// Line width in millimetres
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// A single drawing operation, coordinates in millimetres from the top-left
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A sanitized text run; `y` is the baseline
    Text {
        text: String,
        x: f64,
        y: f64,
        style: TextStyle,
        align: TextAlign,
    },
    Rect {
        bounds: BoundingBox,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Stroke,
    },
    /// An image from [`Document::images`]
    Image { image: usize, bounds: BoundingBox },
}

/// One output page and everything drawn on it
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    kind: SectionKind,
    width: f64,
    height: f64,
    ops: Vec<DrawOp>,
}

impl Page {
    pub fn new(kind: SectionKind, config: &PageConfig) -> Self {
        Self {
            kind,
            width: config.width,
            height: config.height,
            ops: Vec::new(),
        }
    }

    /// Kind of the section this page was rendered from
    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Draw a single line of text. The text is sanitized here, so no caller
    /// can put an unsupported glyph on the page. Blank text draws nothing.
    pub fn text(&mut self, text: &str, x: f64, y: f64, style: TextStyle, align: TextAlign) {
        let text = sanitize(text);
        if text.is_empty() {
            return;
        }
        self.ops.push(DrawOp::Text {
            text,
            x,
            y,
            style,
            align,
        });
    }

    pub fn rect(&mut self, bounds: BoundingBox, fill: Option<Color>, stroke: Option<Stroke>) {
        self.ops.push(DrawOp::Rect {
            bounds,
            fill,
            stroke,
        });
    }

    pub fn fill_rect(&mut self, bounds: BoundingBox, color: Color) {
        self.rect(bounds, Some(color), None);
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke) {
        self.ops.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        });
    }

    pub fn image(&mut self, image: usize, bounds: BoundingBox) {
        self.ops.push(DrawOp::Image { image, bounds });
    }

    /// Text runs in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Filled and stroked rectangles in draw order
    pub fn rects(&self) -> Vec<(&BoundingBox, Option<Color>)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect { bounds, fill, .. } => Some((bounds, *fill)),
                _ => None,
            })
            .collect()
    }

    /// Find the first text op with exactly this content
    pub fn find_text(&self, needle: &str) -> Option<&DrawOp> {
        self.ops
            .iter()
            .find(|op| matches!(op, DrawOp::Text { text, .. } if text == needle))
    }
}

/// A finished, paginated document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub pages: Vec<Page>,
    /// Images referenced by [`DrawOp::Image`]
    pub images: Vec<Image>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Assemble sections into a document with the default configuration
///
/// ```rust
/// use investor_summary::{assemble, Section};
/// use investor_summary::section::Hero;
///
/// let doc = assemble(&[Section::Hero(Hero {
///     brand: "Acme".into(),
///     headline: "Hello".into(),
///     headline_highlight: "World".into(),
///     taglines: vec![],
/// })]);
/// assert_eq!(doc.page_count(), 1);
/// ```
pub fn assemble(sections: &[Section]) -> Document {
    build(sections, None, &ExportConfig::default())
}

/// Assemble sections with a mascot image and custom configuration
///
/// A mascot that fails to decode is logged and left out. In strict mode every
/// section is validated before anything is drawn.
pub fn assemble_with_config(
    sections: &[Section],
    mascot: Option<&[u8]>,
    config: &ExportConfig,
) -> Result<Document, ExportError> {
    if config.strict {
        for (index, section) in sections.iter().enumerate() {
            section
                .validate()
                .map_err(|source| ExportError::Validation { index, source })?;
        }
    }

    let image = mascot.and_then(|bytes| match Image::decode(bytes) {
        Ok(image) => Some(image),
        Err(err) => {
            warn!(error = %err, "mascot image could not be decoded, continuing without it");
            None
        }
    });

    Ok(build(sections, image, config))
}

fn build(sections: &[Section], mascot: Option<Image>, config: &ExportConfig) -> Document {
    let palette = config.stylesheet.palette();
    let mut doc = Document::default();
    let mascot = mascot.map(|image| {
        doc.images.push(image);
        doc.images.len() - 1
    });

    let total = sections.len();
    for (index, section) in sections.iter().enumerate() {
        let mut page = Page::new(section.kind(), &config.page);
        {
            let mut ctx = RenderContext::new(&mut page, &palette, &config.page)
                .with_mascot(mascot.map(|id| (id, &doc.images[id])));
            render_section(&mut ctx, section);
        }
        draw_footer(&mut page, &config.page, &palette, &config.copyright, index, total);
        debug!(
            page = index + 1,
            kind = %section.kind(),
            ops = page.ops().len(),
            "rendered page"
        );
        doc.pages.push(page);
    }

    doc
}

/// Text of the right-hand footer for page `index` of `total`
pub fn page_label(index: usize, total: usize) -> String {
    format!("Page {} of {}", index + 1, total)
}

fn draw_footer(
    page: &mut Page,
    config: &PageConfig,
    palette: &crate::stylesheet::Palette,
    copyright: &str,
    index: usize,
    total: usize,
) {
    let y = config.height - config.footer_offset;
    let style = TextStyle::regular(8.0, palette.gray);
    page.text(copyright, config.margin, y, style, TextAlign::Left);
    page.text(
        &page_label(index, total),
        config.width - config.margin,
        y,
        style,
        TextAlign::Right,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{Closing, Hero};

    fn hero(brand: &str) -> Section {
        Section::Hero(Hero {
            brand: brand.to_string(),
            headline: "Hello".to_string(),
            headline_highlight: "World".to_string(),
            taglines: vec!["a".to_string(), "b".to_string()],
        })
    }

    fn closing() -> Section {
        Section::Closing(Closing {
            title: "Thanks".to_string(),
            philosophy: "p".to_string(),
            pitch: "q".to_string(),
            brand: "Acme".to_string(),
            call_to_action: "Talk to us".to_string(),
            contact_prompt: "Reach out".to_string(),
            email: "hi@acme.test".to_string(),
        })
    }

    #[test]
    fn test_page_text_is_sanitized() {
        let mut page = Page::new(SectionKind::Hero, &PageConfig::default());
        let style = TextStyle::regular(10.0, Color::BLACK);
        page.text("  a → b  ", 0.0, 0.0, style, TextAlign::Left);
        page.text("   ", 0.0, 0.0, style, TextAlign::Left);
        assert_eq!(page.texts(), vec!["a -> b"]);
    }

    #[test]
    fn test_page_label() {
        assert_eq!(page_label(0, 1), "Page 1 of 1");
        assert_eq!(page_label(4, 7), "Page 5 of 7");
    }

    #[test]
    fn test_one_page_per_section() {
        let doc = assemble(&[hero("A"), closing(), hero("B")]);
        assert_eq!(doc.page_count(), 3);
        let kinds: Vec<_> = doc.pages.iter().map(Page::kind).collect();
        assert_eq!(
            kinds,
            vec![SectionKind::Hero, SectionKind::Closing, SectionKind::Hero]
        );
    }

    #[test]
    fn test_empty_input_yields_empty_document() {
        let doc = assemble(&[]);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_footer_on_every_page() {
        let doc = assemble(&[hero("A"), closing()]);
        let config = PageConfig::default();
        for (i, page) in doc.pages.iter().enumerate() {
            let label = page_label(i, 2);
            match page.find_text(&label) {
                Some(DrawOp::Text { x, y, align, .. }) => {
                    assert_eq!(*x, config.width - config.margin);
                    assert_eq!(*y, config.height - config.footer_offset);
                    assert_eq!(*align, TextAlign::Right);
                }
                other => panic!("missing footer on page {}: {:?}", i + 1, other),
            }
        }
    }

    #[test]
    fn test_strict_mode_rejects_blank_field() {
        let mut bad = hero("A");
        if let Section::Hero(h) = &mut bad {
            h.brand.clear();
        }
        let config = ExportConfig::new().with_strict(true);
        let err = assemble_with_config(&[hero("ok"), bad], None, &config).unwrap_err();
        assert!(matches!(err, ExportError::Validation { index: 1, .. }));
    }

    #[test]
    fn test_lenient_mode_renders_blank_field() {
        let mut bad = hero("A");
        if let Section::Hero(h) = &mut bad {
            h.brand.clear();
        }
        let doc = assemble_with_config(&[bad], None, &ExportConfig::default()).unwrap();
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_broken_mascot_is_skipped() {
        let mascot = b"definitely not png".as_slice();
        let doc =
            assemble_with_config(&[hero("A")], Some(mascot), &ExportConfig::default()).unwrap();
        assert!(doc.images.is_empty());
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_valid_mascot_is_registered() {
        let png = crate::image::tests::rgb_png(1, 1, vec![1, 2, 3]);
        let doc = assemble_with_config(&[hero("A")], Some(png.as_slice()), &ExportConfig::default())
            .unwrap();
        assert_eq!(doc.images.len(), 1);
    }
}
