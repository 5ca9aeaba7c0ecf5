//! PDF generation from assembled documents

use std::io::{self, Write};

use flate2::write::ZlibEncoder;
use flate2::Compression;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::document::{Document, DrawOp, Page};
use crate::image::{Image, Pixels};
use crate::layout::{text_width, Color, FontFace, TextAlign, PT_TO_MM};

use super::PdfConfig;

/// Build a PDF file one page at a time
pub struct PdfBuilder {
    config: PdfConfig,
    pdf: Pdf,
    alloc: Ref,
    catalog: Ref,
    page_tree: Ref,
    fonts: [Ref; 4],
    images: Vec<Ref>,
    pages: Vec<Ref>,
}

impl PdfBuilder {
    /// Create a builder with the four Helvetica faces already registered
    pub fn new(config: PdfConfig) -> Self {
        let mut pdf = Pdf::new();
        let mut alloc = Ref::new(1);
        let catalog = alloc.bump();
        let page_tree = alloc.bump();
        let fonts = FontFace::ALL.map(|_| alloc.bump());

        for (face, id) in FontFace::ALL.into_iter().zip(fonts) {
            pdf.type1_font(id)
                .base_font(Name(face.base_font().as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        Self {
            config,
            pdf,
            alloc,
            catalog,
            page_tree,
            fonts,
            images: vec![],
            pages: vec![],
        }
    }

    /// Embed an image XObject; it is addressable as `Im{n}` in insertion order
    pub fn add_image(&mut self, image: &Image) -> io::Result<()> {
        let id = self.alloc.bump();
        let (width, height) = (image.width as i32, image.height as i32);

        match &image.pixels {
            Pixels::Jpeg { data, components } => {
                let mut xobject = self.pdf.image_xobject(id, data);
                xobject.width(width).height(height).bits_per_component(8);
                match *components {
                    1 => xobject.color_space().device_gray(),
                    4 => xobject.color_space().device_cmyk(),
                    _ => xobject.color_space().device_rgb(),
                };
                xobject.filter(Filter::DctDecode);
            }
            Pixels::Raw {
                channels,
                samples,
                alpha,
            } => {
                let mask = match alpha {
                    Some(alpha) => Some((self.alloc.bump(), deflate(alpha)?)),
                    None => None,
                };
                let data = deflate(samples)?;

                let mut xobject = self.pdf.image_xobject(id, &data);
                xobject.width(width).height(height).bits_per_component(8);
                xobject.filter(Filter::FlateDecode);
                if *channels == 1 {
                    xobject.color_space().device_gray();
                } else {
                    xobject.color_space().device_rgb();
                }
                if let Some((mask_id, _)) = &mask {
                    xobject.s_mask(*mask_id);
                }
                xobject.finish();

                if let Some((mask_id, mask_data)) = mask {
                    let mut smask = self.pdf.image_xobject(mask_id, &mask_data);
                    smask.width(width).height(height).bits_per_component(8);
                    smask.color_space().device_gray();
                    smask.filter(Filter::FlateDecode);
                }
            }
        }

        self.images.push(id);
        Ok(())
    }

    /// Serialize one page's draw operations into a content stream
    pub fn add_page(&mut self, page: &Page) -> io::Result<()> {
        let page_id = self.alloc.bump();
        let content_id = self.alloc.bump();
        let height = pt(page.height());

        let mut content = Content::new();
        for op in page.ops() {
            self.draw(&mut content, op, height);
        }
        let mut data = content.finish();
        if self.config.compress {
            data = deflate(&data)?;
        }

        let mut stream = self.pdf.stream(content_id, &data);
        if self.config.compress {
            stream.filter(Filter::FlateDecode);
        }
        stream.finish();

        let mut pdf_page = self.pdf.page(page_id);
        pdf_page
            .media_box(Rect::new(0.0, 0.0, pt(page.width()), height))
            .parent(self.page_tree)
            .contents(content_id);

        let mut resources = pdf_page.resources();
        let mut fonts = resources.fonts();
        for (face, id) in FontFace::ALL.into_iter().zip(self.fonts) {
            fonts.pair(font_name(face), id);
        }
        fonts.finish();

        if !self.images.is_empty() {
            let mut xobjects = resources.x_objects();
            for (index, id) in self.images.iter().enumerate() {
                xobjects.pair(Name(image_name(index).as_bytes()), *id);
            }
            xobjects.finish();
        }
        resources.finish();
        pdf_page.finish();

        self.pages.push(page_id);
        Ok(())
    }

    fn draw(&self, content: &mut Content, op: &DrawOp, height: f32) {
        match op {
            DrawOp::Text {
                text,
                x,
                y,
                style,
                align,
            } => {
                let width = text_width(text, style);
                let left = match align {
                    TextAlign::Left => *x,
                    TextAlign::Center => x - width / 2.0,
                    TextAlign::Right => x - width,
                };
                set_fill(content, style.color);
                content
                    .begin_text()
                    .set_font(font_name(style.face), style.size as f32)
                    .next_line(pt(left), height - pt(*y))
                    .show(Str(&encode_win_ansi(text)))
                    .end_text();
            }
            DrawOp::Rect {
                bounds,
                fill,
                stroke,
            } => {
                if fill.is_none() && stroke.is_none() {
                    return;
                }
                content.save_state();
                if let Some(color) = fill {
                    set_fill(content, *color);
                }
                if let Some(stroke) = stroke {
                    let (r, g, b) = stroke.color.to_unit();
                    content.set_stroke_rgb(r, g, b).set_line_width(pt(stroke.width));
                }
                content.rect(
                    pt(bounds.x),
                    height - pt(bounds.bottom()),
                    pt(bounds.width),
                    pt(bounds.height),
                );
                if fill.is_some() && stroke.is_some() {
                    content.fill_nonzero_and_stroke();
                } else if fill.is_some() {
                    content.fill_nonzero();
                } else {
                    content.stroke();
                }
                content.restore_state();
            }
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
            } => {
                let (r, g, b) = stroke.color.to_unit();
                content
                    .save_state()
                    .set_stroke_rgb(r, g, b)
                    .set_line_width(pt(stroke.width))
                    .move_to(pt(*x1), height - pt(*y1))
                    .line_to(pt(*x2), height - pt(*y2))
                    .stroke()
                    .restore_state();
            }
            DrawOp::Image { image, bounds } => {
                if *image >= self.images.len() {
                    return;
                }
                content
                    .save_state()
                    .transform([
                        pt(bounds.width),
                        0.0,
                        0.0,
                        pt(bounds.height),
                        pt(bounds.x),
                        height - pt(bounds.bottom()),
                    ])
                    .x_object(Name(image_name(*image).as_bytes()))
                    .restore_state();
            }
        }
    }

    /// Write the page tree, catalog and info dictionary and return the file
    pub fn finish(mut self) -> Vec<u8> {
        let count = self.pages.len() as i32;
        self.pdf
            .pages(self.page_tree)
            .kids(self.pages.iter().copied())
            .count(count);
        self.pdf.catalog(self.catalog).pages(self.page_tree);

        let info_id = self.alloc.bump();
        let mut info = self.pdf.document_info(info_id);
        if let Some(title) = &self.config.title {
            info.title(TextStr(title));
        }
        if let Some(author) = &self.config.author {
            info.author(TextStr(author));
        }
        info.creator(TextStr(&self.config.creator));
        info.finish();

        self.pdf.finish()
    }
}

/// Serialize a document to PDF bytes
pub fn render_pdf(document: &Document, config: &PdfConfig) -> io::Result<Vec<u8>> {
    let mut builder = PdfBuilder::new(config.clone());
    for image in &document.images {
        builder.add_image(image)?;
    }
    for page in &document.pages {
        builder.add_page(page)?;
    }
    Ok(builder.finish())
}

fn pt(mm: f64) -> f32 {
    (mm / PT_TO_MM) as f32
}

fn set_fill(content: &mut Content, color: Color) {
    let (r, g, b) = color.to_unit();
    content.set_fill_rgb(r, g, b);
}

fn font_name(face: FontFace) -> Name<'static> {
    Name(match face {
        FontFace::Regular => b"F1",
        FontFace::Bold => b"F2",
        FontFace::Italic => b"F3",
        FontFace::BoldItalic => b"F4",
    })
}

fn image_name(index: usize) -> String {
    format!("Im{}", index)
}

fn deflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Map text to WinAnsiEncoding bytes, `?` for anything outside it
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::assemble;
    use crate::image::tests::rgba_png;
    use crate::layout::{BoundingBox, PageConfig, TextStyle};
    use crate::section::{Closing, Hero, Section, SectionKind};

    fn page_count(pdf: &[u8]) -> usize {
        let needle = b"/Type /Page";
        pdf.windows(needle.len() + 1)
            .filter(|w| &w[..needle.len()] == needle && w[needle.len()] != b's')
            .count()
    }

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack
            .windows(needle.len())
            .any(|w| w == needle.as_bytes())
    }

    fn deck() -> Document {
        assemble(&[
            Section::Hero(Hero {
                brand: "Acme".to_string(),
                headline: "Paperwork".to_string(),
                headline_highlight: "solved".to_string(),
                taglines: vec!["For agents".to_string()],
            }),
            Section::Closing(Closing {
                title: "Thanks".to_string(),
                philosophy: "Less admin".to_string(),
                pitch: "More deals".to_string(),
                brand: "Acme".to_string(),
                call_to_action: "Invest".to_string(),
                contact_prompt: "Questions?".to_string(),
                email: "hi@acme.test".to_string(),
            }),
        ])
    }

    #[test]
    fn test_file_structure() {
        let bytes = render_pdf(&deck(), &PdfConfig::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, "%%EOF"));
        assert_eq!(page_count(&bytes), 2);
    }

    #[test]
    fn test_fonts_registered() {
        let bytes = render_pdf(&deck(), &PdfConfig::default()).unwrap();
        for face in FontFace::ALL {
            assert!(contains(&bytes, &format!("/BaseFont /{}", face.base_font())));
        }
        assert!(contains(&bytes, "/WinAnsiEncoding"));
    }

    #[test]
    fn test_uncompressed_content_shows_text() {
        let bytes = render_pdf(&deck(), &PdfConfig::default()).unwrap();
        assert!(contains(&bytes, "(Page 1 of 2) Tj"));
        assert!(contains(&bytes, "(Page 2 of 2) Tj"));
        assert!(contains(&bytes, "(hi@acme.test) Tj"));
    }

    #[test]
    fn test_compressed_content_hides_text() {
        let config = PdfConfig::new().with_compress(true);
        let bytes = render_pdf(&deck(), &config).unwrap();
        assert!(contains(&bytes, "/FlateDecode"));
        assert!(!contains(&bytes, "Page 1 of 2"));
        assert_eq!(page_count(&bytes), 2);
    }

    #[test]
    fn test_info_dictionary() {
        let config = PdfConfig::new().with_title("Deck").with_author("Finance");
        let bytes = render_pdf(&deck(), &config).unwrap();
        assert!(contains(&bytes, "/Title (Deck)"));
        assert!(contains(&bytes, "/Author (Finance)"));
        assert!(contains(&bytes, "/Creator (investor-summary)"));
    }

    #[test]
    fn test_empty_document_has_no_pages() {
        let bytes = render_pdf(&Document::default(), &PdfConfig::default()).unwrap();
        assert_eq!(page_count(&bytes), 0);
    }

    #[test]
    fn test_rgba_image_gets_soft_mask() {
        let rgba = rgba_png(1, 1, vec![255, 0, 0, 128]);
        let mut page = Page::new(SectionKind::Magic, &PageConfig::default());
        page.image(0, BoundingBox::new(85.0, 20.0, 40.0, 40.0));
        let doc = Document {
            pages: vec![page],
            images: vec![Image::decode(&rgba).unwrap()],
        };

        let bytes = render_pdf(&doc, &PdfConfig::default()).unwrap();
        assert!(contains(&bytes, "/Subtype /Image"));
        assert!(contains(&bytes, "/SMask"));
        assert!(contains(&bytes, "/Width 1"));
        assert!(contains(&bytes, "/BitsPerComponent 8"));
        assert!(contains(&bytes, "/Im0 Do"));
    }

    #[test]
    fn test_dangling_image_reference_is_skipped() {
        let mut page = Page::new(SectionKind::Magic, &PageConfig::default());
        page.image(3, BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        page.text(
            "still here",
            20.0,
            20.0,
            TextStyle::regular(10.0, Color::BLACK),
            TextAlign::Left,
        );
        let doc = Document {
            pages: vec![page],
            images: vec![],
        };
        let bytes = render_pdf(&doc, &PdfConfig::default()).unwrap();
        assert!(!contains(&bytes, "/Im3"));
        assert!(contains(&bytes, "(still here) Tj"));
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("A b~"), b"A b~".to_vec());
        assert_eq!(encode_win_ansi("café"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(encode_win_ansi("•—€"), vec![0x95, 0x97, 0x80]);
        assert_eq!(encode_win_ansi("→"), b"?".to_vec());
    }
}
