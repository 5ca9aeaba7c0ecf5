//! Section renderers
//!
//! One module per section kind. Each renderer paints a fixed recipe onto a
//! [`Page`] through a [`RenderContext`], which carries the palette, the page
//! geometry and a handful of drawing helpers (wrapped paragraphs, callout
//! boxes, card grids) shared by all of them.

pub mod business_model;
pub mod closing;
pub mod hero;
pub mod magic;
pub mod market;
pub mod pain;
pub mod raise;
pub mod solution;

use crate::document::{Page, Stroke};
use crate::image::Image;
use crate::layout::{
    wrap_text, BoundingBox, Color, Grid, GridLayout, PageConfig, TextAlign, TextStyle, PT_TO_MM,
};
use crate::sanitize::sanitize;
use crate::section::{Feature, Section, Stat};
use crate::stylesheet::Palette;

/// Inner padding of boxes and cards, in millimetres
pub const BOX_PADDING: f64 = 5.0;

/// Width of the coloured bar on callout boxes
pub const BAR_WIDTH: f64 = 1.5;

/// Draw one section onto its page
pub fn render_section(ctx: &mut RenderContext<'_>, section: &Section) {
    match section {
        Section::Hero(s) => hero::render(ctx, s),
        Section::Pain(s) => pain::render(ctx, s),
        Section::Solution(s) => solution::render(ctx, s),
        Section::Magic(s) => magic::render(ctx, s),
        Section::Market(s) => market::render(ctx, s),
        Section::BusinessModel(s) => business_model::render(ctx, s),
        Section::Raise(s) => raise::render(ctx, s),
        Section::Closing(s) => closing::render(ctx, s),
    }
}

/// Drawing state for one page
pub struct RenderContext<'a> {
    pub page: &'a mut Page,
    pub palette: &'a Palette,
    pub margin: f64,
    page_width: f64,
    mascot: Option<(usize, &'a Image)>,
}

impl<'a> RenderContext<'a> {
    pub fn new(page: &'a mut Page, palette: &'a Palette, config: &PageConfig) -> Self {
        Self {
            page,
            palette,
            margin: config.margin,
            page_width: config.width,
            mascot: None,
        }
    }

    /// Attach the decoded mascot and its index in the document image table
    pub fn with_mascot(mut self, mascot: Option<(usize, &'a Image)>) -> Self {
        self.mascot = mascot;
        self
    }

    pub fn mascot(&self) -> Option<(usize, &'a Image)> {
        self.mascot
    }

    /// Page width minus both margins
    pub fn content_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    pub fn center_x(&self) -> f64 {
        self.page_width / 2.0
    }

    /// The full-width content column starting at `y`
    pub fn column(&self, y: f64, height: f64) -> BoundingBox {
        BoundingBox::new(self.margin, y, self.content_width(), height)
    }

    // Style roles

    pub fn title_style(&self) -> TextStyle {
        TextStyle::bold(22.0, self.palette.dark)
    }

    pub fn subtitle_style(&self) -> TextStyle {
        TextStyle::regular(12.0, self.palette.gray)
    }

    pub fn body_style(&self) -> TextStyle {
        TextStyle::regular(11.0, self.palette.dark)
    }

    pub fn muted_style(&self) -> TextStyle {
        TextStyle::regular(10.0, self.palette.gray)
    }

    pub fn emphasis_style(&self) -> TextStyle {
        TextStyle::bold(12.0, self.palette.primary)
    }

    // Text helpers. Each takes the baseline of the first line and returns the
    // baseline where the next block should start.

    /// Wrap `text` to `width` and draw it line by line
    pub fn paragraph(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        width: f64,
        style: TextStyle,
        align: TextAlign,
    ) -> f64 {
        let lines = wrap_text(&sanitize(text), &style, width);
        let anchor = match align {
            TextAlign::Left => x,
            TextAlign::Center => x + width / 2.0,
            TextAlign::Right => x + width,
        };
        let mut baseline = y;
        for line in &lines {
            self.page.text(line, anchor, baseline, style, align);
            baseline += style.line_height();
        }
        baseline
    }

    /// Left-aligned paragraph across the content width
    pub fn left(&mut self, text: &str, y: f64, style: TextStyle) -> f64 {
        let (x, width) = (self.margin, self.content_width());
        self.paragraph(text, x, y, width, style, TextAlign::Left)
    }

    /// Centered paragraph across the content width
    pub fn centered(&mut self, text: &str, y: f64, style: TextStyle) -> f64 {
        let (x, width) = (self.margin, self.content_width());
        self.paragraph(text, x, y, width, style, TextAlign::Center)
    }

    /// Draw each entry as its own paragraph, in order
    pub fn lines<S: AsRef<str>>(
        &mut self,
        items: &[S],
        y: f64,
        style: TextStyle,
        align: TextAlign,
    ) -> f64 {
        let (x, width) = (self.margin, self.content_width());
        items.iter().fold(y, |baseline, item| {
            self.paragraph(item.as_ref(), x, baseline, width, style, align)
        })
    }

    /// Height `text` occupies when wrapped to `width`
    pub fn measure(&self, text: &str, width: f64, style: &TextStyle) -> f64 {
        wrap_text(&sanitize(text), style, width).len() as f64 * style.line_height()
    }

    // Boxes

    /// A filled box with a coloured bar on its left edge, holding an optional
    /// bold heading and a wrapped body. Returns the box's bottom edge.
    pub fn callout(
        &mut self,
        top: f64,
        heading: Option<&str>,
        body: &str,
        fill: Color,
        bar: Color,
        body_style: TextStyle,
    ) -> f64 {
        let heading_style = TextStyle::bold(11.0, bar);
        let inner_width = self.content_width() - 2.0 * BOX_PADDING - BAR_WIDTH;
        let heading_height = heading.map_or(0.0, |h| {
            self.measure(h, inner_width, &heading_style) + 1.0
        });
        let height =
            2.0 * BOX_PADDING + heading_height + self.measure(body, inner_width, &body_style);

        let bounds = self.column(top, height);
        self.page.fill_rect(bounds, fill);
        self.page
            .fill_rect(BoundingBox::new(bounds.x, top, BAR_WIDTH, height), bar);

        let x = bounds.x + BAR_WIDTH + BOX_PADDING;
        let mut baseline = top + BOX_PADDING + ascent(&heading_style);
        if let Some(heading) = heading {
            baseline =
                self.paragraph(heading, x, baseline, inner_width, heading_style, TextAlign::Left);
            baseline += 1.0;
        }
        self.paragraph(body, x, baseline, inner_width, body_style, TextAlign::Left);
        bounds.bottom()
    }

    /// Feature boxes laid out on a `columns`-wide grid. Returns the grid's
    /// bottom edge.
    pub fn feature_grid(&mut self, features: &[Feature], top: f64, columns: usize) -> f64 {
        let grid = Grid::new(self.margin, top, self.content_width(), columns)
            .with_gap(6.0)
            .with_row_gap(6.0);
        let inner = grid.column_width() - 2.0 * BOX_PADDING;
        let title_style = TextStyle::bold(11.0, self.palette.dark);
        let desc_style = TextStyle::regular(9.0, self.palette.gray);

        let heights: Vec<f64> = features
            .iter()
            .map(|f| {
                2.0 * BOX_PADDING
                    + self.measure(&f.title, inner, &title_style)
                    + 1.0
                    + self.measure(&f.description, inner, &desc_style)
            })
            .collect();
        let layout = grid.layout(&heights);

        for (feature, cell) in features.iter().zip(&layout.cells) {
            self.page.rect(
                *cell,
                Some(self.palette.light_bg),
                Some(Stroke::new(self.palette.light, 0.2)),
            );
            let x = cell.x + BOX_PADDING;
            let baseline = cell.y + BOX_PADDING + ascent(&title_style);
            let baseline =
                self.paragraph(&feature.title, x, baseline, inner, title_style, TextAlign::Left);
            self.paragraph(
                &feature.description,
                x,
                baseline + 1.0,
                inner,
                desc_style,
                TextAlign::Left,
            );
        }

        layout.bottom
    }

    /// One row of equal-width stat columns spanning the content width, value
    /// on top and label below. `fill` paints each cell; `None` leaves the
    /// background to the caller.
    pub fn stat_row(
        &mut self,
        stats: &[Stat],
        top: f64,
        height: f64,
        colors: (Color, Color),
        fill: Option<Color>,
    ) -> GridLayout {
        let (value_color, label_color) = colors;
        let layout = Grid::new(self.margin, top, self.content_width(), stats.len())
            .uniform(stats.len(), height);
        let value_style = TextStyle::bold(16.0, value_color);
        let label_style = TextStyle::regular(8.0, label_color);

        for (stat, cell) in stats.iter().zip(&layout.cells) {
            if let Some(fill) = fill {
                self.page
                    .rect(*cell, Some(fill), Some(Stroke::new(self.palette.white, 0.8)));
            }
            let inner = cell.inset(2.0);
            let baseline = cell.y + BOX_PADDING + ascent(&value_style);
            self.paragraph(
                &stat.value,
                inner.x,
                baseline,
                inner.width,
                value_style,
                TextAlign::Center,
            );
            self.paragraph(
                &stat.label,
                inner.x,
                baseline + value_style.line_height(),
                inner.width,
                label_style,
                TextAlign::Center,
            );
        }
        layout
    }

    /// A bordered box across the content width holding `entries`, each
    /// wrapped and drawn in order. Returns the box's bottom edge.
    pub fn bordered(
        &mut self,
        top: f64,
        entries: &[(&str, TextStyle)],
        border: Color,
        fill: Option<Color>,
        align: TextAlign,
    ) -> f64 {
        let inner_width = self.content_width() - 2.0 * BOX_PADDING;
        let body: f64 = entries
            .iter()
            .map(|(text, style)| self.measure(text, inner_width, style))
            .sum();
        let bounds = self.column(top, body + 2.0 * BOX_PADDING);
        self.page
            .rect(bounds, fill, Some(Stroke::new(border, 0.5)));

        let first_ascent = entries.first().map_or(0.0, |(_, style)| ascent(style));
        let mut baseline = top + BOX_PADDING + first_ascent;
        for (text, style) in entries {
            baseline =
                self.paragraph(text, bounds.x + BOX_PADDING, baseline, inner_width, *style, align);
        }
        bounds.bottom()
    }
}

/// Distance from the top of a line box to its baseline
pub fn ascent(style: &TextStyle) -> f64 {
    style.size * PT_TO_MM * 0.8
}
