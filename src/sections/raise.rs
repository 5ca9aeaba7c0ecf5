//! The ask: funding options, recommendation callout, closing line

use crate::layout::{BoundingBox, Color, Grid, TextAlign, TextStyle};
use crate::section::{Raise, RaiseOption};

use super::{ascent, RenderContext};

const OPTION_COLUMNS: usize = 4;
/// Space reserved at the top of every card for the badge
const BADGE_ROW: f64 = 7.0;
const CARD_PADDING: f64 = 3.0;
pub const BADGE_TEXT: &str = "PREFERRED";

struct CardStyles {
    amount: TextStyle,
    label: TextStyle,
    desc: TextStyle,
}

impl CardStyles {
    fn new(option: &RaiseOption, primary: Color, dark: Color, gray: Color, white: Color) -> Self {
        if option.recommended {
            Self {
                amount: TextStyle::bold(16.0, white),
                label: TextStyle::bold(9.0, white),
                desc: TextStyle::regular(8.0, white),
            }
        } else {
            Self {
                amount: TextStyle::bold(16.0, primary),
                label: TextStyle::bold(9.0, dark),
                desc: TextStyle::regular(8.0, gray),
            }
        }
    }
}

pub fn render(ctx: &mut RenderContext<'_>, raise: &Raise) {
    let p = *ctx.palette;

    let title = ctx.title_style();
    let subtitle = ctx.subtitle_style();
    let mut y = ctx.centered(&raise.title, ctx.margin + 15.0, title) + 2.0;
    y = ctx.lines(&raise.subtitle, y, subtitle, TextAlign::Center) + 2.0;

    let grid = Grid::new(ctx.margin, y, ctx.content_width(), OPTION_COLUMNS)
        .with_gap(4.0)
        .with_row_gap(4.0);
    let inner = grid.column_width() - 2.0 * CARD_PADDING;

    let styles: Vec<CardStyles> = raise
        .options
        .iter()
        .map(|o| CardStyles::new(o, p.primary, p.dark, p.gray, p.white))
        .collect();
    let heights: Vec<f64> = raise
        .options
        .iter()
        .zip(&styles)
        .map(|(option, s)| {
            BADGE_ROW
                + 2.0 * CARD_PADDING
                + s.amount.line_height()
                + ctx.measure(&option.label, inner, &s.label)
                + ctx.measure(&option.desc, inner, &s.desc)
        })
        .collect();
    let layout = grid.layout(&heights);

    for ((option, s), cell) in raise.options.iter().zip(&styles).zip(&layout.cells) {
        let fill = if option.recommended {
            p.primary
        } else {
            p.light_bg
        };
        ctx.page.rect(*cell, Some(fill), None);

        if option.recommended {
            let badge_style = TextStyle::bold(7.0, p.primary);
            let badge = cell.inset(CARD_PADDING);
            let badge = BoundingBox::new(badge.x, cell.y + 2.5, badge.width, 4.5);
            ctx.page.fill_rect(badge, p.white);
            ctx.page.text(
                BADGE_TEXT,
                badge.center_x(),
                badge.y + 3.3,
                badge_style,
                TextAlign::Center,
            );
        }

        let x = cell.x + CARD_PADDING;
        let mut baseline = cell.y + BADGE_ROW + CARD_PADDING + ascent(&s.amount);
        baseline = ctx.paragraph(&option.amount, x, baseline, inner, s.amount, TextAlign::Center);
        baseline = ctx.paragraph(&option.label, x, baseline, inner, s.label, TextAlign::Center);
        ctx.paragraph(&option.desc, x, baseline, inner, s.desc, TextAlign::Center);
    }

    let callout_style = TextStyle::bold(11.0, p.dark);
    let tint = p.primary.mix(Color::WHITE, 0.9);
    let bottom = ctx.bordered(
        layout.bottom + 10.0,
        &[(raise.recommendation.as_str(), callout_style)],
        p.primary,
        Some(tint),
        TextAlign::Left,
    );

    let muted = ctx.muted_style();
    ctx.left(&raise.closing, bottom + 10.0, muted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DrawOp;
    use crate::section::Section;
    use crate::sections::tests::render_page;
    use crate::stylesheet::Palette;

    fn option(amount: &str, recommended: bool) -> RaiseOption {
        RaiseOption {
            amount: amount.to_string(),
            label: "Runway".to_string(),
            desc: "12 months".to_string(),
            recommended,
        }
    }

    fn section(options: Vec<RaiseOption>) -> Section {
        Section::Raise(Raise {
            title: "The raise".to_string(),
            subtitle: vec!["Pre-seed".to_string(), "SAFE".to_string()],
            options,
            recommendation: "We recommend £500k".to_string(),
            closing: "Let's talk".to_string(),
        })
    }

    fn cards(page: &crate::document::Page) -> Vec<(BoundingBox, Option<Color>)> {
        let column = (170.0 - 3.0 * 4.0) / 4.0;
        page.rects()
            .into_iter()
            .filter(|(b, _)| (b.width - column).abs() < 1e-9)
            .map(|(b, fill)| (*b, fill))
            .collect()
    }

    #[test]
    fn test_recommended_card_is_inverted_with_badge() {
        let page = render_page(&section(vec![
            option("£250k", false),
            option("£500k", true),
            option("£750k", false),
            option("£1M", false),
        ]));
        let palette = Palette::default();

        let cards = cards(&page);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[1].1, Some(palette.primary));
        for i in [0, 2, 3] {
            assert_eq!(cards[i].1, Some(palette.light_bg));
        }

        let badges = page.texts().iter().filter(|t| **t == BADGE_TEXT).count();
        assert_eq!(badges, 1);

        match page.find_text("GBP 500k") {
            Some(DrawOp::Text { style, .. }) => assert_eq!(style.color, palette.white),
            other => panic!("unexpected {:?}", other),
        }
        match page.find_text("GBP 250k") {
            Some(DrawOp::Text { style, .. }) => assert_eq!(style.color, palette.primary),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_no_recommendation_no_badge() {
        let page = render_page(&section(vec![option("1", false), option("2", false)]));
        assert!(!page.texts().contains(&BADGE_TEXT));
    }

    #[test]
    fn test_fifth_option_wraps() {
        let page = render_page(&section((0..5).map(|i| option(&i.to_string(), false)).collect()));
        let cards = cards(&page);
        assert_eq!(cards.len(), 5);
        assert!(cards[4].0.y > cards[0].0.y);
        assert_eq!(cards[4].0.x, cards[0].0.x);
    }

    #[test]
    fn test_recommendation_callout_is_bordered() {
        let page = render_page(&section(vec![option("1", true)]));
        let palette = Palette::default();
        let bordered = page.ops().iter().any(|op| {
            matches!(op, DrawOp::Rect { stroke: Some(stroke), bounds, .. }
                if stroke.color == palette.primary && bounds.width == 170.0)
        });
        assert!(bordered);
        assert!(page.texts().contains(&"We recommend GBP 500k"));
    }
}
