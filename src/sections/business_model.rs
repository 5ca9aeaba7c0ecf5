//! Business model page: feature grid, metrics band, tagline, referral note

use crate::layout::{BoundingBox, TextStyle};
use crate::section::BusinessModel;

use super::RenderContext;

const FEATURE_COLUMNS: usize = 3;
const BAND_HEIGHT: f64 = 26.0;

pub fn render(ctx: &mut RenderContext<'_>, model: &BusinessModel) {
    let p = *ctx.palette;

    let title = ctx.title_style();
    let y = ctx.centered(&model.title, ctx.margin + 15.0, title) + 2.0;
    let bottom = ctx.feature_grid(&model.features, y, FEATURE_COLUMNS);

    let band_top = bottom + 10.0;
    let band: BoundingBox = ctx.column(band_top, BAND_HEIGHT);
    ctx.page.fill_rect(band, p.primary);
    ctx.stat_row(&model.metrics, band_top, BAND_HEIGHT, (p.white, p.white), None);

    let y = ctx.centered(
        &model.tagline,
        band.bottom() + 14.0,
        TextStyle::bold(13.0, p.primary),
    ) + 4.0;
    let muted = ctx.muted_style();
    ctx.left(&model.referral, y, muted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DrawOp;
    use crate::section::{Feature, Section, Stat};
    use crate::sections::tests::render_page;
    use crate::stylesheet::Palette;

    fn section(features: usize, metrics: usize) -> Section {
        Section::BusinessModel(BusinessModel {
            title: "Business model".to_string(),
            features: (0..features)
                .map(|i| Feature {
                    title: format!("Plan {}", i),
                    description: "per seat".to_string(),
                })
                .collect(),
            metrics: (0..metrics)
                .map(|i| Stat {
                    value: format!("{}%", 10 * (i + 1)),
                    label: "metric".to_string(),
                })
                .collect(),
            tagline: "Land and expand".to_string(),
            referral: "Agents refer agents".to_string(),
        })
    }

    #[test]
    fn test_feature_grid_wraps_every_third() {
        let page = render_page(&section(4, 3));
        let palette = Palette::default();
        let boxes: Vec<_> = page
            .rects()
            .into_iter()
            .filter(|(_, fill)| *fill == Some(palette.light_bg))
            .map(|(b, _)| *b)
            .collect();
        assert_eq!(boxes.len(), 4);
        assert_eq!(boxes[0].y, boxes[2].y);
        assert!(boxes[3].y > boxes[2].y);
        assert_eq!(boxes[3].x, boxes[0].x);
    }

    #[test]
    fn test_metrics_band_is_full_width_primary() {
        let page = render_page(&section(3, 4));
        let palette = Palette::default();
        let band = page
            .rects()
            .into_iter()
            .find(|(_, fill)| *fill == Some(palette.primary))
            .map(|(b, _)| *b)
            .expect("band");
        assert_eq!(band.x, 20.0);
        assert_eq!(band.width, 170.0);
        assert_eq!(band.height, BAND_HEIGHT);
    }

    #[test]
    fn test_metric_values_equal_columns() {
        let page = render_page(&section(0, 4));
        let xs: Vec<f64> = ["10%", "20%", "30%", "40%"]
            .iter()
            .map(|v| match page.find_text(v) {
                Some(DrawOp::Text { x, style, .. }) => {
                    assert_eq!(style.color, Palette::default().white);
                    *x
                }
                other => panic!("missing {}: {:?}", v, other),
            })
            .collect();
        // Centers of 42.5mm columns
        let expected = [41.25, 83.75, 126.25, 168.75];
        for (x, e) in xs.iter().zip(expected) {
            assert!((x - e).abs() < 1e-9, "{} != {}", x, e);
        }
    }
}
