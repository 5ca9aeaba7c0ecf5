//! The solution page: problem, response, key message, feature boxes

use crate::layout::TextStyle;
use crate::section::Solution;

use super::RenderContext;

const FEATURE_COLUMNS: usize = 2;

pub fn render(ctx: &mut RenderContext<'_>, solution: &Solution) {
    let p = *ctx.palette;

    let title = ctx.title_style();
    let mut y = ctx.centered(&solution.title, ctx.margin + 15.0, title) + 6.0;
    y = ctx.centered(&solution.problem, y, TextStyle::regular(12.0, p.gray)) + 4.0;
    y = ctx.centered(&solution.response, y, TextStyle::italic(12.0, p.warning)) + 6.0;
    y = ctx.centered(&solution.key_message, y, TextStyle::bold(13.0, p.dark)) + 2.0;

    let bottom = ctx.feature_grid(&solution.features, y, FEATURE_COLUMNS);

    let muted = ctx.muted_style();
    ctx.left(&solution.description, bottom + 10.0, muted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DrawOp;
    use crate::layout::FontFace;
    use crate::section::{Feature, Section};
    use crate::sections::tests::render_page;
    use crate::stylesheet::Palette;

    fn section(feature_count: usize) -> Section {
        Section::Solution(Solution {
            title: "The fix".to_string(),
            problem: "Documents pile up".to_string(),
            response: "So we read them for you".to_string(),
            key_message: "One upload, every answer".to_string(),
            features: (0..feature_count)
                .map(|i| Feature {
                    title: format!("Feature {}", i),
                    description: "Does a thing".to_string(),
                })
                .collect(),
            description: "Built for agents".to_string(),
        })
    }

    #[test]
    fn test_response_is_italic_warning() {
        let page = render_page(&section(2));
        match page.find_text("So we read them for you") {
            Some(DrawOp::Text { style, .. }) => {
                assert_eq!(style.face, FontFace::Italic);
                assert_eq!(style.color, Palette::default().warning);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_two_column_feature_grid() {
        let page = render_page(&section(3));
        let boxes = page.rects();
        assert_eq!(boxes.len(), 3);
        // Two per row, third wraps under the first
        assert_eq!(boxes[0].0.y, boxes[1].0.y);
        assert!(boxes[2].0.y > boxes[0].0.y);
        assert_eq!(boxes[2].0.x, boxes[0].0.x);
        assert!((boxes[1].0.right() - 190.0).abs() < 1e-9);
    }

    #[test]
    fn test_description_follows_grid() {
        let page = render_page(&section(2));
        let texts = page.texts();
        assert_eq!(texts.last(), Some(&"Built for agents"));
    }

    #[test]
    fn test_empty_features_still_renders_text() {
        let page = render_page(&section(0));
        assert!(page.rects().is_empty());
        assert_eq!(page.texts().len(), 5);
    }
}
