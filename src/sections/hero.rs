//! Cover page: brand, two-tone headline, taglines

use crate::document::Stroke;
use crate::layout::{TextAlign, TextStyle};
use crate::section::Hero;

use super::RenderContext;

const TOP: f64 = 90.0;
/// Width of the accent rule under the headline
const RULE_WIDTH: f64 = 30.0;

pub fn render(ctx: &mut RenderContext<'_>, hero: &Hero) {
    let p = *ctx.palette;

    let mut y = ctx.centered(&hero.brand, TOP, TextStyle::bold(16.0, p.primary)) + 12.0;
    y = ctx.centered(&hero.headline, y, TextStyle::bold(30.0, p.dark));
    y = ctx.centered(&hero.headline_highlight, y, TextStyle::bold(30.0, p.primary));

    let cx = ctx.center_x();
    ctx.page.line(
        cx - RULE_WIDTH / 2.0,
        y - 4.0,
        cx + RULE_WIDTH / 2.0,
        y - 4.0,
        Stroke::new(p.primary, 0.8),
    );
    y += 10.0;
    ctx.lines(
        &hero.taglines,
        y,
        TextStyle::regular(13.0, p.gray),
        TextAlign::Center,
    );
}
