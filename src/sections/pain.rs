//! The problem page: intro, quote box, conclusion, call to action

use crate::layout::{TextAlign, TextStyle};
use crate::section::Pain;

use super::RenderContext;

pub fn render(ctx: &mut RenderContext<'_>, pain: &Pain) {
    let p = *ctx.palette;
    let body = TextStyle::regular(12.0, p.dark);

    let y = ctx.left(&pain.intro, ctx.margin + 20.0, body) + 6.0;
    let bottom = ctx.callout(
        y,
        None,
        &pain.quote,
        p.light_bg,
        p.primary,
        TextStyle::italic(12.0, p.dark),
    );

    let y = ctx.lines(&pain.conclusion, bottom + 12.0, body, TextAlign::Left) + 6.0;
    ctx.left(&pain.call_to_action, y, TextStyle::bold(14.0, p.primary));
}
