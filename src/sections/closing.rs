//! Closing page: philosophy, pitch, brand, contact box

use crate::layout::{TextAlign, TextStyle};
use crate::section::Closing;

use super::RenderContext;

const TOP: f64 = 60.0;

pub fn render(ctx: &mut RenderContext<'_>, closing: &Closing) {
    let p = *ctx.palette;

    let title = ctx.title_style();
    let mut y = ctx.centered(&closing.title, TOP, title) + 6.0;
    y = ctx.centered(&closing.philosophy, y, TextStyle::regular(12.0, p.gray)) + 6.0;
    y = ctx.centered(&closing.pitch, y, TextStyle::regular(12.0, p.dark)) + 14.0;
    y = ctx.centered(&closing.brand, y, TextStyle::bold(36.0, p.primary)) + 6.0;
    y = ctx.centered(&closing.call_to_action, y, TextStyle::bold(14.0, p.dark)) + 6.0;

    ctx.bordered(
        y,
        &[
            (closing.contact_prompt.as_str(), TextStyle::regular(11.0, p.gray)),
            (closing.email.as_str(), TextStyle::bold(13.0, p.primary)),
        ],
        p.primary,
        None,
        TextAlign::Center,
    );
}
