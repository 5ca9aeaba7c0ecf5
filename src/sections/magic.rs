//! "How it works" page with the optional mascot

use crate::layout::{BoundingBox, Color, TextAlign, TextStyle};
use crate::section::Magic;

use super::RenderContext;

/// The mascot is fitted into a square slot of this size
pub const MASCOT_SIZE: f64 = 40.0;

pub fn render(ctx: &mut RenderContext<'_>, magic: &Magic) {
    let p = *ctx.palette;
    let mut top = ctx.margin;

    if let Some((id, image)) = ctx.mascot() {
        let slot = BoundingBox::new(
            ctx.center_x() - MASCOT_SIZE / 2.0,
            top,
            MASCOT_SIZE,
            MASCOT_SIZE,
        );
        ctx.page
            .image(id, slot.fit(image.width as f64, image.height as f64));
        top = slot.bottom() + 4.0;
    }

    let title = ctx.title_style();
    let subtitle = ctx.subtitle_style();
    let mut y = ctx.centered(&magic.title, top + 12.0, title) + 2.0;
    y = ctx.centered(&magic.subtitle, y, subtitle) + 4.0;

    let chain = magic.under_the_hood.join(" -> ");
    let muted = ctx.muted_style();
    let bottom = ctx.callout(
        y,
        Some(&magic.under_the_hood_title),
        &chain,
        p.light_bg,
        p.gray,
        muted,
    );

    let highlight = p.primary.mix(Color::WHITE, 0.88);
    let body = ctx.body_style();
    let bottom = ctx.callout(
        bottom + 6.0,
        Some(&magic.to_the_user_title),
        &magic.to_the_user,
        highlight,
        p.primary,
        body,
    );

    let y = ctx.lines(&magic.benefits, bottom + 12.0, body, TextAlign::Left) + 6.0;
    ctx.centered(&magic.testimonial, y, TextStyle::italic(11.0, p.gray));
}
