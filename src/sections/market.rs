//! Market page: stat cards, TAM note, exclusion list, positioning

use crate::document::Stroke;
use crate::layout::{Grid, TextAlign, TextStyle};
use crate::section::Market;

use super::{ascent, RenderContext, BOX_PADDING};

const STAT_HEIGHT: f64 = 26.0;
const EXCLUSION_COLUMNS: usize = 2;

pub fn render(ctx: &mut RenderContext<'_>, market: &Market) {
    let p = *ctx.palette;

    let title = ctx.title_style();
    let subtitle = ctx.subtitle_style();
    let mut y = ctx.centered(&market.title, ctx.margin + 15.0, title) + 2.0;
    y = ctx.centered(&market.subtitle, y, subtitle) + 2.0;

    // One column per stat so the cards always span the full width
    let stats = ctx.stat_row(
        &market.stats,
        y,
        STAT_HEIGHT,
        (p.primary, p.gray),
        Some(p.light_bg),
    );

    let muted = ctx.muted_style();
    y = ctx.left(&market.tam_explanation, stats.bottom + 10.0, muted) + 2.0;

    // Exclusion box: heading plus a two-column "x item" list
    let heading_style = TextStyle::bold(11.0, p.dark);
    let item_style = TextStyle::regular(10.0, p.gray);
    let box_top = y;
    let inner_x = ctx.margin + BOX_PADDING;
    let inner_width = ctx.content_width() - 2.0 * BOX_PADDING;
    let heading_height = ctx.measure(&market.exclusions_title, inner_width, &heading_style);

    let items: Vec<String> = market.exclusions.iter().map(|e| format!("x {}", e)).collect();
    let grid = Grid::new(
        inner_x,
        box_top + BOX_PADDING + heading_height + 2.0,
        inner_width,
        EXCLUSION_COLUMNS,
    )
    .with_gap(6.0)
    .with_row_gap(1.0);
    let column_width = grid.column_width();
    let heights: Vec<f64> = items
        .iter()
        .map(|item| ctx.measure(item, column_width, &item_style))
        .collect();
    let list = grid.layout(&heights);

    let box_bounds = ctx.column(box_top, list.bottom + BOX_PADDING - box_top);
    ctx.page.rect(
        box_bounds,
        Some(p.light_bg),
        Some(Stroke::new(p.light, 0.3)),
    );
    ctx.paragraph(
        &market.exclusions_title,
        inner_x,
        box_top + BOX_PADDING + ascent(&heading_style),
        inner_width,
        heading_style,
        TextAlign::Left,
    );
    for (item, cell) in items.iter().zip(&list.cells) {
        ctx.paragraph(
            item,
            cell.x,
            cell.y + ascent(&item_style),
            cell.width,
            item_style,
            TextAlign::Left,
        );
    }

    let body = ctx.body_style();
    y = ctx.lines(&market.positioning, box_bounds.bottom() + 10.0, body, TextAlign::Left) + 4.0;
    let emphasis = ctx.emphasis_style();
    ctx.left(&market.conclusion, y, emphasis);
}
