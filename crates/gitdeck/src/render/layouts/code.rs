use eframe::egui::{FontId, Rect, pos2};

use crate::deck::{CodeSlide, Marker};
use crate::render::layouts::{content_area, draw_subtitle, enter, place};
use crate::render::{SlideCtx, text};

/// Two columns: title and terminal on the left, table and bullets on the
/// right. Slides with neither use the full width.
pub fn render(ctx: &SlideCtx<'_>, slide: &CodeSlide, rect: Rect) {
    let theme = ctx.theme;
    let area = content_area(ctx, rect);
    let has_side = slide.table.is_some() || !slide.bullets.is_empty();
    let gap = ctx.s(64.0);
    let left_w = if has_side {
        (area.width() - gap) / 2.0
    } else {
        area.width()
    };
    let right_x = area.left() + left_w + gap;

    place(ctx, area, |pos| {
        let (alpha, travel) = enter(ctx.age, 0.0, -30.0);
        let left = ctx.faded(alpha);
        let mut y = pos.y;
        y += text::draw_wrapped(
            &left,
            slide.title,
            FontId::proportional(ctx.s(48.0)),
            theme.heading_color,
            pos2(pos.x + ctx.s(travel), y),
            left_w,
            false,
        );
        if let Some(subtitle) = slide.subtitle {
            y += ctx.s(12.0);
            y += draw_subtitle(ctx, subtitle, pos2(pos.x, y), left_w, false);
        }
        y += ctx.s(32.0);
        y += text::draw_code_block(&left, slide.code, pos2(pos.x + ctx.s(travel), y), left_w);
        let left_h = y - pos.y;

        if !has_side {
            return left_h;
        }
        let (alpha, travel) = enter(ctx.age, 0.2, 30.0);
        let right = ctx.faded(alpha);
        let mut y = pos.y;
        if let Some(table) = &slide.table {
            y += text::draw_table(&right, table, pos2(right_x + ctx.s(travel), y), left_w);
            y += ctx.s(32.0);
        }
        if !slide.bullets.is_empty() {
            y += text::draw_list(
                &right,
                Marker::Dot,
                theme.accent,
                slide.bullets,
                pos2(right_x + ctx.s(travel), y),
                left_w,
                ctx.s(theme.small_size + 4.0),
            );
        }
        left_h.max(y - pos.y)
    });
}
