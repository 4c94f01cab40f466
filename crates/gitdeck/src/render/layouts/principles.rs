use eframe::egui::{FontId, Pos2, Rect, pos2, vec2};

use crate::deck::{Card, PrinciplesSlide};
use crate::render::layouts::{content_area, draw_title, enter, place};
use crate::render::{SlideCtx, icons};

pub fn render(ctx: &SlideCtx<'_>, slide: &PrinciplesSlide, rect: Rect) {
    let area = content_area(ctx, rect);
    let width = area.width();
    place(ctx, area, |pos| {
        let mut y = pos.y;
        y += draw_title(ctx, slide.title, pos, width, true);
        y += ctx.s(64.0);

        let count = slide.cards.len().max(1);
        let gap = ctx.s(40.0);
        let card_w = (width - gap * (count - 1) as f32) / count as f32;
        let card_h = slide
            .cards
            .iter()
            .map(|card| ctx.measure(|| draw_card(ctx, card, pos2(pos.x, y), card_w)))
            .fold(0.0f32, f32::max);
        for (i, card) in slide.cards.iter().enumerate() {
            let (alpha, travel) = enter(ctx.age, 0.2 * i as f32, 50.0);
            let faded = ctx.faded(alpha);
            let at = pos2(pos.x + i as f32 * (card_w + gap), y + ctx.s(travel));
            let theme = ctx.theme;
            faded.panel(Rect::from_min_size(at, vec2(card_w, card_h)), ctx.s(24.0), theme.surface, theme.border);
            draw_card(&faded, card, at, card_w);
        }
        y + card_h - pos.y
    });
}

fn draw_card(ctx: &SlideCtx<'_>, card: &Card, pos: Pos2, width: f32) -> f32 {
    let theme = ctx.theme;
    let pad = ctx.s(32.0);
    let inner = width - pad * 2.0;
    let color = theme.tone(card.tone);
    let mut y = pos.y + pad;

    let box_size = ctx.s(72.0);
    let icon_box = Rect::from_min_size(pos2(pos.x + pad, y), vec2(box_size, box_size));
    ctx.rect_filled(icon_box, ctx.s(16.0), theme.tint(card.tone, 0.12));
    if let Some(icon) = card.icon {
        for shape in icons::shapes(icon, icon_box.center(), ctx.s(40.0), color) {
            ctx.add(shape);
        }
    }
    y += box_size + ctx.s(28.0);

    let title = ctx.layout(card.title, FontId::proportional(ctx.s(30.0)), theme.heading_color, inner);
    let title_h = title.size().y;
    ctx.galley(pos2(pos.x + pad, y), title, theme.heading_color);
    y += title_h + ctx.s(16.0);

    let body = ctx.layout(card.body, FontId::proportional(ctx.s(theme.small_size + 2.0)), theme.muted, inner);
    let body_h = body.size().y;
    ctx.galley(pos2(pos.x + pad, y), body, theme.muted);
    y + body_h + pad - pos.y
}
