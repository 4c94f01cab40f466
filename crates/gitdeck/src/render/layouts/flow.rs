use eframe::egui::{Align2, FontId, Pos2, Rect, pos2, vec2};

use crate::animation::{Ease, progress, tween};
use crate::deck::{FlowSlide, FlowStep, Icon};
use crate::render::layouts::content::draw_cards;
use crate::render::layouts::{content_area, draw_title, enter, place};
use crate::render::{SlideCtx, icons};
use crate::theme::Theme;

const STEP_BOX: f32 = 96.0;
const ARROW: f32 = 28.0;

pub fn render(ctx: &SlideCtx<'_>, slide: &FlowSlide, rect: Rect) {
    let area = content_area(ctx, rect);
    let width = area.width();
    place(ctx, area, |pos| {
        let mut y = pos.y;
        y += draw_title(ctx, slide.title, pos, width, true);
        y += ctx.s(72.0);
        y += draw_steps(ctx, slide.steps, pos2(pos.x, y), width);
        if !slide.tips.is_empty() {
            y += ctx.s(72.0);
            let (alpha, travel) = enter(ctx.age, 0.2 + 0.1 * slide.steps.len() as f32, 20.0);
            let tips = ctx.faded(alpha);
            y += draw_cards(&tips, slide.tips, pos2(pos.x, y + ctx.s(travel)), width, slide.tips.len());
        }
        y - pos.y
    });
}

/// Horizontal chain of step boxes joined by arrows. Returns height used.
fn draw_steps(ctx: &SlideCtx<'_>, steps: &[FlowStep], pos: Pos2, width: f32) -> f32 {
    if steps.is_empty() {
        return 0.0;
    }
    let theme = ctx.theme;
    let size = ctx.s(STEP_BOX);
    let arrow = ctx.s(ARROW);
    let slot = (width - arrow * (steps.len() - 1) as f32) / steps.len() as f32;
    let label_font = FontId::proportional(ctx.s(theme.small_size));
    let label_h = ctx.layout_no_wrap("从", label_font.clone(), theme.foreground).size().y;
    let cy = pos.y + size / 2.0;

    for (i, step) in steps.iter().enumerate() {
        let delay = 0.1 * i as f32;
        let grow = tween(ctx.age, delay, 0.5, 0.5, 1.0, Ease::OutBack);
        let faded = ctx.faded(progress(ctx.age, delay, 0.4));
        let cx = pos.x + i as f32 * (slot + arrow) + slot / 2.0;
        let r = Rect::from_center_size(pos2(cx, cy), vec2(size, size) * grow);
        faded.panel(r, ctx.s(20.0) * grow, theme.surface, theme.border);
        for shape in icons::shapes(step.icon, r.center(), ctx.s(40.0) * grow, theme.accent) {
            faded.add(shape);
        }
        faded.text(
            pos2(cx, pos.y + size + ctx.s(16.0)),
            Align2::CENTER_TOP,
            step.label,
            label_font.clone(),
            theme.foreground,
        );

        if i + 1 < steps.len() {
            let ax = pos.x + (i + 1) as f32 * (slot + arrow) - arrow / 2.0;
            for shape in icons::shapes(
                Icon::ArrowRight,
                pos2(ax, cy),
                arrow,
                Theme::with_opacity(theme.faint, 0.7),
            ) {
                faded.add(shape);
            }
        }
    }
    size + ctx.s(16.0) + label_h
}
