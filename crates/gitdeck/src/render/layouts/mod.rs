pub mod code;
pub mod comparison;
pub mod content;
pub mod flow;
pub mod hero;
pub mod principles;

use eframe::egui::{FontId, Pos2, Rect, pos2, vec2};

use crate::animation::{Ease, progress, tween};
use crate::render::SlideCtx;
use crate::theme::Theme;

/// Outer margin of every layout, in reference pixels.
pub const PADDING: f32 = 96.0;

/// Widest a text column may get, in reference pixels.
pub const MAX_WIDTH: f32 = 1400.0;

/// Space left for slide content: padded, capped in width and centred.
pub fn content_area(ctx: &SlideCtx<'_>, rect: Rect) -> Rect {
    let inner = rect.shrink(ctx.s(PADDING));
    let width = inner.width().min(ctx.s(MAX_WIDTH));
    Rect::from_center_size(inner.center(), vec2(width, inner.height()))
}

/// Measure `draw`, then run it again with its block vertically centred in
/// `area`. Blocks taller than the area start at its top.
pub fn place(ctx: &SlideCtx<'_>, area: Rect, draw: impl Fn(Pos2) -> f32) {
    let height = ctx.measure(|| draw(area.min));
    let top = (area.center().y - height / 2.0).max(area.top());
    draw(pos2(area.left(), top));
}

/// Opacity and travel left of an element entering `delay` seconds after mount.
pub fn enter(age: f32, delay: f32, distance: f32) -> (f32, f32) {
    let alpha = progress(age, delay, 0.5);
    let travel = tween(age, delay, 0.6, distance, 0.0, Ease::OutCubic);
    (alpha, travel)
}

/// Slide title sliding in from the left. Returns height used.
pub fn draw_title(ctx: &SlideCtx<'_>, title: &str, pos: Pos2, width: f32, centered: bool) -> f32 {
    let (alpha, travel) = enter(ctx.age, 0.0, -30.0);
    let faded = ctx.faded(alpha);
    let galley = faded.layout(
        title,
        FontId::proportional(ctx.s(ctx.theme.h2_size)),
        ctx.theme.heading_color,
        width,
    );
    let size = galley.size();
    let x = if centered {
        pos.x + (width - size.x) / 2.0
    } else {
        pos.x
    };
    faded.galley(pos2(x + ctx.s(travel), pos.y), galley, ctx.theme.heading_color);
    size.y
}

/// Subtitle line in the accent colour. Returns height used.
pub fn draw_subtitle(ctx: &SlideCtx<'_>, subtitle: &str, pos: Pos2, width: f32, centered: bool) -> f32 {
    let faded = ctx.faded(progress(ctx.age, 0.1, 0.5));
    crate::render::text::draw_wrapped(
        &faded,
        subtitle,
        FontId::proportional(ctx.s(ctx.theme.body_size)),
        Theme::with_opacity(ctx.theme.accent, 0.9),
        pos,
        width,
        centered,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_starts_hidden_and_displaced() {
        assert_eq!(enter(0.0, 0.2, 20.0), (0.0, 20.0));
        let (alpha, travel) = enter(5.0, 0.2, 20.0);
        assert_eq!(alpha, 1.0);
        assert!(travel.abs() < 1e-4);
    }

    #[test]
    fn entrance_waits_for_its_delay() {
        let (alpha, travel) = enter(0.1, 0.2, -30.0);
        assert_eq!(alpha, 0.0);
        assert_eq!(travel, -30.0);
    }
}
