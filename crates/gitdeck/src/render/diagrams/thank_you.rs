//! Closing slide.

use eframe::egui::text::{LayoutJob, TextFormat};
use eframe::egui::{Align2, Color32, FontId, Rect, Stroke, pos2, vec2};

use crate::animation::{Ease, blink, fade_in, keyframes, lerp, progress, pulse, tween};
use crate::deck::Icon;
use crate::render::{SlideCtx, icons};
use crate::theme::{Theme, ink};

const PARTICLES: usize = 20;

/// Where a background particle is at `age`: `(x, y)` as fractions of the
/// slide, and its opacity. Deterministic per index.
pub fn particle(index: usize, age: f32) -> (f32, f32, f32) {
    // Cheap integer hash, enough to scatter a handful of dots.
    let mut h = (index as u32).wrapping_mul(0x9E37_79B9) ^ 0x85EB_CA6B;
    let mut next = || {
        h ^= h << 13;
        h ^= h >> 17;
        h ^= h << 5;
        (h % 10_000) as f32 / 10_000.0
    };
    let x = next();
    let start_y = lerp(0.6, 1.0, next());
    let period = lerp(5.0, 10.0, next());
    let offset = next() * period;

    let phase = ((age + offset) / period).fract();
    let y = start_y - phase * 0.8;
    let opacity = keyframes(phase, 0.0, 1.0, &[0.0, 0.4, 0.0], None, Ease::Linear);
    (x, y, opacity)
}

fn draw_backdrop(ctx: &SlideCtx<'_>, rect: Rect) {
    let line = Stroke::new(1.0, Theme::with_opacity(ctx.theme.foreground, 0.03));
    let step = ctx.s(50.0).max(4.0);
    let mut x = rect.left();
    while x <= rect.right() {
        ctx.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], line);
        x += step;
    }
    let mut y = rect.top();
    while y <= rect.bottom() {
        ctx.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], line);
        y += step;
    }

    for i in 0..PARTICLES {
        let (px, py, alpha) = particle(i, ctx.age);
        let p = pos2(
            rect.left() + px * rect.width(),
            rect.top() + py * rect.height(),
        );
        ctx.circle_filled(p, ctx.s(3.0), Theme::with_opacity(ink::BLUE, alpha));
    }
}

fn status_line(ctx: &SlideCtx<'_>, font: FontId) -> LayoutJob {
    let mut job = LayoutJob::default();
    let theme = ctx.theme;
    let parts = [
        ("$ ", ink::BLUE),
        ("git rebase ", theme.foreground),
        ("success", ink::GREEN),
        (" --clean-history", theme.muted),
    ];
    for (text, color) in parts {
        job.append(
            text,
            0.0,
            TextFormat {
                font_id: font.clone(),
                color,
                ..Default::default()
            },
        );
    }
    job
}

pub fn render(ctx: &SlideCtx<'_>, rect: Rect) {
    let theme = ctx.theme;
    let age = ctx.age;
    draw_backdrop(ctx, rect);

    let center = pos2(rect.center().x, rect.center().y - ctx.s(40.0));

    // Floating icons above the title.
    let floats = [
        (Icon::GitBranch, ink::BLUE, -1.0, 1.0),
        (Icon::Sparkles, Color32::from_rgb(0xFA, 0xCC, 0x15), 0.0, 1.2),
        (Icon::Star, ink::PURPLE, 1.0, 1.4),
    ];
    for (icon, color, slot, delay) in floats {
        let alpha = fade_in(age, delay);
        if alpha <= 0.0 {
            continue;
        }
        let bob = ctx.s(-10.0) * pulse(age - delay, 3.0);
        let at = pos2(
            center.x + slot * ctx.s(90.0),
            center.y - ctx.s(190.0) + bob,
        );
        for shape in icons::shapes(icon, at, ctx.s(44.0), Theme::with_opacity(color, alpha)) {
            ctx.add(shape);
        }
    }

    // Glow behind the title.
    let glow = 0.15 + 0.1 * pulse(age, 2.0);
    for (radius, strength) in [(260.0, 0.4), (190.0, 0.7), (120.0, 1.0)] {
        ctx.circle_filled(
            center,
            ctx.s(radius),
            Theme::with_opacity(theme.glow_a, glow * strength * fade_in(age, 0.0)),
        );
    }

    let pop = tween(age, 0.0, 0.8, 0.5, 1.0, Ease::OutBack);
    let title = ctx.faded(progress(age, 0.0, 0.5));
    let title_rect = title.text(
        center,
        Align2::CENTER_CENTER,
        "谢谢",
        FontId::proportional((ctx.s(200.0) * pop).round().max(1.0)),
        theme.heading_color,
    );

    let heart = tween(age, 1.5, 0.5, 0.0, 1.0, Ease::OutBack);
    if heart > 0.0 {
        let at = pos2(
            title_rect.right() + ctx.s(24.0),
            title_rect.top() + ctx.s(24.0),
        );
        for shape in icons::filled(Icon::Heart, at, ctx.s(56.0) * heart, ink::RED) {
            ctx.add(shape);
        }
    }

    // Status pill with a blinking cursor.
    let pill_alpha = fade_in(age, 0.8);
    let mut y = title_rect.bottom() + ctx.s(48.0);
    if pill_alpha > 0.0 {
        let pill = ctx.faded(pill_alpha);
        let rise = tween(age, 0.8, 0.5, ctx.s(20.0), 0.0, Ease::OutCubic);
        let galley = pill.layout_job(status_line(ctx, FontId::monospace(ctx.s(24.0))));
        let icon = ctx.s(28.0);
        let cursor = vec2(ctx.s(12.0), ctx.s(26.0));
        let pad = vec2(ctx.s(28.0), ctx.s(16.0));
        let inner_w = icon + ctx.s(16.0) + galley.size().x + ctx.s(8.0) + cursor.x;
        let size = vec2(inner_w, galley.size().y.max(icon)) + pad * 2.0;
        let rect = Rect::from_center_size(pos2(center.x, y + rise + size.y / 2.0), size);
        pill.panel(
            rect,
            size.y / 2.0,
            Theme::with_opacity(theme.code_background, 0.8),
            theme.border,
        );

        let mut x = rect.left() + pad.x;
        for shape in icons::shapes(Icon::CheckCircle, pos2(x + icon / 2.0, rect.center().y), icon, ink::GREEN) {
            pill.add(shape);
        }
        x += icon + ctx.s(16.0);
        let text_w = galley.size().x;
        pill.galley(pos2(x, rect.center().y - galley.size().y / 2.0), galley, theme.foreground);
        x += text_w + ctx.s(8.0);
        if blink(age, 0.8) {
            pill.rect_filled(
                Rect::from_min_size(pos2(x, rect.center().y - cursor.y / 2.0), cursor),
                0.0,
                ink::BLUE,
            );
        }
        y = rect.bottom() + ctx.s(28.0);
    }

    // Footnote that steps back after appearing.
    let note_alpha = fade_in(age, 1.2) * lerp(1.0, 0.4, progress(age, 2.2, 1.0));
    if note_alpha > 0.0 {
        let note = ctx.faded(note_alpha);
        let font = FontId::proportional(ctx.s(18.0));
        let galley = note.layout_no_wrap("这不是一条真实的命令，只是一个拟人的语义化总结", font, theme.muted);
        let icon = ctx.s(18.0);
        let w = icon + ctx.s(10.0) + galley.size().x;
        let left = center.x - w / 2.0;
        for shape in icons::shapes(Icon::Info, pos2(left + icon / 2.0, y + galley.size().y / 2.0), icon, theme.muted) {
            note.add(shape);
        }
        note.galley(pos2(left + icon + ctx.s(10.0), y), galley, theme.muted);
    }

    let corner = fade_in(age, 2.0);
    let corner_color = Theme::with_opacity(theme.faint, 0.6 * corner);
    let font = FontId::monospace(ctx.s(14.0));
    let margin = ctx.s(40.0);
    ctx.text(
        pos2(rect.left() + margin, rect.bottom() - margin),
        Align2::LEFT_BOTTOM,
        "DEVELOPED FOR TEAM SHARING",
        font.clone(),
        corner_color,
    );
    ctx.text(
        pos2(rect.right() - margin, rect.bottom() - margin),
        Align2::RIGHT_BOTTOM,
        "Built with egui",
        font,
        corner_color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_are_deterministic() {
        for i in 0..PARTICLES {
            assert_eq!(particle(i, 3.7), particle(i, 3.7));
        }
        assert_ne!(particle(0, 1.0), particle(1, 1.0));
    }

    #[test]
    fn particles_stay_in_view_and_faint() {
        for i in 0..PARTICLES {
            for step in 0..50 {
                let (x, y, alpha) = particle(i, step as f32 * 0.37);
                assert!((0.0..1.0).contains(&x));
                assert!((-0.2..=1.0).contains(&y), "y = {y}");
                assert!((0.0..=0.4 + 1e-6).contains(&alpha));
            }
        }
    }

    #[test]
    fn particles_rise() {
        let (_, y0, _) = particle(3, 0.0);
        let (_, y1, _) = particle(3, 0.5);
        // Short step, so no wrap unless the particle is at its cycle end.
        assert!(y1 < y0 || y1 - y0 > 0.5);
    }
}
