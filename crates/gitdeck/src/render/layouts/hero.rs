use eframe::egui::{Align2, Color32, FontId, Rect, pos2, vec2};

use crate::animation::progress;
use crate::deck::{HeroSlide, Icon};
use crate::render::layouts::enter;
use crate::render::{Action, SlideCtx, icons};
use crate::theme::{Theme, ink};

pub fn render(ctx: &SlideCtx<'_>, slide: &HeroSlide, rect: Rect) {
    let theme = ctx.theme;
    let center_x = rect.center().x;
    let title_font = FontId::proportional(ctx.s(theme.h1_size));
    let subtitle_font = FontId::proportional(ctx.s(theme.body_size));

    // Block height, to centre it.
    let badge_h = ctx.s(44.0);
    let title_line = ctx.layout_no_wrap("从", title_font.clone(), theme.heading_color).size().y * 1.1;
    let subtitle_line = ctx.layout_no_wrap("从", subtitle_font.clone(), theme.muted).size().y * 1.3;
    let button_h = ctx.s(68.0);
    let total = badge_h
        + ctx.s(40.0)
        + title_line * slide.title.len() as f32
        + ctx.s(32.0)
        + subtitle_line * slide.subtitle.len() as f32
        + ctx.s(56.0)
        + button_h;
    let mut y = rect.center().y - total / 2.0;

    // Badge.
    {
        let (alpha, travel) = enter(ctx.age, 0.2, 20.0);
        let badge = ctx.faded(alpha);
        let label = badge.layout_no_wrap(slide.badge, FontId::proportional(ctx.s(18.0)), ink::BLUE);
        let icon = ctx.s(20.0);
        let w = icon + ctx.s(12.0) + label.size().x + ctx.s(32.0);
        let r = Rect::from_min_size(pos2(center_x - w / 2.0, y + ctx.s(travel)), vec2(w, badge_h));
        badge.panel(
            r,
            badge_h / 2.0,
            Theme::with_opacity(ink::BLUE, 0.1),
            Theme::with_opacity(ink::BLUE, 0.2),
        );
        let mut x = r.left() + ctx.s(16.0);
        for shape in icons::shapes(Icon::GitBranch, pos2(x + icon / 2.0, r.center().y), icon, ink::BLUE) {
            badge.add(shape);
        }
        x += icon + ctx.s(12.0);
        let label_h = label.size().y;
        badge.galley(pos2(x, r.center().y - label_h / 2.0), label, ink::BLUE);
        y += badge_h + ctx.s(40.0);
    }

    // Title; the "+" in the second line is set in the accent colour.
    {
        let (alpha, travel) = enter(ctx.age, 0.3, 20.0);
        let title = ctx.faded(alpha);
        for line in slide.title {
            let pos = pos2(center_x, y + ctx.s(travel));
            match line.split_once(" + ") {
                Some((left, right)) => {
                    let plus = title.layout_no_wrap(" + ", title_font.clone(), ink::BLUE);
                    let l = title.layout_no_wrap(left, title_font.clone(), theme.heading_color);
                    let r = title.layout_no_wrap(right, title_font.clone(), theme.heading_color);
                    let w = l.size().x + plus.size().x + r.size().x;
                    let mut x = pos.x - w / 2.0;
                    for (galley, color) in [(l, theme.heading_color), (plus, ink::BLUE), (r, theme.heading_color)] {
                        let gw = galley.size().x;
                        title.galley(pos2(x, pos.y), galley, color);
                        x += gw;
                    }
                }
                None => {
                    title.text(pos, Align2::CENTER_TOP, line, title_font.clone(), theme.heading_color);
                }
            }
            y += title_line;
        }
        y += ctx.s(32.0);
    }

    {
        let (alpha, travel) = enter(ctx.age, 0.4, 20.0);
        let subtitle = ctx.faded(alpha);
        for line in slide.subtitle {
            subtitle.text(
                pos2(center_x, y + ctx.s(travel)),
                Align2::CENTER_TOP,
                line,
                subtitle_font.clone(),
                theme.muted,
            );
            y += subtitle_line;
        }
        y += ctx.s(56.0);
    }

    // Start button.
    {
        let (alpha, travel) = enter(ctx.age, 0.5, 20.0);
        let label = ctx.layout_no_wrap(slide.start_label, FontId::proportional(ctx.s(26.0)), theme.heading_color);
        let chevron = ctx.s(26.0);
        let w = label.size().x + chevron + ctx.s(12.0) + ctx.s(64.0);
        let r = Rect::from_min_size(pos2(center_x - w / 2.0, y + ctx.s(travel)), vec2(w, button_h));
        let hovered = ctx.button(r, "hero-start", Action::Next);
        let button = ctx.faded(alpha);
        let r = if hovered { r.expand(ctx.s(3.0)) } else { r };
        let fill = if hovered {
            ink::BLUE
        } else {
            Color32::from_rgb(0x25, 0x63, 0xEB)
        };
        for (spread, strength) in [(24.0, 0.08), (12.0, 0.12)] {
            button.rect_filled(r.expand(ctx.s(spread)), r.height(), Theme::with_opacity(ink::BLUE, strength));
        }
        button.rect_filled(r, r.height() / 2.0, fill);
        let label_size = label.size();
        let x = r.left() + ctx.s(32.0);
        button.galley(pos2(x, r.center().y - label_size.y / 2.0), label, theme.heading_color);
        let nudge = if hovered { ctx.s(4.0) } else { 0.0 };
        let at = pos2(x + label_size.x + ctx.s(12.0) + chevron / 2.0 + nudge, r.center().y);
        for shape in icons::shapes(Icon::ChevronRight, at, chevron, theme.heading_color) {
            button.add(shape);
        }
    }

    // Key hints.
    let hints = ctx.faded(0.3 * progress(ctx.age, 0.8, 0.5));
    let font = FontId::proportional(ctx.s(18.0));
    let gap = ctx.s(48.0);
    let widths: Vec<f32> = slide
        .hints
        .iter()
        .map(|h| hints.layout_no_wrap(h, font.clone(), theme.faint).size().x)
        .collect();
    let total_w = widths.iter().sum::<f32>() + gap * widths.len().saturating_sub(1) as f32;
    let mut x = center_x - total_w / 2.0;
    let hint_y = rect.bottom() - ctx.s(190.0);
    for (hint, w) in slide.hints.iter().zip(widths) {
        hints.text(pos2(x, hint_y), Align2::LEFT_CENTER, hint, font.clone(), theme.faint);
        x += w + gap;
    }
}
