use eframe::egui::text::{LayoutJob, TextFormat};
use eframe::egui::{Align2, Color32, FontId, Pos2, Rect, pos2, vec2};

use crate::animation::pulse;
use crate::deck::{Block, Bullet, Card, Column, ContentSlide, Icon, Marker, Rule, Tone};
use crate::render::diagrams::{self, DiagramState};
use crate::render::layouts::{content_area, draw_subtitle, draw_title, enter, place};
use crate::render::{SlideCtx, icons, text};
use crate::theme::{Theme, ink};

const BLOCK_GAP: f32 = 32.0;

pub fn render(ctx: &SlideCtx<'_>, slide: &ContentSlide, rect: Rect, diagram: Option<&DiagramState>) {
    let area = content_area(ctx, rect);
    let centered = slide.centered;
    let width = area.width();
    place(ctx, area, |pos| {
        let mut y = pos.y;
        y += draw_title(ctx, slide.title, pos2(pos.x, y), width, centered);
        if let Some(subtitle) = slide.subtitle {
            y += ctx.s(12.0);
            y += draw_subtitle(ctx, subtitle, pos2(pos.x, y), width, centered);
        }
        y += ctx.s(40.0);

        if !slide.bullets.is_empty() {
            y += draw_bullets(ctx, slide.bullets, pos2(pos.x, y), width, centered);
        }
        if !slide.blocks.is_empty() {
            if !slide.bullets.is_empty() {
                y += ctx.s(40.0);
            }
            let (alpha, travel) = enter(ctx.age, 0.2, 30.0);
            let body = ctx.faded(alpha);
            y += draw_blocks(
                &body,
                slide.blocks,
                pos2(pos.x, y + ctx.s(travel)),
                width,
                centered,
                None,
                diagram,
            );
        }
        y - pos.y
    });
}

fn draw_bullets(ctx: &SlideCtx<'_>, bullets: &[Bullet], pos: Pos2, width: f32, centered: bool) -> f32 {
    let theme = ctx.theme;
    let icon_box = ctx.s(76.0);
    let gap = ctx.s(28.0);
    let mut y = pos.y;
    for (i, bullet) in bullets.iter().enumerate() {
        if i > 0 {
            y += ctx.s(28.0);
        }
        let (alpha, travel) = enter(ctx.age, 0.1 * i as f32, 20.0);
        let row = ctx.faded(alpha);
        let indent = if bullet.icon.is_some() { icon_box + gap } else { 0.0 };
        let text_w = width - indent;

        let main = row.layout(
            bullet.text,
            FontId::proportional(ctx.s(theme.h3_size + 4.0)),
            theme.foreground,
            text_w,
        );
        let sub = bullet.sub.map(|sub| {
            row.layout(
                sub,
                FontId::proportional(ctx.s(theme.small_size + 2.0)),
                theme.muted,
                text_w,
            )
        });
        let sub_h = sub.as_ref().map_or(0.0, |g| g.size().y + ctx.s(6.0));
        let text_h = main.size().y + sub_h;
        let row_h = if bullet.icon.is_some() {
            text_h.max(icon_box)
        } else {
            text_h
        };
        let row_w = indent + main.size().x.max(sub.as_ref().map_or(0.0, |g| g.size().x));
        let left = if centered {
            pos.x + (width - row_w) / 2.0
        } else {
            pos.x
        };
        let top = y + ctx.s(travel);

        if let Some((icon, tone)) = bullet.icon {
            let r = Rect::from_min_size(pos2(left, top + (row_h - icon_box) / 2.0), vec2(icon_box, icon_box));
            row.panel(r, ctx.s(20.0), theme.surface, theme.border);
            for shape in icons::shapes(icon, r.center(), ctx.s(32.0), theme.tone(tone)) {
                row.add(shape);
            }
        }
        let text_top = top + (row_h - text_h) / 2.0;
        let main_h = main.size().y;
        row.galley(pos2(left + indent, text_top), main, theme.foreground);
        if let Some(sub) = sub {
            row.galley(pos2(left + indent, text_top + main_h + ctx.s(6.0)), sub, theme.muted);
        }
        y += row_h;
    }
    y - pos.y
}

/// Stack `blocks` downwards. `tone` colours lists inside a column.
fn draw_blocks(
    ctx: &SlideCtx<'_>,
    blocks: &[Block],
    pos: Pos2,
    width: f32,
    centered: bool,
    tone: Option<Tone>,
    diagram: Option<&DiagramState>,
) -> f32 {
    let mut y = pos.y;
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            y += ctx.s(BLOCK_GAP);
        }
        y += draw_block(ctx, block, pos2(pos.x, y), width, centered, tone, diagram);
    }
    y - pos.y
}

fn draw_block(
    ctx: &SlideCtx<'_>,
    block: &Block,
    pos: Pos2,
    width: f32,
    centered: bool,
    tone: Option<Tone>,
    diagram: Option<&DiagramState>,
) -> f32 {
    let theme = ctx.theme;
    match block {
        Block::Diagram(kind) => diagrams::render(ctx, *kind, diagram, pos, width),
        Block::Terminal(body) => text::draw_terminal_text(ctx, body, pos, width),
        Block::Callout { icon, tone, text } => draw_callout(ctx, *icon, *tone, text, pos, width),
        Block::Note { icon, title, body } => draw_note(ctx, *icon, title, body, pos, width),
        Block::Columns(columns) => draw_columns(ctx, columns, pos, width, diagram),
        Block::Cards(cards) => draw_cards(ctx, cards, pos, width, 2),
        Block::Slogan { text, caption } => draw_slogan(ctx, text, caption, pos, width),
        Block::Rules(rules) => draw_rules(ctx, rules, pos, width),
        Block::List { marker, items } => {
            let color = match (tone, marker) {
                (Some(tone), _) => theme.tone(tone),
                (None, Marker::Dot) => theme.accent,
                (None, Marker::Check) => theme.tone(Tone::Green),
                (None, Marker::Cross) => theme.tone(Tone::Red),
            };
            text::draw_list(ctx, *marker, color, items, pos, width, ctx.s(theme.small_size + 4.0))
        }
        Block::Checks(items) => draw_checks(ctx, items, pos, width),
        Block::Emblem(icon, tone) => draw_emblem(ctx, *icon, *tone, pos, width),
        Block::Text(body) => text::draw_wrapped(
            ctx,
            body,
            FontId::proportional(ctx.s(theme.body_size)),
            theme.foreground,
            pos,
            width,
            centered,
        ),
        Block::Footnote(body) => {
            let top = ctx.s(32.0);
            top + text::draw_wrapped(
                ctx,
                body,
                FontId::proportional(ctx.s(theme.small_size - 2.0)),
                theme.faint,
                pos2(pos.x, pos.y + top),
                width,
                centered,
            )
        }
    }
}

fn draw_callout(ctx: &SlideCtx<'_>, icon: Icon, tone: Tone, body: &str, pos: Pos2, width: f32) -> f32 {
    let theme = ctx.theme;
    let color = theme.tone(tone);
    let pad = ctx.s(24.0);
    let icon_size = ctx.s(28.0);
    let gap = ctx.s(20.0);
    let galley = ctx.layout(
        body,
        FontId::proportional(ctx.s(theme.small_size + 2.0)),
        color,
        width - pad * 2.0 - icon_size - gap,
    );
    let height = galley.size().y.max(icon_size) + pad * 2.0;
    let rect = Rect::from_min_size(pos, vec2(width, height));
    ctx.panel(rect, ctx.s(16.0), theme.tint(tone, 0.1), theme.tint(tone, 0.3));
    let center = pos2(rect.left() + pad + icon_size / 2.0, rect.top() + pad + icon_size / 2.0);
    for shape in icons::shapes(icon, center, icon_size, color) {
        ctx.add(shape);
    }
    ctx.galley(pos2(rect.left() + pad + icon_size + gap, rect.top() + pad), galley, color);
    height
}

fn draw_note(ctx: &SlideCtx<'_>, icon: Icon, title: &str, body: &str, pos: Pos2, width: f32) -> f32 {
    let theme = ctx.theme;
    let pad = ctx.s(28.0);
    let icon_box = ctx.s(56.0);
    let gap = ctx.s(24.0);
    let text_w = width - pad * 2.0 - icon_box - gap;
    let title_g = ctx.layout(title, FontId::proportional(ctx.s(26.0)), theme.heading_color, text_w);
    let body_g = ctx.layout(body, FontId::proportional(ctx.s(theme.small_size)), theme.muted, text_w);
    let text_h = title_g.size().y + ctx.s(8.0) + body_g.size().y;
    let height = text_h.max(icon_box) + pad * 2.0;

    let rect = Rect::from_min_size(pos, vec2(width, height));
    ctx.panel(rect, ctx.s(20.0), theme.surface, theme.border);
    let accent = theme.tone(Tone::Yellow);
    let boxed = Rect::from_min_size(pos2(rect.left() + pad, rect.top() + pad), vec2(icon_box, icon_box));
    ctx.rect_filled(boxed, ctx.s(14.0), Theme::with_opacity(accent, 0.12));
    for shape in icons::shapes(icon, boxed.center(), ctx.s(28.0), accent) {
        ctx.add(shape);
    }
    let x = boxed.right() + gap;
    let title_h = title_g.size().y;
    ctx.galley(pos2(x, rect.top() + pad), title_g, theme.heading_color);
    ctx.galley(pos2(x, rect.top() + pad + title_h + ctx.s(8.0)), body_g, theme.muted);
    height
}

fn draw_columns(
    ctx: &SlideCtx<'_>,
    columns: &[Column],
    pos: Pos2,
    width: f32,
    diagram: Option<&DiagramState>,
) -> f32 {
    if columns.is_empty() {
        return 0.0;
    }
    let gap = ctx.s(48.0);
    let col_w = (width - gap * (columns.len() - 1) as f32) / columns.len() as f32;
    let mut height = 0.0f32;
    for (i, column) in columns.iter().enumerate() {
        let left = pos.x + i as f32 * (col_w + gap);
        height = height.max(draw_column(ctx, column, pos2(left, pos.y), col_w, diagram));
    }
    height
}

fn draw_column(ctx: &SlideCtx<'_>, column: &Column, pos: Pos2, width: f32, diagram: Option<&DiagramState>) -> f32 {
    let theme = ctx.theme;
    let color = theme.tone(column.tone);
    let pad = if column.boxed { ctx.s(28.0) } else { 0.0 };
    let inner = width - pad * 2.0;

    let draw = |at: Pos2| -> f32 {
        let header = ctx.s(40.0);
        let cy = at.y + header / 2.0;
        let mut x = at.x;
        if let Some(badge) = column.badge {
            let r = ctx.s(18.0);
            ctx.circle_filled(pos2(x + r, cy), r, color);
            ctx.text(
                pos2(x + r, cy),
                Align2::CENTER_CENTER,
                badge,
                FontId::proportional(ctx.s(18.0)),
                Color32::BLACK,
            );
            x += r * 2.0 + ctx.s(14.0);
        }
        if let Some(icon) = column.icon {
            let size = ctx.s(26.0);
            for shape in icons::shapes(icon, pos2(x + size / 2.0, cy), size, color) {
                ctx.add(shape);
            }
            x += size + ctx.s(12.0);
        }
        ctx.text(
            pos2(x, cy),
            Align2::LEFT_CENTER,
            column.title,
            FontId::proportional(ctx.s(28.0)),
            color,
        );
        let body_top = at.y + header + ctx.s(20.0);
        let body = draw_blocks(ctx, column.body, pos2(at.x, body_top), inner, false, Some(column.tone), diagram);
        body_top + body - at.y
    };

    let inset = pos + vec2(pad, pad);
    if column.boxed {
        let height = ctx.measure(|| draw(inset)) + pad * 2.0;
        ctx.panel(
            Rect::from_min_size(pos, vec2(width, height)),
            ctx.s(20.0),
            theme.tint(column.tone, 0.05),
            theme.tint(column.tone, 0.2),
        );
        draw(inset);
        height
    } else {
        draw(inset)
    }
}

fn draw_card(ctx: &SlideCtx<'_>, card: &Card, pos: Pos2, width: f32) -> f32 {
    let theme = ctx.theme;
    let pad = ctx.s(24.0);
    let inner = width - pad * 2.0;
    let quiet = card.tone == Tone::Gray;
    let title_color = if quiet { theme.faint } else { theme.tone(card.tone) };
    let title_size = if quiet { theme.small_size - 4.0 } else { 24.0 };

    let mut y = pos.y + pad;
    let mut x = pos.x + pad;
    let title = ctx.layout_no_wrap(card.title, FontId::proportional(ctx.s(title_size)), title_color);
    if let Some(icon) = card.icon {
        let size = ctx.s(20.0);
        let at = pos2(x + size / 2.0, y + title.size().y / 2.0);
        for shape in icons::shapes(icon, at, size, title_color) {
            ctx.add(shape);
        }
        x += size + ctx.s(10.0);
    }
    let title_h = title.size().y;
    ctx.galley(pos2(x, y), title, title_color);
    y += title_h + ctx.s(10.0);

    let (font, color) = if card.mono {
        let color = if quiet { theme.code_foreground } else { theme.muted };
        (FontId::monospace(ctx.s(theme.code_size)), color)
    } else {
        (FontId::proportional(ctx.s(theme.small_size - 2.0)), theme.muted)
    };
    let body = ctx.layout(card.body, font, color, inner);
    let body_h = body.size().y;
    ctx.galley(pos2(pos.x + pad, y), body, color);
    y + body_h + pad - pos.y
}

/// Grid of cards, row heights equalised. Returns height used.
pub fn draw_cards(ctx: &SlideCtx<'_>, cards: &[Card], pos: Pos2, width: f32, columns: usize) -> f32 {
    let theme = ctx.theme;
    let columns = columns.max(1);
    let gap = ctx.s(24.0);
    let card_w = (width - gap * (columns - 1) as f32) / columns as f32;
    let mut y = pos.y;
    for (r, row) in cards.chunks(columns).enumerate() {
        if r > 0 {
            y += gap;
        }
        let row_h = row
            .iter()
            .map(|card| ctx.measure(|| draw_card(ctx, card, pos2(pos.x, y), card_w)))
            .fold(0.0f32, f32::max);
        for (c, card) in row.iter().enumerate() {
            let at = pos2(pos.x + c as f32 * (card_w + gap), y);
            let (fill, border) = if card.mono {
                (Theme::with_opacity(theme.code_background, 0.8), theme.border)
            } else {
                (theme.surface, theme.border)
            };
            let border = if card.mono && card.tone != Tone::Gray && card.tone != Tone::Blue {
                theme.tint(card.tone, 0.3)
            } else {
                border
            };
            ctx.panel(Rect::from_min_size(at, vec2(card_w, row_h)), ctx.s(16.0), fill, border);
            draw_card(ctx, card, at, card_w);
        }
        y += row_h;
    }
    y - pos.y
}

fn draw_slogan(ctx: &SlideCtx<'_>, slogan: &str, caption: &str, pos: Pos2, width: f32) -> f32 {
    let theme = ctx.theme;
    let font = FontId::proportional(ctx.s(96.0));
    let chars: Vec<char> = slogan.chars().collect();
    let last = chars.len().saturating_sub(1).max(1) as f32;
    let mut job = LayoutJob::default();
    let mut buf = [0u8; 4];
    for (i, ch) in chars.iter().enumerate() {
        job.append(
            ch.encode_utf8(&mut buf),
            0.0,
            TextFormat {
                font_id: font.clone(),
                color: Theme::mix(ink::BLUE, ink::PURPLE, i as f32 / last),
                ..Default::default()
            },
        );
    }
    let galley = ctx.layout_job(job);
    let size = galley.size();
    let top = pos.y + ctx.s(24.0);
    ctx.galley(pos2(pos.x + (width - size.x) / 2.0, top), galley, ink::BLUE);

    let caption_w = width.min(ctx.s(1000.0));
    let caption_h = text::draw_wrapped(
        ctx,
        caption,
        FontId::proportional(ctx.s(theme.body_size)),
        theme.muted,
        pos2(pos.x + (width - caption_w) / 2.0, top + size.y + ctx.s(32.0)),
        caption_w,
        true,
    );
    top + size.y + ctx.s(32.0) + caption_h - pos.y
}

fn draw_rules(ctx: &SlideCtx<'_>, rules: &[Rule], pos: Pos2, width: f32) -> f32 {
    let theme = ctx.theme;
    let center_x = pos.x + width / 2.0;
    let mut y = pos.y;
    for (i, rule) in rules.iter().enumerate() {
        if i > 0 {
            y += ctx.s(48.0);
        }
        let (alpha, travel) = enter(ctx.age, 0.3 + 0.15 * i as f32, 20.0);
        let row = ctx.faded(alpha);
        let top = y + ctx.s(travel);
        let number = row.text(
            pos2(center_x, top),
            Align2::CENTER_TOP,
            rule.number,
            FontId::proportional(ctx.s(72.0)),
            theme.tone(rule.tone),
        );
        let label = row.text(
            pos2(center_x, number.bottom() + ctx.s(8.0)),
            Align2::CENTER_TOP,
            rule.text,
            FontId::proportional(ctx.s(36.0)),
            theme.heading_color,
        );
        y = label.bottom() - ctx.s(travel);
    }
    y - pos.y
}

fn draw_checks(ctx: &SlideCtx<'_>, items: &[&str], pos: Pos2, width: f32) -> f32 {
    let theme = ctx.theme;
    let font = FontId::proportional(ctx.s(theme.small_size));
    let marker = ctx.s(22.0);
    let inner_gap = ctx.s(10.0);
    let gap = ctx.s(40.0);
    let galleys: Vec<_> = items
        .iter()
        .map(|item| ctx.layout_no_wrap(item, font.clone(), theme.muted))
        .collect();
    let total: f32 = galleys.iter().map(|g| marker + inner_gap + g.size().x).sum::<f32>()
        + gap * galleys.len().saturating_sub(1) as f32;
    let height = galleys.iter().map(|g| g.size().y).fold(marker, f32::max);
    let mut x = pos.x + (width - total) / 2.0;
    let cy = pos.y + height / 2.0;
    let green = theme.tone(Tone::Green);
    for galley in galleys {
        text::draw_marker(ctx, Marker::Check, pos2(x + marker / 2.0, cy), marker, green);
        x += marker + inner_gap;
        let size = galley.size();
        ctx.galley(pos2(x, cy - size.y / 2.0), galley, theme.muted);
        x += size.x + gap;
    }
    height
}

fn draw_emblem(ctx: &SlideCtx<'_>, icon: Icon, tone: Tone, pos: Pos2, width: f32) -> f32 {
    let theme = ctx.theme;
    let radius = ctx.s(48.0);
    let center = pos2(pos.x + width / 2.0, pos.y + radius);
    let breath = 0.6 + 0.4 * pulse(ctx.age, 2.0);
    ctx.circle_filled(center, radius, theme.tint(tone, 0.2 * breath));
    for shape in icons::shapes(icon, center, ctx.s(48.0), theme.tone(tone)) {
        ctx.add(shape);
    }
    radius * 2.0
}
