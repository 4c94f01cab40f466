use eframe::egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, pos2, vec2};

use crate::deck::{Marker, Table};
use crate::render::SlideCtx;
use crate::theme::Theme;

/// Wrapped text block, optionally centred within `max_width`. Returns height used.
pub fn draw_wrapped(
    ctx: &SlideCtx<'_>,
    text: &str,
    font: FontId,
    color: Color32,
    pos: Pos2,
    max_width: f32,
    centered: bool,
) -> f32 {
    let galley = ctx.layout(text, font, color, max_width);
    let size = galley.size();
    let x = if centered {
        pos.x + (max_width - size.x) / 2.0
    } else {
        pos.x
    };
    ctx.galley(pos2(x, pos.y), galley, color);
    size.y
}

fn terminal_header(ctx: &SlideCtx<'_>, rect: Rect) -> f32 {
    let bar = ctx.s(36.0);
    let lights = [
        Color32::from_rgb(0xEF, 0x44, 0x44),
        Color32::from_rgb(0xEA, 0xB3, 0x08),
        Color32::from_rgb(0x22, 0xC5, 0x5E),
    ];
    for (i, color) in lights.into_iter().enumerate() {
        let center = pos2(
            rect.left() + ctx.s(20.0 + i as f32 * 18.0),
            rect.top() + bar / 2.0,
        );
        ctx.circle_filled(center, ctx.s(5.0), Theme::with_opacity(color, 0.8));
    }
    ctx.line_segment(
        [
            pos2(rect.left(), rect.top() + bar),
            pos2(rect.right(), rect.top() + bar),
        ],
        Stroke::new(1.0, Theme::with_opacity(Color32::WHITE, 0.08)),
    );
    bar
}

/// Terminal-styled panel with shell highlighting. Returns height used.
pub fn draw_code_block(ctx: &SlideCtx<'_>, code: &str, pos: Pos2, max_width: f32) -> f32 {
    let theme = ctx.theme;
    let padding = ctx.s(24.0);
    let job = crate::render::syntax::highlight_code(
        code,
        Some("bash"),
        ctx.s(theme.code_size),
        theme,
        max_width - padding * 2.0,
    );
    let galley = ctx.layout_job(job);
    let header = ctx.s(36.0);
    let total_height = header + galley.size().y + padding * 2.0;

    let rect = Rect::from_min_size(pos, vec2(max_width, total_height));
    ctx.panel(
        rect,
        ctx.s(12.0),
        theme.code_background,
        Theme::with_opacity(Color32::WHITE, 0.1),
    );
    terminal_header(ctx, rect);
    ctx.galley(
        pos2(pos.x + padding, pos.y + header + padding),
        galley,
        theme.code_foreground,
    );
    total_height
}

/// Monospace panel without highlighting, for ASCII history sketches.
pub fn draw_terminal_text(ctx: &SlideCtx<'_>, text: &str, pos: Pos2, max_width: f32) -> f32 {
    let theme = ctx.theme;
    let padding = ctx.s(20.0);
    let galley = ctx.layout(
        text,
        FontId::monospace(ctx.s(theme.code_size)),
        theme.code_foreground,
        max_width - padding * 2.0,
    );
    let total_height = galley.size().y + padding * 2.0;
    let rect = Rect::from_min_size(pos, vec2(max_width, total_height));
    ctx.panel(
        rect,
        ctx.s(12.0),
        theme.code_background,
        Theme::with_opacity(Color32::WHITE, 0.1),
    );
    ctx.galley(pos + vec2(padding, padding), galley, theme.code_foreground);
    total_height
}

/// Draw a table. Rows may be ragged; missing cells are left blank and extra
/// cells get their own column. Returns height used.
pub fn draw_table(ctx: &SlideCtx<'_>, table: &Table, pos: Pos2, max_width: f32) -> f32 {
    let theme = ctx.theme;
    let cell_padding = ctx.s(14.0);
    let font_size = ctx.s(theme.small_size);

    let num_cols = table
        .rows
        .iter()
        .map(|r| r.len())
        .chain(std::iter::once(table.headers.len()))
        .max()
        .unwrap_or(0)
        .max(1);
    let col_width = (max_width - cell_padding * 2.0) / num_cols as f32;

    let mut y = pos.y;

    let draw_row = |cells: &[&str], color: Color32, y: f32| -> f32 {
        let mut row_height = 0.0f32;
        for (col, cell) in cells.iter().enumerate() {
            let cell_pos = pos2(
                pos.x + cell_padding + col as f32 * col_width,
                y + cell_padding,
            );
            let galley = ctx.layout(
                cell,
                FontId::proportional(font_size),
                color,
                col_width - cell_padding,
            );
            row_height = row_height.max(galley.size().y);
            ctx.galley(cell_pos, galley, color);
        }
        row_height + cell_padding * 2.0
    };

    let header_height = ctx.measure(|| draw_row(table.headers, theme.muted, y));
    ctx.rect_filled(
        Rect::from_min_size(pos2(pos.x, y), vec2(max_width, header_height)),
        ctx.s(8.0),
        theme.surface,
    );
    y += draw_row(table.headers, theme.muted, y);

    for row in table.rows {
        ctx.line_segment(
            [pos2(pos.x, y), pos2(pos.x + max_width, y)],
            Stroke::new(1.0, theme.border),
        );
        y += draw_row(row, theme.foreground, y);
    }

    y - pos.y
}

/// Small leading glyph for list items.
pub fn draw_marker(ctx: &SlideCtx<'_>, marker: Marker, center: Pos2, size: f32, color: Color32) {
    let stroke = Stroke::new(ctx.s(2.5).max(1.0), color);
    let h = size / 2.0;
    match marker {
        Marker::Dot => ctx.circle_filled(center, size * 0.18, color),
        Marker::Check => ctx.line(
            vec![
                center + vec2(-h * 0.7, 0.0),
                center + vec2(-h * 0.2, h * 0.5),
                center + vec2(h * 0.7, -h * 0.5),
            ],
            stroke,
        ),
        Marker::Cross => {
            ctx.line_segment(
                [center + vec2(-h * 0.55, -h * 0.55), center + vec2(h * 0.55, h * 0.55)],
                stroke,
            );
            ctx.line_segment(
                [center + vec2(h * 0.55, -h * 0.55), center + vec2(-h * 0.55, h * 0.55)],
                stroke,
            );
        }
    }
}

/// Draw a marked list. Returns height used.
#[allow(clippy::too_many_arguments)]
pub fn draw_list(
    ctx: &SlideCtx<'_>,
    marker: Marker,
    marker_color: Color32,
    items: &[&str],
    pos: Pos2,
    max_width: f32,
    font_size: f32,
) -> f32 {
    let indent = font_size * 1.4;
    let spacing = font_size * 0.5;
    let mut y = pos.y;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            y += spacing;
        }
        let galley = ctx.layout(
            item,
            FontId::proportional(font_size),
            ctx.theme.foreground,
            max_width - indent,
        );
        let first_row = galley.rows.first().map_or(font_size, |r| r.rect().height());
        draw_marker(
            ctx,
            marker,
            pos2(pos.x + font_size * 0.5, y + first_row / 2.0),
            font_size,
            marker_color,
        );
        let h = galley.size().y;
        ctx.galley(pos2(pos.x + indent, y), galley, ctx.theme.foreground);
        y += h;
    }
    y - pos.y
}

/// Small rounded pill with centred text, e.g. a step badge. Returns its rect.
pub fn draw_pill(
    ctx: &SlideCtx<'_>,
    text: &str,
    center: Pos2,
    font: FontId,
    fg: Color32,
    bg: Color32,
    border: Color32,
) -> Rect {
    let galley = ctx.layout_no_wrap(text, font, fg);
    let pad = vec2(ctx.s(18.0), ctx.s(8.0));
    let rect = Rect::from_center_size(center, galley.size() + pad * 2.0);
    ctx.panel(rect, rect.height() / 2.0, bg, border);
    ctx.galley(
        Align2::CENTER_CENTER.anchor_size(center, galley.size()).min,
        galley,
        fg,
    );
    rect
}
