use eframe::egui::{Align2, FontId, Pos2, Rect, Stroke, pos2, vec2};

use crate::animation::progress;
use crate::deck::{ComparisonSlide, Icon, Tone};
use crate::render::layouts::{content_area, draw_title, enter, place};
use crate::render::{SlideCtx, icons};
use crate::theme::Theme;

/// Column weights of the label, merge and rebase columns.
const WEIGHTS: [f32; 3] = [1.0, 1.5, 1.5];

fn column_edges(left: f32, width: f32) -> [f32; 4] {
    let total: f32 = WEIGHTS.iter().sum();
    let mut edges = [left; 4];
    for i in 0..3 {
        edges[i + 1] = edges[i] + width * WEIGHTS[i] / total;
    }
    edges
}

pub fn render(ctx: &SlideCtx<'_>, slide: &ComparisonSlide, rect: Rect) {
    let area = content_area(ctx, rect);
    let width = area.width();
    place(ctx, area, |pos| {
        let mut y = pos.y;
        y += draw_title(ctx, slide.title, pos, width, false);
        y += ctx.s(48.0);
        y += draw_grid(ctx, slide, pos2(pos.x, y), width);
        y += ctx.s(40.0);
        y += draw_note(ctx, slide.note, pos2(pos.x, y), width);
        y - pos.y
    });
}

fn draw_grid(ctx: &SlideCtx<'_>, slide: &ComparisonSlide, pos: Pos2, width: f32) -> f32 {
    let theme = ctx.theme;
    let edges = column_edges(pos.x, width);
    let pad = ctx.s(24.0);
    let cell_w = |col: usize| edges[col + 1] - edges[col] - pad * 2.0;
    let border = Stroke::new(ctx.s(1.0).max(1.0), theme.border);

    // Header.
    let header_h = ctx.s(72.0);
    let header = Rect::from_min_size(pos, vec2(width, header_h));
    ctx.rect_filled(header, ctx.s(16.0), theme.border);
    let cy = header.center().y;
    ctx.text(
        pos2(edges[0] + pad, cy),
        Align2::LEFT_CENTER,
        slide.label_header,
        FontId::proportional(ctx.s(theme.small_size - 2.0)),
        theme.faint,
    );
    for (col, title, icon, tone) in [
        (1, slide.merge_header, Icon::XCircle, Tone::Red),
        (2, slide.rebase_header, Icon::CheckCircle, Tone::Blue),
    ] {
        let color = theme.tone(tone);
        let size = ctx.s(24.0);
        let x = edges[col] + pad;
        for shape in icons::shapes(icon, pos2(x + size / 2.0, cy), size, color) {
            ctx.add(shape);
        }
        ctx.text(
            pos2(x + size + ctx.s(12.0), cy),
            Align2::LEFT_CENTER,
            title,
            FontId::proportional(ctx.s(26.0)),
            color,
        );
    }

    let mut y = header.bottom();
    let font = FontId::proportional(ctx.s(theme.small_size + 2.0));
    for (i, row) in slide.rows.iter().enumerate() {
        let (alpha, travel) = enter(ctx.age, 0.2 + 0.05 * i as f32, 10.0);
        let line = ctx.faded(alpha);
        let cells = [
            (row.label, theme.muted),
            (row.merge, theme.faint),
            (row.rebase, theme.foreground),
        ];
        let galleys: Vec<_> = cells
            .iter()
            .enumerate()
            .map(|(col, (text, color))| line.layout(text, font.clone(), *color, cell_w(col)))
            .collect();
        let row_h = galleys.iter().map(|g| g.size().y).fold(0.0f32, f32::max) + pad * 2.0;
        let top = y + ctx.s(travel);
        for ((col, galley), (_, color)) in galleys.into_iter().enumerate().zip(cells) {
            line.galley(pos2(edges[col] + pad, top + pad), galley, color);
        }
        y += row_h;
        if i + 1 < slide.rows.len() {
            line.line_segment([pos2(pos.x, y), pos2(pos.x + width, y)], border);
        }
    }
    y - pos.y
}

fn draw_note(ctx: &SlideCtx<'_>, note: &str, pos: Pos2, width: f32) -> f32 {
    let theme = ctx.theme;
    let faded = ctx.faded(progress(ctx.age, 0.6, 0.5));
    let color = theme.tone(Tone::Blue);
    let pad = ctx.s(24.0);
    let icon = ctx.s(26.0);
    let gap = ctx.s(16.0);
    let galley = faded.layout(
        note,
        FontId::proportional(ctx.s(theme.small_size + 2.0)),
        theme.foreground,
        width - pad * 2.0 - icon - gap,
    );
    let height = galley.size().y.max(icon) + pad * 2.0;
    let rect = Rect::from_min_size(pos, vec2(width, height));
    faded.panel(rect, ctx.s(16.0), theme.tint(Tone::Blue, 0.1), theme.tint(Tone::Blue, 0.3));
    let center = pos2(rect.left() + pad + icon / 2.0, rect.top() + pad + icon / 2.0);
    for shape in icons::shapes(Icon::AlertTriangle, center, icon, color) {
        faded.add(shape);
    }
    faded.galley(
        pos2(rect.left() + pad + icon + gap, rect.top() + pad),
        galley,
        Theme::with_opacity(theme.foreground, 0.9),
    );
    height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_split_one_to_one_and_a_half() {
        let edges = column_edges(100.0, 400.0);
        assert_eq!(edges[0], 100.0);
        assert!((edges[1] - 200.0).abs() < 1e-4);
        assert!((edges[2] - 350.0).abs() < 1e-4);
        assert!((edges[3] - 500.0).abs() < 1e-4);
    }
}
