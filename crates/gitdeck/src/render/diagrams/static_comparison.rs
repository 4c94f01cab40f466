//! Side-by-side history graphs: a tangle of merges next to a rebased line.

use std::sync::OnceLock;

use eframe::egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, pos2, vec2};

use super::{ViewBox, draw_path, flatten_all};
use crate::animation::{Ease, fade_in, tween};
use crate::deck::Marker;
use crate::render::{SlideCtx, text};
use crate::theme::{Theme, ink};

const VIEW_W: f32 = 400.0;
const VIEW_H: f32 = 200.0;
const MAIN_Y: f32 = 100.0;

const TANGLE: [(&str, Color32); 7] = [
    (
        "M 20 100 C 35 100, 35 130, 50 130 L 65 130 C 75 130, 75 100, 80 100",
        ink::PINK,
    ),
    (
        "M 50 100 C 65 100, 65 70, 80 70 L 125 70 C 135 70, 135 100, 140 100",
        ink::PURPLE,
    ),
    (
        "M 50 100 C 65 100, 65 40, 80 40 L 215 40 C 225 40, 225 100, 230 100",
        ink::LIME,
    ),
    (
        "M 80 100 C 95 100, 95 130, 110 130 L 245 130 C 255 130, 255 100, 260 100",
        ink::BLUE,
    ),
    (
        "M 170 130 C 185 130, 185 160, 200 160 L 275 160 C 285 160, 285 100, 290 100",
        ink::GREEN,
    ),
    (
        "M 200 100 C 215 100, 215 70, 230 70 L 305 70 C 315 70, 315 100, 320 100",
        ink::CYAN,
    ),
    (
        "M 260 100 C 275 100, 275 40, 290 40 L 335 40 C 345 40, 345 100, 350 100",
        ink::AMBER,
    ),
];

fn tangle() -> &'static [Vec<Pos2>] {
    static FLAT: OnceLock<Vec<Vec<Pos2>>> = OnceLock::new();
    FLAT.get_or_init(|| {
        let table: Vec<&str> = TANGLE.iter().map(|(d, _)| *d).collect();
        flatten_all(&table)
    })
}

const TRUNK_COMMITS: [f32; 6] = [20.0, 50.0, 110.0, 170.0, 200.0, 380.0];
const MERGE_COMMITS: [f32; 7] = [80.0, 140.0, 230.0, 260.0, 290.0, 320.0, 350.0];

/// `(x, y, color)` of commits sitting on side branches.
fn branch_commits() -> Vec<(f32, f32, Color32)> {
    let mut out = vec![
        (50.0, 130.0, ink::PINK),
        (80.0, 70.0, ink::PURPLE),
        (110.0, 70.0, ink::PURPLE),
    ];
    let runs: [(&[f32], f32, Color32); 5] = [
        (&[80.0, 110.0, 140.0, 170.0, 200.0], 40.0, ink::LIME),
        (&[110.0, 140.0, 170.0, 200.0, 230.0], 130.0, ink::BLUE),
        (&[200.0, 230.0, 260.0], 160.0, ink::GREEN),
        (&[230.0, 260.0, 290.0], 70.0, ink::CYAN),
        (&[290.0, 320.0], 40.0, ink::AMBER),
    ];
    for (xs, y, color) in runs {
        out.extend(xs.iter().map(|&x| (x, y, color)));
    }
    out
}

/// Feature groups on the rebased line: `(left, width, commits, color)`.
const GROUPS: [(f32, f32, &[f32], Color32); 4] = [
    (75.0, 40.0, &[95.0], ink::PINK),
    (125.0, 55.0, &[140.0, 165.0], ink::PURPLE),
    (190.0, 105.0, &[205.0, 230.0, 255.0, 280.0], ink::GREEN),
    (305.0, 55.0, &[320.0, 345.0], ink::AMBER),
];

fn draw_tangle(ctx: &SlideCtx<'_>, vb: &ViewBox) {
    for ((_, color), points) in TANGLE.iter().zip(tangle()) {
        draw_path(ctx, vb, points, 1.0, 2.0, Theme::with_opacity(*color, 0.8), None);
    }
    let trunk = [pos2(20.0, MAIN_Y), pos2(380.0, MAIN_Y)];
    draw_path(ctx, vb, &trunk, 1.0, 4.0, Color32::from_rgb(0x33, 0x33, 0x33), None);

    for x in TRUNK_COMMITS {
        ctx.circle_filled(vb.at(x, MAIN_Y), vb.len(4.0), ink::GRAY);
    }
    for x in MERGE_COMMITS {
        let c = vb.at(x, MAIN_Y);
        ctx.circle_filled(c, vb.len(5.0), ink::RED);
        ctx.circle_stroke(c, vb.len(5.0), Stroke::new(vb.len(1.5), Color32::BLACK));
    }
    for (x, y, color) in branch_commits() {
        ctx.circle_filled(vb.at(x, y), vb.len(3.0), color);
    }
}

fn draw_linear(ctx: &SlideCtx<'_>, vb: &ViewBox) {
    let line = [pos2(20.0, MAIN_Y), pos2(380.0, MAIN_Y)];
    draw_path(ctx, vb, &line, 1.0, 4.0, ink::BLUE, None);

    for (left, width, commits, color) in GROUPS {
        let group = Rect::from_min_size(vb.at(left, MAIN_Y - 15.0), vec2(vb.len(width), vb.len(30.0)));
        ctx.rect_filled(group, vb.len(15.0), Theme::with_opacity(color, 0.15));
        for &x in commits {
            ctx.circle_filled(vb.at(x, MAIN_Y), vb.len(5.0), color);
        }
    }
    for x in [30.0, 55.0, 375.0] {
        ctx.circle_filled(vb.at(x, MAIN_Y), vb.len(5.0), ink::BLUE);
    }
}

struct Panel {
    title: &'static str,
    short_title: &'static str,
    tag: &'static str,
    color: Color32,
    delay: f32,
    marker: Marker,
    bullets: &'static [&'static str],
    graph: fn(&SlideCtx<'_>, &ViewBox),
}

const PANELS: [Panel; 2] = [
    Panel {
        title: "1. 极端复杂的多人异步协作历史",
        short_title: "历史图 A",
        tag: "铁路乱麻",
        color: ink::RED,
        delay: 0.2,
        marker: Marker::Cross,
        bullets: &[
            "7个并行开发分支，提交线极度交织，语义全失",
            "主干几乎被 Merge 节点淹没，正常的提交逻辑被彻底碎片化",
            "大型项目若不采用 Rebase，历史图谱将永久沦为“不可读状态”",
        ],
        graph: draw_tangle,
    },
    Panel {
        title: "2. Rebase 后的线性历史",
        short_title: "历史图 B",
        tag: "逻辑序列",
        color: ink::GREEN,
        delay: 0.4,
        marker: Marker::Check,
        bullets: &[
            "每个功能表现为一段连续的、逻辑严密的提交区间",
            "即使分支再多，变基后也会按逻辑顺序整齐排列",
            "故障定位时，只需关注逻辑分界点，噪音为零",
        ],
        graph: draw_linear,
    },
];

const RISE_SECS: f32 = 0.6;

/// Seconds after mount until both panels rest in place.
pub fn intro_secs() -> f32 {
    PANELS
        .iter()
        .map(|panel| panel.delay + RISE_SECS)
        .fold(0.0, f32::max)
}

fn draw_panel(ctx: &SlideCtx<'_>, panel: &Panel, minimal: bool, pos: Pos2, width: f32) -> f32 {
    let theme = ctx.theme;
    let pad = ctx.s(24.0);
    let inner = width - pad * 2.0;
    let mut y = pos.y + pad;

    let title = if minimal { panel.short_title } else { panel.title };
    let title_rect = ctx.text(
        pos2(pos.x + pad, y),
        Align2::LEFT_TOP,
        title,
        FontId::proportional(ctx.s(24.0)),
        panel.color,
    );
    if !minimal {
        text::draw_pill(
            ctx,
            panel.tag,
            pos2(pos.x + width - pad - ctx.s(50.0), title_rect.center().y),
            FontId::proportional(ctx.s(13.0)),
            panel.color,
            Theme::with_opacity(panel.color, 0.1),
            Theme::with_opacity(panel.color, 0.3),
        );
    }
    y = title_rect.bottom() + ctx.s(16.0);

    let graph_h = if minimal { ctx.s(220.0) } else { ctx.s(240.0) };
    let graph = Rect::from_min_size(pos2(pos.x + pad, y), vec2(inner, graph_h));
    ctx.panel(graph, ctx.s(16.0), Color32::from_black_alpha(90), theme.border);
    let vb = ViewBox::fit(graph.shrink(ctx.s(8.0)), VIEW_W, VIEW_H);
    (panel.graph)(ctx, &vb);
    y = graph.bottom();

    if !minimal {
        y += ctx.s(20.0);
        y += text::draw_list(
            ctx,
            panel.marker,
            panel.color,
            panel.bullets,
            pos2(pos.x + pad, y),
            inner,
            ctx.s(18.0),
        );
    }
    y + pad - pos.y
}

/// Both history panels side by side. Returns the height used.
pub fn render(ctx: &SlideCtx<'_>, minimal: bool, age: f32, pos: Pos2, width: f32) -> f32 {
    let gap = ctx.s(32.0);
    let panel_w = (width - gap) / 2.0;
    let mut height = 0.0f32;
    for (i, panel) in PANELS.iter().enumerate() {
        let left = pos.x + i as f32 * (panel_w + gap);
        let rise = tween(age, panel.delay, RISE_SECS, 20.0, 0.0, Ease::OutCubic);
        let faded = ctx.faded(fade_in(age, panel.delay));
        let top = pos2(left, pos.y + ctx.s(rise));

        let h = faded.measure(|| draw_panel(&faded, panel, minimal, top, panel_w));
        faded.panel(
            Rect::from_min_size(top, vec2(panel_w, h)),
            ctx.s(24.0),
            ctx.theme.surface,
            Theme::with_opacity(panel.color, 0.2),
        );
        draw_panel(&faded, panel, minimal, top, panel_w);
        height = height.max(h + ctx.s(rise));
    }
    height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tangle_paths_parse_and_return_to_the_trunk() {
        let flat = tangle();
        assert_eq!(flat.len(), TANGLE.len());
        for points in flat {
            let end = points.last().copied().unwrap_or(pos2(0.0, 0.0));
            assert_eq!(end.y, MAIN_Y);
        }
    }

    #[test]
    fn every_merge_lands_where_a_branch_rejoins() {
        let ends: Vec<f32> = tangle()
            .iter()
            .filter_map(|p| p.last().map(|e| e.x))
            .collect();
        for x in MERGE_COMMITS {
            assert!(ends.contains(&x), "merge at {x} has no incoming branch");
        }
    }

    #[test]
    fn branch_commits_cover_seven_branches() {
        let commits = branch_commits();
        assert_eq!(commits.len(), 21);
        let mut colors: Vec<Color32> = commits.iter().map(|c| c.2).collect();
        colors.dedup();
        assert_eq!(colors.len(), 7);
    }

    #[test]
    fn intro_ends_once_the_last_panel_has_risen() {
        assert!((intro_secs() - 1.0).abs() < 1e-6);
        let last = PANELS.iter().map(|p| p.delay).fold(0.0, f32::max);
        assert_eq!(tween(intro_secs(), last, RISE_SECS, 20.0, 0.0, Ease::OutCubic), 0.0);
        assert_eq!(fade_in(intro_secs(), last), 1.0);
    }

    #[test]
    fn rebased_groups_do_not_overlap() {
        for pair in GROUPS.windows(2) {
            let (left, width, ..) = pair[0];
            assert!(left + width <= pair[1].0);
        }
        for (left, width, commits, _) in GROUPS {
            assert!(commits.iter().all(|&x| x > left && x < left + width));
        }
    }
}
