//! Five developers, one checkout, and what repeated merges do to history.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use eframe::egui::{Align2, Color32, FontId, Mesh, Pos2, Rect, Shape, Stroke, pos2, vec2};

use super::{ViewBox, draw_path, flatten_all};
use crate::animation::{Ease, StageTimer, fade_in, keyframes, lerp, progress, pulse, tween};
use crate::deck::Icon;
use crate::render::{SlideCtx, icons};
use crate::theme::{Theme, ink};

pub const STAGES: usize = 5;
pub const INTERVAL: Duration = Duration::from_millis(4500);

const VIEW_W: f32 = 800.0;
const VIEW_H: f32 = 400.0;

pub fn timer(now: Instant) -> StageTimer {
    StageTimer::new(now, INTERVAL, STAGES)
}

struct Developer {
    id: &'static str,
    name: &'static str,
    task: &'static str,
    color: Color32,
}

const DEVELOPERS: [Developer; 5] = [
    Developer {
        id: "A",
        name: "张三",
        task: "Auth",
        color: ink::RED,
    },
    Developer {
        id: "B",
        name: "李四",
        task: "User",
        color: ink::BLUE,
    },
    Developer {
        id: "C",
        name: "王五",
        task: "Pay",
        color: ink::GREEN,
    },
    Developer {
        id: "D",
        name: "赵六",
        task: "Cart",
        color: ink::AMBER,
    },
    Developer {
        id: "E",
        name: "小陈",
        task: "CSS",
        color: ink::PURPLE,
    },
];

/// Read-outs shown under the canvas for one stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub title: &'static str,
    pub description: &'static str,
    /// History noise in percent.
    pub noise: u32,
    pub bisect: &'static str,
    pub stress: &'static str,
    /// Fill of the load bar in `0..=1`.
    pub load: f32,
    pub color: Color32,
}

pub fn metrics(stage: usize) -> Metrics {
    let stage = stage.min(STAGES - 1);
    const TITLES: [&str; STAGES] = ["宁静开端", "并发发散", "逻辑交叉", "混沌初现", "熵增爆发"];
    const DESCRIPTIONS: [&str; STAGES] = [
        "项目起始：所有人都基于同一个 commit 检出，这是历史中唯一的‘有序’时刻。",
        "并发工作：团队成员各自启动任务。在没有合并之前，各个分支的历史保持平行。",
        "回填合并：李四通过 Standard Merge 尝试同步主干，导致历史图谱产生多余节点，破坏线性。",
        "复杂度激增：更多人加入交叉合并，开发意图被揉碎在层叠的合并节点中。",
        "最终摊牌：当所有乱麻尝试回归主干，逻辑冲突、无效测试和难以定位的 Bug 将全面爆发。",
    ];
    const BISECT: [&str; STAGES] = ["线性", "多项式", "指数", "混沌", "Infinity"];
    const STRESS: [&str; STAGES] = ["ZEN", "ZEN", "HIGH", "STRESS", "CRITICAL"];
    const COLORS: [Color32; STAGES] = [ink::BLUE, ink::GREEN, ink::AMBER, ink::ORANGE, ink::RED];

    Metrics {
        title: TITLES[stage],
        description: DESCRIPTIONS[stage],
        noise: (stage as u32 * 24 + 5).min(93),
        bisect: BISECT[stage],
        stress: STRESS[stage],
        load: (stage + 1) as f32 * 0.2,
        color: COLORS[stage],
    }
}

/// Seconds since the group introduced at stage `group` appeared, if shown.
fn group_age(stage: usize, stage_time: f32, group: usize) -> Option<f32> {
    (stage >= group).then(|| (stage - group) as f32 * INTERVAL.as_secs_f32() + stage_time)
}

const PATHS: [&str; 9] = [
    // Stage 1: parallel work.
    "M 100 200 C 150 200, 200 80, 300 80 L 500 80",
    "M 100 200 C 180 200, 250 280, 320 280 L 600 280",
    "M 100 200 C 150 200, 250 340, 400 340 L 550 340",
    // Stage 2: back-merge of main into User.
    "M 320 200 C 330 200, 380 280, 320 280",
    // Stage 3: cross merges.
    "M 320 280 C 450 280, 500 40, 600 40 L 700 40",
    "M 400 340 C 550 340, 600 160, 720 160",
    // Stage 4: everything converges.
    "M 700 40 C 740 40, 745 200, 750 200",
    "M 720 160 C 740 160, 745 200, 750 200",
    "M 600 280 C 700 280, 740 200, 750 200",
];

fn paths() -> &'static [Vec<Pos2>] {
    static FLAT: OnceLock<Vec<Vec<Pos2>>> = OnceLock::new();
    FLAT.get_or_init(|| flatten_all(&PATHS))
}

/// `(path, group, delay, duration, color, width, dash)`
type Stroked = (usize, usize, f32, f32, Color32, f32, Option<(f32, f32)>);

const GRAY: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);

const STROKES: [Stroked; 9] = [
    (0, 1, 0.0, 1.5, ink::RED, 3.0, None),
    (1, 1, 0.2, 1.5, ink::BLUE, 3.0, None),
    (2, 1, 0.4, 1.5, ink::GREEN, 3.0, None),
    (3, 2, 0.0, 0.8, GRAY, 2.0, Some((4.0, 4.0))),
    (4, 3, 0.0, 0.8, ink::AMBER, 3.0, None),
    (5, 3, 0.0, 0.8, ink::PURPLE, 3.0, None),
    (6, 4, 0.0, 0.8, ink::AMBER, 3.0, None),
    (7, 4, 0.0, 0.8, ink::PURPLE, 3.0, None),
    (8, 4, 0.0, 0.8, ink::BLUE, 3.0, None),
];

/// `(x, y, group, delay, color, radius)`
const COMMITS: [(f32, f32, usize, f32, Color32, f32); 10] = [
    (181.25, 140.0, 1, 0.8, ink::RED, 4.0),
    (300.0, 80.0, 1, 1.2, ink::RED, 4.0),
    (213.75, 240.0, 1, 1.0, ink::BLUE, 4.0),
    (350.0, 280.0, 1, 1.4, ink::BLUE, 4.0),
    (212.5, 270.0, 1, 1.3, ink::GREEN, 4.0),
    (320.0, 280.0, 2, 0.5, ink::BLUE, 8.0),
    (420.0, 225.0, 2, 0.6, Color32::from_rgb(0x55, 0x55, 0x55), 4.0),
    (500.0, 140.0, 3, 0.5, ink::AMBER, 4.0),
    (625.0, 232.0, 3, 0.7, ink::PURPLE, 4.0),
    (100.0, 200.0, 0, 0.2, ink::BLUE, 6.0),
];

fn draw_developers(ctx: &SlideCtx<'_>, stage: usize, rect: Rect) {
    let theme = ctx.theme;
    let gap = ctx.s(16.0);
    let w = (rect.width() - gap * 4.0) / 5.0;
    let active = stage >= 1;
    for (i, dev) in DEVELOPERS.iter().enumerate() {
        let lift = if stage == 1 { ctx.s(4.0) } else { 0.0 };
        let card = Rect::from_min_size(
            pos2(rect.left() + i as f32 * (w + gap), rect.top() - lift),
            vec2(w, rect.height()),
        );
        let alpha = if active { 1.0 } else { 0.3 };
        let border = if active {
            Theme::with_opacity(dev.color, 0.25)
        } else {
            theme.border
        };
        ctx.panel(
            card,
            ctx.s(16.0),
            Theme::with_opacity(theme.code_background, 0.6 * alpha),
            border,
        );
        // Thick bottom edge.
        ctx.rect_filled(
            Rect::from_min_max(pos2(card.left() + ctx.s(10.0), card.bottom() - ctx.s(4.0)), pos2(card.right() - ctx.s(10.0), card.bottom())),
            ctx.s(2.0),
            Theme::with_opacity(border, alpha),
        );

        let avatar = pos2(card.center().x, card.top() + ctx.s(30.0));
        ctx.circle_filled(avatar, ctx.s(20.0), Theme::with_opacity(dev.color, 0.12 * alpha));
        ctx.text(
            avatar,
            Align2::CENTER_CENTER,
            dev.id,
            FontId::proportional(ctx.s(16.0)),
            Theme::with_opacity(dev.color, alpha),
        );
        ctx.text(
            pos2(card.center().x, avatar.y + ctx.s(34.0)),
            Align2::CENTER_CENTER,
            dev.name,
            FontId::proportional(ctx.s(14.0)),
            Theme::with_opacity(theme.foreground, alpha),
        );
        ctx.text(
            pos2(card.center().x, avatar.y + ctx.s(56.0)),
            Align2::CENTER_CENTER,
            dev.task,
            FontId::monospace(ctx.s(11.0)),
            Theme::with_opacity(theme.faint, alpha),
        );
    }
}

fn draw_canvas(ctx: &SlideCtx<'_>, stage: usize, stage_time: f32, canvas: Rect) {
    let theme = ctx.theme;
    let critical = stage == STAGES - 1;
    let border = if critical {
        Theme::with_opacity(ink::RED, 0.5)
    } else {
        theme.border
    };
    ctx.panel(
        canvas,
        ctx.s(24.0),
        Theme::with_opacity(theme.code_background, 0.4),
        border,
    );

    let shake = if critical {
        let phase = (stage_time / 0.25).fract();
        vec2(
            keyframes(phase, 0.0, 1.0, &[-1.2, 1.2, -1.2, 0.0], None, Ease::Linear),
            keyframes(phase, 0.0, 1.0, &[1.2, -1.2, 1.2, 0.0], None, Ease::Linear),
        )
    } else {
        vec2(0.0, 0.0)
    };
    let vb = ViewBox::fit(canvas.shrink(ctx.s(12.0)), VIEW_W, VIEW_H);
    let vb_shake = ViewBox::fit(
        canvas.shrink(ctx.s(12.0)).translate(shake * vb.len(1.0)),
        VIEW_W,
        VIEW_H,
    );

    // Dot grid.
    let dot = Theme::with_opacity(theme.foreground, 0.03);
    for gx in 0..=20 {
        for gy in 0..=10 {
            ctx.circle_filled(vb.at(gx as f32 * 40.0, gy as f32 * 40.0), vb.len(1.5), dot);
        }
    }

    if critical {
        let p = fade_in(stage_time, 0.0);
        let inset = canvas.shrink(ctx.s(24.0));
        ctx.rect_stroke(
            inset,
            ctx.s(16.0),
            Stroke::new(ctx.s(2.0), Theme::with_opacity(ink::RED, 0.3 * p)),
        );
    }

    let vb = vb_shake;
    let baseline = [pos2(50.0, 200.0), pos2(750.0, 200.0)];
    draw_path(ctx, &vb, &baseline, 1.0, 2.0, Color32::from_rgb(0x1A, 0x1A, 0x1A), Some((8.0, 12.0)));

    let flat = paths();
    for (path, group, delay, duration, color, width, dash) in STROKES {
        let Some(age) = group_age(stage, stage_time, group) else {
            continue;
        };
        if let Some(points) = flat.get(path) {
            let p = tween(age, delay, duration, 0.0, 1.0, Ease::InOutQuad);
            draw_path(ctx, &vb, points, p, width, color, dash);
        }
    }

    for (x, y, group, delay, color, radius) in COMMITS {
        let age = if group == 0 {
            Some(ctx.age)
        } else {
            group_age(stage, stage_time, group)
        };
        let Some(age) = age else {
            continue;
        };
        let scale = tween(age, delay, 0.4, 0.0, 1.0, Ease::OutBack);
        if scale > 0.0 {
            ctx.circle_filled(
                vb.at(x, y),
                vb.len(radius * scale),
                Theme::with_opacity(color, fade_in(age, delay)),
            );
        }
    }

    ctx.text(
        vb.at(100.0, 230.0),
        Align2::CENTER_TOP,
        "CHECKOUT POINT",
        FontId::proportional(vb.len(10.0)),
        GRAY,
    );

    if let Some(age) = group_age(stage, stage_time, 2) {
        ctx.text(
            vb.at(335.0, 272.0),
            Align2::LEFT_BOTTOM,
            "Merge 'main' into User",
            FontId::proportional(vb.len(10.0)),
            Theme::with_opacity(ink::BLUE, fade_in(age, 0.5)),
        );
    }

    if let Some(age) = group_age(stage, stage_time, 4) {
        let conflict = vb.at(750.0, 200.0);
        let beat = pulse(age, 1.2);
        ctx.circle_filled(
            conflict,
            vb.len(22.0 * (1.0 + 0.25 * beat)),
            Theme::with_opacity(ink::RED, 0.6 + 0.4 * beat),
        );
        let bob = vb.len(lerp(-2.0, 2.0, pulse(age, 0.8)));
        for shape in icons::shapes(Icon::Flame, conflict + vec2(0.0, bob), vb.len(24.0), Color32::WHITE) {
            ctx.add(shape);
        }

        let alpha = fade_in(age, 0.3);
        if alpha > 0.0 {
            let label = Rect::from_min_size(vb.at(620.0, 240.0), vec2(vb.len(140.0), vb.len(24.0)));
            ctx.panel(
                label,
                vb.len(4.0),
                Theme::with_opacity(Color32::BLACK, 0.9 * alpha),
                Theme::with_opacity(ink::RED, alpha),
            );
            let icon_center = pos2(label.left() + vb.len(14.0), label.center().y);
            for shape in icons::shapes(Icon::AlertTriangle, icon_center, vb.len(12.0), Theme::with_opacity(ink::RED, alpha)) {
                ctx.add(shape);
            }
            ctx.text(
                pos2(label.left() + vb.len(26.0), label.center().y),
                Align2::LEFT_CENTER,
                "CONFLICTS DETECTED",
                FontId::proportional(vb.len(11.0)),
                Theme::with_opacity(ink::RED, alpha),
            );
        }
    }
}

fn draw_status(ctx: &SlideCtx<'_>, stage: usize, stage_time: f32, rect: Rect) {
    let theme = ctx.theme;
    let m = metrics(stage);
    let p = fade_in(stage_time, 0.0);
    let rect = rect.translate(vec2(0.0, ctx.s(15.0) * (1.0 - p)));
    let alpha = |c: Color32| Theme::with_opacity(c, p);

    ctx.panel(
        rect,
        ctx.s(24.0),
        alpha(Theme::with_opacity(theme.code_background, 0.6)),
        alpha(theme.border),
    );

    let pad = ctx.s(24.0);
    let icon_box = Rect::from_min_size(
        pos2(rect.left() + pad, rect.center().y - ctx.s(36.0)),
        vec2(ctx.s(72.0), ctx.s(72.0)),
    );
    let (icon, tone) = match stage {
        s if s >= STAGES - 1 => (Icon::Skull, ink::RED),
        s if s >= 2 => (Icon::AlertCircle, ink::BLUE),
        _ => (Icon::Info, ink::BLUE),
    };
    ctx.rect_filled(icon_box, ctx.s(16.0), alpha(Theme::with_opacity(tone, 0.1)));
    for shape in icons::shapes(icon, icon_box.center(), ctx.s(40.0), alpha(tone)) {
        ctx.add(shape);
    }

    let text_left = icon_box.right() + ctx.s(28.0);
    let title = format!("阶段 {stage}: {}", m.title);
    let title_rect = ctx.text(
        pos2(text_left, rect.top() + pad),
        Align2::LEFT_TOP,
        &title,
        FontId::proportional(ctx.s(26.0)),
        alpha(m.color),
    );
    if stage >= 3 {
        let badge = ctx.layout_no_wrap("DANGER ZONE", FontId::proportional(ctx.s(11.0)), Color32::WHITE);
        let badge_rect = Rect::from_min_size(
            pos2(title_rect.right() + ctx.s(16.0), title_rect.center().y - ctx.s(11.0)),
            vec2(badge.size().x + ctx.s(20.0), ctx.s(22.0)),
        );
        let blink = 0.6 + 0.4 * pulse(stage_time, 2.0);
        ctx.rect_filled(badge_rect, ctx.s(2.0), alpha(Theme::with_opacity(ink::RED, blink)));
        ctx.galley(
            badge_rect.center() - badge.size() / 2.0,
            badge,
            Color32::WHITE,
        );
    }
    let desc = ctx.layout(
        m.description,
        FontId::proportional(ctx.s(18.0)),
        alpha(theme.muted),
        rect.right() - pad - text_left,
    );
    ctx.galley(pos2(text_left, title_rect.bottom() + ctx.s(8.0)), desc, theme.muted);
}

/// Horizontal gradient through `stops`, revealed up to `fill` of the width.
fn gradient_bar(ctx: &SlideCtx<'_>, rect: Rect, stops: &[Color32], fill: f32) {
    let fill = fill.clamp(0.0, 1.0);
    if stops.len() < 2 || fill <= 0.0 {
        return;
    }
    let color_at = |f: f32| {
        let x = f * (stops.len() - 1) as f32;
        let i = (x.floor() as usize).min(stops.len() - 2);
        Theme::mix(stops[i], stops[i + 1], x - i as f32)
    };
    let mut cuts: Vec<f32> = (0..stops.len())
        .map(|i| i as f32 / (stops.len() - 1) as f32)
        .filter(|&f| f < fill)
        .collect();
    cuts.push(fill);

    let mut mesh = Mesh::default();
    for f in cuts {
        let x = rect.left() + rect.width() * f;
        let color = color_at(f);
        mesh.colored_vertex(pos2(x, rect.top()), color);
        mesh.colored_vertex(pos2(x, rect.bottom()), color);
    }
    let quads = mesh.vertices.len() as u32 / 2 - 1;
    for q in 0..quads {
        let i = q * 2;
        mesh.add_triangle(i, i + 1, i + 2);
        mesh.add_triangle(i + 1, i + 3, i + 2);
    }
    ctx.add(Shape::mesh(mesh));
}

fn draw_metrics(ctx: &SlideCtx<'_>, stage: usize, stage_time: f32, rect: Rect) {
    let theme = ctx.theme;
    let m = metrics(stage);
    let gap = ctx.s(48.0);
    let w = (rect.width() - gap * 2.0) / 3.0;
    let caption = FontId::proportional(ctx.s(12.0));
    let col = |i: usize| rect.left() + i as f32 * (w + gap);

    // Noise level.
    ctx.text(pos2(col(0), rect.top()), Align2::LEFT_TOP, "历史噪声级别", caption.clone(), theme.faint);
    let noise = ctx.text(
        pos2(col(0), rect.top() + ctx.s(22.0)),
        Align2::LEFT_TOP,
        &format!("{}%", m.noise),
        FontId::proportional(ctx.s(52.0)),
        m.color,
    );
    for shape in icons::shapes(
        Icon::Activity,
        pos2(noise.right() + ctx.s(18.0), noise.bottom() - ctx.s(14.0)),
        ctx.s(18.0),
        theme.faint,
    ) {
        ctx.add(shape);
    }

    // Bisect complexity.
    ctx.text(pos2(col(1), rect.top()), Align2::LEFT_TOP, "GIT BISECT 复杂度", caption.clone(), theme.faint);
    ctx.text(
        pos2(col(1), rect.top() + ctx.s(28.0)),
        Align2::LEFT_TOP,
        m.bisect,
        FontId::proportional(ctx.s(42.0)),
        m.color,
    );

    // Cognitive load bar.
    let left = col(2);
    ctx.text(pos2(left, rect.top()), Align2::LEFT_TOP, "排障心智负担", caption.clone(), theme.faint);
    ctx.text(
        pos2(left + w, rect.top()),
        Align2::RIGHT_TOP,
        m.stress,
        FontId::proportional(ctx.s(13.0)),
        m.color,
    );
    let track = Rect::from_min_size(pos2(left, rect.top() + ctx.s(34.0)), vec2(w, ctx.s(16.0)));
    ctx.panel(track, track.height() / 2.0, theme.surface, theme.border);
    let previous = if stage == 0 { 0.0 } else { metrics(stage - 1).load };
    let load = lerp(previous, m.load, Ease::OutCubic.apply(progress(stage_time, 0.0, 1.0)));
    gradient_bar(
        ctx,
        track.shrink(ctx.s(2.0)),
        &[ink::BLUE, ink::GREEN, ink::AMBER, ink::RED],
        load,
    );
    if stage == STAGES - 1 {
        ctx.rect_stroke(
            track.expand(ctx.s(3.0)),
            track.height(),
            Stroke::new(ctx.s(2.0), Theme::with_opacity(ink::RED, 0.3)),
        );
    }
    let scale_font = FontId::proportional(ctx.s(10.0));
    let scale_y = track.bottom() + ctx.s(8.0);
    ctx.text(pos2(left, scale_y), Align2::LEFT_TOP, "平静 (ZEN)", scale_font.clone(), theme.faint);
    ctx.text(pos2(left + w / 2.0, scale_y), Align2::CENTER_TOP, "压力 (STRESS)", scale_font.clone(), theme.faint);
    ctx.text(pos2(left + w, scale_y), Align2::RIGHT_TOP, "混乱 (CHAOS)", scale_font, theme.faint);
}

fn draw_quote(ctx: &SlideCtx<'_>, center: Pos2) {
    let color = Theme::with_opacity(ctx.theme.muted, 0.3);
    let text = ctx.text(
        center,
        Align2::CENTER_CENTER,
        "“每一次无谓的 Standard Merge，都在透支未来的排障生命力。”",
        FontId::proportional(ctx.s(14.0)),
        color,
    );
    let rule = ctx.s(80.0);
    let gap = ctx.s(12.0);
    let stroke = Stroke::new(1.0, color);
    ctx.line_segment(
        [pos2(text.left() - gap - rule, center.y), pos2(text.left() - gap, center.y)],
        stroke,
    );
    ctx.line_segment(
        [pos2(text.right() + gap, center.y), pos2(text.right() + gap + rule, center.y)],
        stroke,
    );
}

/// Developers, canvas, status and metrics. Returns the height used.
pub fn render(ctx: &SlideCtx<'_>, stage: usize, stage_time: f32, pos: Pos2, width: f32) -> f32 {
    let stage = stage.min(STAGES - 1);
    let width = width.min(ctx.s(1200.0));
    let left = pos.x;
    let mut y = pos.y;

    let devs = Rect::from_min_size(pos2(left, y), vec2(width, ctx.s(100.0)));
    draw_developers(ctx, stage, devs);
    y = devs.bottom() + ctx.s(14.0);

    let canvas = Rect::from_min_size(pos2(left, y), vec2(width, ctx.s(300.0)));
    draw_canvas(ctx, stage, stage_time, canvas);
    y = canvas.bottom() + ctx.s(14.0);

    let status = Rect::from_min_size(pos2(left, y), vec2(width, ctx.s(112.0)));
    draw_status(ctx, stage, stage_time, status);
    y = status.bottom() + ctx.s(18.0);

    let row = Rect::from_min_size(pos2(left + ctx.s(16.0), y), vec2(width - ctx.s(32.0), ctx.s(84.0)));
    draw_metrics(ctx, stage, stage_time, row);
    y = row.bottom() + ctx.s(12.0);

    draw_quote(ctx, pos2(left + width / 2.0, y + ctx.s(12.0)));
    y + ctx.s(24.0) - pos.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_follow_the_stage_table() {
        let noise: Vec<u32> = (0..STAGES).map(|s| metrics(s).noise).collect();
        assert_eq!(noise, [5, 29, 53, 77, 93]);
        let load: Vec<f32> = (0..STAGES).map(|s| metrics(s).load).collect();
        for (got, want) in load.iter().zip([0.2, 0.4, 0.6, 0.8, 1.0]) {
            assert!((got - want).abs() < 1e-6);
        }
        assert_eq!(metrics(0).title, "宁静开端");
        assert_eq!(metrics(4).bisect, "Infinity");
        assert_eq!(metrics(1).stress, "ZEN");
        assert_eq!(metrics(4).stress, "CRITICAL");
        assert_eq!(metrics(4).color, ink::RED);
    }

    #[test]
    fn out_of_range_stage_clamps() {
        assert_eq!(metrics(99), metrics(STAGES - 1));
    }

    #[test]
    fn timer_advances_every_interval_and_wraps() {
        let t0 = Instant::now();
        let timer = timer(t0);
        assert_eq!(timer.stage_at(t0), 0);
        assert_eq!(timer.stage_at(t0 + Duration::from_millis(4499)), 0);
        assert_eq!(timer.stage_at(t0 + Duration::from_millis(4500)), 1);
        assert_eq!(timer.stage_at(t0 + INTERVAL * 4), 4);
        assert_eq!(timer.stage_at(t0 + INTERVAL * 5), 0);
    }

    #[test]
    fn groups_appear_with_their_stage() {
        assert_eq!(group_age(0, 1.0, 1), None);
        assert_eq!(group_age(1, 1.0, 1), Some(1.0));
        assert_eq!(group_age(3, 0.5, 1), Some(9.5));
        assert_eq!(group_age(4, 0.0, 4), Some(0.0));
    }

    #[test]
    fn every_path_parses_and_strokes_reference_them() {
        for d in PATHS {
            assert!(d.parse::<crate::geometry::Path>().is_ok(), "{d}");
        }
        for (path, group, ..) in STROKES {
            assert!(path < PATHS.len());
            assert!((1..STAGES).contains(&group));
        }
    }
}
