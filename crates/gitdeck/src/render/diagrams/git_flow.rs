//! Side-by-side evolution of a feature branch under merge and rebase.

use std::sync::OnceLock;

use eframe::egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, pos2, vec2};

use super::{ViewBox, Workflow, draw_path, flatten_all};
use crate::animation::{Ease, Playback, PlaybackState, Sequence, fade_in, keyframes, progress, tween};
use crate::deck::Icon;
use crate::render::{Action, SlideCtx, icons};
use crate::theme::{Theme, ink};

const VIEW_W: f32 = 800.0;
const VIEW_H: f32 = 300.0;

const T_A: f32 = 0.2;
const T_B: f32 = 0.5;
const T_FEAT_PATH: f32 = 0.8;
const T_C1: f32 = 1.2;
const T_C2: f32 = 1.6;
const T_D: f32 = 2.0;
const T_E: f32 = 2.4;
const T_REBASE_START: f32 = 3.5;

pub const MERGE: Sequence = Sequence {
    cues: &[
        T_A,
        T_B,
        T_FEAT_PATH,
        T_C1,
        T_C2,
        T_D,
        T_E,
        2.8,
        3.0,
        3.8,
        4.2,
    ],
    length: 4.6,
};

pub const REBASE: Sequence = Sequence {
    cues: &[
        T_A,
        T_B,
        T_FEAT_PATH,
        T_C1,
        T_C2,
        T_D,
        T_E,
        T_REBASE_START - 0.5,
        T_REBASE_START,
        T_REBASE_START + 0.2,
        T_REBASE_START + 0.6,
        T_REBASE_START + 1.5,
    ],
    length: 5.5,
};

pub fn sequence(workflow: Workflow) -> Sequence {
    match workflow {
        Workflow::Merge => MERGE,
        Workflow::Rebase => REBASE,
    }
}

const MAIN: usize = 0;
const FEATURE: usize = 1;
const MERGE_TAIL: usize = 2;
const MERGE_JOIN: usize = 3;
const REBASE_TAIL: usize = 4;

const PATHS: [&str; 5] = [
    "M 100 180 L 400 180",
    "M 200 180 C 250 180, 280 110, 330 110 L 500 110",
    "M 400 180 L 650 180",
    "M 500 110 C 550 110, 600 180, 650 180",
    "M 400 180 L 600 180",
];

fn paths() -> &'static [Vec<Pos2>] {
    static FLAT: OnceLock<Vec<Vec<Pos2>>> = OnceLock::new();
    FLAT.get_or_init(|| flatten_all(&PATHS))
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathFrame {
    pub path: usize,
    pub progress: f32,
    pub opacity: f32,
    pub color: Color32,
    pub dashed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeFrame {
    pub label: &'static str,
    pub center: Pos2,
    pub color: Color32,
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: &'static str,
    pub pos: Pos2,
    pub size: f32,
    pub color: Color32,
    pub opacity: f32,
}

/// Everything visible at one instant of the sequence, in view box units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub paths: Vec<PathFrame>,
    pub nodes: Vec<NodeFrame>,
    pub captions: Vec<Caption>,
}

fn spawn(label: &'static str, center: Pos2, color: Color32, t: f32, delay: f32) -> NodeFrame {
    NodeFrame {
        label,
        center,
        color,
        scale: tween(t, delay, 0.4, 0.0, 1.0, Ease::OutBack),
        opacity: fade_in(t, delay),
    }
}

/// A feature commit that, under rebase, slides onto the tip of main.
fn replayed(
    labels: (&'static str, &'static str),
    from: Pos2,
    to: Pos2,
    t: f32,
    delay: f32,
    move_delay: f32,
    workflow: Workflow,
) -> NodeFrame {
    let mut node = spawn(labels.0, from, ink::PURPLE, t, delay);
    if workflow == Workflow::Rebase {
        let times = [0.0, 0.2, 1.0];
        let x = keyframes(t, move_delay, 1.0, &[from.x, from.x, to.x], Some(&times), Ease::InOutQuad);
        let y = keyframes(t, move_delay, 1.0, &[from.y, from.y, to.y], Some(&times), Ease::InOutQuad);
        node.center = pos2(x, y);
        if t >= move_delay {
            node.label = labels.1;
        }
    }
    node
}

/// The diagram at `t` seconds into the sequence.
pub fn frame(workflow: Workflow, t: f32) -> Frame {
    let mut f = Frame::default();

    f.paths.push(PathFrame {
        path: MAIN,
        progress: progress(t, 0.0, 2.4),
        opacity: 1.0,
        color: ink::BLUE,
        dashed: false,
    });

    match workflow {
        Workflow::Merge => {
            f.paths.push(PathFrame {
                path: FEATURE,
                progress: tween(t, T_FEAT_PATH, 1.2, 0.0, 1.0, Ease::InOutQuad),
                opacity: 1.0,
                color: ink::PURPLE,
                dashed: false,
            });
            f.paths.push(PathFrame {
                path: MERGE_TAIL,
                progress: tween(t, 2.8, 0.8, 0.0, 1.0, Ease::InOutQuad),
                opacity: 1.0,
                color: ink::BLUE,
                dashed: false,
            });
            f.paths.push(PathFrame {
                path: MERGE_JOIN,
                progress: tween(t, 3.0, 0.8, 0.0, 1.0, Ease::InOutQuad),
                opacity: 1.0,
                color: ink::RED,
                dashed: true,
            });
        }
        Workflow::Rebase => {
            f.paths.push(PathFrame {
                path: FEATURE,
                progress: keyframes(t, T_FEAT_PATH, 3.5, &[0.0, 1.0, 1.0, 0.0], None, Ease::InOutQuad),
                opacity: keyframes(t, T_REBASE_START + 0.2, 0.5, &[1.0, 1.0, 1.0, 0.0], None, Ease::Linear),
                color: ink::PURPLE,
                dashed: false,
            });
            f.paths.push(PathFrame {
                path: REBASE_TAIL,
                progress: tween(t, T_REBASE_START + 0.6, 0.8, 0.0, 1.0, Ease::InOutQuad),
                opacity: 1.0,
                color: ink::PURPLE,
                dashed: false,
            });
        }
    }

    f.nodes.push(spawn("A", pos2(100.0, 180.0), ink::BLUE, t, T_A));
    f.nodes.push(spawn("B", pos2(200.0, 180.0), ink::BLUE, t, T_B));
    f.nodes.push(spawn("D", pos2(300.0, 180.0), ink::BLUE, t, T_D));
    f.nodes.push(spawn("E", pos2(400.0, 180.0), ink::BLUE, t, T_E));
    f.nodes.push(replayed(
        ("C1", "C1'"),
        pos2(350.0, 110.0),
        pos2(500.0, 180.0),
        t,
        T_C1,
        T_REBASE_START,
        workflow,
    ));
    f.nodes.push(replayed(
        ("C2", "C2'"),
        pos2(450.0, 110.0),
        pos2(600.0, 180.0),
        t,
        T_C2,
        T_REBASE_START + 0.2,
        workflow,
    ));

    match workflow {
        Workflow::Merge => {
            f.nodes.push(spawn("M", pos2(650.0, 180.0), ink::RED, t, 3.8));
            f.captions.push(Caption {
                text: "Merge Commit (保留分叉轨迹)",
                pos: pos2(650.0, 225.0),
                size: 12.0,
                color: ink::RED,
                opacity: fade_in(t, 4.2),
            });
        }
        Workflow::Rebase => {
            f.captions.push(Caption {
                text: "TRANSLATING COMMITS...",
                pos: pos2(400.0, 60.0),
                size: 14.0,
                color: ink::PURPLE,
                opacity: keyframes(t, T_REBASE_START - 0.5, 2.5, &[0.0, 1.0, 1.0, 0.0], None, Ease::Linear),
            });
            f.captions.push(Caption {
                text: "完全线性历史 (Clean Fast-forward)",
                pos: pos2(550.0, 225.0),
                size: 12.0,
                color: ink::PURPLE,
                opacity: fade_in(t, T_REBASE_START + 1.5),
            });
        }
    }

    f
}

fn draw_commit(ctx: &SlideCtx<'_>, vb: &ViewBox, node: &NodeFrame) {
    if node.opacity <= 0.0 || node.scale <= 0.0 {
        return;
    }
    let center = vb.map(node.center);
    let color = Theme::with_opacity(node.color, node.opacity);
    ctx.circle_filled(center, vb.len(14.0 * node.scale), color);
    ctx.circle_stroke(
        center,
        vb.len(18.0 * node.scale),
        Stroke::new(1.0, Theme::with_opacity(color, 0.3)),
    );
    ctx.text(
        center,
        Align2::CENTER_CENTER,
        node.label,
        FontId::proportional(vb.len(10.0 * node.scale.max(0.1))),
        Theme::with_opacity(Color32::WHITE, node.opacity),
    );
}

fn draw_frame(ctx: &SlideCtx<'_>, vb: &ViewBox, f: &Frame) {
    let flat = paths();
    for p in &f.paths {
        let Some(points) = flat.get(p.path) else {
            continue;
        };
        let dashed = p.dashed.then_some((5.0, 5.0));
        let color = Theme::with_opacity(p.color, p.opacity);
        draw_path(ctx, vb, points, p.progress, 3.0, color, dashed);
    }
    for node in &f.nodes {
        draw_commit(ctx, vb, node);
    }
    for c in &f.captions {
        if c.opacity > 0.0 {
            ctx.text(
                vb.map(c.pos),
                Align2::CENTER_CENTER,
                c.text,
                FontId::proportional(vb.len(c.size)),
                Theme::with_opacity(c.color, c.opacity),
            );
        }
    }
}

/// Rounded toggle button with an icon. Returns its rect.
#[allow(clippy::too_many_arguments)]
fn control(
    ctx: &SlideCtx<'_>,
    left: f32,
    center_y: f32,
    icon: Icon,
    label: Option<&str>,
    active: Option<Color32>,
    key: &str,
    action: Action,
) -> Rect {
    let theme = ctx.theme;
    let font = FontId::proportional(ctx.s(18.0));
    let icon_size = ctx.s(18.0);
    let pad = ctx.s(18.0);
    let text_w = label
        .map(|l| ctx.layout_no_wrap(l, font.clone(), theme.muted).size().x + ctx.s(8.0))
        .unwrap_or(0.0);
    let rect = Rect::from_min_size(
        pos2(left, center_y - ctx.s(22.0)),
        vec2(pad * 2.0 + icon_size + text_w, ctx.s(44.0)),
    );
    let hovered = ctx.button(rect, key, action);

    let (fill, border, fg) = match active {
        Some(c) => (Theme::with_opacity(c, 0.2), c, c),
        None if hovered => (theme.border, theme.border, theme.foreground),
        None => (theme.surface, theme.border, theme.faint),
    };
    ctx.panel(rect, rect.height() / 2.0, fill, border);
    let icon_center = pos2(rect.left() + pad + icon_size / 2.0, rect.center().y);
    for shape in icons::shapes(icon, icon_center, icon_size, fg) {
        ctx.add(shape);
    }
    if let Some(l) = label {
        ctx.text(
            pos2(icon_center.x + icon_size / 2.0 + ctx.s(8.0), rect.center().y),
            Align2::LEFT_CENTER,
            l,
            font,
            fg,
        );
    }
    rect
}

fn draw_controls(ctx: &SlideCtx<'_>, workflow: Workflow, center_x: f32, center_y: f32) {
    let gap = ctx.s(12.0);
    // Lay out once invisibly to find the total width, then centre.
    let row = |left: f32| {
        let a = control(
            ctx,
            left,
            center_y,
            Icon::GitMerge,
            Some("标准 Merge"),
            (workflow == Workflow::Merge).then_some(ink::RED),
            "flow-merge",
            Action::SelectWorkflow(Workflow::Merge),
        );
        let b = control(
            ctx,
            a.right() + gap,
            center_y,
            Icon::GitBranch,
            Some("Rebase + Merge"),
            (workflow == Workflow::Rebase).then_some(ink::PURPLE),
            "flow-rebase",
            Action::SelectWorkflow(Workflow::Rebase),
        );
        let c = control(
            ctx,
            b.right() + gap,
            center_y,
            Icon::RefreshCw,
            None,
            None,
            "flow-reset",
            Action::Reset,
        );
        c.right() - left
    };
    let width = ctx.measure(|| row(0.0));
    row(center_x - width / 2.0);
}

fn draw_play_overlay(ctx: &SlideCtx<'_>, canvas: Rect) {
    let center = canvas.center() - vec2(0.0, ctx.s(14.0));
    let radius = ctx.s(32.0);
    let hit = Rect::from_center_size(center + vec2(0.0, ctx.s(20.0)), vec2(ctx.s(220.0), ctx.s(110.0)));
    let hovered = ctx.button(hit, "flow-play", Action::Play);
    let r = if hovered { radius * 1.1 } else { radius };

    ctx.circle_filled(center, r * 1.6, Theme::with_opacity(ink::BLUE, 0.12));
    ctx.circle_filled(center, r, ink::BLUE);
    for shape in icons::filled(Icon::Play, center + vec2(ctx.s(2.0), 0.0), ctx.s(24.0), Color32::WHITE) {
        ctx.add(shape);
    }
    ctx.text(
        pos2(center.x, center.y + radius + ctx.s(20.0)),
        Align2::CENTER_CENTER,
        "点击播放演进动画",
        FontId::proportional(ctx.s(14.0)),
        ctx.theme.muted,
    );
}

fn draw_info_cards(ctx: &SlideCtx<'_>, workflow: Workflow, rect: Rect) {
    let theme = ctx.theme;
    let gap = ctx.s(16.0);
    let w = (rect.width() - gap) / 2.0;
    let left = Rect::from_min_size(rect.min, vec2(w, rect.height()));
    let right = Rect::from_min_size(pos2(rect.left() + w + gap, rect.top()), vec2(w, rect.height()));
    let pad = ctx.s(18.0);

    let (accent, headline, detail) = match workflow {
        Workflow::Merge => (ink::RED, "轨迹保留", "通过平滑曲线保留分支生命周期。"),
        Workflow::Rebase => (
            ink::PURPLE,
            "提交平移",
            "提交逐个平移到 Main 顶端，获得完美线性历史。",
        ),
    };

    for (card, caption) in [(left, "交互逻辑"), (right, "技术要点")] {
        ctx.panel(card, ctx.s(14.0), theme.surface, theme.border);
        ctx.text(
            card.min + vec2(pad, pad),
            Align2::LEFT_TOP,
            caption,
            FontId::proportional(ctx.s(13.0)),
            theme.faint,
        );
    }
    ctx.text(
        left.min + vec2(pad, pad + ctx.s(24.0)),
        Align2::LEFT_TOP,
        headline,
        FontId::proportional(ctx.s(24.0)),
        accent,
    );
    let galley = ctx.layout(
        detail,
        FontId::proportional(ctx.s(16.0)),
        theme.foreground,
        w - pad * 2.0,
    );
    ctx.galley(right.min + vec2(pad, pad + ctx.s(26.0)), galley, theme.foreground);
}

/// Controls, canvas and notes. Returns the height used.
pub fn render(
    ctx: &SlideCtx<'_>,
    workflow: Workflow,
    playback: &Playback,
    pos: Pos2,
    width: f32,
) -> f32 {
    let theme = ctx.theme;
    let width = width.min(ctx.s(1100.0));
    let left = pos.x;
    let mut y = pos.y;

    draw_controls(ctx, workflow, left + width / 2.0, y + ctx.s(22.0));
    y += ctx.s(44.0) + ctx.s(18.0);

    let canvas = Rect::from_min_size(pos2(left, y), vec2(width, ctx.s(320.0)));
    ctx.panel(
        canvas,
        ctx.s(24.0),
        Theme::with_opacity(theme.code_background, 0.4),
        theme.border,
    );
    let vb = ViewBox::fit(canvas.shrink(ctx.s(16.0)), VIEW_W, VIEW_H);

    let guide = |y: f32, alpha: f32| {
        ctx.line_segment(
            [vb.at(50.0, y), vb.at(750.0, y)],
            Stroke::new(1.0, Theme::with_opacity(theme.foreground, alpha)),
        );
    };
    guide(180.0, 0.03);
    guide(110.0, 0.02);

    let state = playback.state(ctx.now);
    if let Some(t) = playback.elapsed(ctx.now) {
        draw_frame(ctx, &vb, &frame(workflow, t));
    }

    let label_font = FontId::proportional(vb.len(11.0));
    ctx.text(
        vb.at(50.0, 180.0),
        Align2::LEFT_CENTER,
        "MAIN",
        label_font.clone(),
        Theme::with_opacity(ink::BLUE, 0.3),
    );
    ctx.text(
        vb.at(50.0, 110.0),
        Align2::LEFT_CENTER,
        "FEATURE",
        label_font,
        Theme::with_opacity(ink::PURPLE, 0.3),
    );

    if state == PlaybackState::Idle {
        draw_play_overlay(ctx, canvas);
    }
    y = canvas.bottom() + ctx.s(18.0);

    let cards = Rect::from_min_size(pos2(left, y), vec2(width, ctx.s(104.0)));
    draw_info_cards(ctx, workflow, cards);
    cards.bottom() - pos.y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node<'a>(f: &'a Frame, label: &str) -> &'a NodeFrame {
        f.nodes
            .iter()
            .find(|n| n.label == label)
            .unwrap_or_else(|| panic!("no node {label}"))
    }

    #[test]
    fn every_path_parses() {
        for d in PATHS {
            assert!(d.parse::<crate::geometry::Path>().is_ok(), "{d}");
        }
        assert!(paths().iter().all(|p| p.len() >= 2));
    }

    #[test]
    fn cues_are_increasing_and_inside_the_sequence() {
        for seq in [MERGE, REBASE] {
            assert!(seq.cues.windows(2).all(|w| w[0] < w[1]));
            assert!(seq.cues.iter().all(|&c| c < seq.length));
        }
    }

    #[test]
    fn nothing_has_appeared_at_the_start() {
        for workflow in [Workflow::Merge, Workflow::Rebase] {
            let f = frame(workflow, 0.0);
            assert!(f.nodes.iter().all(|n| n.opacity == 0.0));
            assert!(f.paths.iter().all(|p| p.progress == 0.0));
        }
    }

    #[test]
    fn merge_ends_with_a_merge_commit() {
        let f = frame(Workflow::Merge, MERGE.length);
        let m = node(&f, "M");
        assert_eq!(m.center, pos2(650.0, 180.0));
        assert_eq!(m.opacity, 1.0);
        assert!(f.paths.iter().all(|p| p.progress == 1.0));
        assert!(f.paths.iter().any(|p| p.dashed && p.color == ink::RED));
        assert_eq!(node(&f, "C1").center, pos2(350.0, 110.0));
    }

    #[test]
    fn rebase_moves_commits_onto_main() {
        let f = frame(Workflow::Rebase, REBASE.length);
        assert_eq!(node(&f, "C1'").center, pos2(500.0, 180.0));
        assert_eq!(node(&f, "C2'").center, pos2(600.0, 180.0));
        assert!(f.nodes.iter().all(|n| n.label != "M"));

        let feature = f.paths.iter().find(|p| p.path == FEATURE).unwrap();
        assert_eq!(feature.opacity, 0.0);
        let tail = f.paths.iter().find(|p| p.path == REBASE_TAIL).unwrap();
        assert_eq!(tail.progress, 1.0);
    }

    #[test]
    fn rebase_holds_commits_until_the_move_starts() {
        let f = frame(Workflow::Rebase, 3.0);
        assert_eq!(node(&f, "C1").center, pos2(350.0, 110.0));
        // 20% of the move is a hold.
        let f = frame(Workflow::Rebase, T_REBASE_START + 0.1);
        assert_eq!(node(&f, "C1'").center, pos2(350.0, 110.0));
    }

    #[test]
    fn translating_caption_fades_in_and_out() {
        let at = |t| {
            frame(Workflow::Rebase, t)
                .captions
                .iter()
                .find(|c| c.text.starts_with("TRANSLATING"))
                .map(|c| c.opacity)
                .unwrap()
        };
        assert_eq!(at(2.9), 0.0);
        assert!(at(4.0) > 0.9);
        assert_eq!(at(5.5), 0.0);
    }
}
