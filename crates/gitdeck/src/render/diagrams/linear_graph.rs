//! `git log --graph` of a rebased main: one straight line, one commit per row.

use eframe::egui::{Align2, Color32, FontId, Pos2, Stroke, pos2, vec2};

use crate::animation::{Ease, SLIDE_CURVE, fade_in, lerp, progress, tween};
use crate::render::{SlideCtx, text};
use crate::theme::{Theme, ink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Feat,
    Fix,
    Docs,
    Refactor,
}

impl Kind {
    fn label(self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Refactor => "refactor",
        }
    }

    fn color(self) -> Color32 {
        match self {
            Self::Feat => ink::BLUE,
            Self::Fix => Color32::from_rgb(0xF8, 0x71, 0x71),
            Self::Docs | Self::Refactor => ink::GRAY,
        }
    }

    /// Features and fixes get an expanding ring around their node.
    fn pings(self) -> bool {
        matches!(self, Self::Feat | Self::Fix)
    }
}

const COMMITS: [(&str, &str, Kind); 6] = [
    ("a1b2c3d", "feat(auth): 登录核心逻辑", Kind::Feat),
    ("e5f6g7h", "feat(user): 个人中心模块", Kind::Feat),
    ("i9j0k1l", "fix(api): 修复并联请求冲突", Kind::Fix),
    ("m2n3o4p", "feat(pay): 支付SDK集成", Kind::Feat),
    ("q5r6s7t", "docs: 更新部署方案说明", Kind::Docs),
    ("u8v9w0x", "refactor: 优化状态管理逻辑", Kind::Refactor),
];

const TRACK_SECS: f32 = 1.5;
const PING_SECS: f32 = 1.5;

fn row_delay(i: usize) -> f32 {
    0.3 + i as f32 * 0.12
}

/// Radius factor and opacity of a node's ping ring at `age`.
fn ping(age: f32) -> (f32, f32) {
    let phase = (age / PING_SECS).fract();
    (lerp(1.0, 2.0, phase), lerp(0.5, 0.0, phase))
}

/// Header row, track and one row per commit. Returns the height used.
pub fn render(ctx: &SlideCtx<'_>, age: f32, pos: Pos2, width: f32) -> f32 {
    let theme = ctx.theme;
    let width = width.min(ctx.s(960.0));
    let left = pos.x;
    let head_h = ctx.s(48.0);
    let row_h = ctx.s(58.0);
    let track_x = left + ctx.s(32.0);
    let text_x = track_x + ctx.s(40.0);
    let total = head_h + row_h * COMMITS.len() as f32;

    // Track grows from HEAD down through the commits.
    let top = pos.y + head_h / 2.0;
    let bottom = pos.y + total - row_h / 2.0;
    let grown = SLIDE_CURVE.apply(progress(age, 0.0, TRACK_SECS));
    ctx.line_segment(
        [pos2(track_x, top), pos2(track_x, lerp(top, bottom, grown))],
        Stroke::new(ctx.s(3.0), Theme::with_opacity(ink::BLUE, 0.6)),
    );

    let head = fade_in(age, TRACK_SECS);
    if head > 0.0 {
        let c = pos2(track_x, top);
        ctx.circle_filled(c, ctx.s(7.0), Theme::with_opacity(ink::BLUE, head));
        text::draw_pill(
            &ctx.faded(head),
            "HEAD -> main, origin/main",
            pos2(text_x + ctx.s(130.0), c.y),
            FontId::monospace(ctx.s(15.0)),
            ink::CYAN,
            Theme::with_opacity(ink::CYAN, 0.1),
            Theme::with_opacity(ink::CYAN, 0.3),
        );
    }

    for (i, (hash, message, kind)) in COMMITS.iter().enumerate() {
        let delay = row_delay(i);
        let alpha = fade_in(age, delay);
        if alpha <= 0.0 {
            continue;
        }
        let slide_in = tween(age, delay, 0.5, ctx.s(20.0), 0.0, Ease::OutCubic);
        let cy = pos.y + head_h + row_h * (i as f32 + 0.5);
        let row = ctx.faded(alpha);
        let color = kind.color();

        let node = pos2(track_x, cy);
        if kind.pings() {
            let (grow, fade) = ping(age - delay);
            row.circle_stroke(
                node,
                ctx.s(8.0) * grow,
                Stroke::new(ctx.s(1.5), Theme::with_opacity(color, fade)),
            );
        }
        row.circle_filled(node, ctx.s(8.0), theme.background);
        row.circle_stroke(node, ctx.s(8.0), Stroke::new(ctx.s(3.0), color));

        let x = text_x + slide_in;
        let hash_rect = row.text(
            pos2(x, cy),
            Align2::LEFT_CENTER,
            hash,
            FontId::monospace(ctx.s(18.0)),
            ink::AMBER,
        );
        row.text(
            pos2(hash_rect.right() + ctx.s(20.0), cy),
            Align2::LEFT_CENTER,
            message,
            FontId::proportional(ctx.s(22.0)),
            theme.foreground,
        );
        let tag = row.layout_no_wrap(kind.label(), FontId::monospace(ctx.s(13.0)), color);
        let tag_center = pos2(left + width - ctx.s(16.0) - tag.size().x / 2.0 + slide_in, cy);
        text::draw_pill(
            &row,
            kind.label(),
            tag_center - vec2(ctx.s(18.0), 0.0),
            FontId::monospace(ctx.s(13.0)),
            color,
            Theme::with_opacity(color, 0.1),
            Theme::with_opacity(color, 0.25),
        );
        if i + 1 < COMMITS.len() {
            row.line_segment(
                [
                    pos2(text_x, cy + row_h / 2.0),
                    pos2(left + width, cy + row_h / 2.0),
                ],
                Stroke::new(1.0, theme.border),
            );
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_unique_short_ids() {
        let mut hashes: Vec<&str> = COMMITS.iter().map(|c| c.0).collect();
        assert!(hashes.iter().all(|h| h.len() == 7));
        hashes.sort_unstable();
        hashes.dedup();
        assert_eq!(hashes.len(), COMMITS.len());
    }

    #[test]
    fn messages_carry_their_kind_prefix() {
        for (_, message, kind) in COMMITS {
            assert!(message.starts_with(kind.label()), "{message}");
        }
    }

    #[test]
    fn only_features_and_fixes_ping() {
        assert!(Kind::Feat.pings());
        assert!(Kind::Fix.pings());
        assert!(!Kind::Docs.pings());
        assert_eq!(Kind::Docs.color(), Kind::Refactor.color());
    }

    #[test]
    fn rows_stagger_and_finish_before_head_appears() {
        assert!(row_delay(0) < row_delay(1));
        assert!(row_delay(COMMITS.len() - 1) < TRACK_SECS);
    }

    #[test]
    fn ping_expands_and_fades_each_cycle() {
        let (r0, a0) = ping(0.0);
        assert_eq!((r0, a0), (1.0, 0.5));
        let (r1, a1) = ping(PING_SECS * 0.5);
        assert!(r1 > r0 && a1 < a0);
        assert_eq!(ping(PING_SECS).0, 1.0);
    }
}
