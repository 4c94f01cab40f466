//! Line icons drawn on a 24x24 grid with the diagram path syntax.

use eframe::egui::{Color32, Pos2, Shape, Stroke, pos2, vec2};

use crate::deck::Icon;
use crate::geometry::Path;

struct Glyph {
    paths: &'static [&'static str],
    /// `(cx, cy, r)` outlines.
    circles: &'static [(f32, f32, f32)],
}

const SHIELD: &str = "M 12 22 C 12 22 20 18 20 12 L 20 5 L 12 2 L 4 5 L 4 12 C 4 18 12 22 12 22";
const CCW_ARC: &str = "M 3 12 C 3 17 7 21 12 21 C 17 21 21 17 21 12 C 21 7 17 3 12 3 C 9.5 3 7.2 4 5.3 5.7 L 3 8";

fn glyph(icon: Icon) -> Glyph {
    let (paths, circles): (&'static [&'static str], &'static [(f32, f32, f32)]) = match icon {
        Icon::Zap => (&["M 13 2 L 3 14 L 12 14 L 11 22 L 21 10 L 12 10 L 13 2"], &[]),
        Icon::GitBranch => (
            &["M 6 3 L 6 15", "M 18 9 C 18 14 14 18 9 18"],
            &[(18.0, 6.0, 3.0), (6.0, 18.0, 3.0)],
        ),
        Icon::GitMerge => (
            &["M 6 21 L 6 9", "M 6 9 C 6 14 10 18 15 18"],
            &[(18.0, 18.0, 3.0), (6.0, 6.0, 3.0)],
        ),
        Icon::GitCommit => (&["M 3 12 L 9 12", "M 15 12 L 21 12"], &[(12.0, 12.0, 3.0)]),
        Icon::RotateCcw => (&[CCW_ARC, "M 3 3 L 3 8 L 8 8"], &[]),
        Icon::History => (&[CCW_ARC, "M 3 3 L 3 8 L 8 8", "M 12 7 L 12 12 L 16 14"], &[]),
        Icon::CheckCircle => (&["M 9 12 L 11 14 L 15 10"], &[(12.0, 12.0, 10.0)]),
        Icon::XCircle => (&["M 15 9 L 9 15", "M 9 9 L 15 15"], &[(12.0, 12.0, 10.0)]),
        Icon::AlertTriangle => (
            &["M 12 3 L 22 20 L 2 20 L 12 3", "M 12 9 L 12 13"],
            &[(12.0, 16.8, 0.4)],
        ),
        Icon::AlertCircle => (&["M 12 8 L 12 12"], &[(12.0, 12.0, 10.0), (12.0, 16.0, 0.4)]),
        Icon::ShieldAlert => (&[SHIELD, "M 12 8 L 12 12"], &[(12.0, 16.0, 0.4)]),
        Icon::ShieldCheck => (&[SHIELD, "M 9 12 L 11 14 L 15 10"], &[]),
        Icon::CheckSquare => (
            &["M 3 3 L 21 3 L 21 21 L 3 21 L 3 3", "M 9 11 L 12 14 L 22 4"],
            &[],
        ),
        Icon::Terminal => (&["M 4 17 L 10 11 L 4 5", "M 12 19 L 20 19"], &[]),
        Icon::Plus => (&["M 12 5 L 12 19", "M 5 12 L 19 12"], &[]),
        Icon::Code => (&["M 16 18 L 22 12 L 16 6", "M 8 6 L 2 12 L 8 18"], &[]),
        Icon::RefreshCw => (
            &[
                "M 3 12 C 3 7 7 3 12 3 C 14.5 3 16.8 4 18.7 5.7 L 21 8",
                "M 21 3 L 21 8 L 16 8",
                "M 21 12 C 21 17 17 21 12 21 C 9.5 21 7.2 20 5.3 18.3 L 3 16",
                "M 8 16 L 3 16 L 3 21",
            ],
            &[],
        ),
        Icon::Combine => (
            &[
                "M 3 3 L 13 3 L 13 13 L 3 13 L 3 3",
                "M 11 11 L 21 11 L 21 21 L 11 21 L 11 11",
            ],
            &[],
        ),
        Icon::ArrowRight => (&["M 5 12 L 19 12", "M 12 5 L 19 12 L 12 19"], &[]),
        Icon::Info => (&["M 12 16 L 12 12"], &[(12.0, 12.0, 10.0), (12.0, 8.0, 0.4)]),
        Icon::Heart => (
            &["M 12 21 L 3.5 12.5 C 1 10 1 6 4 4.5 C 7 3 10 4.5 12 7 C 14 4.5 17 3 20 4.5 C 23 6 23 10 20.5 12.5 L 12 21"],
            &[],
        ),
        Icon::Star => (
            &["M 12 2 L 15.1 8.3 L 22 9.3 L 17 14.1 L 18.2 21 L 12 17.8 L 5.8 21 L 7 14.1 L 2 9.3 L 8.9 8.3 L 12 2"],
            &[],
        ),
        Icon::Sparkles => (
            &[
                "M 12 3 L 13.9 8.1 L 19 10 L 13.9 11.9 L 12 17 L 10.1 11.9 L 5 10 L 10.1 8.1 L 12 3",
                "M 20 3 L 20 7",
                "M 18 5 L 22 5",
                "M 5 17 L 5 21",
                "M 3 19 L 7 19",
            ],
            &[],
        ),
        Icon::Flame => (
            &["M 12 22 C 7 22 5 18.5 5 15.5 C 5 11 9 9 9 4 C 12 6 14 8.5 14 11 C 15 10 15.5 9 15.5 8 C 17.5 10 19 12.5 19 15.5 C 19 19 16.5 22 12 22"],
            &[],
        ),
        Icon::Skull => (
            &[
                "M 8 20 L 8 17 C 5 16 3 13.5 3 10.5 C 3 5.8 7 2 12 2 C 17 2 21 5.8 21 10.5 C 21 13.5 19 16 16 17 L 16 20 L 8 20",
                "M 12 17 L 12 20",
            ],
            &[(9.0, 12.0, 1.5), (15.0, 12.0, 1.5)],
        ),
        Icon::Activity => (&["M 22 12 L 18 12 L 15 21 L 9 3 L 6 12 L 2 12"], &[]),
        Icon::Play => (&["M 6 3 L 20 12 L 6 21 L 6 3"], &[]),
        Icon::ChevronLeft => (&["M 15 18 L 9 12 L 15 6"], &[]),
        Icon::ChevronRight => (&["M 9 18 L 15 12 L 9 6"], &[]),
        Icon::Maximize => (
            &[
                "M 8 3 L 3 3 L 3 8",
                "M 21 8 L 21 3 L 16 3",
                "M 3 16 L 3 21 L 8 21",
                "M 16 21 L 21 21 L 21 16",
            ],
            &[],
        ),
        Icon::Minimize => (
            &[
                "M 8 3 L 8 8 L 3 8",
                "M 21 8 L 16 8 L 16 3",
                "M 3 16 L 8 16 L 8 21",
                "M 16 21 L 16 16 L 21 16",
            ],
            &[],
        ),
    };
    Glyph { paths, circles }
}

/// Shapes for `icon` centred on `center`, `size` pixels across.
pub fn shapes(icon: Icon, center: Pos2, size: f32, color: Color32) -> Vec<Shape> {
    let unit = size / 24.0;
    let map = |p: Pos2| center + vec2(p.x - 12.0, p.y - 12.0) * unit;
    let stroke = Stroke::new((2.0 * unit).max(1.0), color);
    let glyph = glyph(icon);

    let mut out = Vec::new();
    for d in glyph.paths {
        match d.parse::<Path>() {
            Ok(path) => {
                let points: Vec<Pos2> = path.flatten().into_iter().map(map).collect();
                out.push(Shape::line(points, stroke));
            }
            Err(err) => tracing::warn!(?icon, "bad icon path: {err}"),
        }
    }
    for &(cx, cy, r) in glyph.circles {
        out.push(Shape::circle_stroke(map(pos2(cx, cy)), r * unit, stroke));
    }
    out
}

/// Solid variants used where the deck shows filled glyphs.
pub fn filled(icon: Icon, center: Pos2, size: f32, color: Color32) -> Vec<Shape> {
    let unit = size / 24.0;
    let map = |x: f32, y: f32| center + vec2(x - 12.0, y - 12.0) * unit;
    match icon {
        Icon::Play => vec![Shape::convex_polygon(
            vec![map(6.0, 3.0), map(20.0, 12.0), map(6.0, 21.0)],
            color,
            Stroke::NONE,
        )],
        Icon::Heart => vec![
            Shape::circle_filled(map(7.4, 8.6), 5.0 * unit, color),
            Shape::circle_filled(map(16.6, 8.6), 5.0 * unit, color),
            Shape::convex_polygon(
                vec![map(2.9, 10.6), map(21.1, 10.6), map(12.0, 21.0)],
                color,
                Stroke::NONE,
            ),
        ],
        other => shapes(other, center, size, color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[Icon] = &[
        Icon::Zap,
        Icon::GitBranch,
        Icon::GitMerge,
        Icon::GitCommit,
        Icon::RotateCcw,
        Icon::History,
        Icon::CheckCircle,
        Icon::XCircle,
        Icon::AlertTriangle,
        Icon::AlertCircle,
        Icon::ShieldAlert,
        Icon::ShieldCheck,
        Icon::CheckSquare,
        Icon::Terminal,
        Icon::Plus,
        Icon::Code,
        Icon::RefreshCw,
        Icon::Combine,
        Icon::ArrowRight,
        Icon::Info,
        Icon::Heart,
        Icon::Star,
        Icon::Sparkles,
        Icon::Flame,
        Icon::Skull,
        Icon::Activity,
        Icon::Play,
        Icon::ChevronLeft,
        Icon::ChevronRight,
        Icon::Maximize,
        Icon::Minimize,
    ];

    #[test]
    fn every_glyph_path_parses() {
        for &icon in ALL {
            for d in glyph(icon).paths {
                assert!(d.parse::<Path>().is_ok(), "{icon:?}: {d}");
            }
        }
    }

    #[test]
    fn glyphs_stay_inside_their_box() {
        for &icon in ALL {
            for d in glyph(icon).paths {
                let path: Path = d.parse().unwrap();
                for p in path.flatten() {
                    assert!(
                        (0.0..=24.0).contains(&p.x) && (0.0..=24.0).contains(&p.y),
                        "{icon:?} leaves the grid at {p:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn every_icon_produces_shapes() {
        for &icon in ALL {
            assert!(!shapes(icon, pos2(0.0, 0.0), 24.0, Color32::WHITE).is_empty());
        }
    }
}
