//! Animated diagrams embedded in content slides.
//!
//! Artwork is authored in a fixed view box (SVG-style user units) and mapped
//! into the space a layout hands out. Each diagram keeps its own clock in a
//! [`DiagramState`] created when its slide mounts and dropped when it leaves
//! the screen.

pub mod chaos;
pub mod git_flow;
pub mod linear_graph;
pub mod static_comparison;
pub mod thank_you;

use std::time::Instant;

use eframe::egui::{Color32, Pos2, Rect, Stroke, pos2, vec2};

use crate::animation::{Playback, StageTimer};
use crate::deck::DiagramKind;
use crate::geometry::{self, Path};
use crate::render::{Action, SETTLED_AGE, SlideCtx};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Workflow {
    #[default]
    Merge,
    Rebase,
}

impl Workflow {
    pub fn name(self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Rebase => "rebase",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Merge => Self::Rebase,
            Self::Rebase => Self::Merge,
        }
    }
}

/// Clock and controls of one mounted diagram.
#[derive(Debug, Clone)]
pub enum DiagramState {
    /// Manually played merge/rebase comparison.
    GitFlow {
        workflow: Workflow,
        playback: Playback,
    },
    /// Looping stage counter; `frozen` pins a stage for still frames.
    Chaos {
        timer: StageTimer,
        frozen: Option<usize>,
    },
    /// Mount-in animation. `started` is `None` once settled; without
    /// `settles_after` the artwork keeps moving while mounted.
    Intro {
        started: Option<Instant>,
        settles_after: Option<f32>,
    },
}

impl DiagramState {
    pub fn mount(kind: DiagramKind, now: Instant) -> Self {
        match kind {
            DiagramKind::GitFlow => Self::GitFlow {
                workflow: Workflow::Merge,
                playback: Playback::new(git_flow::sequence(Workflow::Merge)),
            },
            DiagramKind::Chaos => Self::Chaos {
                timer: chaos::timer(now),
                frozen: None,
            },
            DiagramKind::StaticComparison { .. } => Self::Intro {
                started: Some(now),
                settles_after: Some(static_comparison::intro_secs()),
            },
            DiagramKind::LinearGraph => Self::Intro {
                started: Some(now),
                settles_after: None,
            },
        }
    }

    /// The final frame, for still exports.
    pub fn settled(kind: DiagramKind, now: Instant) -> Self {
        match kind {
            DiagramKind::GitFlow => Self::GitFlow {
                workflow: Workflow::Rebase,
                playback: Playback::finished(git_flow::sequence(Workflow::Rebase)),
            },
            DiagramKind::Chaos => Self::Chaos {
                timer: chaos::timer(now),
                frozen: Some(chaos::STAGES - 1),
            },
            DiagramKind::StaticComparison { .. } | DiagramKind::LinearGraph => Self::Intro {
                started: None,
                settles_after: Some(0.0),
            },
        }
    }

    /// Apply a control action. Returns whether it concerned this diagram.
    pub fn handle(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::Play => {
                self.play(now);
                true
            }
            Action::Reset => {
                self.reset(now);
                true
            }
            Action::SelectWorkflow(w) => self.select_workflow(w),
            Action::Next | Action::Previous | Action::ToggleFullscreen => false,
        }
    }

    pub fn play(&mut self, now: Instant) {
        match self {
            Self::GitFlow { workflow, playback } => {
                if playback.play(now) {
                    tracing::debug!(workflow = workflow.name(), "flow playback started");
                }
            }
            Self::Chaos { timer, frozen } => {
                *frozen = None;
                timer.restart(now);
            }
            Self::Intro { started, .. } => *started = Some(now),
        }
    }

    pub fn reset(&mut self, now: Instant) {
        match self {
            Self::GitFlow { playback, .. } => playback.reset(),
            Self::Chaos { timer, frozen } => {
                *frozen = None;
                timer.restart(now);
            }
            Self::Intro { started, .. } => *started = Some(now),
        }
    }

    /// Switch the flow diagram's workflow, which also resets it.
    pub fn select_workflow(&mut self, selected: Workflow) -> bool {
        match self {
            Self::GitFlow { workflow, playback } => {
                *workflow = selected;
                playback.load(git_flow::sequence(selected));
                true
            }
            _ => false,
        }
    }

    /// Commit finished one-shot playback. Call once per frame.
    pub fn tick(&mut self, now: Instant) {
        if let Self::GitFlow { playback, .. } = self {
            playback.tick(now);
        }
    }

    /// Whether frames keep changing without input.
    pub fn is_animating(&self, now: Instant) -> bool {
        match self {
            Self::GitFlow { playback, .. } => playback.is_animating(now),
            Self::Chaos { frozen, .. } => frozen.is_none(),
            Self::Intro { started: None, .. } => false,
            Self::Intro {
                settles_after: Some(secs),
                ..
            } => self.intro_age(now) < *secs,
            Self::Intro { .. } => true,
        }
    }

    /// Seconds since the intro started, `SETTLED_AGE` once settled.
    fn intro_age(&self, now: Instant) -> f32 {
        match self {
            Self::Intro {
                started: Some(started),
                ..
            } => now.saturating_duration_since(*started).as_secs_f32(),
            _ => SETTLED_AGE,
        }
    }
}

/// Draw `kind` at `pos` across `width`. Returns the height used.
pub fn render(
    ctx: &SlideCtx<'_>,
    kind: DiagramKind,
    state: Option<&DiagramState>,
    pos: Pos2,
    width: f32,
) -> f32 {
    let fallback;
    let state = match state {
        Some(state) => state,
        None => {
            fallback = DiagramState::settled(kind, ctx.now);
            &fallback
        }
    };
    match (kind, state) {
        (DiagramKind::GitFlow, DiagramState::GitFlow { workflow, playback }) => {
            git_flow::render(ctx, *workflow, playback, pos, width)
        }
        (DiagramKind::Chaos, DiagramState::Chaos { timer, frozen }) => {
            let (stage, stage_time) = match frozen {
                Some(stage) => (*stage, SETTLED_AGE),
                None => (timer.stage_at(ctx.now), timer.stage_time(ctx.now)),
            };
            chaos::render(ctx, stage, stage_time, pos, width)
        }
        (DiagramKind::StaticComparison { minimal }, state) => {
            static_comparison::render(ctx, minimal, state.intro_age(ctx.now), pos, width)
        }
        (DiagramKind::LinearGraph, state) => {
            linear_graph::render(ctx, state.intro_age(ctx.now), pos, width)
        }
        (kind, state) => {
            tracing::warn!(kind = kind.name(), ?state, "diagram state does not match its kind");
            0.0
        }
    }
}

/// Uniform mapping from a diagram's view box into screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    origin: Pos2,
    unit: f32,
}

impl ViewBox {
    /// Fit a `width` x `height` view box into `rect`, centred.
    pub fn fit(rect: Rect, width: f32, height: f32) -> Self {
        let unit = (rect.width() / width).min(rect.height() / height).max(0.0);
        let used = vec2(width * unit, height * unit);
        let origin = rect.min + (rect.size() - used) / 2.0;
        Self { origin, unit }
    }

    pub fn map(&self, p: Pos2) -> Pos2 {
        self.origin + p.to_vec2() * self.unit
    }

    pub fn at(&self, x: f32, y: f32) -> Pos2 {
        self.map(pos2(x, y))
    }

    /// Scale a length in view box units.
    pub fn len(&self, v: f32) -> f32 {
        v * self.unit
    }
}

/// Flatten a table of path literals. Unparsable entries are logged and
/// come back empty so the rest of the diagram still draws.
pub fn flatten_all(table: &[&str]) -> Vec<Vec<Pos2>> {
    table
        .iter()
        .map(|d| match d.parse::<Path>() {
            Ok(path) => path.flatten(),
            Err(err) => {
                tracing::warn!(path = %d, "unparsable diagram path: {err}");
                Vec::new()
            }
        })
        .collect()
}

/// Stroke the leading `progress` of a view-box polyline.
pub fn draw_path(
    ctx: &SlideCtx<'_>,
    vb: &ViewBox,
    points: &[Pos2],
    progress: f32,
    width: f32,
    color: Color32,
    dashed: Option<(f32, f32)>,
) {
    if progress <= 0.0 || points.len() < 2 {
        return;
    }
    let screen: Vec<Pos2> = geometry::trim(points, progress)
        .into_iter()
        .map(|p| vb.map(p))
        .collect();
    let stroke = Stroke::new(vb.len(width).max(1.0), color);
    match dashed {
        Some((dash, gap)) => draw_dashed_polyline(ctx, &screen, vb.len(dash), vb.len(gap), stroke),
        None => ctx.line(screen, stroke),
    }
}

/// Draw a dashed polyline across multiple segments with continuity.
fn draw_dashed_polyline(ctx: &SlideCtx<'_>, points: &[Pos2], dash: f32, gap: f32, stroke: Stroke) {
    let total_len = geometry::polyline_length(points);
    let (dash, gap) = (dash.max(0.5), gap.max(0.5));

    let mut d = 0.0;
    let mut drawing = true;
    while d < total_len {
        if drawing {
            let seg_end_d = (d + dash).min(total_len);
            let p1 = geometry::point_at_distance(points, d);
            let p2 = geometry::point_at_distance(points, seg_end_d);
            ctx.line_segment([p1, p2], stroke);
            d += dash;
        } else {
            d += gap;
        }
        drawing = !drawing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::PlaybackState;
    use std::time::Duration;

    #[test]
    fn view_box_fits_and_centres() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(1600.0, 300.0));
        let vb = ViewBox::fit(rect, 800.0, 300.0);
        assert_eq!(vb.len(1.0), 1.0);
        assert_eq!(vb.at(0.0, 0.0), pos2(400.0, 0.0));
        assert_eq!(vb.at(800.0, 300.0), pos2(1200.0, 300.0));
    }

    #[test]
    fn bad_paths_flatten_to_nothing() {
        let out = flatten_all(&["M 0 0 L 10 0", "Q 1 2 3 4"]);
        assert_eq!(out[0].len(), 2);
        assert!(out[1].is_empty());
    }

    #[test]
    fn switching_workflow_resets_the_flow() {
        let t0 = Instant::now();
        let mut state = DiagramState::mount(DiagramKind::GitFlow, t0);
        state.play(t0);
        assert!(state.is_animating(t0 + Duration::from_millis(100)));
        assert!(state.handle(Action::SelectWorkflow(Workflow::Rebase), t0));
        match &state {
            DiagramState::GitFlow { workflow, playback } => {
                assert_eq!(*workflow, Workflow::Rebase);
                assert_eq!(playback.state(t0), PlaybackState::Idle);
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn navigation_actions_are_not_diagram_controls() {
        let t0 = Instant::now();
        let mut state = DiagramState::mount(DiagramKind::Chaos, t0);
        assert!(!state.handle(Action::Next, t0));
        assert!(!state.select_workflow(Workflow::Rebase));
    }

    #[test]
    fn settled_states_do_not_animate() {
        let t0 = Instant::now();
        for kind in [
            DiagramKind::GitFlow,
            DiagramKind::Chaos,
            DiagramKind::StaticComparison { minimal: false },
        ] {
            assert!(!DiagramState::settled(kind, t0).is_animating(t0), "{kind:?}");
        }
    }

    #[test]
    fn static_comparison_stops_animating_after_its_intro() {
        let t0 = Instant::now();
        let mut state = DiagramState::mount(DiagramKind::StaticComparison { minimal: false }, t0);
        assert!(state.is_animating(t0 + Duration::from_millis(500)));
        assert!(!state.is_animating(t0 + Duration::from_millis(1100)));
        assert!(!state.is_animating(t0 + Duration::from_secs(600)));

        let later = t0 + Duration::from_secs(600);
        state.reset(later);
        assert!(state.is_animating(later + Duration::from_millis(100)));
    }

    #[test]
    fn linear_graph_keeps_pinging_while_mounted() {
        let t0 = Instant::now();
        let state = DiagramState::mount(DiagramKind::LinearGraph, t0);
        assert!(state.is_animating(t0 + Duration::from_secs(600)));
        assert!(!DiagramState::settled(DiagramKind::LinearGraph, t0).is_animating(t0));
    }

    #[test]
    fn chaos_reset_replays_the_same_stages() {
        let t0 = Instant::now();
        let mut state = DiagramState::mount(DiagramKind::Chaos, t0);
        let restart = t0 + chaos::INTERVAL.mul_f32(2.5);
        let DiagramState::Chaos { timer, .. } = &state else {
            panic!("unexpected state {state:?}");
        };
        assert_eq!(timer.stage_at(restart), 2);

        state.reset(restart);
        let DiagramState::Chaos { timer, frozen } = &state else {
            panic!("unexpected state {state:?}");
        };
        assert_eq!(*frozen, None);
        for k in 0..7u32 {
            let at = restart + chaos::INTERVAL.mul_f32(k as f32 + 0.5);
            assert_eq!(timer.stage_at(at), k as usize % chaos::STAGES);
        }
    }

    #[test]
    fn replaying_an_intro_restarts_its_clock() {
        let t0 = Instant::now();
        let mut state = DiagramState::mount(DiagramKind::LinearGraph, t0);
        let later = t0 + Duration::from_secs(5);
        assert!((state.intro_age(later) - 5.0).abs() < 1e-3);
        state.reset(later);
        assert_eq!(state.intro_age(later), 0.0);
    }
}
