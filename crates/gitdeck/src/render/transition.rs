use std::time::{Duration, Instant};

use crate::animation::SLIDE_CURVE;

pub const TRANSITION_DURATION: Duration = Duration::from_millis(600);

/// Horizontal travel of a sliding slide, in reference pixels.
pub const TRANSITION_SHIFT: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionKind {
    #[default]
    Slide,
    Fade,
    None,
}

impl TransitionKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "fade" => Self::Fade,
            "none" => Self::None,
            _ => Self::Slide,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Slide => "slide",
            Self::Fade => "fade",
            Self::None => "none",
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            Self::Slide => Self::Fade,
            Self::Fade => Self::None,
            Self::None => Self::Slide,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDirection {
    Forward,
    Backward,
}

impl TransitionDirection {
    fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Where one side of a transition is drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Horizontal offset in reference pixels.
    pub offset: f32,
    pub opacity: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        offset: 0.0,
        opacity: 1.0,
    };
}

#[derive(Debug, Clone, Copy)]
pub struct ActiveTransition {
    pub from: usize,
    pub to: usize,
    pub kind: TransitionKind,
    pub direction: TransitionDirection,
    start: Instant,
}

impl ActiveTransition {
    pub fn new(from: usize, to: usize, kind: TransitionKind, now: Instant) -> Self {
        let direction = if to >= from {
            TransitionDirection::Forward
        } else {
            TransitionDirection::Backward
        };
        Self {
            from,
            to,
            kind,
            direction,
            start: now,
        }
    }

    /// Eased progress in `0..=1`.
    pub fn progress(&self, now: Instant) -> f32 {
        let t = now.saturating_duration_since(self.start).as_secs_f32()
            / TRANSITION_DURATION.as_secs_f32();
        SLIDE_CURVE.apply(t)
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= TRANSITION_DURATION
    }

    pub fn outgoing(&self, now: Instant) -> Pose {
        let p = self.progress(now);
        Pose {
            offset: -self.shift() * p,
            opacity: 1.0 - p,
        }
    }

    pub fn incoming(&self, now: Instant) -> Pose {
        let p = self.progress(now);
        Pose {
            offset: self.shift() * (1.0 - p),
            opacity: p,
        }
    }

    fn shift(&self) -> f32 {
        match self.kind {
            TransitionKind::Slide => TRANSITION_SHIFT * self.direction.sign(),
            TransitionKind::Fade | TransitionKind::None => 0.0,
        }
    }
}

/// Runs transitions towards the navigator's index one at a time.
///
/// A running transition always completes. Index changes that arrive meanwhile
/// are picked up afterwards, going straight from the slide that was shown to
/// the latest index.
#[derive(Debug, Clone)]
pub struct Transitions {
    shown: usize,
    kind: TransitionKind,
    active: Option<ActiveTransition>,
}

impl Transitions {
    pub fn new(shown: usize, kind: TransitionKind) -> Self {
        Self {
            shown,
            kind,
            active: None,
        }
    }

    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Applies to transitions started from now on.
    pub fn set_kind(&mut self, kind: TransitionKind) {
        self.kind = kind;
    }

    /// The slide that is fully on screen, or the outgoing one mid-transition.
    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn active(&self) -> Option<&ActiveTransition> {
        self.active.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Advance towards `target`. Call once per frame before drawing.
    pub fn tick(&mut self, target: usize, now: Instant) {
        if let Some(t) = self.active {
            if !t.is_complete(now) {
                return;
            }
            self.shown = t.to;
            self.active = None;
        }

        if target == self.shown {
            return;
        }
        if self.kind == TransitionKind::None {
            tracing::debug!(from = self.shown, to = target, "slide change");
            self.shown = target;
            return;
        }
        tracing::debug!(from = self.shown, to = target, kind = self.kind.name(), "transition start");
        self.active = Some(ActiveTransition::new(self.shown, target, self.kind, now));
    }

    /// Slides to draw this frame, back to front, with their poses.
    pub fn visible(&self, now: Instant) -> Vec<(usize, Pose)> {
        match self.active {
            Some(t) => vec![(t.from, t.outgoing(now)), (t.to, t.incoming(now))],
            None => vec![(self.shown, Pose::REST)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn kind_names_and_cycle() {
        assert_eq!(TransitionKind::from_name("fade"), TransitionKind::Fade);
        assert_eq!(TransitionKind::from_name("bogus"), TransitionKind::Slide);
        let mut kind = TransitionKind::Slide;
        for _ in 0..3 {
            kind = kind.cycle();
        }
        assert_eq!(kind, TransitionKind::Slide);
    }

    #[test]
    fn forward_slide_enters_from_the_right() {
        let t0 = Instant::now();
        let t = ActiveTransition::new(0, 1, TransitionKind::Slide, t0);
        assert_eq!(t.incoming(t0).offset, TRANSITION_SHIFT);
        assert_eq!(t.incoming(t0).opacity, 0.0);
        assert_eq!(t.outgoing(t0), Pose::REST);
        let end = t.incoming(t0 + TRANSITION_DURATION);
        assert!(end.offset.abs() < 1e-3 && (end.opacity - 1.0).abs() < 1e-3);
        assert!((t.outgoing(t0 + TRANSITION_DURATION).offset + TRANSITION_SHIFT).abs() < 1e-3);
    }

    #[test]
    fn backward_slide_is_mirrored() {
        let t0 = Instant::now();
        let t = ActiveTransition::new(3, 2, TransitionKind::Slide, t0);
        assert_eq!(t.direction, TransitionDirection::Backward);
        assert_eq!(t.incoming(t0).offset, -TRANSITION_SHIFT);
    }

    #[test]
    fn fade_does_not_move() {
        let t0 = Instant::now();
        let t = ActiveTransition::new(0, 1, TransitionKind::Fade, t0);
        assert_eq!(t.incoming(t0 + ms(100)).offset, 0.0);
        assert_eq!(t.outgoing(t0 + ms(100)).offset, 0.0);
    }

    #[test]
    fn a_running_transition_is_never_cancelled() {
        let t0 = Instant::now();
        let mut tr = Transitions::new(0, TransitionKind::Slide);
        tr.tick(1, t0);
        assert_eq!(tr.active().map(|t| (t.from, t.to)), Some((0, 1)));

        // The index moves on mid-flight; the current transition keeps going.
        tr.tick(2, t0 + ms(300));
        assert_eq!(tr.active().map(|t| (t.from, t.to)), Some((0, 1)));

        tr.tick(2, t0 + ms(600));
        assert_eq!(tr.shown(), 1);
        assert_eq!(tr.active().map(|t| (t.from, t.to)), Some((1, 2)));

        tr.tick(2, t0 + ms(1200));
        assert_eq!(tr.shown(), 2);
        assert!(!tr.is_animating());
    }

    #[test]
    fn queued_changes_collapse_to_the_latest_index() {
        let t0 = Instant::now();
        let mut tr = Transitions::new(5, TransitionKind::Fade);
        tr.tick(6, t0);
        tr.tick(7, t0 + ms(100));
        tr.tick(8, t0 + ms(200));
        tr.tick(4, t0 + ms(300));
        tr.tick(4, t0 + ms(700));
        assert_eq!(tr.active().map(|t| (t.from, t.to)), Some((6, 4)));
        tr.tick(4, t0 + ms(1400));
        assert_eq!(tr.shown(), 4);
        assert_eq!(tr.visible(t0 + ms(1400)), vec![(4, Pose::REST)]);
    }

    #[test]
    fn returning_to_the_shown_slide_needs_no_second_transition() {
        let t0 = Instant::now();
        let mut tr = Transitions::new(0, TransitionKind::Slide);
        tr.tick(1, t0);
        tr.tick(0, t0 + ms(100));
        tr.tick(0, t0 + ms(600));
        // 0 -> 1 finished, so going back to 0 is a fresh transition.
        assert_eq!(tr.active().map(|t| (t.from, t.to)), Some((1, 0)));
    }

    #[test]
    fn none_switches_immediately() {
        let t0 = Instant::now();
        let mut tr = Transitions::new(0, TransitionKind::None);
        tr.tick(3, t0);
        assert_eq!(tr.shown(), 3);
        assert!(!tr.is_animating());
    }

    #[test]
    fn both_sides_are_visible_mid_transition() {
        let t0 = Instant::now();
        let mut tr = Transitions::new(0, TransitionKind::Slide);
        tr.tick(1, t0);
        let visible = tr.visible(t0 + ms(300));
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].0, 0);
        assert_eq!(visible[1].0, 1);
        let total = visible[0].1.opacity + visible[1].1.opacity;
        assert!((total - 1.0).abs() < 1e-4);
    }
}
