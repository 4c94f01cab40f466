use std::time::{Duration, Instant};

/// Looping stage counter: advances every `interval`, wrapping modulo `stages`.
#[derive(Debug, Clone, Copy)]
pub struct StageTimer {
    started: Instant,
    interval: Duration,
    stages: usize,
}

impl StageTimer {
    pub fn new(started: Instant, interval: Duration, stages: usize) -> Self {
        Self {
            started,
            interval,
            stages: stages.max(1),
        }
    }

    pub fn restart(&mut self, now: Instant) {
        self.started = now;
    }

    fn ticks(&self, now: Instant) -> u128 {
        let interval = self.interval.as_nanos().max(1);
        now.saturating_duration_since(self.started).as_nanos() / interval
    }

    pub fn stage_at(&self, now: Instant) -> usize {
        (self.ticks(now) % self.stages as u128) as usize
    }

    /// Seconds spent in the current stage.
    pub fn stage_time(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        elapsed % self.interval.as_secs_f32().max(f32::EPSILON)
    }
}

/// Cue points of a one-shot sequence, in seconds from the start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sequence {
    pub cues: &'static [f32],
    pub length: f32,
}

impl Sequence {
    /// Number of cues reached at `t`.
    pub fn stage_at(&self, t: f32) -> usize {
        self.cues.iter().take_while(|&&cue| cue <= t).count()
    }
}

/// Observable state of a [`Playback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing { stage: usize },
    /// Finished; the final frame is held and the sequence can be replayed.
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Running { started: Instant },
    Done,
}

/// Manually triggered one-shot playback of a [`Sequence`].
#[derive(Debug, Clone, Copy)]
pub struct Playback {
    sequence: Sequence,
    phase: Phase,
}

impl Playback {
    pub fn new(sequence: Sequence) -> Self {
        Self {
            sequence,
            phase: Phase::Idle,
        }
    }

    /// Already run to completion, holding the final frame.
    pub fn finished(sequence: Sequence) -> Self {
        Self {
            sequence,
            phase: Phase::Done,
        }
    }

    /// Swap the sequence and return to idle.
    pub fn load(&mut self, sequence: Sequence) {
        self.sequence = sequence;
        self.reset();
    }

    /// Start from stage 0. Ignored while already playing. Returns whether
    /// playback started.
    pub fn play(&mut self, now: Instant) -> bool {
        if matches!(self.state(now), PlaybackState::Playing { .. }) {
            return false;
        }
        self.phase = Phase::Running { started: now };
        true
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn state(&self, now: Instant) -> PlaybackState {
        match self.phase {
            Phase::Idle => PlaybackState::Idle,
            Phase::Done => PlaybackState::Done,
            Phase::Running { started } => {
                let t = now.saturating_duration_since(started).as_secs_f32();
                if t >= self.sequence.length {
                    PlaybackState::Done
                } else {
                    PlaybackState::Playing {
                        stage: self.sequence.stage_at(t),
                    }
                }
            }
        }
    }

    /// Commit a finished run so later frames stop measuring time.
    pub fn tick(&mut self, now: Instant) -> PlaybackState {
        let state = self.state(now);
        if state == PlaybackState::Done {
            self.phase = Phase::Done;
        }
        state
    }

    /// Seconds into the sequence; `None` while idle, the full length once done.
    pub fn elapsed(&self, now: Instant) -> Option<f32> {
        match self.phase {
            Phase::Idle => None,
            Phase::Done => Some(self.sequence.length),
            Phase::Running { started } => Some(
                now.saturating_duration_since(started)
                    .as_secs_f32()
                    .min(self.sequence.length),
            ),
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        matches!(self.state(now), PlaybackState::Playing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQ: Sequence = Sequence {
        cues: &[0.2, 0.5, 1.0],
        length: 1.5,
    };

    fn secs(base: Instant, s: f32) -> Instant {
        base + Duration::from_secs_f32(s)
    }

    #[test]
    fn stage_timer_wraps() {
        let base = Instant::now();
        let timer = StageTimer::new(base, Duration::from_millis(4500), 5);
        assert_eq!(timer.stage_at(base), 0);
        assert_eq!(timer.stage_at(secs(base, 4.4)), 0);
        assert_eq!(timer.stage_at(secs(base, 4.6)), 1);
        assert_eq!(timer.stage_at(secs(base, 4.5 * 4.0 + 0.1)), 4);
        assert_eq!(timer.stage_at(secs(base, 4.5 * 5.0 + 0.1)), 0);
        assert!((timer.stage_time(secs(base, 10.0)) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn stage_timer_before_start_is_stage_zero() {
        let base = Instant::now();
        let timer = StageTimer::new(secs(base, 2.0), Duration::from_secs(1), 3);
        assert_eq!(timer.stage_at(base), 0);
    }

    #[test]
    fn zero_stage_timer_is_treated_as_single_stage() {
        let base = Instant::now();
        let timer = StageTimer::new(base, Duration::from_secs(1), 0);
        assert_eq!(timer.stage_at(secs(base, 7.0)), 0);
    }

    #[test]
    fn playback_walks_through_stages_then_holds() {
        let base = Instant::now();
        let mut p = Playback::new(SEQ);
        assert_eq!(p.state(base), PlaybackState::Idle);
        assert_eq!(p.elapsed(base), None);

        assert!(p.play(base));
        assert_eq!(p.state(secs(base, 0.1)), PlaybackState::Playing { stage: 0 });
        assert_eq!(p.state(secs(base, 0.3)), PlaybackState::Playing { stage: 1 });
        assert_eq!(p.state(secs(base, 1.2)), PlaybackState::Playing { stage: 3 });
        assert_eq!(p.tick(secs(base, 2.0)), PlaybackState::Done);
        assert_eq!(p.elapsed(secs(base, 60.0)), Some(1.5));
    }

    #[test]
    fn retrigger_while_playing_is_ignored() {
        let base = Instant::now();
        let mut p = Playback::new(SEQ);
        p.play(base);
        assert!(!p.play(secs(base, 0.6)));
        assert_eq!(p.state(secs(base, 0.7)), PlaybackState::Playing { stage: 2 });
    }

    #[test]
    fn play_after_done_restarts_from_zero() {
        let base = Instant::now();
        let mut p = Playback::new(SEQ);
        p.play(base);
        p.tick(secs(base, 2.0));
        assert!(p.play(secs(base, 3.0)));
        assert_eq!(p.state(secs(base, 3.1)), PlaybackState::Playing { stage: 0 });
    }

    #[test]
    fn reset_replays_identically() {
        let base = Instant::now();
        let samples = [0.0, 0.19, 0.21, 0.49, 0.51, 0.99, 1.01, 1.49, 1.51];
        let record = |p: &Playback, start: Instant| -> Vec<PlaybackState> {
            samples.iter().map(|&s| p.state(secs(start, s))).collect()
        };

        let mut p = Playback::new(SEQ);
        p.play(base);
        let first = record(&p, base);

        p.reset();
        assert_eq!(p.state(secs(base, 0.3)), PlaybackState::Idle);

        let later = secs(base, 42.0);
        p.play(later);
        assert_eq!(record(&p, later), first);
    }

    #[test]
    fn load_swaps_sequence_and_idles() {
        let base = Instant::now();
        let mut p = Playback::new(SEQ);
        p.play(base);
        let other = Sequence {
            cues: &[0.1],
            length: 0.2,
        };
        p.load(other);
        assert_eq!(p.state(base), PlaybackState::Idle);
        assert_eq!(p.sequence, other);
        p.play(base);
        assert_eq!(p.state(secs(base, 0.15)), PlaybackState::Playing { stage: 1 });
    }

    #[test]
    fn finished_holds_the_last_frame_and_can_replay() {
        let base = Instant::now();
        let mut p = Playback::finished(SEQ);
        assert_eq!(p.state(base), PlaybackState::Done);
        assert_eq!(p.elapsed(base), Some(1.5));
        assert!(p.play(base));
        assert_eq!(p.elapsed(base), Some(0.0));
    }
}
