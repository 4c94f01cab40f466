use super::easing::Ease;

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linear progress in `0..=1` of a tween starting at `delay` and lasting `duration` seconds.
pub fn progress(t: f32, delay: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return if t >= delay { 1.0 } else { 0.0 };
    }
    ((t - delay) / duration).clamp(0.0, 1.0)
}

/// Eased tween from `from` to `to`.
pub fn tween(t: f32, delay: f32, duration: f32, from: f32, to: f32, ease: Ease) -> f32 {
    lerp(from, to, ease.apply(progress(t, delay, duration)))
}

/// Fade-in over the default 0.3 s once `delay` has passed.
pub fn fade_in(t: f32, delay: f32) -> f32 {
    progress(t, delay, 0.3)
}

/// Sample a keyframe track. `times` are offsets in `0..=1` of `duration`; when
/// `None`, the keys are spaced evenly. Each segment is eased independently.
pub fn keyframes(
    t: f32,
    delay: f32,
    duration: f32,
    values: &[f32],
    times: Option<&[f32]>,
    ease: Ease,
) -> f32 {
    match values {
        [] => 0.0,
        [only] => *only,
        _ => {
            let p = progress(t, delay, duration);
            let last = values.len() - 1;
            let offset = |i: usize| match times {
                Some(ts) => ts.get(i).copied().unwrap_or(1.0),
                None => i as f32 / last as f32,
            };
            for i in 0..last {
                let (a, b) = (offset(i), offset(i + 1));
                if p <= b {
                    let span = b - a;
                    let local = if span <= 0.0 { 1.0 } else { (p - a) / span };
                    return lerp(values[i], values[i + 1], ease.apply(local));
                }
            }
            values[last]
        }
    }
}

/// Smooth `0 → 1 → 0` oscillation with the given period, for looping pulses.
pub fn pulse(t: f32, period: f32) -> f32 {
    if period <= 0.0 {
        return 0.0;
    }
    let phase = (t / period).fract();
    0.5 - 0.5 * (phase * std::f32::consts::TAU).cos()
}

/// On/off blink with the given period; on for the first half.
pub fn blink(t: f32, period: f32) -> bool {
    period > 0.0 && (t / period).fract() < 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_respects_delay_and_duration() {
        assert_eq!(progress(0.1, 0.2, 1.0), 0.0);
        assert!((progress(0.7, 0.2, 1.0) - 0.5).abs() < 1e-6);
        assert_eq!(progress(5.0, 0.2, 1.0), 1.0);
        assert_eq!(progress(0.2, 0.2, 0.0), 1.0);
        assert_eq!(progress(0.19, 0.2, 0.0), 0.0);
    }

    #[test]
    fn keyframes_follow_explicit_times() {
        // Hold for the first 20% then travel: the rebase move of a commit node.
        let values = [350.0, 350.0, 500.0];
        let times = [0.0, 0.2, 1.0];
        let at = |t| keyframes(t, 3.5, 1.0, &values, Some(&times), Ease::Linear);
        assert_eq!(at(3.0), 350.0);
        assert_eq!(at(3.6), 350.0);
        assert!((at(4.1) - 425.0).abs() < 1e-3);
        assert_eq!(at(9.0), 500.0);
    }

    #[test]
    fn keyframes_space_evenly_without_times() {
        // Draw in, hold, undraw: the feature branch during a rebase.
        let values = [0.0, 1.0, 1.0, 0.0];
        let at = |t| keyframes(t, 0.0, 3.0, &values, None, Ease::Linear);
        assert_eq!(at(0.0), 0.0);
        assert!((at(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(at(1.5), 1.0);
        assert_eq!(at(3.0), 0.0);
    }

    #[test]
    fn degenerate_tracks_do_not_panic() {
        assert_eq!(keyframes(1.0, 0.0, 1.0, &[], None, Ease::Linear), 0.0);
        assert_eq!(keyframes(1.0, 0.0, 1.0, &[4.0], None, Ease::Linear), 4.0);
        assert_eq!(
            keyframes(1.0, 0.0, 1.0, &[0.0, 1.0], Some(&[]), Ease::Linear),
            1.0
        );
    }

    #[test]
    fn pulse_and_blink_repeat() {
        assert!(pulse(0.0, 1.2).abs() < 1e-6);
        assert!((pulse(0.6, 1.2) - 1.0).abs() < 1e-5);
        assert!((pulse(1.2, 1.2) - pulse(0.0, 1.2)).abs() < 1e-5);
        assert!(blink(0.1, 0.8));
        assert!(!blink(0.5, 0.8));
        assert!(blink(0.9, 0.8));
    }
}
