/// Easing curves used by slide transitions and diagram tweens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    InOutQuad,
    OutCubic,
    /// Overshooting pop used where a spring would settle a scale-in.
    OutBack,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)`.
    Bezier(f32, f32, f32, f32),
}

/// The deck's slide-in curve, `cubic-bezier(0.22, 1, 0.36, 1)`.
pub const SLIDE_CURVE: Ease = Ease::Bezier(0.22, 1.0, 0.36, 1.0);

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutQuad => ease_in_out(t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::OutBack => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u.powi(3) + c1 * u.powi(2)
            }
            Self::Bezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

fn bezier_axis(a: f32, b: f32, s: f32) -> f32 {
    // One axis of a cubic bezier anchored at 0 and 1.
    let u = 1.0 - s;
    3.0 * u * u * s * a + 3.0 * u * s * s * b + s * s * s
}

fn bezier_axis_slope(a: f32, b: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * a + 6.0 * u * s * (b - a) + 3.0 * s * s * (1.0 - b)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // Newton first, bisection when the slope flattens out.
    let mut s = x;
    for _ in 0..8 {
        let err = bezier_axis(x1, x2, s) - x;
        if err.abs() < 1e-5 {
            return bezier_axis(y1, y2, s);
        }
        let slope = bezier_axis_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let v = bezier_axis(x1, x2, s);
        if (v - x).abs() < 1e-5 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier_axis(y1, y2, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 5] = [
        Ease::Linear,
        Ease::InOutQuad,
        Ease::OutCubic,
        Ease::OutBack,
        SLIDE_CURVE,
    ];

    #[test]
    fn endpoints_are_stable() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-4, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-4, "{ease:?} at 1");
        }
    }

    #[test]
    fn inputs_outside_unit_range_are_clamped() {
        assert_eq!(Ease::Linear.apply(-3.0), 0.0);
        assert_eq!(Ease::InOutQuad.apply(7.0), 1.0);
    }

    #[test]
    fn slide_curve_is_monotone_and_front_loaded() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = SLIDE_CURVE.apply(i as f32 / 100.0);
            assert!(v + 1e-4 >= prev, "dip at {i}");
            prev = v;
        }
        // Strong ease-out: most of the motion happens early.
        assert!(SLIDE_CURVE.apply(0.25) > 0.7);
    }

    #[test]
    fn linear_bezier_is_identity() {
        let linear = Ease::Bezier(0.25, 0.25, 0.75, 0.75);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((linear.apply(t) - t).abs() < 1e-3);
        }
    }

    #[test]
    fn out_back_overshoots_before_settling() {
        let peak = (1..100)
            .map(|i| Ease::OutBack.apply(i as f32 / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0);
    }
}
