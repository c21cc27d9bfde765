//! Easing curves for opacity fades

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    /// Symmetric ease, the curve native carets use for their fades
    #[default]
    EaseInOut,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a progress value, clamped to `0.0..=1.0`
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => bezier(t, x1, y1, x2, y2),
        }
    }
}

/// Solve `x(p) = t` for the curve parameter by Newton steps, then bisection
/// if the slope flattens out, and return `y(p)`.
fn bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }

    let (t, x1, y1, x2, y2) = (t as f64, x1 as f64, y1 as f64, x2 as f64, y2 as f64);
    let sample = |p: f64, c1: f64, c2: f64| {
        let a = 1.0 - 3.0 * c2 + 3.0 * c1;
        let b = 3.0 * c2 - 6.0 * c1;
        let c = 3.0 * c1;
        ((a * p + b) * p + c) * p
    };
    let slope = |p: f64, c1: f64, c2: f64| {
        let a = 1.0 - 3.0 * c2 + 3.0 * c1;
        let b = 3.0 * c2 - 6.0 * c1;
        let c = 3.0 * c1;
        (3.0 * a * p + 2.0 * b) * p + c
    };

    let mut p = t;
    for _ in 0..8 {
        let err = sample(p, x1, x2) - t;
        if err.abs() < 1e-7 {
            return sample(p, y1, y2) as f32;
        }
        let d = slope(p, x1, x2);
        if d.abs() < 1e-7 {
            break;
        }
        p -= err / d;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = t;
    for _ in 0..24 {
        let x = sample(p, x1, x2);
        if (x - t).abs() < 1e-7 {
            break;
        }
        if x < t {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }
    sample(p, y1, y2) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::CubicBezier(0.42, 0.0, 0.58, 1.0),
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-0.5), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.5), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let e = Easing::EaseInOut;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-6);

        let css = Easing::CubicBezier(0.42, 0.0, 0.58, 1.0);
        assert!((css.apply(0.5) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 1..=20 {
                let v = easing.apply(i as f32 / 20.0);
                assert!(v >= prev - 1e-5, "{easing:?} dipped at step {i}");
                prev = v;
            }
        }
    }
}
