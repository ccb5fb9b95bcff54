use crate::error::{AnimationError, Result};

/// Bisection steps for solving the bézier x-coordinate.
const SOLVE_ITERATIONS: usize = 64;

/// Width of the parameter bracket at which solving stops.
const SOLVE_EPSILON: f64 = 1e-12;

/// Timing curve mapping linear elapsed-time fraction to progress.
///
/// The named curves are the standard cubic-bézier timing functions with end
/// points `(0, 0)` and `(1, 1)`:
///
/// | curve        | control points            |
/// |--------------|---------------------------|
/// | `EaseIn`     | `(0.42, 0.0), (1.0, 1.0)` |
/// | `EaseOut`    | `(0.0, 0.0), (0.58, 1.0)` |
/// | `EaseInOut`  | `(0.42, 0.0), (0.58, 1.0)`|
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
    /// Custom timing curve. All four coordinates must lie in `[0, 1]`.
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Easing {
    /// Returns the bézier control points, or `None` for [`Easing::Linear`].
    #[must_use]
    pub fn control_points(&self) -> Option<(f64, f64, f64, f64)> {
        match *self {
            Easing::Linear => None,
            Easing::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Easing::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Easing::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Easing::CubicBezier { x1, y1, x2, y2 } => Some((x1, y1, x2, y2)),
        }
    }

    /// Checks that the curve is a monotone function of time.
    ///
    /// With every control coordinate in `[0, 1]` both `x(s)` and `y(s)` are
    /// non-decreasing, so progress never overshoots or reverses.
    ///
    /// # Errors
    ///
    /// Returns [`AnimationError::InvalidEasing`] if a custom curve has a
    /// control coordinate outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if let Easing::CubicBezier { x1, y1, x2, y2 } = *self {
            let unit = 0.0..=1.0;
            if ![x1, y1, x2, y2].iter().all(|c| unit.contains(c)) {
                return Err(AnimationError::InvalidEasing { x1, y1, x2, y2 }.into());
            }
        }
        Ok(())
    }

    /// Maps linear fraction `t` to eased progress.
    ///
    /// `t` is clamped to `[0, 1]`; `apply(0.0)` is exactly `0.0` and
    /// `apply(1.0)` is exactly `1.0`.
    #[must_use]
    pub fn apply(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self.control_points() {
            None => t,
            Some((x1, y1, x2, y2)) => {
                let s = solve_parameter(x1, x2, t);
                bezier_component(y1, y2, s)
            }
        }
    }
}

/// One coordinate of a cubic bézier with end points 0 and 1.
fn bezier_component(c1: f64, c2: f64, s: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * s * c1 + 3.0 * u * s * s * c2 + s * s * s
}

/// Finds `s` with `x(s) = x` by bisection.
///
/// `x(s)` is non-decreasing for `x1, x2` in `[0, 1]`. The bracket shrinks the
/// same way for every target, so the solution is non-decreasing in `x`.
fn solve_parameter(x1: f64, x2: f64, x: f64) -> f64 {
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    for _ in 0..SOLVE_ITERATIONS {
        if hi - lo < SOLVE_EPSILON {
            break;
        }
        let mid = 0.5 * (lo + hi);
        if bezier_component(x1, x2, mid) < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}
