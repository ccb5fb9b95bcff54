//! Scalar interpolation helpers.
//!
//! [`lerp`] pins both endpoints: `t <= 0` yields `from` and `t >= 1` yields
//! `to` bit-for-bit, and intermediate values never leave `[from, to]`, so a
//! sweep over `t` is monotone even where `from + (to - from)` would round past
//! `to`.

/// Linearly interpolates between `from` and `to` at fraction `t`.
#[must_use]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    let value = from + t * (to - from);
    value.clamp(from.min(to), from.max(to))
}

/// Returns the fraction of `value` between `from` and `to`, clamped to `[0, 1]`.
///
/// A zero-width span maps to `1.0`.
#[must_use]
pub fn inverse_lerp(from: f64, to: f64, value: f64) -> f64 {
    let span = to - from;
    if span.abs() < f64::EPSILON {
        return 1.0;
    }
    ((value - from) / span).clamp(0.0, 1.0)
}
