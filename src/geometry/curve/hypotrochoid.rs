use std::f64::consts::TAU;

use crate::error::Result;
use crate::geometry::params::{CurveParameters, Limits};
use crate::geometry::point_sequence::PointSequence;
use crate::math::Point2;

/// A hypotrochoid-like spirograph curve.
///
/// With `Δr = major - minor`:
///
/// `x(θ) = Δr * cos(θ) + offset * cos(Δr * θ / minor)`
/// `y(θ) = Δr * sin(θ) + offset * sin(Δr * θ / minor)`
///
/// and samples are taken at `θ = i * 2π / sample_count`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hypotrochoid {
    params: CurveParameters,
    radius_difference: f64,
    angular_step: f64,
}

impl Hypotrochoid {
    /// Creates a new curve from validated parameters.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the minor radius is zero, or a `RangeError`
    /// if any parameter is non-finite or outside `limits`.
    pub fn new(params: CurveParameters, limits: &Limits) -> Result<Self> {
        params.validate(limits)?;
        Ok(Self::from_valid(params))
    }

    /// Builds the curve for parameters already known to be valid.
    pub(crate) fn from_valid(params: CurveParameters) -> Self {
        Self {
            params,
            radius_difference: params.radius_difference(),
            angular_step: TAU / params.sample_count,
        }
    }

    /// Returns the parameters of the curve.
    #[must_use]
    pub fn params(&self) -> &CurveParameters {
        &self.params
    }

    /// Returns the angle between consecutive samples (`2π / sample_count`).
    #[must_use]
    pub fn angular_step(&self) -> f64 {
        self.angular_step
    }

    /// Evaluates the curve at angle `theta`.
    #[must_use]
    pub fn evaluate(&self, theta: f64) -> Point2 {
        let dr = self.radius_difference;
        let offset = self.params.offset;
        let pen_angle = dr * theta / self.params.minor_radius;
        Point2::new(
            dr * theta.cos() + offset * pen_angle.cos(),
            dr * theta.sin() + offset * pen_angle.sin(),
        )
    }

    /// Samples `iterations` points at `θ = angular_step * i`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, iterations: usize) -> PointSequence {
        let points = (0..iterations)
            .map(|i| self.evaluate(self.angular_step * i as f64))
            .collect();
        PointSequence::new(points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn curve(major: f64, minor: f64, offset: f64, samples: f64) -> Hypotrochoid {
        Hypotrochoid::new(
            CurveParameters::new(major, minor, offset, samples),
            &Limits::default(),
        )
        .unwrap()
    }

    #[test]
    fn evaluate_at_zero() {
        let c = curve(100.0, 50.0, 25.0, 50.0);
        assert_relative_eq!(c.evaluate(0.0), Point2::new(75.0, 0.0));
    }

    #[test]
    fn evaluate_at_quarter_turn() {
        // Δr = 60, pen angle = 60 * (π/2) / 20 = 3π/2
        let c = curve(80.0, 20.0, 10.0, 50.0);
        let p = c.evaluate(FRAC_PI_2);
        assert_relative_eq!(p, Point2::new(0.0, 50.0), epsilon = 1e-9);
    }

    #[test]
    fn angular_step_follows_sample_count() {
        let c = curve(100.0, 50.0, 25.0, 4.0);
        assert_eq!(c.params(), &CurveParameters::new(100.0, 50.0, 25.0, 4.0));
        assert_relative_eq!(c.angular_step(), FRAC_PI_2);
    }

    #[test]
    fn sample_length_is_independent_of_sample_count() {
        assert_eq!(curve(100.0, 50.0, 25.0, 2.0).sample(300).len(), 300);
        assert_eq!(curve(100.0, 50.0, 25.0, 100.0).sample(300).len(), 300);
    }

    #[test]
    fn equal_radii_collapse_to_a_point() {
        let c = curve(40.0, 40.0, 12.0, 37.0);
        for p in &c.sample(500) {
            assert_relative_eq!(*p, Point2::new(12.0, 0.0));
        }
    }

    #[test]
    fn zero_offset_traces_circle_of_radius_difference() {
        let c = curve(90.0, 30.0, 0.0, 64.0);
        for p in &c.sample(64) {
            assert_relative_eq!(p.coords.norm(), 60.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn zero_minor_radius_is_rejected() {
        let r = Hypotrochoid::new(CurveParameters::new(100.0, 0.0, 25.0, 50.0), &Limits::default());
        assert!(r.unwrap_err().is_domain());
    }
}
