use std::iter::FusedIterator;
use std::time::Duration;

use crate::error::{AnimationError, RangeError, Result};
use crate::geometry::{CurveParameters, Hypotrochoid, Limits, PointSequence};
use crate::math::interpolate::inverse_lerp;
use crate::operations::creation::DEFAULT_ITERATIONS;

use super::easing::Easing;

/// Default transition length.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(5);

/// Interpolates all four parameters between `from` and `to` at progress `t`.
///
/// `t <= 0` yields `from` and `t >= 1` yields `to` exactly.
#[must_use]
pub fn interpolate(from: &CurveParameters, to: &CurveParameters, t: f64) -> CurveParameters {
    from.lerp(to, t)
}

/// A request to move the curve from one parameter set to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRequest {
    /// Parameters at the start of the transition.
    pub from: CurveParameters,
    /// Parameters at the end of the transition.
    pub to: CurveParameters,
    /// Length of the transition.
    pub duration: Duration,
    /// Timing curve applied to elapsed time.
    pub easing: Easing,
}

impl AnimationRequest {
    /// Creates a request with the default ease-in-ease-out timing.
    #[must_use]
    pub fn new(from: CurveParameters, to: CurveParameters, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            easing: Easing::default(),
        }
    }

    /// Replaces the timing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// One rendered instant of a transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Time since the transition started, clamped to its duration.
    pub elapsed: Duration,
    /// Eased progress in `[0, 1]`.
    pub progress: f64,
    /// Interpolated parameters for this instant.
    pub parameters: CurveParameters,
    /// Curve generated from `parameters`.
    pub points: PointSequence,
}

/// Drives a validated [`AnimationRequest`] over time.
///
/// Both end points are checked up front, so every intermediate parameter set
/// lies inside the limits and has a non-zero minor radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterAnimator {
    request: AnimationRequest,
    limits: Limits,
    iterations: usize,
}

impl ParameterAnimator {
    /// Creates an animator with the default limits and iteration count.
    ///
    /// # Errors
    ///
    /// See [`ParameterAnimator::with_options`].
    pub fn new(request: AnimationRequest) -> Result<Self> {
        Self::with_options(request, Limits::default(), DEFAULT_ITERATIONS)
    }

    /// Creates an animator generating `iterations` points per frame.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if either end point has a zero minor radius, a
    /// `RangeError` if `limits` is unusable, an end point is outside it or
    /// `iterations` is zero, and an `AnimationError` if the duration is zero
    /// or the easing curve is not monotone.
    pub fn with_options(request: AnimationRequest, limits: Limits, iterations: usize) -> Result<Self> {
        limits.validate()?;
        request.to.validate(&limits)?;
        request.from.validate(&limits)?;
        if iterations == 0 {
            return Err(RangeError::ZeroIterations.into());
        }
        if request.duration.is_zero() {
            return Err(AnimationError::ZeroDuration.into());
        }
        request.easing.validate()?;

        tracing::debug!(
            from = ?request.from,
            to = ?request.to,
            duration = ?request.duration,
            "animation started"
        );
        Ok(Self {
            request,
            limits,
            iterations,
        })
    }

    /// Returns the request being animated.
    #[must_use]
    pub fn request(&self) -> &AnimationRequest {
        &self.request
    }

    /// Returns the limits the end points were validated against.
    #[must_use]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Returns the transition length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.request.duration
    }

    /// Returns `true` once `elapsed` has reached the duration.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.request.duration
    }

    /// Returns the eased progress at `elapsed`.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.is_finished(elapsed) {
            return 1.0;
        }
        let linear = inverse_lerp(
            0.0,
            self.request.duration.as_secs_f64(),
            elapsed.as_secs_f64(),
        );
        self.request.easing.apply(linear)
    }

    /// Returns the parameters at linear time fraction `fraction`, after easing.
    #[must_use]
    pub fn parameters_at_fraction(&self, fraction: f64) -> CurveParameters {
        let progress = self.request.easing.apply(fraction);
        interpolate(&self.request.from, &self.request.to, progress)
    }

    /// Returns the parameters at `elapsed`.
    #[must_use]
    pub fn parameters_at(&self, elapsed: Duration) -> CurveParameters {
        interpolate(&self.request.from, &self.request.to, self.progress(elapsed))
    }

    /// Returns the frame at `elapsed`. Past the duration this is the final frame.
    #[must_use]
    pub fn frame_at(&self, elapsed: Duration) -> Frame {
        let elapsed = elapsed.min(self.request.duration);
        let progress = self.progress(elapsed);
        let parameters = interpolate(&self.request.from, &self.request.to, progress);
        let points = Hypotrochoid::from_valid(parameters).sample(self.iterations);
        Frame {
            elapsed,
            progress,
            parameters,
            points,
        }
    }

    /// Returns frames spaced `interval` apart, ending with a frame exactly at
    /// the duration.
    ///
    /// # Errors
    ///
    /// Returns [`AnimationError::ZeroFrameInterval`] if `interval` is zero.
    pub fn frames(&self, interval: Duration) -> Result<Frames> {
        if interval.is_zero() {
            return Err(AnimationError::ZeroFrameInterval.into());
        }
        Ok(Frames {
            animator: *self,
            interval,
            next_elapsed: Duration::ZERO,
            done: false,
        })
    }
}

/// Iterator over the frames of a transition. See [`ParameterAnimator::frames`].
#[derive(Debug, Clone)]
pub struct Frames {
    animator: ParameterAnimator,
    interval: Duration,
    next_elapsed: Duration,
    done: bool,
}

impl Iterator for Frames {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.done {
            return None;
        }
        let duration = self.animator.duration();
        let elapsed = self.next_elapsed.min(duration);
        if elapsed >= duration {
            self.done = true;
        }
        self.next_elapsed = self.next_elapsed.saturating_add(self.interval);
        Some(self.animator.frame_at(elapsed))
    }
}

impl FusedIterator for Frames {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{DomainError, SpirographError};
    use crate::math::Point2;
    use approx::assert_relative_eq;

    fn from() -> CurveParameters {
        CurveParameters::new(100.0, 50.0, 25.0, 50.0)
    }

    fn to() -> CurveParameters {
        CurveParameters::new(60.0, 35.0, 45.0, 12.0)
    }

    fn animator() -> ParameterAnimator {
        ParameterAnimator::new(AnimationRequest::new(from(), to(), DEFAULT_DURATION)).unwrap()
    }

    #[test]
    fn interpolate_endpoints_are_exact() {
        assert_eq!(interpolate(&from(), &to(), 0.0), from());
        assert_eq!(interpolate(&from(), &to(), 1.0), to());
    }

    #[test]
    fn interpolation_is_monotone_per_field() {
        let a = animator();
        let mut prev = a.parameters_at(Duration::ZERO);
        for ms in (0..=5000).step_by(50) {
            let p = a.parameters_at(Duration::from_millis(ms));
            assert!(p.major_radius <= prev.major_radius);
            assert!(p.minor_radius <= prev.minor_radius);
            assert!(p.offset >= prev.offset);
            assert!(p.sample_count <= prev.sample_count);
            prev = p;
        }
    }

    #[test]
    fn start_and_end_parameters() {
        let a = animator();
        assert_eq!(a.parameters_at(Duration::ZERO), from());
        assert_eq!(a.parameters_at(DEFAULT_DURATION), to());
        assert_eq!(a.parameters_at(Duration::from_secs(60)), to());
    }

    #[test]
    fn midpoint_of_ease_in_out_is_halfway() {
        let p = animator().parameters_at(Duration::from_millis(2500));
        assert_relative_eq!(p.major_radius, 80.0, epsilon = 1e-6);
        assert_relative_eq!(p.offset, 35.0, epsilon = 1e-6);
    }

    #[test]
    fn linear_easing_tracks_time() {
        let a = ParameterAnimator::new(
            AnimationRequest::new(from(), to(), Duration::from_secs(4)).with_easing(Easing::Linear),
        )
        .unwrap();
        assert_relative_eq!(a.progress(Duration::from_secs(1)), 0.25);
        assert_relative_eq!(a.parameters_at_fraction(0.25).major_radius, 90.0);
    }

    #[test]
    fn rejects_zero_minor_radius_target() {
        let target = to().with(crate::geometry::Parameter::MinorRadius, 0.0);
        let err = ParameterAnimator::new(AnimationRequest::new(from(), target, DEFAULT_DURATION))
            .unwrap_err();
        assert_eq!(err, SpirographError::Domain(DomainError::ZeroMinorRadius));
    }

    #[test]
    fn rejects_zero_duration() {
        let err = ParameterAnimator::new(AnimationRequest::new(from(), to(), Duration::ZERO))
            .unwrap_err();
        assert_eq!(err, SpirographError::Animation(AnimationError::ZeroDuration));
    }

    #[test]
    fn rejects_zero_frame_interval() {
        assert!(animator().frames(Duration::ZERO).is_err());
    }

    #[test]
    fn frames_end_exactly_at_target() {
        let frames: Vec<Frame> = animator()
            .frames(Duration::from_millis(300))
            .unwrap()
            .collect();
        // 0, 300, ..., 4800, then 5000.
        assert_eq!(frames.len(), 18);
        assert_eq!(frames[0].parameters, from());
        let last = frames.last().unwrap();
        assert_eq!(last.elapsed, DEFAULT_DURATION);
        assert_eq!(last.parameters, to());
        assert_relative_eq!(last.progress, 1.0);
        assert!(frames.iter().all(|f| f.points.len() == DEFAULT_ITERATIONS));
    }

    #[test]
    fn frames_on_exact_boundary_do_not_repeat_last() {
        let frames: Vec<Frame> = animator().frames(Duration::from_secs(1)).unwrap().collect();
        assert_eq!(frames.len(), 6);
        assert_eq!(frames[5].elapsed, DEFAULT_DURATION);
    }

    #[test]
    fn identical_endpoints_give_constant_frames() {
        let a = ParameterAnimator::new(AnimationRequest::new(from(), from(), Duration::from_secs(2)))
            .unwrap();
        let frames: Vec<Frame> = a.frames(Duration::from_millis(250)).unwrap().collect();
        let first = &frames[0].points;
        assert_relative_eq!(first.points[0], Point2::new(75.0, 0.0));
        assert!(frames.iter().all(|f| &f.points == first));
    }

    #[test]
    fn frame_matches_generator_output() {
        let a = animator();
        let frame = a.frame_at(Duration::from_millis(1234));
        let expected = crate::operations::GenerateCurve::new(frame.parameters)
            .execute()
            .unwrap();
        assert_eq!(frame.points, expected);
    }

    #[test]
    fn rejects_overshooting_easing() {
        let request = AnimationRequest::new(from(), to(), DEFAULT_DURATION).with_easing(
            Easing::CubicBezier {
                x1: 0.3,
                y1: 2.0,
                x2: 0.7,
                y2: 2.0,
            },
        );
        let err = ParameterAnimator::new(request).unwrap_err();
        assert!(matches!(
            err,
            SpirographError::Animation(AnimationError::InvalidEasing { .. })
        ));
    }

    #[test]
    fn rejects_unusable_limits() {
        let limits = Limits {
            min_samples: 0.0,
            ..Limits::default()
        };
        let request = AnimationRequest::new(from(), to(), DEFAULT_DURATION);
        let err = ParameterAnimator::with_options(request, limits, DEFAULT_ITERATIONS).unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn exposes_validated_request_and_limits() {
        let limits = Limits {
            max_major_radius: 150.0,
            ..Limits::default()
        };
        let request = AnimationRequest::new(from(), to(), DEFAULT_DURATION);
        let a = ParameterAnimator::with_options(request, limits, 16).unwrap();
        assert_eq!(a.request(), &request);
        assert_eq!(a.limits(), &limits);
        assert_eq!(a.frame_at(Duration::ZERO).points.len(), 16);
    }

    #[test]
    fn tiny_intervals_still_reach_the_final_frame() {
        let a = animator();
        let frames = Frames {
            animator: a,
            interval: Duration::from_nanos(1),
            next_elapsed: DEFAULT_DURATION - Duration::from_nanos(2),
            done: false,
        };
        let elapsed: Vec<Duration> = frames.map(|f| f.elapsed).collect();
        assert_eq!(
            elapsed,
            vec![
                DEFAULT_DURATION - Duration::from_nanos(2),
                DEFAULT_DURATION - Duration::from_nanos(1),
                DEFAULT_DURATION,
            ]
        );
    }

    #[test]
    fn huge_interval_yields_start_and_end_only() {
        let frames: Vec<Frame> = animator().frames(Duration::MAX).unwrap().collect();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].parameters, from());
        assert_eq!(frames[1].parameters, to());
    }
}
