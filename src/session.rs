//! Frame-driven spirograph state.
//!
//! A session keeps two parameter sets: the *pending* one edited by the
//! controls, and the *displayed* one that is drawn. [`SpirographSession::commit`]
//! starts a transition from what is displayed to what is pending; the host
//! calls [`SpirographSession::tick`] once per display refresh with a monotonic
//! timestamp.

use std::time::Duration;

use crate::animation::{AnimationRequest, Easing, Frame, ParameterAnimator, DEFAULT_DURATION};
use crate::error::Result;
use crate::geometry::{CurveParameters, Limits, Parameter, PointSequence};
use crate::operations::creation::DEFAULT_ITERATIONS;
use crate::operations::GenerateCurve;

/// Settings shared by every curve a session produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Parameter domains.
    pub limits: Limits,
    /// Points per generated curve.
    pub iterations: usize,
    /// Length of each transition.
    pub duration: Duration,
    /// Timing curve of each transition.
    pub easing: Easing,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            iterations: DEFAULT_ITERATIONS,
            duration: DEFAULT_DURATION,
            easing: Easing::EaseInOut,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveAnimation {
    animator: ParameterAnimator,
    started_at: Duration,
}

impl ActiveAnimation {
    fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }
}

/// Pending/displayed parameter state with at most one transition in flight.
#[derive(Debug, Clone)]
pub struct SpirographSession {
    config: SessionConfig,
    pending: CurveParameters,
    displayed: CurveParameters,
    active: Option<ActiveAnimation>,
}

impl Default for SpirographSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl SpirographSession {
    /// Creates a session showing the initial parameters of `config.limits`.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let initial = config.limits.initial_parameters();
        Self {
            config,
            pending: initial,
            displayed: initial,
            active: None,
        }
    }

    /// Returns the session settings.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the parameters waiting to be committed.
    #[must_use]
    pub fn pending(&self) -> CurveParameters {
        self.pending
    }

    /// Replaces the pending parameters, clamped into the limits.
    pub fn set_pending(&mut self, params: CurveParameters) {
        self.pending = params.clamped(&self.config.limits);
    }

    /// Sets a single pending parameter, clamped into its range.
    pub fn adjust(&mut self, parameter: Parameter, value: f64) {
        self.set_pending(self.pending.with(parameter, value));
    }

    /// Returns `true` while a transition is running at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Duration) -> bool {
        self.active
            .is_some_and(|a| !a.animator.is_finished(a.elapsed(now)))
    }

    /// Returns the parameters shown at `now`.
    #[must_use]
    pub fn displayed_at(&self, now: Duration) -> CurveParameters {
        match self.active {
            Some(a) => a.animator.parameters_at(a.elapsed(now)),
            None => self.displayed,
        }
    }

    /// Starts a transition from the parameters displayed at `now` to the
    /// pending ones. A transition already in flight is abandoned.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the pending minor radius is zero. The
    /// session is left unchanged on error.
    pub fn commit(&mut self, now: Duration) -> Result<()> {
        let from = self.displayed_at(now);
        let request = AnimationRequest::new(from, self.pending, self.config.duration)
            .with_easing(self.config.easing);
        let animator =
            ParameterAnimator::with_options(request, self.config.limits, self.config.iterations)?;

        if self.is_animating(now) {
            tracing::debug!(?from, "superseding in-flight animation");
        }
        self.displayed = from;
        self.active = Some(ActiveAnimation {
            animator,
            started_at: now,
        });
        Ok(())
    }

    /// Produces the frame to draw at `now`.
    ///
    /// Once the transition completes it is discarded and the target becomes
    /// the displayed parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the displayed parameters cannot be generated, which
    /// only happens when no transition has run and the limits reject the
    /// initial parameters.
    pub fn tick(&mut self, now: Duration) -> Result<Frame> {
        if let Some(active) = self.active {
            let elapsed = active.elapsed(now);
            let frame = active.animator.frame_at(elapsed);
            if active.animator.is_finished(elapsed) {
                tracing::debug!(params = ?frame.parameters, "animation finished");
                self.displayed = frame.parameters;
                self.active = None;
            }
            return Ok(frame);
        }

        let points = self.generate(self.displayed)?;
        Ok(Frame {
            elapsed: Duration::ZERO,
            progress: 1.0,
            parameters: self.displayed,
            points,
        })
    }

    /// Generates the curve of the pending parameters.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the pending minor radius is zero.
    pub fn preview(&self) -> Result<PointSequence> {
        self.generate(self.pending)
    }

    fn generate(&self, params: CurveParameters) -> Result<PointSequence> {
        GenerateCurve::new(params)
            .with_limits(self.config.limits)
            .with_iterations(self.config.iterations)
            .execute()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{DomainError, SpirographError};
    use approx::assert_relative_eq;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn starts_idle_with_initial_parameters() {
        let mut session = SpirographSession::default();
        assert!(!session.is_animating(Duration::ZERO));
        let frame = session.tick(Duration::ZERO).unwrap();
        assert_eq!(frame.parameters, CurveParameters::new(100.0, 50.0, 25.0, 50.0));
        assert_eq!(frame.points.len(), DEFAULT_ITERATIONS);
    }

    #[test]
    fn adjust_clamps_to_slider_range() {
        let mut session = SpirographSession::default();
        session.adjust(Parameter::Offset, 80.0);
        session.adjust(Parameter::SampleCount, 0.0);
        assert_relative_eq!(session.pending().offset, 50.0);
        assert_relative_eq!(session.pending().sample_count, 2.0);
    }

    #[test]
    fn commit_animates_to_pending_and_settles() {
        let mut session = SpirographSession::default();
        session.adjust(Parameter::MajorRadius, 60.0);
        session.commit(secs(10.0)).unwrap();

        assert!(session.is_animating(secs(12.0)));
        let mid = session.tick(secs(12.5)).unwrap();
        assert_relative_eq!(mid.parameters.major_radius, 80.0, epsilon = 1e-6);

        let end = session.tick(secs(15.0)).unwrap();
        assert_relative_eq!(end.parameters.major_radius, 60.0);
        assert!(!session.is_animating(secs(15.0)));
        assert_eq!(session.displayed_at(secs(100.0)), session.pending());
    }

    #[test]
    fn commit_supersedes_from_current_position() {
        let mut session = SpirographSession::default();
        session.adjust(Parameter::MajorRadius, 60.0);
        session.commit(Duration::ZERO).unwrap();

        let shown = session.displayed_at(secs(2.5));
        session.adjust(Parameter::MajorRadius, 90.0);
        session.commit(secs(2.5)).unwrap();

        let frame = session.tick(secs(2.5)).unwrap();
        assert_eq!(frame.parameters, shown);
        let end = session.tick(secs(7.5)).unwrap();
        assert_relative_eq!(end.parameters.major_radius, 90.0);
    }

    #[test]
    fn zero_minor_radius_commit_is_rejected_without_side_effects() {
        let mut session = SpirographSession::default();
        session.adjust(Parameter::MinorRadius, 0.0);
        let err = session.commit(Duration::ZERO).unwrap_err();
        assert_eq!(err, SpirographError::Domain(DomainError::ZeroMinorRadius));
        assert!(!session.is_animating(Duration::ZERO));
        assert!(session.preview().unwrap_err().is_domain());
        assert_eq!(
            session.displayed_at(Duration::ZERO),
            CurveParameters::default()
        );
    }

    #[test]
    fn preview_reflects_pending_parameters() {
        let mut session = SpirographSession::default();
        session.set_pending(CurveParameters::new(80.0, 20.0, 10.0, 30.0));
        let preview = session.preview().unwrap();
        assert_relative_eq!(preview.points[0].x, 70.0);
    }
}
