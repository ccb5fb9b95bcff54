//! Spirograph curve generation and parameter animation.
//!
//! [`generate`] turns four scalar parameters into an ordered run of 2D points;
//! [`animation::ParameterAnimator`] interpolates those parameters over time;
//! [`session::SpirographSession`] ties both to a frame-driven pending/displayed
//! state. Rendering is left to the caller.

pub mod animation;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod session;
pub mod viewport;

pub use animation::{AnimationRequest, Easing, Frame, ParameterAnimator};
pub use error::{AnimationError, DomainError, RangeError, Result, SpirographError};
pub use geometry::{CurveParameters, Limits, Parameter, PointSequence};
pub use session::{SessionConfig, SpirographSession};
pub use viewport::Viewport;

/// Generates the default-length point sequence for `params`.
///
/// # Errors
///
/// Returns a [`DomainError`] if the minor radius is zero and a [`RangeError`]
/// if a parameter is outside the default [`Limits`].
pub fn generate(params: CurveParameters) -> Result<PointSequence> {
    operations::GenerateCurve::new(params).execute()
}
