use crate::error::{RangeError, Result};
use crate::geometry::{CurveParameters, Hypotrochoid, Limits, PointSequence};

/// Number of points produced per curve unless overridden.
pub const DEFAULT_ITERATIONS: usize = 2000;

/// Generates the point sequence of a spirograph curve.
///
/// The output always holds exactly `iterations` points; `sample_count` only
/// sets the angular step between them.
#[derive(Debug, Clone, Copy)]
pub struct GenerateCurve {
    params: CurveParameters,
    iterations: usize,
    limits: Limits,
}

impl GenerateCurve {
    /// Creates a new `GenerateCurve` operation with the default iteration
    /// count and limits.
    #[must_use]
    pub fn new(params: CurveParameters) -> Self {
        Self {
            params,
            iterations: DEFAULT_ITERATIONS,
            limits: Limits::default(),
        }
    }

    /// Sets the number of points to generate.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the limits the parameters are validated against.
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Executes the generation, returning a fresh point sequence.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the minor radius is zero, and a `RangeError`
    /// if the limits are unusable, a parameter is non-finite or out of range,
    /// or `iterations` is zero.
    pub fn execute(&self) -> Result<PointSequence> {
        self.limits.validate()?;
        if self.iterations == 0 {
            return Err(RangeError::ZeroIterations.into());
        }
        let curve = Hypotrochoid::new(self.params, &self.limits)?;
        tracing::trace!(params = ?self.params, iterations = self.iterations, "generating curve");
        Ok(curve.sample(self.iterations))
    }
}
