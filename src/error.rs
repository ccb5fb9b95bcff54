use thiserror::Error;

/// Top-level error type for the spirograph crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpirographError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Animation(#[from] AnimationError),
}

/// Inputs for which the curve formula is undefined.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    #[error("minor radius must not be zero")]
    ZeroMinorRadius,
}

/// Inputs outside their declared numeric domain.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RangeError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} is not finite ({value})")]
    NonFinite { parameter: &'static str, value: f64 },

    #[error("iteration count must be at least 1")]
    ZeroIterations,

    #[error("invalid limit {limit} = {value}: {reason}")]
    InvalidLimits {
        limit: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("invalid viewport size {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
}

/// Errors related to animation requests.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnimationError {
    #[error("animation duration must be positive")]
    ZeroDuration,

    #[error("frame interval must be positive")]
    ZeroFrameInterval,

    #[error("cubic bezier timing control points ({x1}, {y1}), ({x2}, {y2}) must lie in [0, 1]")]
    InvalidEasing { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl SpirographError {
    /// Returns `true` if this is a [`DomainError`].
    #[must_use]
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    /// Returns `true` if this is a [`RangeError`].
    #[must_use]
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range(_))
    }
}

/// Convenience type alias for results using [`SpirographError`].
pub type Result<T> = std::result::Result<T, SpirographError>;
