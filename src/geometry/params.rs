use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{DomainError, RangeError, Result};
use crate::math::interpolate::lerp;

/// Identifies one of the four curve parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    MajorRadius,
    MinorRadius,
    Offset,
    SampleCount,
}

impl Parameter {
    /// All parameters, in declaration order.
    pub const ALL: [Parameter; 4] = [
        Parameter::MajorRadius,
        Parameter::MinorRadius,
        Parameter::Offset,
        Parameter::SampleCount,
    ];

    /// Returns the snake-case name used in error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Parameter::MajorRadius => "major_radius",
            Parameter::MinorRadius => "minor_radius",
            Parameter::Offset => "offset",
            Parameter::SampleCount => "sample_count",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric domains of the curve parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    /// Upper bound of the major radius. Also sizes the viewport fit.
    pub max_major_radius: f64,
    /// Upper bound of the minor radius.
    pub max_minor_radius: f64,
    /// Upper bound of the pen offset.
    pub max_offset: f64,
    /// Lower bound of the sample count.
    pub min_samples: f64,
    /// Upper bound of the sample count.
    pub max_samples: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_major_radius: 100.0,
            max_minor_radius: 100.0,
            max_offset: 50.0,
            min_samples: 2.0,
            max_samples: 100.0,
        }
    }
}

impl Limits {
    /// Returns the inclusive range accepted for `parameter`.
    #[must_use]
    pub fn range(&self, parameter: Parameter) -> RangeInclusive<f64> {
        match parameter {
            Parameter::MajorRadius => 0.0..=self.max_major_radius,
            Parameter::MinorRadius => 0.0..=self.max_minor_radius,
            Parameter::Offset => 0.0..=self.max_offset,
            Parameter::SampleCount => self.min_samples..=self.max_samples,
        }
    }

    /// Checks that the limits describe a usable domain.
    ///
    /// Every bound must be finite, `max_major_radius` must be positive (it
    /// sizes the viewport fit), the sample range must start at 2 or above and
    /// must not be empty.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidLimits`] naming the first offending bound.
    pub fn validate(&self) -> Result<()> {
        let invalid = |limit: &'static str, value: f64, reason: &'static str| -> Result<()> {
            Err(RangeError::InvalidLimits {
                limit,
                value,
                reason,
            }
            .into())
        };

        let bounds = [
            ("max_major_radius", self.max_major_radius),
            ("max_minor_radius", self.max_minor_radius),
            ("max_offset", self.max_offset),
            ("min_samples", self.min_samples),
            ("max_samples", self.max_samples),
        ];
        for (limit, value) in bounds {
            if !value.is_finite() {
                return invalid(limit, value, "must be finite");
            }
        }

        if self.max_major_radius <= 0.0 {
            return invalid("max_major_radius", self.max_major_radius, "must be positive");
        }
        if self.max_minor_radius <= 0.0 {
            return invalid("max_minor_radius", self.max_minor_radius, "must be positive");
        }
        if self.max_offset < 0.0 {
            return invalid("max_offset", self.max_offset, "must not be negative");
        }
        if self.min_samples < 2.0 {
            return invalid("min_samples", self.min_samples, "must be at least 2");
        }
        if self.max_samples < self.min_samples {
            return invalid("max_samples", self.max_samples, "must not be below min_samples");
        }
        Ok(())
    }

    /// Returns the starting parameters: full major radius, the other three at
    /// half their maximum.
    #[must_use]
    pub fn initial_parameters(&self) -> CurveParameters {
        CurveParameters::new(
            self.max_major_radius,
            self.max_minor_radius / 2.0,
            self.max_offset / 2.0,
            self.max_samples / 2.0,
        )
    }
}

/// The four scalars that define a spirograph curve.
///
/// A plain value: a new instance is produced per frame or per adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParameters {
    /// Radius of the fixed outer circle.
    pub major_radius: f64,
    /// Radius of the rolling inner circle. Must be non-zero when generating.
    pub minor_radius: f64,
    /// Distance of the pen from the rolling circle's center.
    pub offset: f64,
    /// Number of samples per revolution; sets the angular step `2π / sample_count`.
    pub sample_count: f64,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Limits::default().initial_parameters()
    }
}

impl CurveParameters {
    /// Creates a new parameter set without validation.
    #[must_use]
    pub const fn new(major_radius: f64, minor_radius: f64, offset: f64, sample_count: f64) -> Self {
        Self {
            major_radius,
            minor_radius,
            offset,
            sample_count,
        }
    }

    /// Returns the value of `parameter`.
    #[must_use]
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::MajorRadius => self.major_radius,
            Parameter::MinorRadius => self.minor_radius,
            Parameter::Offset => self.offset,
            Parameter::SampleCount => self.sample_count,
        }
    }

    /// Returns a copy with `parameter` replaced by `value`.
    #[must_use]
    pub fn with(mut self, parameter: Parameter, value: f64) -> Self {
        match parameter {
            Parameter::MajorRadius => self.major_radius = value,
            Parameter::MinorRadius => self.minor_radius = value,
            Parameter::Offset => self.offset = value,
            Parameter::SampleCount => self.sample_count = value,
        }
        self
    }

    /// Returns a copy with every field clamped into `limits`.
    ///
    /// `NaN` clamps to the lower bound.
    #[must_use]
    pub fn clamped(self, limits: &Limits) -> Self {
        Parameter::ALL.into_iter().fold(self, |params, parameter| {
            let range = limits.range(parameter);
            let value = params.get(parameter);
            let value = if value.is_nan() {
                *range.start()
            } else {
                value.max(*range.start()).min(*range.end())
            };
            params.with(parameter, value)
        })
    }

    /// Interpolates every field between `self` and `to` on the same fraction.
    ///
    /// `t <= 0` returns `self` and `t >= 1` returns `to` exactly.
    #[must_use]
    pub fn lerp(&self, to: &CurveParameters, t: f64) -> CurveParameters {
        CurveParameters {
            major_radius: lerp(self.major_radius, to.major_radius, t),
            minor_radius: lerp(self.minor_radius, to.minor_radius, t),
            offset: lerp(self.offset, to.offset, t),
            sample_count: lerp(self.sample_count, to.sample_count, t),
        }
    }

    /// Returns `major_radius - minor_radius`.
    #[must_use]
    pub fn radius_difference(&self) -> f64 {
        self.major_radius - self.minor_radius
    }

    /// Checks the parameters against `limits`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidLimits`] if `limits` itself is unusable,
    /// [`DomainError::ZeroMinorRadius`] if the minor radius is zero, and a
    /// [`RangeError`] if any field is non-finite or outside its range.
    pub fn validate(&self, limits: &Limits) -> Result<()> {
        limits.validate()?;

        for parameter in Parameter::ALL {
            let value = self.get(parameter);
            if !value.is_finite() {
                return Err(RangeError::NonFinite {
                    parameter: parameter.name(),
                    value,
                }
                .into());
            }
        }

        if self.minor_radius == 0.0 {
            return Err(DomainError::ZeroMinorRadius.into());
        }

        for parameter in Parameter::ALL {
            let value = self.get(parameter);
            let range = limits.range(parameter);
            if !range.contains(&value) {
                return Err(RangeError::ParameterOutOfRange {
                    parameter: parameter.name(),
                    value,
                    min: *range.start(),
                    max: *range.end(),
                }
                .into());
            }
        }
        Ok(())
    }
}
