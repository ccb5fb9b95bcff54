use crate::error::{RangeError, Result};
use crate::geometry::{Limits, PointSequence};
use crate::math::{Similarity2, Vector2};

/// A rectangular drawing area in device units, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a new viewport.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidViewport`] if either side is not a
    /// positive finite number.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(RangeError::InvalidViewport { width, height }.into());
        }
        Ok(Self { width, height })
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the transform that centers the curve and scales a circle of
    /// radius `limits.max_major_radius` to touch the shorter side.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidLimits`] if `limits` is unusable.
    pub fn fit_transform(&self, limits: &Limits) -> Result<Similarity2> {
        limits.validate()?;
        let scale = self.width.min(self.height) / (2.0 * limits.max_major_radius);
        let center = Vector2::new(self.width / 2.0, self.height / 2.0);
        Ok(Similarity2::new(center, 0.0, scale))
    }

    /// Maps `points` into this viewport.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidLimits`] if `limits` is unusable.
    pub fn fit(&self, points: &PointSequence, limits: &Limits) -> Result<PointSequence> {
        Ok(points.transformed(&self.fit_transform(limits)?))
    }
}
