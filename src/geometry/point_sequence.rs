use crate::math::{Point2, Similarity2};

/// An axis-aligned bounding box in 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl Bounds {
    /// Returns the width of the box.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Returns the height of the box.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// An ordered run of curve points.
///
/// Consecutive points are joined by straight segments when rendered, so the
/// order is significant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSequence {
    /// The ordered points.
    pub points: Vec<Point2>,
}

impl PointSequence {
    /// Wraps an existing list of points.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns an iterator over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.points.iter()
    }

    /// Returns the bounding box, or `None` for an empty sequence.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let first = *self.points.first()?;
        let bounds = self.points[1..].iter().fold(
            Bounds {
                min: first,
                max: first,
            },
            |b, p| Bounds {
                min: Point2::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                max: Point2::new(b.max.x.max(p.x), b.max.y.max(p.y)),
            },
        );
        Some(bounds)
    }

    /// Returns a copy with `transform` applied to every point.
    #[must_use]
    pub fn transformed(&self, transform: &Similarity2) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| transform.transform_point(p))
                .collect(),
        }
    }
}

impl IntoIterator for PointSequence {
    type Item = Point2;
    type IntoIter = std::vec::IntoIter<Point2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point2;
    type IntoIter = std::slice::Iter<'a, Point2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
