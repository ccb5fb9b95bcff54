pub mod interpolate;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D similarity transform (uniform scale, rotation, translation).
pub type Similarity2 = nalgebra::Similarity2<f64>;
