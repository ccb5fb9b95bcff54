pub mod curve;
pub mod params;
pub mod point_sequence;

pub use curve::Hypotrochoid;
pub use params::{CurveParameters, Limits, Parameter};
pub use point_sequence::{Bounds, PointSequence};
