mod generate_curve;

pub use generate_curve::{GenerateCurve, DEFAULT_ITERATIONS};
