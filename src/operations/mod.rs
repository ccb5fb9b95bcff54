pub mod creation;

pub use creation::GenerateCurve;
