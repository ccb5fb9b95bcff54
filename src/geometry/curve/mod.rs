mod hypotrochoid;

pub use hypotrochoid::Hypotrochoid;
