mod animator;
mod easing;

pub use animator::{
    interpolate, AnimationRequest, Frame, Frames, ParameterAnimator, DEFAULT_DURATION,
};
pub use easing::Easing;
