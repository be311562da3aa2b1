//! Math utility functions.

use num_traits::Float;

use crate::color::Component;

/// Differences between the largest and smallest RGB component below this
/// make a color achromatic.
pub const ACHROMATIC_DELTA: Component = 1.0e-6;

/// Linearly interpolate between `a` and `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Wrap `value` into `[0, 1)`, like a hue going around the circle.
pub fn wrap_unit<T: Float>(value: T) -> T {
    value - value.floor()
}
