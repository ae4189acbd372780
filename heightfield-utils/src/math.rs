//! Scalar math helpers shared by the noise samplers.
//!
//! Everything here works in `f32`. The generators are specified in single
//! precision and every intermediate rounding is observable in the output.

/// Floor of `value` as an `i32` lattice coordinate.
///
/// Saturates at the `i32` bounds for values outside the representable range.
#[inline]
#[must_use]
pub fn floor(value: f32) -> i32 {
    value.floor() as i32
}

/// Linear interpolation: `a + (b - a) * t`.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quintic smoothing curve `t³(t(6t - 15) + 10)`.
///
/// Has zero first and second derivatives at `t = 0` and `t = 1`.
#[inline]
#[must_use]
pub fn quintic_curve(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Dot product of two 2D vectors.
#[inline]
#[must_use]
pub fn dot2(a: [f32; 2], b: [f32; 2]) -> f32 {
    a[0] * b[0] + a[1] * b[1]
}
