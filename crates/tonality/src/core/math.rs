use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e9;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e3;
}

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the angle in degrees to `0.0..360.0`.
#[inline]
pub fn sanitize_degrees(degrees: Float) -> Float {
    let degrees = degrees.rem_euclid(360.0);
    // rem_euclid may round up to the modulus itself.
    if degrees >= 360.0 {
        0.0
    } else {
        degrees
    }
}

/// Normalize the integral angle in degrees to `0..360`.
#[inline]
pub fn sanitize_degrees_int(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

/// Determine the shortest angular distance between two hues, in `0.0..=180.0`.
#[inline]
pub fn difference_degrees(a: Float, b: Float) -> Float {
    180.0 - ((a - b).abs() - 180.0).abs()
}

/// Determine the direction of the shortest rotation from one hue to another.
///
/// The result is `1.0` for increasing (counter-clockwise) and `-1.0` for
/// decreasing hues.
#[inline]
pub fn rotation_direction(from: Float, to: Float) -> Float {
    if sanitize_degrees(to - from) <= 180.0 {
        1.0
    } else {
        -1.0
    }
}

/// Linearly interpolate between start and stop.
#[inline]
pub(crate) fn lerp(start: Float, stop: Float, amount: Float) -> Float {
    amount.mul_add(stop - start, start)
}

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
pub(crate) fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}
