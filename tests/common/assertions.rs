//! Assertion utilities for testing.
//!
//! Helpers for comparing colors and floating-point values in tests.

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that two RGBA colors differ by at most `tolerance` per channel.
///
/// # Panics
///
/// Panics naming the first channel that differs too much.
pub fn assert_color_close(actual: [u8; 4], expected: [u8; 4], tolerance: u8) {
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            a.abs_diff(*e) <= tolerance,
            "Colors differ at channel {}: actual = {:?}, expected = {:?}, tolerance = {}",
            i,
            actual,
            expected,
            tolerance
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_assert_color_close() {
        assert_color_close([10, 20, 30, 255], [10, 20, 30, 255], 0);
        assert_color_close([10, 20, 30, 255], [11, 19, 30, 255], 1);
    }
}
