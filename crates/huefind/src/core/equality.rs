use crate::{Bits, Float};

/// Test macro for asserting that two floating point numbers differ by no more
/// than the given tolerance.
///
/// # Panics
///
/// This macro panics if the absolute difference exceeds the tolerance. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[cfg(test)]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr, $tolerance:expr $(,)?) => {
        let (f1, f2, tolerance): (f64, f64, f64) = ($f1, $f2, $tolerance);
        assert!(
            (f1 - f2).abs() <= tolerance,
            "quantities differ by more than {}:\n{:?}\n{:?}",
            tolerance,
            f1,
            f2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_close_enough;

/// Test macro for asserting that two coordinate arrays agree per coordinate
/// within the given tolerance.
///
/// # Panics
///
/// This macro panics if any pair of coordinates differs by more than the
/// tolerance. Its message places the coordinates below each other at the
/// beginning of subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($cs1:expr, $cs2:expr, $tolerance:expr $(,)?) => {
        let (cs1, cs2, tolerance): (&[f64; 3], &[f64; 3], f64) = ($cs1, $cs2, $tolerance);
        assert!(
            cs1.iter().zip(cs2.iter()).all(|(c1, c2)| (c1 - c2).abs() <= tolerance),
            "color coordinates differ by more than {}:\n{:?}\n{:?}",
            tolerance,
            cs1,
            cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

// --------------------------------------------------------------------------------------------------------------------

/// The factor for reducing the resolution of floating point numbers before
/// equality testing and hashing.
const ROUNDING_FACTOR: Float = 1e13;

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string.
#[inline]
pub(crate) fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0;
    }

    f.to_bits()
}

/// Normalize all three coordinates for equality testing and hashing.
#[inline]
pub(crate) fn to_eq_coordinates(coordinates: &[Float; 3]) -> [Bits; 3] {
    [
        to_eq_bits(coordinates[0]),
        to_eq_bits(coordinates[1]),
        to_eq_bits(coordinates[2]),
    ]
}
