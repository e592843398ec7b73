//! CIE Lab colors and the CIEDE2000 color difference.

use serde::{Deserialize, Serialize};

use super::{Hex, Hsl, Rgb, Xyz};
use crate::core::{
    ciede2000, format, lab_to_hsl, lab_to_rgb, lab_to_xyz, to_eq_coordinates, LAB_MAX_LIGHTNESS,
};
use crate::{ColorModel, Float};

/// A color in the CIE Lab model with the D65 reference white.
///
/// Valid colors have lightness in `0..=100`, with a small tolerance above 100
/// for the rounding error of converting sRGB white, and finite a and b.
/// Serialized, a Lab color is an object with fields `L`, `a`, and `b`.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Lab {
    #[serde(rename = "L")]
    pub l: Float,
    pub a: Float,
    pub b: Float,
}

impl Lab {
    /// Create a new Lab color.
    pub const fn new(l: Float, a: Float, b: Float) -> Self {
        Self { l, a, b }
    }

    /// Access this color's coordinates.
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.l, self.a, self.b]
    }

    /// Determine whether this color is valid.
    pub fn is_valid(&self) -> bool {
        (0.0..=LAB_MAX_LIGHTNESS).contains(&self.l) && self.a.is_finite() && self.b.is_finite()
    }

    /// Convert this color to hexadecimal notation.
    pub fn to_hex(&self) -> Option<Hex> {
        self.is_valid().then(|| self.to_hex_unchecked())
    }

    /// Convert this color to RGB.
    pub fn to_rgb(&self) -> Option<Rgb> {
        self.is_valid().then(|| self.to_rgb_unchecked())
    }

    /// Convert this color to HSL.
    pub fn to_hsl(&self) -> Option<Hsl> {
        self.is_valid().then(|| self.to_hsl_unchecked())
    }

    /// Convert this color to XYZ.
    pub fn to_xyz(&self) -> Option<Xyz> {
        self.is_valid().then(|| self.to_xyz_unchecked())
    }

    /// Convert this color to hexadecimal notation without validating it first.
    pub fn to_hex_unchecked(&self) -> Hex {
        Hex::from(self.to_rgb_unchecked())
    }

    /// Convert this color to RGB without validating it first.
    pub fn to_rgb_unchecked(&self) -> Rgb {
        Rgb::from(lab_to_rgb(&self.coordinates()))
    }

    /// Convert this color to HSL without validating it first.
    pub fn to_hsl_unchecked(&self) -> Hsl {
        Hsl::from(lab_to_hsl(&self.coordinates()))
    }

    /// Convert this color to XYZ without validating it first.
    pub fn to_xyz_unchecked(&self) -> Xyz {
        Xyz::from(lab_to_xyz(&self.coordinates()))
    }
}

impl From<[Float; 3]> for Lab {
    fn from(value: [Float; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl PartialEq for Lab {
    fn eq(&self, other: &Self) -> bool {
        to_eq_coordinates(&self.coordinates()) == to_eq_coordinates(&other.coordinates())
    }
}

impl Eq for Lab {}

impl std::hash::Hash for Lab {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_coordinates(&self.coordinates()).hash(state);
    }
}

impl std::fmt::Display for Lab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(ColorModel::Lab, &self.coordinates(), f)
    }
}

/// Compute the CIEDE2000 color difference between the two colors.
///
/// This function returns `None` if either color is invalid.
pub fn delta_e00(lab1: &Lab, lab2: &Lab) -> Option<Float> {
    if lab1.is_valid() && lab2.is_valid() {
        Some(ciede2000(&lab1.coordinates(), &lab2.coordinates()))
    } else {
        None
    }
}
