//! HSL colors.

use serde::{Deserialize, Serialize};

use super::{Hex, Lab, Rgb, Xyz};
use crate::core::{format, hsl_to_lab, hsl_to_rgb, hsl_to_xyz, to_eq_coordinates};
use crate::{ColorModel, Float};

/// A color in the HSL model.
///
/// Valid colors have hue in degrees `0..360` and saturation and lightness in
/// unit range `0..=1`. Since the coordinates are public, validity is not
/// guaranteed by construction. The checked conversions return `None` for
/// invalid colors, whereas the `_unchecked` conversions trust the caller and
/// produce meaningless results for invalid colors.
///
/// Equality and hashing ignore differences below the thirteenth fractional
/// digit. Serialized, an HSL color is an object with fields `H`, `S`, and `L`.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Hsl {
    #[serde(rename = "H")]
    pub h: Float,
    #[serde(rename = "S")]
    pub s: Float,
    #[serde(rename = "L")]
    pub l: Float,
}

impl Hsl {
    /// Create a new HSL color.
    pub const fn new(h: Float, s: Float, l: Float) -> Self {
        Self { h, s, l }
    }

    /// Access this color's coordinates.
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.h, self.s, self.l]
    }

    /// Determine whether this color is valid.
    pub fn is_valid(&self) -> bool {
        (0.0..360.0).contains(&self.h)
            && (0.0..=1.0).contains(&self.s)
            && (0.0..=1.0).contains(&self.l)
    }

    /// Convert this color to hexadecimal notation.
    pub fn to_hex(&self) -> Option<Hex> {
        self.is_valid().then(|| self.to_hex_unchecked())
    }

    /// Convert this color to RGB.
    pub fn to_rgb(&self) -> Option<Rgb> {
        self.is_valid().then(|| self.to_rgb_unchecked())
    }

    /// Convert this color to XYZ.
    pub fn to_xyz(&self) -> Option<Xyz> {
        self.is_valid().then(|| self.to_xyz_unchecked())
    }

    /// Convert this color to Lab.
    pub fn to_lab(&self) -> Option<Lab> {
        self.is_valid().then(|| self.to_lab_unchecked())
    }

    /// Convert this color to hexadecimal notation without validating it first.
    pub fn to_hex_unchecked(&self) -> Hex {
        Hex::from(self.to_rgb_unchecked())
    }

    /// Convert this color to RGB without validating it first.
    pub fn to_rgb_unchecked(&self) -> Rgb {
        Rgb::from(hsl_to_rgb(&self.coordinates()))
    }

    /// Convert this color to XYZ without validating it first.
    pub fn to_xyz_unchecked(&self) -> Xyz {
        Xyz::from(hsl_to_xyz(&self.coordinates()))
    }

    /// Convert this color to Lab without validating it first.
    pub fn to_lab_unchecked(&self) -> Lab {
        Lab::from(hsl_to_lab(&self.coordinates()))
    }
}

impl From<[Float; 3]> for Hsl {
    fn from(value: [Float; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl PartialEq for Hsl {
    fn eq(&self, other: &Self) -> bool {
        to_eq_coordinates(&self.coordinates()) == to_eq_coordinates(&other.coordinates())
    }
}

impl Eq for Hsl {}

impl std::hash::Hash for Hsl {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_coordinates(&self.coordinates()).hash(state);
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(ColorModel::Hsl, &self.coordinates(), f)
    }
}
