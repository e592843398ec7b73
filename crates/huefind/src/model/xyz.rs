//! CIE XYZ colors.

use serde::{Deserialize, Serialize};

use super::{Hex, Hsl, Lab, Rgb};
use crate::core::{
    format, to_eq_coordinates, xyz_to_hsl, xyz_to_lab, xyz_to_rgb, XN_D65, YN_D65, ZN_D65,
};
use crate::{ColorModel, Float};

/// A color in the CIE XYZ model with the D65 reference white.
///
/// Valid colors have non-negative coordinates bounded by the reference white
/// `0.95047, 1.0, 1.08883`. Conversion to RGB clamps out-of-gamut results to
/// the sRGB cube. Serialized, an XYZ color is an object with fields `X`, `Y`,
/// and `Z`.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Xyz {
    #[serde(rename = "X")]
    pub x: Float,
    #[serde(rename = "Y")]
    pub y: Float,
    #[serde(rename = "Z")]
    pub z: Float,
}

impl Xyz {
    /// Create a new XYZ color.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// Access this color's coordinates.
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.x, self.y, self.z]
    }

    /// Determine whether this color is valid.
    pub fn is_valid(&self) -> bool {
        (0.0..=XN_D65).contains(&self.x)
            && (0.0..=YN_D65).contains(&self.y)
            && (0.0..=ZN_D65).contains(&self.z)
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
        Rgb::from(xyz_to_rgb(&self.coordinates()))
    }

    /// Convert this color to HSL without validating it first.
    pub fn to_hsl_unchecked(&self) -> Hsl {
        Hsl::from(xyz_to_hsl(&self.coordinates()))
    }

    /// Convert this color to Lab without validating it first.
    pub fn to_lab_unchecked(&self) -> Lab {
        Lab::from(xyz_to_lab(&self.coordinates()))
    }
}

impl From<[Float; 3]> for Xyz {
    fn from(value: [Float; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl PartialEq for Xyz {
    fn eq(&self, other: &Self) -> bool {
        to_eq_coordinates(&self.coordinates()) == to_eq_coordinates(&other.coordinates())
    }
}

impl Eq for Xyz {}

impl std::hash::Hash for Xyz {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_coordinates(&self.coordinates()).hash(state);
    }
}

impl std::fmt::Display for Xyz {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(ColorModel::Xyz, &self.coordinates(), f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validity() {
        assert!(Xyz::new(0.0, 0.0, 0.0).is_valid());
        assert!(Xyz::new(0.95047, 1.0, 1.08883).is_valid());
        assert!(!Xyz::new(0.96, 0.5, 0.5).is_valid(), "X beyond white");
        assert!(!Xyz::new(0.5, -0.01, 0.5).is_valid(), "negative Y");
        assert!(!Xyz::new(0.5, 0.5, Float::NAN).is_valid(), "not-a-number");

        // sRGB white overshoots Y by rounding and hence is not valid XYZ.
        assert!(!Rgb::new(255, 255, 255).to_xyz().is_valid());
        assert_eq!(Xyz::new(0.5, 1.1, 0.5).to_rgb(), None);
    }

    #[test]
    fn test_conversions() {
        let red = Xyz::new(0.4124564, 0.2126729, 0.0193339);
        assert_eq!(red.to_rgb(), Some(Rgb::new(255, 0, 0)));
        assert_eq!(red.to_hex().map(|h| h.to_string()), Some("#ff0000".into()));
        assert_eq!(red.to_hsl(), Some(Hsl::new(0.0, 1.0, 0.5)));
        assert_eq!(red.to_string(), "XYZ: 0.4125, 0.2127, 0.0193");

        let lab = red.to_lab().unwrap();
        assert!((lab.l - 53.24079414130722).abs() < 1e-9);
    }
}
