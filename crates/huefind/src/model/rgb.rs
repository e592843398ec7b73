//! 24-bit RGB colors.

use serde::{Deserialize, Serialize};

use super::{Hex, Hsl, Lab, Xyz};
use crate::core::{format, rgb_to_hsl, rgb_to_lab, rgb_to_xyz};
use crate::{ColorModel, Float};

/// A 24-bit sRGB color.
///
/// The three channels are bytes and hence valid by construction. Raw channel
/// candidates, e.g., from JSON, are floating point numbers and need to be
/// validated with [`Rgb::from_channels`] first. Serialized, an RGB color is an
/// object with fields `R`, `G`, and `B`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    #[serde(rename = "R")]
    pub r: u8,
    #[serde(rename = "G")]
    pub g: u8,
    #[serde(rename = "B")]
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a new RGB color from candidate channels.
    ///
    /// This function returns `None` unless all three channels are integral and
    /// in `0..=255`.
    pub fn from_channels(channels: [Float; 3]) -> Option<Self> {
        if is_valid(channels) {
            let [r, g, b] = channels;
            Some(Self::new(r as u8, g as u8, b as u8))
        } else {
            None
        }
    }

    /// Access this color's channels.
    pub const fn coordinates(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert this color to hexadecimal notation.
    pub fn to_hex(&self) -> Hex {
        Hex::from(*self)
    }

    /// Convert this color to HSL.
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from(rgb_to_hsl(&self.coordinates()))
    }

    /// Convert this color to XYZ.
    pub fn to_xyz(&self) -> Xyz {
        Xyz::from(rgb_to_xyz(&self.coordinates()))
    }

    /// Convert this color to Lab.
    pub fn to_lab(&self) -> Lab {
        Lab::from(rgb_to_lab(&self.coordinates()))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Rgb::new(value[0], value[1], value[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.coordinates()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.coordinates();
        format(ColorModel::Rgb, &[r as Float, g as Float, b as Float], f)
    }
}

/// Determine whether the candidate channels form a valid RGB color, i.e., are
/// integral and in `0..=255`.
pub fn is_valid(channels: [Float; 3]) -> bool {
    channels
        .iter()
        .all(|c| c.fract() == 0.0 && (0.0..=255.0).contains(c))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validity() {
        assert!(is_valid([0.0, 128.0, 255.0]));
        assert!(!is_valid([256.0, 0.0, 0.0]), "too large");
        assert!(!is_valid([-1.0, 0.0, 0.0]), "negative");
        assert!(!is_valid([0.5, 0.0, 0.0]), "fractional");
        assert!(!is_valid([Float::NAN, 0.0, 0.0]), "not-a-number");
        assert!(!is_valid([Float::INFINITY, 0.0, 0.0]), "infinite");

        assert_eq!(
            Rgb::from_channels([255.0, 202.0, 0.0]),
            Some(Rgb::new(255, 202, 0))
        );
        assert_eq!(Rgb::from_channels([256.0, 0.0, 0.0]), None);
    }

    #[test]
    fn test_display_and_serde() -> Result<(), serde_json::Error> {
        let rgb = Rgb::new(255, 0, 0);
        assert_eq!(rgb.to_string(), "RGB(255, 0, 0)");
        assert_eq!(rgb.to_hex().as_str(), "ff0000");

        let json = serde_json::to_string(&rgb)?;
        assert_eq!(json, r#"{"R":255,"G":0,"B":0}"#);
        assert_eq!(serde_json::from_str::<Rgb>(&json)?, rgb);
        Ok(())
    }
}
