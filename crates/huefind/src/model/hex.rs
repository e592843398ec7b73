//! Hexadecimal colors.
//!
//! The functions in this module accept untrusted strings and return `None`
//! for anything that is not a valid hexadecimal color. A valid color has an
//! optional leading `#` followed by exactly three or six hexadecimal digits of
//! either case. Once parsed, a [`Hex`] always holds the normalized form of six
//! lowercase digits.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Hsl, Lab, Rgb, Xyz};
use crate::core::{ciede2000, hex_to_rgb, parse_hex, rgb_to_hex};
use crate::error::ColorFormatError;
use crate::Float;

/// A 24-bit color in normalized hexadecimal notation.
///
/// A hex color stores its six lowercase ASCII digits inline and hence is
/// `Copy`. It is valid by construction: the only ways to create one are
/// parsing a string and converting from [`Rgb`]. Its display format is
/// `#rrggbb`. The alternate format `{:#}` uses the three-digit shorthand if
/// possible.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hex([u8; 6]);

impl Hex {
    /// Access the six lowercase digits, without leading `#`.
    pub fn as_str(&self) -> &str {
        // The digits are ASCII by construction.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Compress this color to three-digit shorthand, without leading `#`.
    ///
    /// This method only succeeds if each channel consists of two equal digits.
    pub fn shorthand(&self) -> Option<String> {
        let [r1, r2, g1, g2, b1, b2] = self.0;
        if r1 == r2 && g1 == g2 && b1 == b2 {
            Some([r1 as char, g1 as char, b1 as char].iter().collect())
        } else {
            None
        }
    }

    /// Convert this color to RGB.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from(hex_to_rgb(&self.0))
    }

    /// Convert this color to HSL.
    pub fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    /// Convert this color to XYZ.
    pub fn to_xyz(&self) -> Xyz {
        self.to_rgb().to_xyz()
    }

    /// Convert this color to Lab.
    pub fn to_lab(&self) -> Lab {
        self.to_rgb().to_lab()
    }

    /// Compute the CIEDE2000 color difference between this and the other
    /// color.
    pub fn delta_e00(&self, other: &Self) -> Float {
        ciede2000(&self.to_lab().coordinates(), &other.to_lab().coordinates())
    }
}

impl From<Rgb> for Hex {
    fn from(value: Rgb) -> Self {
        Self(rgb_to_hex(&value.coordinates()))
    }
}

impl std::str::FromStr for Hex {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Self)
    }
}

impl AsRef<str> for Hex {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Debug for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Hex").field(&self.as_str()).finish()
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            if let Some(short) = self.shorthand() {
                return write!(f, "#{}", short);
            }
        }
        write!(f, "#{}", self.as_str())
    }
}

impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the string is a valid hexadecimal color.
pub fn is_valid(s: &str) -> bool {
    parse_hex(s).is_ok()
}

/// Normalize the string to six lowercase digits.
pub fn normalize(s: &str) -> Option<Hex> {
    s.parse().ok()
}

/// Compress the string to three-digit shorthand, e.g., `aabbcc` to `abc`.
pub fn to_shorthand(s: &str) -> Option<String> {
    normalize(s)?.shorthand()
}

/// Convert the string to RGB.
pub fn to_rgb(s: &str) -> Option<Rgb> {
    normalize(s).map(|hex| hex.to_rgb())
}

/// Convert the string to HSL.
pub fn to_hsl(s: &str) -> Option<Hsl> {
    normalize(s).map(|hex| hex.to_hsl())
}

/// Convert the string to XYZ.
pub fn to_xyz(s: &str) -> Option<Xyz> {
    normalize(s).map(|hex| hex.to_xyz())
}

/// Convert the string to Lab.
pub fn to_lab(s: &str) -> Option<Lab> {
    normalize(s).map(|hex| hex.to_lab())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::assert_close_enough;

    #[test]
    fn test_validity() {
        for valid in ["ffca00", "#FFCA00", "#abc", "ABC", "#3178eA"] {
            assert!(is_valid(valid), "{} should be valid", valid);
        }
        for invalid in ["", "#", "ab", "abcd", "#abcdefa", "##abc", "#abg", "ffca0g", " abc"] {
            assert!(!is_valid(invalid), "{} should be invalid", invalid);
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("#FFCA00").map(|h| h.to_string()), Some("#ffca00".into()));
        assert_eq!(normalize("#abc").map(|h| h.to_string()), Some("#aabbcc".into()));
        assert_eq!(normalize("abc").unwrap().as_str(), "aabbcc");
        assert_eq!(normalize("xyz"), None);
    }

    #[test]
    fn test_shorthand() {
        assert_eq!(to_shorthand("aabbcc"), Some("abc".into()));
        assert_eq!(to_shorthand("#FF0000"), Some("f00".into()));
        assert_eq!(to_shorthand("abcdef"), None);
        assert_eq!(to_shorthand("nope"), None);

        let red = normalize("ff0000").unwrap();
        assert_eq!(format!("{}", red), "#ff0000");
        assert_eq!(format!("{:#}", red), "#f00");
        let yellow = normalize("ffca00").unwrap();
        assert_eq!(format!("{:#}", yellow), "#ffca00");
    }

    #[test]
    fn test_conversions() {
        assert_eq!(to_rgb("#3178ea"), Some(Rgb::new(49, 120, 234)));
        assert_eq!(to_rgb("#3178eg"), None);

        let hsl = to_hsl("ff0000").unwrap();
        assert_eq!(hsl, Hsl::new(0.0, 1.0, 0.5));

        let xyz = to_xyz("ff0000").unwrap();
        assert_close_enough!(xyz.y, 0.2126729, 1e-12);

        let lab = to_lab("#fff").unwrap();
        assert_close_enough!(lab.l, 100.0, 0.01);
        assert_close_enough!(lab.a, 0.0, 0.01);
        assert_close_enough!(lab.b, 0.0, 0.01);

        let black = to_lab("000").unwrap();
        assert_close_enough!(black.l, 0.0, 1e-9);
        assert_close_enough!(black.a, 0.0, 1e-9);
        assert_close_enough!(black.b, 0.0, 1e-9);

        let hex = Hex::from(Rgb::new(255, 202, 0));
        assert_eq!(hex.as_str(), "ffca00");
    }

    #[test]
    fn test_delta_e00() {
        let red = normalize("ff0000").unwrap();
        let also_red = normalize("#F00").unwrap();
        let green = normalize("00ff00").unwrap();

        assert_eq!(red.delta_e00(&also_red), 0.0);
        assert!(red.delta_e00(&green) > 49.0, "red and green are opposites");
    }

    #[test]
    fn test_serde() -> Result<(), serde_json::Error> {
        let hex: Hex = serde_json::from_str("\"#ABC\"")?;
        assert_eq!(hex.as_str(), "aabbcc");
        assert_eq!(serde_json::to_string(&hex)?, "\"aabbcc\"");
        assert!(serde_json::from_str::<Hex>("\"#abcd\"").is_err());
        Ok(())
    }
}
