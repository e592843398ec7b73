/// The enumeration of supported color models.
///
/// Hex and RGB describe the same 24-bit colors, the former as six hexadecimal
/// digits and the latter as three integer channels `0..=255`. HSL is a
/// cylindrical reshuffle of RGB, with hue in degrees `0..360` and saturation
/// and lightness in unit range `0..=1`. CIE XYZ is the device-independent
/// tristimulus space, bounded by the D65 reference white for colors converted
/// from sRGB. CIE Lab is the perceptually motivated space the catalog is
/// searched in, with lightness `0..=100` and unbounded a/b.
///
/// RGB and XYZ are the hubs through which all other conversions go. The order
/// of the variants is the order in which untyped inputs are probed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorModel {
    Hex,
    Rgb,
    Hsl,
    Xyz,
    Lab,
}

impl ColorModel {
    /// All color models in probe order.
    pub const ALL: [ColorModel; 5] = [Self::Hex, Self::Rgb, Self::Hsl, Self::Xyz, Self::Lab];

    /// Get this color model's human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hex => "Hex",
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
            Self::Xyz => "XYZ",
            Self::Lab => "Lab",
        }
    }

    /// Get the names of the three coordinates. Hex colors have a single
    /// string, for which this method returns `None`.
    pub const fn coordinate_names(&self) -> Option<[&'static str; 3]> {
        match self {
            Self::Hex => None,
            Self::Rgb => Some(["R", "G", "B"]),
            Self::Hsl => Some(["H", "S", "L"]),
            Self::Xyz => Some(["X", "Y", "Z"]),
            Self::Lab => Some(["L", "a", "b"]),
        }
    }
}

impl std::fmt::Display for ColorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl std::str::FromStr for ColorModel {
    type Err = crate::error::ColorFormatError;

    /// Parse the case-insensitive name of a color model.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(crate::error::ColorFormatError::UnknownModel)
    }
}
