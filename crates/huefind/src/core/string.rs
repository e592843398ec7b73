use super::constants::{ASCII_TO_HEX, INVALID_HEX};
use crate::error::ColorFormatError;
use crate::{ColorModel, Float};

/// Parse a hexadecimal color. If successful, this function returns the six
/// lowercase ASCII digits of the normalized form.
///
/// The string may start with a single `#` and must contain either three or six
/// hexadecimal digits. Three-digit shorthand is expanded by duplicating each
/// digit.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 6], ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();
    if digits.len() != 3 && digits.len() != 6 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    let mut normalized = [0; 6];
    for (index, &byte) in digits.iter().enumerate() {
        if !byte.is_ascii() || ASCII_TO_HEX[byte as usize] == INVALID_HEX {
            return Err(ColorFormatError::MalformedHex);
        }

        let byte = byte.to_ascii_lowercase();
        if digits.len() == 3 {
            normalized[2 * index] = byte;
            normalized[2 * index + 1] = byte;
        } else {
            normalized[index] = byte;
        }
    }

    Ok(normalized)
}

/// Parse three numeric coordinates separated by white space and/or commas.
pub(crate) fn parse_coordinates(s: &str) -> Result<[Float; 3], ColorFormatError> {
    #[inline]
    fn parse_coordinate(s: Option<&str>) -> Result<Float, ColorFormatError> {
        s.ok_or(ColorFormatError::MissingCoordinate)
            .and_then(|t| t.parse().map_err(|_| ColorFormatError::MalformedFloat))
    }

    let mut iter = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());
    let c1 = parse_coordinate(iter.next())?;
    let c2 = parse_coordinate(iter.next())?;
    let c3 = parse_coordinate(iter.next())?;
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok([c1, c2, c3])
}

// --------------------------------------------------------------------------------------------------------------------

/// Round to the given number of fractional digits, turning negative zero into
/// positive zero.
#[inline]
fn round_to(value: Float, digits: i32) -> Float {
    let factor = (10.0 as Float).powi(digits);
    (value * factor).round() / factor + 0.0
}

/// Format the three coordinates in the given color model.
///
/// RGB channels and HSL coordinates are rounded to integers, with saturation
/// and lightness shown as percentages. XYZ uses four and Lab two fractional
/// digits. Hex colors have no coordinates and are formatted by
/// [`Hex`](crate::Hex) itself.
pub(crate) fn format(
    model: ColorModel,
    coordinates: &[Float; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let [c1, c2, c3] = *coordinates;

    match model {
        ColorModel::Hex | ColorModel::Rgb => write!(
            f,
            "RGB({}, {}, {})",
            round_to(c1, 0),
            round_to(c2, 0),
            round_to(c3, 0)
        ),
        ColorModel::Hsl => write!(
            f,
            "HSL({}, {}%, {}%)",
            round_to(c1, 0),
            round_to(c2 * 100.0, 0),
            round_to(c3 * 100.0, 0)
        ),
        ColorModel::Xyz => write!(
            f,
            "XYZ: {:.4}, {:.4}, {:.4}",
            round_to(c1, 4),
            round_to(c2, 4),
            round_to(c3, 4)
        ),
        ColorModel::Lab => write!(
            f,
            "Lab: {:.2}, {:.2}, {:.2}",
            round_to(c1, 2),
            round_to(c2, 2),
            round_to(c3, 2)
        ),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(&parse_hex("#FFCA00")?, b"ffca00");
        assert_eq!(&parse_hex("3178ea")?, b"3178ea");
        assert_eq!(&parse_hex("#abc")?, b"aabbcc");
        assert_eq!(&parse_hex("F0a")?, b"ff00aa");

        assert_eq!(parse_hex(""), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex("#"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex("##abc"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex("#abcd"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex("#abg"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#💩0"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex("💩00"), Err(ColorFormatError::MalformedHex));
        Ok(())
    }

    #[test]
    fn test_parse_coordinates() -> Result<(), ColorFormatError> {
        assert_eq!(parse_coordinates("255 0 0")?, [255.0, 0.0, 0.0]);
        assert_eq!(parse_coordinates("  53.2, 80.1,67.2 ")?, [53.2, 80.1, 67.2]);
        assert_eq!(parse_coordinates("0,\t-1e2\n3")?, [0.0, -100.0, 3.0]);

        assert_eq!(
            parse_coordinates("1 2"),
            Err(ColorFormatError::MissingCoordinate)
        );
        assert_eq!(
            parse_coordinates("1 2 3 4"),
            Err(ColorFormatError::TooManyCoordinates)
        );
        assert_eq!(
            parse_coordinates("1 two 3"),
            Err(ColorFormatError::MalformedFloat)
        );
        Ok(())
    }

    struct Formatted(ColorModel, [Float; 3]);

    impl std::fmt::Display for Formatted {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            format(self.0, &self.1, f)
        }
    }

    #[test]
    fn test_format() {
        use ColorModel::*;

        assert_eq!(Formatted(Rgb, [255.0, 0.0, 0.0]).to_string(), "RGB(255, 0, 0)");
        assert_eq!(
            Formatted(Hsl, [47.52941176470588, 1.0, 0.5]).to_string(),
            "HSL(48, 100%, 50%)"
        );
        assert_eq!(
            Formatted(Xyz, [0.4124564, 0.2126729, 0.0193339]).to_string(),
            "XYZ: 0.4125, 0.2127, 0.0193"
        );
        assert_eq!(
            Formatted(Lab, [53.24079414130722, 80.09245959641109, 67.20319651585301]).to_string(),
            "Lab: 53.24, 80.09, 67.20"
        );
        assert_eq!(
            Formatted(Lab, [100.00000386666655, -1.6666666158293708e-5, 6.7e-6]).to_string(),
            "Lab: 100.00, 0.00, 0.00"
        );
    }
}
