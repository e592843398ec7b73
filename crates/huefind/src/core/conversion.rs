//! The unchecked conversions between color models.
//!
//! None of the functions in this module validate their inputs. They form the
//! hot path for catalog bootstrap and queries and hence trust the caller to
//! pass coordinates that satisfy the respective model's invariants. Invalid
//! inputs produce meaningless but well-defined results.
//!
//! RGB and XYZ serve as hubs. Hex and HSL connect to RGB only, Lab connects to
//! XYZ only, and RGB and XYZ connect to each other. All other conversions
//! compose these one-hop conversions.

use super::constants::{
    ASCII_TO_HEX, BYTE_TO_HEX, LAB_EPSILON, LAB_KAPPA, SRGB_EOTF_LUT, SRGB_OETF_A, SRGB_OETF_B,
    SRGB_OETF_GAMMA, SRGB_OETF_THRESHOLD, SRGB_TO_XYZ, XN_D65, XYZ_TO_SRGB, YN_D65, ZN_D65,
};
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(rgb: &[u8; 3]) -> [Float; 3] {
    [
        rgb[0] as Float / 255.0,
        rgb[1] as Float / 255.0,
        rgb[2] as Float / 255.0,
    ]
}

/// Convert a unit coordinate to a byte, rounding to the nearest integer.
#[inline]
fn to_byte(value: Float) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Decode six hexadecimal ASCII digits into 24-bit RGB. This is a one-hop,
/// direct conversion.
#[inline]
pub(crate) fn hex_to_rgb(digits: &[u8; 6]) -> [u8; 3] {
    let nibble = |index: usize| ASCII_TO_HEX[(digits[index] & 0x7f) as usize];

    [
        (nibble(0) << 4) | nibble(1),
        (nibble(2) << 4) | nibble(3),
        (nibble(4) << 4) | nibble(5),
    ]
}

/// Encode 24-bit RGB as six lowercase hexadecimal ASCII digits. This is a
/// one-hop, direct conversion.
#[inline]
pub(crate) fn rgb_to_hex(rgb: &[u8; 3]) -> [u8; 6] {
    let [r1, r2] = BYTE_TO_HEX[rgb[0] as usize];
    let [g1, g2] = BYTE_TO_HEX[rgb[1] as usize];
    let [b1, b2] = BYTE_TO_HEX[rgb[2] as usize];
    [r1, r2, g1, g2, b1, b2]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 24-bit RGB to HSL. This is a one-hop, direct conversion.
///
/// Achromatic colors have hue and saturation zero. Otherwise, the hue is
/// determined by the channel attaining the maximum, checking red before green
/// before blue.
pub(crate) fn rgb_to_hsl(rgb: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = from_24bit(rgb);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let lightness = (max + min) / 2.0;

    if delta == 0.0 {
        return [0.0, 0.0, lightness];
    }

    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let hue = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    [hue * 60.0, saturation, lightness]
}

/// Convert HSL to 24-bit RGB. This is a one-hop, direct conversion.
pub(crate) fn hsl_to_rgb(hsl: &[Float; 3]) -> [u8; 3] {
    let [h, s, l] = *hsl;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sextant = h / 60.0;
    let x = chroma * (1.0 - ((sextant % 2.0) - 1.0).abs());

    let [r, g, b] = if sextant < 1.0 {
        [chroma, x, 0.0]
    } else if sextant < 2.0 {
        [x, chroma, 0.0]
    } else if sextant < 3.0 {
        [0.0, chroma, x]
    } else if sextant < 4.0 {
        [0.0, x, chroma]
    } else if sextant < 5.0 {
        [x, 0.0, chroma]
    } else {
        [chroma, 0.0, x]
    };

    let m = l - chroma / 2.0;
    [to_byte(r + m), to_byte(g + m), to_byte(b + m)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Encode a linear sRGB coordinate with sRGB's opto-electronic transfer
/// function.
#[inline]
fn oetf(value: Float) -> Float {
    if value <= 0.0 {
        0.0
    } else if value < SRGB_OETF_THRESHOLD {
        12.92 * value
    } else {
        value.powf(SRGB_OETF_GAMMA).mul_add(SRGB_OETF_A, -SRGB_OETF_B)
    }
}

/// Convert 24-bit RGB to XYZ. This is a one-hop, direct conversion, even though
/// it requires a table lookup per channel and a matrix multiplication.
pub(crate) fn rgb_to_xyz(rgb: &[u8; 3]) -> [Float; 3] {
    let linear = [
        SRGB_EOTF_LUT[rgb[0] as usize],
        SRGB_EOTF_LUT[rgb[1] as usize],
        SRGB_EOTF_LUT[rgb[2] as usize],
    ];
    multiply(&SRGB_TO_XYZ, &linear)
}

/// Convert XYZ to 24-bit RGB. This is a one-hop, direct conversion. Out-of-gamut
/// colors are clamped to the sRGB cube.
pub(crate) fn xyz_to_rgb(xyz: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = multiply(&XYZ_TO_SRGB, xyz);
    [to_byte(oetf(r)), to_byte(oetf(g)), to_byte(oetf(b))]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert XYZ to Lab. This is a one-hop, direct conversion.
#[allow(non_snake_case)]
pub(crate) fn xyz_to_lab(xyz: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f(ratio: Float) -> Float {
        if ratio > LAB_EPSILON {
            ratio.cbrt()
        } else {
            LAB_KAPPA.mul_add(ratio, 16.0) / 116.0
        }
    }

    let fx = f(xyz[0] / XN_D65);
    let fy = f(xyz[1] / YN_D65);
    let fz = f(xyz[2] / ZN_D65);

    let L = 116.0 * fy - 16.0;
    [L, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert Lab to XYZ. This is a one-hop, direct conversion.
#[allow(non_snake_case)]
pub(crate) fn lab_to_xyz(lab: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *lab;

    let fy = (L + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let fx3 = fx.powi(3);
    let fz3 = fz.powi(3);

    let xr = if fx3 > LAB_EPSILON {
        fx3
    } else {
        116.0_f64.mul_add(fx, -16.0) / LAB_KAPPA
    };
    let yr = if L > LAB_KAPPA * LAB_EPSILON {
        fy.powi(3)
    } else {
        L / LAB_KAPPA
    };
    let zr = if fz3 > LAB_EPSILON {
        fz3
    } else {
        116.0_f64.mul_add(fz, -16.0) / LAB_KAPPA
    };

    [xr * XN_D65, yr * YN_D65, zr * ZN_D65]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 24-bit RGB to Lab. This is a two-hop conversion.
#[inline]
pub(crate) fn rgb_to_lab(rgb: &[u8; 3]) -> [Float; 3] {
    xyz_to_lab(&rgb_to_xyz(rgb))
}

/// Convert Lab to 24-bit RGB. This is a two-hop conversion.
#[inline]
pub(crate) fn lab_to_rgb(lab: &[Float; 3]) -> [u8; 3] {
    xyz_to_rgb(&lab_to_xyz(lab))
}

/// Convert HSL to XYZ. This is a two-hop conversion.
#[inline]
pub(crate) fn hsl_to_xyz(hsl: &[Float; 3]) -> [Float; 3] {
    rgb_to_xyz(&hsl_to_rgb(hsl))
}

/// Convert XYZ to HSL. This is a two-hop conversion.
#[inline]
pub(crate) fn xyz_to_hsl(xyz: &[Float; 3]) -> [Float; 3] {
    rgb_to_hsl(&xyz_to_rgb(xyz))
}

/// Convert HSL to Lab. This is a three-hop conversion.
#[inline]
pub(crate) fn hsl_to_lab(hsl: &[Float; 3]) -> [Float; 3] {
    rgb_to_lab(&hsl_to_rgb(hsl))
}

/// Convert Lab to HSL. This is a three-hop conversion.
#[inline]
pub(crate) fn lab_to_hsl(lab: &[Float; 3]) -> [Float; 3] {
    rgb_to_hsl(&lab_to_rgb(lab))
}

#[cfg(test)]
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
mod test {
    use super::*;
    use crate::core::assert_same_coordinates;

    struct Representations {
        hex: &'static [u8; 6],
        rgb: [u8; 3],
        hsl: [Float; 3],
        xyz: [Float; 3],
        lab: [Float; 3],
    }

    const BLACK: Representations = Representations {
        hex: b"000000",
        rgb: [0, 0, 0],
        hsl: [0.0, 0.0, 0.0],
        xyz: [0.0, 0.0, 0.0],
        lab: [0.0, 0.0, 0.0],
    };

    const WHITE: Representations = Representations {
        hex: b"ffffff",
        rgb: [255, 255, 255],
        hsl: [0.0, 0.0, 1.0],
        xyz: [0.95047, 1.0000001, 1.08883],
        lab: [100.00000386666655, -1.6666666158293708e-5, 6.666666463317483e-6],
    };

    const RED: Representations = Representations {
        hex: b"ff0000",
        rgb: [255, 0, 0],
        hsl: [0.0, 1.0, 0.5],
        xyz: [0.4124564, 0.2126729, 0.0193339],
        lab: [53.24079414130722, 80.09245959641109, 67.20319651585301],
    };

    const YELLOW: Representations = Representations {
        hex: b"ffca00",
        rgb: [255, 202, 0],
        hsl: [47.52941176470588, 1.0, 0.5],
        xyz: [0.6236475817224569, 0.6350552634449138, 0.08973094088685761],
        lab: [83.70765351787499, 4.706122486778819, 84.8753934562109],
    };

    const BLUE: Representations = Representations {
        hex: b"3178ea",
        rgb: [49, 120, 234],
        hsl: [216.97297297297297, 0.8149779735682817, 0.5549019607843138],
        xyz: [0.22828958025085694, 0.20023691748776318, 0.804877219966233],
        lab: [51.86398732611431, 18.28631003696346, -63.829801017503016],
    };

    const GRAY: Representations = Representations {
        hex: b"808080",
        rgb: [128, 128, 128],
        hsl: [0.0, 0.0, 0.5019607843137255],
        xyz: [0.20516892954325783, 0.21586052169994926, 0.23503538833901694],
        lab: [53.585015771669404, -9.997846384113274e-6, 3.9991385536453095e-6],
    };

    #[test]
    fn test_conversions() {
        for color in [&BLACK, &WHITE, &RED, &YELLOW, &BLUE, &GRAY] {
            assert_eq!(hex_to_rgb(color.hex), color.rgb, "hex to RGB");
            assert_eq!(&rgb_to_hex(&color.rgb), color.hex, "RGB to hex");

            let hsl = rgb_to_hsl(&color.rgb);
            assert_same_coordinates!(&hsl, &color.hsl, 1e-12);
            assert_eq!(hsl_to_rgb(&hsl), color.rgb, "HSL back to RGB");

            let xyz = rgb_to_xyz(&color.rgb);
            assert_same_coordinates!(&xyz, &color.xyz, 1e-12);
            assert_eq!(xyz_to_rgb(&xyz), color.rgb, "XYZ back to RGB");

            let lab = xyz_to_lab(&xyz);
            assert_same_coordinates!(&lab, &color.lab, 1e-9);
            assert_same_coordinates!(&lab_to_xyz(&lab), &xyz, 1e-9);
            assert_eq!(lab_to_rgb(&lab), color.rgb, "Lab back to RGB");

            assert_same_coordinates!(&hsl_to_lab(&color.hsl), &color.lab, 1e-9);
            assert_same_coordinates!(&lab_to_hsl(&color.lab), &color.hsl, 1e-12);
            assert_same_coordinates!(&hsl_to_xyz(&color.hsl), &color.xyz, 1e-12);
            assert_same_coordinates!(&xyz_to_hsl(&color.xyz), &color.hsl, 1e-12);
        }
    }

    #[test]
    fn test_hex_round_trip() {
        // Every 24-bit color, going from hex digits to RGB and back.
        for value in 0..(1_u32 << 24) {
            let [_, r, g, b] = value.to_be_bytes();
            let digits = rgb_to_hex(&[r, g, b]);
            let rgb = hex_to_rgb(&digits);
            assert!(rgb == [r, g, b], "{:06x} decodes to {:?}", value, rgb);
            assert!(rgb_to_hex(&rgb) == digits, "{:06x} does not round-trip", value);
        }
    }

    #[test]
    fn test_hex_upper_case() {
        assert_eq!(hex_to_rgb(b"FFCA00"), [255, 202, 0], "upper-case digits");
        assert_eq!(hex_to_rgb(b"3178Ea"), [49, 120, 234], "mixed-case digits");
    }

    #[test]
    fn test_lab_round_trip() {
        let channel = (0..=255_u8).step_by(3);
        for r in channel.clone() {
            for g in channel.clone() {
                for b in channel.clone() {
                    let lab = rgb_to_lab(&[r, g, b]);
                    let [r2, g2, b2] = lab_to_rgb(&lab);
                    assert!(
                        r.abs_diff(r2) <= 1 && g.abs_diff(g2) <= 1 && b.abs_diff(b2) <= 1,
                        "{:?} round-trips through {:?} to {:?}",
                        [r, g, b],
                        lab,
                        [r2, g2, b2]
                    );
                }
            }
        }
    }

    #[test]
    fn test_hsl_round_trip() {
        let channel = (0..=255_u8).step_by(5);
        for r in channel.clone() {
            for g in channel.clone() {
                for b in channel.clone() {
                    let hsl = rgb_to_hsl(&[r, g, b]);
                    assert!((0.0..360.0).contains(&hsl[0]), "hue {} out of range", hsl[0]);
                    assert_eq!(hsl_to_rgb(&hsl), [r, g, b], "HSL {:?} round-trips", hsl);
                }
            }
        }
    }

    #[test]
    fn test_clamping() {
        assert_eq!(
            xyz_to_rgb(&[2.0, 2.0, 2.0]),
            [255, 255, 255],
            "too bright clamps to white"
        );
        assert_eq!(lab_to_rgb(&[0.0, 0.0, 0.0]), [0, 0, 0], "black stays black");
        assert_eq!(
            lab_to_rgb(&[50.0, 500.0, 0.0])[0],
            255,
            "extreme a clamps red"
        );
    }
}
