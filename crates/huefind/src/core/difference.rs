use super::constants::POWER_25_TO_7;
use crate::Float;

/// Compute the hue angle in degrees for the CIEDE2000 formula. The hue of a
/// color with zero a′ and b is zero.
#[inline]
fn hue_prime(a_prime: Float, b: Float) -> Float {
    if a_prime == 0.0 && b == 0.0 {
        return 0.0;
    }

    let hue = b.atan2(a_prime).to_degrees();
    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}

/// Compute the CIEDE2000 color difference between the two Lab colors.
///
/// This function implements the reference formula with the parametric factors
/// kL, kC, and kH all equal to 1. It does not validate its arguments. The
/// difference between a color and itself is exactly zero.
#[allow(non_snake_case)]
pub(crate) fn ciede2000(lab1: &[Float; 3], lab2: &[Float; 3]) -> Float {
    let [L1, a1, b1] = *lab1;
    let [L2, a2, b2] = *lab2;

    // Correct the a axis.
    let C1 = a1.hypot(b1);
    let C2 = a2.hypot(b2);
    let Cbar7 = ((C1 + C2) / 2.0).powi(7);
    let G = 0.5 * (1.0 - (Cbar7 / (Cbar7 + POWER_25_TO_7)).sqrt());

    let a1p = (1.0 + G) * a1;
    let a2p = (1.0 + G) * a2;
    let C1p = a1p.hypot(b1);
    let C2p = a2p.hypot(b2);
    let h1p = hue_prime(a1p, b1);
    let h2p = hue_prime(a2p, b2);

    // Compute the differences.
    let delta_Lp = L2 - L1;
    let delta_Cp = C2p - C1p;
    let achromatic = C1p == 0.0 || C2p == 0.0;

    let delta_Hp = if achromatic {
        0.0
    } else {
        let mut dh = h2p - h1p;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }
        2.0 * (C1p * C2p).sqrt() * (dh.to_radians() / 2.0).sin()
    };

    // Compute the means.
    let Lbarp = (L1 + L2) / 2.0;
    let Cbarp = (C1p + C2p) / 2.0;
    let hbarp = if achromatic {
        h1p + h2p
    } else {
        let mut sum = h1p + h2p;
        if (h1p - h2p).abs() > 180.0 {
            if sum < 360.0 {
                sum += 360.0;
            } else {
                sum -= 360.0;
            }
        }
        sum / 2.0
    };

    // Weigh the differences.
    let T = 1.0 - 0.17 * (hbarp - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hbarp).to_radians().cos()
        + 0.32 * (3.0 * hbarp + 6.0).to_radians().cos()
        - 0.2 * (4.0 * hbarp - 63.0).to_radians().cos();

    let delta_theta = 30.0 * (-((hbarp - 275.0) / 25.0).powi(2)).exp();
    let Cbarp7 = Cbarp.powi(7);
    let RC = 2.0 * (Cbarp7 / (Cbarp7 + POWER_25_TO_7)).sqrt();
    let RT = -(2.0 * delta_theta).to_radians().sin() * RC;

    let Lbarp_50_2 = (Lbarp - 50.0).powi(2);
    let SL = 1.0 + (0.015 * Lbarp_50_2) / (20.0 + Lbarp_50_2).sqrt();
    let SC = 1.0 + 0.045 * Cbarp;
    let SH = 1.0 + 0.015 * Cbarp * T;

    let dL = delta_Lp / SL;
    let dC = delta_Cp / SC;
    let dH = delta_Hp / SH;

    (dL * dL + dC * dC + dH * dH + RT * dC * dH).sqrt()
}

// --------------------------------------------------------------------------------------------------------------------

/// Find the index and distance of the candidate closest to the origin.
///
/// This function performs a linear scan, computing the distance between origin
/// and each candidate with the given function. Ties go to the earlier
/// candidate. This function returns `None` if there are no candidates.
pub(crate) fn find_closest<'c, P, C, F>(
    origin: &P,
    candidates: C,
    mut compute_distance: F,
) -> Option<(usize, Float)>
where
    P: ?Sized,
    C: IntoIterator<Item = &'c P>,
    P: 'c,
    F: FnMut(&P, &P) -> Float,
{
    let mut min_distance = Float::INFINITY;
    let mut min_index = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = compute_distance(candidate, origin);
        if distance < min_distance {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    min_index.map(|index| (index, min_distance))
}

// --------------------------------------------------------------------------------------------------------------------

/// How perceptible a CIEDE2000 color difference is to a human observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Perceptibility {
    /// A difference of at most 1.0.
    Imperceptible,
    /// A difference of at most 2.0.
    CloseObservation,
    /// A difference of at most 10.0.
    AtAGlance,
    /// A difference of at most 49.0.
    Related,
    /// A difference larger than 49.0.
    Opposite,
}

impl Perceptibility {
    /// Classify the given CIEDE2000 color difference.
    pub fn of(distance: Float) -> Self {
        if distance <= 1.0 {
            Self::Imperceptible
        } else if distance <= 2.0 {
            Self::CloseObservation
        } else if distance <= 10.0 {
            Self::AtAGlance
        } else if distance <= 49.0 {
            Self::Related
        } else {
            Self::Opposite
        }
    }

    /// Get a human-readable description.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Imperceptible => "not perceptible by the human eye",
            Self::CloseObservation => "perceptible through close observation",
            Self::AtAGlance => "perceptible at a glance",
            Self::Related => "noticeably different but still visually related",
            Self::Opposite => "opposite or complementary colors",
        }
    }
}

impl std::fmt::Display for Perceptibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Describe the CIEDE2000 color difference, e.g., `ΔE₀₀: 1.23 -- perceptible
/// through close observation`.
pub fn describe_distance(distance: Float) -> String {
    format!("ΔE₀₀: {:.2} -- {}", distance, Perceptibility::of(distance))
}

#[cfg(test)]
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
mod test {
    use super::*;
    use crate::core::assert_close_enough;

    // Pairs from Sharma, Wu, and Dalal's CIEDE2000 test data, plus a few more.
    const PAIRS: [([Float; 3], [Float; 3], Float); 8] = [
        ([50.0, 2.6772, -79.7751], [50.0, 0.0, -82.7485], 2.0424596801565738),
        ([50.0, 2.49, -0.001], [50.0, -2.49, 0.0009], 7.179172011348979),
        ([50.0, -0.001, 2.49], [50.0, 0.0009, -2.49], 4.804521685774752),
        ([50.0, 0.0, 0.0], [50.0, -1.0, 2.0], 2.3668588191717523),
        ([50.0, 2.5, 0.0], [73.0, 25.0, -18.0], 27.14923130074626),
        ([50.0, 2.5, 0.0], [50.0, 3.1736, 0.5854], 1.000026343370256),
        ([60.2574, -34.0099, 36.2677], [60.4626, -34.1751, 39.4387], 1.2644200135991919),
        ([2.0776, 0.0795, -1.135], [0.9033, -0.0636, -0.5514], 0.9082328396025249),
    ];

    #[test]
    fn test_reference_pairs() {
        for (lab1, lab2, expected) in PAIRS {
            assert_close_enough!(ciede2000(&lab1, &lab2), expected, 1e-4);
            assert_close_enough!(ciede2000(&lab2, &lab1), expected, 1e-4);
        }
    }

    #[test]
    fn test_identity_and_symmetry() {
        let colors = [
            [0.0, 0.0, 0.0],
            [100.0, 0.0, 0.0],
            [53.24079414130722, 80.09245959641109, 67.20319651585301],
            [51.86398732611431, 18.28631003696346, -63.829801017503016],
            [32.0, -12.5, 0.0],
            [75.0, 0.0, -40.0],
        ];

        for c1 in &colors {
            assert_eq!(ciede2000(c1, c1), 0.0, "{:?} differs from itself", c1);
            for c2 in &colors {
                assert_close_enough!(ciede2000(c1, c2), ciede2000(c2, c1), 1e-12);
            }
        }
    }

    #[test]
    fn test_find_closest() {
        let candidates = [[10.0, 0.0, 0.0], [50.0, 0.0, 0.0], [52.0, 1.0, 0.0]];
        let origin = [51.0, 0.0, 0.0];

        let (index, distance) = find_closest(&origin, &candidates, ciede2000).unwrap();
        assert_eq!(index, 1, "the lightness neighbor wins");
        assert_close_enough!(distance, ciede2000(&candidates[1], &origin), 1e-12);

        let empty: [[Float; 3]; 0] = [];
        assert_eq!(find_closest(&origin, &empty, ciede2000), None);
    }

    #[test]
    fn test_perceptibility() {
        assert_eq!(Perceptibility::of(0.0), Perceptibility::Imperceptible);
        assert_eq!(Perceptibility::of(1.0), Perceptibility::Imperceptible);
        assert_eq!(Perceptibility::of(1.5), Perceptibility::CloseObservation);
        assert_eq!(Perceptibility::of(10.0), Perceptibility::AtAGlance);
        assert_eq!(Perceptibility::of(30.0), Perceptibility::Related);
        assert_eq!(Perceptibility::of(49.01), Perceptibility::Opposite);

        assert_eq!(
            describe_distance(1.234),
            "ΔE₀₀: 1.23 -- perceptible through close observation"
        );
        assert_eq!(
            describe_distance(0.0),
            "ΔE₀₀: 0.00 -- not perceptible by the human eye"
        );
    }
}
