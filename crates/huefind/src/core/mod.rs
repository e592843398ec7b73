mod constants;
mod conversion;
mod difference;
mod equality;
mod space;
mod string;

// constants
pub(crate) use constants::LAB_MAX_LIGHTNESS;
pub use constants::{XN_D65, YN_D65, ZN_D65};

// conversion
pub(crate) use conversion::{
    hex_to_rgb, hsl_to_lab, hsl_to_rgb, hsl_to_xyz, lab_to_hsl, lab_to_rgb,
    lab_to_xyz, rgb_to_hex, rgb_to_hsl, rgb_to_lab, rgb_to_xyz, xyz_to_hsl, xyz_to_lab,
    xyz_to_rgb,
};

// difference
pub(crate) use difference::{ciede2000, find_closest};
pub use difference::{describe_distance, Perceptibility};

// equality
#[cfg(test)]
pub(crate) use equality::{assert_close_enough, assert_same_coordinates};
pub(crate) use equality::to_eq_coordinates;

// space
pub use space::ColorModel;

// string
pub(crate) use string::{format, parse_coordinates, parse_hex};
