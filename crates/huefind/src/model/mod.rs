//! The five color models: hexadecimal, RGB, HSL, CIE XYZ, and CIE Lab.
//!
//! Hex and RGB colors are valid by construction and convert infallibly. HSL,
//! XYZ, and Lab colors have public floating point coordinates, which may or
//! may not be valid. Their checked conversions validate first and return
//! `None` for invalid colors.

pub mod hex;
pub mod hsl;
pub mod lab;
pub mod rgb;
pub mod xyz;

pub use hex::Hex;
pub use hsl::Hsl;
pub use lab::{delta_e00, Lab};
pub use rgb::Rgb;
pub use xyz::Xyz;
