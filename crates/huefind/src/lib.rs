//! # Huefind
//!
//! Huefind converts colors between hexadecimal notation, RGB, HSL, CIE XYZ,
//! and CIE Lab, computes the perceptual color difference CIEDE2000 between
//! them, and names colors by finding the perceptually closest color in a
//! catalog of named colors.
//!
//!
//! ## 1. Overview
//!
//! Huefind's main abstractions are:
//!
//!   * The **color models** [`Hex`], [`Rgb`], [`Hsl`], [`Xyz`], and [`Lab`].
//!     `Hex` and `Rgb` are valid by construction, whereas the other three hold
//!     arbitrary [`Float`] coordinates and check their validity before
//!     converting. Checked conversions return `None` for invalid colors;
//!     unchecked conversions assume the caller already validated the color.
//!   * [`ColorInput`] captures a color in **any model** before validation,
//!     either from untyped JSON or from command-style text.
//!   * [`VpTree`](vptree::VpTree) implements a **vantage-point tree** for
//!     nearest-neighbor search under a [`Metric`](vptree::Metric), by default
//!     CIEDE2000 on Lab coordinates.
//!   * [`Catalog`] combines a set of named colors with a vantage-point tree
//!     over their Lab coordinates. Its [`Catalog::get`] method converts a
//!     color into all models and finds its nearest named color.
//!
//!
//! ## 2. Naming a Color
//!
//! ```
//! # use huefind::{Catalog, ColorInput, ColorModel};
//! # fn main() -> Result<(), huefind::error::ColorFormatError> {
//! let catalog = Catalog::builtin();
//!
//! let input = ColorInput::parse(ColorModel::Rgb, "255, 215, 0")?;
//! let info = catalog.get(&input).unwrap();
//! assert_eq!(info.hex.to_string(), "#ffd700");
//! assert_eq!(info.nearest.name, "Gold");
//! assert_eq!(info.nearest.distance, 0.0);
//!
//! let info = catalog.get(&"#ffca00".into()).unwrap();
//! assert!(info.nearest.distance > 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! Invalid colors produce no result:
//!
//! ```
//! # use huefind::{Catalog, ColorInput};
//! let catalog = Catalog::builtin();
//! assert!(catalog.get(&ColorInput::Rgb([256.0, 0.0, 0.0])).is_none());
//! ```
//!
//!
//! ## 3. Measuring Color Differences
//!
//! ```
//! # use huefind::{delta_e00, Hex, Perceptibility};
//! # fn main() -> Result<(), huefind::error::ColorFormatError> {
//! let red: Hex = "#f00".parse()?;
//! let crimson: Hex = "dc143c".parse()?;
//!
//! let distance = red.delta_e00(&crimson);
//! assert_eq!(Some(distance), delta_e00(&red.to_lab(), &crimson.to_lab()));
//! assert_eq!(Perceptibility::of(distance), Perceptibility::Related);
//! # Ok(())
//! # }
//! ```
//!
//!
//! ## 4. Logging
//!
//! Huefind logs through [`tracing`](https://docs.rs/tracing). It reports the
//! time for building a catalog's vantage-point tree and every skipped catalog
//! entry at debug level and the loading of a catalog file at info level. It
//! does not install a subscriber.

/// The floating point type in use.
pub type Float = f64;

/// [`Float`]'s bits.
pub type Bits = u64;

mod catalog;
mod core;
pub mod error;
mod input;
pub mod model;
pub mod opt;
mod util;
pub mod vptree;

pub use catalog::{Catalog, ColorInfo, Entry, Nearest};
pub use core::{describe_distance, ColorModel, Perceptibility, XN_D65, YN_D65, ZN_D65};
pub use input::ColorInput;
pub use model::{delta_e00, Hex, Hsl, Lab, Rgb, Xyz};
