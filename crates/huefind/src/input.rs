//! Untyped color inputs.
//!
//! Callers often hold a color without knowing or caring about its model: a
//! string that may be hexadecimal, a JSON object with `R`, `G`, `B` fields, or
//! one with `L`, `a`, `b`. [`ColorInput`] captures such inputs before
//! validation. [`ColorInput::from_json`] probes untyped JSON values against the
//! models in a fixed order, and [`ColorInput::parse`] reads the command-style
//! text for an explicitly named model.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::core::{parse_coordinates, parse_hex};
use crate::error::ColorFormatError;
use crate::model::{hex, rgb, Hex, Hsl, Lab, Rgb, Xyz};
use crate::{ColorModel, Float};

/// A color in one of the five models, not yet validated.
///
/// The hexadecimal variant holds the string as given and RGB holds raw
/// floating point channels, so that both can represent invalid inputs, too.
/// [`Catalog::get`](crate::Catalog::get) validates inputs and returns `None`
/// for invalid ones.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorInput {
    Hex(String),
    Rgb([Float; 3]),
    Hsl(Hsl),
    Xyz(Xyz),
    Lab(Lab),
}

impl ColorInput {
    /// Get this input's color model.
    pub const fn model(&self) -> ColorModel {
        match self {
            Self::Hex(_) => ColorModel::Hex,
            Self::Rgb(_) => ColorModel::Rgb,
            Self::Hsl(_) => ColorModel::Hsl,
            Self::Xyz(_) => ColorModel::Xyz,
            Self::Lab(_) => ColorModel::Lab,
        }
    }

    /// Determine whether this input is a valid color in its model.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Hex(s) => hex::is_valid(s),
            Self::Rgb(channels) => rgb::is_valid(*channels),
            Self::Hsl(hsl) => hsl.is_valid(),
            Self::Xyz(xyz) => xyz.is_valid(),
            Self::Lab(lab) => lab.is_valid(),
        }
    }

    /// Probe the JSON value for a valid color.
    ///
    /// This function tries, in order, a hexadecimal string and objects with
    /// RGB, HSL, XYZ, and Lab fields. The first model for which the value is a
    /// valid color wins. Hence, an object with an out-of-range `R` but valid
    /// `H`, `S`, `L` fields is an HSL color. This function returns `None` if
    /// the value is not a valid color in any model.
    pub fn from_json(value: &Value) -> Option<Self> {
        ColorModel::ALL
            .into_iter()
            .filter_map(|model| Self::probe(model, value))
            .find(Self::is_valid)
    }

    /// Extract the candidate color for the given model from the JSON value.
    /// Objects must have all three fields as numbers. Additional fields are
    /// ignored.
    fn probe(model: ColorModel, value: &Value) -> Option<Self> {
        if model == ColorModel::Hex {
            return value.as_str().map(|s| Self::Hex(s.to_string()));
        }

        let object = value.as_object()?;
        let [n1, n2, n3] = model.coordinate_names()?;
        let coordinates = [
            object.get(n1)?.as_f64()?,
            object.get(n2)?.as_f64()?,
            object.get(n3)?.as_f64()?,
        ];

        Some(Self::from_coordinates(model, coordinates))
    }

    fn from_coordinates(model: ColorModel, coordinates: [Float; 3]) -> Self {
        match model {
            ColorModel::Hex | ColorModel::Rgb => Self::Rgb(coordinates),
            ColorModel::Hsl => Self::Hsl(Hsl::from(coordinates)),
            ColorModel::Xyz => Self::Xyz(Xyz::from(coordinates)),
            ColorModel::Lab => Self::Lab(Lab::from(coordinates)),
        }
    }

    /// Parse command-style text for the given color model.
    ///
    /// Hexadecimal colors are a single token with optional `#`. All other
    /// models take three numbers separated by white space and/or commas.
    /// Well-formed text that describes an out-of-range color parses without
    /// error, so that validation remains the catalog's responsibility.
    pub fn parse(model: ColorModel, text: &str) -> Result<Self, ColorFormatError> {
        if model == ColorModel::Hex {
            let text = text.trim();
            parse_hex(text)?;
            return Ok(Self::Hex(text.to_string()));
        }

        parse_coordinates(text).map(|coordinates| Self::from_coordinates(model, coordinates))
    }
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        Self::Hex(value.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self {
        Self::Hex(value)
    }
}

impl From<Hex> for ColorInput {
    fn from(value: Hex) -> Self {
        Self::Hex(value.as_str().to_string())
    }
}

impl From<Rgb> for ColorInput {
    fn from(value: Rgb) -> Self {
        let [r, g, b] = value.coordinates();
        Self::Rgb([r as Float, g as Float, b as Float])
    }
}

impl From<Hsl> for ColorInput {
    fn from(value: Hsl) -> Self {
        Self::Hsl(value)
    }
}

impl From<Xyz> for ColorInput {
    fn from(value: Xyz) -> Self {
        Self::Xyz(value)
    }
}

impl From<Lab> for ColorInput {
    fn from(value: Lab) -> Self {
        Self::Lab(value)
    }
}

impl<'de> Deserialize<'de> for ColorInput {
    /// Deserialize a color input by probing the untyped value. Values that are
    /// not a valid color in any model are an error.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value)
            .ok_or_else(|| serde::de::Error::custom("value should be a valid color but is not"))
    }
}
