//! Catalogs of named colors and the queries against them.
//!
//! A [`Catalog`] is built once, from the built-in CSS colors, a JSON file, or
//! any sequence of hex color and name pairs, and is immutable afterwards.
//! Building converts every color to Lab, indexes the colors by hex and by
//! name, and builds a [`VpTree`] over the Lab coordinates. Since a catalog is
//! `Send` and `Sync`, it can be shared by reference between threads for
//! concurrent queries.
//!
//! The main query is [`Catalog::get`]. It validates a [`ColorInput`],
//! converts it into all five color models, and looks up the catalog color
//! nearest to it.

mod builtin;
mod json;

use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;
use serde_json::Value;

use crate::core::describe_distance;
use crate::error::{CatalogError, CatalogErrorKind};
use crate::input::ColorInput;
use crate::model::{Hex, Hsl, Lab, Rgb, Xyz};
use crate::opt::Options;
use crate::vptree::{DeltaE00, VpTree};
use crate::Float;
use json::Sanitizer;

/// A catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Entry<'c> {
    /// The entry's index in catalog order.
    #[serde(skip)]
    pub index: usize,
    /// The display name.
    pub name: &'c str,
    /// The normalized hex color.
    pub hex: Hex,
    /// The Lab coordinates.
    #[serde(rename = "Lab")]
    pub lab: Lab,
}

/// The catalog color nearest to a query color.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Nearest<'c> {
    #[serde(rename = "L")]
    pub l: Float,
    pub a: Float,
    pub b: Float,
    pub name: &'c str,
    /// The CIEDE2000 color difference to the query color.
    pub distance: Float,
    #[serde(skip)]
    pub index: usize,
    #[serde(skip)]
    pub hex: Hex,
}

impl Nearest<'_> {
    fn new(entry: Entry<'_>, distance: Float) -> Nearest<'_> {
        let [l, a, b] = entry.lab.coordinates();
        Nearest {
            l,
            a,
            b,
            name: entry.name,
            distance,
            index: entry.index,
            hex: entry.hex,
        }
    }

    /// Get the nearest color's Lab coordinates.
    pub fn lab(&self) -> Lab {
        Lab::new(self.l, self.a, self.b)
    }
}

impl std::fmt::Display for Nearest<'_> {
    /// Format the name, followed by the described distance unless the query
    /// color is an exact match.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.distance == 0.0 {
            f.write_str(self.name)
        } else {
            write!(f, "{} ({})", self.name, describe_distance(self.distance))
        }
    }
}

/// The result of a catalog query: the query color in all five models plus
/// the nearest catalog color.
///
/// Displayed, the nearest color's name comes first, followed by the color in
/// the five models, all separated by ` | `.
///
/// Serialized, the fields use the names `hex`, `shorthandHex`, `RGB`, `HSL`,
/// `XYZ`, `Lab`, and `nearest`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorInfo<'c> {
    pub hex: Hex,
    #[serde(rename = "shorthandHex")]
    pub shorthand_hex: Option<String>,
    #[serde(rename = "RGB")]
    pub rgb: Rgb,
    #[serde(rename = "HSL")]
    pub hsl: Hsl,
    #[serde(rename = "XYZ")]
    pub xyz: Xyz,
    #[serde(rename = "Lab")]
    pub lab: Lab,
    pub nearest: Nearest<'c>,
}

impl std::fmt::Display for ColorInfo<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {:#} | {} | {} | {} | {}",
            self.nearest, self.hex, self.rgb, self.hsl, self.xyz, self.lab
        )
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// An immutable catalog of named colors.
#[derive(Debug)]
pub struct Catalog {
    names: Vec<String>,
    hexes: Vec<Hex>,
    by_hex: HashMap<Hex, usize>,
    by_name: HashMap<String, usize>,
    tree: VpTree<[Float; 3], DeltaE00>,
}

impl Catalog {
    /// Create a new catalog from hex color and name pairs.
    ///
    /// Entries with an empty name, a name longer than the configured maximum,
    /// a duplicate name, a hex color that is not six hexadecimal digits after
    /// an optional `#`, or a duplicate hex color are skipped.
    pub fn new<I, H, N>(entries: I, options: &Options) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (H, N)>,
        H: AsRef<str>,
        N: AsRef<str>,
    {
        let mut sanitizer = Sanitizer::new(options);
        let mut count = 0;
        for (position, (hex, name)) in entries.into_iter().enumerate() {
            sanitizer.offer(position, hex.as_ref(), name.as_ref());
            count += 1;
        }

        if count == 0 {
            return Err(CatalogError::new(CatalogErrorKind::EmptyArray));
        }
        Ok(Self::build(sanitizer.finish()?))
    }

    /// Create a new catalog from JSON text.
    ///
    /// The text must be an array of objects with `hex` and `name` fields.
    /// Array elements that are not such objects are skipped, as are entries
    /// rejected by [`Catalog::new`].
    pub fn from_json(text: &str, options: &Options) -> Result<Self, CatalogError> {
        json::parse(text, options).map(Self::build)
    }

    /// Load the catalog file configured by the options or, if none is
    /// configured, the built-in catalog.
    pub fn load(options: &Options) -> Result<Self, CatalogError> {
        let Some(path) = options.catalog_path() else {
            return Ok(Self::builtin());
        };

        let text = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&text, options)?;
        tracing::info!(
            "loaded {} colors from catalog {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Create the built-in catalog of CSS named colors.
    pub fn builtin() -> Self {
        let mut sanitizer = Sanitizer::new(&Options::default());
        for (position, (hex, name)) in builtin::CSS_COLORS.iter().enumerate() {
            sanitizer.offer(position, hex, name);
        }

        Self::build(sanitizer.finish().unwrap_or_default())
    }

    /// Index the sanitized entries and build the tree.
    fn build(entries: Vec<(Hex, String)>) -> Self {
        let count = entries.len();
        let mut names = Vec::with_capacity(count);
        let mut hexes = Vec::with_capacity(count);
        let mut points = Vec::with_capacity(count);
        let mut by_hex = HashMap::with_capacity(count);
        let mut by_name = HashMap::with_capacity(count);

        for (index, (hex, name)) in entries.into_iter().enumerate() {
            points.push(hex.to_lab().coordinates());
            by_hex.insert(hex, index);
            by_name.insert(name.trim().to_lowercase(), index);
            hexes.push(hex);
            names.push(name);
        }

        let start = Instant::now();
        let tree = VpTree::new(points, DeltaE00);
        tracing::debug!(
            "built vantage-point tree for {} colors with depth {} in {:.3}ms",
            tree.len(),
            tree.depth(),
            start.elapsed().as_secs_f64() * 1_000.0
        );

        Self {
            names,
            hexes,
            by_hex,
            by_name,
            tree,
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Determine whether this catalog has no entries. Catalogs created by this
    /// crate always have entries.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Access the vantage-point tree.
    pub fn tree(&self) -> &VpTree<[Float; 3], DeltaE00> {
        &self.tree
    }

    /// Get the entry with the given index.
    pub fn entry(&self, index: usize) -> Option<Entry<'_>> {
        Some(Entry {
            index,
            name: self.names.get(index)?,
            hex: *self.hexes.get(index)?,
            lab: Lab::from(*self.tree.points().get(index)?),
        })
    }

    /// Create an iterator over the entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = Entry<'_>> + '_ {
        (0..self.len()).filter_map(|index| self.entry(index))
    }

    /// Find the entry with the given name.
    ///
    /// Names match ignoring case and surrounding white space. If several
    /// names differ only in case, the last one in catalog order wins.
    pub fn find_by_name(&self, name: &str) -> Option<Entry<'_>> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .and_then(|index| self.entry(*index))
    }

    /// Find the entry with the given hex color.
    pub fn find_by_hex(&self, hex: &Hex) -> Option<Entry<'_>> {
        self.by_hex.get(hex).and_then(|index| self.entry(*index))
    }

    /// Find the catalog color nearest to the given color with the tree.
    ///
    /// Since CIEDE2000 is not a true metric, the result may, rarely, be a
    /// near-nearest color. This method returns `None` if the color is invalid.
    pub fn nearest(&self, lab: &Lab) -> Option<Nearest<'_>> {
        if !lab.is_valid() {
            return None;
        }

        let (index, distance) = self.tree.nearest(&lab.coordinates())?;
        Some(Nearest::new(self.entry(index)?, distance))
    }

    /// Find the catalog color nearest to the given color by linear scan.
    ///
    /// This method returns `None` if the color is invalid.
    pub fn nearest_exhaustive(&self, lab: &Lab) -> Option<Nearest<'_>> {
        if !lab.is_valid() {
            return None;
        }

        let (index, distance) = self.tree.nearest_exhaustive(&lab.coordinates())?;
        Some(Nearest::new(self.entry(index)?, distance))
    }

    /// Look up the color.
    ///
    /// This method validates the input, returning `None` for invalid colors.
    /// It then converts the color into the other models, going through RGB
    /// for hexadecimal, HSL, XYZ, and Lab inputs. If the color is in the
    /// catalog, it is its own nearest color with distance zero. Otherwise,
    /// this method searches the tree.
    pub fn get(&self, input: &ColorInput) -> Option<ColorInfo<'_>> {
        let mut hsl = None;
        let mut xyz = None;
        let mut lab = None;

        let (hex, rgb) = match input {
            ColorInput::Hex(s) => {
                let hex: Hex = s.parse().ok()?;
                (hex, hex.to_rgb())
            }
            ColorInput::Rgb(channels) => {
                let rgb = Rgb::from_channels(*channels)?;
                (rgb.to_hex(), rgb)
            }
            ColorInput::Hsl(color) => {
                let rgb = color.to_rgb()?;
                hsl = Some(*color);
                (rgb.to_hex(), rgb)
            }
            ColorInput::Xyz(color) => {
                let rgb = color.to_rgb()?;
                xyz = Some(*color);
                (rgb.to_hex(), rgb)
            }
            ColorInput::Lab(color) => {
                let rgb = color.to_rgb()?;
                lab = Some(*color);
                (rgb.to_hex(), rgb)
            }
        };

        let hsl = hsl.unwrap_or_else(|| rgb.to_hsl());
        let xyz = xyz.unwrap_or_else(|| rgb.to_xyz());
        let lab = lab.unwrap_or_else(|| xyz.to_lab_unchecked());

        let nearest = match self.find_by_hex(&hex) {
            Some(entry) => Nearest::new(entry, 0.0),
            None => {
                let (index, distance) = self.tree.nearest(&lab.coordinates())?;
                Nearest::new(self.entry(index)?, distance)
            }
        };

        Some(ColorInfo {
            hex,
            shorthand_hex: hex.shorthand(),
            rgb,
            hsl,
            xyz,
            lab,
            nearest,
        })
    }

    /// Look up the untyped JSON color.
    ///
    /// This method probes the value as described for
    /// [`ColorInput::from_json`] and then looks up the color with
    /// [`Catalog::get`].
    pub fn get_json(&self, value: &Value) -> Option<ColorInfo<'_>> {
        ColorInput::from_json(value).and_then(|input| self.get(&input))
    }
}

impl<'c> IntoIterator for &'c Catalog {
    type Item = Entry<'c>;
    type IntoIter = Box<dyn Iterator<Item = Entry<'c>> + 'c>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
