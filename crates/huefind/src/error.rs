//! Utility module with huefind's errors.

/// An erroneous textual color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color model name other than `hex`, `rgb`, `hsl`, `xyz`, or `lab`.
    UnknownModel,

    /// A hexadecimal color with an unexpected number of characters. For
    /// example, `#00` is missing a hexadecimal digit.
    UnexpectedCharacters,

    /// A hexadecimal color with a character that is not a hexadecimal digit.
    /// For example, `#efg` has a malformed third digit.
    MalformedHex,

    /// A color with fewer than three coordinates. For example, `255, 0` is
    /// missing the third coordinate.
    MissingCoordinate,

    /// A color with a coordinate that is not a number. For example, `1 two 3`
    /// has a malformed second coordinate.
    MalformedFloat,

    /// A color with more than three coordinates. For example, `1 2 3 4` has
    /// one coordinate too many.
    TooManyCoordinates,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownModel => f.write_str("color model should be hex, rgb, hsl, xyz, or lab"),
            UnexpectedCharacters => {
                f.write_str("hexadecimal color should have 3 or 6 digits after optional `#`")
            }
            MalformedHex => f.write_str("hexadecimal color should contain only hexadecimal digits"),
            MissingCoordinate => {
                f.write_str("color should have 3 coordinates but is missing one")
            }
            MalformedFloat => {
                f.write_str("color coordinates should be floating point numbers but are not")
            }
            TooManyCoordinates => f.write_str("color should have 3 coordinates but has more"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

// ====================================================================================================================

/// The kinds of errors while loading a color catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogErrorKind {
    /// The catalog file could not be read.
    Io,
    /// The catalog is not well-formed JSON.
    Json,
    /// The catalog's top-level value is not an array.
    NotAnArray,
    /// The catalog is an empty array.
    EmptyArray,
    /// The catalog has no entries with a valid name and hexadecimal color.
    NoValidColors,
}

/// An error while loading a color catalog.
#[derive(Debug)]
pub struct CatalogError {
    kind: CatalogErrorKind,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CatalogError {
    /// Create a new catalog error without underlying cause.
    pub fn new(kind: CatalogErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Get this error's kind.
    pub fn kind(&self) -> CatalogErrorKind {
        self.kind
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self {
            kind: CatalogErrorKind::Io,
            source: Some(Box::new(value)),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self {
            kind: CatalogErrorKind::Json,
            source: Some(Box::new(value)),
        }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CatalogErrorKind::*;

        match self.kind {
            Io => f.write_str("could not read color catalog"),
            Json => f.write_str("color catalog should be valid JSON but is not"),
            NotAnArray => f.write_str("color catalog should be a JSON array but is not"),
            EmptyArray => f.write_str("color catalog should have entries but has none"),
            NoValidColors => {
                f.write_str("color catalog should have valid colors but has none")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref().map(|e| e as _)
    }
}
