use std::collections::HashSet;

use serde_json::Value;

use crate::error::{CatalogError, CatalogErrorKind};
use crate::opt::Options;
use crate::Hex;

/// The reasons for skipping a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Skip {
    NotAnObject,
    NotStrings,
    EmptyName,
    LongName,
    DuplicateName,
    MalformedHex,
    DuplicateHex,
}

impl std::fmt::Display for Skip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Skip::*;

        f.write_str(match self {
            NotAnObject => "entry is not an object",
            NotStrings => "name or hex is not a string",
            EmptyName => "name is empty",
            LongName => "name is too long",
            DuplicateName => "name is a duplicate",
            MalformedHex => "hex is not six hexadecimal digits",
            DuplicateHex => "hex is a duplicate",
        })
    }
}

/// A filter for catalog entries.
///
/// The sanitizer accepts an entry only if its name is non-empty, no longer
/// than the maximum name length, and not seen before and if its hex color,
/// after stripping one leading `#`, has exactly six hexadecimal digits and,
/// lowercased, was not seen before. The first entry for a name or color wins.
pub(crate) struct Sanitizer {
    max_name_length: usize,
    seen_names: HashSet<String>,
    seen_hexes: HashSet<Hex>,
    entries: Vec<(Hex, String)>,
}

impl Sanitizer {
    pub fn new(options: &Options) -> Self {
        Self {
            max_name_length: options.max_name_length(),
            seen_names: HashSet::new(),
            seen_hexes: HashSet::new(),
            entries: Vec::new(),
        }
    }

    /// Accept the entry or return the reason for skipping it.
    pub fn accept(&mut self, hex: &str, name: &str) -> Result<(), Skip> {
        if name.is_empty() {
            return Err(Skip::EmptyName);
        } else if name.chars().count() > self.max_name_length {
            return Err(Skip::LongName);
        } else if self.seen_names.contains(name) {
            return Err(Skip::DuplicateName);
        }

        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(Skip::MalformedHex);
        }
        let hex: Hex = digits.parse().map_err(|_| Skip::MalformedHex)?;
        if self.seen_hexes.contains(&hex) {
            return Err(Skip::DuplicateHex);
        }

        self.seen_names.insert(name.to_string());
        self.seen_hexes.insert(hex);
        self.entries.push((hex, name.to_string()));
        Ok(())
    }

    /// Accept the entry, logging the reason for skipping it.
    pub fn offer(&mut self, position: usize, hex: &str, name: &str) {
        if let Err(reason) = self.accept(hex, name) {
            tracing::debug!("skipping catalog entry {} ({:?}, {:?}): {}", position, name, hex, reason);
        }
    }

    /// Finish sanitizing, returning the accepted entries in order.
    pub fn finish(self) -> Result<Vec<(Hex, String)>, CatalogError> {
        if self.entries.is_empty() {
            Err(CatalogError::new(CatalogErrorKind::NoValidColors))
        } else {
            Ok(self.entries)
        }
    }
}

/// Parse the catalog's JSON text into sanitized entries.
///
/// The text must be a non-empty array. Elements that are not objects with
/// string-valued `hex` and `name` fields are skipped, as are elements the
/// [`Sanitizer`] rejects.
pub(crate) fn parse(text: &str, options: &Options) -> Result<Vec<(Hex, String)>, CatalogError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(elements) = value else {
        return Err(CatalogError::new(CatalogErrorKind::NotAnArray));
    };
    if elements.is_empty() {
        return Err(CatalogError::new(CatalogErrorKind::EmptyArray));
    }

    let mut sanitizer = Sanitizer::new(options);
    for (position, element) in elements.iter().enumerate() {
        let Some(object) = element.as_object() else {
            tracing::debug!("skipping catalog entry {}: {}", position, Skip::NotAnObject);
            continue;
        };

        match (
            object.get("hex").and_then(Value::as_str),
            object.get("name").and_then(Value::as_str),
        ) {
            (Some(hex), Some(name)) => sanitizer.offer(position, hex, name),
            _ => tracing::debug!("skipping catalog entry {}: {}", position, Skip::NotStrings),
        }
    }

    sanitizer.finish()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sanitizer() {
        let options = Options::builder().max_name_length(8).build();
        let mut sanitizer = Sanitizer::new(&options);

        assert_eq!(sanitizer.accept("#FF0000", "Red"), Ok(()));
        assert_eq!(sanitizer.accept("00ff00", "Green"), Ok(()));
        assert_eq!(sanitizer.accept("0000ff", ""), Err(Skip::EmptyName));
        assert_eq!(sanitizer.accept("0000ff", "Ultramarine"), Err(Skip::LongName));
        assert_eq!(sanitizer.accept("0000ff", "Red"), Err(Skip::DuplicateName));
        assert_eq!(sanitizer.accept("00f", "Blue"), Err(Skip::MalformedHex));
        assert_eq!(sanitizer.accept("##0000ff", "Blue"), Err(Skip::MalformedHex));
        assert_eq!(sanitizer.accept("0000fg", "Blue"), Err(Skip::MalformedHex));
        assert_eq!(sanitizer.accept("ff0000", "Scarlet"), Err(Skip::DuplicateHex));
        assert_eq!(sanitizer.accept("0000FF", "Blue"), Ok(()));
        // Names are compared exactly.
        assert_eq!(sanitizer.accept("000080", "blue"), Ok(()));

        let entries = sanitizer.finish().unwrap();
        let hexes: Vec<&str> = entries.iter().map(|(h, _)| h.as_str()).collect();
        assert_eq!(hexes, ["ff0000", "00ff00", "0000ff", "000080"]);
    }

    #[test]
    fn test_parse() {
        let text = r##"[
            {"hex": "#FF0000", "name": "Red"},
            {"hex": "ff0000", "name": "Also Red"},
            {"hex": 255, "name": "Number"},
            {"name": "Missing"},
            "ff00ff",
            null,
            {"hex": "00ff00", "name": "Green", "extra": true}
        ]"##;

        let entries = parse(text, &Options::default()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].1, "Red");
        assert_eq!(entries[1].0.as_str(), "00ff00");
    }

    #[test]
    fn test_parse_errors() {
        let options = Options::default();
        let kind = |text: &str| parse(text, &options).map(|_| ()).map_err(|e| e.kind());

        assert_eq!(kind("[{"), Err(CatalogErrorKind::Json));
        assert_eq!(kind(r#"{"hex": "ff0000"}"#), Err(CatalogErrorKind::NotAnArray));
        assert_eq!(kind("[]"), Err(CatalogErrorKind::EmptyArray));
        assert_eq!(kind(r#"[{"hex": "nope", "name": "Nope"}]"#), Err(CatalogErrorKind::NoValidColors));
        assert_eq!(kind(r#"[{"hex": "abcdef", "name": "Fine"}]"#), Ok(()));
    }
}
