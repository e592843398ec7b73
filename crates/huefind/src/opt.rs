//! Helper module with the options for loading color catalogs.
//!
//! This module provides the options for a catalog and the corresponding
//! builder. Options can also be read from the environment:
//!
//!   * `HUEFIND_CATALOG` names a JSON file with the catalog's colors. If it is
//!     not set, [`Catalog::load`](crate::Catalog::load) falls back on the
//!     built-in CSS colors.
//!   * `HUEFIND_MAX_NAME_LENGTH` limits the length of color names in
//!     characters. Entries with longer names are skipped.
//!
//!
//! # Example
//!
//! ```
//! # use huefind::opt::Options;
//! let options = Options::builder()
//!     .max_name_length(40)
//!     .build();
//!
//! assert_eq!(options.max_name_length(), 40);
//! assert!(options.catalog_path().is_none());
//! ```

use std::path::{Path, PathBuf};

use crate::util::{Environment, ProcessEnv};

/// The environment variable naming the catalog file.
pub const CATALOG_VAR: &str = "HUEFIND_CATALOG";

/// The environment variable with the maximum name length.
pub const MAX_NAME_LENGTH_VAR: &str = "HUEFIND_MAX_NAME_LENGTH";

#[derive(Clone, Debug)]
struct OptionData {
    catalog_path: Option<PathBuf>,
    max_name_length: usize,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            catalog_path: None,
            max_name_length: 100,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the path of the catalog file.
    pub fn catalog_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.0.catalog_path = Some(path.into());
        self
    }

    /// Set the maximum length of color names in characters.
    pub fn max_name_length(&mut self, length: usize) -> &mut Self {
        self.0.max_name_length = length;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the options from the process environment.
    ///
    /// Unset variables keep their defaults. A maximum name length that is not
    /// a number is ignored with a warning.
    pub fn from_environment() -> Options {
        Self::from_env(&ProcessEnv)
    }

    pub(crate) fn from_env(env: &impl Environment) -> Options {
        let mut builder = Self::builder();

        if let Some(path) = env.read_path(CATALOG_VAR) {
            builder.catalog_path(path);
        }

        match env.read_count(MAX_NAME_LENGTH_VAR) {
            Some(Ok(length)) => {
                builder.max_name_length(length);
            }
            Some(Err(value)) => tracing::warn!(
                "ignoring {}={:?}, which is not a length",
                MAX_NAME_LENGTH_VAR,
                value
            ),
            None => (),
        }

        builder.build()
    }

    /// Get the path of the catalog file.
    pub fn catalog_path(&self) -> Option<&Path> {
        self.0.catalog_path.as_deref()
    }

    /// Get the maximum length of color names in characters.
    pub fn max_name_length(&self) -> usize {
        self.0.max_name_length
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::FakeEnv;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.catalog_path(), None);
        assert_eq!(options.max_name_length(), 100);
    }

    #[test]
    fn test_from_env() {
        let options = Options::from_env(&FakeEnv::with(&[]));
        assert_eq!(options.catalog_path(), None);
        assert_eq!(options.max_name_length(), 100);

        let options = Options::from_env(&FakeEnv::with(&[
            (CATALOG_VAR, "/data/colors.json"),
            (MAX_NAME_LENGTH_VAR, " 32 "),
        ]));
        assert_eq!(options.catalog_path(), Some(Path::new("/data/colors.json")));
        assert_eq!(options.max_name_length(), 32);

        let options = Options::from_env(&FakeEnv::with(&[
            (CATALOG_VAR, ""),
            (MAX_NAME_LENGTH_VAR, "many"),
        ]));
        assert_eq!(options.catalog_path(), None);
        assert_eq!(options.max_name_length(), 100);
    }
}
