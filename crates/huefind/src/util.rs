use std::ffi::OsString;
use std::path::PathBuf;

/// Access to environment variables.
///
/// Implementations only look up raw values. The provided methods interpret
/// them as the paths and counts that [`Options`](crate::opt::Options) reads.
pub(crate) trait Environment {
    /// Look up the variable's raw value.
    fn lookup(&self, key: &str) -> Option<OsString>;

    /// Read the variable as a path. Unset and empty variables have no path.
    fn read_path(&self, key: &str) -> Option<PathBuf> {
        self.lookup(key)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Read the variable as a count, ignoring surrounding white space.
    ///
    /// The error carries the text of a value that is not a count.
    fn read_count(&self, key: &str) -> Option<Result<usize, String>> {
        let value = self.lookup(key)?;
        let text = value.to_string_lossy();
        Some(text.trim().parse().map_err(|_| text.into_owned()))
    }
}

/// The process environment.
#[derive(Debug, Default)]
pub(crate) struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// An environment with fixed variables.
    pub(crate) struct FakeEnv(Vec<(&'static str, &'static str)>);

    impl FakeEnv {
        pub(crate) fn with(bindings: &[(&'static str, &'static str)]) -> Self {
            Self(bindings.to_vec())
        }
    }

    impl Environment for FakeEnv {
        fn lookup(&self, key: &str) -> Option<OsString> {
            self.0
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| OsString::from(*v))
        }
    }

    #[test]
    fn test_read() {
        let env = FakeEnv::with(&[
            ("HUEFIND_EMPTY", ""),
            ("HUEFIND_PATH", "colors.json"),
            ("HUEFIND_COUNT", " 12\n"),
            ("HUEFIND_WORD", "twelve"),
        ]);

        assert_eq!(env.read_path("HUEFIND_PATH"), Some(PathBuf::from("colors.json")));
        assert_eq!(env.read_path("HUEFIND_EMPTY"), None);
        assert_eq!(env.read_path("HUEFIND_NONE"), None);

        assert_eq!(env.read_count("HUEFIND_COUNT"), Some(Ok(12)));
        assert_eq!(env.read_count("HUEFIND_WORD"), Some(Err("twelve".into())));
        assert_eq!(env.read_count("HUEFIND_NONE"), None);
    }
}

#[cfg(test)]
pub(crate) use test::FakeEnv;
