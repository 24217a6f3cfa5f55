//! Build context shared between steps.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde_json::Value;

/// Shared state passed to every step during a build.
#[derive(Debug)]
pub struct BuildContext {
    /// Directory of the running build; the changelog lives here.
    pub build_dir: PathBuf,

    /// Global switch for the alternate greeting language.
    pub use_french: bool,

    /// Environment entries contributed for downstream steps.
    env: BTreeMap<String, String>,

    /// Arbitrary metadata for inter-step communication.
    pub metadata: HashMap<String, Value>,
}

impl BuildContext {
    /// Creates a new build context.
    #[must_use]
    pub fn new(build_dir: impl Into<PathBuf>) -> Self {
        Self {
            build_dir: build_dir.into(),
            use_french: false,
            env: BTreeMap::new(),
            metadata: HashMap::new(),
        }
    }

    /// Sets the greeting language flag.
    #[must_use]
    pub fn use_french(mut self, use_french: bool) -> Self {
        self.use_french = use_french;
        self
    }

    /// Resolves a path relative to the build directory.
    #[must_use]
    pub fn build_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.build_dir.join(relative)
    }

    /// Contributes an environment entry, replacing any previous value.
    pub fn add_env(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.env.insert(key.into(), value.into());
    }

    /// Gets a contributed environment value.
    #[must_use]
    pub fn get_env(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    /// Returns all contributed environment entries, sorted by key.
    #[must_use]
    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    /// Consumes the context and returns its environment entries.
    #[must_use]
    pub fn into_env(self) -> BTreeMap<String, String> {
        self.env
    }

    /// Gets a metadata value.
    #[must_use]
    pub fn get_metadata(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Sets a metadata value.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: Value) {
        self.metadata.insert(key.into(), value);
    }
}
