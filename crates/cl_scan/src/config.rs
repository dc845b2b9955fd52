//! Scan configuration and exclude patterns.

use std::fs;
use std::io;
use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use serde::Deserialize;

use crate::error::ConfigError;

/// Configuration file read from the scan root.
pub const CONFIG_FILE_NAME: &str = ".codelimit.yml";

/// Directories that hold dependencies or build output.
pub const DEFAULT_EXCLUDES: [&str; 6] = [
    "venv",
    "site-packages",
    "node_modules",
    "target",
    "build",
    "dist",
];

/// What to leave out of a scan.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Configuration {
    pub excludes: Vec<String>,
}

/// On-disk shape of [`CONFIG_FILE_NAME`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    excludes: Vec<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            excludes: DEFAULT_EXCLUDES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Configuration {
    /// Defaults plus the excludes listed in `root/.codelimit.yml`, if present.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Configuration::default();
        let path = root.join(CONFIG_FILE_NAME);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(config),
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        // An empty document deserializes to unit, not a mapping.
        if !text.trim().is_empty() {
            let file: ConfigFile = serde_yaml::from_str(&text)
                .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;
            tracing::debug!(path = %path.display(), excludes = file.excludes.len(), "loaded configuration");
            config.excludes.extend(file.excludes);
        }
        Ok(config)
    }

    /// Append further patterns, such as ones given on the command line.
    #[must_use]
    pub fn with_excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Compile the exclude patterns.
    pub fn exclude_matcher(&self) -> Result<ExcludeMatcher, ConfigError> {
        ExcludeMatcher::new(&self.excludes)
    }
}

/// Compiled exclude patterns.
///
/// Patterns use gitignore syntax. A pattern without a `/` matches any
/// single path segment, so `build` excludes `build/` at every depth; a
/// pattern with a `/` is matched against the whole relative path.
#[derive(Clone, Debug)]
pub struct ExcludeMatcher {
    globs: Gitignore,
}

impl ExcludeMatcher {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ConfigError> {
        let mut builder = GitignoreBuilder::new("");
        for pattern in patterns {
            let pattern = pattern.as_ref();
            builder
                .add_line(None, pattern)
                .map_err(|source| ConfigError::Pattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
        }
        let globs = builder.build().map_err(|source| ConfigError::Pattern {
            pattern: patterns
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(", "),
            source,
        })?;
        Ok(ExcludeMatcher { globs })
    }

    /// Whether `rel_path` (relative to the scan root) or a directory
    /// above it is excluded.
    pub fn is_excluded(&self, rel_path: &Path, is_dir: bool) -> bool {
        if rel_path.has_root() {
            return false;
        }
        self.globs
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }
}

#[cfg(test)]
mod tests;
