//! Scan results per file and for the whole tree.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use cl_ir::{Language, Measurement};
use serde::{Deserialize, Serialize};

/// The measured state of one file.
///
/// Entries are replaced wholesale when a file is rescanned.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SourceFileEntry {
    /// Path relative to the scan root, `/`-separated.
    pub path: String,
    pub checksum: String,
    pub language: Language,
    /// Lines holding at least one significant token.
    pub loc: u32,
    pub measurements: Vec<Measurement>,
}

/// All entries of one scan, keyed by relative path.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Codebase {
    root: PathBuf,
    files: BTreeMap<String, SourceFileEntry>,
}

impl Codebase {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Codebase {
            root: root.into(),
            files: BTreeMap::new(),
        }
    }

    /// Insert `entry`, replacing any entry for the same path.
    pub fn add_file(&mut self, entry: SourceFileEntry) {
        self.files.insert(entry.path.clone(), entry);
    }

    pub fn get(&self, path: &str) -> Option<&SourceFileEntry> {
        self.files.get(path)
    }

    /// Entries in path order.
    pub fn files(&self) -> impl Iterator<Item = &SourceFileEntry> {
        self.files.values()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn total_loc(&self) -> u64 {
        self.files.values().map(|entry| u64::from(entry.loc)).sum()
    }

    /// The cached entry for `path`, if its content is unchanged.
    pub fn cached(&self, path: &str, checksum: &str) -> Option<&SourceFileEntry> {
        self.get(path).filter(|entry| entry.checksum == checksum)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
