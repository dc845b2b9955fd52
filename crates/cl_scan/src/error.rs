//! Scanner, configuration and report errors.

use std::io;
use std::path::PathBuf;

use cl_lexer::LexError;
use thiserror::Error;

/// Why a scan or a single file failed.
///
/// Per-file variants never abort a scan; they end up in
/// `ScanResult::skipped`.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    NotUtf8 { path: PathBuf },

    #[error("cannot tokenize {}: {source}", path.display())]
    Lex {
        path: PathBuf,
        #[source]
        source: LexError,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid exclude pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: ignore::Error,
    },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot access report {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed report {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("report format version {found} is not supported (expected {expected})")]
    Version { found: u32, expected: u32 },
}
