//! Codelimit scanning.
//!
//! Walks a source tree, measures every function-like scope it finds and
//! aggregates the results per language. Measurements are cached by file
//! content: a file whose checksum matches the previous report is not
//! tokenized again.
//!
//! ```text
//! walk ──► FileKind ──► checksum ──► cache hit? ──► SourceFileEntry ──► Codebase
//!                                       │ miss                          │
//!                                       ▼                               ▼
//!                          tokenize ► scopes ► measure          LanguageTotals
//! ```

mod checksum;
mod codebase;
mod config;
mod error;
mod measure;
mod report;
mod scanner;

pub use checksum::checksum;
pub use codebase::{Codebase, SourceFileEntry};
pub use config::{Configuration, ExcludeMatcher, CONFIG_FILE_NAME, DEFAULT_EXCLUDES};
pub use error::{ConfigError, ReportError, ScanError};
pub use measure::{count_lines, count_profile, measure_scope, RiskCategory};
pub use report::{Report, ReportUnit, CACHE_DIR, REPORT_FILE_NAME, REPORT_VERSION};
pub use scanner::{
    scan_source, scan_tokens, LanguageTotals, ScanResult, Scanner, SkippedFile, UnclassifiedFile,
};
