//! The persisted scan report, which doubles as the measurement cache.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use cl_ir::Measurement;
use serde::{Deserialize, Serialize};

use crate::codebase::Codebase;
use crate::error::ReportError;

/// Directory under the scan root holding the report.
pub const CACHE_DIR: &str = ".codelimit_cache";
pub const REPORT_FILE_NAME: &str = "codelimit.json";
/// Bumped whenever the serialized layout or measurement rules change.
pub const REPORT_VERSION: u32 = 1;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub version: u32,
    pub codebase: Codebase,
}

/// A measurement together with the file it belongs to.
#[derive(Copy, Clone, Debug)]
pub struct ReportUnit<'a> {
    pub file: &'a str,
    pub measurement: &'a Measurement,
}

impl Report {
    pub fn new(codebase: Codebase) -> Self {
        Report {
            version: REPORT_VERSION,
            codebase,
        }
    }

    /// Where the report for `root` lives.
    pub fn default_path(root: &Path) -> PathBuf {
        root.join(CACHE_DIR).join(REPORT_FILE_NAME)
    }

    /// Read a report, or `None` if there is none yet.
    pub fn load(path: &Path) -> Result<Option<Report>, ReportError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ReportError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let report: Report = serde_json::from_str(&text).map_err(|source| ReportError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        if report.version != REPORT_VERSION {
            return Err(ReportError::Version {
                found: report.version,
                expected: REPORT_VERSION,
            });
        }
        Ok(Some(report))
    }

    /// Write the report, creating its directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        let io_error = |source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(io_error)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| ReportError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(io_error)?;
        tracing::debug!(path = %path.display(), files = self.codebase.len(), "saved report");
        Ok(())
    }

    /// Every measurement, longest first; ties by file then position.
    pub fn all_measurements_sorted(&self) -> Vec<ReportUnit<'_>> {
        let mut units: Vec<_> = self
            .codebase
            .files()
            .flat_map(|entry| {
                entry.measurements.iter().map(|measurement| ReportUnit {
                    file: &entry.path,
                    measurement,
                })
            })
            .collect();
        units.sort_by(|a, b| {
            b.measurement
                .length
                .cmp(&a.measurement.length)
                .then_with(|| a.file.cmp(b.file))
                .then_with(|| a.measurement.start.cmp(&b.measurement.start))
        });
        units
    }
}
