//! `scan` and `check`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use cl_ir::FileKind;
use cl_scan::{
    scan_source, Configuration, Report, ReportUnit, RiskCategory, ScanError, Scanner,
};
use cl_scope::LanguageRegistry;

use crate::error::CliError;
use crate::render::{summary_table, unit_line, worst_units};

/// How many unmaintainable functions `scan` lists.
const WORST_UNITS_SHOWN: usize = 10;

#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    pub root: PathBuf,
    /// Patterns added to the configured excludes.
    pub excludes: Vec<String>,
    /// Neither read nor write the report cache.
    pub no_cache: bool,
}

/// Measure a tree, print a summary and update the report.
pub fn run_scan(options: &ScanOptions, out: &mut impl Write) -> Result<Report, CliError> {
    let root = options.root.as_path();
    let config = Configuration::load(root)?.with_excludes(options.excludes.iter().cloned());
    let registry = LanguageRegistry::new();
    let scanner = Scanner::new(&registry, &config)?;

    let report_path = Report::default_path(root);
    let previous = if options.no_cache {
        None
    } else {
        load_previous(&report_path)
    };

    let result = scanner.scan(root, previous.as_ref().map(|report| &report.codebase))?;

    write!(out, "{}", summary_table(&result.languages))?;
    if !result.skipped.is_empty() {
        writeln!(out, "\n{} file(s) could not be measured:", result.skipped.len())?;
        for skipped in &result.skipped {
            writeln!(out, "  {}: {}", skipped.path, skipped.error)?;
        }
    }

    let report = Report::new(result.codebase);
    let worst = worst_units(&report, WORST_UNITS_SHOWN);
    if !worst.is_empty() {
        writeln!(out, "\nUnmaintainable functions:")?;
        for unit in &worst {
            writeln!(out, "  {}", unit_line(unit))?;
        }
    }

    if !options.no_cache {
        report.save(&Report::default_path(report.codebase.root()))?;
    }
    Ok(report)
}

/// A cached report, or `None` when there is none or it cannot be used.
fn load_previous(path: &Path) -> Option<Report> {
    match Report::load(path) {
        Ok(report) => report,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring cached report");
            None
        }
    }
}

/// Measure `files` and print every unmaintainable function.
///
/// Returns `true` when none was found. Files that are not source code in
/// a supported language are ignored.
pub fn run_check(files: &[PathBuf], out: &mut impl Write) -> Result<bool, CliError> {
    let registry = LanguageRegistry::new();
    let mut passed = true;

    for path in files {
        let FileKind::Source(language) = FileKind::from_path(path) else {
            tracing::debug!(path = %path.display(), "not a source file");
            continue;
        };
        let text = fs::read_to_string(path).map_err(|source| ScanError::Read {
            path: path.clone(),
            source,
        })?;
        let (_, measurements) = scan_source(language, &text, &registry).map_err(|source| {
            ScanError::Lex {
                path: path.clone(),
                source,
            }
        })?;

        let file = path.display().to_string();
        for measurement in &measurements {
            if RiskCategory::from_length(measurement.length) == RiskCategory::Unmaintainable {
                passed = false;
                let unit = ReportUnit {
                    file: &file,
                    measurement,
                };
                writeln!(out, "{}", unit_line(&unit))?;
            }
        }
    }

    Ok(passed)
}
