//! Walking a tree and measuring every source file in it.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use cl_ir::{FileKind, Language, Measurement, Token};
use cl_lexer::{filter_significant, LexError, LogosTokenizer, Tokenizer};
use cl_scope::{LanguageRegistry, ScopeExtractor};
use ignore::WalkBuilder;

use crate::checksum::checksum;
use crate::codebase::{Codebase, SourceFileEntry};
use crate::config::{Configuration, ExcludeMatcher};
use crate::error::{ConfigError, ScanError};
use crate::measure::{count_lines, count_profile, measure_scope};

/// Running totals for one language.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LanguageTotals {
    pub files: usize,
    pub lines_of_code: u64,
    pub functions: usize,
    /// Functions per risk bucket, see `RiskCategory::bucket`.
    pub buckets: [usize; 4],
}

impl LanguageTotals {
    pub fn add(&mut self, entry: &SourceFileEntry) {
        self.files += 1;
        self.lines_of_code += u64::from(entry.loc);
        self.functions += entry.measurements.len();
        for (total, count) in self.buckets.iter_mut().zip(count_profile(&entry.measurements)) {
            *total += count;
        }
    }
}

/// A file with an extension no tokenizer handles.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnclassifiedFile {
    pub path: String,
    pub extension: String,
}

/// A source file that could not be measured.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: String,
    pub error: ScanError,
}

#[derive(Debug)]
pub struct ScanResult {
    pub codebase: Codebase,
    pub languages: BTreeMap<Language, LanguageTotals>,
    pub unclassified: Vec<UnclassifiedFile>,
    pub skipped: Vec<SkippedFile>,
}

/// Measures source trees.
///
/// Holds the compiled extractors and exclude patterns; one scanner can
/// scan any number of roots.
pub struct Scanner<'a> {
    registry: &'a LanguageRegistry,
    excludes: ExcludeMatcher,
    tokenizer: &'a dyn Tokenizer,
}

impl<'a> Scanner<'a> {
    pub fn new(registry: &'a LanguageRegistry, config: &Configuration) -> Result<Self, ConfigError> {
        Ok(Scanner {
            registry,
            excludes: config.exclude_matcher()?,
            tokenizer: &LogosTokenizer,
        })
    }

    /// Use `tokenizer` instead of the built-in one.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: &'a dyn Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Scan `root`, reusing entries from `previous` whose content is
    /// unchanged.
    pub fn scan(&self, root: &Path, previous: Option<&Codebase>) -> Result<ScanResult, ScanError> {
        self.scan_with(root, previous, |_, _| {})
    }

    /// Like [`Scanner::scan`], calling `observer` after each file with the
    /// new entry and the updated totals for its language.
    pub fn scan_with<F>(
        &self,
        root: &Path,
        previous: Option<&Codebase>,
        mut observer: F,
    ) -> Result<ScanResult, ScanError>
    where
        F: FnMut(&SourceFileEntry, &LanguageTotals),
    {
        if !root.is_dir() {
            return Err(ScanError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut result = ScanResult {
            codebase: Codebase::new(root),
            languages: BTreeMap::new(),
            unclassified: Vec::new(),
            skipped: Vec::new(),
        };

        for path in self.walk(root) {
            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };
            let rel_path = slash_path(relative);

            let language = match FileKind::from_path(relative) {
                FileKind::Source(language) => language,
                FileKind::Ignored => continue,
                FileKind::Unclassified(extension) => {
                    tracing::info!(path = %rel_path, %extension, "unclassified file");
                    result.unclassified.push(UnclassifiedFile {
                        path: rel_path,
                        extension,
                    });
                    continue;
                }
            };

            match self.scan_file(&path, rel_path.clone(), language, previous) {
                Ok(entry) => {
                    let totals = result.languages.entry(entry.language).or_default();
                    totals.add(&entry);
                    observer(&entry, totals);
                    result.codebase.add_file(entry);
                }
                Err(error) => {
                    tracing::warn!(path = %rel_path, %error, "skipping file");
                    result.skipped.push(SkippedFile {
                        path: rel_path,
                        error,
                    });
                }
            }
        }

        tracing::info!(
            root = %root.display(),
            files = result.codebase.len(),
            lines_of_code = result.codebase.total_loc(),
            skipped = result.skipped.len(),
            "scan complete"
        );
        Ok(result)
    }

    /// Files under `root` in a stable order, minus hidden and excluded
    /// paths.
    fn walk(&self, root: &Path) -> Vec<PathBuf> {
        let excludes = self.excludes.clone();
        let prefix = root.to_path_buf();

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .hidden(true)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                match entry.path().strip_prefix(&prefix) {
                    Ok(relative) if !relative.as_os_str().is_empty() => {
                        !excludes.is_excluded(relative, is_dir)
                    }
                    _ => true,
                }
            });

        let mut files = Vec::new();
        for entry in builder.build() {
            match entry {
                Ok(entry) if entry.file_type().is_some_and(|t| t.is_file()) => {
                    files.push(entry.into_path());
                }
                Ok(_) => {}
                Err(err) => tracing::warn!(error = %err, "cannot walk entry"),
            }
        }
        files
    }

    fn scan_file(
        &self,
        path: &Path,
        rel_path: String,
        language: Language,
        previous: Option<&Codebase>,
    ) -> Result<SourceFileEntry, ScanError> {
        let bytes = fs::read(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let checksum = checksum(&bytes);

        if let Some(cached) = previous.and_then(|codebase| codebase.cached(&rel_path, &checksum)) {
            tracing::debug!(path = %rel_path, "unchanged, reusing measurements");
            return Ok(cached.clone());
        }

        tracing::debug!(path = %rel_path, %language, "measuring");
        let text = String::from_utf8(bytes).map_err(|_| ScanError::NotUtf8 {
            path: path.to_path_buf(),
        })?;
        let tokens = self
            .tokenizer
            .tokenize(language, &text)
            .map_err(|source| ScanError::Lex {
                path: path.to_path_buf(),
                source,
            })?;
        let (loc, measurements) = measure_tokens(tokens, self.registry.get(language));

        Ok(SourceFileEntry {
            path: rel_path,
            checksum,
            language,
            loc,
            measurements,
        })
    }
}

/// Measurements for every scope `extractor` finds in `tokens`.
///
/// `tokens` should already be filtered to significant ones.
pub fn scan_tokens(tokens: &[Token], extractor: &dyn ScopeExtractor) -> Vec<Measurement> {
    extractor
        .extract_scopes(tokens)
        .iter()
        .filter_map(measure_scope)
        .collect()
}

/// Lines of code and measurements for one source text.
pub fn scan_source(
    language: Language,
    text: &str,
    registry: &LanguageRegistry,
) -> Result<(u32, Vec<Measurement>), LexError> {
    let tokens = cl_lexer::tokenize(language, text)?;
    Ok(measure_tokens(tokens, registry.get(language)))
}

fn measure_tokens(tokens: Vec<Token>, extractor: Option<&dyn ScopeExtractor>) -> (u32, Vec<Measurement>) {
    let tokens = filter_significant(tokens);
    let loc = count_lines(&tokens);
    let measurements = extractor.map_or_else(Vec::new, |extractor| scan_tokens(&tokens, extractor));
    (loc, measurements)
}

fn slash_path(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
