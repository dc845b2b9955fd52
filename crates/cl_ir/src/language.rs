//! Source languages and file classification.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A language the tokenizer understands.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Language {
    C,
    #[serde(rename = "C++")]
    Cpp,
    Java,
    #[serde(rename = "C#")]
    CSharp,
    JavaScript,
    TypeScript,
    Python,
}

impl Language {
    /// Every supported language, in report order.
    pub const ALL: [Language; 7] = [
        Language::C,
        Language::Cpp,
        Language::Java,
        Language::CSharp,
        Language::JavaScript,
        Language::TypeScript,
        Language::Python,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Language::C => "C",
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::CSharp => "C#",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Python => "Python",
        }
    }

    /// Map a file extension (without the dot, case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Language> {
        let ext = ext.to_ascii_lowercase();
        let lang = match ext.as_str() {
            "c" | "h" => Language::C,
            "cc" | "cpp" | "cxx" | "c++" | "hpp" | "hh" | "hxx" => Language::Cpp,
            "java" => Language::Java,
            "cs" => Language::CSharp,
            "js" | "mjs" | "cjs" | "jsx" => Language::JavaScript,
            "ts" | "mts" | "cts" | "tsx" => Language::TypeScript,
            "py" | "pyi" => Language::Python,
            _ => return None,
        };
        Some(lang)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extensions that are known not to contain measurable code.
///
/// Files with these extensions are skipped without a notice.
const IGNORED_EXTENSIONS: &[&str] = &[
    "md", "markdown", "rst", "txt", "json", "yml", "yaml", "toml", "ini", "cfg", "lock", "xml",
    "csv", "svg", "png", "jpg", "jpeg", "gif", "ico", "pdf", "html", "htm", "css", "scss", "map",
    "log", "gitignore", "editorconfig",
];

/// How the scanner should treat a file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FileKind {
    /// Tokenizable source in a supported language.
    Source(Language),
    /// Known non-code file, skipped silently.
    Ignored,
    /// Unknown extension, skipped with an informational notice.
    Unclassified(String),
}

impl FileKind {
    /// Classify a path by its extension.
    ///
    /// Files without an extension (`Makefile`, `LICENSE`) are ignored.
    pub fn from_path(path: &Path) -> FileKind {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return FileKind::Ignored;
        };
        if let Some(lang) = Language::from_extension(ext) {
            return FileKind::Source(lang);
        }
        let lower = ext.to_ascii_lowercase();
        if IGNORED_EXTENSIONS.contains(&lower.as_str()) {
            FileKind::Ignored
        } else {
            FileKind::Unclassified(lower)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn source_extensions() {
        assert_eq!(
            FileKind::from_path(Path::new("src/main.c")),
            FileKind::Source(Language::C)
        );
        assert_eq!(
            FileKind::from_path(Path::new("a/b/Widget.HPP")),
            FileKind::Source(Language::Cpp)
        );
        assert_eq!(
            FileKind::from_path(Path::new("app.tsx")),
            FileKind::Source(Language::TypeScript)
        );
        assert_eq!(
            FileKind::from_path(Path::new("tool.py")),
            FileKind::Source(Language::Python)
        );
    }

    #[test]
    fn ignored_and_unclassified() {
        assert_eq!(FileKind::from_path(Path::new("README.md")), FileKind::Ignored);
        assert_eq!(FileKind::from_path(Path::new("Makefile")), FileKind::Ignored);
        assert_eq!(
            FileKind::from_path(Path::new("lib.rs")),
            FileKind::Unclassified("rs".to_string())
        );
    }

    #[test]
    fn every_language_has_a_distinct_name() {
        let mut names: Vec<_> = Language::ALL.iter().map(|l| l.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Language::ALL.len());
    }
}
