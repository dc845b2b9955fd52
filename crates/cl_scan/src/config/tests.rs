#![expect(clippy::unwrap_used, reason = "tests unwrap fixture setup")]

use std::path::Path;

use pretty_assertions::assert_eq;

use super::*;

fn excluded(patterns: &[&str], path: &str) -> bool {
    let matcher = ExcludeMatcher::new(patterns).unwrap();
    matcher.is_excluded(Path::new(path), false)
}

#[test]
fn single_segment_matches_any_depth() {
    assert!(excluded(&["node_modules"], "node_modules/react/index.js"));
    assert!(excluded(&["node_modules"], "web/node_modules/react/index.js"));
    assert!(excluded(&["*.min.js"], "static/app.min.js"));
    assert!(!excluded(&["node_modules"], "src/node_modules.js"));
}

#[test]
fn multi_segment_matches_whole_path() {
    assert!(excluded(&["src/generated/*"], "src/generated/parser.c"));
    assert!(excluded(&["src/generated"], "src/generated/deep/parser.c"));
    assert!(!excluded(&["src/generated/*"], "lib/src/generated/parser.c"));
    assert!(!excluded(&["src/generated/*"], "src/parser.c"));
}

#[test]
fn defaults() {
    let config = Configuration::default();
    assert_eq!(config.excludes, DEFAULT_EXCLUDES.to_vec());
    let matcher = config.exclude_matcher().unwrap();
    assert!(matcher.is_excluded(Path::new("target"), true));
    assert!(matcher.is_excluded(Path::new("py/venv/lib/x.py"), false));
    assert!(!matcher.is_excluded(Path::new("src/main.c"), false));
}

#[test]
fn load_appends_file_excludes() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "excludes:\n  - vendor\n  - 'src/gen/*'\n",
    )
    .unwrap();

    let config = Configuration::load(dir.path()).unwrap();
    assert_eq!(config.excludes.len(), DEFAULT_EXCLUDES.len() + 2);
    assert_eq!(config.excludes[DEFAULT_EXCLUDES.len()..], ["vendor", "src/gen/*"]);

    let config = config.with_excludes(["third_party"]);
    assert_eq!(config.excludes.last().map(String::as_str), Some("third_party"));
}

#[test]
fn load_without_file_or_with_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(Configuration::load(dir.path()).unwrap(), Configuration::default());

    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "\n").unwrap();
    assert_eq!(Configuration::load(dir.path()).unwrap(), Configuration::default());
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "excludes: [unclosed\n").unwrap();
    let err = Configuration::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
}
