use std::collections::BTreeMap;

use cl_ir::{Language, Location, Measurement};
use cl_scan::{Codebase, SourceFileEntry};
use pretty_assertions::assert_eq;

use super::*;

fn totals(files: usize, lines_of_code: u64, buckets: [usize; 4]) -> LanguageTotals {
    LanguageTotals {
        files,
        lines_of_code,
        functions: buckets.iter().sum(),
        buckets,
    }
}

#[test]
fn table_with_total_row() {
    let mut languages = BTreeMap::new();
    languages.insert(Language::JavaScript, totals(2, 10, [2, 1, 0, 0]));
    languages.insert(Language::C, totals(1, 4, [1, 0, 0, 0]));

    let expected = "\
Language    Files  Lines of Code  Functions  ok  warning  hard-to-maintain  unmaintainable
C               1              4          1   1        0                 0               0
JavaScript      2             10          3   2        1                 0               0
Total           3             14          4   3        1                 0               0
";
    assert_eq!(summary_table(&languages), expected);
}

#[test]
fn single_language_has_no_total() {
    let mut languages = BTreeMap::new();
    languages.insert(Language::Python, totals(3, 120, [0; 4]));
    let table = summary_table(&languages);
    assert_eq!(table.lines().count(), 2);
    assert!(table.lines().nth(1).is_some_and(|row| row.starts_with("Python")));
}

#[test]
fn columns_widen_to_the_widest_cell() {
    let mut languages = BTreeMap::new();
    languages.insert(Language::Python, totals(1, 12_345_678_901_234_567, [0; 4]));
    let table = summary_table(&languages);
    let lines: Vec<_> = table.lines().collect();
    assert!(lines[0].starts_with("Language  Files      Lines of Code  "), "{table}");
    assert!(lines[1].starts_with("Python        1  12345678901234567  "), "{table}");
}

#[test]
fn worst_units_are_unmaintainable_only() {
    let unit = |name: &str, line: u32, length: u32| {
        Measurement::new(name, Location::new(line, 1), Location::new(line + length, 2), length)
    };
    let mut codebase = Codebase::new("/src");
    codebase.add_file(SourceFileEntry {
        path: "big.c".to_string(),
        checksum: "0".to_string(),
        language: Language::C,
        loc: 300,
        measurements: vec![unit("small", 1, 10), unit("huge", 20, 120), unit("big", 150, 61)],
    });
    let report = Report::new(codebase);

    let worst = worst_units(&report, 10);
    let lines: Vec<_> = worst.iter().map(unit_line).collect();
    assert_eq!(
        lines,
        vec!["big.c:20:1  huge (120 lines)", "big.c:150:1  big (61 lines)"]
    );
    assert_eq!(worst_units(&report, 1).len(), 1);
}
