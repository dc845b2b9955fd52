//! Plain-text rendering of scan results.

use cl_ir::Language;
use cl_scan::{LanguageTotals, Report, ReportUnit, RiskCategory};

const HEADINGS: [&str; 4] = ["Language", "Files", "Lines of Code", "Functions"];

/// One row per language plus a total row.
pub fn summary_table<'a, I>(languages: I) -> String
where
    I: IntoIterator<Item = (&'a Language, &'a LanguageTotals)>,
{
    let mut total = LanguageTotals::default();
    let mut rows = Vec::new();
    for (language, totals) in languages {
        rows.push(row(language.name(), totals));
        total.files += totals.files;
        total.lines_of_code += totals.lines_of_code;
        total.functions += totals.functions;
        for (sum, count) in total.buckets.iter_mut().zip(totals.buckets) {
            *sum += count;
        }
    }
    if rows.len() > 1 {
        rows.push(row("Total", &total));
    }

    let mut header: Vec<String> = HEADINGS.iter().map(ToString::to_string).collect();
    header.extend(RiskCategory::ALL.iter().map(ToString::to_string));

    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    for line in std::iter::once(&header).chain(&rows) {
        let mut cells = line.iter().zip(&widths);
        let mut text = String::new();
        if let Some((name, &width)) = cells.next() {
            text.push_str(&format!("{name:<width$}"));
        }
        for (cell, &width) in cells {
            text.push_str(&format!("  {cell:>width$}"));
        }
        out.push_str(text.trim_end());
        out.push('\n');
    }
    out
}

fn row(name: &str, totals: &LanguageTotals) -> Vec<String> {
    let mut cells = vec![
        name.to_string(),
        totals.files.to_string(),
        totals.lines_of_code.to_string(),
        totals.functions.to_string(),
    ];
    cells.extend(totals.buckets.iter().map(ToString::to_string));
    cells
}

/// `path:line:column  name (length lines)`.
pub fn unit_line(unit: &ReportUnit<'_>) -> String {
    let m = unit.measurement;
    format!(
        "{}:{}  {} ({} lines)",
        unit.file, m.start, m.unit_name, m.length
    )
}

/// The longest unmaintainable units, at most `limit` of them.
pub fn worst_units(report: &Report, limit: usize) -> Vec<ReportUnit<'_>> {
    report
        .all_measurements_sorted()
        .into_iter()
        .take_while(|unit| {
            RiskCategory::from_length(unit.measurement.length) == RiskCategory::Unmaintainable
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests;
