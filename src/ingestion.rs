//! The data layer: built-in demo context plus CSV-to-text conversion for
//! prompt inclusion.
//!
//! Real data-source integration is out of scope; uploaded documents arrive
//! here already reduced to text (a PDF extractor collaborator passes its
//! output as the `plan_rules` field of a request).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Synthetic rep data used when no sales file has been loaded.
pub const SAMPLE_REP_DATA: &str = "\
REP: Jordan Doe | ID: REP-2024-X

MONTH: MAY
- Consumables Sales: $40,600 (Quota: $60,000)
- Capital Units: 66 Units (Tier 1)
- MBO Rating: Good ($2,500 base)
- Eligibility: 99%

MONTH: JUNE
- Consumables Sales: $58,800
- Capital Units: 65 Units
- MBO Rating: Excellent
- Eligibility: 98%

MONTH: JULY
- Consumables Sales: $23,100
- Capital Units: 41 Units
- MBO Rating: Average
- Eligibility: 97%
";

/// Built-in compensation plan, used when no plan document has been uploaded.
pub const DEFAULT_PLAN_RULES: &str = "\
1. Consumables (Weight 50%): Formula: (Actual/Quota)*100 = Attainment%. Look up on Curve.
   - Quota: $60k. Target Pay: $5k. Curve: 80%->80%, 100%->100%, 150%->180%.
2. Capital (Weight 30%): Tiered Commission on UNITS.
   - 50-75u: $100 | 76-100u: $250 | 101-125u: $500.
3. MBO (Weight 20%): Avg: $1k | Good: $2.5k | Exc: $5k.
4. GLOBAL ELIGIBILITY: May: 99% | June: 98% | July: 97%.
";

/// Render CSV input as a row-limited textual table for the prompt: the
/// header row plus at most `max_rows` data rows, pipe-separated. Rows past
/// the limit are summarized with an elision line so the model knows the
/// data was cut.
pub fn csv_preview<R: Read>(reader: R, max_rows: usize) -> Result<String> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut table = String::new();

    let headers = csv_reader.headers()?.clone();
    table.push_str(&headers.iter().collect::<Vec<_>>().join(" | "));
    table.push('\n');

    let mut emitted = 0usize;
    let mut skipped = 0usize;
    for record in csv_reader.records() {
        let record = record?;
        if emitted < max_rows {
            table.push_str(&record.iter().collect::<Vec<_>>().join(" | "));
            table.push('\n');
            emitted += 1;
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        table.push_str(&format!("... ({skipped} more rows omitted)\n"));
    }

    Ok(table)
}

/// [`csv_preview`] over a file on disk (an uploaded sales spreadsheet).
pub fn csv_preview_file(path: impl AsRef<Path>, max_rows: usize) -> Result<String> {
    let file = File::open(path)?;
    csv_preview(file, max_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "Month,Sales,Units\nMay,40600,66\nJune,58800,65\nJuly,23100,41\n";

    #[test]
    fn preview_keeps_header_and_limits_rows() {
        let table = csv_preview(CSV.as_bytes(), 2).unwrap();

        assert!(table.starts_with("Month | Sales | Units\n"));
        assert!(table.contains("May | 40600 | 66"));
        assert!(table.contains("June | 58800 | 65"));
        assert!(!table.contains("July"));
        assert!(table.contains("(1 more rows omitted)"));
    }

    #[test]
    fn preview_of_small_file_has_no_elision_line() {
        let table = csv_preview(CSV.as_bytes(), 10).unwrap();
        assert!(table.contains("July | 23100 | 41"));
        assert!(!table.contains("omitted"));
    }

    #[test]
    fn sample_context_mentions_all_three_months() {
        for month in ["MAY", "JUNE", "JULY"] {
            assert!(SAMPLE_REP_DATA.contains(month));
        }
        assert!(DEFAULT_PLAN_RULES.contains("GLOBAL ELIGIBILITY"));
    }
}
