//! Line-oriented parser for pipe-delimited markdown tables.
//!
//! The first non-empty line is the header, the next non-empty line is taken to
//! be the separator and skipped without inspection, and every later line is a
//! data row. Rows whose cell count differs from the header are dropped; the
//! report form records them in [`ParsedTable::skipped`].

use indexmap::IndexMap;
use serde::Serialize;

/// One parsed data row, keyed by header label in header order.
pub type Record = IndexMap<String, String>;

/// A data line that was dropped because its cell count did not match the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number within the input text.
    pub line_number: usize,
    /// Number of cells the header declared.
    pub expected: usize,
    /// Number of cells found on the line.
    pub found: usize,
}

/// Result of parsing a markdown table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedLine>,
}

impl ParsedTable {
    /// True when no data rows were parsed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Header labels with duplicates removed, in first-seen order.
    ///
    /// Records are maps, so a repeated label keeps only its last cell; this is
    /// the key set every record actually has.
    pub fn columns(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.headers.len());
        for header in &self.headers {
            if !seen.contains(&header.as_str()) {
                seen.push(header);
            }
        }
        seen
    }
}

/// Parse a markdown table into records, silently dropping malformed rows.
///
/// Never fails: empty input, a lone header, or a header with only a separator
/// all produce an empty vector.
///
/// ```
/// use cohortboard_markdown::parse_markdown_table;
///
/// let records = parse_markdown_table("| A | B |\n|---|---|\n| 1 | 2 |");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0]["A"], "1");
/// assert_eq!(records[0]["B"], "2");
/// ```
pub fn parse_markdown_table(text: &str) -> Vec<Record> {
    parse_markdown_table_report(text).records
}

/// Parse a markdown table and report which data lines were dropped.
pub fn parse_markdown_table_report(text: &str) -> ParsedTable {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((_, header_line)) = lines.next() else {
        return ParsedTable::default();
    };
    let headers = split_cells(header_line);

    // Separator row, whatever it contains.
    lines.next();

    let mut records = Vec::new();
    let mut skipped = Vec::new();
    for (index, line) in lines {
        let cells = split_cells(line);
        if cells.len() == headers.len() {
            records.push(headers.iter().cloned().zip(cells).collect());
        } else {
            skipped.push(SkippedLine {
                line_number: index + 1,
                expected: headers.len(),
                found: cells.len(),
            });
        }
    }

    ParsedTable {
        headers,
        records,
        skipped,
    }
}

/// Strip outer pipes from a line, split on the rest, and trim each cell.
fn split_cells(line: &str) -> Vec<String> {
    line.trim()
        .trim_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_cells_strips_pipes_and_whitespace() {
        assert_eq!(split_cells("|  a | b  |"), vec!["a", "b"]);
        assert_eq!(split_cells("a|b"), vec!["a", "b"]);
        assert_eq!(split_cells("  ||a|b||  "), vec!["a", "b"]);
    }

    #[test]
    fn test_split_cells_keeps_inner_empty_cells() {
        assert_eq!(split_cells("| a |  | c |"), vec!["a", "", "c"]);
    }

    #[test]
    fn test_skipped_line_numbers_count_blank_lines() {
        let text = "A|B\n---|---\n\n1|2\nx\n";
        let table = parse_markdown_table_report(text);
        assert_eq!(table.records.len(), 1);
        assert_eq!(
            table.skipped,
            vec![SkippedLine {
                line_number: 5,
                expected: 2,
                found: 1,
            }]
        );
    }

    #[test]
    fn test_separator_is_skipped_even_when_it_looks_like_data() {
        let table = parse_markdown_table_report("A|B\n1|2\n3|4");
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0]["A"], "3");
    }

    #[test]
    fn test_columns_deduplicates_headers() {
        let table = parse_markdown_table_report("A|B|A\n-|-|-\n1|2|3");
        assert_eq!(table.columns(), vec!["A", "B"]);
        assert_eq!(table.records[0]["A"], "3");
        assert_eq!(table.records[0].len(), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = parse_markdown_table("| A | B |\r\n|---|---|\r\n| 1 | 2 |\r\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["B"], "2");
    }
}
