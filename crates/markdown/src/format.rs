use crate::parse::Record;

/// Format records as a pipe-delimited markdown table.
///
/// Cells missing from a record are written empty. Returns an empty string
/// when there are no headers.
pub fn format_markdown_table<S: AsRef<str>>(headers: &[S], records: &[Record]) -> String {
    if headers.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(format_row(headers.iter().map(|h| h.as_ref())));
    lines.push(format_row(headers.iter().map(|_| "---")));

    for record in records {
        lines.push(format_row(headers.iter().map(|header| {
            record
                .get(header.as_ref())
                .map(String::as_str)
                .unwrap_or_default()
        })));
    }

    lines.join("\n")
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let mut row = String::from("|");
    for cell in cells {
        row.push(' ');
        row.push_str(cell);
        row.push_str(" |");
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_format_simple_table() {
        let md = format_markdown_table(&["A", "B"], &[record(&[("A", "1"), ("B", "2")])]);
        assert_eq!(md, "| A | B |\n| --- | --- |\n| 1 | 2 |");
    }

    #[test]
    fn test_format_missing_cell_is_empty() {
        let md = format_markdown_table(&["A", "B"], &[record(&[("A", "1")])]);
        assert_eq!(md.lines().nth(2), Some("| 1 |  |"));
    }

    #[test]
    fn test_format_no_headers() {
        let headers: [&str; 0] = [];
        assert_eq!(format_markdown_table(&headers, &[]), "");
    }
}
