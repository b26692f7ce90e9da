use cohortboard_markdown::{parse_markdown_table, parse_markdown_table_report};

#[test]
fn markdown_table_single_row() {
    let records = parse_markdown_table("A|B\n-|-\n1|2");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["A"], "1");
    assert_eq!(records[0]["B"], "2");
    assert_eq!(records[0].len(), 2);
}

#[test]
fn markdown_table_drops_short_rows() {
    let table = parse_markdown_table_report("A|B\n-|-\n1|2\nx");
    assert_eq!(table.records.len(), 1);
    assert_eq!(table.records[0]["A"], "1");
    assert_eq!(table.skipped.len(), 1);
    assert_eq!(table.skipped[0].found, 1);
}

#[test]
fn markdown_table_header_and_separator_only() {
    let records = parse_markdown_table("| A | B |\n| --- | --- |\n");
    assert!(records.is_empty());
}

#[test]
fn markdown_table_empty_input() {
    assert!(parse_markdown_table("").is_empty());
    assert!(parse_markdown_table("\n\n   \n").is_empty());
    assert_eq!(parse_markdown_table_report("").headers.len(), 0);
}

#[test]
fn markdown_table_strips_pipes_and_whitespace() {
    let md = "|   Name   |  Qty |\n|---|---|\n|  Apple  |   10   |";
    let records = parse_markdown_table(md);
    assert_eq!(records[0]["Name"], "Apple");
    assert_eq!(records[0]["Qty"], "10");
}

#[test]
fn markdown_table_preserves_header_order() {
    let records = parse_markdown_table("| Week | Goal | Status |\n|-|-|-|\n| 1 | Demo | Achieved |");
    let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Week", "Goal", "Status"]);
}
