use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

use crate::error::{MarkdownError, Result};
use crate::parse::{ParsedTable, Record};

#[derive(Debug, Clone, Copy)]
pub struct MarkdownOptions {
    /// Minimum number of data rows a table needs to be kept.
    pub min_table_rows: usize,
    /// Minimum number of header cells a table needs to be kept.
    pub min_table_cols: usize,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            min_table_rows: 1,
            min_table_cols: 2,
        }
    }
}

/// Find every GFM table in a markdown document, wherever it appears.
pub fn extract_tables(markdown: &str) -> Result<Vec<ParsedTable>> {
    extract_tables_with_options(markdown, MarkdownOptions::default())
}

/// Find GFM tables with explicit size thresholds.
pub fn extract_tables_with_options(
    markdown: &str,
    options: MarkdownOptions,
) -> Result<Vec<ParsedTable>> {
    let arena = Arena::new();
    let mut comrak_options = ComrakOptions::default();
    comrak_options.extension.table = true;

    let root = parse_document(&arena, markdown, &comrak_options);
    let mut tables = Vec::new();
    collect_tables(root, &mut tables)?;

    let filtered: Vec<ParsedTable> = tables
        .into_iter()
        .filter(|table| {
            table.records.len() >= options.min_table_rows
                && table.headers.len() >= options.min_table_cols
        })
        .collect();

    if filtered.is_empty() {
        Err(MarkdownError::NoTablesFound)
    } else {
        Ok(filtered)
    }
}

fn collect_tables<'a>(node: &'a AstNode<'a>, tables: &mut Vec<ParsedTable>) -> Result<()> {
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Table(_) => {
                tables.push(extract_table(child)?);
            }
            _ => {
                collect_tables(child, tables)?;
            }
        }
    }
    Ok(())
}

/// Body rows are normalized to the header width the way GFM renders them
/// (missing cells empty, extra cells dropped), so extracted tables never
/// report skipped rows.
fn extract_table<'a>(table_node: &'a AstNode<'a>) -> Result<ParsedTable> {
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for child in table_node.children() {
        if let NodeValue::TableRow(is_header) = &child.data.borrow().value {
            if *is_header {
                headers = Some(extract_table_row(child));
            } else {
                rows.push(extract_table_row(child));
            }
        }
    }

    let headers = headers.ok_or(MarkdownError::InvalidTable)?;

    let records = rows
        .into_iter()
        .map(|mut cells| {
            cells.resize(headers.len(), String::new());
            headers.iter().cloned().zip(cells).collect::<Record>()
        })
        .collect();

    Ok(ParsedTable {
        headers,
        records,
        skipped: Vec::new(),
    })
}

fn extract_table_row<'a>(row_node: &'a AstNode<'a>) -> Vec<String> {
    let mut cells = Vec::new();
    for cell in row_node.children() {
        if let NodeValue::TableCell = &cell.data.borrow().value {
            cells.push(extract_text(cell).trim().to_string());
        }
    }
    cells
}

fn extract_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text<'a>(node: &'a AstNode<'a>, output: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => {
            output.push_str(text);
        }
        NodeValue::Code(code) => {
            output.push_str(&code.literal);
        }
        NodeValue::SoftBreak | NodeValue::LineBreak => {
            output.push(' ');
        }
        _ => {
            for child in node.children() {
                collect_text(child, output);
            }
        }
    }
}
