//! # cohortboard-markdown
//!
//! Turns the markdown tables a language model writes into structured records.
//!
//! The primary entry point is [`parse_markdown_table`], a strict line parser:
//! the first line is the header, the second is skipped as the separator, and
//! every row whose cell count differs from the header is dropped. Because
//! models often wrap the table in prose, [`parse_model_response`] falls back
//! to a full CommonMark/GFM parse when the line parser's result does not look
//! like a table.

pub mod error;
mod format;
mod html;
mod parse;
mod table;

pub use error::{MarkdownError, Result};
pub use format::format_markdown_table;
pub use html::render_html_table;
pub use parse::{parse_markdown_table, parse_markdown_table_report, ParsedTable, Record, SkippedLine};
pub use table::{extract_tables, extract_tables_with_options, MarkdownOptions};

/// Parse a model completion into a table.
///
/// Runs the line parser first and keeps its result when it looks like a real
/// table. Otherwise the text is searched for an embedded GFM table and the
/// first one with data rows is returned. If neither finds anything the
/// line-parser result is returned so callers still see its skipped lines.
///
/// Prose around the table is the usual reason the line parser misfires: an
/// opening sentence becomes a one-column header and a closing sentence its
/// only record.
pub fn parse_model_response(text: &str) -> ParsedTable {
    let strict = parse_markdown_table_report(text);
    if is_plausible(&strict, &MarkdownOptions::default()) {
        return strict;
    }

    match extract_tables(text) {
        Ok(tables) => tables
            .into_iter()
            .find(|table| !table.is_empty())
            .unwrap_or(strict),
        Err(_) => strict,
    }
}

/// A line-parser result is trusted when it has records, is at least as wide
/// as an extracted table must be, and kept no fewer lines than it dropped.
fn is_plausible(table: &ParsedTable, options: &MarkdownOptions) -> bool {
    !table.is_empty()
        && table.headers.len() >= options.min_table_cols
        && table.skipped.len() <= table.records.len()
}
