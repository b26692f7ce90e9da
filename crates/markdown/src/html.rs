use cohortboard_core::escape_html;

use crate::parse::ParsedTable;

/// Render a parsed table as an HTML `<table>`.
///
/// The layout follows the usual dataframe export: a blank corner cell, one
/// `<th>` per column, and a zero-based row index as the first cell of each
/// body row. `classes` is appended to the `dataframe` class.
pub fn render_html_table(table: &ParsedTable, classes: &str) -> String {
    let columns = table.columns();
    let class_attr = if classes.trim().is_empty() {
        "dataframe".to_string()
    } else {
        format!("dataframe {}", escape_html(classes.trim()))
    };

    let mut html = format!("<table border=\"1\" class=\"{class_attr}\">\n");
    html.push_str("  <thead>\n    <tr style=\"text-align: right;\">\n      <th></th>\n");
    for column in &columns {
        html.push_str(&format!("      <th>{}</th>\n", escape_html(column)));
    }
    html.push_str("    </tr>\n  </thead>\n  <tbody>\n");

    for (index, record) in table.records.iter().enumerate() {
        html.push_str(&format!("    <tr>\n      <th>{index}</th>\n"));
        for column in &columns {
            let cell = record.get(*column).map(String::as_str).unwrap_or_default();
            html.push_str(&format!("      <td>{}</td>\n", escape_html(cell)));
        }
        html.push_str("    </tr>\n");
    }

    html.push_str("  </tbody>\n</table>");
    html
}
