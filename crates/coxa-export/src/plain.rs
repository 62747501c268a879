//! Plain-text renderer: tab-separated cells, one line per row.

use crate::rows::ExportRow;

/// Renders the export table as tab-separated text.
///
/// Every row is terminated by a newline, including the last; spreadsheet
/// and text consumers treat the trailing newline as end-of-row, not an
/// empty row.
pub fn render_plain(rows: &[ExportRow]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&row.cells().join("\t"));
        out.push('\n');
    }
    out
}
