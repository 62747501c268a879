//! Markup renderer: a word-processor-friendly HTML table.

use std::io::Write;

use anyhow::{Context, Result, anyhow};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::rows::ExportRow;

/// Inline styles keep the grid visible after pasting; rich-text
/// consumers ignore external stylesheets on clipboard content.
const TABLE_ATTRS: [(&str, &str); 4] = [
    ("border", "1"),
    ("cellpadding", "5"),
    ("cellspacing", "0"),
    ("style", "border-collapse: collapse;"),
];
const HEADER_CELL_STYLE: &str =
    "background-color: #f2f2f2; font-weight: bold; padding: 8px; border: 1px solid #ddd;";
const LABEL_CELL_STYLE: &str = "font-weight: bold; padding: 8px; border: 1px solid #ddd;";
const BODY_CELL_STYLE: &str = "padding: 8px; border: 1px solid #ddd;";

/// Renders the export table as a single-line HTML string.
///
/// The first row renders as a shaded bold header; each following row
/// renders its first cell bold. Cell text is escaped on write, so range
/// labels like `<60°` survive the markup intact.
pub fn render_markup(rows: &[ExportRow]) -> Result<String> {
    let (header, body) = rows
        .split_first()
        .ok_or_else(|| anyhow!("export table has no header row"))?;

    let mut writer = Writer::new(Vec::new());
    let mut table = BytesStart::new("table");
    for (name, value) in TABLE_ATTRS {
        table.push_attribute((name, value));
    }
    writer
        .write_event(Event::Start(table))
        .context("write table start")?;

    write_row(&mut writer, header, |_| ("th", HEADER_CELL_STYLE))?;
    for row in body {
        write_row(&mut writer, row, |column| {
            if column == 0 {
                ("td", LABEL_CELL_STYLE)
            } else {
                ("td", BODY_CELL_STYLE)
            }
        })?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("table")))
        .context("write table end")?;
    String::from_utf8(writer.into_inner()).context("markup is not valid utf-8")
}

fn write_row<W: Write>(
    writer: &mut Writer<W>,
    row: &ExportRow,
    cell_style: impl Fn(usize) -> (&'static str, &'static str),
) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new("tr")))
        .context("write row start")?;
    for (column, text) in row.cells().into_iter().enumerate() {
        let (tag, style) = cell_style(column);
        write_styled_cell(writer, tag, style, text)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new("tr")))
        .context("write row end")?;
    Ok(())
}

fn write_styled_cell<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    style: &str,
    text: &str,
) -> Result<()> {
    let mut start = BytesStart::new(tag);
    start.push_attribute(("style", style));
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<ExportRow> {
        vec![
            ExportRow {
                parameter: "Parameter".to_string(),
                right: "Rechts".to_string(),
                left: "Links".to_string(),
                reference: "Referenzbereich".to_string(),
            },
            ExportRow {
                parameter: "Alpha-Winkel".to_string(),
                right: "62°".to_string(),
                left: "-".to_string(),
                reference: "<60°".to_string(),
            },
        ]
    }

    #[test]
    fn table_and_cell_styling() {
        let markup = render_markup(&sample_rows()).unwrap();
        assert!(markup.starts_with(
            "<table border=\"1\" cellpadding=\"5\" cellspacing=\"0\" \
             style=\"border-collapse: collapse;\">"
        ));
        assert!(markup.contains(&format!("<th style=\"{HEADER_CELL_STYLE}\">Parameter</th>")));
        assert!(markup.contains(&format!("<td style=\"{LABEL_CELL_STYLE}\">Alpha-Winkel</td>")));
        assert!(markup.contains(&format!("<td style=\"{BODY_CELL_STYLE}\">62°</td>")));
        assert!(markup.ends_with("</table>"));
    }

    #[test]
    fn reference_label_is_escaped() {
        let markup = render_markup(&sample_rows()).unwrap();
        assert!(markup.contains("&lt;60°"));
        assert!(!markup.contains("><60°"));
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(render_markup(&[]).is_err());
    }
}
