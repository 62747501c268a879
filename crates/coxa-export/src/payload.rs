//! The clipboard payload: both renderings of one record snapshot.

use anyhow::{Context, Result};

use coxa_model::MeasurementRecord;

use crate::html::render_markup;
use crate::plain::render_plain;
use crate::rows::table_rows;

/// The two interchangeable representations handed to the clipboard sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    /// Styled HTML table (`text/html`).
    pub markup: String,
    /// Tab-separated fallback (`text/plain`).
    pub plain: String,
}

/// Serializes the record into both clipboard representations.
///
/// A single row-building pass feeds both renderers, so the two outputs
/// always carry identical cell content in identical order.
pub fn serialize(record: &MeasurementRecord) -> Result<ExportPayload> {
    let rows = table_rows(record);
    let markup = render_markup(&rows).context("render markup table")?;
    let plain = render_plain(&rows);
    Ok(ExportPayload { markup, plain })
}
