//! Export serialization for the hip measurement panel.
//!
//! One row-building pass renders the record into an ordered sequence of
//! typed rows; two independent renderers consume that sequence:
//!
//! - **Markup**: a styled HTML table that reproduces a visible grid when
//!   pasted into a rich-text consumer (word processors pick this up from
//!   the clipboard's `text/html` representation).
//! - **Plain**: a tab-separated fallback for plain-text-only consumers.
//!
//! Both carry identical cell content in identical order; only the
//! structural markup differs.

mod html;
mod payload;
mod plain;
mod rows;

pub use html::render_markup;
pub use payload::{ExportPayload, serialize};
pub use plain::render_plain;
pub use rows::{ExportRow, display_cell, table_rows};
