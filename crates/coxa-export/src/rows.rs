//! Row building: one pass over the record in the fixed export order.

use coxa_model::{MeasurementRecord, Parameter, ParameterKind, Side, Value};

/// One row of the export table.
///
/// The header row and the fourteen parameter rows share this shape; the
/// renderers only differ in how they wrap the cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub parameter: String,
    pub right: String,
    pub left: String,
    pub reference: String,
}

impl ExportRow {
    /// Cells in column order.
    pub fn cells(&self) -> [&str; 4] {
        [&self.parameter, &self.right, &self.left, &self.reference]
    }
}

/// Builds the full export table: the header row followed by one row per
/// parameter in the fixed export order. Always 15 rows, regardless of
/// record content.
pub fn table_rows(record: &MeasurementRecord) -> Vec<ExportRow> {
    let mut rows = Vec::with_capacity(Parameter::ALL.len() + 1);
    rows.push(header_row());
    for (parameter, sides) in record.iter() {
        rows.push(ExportRow {
            parameter: parameter.label().to_string(),
            right: display_cell(parameter, sides.get(Side::Right)),
            left: display_cell(parameter, sides.get(Side::Left)),
            reference: parameter.reference_cell().to_string(),
        });
    }
    rows
}

/// Renders one display cell.
///
/// - flag values: `Ja` / `Nein`;
/// - non-empty text: the raw value with the kind's unit glyph appended;
/// - empty text: `N/A` for the free-text kind, `-` otherwise. The two
///   placeholders are distinct on purpose and must stay that way.
pub fn display_cell(parameter: Parameter, value: &Value) -> String {
    match value {
        Value::Flag(flag) => flag_cell(*flag).to_string(),
        Value::Text(raw) if raw.is_empty() => empty_placeholder(parameter.kind()).to_string(),
        Value::Text(raw) => match parameter.kind().unit() {
            Some(unit) => format!("{raw}{unit}"),
            None => raw.clone(),
        },
    }
}

fn header_row() -> ExportRow {
    ExportRow {
        parameter: "Parameter".to_string(),
        right: Side::Right.label().to_string(),
        left: Side::Left.label().to_string(),
        reference: "Referenzbereich".to_string(),
    }
}

fn flag_cell(flag: bool) -> &'static str {
    if flag { "Ja" } else { "Nein" }
}

fn empty_placeholder(kind: ParameterKind) -> &'static str {
    match kind {
        ParameterKind::Text => "N/A",
        _ => "-",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_cells_carry_the_unit_glyph() {
        let cell = display_cell(Parameter::FemoralTorsion, &Value::Text("30".to_string()));
        assert_eq!(cell, "30°");
        let cell = display_cell(
            Parameter::RetroversionIndex,
            &Value::Text("15".to_string()),
        );
        assert_eq!(cell, "15%");
    }

    #[test]
    fn empty_cells_use_the_kind_placeholder() {
        let cell = display_cell(Parameter::Ccd, &Value::Text(String::new()));
        assert_eq!(cell, "-");
        // Leg length alone uses N/A, not the dash.
        let cell = display_cell(Parameter::LegLength, &Value::Text(String::new()));
        assert_eq!(cell, "N/A");
    }

    #[test]
    fn leg_length_text_is_verbatim() {
        let cell = display_cell(Parameter::LegLength, &Value::Text("+1cm links".to_string()));
        assert_eq!(cell, "+1cm links");
    }

    #[test]
    fn flag_cells_are_localized() {
        assert_eq!(display_cell(Parameter::Mri, &Value::Flag(true)), "Ja");
        assert_eq!(display_cell(Parameter::Mri, &Value::Flag(false)), "Nein");
    }

    #[test]
    fn header_row_labels() {
        let rows = table_rows(&MeasurementRecord::new());
        assert_eq!(
            rows[0].cells(),
            ["Parameter", "Rechts", "Links", "Referenzbereich"]
        );
    }
}
