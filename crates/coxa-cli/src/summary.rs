//! Terminal tables for the report and parameter listings.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use coxa_classify::classify_sides;
use coxa_export::display_cell;
use coxa_model::{MeasurementRecord, Parameter, ParameterGroup, Side, Status, StatusStyle};

/// Prints the classified report table for a record.
pub fn print_report(record: &MeasurementRecord) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell(Side::Right.label()),
        header_cell(Side::Left.label()),
        header_cell("Referenzbereich"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);

    let mut out_of_range = 0usize;
    for (parameter, sides) in record.iter() {
        let statuses = classify_sides(record, parameter);
        out_of_range += statuses.out_of_range_count();
        table.add_row(vec![
            Cell::new(parameter.label()).add_attribute(Attribute::Bold),
            value_cell(
                display_cell(parameter, sides.get(Side::Right)),
                statuses.right,
            ),
            value_cell(
                display_cell(parameter, sides.get(Side::Left)),
                statuses.left,
            ),
            reference_cell(parameter.reference_cell()),
        ]);
    }
    println!("{table}");
    if out_of_range > 0 {
        println!("{out_of_range} value(s) outside their reference range");
    }
}

/// Prints the parameter definition listing, grouped like the entry form.
pub fn print_parameters() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Id"),
        header_cell("Label"),
        header_cell("Kind"),
        header_cell("Normal"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for group in ParameterGroup::ALL {
        let mut first = true;
        for parameter in Parameter::ALL
            .iter()
            .filter(|parameter| parameter.group() == group)
        {
            let group_cell = if first {
                Cell::new(group.label())
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold)
            } else {
                dim_cell("")
            };
            first = false;
            table.add_row(vec![
                group_cell,
                Cell::new(parameter.as_str()).add_attribute(Attribute::Bold),
                Cell::new(parameter.label()),
                Cell::new(parameter.kind().as_str()),
                match parameter.range_label() {
                    Some(label) => Cell::new(label),
                    None => dim_cell("-"),
                },
                Cell::new(parameter.description()),
            ]);
        }
    }
    println!("{table}");
}

/// Maps the fixed status style onto terminal colors. The terminal has no
/// amber; low values render yellow.
fn value_cell(text: String, status: Status) -> Cell {
    match status.style() {
        StatusStyle::Green => Cell::new(text).fg(Color::Green),
        StatusStyle::Amber => Cell::new(text).fg(Color::Yellow),
        StatusStyle::Red => Cell::new(text).fg(Color::Red).add_attribute(Attribute::Bold),
        StatusStyle::Gray => Cell::new(text).fg(Color::DarkGrey),
    }
}

fn reference_cell(label: &str) -> Cell {
    if label == "-" {
        dim_cell(label)
    } else {
        Cell::new(label)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
