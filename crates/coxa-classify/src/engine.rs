//! Classification rules.

use std::collections::BTreeMap;

use coxa_model::{MeasurementRecord, Parameter, Side, Status, Value};

/// Classifies one slot of the record.
pub fn classify(record: &MeasurementRecord, parameter: Parameter, side: Side) -> Status {
    classify_value(parameter, record.value(parameter, side))
}

/// Classifies a raw value against a parameter's norm.
///
/// Rules, in order:
/// - flag values: raised is `Abnormal`, cleared is `Normal` (in this
///   domain the positive sign is always the clinically abnormal state);
/// - blank text is `Neutral`;
/// - text on a parameter without a declared range is `Neutral`;
/// - otherwise the text is parsed as a number and compared against the
///   range; unparseable text is `Neutral`, never an error.
pub fn classify_value(parameter: Parameter, value: &Value) -> Status {
    match value {
        Value::Flag(true) => Status::Abnormal,
        Value::Flag(false) => Status::Normal,
        Value::Text(raw) => classify_text(parameter, raw),
    }
}

/// Classifies both sides of one parameter.
pub fn classify_sides(record: &MeasurementRecord, parameter: Parameter) -> SideStatus {
    SideStatus {
        right: classify(record, parameter, Side::Right),
        left: classify(record, parameter, Side::Left),
    }
}

/// Classifies the whole record, keyed by parameter in export order.
pub fn classify_all(record: &MeasurementRecord) -> BTreeMap<Parameter, SideStatus> {
    Parameter::ALL
        .iter()
        .map(|&parameter| (parameter, classify_sides(record, parameter)))
        .collect()
}

/// Right/left status pair of one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideStatus {
    pub right: Status,
    pub left: Status,
}

impl SideStatus {
    /// Returns the status for one side.
    pub fn get(&self, side: Side) -> Status {
        match side {
            Side::Right => self.right,
            Side::Left => self.left,
        }
    }

    /// Number of sides deviating from their norm.
    pub fn out_of_range_count(&self) -> usize {
        Side::ALL
            .iter()
            .filter(|&&side| self.get(side).is_out_of_range())
            .count()
    }
}

fn classify_text(parameter: Parameter, raw: &str) -> Status {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Status::Neutral;
    }
    let Some(range) = parameter.reference_range() else {
        return Status::Neutral;
    };
    match parse_measurement(trimmed) {
        Some(value) if value < range.low => Status::Low,
        Some(value) if value > range.high => Status::High,
        Some(_) => Status::Normal,
        None => Status::Neutral,
    }
}

/// Parses a measurement value. Non-finite results count as parse
/// failures: `"NaN"` and `"inf"` are valid `f64` syntax but not
/// measurements, and NaN would slip through every range comparison.
fn parse_measurement(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(raw: &str) -> Value {
        Value::Text(raw.to_string())
    }

    #[test]
    fn range_boundaries_are_inclusive() {
        assert_eq!(
            classify_value(Parameter::Ccd, &text("120")),
            Status::Normal
        );
        assert_eq!(
            classify_value(Parameter::Ccd, &text("135")),
            Status::Normal
        );
        assert_eq!(classify_value(Parameter::Ccd, &text("119.9")), Status::Low);
        assert_eq!(classify_value(Parameter::Ccd, &text("135.1")), Status::High);
    }

    #[test]
    fn femoral_torsion_thirty_is_high() {
        assert_eq!(
            classify_value(Parameter::FemoralTorsion, &text("30")),
            Status::High
        );
    }

    #[test]
    fn blank_and_unparseable_text_is_neutral() {
        assert_eq!(classify_value(Parameter::Ccd, &text("")), Status::Neutral);
        assert_eq!(classify_value(Parameter::Ccd, &text("   ")), Status::Neutral);
        assert_eq!(classify_value(Parameter::Ccd, &text("abc")), Status::Neutral);
        assert_eq!(
            classify_value(Parameter::Ccd, &text("12,5")),
            Status::Neutral
        );
    }

    #[test]
    fn non_finite_parses_are_neutral() {
        assert_eq!(classify_value(Parameter::Ccd, &text("NaN")), Status::Neutral);
        assert_eq!(classify_value(Parameter::Ccd, &text("inf")), Status::Neutral);
        assert_eq!(
            classify_value(Parameter::Ccd, &text("-inf")),
            Status::Neutral
        );
    }

    #[test]
    fn parameters_without_a_range_are_neutral() {
        assert_eq!(
            classify_value(Parameter::LegLength, &text("850")),
            Status::Neutral
        );
    }

    #[test]
    fn flags_follow_the_boolean_norm() {
        assert_eq!(
            classify_value(Parameter::CrossingSign, &Value::Flag(true)),
            Status::Abnormal
        );
        assert_eq!(
            classify_value(Parameter::CrossingSign, &Value::Flag(false)),
            Status::Normal
        );
    }

    #[test]
    fn alpha_flags_negative_values_as_low() {
        // Declared range is {0, 60} even though the label reads "<60°".
        assert_eq!(classify_value(Parameter::Alpha, &text("-5")), Status::Low);
        assert_eq!(classify_value(Parameter::Alpha, &text("0")), Status::Normal);
        assert_eq!(classify_value(Parameter::Alpha, &text("61")), Status::High);
    }

    #[test]
    fn retroversion_index_only_zero_is_normal() {
        assert_eq!(
            classify_value(Parameter::RetroversionIndex, &text("0")),
            Status::Normal
        );
        assert_eq!(
            classify_value(Parameter::RetroversionIndex, &text("5")),
            Status::High
        );
    }
}
