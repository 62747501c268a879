use coxa_classify::{classify, classify_all, classify_sides, classify_value};
use coxa_model::{MeasurementRecord, Parameter, Side, Status, Value};
use proptest::prelude::*;

#[test]
fn default_record_statuses() {
    let record = MeasurementRecord::new();
    let statuses = classify_all(&record);
    assert_eq!(statuses.len(), 14);
    for (parameter, sides) in statuses {
        let expected = if parameter.is_flag() {
            Status::Normal
        } else {
            Status::Neutral
        };
        assert_eq!(sides.right, expected, "{parameter}");
        assert_eq!(sides.left, expected, "{parameter}");
    }
}

#[test]
fn classification_reads_the_requested_slot() {
    let mut record = MeasurementRecord::new();
    record
        .set_text(Parameter::Ccd, Side::Left, "125")
        .unwrap();
    record
        .set_flag(Parameter::CrossingSign, Side::Right, true)
        .unwrap();

    assert_eq!(classify(&record, Parameter::Ccd, Side::Left), Status::Normal);
    assert_eq!(
        classify(&record, Parameter::Ccd, Side::Right),
        Status::Neutral
    );

    let crossing = classify_sides(&record, Parameter::CrossingSign);
    assert_eq!(crossing.right, Status::Abnormal);
    assert_eq!(crossing.left, Status::Normal);
    assert_eq!(crossing.out_of_range_count(), 1);
}

fn ranged_parameter() -> impl Strategy<Value = Parameter> {
    prop::sample::select(
        Parameter::ALL
            .iter()
            .copied()
            .filter(|parameter| parameter.reference_range().is_some())
            .collect::<Vec<_>>(),
    )
}

proptest! {
    #[test]
    fn numeric_classification_matches_range_comparison(
        parameter in ranged_parameter(),
        value in -500.0f64..500.0,
    ) {
        let range = parameter.reference_range().unwrap();
        let status = classify_value(parameter, &Value::Text(value.to_string()));
        let expected = if value < range.low {
            Status::Low
        } else if value > range.high {
            Status::High
        } else {
            Status::Normal
        };
        prop_assert_eq!(status, expected);
    }

    #[test]
    fn arbitrary_text_never_panics(parameter in ranged_parameter(), raw in ".*") {
        let _ = classify_value(parameter, &Value::Text(raw));
    }
}
