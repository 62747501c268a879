//! The measurement record: one raw value per parameter per side.
//!
//! The record is created with every parameter present at its default
//! state and mutated slot-by-slot; it is never partially reconstructed.
//! Slots are indexed by the [`Parameter`] discriminant, so the "every
//! parameter present, no extra keys" invariant holds by construction.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ModelError, Result};
use crate::parameter::{PARAMETER_COUNT, Parameter, ParameterKind, Side};

/// Raw value of one measurement slot.
///
/// Flag parameters hold a boolean (unset defaults to `false`); all other
/// kinds hold the field text verbatim, which may be empty, a decimal
/// number, or a provisional note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Flag(bool),
    Text(String),
}

impl Value {
    /// Default value for a slot of the given kind.
    pub fn default_for(kind: ParameterKind) -> Self {
        match kind {
            ParameterKind::Flag => Value::Flag(false),
            _ => Value::Text(String::new()),
        }
    }

    /// Returns true when the slot carries data: a raised flag or
    /// non-empty text.
    pub fn is_set(&self) -> bool {
        match self {
            Value::Flag(flag) => *flag,
            Value::Text(text) => !text.is_empty(),
        }
    }

    /// Returns the flag state, if this is a flag value.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Value::Flag(flag) => Some(*flag),
            Value::Text(_) => None,
        }
    }

    /// Returns the raw text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Flag(_) => None,
            Value::Text(text) => Some(text.as_str()),
        }
    }
}

/// The right/left value pair of one parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideValues {
    pub right: Value,
    pub left: Value,
}

impl SideValues {
    fn default_for(kind: ParameterKind) -> Self {
        Self {
            right: Value::default_for(kind),
            left: Value::default_for(kind),
        }
    }

    /// Returns the value for one side.
    pub fn get(&self, side: Side) -> &Value {
        match side {
            Side::Right => &self.right,
            Side::Left => &self.left,
        }
    }

    fn set(&mut self, side: Side, value: Value) {
        match side {
            Side::Right => self.right = value,
            Side::Left => self.left = value,
        }
    }
}

/// Bilateral measurement record over the full parameter panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct MeasurementRecord {
    slots: [SideValues; PARAMETER_COUNT],
}

impl Default for MeasurementRecord {
    fn default() -> Self {
        Self {
            slots: Parameter::ALL.map(|parameter| SideValues::default_for(parameter.kind())),
        }
    }
}

impl MeasurementRecord {
    /// Creates a record with every slot at its default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the right/left pair of a parameter.
    pub fn sides(&self, parameter: Parameter) -> &SideValues {
        &self.slots[parameter as usize]
    }

    /// Returns the raw value of one slot.
    pub fn value(&self, parameter: Parameter, side: Side) -> &Value {
        self.sides(parameter).get(side)
    }

    /// Writes one slot, rejecting values of the wrong kind for the
    /// parameter.
    pub fn set(&mut self, parameter: Parameter, side: Side, value: Value) -> Result<()> {
        let expects_flag = parameter.kind() == ParameterKind::Flag;
        match (&value, expects_flag) {
            (Value::Flag(_), false) => {
                return Err(ModelError::KindMismatch {
                    parameter,
                    expected: "text",
                });
            }
            (Value::Text(_), true) => {
                return Err(ModelError::KindMismatch {
                    parameter,
                    expected: "flag",
                });
            }
            _ => {}
        }
        self.slots[parameter as usize].set(side, value);
        Ok(())
    }

    /// Writes a flag slot.
    pub fn set_flag(&mut self, parameter: Parameter, side: Side, flag: bool) -> Result<()> {
        self.set(parameter, side, Value::Flag(flag))
    }

    /// Writes a text slot.
    pub fn set_text(
        &mut self,
        parameter: Parameter,
        side: Side,
        text: impl Into<String>,
    ) -> Result<()> {
        self.set(parameter, side, Value::Text(text.into()))
    }

    /// Iterates all parameters in export order with their value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, &SideValues)> {
        Parameter::ALL
            .iter()
            .map(move |&parameter| (parameter, self.sides(parameter)))
    }

    /// Number of slots carrying data (raised flags or non-empty text).
    pub fn filled_slots(&self) -> usize {
        self.iter()
            .flat_map(|(_, sides)| Side::ALL.iter().map(move |&side| sides.get(side)))
            .filter(|value| value.is_set())
            .count()
    }
}

impl Serialize for MeasurementRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PARAMETER_COUNT))?;
        for parameter in Parameter::ALL {
            map.serialize_entry(parameter.as_str(), self.sides(parameter))?;
        }
        map.end()
    }
}

/// Wire shape of a record: parameter id to a partial side pair. Missing
/// parameters and sides keep their defaults.
#[derive(Deserialize)]
#[serde(transparent)]
struct RawRecord(BTreeMap<String, RawSides>);

#[derive(Deserialize)]
struct RawSides {
    #[serde(default)]
    right: Option<Value>,
    #[serde(default)]
    left: Option<Value>,
}

impl TryFrom<RawRecord> for MeasurementRecord {
    type Error = ModelError;

    fn try_from(raw: RawRecord) -> Result<Self> {
        let mut record = MeasurementRecord::default();
        for (id, sides) in raw.0 {
            let parameter: Parameter = id.parse()?;
            if let Some(value) = sides.right {
                record.set(parameter, Side::Right, value)?;
            }
            if let Some(value) = sides.left {
                record.set(parameter, Side::Left, value)?;
            }
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_parameter_kind() {
        let record = MeasurementRecord::new();
        assert_eq!(
            record.value(Parameter::Mri, Side::Right),
            &Value::Flag(false)
        );
        assert_eq!(
            record.value(Parameter::Ccd, Side::Left),
            &Value::Text(String::new())
        );
        assert_eq!(record.filled_slots(), 0);
    }

    #[test]
    fn set_and_read_back() {
        let mut record = MeasurementRecord::new();
        record
            .set_text(Parameter::FemoralTorsion, Side::Right, "30")
            .unwrap();
        record
            .set_flag(Parameter::CrossingSign, Side::Left, true)
            .unwrap();
        assert_eq!(
            record.value(Parameter::FemoralTorsion, Side::Right),
            &Value::Text("30".to_string())
        );
        assert_eq!(
            record.value(Parameter::CrossingSign, Side::Left),
            &Value::Flag(true)
        );
        assert_eq!(record.filled_slots(), 2);
    }

    #[test]
    fn set_rejects_kind_mismatch() {
        let mut record = MeasurementRecord::new();
        let err = record
            .set_flag(Parameter::Ccd, Side::Right, true)
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::KindMismatch {
                parameter: Parameter::Ccd,
                expected: "text",
            }
        );
        let err = record
            .set_text(Parameter::Mri, Side::Right, "yes")
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::KindMismatch {
                parameter: Parameter::Mri,
                expected: "flag",
            }
        );
    }

    #[test]
    fn value_accessors() {
        let flag = Value::Flag(true);
        assert_eq!(flag.as_flag(), Some(true));
        assert_eq!(flag.as_text(), None);

        let text = Value::Text("125".to_string());
        assert_eq!(text.as_text(), Some("125"));
        assert_eq!(text.as_flag(), None);

        assert!(!Value::Flag(false).is_set());
        assert!(!Value::Text(String::new()).is_set());
        assert!(text.is_set());
    }

    #[test]
    fn iter_covers_panel_in_export_order() {
        let record = MeasurementRecord::new();
        let order: Vec<Parameter> = record.iter().map(|(parameter, _)| parameter).collect();
        assert_eq!(order, Parameter::ALL.to_vec());
    }
}
