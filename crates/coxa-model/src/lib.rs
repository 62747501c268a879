//! Core types for the bilateral hip measurement panel.
//!
//! This crate holds the static parameter definitions, the measurement
//! record, and the classification status vocabulary shared by the
//! classification engine, the export serializer, and the CLI.

pub mod error;
pub mod parameter;
pub mod record;
pub mod status;

pub use error::{ModelError, Result};
pub use parameter::{
    PARAMETER_COUNT, Parameter, ParameterGroup, ParameterKind, ReferenceRange, Side,
};
pub use record::{MeasurementRecord, SideValues, Value};
pub use status::{Status, StatusStyle};
