//! Classification engine for the hip measurement panel.
//!
//! Maps raw slot values to a [`coxa_model::Status`] using the parameter's
//! declared reference range or the boolean-norm convention. Pure
//! functions of the record snapshot and the static definitions; every
//! malformed input degrades to `Neutral` rather than an error.

mod engine;

pub use engine::{SideStatus, classify, classify_all, classify_sides, classify_value};
