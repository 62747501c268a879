use thiserror::Error;

use crate::parameter::Parameter;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),
    #[error("parameter {parameter} expects a {expected} value")]
    KindMismatch {
        parameter: Parameter,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
