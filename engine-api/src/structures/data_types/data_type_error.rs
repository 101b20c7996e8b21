use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataTypeError {
    #[error("{0}")]
    ParseError(String),

    #[error("unsupported operation '{operation}' for data type '{data_type_id}'")]
    UnsupportedOperation { data_type_id: String, operation: String },

    #[error("value type mismatch: expected '{expected}', got '{actual}'")]
    TypeMismatch { expected: String, actual: String },
}
