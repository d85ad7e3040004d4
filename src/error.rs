use thiserror::Error;

/// Failures raised by a value store or printer.
///
/// These are "raw" in the sense that checks pass them through unmodified;
/// they are never re-wrapped into one of the [`ValidationError`] kinds.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("key {key} not found")]
    KeyNotFound { key: String },
    #[error("key {key} holds a {actual}, not a {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("no printer registered for {data_type}")]
    UnsupportedType { data_type: &'static str },
}

/// Failures raised by checks and the controller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("parameter {parameter} is missing")]
    MissingParameter { parameter: String },
    #[error("parameter {parameter} is out of range")]
    OutOfRange { parameter: String },
    #[error("parameter {parameter} was never declared")]
    UnknownParameter { parameter: String },
    // store failures cross the validation boundary as-is
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
