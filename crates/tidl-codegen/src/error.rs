//! Codegen error types.

use thiserror::Error;

/// Errors that can occur while emitting code for a program.
///
/// All of them are fatal: the first one aborts the generation run.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A type has no rendering in the target language.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// A constant literal's form does not fit its declared type.
    #[error("constant shape mismatch: expected {expected} literal, found {found}")]
    ConstantShape {
        expected: String,
        found: &'static str,
    },

    /// A struct literal names a field the struct does not declare.
    #[error("type error: {record} has no field {field}")]
    UnknownField { record: String, field: String },

    /// Writing to an output stream failed.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Codegen result type alias.
pub type CodegenResult<T> = Result<T, CodegenError>;
