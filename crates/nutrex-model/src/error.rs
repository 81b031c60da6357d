//! Error types for the Nutrex data model

use thiserror::Error;

/// Result type alias using the model's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Validation and serialization errors raised at construction or update time.
///
/// All variants are local, synchronous, and non-retryable: a record either
/// validates fully or is rejected whole. Recovery (re-prompting the
/// generator, dropping a sub-record, aborting the extraction) is the
/// caller's decision.
#[derive(Error, Debug)]
pub enum Error {
    /// A text span does not match the `start:end` digit pair format
    #[error("malformed span {value:?}: expected \"start:end\" with numeric offsets")]
    MalformedSpan { value: String },

    /// A draft record carries a field the target type does not declare
    #[error("unknown field {field:?} for {type_name}")]
    UnknownField {
        type_name: &'static str,
        field: String,
    },

    /// A draft record omits a field the target type requires
    #[error("missing required field {field:?} for {type_name}")]
    MissingRequiredField {
        type_name: &'static str,
        field: &'static str,
    },

    /// An identifier was rejected by a pluggable vocabulary validator
    #[error("identifier {value:?} is not part of the controlled vocabulary")]
    InvalidIdentifier { value: String },

    /// A draft record is not a JSON object at all
    #[error("{type_name} draft must be a JSON object")]
    NotAnObject { type_name: &'static str },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
