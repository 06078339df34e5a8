//! Schema construction error types.

use thiserror::Error;

/// Errors that can occur during schema registration.
///
/// All of these are programming-contract violations and surface before any
/// diagram is loaded.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Duplicate element type: {0}")]
    DuplicateElementType(String),

    #[error("Duplicate property id '{property_id}' in schema for {element_type}")]
    DuplicatePropertyId {
        element_type: String,
        property_id: String,
    },

    #[error("Business rule '{rule}' targets unknown property '{target}'")]
    UnknownRuleTarget { rule: String, target: String },

    #[error("Property '{property}' depends on unknown property '{depends_on}'")]
    UnknownDependsOn {
        property: String,
        depends_on: String,
    },

    #[error("Malformed condition in business rule '{rule}': {message}")]
    InvalidCondition { rule: String, message: String },

    #[error("Malformed pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Duplicate group id: {0}")]
    DuplicateGroup(String),
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
