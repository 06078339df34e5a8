//! LENS Validation
//!
//! Pure validation of a property map against its element schema:
//! - Every rule on every property is evaluated (no short-circuit)
//! - Kind-mismatched rules are a defined no-op
//! - Cross-property checks contribute under the synthetic "cross-property" tag
//! - Failures are captured in the ValidationResult, never thrown
//!
//! `validate` is a pure function of its inputs: validating the same record
//! twice yields the same result.

mod engine;
mod result;

pub use engine::validate;
pub use result::{ValidationError, ValidationResult, ValidationWarning, CROSS_PROPERTY_RULE};
