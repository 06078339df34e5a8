//! LENS Schema
//!
//! Static property schemas for diagram element types:
//! - Property definitions with validation rules and conditional visibility
//! - Business rules (parsed condition + action)
//! - Cross-property checks
//! - The immutable SchemaRegistry and its validating builder
//!
//! Registration happens once at process start; the registry is read-only
//! afterward and safely shared across sessions. Schema-integrity violations
//! (dangling property references, malformed conditions or patterns) are
//! construction-time hard errors, before any diagram is loaded.

mod builder;
mod error;
mod registry;
mod types;

pub use builder::{RegistryBuilder, SchemaBuilder};
pub use error::{SchemaError, SchemaResult};
pub use registry::SchemaRegistry;
pub use types::*;
