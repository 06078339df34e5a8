//! LENS Business Rules
//!
//! Evaluate declarative condition-action rules against a record:
//! - Build the evaluation scope from property values and context fields
//! - Emit a RuleExecutionResult per rule (triggered, passed, or failed)
//! - Capture evaluation failures as diagnostics, never as panics or errors
//! - Fold `validate`-action results into a ValidationResult
//!
//! Rules fire fresh on every relevant change; results are never persisted.

mod context;
mod engine;
mod result;

pub use context::RuleContext;
pub use engine::{fold_into, RuleEngine};
pub use result::RuleExecutionResult;

/// Maximum passes of the default-application feedback loop. A `default`
/// action mutates the record, which can retrigger rules; the store stops
/// re-running after this many passes.
pub const MAX_RULE_PASSES: usize = 8;
