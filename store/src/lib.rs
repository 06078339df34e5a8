//! LENS Property Store
//!
//! Per-session state for live diagram elements:
//! - One ElementPropertiesRecord per selected-at-least-once element
//! - Record creation with a per-property initial value precedence chain
//! - Re-validation and rule evaluation on every write
//! - Change subscriptions receiving a full snapshot per mutation
//!
//! One store per diagram session. The store holds no locks; callers
//! serialize access the same way they serialize diagram edits.

mod error;
mod record;
mod store;

pub use error::{StoreError, StoreResult};
pub use record::ElementPropertiesRecord;
pub use store::{PropertyStore, SelectOutcome, SubscriptionId, SuppliedValues};
