//! Store error types.

use thiserror::Error;

/// Errors from property store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A write addressed an element with no live record. Non-fatal: the
    /// element was deselected or removed between the caller's read and its
    /// write.
    #[error("no record for element '{element_id}'")]
    UnknownElement { element_id: String },

    /// A write addressed a property the element's schema does not define.
    #[error("element '{element_id}' has no property '{property_id}'")]
    UnknownProperty {
        element_id: String,
        property_id: String,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
