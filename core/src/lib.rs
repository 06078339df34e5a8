//! LENS Core Types
//!
//! This crate provides the foundational types used throughout the LENS system:
//! - Property kinds (the recognized value shapes a schema author can use)
//! - Value types (the Value enum with all scalar and structured variants)
//! - Per-kind zero values, text coercion, and extension-text encoding
//! - The PropertyMap alias and `props!` construction macro

mod kind;
mod value;

pub use kind::*;
pub use value::*;
