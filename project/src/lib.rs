//! LENS Group Projector
//!
//! Shape a record's property values into the ordered, grouped form the
//! inspector panel renders: groups sorted by declared order, properties
//! sorted within each group, statically hidden and conditionally invisible
//! properties omitted.
//!
//! Projection is presentation only. An invisible property keeps its value
//! and still participates in validation.

mod projector;

pub use projector::{project, ProjectedProperty, PropertyGroup, GENERAL_GROUP, UNREGISTERED_GROUP_ORDER};
