//! The SchemaRegistry - immutable schema lookup.

use crate::{ElementPropertySchema, GroupDef};
use std::collections::HashMap;

/// Runtime lookup of element property schemas and presentation groups.
/// Immutable after construction; safely shared across sessions.
#[derive(Debug)]
pub struct SchemaRegistry {
    /// Schemas keyed by element type tag.
    schemas: HashMap<String, ElementPropertySchema>,
    /// Element type tags in registration order.
    element_types: Vec<String>,
    /// Group definitions keyed by group id.
    groups: HashMap<String, GroupDef>,
}

impl SchemaRegistry {
    /// Create a registry (use RegistryBuilder for construction).
    pub(crate) fn new(
        schemas: HashMap<String, ElementPropertySchema>,
        element_types: Vec<String>,
        groups: HashMap<String, GroupDef>,
    ) -> Self {
        Self {
            schemas,
            element_types,
            groups,
        }
    }

    /// Get the schema for an element type.
    ///
    /// Unknown types return None - callers treat a missing schema as
    /// "no properties to show", not a fatal condition.
    pub fn get_schema(&self, element_type: &str) -> Option<&ElementPropertySchema> {
        self.schemas.get(element_type)
    }

    /// All registered element type tags, in registration order.
    pub fn list_element_types(&self) -> impl Iterator<Item = &str> {
        self.element_types.iter().map(|s| s.as_str())
    }

    /// Get a group definition by id.
    pub fn get_group(&self, id: &str) -> Option<&GroupDef> {
        self.groups.get(id)
    }

    /// The number of registered schemas.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// The number of registered groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
