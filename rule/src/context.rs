//! Rule evaluation context.

use lens_core::{PropertyMap, Value};

/// Contextual fields available to rule conditions beyond the record's own
/// property values: the element's identity, sibling element data and
/// process-level data.
#[derive(Debug, Clone, Default)]
pub struct RuleContext {
    pub element_id: String,
    pub element_type: String,
    /// Data from sibling elements, keyed by reference name.
    pub sibling_data: PropertyMap,
    /// Process-level data, keyed by reference name.
    pub process_data: PropertyMap,
}

impl RuleContext {
    pub fn new(element_id: impl Into<String>, element_type: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            element_type: element_type.into(),
            sibling_data: PropertyMap::new(),
            process_data: PropertyMap::new(),
        }
    }

    pub fn with_sibling_data(mut self, data: PropertyMap) -> Self {
        self.sibling_data = data;
        self
    }

    pub fn with_process_data(mut self, data: PropertyMap) -> Self {
        self.process_data = data;
        self
    }

    /// Build the evaluation scope: process data, then sibling data, then the
    /// record's property values (which shadow context on name collisions),
    /// then the element identity fields.
    pub fn build_scope(&self, properties: &PropertyMap) -> PropertyMap {
        let mut scope = self.process_data.clone();
        scope.extend(self.sibling_data.clone());
        scope.extend(properties.clone());
        scope.insert(
            "elementId".to_string(),
            Value::Text(self.element_id.clone()),
        );
        scope.insert(
            "elementType".to_string(),
            Value::Text(self.element_type.clone()),
        );
        scope
    }
}
