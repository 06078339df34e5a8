//! The per-element property record.

use lens_core::{PropertyMap, Value};
use lens_rule::RuleExecutionResult;
use lens_validate::ValidationResult;

/// Runtime property state for one live diagram element.
///
/// Created on first selection, owned exclusively by the store, and dropped
/// when the element is removed or the session's store is cleared. Carries
/// every property the element's schema defines - there are no missing keys.
#[derive(Debug, Clone)]
pub struct ElementPropertiesRecord {
    /// Diagram element id.
    pub element_id: String,
    /// Element type tag the schema was resolved by.
    pub element_type: String,
    /// Current values, one entry per schema property.
    pub properties: PropertyMap,
    /// Result of the latest validation run. None only before the first run.
    pub validation: Option<ValidationResult>,
    /// Results of the latest rule evaluation, one per schema rule.
    pub rule_results: Vec<RuleExecutionResult>,
    /// Wall-clock milliseconds of the last write (or creation).
    pub last_modified_ms: u64,
    /// Presentation advice: the element should not be edited.
    pub readonly: bool,
}

impl ElementPropertiesRecord {
    pub(crate) fn new(
        element_id: impl Into<String>,
        element_type: impl Into<String>,
        properties: PropertyMap,
        created_ms: u64,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            element_type: element_type.into(),
            properties,
            validation: None,
            rule_results: Vec::new(),
            last_modified_ms: created_ms,
            readonly: false,
        }
    }

    /// Current value of a property.
    pub fn get(&self, property_id: &str) -> Option<&Value> {
        self.properties.get(property_id)
    }

    /// True when the latest validation run found no errors. A record that
    /// has not been validated yet counts as valid.
    pub fn is_valid(&self) -> bool {
        self.validation.as_ref().map_or(true, |v| v.is_valid())
    }
}
