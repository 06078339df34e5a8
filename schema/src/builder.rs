//! RegistryBuilder for constructing an immutable SchemaRegistry.
//!
//! `done()` enforces the schema-integrity invariant: every property id
//! referenced by a business rule target or a conditional-visibility clause
//! must exist in the same schema. Violations are hard errors raised before
//! any diagram is loaded.

use crate::error::{SchemaError, SchemaResult};
use crate::registry::SchemaRegistry;
use crate::types::{
    BusinessRule, CrossPropertyCheck, ElementPropertySchema, GroupDef, PropertyDefinition,
};
use std::collections::{HashMap, HashSet};

/// Builder for constructing an immutable SchemaRegistry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Schemas registered so far.
    schemas: HashMap<String, ElementPropertySchema>,
    /// Element types in registration order.
    element_types: Vec<String>,
    /// Groups registered so far.
    groups: HashMap<String, GroupDef>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a schema for an element type.
    pub fn add_schema(&mut self, element_type: impl Into<String>) -> SchemaBuilder<'_> {
        SchemaBuilder {
            builder: self,
            element_type: element_type.into(),
            properties: Vec::new(),
            rules: Vec::new(),
            cross_checks: Vec::new(),
        }
    }

    /// Register a presentation group.
    pub fn add_group(&mut self, group: GroupDef) -> SchemaResult<()> {
        if self.groups.contains_key(&group.id) {
            return Err(SchemaError::DuplicateGroup(group.id));
        }
        self.groups.insert(group.id.clone(), group);
        Ok(())
    }

    /// Build the immutable SchemaRegistry.
    pub fn build(self) -> SchemaResult<SchemaRegistry> {
        Ok(SchemaRegistry::new(
            self.schemas,
            self.element_types,
            self.groups,
        ))
    }
}

/// Builder for one element type's schema.
pub struct SchemaBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    element_type: String,
    properties: Vec<PropertyDefinition>,
    rules: Vec<BusinessRule>,
    cross_checks: Vec<CrossPropertyCheck>,
}

impl<'a> SchemaBuilder<'a> {
    /// Add a property definition.
    pub fn property(mut self, definition: PropertyDefinition) -> Self {
        self.properties.push(definition);
        self
    }

    /// Add a business rule.
    pub fn rule(mut self, rule: BusinessRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add a cross-property check.
    pub fn cross_check(mut self, check: CrossPropertyCheck) -> Self {
        self.cross_checks.push(check);
        self
    }

    /// Finish building this schema, validating its integrity.
    pub fn done(self) -> SchemaResult<()> {
        if self.builder.schemas.contains_key(&self.element_type) {
            return Err(SchemaError::DuplicateElementType(self.element_type));
        }

        // Property ids must be unique within the schema
        let mut seen: HashSet<&str> = HashSet::new();
        for def in &self.properties {
            if !seen.insert(&def.id) {
                return Err(SchemaError::DuplicatePropertyId {
                    element_type: self.element_type,
                    property_id: def.id.clone(),
                });
            }
        }

        // Conditional visibility must reference a defined property
        for def in &self.properties {
            if let Some(conditional) = &def.conditional {
                if !seen.contains(conditional.depends_on.as_str()) {
                    return Err(SchemaError::UnknownDependsOn {
                        property: def.id.clone(),
                        depends_on: conditional.depends_on.clone(),
                    });
                }
            }
        }

        // Rule targets must reference a defined property
        for rule in &self.rules {
            if let Some(target) = &rule.target {
                if !seen.contains(target.as_str()) {
                    return Err(SchemaError::UnknownRuleTarget {
                        rule: rule.id.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        let schema = ElementPropertySchema {
            element_type: self.element_type.clone(),
            properties: self.properties,
            rules: self.rules,
            cross_checks: self.cross_checks,
        };

        self.builder.element_types.push(self.element_type.clone());
        self.builder.schemas.insert(self.element_type, schema);
        Ok(())
    }
}
