//! Shared fixtures for the LENS integration scenarios.
//!
//! `process_registry` builds the schema set the scenarios run against: a
//! UserTask schema with an assignment cross-check and a ServiceTask schema
//! with the java-class business rule. The diagram doubles stand in for the
//! collaborator on the other side of the session boundary.

use lens_core::{PropertyKind, Value};
use lens_schema::{
    BusinessRule, CrossPropertyCheck, CrossPropertyIssue, GroupDef, PropertyDefinition,
    RegistryBuilder, RuleAction, SchemaRegistry, ValidationRule,
};
use lens_session::{DiagramPort, ElementRef};
use std::collections::HashMap;

/// Build the scenario registry.
pub fn process_registry() -> SchemaRegistry {
    let mut builder = RegistryBuilder::new();

    builder
        .add_group(GroupDef::new("general", "General", 0))
        .unwrap();
    builder
        .add_group(GroupDef::new("assignment", "Assignment", 10).with_icon("user"))
        .unwrap();
    builder
        .add_group(GroupDef::new("implementation", "Implementation", 20))
        .unwrap();

    builder
        .add_schema("UserTask")
        .property(
            PropertyDefinition::new("id", "ID", PropertyKind::ShortText)
                .rule(ValidationRule::required("Id is required"))
                .rule(
                    ValidationRule::pattern(
                        "^[a-zA-Z][a-zA-Z0-9_-]*$",
                        "Id must start with a letter",
                    )
                    .unwrap(),
                )
                .with_order(1),
        )
        .property(
            PropertyDefinition::new("name", "Name", PropertyKind::ShortText)
                .rule(ValidationRule::required("Name is required"))
                .with_order(2),
        )
        .property(
            PropertyDefinition::new("assignee", "Assignee", PropertyKind::ShortText)
                .in_group("assignment"),
        )
        .property(
            PropertyDefinition::new("candidateGroups", "Candidate groups", PropertyKind::MultiChoice)
                .in_group("assignment"),
        )
        .property(
            PropertyDefinition::new("priority", "Priority", PropertyKind::SingleChoice)
                .with_default(Value::Text("medium".into())),
        )
        .property(PropertyDefinition::new(
            "dueDate",
            "Due date",
            PropertyKind::DateTime,
        ))
        .cross_check(CrossPropertyCheck::new("assignment", |props| {
            let assigned = ["assignee", "candidateGroups"]
                .iter()
                .any(|id| props.get(*id).map(|v| !v.is_absent()).unwrap_or(false));
            if assigned {
                Vec::new()
            } else {
                vec![CrossPropertyIssue::warning(
                    "assignee",
                    "Task has no assignee or candidate groups",
                )
                .with_suggestion("Assign the task or name candidate groups")]
            }
        }))
        .done()
        .unwrap();

    builder
        .add_schema("ServiceTask")
        .property(
            PropertyDefinition::new("id", "ID", PropertyKind::ShortText)
                .rule(ValidationRule::required("Id is required")),
        )
        .property(
            PropertyDefinition::new("implementation", "Implementation", PropertyKind::SingleChoice)
                .with_default(Value::Text("external".into()))
                .in_group("implementation"),
        )
        .property(
            PropertyDefinition::new("javaClass", "Java class", PropertyKind::ShortText)
                .visible_when("implementation", vec![Value::Text("java".into())])
                .in_group("implementation"),
        )
        .property(
            PropertyDefinition::new("retries", "Retries", PropertyKind::Number)
                .with_default(Value::Number(3.0))
                .rule(ValidationRule::min(0.0, "Retries must not be negative"))
                .rule(ValidationRule::max(10.0, "At most 10 retries"))
                .in_group("error-handling"),
        )
        .rule(
            BusinessRule::new(
                "java-class-required",
                "Java implementation needs a configured class",
                "implementation === 'java' && !javaClass",
                RuleAction::Validate,
            )
            .unwrap()
            .with_target("javaClass")
            .with_message("Java class must be configured"),
        )
        .done()
        .unwrap();

    builder.build().unwrap()
}

/// Element double with canned native attributes.
pub struct FakeElement {
    id: String,
    element_type: String,
    native: HashMap<String, Value>,
}

impl FakeElement {
    pub fn new(id: &str, element_type: &str) -> Self {
        Self {
            id: id.into(),
            element_type: element_type.into(),
            native: HashMap::new(),
        }
    }

    pub fn with_native(mut self, name: &str, value: Value) -> Self {
        self.native.insert(name.into(), value);
        self
    }
}

impl ElementRef for FakeElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn element_type(&self) -> &str {
        &self.element_type
    }

    fn native_attribute(&self, name: &str) -> Option<Value> {
        self.native.get(name).cloned()
    }
}

/// Diagram double: holds persisted extension text and records mirrored
/// writes.
#[derive(Default)]
pub struct FakeDiagram {
    pub extensions: HashMap<(String, String), String>,
    pub writes: Vec<(String, String, Value)>,
}

impl FakeDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extension(mut self, element_id: &str, property_id: &str, text: &str) -> Self {
        self.extensions
            .insert((element_id.into(), property_id.into()), text.into());
        self
    }
}

impl DiagramPort for FakeDiagram {
    fn write_property(&mut self, element: &dyn ElementRef, property_id: &str, value: &Value) {
        self.writes
            .push((element.id().into(), property_id.into(), value.clone()));
    }

    fn read_custom_extension(&self, element: &dyn ElementRef, property_id: &str) -> Option<String> {
        self.extensions
            .get(&(element.id().into(), property_id.into()))
            .cloned()
    }
}
