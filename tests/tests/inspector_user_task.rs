//! End-to-end UserTask inspection: selection fills every property,
//! validation accumulates and stays idempotent, the assignment
//! cross-check warns until someone owns the task.

use lens_core::Value;
use lens_session::InspectorSession;
use lens_store::SelectOutcome;
use lens_tests::{process_registry, FakeDiagram, FakeElement};

#[test]
fn test_selection_populates_every_schema_property() {
    // GIVEN a fresh session and a bare UserTask
    let registry = process_registry();
    let mut session = InspectorSession::new(&registry, FakeDiagram::new());
    let element = FakeElement::new("Task_1", "UserTask");

    // WHEN selected
    let outcome = session.element_selected(&element);

    // THEN a record exists with a value for every defined property
    assert_eq!(outcome, SelectOutcome::Selected { created: true });
    let record = session.selected_record().unwrap();
    let schema = registry.get_schema("UserTask").unwrap();
    for id in schema.property_ids() {
        assert!(record.get(id).is_some(), "property '{}' missing", id);
    }
    assert_eq!(record.get("priority"), Some(&Value::Text("medium".into())));
}

#[test]
fn test_validation_accumulates_and_warns_about_assignment() {
    // GIVEN a freshly selected UserTask with empty id and name
    let registry = process_registry();
    let mut session = InspectorSession::new(&registry, FakeDiagram::new());
    let element = FakeElement::new("Task_1", "UserTask");
    session.element_selected(&element);

    // THEN both required rules report, plus the assignment warning
    let record = session.selected_record().unwrap();
    let validation = record.validation.as_ref().unwrap();
    assert!(!validation.is_valid());
    assert_eq!(validation.errors_for("id").count(), 1);
    assert_eq!(validation.errors_for("name").count(), 1);

    let warnings: Vec<_> = validation.warnings_for("assignee").collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].suggestion.is_some());
}

#[test]
fn test_fixing_properties_clears_findings() {
    // GIVEN an invalid record
    let registry = process_registry();
    let mut session = InspectorSession::new(&registry, FakeDiagram::new());
    let element = FakeElement::new("Task_1", "UserTask");
    session.element_selected(&element);

    // WHEN id, name and assignee are written
    session
        .update_properties(
            &element,
            lens_core::props! {
                "id" => "Task_1",
                "name" => "Review order",
                "assignee" => "alice",
            },
        )
        .unwrap();

    // THEN the record is valid and the warning is gone
    let record = session.selected_record().unwrap();
    let validation = record.validation.as_ref().unwrap();
    assert!(validation.is_valid());
    assert_eq!(validation.warnings().len(), 0);

    // AND all three writes were mirrored to the diagram
    assert_eq!(session.port().writes.len(), 3);
}

#[test]
fn test_validation_is_idempotent_across_reselection() {
    // GIVEN a selected, invalid UserTask
    let registry = process_registry();
    let mut session = InspectorSession::new(&registry, FakeDiagram::new());
    let element = FakeElement::new("Task_1", "UserTask");
    session.element_selected(&element);
    let first = session.selected_record().unwrap().validation.clone();

    // WHEN deselected and selected again with no writes in between
    session.element_deselected();
    session.element_selected(&element);

    // THEN the findings are unchanged
    let second = session.selected_record().unwrap().validation.clone();
    assert_eq!(first, second);
}

#[test]
fn test_native_attribute_feeds_initial_value() {
    // GIVEN an element whose diagram model carries a name
    let registry = process_registry();
    let mut session = InspectorSession::new(&registry, FakeDiagram::new());
    let element = FakeElement::new("Task_1", "UserTask")
        .with_native("name", Value::Text("Approve invoice".into()));

    // WHEN selected
    session.element_selected(&element);

    // THEN the native value seeded the record
    assert_eq!(
        session.selected_record().unwrap().get("name"),
        Some(&Value::Text("Approve invoice".into()))
    );
}
