//! Projection is presentation only: a conditionally invisible property
//! disappears from the rendered groups but keeps validating.

use lens_core::Value;
use lens_project::{project, UNREGISTERED_GROUP_ORDER};
use lens_session::InspectorSession;
use lens_tests::{process_registry, FakeDiagram, FakeElement};

#[test]
fn test_invisible_property_omitted_but_still_validated() {
    // GIVEN a java ServiceTask whose javaClass is empty
    let registry = process_registry();
    let mut session = InspectorSession::new(&registry, FakeDiagram::new());
    let element = FakeElement::new("Service_1", "ServiceTask")
        .with_native("id", Value::Text("Service_1".into()));
    session.element_selected(&element);
    session
        .update_property(&element, "implementation", Value::Text("java".into()))
        .unwrap();

    // AND the record reports the javaClass error
    let record = session.selected_record().unwrap().clone();
    let validation = record.validation.as_ref().unwrap();
    assert_eq!(validation.errors_for("javaClass").count(), 1);

    // WHEN implementation flips back so javaClass becomes invisible
    session
        .update_property(&element, "implementation", Value::Text("external".into()))
        .unwrap();
    let record = session.selected_record().unwrap();
    let schema = registry.get_schema("ServiceTask").unwrap();
    let groups = project(&registry, schema, &record.properties);

    // THEN javaClass is not projected
    assert!(groups
        .iter()
        .flat_map(|g| &g.properties)
        .all(|p| p.definition.id != "javaClass"));

    // AND the projector never touched the stored value
    assert!(record.get("javaClass").is_some());
}

#[test]
fn test_visible_when_condition_matches() {
    let registry = process_registry();
    let mut session = InspectorSession::new(&registry, FakeDiagram::new());
    let element = FakeElement::new("Service_1", "ServiceTask");
    session.element_selected(&element);
    session
        .update_property(&element, "implementation", Value::Text("java".into()))
        .unwrap();

    let record = session.selected_record().unwrap();
    let schema = registry.get_schema("ServiceTask").unwrap();
    let groups = project(&registry, schema, &record.properties);

    assert!(groups
        .iter()
        .flat_map(|g| &g.properties)
        .any(|p| p.definition.id == "javaClass"));
}

#[test]
fn test_group_ordering_and_unregistered_group() {
    // GIVEN a projected ServiceTask
    let registry = process_registry();
    let mut session = InspectorSession::new(&registry, FakeDiagram::new());
    let element = FakeElement::new("Service_1", "ServiceTask");
    session.element_selected(&element);

    let record = session.selected_record().unwrap();
    let schema = registry.get_schema("ServiceTask").unwrap();
    let groups = project(&registry, schema, &record.properties);

    // THEN registered groups come first in declared order; the
    // unregistered error-handling group sinks last with a derived label
    let ids: Vec<_> = groups.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, ["general", "implementation", "error-handling"]);

    let errors = groups.last().unwrap();
    assert_eq!(errors.label, "Error Handling");
    assert_eq!(errors.order, UNREGISTERED_GROUP_ORDER);
}

#[test]
fn test_ungrouped_properties_land_in_general() {
    let registry = process_registry();
    let mut session = InspectorSession::new(&registry, FakeDiagram::new());
    let element = FakeElement::new("Task_1", "UserTask");
    session.element_selected(&element);

    let record = session.selected_record().unwrap();
    let schema = registry.get_schema("UserTask").unwrap();
    let groups = project(&registry, schema, &record.properties);

    let general = groups.iter().find(|g| g.id == "general").unwrap();
    let ids: Vec<_> = general
        .properties
        .iter()
        .map(|p| p.definition.id.as_str())
        .collect();
    assert_eq!(ids, ["id", "name", "priority", "dueDate"]);
}
