//! The persisted extension block survives a save/load cycle: values are
//! exported as per-kind text, and importing that text into a fresh
//! session reproduces the record.

use lens_core::Value;
use lens_session::{export_extension, import_extension, ExtensionEntry, InspectorSession};
use lens_store::{PropertyStore, SelectOutcome};
use lens_tests::{process_registry, FakeDiagram, FakeElement};

#[test]
fn test_priority_survives_export_and_import() {
    // GIVEN a UserTask with priority written to 'high'
    let registry = process_registry();
    let mut session = InspectorSession::new(&registry, FakeDiagram::new());
    let element = FakeElement::new("Task_1", "UserTask");
    session.element_selected(&element);
    session
        .update_property(&element, "priority", Value::Text("high".into()))
        .unwrap();

    // WHEN the record is exported
    let schema = registry.get_schema("UserTask").unwrap();
    let record = session.selected_record().unwrap();
    let entries = export_extension(schema, &record.properties);
    assert!(entries.contains(&ExtensionEntry::new("priority", "high")));

    // AND the entries seed a fresh session, as after a document reload
    let supplied = import_extension(&entries);
    let mut store = PropertyStore::new(&registry);
    store.select("Task_1", "UserTask", &supplied);

    // THEN the reloaded record matches the saved one
    let reloaded = store.get("Task_1").unwrap();
    assert_eq!(reloaded.get("priority"), Some(&Value::Text("high".into())));
    assert_eq!(reloaded.properties, record.properties);
}

#[test]
fn test_typed_values_round_trip_as_text() {
    // GIVEN a ServiceTask with a numeric retries value
    let registry = process_registry();
    let mut session = InspectorSession::new(&registry, FakeDiagram::new());
    let element = FakeElement::new("Service_1", "ServiceTask");
    session.element_selected(&element);
    session
        .update_property(&element, "retries", Value::Number(7.0))
        .unwrap();

    // WHEN exported and re-imported
    let schema = registry.get_schema("ServiceTask").unwrap();
    let record = session.selected_record().unwrap();
    let entries = export_extension(schema, &record.properties);
    assert!(entries.contains(&ExtensionEntry::new("retries", "7")));

    let mut store = PropertyStore::new(&registry);
    store.select("Service_1", "ServiceTask", &import_extension(&entries));

    // THEN retries is a number again, not text
    assert_eq!(
        store.get("Service_1").unwrap().get("retries"),
        Some(&Value::Number(7.0))
    );
}

#[test]
fn test_malformed_persisted_text_does_not_block_loading() {
    // GIVEN a document carrying corrupted text for a number property
    let registry = process_registry();
    let diagram = FakeDiagram::new().with_extension("Service_1", "retries", "lots");
    let mut session = InspectorSession::new(&registry, diagram);
    let element = FakeElement::new("Service_1", "ServiceTask");

    // WHEN selected
    let outcome = session.element_selected(&element);

    // THEN the element loads with the kind's zero value in place
    assert_eq!(outcome, SelectOutcome::Selected { created: true });
    assert_eq!(
        session.selected_record().unwrap().get("retries"),
        Some(&Value::Number(0.0))
    );
}
