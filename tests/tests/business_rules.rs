//! The ServiceTask java-class scenario: the rule is quiet for the default
//! implementation, fires when implementation flips to java without a
//! class, and settles once the class is configured.

use lens_core::{PropertyKind, Value};
use lens_schema::{BusinessRule, PropertyDefinition, RegistryBuilder, RuleAction};
use lens_session::InspectorSession;
use lens_store::{PropertyStore, SelectOutcome, SuppliedValues};
use lens_tests::{process_registry, FakeDiagram, FakeElement};

#[test]
fn test_rule_quiet_for_default_implementation() {
    // GIVEN a ServiceTask left on the external default
    let registry = process_registry();
    let mut session = InspectorSession::new(&registry, FakeDiagram::new());
    let element = FakeElement::new("Service_1", "ServiceTask")
        .with_native("id", Value::Text("Service_1".into()));
    session.element_selected(&element);

    // THEN the rule passed and contributed nothing
    let record = session.selected_record().unwrap();
    let rule = &record.rule_results[0];
    assert_eq!(rule.rule_id, "java-class-required");
    assert!(rule.passed);
    assert!(record.is_valid());
}

#[test]
fn test_rule_fires_when_java_without_class() {
    // GIVEN a valid ServiceTask
    let registry = process_registry();
    let mut session = InspectorSession::new(&registry, FakeDiagram::new());
    let element = FakeElement::new("Service_1", "ServiceTask")
        .with_native("id", Value::Text("Service_1".into()));
    session.element_selected(&element);

    // WHEN implementation flips to java with javaClass still empty
    session
        .update_property(&element, "implementation", Value::Text("java".into()))
        .unwrap();

    // THEN the rule triggered with its validate action
    let record = session.selected_record().unwrap();
    let rule = &record.rule_results[0];
    assert!(!rule.passed);
    assert!(rule.is_triggered());
    assert_eq!(rule.action, RuleAction::Validate);

    // AND the record's validation carries the rule's message on the target
    let validation = record.validation.as_ref().unwrap();
    assert!(!validation.is_valid());
    let errors: Vec<_> = validation.errors_for("javaClass").collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Java class must be configured");
    assert_eq!(errors[0].rule_tag, "java-class-required");
}

#[test]
fn test_rule_settles_once_class_configured() {
    // GIVEN a ServiceTask failing the java rule
    let registry = process_registry();
    let mut session = InspectorSession::new(&registry, FakeDiagram::new());
    let element = FakeElement::new("Service_1", "ServiceTask")
        .with_native("id", Value::Text("Service_1".into()));
    session.element_selected(&element);
    session
        .update_property(&element, "implementation", Value::Text("java".into()))
        .unwrap();

    // WHEN the class is configured
    session
        .update_property(&element, "javaClass", Value::Text("com.acme.Handler".into()))
        .unwrap();

    // THEN the rule passes and the record is valid again
    let record = session.selected_record().unwrap();
    assert!(record.rule_results[0].passed);
    assert!(record.is_valid());
}

#[test]
fn test_rules_rerun_fresh_on_every_write() {
    // GIVEN a ServiceTask on java without a class
    let registry = process_registry();
    let mut session = InspectorSession::new(&registry, FakeDiagram::new());
    let element = FakeElement::new("Service_1", "ServiceTask")
        .with_native("id", Value::Text("Service_1".into()));
    session.element_selected(&element);
    session
        .update_property(&element, "implementation", Value::Text("java".into()))
        .unwrap();
    assert!(!session.selected_record().unwrap().is_valid());

    // WHEN implementation flips back to external
    session
        .update_property(&element, "implementation", Value::Text("external".into()))
        .unwrap();

    // THEN no stale rule finding survives
    assert!(session.selected_record().unwrap().is_valid());
}

#[test]
fn test_cyclic_default_rules_do_not_hang_loading() {
    // GIVEN a schema whose default rules write each other's trigger value
    let mut builder = RegistryBuilder::new();
    builder
        .add_schema("Toggle")
        .property(
            PropertyDefinition::new("mode", "Mode", PropertyKind::SingleChoice)
                .with_default(Value::Text("auto".into())),
        )
        .rule(
            BusinessRule::new("auto-to-manual", "", "mode == 'auto'", RuleAction::Default)
                .unwrap()
                .with_target("mode")
                .with_value(Value::Text("manual".into())),
        )
        .rule(
            BusinessRule::new("manual-to-auto", "", "mode == 'manual'", RuleAction::Default)
                .unwrap()
                .with_target("mode")
                .with_value(Value::Text("auto".into())),
        )
        .done()
        .unwrap();
    let registry = builder.build().unwrap();
    let mut store = PropertyStore::new(&registry);

    // WHEN the element is selected
    let outcome = store.select("Toggle_1", "Toggle", &SuppliedValues::new());

    // THEN the bounded rule loop gave up instead of looping forever, and
    // the element still loaded with one of the contested values
    assert_eq!(outcome, SelectOutcome::Selected { created: true });
    let record = store.get("Toggle_1").unwrap();
    let mode = record.get("mode").unwrap().as_str().unwrap().to_string();
    assert!(mode == "auto" || mode == "manual");
    assert!(record.validation.is_some());
}
