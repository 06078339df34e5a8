//! Store subscriptions: every mutation delivers a snapshot, atomic batch
//! writes deliver exactly one, and an unsubscribed callback stays silent.

use lens_core::{props, Value};
use lens_store::{PropertyStore, SuppliedValues};
use lens_tests::process_registry;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_each_mutation_notifies_once() {
    // GIVEN a subscribed store
    let registry = process_registry();
    let mut store = PropertyStore::new(&registry);
    let notifications = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&notifications);
    store.subscribe(move |_| *sink.borrow_mut() += 1);

    // WHEN select, write, batch write, remove
    store.select("Task_1", "UserTask", &SuppliedValues::new());
    store
        .set_property("Task_1", "name", Value::Text("Review".into()))
        .unwrap();
    store
        .set_properties("Task_1", props! { "id" => "Task_1", "assignee" => "alice" })
        .unwrap();
    store.remove("Task_1");

    // THEN four notifications - the batch write counted once
    assert_eq!(*notifications.borrow(), 4);
}

#[test]
fn test_snapshot_reflects_live_records() {
    // GIVEN a subscriber recording snapshot contents
    let registry = process_registry();
    let mut store = PropertyStore::new(&registry);
    let snapshots: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&snapshots);
    store.subscribe(move |records| {
        sink.borrow_mut()
            .push(records.iter().map(|r| r.element_id.clone()).collect());
    });

    // WHEN two elements are selected and one removed
    store.select("Task_1", "UserTask", &SuppliedValues::new());
    store.select("Service_1", "ServiceTask", &SuppliedValues::new());
    store.remove("Task_1");

    // THEN each snapshot lists the live records in first-selection order
    assert_eq!(
        *snapshots.borrow(),
        vec![
            vec!["Task_1".to_string()],
            vec!["Task_1".to_string(), "Service_1".to_string()],
            vec!["Service_1".to_string()],
        ]
    );
}

#[test]
fn test_unsubscribed_callback_is_silent() {
    // GIVEN two subscribers
    let registry = process_registry();
    let mut store = PropertyStore::new(&registry);
    let first = Rc::new(RefCell::new(0usize));
    let second = Rc::new(RefCell::new(0usize));
    let first_sink = Rc::clone(&first);
    let second_sink = Rc::clone(&second);
    let first_id = store.subscribe(move |_| *first_sink.borrow_mut() += 1);
    store.subscribe(move |_| *second_sink.borrow_mut() += 1);

    // WHEN the first unsubscribes between mutations
    store.select("Task_1", "UserTask", &SuppliedValues::new());
    store.unsubscribe(first_id);
    store
        .set_property("Task_1", "name", Value::Text("Review".into()))
        .unwrap();

    // THEN only the surviving subscriber saw the second mutation
    assert_eq!(*first.borrow(), 1);
    assert_eq!(*second.borrow(), 2);
}

#[test]
fn test_failed_write_does_not_notify() {
    // GIVEN a subscribed store with a live record
    let registry = process_registry();
    let mut store = PropertyStore::new(&registry);
    store.select("Task_1", "UserTask", &SuppliedValues::new());
    let notifications = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&notifications);
    store.subscribe(move |_| *sink.borrow_mut() += 1);

    // WHEN writes are rejected
    let _ = store.set_property("Ghost", "name", Value::Text("x".into()));
    let _ = store.set_property("Task_1", "ghost", Value::Text("x".into()));

    // THEN no notification fired
    assert_eq!(*notifications.borrow(), 0);
}
