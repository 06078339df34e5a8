//! The property store.

use crate::error::{StoreError, StoreResult};
use crate::record::ElementPropertiesRecord;
use lens_core::{PropertyMap, Value};
use lens_rule::{fold_into, RuleContext, RuleEngine, RuleExecutionResult, MAX_RULE_PASSES};
use lens_schema::{ElementPropertySchema, PropertyDefinition, RuleAction, SchemaRegistry};
use lens_validate::validate;
use log::{debug, warn};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Values supplied by the diagram side when an element is selected:
/// persisted custom-extension text (decoded per property kind) and native
/// attribute values already typed by the collaborator.
#[derive(Debug, Clone, Default)]
pub struct SuppliedValues {
    /// Persisted extension text keyed by property id.
    pub custom: HashMap<String, String>,
    /// Native attribute values keyed by property id.
    pub native: HashMap<String, Value>,
}

impl SuppliedValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn custom(mut self, property_id: impl Into<String>, text: impl Into<String>) -> Self {
        self.custom.insert(property_id.into(), text.into());
        self
    }

    pub fn native(mut self, property_id: impl Into<String>, value: Value) -> Self {
        self.native.insert(property_id.into(), value);
        self
    }
}

/// Outcome of selecting an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// A record is live for the element.
    Selected {
        /// True when this selection created the record.
        created: bool,
    },
    /// The element type has no registered schema. Nothing to inspect;
    /// not an error.
    NoSchema,
}

/// Handle for cancelling a change subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type ChangeCallback = Box<dyn FnMut(&[ElementPropertiesRecord])>;

/// Session-scoped store of element property records.
///
/// Borrows the registry for the life of the session; records are created
/// by `select` and mutated only through the store's own methods, which
/// keep validation and rule results current and notify subscribers.
pub struct PropertyStore<'r> {
    registry: &'r SchemaRegistry,
    records: HashMap<String, ElementPropertiesRecord>,
    /// Element ids in first-selection order, for deterministic snapshots.
    order: Vec<String>,
    engine: RuleEngine,
    subscribers: Vec<(SubscriptionId, ChangeCallback)>,
    next_subscription: u64,
}

impl<'r> std::fmt::Debug for PropertyStore<'r> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyStore")
            .field("records", &self.records.len())
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl<'r> PropertyStore<'r> {
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self {
            registry,
            records: HashMap::new(),
            order: Vec::new(),
            engine: RuleEngine::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    // ========== Selection ==========

    /// Ensure a record exists for the element and bring it up to date.
    ///
    /// On creation, each property takes the first available of: supplied
    /// custom-extension text (decoded per kind), supplied native value,
    /// the definition's default, the kind's zero value. Malformed
    /// extension text falls back to the zero value; the element still
    /// loads. Re-selecting a live element keeps its values.
    pub fn select(
        &mut self,
        element_id: &str,
        element_type: &str,
        supplied: &SuppliedValues,
    ) -> SelectOutcome {
        let Some(schema) = self.registry.get_schema(element_type) else {
            debug!("no schema for element type '{}'", element_type);
            return SelectOutcome::NoSchema;
        };

        let created = !self.records.contains_key(element_id);
        if created {
            let mut properties = PropertyMap::new();
            for def in &schema.properties {
                properties.insert(def.id.clone(), initial_value(element_id, def, supplied));
            }
            self.records.insert(
                element_id.to_string(),
                ElementPropertiesRecord::new(element_id, element_type, properties, now_ms()),
            );
            self.order.push(element_id.to_string());
        }

        if let Some(record) = self.records.get_mut(element_id) {
            refresh(&self.engine, schema, record);
        }
        self.notify();

        SelectOutcome::Selected { created }
    }

    // ========== Writes ==========

    /// Write one property value.
    pub fn set_property(
        &mut self,
        element_id: &str,
        property_id: &str,
        value: Value,
    ) -> StoreResult<()> {
        let mut partial = PropertyMap::new();
        partial.insert(property_id.to_string(), value);
        self.set_properties(element_id, partial)
    }

    /// Write several property values as one atomic change.
    ///
    /// Either every key is a known property and all values land together
    /// under a single notification, or nothing is written.
    pub fn set_properties(&mut self, element_id: &str, partial: PropertyMap) -> StoreResult<()> {
        let record = match self.records.get_mut(element_id) {
            Some(record) => record,
            None => {
                warn!("write to unknown element '{}' dropped", element_id);
                return Err(StoreError::UnknownElement {
                    element_id: element_id.to_string(),
                });
            }
        };

        let schema = match self.registry.get_schema(&record.element_type) {
            Some(schema) => schema,
            None => {
                warn!("write to unknown element '{}' dropped", element_id);
                return Err(StoreError::UnknownElement {
                    element_id: element_id.to_string(),
                });
            }
        };

        for property_id in partial.keys() {
            if !schema.has_property(property_id) {
                return Err(StoreError::UnknownProperty {
                    element_id: element_id.to_string(),
                    property_id: property_id.clone(),
                });
            }
        }

        record.properties.extend(partial);
        record.last_modified_ms = now_ms();
        refresh(&self.engine, schema, record);
        self.notify();
        Ok(())
    }

    // ========== Reads and lifecycle ==========

    /// Get the live record for an element.
    pub fn get(&self, element_id: &str) -> Option<&ElementPropertiesRecord> {
        self.records.get(element_id)
    }

    /// Drop the record for an element, returning it if one was live.
    pub fn remove(&mut self, element_id: &str) -> Option<ElementPropertiesRecord> {
        let removed = self.records.remove(element_id);
        if removed.is_some() {
            self.order.retain(|id| id != element_id);
            self.notify();
        }
        removed
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        if self.records.is_empty() {
            return;
        }
        self.records.clear();
        self.order.clear();
        self.notify();
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ========== Subscriptions ==========

    /// Register a change callback. It receives a snapshot of all live
    /// records, in first-selection order, after every mutation.
    pub fn subscribe(&mut self, callback: impl FnMut(&[ElementPropertiesRecord]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Cancel a subscription. The callback is never invoked again.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    fn notify(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot: Vec<ElementPropertiesRecord> = self
            .order
            .iter()
            .filter_map(|id| self.records.get(id).cloned())
            .collect();
        for (_, callback) in &mut self.subscribers {
            callback(&snapshot);
        }
    }
}

/// Initial value precedence for a freshly created record.
fn initial_value(
    element_id: &str,
    def: &PropertyDefinition,
    supplied: &SuppliedValues,
) -> Value {
    if let Some(text) = supplied.custom.get(&def.id) {
        match Value::parse_as(def.kind, text) {
            Ok(value) => return value,
            Err(e) => {
                warn!(
                    "element '{}' property '{}': {}; using the {} zero value",
                    element_id, def.id, e, def.kind
                );
                return Value::zero(def.kind);
            }
        }
    }
    if let Some(value) = supplied.native.get(&def.id) {
        return value.clone();
    }
    if let Some(default) = &def.default {
        return default.clone();
    }
    Value::zero(def.kind)
}

/// Re-run rules and validation for a record.
///
/// Triggered `default` actions write into their targets, which can
/// retrigger rules; re-evaluation repeats until the record settles or
/// MAX_RULE_PASSES is reached. Triggered `validate` actions are folded
/// into the validation errors.
fn refresh(engine: &RuleEngine, schema: &ElementPropertySchema, record: &mut ElementPropertiesRecord) {
    let context = RuleContext::new(&record.element_id, &record.element_type);

    let mut results = engine.evaluate(&schema.rules, &record.properties, &context);
    let mut passes = 1;
    while apply_defaults(record, &results) {
        if passes >= MAX_RULE_PASSES {
            warn!(
                "rules for element '{}' did not settle after {} passes",
                record.element_id, MAX_RULE_PASSES
            );
            break;
        }
        passes += 1;
        results = engine.evaluate(&schema.rules, &record.properties, &context);
    }

    let mut validation = validate(schema, &record.properties);
    fold_into(&results, &mut validation);
    record.validation = Some(validation);
    record.rule_results = results;
}

/// Apply triggered `default` actions. Returns true when a value changed.
fn apply_defaults(record: &mut ElementPropertiesRecord, results: &[RuleExecutionResult]) -> bool {
    let mut changed = false;
    for result in results {
        if !result.is_triggered() || result.action != RuleAction::Default {
            continue;
        }
        let (Some(target), Some(value)) = (&result.target, &result.value) else {
            continue;
        };
        if record.properties.get(target) != Some(value) {
            record.properties.insert(target.clone(), value.clone());
            changed = true;
        }
    }
    changed
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
