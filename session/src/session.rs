//! The inspector session.

use crate::error::SessionResult;
use crate::port::{DiagramPort, ElementRef};
use lens_core::{PropertyMap, Value};
use lens_schema::SchemaRegistry;
use lens_store::{ElementPropertiesRecord, PropertyStore, SelectOutcome, SuppliedValues};
use log::debug;

/// One inspector session over one diagram.
///
/// Owns the session's PropertyStore and the outbound port. Selection
/// events flow in from the diagram; property writes flow back out through
/// the port so they persist with the document. Writes are mirrored even
/// when validation reports errors - errors are presentation signal, not a
/// write barrier.
pub struct InspectorSession<'r, P: DiagramPort> {
    registry: &'r SchemaRegistry,
    store: PropertyStore<'r>,
    port: P,
    selected: Option<String>,
}

impl<'r, P: DiagramPort> InspectorSession<'r, P> {
    pub fn new(registry: &'r SchemaRegistry, port: P) -> Self {
        Self {
            registry,
            store: PropertyStore::new(registry),
            port,
            selected: None,
        }
    }

    // ========== Selection lifecycle ==========

    /// Handle element selection: gather the diagram's persisted extension
    /// text and native attribute values, then ensure a live record.
    pub fn element_selected(&mut self, element: &dyn ElementRef) -> SelectOutcome {
        let supplied = self.gather_supplied(element);
        let outcome = self
            .store
            .select(element.id(), element.element_type(), &supplied);
        match &outcome {
            SelectOutcome::Selected { .. } => {
                self.selected = Some(element.id().to_string());
            }
            SelectOutcome::NoSchema => {
                debug!(
                    "selected element '{}' of uninspectable type '{}'",
                    element.id(),
                    element.element_type()
                );
                self.selected = None;
            }
        }
        outcome
    }

    /// Handle deselection. The record stays live; only the selection
    /// pointer clears.
    pub fn element_deselected(&mut self) {
        self.selected = None;
    }

    /// Handle element removal: drop its record.
    pub fn element_removed(&mut self, element_id: &str) {
        if self.selected.as_deref() == Some(element_id) {
            self.selected = None;
        }
        self.store.remove(element_id);
    }

    // ========== Writes ==========

    /// Write one property and mirror it to the diagram.
    pub fn update_property(
        &mut self,
        element: &dyn ElementRef,
        property_id: &str,
        value: Value,
    ) -> SessionResult<()> {
        self.store
            .set_property(element.id(), property_id, value.clone())?;
        self.port.write_property(element, property_id, &value);
        Ok(())
    }

    /// Write several properties atomically and mirror each to the diagram.
    pub fn update_properties(
        &mut self,
        element: &dyn ElementRef,
        partial: PropertyMap,
    ) -> SessionResult<()> {
        self.store.set_properties(element.id(), partial.clone())?;
        for (property_id, value) in &partial {
            self.port.write_property(element, property_id, value);
        }
        Ok(())
    }

    // ========== Accessors ==========

    pub fn store(&self) -> &PropertyStore<'r> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PropertyStore<'r> {
        &mut self.store
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    /// Id of the currently selected element, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Record of the currently selected element.
    pub fn selected_record(&self) -> Option<&ElementPropertiesRecord> {
        self.selected.as_deref().and_then(|id| self.store.get(id))
    }

    fn gather_supplied(&self, element: &dyn ElementRef) -> SuppliedValues {
        let mut supplied = SuppliedValues::new();
        let Some(schema) = self.registry.get_schema(element.element_type()) else {
            return supplied;
        };
        for def in &schema.properties {
            if let Some(text) = self.port.read_custom_extension(element, &def.id) {
                supplied.custom.insert(def.id.clone(), text);
            }
            if let Some(value) = element.native_attribute(&def.id) {
                supplied.native.insert(def.id.clone(), value);
            }
        }
        supplied
    }
}
