//! The boundary traits toward the diagram collaborator.

use lens_core::Value;

/// Capability handle for one diagram element.
///
/// The engine reads identity and native attributes through this trait and
/// never stores the collaborator's element object itself.
pub trait ElementRef {
    /// Diagram element id.
    fn id(&self) -> &str;

    /// Element type tag, used for schema lookup.
    fn element_type(&self) -> &str;

    /// Read a native attribute the diagram model carries itself (an
    /// element name, a documentation field). None when the model has no
    /// such attribute.
    fn native_attribute(&self, name: &str) -> Option<Value>;
}

/// Outbound interface to the diagram.
pub trait DiagramPort {
    /// Mirror a property write into the diagram model so the change
    /// persists with the document.
    fn write_property(&mut self, element: &dyn ElementRef, property_id: &str, value: &Value);

    /// Read the persisted custom-extension text for a property, if the
    /// document carries one.
    fn read_custom_extension(&self, element: &dyn ElementRef, property_id: &str) -> Option<String>;
}
