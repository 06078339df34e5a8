//! Persisted extension block import/export.
//!
//! Custom property values travel with the document as name/value text
//! entries. Encoding is per property kind (`Value::to_extension_text`);
//! decoding happens in the store's selection path, where malformed text
//! falls back to the kind's zero value so the element always loads.

use lens_core::PropertyMap;
use lens_schema::ElementPropertySchema;
use lens_store::SuppliedValues;
use serde::{Deserialize, Serialize};

/// One persisted name/value entry of the extension block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionEntry {
    pub name: String,
    pub value: String,
}

impl ExtensionEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Encode a record's values as extension entries, one per schema
/// property, in declaration order. Round-trips losslessly through
/// `import_extension` for well-formed values.
pub fn export_extension(
    schema: &ElementPropertySchema,
    properties: &PropertyMap,
) -> Vec<ExtensionEntry> {
    schema
        .properties
        .iter()
        .filter_map(|def| {
            properties
                .get(&def.id)
                .map(|value| ExtensionEntry::new(&def.id, value.to_extension_text(def.kind)))
        })
        .collect()
}

/// Turn persisted entries into the supplied custom values a selection
/// consumes.
pub fn import_extension(entries: &[ExtensionEntry]) -> SuppliedValues {
    let mut supplied = SuppliedValues::new();
    for entry in entries {
        supplied = supplied.custom(&entry.name, &entry.value);
    }
    supplied
}
