//! The group projector.

use lens_core::{PropertyMap, Value};
use lens_schema::{ElementPropertySchema, PropertyDefinition, SchemaRegistry};

/// Group assigned to properties that declare none.
pub const GENERAL_GROUP: &str = "general";

/// Sort order assigned to groups with no registered definition; they land
/// after every registered group.
pub const UNREGISTERED_GROUP_ORDER: i32 = 999;

/// One visible property with its current value.
#[derive(Debug, Clone)]
pub struct ProjectedProperty<'s> {
    pub definition: &'s PropertyDefinition,
    pub value: Value,
}

/// An ordered group of visible properties.
#[derive(Debug, Clone)]
pub struct PropertyGroup<'s> {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub order: i32,
    pub properties: Vec<ProjectedProperty<'s>>,
}

/// Project a record's values into render-ready groups.
///
/// Groups are sorted by order with first-appearance tiebreak; properties
/// within a group by their declared order (unordered ones last), with
/// declaration-order tiebreak. A property is omitted when statically
/// hidden or when its conditional clause does not match the current value
/// of the property it depends on.
pub fn project<'s>(
    registry: &SchemaRegistry,
    schema: &'s ElementPropertySchema,
    properties: &PropertyMap,
) -> Vec<PropertyGroup<'s>> {
    let mut groups: Vec<PropertyGroup<'s>> = Vec::new();

    for def in &schema.properties {
        if !is_visible(def, properties) {
            continue;
        }

        let group_id = def.group.as_deref().unwrap_or(GENERAL_GROUP);
        let group = match groups.iter_mut().find(|g| g.id == group_id) {
            Some(group) => group,
            None => {
                groups.push(make_group(registry, group_id));
                groups.last_mut().unwrap()
            }
        };

        group.properties.push(ProjectedProperty {
            definition: def,
            value: properties.get(&def.id).cloned().unwrap_or(Value::Null),
        });
    }

    for group in &mut groups {
        // Stable sort: declaration order breaks ties, unordered entries sink.
        group
            .properties
            .sort_by_key(|p| p.definition.order.unwrap_or(i32::MAX));
    }
    groups.sort_by_key(|g| g.order);

    groups
}

fn is_visible(def: &PropertyDefinition, properties: &PropertyMap) -> bool {
    if def.hidden {
        return false;
    }
    match &def.conditional {
        Some(cond) => {
            let current = properties.get(&cond.depends_on).unwrap_or(&Value::Null);
            cond.visible_when.iter().any(|v| v == current)
        }
        None => true,
    }
}

fn make_group<'s>(registry: &SchemaRegistry, group_id: &str) -> PropertyGroup<'s> {
    match registry.get_group(group_id) {
        Some(def) => PropertyGroup {
            id: def.id.clone(),
            label: def.label.clone(),
            icon: def.icon.clone(),
            order: def.order,
            properties: Vec::new(),
        },
        None => PropertyGroup {
            id: group_id.to_string(),
            label: title_case(group_id),
            icon: None,
            order: UNREGISTERED_GROUP_ORDER,
            properties: Vec::new(),
        },
    }
}

/// Derive a display label from a group id: "error-handling" becomes
/// "Error Handling".
fn title_case(id: &str) -> String {
    id.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
