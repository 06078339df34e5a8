//! Property kinds.
//!
//! The kind of a property fixes its value shape, its zero value, and how
//! persisted extension text is parsed back into a value. The eight kinds
//! below are the entire vocabulary available to schema authors.

use std::fmt;

/// The value shape of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Single-line text.
    ShortText,
    /// Multi-line text.
    LongText,
    /// Numeric value (stored as f64).
    Number,
    /// Boolean flag.
    Boolean,
    /// One value out of a fixed option set.
    SingleChoice,
    /// Several values out of a fixed option set.
    MultiChoice,
    /// Date/time, stored as ISO-8601 text.
    DateTime,
    /// Structured JSON document.
    Json,
}

impl PropertyKind {
    /// The stable name of this kind, as used in persisted schemas.
    pub fn name(&self) -> &'static str {
        match self {
            PropertyKind::ShortText => "short-text",
            PropertyKind::LongText => "long-text",
            PropertyKind::Number => "number",
            PropertyKind::Boolean => "boolean",
            PropertyKind::SingleChoice => "single-choice",
            PropertyKind::MultiChoice => "multi-choice",
            PropertyKind::DateTime => "date-time",
            PropertyKind::Json => "structured-json",
        }
    }

    /// Look up a kind by its stable name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "short-text" => Some(PropertyKind::ShortText),
            "long-text" => Some(PropertyKind::LongText),
            "number" => Some(PropertyKind::Number),
            "boolean" => Some(PropertyKind::Boolean),
            "single-choice" => Some(PropertyKind::SingleChoice),
            "multi-choice" => Some(PropertyKind::MultiChoice),
            "date-time" => Some(PropertyKind::DateTime),
            "structured-json" => Some(PropertyKind::Json),
            _ => None,
        }
    }

    /// Returns true if values of this kind are stored as text.
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            PropertyKind::ShortText
                | PropertyKind::LongText
                | PropertyKind::SingleChoice
                | PropertyKind::DateTime
        )
    }

    /// All recognized kinds, in declaration order.
    pub fn all() -> &'static [PropertyKind] {
        &[
            PropertyKind::ShortText,
            PropertyKind::LongText,
            PropertyKind::Number,
            PropertyKind::Boolean,
            PropertyKind::SingleChoice,
            PropertyKind::MultiChoice,
            PropertyKind::DateTime,
            PropertyKind::Json,
        ]
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
