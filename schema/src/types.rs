//! Schema definition types.

use crate::error::{SchemaError, SchemaResult};
use lens_core::{PropertyKind, PropertyMap, Value};
use lens_expr::{parse_condition, Expr};
use regex_lite::Regex;
use std::fmt;
use std::sync::Arc;

/// Conditional visibility clause: the property is shown only while the
/// `depends_on` property's value is one of `visible_when`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalVisibility {
    pub depends_on: String,
    pub visible_when: Vec<Value>,
}

/// Property definition within an element schema. Static and immutable once
/// the schema is registered.
#[derive(Debug, Clone)]
pub struct PropertyDefinition {
    /// Identifier, unique within the schema.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Value kind.
    pub kind: PropertyKind,
    /// Default value applied at record creation.
    pub default: Option<Value>,
    /// Validation rules, all evaluated, never short-circuited.
    pub rules: Vec<ValidationRule>,
    /// Group identifier for presentation ("general" when absent).
    pub group: Option<String>,
    /// Display order within the group.
    pub order: Option<i32>,
    /// Statically hidden from presentation.
    pub hidden: bool,
    /// Not editable.
    pub readonly: bool,
    /// Conditional visibility clause.
    pub conditional: Option<ConditionalVisibility>,
}

impl PropertyDefinition {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            default: None,
            rules: Vec::new(),
            group: None,
            order: None,
            hidden: false,
            readonly: false,
            conditional: None,
        }
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// Show this property only while `depends_on` holds one of `values`.
    pub fn visible_when(mut self, depends_on: impl Into<String>, values: Vec<Value>) -> Self {
        self.conditional = Some(ConditionalVisibility {
            depends_on: depends_on.into(),
            visible_when: values,
        });
        self
    }
}

/// Shared custom validation predicate.
///
/// Returns Ok(true) when the value passes, Ok(false) when it fails, and
/// Err with a diagnostic when the predicate itself cannot run (reported as
/// a warning, never propagated).
#[derive(Clone)]
pub struct CustomPredicate(Arc<dyn Fn(&Value) -> Result<bool, String> + Send + Sync>);

impl CustomPredicate {
    pub fn new(f: impl Fn(&Value) -> Result<bool, String> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn check(&self, value: &Value) -> Result<bool, String> {
        (self.0)(value)
    }
}

impl fmt::Debug for CustomPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomPredicate(..)")
    }
}

/// A validation rule attached to a property definition.
///
/// Every variant carries the user-facing message reported on failure.
#[derive(Debug, Clone)]
pub enum ValidationRule {
    Required { message: String },
    MinLength { min: usize, message: String },
    MaxLength { max: usize, message: String },
    Min { min: f64, message: String },
    Max { max: f64, message: String },
    Pattern { regex: Regex, source: String, message: String },
    Email { message: String },
    Url { message: String },
    Custom { predicate: CustomPredicate, message: String },
}

impl ValidationRule {
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required {
            message: message.into(),
        }
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::MinLength {
            min,
            message: message.into(),
        }
    }

    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Self::MaxLength {
            max,
            message: message.into(),
        }
    }

    pub fn min(min: f64, message: impl Into<String>) -> Self {
        Self::Min {
            min,
            message: message.into(),
        }
    }

    pub fn max(max: f64, message: impl Into<String>) -> Self {
        Self::Max {
            max,
            message: message.into(),
        }
    }

    /// Compile a regex pattern rule. A non-compiling pattern is a
    /// registration-time hard error.
    pub fn pattern(source: impl Into<String>, message: impl Into<String>) -> SchemaResult<Self> {
        let source = source.into();
        let regex = Regex::new(&source).map_err(|e| SchemaError::InvalidPattern {
            pattern: source.clone(),
            message: e.to_string(),
        })?;
        Ok(Self::Pattern {
            regex,
            source,
            message: message.into(),
        })
    }

    pub fn email(message: impl Into<String>) -> Self {
        Self::Email {
            message: message.into(),
        }
    }

    pub fn url(message: impl Into<String>) -> Self {
        Self::Url {
            message: message.into(),
        }
    }

    pub fn custom(predicate: CustomPredicate, message: impl Into<String>) -> Self {
        Self::Custom {
            predicate,
            message: message.into(),
        }
    }

    /// The stable rule tag reported in validation errors.
    pub fn tag(&self) -> &'static str {
        match self {
            ValidationRule::Required { .. } => "required",
            ValidationRule::MinLength { .. } => "minLength",
            ValidationRule::MaxLength { .. } => "maxLength",
            ValidationRule::Min { .. } => "min",
            ValidationRule::Max { .. } => "max",
            ValidationRule::Pattern { .. } => "pattern",
            ValidationRule::Email { .. } => "email",
            ValidationRule::Url { .. } => "url",
            ValidationRule::Custom { .. } => "custom",
        }
    }

    /// The user-facing failure message.
    pub fn message(&self) -> &str {
        match self {
            ValidationRule::Required { message }
            | ValidationRule::MinLength { message, .. }
            | ValidationRule::MaxLength { message, .. }
            | ValidationRule::Min { message, .. }
            | ValidationRule::Max { message, .. }
            | ValidationRule::Pattern { message, .. }
            | ValidationRule::Email { message }
            | ValidationRule::Url { message }
            | ValidationRule::Custom { message, .. } => message,
        }
    }
}

/// Action a business rule triggers when its condition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// Contribute an extra validation error.
    Validate,
    /// Write `value` into `target`.
    Default,
    /// Advise the presentation layer to hide `target`.
    Hide,
    /// Advise the presentation layer to show `target`.
    Show,
    /// Advise the presentation layer to enable `target`.
    Enable,
    /// Advise the presentation layer to disable `target`.
    Disable,
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleAction::Validate => "validate",
            RuleAction::Default => "default",
            RuleAction::Hide => "hide",
            RuleAction::Show => "show",
            RuleAction::Enable => "enable",
            RuleAction::Disable => "disable",
        };
        write!(f, "{}", name)
    }
}

/// A declarative condition-action pair owned by a schema.
///
/// The condition is parsed at construction; a malformed expression never
/// reaches evaluation.
#[derive(Debug, Clone)]
pub struct BusinessRule {
    /// Rule identifier.
    pub id: String,
    /// Human description.
    pub description: String,
    /// Original condition text, kept for diagnostics.
    pub condition_source: String,
    /// Parsed condition tree.
    pub condition: Expr,
    /// Action taken when the condition holds.
    pub action: RuleAction,
    /// Target property id, when the action needs one.
    pub target: Option<String>,
    /// Value payload for Default actions.
    pub value: Option<Value>,
    /// Message for Validate actions.
    pub message: Option<String>,
}

impl BusinessRule {
    /// Create a rule, parsing its condition expression.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        condition: impl Into<String>,
        action: RuleAction,
    ) -> SchemaResult<Self> {
        let id = id.into();
        let condition_source = condition.into();
        let condition =
            parse_condition(&condition_source).map_err(|e| SchemaError::InvalidCondition {
                rule: id.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            id,
            description: description.into(),
            condition_source,
            condition,
            action,
            target: None,
            value: None,
            message: None,
        })
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Severity of a cross-property issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// An issue raised by a cross-property check.
#[derive(Debug, Clone)]
pub struct CrossPropertyIssue {
    /// The property the issue points at.
    pub property_id: String,
    /// User-facing message.
    pub message: String,
    pub severity: IssueSeverity,
    /// Optional remediation hint for warnings.
    pub suggestion: Option<String>,
}

impl CrossPropertyIssue {
    pub fn error(property_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property_id: property_id.into(),
            message: message.into(),
            severity: IssueSeverity::Error,
            suggestion: None,
        }
    }

    pub fn warning(property_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property_id: property_id.into(),
            message: message.into(),
            severity: IssueSeverity::Warning,
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// A hand-written predicate over the whole property map, for constraints
/// that span multiple properties.
#[derive(Clone)]
pub struct CrossPropertyCheck {
    /// Check identifier (for diagnostics; errors are tagged "cross-property").
    pub id: String,
    check: Arc<dyn Fn(&PropertyMap) -> Vec<CrossPropertyIssue> + Send + Sync>,
}

impl CrossPropertyCheck {
    pub fn new(
        id: impl Into<String>,
        check: impl Fn(&PropertyMap) -> Vec<CrossPropertyIssue> + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            check: Arc::new(check),
        }
    }

    /// Run the check against a property map.
    pub fn run(&self, properties: &PropertyMap) -> Vec<CrossPropertyIssue> {
        (self.check)(properties)
    }
}

impl fmt::Debug for CrossPropertyCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrossPropertyCheck")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Presentation group definition.
#[derive(Debug, Clone)]
pub struct GroupDef {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub order: i32,
}

impl GroupDef {
    pub fn new(id: impl Into<String>, label: impl Into<String>, order: i32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            order,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// The full schema registered for one element type: an ordered property
/// list plus business rules and cross-property checks.
#[derive(Debug, Clone)]
pub struct ElementPropertySchema {
    /// Element type tag this schema is keyed by.
    pub element_type: String,
    /// Ordered property definitions.
    pub properties: Vec<PropertyDefinition>,
    /// Business rules, evaluated fresh on every relevant change.
    pub rules: Vec<BusinessRule>,
    /// Cross-property checks.
    pub cross_checks: Vec<CrossPropertyCheck>,
}

impl ElementPropertySchema {
    /// Get a property definition by id.
    pub fn get_property(&self, id: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Check if this schema defines a property.
    pub fn has_property(&self, id: &str) -> bool {
        self.properties.iter().any(|p| p.id == id)
    }

    /// All property ids, in declaration order.
    pub fn property_ids(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.id.as_str())
    }
}
