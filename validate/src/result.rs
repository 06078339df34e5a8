//! Validation result types.

/// Synthetic rule tag for issues raised by cross-property checks.
pub const CROSS_PROPERTY_RULE: &str = "cross-property";

/// A failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The property the failure points at.
    pub property_id: String,
    /// User-facing message.
    pub message: String,
    /// The stable tag of the failed rule.
    pub rule_tag: String,
}

impl ValidationError {
    pub fn new(
        property_id: impl Into<String>,
        message: impl Into<String>,
        rule_tag: impl Into<String>,
    ) -> Self {
        Self {
            property_id: property_id.into(),
            message: message.into(),
            rule_tag: rule_tag.into(),
        }
    }
}

/// A non-blocking validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The property the warning points at.
    pub property_id: String,
    /// User-facing message.
    pub message: String,
    /// Optional remediation hint.
    pub suggestion: Option<String>,
}

impl ValidationWarning {
    pub fn new(property_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property_id: property_id.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// The structured outcome of validating one record.
///
/// Always recomputed whole, never incrementally patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Create an empty (valid) result.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff there are zero errors. Warnings never affect validity.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error.
    pub fn push_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a warning.
    pub fn push_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// All errors, in evaluation order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// All warnings, in evaluation order.
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// Errors for a single property.
    pub fn errors_for<'a>(
        &'a self,
        property_id: &'a str,
    ) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| e.property_id == property_id)
    }

    /// Warnings for a single property.
    pub fn warnings_for<'a>(
        &'a self,
        property_id: &'a str,
    ) -> impl Iterator<Item = &'a ValidationWarning> {
        self.warnings
            .iter()
            .filter(move |w| w.property_id == property_id)
    }
}
