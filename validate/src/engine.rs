//! The validation engine.
//!
//! Kind-compatibility policy: string rules (minLength, maxLength, pattern)
//! silently no-op on non-text values, numeric rules (min, max) on non-number
//! values. This is deliberate - a rule attached to a property whose current
//! value has a different runtime kind is not an error. `email`/`url` check
//! only non-empty text; empty values pass unless a `required` rule is also
//! present.

use crate::result::{
    ValidationError, ValidationResult, ValidationWarning, CROSS_PROPERTY_RULE,
};
use lens_core::{PropertyMap, Value};
use lens_schema::{
    CrossPropertyIssue, ElementPropertySchema, IssueSeverity, PropertyDefinition, ValidationRule,
};
use regex_lite::Regex;
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static email pattern"))
}

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://[^\s]+$").expect("static url pattern")
    })
}

/// Validate a property map against its element schema.
///
/// Pure function of its inputs. Every rule on every property is checked;
/// a property with three failing rules reports three errors. Cross-property
/// checks run afterwards and contribute under the "cross-property" tag.
pub fn validate(schema: &ElementPropertySchema, properties: &PropertyMap) -> ValidationResult {
    let mut result = ValidationResult::new();

    for def in &schema.properties {
        let value = properties.get(&def.id).unwrap_or(&Value::Null);
        for rule in &def.rules {
            check_rule(def, rule, value, &mut result);
        }
    }

    for check in &schema.cross_checks {
        for issue in check.run(properties) {
            push_issue(issue, &mut result);
        }
    }

    result
}

fn check_rule(
    def: &PropertyDefinition,
    rule: &ValidationRule,
    value: &Value,
    result: &mut ValidationResult,
) {
    let failed = match rule {
        ValidationRule::Required { .. } => value.is_absent(),

        ValidationRule::MinLength { min, .. } => match value.as_str() {
            Some(s) => s.chars().count() < *min,
            None => false,
        },
        ValidationRule::MaxLength { max, .. } => match value.as_str() {
            Some(s) => s.chars().count() > *max,
            None => false,
        },
        ValidationRule::Pattern { regex, .. } => match value.as_str() {
            Some(s) => !regex.is_match(s),
            None => false,
        },

        ValidationRule::Min { min, .. } => match value.as_number() {
            Some(n) => n < *min,
            None => false,
        },
        ValidationRule::Max { max, .. } => match value.as_number() {
            Some(n) => n > *max,
            None => false,
        },

        ValidationRule::Email { .. } => match value.as_str() {
            Some(s) if !s.is_empty() => !email_regex().is_match(s),
            _ => false,
        },
        ValidationRule::Url { .. } => match value.as_str() {
            Some(s) if !s.is_empty() => !url_regex().is_match(s),
            _ => false,
        },

        ValidationRule::Custom { predicate, .. } => match predicate.check(value) {
            Ok(passed) => !passed,
            Err(diagnostic) => {
                // A predicate that cannot run is a diagnostic warning,
                // never a thrown error.
                result.push_warning(ValidationWarning::new(
                    &def.id,
                    format!("custom rule could not be evaluated: {}", diagnostic),
                ));
                false
            }
        },
    };

    if failed {
        result.push_error(ValidationError::new(&def.id, rule.message(), rule.tag()));
    }
}

fn push_issue(issue: CrossPropertyIssue, result: &mut ValidationResult) {
    match issue.severity {
        IssueSeverity::Error => result.push_error(ValidationError::new(
            issue.property_id,
            issue.message,
            CROSS_PROPERTY_RULE,
        )),
        IssueSeverity::Warning => {
            let mut warning = ValidationWarning::new(issue.property_id, issue.message);
            if let Some(suggestion) = issue.suggestion {
                warning = warning.with_suggestion(suggestion);
            }
            result.push_warning(warning);
        }
    }
}
