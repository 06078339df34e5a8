//! Rule execution result types.

use lens_core::Value;
use lens_schema::{BusinessRule, RuleAction};

/// The outcome of evaluating one business rule.
///
/// A rule "passes" when its condition is false - nothing to do. When the
/// condition holds, the result carries the rule's action for the caller to
/// interpret. A rule whose condition could not be evaluated is reported
/// with a diagnostic instead of propagating the failure.
#[derive(Debug, Clone)]
pub struct RuleExecutionResult {
    /// The rule that was evaluated.
    pub rule_id: String,
    /// True when the condition was false (no action needed).
    pub passed: bool,
    /// The rule's action.
    pub action: RuleAction,
    /// Target property, when the action needs one.
    pub target: Option<String>,
    /// Value payload for Default actions.
    pub value: Option<Value>,
    /// Message for Validate actions.
    pub message: Option<String>,
    /// Set when condition evaluation failed; such a result is neither
    /// passed nor triggered.
    pub diagnostic: Option<String>,
}

impl RuleExecutionResult {
    /// The rule's condition was false.
    pub fn passed(rule: &BusinessRule) -> Self {
        Self {
            rule_id: rule.id.clone(),
            passed: true,
            action: rule.action,
            target: rule.target.clone(),
            value: rule.value.clone(),
            message: rule.message.clone(),
            diagnostic: None,
        }
    }

    /// The rule's condition held; its action should be interpreted.
    pub fn triggered(rule: &BusinessRule) -> Self {
        Self {
            passed: false,
            ..Self::passed(rule)
        }
    }

    /// The rule's condition could not be evaluated.
    pub fn failed(rule: &BusinessRule, diagnostic: impl Into<String>) -> Self {
        Self {
            passed: false,
            diagnostic: Some(diagnostic.into()),
            ..Self::passed(rule)
        }
    }

    /// True when the rule fired and its action should be applied.
    pub fn is_triggered(&self) -> bool {
        !self.passed && self.diagnostic.is_none()
    }

    /// True when condition evaluation failed.
    pub fn is_failed(&self) -> bool {
        self.diagnostic.is_some()
    }
}
