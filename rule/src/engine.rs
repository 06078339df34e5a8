//! Rule execution engine.

use crate::context::RuleContext;
use crate::result::RuleExecutionResult;
use lens_core::PropertyMap;
use lens_expr::Evaluator;
use lens_schema::{BusinessRule, RuleAction};
use lens_validate::{ValidationError, ValidationResult};
use log::warn;

/// The business rule engine.
#[derive(Debug, Default)]
pub struct RuleEngine {
    evaluator: Evaluator,
}

impl RuleEngine {
    /// Create a new rule engine.
    pub fn new() -> Self {
        Self {
            evaluator: Evaluator::new(),
        }
    }

    /// Evaluate every rule against the record's property values and context.
    ///
    /// One result per rule, in declaration order. Evaluation failures are
    /// converted into failed results with a diagnostic - they never
    /// propagate and crash the selection/update pipeline.
    pub fn evaluate(
        &self,
        rules: &[BusinessRule],
        properties: &PropertyMap,
        context: &RuleContext,
    ) -> Vec<RuleExecutionResult> {
        let scope = context.build_scope(properties);

        rules
            .iter()
            .map(|rule| self.evaluate_one(rule, &scope))
            .collect()
    }

    fn evaluate_one(&self, rule: &BusinessRule, scope: &PropertyMap) -> RuleExecutionResult {
        match self.evaluator.eval_bool(&rule.condition, scope) {
            Ok(true) => RuleExecutionResult::triggered(rule),
            Ok(false) => RuleExecutionResult::passed(rule),
            Err(e) => {
                warn!(
                    "business rule '{}' failed to evaluate ({}): {}",
                    rule.id, rule.condition_source, e
                );
                RuleExecutionResult::failed(rule, e.to_string())
            }
        }
    }
}

/// Fold triggered `validate`-action results into a ValidationResult.
///
/// Each contributes one error under the rule's message, pointed at the
/// rule's target (or the rule id when no target is declared) and tagged
/// with the rule id.
pub fn fold_into(results: &[RuleExecutionResult], validation: &mut ValidationResult) {
    for result in results {
        if !result.is_triggered() || result.action != RuleAction::Validate {
            continue;
        }

        let property_id = result
            .target
            .clone()
            .unwrap_or_else(|| result.rule_id.clone());
        let message = result
            .message
            .clone()
            .unwrap_or_else(|| format!("business rule '{}' failed", result.rule_id));

        validation.push_error(ValidationError::new(property_id, message, &result.rule_id));
    }
}
