//! Expression evaluation.
//!
//! The evaluator is stateless - it takes the scope as a parameter to each
//! eval call. The scope is the record's property values merged with the
//! contextual fields the caller provides (element id/type, sibling data,
//! process data).

use crate::ast::{BinaryOp, Expr, Literal, LiteralKind, UnaryOp};
use crate::error::{EvalError, EvalResult};
use lens_core::{PropertyMap, Value};

/// Condition expression evaluator.
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Create a new evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluate an expression against a scope.
    pub fn eval(&self, expr: &Expr, scope: &PropertyMap) -> EvalResult<Value> {
        match expr {
            Expr::Literal(lit) => Ok(self.eval_literal(lit)),
            Expr::Ref(name, _) => Ok(self.eval_ref(name, scope)),
            Expr::UnaryOp(op, operand, _) => self.eval_unary_op(*op, operand, scope),
            Expr::BinaryOp(op, left, right, _) => self.eval_binary_op(*op, left, right, scope),
        }
    }

    /// Evaluate an expression and coerce the result to a boolean.
    pub fn eval_bool(&self, expr: &Expr, scope: &PropertyMap) -> EvalResult<bool> {
        Ok(self.eval(expr, scope)?.is_truthy())
    }

    fn eval_literal(&self, lit: &Literal) -> Value {
        match &lit.kind {
            LiteralKind::Null => Value::Null,
            LiteralKind::Bool(b) => Value::Bool(*b),
            LiteralKind::Number(n) => Value::Number(*n),
            LiteralKind::String(s) => Value::Text(s.clone()),
        }
    }

    /// Unknown references evaluate to Null. Records always carry every
    /// schema key, so this only arises for absent context fields.
    fn eval_ref(&self, name: &str, scope: &PropertyMap) -> Value {
        scope.get(name).cloned().unwrap_or(Value::Null)
    }

    fn eval_unary_op(&self, op: UnaryOp, operand: &Expr, scope: &PropertyMap) -> EvalResult<Value> {
        let value = self.eval(operand, scope)?;
        match op {
            UnaryOp::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }

    fn eval_binary_op(
        &self,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
        scope: &PropertyMap,
    ) -> EvalResult<Value> {
        // Short-circuit logical operators before evaluating the right side.
        match op {
            BinaryOp::And => {
                let left_val = self.eval(left, scope)?;
                if !left_val.is_truthy() {
                    return Ok(Value::Bool(false));
                }
                let right_val = self.eval(right, scope)?;
                return Ok(Value::Bool(right_val.is_truthy()));
            }
            BinaryOp::Or => {
                let left_val = self.eval(left, scope)?;
                if left_val.is_truthy() {
                    return Ok(Value::Bool(true));
                }
                let right_val = self.eval(right, scope)?;
                return Ok(Value::Bool(right_val.is_truthy()));
            }
            _ => {}
        }

        let left_val = self.eval(left, scope)?;
        let right_val = self.eval(right, scope)?;

        match op {
            BinaryOp::Eq => Ok(Value::Bool(values_equal(&left_val, &right_val))),
            BinaryOp::NotEq => Ok(Value::Bool(!values_equal(&left_val, &right_val))),
            BinaryOp::Lt => self.eval_ordering(&left_val, &right_val, |o| o.is_lt()),
            BinaryOp::LtEq => self.eval_ordering(&left_val, &right_val, |o| o.is_le()),
            BinaryOp::Gt => self.eval_ordering(&left_val, &right_val, |o| o.is_gt()),
            BinaryOp::GtEq => self.eval_ordering(&left_val, &right_val, |o| o.is_ge()),
            BinaryOp::And | BinaryOp::Or => unreachable!("handled above"),
        }
    }

    fn eval_ordering(
        &self,
        left: &Value,
        right: &Value,
        test: fn(std::cmp::Ordering) -> bool,
    ) -> EvalResult<Value> {
        let ordering = match (left, right) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            _ => None,
        };

        match ordering {
            Some(o) => Ok(Value::Bool(test(o))),
            None => Err(EvalError::type_error(format!(
                "cannot order {} against {}",
                left.type_name(),
                right.type_name()
            ))),
        }
    }
}

/// Typed equality. Values of different types are unequal, never an error.
fn values_equal(left: &Value, right: &Value) -> bool {
    left == right
}
