//! Pure evaluation of a compiled guard expression against a [`Scope`].

use crate::ast::{CmpOp, Expr, Leaf};
use crate::error::{ExprError, ExprResult};
use crate::value::{values_equal, Value};

/// A read-only source of bound names for expression evaluation.
///
/// `Node` (in `phasegraph-core`) implements this against its `vars` and
/// `properties` bags. The `properties.` prefix is routed to
/// [`Scope::property`] by the evaluator, never by the implementor.
pub trait Scope {
    /// Look up a variable by name.
    fn var(&self, name: &str) -> Option<&Value>;
    /// Look up a property by name (the part after the `properties.` prefix).
    fn property(&self, name: &str) -> Option<&Value>;
}

const PROPERTY_PREFIX: &str = "properties.";

fn lookup<'a>(scope: &'a dyn Scope, name: &str) -> Option<&'a Value> {
    match name.strip_prefix(PROPERTY_PREFIX) {
        Some(rest) => scope.property(rest),
        None => scope.var(name),
    }
}

/// Evaluate an expression tree in boolean position: literals and bound
/// names are coerced via truthiness; an absent name evaluates to `false`.
pub fn eval_bool(expr: &Expr, scope: &dyn Scope) -> ExprResult<bool> {
    match expr {
        Expr::Leaf(Leaf::Bool(b)) => Ok(*b),
        Expr::Leaf(Leaf::Number(v)) => Ok(v.truthy()),
        Expr::Leaf(Leaf::Str(s)) => Ok(!s.is_empty()),
        Expr::Leaf(Leaf::Ident(name)) => {
            Ok(lookup(scope, name).map(Value::truthy).unwrap_or(false))
        }
        Expr::Not(inner) => Ok(!eval_bool(inner, scope)?),
        Expr::And(left, right) => {
            if !eval_bool(left, scope)? {
                return Ok(false);
            }
            eval_bool(right, scope)
        }
        Expr::Or(left, right) => {
            if eval_bool(left, scope)? {
                return Ok(true);
            }
            eval_bool(right, scope)
        }
        Expr::Cmp { op, left, right } => {
            let l = eval_operand(left, scope)?;
            let r = eval_operand(right, scope)?;
            eval_cmp(*op, &l, &r)
        }
    }
}

/// Extract the [`Value`] of an operand: a leaf yields its own value (an
/// absent identifier is an error here, unlike in boolean position); a
/// non-leaf is evaluated as boolean and wrapped.
fn eval_operand(expr: &Expr, scope: &dyn Scope) -> ExprResult<Value> {
    match expr {
        Expr::Leaf(Leaf::Bool(b)) => Ok(Value::Bool(*b)),
        Expr::Leaf(Leaf::Number(v)) => Ok(v.clone()),
        Expr::Leaf(Leaf::Str(s)) => Ok(Value::Str(s.clone())),
        Expr::Leaf(Leaf::Ident(name)) => lookup(scope, name)
            .cloned()
            .ok_or_else(|| ExprError::UnknownName(name.clone())),
        Expr::Not(_) | Expr::And(_, _) | Expr::Or(_, _) | Expr::Cmp { .. } => {
            Ok(Value::Bool(eval_bool(expr, scope)?))
        }
    }
}

fn eval_cmp(op: CmpOp, left: &Value, right: &Value) -> ExprResult<bool> {
    match op {
        CmpOp::Eq => Ok(values_equal(left, right)),
        CmpOp::Ne => Ok(!values_equal(left, right)),
        CmpOp::Lt | CmpOp::Le | CmpOp::Gt | CmpOp::Ge => {
            let (Some(l), Some(r)) = (left.to_number(), right.to_number()) else {
                return Err(ExprError::NonNumericComparison);
            };
            Ok(match op {
                CmpOp::Lt => l < r,
                CmpOp::Le => l <= r,
                CmpOp::Gt => l > r,
                CmpOp::Ge => l >= r,
                CmpOp::Eq | CmpOp::Ne => unreachable!(),
            })
        }
    }
}
