//! A guard expression's source paired with its parsed tree.

use crate::error::ExprResult;
use crate::evaluator::{eval_bool, Scope};
use crate::parser::parse;
use serde::{Deserialize, Serialize};

/// A guard expression, compiled once at load time and owned exclusively
/// by the edge or phase edge that holds it.
///
/// Cloning a `CompiledExpr` deep-copies the tree (Rust's ownership makes
/// this cheap and safe, unlike the original's need to disallow copying);
/// callers that would rather re-parse from source can do so via
/// [`CompiledExpr::source`] and [`CompiledExpr::compile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledExpr {
    source: String,
    ast: crate::ast::Expr,
}

impl CompiledExpr {
    /// Lex and parse `source` into a compiled expression.
    pub fn compile(source: impl Into<String>) -> ExprResult<Self> {
        let source = source.into();
        let ast = parse(&source)?;
        Ok(Self { source, ast })
    }

    /// The original source text this expression was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluate this expression against a scope, producing a boolean.
    pub fn eval(&self, scope: &dyn Scope) -> ExprResult<bool> {
        eval_bool(&self.ast, scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use std::collections::BTreeMap;

    struct MapScope(BTreeMap<String, Value>);
    impl Scope for MapScope {
        fn var(&self, name: &str) -> Option<&Value> {
            self.0.get(name)
        }
        fn property(&self, _name: &str) -> Option<&Value> {
            None
        }
    }

    #[test]
    fn compiles_and_evaluates() {
        let expr = CompiledExpr::compile("count < 2").unwrap();
        let mut vars = BTreeMap::new();
        vars.insert("count".to_string(), Value::Int(1));
        let scope = MapScope(vars);
        assert!(expr.eval(&scope).unwrap());
        assert_eq!(expr.source(), "count < 2");
    }

    #[test]
    fn invalid_source_fails_to_compile() {
        assert!(CompiledExpr::compile("(a &&").is_err());
    }
}
