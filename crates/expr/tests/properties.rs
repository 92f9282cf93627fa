//! Property-based tests for the guard expression evaluator.

use phasegraph_expr::{CompiledExpr, Scope, Value};
use proptest::prelude::*;
use std::collections::BTreeMap;

struct MapScope(BTreeMap<String, Value>);

impl Scope for MapScope {
    fn var(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
    fn property(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<bool>().prop_map(Value::Bool),
        "[a-zA-Z0-9]{0,8}".prop_map(Value::Str),
    ]
}

proptest! {
    /// Evaluating a bare variable yields exactly the §4.1 truthiness rule
    /// applied to its bound value.
    #[test]
    fn truthiness_round_trip(v in value_strategy()) {
        let expected = v.truthy();
        let mut vars = BTreeMap::new();
        vars.insert("x".to_string(), v);
        let scope = MapScope(vars);
        let expr = CompiledExpr::compile("x").unwrap();
        prop_assert_eq!(expr.eval(&scope).unwrap(), expected);
    }

    /// `false && X` never raises, regardless of whether X is defined.
    #[test]
    fn short_circuit_and_never_fails(defined in any::<bool>()) {
        let mut vars = BTreeMap::new();
        if defined {
            vars.insert("x".to_string(), Value::Int(1));
        }
        let scope = MapScope(vars);
        let expr = CompiledExpr::compile("false && x > 0").unwrap();
        prop_assert_eq!(expr.eval(&scope).unwrap(), false);
    }

    /// `true || X` never raises, regardless of whether X is defined.
    #[test]
    fn short_circuit_or_never_fails(defined in any::<bool>()) {
        let mut vars = BTreeMap::new();
        if defined {
            vars.insert("x".to_string(), Value::Int(1));
        }
        let scope = MapScope(vars);
        let expr = CompiledExpr::compile("true || x > 0").unwrap();
        prop_assert_eq!(expr.eval(&scope).unwrap(), true);
    }

    /// Re-compiling from the stored source always reproduces the same
    /// evaluation result (recompile-on-clone is a valid substitute for
    /// deep-cloning the tree).
    #[test]
    fn recompile_from_source_is_equivalent(n in -1000i64..1000) {
        let expr = CompiledExpr::compile("x < 0").unwrap();
        let recompiled = CompiledExpr::compile(expr.source()).unwrap();
        let mut vars = BTreeMap::new();
        vars.insert("x".to_string(), Value::Int(n));
        let scope = MapScope(vars);
        prop_assert_eq!(expr.eval(&scope).unwrap(), recompiled.eval(&scope).unwrap());
    }
}
