use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phasegraph_expr::{CompiledExpr, Scope, Value};
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

const SOURCE: &str = "enabled && count >= 0 && !(count > 10) && properties.name == \"TestNode\"";

fn bench_lex(c: &mut Criterion) {
    c.bench_function("lex", |b| {
        b.iter(|| phasegraph_expr::lexer::lex(black_box(SOURCE)).unwrap())
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("compile", |b| {
        b.iter(|| CompiledExpr::compile(black_box(SOURCE)).unwrap())
    });
}

fn bench_eval(c: &mut Criterion) {
    let compiled = CompiledExpr::compile(SOURCE).unwrap();
    let mut scope = MapScope(BTreeMap::new());
    scope.0.insert("enabled".to_string(), Value::Bool(true));
    scope.0.insert("count".to_string(), Value::Int(3));
    scope.0.insert("name".to_string(), Value::Str("TestNode".to_string()));

    c.bench_function("eval", |b| b.iter(|| compiled.eval(black_box(&scope)).unwrap()));
}

criterion_group!(benches, bench_lex, bench_parse, bench_eval);
criterion_main!(benches);
