//! A single state of a phase's graph: three value bags.

use phasegraph_expr::{Scope, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node (state) of a [`crate::state_graph::StateGraph`].
///
/// Carries three independently-scoped bags:
/// - `params`: immutable descriptive configuration.
/// - `vars`: mutable runtime state, the only bag writable by edge actions.
/// - `properties`: immutable, addressed via the `properties.` prefix in
///   guard expressions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    id: String,
    params: BTreeMap<String, Value>,
    vars: BTreeMap<String, Value>,
    properties: BTreeMap<String, Value>,
}

impl Node {
    /// Create a node with the given id and empty bags.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            params: BTreeMap::new(),
            vars: BTreeMap::new(),
            properties: BTreeMap::new(),
        }
    }

    /// This node's id, unique within its phase.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Read a `params` entry. `None` distinguishes absence from a
    /// present-but-falsy value.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Read a `vars` entry.
    pub fn var(&self, key: &str) -> Option<&Value> {
        self.vars.get(key)
    }

    /// Read a `properties` entry.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// The full `params` bag.
    pub fn params(&self) -> &BTreeMap<String, Value> {
        &self.params
    }

    /// The full `vars` bag.
    pub fn vars(&self) -> &BTreeMap<String, Value> {
        &self.vars
    }

    /// The full `properties` bag.
    pub fn properties(&self) -> &BTreeMap<String, Value> {
        &self.properties
    }

    /// Insert or overwrite a `params` entry. Used by the configuration
    /// loader; edge actions may never call this.
    pub fn insert_param(&mut self, key: impl Into<String>, value: Value) {
        self.params.insert(key.into(), value);
    }

    /// Insert or overwrite a `vars` entry. Used by the configuration
    /// loader for initial values, and by [`crate::state_graph::StateGraph::step`]
    /// for edge actions. Idempotent: writing the same key twice simply
    /// replaces the prior value, including across value tags.
    pub fn set_var(&mut self, key: impl Into<String>, value: Value) {
        self.vars.insert(key.into(), value);
    }

    /// Insert or overwrite a `properties` entry. Used by the
    /// configuration loader.
    pub fn insert_property(&mut self, key: impl Into<String>, value: Value) {
        self.properties.insert(key.into(), value);
    }
}

impl Scope for Node {
    fn var(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}
