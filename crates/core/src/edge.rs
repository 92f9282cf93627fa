//! A guarded transition between two nodes of the same phase.

use phasegraph_expr::{CompiledExpr, Value};

/// A directed, guarded transition from one node to another within a
/// single phase, optionally carrying variable assignments.
///
/// `from`/`to` are internal node indices, resolved once at
/// [`crate::state_graph::StateGraph::add_edge`] time; they are never
/// exposed across the crate boundary (see the "indices, not pointers"
/// design note).
#[derive(Debug, Clone)]
pub struct Edge {
    pub(crate) from: usize,
    pub(crate) to: usize,
    condition: CompiledExpr,
    actions: Vec<(String, Value)>,
}

impl Edge {
    pub(crate) fn new(
        from: usize,
        to: usize,
        condition: CompiledExpr,
        actions: Vec<(String, Value)>,
    ) -> Self {
        Self { from, to, condition, actions }
    }

    /// The compiled guard condition.
    pub fn condition(&self) -> &CompiledExpr {
        &self.condition
    }

    /// The ordered `vars` assignments applied to the destination node
    /// when this edge fires. Order is declaration order; later entries
    /// for the same key simply overwrite earlier ones when applied.
    pub fn actions(&self) -> &[(String, Value)] {
        &self.actions
    }
}
