//! A guarded transition between two phases.

use phasegraph_expr::CompiledExpr;

/// A directed, guarded transition from one phase to another.
///
/// Mirrors [`crate::edge::Edge`] at the phase level: `from`/`to` are
/// internal phase indices, and phase edges carry no actions — variable
/// mutation is a node-level concern only.
#[derive(Debug, Clone)]
pub struct PhaseEdge {
    pub(crate) from: usize,
    pub(crate) to: usize,
    condition: CompiledExpr,
}

impl PhaseEdge {
    pub(crate) fn new(from: usize, to: usize, condition: CompiledExpr) -> Self {
        Self { from, to, condition }
    }

    /// The compiled guard condition.
    pub fn condition(&self) -> &CompiledExpr {
        &self.condition
    }
}
