//! A named phase: one [`StateGraph`] plus its declared initial state.

use crate::error::GraphResult;
use crate::node::Node;
use crate::state_graph::{StateGraph, StepOutcome};
use phasegraph_expr::{CompiledExpr, ExprResult, Value};

/// A phase of a [`crate::multi_phase_graph::MultiPhaseGraph`]: an id, a
/// state graph, and the id of the node that graph should resume at the
/// first time this phase becomes current.
#[derive(Debug, Clone)]
pub struct Phase {
    id: String,
    graph: StateGraph,
    initial_state: Option<String>,
}

impl Phase {
    /// A phase with the given id and an empty graph.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), graph: StateGraph::new(), initial_state: None }
    }

    /// This phase's id, unique within its [`crate::multi_phase_graph::MultiPhaseGraph`].
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Declare the node this phase resumes at when it has no current
    /// node and becomes current. Does not itself set the current node;
    /// see [`Phase::apply_initial_state`].
    pub fn set_declared_initial_state(&mut self, id: impl Into<String>) {
        self.initial_state = Some(id.into());
    }

    /// The declared initial state id, if any.
    pub fn declared_initial_state(&self) -> Option<&str> {
        self.initial_state.as_deref()
    }

    /// Add a node to this phase's graph.
    pub fn add_node(&mut self, node: Node) -> GraphResult<usize> {
        self.graph.add_node(node)
    }

    /// Add an edge to this phase's graph.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        condition: CompiledExpr,
        actions: Vec<(String, Value)>,
    ) -> GraphResult<usize> {
        self.graph.add_edge(from, to, condition, actions)
    }

    /// Force this phase's current node to its declared initial state,
    /// even if a current node is already set. A no-op if no initial
    /// state was declared.
    pub fn apply_initial_state(&mut self) {
        if let Some(id) = self.initial_state.clone() {
            self.graph.set_initial_state(&id);
        }
    }

    /// Set the current node to the declared initial state only if no
    /// current node is already set, preserving resumption across phase
    /// switches.
    pub fn resume_or_apply_initial_state(&mut self) {
        if !self.graph.has_current() {
            self.apply_initial_state();
        }
    }

    /// Read-only access to this phase's graph.
    pub fn graph(&self) -> &StateGraph {
        &self.graph
    }

    /// Mutable access to this phase's graph.
    pub fn graph_mut(&mut self) -> &mut StateGraph {
        &mut self.graph
    }

    /// Advance this phase's graph by one tick.
    pub fn step(&mut self) -> ExprResult<StepOutcome> {
        self.graph.step()
    }
}
