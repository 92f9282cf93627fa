//! A single phase's finite state machine: nodes, edges, and `step`.

use crate::edge::Edge;
use crate::error::{GraphError, GraphResult};
use crate::node::Node;
use phasegraph_expr::{CompiledExpr, ExprResult, Value};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// The outcome of a single [`StateGraph::step`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// There was no current node; the step had no effect.
    NoCurrent,
    /// An edge fired; the current node moved to the given id.
    Transitioned {
        /// The id of the node now current.
        to: String,
    },
    /// No outgoing edge of the current node fired.
    NoTransition,
}

/// A single phase's FSM: nodes, the edges between them, adjacency
/// indexed by declaration order, and the current node pointer.
#[derive(Debug, Clone, Default)]
pub struct StateGraph {
    nodes: Vec<Node>,
    node_index: BTreeMap<String, usize>,
    edges: Vec<Edge>,
    /// Outgoing edge indices per node, in declaration order.
    adjacency: Vec<Vec<usize>>,
    current: Option<usize>,
}

impl StateGraph {
    /// An empty graph with no nodes, edges, or current node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, failing if its id is already present.
    pub fn add_node(&mut self, node: Node) -> GraphResult<usize> {
        if self.node_index.contains_key(node.id()) {
            return Err(GraphError::DuplicateId(node.id().to_string()));
        }
        let idx = self.nodes.len();
        self.node_index.insert(node.id().to_string(), idx);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        Ok(idx)
    }

    /// Add an edge, failing if either endpoint is not a known node id.
    /// Declaration order is preserved in the `from` node's adjacency list.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        condition: CompiledExpr,
        actions: Vec<(String, Value)>,
    ) -> GraphResult<usize> {
        let from_idx = *self
            .node_index
            .get(from)
            .ok_or_else(|| GraphError::UnknownEndpoint(from.to_string()))?;
        let to_idx = *self
            .node_index
            .get(to)
            .ok_or_else(|| GraphError::UnknownEndpoint(to.to_string()))?;

        let edge_idx = self.edges.len();
        self.edges.push(Edge::new(from_idx, to_idx, condition, actions));
        self.adjacency[from_idx].push(edge_idx);
        Ok(edge_idx)
    }

    /// Set the current node from its id. Returns `false` if the id is
    /// unknown, leaving the current node unchanged.
    pub fn set_initial_state(&mut self, id: &str) -> bool {
        match self.node_index.get(id) {
            Some(&idx) => {
                self.current = Some(idx);
                true
            }
            None => false,
        }
    }

    /// Whether a current node is set.
    pub fn has_current(&self) -> bool {
        self.current.is_some()
    }

    /// The current node's id.
    pub fn current_id(&self) -> GraphResult<&str> {
        self.current
            .map(|idx| self.nodes[idx].id())
            .ok_or(GraphError::NoCurrentState)
    }

    /// A read-only view of the current node.
    pub fn current_node(&self) -> GraphResult<&Node> {
        self.current
            .map(|idx| &self.nodes[idx])
            .ok_or(GraphError::NoCurrentState)
    }

    /// A mutable view of the current node, for drivers that inject
    /// stimulus by writing `vars` between ticks.
    pub fn current_node_mut(&mut self) -> GraphResult<&mut Node> {
        match self.current {
            Some(idx) => Ok(&mut self.nodes[idx]),
            None => Err(GraphError::NoCurrentState),
        }
    }

    /// Look up a node by id, regardless of current.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Advance one tick: evaluate the current node's outgoing edges in
    /// declaration order and apply the first whose condition is true.
    ///
    /// If no current node is set, this has no effect. A runtime
    /// evaluation error propagates without mutating any state: edges
    /// are evaluated before any write happens, so a failing condition
    /// never leaves a partial transition behind.
    pub fn step(&mut self) -> ExprResult<StepOutcome> {
        let Some(cur) = self.current else {
            trace!("step: no current node, nothing to do");
            return Ok(StepOutcome::NoCurrent);
        };

        for edge_idx in self.adjacency[cur].clone() {
            let fires = self.edges[edge_idx].condition().eval(&self.nodes[cur])?;
            if fires {
                let to = self.edges[edge_idx].to;
                for (key, value) in self.edges[edge_idx].actions().to_vec() {
                    self.nodes[to].set_var(key, value);
                }
                self.current = Some(to);
                debug!(to = self.nodes[to].id(), "node transition fired");
                return Ok(StepOutcome::Transitioned { to: self.nodes[to].id().to_string() });
            }
        }

        Ok(StepOutcome::NoTransition)
    }
}
