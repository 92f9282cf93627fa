//! The top-level hierarchical graph: phases plus the phase edges between them.

use crate::error::{GraphError, GraphResult};
use crate::node::Node;
use crate::phase::Phase;
use crate::phase_edge::PhaseEdge;
use crate::state_graph::StepOutcome;
use phasegraph_expr::{CompiledExpr, ExprResult};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// The result of one [`MultiPhaseGraph::step`] call, reported back to
/// whatever drives the graph (a CLI, a test, an embedder).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Whether a node-level edge fired this step.
    pub state_changed: bool,
    /// Whether a phase-level edge fired this step.
    pub phase_changed: bool,
    /// The id of the current phase after this step, if any.
    pub phase_id: Option<String>,
    /// The id of the current node of the current phase after this step, if any.
    pub state_id: Option<String>,
}

/// The hierarchical runtime: an ordered set of phases, the phase edges
/// between them, and the current phase pointer.
///
/// All nodes, edges, phases, and phase edges are created once at load
/// time; only node `vars` and the two current pointers (this graph's
/// current phase, and each phase's current node) mutate thereafter.
#[derive(Debug, Clone, Default)]
pub struct MultiPhaseGraph {
    phases: Vec<Phase>,
    phase_index: BTreeMap<String, usize>,
    phase_edges: Vec<PhaseEdge>,
    /// Outgoing phase-edge indices per phase, in declaration order.
    phase_adjacency: Vec<Vec<usize>>,
    current_phase: Option<usize>,
}

impl MultiPhaseGraph {
    /// An empty graph with no phases, no phase edges, and no current phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all phases, phase edges, and the current phase pointer.
    /// Used by the configuration loader to guarantee that a failed load
    /// leaves no partial graph behind.
    pub fn clear(&mut self) {
        self.phases.clear();
        self.phase_index.clear();
        self.phase_edges.clear();
        self.phase_adjacency.clear();
        self.current_phase = None;
    }

    /// Add a phase, failing if its id is already present.
    pub fn add_phase(&mut self, phase: Phase) -> GraphResult<usize> {
        if self.phase_index.contains_key(phase.id()) {
            return Err(GraphError::DuplicateId(phase.id().to_string()));
        }
        let idx = self.phases.len();
        self.phase_index.insert(phase.id().to_string(), idx);
        self.phases.push(phase);
        self.phase_adjacency.push(Vec::new());
        Ok(idx)
    }

    /// Add a phase edge, failing if either endpoint is not a known phase id.
    pub fn add_phase_edge(
        &mut self,
        from: &str,
        to: &str,
        condition: CompiledExpr,
    ) -> GraphResult<usize> {
        let from_idx = *self
            .phase_index
            .get(from)
            .ok_or_else(|| GraphError::UnknownPhase(from.to_string()))?;
        let to_idx = *self
            .phase_index
            .get(to)
            .ok_or_else(|| GraphError::UnknownPhase(to.to_string()))?;

        let edge_idx = self.phase_edges.len();
        self.phase_edges.push(PhaseEdge::new(from_idx, to_idx, condition));
        self.phase_adjacency[from_idx].push(edge_idx);
        Ok(edge_idx)
    }

    /// Look up a phase by id.
    pub fn phase(&self, id: &str) -> Option<&Phase> {
        self.phase_index.get(id).map(|&idx| &self.phases[idx])
    }

    /// Mutable lookup of a phase by id.
    pub fn phase_mut(&mut self, id: &str) -> Option<&mut Phase> {
        match self.phase_index.get(id) {
            Some(&idx) => Some(&mut self.phases[idx]),
            None => None,
        }
    }

    /// The current phase's id, if any.
    pub fn current_phase_id(&self) -> GraphResult<&str> {
        self.current_phase
            .map(|idx| self.phases[idx].id())
            .ok_or(GraphError::NoCurrentPhase)
    }

    /// The current node's id, delegating to the current phase's graph.
    /// Fails if there is no current phase.
    pub fn current_state_id(&self) -> GraphResult<&str> {
        let idx = self.current_phase.ok_or(GraphError::NoCurrentPhase)?;
        self.phases[idx].graph().current_id()
    }

    /// A read-only view of the current phase's current node. Fails if
    /// there is no current phase.
    pub fn current_node(&self) -> GraphResult<&Node> {
        let idx = self.current_phase.ok_or(GraphError::NoCurrentPhase)?;
        self.phases[idx].graph().current_node()
    }

    /// A mutable view of the current phase's current node, for drivers
    /// that inject stimulus by writing `vars` between ticks. Fails if
    /// there is no current phase.
    pub fn current_node_mut(&mut self) -> GraphResult<&mut Node> {
        let idx = self.current_phase.ok_or(GraphError::NoCurrentPhase)?;
        self.phases[idx].graph_mut().current_node_mut()
    }

    /// Force the current phase to the given id, and force that phase's
    /// current node to its declared initial state even if one was
    /// already current. Returns `false` if the id is unknown, leaving
    /// the current phase unchanged.
    pub fn set_initial_phase(&mut self, id: &str) -> bool {
        match self.phase_index.get(id) {
            Some(&idx) => {
                self.current_phase = Some(idx);
                self.phases[idx].apply_initial_state();
                true
            }
            None => false,
        }
    }

    /// Make phase 0 current if any phases exist, applying its declared
    /// initial state only if it has no current node yet (resumability).
    /// Mirrors the final step of the configuration loader.
    pub fn activate_first_phase_if_present(&mut self) {
        if self.phases.is_empty() {
            return;
        }
        self.current_phase = Some(0);
        self.phases[0].resume_or_apply_initial_state();
    }

    /// Advance the hierarchy by one tick: the current phase's graph
    /// steps first (at most one node transition), then phase edges
    /// outgoing from the (possibly new) current node are evaluated
    /// (at most one phase transition).
    ///
    /// A runtime evaluation error aborts the step before any mutation
    /// it would have caused: the node-level step already guarantees
    /// atomicity internally, and phase-edge conditions are evaluated
    /// before the current-phase pointer is written.
    pub fn step(&mut self) -> ExprResult<StepReport> {
        let Some(phase_idx) = self.current_phase else {
            warn!("step: no current phase, nothing to do");
            return Ok(StepReport::default());
        };

        let node_outcome = self.phases[phase_idx].step()?;
        let state_changed = matches!(node_outcome, StepOutcome::Transitioned { .. });

        let mut phase_changed = false;
        let adjacency = self.phase_adjacency[phase_idx].clone();
        for edge_idx in adjacency {
            let node = self.phases[phase_idx].graph().current_node();
            let Ok(node) = node else {
                break;
            };
            let fires = self.phase_edges[edge_idx].condition().eval(node)?;
            if fires {
                let to = self.phase_edges[edge_idx].to;
                self.current_phase = Some(to);
                self.phases[to].resume_or_apply_initial_state();
                phase_changed = true;
                debug!(to = self.phases[to].id(), "phase transition fired");
                break;
            }
        }

        let final_phase = self.current_phase.unwrap();
        let phase_id = Some(self.phases[final_phase].id().to_string());
        let state_id = self.phases[final_phase].graph().current_id().ok().map(str::to_string);

        Ok(StepReport { state_changed, phase_changed, phase_id, state_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use phasegraph_expr::Value;

    fn cond(src: &str) -> CompiledExpr {
        CompiledExpr::compile(src).unwrap()
    }

    fn build_s3() -> MultiPhaseGraph {
        let mut g = MultiPhaseGraph::new();

        let mut main = Phase::new("Main");
        let mut idle = Node::new("Idle");
        idle.set_var("enabled", Value::Bool(true));
        idle.set_var("count", Value::Int(0));
        main.add_node(idle).unwrap();
        main.add_node(Node::new("Active")).unwrap();
        main.add_node(Node::new("Error")).unwrap();
        main.add_edge(
            "Idle",
            "Active",
            cond("enabled && count >= 0"),
            vec![("count".to_string(), Value::Int(1))],
        )
        .unwrap();
        main.add_edge(
            "Active",
            "Active",
            cond("count < 2 && enabled"),
            vec![("count".to_string(), Value::Int(2))],
        )
        .unwrap();
        main.add_edge("Active", "Error", cond("!enabled || count >= 2"), vec![])
            .unwrap();
        main.set_declared_initial_state("Idle");
        g.add_phase(main).unwrap();

        let mut recovery = Phase::new("Recovery");
        recovery.add_node(Node::new("Start")).unwrap();
        recovery.set_declared_initial_state("Start");
        g.add_phase(recovery).unwrap();

        g.add_phase_edge("Main", "Recovery", cond("count >= 2")).unwrap();

        g.activate_first_phase_if_present();
        g
    }

    #[test]
    fn s3_phase_transition_fires_same_step_as_triggering_node_edge() {
        let mut g = build_s3();

        let r1 = g.step().unwrap();
        assert!(r1.state_changed);
        assert!(!r1.phase_changed);
        assert_eq!(r1.phase_id.as_deref(), Some("Main"));
        assert_eq!(r1.state_id.as_deref(), Some("Active"));

        let r2 = g.step().unwrap();
        assert!(r2.state_changed);
        assert!(r2.phase_changed);
        assert_eq!(r2.phase_id.as_deref(), Some("Recovery"));
        assert_eq!(r2.state_id.as_deref(), Some("Start"));
    }

    #[test]
    fn current_node_accessors_delegate_to_current_phase() {
        let mut g = build_s3();
        assert_eq!(g.current_state_id().unwrap(), "Idle");
        assert_eq!(g.current_node().unwrap().id(), "Idle");
        g.current_node_mut().unwrap().set_var("count", Value::Int(5));
        assert_eq!(g.current_node().unwrap().var("count"), Some(&Value::Int(5)));
    }

    #[test]
    fn current_node_accessors_fail_without_current_phase() {
        let g = MultiPhaseGraph::new();
        assert_eq!(g.current_state_id().unwrap_err(), GraphError::NoCurrentPhase);
        assert_eq!(g.current_node().unwrap_err(), GraphError::NoCurrentPhase);
    }

    #[test]
    fn s6_phase_edge_to_unknown_phase_is_rejected() {
        let mut g = MultiPhaseGraph::new();
        g.add_phase(Phase::new("Main")).unwrap();
        assert_eq!(
            g.add_phase_edge("Main", "Nowhere", cond("true")).unwrap_err(),
            GraphError::UnknownPhase("Nowhere".to_string())
        );
    }

    #[test]
    fn resumability_preserves_node_across_phase_switches() {
        let mut g = MultiPhaseGraph::new();

        let mut main = Phase::new("Main");
        main.add_node(Node::new("A")).unwrap();
        main.add_node(Node::new("B")).unwrap();
        main.add_edge("A", "B", cond("true"), vec![]).unwrap();
        main.set_declared_initial_state("A");
        g.add_phase(main).unwrap();

        let mut other = Phase::new("Other");
        other.add_node(Node::new("X")).unwrap();
        other.set_declared_initial_state("X");
        g.add_phase(other).unwrap();

        g.add_phase_edge("Main", "Other", cond("true")).unwrap();
        g.add_phase_edge("Other", "Main", cond("true")).unwrap();

        g.activate_first_phase_if_present();

        // Main/A -> node edge fires to B, then the phase edge fires on B.
        let r1 = g.step().unwrap();
        assert!(r1.phase_changed);
        assert_eq!(r1.phase_id.as_deref(), Some("Other"));
        assert_eq!(r1.state_id.as_deref(), Some("X"));

        // Other/X has no outgoing node edge; the phase edge back to Main
        // fires regardless, and Main resumes at B rather than its
        // declared initial state A.
        let r2 = g.step().unwrap();
        assert!(!r2.state_changed);
        assert!(r2.phase_changed);
        assert_eq!(r2.phase_id.as_deref(), Some("Main"));
        assert_eq!(r2.state_id.as_deref(), Some("B"));
    }

    #[test]
    fn set_initial_phase_forces_declared_state_even_if_already_current() {
        let mut g = MultiPhaseGraph::new();
        let mut main = Phase::new("Main");
        main.add_node(Node::new("A")).unwrap();
        main.add_node(Node::new("B")).unwrap();
        main.add_edge("A", "B", cond("true"), vec![]).unwrap();
        main.set_declared_initial_state("A");
        g.add_phase(main).unwrap();

        g.activate_first_phase_if_present();
        g.step().unwrap();
        assert_eq!(g.phase("Main").unwrap().graph().current_id().unwrap(), "B");

        assert!(g.set_initial_phase("Main"));
        assert_eq!(g.phase("Main").unwrap().graph().current_id().unwrap(), "A");
    }
}
