#![warn(missing_docs)]
#![deny(unsafe_code)]

//! Phasegraph Core: the hierarchical phase-graph runtime.
//!
//! A [`MultiPhaseGraph`] owns a set of [`Phase`]s, each wrapping a
//! [`StateGraph`] of [`Node`]s connected by [`Edge`]s; phases themselves
//! are connected by [`PhaseEdge`]s. Guard conditions on both kinds of
//! edge are [`phasegraph_expr::CompiledExpr`] values evaluated against
//! the phase's current node.

pub mod edge;
pub mod error;
pub mod multi_phase_graph;
pub mod node;
pub mod phase;
pub mod phase_edge;
pub mod state_graph;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use multi_phase_graph::{MultiPhaseGraph, StepReport};
pub use node::Node;
pub use phase::Phase;
pub use phase_edge::PhaseEdge;
pub use state_graph::{StateGraph, StepOutcome};
