//! The serde shape of a configuration document, mirroring the grammar:
//!
//! ```text
//! root       := { phases: [Phase*], phase_edges: [PhaseEdge*]? }
//! Phase      := { id, initial_state?, nodes: [Node*]?, edges: [Edge*]? }
//! Node       := { id, params?, vars?, properties? }
//! Edge       := { from, to, condition, actions? }
//! PhaseEdge  := { from, to, condition }
//! ```
//!
//! Unknown keys (e.g. an editor's `position`) are ignored rather than
//! rejected, since none of these types use `deny_unknown_fields`.

use phasegraph_expr::Value;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The root of a configuration document.
#[derive(Debug, Deserialize)]
pub struct ConfigDocument {
    /// Phases, in declaration order.
    pub phases: Vec<PhaseDoc>,
    /// Phase edges, in declaration order.
    #[serde(default)]
    pub phase_edges: Vec<PhaseEdgeDoc>,
}

/// One phase's document form.
#[derive(Debug, Deserialize)]
pub struct PhaseDoc {
    /// This phase's id.
    pub id: String,
    /// The node id this phase resumes at when it has no current node.
    #[serde(default)]
    pub initial_state: Option<String>,
    /// Nodes, in declaration order.
    #[serde(default)]
    pub nodes: Vec<NodeDoc>,
    /// Edges, in declaration order.
    #[serde(default)]
    pub edges: Vec<EdgeDoc>,
}

/// One node's document form.
#[derive(Debug, Deserialize)]
pub struct NodeDoc {
    /// This node's id, unique within its phase.
    pub id: String,
    /// Immutable descriptive configuration.
    #[serde(default)]
    pub params: BTreeMap<String, Value>,
    /// Initial mutable runtime state.
    #[serde(default)]
    pub vars: BTreeMap<String, Value>,
    /// Values addressed via the `properties.` prefix in guard expressions.
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
}

/// One edge's document form.
#[derive(Debug, Deserialize)]
pub struct EdgeDoc {
    /// The source node id.
    pub from: String,
    /// The destination node id.
    pub to: String,
    /// The guard expression's source text.
    pub condition: String,
    /// `vars` assignments applied to the destination node when this
    /// edge fires. A JSON object is unordered by construction, so
    /// these are applied in key order, which is deterministic across
    /// runs even though it is not necessarily the document's byte order.
    #[serde(default)]
    pub actions: BTreeMap<String, Value>,
}

/// One phase edge's document form.
#[derive(Debug, Deserialize)]
pub struct PhaseEdgeDoc {
    /// The source phase id.
    pub from: String,
    /// The destination phase id.
    pub to: String,
    /// The guard expression's source text.
    pub condition: String,
}
