//! Loads a [`ConfigDocument`] into a [`MultiPhaseGraph`].

use crate::document::ConfigDocument;
use crate::error::{LoadError, LoadResult};
use phasegraph_core::{MultiPhaseGraph, Node, Phase};
use phasegraph_expr::CompiledExpr;
use tracing::{debug, info};

/// Parse and load a configuration document's bytes into `graph`.
///
/// On any failure `graph` is left cleared, mirroring the recovery
/// policy: a failed load must not half-mutate a previously loaded
/// graph. On success `graph` replaces whatever it held before.
pub fn load_into(graph: &mut MultiPhaseGraph, source: &str) -> LoadResult<()> {
    graph.clear();

    let document: ConfigDocument = match serde_json::from_str(source) {
        Ok(doc) => doc,
        Err(err) => return Err(LoadError::Malformed(err)),
    };

    if let Err(err) = populate(graph, &document) {
        graph.clear();
        return Err(err);
    }

    graph.activate_first_phase_if_present();
    info!(
        phases = document.phases.len(),
        phase_edges = document.phase_edges.len(),
        "configuration loaded"
    );
    Ok(())
}

fn populate(graph: &mut MultiPhaseGraph, document: &ConfigDocument) -> LoadResult<()> {
    for phase_doc in &document.phases {
        debug!(phase = %phase_doc.id, "loading phase");
        let mut phase = Phase::new(phase_doc.id.clone());

        for node_doc in &phase_doc.nodes {
            let mut node = Node::new(node_doc.id.clone());
            for (key, value) in &node_doc.params {
                node.insert_param(key.clone(), value.clone());
            }
            for (key, value) in &node_doc.vars {
                node.set_var(key.clone(), value.clone());
            }
            for (key, value) in &node_doc.properties {
                node.insert_property(key.clone(), value.clone());
            }
            phase.add_node(node)?;
        }

        for edge_doc in &phase_doc.edges {
            let condition = CompiledExpr::compile(edge_doc.condition.clone())?;
            let actions: Vec<_> = edge_doc
                .actions
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            phase.add_edge(&edge_doc.from, &edge_doc.to, condition, actions)?;
        }

        if let Some(initial) = &phase_doc.initial_state {
            phase.set_declared_initial_state(initial.clone());
            phase.apply_initial_state();
        }

        graph.add_phase(phase)?;
    }

    for phase_edge_doc in &document.phase_edges {
        let condition = CompiledExpr::compile(phase_edge_doc.condition.clone())?;
        graph.add_phase_edge(&phase_edge_doc.from, &phase_edge_doc.to, condition)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use phasegraph_expr::Value;

    #[test]
    fn loads_a_single_phase_document() {
        let source = r#"
        {
            "phases": [
                {
                    "id": "Main",
                    "initial_state": "Idle",
                    "nodes": [
                        {"id": "Idle", "vars": {"count": 0}},
                        {"id": "Active"}
                    ],
                    "edges": [
                        {
                            "from": "Idle",
                            "to": "Active",
                            "condition": "true",
                            "actions": {"count": 1}
                        }
                    ]
                }
            ]
        }
        "#;

        let mut graph = MultiPhaseGraph::new();
        load_into(&mut graph, source).unwrap();

        assert_eq!(graph.current_phase_id().unwrap(), "Main");
        assert_eq!(graph.phase("Main").unwrap().graph().current_id().unwrap(), "Idle");
    }

    #[test]
    fn unknown_edge_endpoint_leaves_graph_cleared() {
        let source = r#"
        {
            "phases": [
                {
                    "id": "Main",
                    "nodes": [{"id": "Idle"}],
                    "edges": [{"from": "Idle", "to": "Nowhere", "condition": "true"}]
                }
            ]
        }
        "#;

        let mut graph = MultiPhaseGraph::new();
        graph.add_phase(Phase::new("Leftover")).unwrap();

        assert!(load_into(&mut graph, source).is_err());
        assert!(graph.phase("Main").is_none());
        assert!(graph.phase("Leftover").is_none());
    }

    #[test]
    fn s6_phase_edge_to_unknown_phase_fails_and_clears() {
        let source = r#"
        {
            "phases": [{"id": "Main", "nodes": [{"id": "Idle"}]}],
            "phase_edges": [{"from": "Main", "to": "Nowhere", "condition": "true"}]
        }
        "#;

        let mut graph = MultiPhaseGraph::new();
        assert!(load_into(&mut graph, source).is_err());
        assert!(graph.phase("Main").is_none());
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        let mut graph = MultiPhaseGraph::new();
        assert!(load_into(&mut graph, "not json").is_err());
    }

    #[test]
    fn node_bags_round_trip_through_the_document() {
        let source = r#"
        {
            "phases": [
                {
                    "id": "Main",
                    "initial_state": "A",
                    "nodes": [
                        {
                            "id": "A",
                            "params": {"label": "start"},
                            "vars": {"count": 0},
                            "properties": {"owner": "team-a"}
                        }
                    ]
                }
            ]
        }
        "#;

        let mut graph = MultiPhaseGraph::new();
        load_into(&mut graph, source).unwrap();

        let node = graph.phase("Main").unwrap().graph().node("A").unwrap();
        assert_eq!(node.param("label"), Some(&Value::Str("start".to_string())));
        assert_eq!(node.var("count"), Some(&Value::Int(0)));
        assert_eq!(node.property("owner"), Some(&Value::Str("team-a".to_string())));
    }
}
