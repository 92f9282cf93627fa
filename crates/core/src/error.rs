//! Error types for graph construction and navigation.

use thiserror::Error;

/// Errors raised while building or navigating a state graph, phase, or
/// multi-phase graph.
///
/// Construction errors (`DuplicateId`, `UnknownEndpoint`, `UnknownPhase`)
/// are raised at load time; `NoCurrentState`/`NoCurrentPhase` are raised
/// whenever an accessor is used before a current pointer is set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node or phase id was added twice within the same scope.
    #[error("duplicate id: {0}")]
    DuplicateId(String),

    /// An edge or phase edge referenced an id with no matching node/phase.
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// A phase edge's target phase id does not exist.
    #[error("unknown phase: {0}")]
    UnknownPhase(String),

    /// Queried current node/state while none was set.
    #[error("no current state")]
    NoCurrentState,

    /// Queried current phase while none was set.
    #[error("no current phase")]
    NoCurrentPhase,
}

/// Result alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
