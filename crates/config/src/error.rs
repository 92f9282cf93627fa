//! Error type for loading a configuration document.

use phasegraph_core::GraphError;
use phasegraph_expr::ExprError;
use thiserror::Error;

/// Errors raised while loading a configuration document into a
/// [`phasegraph_core::MultiPhaseGraph`].
///
/// Every variant here is a "load error" in the sense of the error
/// taxonomy: the graph being built is cleared before the load attempt
/// and left cleared on failure, so none of these ever leave a
/// half-populated graph behind.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A guard expression failed to lex or parse.
    #[error("load error: invalid condition: {0}")]
    Condition(#[from] ExprError),

    /// Duplicate id, unknown endpoint, or unknown phase.
    #[error("load error: {0}")]
    Graph(#[from] GraphError),

    /// The document's top-level shape did not match the expected schema.
    #[error("load error: malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result alias for configuration loading.
pub type LoadResult<T> = Result<T, LoadError>;
