//! Error types for lexing, parsing, and evaluating guard expressions.

use thiserror::Error;

/// Errors raised while compiling or evaluating a guard expression.
///
/// Lex and parse errors are raised at compile time (when a `condition`
/// source string is turned into a [`crate::CompiledExpr`]); the unknown-name
/// and non-numeric-comparison variants are raised at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    /// A malformed token, unterminated string, or unexpected character.
    #[error("lex error at byte {pos}: {message}")]
    Lex {
        /// Byte offset of the offending character.
        pos: usize,
        /// Human-readable description.
        message: String,
    },

    /// An unexpected token, unmatched parenthesis, or truncated input.
    #[error("parse error at byte {pos}: {message}")]
    Parse {
        /// Byte offset of the offending token.
        pos: usize,
        /// Human-readable description.
        message: String,
    },

    /// An identifier used as a comparison operand had no bound value.
    #[error("unknown name '{0}' in comparison")]
    UnknownName(String),

    /// An ordering comparison (`<`, `<=`, `>`, `>=`) had a non-numeric operand.
    #[error("non-numeric operand in comparison")]
    NonNumericComparison,
}

/// Result alias for expression compilation and evaluation.
pub type ExprResult<T> = Result<T, ExprError>;
