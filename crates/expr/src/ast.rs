//! The expression tree produced by the parser and consumed by the evaluator.

use crate::value::Value;
use serde::{Deserialize, Serialize};

/// A leaf of the expression tree: a literal or a name to look up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Leaf {
    /// A boolean literal.
    Bool(bool),
    /// An integer or float literal.
    Number(Value),
    /// A string literal.
    Str(String),
    /// An identifier; resolved against a [`crate::Scope`] at evaluation time.
    /// Carries the `properties.` prefix verbatim if present.
    Ident(String),
}

/// A comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

/// The guard expression tree.
///
/// A tagged sum of {Leaf, Not, And, Or, Cmp}; no dynamic dispatch is
/// needed beyond matching on this tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A literal or identifier.
    Leaf(Leaf),
    /// Logical negation.
    Not(Box<Expr>),
    /// Short-circuiting conjunction.
    And(Box<Expr>, Box<Expr>),
    /// Short-circuiting disjunction.
    Or(Box<Expr>, Box<Expr>),
    /// A single comparison between two operands.
    Cmp {
        /// The operator.
        op: CmpOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
}
