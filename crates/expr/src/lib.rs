#![warn(missing_docs)]
#![deny(unsafe_code)]

//! The guard expression language: lexer, recursive-descent parser, and
//! evaluator shared by every condition in a phasegraph configuration.
//!
//! This crate has no knowledge of nodes, edges, or phases; it exposes
//! [`Scope`] as the seam for whatever carries bound names at evaluation
//! time. `phasegraph-core` implements `Scope` for its `Node` type.

pub mod ast;
pub mod compiled;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod value;

pub use ast::{CmpOp, Expr, Leaf};
pub use compiled::CompiledExpr;
pub use error::{ExprError, ExprResult};
pub use evaluator::Scope;
pub use value::{values_equal, Value};
