#![warn(missing_docs)]
#![deny(unsafe_code)]

//! Translates a JSON configuration document into a [`phasegraph_core::MultiPhaseGraph`].
//!
//! This crate owns only the document shape and the load procedure; it
//! does not read files itself (see [`phasegraph_utils::read_file`] for
//! that), matching the core's own "no file I/O" boundary.

pub mod document;
pub mod error;
pub mod loader;

pub use document::{ConfigDocument, EdgeDoc, NodeDoc, PhaseDoc, PhaseEdgeDoc};
pub use error::{LoadError, LoadResult};
pub use loader::load_into;
