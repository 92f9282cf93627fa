#![warn(missing_docs)]
#![deny(unsafe_code)]

//! Shared logging and filesystem helpers for the phasegraph CLI.

pub mod logging;
pub mod path_utils;

pub use logging::setup_tracing;
pub use path_utils::read_file;
