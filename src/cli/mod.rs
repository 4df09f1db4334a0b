//! Command-line interface for inspecting the algorithm registry

pub mod commands;

pub use commands::*;
