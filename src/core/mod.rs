//! Core library components.
//!
//! Config loading, templates, secret sources, and file writing. Nothing in
//! here prints; the CLI layer owns user-facing output.

pub mod config;
pub mod constants;
pub mod runner;
pub mod source;
pub mod template;
pub mod types;
pub mod writer;
