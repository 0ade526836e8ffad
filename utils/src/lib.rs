//! Shared utilities for the seedkit workspace.

pub mod logging;

pub use logging::init_tracing;
