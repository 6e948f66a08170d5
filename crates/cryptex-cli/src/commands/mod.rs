//! CLI command implementations.

pub mod create;
