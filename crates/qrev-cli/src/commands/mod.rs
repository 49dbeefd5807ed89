//! CLI command implementations.

pub mod common;
pub mod import;
pub mod version;
