//! CLI command implementations.

pub mod common;
pub mod compile;
pub mod tokens;
pub mod version;
