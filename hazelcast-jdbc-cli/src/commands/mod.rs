//! CLI command implementations.

pub mod check;
pub mod properties;
pub mod resolve;
pub mod version;
