//! hzjdbc - Command-line interface for Hazelcast JDBC connection URLs.
//!
//! This crate provides the `hzjdbc` tool for checking connection URLs
//! and inspecting the client configuration they resolve to.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
