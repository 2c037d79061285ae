//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// hzjdbc - Inspect Hazelcast JDBC connection URLs
#[derive(Parser, Debug)]
#[command(name = "hzjdbc")]
#[command(version)]
#[command(about = "hzjdbc - Inspect Hazelcast JDBC connection URLs", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a connection URL into the client configuration
    Resolve(ResolveArgs),

    /// Check whether the driver accepts a URL
    Check(CheckArgs),

    /// List the connection properties the driver understands
    Properties,

    /// Display version information
    Version,
}

// =============================================================================
// Resolve Command
// =============================================================================

/// Arguments for the `resolve` command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Connection URL, e.g. jdbc:hazelcast://node1:5701?clusterName=dev
    pub url: String,

    /// Extra connection property (repeatable); URL values take precedence
    #[arg(short, long = "property", value_name = "KEY=VALUE", value_parser = parse_property)]
    pub properties: Vec<(String, String)>,

    /// Baseline configuration file (defaults to $HAZELCAST_CLIENT_CONFIG or ./hazelcast-client.toml)
    #[arg(short, long)]
    pub baseline: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "pretty")]
    pub format: OutputFormat,
}

/// Output formats for resolved configurations
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Pretty,
    /// JSON document
    Json,
    /// TOML document, usable as a baseline file
    Toml,
}

fn parse_property(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))
}

// =============================================================================
// Check Command
// =============================================================================

/// Arguments for the `check` command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Connection URL to check
    pub url: String,
}
