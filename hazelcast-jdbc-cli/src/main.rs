//! hzjdbc - Command-line interface for Hazelcast JDBC connection URLs.

use clap::Parser;

use hzjdbc_cli::cli::{Cli, Command};
use hzjdbc_cli::commands;
use hzjdbc_cli::error::CliResult;
use hzjdbc_cli::output;

#[tokio::main]
async fn main() {
    hazelcast_jdbc_config::logging::init();

    if let Err(e) = run().await {
        output::newline();
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve(args) => commands::resolve::run(args).await,
        Command::Check(args) => commands::check::run(args).await,
        Command::Properties => commands::properties::run().await,
        Command::Version => commands::version::run().await,
    }
}
