//! `hzjdbc properties` command - List the connection properties.

use hazelcast_jdbc_config::driver;

use crate::error::CliResult;
use crate::output::{self, kv};

/// Run the properties command
pub async fn run() -> CliResult<()> {
    let properties = driver::ensure_registered().property_info();

    output::header("Connection Properties");
    for property in &properties {
        kv(property.name, property.description);
    }

    output::newline();
    output::info(&format!("{} properties recognised", properties.len()));

    Ok(())
}
