//! `hzjdbc check` command - Check whether the driver accepts a URL.

use hazelcast_jdbc_config::{
    ConnectionUrl, DISCOVER_TOKEN_PROPERTY, MappingTable, PASSWORD_PROPERTY, USER_PROPERTY,
};

use crate::cli::CheckArgs;
use crate::error::{CliError, CliResult};
use crate::output::{self, kv};

/// Run the check command
pub async fn run(args: CheckArgs) -> CliResult<()> {
    let Some(url) = ConnectionUrl::parse(&args.url)? else {
        return Err(CliError::Command(format!(
            "URL {} is not supported",
            args.url
        )));
    };

    output::success("URL accepted");
    kv("Authority", url.authority());
    kv("Properties", &url.properties().len().to_string());

    let unknown = unknown_properties(&url);
    if !unknown.is_empty() {
        output::newline();
        output::warn("Ignored properties:");
        for name in unknown {
            output::list_item(name);
        }
    }

    Ok(())
}

/// Query keys the driver does not map onto the configuration.
fn unknown_properties(url: &ConnectionUrl) -> Vec<&str> {
    let table = MappingTable::global();
    let mut unknown: Vec<&str> = url
        .properties()
        .keys()
        .map(String::as_str)
        .filter(|name| {
            !table.contains(name)
                && ![USER_PROPERTY, PASSWORD_PROPERTY, DISCOVER_TOKEN_PROPERTY].contains(name)
        })
        .collect();
    unknown.sort_unstable();
    unknown
}
