//! `hzjdbc version` command - Display version information.

use hazelcast_jdbc_config::driver;

use crate::error::CliResult;
use crate::output::{self, kv};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub async fn run() -> CliResult<()> {
    let driver = driver::ensure_registered();

    output::header("hzjdbc");

    kv("Version", VERSION);
    kv("Package", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);

    output::newline();

    output::section("Driver");
    kv(
        "Version",
        &format!("{}.{}", driver.major_version(), driver.minor_version()),
    );
    kv("JDBC compliant", &driver.jdbc_compliant().to_string());

    output::newline();
    output::dim("jdbc:hazelcast://host[:port][?property=value&...]");

    Ok(())
}
