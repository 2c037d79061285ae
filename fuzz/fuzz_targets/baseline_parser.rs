//! Fuzz target for TOML baselines.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_baseline_parser
//! ```

#![no_main]

use hazelcast_jdbc_config::{ConfigFactory, ConnectionUrl, TomlBaseline};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // The parser should never panic, only return errors
        if let Ok(baseline) = TomlBaseline::from_toml(input) {
            if let Ok(Some(url)) = ConnectionUrl::parse("jdbc:hazelcast://node1:5701?clusterName=fuzz") {
                let config = ConfigFactory::with_baseline(baseline).client_config(&url);
                assert_eq!(config.cluster_name, "fuzz");
            }
        }
    }
});
