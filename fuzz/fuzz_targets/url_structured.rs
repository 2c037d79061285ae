//! Structured fuzz target for URL resolution.
//!
//! Builds URLs from known property names with arbitrary values so the
//! fuzzer spends its time in the mapping rules rather than the prefix check.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_url_structured
//! ```

#![no_main]

use arbitrary::Arbitrary;
use hazelcast_jdbc_config::{DiscoveryMode, MappingTable, driver::Driver};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzUrl {
    authority: String,
    properties: Vec<(u8, String)>,
    info: Vec<(u8, String)>,
    token: Option<String>,
}

impl FuzzUrl {
    fn property_name(index: u8) -> &'static str {
        let table = MappingTable::global();
        table
            .iter()
            .nth(index as usize % table.len())
            .map(|(name, _)| name)
            .unwrap_or("clusterName")
    }

    fn to_url(&self) -> String {
        let mut url = format!("jdbc:hazelcast://{}", self.authority);
        let mut pairs: Vec<String> = self
            .properties
            .iter()
            .map(|(i, v)| format!("{}={}", Self::property_name(*i), v))
            .collect();
        if let Some(token) = &self.token {
            pairs.push(format!("discoverToken={}", token));
        }
        if !pairs.is_empty() {
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        url
    }
}

fuzz_target!(|input: FuzzUrl| {
    let url = input.to_url();
    let info = input
        .info
        .iter()
        .map(|(i, v)| (FuzzUrl::property_name(*i), v.as_str()));

    if let Ok(config) = Driver::new().client_config(Some(&url), info) {
        if config.network.cloud.enabled {
            assert_eq!(config.discovery_mode(), DiscoveryMode::Cloud);
            assert!(config.network.addresses.is_empty());
        } else {
            assert_eq!(config.network.addresses.len(), 1);
        }
    }
});
