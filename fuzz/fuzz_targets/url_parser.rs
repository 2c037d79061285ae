//! Fuzz target for the connection URL parser.
//!
//! This target feeds arbitrary strings to the parser and resolves every
//! URL it accepts.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_url_parser
//! ```

#![no_main]

use hazelcast_jdbc_config::{
    ConfigFactory, ConnectionUrl, DISCOVER_TOKEN_PROPERTY, connection::decode_component,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing and resolution should never panic
        if let Ok(Some(url)) = ConnectionUrl::parse(input) {
            let config = ConfigFactory::new().client_config(&url);
            if url.property(DISCOVER_TOKEN_PROPERTY).is_some() {
                assert_eq!(config.cluster_name, url.authority());
            } else {
                assert_eq!(config.network.addresses, vec![url.authority().to_string()]);
            }
        }

        let _ = decode_component(input);
    }
});
