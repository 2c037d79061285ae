//! # hazelcast-jdbc-config
//!
//! URL parsing and client configuration resolution for the Hazelcast JDBC
//! driver.
//!
//! This crate turns a `jdbc:hazelcast://` connection string into a
//! [`ClientConfig`] ready to hand to a cluster client:
//! - static member addresses or managed cloud discovery by token
//! - Kubernetes, AWS and GCP auto-discovery
//! - TLS settings and username/password credentials
//!
//! No network I/O happens here.
//!
//! ## Quick Start
//!
//! ```rust
//! use hazelcast_jdbc_config::driver;
//!
//! let config = driver::ensure_registered()
//!     .client_config(
//!         Some("jdbc:hazelcast://node1:5701?clusterName=dev&sslEnabled=true&trustStore=ts.jks"),
//!         [("user", "alice"), ("password", "secret")],
//!     )
//!     .unwrap();
//!
//! assert_eq!(config.cluster_name, "dev");
//! assert_eq!(config.network.addresses, vec!["node1:5701".to_string()]);
//! assert!(config.network.ssl.as_ref().unwrap().enabled);
//! ```
//!
//! ## Baselines
//!
//! Resolution starts from a baseline configuration, by default the built-in
//! defaults. A TOML baseline can be supplied instead:
//!
//! ```rust
//! use hazelcast_jdbc_config::{ConnectionUrl, driver::Driver, TomlBaseline};
//!
//! let baseline = TomlBaseline::from_toml(r#"
//!     [properties]
//!     "hazelcast.client.statistics.enabled" = "true"
//! "#).unwrap();
//! let driver = Driver::with_baseline(baseline);
//!
//! let config = driver
//!     .client_config(Some("jdbc:hazelcast://node1:5701"), [("clusterName", "qa")])
//!     .unwrap();
//! assert_eq!(config.properties["hazelcast.client.statistics.enabled"], "true");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod connection;
pub mod driver;
pub mod logging;

pub use connection::{
    BaselineSource, ClientConfig, CloudConfig, ConfigFactory, ConnectionError, ConnectionResult,
    ConnectionUrl, Credentials, DISCOVER_TOKEN_PROPERTY, DefaultBaseline, DiscoveryConfig,
    DiscoveryMode, MappingRule, MappingTable, NetworkConfig, PASSWORD_PROPERTY, Provider,
    SecurityConfig, SslConfig, TomlBaseline, URL_PREFIX, USER_PROPERTY,
};
pub use driver::{Driver, PropertyInfo};
