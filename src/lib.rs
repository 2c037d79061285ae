//! # Hazelcast JDBC
//!
//! Connection URL handling for the Hazelcast JDBC driver.
//!
//! Hazelcast JDBC provides:
//! - Recognition of `jdbc:hazelcast://` connection strings
//! - Resolution of a URL and property bag into a cluster client configuration
//! - Static addresses, managed cloud discovery and Kubernetes/AWS/GCP discovery
//! - TOML baselines that resolution starts from
//!
//! ## Quick Start
//!
//! ```rust
//! use hazelcast_jdbc::prelude::*;
//!
//! fn main() -> Result<(), ConnectionError> {
//!     let driver = hazelcast_jdbc::driver::ensure_registered();
//!
//!     let config = driver.client_config(
//!         Some("jdbc:hazelcast://node1:5701?clusterName=prod&awsRegion=eu-west-1"),
//!         [("user", "alice"), ("password", "secret")],
//!     )?;
//!
//!     assert_eq!(config.cluster_name, "prod");
//!     assert_eq!(config.discovery_mode(), DiscoveryMode::AutoDiscovery(vec![Provider::Aws]));
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// URL parsing and configuration resolution.
pub mod connection {
    pub use hazelcast_jdbc_config::connection::*;
}

/// Driver entry points and registration.
pub mod driver {
    pub use hazelcast_jdbc_config::driver::*;
}

/// Logging configuration.
pub mod logging {
    pub use hazelcast_jdbc_config::logging::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::connection::{
        BaselineSource, ClientConfig, ConfigFactory, ConnectionError, ConnectionResult,
        ConnectionUrl, Credentials, DiscoveryMode, NetworkConfig, Provider, SslConfig,
        TomlBaseline,
    };
    pub use crate::driver::Driver;
}

// Re-export key types at the crate root
pub use connection::{ClientConfig, ConnectionError, ConnectionUrl};
pub use driver::Driver;
