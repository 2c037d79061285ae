//! Connection URL parsing and client configuration resolution.
//!
//! A Hazelcast JDBC URL names either a static member address or, together
//! with a `discoverToken`, a managed cloud cluster:
//!
//! ```text
//! jdbc:hazelcast://host[:port][?property=value&...]
//! jdbc:hazelcast://cluster-name?discoverToken=TOKEN
//! ```
//!
//! # Parsing URLs
//!
//! ```rust
//! use hazelcast_jdbc_config::connection::ConnectionUrl;
//!
//! let url = ConnectionUrl::parse("jdbc:hazelcast://node1:5701?clusterName=dev")
//!     .unwrap()
//!     .expect("hazelcast URL");
//! assert_eq!(url.authority(), "node1:5701");
//! assert_eq!(url.property("clusterName"), Some("dev"));
//!
//! // URLs for other drivers are not an error, they simply do not match.
//! assert!(ConnectionUrl::parse("jdbc:postgresql://localhost/db").unwrap().is_none());
//! ```
//!
//! # Resolving Client Configuration
//!
//! ```rust
//! use hazelcast_jdbc_config::connection::{ConfigFactory, ConnectionUrl, Provider};
//!
//! let url = ConnectionUrl::parse("jdbc:hazelcast://node1:5701?awsRegion=eu-west-1")
//!     .unwrap()
//!     .unwrap();
//! let config = ConfigFactory::new().client_config(&url);
//!
//! assert_eq!(config.network.addresses, vec!["node1:5701".to_string()]);
//! assert!(config.network.discovery(Provider::Aws).enabled);
//! assert_eq!(config.network.aws.property("region"), Some("eu-west-1"));
//! ```
//!
//! # Discovery Providers
//!
//! ```rust
//! use hazelcast_jdbc_config::connection::Provider;
//!
//! assert_eq!(Provider::Aws.native_key("awsTagKey").as_deref(), Some("tag-key"));
//! assert_eq!(Provider::Kubernetes.native_key("k8sServiceDns").as_deref(), Some("service-dns"));
//! assert_eq!(Provider::Gcp.native_key("awsRegion"), None);
//! ```

mod baseline;
mod factory;
mod mapping;
mod options;
mod parser;

pub use baseline::{BaselineSource, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE_NAME, DefaultBaseline, TomlBaseline};
pub use factory::ConfigFactory;
pub use mapping::{
    DISCOVER_TOKEN_PROPERTY, MappingRule, MappingTable, PASSWORD_PROPERTY, USER_PROPERTY,
};
pub use options::{
    ClientConfig, CloudConfig, Credentials, DEFAULT_CLUSTER_NAME, DiscoveryConfig, DiscoveryMode,
    NetworkConfig, Provider, SecurityConfig, SslConfig,
};
pub use parser::{ConnectionUrl, JDBC_URL_PREFIX, URL_PREFIX, decode_component};

use thiserror::Error;

/// Errors that can occur while parsing a connection URL or loading a baseline.
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// No URL was supplied at all.
    #[error("URL cannot be null.")]
    NullUrl,

    /// The URL belongs to some other driver.
    #[error("URL {0} is not supported")]
    UnsupportedUrl(String),

    /// The URL uses the hazelcast scheme but is not a valid URI.
    #[error("Invalid connection URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Baseline configuration could not be parsed.
    #[error("Invalid baseline configuration: {0}")]
    Baseline(String),

    /// Baseline configuration could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for ConnectionError {
    fn from(err: toml::de::Error) -> Self {
        ConnectionError::Baseline(format!("Failed to parse TOML: {}", err))
    }
}

/// Result type for connection operations.
pub type ConnectionResult<T> = Result<T, ConnectionError>;
