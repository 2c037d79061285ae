//! Client configuration resolution.

use super::mapping::{DISCOVER_TOKEN_PROPERTY, MappingTable, PASSWORD_PROPERTY, USER_PROPERTY};
use super::{
    BaselineSource, ClientConfig, ConnectionUrl, Credentials, DefaultBaseline, NetworkConfig,
    decode_component,
};
use std::borrow::Cow;
use tracing::{debug, warn};

/// Turns parsed connection URLs into client configurations.
///
/// Every call starts from a fresh copy of the baseline, so one factory can
/// be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct ConfigFactory<B: BaselineSource = DefaultBaseline> {
    baseline: B,
}

impl ConfigFactory<DefaultBaseline> {
    /// Create a factory starting from built-in defaults.
    pub const fn new() -> Self {
        Self {
            baseline: DefaultBaseline,
        }
    }
}

impl<B: BaselineSource> ConfigFactory<B> {
    /// Create a factory with a custom baseline.
    pub fn with_baseline(baseline: B) -> Self {
        Self { baseline }
    }

    /// Get the baseline source.
    pub fn baseline(&self) -> &B {
        &self.baseline
    }

    /// Resolve the client configuration for a URL.
    ///
    /// A `discoverToken` property selects managed cloud discovery and the
    /// authority becomes the cluster name; no other property is mapped.
    /// Otherwise the authority becomes the only static address and every
    /// recognised property is applied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hazelcast_jdbc_config::connection::{ConfigFactory, ConnectionUrl};
    ///
    /// let url = ConnectionUrl::parse("jdbc:hazelcast://my-cluster?discoverToken=ABC123")
    ///     .unwrap()
    ///     .unwrap();
    /// let config = ConfigFactory::new().client_config(&url);
    ///
    /// assert_eq!(config.cluster_name, "my-cluster");
    /// assert_eq!(config.network.cloud.discovery_token.as_deref(), Some("ABC123"));
    /// assert!(config.network.addresses.is_empty());
    /// ```
    pub fn client_config(&self, url: &ConnectionUrl) -> ClientConfig {
        let mut config = self.baseline.load();
        apply_credentials(url, &mut config);

        if let Some(token) = url.property(DISCOVER_TOKEN_PROPERTY) {
            debug!(cluster = url.authority(), "Using cloud discovery");
            config.network.cloud.enabled = true;
            config.network.cloud.discovery_token = Some(token.to_string());
            config.cluster_name = url.authority().to_string();
            return config;
        }

        config.network = NetworkConfig::new().address(url.authority());
        let applied = apply_properties(url, &mut config, MappingTable::global());

        debug!(
            address = url.authority(),
            cluster = %config.cluster_name,
            applied,
            "Client configuration resolved"
        );

        config
    }
}

fn apply_credentials(url: &ConnectionUrl, config: &mut ClientConfig) {
    let user = url.property(USER_PROPERTY);
    let password = url.property(PASSWORD_PROPERTY);
    if user.is_some() || password.is_some() {
        config.security.credentials = Some(Credentials::new(
            user.map(String::from),
            password.map(String::from),
        ));
    }
}

fn apply_properties(url: &ConnectionUrl, config: &mut ClientConfig, table: &MappingTable) -> usize {
    let mut applied = 0;
    for (name, rule) in table.iter() {
        if let Some(raw) = url.property(name) {
            rule.apply(config, name, &decode_value(name, raw));
            applied += 1;
        }
    }
    applied
}

fn decode_value<'a>(name: &str, raw: &'a str) -> Cow<'a, str> {
    match decode_component(raw) {
        Some(decoded) => Cow::Owned(decoded),
        None => {
            warn!(property = name, "Property value is not valid percent-encoding, using it verbatim");
            Cow::Borrowed(raw)
        }
    }
}
