//! Client configuration descriptor.

use super::ConnectionResult;
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cluster name a client uses when none is configured.
pub const DEFAULT_CLUSTER_NAME: &str = "dev";

/// Infrastructure auto-discovery provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Kubernetes service discovery.
    Kubernetes,
    /// AWS EC2/ECS discovery.
    Aws,
    /// Google Cloud Platform discovery.
    Gcp,
}

impl Provider {
    /// All providers, in a fixed order.
    pub const ALL: [Provider; 3] = [Provider::Kubernetes, Provider::Aws, Provider::Gcp];

    /// Get the provider name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Kubernetes => "kubernetes",
            Self::Aws => "aws",
            Self::Gcp => "gcp",
        }
    }

    /// Prefix shared by all URL properties addressed to this provider.
    pub fn property_prefix(&self) -> &'static str {
        match self {
            Self::Kubernetes => "k8s",
            Self::Aws => "aws",
            Self::Gcp => "gcp",
        }
    }

    /// Whether the public-IP toggle is also written as a string property.
    pub fn mirrors_public_ip_property(&self) -> bool {
        matches!(self, Self::Gcp)
    }

    /// Translate a URL property name into the provider's native key.
    ///
    /// The provider prefix is removed and the camel-case remainder becomes
    /// kebab case: `awsSecurityGroupName` is `security-group-name`.
    pub fn native_key(&self, property: &str) -> Option<String> {
        property
            .strip_prefix(self.property_prefix())
            .filter(|rest| !rest.is_empty())
            .map(|rest| rest.to_case(Case::Kebab))
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How a client locates cluster members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryMode {
    /// Managed cloud discovery by token.
    Cloud,
    /// Infrastructure auto-discovery.
    AutoDiscovery(Vec<Provider>),
    /// Static member addresses.
    Static(Vec<String>),
    /// Nothing configured; the client falls back to its own default.
    Unset,
}

/// Complete client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Logical cluster name.
    pub cluster_name: String,
    /// Network settings, including discovery and TLS.
    pub network: NetworkConfig,
    /// Security settings.
    pub security: SecurityConfig,
    /// Additional client properties passed through unchanged.
    pub properties: BTreeMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            cluster_name: DEFAULT_CLUSTER_NAME.to_string(),
            network: NetworkConfig::default(),
            security: SecurityConfig::default(),
            properties: BTreeMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new client configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML.
    ///
    /// ```rust
    /// use hazelcast_jdbc_config::connection::ClientConfig;
    ///
    /// let config = ClientConfig::from_toml(r#"
    ///     cluster_name = "prod"
    ///
    ///     [network]
    ///     addresses = ["10.0.0.1:5701"]
    /// "#).unwrap();
    /// assert_eq!(config.cluster_name, "prod");
    /// ```
    pub fn from_toml(input: &str) -> ConnectionResult<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Set the cluster name.
    pub fn cluster_name(mut self, name: impl Into<String>) -> Self {
        self.cluster_name = name.into();
        self
    }

    /// Set the network configuration.
    pub fn network(mut self, network: NetworkConfig) -> Self {
        self.network = network;
        self
    }

    /// Set username/password credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.security.credentials = Some(credentials);
        self
    }

    /// Add a client property.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Determine which discovery mechanism this configuration uses.
    pub fn discovery_mode(&self) -> DiscoveryMode {
        let network = &self.network;
        if network.cloud.enabled {
            return DiscoveryMode::Cloud;
        }

        let providers = network.enabled_providers();
        if !providers.is_empty() {
            DiscoveryMode::AutoDiscovery(providers)
        } else if !network.addresses.is_empty() {
            DiscoveryMode::Static(network.addresses.clone())
        } else {
            DiscoveryMode::Unset
        }
    }
}

/// Network configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Static member addresses.
    pub addresses: Vec<String>,
    /// TLS settings; `None` until something configures TLS.
    pub ssl: Option<SslConfig>,
    /// Kubernetes discovery.
    pub kubernetes: DiscoveryConfig,
    /// AWS discovery.
    pub aws: DiscoveryConfig,
    /// GCP discovery.
    pub gcp: DiscoveryConfig,
    /// Managed cloud discovery.
    pub cloud: CloudConfig,
}

impl NetworkConfig {
    /// Create new network configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a static member address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.addresses.push(address.into());
        self
    }

    /// Set the TLS configuration.
    pub fn ssl(mut self, ssl: SslConfig) -> Self {
        self.ssl = Some(ssl);
        self
    }

    /// Get the TLS configuration, creating an empty one on first use.
    pub fn ssl_mut(&mut self) -> &mut SslConfig {
        self.ssl.get_or_insert_with(SslConfig::default)
    }

    /// Get a provider's discovery section.
    pub fn discovery(&self, provider: Provider) -> &DiscoveryConfig {
        match provider {
            Provider::Kubernetes => &self.kubernetes,
            Provider::Aws => &self.aws,
            Provider::Gcp => &self.gcp,
        }
    }

    /// Get a provider's discovery section for modification.
    pub fn discovery_mut(&mut self, provider: Provider) -> &mut DiscoveryConfig {
        match provider {
            Provider::Kubernetes => &mut self.kubernetes,
            Provider::Aws => &mut self.aws,
            Provider::Gcp => &mut self.gcp,
        }
    }

    /// Enable a provider and return its section.
    ///
    /// Calling this repeatedly keeps the properties set so far.
    pub fn enable_discovery(&mut self, provider: Provider) -> &mut DiscoveryConfig {
        let discovery = self.discovery_mut(provider);
        discovery.enabled = true;
        discovery
    }

    /// Providers whose discovery is enabled.
    pub fn enabled_providers(&self) -> Vec<Provider> {
        Provider::ALL
            .into_iter()
            .filter(|p| self.discovery(*p).enabled)
            .collect()
    }
}

/// Auto-discovery settings for one provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Whether the provider is used.
    pub enabled: bool,
    /// Connect to members through their public addresses.
    pub use_public_ip: bool,
    /// Provider properties in native (kebab-case) naming.
    pub properties: BTreeMap<String, String>,
}

impl DiscoveryConfig {
    /// Get a provider property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(|s| s.as_str())
    }

    /// Set a provider property.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// Managed cloud discovery settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Whether cloud discovery is used.
    pub enabled: bool,
    /// Token identifying the cloud cluster.
    pub discovery_token: Option<String>,
}

/// TLS configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    /// Whether TLS is enabled.
    pub enabled: bool,
    /// Identifier of the factory that builds the TLS context.
    pub factory_class_name: Option<String>,
    /// Key, certificate and trust material plus protocol name.
    pub properties: BTreeMap<String, String>,
}

impl SslConfig {
    /// Create an enabled TLS configuration.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    /// Add a property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Get a property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(|s| s.as_str())
    }

    /// Set a property.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// Security settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Username/password credentials.
    pub credentials: Option<Credentials>,
}

/// Username/password credentials. Either half may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Username.
    pub username: Option<String>,
    /// Password.
    pub password: Option<String>,
}

impl Credentials {
    /// Create credentials.
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self { username, password }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.cluster_name, "dev");
        assert!(config.network.addresses.is_empty());
        assert!(config.network.ssl.is_none());
        assert!(config.security.credentials.is_none());
        assert_eq!(config.discovery_mode(), DiscoveryMode::Unset);
    }

    #[test]
    fn test_native_key() {
        assert_eq!(Provider::Aws.native_key("awsTagKey").as_deref(), Some("tag-key"));
        assert_eq!(Provider::Aws.native_key("awsHzPort").as_deref(), Some("hz-port"));
        assert_eq!(
            Provider::Aws.native_key("awsConnectionTimeoutSeconds").as_deref(),
            Some("connection-timeout-seconds")
        );
        assert_eq!(
            Provider::Gcp.native_key("gcpPrivateKeyPath").as_deref(),
            Some("private-key-path")
        );
        assert_eq!(
            Provider::Gcp.native_key("gcpUsePublicIp").as_deref(),
            Some("use-public-ip")
        );
        assert_eq!(
            Provider::Kubernetes.native_key("k8sServicePort").as_deref(),
            Some("service-port")
        );
        assert_eq!(Provider::Aws.native_key("aws"), None);
        assert_eq!(Provider::Kubernetes.native_key("gcpRegion"), None);
    }

    #[test]
    fn test_ssl_mut_reuses_section() {
        let mut network = NetworkConfig::new();
        network.ssl_mut().enabled = true;
        network.ssl_mut().set_property("trustStore", "ts.jks");

        let ssl = network.ssl.unwrap();
        assert!(ssl.enabled);
        assert_eq!(ssl.property("trustStore"), Some("ts.jks"));
    }

    #[test]
    fn test_enable_discovery_keeps_properties() {
        let mut network = NetworkConfig::new();
        network.enable_discovery(Provider::Aws).set_property("region", "eu-west-1");
        network.enable_discovery(Provider::Aws).set_property("tag-key", "role");

        assert_eq!(network.enabled_providers(), vec![Provider::Aws]);
        assert_eq!(network.aws.properties.len(), 2);
        assert!(!network.gcp.enabled);
        assert!(!network.kubernetes.enabled);
    }

    #[test]
    fn test_discovery_mode() {
        let config = ClientConfig::new().network(NetworkConfig::new().address("node1:5701"));
        assert_eq!(
            config.discovery_mode(),
            DiscoveryMode::Static(vec!["node1:5701".to_string()])
        );

        let mut config = config;
        config.network.enable_discovery(Provider::Gcp);
        assert_eq!(
            config.discovery_mode(),
            DiscoveryMode::AutoDiscovery(vec![Provider::Gcp])
        );

        config.network.cloud.enabled = true;
        assert_eq!(config.discovery_mode(), DiscoveryMode::Cloud);
    }

    #[test]
    fn test_from_toml() {
        let config = ClientConfig::from_toml(
            r#"
            cluster_name = "prod"

            [network]
            addresses = ["10.0.0.1:5701", "10.0.0.2:5701"]

            [network.ssl]
            enabled = true
            properties = { protocol = "TLSv1.3" }

            [security.credentials]
            username = "admin"
            "#,
        )
        .unwrap();

        assert_eq!(config.cluster_name, "prod");
        assert_eq!(config.network.addresses.len(), 2);
        assert_eq!(
            config.network.ssl.as_ref().and_then(|s| s.property("protocol")),
            Some("TLSv1.3")
        );
        assert_eq!(
            config.security.credentials,
            Some(Credentials::new(Some("admin".to_string()), None))
        );
        assert!(!config.network.aws.enabled);
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(ClientConfig::from_toml("cluster_name = [").is_err());
    }
}
