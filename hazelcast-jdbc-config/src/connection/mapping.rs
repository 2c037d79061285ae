//! Property mapping table.
//!
//! Every recognised URL property maps to a [`MappingRule`]. The table is
//! plain data: a rule only touches a [`ClientConfig`] when it is applied.

use super::{ClientConfig, Provider};
use indexmap::IndexMap;
use std::sync::LazyLock;
use tracing::trace;

/// Property carrying the username.
pub const USER_PROPERTY: &str = "user";

/// Property carrying the password.
pub const PASSWORD_PROPERTY: &str = "password";

/// Property switching to managed cloud discovery.
pub const DISCOVER_TOKEN_PROPERTY: &str = "discoverToken";

/// What a recognised property does to the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingRule {
    /// Set the cluster name.
    ClusterName,
    /// Enable or disable TLS.
    SslEnabled,
    /// Set the TLS factory identifier.
    SslFactoryClassName,
    /// Set a TLS property named after the URL property.
    SslProperty,
    /// Enable a provider and set one of its properties.
    DiscoveryProperty(Provider),
    /// Enable a provider and set its public-IP flag.
    DiscoveryPublicIp(Provider),
}

impl MappingRule {
    /// Apply this rule for property `name` with an already decoded `value`.
    pub fn apply(self, config: &mut ClientConfig, name: &str, value: &str) {
        trace!(property = name, rule = ?self, "Applying mapping rule");

        match self {
            Self::ClusterName => config.cluster_name = value.to_string(),
            Self::SslEnabled => config.network.ssl_mut().enabled = parse_flag(value),
            Self::SslFactoryClassName => {
                config.network.ssl_mut().factory_class_name = Some(value.to_string());
            }
            Self::SslProperty => {
                config.network.ssl_mut().set_property(name, value);
            }
            Self::DiscoveryProperty(provider) => {
                let key = provider
                    .native_key(name)
                    .unwrap_or_else(|| name.to_string());
                config.network.enable_discovery(provider).set_property(key, value);
            }
            Self::DiscoveryPublicIp(provider) => {
                let discovery = config.network.enable_discovery(provider);
                discovery.use_public_ip = parse_flag(value);
                if provider.mirrors_public_ip_property() {
                    if let Some(key) = provider.native_key(name) {
                        discovery.set_property(key, "true");
                    }
                }
            }
        }
    }

    /// Short human-readable description of the rule.
    pub fn description(self) -> &'static str {
        match self {
            Self::ClusterName => "cluster name",
            Self::SslEnabled => "enable TLS",
            Self::SslFactoryClassName => "TLS factory class name",
            Self::SslProperty => "TLS property",
            Self::DiscoveryProperty(Provider::Kubernetes) => "Kubernetes discovery property",
            Self::DiscoveryProperty(Provider::Aws) => "AWS discovery property",
            Self::DiscoveryProperty(Provider::Gcp) => "GCP discovery property",
            Self::DiscoveryPublicIp(Provider::Kubernetes) => "Kubernetes public IP toggle",
            Self::DiscoveryPublicIp(Provider::Aws) => "AWS public IP toggle",
            Self::DiscoveryPublicIp(Provider::Gcp) => "GCP public IP toggle",
        }
    }

    /// The provider this rule enables, if any.
    pub fn provider(self) -> Option<Provider> {
        match self {
            Self::DiscoveryProperty(p) | Self::DiscoveryPublicIp(p) => Some(p),
            _ => None,
        }
    }
}

/// `"true"` in any letter case is true, anything else is false.
fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

const RULES: &[(&str, MappingRule)] = &[
    ("clusterName", MappingRule::ClusterName),
    // TLS
    ("sslEnabled", MappingRule::SslEnabled),
    ("trustStore", MappingRule::SslProperty),
    ("trustStorePassword", MappingRule::SslProperty),
    ("protocol", MappingRule::SslProperty),
    ("trustCertCollectionFile", MappingRule::SslProperty),
    ("keyFile", MappingRule::SslProperty),
    ("keyCertChainFile", MappingRule::SslProperty),
    ("factoryClassName", MappingRule::SslFactoryClassName),
    // Kubernetes
    ("k8sServiceDns", MappingRule::DiscoveryProperty(Provider::Kubernetes)),
    ("k8sServicePort", MappingRule::DiscoveryProperty(Provider::Kubernetes)),
    // AWS
    ("awsTagKey", MappingRule::DiscoveryProperty(Provider::Aws)),
    ("awsTagValue", MappingRule::DiscoveryProperty(Provider::Aws)),
    ("awsAccessKey", MappingRule::DiscoveryProperty(Provider::Aws)),
    ("awsSecretKey", MappingRule::DiscoveryProperty(Provider::Aws)),
    ("awsIamRole", MappingRule::DiscoveryProperty(Provider::Aws)),
    ("awsRegion", MappingRule::DiscoveryProperty(Provider::Aws)),
    ("awsHostHeader", MappingRule::DiscoveryProperty(Provider::Aws)),
    ("awsSecurityGroupName", MappingRule::DiscoveryProperty(Provider::Aws)),
    ("awsConnectionTimeoutSeconds", MappingRule::DiscoveryProperty(Provider::Aws)),
    ("awsReadTimeoutSeconds", MappingRule::DiscoveryProperty(Provider::Aws)),
    ("awsConnectionRetries", MappingRule::DiscoveryProperty(Provider::Aws)),
    ("awsHzPort", MappingRule::DiscoveryProperty(Provider::Aws)),
    ("awsUsePublicIp", MappingRule::DiscoveryPublicIp(Provider::Aws)),
    // GCP
    ("gcpPrivateKeyPath", MappingRule::DiscoveryProperty(Provider::Gcp)),
    ("gcpHzPort", MappingRule::DiscoveryProperty(Provider::Gcp)),
    ("gcpProjects", MappingRule::DiscoveryProperty(Provider::Gcp)),
    ("gcpRegion", MappingRule::DiscoveryProperty(Provider::Gcp)),
    ("gcpLabel", MappingRule::DiscoveryProperty(Provider::Gcp)),
    ("gcpUsePublicIp", MappingRule::DiscoveryPublicIp(Provider::Gcp)),
];

static MAPPING_TABLE: LazyLock<MappingTable> = LazyLock::new(MappingTable::build);

/// Lookup table from URL property name to [`MappingRule`].
#[derive(Debug)]
pub struct MappingTable {
    rules: IndexMap<&'static str, MappingRule>,
}

impl MappingTable {
    fn build() -> Self {
        let rules: IndexMap<_, _> = RULES.iter().copied().collect();
        trace!(rules = rules.len(), "Mapping table built");
        Self { rules }
    }

    /// The process-wide table, built on first use.
    pub fn global() -> &'static Self {
        &MAPPING_TABLE
    }

    /// Look up the rule for a property.
    pub fn get(&self, name: &str) -> Option<MappingRule> {
        self.rules.get(name).copied()
    }

    /// Check whether a property is recognised.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Iterate over all rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, MappingRule)> + '_ {
        self.rules.iter().map(|(name, rule)| (*name, *rule))
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
