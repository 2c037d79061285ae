//! Driver entry points.
//!
//! The driver recognises `jdbc:hazelcast://` URLs and produces the client
//! configuration a connection is opened with. Registration with a driver
//! manager happens once per process through [`ensure_registered`].
//!
//! ```rust
//! use hazelcast_jdbc_config::driver;
//!
//! let driver = driver::ensure_registered();
//! assert!(driver::is_registered());
//! assert!(driver.accepts_url(Some("jdbc:hazelcast://node1:5701")).unwrap());
//!
//! let config = driver
//!     .client_config(Some("jdbc:hazelcast://node1:5701"), [("clusterName", "qa")])
//!     .unwrap();
//! assert_eq!(config.cluster_name, "qa");
//! ```

use crate::connection::{
    BaselineSource, ClientConfig, ConfigFactory, ConnectionError, ConnectionResult, ConnectionUrl,
    DISCOVER_TOKEN_PROPERTY, DefaultBaseline, MappingTable, PASSWORD_PROPERTY, USER_PROPERTY,
};
use parking_lot::Mutex;
use tracing::{debug, info};

/// Driver major version.
pub const MAJOR_VERSION: u32 = 1;

/// Driver minor version.
pub const MINOR_VERSION: u32 = 0;

static DRIVER: Driver = Driver::new();
static REGISTERED: Mutex<bool> = parking_lot::const_mutex(false);

/// Register the driver if that has not happened yet and return it.
///
/// Also builds the property mapping table, so later resolutions only read it.
pub fn ensure_registered() -> &'static Driver {
    let mut registered = REGISTERED.lock();
    if !*registered {
        let table = MappingTable::global();
        info!(
            version = %format!("{}.{}", MAJOR_VERSION, MINOR_VERSION),
            properties = table.len(),
            "Hazelcast JDBC driver registered"
        );
        *registered = true;
    }
    &DRIVER
}

/// Check whether [`ensure_registered`] has run.
pub fn is_registered() -> bool {
    *REGISTERED.lock()
}

/// Description of a property the driver understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyInfo {
    /// Property name as used in the URL.
    pub name: &'static str,
    /// What the property configures.
    pub description: &'static str,
    /// Whether a connection needs it.
    pub required: bool,
}

/// The Hazelcast JDBC driver.
#[derive(Debug, Default)]
pub struct Driver<B: BaselineSource = DefaultBaseline> {
    factory: ConfigFactory<B>,
}

impl Driver<DefaultBaseline> {
    /// Create a driver that resolves against built-in defaults.
    pub const fn new() -> Self {
        Self {
            factory: ConfigFactory::new(),
        }
    }
}

impl<B: BaselineSource> Driver<B> {
    /// Create a driver with a custom baseline.
    pub fn with_baseline(baseline: B) -> Self {
        Self {
            factory: ConfigFactory::with_baseline(baseline),
        }
    }

    /// Get the configuration factory.
    pub fn factory(&self) -> &ConfigFactory<B> {
        &self.factory
    }

    /// Check whether this driver handles `url`.
    ///
    /// A missing URL or a hazelcast URL with invalid syntax is an error.
    pub fn accepts_url(&self, url: Option<&str>) -> ConnectionResult<bool> {
        Ok(ConnectionUrl::parse_nullable(url)?.is_some())
    }

    /// Resolve the client configuration for a connection attempt.
    ///
    /// `info` is the caller's property bag; URL query values take precedence.
    pub fn client_config<I, K, V>(&self, url: Option<&str>, info: I) -> ConnectionResult<ClientConfig>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let raw = url.ok_or(ConnectionError::NullUrl)?;
        let parsed = ConnectionUrl::parse_required(raw)?.with_info(info);
        debug!(authority = parsed.authority(), "Resolving client configuration");
        Ok(self.factory.client_config(&parsed))
    }

    /// Properties the driver understands.
    pub fn property_info(&self) -> Vec<PropertyInfo> {
        let fixed = [
            (USER_PROPERTY, "username"),
            (PASSWORD_PROPERTY, "password"),
            (DISCOVER_TOKEN_PROPERTY, "cloud discovery token"),
        ];

        fixed
            .into_iter()
            .chain(
                MappingTable::global()
                    .iter()
                    .map(|(name, rule)| (name, rule.description())),
            )
            .map(|(name, description)| PropertyInfo {
                name,
                description,
                required: false,
            })
            .collect()
    }

    /// Driver major version.
    pub fn major_version(&self) -> u32 {
        MAJOR_VERSION
    }

    /// Driver minor version.
    pub fn minor_version(&self) -> u32 {
        MINOR_VERSION
    }

    /// The driver does not claim full JDBC compliance.
    pub fn jdbc_compliant(&self) -> bool {
        false
    }
}
