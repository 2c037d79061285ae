//! Baseline configuration sources.
//!
//! Resolution always starts from a baseline [`ClientConfig`] and layers the
//! URL properties on top of it.

use super::{ClientConfig, ConnectionResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming a baseline configuration file.
pub const CONFIG_ENV_VAR: &str = "HAZELCAST_CLIENT_CONFIG";

/// Baseline file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "hazelcast-client.toml";

/// Source of the configuration a resolution starts from.
pub trait BaselineSource: Send + Sync {
    /// Produce a fresh baseline configuration.
    fn load(&self) -> ClientConfig;
}

/// Baseline of built-in defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBaseline;

impl BaselineSource for DefaultBaseline {
    fn load(&self) -> ClientConfig {
        ClientConfig::default()
    }
}

impl BaselineSource for ClientConfig {
    fn load(&self) -> ClientConfig {
        self.clone()
    }
}

/// Baseline parsed from TOML once and cloned for every resolution.
#[derive(Debug, Clone, Default)]
pub struct TomlBaseline {
    config: ClientConfig,
    origin: Option<PathBuf>,
}

impl TomlBaseline {
    /// Parse a baseline from TOML text.
    pub fn from_toml(input: &str) -> ConnectionResult<Self> {
        Ok(Self {
            config: ClientConfig::from_toml(input)?,
            origin: None,
        })
    }

    /// Read and parse a baseline file.
    pub fn from_path(path: impl AsRef<Path>) -> ConnectionResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = ClientConfig::from_toml(&content)?;
        info!(path = %path.display(), "Baseline configuration loaded");
        Ok(Self {
            config,
            origin: Some(path.to_path_buf()),
        })
    }

    /// Locate the baseline the way the driver does at startup.
    ///
    /// Looks at `HAZELCAST_CLIENT_CONFIG` first, then for
    /// `hazelcast-client.toml` in the working directory, and otherwise
    /// falls back to defaults.
    pub fn discover() -> ConnectionResult<Self> {
        Self::discover_from(std::env::var(CONFIG_ENV_VAR).ok(), Path::new("."))
    }

    /// [`discover`](Self::discover) with an explicit variable value and directory.
    ///
    /// A file named by the variable must exist; the directory file is optional.
    pub fn discover_from(env_path: Option<String>, dir: &Path) -> ConnectionResult<Self> {
        if let Some(path) = env_path.filter(|p| !p.is_empty()) {
            debug!(var = CONFIG_ENV_VAR, path = %path, "Using baseline from environment");
            return Self::from_path(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Self::from_path(candidate);
        }

        debug!("No baseline configuration found, using defaults");
        Ok(Self::default())
    }

    /// File the baseline was read from, if any.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// The parsed baseline.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl BaselineSource for TomlBaseline {
    fn load(&self) -> ClientConfig {
        self.config.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::ConnectionError;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_baseline() {
        assert_eq!(DefaultBaseline.load(), ClientConfig::default());
    }

    #[test]
    fn test_config_as_baseline() {
        let config = ClientConfig::new().cluster_name("staging");
        assert_eq!(config.load().cluster_name, "staging");
    }

    #[test]
    fn test_from_toml() {
        let baseline = TomlBaseline::from_toml("cluster_name = \"qa\"").unwrap();
        assert_eq!(baseline.load().cluster_name, "qa");
        assert!(baseline.origin().is_none());
    }

    #[test]
    fn test_discover_from_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE_NAME);
        std::fs::write(&path, "cluster_name = \"from-dir\"\n").unwrap();

        let baseline = TomlBaseline::discover_from(None, dir.path()).unwrap();
        assert_eq!(baseline.config().cluster_name, "from-dir");
        assert_eq!(baseline.origin(), Some(path.as_path()));
    }

    #[test]
    fn test_discover_prefers_env_path() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE_NAME),
            "cluster_name = \"from-dir\"\n",
        )
        .unwrap();
        let explicit = dir.path().join("explicit.toml");
        std::fs::write(&explicit, "cluster_name = \"from-env\"\n").unwrap();

        let baseline =
            TomlBaseline::discover_from(Some(explicit.display().to_string()), dir.path()).unwrap();
        assert_eq!(baseline.config().cluster_name, "from-env");
    }

    #[test]
    fn test_discover_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let baseline = TomlBaseline::discover_from(Some(String::new()), dir.path()).unwrap();
        assert_eq!(baseline.load(), ClientConfig::default());
    }

    #[test]
    fn test_missing_env_file_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml").display().to_string();
        let err = TomlBaseline::discover_from(Some(missing), dir.path()).unwrap_err();
        assert!(matches!(err, ConnectionError::Io(_)));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "cluster_name = 42").unwrap();
        let err = TomlBaseline::from_path(&path).unwrap_err();
        assert!(matches!(err, ConnectionError::Baseline(_)));
    }
}
