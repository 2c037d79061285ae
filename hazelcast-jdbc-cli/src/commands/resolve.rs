//! `hzjdbc resolve` command - Resolve a URL into a client configuration.

use std::path::Path;

use hazelcast_jdbc_config::driver::Driver;
use hazelcast_jdbc_config::{ClientConfig, DiscoveryConfig, DiscoveryMode, Provider, TomlBaseline};

use crate::cli::{OutputFormat, ResolveArgs};
use crate::error::{CliError, CliResult};
use crate::output::{self, kv};

/// Run the resolve command
pub async fn run(args: ResolveArgs) -> CliResult<()> {
    let (baseline, origin) = load_baseline(args.baseline.as_deref()).await?;

    let driver = Driver::with_baseline(baseline);
    let config = driver.client_config(Some(args.url.as_str()), args.properties)?;

    match args.format {
        OutputFormat::Json => output::raw(&serde_json::to_string_pretty(&config)?),
        OutputFormat::Toml => output::raw(&toml::to_string_pretty(&config)?),
        OutputFormat::Pretty => print_pretty(&config, origin.as_deref()),
    }

    Ok(())
}

async fn load_baseline(path: Option<&Path>) -> CliResult<(TomlBaseline, Option<String>)> {
    let Some(path) = path else {
        let baseline = TomlBaseline::discover()?;
        let origin = baseline.origin().map(|p| p.display().to_string());
        return Ok((baseline, origin));
    };

    if !path.exists() {
        return Err(CliError::Config(format!(
            "Baseline file not found: {}",
            path.display()
        )));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let baseline = TomlBaseline::from_toml(&content)?;
    Ok((baseline, Some(path.display().to_string())))
}

fn print_pretty(config: &ClientConfig, origin: Option<&str>) {
    output::header("Client Configuration");

    kv("Baseline", origin.unwrap_or("defaults"));
    kv("Cluster", &config.cluster_name);
    kv("Discovery", &describe_discovery(&config.discovery_mode()));

    if let Some(token) = &config.network.cloud.discovery_token {
        kv("Cloud token", &output::mask(token));
    }
    if !config.network.addresses.is_empty() {
        kv("Addresses", &config.network.addresses.join(", "));
    }

    if let Some(credentials) = &config.security.credentials {
        output::newline();
        output::section("Credentials");
        kv("User", credentials.username.as_deref().unwrap_or("-"));
        kv(
            "Password",
            &credentials
                .password
                .as_deref()
                .map(output::mask)
                .unwrap_or_else(|| "-".to_string()),
        );
    }

    if let Some(ssl) = &config.network.ssl {
        output::newline();
        output::section("TLS");
        kv("Enabled", &ssl.enabled.to_string());
        if let Some(factory) = &ssl.factory_class_name {
            kv("Factory", factory);
        }
        for (key, value) in &ssl.properties {
            let value = if key.to_lowercase().contains("password") {
                output::mask(value)
            } else {
                value.clone()
            };
            kv(key, &value);
        }
    }

    for provider in config.network.enabled_providers() {
        output::newline();
        print_provider(provider, config.network.discovery(provider));
    }

    output::newline();
}

fn print_provider(provider: Provider, discovery: &DiscoveryConfig) {
    output::section(&format!("Discovery ({})", provider));
    kv("Use public IP", &discovery.use_public_ip.to_string());
    for (key, value) in &discovery.properties {
        let value = if key.contains("secret") {
            output::mask(value)
        } else {
            value.clone()
        };
        kv(key, &value);
    }
}

fn describe_discovery(mode: &DiscoveryMode) -> String {
    match mode {
        DiscoveryMode::Cloud => "cloud".to_string(),
        DiscoveryMode::AutoDiscovery(providers) => {
            let names: Vec<_> = providers.iter().map(Provider::name).collect();
            format!("auto ({})", names.join(", "))
        }
        DiscoveryMode::Static(_) => "static".to_string(),
        DiscoveryMode::Unset => "none".to_string(),
    }
}
