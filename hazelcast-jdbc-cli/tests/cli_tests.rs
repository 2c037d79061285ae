//! Integration tests for the hzjdbc CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get the hzjdbc binary, isolated from any ambient baseline file
#[allow(deprecated)]
fn hzjdbc_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hzjdbc").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("HAZELCAST_CLIENT_CONFIG")
        .env_remove("HZ_JDBC_DEBUG")
        .env_remove("HZ_JDBC_LOG_LEVEL");
    cmd
}

#[test]
fn test_help_command() {
    let dir = TempDir::new().unwrap();
    hzjdbc_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: hzjdbc <COMMAND>"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("properties"));
}

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    hzjdbc_cmd(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("Version"))
        .stdout(predicate::str::contains("0.1.0"))
        .stdout(predicate::str::contains("1.0"));
}

#[test]
fn test_resolve_help() {
    let dir = TempDir::new().unwrap();
    hzjdbc_cmd(&dir)
        .args(["resolve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--property"))
        .stdout(predicate::str::contains("--baseline"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_resolve_json() {
    let dir = TempDir::new().unwrap();
    let output = hzjdbc_cmd(&dir)
        .args([
            "resolve",
            "jdbc:hazelcast://node1:5701?clusterName=prod&sslEnabled=true&trustStore=ts.jks",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["cluster_name"], "prod");
    assert_eq!(config["network"]["addresses"][0], "node1:5701");
    assert_eq!(config["network"]["ssl"]["enabled"], true);
    assert_eq!(config["network"]["ssl"]["properties"]["trustStore"], "ts.jks");
}

#[test]
fn test_resolve_with_properties() {
    let dir = TempDir::new().unwrap();
    let output = hzjdbc_cmd(&dir)
        .args([
            "resolve",
            "jdbc:hazelcast://node1:5701?user=url-user",
            "-p",
            "user=info-user",
            "-p",
            "password=secret",
            "-f",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let credentials = &config["security"]["credentials"];
    assert_eq!(credentials["username"], "url-user");
    assert_eq!(credentials["password"], "secret");
}

#[test]
fn test_resolve_toml() {
    let dir = TempDir::new().unwrap();
    hzjdbc_cmd(&dir)
        .args([
            "resolve",
            "jdbc:hazelcast://my-cluster?discoverToken=abc123",
            "--format",
            "toml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("cluster_name = \"my-cluster\""))
        .stdout(predicate::str::contains("discovery_token = \"abc123\""));
}

#[test]
fn test_resolve_pretty_masks_password() {
    let dir = TempDir::new().unwrap();
    hzjdbc_cmd(&dir)
        .args([
            "resolve",
            "jdbc:hazelcast://node1:5701?user=alice&password=hunter2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Client Configuration"))
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_resolve_with_baseline_file() {
    let dir = TempDir::new().unwrap();
    let baseline = dir.path().join("baseline.toml");
    fs::write(
        &baseline,
        "cluster_name = \"from-baseline\"\n\n[properties]\n\"hazelcast.client.statistics.enabled\" = \"true\"\n",
    )
    .unwrap();

    let output = hzjdbc_cmd(&dir)
        .args(["resolve", "jdbc:hazelcast://node1:5701", "-f", "json", "-b"])
        .arg(&baseline)
        .output()
        .unwrap();

    assert!(output.status.success());
    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["cluster_name"], "from-baseline");
    assert_eq!(
        config["properties"]["hazelcast.client.statistics.enabled"],
        "true"
    );
}

#[test]
fn test_resolve_discovers_baseline_in_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("hazelcast-client.toml"),
        "cluster_name = \"local\"\n",
    )
    .unwrap();

    hzjdbc_cmd(&dir)
        .args(["resolve", "jdbc:hazelcast://node1:5701", "-f", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cluster_name = \"local\""));
}

#[test]
fn test_resolve_missing_baseline_file() {
    let dir = TempDir::new().unwrap();
    hzjdbc_cmd(&dir)
        .args(["resolve", "jdbc:hazelcast://node1", "-b", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Baseline file not found"));
}

#[test]
fn test_resolve_unsupported_url() {
    let dir = TempDir::new().unwrap();
    hzjdbc_cmd(&dir)
        .args(["resolve", "jdbc:mysql://db:3306"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "URL jdbc:mysql://db:3306 is not supported",
        ));
}

#[test]
fn test_check_accepts_url() {
    let dir = TempDir::new().unwrap();
    hzjdbc_cmd(&dir)
        .args(["check", "jdbc:hazelcast://node1:5701?clusterName=dev&bogus=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("URL accepted"))
        .stdout(predicate::str::contains("node1:5701"))
        .stdout(predicate::str::contains("bogus"));
}

#[test]
fn test_check_rejects_other_drivers() {
    let dir = TempDir::new().unwrap();
    hzjdbc_cmd(&dir)
        .args(["check", "jdbc:postgresql://localhost/db"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not supported"));
}

#[test]
fn test_check_invalid_syntax() {
    let dir = TempDir::new().unwrap();
    hzjdbc_cmd(&dir)
        .args(["check", "jdbc:hazelcast://node1:port"])
        .assert()
        .failure();
}

#[test]
fn test_check_reports_syntax_errors_once() {
    let dir = TempDir::new().unwrap();
    hzjdbc_cmd(&dir)
        .args(["check", "jdbc:hazelcast://?clusterName=dev"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("URL accepted").not())
        .stderr(predicate::str::contains("expected authority"));
}

#[test]
fn test_properties_command() {
    let dir = TempDir::new().unwrap();
    hzjdbc_cmd(&dir)
        .arg("properties")
        .assert()
        .success()
        .stdout(predicate::str::contains("clusterName"))
        .stdout(predicate::str::contains("discoverToken"))
        .stdout(predicate::str::contains("awsUsePublicIp"))
        .stdout(predicate::str::contains("33 properties recognised"));
}

#[test]
fn test_invalid_property_argument() {
    let dir = TempDir::new().unwrap();
    hzjdbc_cmd(&dir)
        .args(["resolve", "jdbc:hazelcast://node1", "-p", "novalue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
}
