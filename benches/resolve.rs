//! Benchmarks for URL parsing and configuration resolution.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hazelcast_jdbc::prelude::*;
use std::hint::black_box;

const STATIC_URL: &str = "jdbc:hazelcast://node1:5701?clusterName=prod";
const CLOUD_URL: &str = "jdbc:hazelcast://prod?discoverToken=ABC123";
const TLS_URL: &str = "jdbc:hazelcast://node1:5701?clusterName=prod&sslEnabled=true\
    &trustStore=%2Fetc%2Fhz%2Fts.jks&trustStorePassword=p%40ss&protocol=TLSv1.3";
const DISCOVERY_URL: &str = "jdbc:hazelcast://node1?awsRegion=eu-west-1&awsTagKey=role\
    &awsTagValue=hz&awsUsePublicIp=true&gcpProjects=a,b&k8sServiceDns=hz.svc";

const NO_INFO: [(&str, &str); 0] = [];

/// Benchmark URL parsing.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, url) in [
        ("static", STATIC_URL),
        ("cloud", CLOUD_URL),
        ("tls", TLS_URL),
        ("discovery", DISCOVERY_URL),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), url, |b, url| {
            b.iter(|| black_box(ConnectionUrl::parse(black_box(url))))
        });
    }

    group.bench_function("foreign_scheme", |b| {
        b.iter(|| black_box(ConnectionUrl::parse(black_box("jdbc:postgresql://localhost/db"))))
    });

    group.finish();
}

/// Benchmark full resolution through the driver.
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let driver = Driver::new();

    for (name, url) in [
        ("static", STATIC_URL),
        ("cloud", CLOUD_URL),
        ("tls", TLS_URL),
        ("discovery", DISCOVERY_URL),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), url, |b, url| {
            b.iter(|| black_box(driver.client_config(Some(black_box(url)), NO_INFO)))
        });
    }

    group.bench_function("with_property_bag", |b| {
        b.iter(|| {
            black_box(driver.client_config(
                Some(STATIC_URL),
                [("user", "alice"), ("password", "secret"), ("awsRegion", "us-east-1")],
            ))
        })
    });

    group.finish();
}

/// Benchmark resolution against a TOML baseline.
fn bench_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("baseline");

    let baseline = TomlBaseline::from_toml(
        r#"
        cluster_name = "base"

        [properties]
        "hazelcast.client.heartbeat.interval" = "5000"
        "hazelcast.client.statistics.enabled" = "true"
        "#,
    )
    .expect("valid baseline");
    let driver = Driver::with_baseline(baseline);

    group.bench_function("resolve_static", |b| {
        b.iter(|| black_box(driver.client_config(Some(black_box(STATIC_URL)), NO_INFO)))
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_resolve, bench_baseline);
criterion_main!(benches);
