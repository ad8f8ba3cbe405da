//! Probing real TCP endpoints.

use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

use reachability_probe::probe::{
    probe, ConnectionString, ProbeConfig, ProbeResult, ProbeTarget, Prober,
};
use reachability_probe::UnreachableReason;

mod common;

fn target_for(addr: std::net::SocketAddr) -> ProbeTarget {
    ProbeTarget::new(addr.ip().to_string(), addr.port()).unwrap()
}

#[tokio::test]
async fn test_reaches_live_listener() {
    let (addr, accepted) = common::start_listener().await;
    let config = ProbeConfig::new(1000, 1000).unwrap();

    let started = Instant::now();
    let result = probe(&target_for(addr), &config).await;

    assert_eq!(result, ProbeResult::Reached);
    assert!(started.elapsed() < config.connect_timeout());

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(accepted.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_probe_is_idempotent() {
    let (addr, _) = common::start_listener().await;
    let target = target_for(addr);
    let config = ProbeConfig::new(1000, 1000).unwrap();

    assert_eq!(probe(&target, &config).await, ProbeResult::Reached);
    assert_eq!(probe(&target, &config).await, ProbeResult::Reached);
}

#[tokio::test]
async fn test_no_listener_is_unreachable_within_budget() {
    let addr = common::closed_port().await;
    let config = ProbeConfig::new(1000, 1000).unwrap();

    let started = Instant::now();
    let result = probe(&target_for(addr), &config).await;
    let elapsed = started.elapsed();

    assert!(
        matches!(
            result,
            ProbeResult::Unreachable(UnreachableReason::Refused | UnreachableReason::Timeout)
        ),
        "unexpected result: {:?}",
        result
    );
    assert!(elapsed < config.deadline() + Duration::from_millis(500));
}

#[tokio::test]
async fn test_localhost_resolution() {
    let (addr, _) = common::start_listener().await;
    let target = ProbeTarget::new("localhost", addr.port()).unwrap();
    let config = ProbeConfig::new(1000, 2000).unwrap();

    // localhost may resolve to ::1 first; the IPv4 listener is still found.
    assert_eq!(probe(&target, &config).await, ProbeResult::Reached);
}

#[tokio::test]
async fn test_padded_host_still_resolves() {
    let (addr, _) = common::start_listener().await;
    let target = ProbeTarget::new(" localhost ", addr.port()).unwrap();
    let config = ProbeConfig::new(1000, 2000).unwrap();

    assert_eq!(probe(&target, &config).await, ProbeResult::Reached);
}

#[tokio::test]
async fn test_unresolvable_host_is_other() {
    let target = ProbeTarget::new("does-not-exist.invalid", 27017).unwrap();
    let config = ProbeConfig::new(1000, 3000).unwrap();

    let result = probe(&target, &config).await;
    assert!(
        matches!(
            result,
            ProbeResult::Unreachable(UnreachableReason::Other(_) | UnreachableReason::Timeout)
        ),
        "unexpected result: {:?}",
        result
    );
}

#[tokio::test]
async fn test_concurrent_probes_are_isolated() {
    let (live, accepted) = common::start_listener().await;
    let dead = common::closed_port().await;
    let config = ProbeConfig::new(1000, 1000).unwrap();

    let plan = vec![
        (target_for(live), config),
        (target_for(dead), config),
        (target_for(live), config),
    ];
    let reports = Prober::new().probe_all(&plan).await;

    assert!(reports[0].result.is_reached());
    assert!(!reports[1].result.is_reached());
    assert!(reports[2].result.is_reached());
    assert_eq!(reports[1].target.port(), dead.port());

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(accepted.load(Ordering::SeqCst), 2);
}

/// Connection string of the second scenario: nothing listens on 27018.
#[tokio::test]
async fn test_connection_string_scenario_without_instance() {
    let cs: ConnectionString =
        "mongodb://localhost:27018/?useNewUrlParser=true&useUnifiedTopology=true&connectTimeoutMS=1000&serverSelectionTimeoutMS=1000"
            .parse()
            .unwrap();
    let config = cs.probe_config(&ProbeConfig::default()).unwrap();
    assert_eq!(config.deadline(), Duration::from_millis(1000));

    let started = Instant::now();
    let result = probe(cs.target(), &config).await;

    if std::net::TcpStream::connect(("127.0.0.1", 27018)).is_ok() {
        // Something really is listening on 27018 on this machine.
        return;
    }
    assert!(!result.is_reached());
    assert!(started.elapsed() < Duration::from_millis(1500));
}

/// Requires a MongoDB (or any TCP listener) on MONGODB_HOST:MONGODB_PORT,
/// defaulting to localhost:27017.
#[tokio::test]
#[ignore]
async fn test_connects_to_configured_instance() {
    let host = std::env::var("MONGODB_HOST").unwrap_or_else(|_| "localhost".into());
    let port = std::env::var("MONGODB_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(27017);

    let target = ProbeTarget::new(host, port).unwrap();
    let result = probe(&target, &ProbeConfig::default()).await;
    assert_eq!(result, ProbeResult::Reached);
}
