//! The reachability prober.
//!
//! # Responsibilities
//! - Resolve the target and attempt a TCP connection per address
//! - Enforce the per-attempt connect timeout and the overall deadline
//! - Classify failures and release the socket as soon as it connects
//!
//! # Design Decisions
//! - Addresses are tried in resolution order; the first success wins
//! - When every attempt fails, the last failure is reported
//! - Hitting the overall deadline is always a timeout
//! - Uses Tokio's timeout facilities; dropping the future cancels cleanly

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Instant;

use futures_util::future::join_all;
use tokio::net::{lookup_host, TcpStream};
use tokio::time;
use tracing::Instrument;

use crate::observability::metrics;
use crate::probe::id::ProbeId;
use crate::probe::options::ProbeConfig;
use crate::probe::report::ProbeReport;
use crate::probe::result::{ProbeResult, UnreachableReason};
use crate::probe::target::ProbeTarget;

/// Transport used by the prober to resolve and connect.
pub trait Connector: Send + Sync {
    /// Connected stream, dropped as soon as it is obtained.
    type Stream: Send;

    fn resolve(
        &self,
        host: &str,
        port: u16,
    ) -> impl Future<Output = io::Result<Vec<SocketAddr>>> + Send;

    fn connect(&self, addr: SocketAddr) -> impl Future<Output = io::Result<Self::Stream>> + Send;
}

/// Plain TCP over Tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnector;

impl Connector for TcpConnector {
    type Stream = TcpStream;

    async fn resolve(&self, host: &str, port: u16) -> io::Result<Vec<SocketAddr>> {
        Ok(lookup_host((host, port)).await?.collect())
    }

    async fn connect(&self, addr: SocketAddr) -> io::Result<TcpStream> {
        TcpStream::connect(addr).await
    }
}

/// Probes targets through a [`Connector`].
///
/// Holds no per-probe state, so one prober can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Prober<C = TcpConnector> {
    connector: C,
}

impl Prober<TcpConnector> {
    pub fn new() -> Self {
        Self {
            connector: TcpConnector,
        }
    }
}

impl<C: Connector> Prober<C> {
    pub fn with_connector(connector: C) -> Self {
        Self { connector }
    }

    /// Probe `target` once.
    ///
    /// Returns within `config.deadline()` no matter how many addresses the
    /// target resolves to.
    pub async fn probe(&self, target: &ProbeTarget, config: &ProbeConfig) -> ProbeResult {
        match time::timeout(config.deadline(), self.attempt(target, config)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::debug!(
                    deadline_ms = config.deadline().as_millis() as u64,
                    "Probe deadline elapsed"
                );
                ProbeResult::Unreachable(UnreachableReason::Timeout)
            }
        }
    }

    /// Probe `target` under a fresh [`ProbeId`], recording logs and metrics.
    pub async fn run(&self, target: &ProbeTarget, config: &ProbeConfig) -> ProbeReport {
        let id = ProbeId::new();
        let span = tracing::info_span!("probe", id = %id, target = %target);

        async {
            let started = Instant::now();
            let result = self.probe(target, config).await;
            let elapsed = started.elapsed();

            metrics::record_probe(&result, elapsed);

            match &result {
                ProbeResult::Reached => tracing::info!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Target reached"
                ),
                ProbeResult::Unreachable(reason) => tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    reason = %reason,
                    "Target unreachable"
                ),
            }

            ProbeReport {
                id,
                target: target.clone(),
                result,
                elapsed,
            }
        }
        .instrument(span)
        .await
    }

    /// Probe every target concurrently. Reports keep the input order.
    pub async fn probe_all(&self, plan: &[(ProbeTarget, ProbeConfig)]) -> Vec<ProbeReport> {
        join_all(plan.iter().map(|(target, config)| self.run(target, config))).await
    }

    async fn attempt(&self, target: &ProbeTarget, config: &ProbeConfig) -> ProbeResult {
        let addrs = match self.connector.resolve(target.host(), target.port()).await {
            Ok(addrs) if !addrs.is_empty() => addrs,
            Ok(_) => {
                return ProbeResult::Unreachable(UnreachableReason::Other(format!(
                    "{} resolved to no addresses",
                    target.host()
                )))
            }
            Err(e) => {
                tracing::debug!(error = %e, "Name resolution failed");
                return ProbeResult::Unreachable(UnreachableReason::Other(format!(
                    "failed to resolve {}: {}",
                    target.host(),
                    e
                )));
            }
        };

        let mut last_failure = UnreachableReason::Timeout;
        for addr in addrs {
            match time::timeout(config.connect_timeout(), self.connector.connect(addr)).await {
                Ok(Ok(stream)) => {
                    drop(stream);
                    tracing::debug!(addr = %addr, "Connection established");
                    return ProbeResult::Reached;
                }
                Ok(Err(e)) => {
                    tracing::debug!(addr = %addr, error = %e, "Connection attempt failed");
                    last_failure = UnreachableReason::from(&e);
                }
                Err(_) => {
                    tracing::debug!(addr = %addr, "Connection attempt timed out");
                    last_failure = UnreachableReason::Timeout;
                }
            }
        }

        ProbeResult::Unreachable(last_failure)
    }
}
