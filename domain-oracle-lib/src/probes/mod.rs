//! Probe implementations for the three registration signal sources.
//!
//! Each probe is infallible by contract: timeouts, transport errors, and
//! unexpected responses degrade to the probe's inconclusive value instead of
//! propagating. The traits below are the seams the oracle fans out over,
//! which is also what lets tests substitute deterministic probes.

use crate::types::{DnsSignal, DomainQuery, Registration};
use async_trait::async_trait;

/// DNS record resolution probe
pub mod dns;

/// RDAP (Registration Data Access Protocol) probe
pub mod rdap;

/// Commercial WHOIS availability API probe
pub mod whois;

pub use dns::DnsProbe;
pub use rdap::RdapProbe;
pub use whois::WhoisApiProbe;

/// Resolves DNS records for a candidate domain.
#[async_trait]
pub trait DnsProber: Send + Sync {
    /// Never fails: record types that could not be resolved simply do not
    /// appear in the signal.
    async fn probe(&self, domain: &DomainQuery) -> DnsSignal;
}

/// Queries an RDAP aggregator for a registration record.
#[async_trait]
pub trait RdapProber: Send + Sync {
    /// Never fails: transport problems yield `Registration::Unknown`.
    async fn probe(&self, domain: &DomainQuery) -> Registration;
}

/// Queries a commercial WHOIS availability API.
#[async_trait]
pub trait WhoisProber: Send + Sync {
    /// Never fails: transport problems yield `Registration::Unknown`.
    async fn probe(&self, domain: &DomainQuery) -> Registration;
}
