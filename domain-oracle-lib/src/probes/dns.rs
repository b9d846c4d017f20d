//! DNS probe against the system resolver.
//!
//! Resolves five record types (A, AAAA, MX, NS, SOA) for the candidate
//! domain, all in parallel. A domain with an SOA or NS record is delegated
//! even when it serves no A or MX records, so checking all five types gives
//! the strongest registration signal DNS can offer. Per-type failures
//! (NXDOMAIN, timeout, unsupported type) contribute nothing; they never fail
//! the probe as a whole.

use crate::probes::DnsProber;
use crate::types::{DnsRecordType, DnsSignal, DomainQuery};
use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;
use tracing::{debug, warn};

/// DNS probe backed by `hickory-resolver` on the system configuration.
pub struct DnsProbe {
    /// `None` when the system resolver configuration could not be read;
    /// the probe then degrades to an empty signal.
    resolver: Option<TokioAsyncResolver>,
}

impl DnsProbe {
    /// Create a probe using the system resolver configuration
    /// (`/etc/resolv.conf` on Unix).
    pub fn from_system_conf() -> Self {
        match TokioAsyncResolver::tokio_from_system_conf() {
            Ok(resolver) => Self {
                resolver: Some(resolver),
            },
            Err(e) => {
                warn!(error = %e, "system resolver unavailable, DNS probe will report no records");
                Self { resolver: None }
            }
        }
    }

    /// Create a probe around an existing resolver.
    pub fn with_resolver(resolver: TokioAsyncResolver) -> Self {
        Self {
            resolver: Some(resolver),
        }
    }
}

#[async_trait]
impl DnsProber for DnsProbe {
    async fn probe(&self, domain: &DomainQuery) -> DnsSignal {
        let Some(resolver) = &self.resolver else {
            return DnsSignal::empty();
        };

        // Trailing dot: query the name as-is, never through search domains.
        let fqdn = format!("{}.", domain.as_str());

        let (a, aaaa, mx, ns, soa) = tokio::join!(
            resolver.ipv4_lookup(fqdn.as_str()),
            resolver.ipv6_lookup(fqdn.as_str()),
            resolver.mx_lookup(fqdn.as_str()),
            resolver.ns_lookup(fqdn.as_str()),
            resolver.soa_lookup(fqdn.as_str()),
        );

        let mut record_types = Vec::new();
        if a.map(|l| l.iter().next().is_some()).unwrap_or(false) {
            record_types.push(DnsRecordType::A);
        }
        if aaaa.map(|l| l.iter().next().is_some()).unwrap_or(false) {
            record_types.push(DnsRecordType::Aaaa);
        }
        if mx.map(|l| l.iter().next().is_some()).unwrap_or(false) {
            record_types.push(DnsRecordType::Mx);
        }
        if ns.map(|l| l.iter().next().is_some()).unwrap_or(false) {
            record_types.push(DnsRecordType::Ns);
        }
        if soa.map(|l| l.iter().next().is_some()).unwrap_or(false) {
            record_types.push(DnsRecordType::Soa);
        }

        debug!(domain = %domain, record_types = ?record_types, "DNS probe settled");
        DnsSignal::with_records(record_types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_probe_without_resolver_reports_no_records() {
        let probe = DnsProbe { resolver: None };
        let domain = DomainQuery::parse("example.com").unwrap();
        let signal = probe.probe(&domain).await;
        assert!(!signal.exists());
        assert!(signal.record_types.is_empty());
    }
}
