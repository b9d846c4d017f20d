//! Main oracle implementation.
//!
//! `DomainOracle` orchestrates one availability lookup: validate the input,
//! fan out the configured probes concurrently, wait for all of them to
//! settle, and hand the signals to the decision engine. The oracle owns no
//! state across requests and performs no retries; each probe is attempted
//! exactly once per lookup and bounds its own latency internally.

use crate::config::OracleConfig;
use crate::decision::decide;
use crate::error::DomainOracleError;
use crate::probes::{DnsProbe, DnsProber, RdapProbe, RdapProber, WhoisApiProbe, WhoisProber};
use crate::types::{DomainQuery, DomainReport};
use std::sync::Arc;
use tracing::debug;

/// The domain-registration oracle.
///
/// Holds the three probes behind trait objects so callers (and tests) can
/// substitute implementations. The WHOIS probe is structurally absent when
/// no API key is configured.
///
/// # Example
///
/// ```rust,no_run
/// use domain_oracle_lib::{DomainOracle, OracleConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let oracle = DomainOracle::new(&OracleConfig::default())?;
///     let report = oracle.check("example.com").await?;
///     println!("{}: available={}", report.verdict.domain, report.verdict.available);
///     Ok(())
/// }
/// ```
pub struct DomainOracle {
    dns: Arc<dyn DnsProber>,
    rdap: Arc<dyn RdapProber>,
    whois: Option<Arc<dyn WhoisProber>>,
}

impl DomainOracle {
    /// Wire up the real probes from configuration.
    ///
    /// # Errors
    ///
    /// Returns `DomainOracleError::Network` if an HTTP client cannot be
    /// constructed.
    pub fn new(config: &OracleConfig) -> Result<Self, DomainOracleError> {
        let dns = Arc::new(DnsProbe::from_system_conf());
        let rdap = Arc::new(RdapProbe::new(&config.rdap_base_url, config.rdap_timeout)?);

        let whois: Option<Arc<dyn WhoisProber>> = match &config.whois_api_key {
            Some(key) => Some(Arc::new(WhoisApiProbe::new(
                &config.whois_api_url,
                key.clone(),
                config.whois_timeout,
            )?)),
            None => None,
        };

        Ok(Self {
            dns,
            rdap,
            whois,
        })
    }

    /// Build an oracle from explicit probes. This is the seam integration
    /// tests use to substitute deterministic probes.
    pub fn with_probes(
        dns: Arc<dyn DnsProber>,
        rdap: Arc<dyn RdapProber>,
        whois: Option<Arc<dyn WhoisProber>>,
    ) -> Self {
        Self { dns, rdap, whois }
    }

    /// Whether the WHOIS probe participates in lookups.
    pub fn whois_enabled(&self) -> bool {
        self.whois.is_some()
    }

    /// Check whether a candidate domain is already registered.
    ///
    /// Validates the raw input, then runs all configured probes
    /// concurrently and waits for every one of them to settle; no probe's
    /// failure cancels the others, and none of them can fail the join.
    ///
    /// # Errors
    ///
    /// Only `DomainOracleError::InvalidDomain`: probe-level problems are
    /// absorbed into the signals, never surfaced here.
    pub async fn check(&self, raw: &str) -> Result<DomainReport, DomainOracleError> {
        let domain = DomainQuery::parse(raw)?;
        debug!(domain = %domain, whois_enabled = self.whois_enabled(), "starting availability lookup");

        let whois_probe = async {
            match &self.whois {
                Some(probe) => Some(probe.probe(&domain).await),
                None => None,
            }
        };

        let (dns, rdap, whois) = tokio::join!(
            self.dns.probe(&domain),
            self.rdap.probe(&domain),
            whois_probe,
        );

        let verdict = decide(&domain, &dns, rdap, whois);
        debug!(
            domain = %domain,
            available = verdict.available,
            sources = ?verdict.sources,
            "lookup settled"
        );

        Ok(DomainReport {
            verdict,
            dns,
            rdap,
            whois,
        })
    }
}
