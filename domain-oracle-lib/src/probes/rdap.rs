//! RDAP (Registration Data Access Protocol) probe.
//!
//! Issues a single HTTPS GET against a public RDAP bootstrap aggregator,
//! which fronts the per-registry RDAP servers. RDAP semantics make the
//! status code the whole answer: 200 means a registration record exists,
//! 404 means the registry has none. Everything else is no opinion.

use crate::error::DomainOracleError;
use crate::probes::RdapProber;
use crate::types::{DomainQuery, Registration};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

const RDAP_ACCEPT: &str = "application/rdap+json";

/// RDAP probe backed by an HTTPS client with a per-request timeout.
pub struct RdapProbe {
    http_client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl RdapProbe {
    /// Create a probe for the given aggregator base URL
    /// (e.g. `https://rdap.org/domain`).
    ///
    /// # Errors
    ///
    /// Returns `DomainOracleError::Network` if the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainOracleError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainOracleError::network_with_source(
                    "failed to create RDAP HTTP client",
                    e.to_string(),
                )
            })?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }
}

#[async_trait]
impl RdapProber for RdapProbe {
    async fn probe(&self, domain: &DomainQuery) -> Registration {
        let url = format!("{}/{}", self.base_url, domain.as_str());

        let request = self
            .http_client
            .get(&url)
            .header(ACCEPT, RDAP_ACCEPT)
            .send();

        match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(response)) => {
                let registration = registration_from_status(response.status());
                debug!(domain = %domain, status = %response.status(), ?registration, "RDAP probe settled");
                registration
            }
            Ok(Err(e)) => {
                debug!(domain = %domain, error = %e, "RDAP request failed");
                Registration::Unknown
            }
            Err(_) => {
                debug!(domain = %domain, timeout = ?self.timeout, "RDAP request timed out");
                Registration::Unknown
            }
        }
    }
}

/// Map an RDAP aggregator status code onto a registration signal.
///
/// 200 means a registration record exists; 404 means the aggregator has no
/// record, which per RDAP semantics means the domain is unregistered. Any
/// other status (rate limiting, upstream errors, redirect loops) carries no
/// usable information.
pub(crate) fn registration_from_status(status: StatusCode) -> Registration {
    match status {
        StatusCode::OK => Registration::Registered,
        StatusCode::NOT_FOUND => Registration::Unregistered,
        _ => Registration::Unknown,
    }
}
