//! Commercial WHOIS availability API probe.
//!
//! The raw WHOIS protocol is unstructured text that varies per registry;
//! this probe instead talks to a commercial HTTP wrapper (WhoisXML-style
//! domain-availability endpoint) that collapses the answer into an
//! `AVAILABLE` / `UNAVAILABLE` field. The probe only exists when a real API
//! key is configured, so a disabled probe is structurally absent rather than
//! perpetually inconclusive.

use crate::config::WhoisApiKey;
use crate::error::DomainOracleError;
use crate::probes::WhoisProber;
use crate::types::{DomainQuery, Registration};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// WHOIS availability probe backed by a commercial HTTP API.
pub struct WhoisApiProbe {
    http_client: reqwest::Client,
    api_url: String,
    api_key: WhoisApiKey,
    timeout: Duration,
}

impl WhoisApiProbe {
    /// Create a probe for the given API base URL and key.
    ///
    /// # Errors
    ///
    /// Returns `DomainOracleError::Network` if the HTTP client cannot be
    /// constructed.
    pub fn new(
        api_url: &str,
        api_key: WhoisApiKey,
        timeout: Duration,
    ) -> Result<Self, DomainOracleError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainOracleError::network_with_source(
                    "failed to create WHOIS HTTP client",
                    e.to_string(),
                )
            })?;

        Ok(Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            timeout,
        })
    }
}

#[async_trait]
impl WhoisProber for WhoisApiProbe {
    async fn probe(&self, domain: &DomainQuery) -> Registration {
        let request = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("domainName", domain.as_str()),
                ("outputFormat", "JSON"),
            ])
            .send();

        let response = match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                debug!(domain = %domain, error = %e, "WHOIS API request failed");
                return Registration::Unknown;
            }
            Err(_) => {
                debug!(domain = %domain, timeout = ?self.timeout, "WHOIS API request timed out");
                return Registration::Unknown;
            }
        };

        if !response.status().is_success() {
            debug!(domain = %domain, status = %response.status(), "WHOIS API returned error status");
            return Registration::Unknown;
        }

        match response.json::<serde_json::Value>().await {
            Ok(body) => {
                let registration = registration_from_availability(&body);
                debug!(domain = %domain, ?registration, "WHOIS probe settled");
                registration
            }
            Err(e) => {
                debug!(domain = %domain, error = %e, "WHOIS API returned malformed JSON");
                Registration::Unknown
            }
        }
    }
}

/// Interpret the availability field of a WHOIS API response body.
///
/// The field lives at `DomainInfo.domainAvailability` in the WhoisXML
/// response shape; a top-level `domainAvailability` is accepted as well.
/// Anything other than the two documented values is no opinion.
pub(crate) fn registration_from_availability(body: &serde_json::Value) -> Registration {
    let availability = body
        .pointer("/DomainInfo/domainAvailability")
        .or_else(|| body.get("domainAvailability"))
        .and_then(|v| v.as_str());

    match availability {
        Some("AVAILABLE") => Registration::Unregistered,
        Some("UNAVAILABLE") => Registration::Registered,
        _ => Registration::Unknown,
    }
}
