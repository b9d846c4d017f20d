//! Core data types for the domain-registration oracle.
//!
//! This module defines the main data structures used throughout the library:
//! the validated domain query, the per-probe signals, and the reconciled
//! verdict.

use crate::error::DomainOracleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum total length of a hostname, per RFC 1035.
const MAX_DOMAIN_LEN: usize = 253;

/// Maximum length of a single label.
const MAX_LABEL_LEN: usize = 63;

/// A validated, normalized domain name.
///
/// Construction is the validation: `DomainQuery::parse` trims and lower-cases
/// the raw input and rejects anything that does not match the hostname
/// grammar. A `DomainQuery` is immutable once constructed, so every probe can
/// assume it holds a syntactically valid domain.
///
/// # Example
///
/// ```rust
/// use domain_oracle_lib::DomainQuery;
///
/// let query = DomainQuery::parse("  Example.COM ").unwrap();
/// assert_eq!(query.as_str(), "example.com");
/// assert!(DomainQuery::parse("-bad.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainQuery(String);

impl DomainQuery {
    /// Validate and normalize a raw domain string.
    ///
    /// Accepted grammar: one or more labels separated by dots, each label
    /// ASCII alphanumeric with optional internal hyphens, at least one dot,
    /// and a final label (TLD) of at least two alphabetic characters.
    ///
    /// # Errors
    ///
    /// Returns `DomainOracleError::InvalidDomain` with the failing reason.
    pub fn parse(raw: &str) -> Result<Self, DomainOracleError> {
        let normalized = raw.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(DomainOracleError::invalid_domain(
                raw,
                "domain must not be empty",
            ));
        }

        if normalized.len() > MAX_DOMAIN_LEN {
            return Err(DomainOracleError::invalid_domain(
                raw,
                "domain exceeds 253 characters",
            ));
        }

        let labels: Vec<&str> = normalized.split('.').collect();
        if labels.len() < 2 {
            return Err(DomainOracleError::invalid_domain(
                raw,
                "domain must contain at least one dot",
            ));
        }

        for label in &labels {
            if !is_valid_label(label) {
                return Err(DomainOracleError::invalid_domain(
                    raw,
                    format!("invalid label '{}'", label),
                ));
            }
        }

        // Last label is the TLD: at least two characters, letters only.
        let tld = labels[labels.len() - 1];
        if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainOracleError::invalid_domain(
                raw,
                format!("invalid TLD '{}'", tld),
            ));
        }

        Ok(Self(normalized))
    }

    /// The normalized domain string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the query and return the normalized domain string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DomainQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate a single domain label (between dots).
fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// DNS record types the DNS probe resolves.
///
/// SOA and NS presence is the strongest signal that a domain is delegated
/// even when it has no A or MX records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DnsRecordType {
    A,
    #[serde(rename = "AAAA")]
    Aaaa,
    #[serde(rename = "MX")]
    Mx,
    #[serde(rename = "NS")]
    Ns,
    #[serde(rename = "SOA")]
    Soa,
}

impl fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsRecordType::A => write!(f, "A"),
            DnsRecordType::Aaaa => write!(f, "AAAA"),
            DnsRecordType::Mx => write!(f, "MX"),
            DnsRecordType::Ns => write!(f, "NS"),
            DnsRecordType::Soa => write!(f, "SOA"),
        }
    }
}

/// Result of the DNS probe: which record types resolved with at least one
/// value.
///
/// Invariant: the domain "exists" in DNS exactly when `record_types` is
/// non-empty, so `exists()` is derived rather than stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSignal {
    /// Record types that resolved successfully, in probe order
    /// (A, AAAA, MX, NS, SOA).
    pub record_types: Vec<DnsRecordType>,
}

impl DnsSignal {
    /// A signal with no resolved record types.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A signal listing the record types that resolved.
    pub fn with_records(record_types: Vec<DnsRecordType>) -> Self {
        Self { record_types }
    }

    /// Whether any of the five record types resolved.
    pub fn exists(&self) -> bool {
        !self.record_types.is_empty()
    }
}

/// One probe's opinion about a domain's registration status.
///
/// RDAP and the WHOIS API produce the same tri-state shape. `Unknown` covers
/// every transport failure, timeout, and unexpected response; it never
/// overrides positive evidence from another probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Registration {
    /// The source returned a definitive found-record response.
    Registered,
    /// The source returned a definitive not-found response.
    Unregistered,
    /// The source errored, timed out, or answered something else.
    Unknown,
}

impl Registration {
    /// Definitive boolean view, `None` when inconclusive.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Registration::Registered => Some(true),
            Registration::Unregistered => Some(false),
            Registration::Unknown => None,
        }
    }
}

/// The reconciled availability verdict plus its provenance trail.
///
/// Created per request and discarded after the response; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    /// The normalized domain the verdict is about.
    pub domain: String,
    /// Whether the domain appears available for registration.
    pub available: bool,
    /// Which probes contributed evidence, in precedence order.
    pub sources: Vec<String>,
    /// Human-readable justification.
    pub message: String,
}

/// Everything the oracle learned about one domain: the verdict plus the raw
/// per-probe signals, so callers can expose the full provenance.
#[derive(Debug, Clone)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub dns: DnsSignal,
    pub rdap: Registration,
    /// `None` when the WHOIS probe is not configured, as opposed to
    /// `Some(Unknown)` when it ran but was inconclusive.
    pub whois: Option<Registration>,
}
