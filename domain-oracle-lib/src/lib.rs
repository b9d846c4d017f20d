//! # Domain Oracle Library
//!
//! A stateless domain-registration oracle: given a candidate domain name,
//! decide whether it is already registered by concurrently consulting three
//! heterogeneous signal sources — DNS records, the RDAP protocol, and an
//! optional commercial WHOIS availability API — and reconciling them into a
//! single deterministic verdict with a provenance trail.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use domain_oracle_lib::{DomainOracle, OracleConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = OracleConfig::default();
//!     let oracle = DomainOracle::new(&config)?;
//!
//!     let report = oracle.check("example.com").await?;
//!     println!("{} - available: {}", report.verdict.domain, report.verdict.available);
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! - **Probes never fail**: each probe converts its own timeouts and
//!   transport errors into an inconclusive signal, so the concurrent join
//!   never fails as a whole.
//! - **Tri-state signals**: RDAP and WHOIS opinions are an explicit
//!   `Registration` enum, never a nullable bool.
//! - **Structural feature flag**: a missing or placeholder WHOIS API key
//!   means the WHOIS probe does not exist, rather than always answering
//!   "unknown".
//! - **No state**: no caching, no retries, no persistence; every lookup is
//!   independent.

// Re-export main public API types and functions
pub use config::{OracleConfig, WhoisApiKey, DEFAULT_BIND_ADDR, DEFAULT_RDAP_BASE_URL, DEFAULT_WHOIS_API_URL};
pub use decision::decide;
pub use error::DomainOracleError;
pub use oracle::DomainOracle;
pub use probes::{DnsProbe, DnsProber, RdapProbe, RdapProber, WhoisApiProbe, WhoisProber};
pub use types::{DnsRecordType, DnsSignal, DomainQuery, DomainReport, Registration, Verdict};

// Public modules
pub mod probes;

// Internal modules
mod config;
mod decision;
mod error;
mod oracle;
mod types;

/// Type alias for convenience
pub type Result<T> = std::result::Result<T, DomainOracleError>;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
