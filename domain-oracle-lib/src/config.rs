//! Configuration loading and management.
//!
//! Settings come from an optional TOML file merged with `DO_*` environment
//! variables; environment values win. Configuration is read once at startup
//! and threaded through as an immutable `OracleConfig`.
//!
//! The WHOIS API key is the one piece of configuration with semantics beyond
//! a plain value: its absence (or a known placeholder) disables the WHOIS
//! probe structurally, so "not configured" is never confused with
//! "configured but inconclusive".

use crate::error::DomainOracleError;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default RDAP bootstrap aggregator.
pub const DEFAULT_RDAP_BASE_URL: &str = "https://rdap.org/domain";

/// Default commercial WHOIS availability API.
pub const DEFAULT_WHOIS_API_URL: &str = "https://domain-availability.whoisxmlapi.com/api/v1";

/// Default bind address for the HTTP service.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

const DEFAULT_RDAP_TIMEOUT_SECS: u64 = 5;
const DEFAULT_WHOIS_TIMEOUT_SECS: u64 = 8;

/// Placeholder values that mean "no key configured". Deploy templates ship
/// with these literals, so they must not enable the probe.
const PLACEHOLDER_KEYS: [&str; 3] = ["YOUR_API_KEY", "your_api_key_here", "changeme"];

/// A WHOIS API key known to be non-empty and non-placeholder.
#[derive(Clone, PartialEq, Eq)]
pub struct WhoisApiKey(String);

impl WhoisApiKey {
    /// Accept a configured value, rejecting empty strings and known
    /// placeholder literals.
    pub fn from_env_value(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() || PLACEHOLDER_KEYS.contains(&value) {
            return None;
        }
        Some(Self(value.to_string()))
    }

    /// The raw key, for building the API request.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keys must never end up in logs via {:?}.
impl fmt::Debug for WhoisApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WhoisApiKey(****)")
    }
}

/// Runtime configuration for the oracle and its HTTP service.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// Address the HTTP service binds to.
    pub bind_addr: String,

    /// Base URL of the RDAP bootstrap aggregator.
    pub rdap_base_url: String,

    /// Timeout for the single RDAP request.
    pub rdap_timeout: Duration,

    /// Base URL of the commercial WHOIS availability API.
    pub whois_api_url: String,

    /// Timeout for the single WHOIS API request.
    pub whois_timeout: Duration,

    /// API key for the WHOIS probe; `None` disables the probe entirely.
    pub whois_api_key: Option<WhoisApiKey>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            rdap_base_url: DEFAULT_RDAP_BASE_URL.to_string(),
            rdap_timeout: Duration::from_secs(DEFAULT_RDAP_TIMEOUT_SECS),
            whois_api_url: DEFAULT_WHOIS_API_URL.to_string(),
            whois_timeout: Duration::from_secs(DEFAULT_WHOIS_TIMEOUT_SECS),
            whois_api_key: None,
        }
    }
}

impl OracleConfig {
    /// Load configuration with full precedence: defaults, then an optional
    /// TOML file, then `DO_*` environment variables.
    ///
    /// When `path` is `None`, `./domain-oracle.toml` is used if it exists.
    ///
    /// # Errors
    ///
    /// Returns `DomainOracleError::Config` if an explicitly named file is
    /// missing or unparseable, or a timeout value is zero.
    pub fn from_sources(path: Option<&Path>) -> Result<Self, DomainOracleError> {
        let mut config = Self::default();

        match path {
            Some(path) => config.apply_file(&FileConfig::load(path)?),
            None => {
                let default_path = Path::new("./domain-oracle.toml");
                if default_path.exists() {
                    config.apply_file(&FileConfig::load(default_path)?);
                }
            }
        }

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self, file: &FileConfig) {
        if let Some(server) = &file.server {
            if let Some(bind) = &server.bind_addr {
                self.bind_addr = bind.clone();
            }
        }
        if let Some(probes) = &file.probes {
            if let Some(url) = &probes.rdap_base_url {
                self.rdap_base_url = url.clone();
            }
            if let Some(secs) = probes.rdap_timeout_secs {
                self.rdap_timeout = Duration::from_secs(secs);
            }
            if let Some(url) = &probes.whois_api_url {
                self.whois_api_url = url.clone();
            }
            if let Some(secs) = probes.whois_timeout_secs {
                self.whois_timeout = Duration::from_secs(secs);
            }
            if let Some(key) = &probes.whois_api_key {
                self.whois_api_key = WhoisApiKey::from_env_value(key);
            }
        }
    }

    fn apply_env(&mut self) -> Result<(), DomainOracleError> {
        if let Ok(bind) = env::var("DO_BIND_ADDR") {
            if !bind.trim().is_empty() {
                self.bind_addr = bind.trim().to_string();
            }
        }

        if let Ok(url) = env::var("DO_RDAP_URL") {
            if !url.trim().is_empty() {
                self.rdap_base_url = url.trim().to_string();
            }
        }

        if let Some(secs) = parse_env_secs("DO_RDAP_TIMEOUT")? {
            self.rdap_timeout = Duration::from_secs(secs);
        }

        if let Ok(url) = env::var("DO_WHOIS_URL") {
            if !url.trim().is_empty() {
                self.whois_api_url = url.trim().to_string();
            }
        }

        if let Some(secs) = parse_env_secs("DO_WHOIS_TIMEOUT")? {
            self.whois_timeout = Duration::from_secs(secs);
        }

        if let Ok(key) = env::var("DO_WHOIS_API_KEY") {
            self.whois_api_key = WhoisApiKey::from_env_value(&key);
        }

        Ok(())
    }

    fn validate(&self) -> Result<(), DomainOracleError> {
        if self.rdap_timeout.is_zero() || self.whois_timeout.is_zero() {
            return Err(DomainOracleError::config(
                "probe timeouts must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Whether the WHOIS probe will participate in lookups.
    pub fn whois_enabled(&self) -> bool {
        self.whois_api_key.is_some()
    }
}

/// Parse a `DO_*` variable holding a number of seconds.
fn parse_env_secs(name: &str) -> Result<Option<u64>, DomainOracleError> {
    match env::var(name) {
        Ok(value) => value.trim().parse::<u64>().map(Some).map_err(|_| {
            DomainOracleError::config(format!(
                "invalid {}='{}', expected a number of seconds",
                name, value
            ))
        }),
        Err(_) => Ok(None),
    }
}

/// Structure of the optional TOML configuration file.
#[derive(Debug, Clone, Deserialize, Default)]
struct FileConfig {
    server: Option<ServerSection>,
    probes: Option<ProbesSection>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct ServerSection {
    bind_addr: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct ProbesSection {
    rdap_base_url: Option<String>,
    rdap_timeout_secs: Option<u64>,
    whois_api_url: Option<String>,
    whois_timeout_secs: Option<u64>,
    whois_api_key: Option<String>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, DomainOracleError> {
        let content = fs::read_to_string(path).map_err(|e| {
            DomainOracleError::config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            DomainOracleError::config(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
