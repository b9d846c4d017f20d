//! Error handling for the domain-registration oracle.
//!
//! The probes deliberately have no failure mode of their own: transport
//! errors degrade to inconclusive signals inside each probe. The errors
//! defined here cover the remaining surface, which is invalid input,
//! configuration problems, and client construction at startup.

use std::fmt;

/// Main error type for oracle operations.
#[derive(Debug, Clone)]
pub enum DomainOracleError {
    /// Invalid domain name format. The only error a lookup can return.
    InvalidDomain { domain: String, reason: String },

    /// Network client construction failures (TLS setup, etc.).
    Network {
        message: String,
        source: Option<String>,
    },

    /// Configuration errors (invalid settings, unreadable config file).
    Config { message: String },

    /// Generic internal errors that don't fit other categories.
    Internal { message: String },
}

impl DomainOracleError {
    /// Create a new invalid domain error.
    pub fn invalid_domain<D: Into<String>, R: Into<String>>(domain: D, reason: R) -> Self {
        Self::InvalidDomain {
            domain: domain.into(),
            reason: reason.into(),
        }
    }

    /// Create a new network error.
    pub fn network<M: Into<String>>(message: M) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new network error with source information.
    pub fn network_with_source<M: Into<String>, S: Into<String>>(message: M, source: S) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a new configuration error.
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new internal error.
    pub fn internal<M: Into<String>>(message: M) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl fmt::Display for DomainOracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain { domain, reason } => {
                write!(f, "Invalid domain '{}': {}", domain, reason)
            }
            Self::Network { message, source } => {
                if let Some(source) = source {
                    write!(f, "Network error: {} (source: {})", message, source)
                } else {
                    write!(f, "Network error: {}", message)
                }
            }
            Self::Config { message } => {
                write!(f, "Configuration error: {}", message)
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for DomainOracleError {}

impl From<reqwest::Error> for DomainOracleError {
    fn from(err: reqwest::Error) -> Self {
        Self::network_with_source("HTTP client error", err.to_string())
    }
}

impl From<std::io::Error> for DomainOracleError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal {
            message: format!("I/O error: {}", err),
        }
    }
}
