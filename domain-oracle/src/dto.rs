//! Wire-contract types for the query endpoint.
//!
//! The JSON shape is consumed by the order-intake UI and uses camelCase
//! keys. Tri-state probe signals flatten to `{registered: bool}` or `null`;
//! a structurally absent WHOIS probe also serializes as `null`.

use domain_oracle_lib::{DnsRecordType, DomainReport, Registration};
use serde::Serialize;

/// Message for syntactically invalid input (400).
pub const MSG_INVALID_FORMAT: &str = "Format domain tidak valid";

/// Message for a totally inconclusive lookup (502).
pub const MSG_INCONCLUSIVE: &str = "Tidak dapat memeriksa domain saat ini. Silakan coba lagi.";

/// Source tag for validation rejections.
pub const SOURCE_VALIDATION: &str = "validation";

/// Source tag for the inconclusive error path.
pub const SOURCE_ERROR: &str = "error";

/// Body of every `/domains/check` response, success or failure.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub domain: String,
    pub available: bool,
    /// Joined provenance trail, or "validation"/"error" on failure paths.
    pub source: String,
    pub message: String,
    /// Per-probe detail; absent on failure paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<ChecksDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecksDto {
    pub dns: DnsCheckDto,
    /// `null` when RDAP was inconclusive.
    pub rdap: Option<RegistrationDto>,
    /// `null` when the WHOIS probe is disabled or was inconclusive.
    pub whois: Option<RegistrationDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsCheckDto {
    pub has_records: bool,
    pub record_types: Vec<DnsRecordType>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDto {
    pub registered: bool,
}

impl CheckResponse {
    /// Compose the 200 body from a settled lookup.
    pub fn from_report(report: &DomainReport) -> Self {
        Self {
            domain: report.verdict.domain.clone(),
            available: report.verdict.available,
            source: report.verdict.sources.join(", "),
            message: report.verdict.message.clone(),
            checks: Some(ChecksDto {
                dns: DnsCheckDto {
                    has_records: report.dns.exists(),
                    record_types: report.dns.record_types.clone(),
                },
                rdap: registration_dto(Some(report.rdap)),
                whois: registration_dto(report.whois),
            }),
        }
    }

    /// The 400 body for syntactically invalid input.
    pub fn invalid(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            available: false,
            source: SOURCE_VALIDATION.to_string(),
            message: MSG_INVALID_FORMAT.to_string(),
            checks: None,
        }
    }

    /// The 502 body for a lookup with no usable signal at all.
    pub fn inconclusive(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            available: false,
            source: SOURCE_ERROR.to_string(),
            message: MSG_INCONCLUSIVE.to_string(),
            checks: None,
        }
    }
}

fn registration_dto(registration: Option<Registration>) -> Option<RegistrationDto> {
    registration
        .and_then(Registration::as_bool)
        .map(|registered| RegistrationDto { registered })
}

/// Body of `/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
