//! Request handlers for the query endpoint.
//!
//! State machine per request: validate, then fan out the probes and wait for
//! all of them, then decide, then respond. Validation failures respond 400
//! without touching the network; a lookup with no usable signal at all
//! responds 502. The latter guard is kept for contract fidelity even though
//! the DNS probe's unconditional participation makes it unreachable in
//! practice: an empty DNS signal is itself recorded as a source.

use crate::dto::{CheckResponse, HealthResponse};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
pub struct CheckParams {
    pub domain: String,
}

/// GET /domains/check?domain=<string>
pub async fn check_domain(
    State(state): State<AppState>,
    Query(params): Query<CheckParams>,
) -> (StatusCode, Json<CheckResponse>) {
    match state.oracle.check(&params.domain).await {
        Ok(report) => {
            if report.verdict.sources.is_empty() {
                warn!(domain = %report.verdict.domain, "no probe produced a usable signal");
                return (
                    StatusCode::BAD_GATEWAY,
                    Json(CheckResponse::inconclusive(&report.verdict.domain)),
                );
            }

            info!(
                domain = %report.verdict.domain,
                available = report.verdict.available,
                source = %report.verdict.sources.join(", "),
                "availability check settled"
            );
            (StatusCode::OK, Json(CheckResponse::from_report(&report)))
        }
        Err(e) => {
            debug!(input = %params.domain, error = %e, "rejected invalid domain");
            (
                StatusCode::BAD_REQUEST,
                Json(CheckResponse::invalid(params.domain.trim())),
            )
        }
    }
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: domain_oracle_lib::VERSION,
    })
}
