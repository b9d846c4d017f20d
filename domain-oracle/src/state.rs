use domain_oracle_lib::DomainOracle;
use std::sync::Arc;

/// Shared state for the HTTP handlers: just the oracle, which is itself
/// stateless across requests.
#[derive(Clone)]
pub struct AppState {
    pub oracle: Arc<DomainOracle>,
}
