//! HTTP surface of the domain-registration oracle.
//!
//! The endpoint is intentionally thin: validate, fan out the probes (both
//! handled by `domain-oracle-lib`), and serialize the verdict into the wire
//! contract the order-intake UI consumes.

pub mod dto;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
