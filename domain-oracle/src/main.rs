//! Domain Oracle service binary.
//!
//! Loads configuration (TOML file plus `DO_*` environment variables), wires
//! the real probes, and serves the query endpoint until ctrl-c.

use clap::Parser;
use domain_oracle::{create_router, AppState};
use domain_oracle_lib::{DomainOracle, OracleConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "domain-oracle")]
#[command(version)]
#[command(about = "Domain-registration oracle HTTP service")]
struct Cli {
    /// Configuration file path (default: ./domain-oracle.toml if present)
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Bind address, e.g. 127.0.0.1:8080
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log filter (trace, debug, info, warn, error, or an EnvFilter directive)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging(cli.log_level.as_deref());

    let mut config = OracleConfig::from_sources(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    info!(
        version = domain_oracle_lib::VERSION,
        bind = %config.bind_addr,
        whois_enabled = config.whois_enabled(),
        "starting domain oracle"
    );

    let oracle = Arc::new(DomainOracle::new(&config)?);
    let app = create_router(AppState { oracle });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("domain oracle stopped");
    Ok(())
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
