//! Startup orchestration.
//!
//! # Responsibilities
//! - Resolve configuration from defaults, environment and flags
//! - Install the logger for the resolved debug level
//! - Build the service and hand it to the coordinator
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The log guard lives for the whole routine so every return path flushes

use crate::config::{self, Config, FlagOverrides};
use crate::error::Error;
use crate::lifecycle::coordinator::Coordinator;
use crate::lifecycle::signals::OsSignals;
use crate::observability;
use crate::service::{Service, ServiceError};

/// Run the process until an orderly shutdown or a fatal error.
///
/// `build` is the service constructor; it receives the resolved
/// configuration, which is never mutated afterwards.
pub async fn run<S, F>(flags: FlagOverrides, build: F) -> Result<(), Error>
where
    S: Service,
    F: FnOnce(&Config) -> Result<S, ServiceError>,
{
    let config = config::resolve(flags)?;
    let _guard = observability::init_logging(config.debug)?;

    tracing::info!(
        version = %config.version,
        debug = config.debug,
        server_host = %config.server_host,
        server_port = config.server_port,
        "configuration loaded"
    );

    let service = build(&config).map_err(|e| {
        tracing::error!(error = %e, "otlpinf start up error");
        Error::ServiceInit(e)
    })?;

    let signals = OsSignals::install().map_err(|e| {
        tracing::error!(error = %e, "failed to install signal handlers");
        Error::SignalInstall(e)
    })?;

    Coordinator::new(service).run(signals).await?;

    tracing::debug!("shutdown complete");
    Ok(())
}
