//! Crate-level error type returned by the run routine.

use crate::config::ConfigError;
use crate::lifecycle::LifecycleError;
use crate::service::ServiceError;

/// Every failure that ends the process with a non-zero status.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Raised before the logger exists; the caller reports it on stderr.
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to install logger: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("otlpinf start up error: {0}")]
    ServiceInit(#[source] ServiceError),

    #[error("failed to install signal handlers: {0}")]
    SignalInstall(#[source] std::io::Error),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

impl Error {
    /// Whether the message must go to stderr because no logger was installed.
    pub fn before_logger(&self) -> bool {
        matches!(self, Error::Config(_) | Error::Logging(_))
    }
}
