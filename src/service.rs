//! Contract between the lifecycle coordinator and the service it drives.

use async_trait::async_trait;

use crate::lifecycle::RootContext;

/// Errors a service reports while being built or started.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("server port {0} is out of range")]
    InvalidPort(u64),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

/// A long-running component whose lifecycle is driven by the coordinator.
///
/// `start` may return as soon as the service is up or run until told to stop.
/// `stop` is best effort; it always receives a context that has not been
/// cancelled yet.
#[async_trait]
pub trait Service: Send + Sync + 'static {
    async fn start(&self, ctx: &RootContext) -> Result<(), ServiceError>;

    async fn stop(&self, ctx: &RootContext);
}
