//! Start/stop/signal synchronization around a [`Service`].

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::lifecycle::context::RootContext;
use crate::lifecycle::shutdown::{completion, Completion};
use crate::lifecycle::signals::SignalSource;
use crate::service::{Service, ServiceError};

/// Routine tag carried by the root context.
pub const MAIN_ROUTINE: &str = "mainRoutine";

/// Error type for the lifecycle coordinator.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("otlpinf startup error: {0}")]
    Start(#[source] ServiceError),

    #[error("signal watcher exited before shutdown completed")]
    WatcherLost,
}

/// Drives a service from start to an orderly stop.
pub struct Coordinator<S> {
    service: Arc<S>,
    ctx: RootContext,
}

impl<S: Service> Coordinator<S> {
    pub fn new(service: S) -> Self {
        Self {
            service: Arc::new(service),
            ctx: RootContext::new(MAIN_ROUTINE),
        }
    }

    /// The root context lent to the service and the watcher.
    pub fn context(&self) -> &RootContext {
        &self.ctx
    }

    /// Start the service and block until shutdown has fully completed.
    ///
    /// Returns once the watcher has written the completion signal, or
    /// immediately if `start` fails. A failed start never calls `stop`.
    pub async fn run<Sig: SignalSource>(self, signals: Sig) -> Result<(), LifecycleError> {
        let (done, waiter) = completion();
        let watcher = self.spawn_watcher(signals, done);

        let span = self.ctx.span().clone();
        if let Err(e) = self.service.start(&self.ctx).instrument(span).await {
            tracing::error!(error = %e, "otlpinf startup error");
            watcher.abort();
            return Err(LifecycleError::Start(e));
        }
        self.ctx.span().in_scope(|| tracing::debug!("service started"));

        if waiter.wait().await {
            Ok(())
        } else {
            tracing::error!("signal watcher exited before shutdown completed");
            Err(LifecycleError::WatcherLost)
        }
    }

    fn spawn_watcher<Sig: SignalSource>(&self, signals: Sig, done: Completion) -> JoinHandle<()> {
        let span = self.ctx.span().clone();
        tokio::spawn(
            watch(signals, self.service.clone(), self.ctx.clone(), done).instrument(span),
        )
    }
}

/// Wait for a termination signal or for the root context to be cancelled.
///
/// A signal stops the service and then cancels the context. Cancellation,
/// whoever caused it, writes the completion signal and ends the watcher.
async fn watch<S, Sig>(mut signals: Sig, service: Arc<S>, ctx: RootContext, done: Completion)
where
    S: Service,
    Sig: SignalSource,
{
    let mut listening = true;

    loop {
        tokio::select! {
            // Cancellation wins over queued signals so stop runs once.
            biased;

            _ = ctx.cancelled() => {
                tracing::warn!(routine = ctx.routine(), "root context cancelled");
                done.notify();
                return;
            }
            signal = signals.recv(), if listening => match signal {
                Some(signal) => {
                    tracing::warn!(%signal, "stop signal received, stopping otlpinf");
                    service.stop(&ctx).await;
                    ctx.cancel();
                }
                None => listening = false,
            },
        }
    }
}
