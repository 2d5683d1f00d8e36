//! Shared utilities for lifecycle and process tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use otlpinf::{RootContext, Service, ServiceError};

/// What the recording service observed, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start,
    Stop { ctx_cancelled: bool },
    StopReturned,
}

/// How `start` behaves.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub enum StartMode {
    /// Return `Ok` right away.
    Immediate,
    /// Return an error right away.
    Fail,
    /// Run until the root context is cancelled.
    UntilCancelled,
    /// Cancel the root context itself, as a service that gives up would.
    CancelRoot,
}

/// A service that records every lifecycle call it receives.
pub struct RecordingService {
    mode: StartMode,
    stop_delay: Duration,
    events: Mutex<Vec<Event>>,
}

#[allow(dead_code)]
impl RecordingService {
    pub fn new(mode: StartMode) -> Self {
        Self {
            mode,
            stop_delay: Duration::ZERO,
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn with_stop_delay(mut self, delay: Duration) -> Self {
        self.stop_delay = delay;
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn stop_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Stop { .. }))
            .count()
    }

    fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl Service for RecordingService {
    async fn start(&self, ctx: &RootContext) -> Result<(), ServiceError> {
        self.record(Event::Start);
        match self.mode {
            StartMode::Immediate => Ok(()),
            StartMode::Fail => Err(ServiceError::Other("listener refused".into())),
            StartMode::UntilCancelled => {
                ctx.cancelled().await;
                Ok(())
            }
            StartMode::CancelRoot => {
                ctx.cancel();
                Ok(())
            }
        }
    }

    async fn stop(&self, ctx: &RootContext) {
        self.record(Event::Stop {
            ctx_cancelled: ctx.is_cancelled(),
        });
        if !self.stop_delay.is_zero() {
            tokio::time::sleep(self.stop_delay).await;
        }
        self.record(Event::StopReturned);
    }
}
