//! OS signal handling.
//!
//! # Responsibilities
//! - Register handlers for SIGINT and SIGTERM
//! - Translate them into [`TerminationSignal`] events for the watcher
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - SIGKILL is not registered: the kernel never delivers it to a handler
//! - Sources are a trait so the watcher can be driven without real signals

use std::fmt;
use std::io;

use async_trait::async_trait;
use tokio::sync::mpsc;

/// A request from outside the process to shut down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for TerminationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationSignal::Interrupt => write!(f, "SIGINT"),
            TerminationSignal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// Something the watcher can wait on for termination requests.
#[async_trait]
pub trait SignalSource: Send + 'static {
    /// Wait for the next signal. `None` means no more signals will arrive.
    async fn recv(&mut self) -> Option<TerminationSignal>;
}

/// Termination signals delivered by the operating system.
pub struct OsSignals {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
}

impl OsSignals {
    /// Register the handlers. Must be called from within a Tokio runtime.
    #[cfg(unix)]
    pub fn install() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    #[cfg(not(unix))]
    pub fn install() -> io::Result<Self> {
        Ok(Self {})
    }

    #[cfg(unix)]
    async fn next(&mut self) -> Option<TerminationSignal> {
        tokio::select! {
            Some(()) = self.interrupt.recv() => Some(TerminationSignal::Interrupt),
            Some(()) = self.terminate.recv() => Some(TerminationSignal::Terminate),
            else => None,
        }
    }

    #[cfg(not(unix))]
    async fn next(&mut self) -> Option<TerminationSignal> {
        tokio::signal::ctrl_c()
            .await
            .ok()
            .map(|()| TerminationSignal::Interrupt)
    }
}

#[async_trait]
impl SignalSource for OsSignals {
    async fn recv(&mut self) -> Option<TerminationSignal> {
        self.next().await
    }
}

/// Signals fed through a channel, for driving the watcher in-process.
pub struct ChannelSignals {
    rx: mpsc::UnboundedReceiver<TerminationSignal>,
}

impl ChannelSignals {
    pub fn new() -> (mpsc::UnboundedSender<TerminationSignal>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }
}

#[async_trait]
impl SignalSource for ChannelSignals {
    async fn recv(&mut self) -> Option<TerminationSignal> {
        self.rx.recv().await
    }
}
