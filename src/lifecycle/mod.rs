//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Resolve config → Build logger → Build service → Coordinator
//!
//! Coordinator (coordinator.rs):
//!     Spawn watcher → Start service → Wait on completion signal
//!
//! Watcher:
//!     SIGINT/SIGTERM → Stop service → Cancel root context
//!     Root context cancelled → Write completion signal → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, nothing is retried
//! - Stop always sees a live root context; cancellation comes last
//! - No shutdown deadline: a hung stop hangs the process

pub mod context;
pub mod coordinator;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use context::RootContext;
pub use coordinator::{Coordinator, LifecycleError, MAIN_ROUTINE};
pub use shutdown::{completion, Completion, CompletionWaiter};
pub use signals::{ChannelSignals, OsSignals, SignalSource, TerminationSignal};
