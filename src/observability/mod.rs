//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing macros with structured fields
//!     → logging.rs (JSON records on stdout)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Minimum level comes from the resolved `debug` flag, not RUST_LOG
//! - The subscriber is process-wide; a guard flushes stdout on every exit path

pub mod logging;

pub use logging::{build_subscriber, init_logging, level_for, LogGuard};
