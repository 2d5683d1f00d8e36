//! OpenTelemetry Infinity process runner.
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI flags ──┐
//!   env vars ───┼─▶ config (resolve) ─▶ Config ─┬─▶ observability (JSON logger)
//!   defaults ───┘                               └─▶ service constructor
//!                                                        │
//!                                                        ▼
//!                          ┌──────────────── lifecycle ─────────────────┐
//!                          │  Coordinator ── start ──▶ Service           │
//!                          │      │                                      │
//!                          │  watcher: SIGINT/SIGTERM ─▶ stop ─▶ cancel  │
//!                          │           cancelled ─▶ completion signal    │
//!                          └─────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod service;

pub use config::Config;
pub use error::Error;
pub use http::StatusServer;
pub use lifecycle::{Coordinator, RootContext};
pub use service::{Service, ServiceError};
