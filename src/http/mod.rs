//! Built-in status API.
//!
//! # Responsibilities
//! - Serve `GET /api/v1/status` on the configured host and port
//! - Implement the [`Service`](crate::service::Service) contract so the
//!   coordinator can start and stop it
//!
//! # Design Decisions
//! - Binding happens in `start`, so a bad address fails startup
//! - `stop` triggers axum graceful shutdown and waits for it to drain

pub mod server;

pub use server::{AppState, StatusResponse, StatusServer};
