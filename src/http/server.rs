//! HTTP server setup and the status handler.

use std::future::IntoFuture;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use async_trait::async_trait;
use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::lifecycle::RootContext;
use crate::service::{Service, ServiceError};

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub version: String,
    pub debug: bool,
    pub started: Instant,
}

/// Body of `GET /api/v1/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub version: String,
    pub debug: bool,
    pub uptime_seconds: u64,
}

struct Running {
    shutdown: CancellationToken,
    task: JoinHandle<std::io::Result<()>>,
}

/// Status API served until the coordinator stops it.
pub struct StatusServer {
    host: String,
    port: u16,
    state: AppState,
    running: Mutex<Option<Running>>,
}

impl StatusServer {
    /// Build the server from the resolved configuration.
    pub fn new(config: &Config) -> Result<Self, ServiceError> {
        let port = u16::try_from(config.server_port)
            .map_err(|_| ServiceError::InvalidPort(config.server_port))?;

        Ok(Self {
            host: config.server_host.clone(),
            port,
            state: AppState {
                version: config.version.clone(),
                debug: config.debug,
                started: Instant::now(),
            },
            running: Mutex::new(None),
        })
    }

    /// Build the Axum router with its middleware layers.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/api/v1/status", get(status_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[async_trait]
impl Service for StatusServer {
    async fn start(&self, ctx: &RootContext) -> Result<(), ServiceError> {
        let bind_error = |source: std::io::Error| ServiceError::Bind {
            address: self.address(),
            source,
        };

        let listener = TcpListener::bind((self.host.as_str(), self.port))
            .await
            .map_err(bind_error)?;
        let local_addr = listener.local_addr().map_err(bind_error)?;

        // A child of the root context also ends the server if the root is
        // cancelled without going through stop.
        let shutdown = ctx.token().child_token();
        let router = Self::router(self.state.clone());
        let task = tokio::spawn(
            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown.clone().cancelled_owned())
                .into_future(),
        );

        tracing::info!(address = %local_addr, "status API listening");

        let previous = self
            .running
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(Running { shutdown, task });
        if let Some(previous) = previous {
            previous.shutdown.cancel();
        }

        Ok(())
    }

    async fn stop(&self, ctx: &RootContext) {
        let running = self
            .running
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        let Some(running) = running else {
            tracing::debug!(routine = ctx.routine(), "status API not running");
            return;
        };

        running.shutdown.cancel();
        match running.task.await {
            Ok(Ok(())) => tracing::info!("status API stopped"),
            Ok(Err(e)) => tracing::error!(error = %e, "status API exited with error"),
            Err(e) => tracing::error!(error = %e, "status API task failed"),
        }
    }
}

async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        version: state.version,
        debug: state.debug,
        uptime_seconds: state.started.elapsed().as_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[test]
    fn test_rejects_port_out_of_range() {
        let config = Config {
            server_port: 70_000,
            ..Config::default()
        };
        assert!(matches!(
            StatusServer::new(&config),
            Err(ServiceError::InvalidPort(70_000))
        ));
    }

    #[tokio::test]
    async fn test_status_route() {
        let state = AppState {
            version: "1.2.3".into(),
            debug: true,
            started: Instant::now(),
        };
        let response = StatusServer::router(state)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let status: StatusResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(status.version, "1.2.3");
        assert!(status.debug);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let state = AppState {
            version: "1.2.3".into(),
            debug: false,
            started: Instant::now(),
        };
        let response = StatusServer::router(state)
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
