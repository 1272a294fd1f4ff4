//! # paybot-health
//!
//! Minimal liveness endpoint: every GET, on any path, gets `200 OK` with a plain-text `OK` body.
//! Runs on a background task next to the bot's polling loop. No per-request logging.

use std::net::{Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use axum::{
    http::{header, Method, StatusCode},
    response::IntoResponse,
    Router,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

/// Default port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8000;

/// Fixed health response body.
pub const HEALTH_BODY: &str = "OK";

const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

/// Router with a single fallback: GET (and HEAD) on any path is healthy, other methods get 405.
pub fn health_router() -> Router {
    Router::new().fallback(health_check)
}

async fn health_check(method: Method) -> impl IntoResponse {
    if method == Method::GET || method == Method::HEAD {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, CONTENT_TYPE_TEXT)],
            HEALTH_BODY,
        )
            .into_response()
    } else {
        StatusCode::METHOD_NOT_ALLOWED.into_response()
    }
}

/// Serves the health router on an already bound listener until the process exits.
pub async fn serve(listener: TcpListener) -> Result<()> {
    axum::serve(listener, health_router())
        .await
        .context("health server stopped")
}

/// Binds `0.0.0.0:<port>`.
pub async fn bind(port: u16) -> Result<TcpListener> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind health listener on {}", addr))
}

/// Spawns the health listener on a background task. Bind and serve errors are logged and end the task; they never reach the caller.
#[instrument]
pub fn spawn_health_server(port: u16) -> JoinHandle<()> {
    tokio::spawn(async move {
        let listener = match bind(port).await {
            Ok(listener) => listener,
            Err(e) => {
                error!(port = port, error = %format!("{:#}", e), "Health server failed to start");
                return;
            }
        };
        info!(port = port, "Health server listening");

        if let Err(e) = serve(listener).await {
            error!(port = port, error = %format!("{:#}", e), "Health server failed");
        }
    })
}

