use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, http::StatusCode, response::IntoResponse};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use crate::config::{Config, ConfigError};
use crate::middleware::{SharedCors, cors_middleware};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Wraps every route of `delegate`, including its fallback, with the CORS
/// decorator.
pub fn app(cors: SharedCors, delegate: Router) -> Router {
    delegate.layer(axum::middleware::from_fn_with_state(cors, cors_middleware))
}

/// Stand-in delegate for the binary: every request is answered `404`.
pub fn placeholder_delegate() -> Router {
    Router::new().fallback(not_found)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "not found")
}

pub async fn serve(config: &Config, delegate: Router) -> Result<(), ServerError> {
    let cors = Arc::new(config.cors()?);
    let addr = config.bind_addr()?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!(
        %addr,
        preset = %config.preset,
        allow_origin = %config.allow_origin,
        "CORS edge listening"
    );

    axum::serve(listener, app(cors, delegate))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("CORS edge stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(%err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Ctrl+C received, starting graceful shutdown");
        },
        _ = terminate => {
            info!("SIGTERM received, starting graceful shutdown");
        },
    }
}
