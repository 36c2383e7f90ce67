pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod operations;
pub mod routes;

use axum::{middleware::from_fn, routing::get, Router};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::{Config, Runtime};
use crate::error::AppError;
use crate::middleware::trace_requests;
use crate::operations::Operation;
use crate::routes::{division, multiplication};

/// Builds the router for one service. Each call returns an independent app.
pub fn create_app(operation: Operation) -> Router {
    let router = match operation {
        Operation::Division => Router::new().route("/", get(division::handler)),
        Operation::Multiplication => Router::new().route("/", get(multiplication::handler)),
    };
    router.layer(from_fn(trace_requests))
}

/// Serves `app` on an already bound listener until Ctrl-C or SIGTERM.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Serve)
}

pub async fn run_app(operation: Operation, config: Config) -> Result<(), AppError> {
    let app = create_app(operation);

    match config.runtime {
        Runtime::Http => {
            let addr = config.socket_addr();
            let listener = TcpListener::bind(addr)
                .await
                .map_err(|source| AppError::Bind { addr, source })?;
            info!(
                service = operation.service_name(),
                environment = %config.environment,
                %addr,
                "Listening"
            );
            serve(listener, app).await?;
            info!(service = operation.service_name(), "Shut down");
            Ok(())
        }
        Runtime::Lambda => {
            info!(
                service = operation.service_name(),
                environment = %config.environment,
                "Starting lambda runtime"
            );
            lambda_http::run(app).await.map_err(AppError::Lambda)
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
