//! HTTP boundary for the orchestrator.
//!
//! | Route | Purpose |
//! |---|---|
//! | `POST /api/translate` | translate `{ text, sourceLang, targetLang }` |
//! | `GET /api/languages` | language table for pickers |
//! | `GET /health` | liveness probe |

mod error;
mod routes;
mod state;

pub use error::{ErrorResponse, ServerError, status_for};
pub use state::ServerState;

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::translation::Orchestrator;

/// Builds the application router.
///
/// An empty `cors_origins` list allows any origin.
pub fn router(orchestrator: Orchestrator, cors_origins: &[String]) -> Result<Router, ServerError> {
    let allow_origin = if cors_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins = cors_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ServerError::InvalidOrigin {
                    origin: origin.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any);

    let state = Arc::new(ServerState::new(orchestrator));

    Ok(Router::new()
        .route("/api/translate", post(routes::translate_handler))
        .route("/api/languages", get(routes::languages_handler))
        .route("/health", get(routes::health_handler))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Serves the router on an already-bound listener until ctrl-c.
pub async fn serve_on(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

/// Binds `addr` and serves the translation API.
pub async fn serve(
    orchestrator: Orchestrator,
    addr: SocketAddr,
    cors_origins: &[String],
) -> Result<(), ServerError> {
    let providers = orchestrator.provider_names().join(" -> ");
    let app = router(orchestrator, cors_origins)?;

    info!(%addr, "Binding HTTP server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, chain = %providers, "HTTP server ready to accept connections");

    serve_on(listener, app).await
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(detail, "Request handler panicked");
    error::internal_error_response()
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(%err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down HTTP server");
}
